use camproj_geometry::Coordinate;

/// Ground footprint of a camera.
///
/// The four corners are ordered near-left, far-left, far-right, near-right as
/// seen from the camera, so consecutive corners form the edges of the
/// trapezoid. All corners lie on the ground plane (`z == 0`).
pub type CameraProjection = [Coordinate; 4];

/// Distances describing the projected trapezoid in the camera's local frame.
///
/// Offsets are measured along the camera's forward axis from the foot of the
/// camera, half widths perpendicular to it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrapezoidDistances {
    /// Ground offset of the near edge.
    pub near_offset: f64,
    /// Ground offset of the far edge.
    pub far_offset: f64,
    /// Half of the length of the near edge.
    pub near_half_width: f64,
    /// Half of the length of the far edge.
    pub far_half_width: f64,
}

impl TrapezoidDistances {
    /// Area of the trapezoid as `½·(a + b)·h`, in square meters.
    pub fn area(&self) -> f64 {
        let a = 2.0 * self.far_half_width;
        let b = 2.0 * self.near_half_width;
        let h = self.far_offset - self.near_offset;
        0.5 * (a + b) * h
    }

    /// Length of the trapezoid along the camera's forward axis.
    pub fn length(&self) -> f64 {
        self.far_offset - self.near_offset
    }
}
