use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

/// A point in world space, in meters.
///
/// Planar points live on the ground plane and have `z == 0`. The type is a
/// plain value: every transform returns a new coordinate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// x coordinate
    pub x: f64,
    /// y coordinate
    pub y: f64,
    /// z coordinate (height above the ground plane)
    #[serde(default)]
    pub z: f64,
}

impl Coordinate {
    /// The origin of the world frame.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Alias of [`Coordinate::ZERO`].
    pub const ORIGIN: Self = Self::ZERO;

    /// Unit vector along the vertical axis.
    pub const UP: Self = Self::new(0.0, 0.0, 1.0);

    /// Create a new coordinate from its three components.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Create a planar coordinate, with `z` set to zero.
    pub const fn from_xy(x: f64, y: f64) -> Self {
        Self::new(x, y, 0.0)
    }

    /// Add the x and y components of `other`, keeping this coordinate's z.
    pub fn add_xy(&self, other: &Coordinate) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z)
    }

    /// Component-wise sum of both coordinates.
    pub fn add_xyz(&self, other: &Coordinate) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }

    /// Multiply every component by `value`.
    pub fn scale(&self, value: f64) -> Self {
        Self::new(self.x * value, self.y * value, self.z * value)
    }

    /// Euclidean distance between both coordinates projected on the ground plane.
    pub fn xy_distance(&self, other: &Coordinate) -> f64 {
        self.to_dvec2().distance(other.to_dvec2())
    }

    /// Euclidean distance between both coordinates in 3D.
    pub fn xyz_distance(&self, other: &Coordinate) -> f64 {
        self.to_dvec3().distance(other.to_dvec3())
    }

    /// The planar part of the coordinate as a glam vector.
    #[inline]
    pub fn to_dvec2(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    /// The coordinate as a glam vector.
    #[inline]
    pub fn to_dvec3(&self) -> DVec3 {
        DVec3::new(self.x, self.y, self.z)
    }
}

impl From<DVec2> for Coordinate {
    fn from(v: DVec2) -> Self {
        Self::from_xy(v.x, v.y)
    }
}

impl From<DVec3> for Coordinate {
    fn from(v: DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<[f64; 3]> for Coordinate {
    fn from(array: [f64; 3]) -> Self {
        Self::new(array[0], array[1], array[2])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_xy_has_zero_height() {
        let c = Coordinate::from_xy(1.0, 2.0);
        assert_eq!(c, Coordinate::new(1.0, 2.0, 0.0));
    }

    #[test]
    fn test_add_xy_keeps_height() {
        let a = Coordinate::new(1.0, 2.0, 5.0);
        let b = Coordinate::new(3.0, 4.0, 7.0);
        assert_eq!(a.add_xy(&b), Coordinate::new(4.0, 6.0, 5.0));
        assert_eq!(a.add_xyz(&b), Coordinate::new(4.0, 6.0, 12.0));
    }

    #[test]
    fn test_distances() {
        let a = Coordinate::new(0.0, 0.0, 0.0);
        let b = Coordinate::new(3.0, 4.0, 12.0);
        assert_relative_eq!(a.xy_distance(&b), 5.0);
        assert_relative_eq!(a.xyz_distance(&b), 13.0);
    }

    #[test]
    fn test_glam_conversions() {
        let c = Coordinate::new(1.0, -2.0, 3.0);
        assert_eq!(Coordinate::from(c.to_dvec3()), c);
        assert_eq!(Coordinate::from(c.to_dvec2()), Coordinate::from_xy(1.0, -2.0));
        assert_eq!(c.scale(2.0), Coordinate::from([2.0, -4.0, 6.0]));
    }

    #[test]
    fn test_deserialize_defaults_height() -> Result<(), Box<dyn std::error::Error>> {
        let c: Coordinate = serde_json::from_str(r#"{"x": 1.5, "y": 2.5}"#)?;
        assert_eq!(c, Coordinate::from_xy(1.5, 2.5));
        Ok(())
    }
}
