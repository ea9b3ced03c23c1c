/// An error type for the camera module.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum CameraError {
    /// Error when a sensor dimension is not a positive finite number.
    #[error("Sensor dimension must be positive, got {0} mm")]
    InvalidSensorDimension(f64),

    /// Error when the focal distance is not a positive finite number.
    #[error("Focal distance must be positive, got {0} mm")]
    InvalidFocalDistance(f64),

    /// Error when a sensor resolution is zero.
    #[error("Sensor resolution must be positive, got {0} px")]
    InvalidResolution(u32),

    /// Error when the view frustum does not meet the ground plane in a trapezoid.
    ///
    /// This happens when `pitch - vFOV/2 <= -π/2` or `pitch + vFOV/2 >= π/2`.
    #[error("Pitch {pitch} rad with vertical FOV {vertical_fov} rad gives a degenerate ground projection")]
    DegenerateProjection {
        /// Camera pitch in radians.
        pitch: f64,
        /// Vertical field of view in radians.
        vertical_fov: f64,
    },
}
