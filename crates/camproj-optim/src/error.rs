use camproj_camera::CameraError;
use camproj_geometry::GeometryError;
use thiserror::Error;

/// Error types for the pose optimizers.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum OptimizeError {
    /// Error coming from the camera model.
    #[error(transparent)]
    Camera(#[from] CameraError),

    /// Error coming from the geometry primitives.
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// The search step is not a positive finite angle.
    #[error("Search step must be a positive angle, got {0} rad")]
    InvalidStep(f64),

    /// No positive mounting height produces the requested footprint.
    #[error("No feasible mounting height, solved for {0} m")]
    NoFeasibleHeight(f64),

    /// The target ground sampling distance is not a positive finite number.
    #[error("Target GSD must be positive, got {0} m/px")]
    InvalidTargetGsd(f64),

    /// Neither the optimizer nor the camera provides a target ground sampling distance.
    #[error("No target GSD given and the camera has none configured")]
    MissingTargetGsd,

    /// The minimum pitch is negative or points the far edge of the view above the horizon.
    #[error("Minimum pitch must lie in [0, {max_pitch}) rad, got {min_pitch} rad")]
    InvalidMinPitch {
        /// Requested minimum pitch.
        min_pitch: f64,
        /// Pitch at which the far edge of the view reaches the horizon.
        max_pitch: f64,
    },

    /// The environment has no field to optimize for.
    #[error("The environment has no field")]
    MissingField,

    /// The field has no area, so its diagonals are undefined.
    #[error("Field of {width} x {height} m has no area")]
    DegenerateField {
        /// Field extent along x.
        width: f64,
        /// Field extent along y.
        height: f64,
    },
}
