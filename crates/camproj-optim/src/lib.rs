#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # Camproj Optim
//!
//! Strategies choosing the yaw, pitch and mounting height of a camera on a
//! pole so its ground footprint covers a field.
//!
//! ## Strategies
//!
//! - **Far corner**: aim at the farthest field corner.
//! - **Angle bisector**: bisect the angle the field subtends and solve for the
//!   mounting height whose footprint matches the depth of the field.
//! - **Exhaustive search**: grid search over yaw and pitch, a slow reference.
//! - **Pitch and search**: ternary search over the yaw between the field bounds.
//! - **Target GSD**: mount and pitch for a target ground sampling distance.
//!
//! The [`Environment`] spreads the yaws of several cameras around a field.
//!
//! ## Example
//!
//! ```rust
//! use camproj_camera::{Camera, CameraProperties, Pole};
//! use camproj_field::Field;
//! use camproj_geometry::Coordinate;
//! use camproj_optim::{optimize_camera, OptimizationMethod};
//!
//! let pole = Pole::new(Coordinate::ORIGIN, 15.0);
//! let field = Field::from_center(Coordinate::from_xy(0.0, 40.0), 30.0, 30.0);
//! let mut camera = Camera::new(CameraProperties::default())?;
//!
//! let report = optimize_camera(&pole, &mut camera, &field, OptimizationMethod::AngleBisector)?;
//! println!("height {:.2} m, pitch {:.3} rad", report.height, report.pitch);
//! println!("visible {:.1} of {:.1} m^2", report.visible_area, field.area());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

/// Angle bisector strategy and its footprint height equations.
pub mod angle_bisector;

/// Multi-camera yaw subdivision around a field.
pub mod environment;

/// Error types for the optimizers.
pub mod error;

/// Brute force grid search.
pub mod exhaustive;

/// Far corner strategy.
pub mod far_corner;

/// Ground sampling distance planning.
pub mod gsd;

/// Strategy traits.
pub mod optimizer;

/// Ternary search over the yaw.
pub mod pitch_search;

mod bounds;

pub use angle_bisector::AngleBisector;
pub use environment::{CameraGroup, Environment, YawTarget};
pub use error::OptimizeError;
pub use exhaustive::{ExhaustiveSearch, SearchResult};
pub use far_corner::FarCorner;
pub use gsd::{plan_for_gsd, GsdPlan, TargetGsd};
pub use optimizer::{PoleOptimization, PoseOptimizer};
pub use pitch_search::PitchAndSearch;

use camproj_camera::{Camera, Pole};
use camproj_field::Field;
use serde::{Deserialize, Serialize};

/// Enumeration of the pose strategies available in this crate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OptimizationMethod {
    /// Aim at the farthest field corner.
    FarCorner,
    /// Bisect the angle subtended by the field and solve for the height.
    AngleBisector,
    /// Grid search over yaw and pitch with the given steps.
    Exhaustive(ExhaustiveSearch),
    /// Ternary search over the yaw with the given tolerances.
    PitchAndSearch(PitchAndSearch),
    /// Plan for a target ground sampling distance.
    TargetGsd(TargetGsd),
}

/// Pose and coverage of a camera after optimization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptimizationReport {
    /// Yaw in radians.
    pub yaw: f64,
    /// Pitch in radians.
    pub pitch: f64,
    /// Mounting height in meters.
    pub height: f64,
    /// Field area inside the footprint, in square meters.
    pub visible_area: f64,
    /// Area of the footprint, in square meters.
    pub projection_area: f64,
}

impl OptimizationReport {
    /// Describe the current pose and coverage of `camera` over `field`.
    ///
    /// # Errors
    ///
    /// Fails when the camera's view does not meet the ground.
    pub fn from_camera(camera: &Camera, field: &Field) -> Result<Self, OptimizeError> {
        let projection = camera.project()?;
        Ok(Self {
            yaw: camera.yaw(),
            pitch: camera.pitch(),
            height: camera.position().z,
            visible_area: field.area_visible_within_projection(&projection),
            projection_area: camera.projection_area()?,
        })
    }
}

/// Dispatch function that routes to the chosen strategy.
///
/// # Arguments
///
/// * `pole` - Pole the camera is mounted on.
/// * `camera` - Camera to update.
/// * `field` - Field to cover.
/// * `method` - Strategy to run.
///
/// # Returns
///
/// The resulting pose and coverage of the camera.
pub fn optimize_camera(
    pole: &Pole,
    camera: &mut Camera,
    field: &Field,
    method: OptimizationMethod,
) -> Result<OptimizationReport, OptimizeError> {
    match method {
        OptimizationMethod::FarCorner => FarCorner.optimize(pole, camera, field)?,
        OptimizationMethod::AngleBisector => AngleBisector.optimize(pole, camera, field)?,
        OptimizationMethod::Exhaustive(search) => search.optimize(pole, camera, field)?,
        OptimizationMethod::PitchAndSearch(search) => search.optimize(pole, camera, field)?,
        OptimizationMethod::TargetGsd(target) => target.optimize(pole, camera, field)?,
    }
    OptimizationReport::from_camera(camera, field)
}
