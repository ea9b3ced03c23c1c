//! Common interface shared by the pose optimization strategies.

use camproj_camera::{Camera, Pole};
use camproj_field::Field;

use crate::{AngleBisector, ExhaustiveSearch, FarCorner, OptimizeError, PitchAndSearch, TargetGsd};

/// Trait for strategies choosing the pose of a camera mounted on a pole.
///
/// Implementations read the pole and the field and write the resulting pose
/// into the camera. The field is never modified and no state is kept between
/// calls.
pub trait PoseOptimizer {
    /// Update the pose of `camera` so it covers `field` from `pole`.
    ///
    /// # Errors
    ///
    /// Returns an error when the strategy cannot produce a valid pose. The
    /// camera is left unchanged in that case.
    fn optimize(&self, pole: &Pole, camera: &mut Camera, field: &Field)
        -> Result<(), OptimizeError>;
}

/// Pose strategies exposed as methods on [`Pole`].
///
/// Example:
///
/// ```
/// use camproj_camera::{Camera, CameraProperties, Pole};
/// use camproj_field::Field;
/// use camproj_geometry::Coordinate;
/// use camproj_optim::PoleOptimization;
///
/// let pole = Pole::new(Coordinate::ORIGIN, 10.0);
/// let field = Field::from_center(Coordinate::from_xy(0.0, 50.0), 20.0, 20.0);
/// let mut camera = Camera::new(CameraProperties::default())?;
/// camera.mount_to_pole_top(&pole);
///
/// pole.far_corner_optimization(&mut camera, &field)?;
/// assert!(camera.pitch() > 0.0);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait PoleOptimization {
    /// See [`FarCorner`].
    fn far_corner_optimization(&self, camera: &mut Camera, field: &Field)
        -> Result<(), OptimizeError>;

    /// See [`AngleBisector`].
    fn angle_bisector_optimization(
        &self,
        camera: &mut Camera,
        field: &Field,
    ) -> Result<(), OptimizeError>;

    /// See [`ExhaustiveSearch`], run with its default one degree grid.
    fn exhaustive_optimize(&self, camera: &mut Camera, field: &Field) -> Result<(), OptimizeError>;

    /// See [`PitchAndSearch`], run with its default tolerances.
    fn pitch_and_search_optimization(
        &self,
        camera: &mut Camera,
        field: &Field,
    ) -> Result<(), OptimizeError>;

    /// See [`TargetGsd`], aiming at `target_gsd` m/px or, when `None`, at the
    /// camera's own target.
    fn target_gsd_optimization(
        &self,
        camera: &mut Camera,
        field: &Field,
        target_gsd: Option<f64>,
    ) -> Result<(), OptimizeError>;
}

impl PoleOptimization for Pole {
    fn far_corner_optimization(
        &self,
        camera: &mut Camera,
        field: &Field,
    ) -> Result<(), OptimizeError> {
        FarCorner.optimize(self, camera, field)
    }

    fn angle_bisector_optimization(
        &self,
        camera: &mut Camera,
        field: &Field,
    ) -> Result<(), OptimizeError> {
        AngleBisector.optimize(self, camera, field)
    }

    fn exhaustive_optimize(&self, camera: &mut Camera, field: &Field) -> Result<(), OptimizeError> {
        ExhaustiveSearch::default().optimize(self, camera, field)
    }

    fn pitch_and_search_optimization(
        &self,
        camera: &mut Camera,
        field: &Field,
    ) -> Result<(), OptimizeError> {
        PitchAndSearch::default().optimize(self, camera, field)
    }

    fn target_gsd_optimization(
        &self,
        camera: &mut Camera,
        field: &Field,
        target_gsd: Option<f64>,
    ) -> Result<(), OptimizeError> {
        let strategy = TargetGsd {
            target_gsd,
            ..Default::default()
        };
        strategy.optimize(self, camera, field)
    }
}
