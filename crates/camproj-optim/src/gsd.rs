//! Mounting height and pitch planning for a target ground sampling distance.
//!
//! The ground sampling distance (GSD) grows with the mounting height and with
//! the pitch. For a target GSD the planner first finds the highest mount that
//! still reaches the target at the minimum pitch, then the largest pitch at
//! that height that keeps the target, limited by the pitch that already puts
//! the far edge of the view on the farthest field corner.

use camproj_camera::{Camera, Pole};
use camproj_field::Field;
use camproj_geometry::{angle::heading_from_up, Coordinate};
use serde::{Deserialize, Serialize};

use crate::far_corner::farthest_corner;
use crate::{OptimizeError, PoseOptimizer};

/// Mounting plan for a target ground sampling distance, angles in radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GsdPlan {
    /// Target ground sampling distance in m/px.
    pub target_gsd: f64,
    /// Minimum pitch the plan was computed for.
    pub min_pitch: f64,
    /// Highest mount reaching the target across the sensor width at the minimum pitch.
    pub max_height_x: f64,
    /// Highest mount reaching the target along the sensor height at the minimum pitch.
    pub max_height_y: f64,
    /// Chosen mounting height, never above the top of the pole.
    pub target_height: f64,
    /// Distance from the pole to the farthest field corner.
    pub far_distance: f64,
    /// Pitch putting the far edge of the view on the farthest field corner.
    pub max_pitch: f64,
    /// Largest pitch reaching the target across the sensor width.
    pub pitch_x: f64,
    /// Largest pitch reaching the target along the sensor height.
    pub pitch_y: f64,
    /// Chosen pitch.
    pub pitch: f64,
}

impl GsdPlan {
    /// Whether the chosen pitch reaches the farthest field corner.
    pub fn covers_far_corner(&self) -> bool {
        self.pitch >= self.max_pitch
    }
}

/// Maximum mounting height at which the GSD across the sensor width is `gsd` at `pitch`.
pub fn max_height_for_gsd_x(camera: &Camera, gsd: f64, pitch: f64) -> f64 {
    gsd * camera.x_resolution() as f64 * pitch.cos() / (2.0 * (camera.horizontal_fov() / 2.0).tan())
}

/// Maximum mounting height at which the GSD along the sensor height is `gsd` at `pitch`.
pub fn max_height_for_gsd_y(camera: &Camera, gsd: f64, pitch: f64) -> f64 {
    let half_vfov = camera.vertical_fov() / 2.0;
    gsd * camera.y_resolution() as f64 / ((pitch + half_vfov).tan() - (pitch - half_vfov).tan())
}

/// Pitch at which the GSD across the sensor width is `gsd` from `height`.
///
/// `NaN` when the target cannot be reached from that height at any pitch.
pub fn pitch_for_gsd_x(camera: &Camera, gsd: f64, height: f64) -> f64 {
    (2.0 * (camera.horizontal_fov() / 2.0).tan() * height / (gsd * camera.x_resolution() as f64))
        .acos()
}

/// Pitch at which the GSD along the sensor height is `gsd` from `height`.
///
/// `NaN` when the target cannot be reached from that height at any pitch.
pub fn pitch_for_gsd_y(camera: &Camera, gsd: f64, height: f64) -> f64 {
    let vfov = camera.vertical_fov();
    0.5 * (2.0 * height * vfov.sin() / (gsd * camera.y_resolution() as f64) - vfov.cos()).acos()
}

/// Plan the mounting height and pitch of `camera` on `pole` for a target GSD.
///
/// # Arguments
///
/// * `pole` - Pole the camera is mounted on.
/// * `camera` - Camera providing the optics; its pose is ignored.
/// * `field` - Field to cover.
/// * `target_gsd` - Target ground sampling distance in m/px.
/// * `min_pitch` - Smallest pitch the camera may use.
///
/// # Errors
///
/// Returns [`OptimizeError::InvalidTargetGsd`] when the target is not a
/// positive finite number, [`OptimizeError::InvalidMinPitch`] when the minimum
/// pitch is negative or leaves the far edge of the view above the horizon, and
/// [`OptimizeError::NoFeasibleHeight`] when the top of the pole is not above
/// the ground.
pub fn plan_for_gsd(
    pole: &Pole,
    camera: &Camera,
    field: &Field,
    target_gsd: f64,
    min_pitch: f64,
) -> Result<GsdPlan, OptimizeError> {
    if !(target_gsd.is_finite() && target_gsd > 0.0) {
        return Err(OptimizeError::InvalidTargetGsd(target_gsd));
    }
    let pitch_limit = camera.maximum_pitch_angle();
    if !(min_pitch >= 0.0 && min_pitch < pitch_limit) {
        return Err(OptimizeError::InvalidMinPitch {
            min_pitch,
            max_pitch: pitch_limit,
        });
    }

    let (_, far_distance) = farthest_corner(pole.position(), field);
    let max_height_x = max_height_for_gsd_x(camera, target_gsd, min_pitch);
    let max_height_y = max_height_for_gsd_y(camera, target_gsd, min_pitch);
    let target_height = max_height_x
        .min(max_height_y)
        .min(pole.top_of_pole_height());
    if !(target_height.is_finite() && target_height > 0.0) {
        return Err(OptimizeError::NoFeasibleHeight(target_height));
    }

    let max_pitch = (far_distance / target_height).atan() - camera.vertical_fov() / 2.0;
    let pitch_x = pitch_for_gsd_x(camera, target_gsd, target_height);
    let pitch_y = pitch_for_gsd_y(camera, target_gsd, target_height);
    log::debug!(
        "gsd: max heights x {max_height_x:.3} m y {max_height_y:.3} m, target {target_height:.3} m, pitches x {pitch_x:.4} y {pitch_y:.4} far {max_pitch:.4} rad"
    );

    Ok(GsdPlan {
        target_gsd,
        min_pitch,
        max_height_x,
        max_height_y,
        target_height,
        far_distance,
        max_pitch,
        pitch_x,
        pitch_y,
        pitch: pitch_x.min(pitch_y).min(max_pitch),
    })
}

/// Mount and aim the camera for a target ground sampling distance.
///
/// The camera is placed at the planned height on the pole, faces the farthest
/// field corner and uses the planned pitch. See [`plan_for_gsd`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetGsd {
    /// Target GSD in m/px, or `None` to use the camera's configured target.
    pub target_gsd: Option<f64>,
    /// Smallest pitch the camera may use, in radians.
    pub min_pitch: f64,
}

impl Default for TargetGsd {
    fn default() -> Self {
        Self {
            target_gsd: None,
            min_pitch: 15f64.to_radians(),
        }
    }
}

impl TargetGsd {
    /// Plan for `camera` without modifying it.
    ///
    /// # Errors
    ///
    /// Returns [`OptimizeError::MissingTargetGsd`] when neither this strategy
    /// nor the camera has a target, otherwise see [`plan_for_gsd`].
    pub fn plan(&self, pole: &Pole, camera: &Camera, field: &Field) -> Result<GsdPlan, OptimizeError> {
        let target_gsd = self
            .target_gsd
            .or(camera.properties().target_gsd)
            .ok_or(OptimizeError::MissingTargetGsd)?;
        plan_for_gsd(pole, camera, field, target_gsd, self.min_pitch)
    }
}

impl PoseOptimizer for TargetGsd {
    fn optimize(
        &self,
        pole: &Pole,
        camera: &mut Camera,
        field: &Field,
    ) -> Result<(), OptimizeError> {
        let plan = self.plan(pole, camera, field)?;
        let base = pole.position();
        let (corner, _) = farthest_corner(base, field);
        let yaw = heading_from_up(corner.to_dvec2() - base.to_dvec2());

        if !plan.covers_far_corner() {
            log::warn!(
                "gsd: pitch {:.4} rad stops short of the far corner at {:.4} rad",
                plan.pitch,
                plan.max_pitch
            );
        }
        log::info!(
            "gsd: height {:.3} m, yaw {yaw:.4} rad, pitch {:.4} rad",
            plan.target_height,
            plan.pitch
        );

        camera.set_properties(camera.properties().with_pose(
            yaw,
            plan.pitch,
            Coordinate::new(base.x, base.y, plan.target_height),
        ))?;
        Ok(())
    }
}
