use camproj_camera::{Camera, Pole};
use camproj_field::Field;
use camproj_geometry::angle::wrap_angle;
use serde::{Deserialize, Serialize};

use crate::bounds::FieldBounds;
use crate::{OptimizeError, PoseOptimizer};

/// Ternary search over the yaw between the angular bounds of the field.
///
/// For every candidate yaw the camera is mounted at the top of the pole and
/// pitched so the far edge of the view lands on the farthest field corner
/// measured along that yaw. The search narrows the yaw interval towards the
/// larger visible area until it is shorter than the tolerance, and applies
/// the best pose it evaluated.
///
/// The search assumes the visible area is unimodal in the yaw, which holds for
/// the usual case of a field well outside the footprint of the pole. Nothing
/// happens when the pole stands inside the field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PitchAndSearch {
    /// Width of the yaw interval, in radians, at which the search stops.
    pub yaw_tolerance: f64,
    /// Maximum number of narrowing steps.
    pub max_iterations: usize,
}

impl Default for PitchAndSearch {
    fn default() -> Self {
        Self {
            yaw_tolerance: 1e-3,
            max_iterations: 100,
        }
    }
}

struct Candidate {
    yaw: f64,
    pitch: f64,
    area: f64,
}

impl PoseOptimizer for PitchAndSearch {
    fn optimize(
        &self,
        pole: &Pole,
        camera: &mut Camera,
        field: &Field,
    ) -> Result<(), OptimizeError> {
        if !(self.yaw_tolerance.is_finite() && self.yaw_tolerance > 0.0) {
            return Err(OptimizeError::InvalidStep(self.yaw_tolerance));
        }
        let Some(bounds) = FieldBounds::new(pole, field) else {
            log::warn!("pitch and search: pole is inside the field, camera left unchanged");
            return Ok(());
        };

        let z = pole.top_of_pole_height();
        let half_vfov = camera.vertical_fov() / 2.0;
        let mut probe = camera.clone();
        probe.mount_to_pole_top(pole);

        let mut evaluate = |yaw: f64| -> Result<Candidate, OptimizeError> {
            let far = FieldBounds::along(yaw, bounds.farthest);
            let pitch = (far / z).atan() - half_vfov;
            probe.set_properties(probe.properties().with_yaw(yaw).with_pitch(pitch))?;
            // poses looking over the horizon see nothing of the field
            let area = probe
                .project()
                .map(|projection| field.area_visible_within_projection(&projection))
                .unwrap_or(0.0);
            Ok(Candidate { yaw, pitch, area })
        };

        let (mut lo, mut hi) = (bounds.right_heading, bounds.left_heading);
        let mut best = evaluate(lo)?;
        let upper = evaluate(hi)?;
        if upper.area > best.area {
            best = upper;
        }

        let mut iterations = 0;
        while hi - lo > self.yaw_tolerance && iterations < self.max_iterations {
            let third = (hi - lo) / 3.0;
            let left = evaluate(lo + third)?;
            let right = evaluate(hi - third)?;
            log::debug!(
                "pitch and search: [{lo:.5}, {hi:.5}] rad, areas {:.3} / {:.3} m2",
                left.area,
                right.area
            );

            if left.area < right.area {
                lo = left.yaw;
            } else {
                hi = right.yaw;
            }
            for candidate in [left, right] {
                if candidate.area > best.area {
                    best = candidate;
                }
            }
            iterations += 1;
        }

        let middle = evaluate((lo + hi) / 2.0)?;
        if middle.area > best.area {
            best = middle;
        }

        let yaw = wrap_angle(best.yaw);
        log::info!(
            "pitch and search: {iterations} iterations, yaw {yaw:.4} rad, pitch {:.4} rad, area {:.3} m2",
            best.pitch,
            best.area
        );
        camera.mount_to_pole_top(pole);
        camera.set_properties(camera.properties().with_yaw(yaw).with_pitch(best.pitch))?;
        Ok(())
    }
}
