use std::f64::consts::TAU;

use camproj_camera::{Camera, Pole};
use camproj_field::Field;
use serde::{Deserialize, Serialize};

use crate::{OptimizeError, PoseOptimizer};

/// Brute force grid search over yaw and pitch.
///
/// Every yaw in `[0, 2π)` and every pitch in `[0, maximum pitch)` is tried on a
/// regular grid and the pose with the largest visible field area wins. The
/// camera keeps its current position. With the default one degree steps this
/// runs tens of thousands of projections and is meant as a reference for the
/// faster strategies rather than for interactive use.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExhaustiveSearch {
    /// Yaw increment in radians.
    pub yaw_step: f64,
    /// Pitch increment in radians.
    pub pitch_step: f64,
}

impl Default for ExhaustiveSearch {
    fn default() -> Self {
        Self {
            yaw_step: 1f64.to_radians(),
            pitch_step: 1f64.to_radians(),
        }
    }
}

/// Best pose found by [`ExhaustiveSearch::search`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchResult {
    /// Yaw of the best pose in radians.
    pub yaw: f64,
    /// Pitch of the best pose in radians.
    pub pitch: f64,
    /// Field area visible from the best pose in square meters.
    pub visible_area: f64,
    /// Number of poses evaluated.
    pub evaluations: usize,
}

impl ExhaustiveSearch {
    /// Search the grid without modifying `camera`.
    ///
    /// Poses are evaluated from the camera's current position. The first pose
    /// reaching the largest area is kept; when no pose sees any of the field
    /// the result is yaw and pitch zero with a zero area.
    ///
    /// # Errors
    ///
    /// Returns [`OptimizeError::InvalidStep`] when a step is not a positive
    /// finite angle.
    pub fn search(&self, camera: &Camera, field: &Field) -> Result<SearchResult, OptimizeError> {
        for step in [self.yaw_step, self.pitch_step] {
            if !(step.is_finite() && step > 0.0) {
                return Err(OptimizeError::InvalidStep(step));
            }
        }

        let max_pitch = camera.maximum_pitch_angle();
        let yaw_count = grid_size(TAU, self.yaw_step);
        let pitch_count = grid_size(max_pitch, self.pitch_step);

        let mut probe = camera.clone();
        let mut best = SearchResult {
            yaw: 0.0,
            pitch: 0.0,
            visible_area: 0.0,
            evaluations: 0,
        };

        for i in 0..yaw_count {
            let yaw = i as f64 * self.yaw_step;
            for j in 0..pitch_count {
                let pitch = j as f64 * self.pitch_step;
                probe.set_properties(probe.properties().with_yaw(yaw).with_pitch(pitch))?;
                let area = field.area_visible_within_projection(&probe.project()?);
                best.evaluations += 1;

                if area > best.visible_area {
                    best.yaw = yaw;
                    best.pitch = pitch;
                    best.visible_area = area;
                }
            }
            log::debug!(
                "exhaustive: yaw {yaw:.4} rad done, best area so far {:.3} m2",
                best.visible_area
            );
        }

        Ok(best)
    }
}

impl PoseOptimizer for ExhaustiveSearch {
    fn optimize(
        &self,
        _pole: &Pole,
        camera: &mut Camera,
        field: &Field,
    ) -> Result<(), OptimizeError> {
        let best = self.search(camera, field)?;
        log::info!(
            "exhaustive: {} poses, yaw {:.4} rad, pitch {:.4} rad, area {:.3} m2",
            best.evaluations,
            best.yaw,
            best.pitch,
            best.visible_area
        );
        camera.set_properties(camera.properties().with_yaw(best.yaw).with_pitch(best.pitch))?;
        Ok(())
    }
}

// number of grid values `i * step` strictly below `end`
fn grid_size(end: f64, step: f64) -> usize {
    if end <= 0.0 {
        return 0;
    }
    let count = (end / step).ceil() as usize;
    if (count as f64 - 1.0) * step >= end {
        count - 1
    } else {
        count
    }
}
