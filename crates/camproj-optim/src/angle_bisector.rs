use camproj_camera::{Camera, Pole};
use camproj_field::Field;
use camproj_geometry::Coordinate;

use crate::bounds::FieldBounds;
use crate::{OptimizeError, PoseOptimizer};

/// Face the middle of the angle the field subtends and pick a mounting height.
///
/// The yaw bisects the angular span between the leftmost and rightmost field
/// corners seen from the pole. The height is the one whose ground footprint,
/// with the far edge on the farthest field corner, is as long as the field
/// measured along the yaw, limited to the top of the pole. The pitch then
/// puts the far edge on that corner.
///
/// Nothing happens when the pole stands inside the field.
#[derive(Debug, Clone, Copy, Default)]
pub struct AngleBisector;

impl PoseOptimizer for AngleBisector {
    fn optimize(
        &self,
        pole: &Pole,
        camera: &mut Camera,
        field: &Field,
    ) -> Result<(), OptimizeError> {
        let Some(bounds) = FieldBounds::new(pole, field) else {
            log::warn!("angle bisector: pole is inside the field, camera left unchanged");
            return Ok(());
        };

        let yaw = bounds.bisector();
        let far = FieldBounds::along(yaw, bounds.farthest);
        let near = FieldBounds::along(yaw, bounds.closest);
        let length = far - near;
        let half_vfov = camera.vertical_fov() / 2.0;
        log::debug!(
            "angle bisector: bounds [{:.4}, {:.4}] rad, yaw {yaw:.4} rad, near {near:.3} m, far {far:.3} m",
            bounds.right_heading,
            bounds.left_heading
        );

        let min_length_z = heights_for_min_footprint(far, half_vfov)[1];
        let min_length = footprint_length(far, min_length_z, half_vfov);
        let ideal_z = if length <= min_length {
            log::warn!(
                "angle bisector: field depth {length:.3} m is below the shortest footprint {min_length:.3} m"
            );
            min_length_z
        } else {
            heights_for_footprint(length, far, half_vfov)[1]
        };

        let z = ideal_z.min(pole.top_of_pole_height());
        if !(z.is_finite() && z > 0.0) {
            return Err(OptimizeError::NoFeasibleHeight(z));
        }
        let pitch = (far / z).atan() - half_vfov;
        log::info!("angle bisector: height {z:.3} m, yaw {yaw:.4} rad, pitch {pitch:.4} rad");

        let base = pole.position();
        camera.set_properties(camera.properties().with_pose(
            yaw,
            pitch,
            Coordinate::new(base.x, base.y, z),
        ))?;
        Ok(())
    }
}

/// Ground length of the view of a camera at height `z` whose far edge lands at
/// distance `far`.
///
/// # Arguments
///
/// * `far` - Ground distance of the far edge along the camera axis.
/// * `z` - Camera height.
/// * `half_vfov` - Half of the vertical field of view.
pub fn footprint_length(far: f64, z: f64, half_vfov: f64) -> f64 {
    far - z * ((far / z).atan() - 2.0 * half_vfov).tan()
}

/// Candidate heights at which the footprint ending at `far` is shortest.
///
/// The second entry is the physical solution.
pub fn heights_for_min_footprint(far: f64, half_vfov: f64) -> [f64; 2] {
    let (sin, cos) = half_vfov.sin_cos();
    [
        (-far * sin - far * cos) / (cos - sin),
        (far * cos - far * sin) / (sin + cos),
    ]
}

/// Candidate heights at which the footprint ending at `far` is `length` long.
///
/// Both roots of the footprint equation solved for the height. The second
/// entry is the higher mount and the physical solution.
pub fn heights_for_footprint(length: f64, far: f64, half_vfov: f64) -> [f64; 2] {
    let (sin, cos) = half_vfov.sin_cos();
    let (sin2, cos2) = (sin * sin, cos * cos);
    let root = (8.0 * far * (2.0 * length - 2.0 * far) * sin2 * cos2
        + length.powi(2) * (sin2 - cos2).powi(2))
    .sqrt();
    let csc_sec = 1.0 / (sin * cos);
    let linear = length * (cos / sin - sin / cos);
    [
        0.25 * (-csc_sec * root + linear),
        0.25 * (csc_sec * root + linear),
    ]
}
