use camproj_camera::{Camera, Pole};
use camproj_field::Field;
use camproj_geometry::{angle::heading_from_up, Coordinate};

use crate::{OptimizeError, PoseOptimizer};

/// Point the camera at the field corner farthest from the pole.
///
/// The yaw faces the farthest corner as seen from the base of the pole and the
/// pitch puts the far edge of the view on that corner when the camera sits at
/// the top of the pole. The camera position is not changed.
#[derive(Debug, Clone, Copy, Default)]
pub struct FarCorner;

impl PoseOptimizer for FarCorner {
    fn optimize(
        &self,
        pole: &Pole,
        camera: &mut Camera,
        field: &Field,
    ) -> Result<(), OptimizeError> {
        let base = pole.position();
        let (corner, distance) = farthest_corner(base, field);

        let yaw = heading_from_up(corner.to_dvec2() - base.to_dvec2());
        let pitch = (distance / pole.top_of_pole_height()).atan() - camera.vertical_fov() / 2.0;
        log::info!(
            "far corner: corner ({:.3}, {:.3}) at {distance:.3} m, yaw {yaw:.4} rad, pitch {pitch:.4} rad",
            corner.x,
            corner.y
        );

        camera.set_properties(camera.properties().with_yaw(yaw).with_pitch(pitch))?;
        Ok(())
    }
}

/// The field corner with the largest planar distance from `point`, with that distance.
///
/// Ties keep the first corner in [`Field::points`] order.
pub fn farthest_corner(point: &Coordinate, field: &Field) -> (Coordinate, f64) {
    let points = field.points();
    points.iter().skip(1).fold(
        (points[0], point.xy_distance(&points[0])),
        |(best, best_distance), corner| {
            let distance = point.xy_distance(corner);
            if distance > best_distance {
                (*corner, distance)
            } else {
                (best, best_distance)
            }
        },
    )
}
