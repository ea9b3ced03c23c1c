use camproj_camera::Pole;
use camproj_field::Field;
use camproj_geometry::angle::{heading_from_up, rotate, wrap_angle, UP_VECTOR};
use camproj_geometry::point_in_polygon;
use glam::DVec2;

/// The field as seen from the base of a pole.
///
/// Corner vectors are relative to the pole. Headings follow the camera yaw
/// convention: counterclockwise from +Y, positive to the left.
#[derive(Debug, Clone)]
pub(crate) struct FieldBounds {
    /// Heading of the rightmost field corner.
    pub right_heading: f64,
    /// Heading of the leftmost field corner.
    pub left_heading: f64,
    /// Field corner farthest from the pole.
    pub farthest: DVec2,
    /// Field corner closest to the pole.
    pub closest: DVec2,
}

impl FieldBounds {
    /// Angular and distance bounds of `field` from `pole`.
    ///
    /// Returns `None` when the pole stands inside the field, where the field
    /// surrounds the pole and has no angular bounds.
    pub fn new(pole: &Pole, field: &Field) -> Option<Self> {
        let points = field.points();
        if point_in_polygon(pole.position(), &points) {
            return None;
        }

        let origin = pole.position().to_dvec2();
        let localized = points.map(|p| p.to_dvec2() - origin);

        // measure headings around the direction of the field center so a field
        // behind the pole does not straddle the ±π seam
        let reference = heading_from_up(field.center().to_dvec2() - origin);
        let (min_rel, max_rel) = localized
            .iter()
            .map(|v| wrap_angle(heading_from_up(*v) - reference))
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), rel| {
                (lo.min(rel), hi.max(rel))
            });

        let by_distance = |a: &&DVec2, b: &&DVec2| a.length().total_cmp(&b.length());
        let farthest = *localized.iter().max_by(by_distance)?;
        let closest = *localized.iter().min_by(by_distance)?;

        Some(Self {
            right_heading: reference + min_rel,
            left_heading: reference + max_rel,
            farthest,
            closest,
        })
    }

    /// Heading halfway between the angular bounds.
    pub fn bisector(&self) -> f64 {
        wrap_angle((self.right_heading + self.left_heading) / 2.0)
    }

    /// Distance of `point` along the ground direction given by `yaw`.
    pub fn along(yaw: f64, point: DVec2) -> f64 {
        rotate(UP_VECTOR, yaw).dot(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use camproj_geometry::Coordinate;
    use std::f64::consts::PI;

    #[test]
    fn test_bounds_in_front() {
        let pole = Pole::new(Coordinate::ORIGIN, 10.0);
        let field = Field::from_center(Coordinate::from_xy(0.0, 50.0), 20.0, 20.0);
        let bounds = FieldBounds::new(&pole, &field).expect("pole is outside");

        let half_span = (10.0f64 / 40.0).atan();
        assert_relative_eq!(bounds.right_heading, -half_span, epsilon = 1e-12);
        assert_relative_eq!(bounds.left_heading, half_span, epsilon = 1e-12);
        assert_relative_eq!(bounds.bisector(), 0.0, epsilon = 1e-12);
        assert_relative_eq!(bounds.farthest.y, 60.0);
        assert_relative_eq!(bounds.closest.y, 40.0);
        assert_relative_eq!(FieldBounds::along(0.0, bounds.farthest), 60.0, epsilon = 1e-12);
    }

    #[test]
    fn test_bounds_behind() {
        let pole = Pole::new(Coordinate::ORIGIN, 10.0);
        let field = Field::from_center(Coordinate::from_xy(0.0, -50.0), 20.0, 20.0);
        let bounds = FieldBounds::new(&pole, &field).expect("pole is outside");
        assert_relative_eq!(bounds.bisector().abs(), PI, epsilon = 1e-12);
        assert!(bounds.left_heading > bounds.right_heading);
        assert_relative_eq!(FieldBounds::along(PI, bounds.farthest), 60.0, epsilon = 1e-9);
    }

    #[test]
    fn test_bounds_inside() {
        let pole = Pole::new(Coordinate::ORIGIN, 10.0);
        let field = Field::from_center(Coordinate::ORIGIN, 20.0, 20.0);
        assert!(FieldBounds::new(&pole, &field).is_none());
    }
}
