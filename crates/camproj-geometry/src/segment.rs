use crate::Coordinate;
use glam::DVec3;

/// Orientation of an ordered triplet of planar points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// The three points lie on a line.
    Colinear,
    /// The triplet turns clockwise.
    Clockwise,
    /// The triplet turns counterclockwise.
    CounterClockwise,
}

/// Orientation of the triplet `(a, b, c)` from the sign of `(b - a) x (c - b)`.
///
/// Only the x and y components are used.
pub fn orientation(a: &Coordinate, b: &Coordinate, c: &Coordinate) -> Orientation {
    let val = (b.y - a.y) * (c.x - b.x) - (b.x - a.x) * (c.y - b.y);
    if val == 0.0 {
        Orientation::Colinear
    } else if val > 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::CounterClockwise
    }
}

/// Check whether `check` lies within the bounding box of the segment `a`-`b`.
///
/// Combined with a colinearity test this tells whether the point lies on the segment.
pub fn on_segment(a: &Coordinate, check: &Coordinate, b: &Coordinate) -> bool {
    check.x <= a.x.max(b.x)
        && check.x >= a.x.min(b.x)
        && check.y <= a.y.max(b.y)
        && check.y >= a.y.min(b.y)
}

/// Check whether the segments `a1`-`a2` and `b1`-`b2` intersect.
///
/// Touching segments, including an endpoint lying on the other segment, count
/// as intersecting.
pub fn segments_intersect(a1: &Coordinate, a2: &Coordinate, b1: &Coordinate, b2: &Coordinate) -> bool {
    let o1 = orientation(a1, a2, b1);
    let o2 = orientation(a1, a2, b2);
    let o3 = orientation(b1, b2, a1);
    let o4 = orientation(b1, b2, a2);

    // general case
    if o1 != o2 && o3 != o4 {
        return true;
    }

    // a point colinear with the other segment and lying on it
    (o1 == Orientation::Colinear && on_segment(a1, b1, a2))
        || (o2 == Orientation::Colinear && on_segment(a1, b2, a2))
        || (o3 == Orientation::Colinear && on_segment(b1, a1, b2))
        || (o4 == Orientation::Colinear && on_segment(b1, a2, b2))
}

/// Intersection point of the lines through `a1`-`a2` and `b1`-`b2`.
///
/// Returns `None` when the segments do not intersect or the lines are parallel.
/// The point is computed in homogeneous coordinates: the cross product of two
/// points gives the line through them and the cross product of two lines gives
/// their meeting point.
///
/// The returned coordinate is the intersection of the infinite lines, so it is
/// only meaningful because the segment test ran first. Colinear overlapping
/// segments yield `None`.
pub fn line_intersection_point(
    a1: &Coordinate,
    a2: &Coordinate,
    b1: &Coordinate,
    b2: &Coordinate,
) -> Option<Coordinate> {
    if !segments_intersect(a1, a2, b1, b2) {
        return None;
    }

    let homogeneous = |c: &Coordinate| DVec3::new(c.x, c.y, 1.0);
    let line_a = homogeneous(a1).cross(homogeneous(a2));
    let line_b = homogeneous(b1).cross(homogeneous(b2));
    let point = line_a.cross(line_b);

    // parallel lines meet at infinity
    if point.z == 0.0 {
        return None;
    }

    Some(Coordinate::from_xy(point.x / point.z, point.y / point.z))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn c(x: f64, y: f64) -> Coordinate {
        Coordinate::from_xy(x, y)
    }

    #[test]
    fn test_orientation() {
        assert_eq!(orientation(&c(0.0, 0.0), &c(1.0, 1.0), &c(2.0, 2.0)), Orientation::Colinear);
        assert_eq!(orientation(&c(0.0, 0.0), &c(0.0, 1.0), &c(1.0, 1.0)), Orientation::Clockwise);
        assert_eq!(
            orientation(&c(0.0, 0.0), &c(1.0, 0.0), &c(1.0, 1.0)),
            Orientation::CounterClockwise
        );
    }

    #[test]
    fn test_segments_intersect_crossing() {
        assert!(segments_intersect(&c(0.0, 0.0), &c(2.0, 2.0), &c(0.0, 2.0), &c(2.0, 0.0)));
        assert!(!segments_intersect(&c(0.0, 0.0), &c(1.0, 1.0), &c(2.0, 0.0), &c(3.0, 1.0)));
    }

    #[test]
    fn test_segments_touching_count_as_intersecting() {
        // endpoint of b lies on a
        assert!(segments_intersect(&c(0.0, 0.0), &c(2.0, 0.0), &c(1.0, 0.0), &c(1.0, 3.0)));
        // colinear and overlapping
        assert!(segments_intersect(&c(0.0, 0.0), &c(2.0, 0.0), &c(1.0, 0.0), &c(3.0, 0.0)));
        // colinear and disjoint
        assert!(!segments_intersect(&c(0.0, 0.0), &c(1.0, 0.0), &c(2.0, 0.0), &c(3.0, 0.0)));
    }

    #[test]
    fn test_line_intersection_point() {
        let p = line_intersection_point(&c(0.0, 0.0), &c(2.0, 2.0), &c(0.0, 2.0), &c(2.0, 0.0));
        let p = p.expect("segments cross");
        assert_relative_eq!(p.x, 1.0);
        assert_relative_eq!(p.y, 1.0);
        assert_eq!(p.z, 0.0);
    }

    #[test]
    fn test_line_intersection_point_none() {
        // disjoint segments whose lines would cross
        assert!(line_intersection_point(&c(0.0, 0.0), &c(1.0, 0.0), &c(5.0, -1.0), &c(5.0, 1.0)).is_none());
        // overlapping colinear segments have no single meeting point
        assert!(line_intersection_point(&c(0.0, 0.0), &c(2.0, 0.0), &c(1.0, 0.0), &c(3.0, 0.0)).is_none());
    }
}
