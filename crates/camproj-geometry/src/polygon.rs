use crate::segment::{on_segment, orientation, segments_intersect, Orientation};
use crate::{Coordinate, GeometryError};

/// x coordinate of the far endpoint of the ray used by [`point_in_polygon`].
const EXTREME_DISTANCE: f64 = 1_000_000.0;

/// Check whether `point` lies inside `polygon` using ray casting.
///
/// A ray is cast from `point` to a far point on its right at the same height and
/// the polygon edges it crosses are counted; an odd count means inside. A point
/// lying on an edge is considered inside.
///
/// NOTE: a polygon vertex at exactly the height of `point` may be counted by both
/// of its edges. This is an accepted limitation of the test.
pub fn point_in_polygon(point: &Coordinate, polygon: &[Coordinate]) -> bool {
    let extreme = Coordinate::from_xy(EXTREME_DISTANCE, point.y);
    let mut crossings = 0;
    for (i, current) in polygon.iter().enumerate() {
        let next = &polygon[(i + 1) % polygon.len()];
        if segments_intersect(current, next, point, &extreme) {
            if orientation(current, point, next) == Orientation::Colinear
                && on_segment(current, point, next)
            {
                return true;
            }
            crossings += 1;
        }
    }
    crossings % 2 == 1
}

/// Convex hull of a set of planar points using Andrew's monotone chain.
///
/// Colinear points on the hull boundary are excluded. Runs in O(n log n).
///
/// Example:
///
/// ```
/// use camproj_geometry::{convex_hull, Coordinate};
///
/// let points = [
///     Coordinate::from_xy(0.0, 0.0),
///     Coordinate::from_xy(2.0, 0.0),
///     Coordinate::from_xy(1.0, 1.0),
///     Coordinate::from_xy(2.0, 2.0),
///     Coordinate::from_xy(0.0, 2.0),
/// ];
/// assert_eq!(convex_hull(&points).len(), 4);
/// ```
pub fn convex_hull(points: &[Coordinate]) -> Vec<Coordinate> {
    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));

    if sorted.len() <= 1 {
        return sorted;
    }

    let upper = half_hull(sorted.iter());
    let lower = half_hull(sorted.iter().rev());

    if upper.len() == 1 && lower.len() == 1 && upper[0].x == lower[0].x && upper[0].y == lower[0].y {
        return upper;
    }

    upper.into_iter().chain(lower).collect()
}

// one chain of the monotone chain algorithm, without its last point
fn half_hull<'a>(points: impl Iterator<Item = &'a Coordinate>) -> Vec<Coordinate> {
    let mut hull: Vec<Coordinate> = Vec::new();
    for p in points {
        while hull.len() >= 2 {
            let q = hull[hull.len() - 1];
            let r = hull[hull.len() - 2];
            if (q.x - r.x) * (p.y - r.y) >= (q.y - r.y) * (p.x - r.x) {
                hull.pop();
            } else {
                break;
            }
        }
        hull.push(*p);
    }
    hull.pop();
    hull
}

/// Area of a simple polygon using the shoelace formula, in square meters.
///
/// # Errors
///
/// Returns [`GeometryError::NotEnoughPoints`] for fewer than three vertices.
pub fn polygon_area(points: &[Coordinate]) -> Result<f64, GeometryError> {
    if points.len() < 3 {
        return Err(GeometryError::NotEnoughPoints {
            required: 3,
            actual: points.len(),
        });
    }

    let twice_area = points
        .iter()
        .zip(points.iter().cycle().skip(1))
        .map(|(current, next)| current.x * next.y - current.y * next.x)
        .sum::<f64>();

    Ok((twice_area / 2.0).abs())
}
