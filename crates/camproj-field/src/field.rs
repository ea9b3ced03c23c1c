use camproj_camera::CameraProjection;
use camproj_geometry::{
    convex_hull, line_intersection_point, point_in_polygon, polygon_area, Coordinate,
};
use serde::{Deserialize, Serialize};

/// The four corners of a field, ordered around its boundary.
pub type FieldPoints = [Coordinate; 4];

/// A field described by its center and extents, in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldExtent {
    /// Center of the field.
    pub center: Coordinate,
    /// Extent along the x axis.
    pub width: f64,
    /// Extent along the y axis.
    pub height: f64,
}

/// An axis-aligned rectangular region of interest on the ground plane.
///
/// The rectangle is defined by two opposite corners `c1` and `c2`; the other
/// two corners are derived from them as `c3 = (c1.x, c2.y)` and
/// `c4 = (c2.x, c1.y)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "FieldExtent", into = "FieldExtent")]
pub struct Field {
    c1: Coordinate,
    c2: Coordinate,
    c3: Coordinate,
    c4: Coordinate,
}

impl Field {
    /// Create a field from two opposite corners.
    pub fn new(c1: Coordinate, c2: Coordinate) -> Self {
        let mut field = Self {
            c1,
            c2,
            c3: c1,
            c4: c2,
        };
        field.set_points(c1, c2);
        field
    }

    /// Create a field from its center and extents.
    ///
    /// Example:
    ///
    /// ```
    /// use camproj_field::Field;
    /// use camproj_geometry::Coordinate;
    ///
    /// let field = Field::from_center(Coordinate::from_xy(40.0, 44.5), 110.0, 69.0);
    /// assert_eq!(field.area(), 110.0 * 69.0);
    /// ```
    pub fn from_center(center: Coordinate, width: f64, height: f64) -> Self {
        let (c1, c2) = corners_from_center(&center, width, height);
        Self::new(c1, c2)
    }

    /// Redefine the field from two opposite corners.
    pub fn set_points(&mut self, c1: Coordinate, c2: Coordinate) {
        self.c1 = c1;
        self.c2 = c2;
        self.c3 = Coordinate::from_xy(c1.x, c2.y);
        self.c4 = Coordinate::from_xy(c2.x, c1.y);
    }

    /// Redefine the field from its center and extents.
    pub fn set_from_center(&mut self, center: Coordinate, width: f64, height: f64) {
        let (c1, c2) = corners_from_center(&center, width, height);
        self.set_points(c1, c2);
    }

    /// Extent along the x axis.
    pub fn width(&self) -> f64 {
        (self.c2.x - self.c1.x).abs()
    }

    /// Extent along the y axis.
    pub fn height(&self) -> f64 {
        (self.c2.y - self.c1.y).abs()
    }

    /// Area of the field in square meters.
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Center of the field.
    pub fn center(&self) -> Coordinate {
        Coordinate::from_xy(
            self.c1.x.min(self.c2.x) + self.width() / 2.0,
            self.c1.y.min(self.c2.y) + self.height() / 2.0,
        )
    }

    /// The two corners defining the field, `c1` and `c2`.
    pub fn bound_points(&self) -> [Coordinate; 2] {
        [self.c1, self.c2]
    }

    /// The two derived corners, `c3` and `c4`.
    pub fn alternate_bound_points(&self) -> [Coordinate; 2] {
        [self.c3, self.c4]
    }

    /// Corners in boundary order `c1, c4, c2, c3`.
    pub fn points(&self) -> FieldPoints {
        [self.c1, self.c4, self.c2, self.c3]
    }

    /// Corners in boundary order `c3, c2, c4, c1`.
    pub fn points_abcd(&self) -> FieldPoints {
        [self.c3, self.c2, self.c4, self.c1]
    }

    /// The corner with the smallest x and y.
    pub fn lower_left(&self) -> Coordinate {
        Coordinate::from_xy(self.c1.x.min(self.c2.x), self.c1.y.min(self.c2.y))
    }

    /// Check whether the whole field lies inside `projection`.
    pub fn is_within(&self, projection: &CameraProjection) -> bool {
        self.points()
            .iter()
            .all(|corner| point_in_polygon(corner, projection))
    }

    /// Area of the part of the field covered by `projection`, in square meters.
    ///
    /// The overlap polygon is approximated by the convex hull of the field
    /// corners inside the projection, the projection corners inside the field and
    /// every crossing between a projection edge and a field edge. The field is
    /// convex, so this is exact for convex projections; for a self-intersecting
    /// quadrilateral the hull over-estimates the overlap.
    ///
    /// A projection that does not overlap the field gives zero.
    pub fn area_visible_within_projection(&self, projection: &CameraProjection) -> f64 {
        let field_points = self.points();

        let mut overlap: Vec<Coordinate> = field_points
            .iter()
            .filter(|corner| point_in_polygon(corner, projection))
            .copied()
            .collect();

        // the whole field is visible
        if overlap.len() == field_points.len() {
            return self.area();
        }

        for (i, p1) in projection.iter().enumerate() {
            let p2 = &projection[(i + 1) % projection.len()];

            if point_in_polygon(p1, &field_points) {
                overlap.push(*p1);
            }

            for (j, f1) in field_points.iter().enumerate() {
                let f2 = &field_points[(j + 1) % field_points.len()];
                if let Some(crossing) = line_intersection_point(p1, p2, f1, f2) {
                    overlap.push(crossing);
                }
            }
        }

        // fewer than three points enclose no area
        polygon_area(&convex_hull(&overlap)).unwrap_or(0.0)
    }
}

fn corners_from_center(center: &Coordinate, width: f64, height: f64) -> (Coordinate, Coordinate) {
    (
        Coordinate::from_xy(center.x - width / 2.0, center.y - height / 2.0),
        Coordinate::from_xy(center.x + width / 2.0, center.y + height / 2.0),
    )
}

impl From<FieldExtent> for Field {
    fn from(extent: FieldExtent) -> Self {
        Self::from_center(extent.center, extent.width, extent.height)
    }
}

impl From<Field> for FieldExtent {
    fn from(field: Field) -> Self {
        Self {
            center: field.center(),
            width: field.width(),
            height: field.height(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use camproj_camera::{Camera, CameraError, CameraProperties};

    fn c(x: f64, y: f64) -> Coordinate {
        Coordinate::from_xy(x, y)
    }

    fn square_projection(center: Coordinate, side: f64) -> CameraProjection {
        let h = side / 2.0;
        [
            c(center.x - h, center.y - h),
            c(center.x - h, center.y + h),
            c(center.x + h, center.y + h),
            c(center.x + h, center.y - h),
        ]
    }

    #[test]
    fn test_derived_corners() {
        let field = Field::new(c(0.0, 0.0), c(4.0, 2.0));
        assert_eq!(field.alternate_bound_points(), [c(0.0, 2.0), c(4.0, 0.0)]);
        assert_eq!(field.points(), [c(0.0, 0.0), c(4.0, 0.0), c(4.0, 2.0), c(0.0, 2.0)]);
        assert_eq!(field.points_abcd(), [c(0.0, 2.0), c(4.0, 2.0), c(4.0, 0.0), c(0.0, 0.0)]);
        assert_eq!(field.area(), 8.0);
    }

    #[test]
    fn test_from_center_round_trip() {
        let center = c(40.0, 44.5);
        let field = Field::from_center(center, 110.0, 69.0);
        assert_relative_eq!(field.center().x, center.x);
        assert_relative_eq!(field.center().y, center.y);
        assert_relative_eq!(field.width(), 110.0);
        assert_relative_eq!(field.height(), 69.0);
    }

    #[test]
    fn test_set_from_center() {
        let mut field = Field::new(c(0.0, 0.0), c(1.0, 1.0));
        field.set_from_center(c(-3.0, 2.0), 4.0, 6.0);
        assert_eq!(field.lower_left(), c(-5.0, -1.0));
        assert_eq!(field.center(), c(-3.0, 2.0));
    }

    #[test]
    fn test_corners_in_any_order() {
        let field = Field::new(c(5.0, 5.0), c(-5.0, -5.0));
        assert_eq!(field.width(), 10.0);
        assert_eq!(field.height(), 10.0);
        assert_eq!(field.lower_left(), c(-5.0, -5.0));
        assert_eq!(field.center(), c(0.0, 0.0));
    }

    #[test]
    fn test_area_visible_field_fully_covered() {
        let field = Field::from_center(Coordinate::ORIGIN, 10.0, 10.0);
        let projection = square_projection(Coordinate::ORIGIN, 100.0);
        assert!(field.is_within(&projection));
        assert_eq!(field.area_visible_within_projection(&projection), field.area());
    }

    #[test]
    fn test_area_visible_partial_overlap() {
        let field = Field::from_center(Coordinate::ORIGIN, 10.0, 10.0);
        let projection = square_projection(c(10.0, 10.0), 20.0);
        assert!(!field.is_within(&projection));
        assert_relative_eq!(field.area_visible_within_projection(&projection), 25.0, epsilon = 1e-9);
    }

    #[test]
    fn test_area_visible_projection_inside_field() {
        let field = Field::from_center(Coordinate::ORIGIN, 100.0, 100.0);
        let trapezoid = [c(-1.0, 1.0), c(-4.0, 10.0), c(4.0, 10.0), c(1.0, 1.0)];
        assert_relative_eq!(field.area_visible_within_projection(&trapezoid), 45.0, epsilon = 1e-9);
    }

    #[test]
    fn test_area_visible_no_overlap() {
        let field = Field::from_center(Coordinate::ORIGIN, 10.0, 10.0);
        let projection = square_projection(c(100.0, 100.0), 10.0);
        assert_eq!(field.area_visible_within_projection(&projection), 0.0);
    }

    #[test]
    fn test_area_visible_from_camera() -> Result<(), CameraError> {
        // looking straight down from 5 m gives a 10 x 5 m footprint
        let camera = Camera::new(CameraProperties::default())?;
        let field = Field::from_center(Coordinate::ORIGIN, 4.0, 4.0);
        let projection = camera.project()?;
        assert_eq!(field.area_visible_within_projection(&projection), 16.0);

        let wide_field = Field::from_center(Coordinate::ORIGIN, 20.0, 20.0);
        assert_relative_eq!(
            wide_field.area_visible_within_projection(&projection),
            camera.projection_area()?,
            epsilon = 1e-9
        );
        Ok(())
    }

    #[test]
    fn test_serde_as_extent() -> Result<(), Box<dyn std::error::Error>> {
        let field: Field = serde_json::from_str(
            r#"{"center": {"x": 40.0, "y": 44.5}, "width": 110.0, "height": 69.0}"#,
        )?;
        assert_eq!(field, Field::from_center(c(40.0, 44.5), 110.0, 69.0));

        let json = serde_json::to_string(&field)?;
        let decoded: Field = serde_json::from_str(&json)?;
        assert_eq!(decoded, field);
        Ok(())
    }
}
