use camproj_camera::{Camera, Pole};
use camproj_field::Field;
use camproj_geometry::Coordinate;
use serde::{Deserialize, Serialize};

use crate::OptimizeError;

/// Side of the field a camera is assigned to by [`Environment::optimize_camera_yaws`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CameraGroup {
    /// Above or below the field; aimed along the horizontal center line.
    TopBottom,
    /// Left or right of the field; aimed along the vertical center line.
    LeftRight,
}

/// Aim point assigned to one camera.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YawTarget {
    /// Index of the camera in [`Environment::cameras`].
    pub camera_index: usize,
    /// Group the camera was sorted into.
    pub group: CameraGroup,
    /// Point the camera now faces.
    pub target: Coordinate,
}

/// A field surrounded by cameras and poles.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    cameras: Vec<Camera>,
    field: Option<Field>,
    poles: Vec<Pole>,
}

impl Environment {
    /// Create an environment from its parts.
    pub fn new(cameras: Vec<Camera>, field: Option<Field>, poles: Vec<Pole>) -> Self {
        Self {
            cameras,
            field,
            poles,
        }
    }

    /// The cameras, in insertion order.
    pub fn cameras(&self) -> &[Camera] {
        &self.cameras
    }

    /// Mutable access to the cameras.
    pub fn cameras_mut(&mut self) -> &mut [Camera] {
        &mut self.cameras
    }

    /// The field, if one was set.
    pub fn field(&self) -> Option<&Field> {
        self.field.as_ref()
    }

    /// Replace the field.
    pub fn set_field(&mut self, field: Field) {
        self.field = Some(field);
    }

    /// The poles, in insertion order.
    pub fn poles(&self) -> &[Pole] {
        &self.poles
    }

    /// Append a camera.
    pub fn add_camera(&mut self, camera: Camera) {
        self.cameras.push(camera);
    }

    /// Append a pole.
    pub fn add_pole(&mut self, pole: Pole) {
        self.poles.push(pole);
    }

    /// Spread the yaws of the cameras over the field.
    ///
    /// The two diagonals of the field split the plane into four sectors. A
    /// camera on the same side of both diagonals sits above or below the field
    /// and joins the top/bottom group, any other camera joins the left/right
    /// group. The `n` cameras of the top/bottom group, sorted by x, face the
    /// points splitting the horizontal center line into `n + 1` equal parts;
    /// the left/right group, sorted by y, does the same on the vertical center
    /// line. Only the yaws change.
    ///
    /// Returns the assigned targets, left/right group first.
    ///
    /// # Errors
    ///
    /// Returns [`OptimizeError::MissingField`] without a field and
    /// [`OptimizeError::DegenerateField`] when the field has no area.
    pub fn optimize_camera_yaws(&mut self) -> Result<Vec<YawTarget>, OptimizeError> {
        let field = self.field.as_ref().ok_or(OptimizeError::MissingField)?;
        let (width, height) = (field.width(), field.height());
        if width == 0.0 || height == 0.0 {
            return Err(OptimizeError::DegenerateField { width, height });
        }

        let [c1, c2] = field.bound_points();
        let [c3, c4] = field.alternate_bound_points();
        let diagonal = line_through(&c1, &c2);
        let other_diagonal = line_through(&c3, &c4);

        let mut top_bottom = Vec::new();
        let mut left_right = Vec::new();
        for (index, camera) in self.cameras.iter().enumerate() {
            let Coordinate { x, y, .. } = *camera.position();
            let (d1, d2) = (diagonal(x), other_diagonal(x));
            if (y >= d1 && y >= d2) || (y <= d1 && y <= d2) {
                top_bottom.push(index);
            } else {
                left_right.push(index);
            }
        }

        let position = |index: &usize| *self.cameras[*index].position();
        top_bottom.sort_by(|a, b| position(a).x.total_cmp(&position(b).x));
        left_right.sort_by(|a, b| position(a).y.total_cmp(&position(b).y));
        log::debug!(
            "camera yaws: {} left/right, {} top/bottom",
            left_right.len(),
            top_bottom.len()
        );

        let lower_left = field.lower_left();
        let center = field.center();
        let row_step = height / (left_right.len() + 1) as f64;
        let column_step = width / (top_bottom.len() + 1) as f64;

        let left_right_targets = left_right.iter().enumerate().map(|(i, &camera_index)| YawTarget {
            camera_index,
            group: CameraGroup::LeftRight,
            target: Coordinate::from_xy(center.x, lower_left.y + (i + 1) as f64 * row_step),
        });
        let top_bottom_targets = top_bottom.iter().enumerate().map(|(i, &camera_index)| YawTarget {
            camera_index,
            group: CameraGroup::TopBottom,
            target: Coordinate::from_xy(lower_left.x + (i + 1) as f64 * column_step, center.y),
        });
        let targets: Vec<YawTarget> = left_right_targets.chain(top_bottom_targets).collect();

        for target in &targets {
            let camera = &mut self.cameras[target.camera_index];
            camera.point_at(&target.target);
            log::info!(
                "camera {} ({:?}): target ({:.3}, {:.3}), yaw {:.4} rad",
                target.camera_index,
                target.group,
                target.target.x,
                target.target.y,
                camera.yaw()
            );
        }

        Ok(targets)
    }
}

// y of the line through `a` and `b` as a function of x
fn line_through(a: &Coordinate, b: &Coordinate) -> impl Fn(f64) -> f64 {
    let slope = (b.y - a.y) / (b.x - a.x);
    let (x0, y0) = (a.x, a.y);
    move |x| slope * (x - x0) + y0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use camproj_camera::CameraProperties;

    fn environment(positions: &[(f64, f64)]) -> Result<Environment, Box<dyn std::error::Error>> {
        let mut environment = Environment::default();
        environment.set_field(Field::from_center(Coordinate::ORIGIN, 110.0, 69.0));
        for &(x, y) in positions {
            let pole = Pole::new(Coordinate::from_xy(x, y), 10.0);
            let mut camera = Camera::new(CameraProperties::default())?;
            camera.mount_to_pole_top(&pole);
            environment.add_pole(pole);
            environment.add_camera(camera);
        }
        Ok(environment)
    }

    #[test]
    fn test_optimize_camera_yaws() -> Result<(), Box<dyn std::error::Error>> {
        let mut environment = environment(&[
            (60.0, 30.0),
            (60.0, -15.0),
            (-60.0, -30.0),
            (-60.0, 15.0),
            (-40.0, 40.0),
            (-25.0, 40.0),
            (25.0, -40.0),
            (40.0, -40.0),
        ])?;

        let targets = environment.optimize_camera_yaws()?;
        assert_eq!(targets.len(), 8);

        let left_right: Vec<_> = targets
            .iter()
            .filter(|t| t.group == CameraGroup::LeftRight)
            .collect();
        let indices: Vec<_> = left_right.iter().map(|t| t.camera_index).collect();
        assert_eq!(indices, vec![2, 1, 3, 0]);
        for (t, y) in left_right.iter().zip([-20.7, -6.9, 6.9, 20.7]) {
            assert_relative_eq!(t.target.x, 0.0);
            assert_relative_eq!(t.target.y, y, epsilon = 1e-9);
        }

        let top_bottom: Vec<_> = targets
            .iter()
            .filter(|t| t.group == CameraGroup::TopBottom)
            .collect();
        let indices: Vec<_> = top_bottom.iter().map(|t| t.camera_index).collect();
        assert_eq!(indices, vec![4, 5, 6, 7]);
        for (t, x) in top_bottom.iter().zip([-33.0, -11.0, 11.0, 33.0]) {
            assert_relative_eq!(t.target.x, x, epsilon = 1e-9);
            assert_relative_eq!(t.target.y, 0.0);
        }

        for target in &targets {
            let mut reference = environment.cameras()[target.camera_index].clone();
            reference.point_at(&target.target);
            assert_eq!(environment.cameras()[target.camera_index].yaw(), reference.yaw());
        }
        Ok(())
    }

    #[test]
    fn test_only_yaw_changes() -> Result<(), Box<dyn std::error::Error>> {
        let mut environment = environment(&[(0.0, 50.0), (70.0, 0.0)])?;
        let before: Vec<_> = environment.cameras().iter().map(|c| *c.properties()).collect();

        environment.optimize_camera_yaws()?;
        for (camera, properties) in environment.cameras().iter().zip(before) {
            assert_eq!(*camera.position(), properties.position);
            assert_eq!(camera.pitch(), properties.pitch);
        }
        // the camera above the field faces down towards its center line
        assert_relative_eq!(environment.cameras()[0].yaw().abs(), std::f64::consts::PI);
        Ok(())
    }

    #[test]
    fn test_missing_or_degenerate_field() -> Result<(), Box<dyn std::error::Error>> {
        let mut environment = Environment::default();
        assert_eq!(
            environment.optimize_camera_yaws(),
            Err(OptimizeError::MissingField)
        );

        environment.set_field(Field::from_center(Coordinate::ORIGIN, 0.0, 10.0));
        assert_eq!(
            environment.optimize_camera_yaws(),
            Err(OptimizeError::DegenerateField {
                width: 0.0,
                height: 10.0
            })
        );
        Ok(())
    }
}
