use std::f64::consts::FRAC_PI_2;

use camproj_geometry::{angle, Coordinate};
use glam::DVec2;

use crate::{CameraError, CameraProjection, CameraProperties, Pole, TrapezoidDistances};

/// Field of view angles of a camera, in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldOfView {
    /// Angle spanned along the sensor width.
    pub horizontal: f64,
    /// Angle spanned along the sensor height.
    pub vertical: f64,
}

impl FieldOfView {
    fn from_properties(properties: &CameraProperties) -> Self {
        let fov = |length: f64| 2.0 * (length / (2.0 * properties.focal_distance)).atan();
        Self {
            horizontal: fov(properties.sensor_width),
            vertical: fov(properties.sensor_height),
        }
    }
}

/// A pin-hole camera looking at the ground plane.
///
/// The field of view is derived from the properties and recomputed every time
/// the properties are replaced.
#[derive(Debug, Clone)]
pub struct Camera {
    properties: CameraProperties,
    fov: FieldOfView,
}

impl Camera {
    /// Create a camera from its properties.
    ///
    /// # Errors
    ///
    /// Fails when the sensor size, resolution or focal distance is not positive.
    pub fn new(properties: CameraProperties) -> Result<Self, CameraError> {
        validate_optics(&properties)?;
        Ok(Self {
            fov: FieldOfView::from_properties(&properties),
            properties,
        })
    }

    /// Replace all the properties and recompute the field of view.
    ///
    /// # Errors
    ///
    /// Fails when the sensor size, resolution or focal distance is not positive.
    /// The camera is left unchanged in that case.
    pub fn set_properties(&mut self, properties: CameraProperties) -> Result<(), CameraError> {
        validate_optics(&properties)?;
        self.apply(properties);
        Ok(())
    }

    // optics are unchanged by pose updates, so no validation is needed
    fn apply(&mut self, properties: CameraProperties) {
        self.fov = FieldOfView::from_properties(&properties);
        self.properties = properties;
    }

    /// The camera's properties.
    pub fn properties(&self) -> &CameraProperties {
        &self.properties
    }

    /// The camera's position.
    pub fn position(&self) -> &Coordinate {
        &self.properties.position
    }

    /// The camera's pitch in radians.
    pub fn pitch(&self) -> f64 {
        self.properties.pitch
    }

    /// The camera's yaw in radians.
    pub fn yaw(&self) -> f64 {
        self.properties.yaw
    }

    /// Both field of view angles.
    pub fn fov(&self) -> FieldOfView {
        self.fov
    }

    /// Horizontal field of view in radians.
    pub fn horizontal_fov(&self) -> f64 {
        self.fov.horizontal
    }

    /// Vertical field of view in radians.
    pub fn vertical_fov(&self) -> f64 {
        self.fov.vertical
    }

    /// Horizontal sensor resolution in pixels.
    pub fn x_resolution(&self) -> u32 {
        self.properties.sensor_x_resolution
    }

    /// Vertical sensor resolution in pixels.
    pub fn y_resolution(&self) -> u32 {
        self.properties.sensor_y_resolution
    }

    /// Pitch beyond which the far edge of the view no longer meets the ground.
    pub fn maximum_pitch_angle(&self) -> f64 {
        FRAC_PI_2 - self.fov.vertical / 2.0
    }

    /// Move the camera to the top of `pole`, keeping every other property.
    pub fn mount_to_pole_top(&mut self, pole: &Pole) {
        let base = pole.position();
        let position = Coordinate::new(base.x, base.y, pole.top_of_pole_height());
        self.apply(self.properties.with_position(position));
    }

    /// Set the yaw so the camera faces `target` from its current position.
    ///
    /// The yaw is the signed angle between the camera's forward axis (+Y before
    /// rotation) and the vector to the target, positive to the left.
    pub fn point_at(&mut self, target: &Coordinate) {
        let relative = target.to_dvec2() - self.properties.position.to_dvec2();
        let yaw = angle::heading_from_up(relative);
        self.apply(self.properties.with_yaw(yaw));
    }

    /// Offsets and half widths of the projected trapezoid.
    ///
    /// # Errors
    ///
    /// Returns [`CameraError::DegenerateProjection`] when the near edge of the
    /// view points above the horizon behind the camera or the far edge points at
    /// or above the horizon.
    pub fn distances(&self) -> Result<TrapezoidDistances, CameraError> {
        let z = self.properties.position.z;
        let pitch = self.properties.pitch;
        let half_vfov = self.fov.vertical / 2.0;

        let near_angle = pitch - half_vfov;
        let far_angle = pitch + half_vfov;
        if !(near_angle > -FRAC_PI_2 && far_angle < FRAC_PI_2) {
            return Err(CameraError::DegenerateProjection {
                pitch,
                vertical_fov: self.fov.vertical,
            });
        }

        let width_factor = z * self.properties.sensor_width * half_vfov.cos()
            / (2.0 * self.properties.focal_distance);

        Ok(TrapezoidDistances {
            near_offset: z * near_angle.tan(),
            far_offset: z * far_angle.tan(),
            near_half_width: width_factor / near_angle.cos(),
            far_half_width: width_factor / far_angle.cos(),
        })
    }

    /// Project the camera's view onto the ground plane.
    ///
    /// The trapezoid is built in the camera's local frame, rotated by the yaw and
    /// translated to the camera position. The corners are ordered near-left,
    /// far-left, far-right, near-right.
    ///
    /// # Errors
    ///
    /// See [`Camera::distances`].
    pub fn project(&self) -> Result<CameraProjection, CameraError> {
        let d = self.distances()?;
        let origin = self.properties.position;
        let yaw = self.properties.yaw;
        // rotated points are planar, add_xy keeps them on the ground
        let to_world =
            |x: f64, y: f64| Coordinate::from(angle::rotate(DVec2::new(x, y), yaw)).add_xy(&origin);

        Ok([
            to_world(-d.near_half_width, d.near_offset),
            to_world(-d.far_half_width, d.far_offset),
            to_world(d.far_half_width, d.far_offset),
            to_world(d.near_half_width, d.near_offset),
        ])
    }

    /// Area of the projected trapezoid in square meters.
    ///
    /// # Errors
    ///
    /// See [`Camera::distances`].
    pub fn projection_area(&self) -> Result<f64, CameraError> {
        Ok(self.distances()?.area())
    }

    /// Ground extent covered across the sensor width, at the optical axis.
    pub fn ground_distance_x(&self) -> f64 {
        2.0 * self.properties.position.z * (self.fov.horizontal / 2.0).tan()
            / self.properties.pitch.cos()
    }

    /// Ground extent covered along the camera's forward axis.
    ///
    /// # Errors
    ///
    /// See [`Camera::distances`].
    pub fn ground_distance_y(&self) -> Result<f64, CameraError> {
        Ok(self.distances()?.length())
    }

    /// Average ground sampling distance across the sensor width, in m/px.
    pub fn average_ground_sampling_distance_x(&self) -> f64 {
        self.ground_distance_x() / self.properties.sensor_x_resolution as f64
    }

    /// Average ground sampling distance along the sensor height, in m/px.
    ///
    /// # Errors
    ///
    /// See [`Camera::distances`].
    pub fn average_ground_sampling_distance_y(&self) -> Result<f64, CameraError> {
        Ok(self.ground_distance_y()? / self.properties.sensor_y_resolution as f64)
    }
}

fn validate_optics(properties: &CameraProperties) -> Result<(), CameraError> {
    for dimension in [properties.sensor_width, properties.sensor_height] {
        if !(dimension.is_finite() && dimension > 0.0) {
            return Err(CameraError::InvalidSensorDimension(dimension));
        }
    }
    if !(properties.focal_distance.is_finite() && properties.focal_distance > 0.0) {
        return Err(CameraError::InvalidFocalDistance(properties.focal_distance));
    }
    for resolution in [properties.sensor_x_resolution, properties.sensor_y_resolution] {
        if resolution == 0 {
            return Err(CameraError::InvalidResolution(resolution));
        }
    }
    Ok(())
}
