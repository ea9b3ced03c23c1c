use camproj_geometry::Coordinate;
use serde::{Deserialize, Serialize};

/// Optical and pose configuration of a camera.
///
/// The struct is a plain value. Pose changes go through the `with_*` methods,
/// which return an updated copy that is then handed to
/// [`Camera::set_properties`](crate::Camera::set_properties) as a whole.
///
/// Fields missing from a serialized configuration fall back to the values of
/// [`CameraProperties::default`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CameraProperties {
    /// Physical width of the sensor in mm.
    pub sensor_width: f64,
    /// Physical height of the sensor in mm.
    pub sensor_height: f64,
    /// Horizontal pixel resolution of the sensor.
    pub sensor_x_resolution: u32,
    /// Vertical pixel resolution of the sensor.
    pub sensor_y_resolution: u32,
    /// Distance of the image plane from the focal point in mm.
    pub focal_distance: f64,
    /// Rotation about the vertical axis in radians, counterclockwise from +Y.
    pub yaw: f64,
    /// Elevation of the optical axis in radians, zero looks straight down.
    pub pitch: f64,
    /// Camera position; `z` is the mounting height in meters.
    pub position: Coordinate,
    /// Height of the pole the camera is meant for, in meters.
    pub pole_height: f64,
    /// Frame rate in frames per second.
    pub frame_rate: Option<f64>,
    /// Unit price.
    pub price: Option<f64>,
    /// Target ground sampling distance in m/px.
    pub target_gsd: Option<f64>,
}

impl Default for CameraProperties {
    fn default() -> Self {
        Self {
            sensor_width: 2.0,
            sensor_height: 1.0,
            sensor_x_resolution: 2000,
            sensor_y_resolution: 1000,
            focal_distance: 1.0,
            yaw: 0.0,
            pitch: 0.0,
            position: Coordinate::new(0.0, 0.0, 5.0),
            pole_height: 15.0,
            frame_rate: Some(30.0),
            price: Some(0.0),
            target_gsd: Some(0.01),
        }
    }
}

impl CameraProperties {
    /// Copy with a new yaw.
    pub fn with_yaw(self, yaw: f64) -> Self {
        Self { yaw, ..self }
    }

    /// Copy with a new pitch.
    pub fn with_pitch(self, pitch: f64) -> Self {
        Self { pitch, ..self }
    }

    /// Copy with a new position.
    pub fn with_position(self, position: Coordinate) -> Self {
        Self { position, ..self }
    }

    /// Copy with a new yaw, pitch and position.
    pub fn with_pose(self, yaw: f64, pitch: f64, position: Coordinate) -> Self {
        Self {
            yaw,
            pitch,
            position,
            ..self
        }
    }

    /// Copy with a new focal distance in mm.
    pub fn with_focal_distance(self, focal_distance: f64) -> Self {
        Self {
            focal_distance,
            ..self
        }
    }

    /// Copy with a new sensor size in mm.
    pub fn with_sensor_size(self, sensor_width: f64, sensor_height: f64) -> Self {
        Self {
            sensor_width,
            sensor_height,
            ..self
        }
    }

    /// Copy with a new sensor resolution in pixels.
    pub fn with_resolution(self, sensor_x_resolution: u32, sensor_y_resolution: u32) -> Self {
        Self {
            sensor_x_resolution,
            sensor_y_resolution,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_methods_return_copies() {
        let base = CameraProperties::default();
        let moved = base
            .with_yaw(1.0)
            .with_pitch(0.5)
            .with_position(Coordinate::new(1.0, 2.0, 3.0));

        assert_eq!(base.yaw, 0.0);
        assert_eq!(moved.yaw, 1.0);
        assert_eq!(moved.pitch, 0.5);
        assert_eq!(moved.position, Coordinate::new(1.0, 2.0, 3.0));
        assert_eq!(moved.focal_distance, base.focal_distance);
        assert_eq!(moved, base.with_pose(1.0, 0.5, Coordinate::new(1.0, 2.0, 3.0)));
    }

    #[test]
    fn test_serde_round_trip() -> Result<(), Box<dyn std::error::Error>> {
        let properties = CameraProperties::default()
            .with_sensor_size(14.5, 10.25)
            .with_resolution(4112, 3008)
            .with_focal_distance(20.0)
            .with_pose(0.25, 0.5, Coordinate::new(1.0, 2.0, 10.0));
        let json = serde_json::to_string(&properties)?;
        let decoded: CameraProperties = serde_json::from_str(&json)?;
        assert_eq!(decoded, properties);
        Ok(())
    }

    #[test]
    fn test_missing_fields_use_defaults() -> Result<(), Box<dyn std::error::Error>> {
        let decoded: CameraProperties =
            serde_json::from_str(r#"{"focalDistance": 20.0, "sensorXResolution": 4112}"#)?;
        let expected = CameraProperties {
            focal_distance: 20.0,
            sensor_x_resolution: 4112,
            ..Default::default()
        };
        assert_eq!(decoded, expected);
        Ok(())
    }
}
