#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # Camproj Camera
//!
//! A pin-hole camera mounted above the ground plane. The camera derives its
//! field of view from the sensor and focal distance, and projects its view
//! frustum onto the ground as a trapezoid.
//!
//! ## Example
//!
//! ```rust
//! use camproj_camera::{Camera, CameraProperties, Pole};
//! use camproj_geometry::Coordinate;
//!
//! let mut camera = Camera::new(CameraProperties::default())?;
//! let pole = Pole::new(Coordinate::ORIGIN, 10.0);
//! camera.mount_to_pole_top(&pole);
//! camera.point_at(&Coordinate::from_xy(20.0, 20.0));
//!
//! let trapezoid = camera.project()?;
//! println!("footprint: {:?}", trapezoid);
//! println!("area: {} m^2", camera.projection_area()?);
//! # Ok::<(), camproj_camera::CameraError>(())
//! ```

/// Camera model with field of view and ground projection.
pub mod camera;

/// Error types for the camera module.
pub mod error;

/// Vertical mounting poles.
pub mod pole;

/// Ground projection types.
pub mod projection;

/// Camera configuration.
pub mod properties;

pub use camera::{Camera, FieldOfView};
pub use error::CameraError;
pub use pole::Pole;
pub use projection::{CameraProjection, TrapezoidDistances};
pub use properties::CameraProperties;
