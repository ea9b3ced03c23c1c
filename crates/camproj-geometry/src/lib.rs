#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # Camproj Geometry
//!
//! Value types and predicates on the ground plane used by the projection and
//! coverage code: orientation tests, segment intersection, ray-casting
//! point-in-polygon, monotone chain convex hull and shoelace area.
//!
//! ## Example
//!
//! ```rust
//! use camproj_geometry::{polygon_area, Coordinate};
//!
//! let square = [
//!     Coordinate::from_xy(0.0, 0.0),
//!     Coordinate::from_xy(1.0, 0.0),
//!     Coordinate::from_xy(1.0, 1.0),
//!     Coordinate::from_xy(0.0, 1.0),
//! ];
//! let area = polygon_area(&square)?;
//! assert_eq!(area, 1.0);
//! # Ok::<(), camproj_geometry::GeometryError>(())
//! ```

/// Planar angles measured from the camera's forward axis.
pub mod angle;

/// Three dimensional point value type.
pub mod coordinate;

/// Error types for the geometry module.
pub mod error;

/// Polygon predicates, hull and area.
pub mod polygon;

/// Orientation and segment intersection tests.
pub mod segment;

pub use coordinate::Coordinate;
pub use error::GeometryError;
pub use polygon::{convex_hull, point_in_polygon, polygon_area};
pub use segment::{line_intersection_point, on_segment, orientation, segments_intersect, Orientation};
