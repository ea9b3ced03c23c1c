#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

#[doc(inline)]
pub use camproj_geometry as geometry;

#[doc(inline)]
pub use camproj_camera as camera;

#[doc(inline)]
pub use camproj_field as field;

#[doc(inline)]
pub use camproj_optim as optim;
