#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

mod field;
pub use field::{Field, FieldExtent, FieldPoints};
