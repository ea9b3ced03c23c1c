/// An error type for the geometry module.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// Error when a polygon has too few vertices for the requested operation.
    #[error("Polygon requires at least {required} points, got {actual}")]
    NotEnoughPoints {
        /// Minimum number of points required.
        required: usize,
        /// Number of points provided.
        actual: usize,
    },
}
