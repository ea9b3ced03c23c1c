use camproj_geometry::Coordinate;
use serde::{Deserialize, Serialize};

/// A vertical pole a camera can be mounted on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pole {
    // base of the pole; z is the ground elevation at the base
    position: Coordinate,
    // pole height in meters
    height: f64,
}

impl Pole {
    /// Create a pole standing at `position` with the given height in meters.
    pub fn new(position: Coordinate, height: f64) -> Self {
        Self { position, height }
    }

    /// Height of the pole in meters.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Set the height of the pole in meters.
    pub fn set_height(&mut self, height: f64) {
        self.height = height;
    }

    /// Position of the base of the pole.
    pub fn position(&self) -> &Coordinate {
        &self.position
    }

    /// Move the base of the pole.
    pub fn set_position(&mut self, position: Coordinate) {
        self.position = position;
    }

    /// Elevation of the top of the pole, i.e. the base z plus the height.
    pub fn top_of_pole_height(&self) -> f64 {
        self.position.z + self.height
    }
}
