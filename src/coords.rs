use std::fmt;

use serde::{Deserialize, Serialize};

/// Latitude/longitude pair, rounded to 6 decimal places on construction.
/// Serializes as a two-element array.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinate(pub f64, pub f64);

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Self {
        Coordinate(round6(lat), round6(lon))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}

fn round6(x: f64) -> f64 {
    (x * 1e6).round() / 1e6
}
