use std::fmt::{self, Display, Formatter};

/// A geographic coordinate, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vertex {
    pub lat: f64,
    pub long: f64,
}

impl Vertex {
    pub const fn new(lat: f64, long: f64) -> Vertex {
        Vertex { lat, long }
    }
}

impl Display for Vertex {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({:.5}, {:.5})", self.lat, self.long)
    }
}
