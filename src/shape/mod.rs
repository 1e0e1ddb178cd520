//! Simple polygons, described by their corner points.
//!
//! Every [`Polygon`] can be displayed, so [`describe_polygon`] works the same way for any of them
//! through a trait object.

mod point;
mod polygon;
mod tests;

pub use point::*;
pub use polygon::*;
