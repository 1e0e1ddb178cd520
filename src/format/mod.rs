//! String formatting helpers.

mod format;
mod tests;
mod vertex;

pub use format::*;
pub use vertex::*;
