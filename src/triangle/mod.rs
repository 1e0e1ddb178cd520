//! ASCII triangles, drawn in one of four [`Orientation`]s.
//!
//! Every orientation is described by a sequence of [`Row`]s, each of which is just a number of
//! leading spaces and a number of symbols. Rendering is then the same for all of them: write each
//! row followed by a line break and drop the final break.
//!
//! Sizes must be odd, so that each triangle has a single tip. Any even size (including 0) is
//! rejected up front with an [`InvalidSizeError`] and nothing is rendered.
//!
//! # Examples
//! ```
//! # use workbench::triangle::{self, Orientation};
//! assert_eq!(triangle::up('*', 5).unwrap(), "  *\n ***\n*****");
//! assert_eq!(
//!     triangle::draw(Orientation::Down, '#', 3).unwrap(),
//!     "###\n #"
//! );
//! assert!(triangle::right('*', 4).is_err());
//! ```

mod draw;
mod error;
mod orientation;
mod row;
mod tests;

pub use draw::*;
pub use error::*;
pub use orientation::*;
pub use row::*;
