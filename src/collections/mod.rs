//! Generic helpers for maps and slices.
//!
//! These are deliberately thin: the map helpers work on any [`HashMap`](std::collections::HashMap)
//! regardless of its hasher, and the slice helpers always allocate a new [`Vec`] of exactly the
//! right length.

mod map;
mod slice;

pub use map::*;
pub use slice::*;
