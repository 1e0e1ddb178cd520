//! A small 2D vector math library, built around [`Vector2D`].
//!
//! # Method
//! Every operation comes in two flavours. The value methods (`scale`, `rotate`, etc.) take `self`
//! by copy and return a new vector, while the `_in_place` methods mutate the vector and return
//! `&mut Self` so that they can be chained. Addition, subtraction and scaling are also available
//! through the usual operators.

mod vector;

pub use vector::*;
