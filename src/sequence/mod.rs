//! Number sequence generators.
//!
//! At the moment this is just the Fibonacci sequence, available as an [`Iterator`]
//! ([`Fibonacci`]) and as a stateful closure ([`fibonacci_generator`]).

mod fibonacci;

pub use fibonacci::*;
