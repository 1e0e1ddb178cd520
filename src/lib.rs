//! A workbench of small, independent utilities I wrote while learning the language.
//!
//! # Purpose
//! None of these modules are related to each other, they're just things I wanted to try writing:
//! an ASCII triangle renderer, a couple of generic collection helpers, a formatting helper, a
//! Fibonacci generator, some polygon types and a 2D vector type. The demo binary runs each of them
//! on its own.
//!
//! The most involved of these is [`triangle`], which renders triangles in four orientations using
//! a single shared row-drawing routine.
//!
//! # Error Handling
//! When something here can fail, it returns a [`Result`] with a concrete error struct that
//! implements [`Error`](std::error::Error), rather than boxing or stringly typing the error. At the
//! moment, the only real failure case is asking [`triangle`] for an even size.
//!
//! # Logging
//! The library only emits [`log`] records, it never installs a logger. The demo binary uses
//! `env_logger`, so `RUST_LOG=trace` shows what each call is doing.

// #![warn(missing_docs)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;
pub mod format;
pub mod sequence;
pub mod shape;
pub mod triangle;
pub mod vector;

pub(crate) mod util;
