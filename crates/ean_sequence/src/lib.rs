//! Generic ordered sequence for EAN collections.
//!
//! This crate provides:
//! - [`Sequence`] - A resizable, index-addressable, insertion-ordered container
//! - Higher-order queries on [`Sequence`] (filter, map, fold, sort, find, ...)
//! - [`ops`] - Free functions over sequences (`concat`, `rest`, `slice`, ...)
//! - [`DisplayConfig`] - Rendering options for `Sequence[e1, e2, ...]`

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod display;
mod functional;
pub mod ops;
mod sequence;

pub use display::{DisplayConfig, DisplayWith};
pub use ean_foundation::{Error, ErrorKind, Number, Numeric, Result};
pub use sequence::Sequence;
