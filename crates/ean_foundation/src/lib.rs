//! Core values, numeric conversion, index rules and errors for EAN collections.
//!
//! This crate provides:
//! - [`Value`] - A dynamically typed scalar for mixed-kind data
//! - [`Number`] and [`Numeric`] - The arithmetic used by `sum` and `average`
//! - [`index::normalize`] - Negative-index addressing
//! - [`Error`] - Error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod index;
pub mod number;
pub mod value;

pub use error::{Error, ErrorContext, ErrorKind};
pub use number::{Number, Numeric};
pub use value::Value;

/// Result type alias using the foundation [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
