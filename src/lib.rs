//! EAN collections - teaching collections for an introductory data-structures course
//!
//! This crate re-exports both layers for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: ean_sequence   — Sequence<T>, higher-order queries, free functions
//! Layer 0: ean_foundation — Value, Number, index rules, Error
//! ```

pub use ean_foundation as foundation;
pub use ean_sequence as sequence;

pub use ean_foundation::{Error, ErrorKind, Number, Numeric, Result, Value};
pub use ean_sequence::ops::{concat, copy, of_elements, rest, slice};
pub use ean_sequence::{DisplayConfig, Sequence, sequence};
