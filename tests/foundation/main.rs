//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: Value, Number, index normalization and Error.

mod values;
