//! Integration tests for Value types
//!
//! Tests Value variants, equality, hashing, ordering and display.

use ean_foundation::Value;
use std::collections::HashSet;
use std::sync::Arc;

// =============================================================================
// Value Construction
// =============================================================================

#[test]
fn value_from_conversions() {
    assert_eq!(Value::from(true), Value::Bool(true));
    assert_eq!(Value::from(42i64), Value::Int(42));
    assert_eq!(Value::from(1.5f64), Value::Float(1.5));
    assert_eq!(Value::from("Bogota"), Value::String(Arc::from("Bogota")));
    assert_eq!(Value::from(String::from("Cali")).as_str(), Some("Cali"));
    assert_eq!(Value::from(Some(3i64)), Value::Int(3));
}

#[test]
fn value_text_filter() {
    let cells = [Value::Int(7), Value::from("Cali"), Value::Nil, Value::Float(0.5)];
    let texts: Vec<_> = cells.iter().filter_map(Value::as_str).collect();
    assert_eq!(texts, vec!["Cali"]);
}

// =============================================================================
// Equality and Hashing
// =============================================================================

#[test]
fn value_hash_set_dedupes() {
    let mut set = HashSet::new();
    set.insert(Value::Int(1));
    set.insert(Value::Int(1));
    set.insert(Value::Float(1.0));
    set.insert(Value::from("1"));
    assert_eq!(set.len(), 3);
}

#[test]
fn value_display() {
    assert_eq!(Value::Nil.to_string(), "nil");
    assert_eq!(Value::Int(-3).to_string(), "-3");
    assert_eq!(Value::Float(2.5).to_string(), "2.5");
    assert_eq!(Value::from("texto").to_string(), "texto");
}
