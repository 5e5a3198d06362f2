//! Integration tests for free functions over sequences

use ean_collections::{ErrorKind, Sequence, concat, copy, of_elements, rest, sequence, slice};

#[test]
fn concat_layout() {
    let a = sequence![1, 2, 3];
    let b = sequence![4, 5];
    let c = concat(&a, &b);
    assert_eq!(c.len(), a.len() + b.len());
    assert_eq!(c.get(0), a.get(0));
    assert_eq!(c.get(3), b.get(0));
    assert_eq!(c.to_string(), "Sequence[1, 2, 3, 4, 5]");
}

#[test]
fn of_elements_from_any_iterable() {
    let from_array = of_elements(["a", "b", "c"]);
    let from_range: Sequence<i32> = of_elements(1..=3);
    assert_eq!(from_array.len(), 3);
    assert_eq!(from_range, sequence![1, 2, 3]);
}

#[test]
fn rest_for_recursion() {
    fn total(s: &Sequence<i32>) -> i32 {
        match s.first() {
            None => 0,
            Some(head) => head + total(&rest(s)),
        }
    }
    assert_eq!(total(&sequence![1, 2, 3, 4]), 10);
}

#[test]
fn copy_independence() {
    let original = sequence![1, 2, 3];
    let mut copied = copy(&original);
    assert_eq!(copied, original);
    copied.set(0, 100);
    copied.push(4);
    assert_eq!(original, sequence![1, 2, 3]);
    assert_ne!(copied, original);
}

#[test]
fn slice_scenarios() {
    assert_eq!(slice(&of_elements([1, 2, 3]), 1..3).unwrap(), sequence![2, 3]);

    let empty: Sequence<i32> = of_elements([]);
    let err = slice(&empty, 0..0).unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidSlice { start: 0, end: 0 });
}

#[test]
fn slice_defaults() {
    let s = sequence!["a", "b", "c"];
    assert_eq!(slice(&s, ..).unwrap(), s);
    assert_eq!(slice(&s, 2..).unwrap(), sequence!["c"]);
    assert_eq!(slice(&s, ..1).unwrap(), sequence!["a"]);
}
