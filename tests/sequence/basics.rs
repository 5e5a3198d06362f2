//! Integration tests for construction, indexed access and mutation

use ean_collections::{ErrorKind, Sequence, sequence};

// =============================================================================
// Construction
// =============================================================================

#[test]
fn sequence_empty() {
    let s: Sequence<i32> = Sequence::new();
    assert!(s.is_empty());
    assert_eq!(s.len(), 0);
    assert_eq!(s.to_string(), "Sequence[]");
    assert_eq!(s, Sequence::default());
}

#[test]
fn sequence_push_grows_by_one() {
    let mut s = Sequence::new();
    for i in 0..10 {
        let before = s.len();
        s.push(i);
        assert_eq!(s.len(), before + 1);
        assert_eq!(s.last(), Some(&i));
    }
}

// =============================================================================
// Removal
// =============================================================================

#[test]
fn remove_then_out_of_range_noop() {
    let mut s = sequence!["a", "b", "c"];
    s.remove(1);
    assert_eq!(s, sequence!["a", "c"]);

    s.remove(10);
    assert_eq!(s, sequence!["a", "c"]);
}

#[test]
fn remove_negative() {
    let mut s = sequence![1, 2, 3];
    assert_eq!(s.remove(-3), Some(1));
    assert_eq!(s.remove(-3), None);
    assert_eq!(s.to_vec(), vec![2, 3]);
}

#[test]
fn clear_then_reuse() {
    let mut s = sequence![1, 2, 3];
    s.clear();
    assert!(s.is_empty());
    s.push(4);
    assert_eq!(s.to_vec(), vec![4]);
}

// =============================================================================
// Insertion
// =============================================================================

#[test]
fn insert_positions() {
    let mut s = sequence![2, 4];
    s.insert(3, 1).unwrap();
    s.insert(5, 3).unwrap();
    s.insert_front(1);
    assert_eq!(s.to_vec(), vec![1, 2, 3, 4, 5]);
}

#[test]
fn insert_into_empty() {
    let mut s = Sequence::new();
    s.insert("only", 0).unwrap();
    assert_eq!(s.first(), Some(&"only"));
    assert!(s.insert("late", 5).is_err());
}

#[test]
fn insert_error_reports_length() {
    let mut s = sequence![1];
    let err = s.insert(9, 2).unwrap_err();
    assert_eq!(err.kind, ErrorKind::IndexOutOfBounds { index: 2, length: 1 });
    assert_eq!(s.to_vec(), vec![1]);
}

// =============================================================================
// Indexed access
// =============================================================================

#[test]
fn get_out_of_range_is_none() {
    let s = sequence![10, 20];
    assert_eq!(s.get(2), None);
    assert_eq!(s.get(-3), None);
    assert_eq!(Sequence::<i32>::new().get(0), None);
}

#[test]
fn set_leaves_other_indices_unchanged() {
    let mut s = sequence![1, 2, 3, 4];
    s.set(2, 30);
    assert_eq!(s.get(2), Some(&30));
    assert_eq!(s.to_vec(), vec![1, 2, 30, 4]);
    s.set(-4, 10);
    assert_eq!(s.first(), Some(&10));
}

#[test]
fn set_out_of_range_is_silent() {
    let mut s = sequence![1, 2];
    s.set(2, 99);
    s.set(-3, 99);
    assert_eq!(s.to_vec(), vec![1, 2]);
}

#[test]
fn indices_drive_manual_loops() {
    let s = sequence!["x", "y", "z"];
    let mut visited = Vec::new();
    for i in s.indices() {
        visited.push(*s.get(isize::try_from(i).unwrap()).unwrap());
    }
    assert_eq!(visited, s.to_vec());
    let range = s.indices();
    assert_eq!(range.clone().sum::<usize>(), range.sum::<usize>());
}

// =============================================================================
// Queries
// =============================================================================

#[test]
fn contains_and_index_of_strings() {
    let s = sequence![String::from("ana"), String::from("luis")];
    assert!(s.contains(&String::from("luis")));
    assert_eq!(s.index_of(&String::from("luis")), Some(1));
    assert_eq!(s.index_of(&String::from("eva")), None);
}

#[test]
fn display_matches_format() {
    assert_eq!(sequence![1, 2, 3].to_string(), "Sequence[1, 2, 3]");
    assert_eq!(sequence!["a"].to_string(), "Sequence[a]");
}
