#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use super::*;
use crate::errors::RuntimeErrorKind;
use crate::value::Heap;
use pretty_assertions::assert_eq;

fn ints(values: &[i32]) -> Vec<Value> {
    values.iter().copied().map(Value::int).collect()
}

// check_bounds

#[test]
fn test_check_bounds_in_range() {
    assert_eq!(check_bounds(4, 5).unwrap(), 4);
    assert_eq!(check_bounds(0, 1).unwrap(), 0);
}

#[test]
fn test_check_bounds_negative() {
    assert_eq!(
        check_bounds(-1, 5).unwrap_err().kind,
        RuntimeErrorKind::NegativeIndex {
            index: -1,
            length: 5
        }
    );
}

#[test]
fn test_check_bounds_at_length() {
    assert_eq!(
        check_bounds(5, 5).unwrap_err().kind,
        RuntimeErrorKind::IndexOutOfRange {
            index: 5,
            length: 5
        }
    );
}

#[test]
fn test_check_bounds_empty() {
    assert!(check_bounds(0, 0).is_err());
}

// make_array / make_slice

#[test]
fn test_make_array_length_equals_capacity() {
    let s = make_array(3, &Value::int(0)).unwrap();
    assert_eq!(s.len(), 3);
    assert_eq!(s.cap(), 3);
    assert_eq!(s.to_vec(), ints(&[0, 0, 0]));
}

#[test]
fn test_make_array_elements_are_independent() {
    let example = Value::sequence(ints(&[1, 2]));
    let s = make_array(2, &example).unwrap();
    match (s.get(0).unwrap(), s.get(1).unwrap(), &example) {
        (Value::Sequence(a), Value::Sequence(b), Value::Sequence(orig)) => {
            assert!(!Heap::ptr_eq(&a, &b));
            assert!(!Heap::ptr_eq(&a, orig));
        }
        _ => panic!("expected sequences"),
    }
    assert_eq!(s.get(1).unwrap(), example);
}

#[test]
fn test_make_array_zero_length() {
    let s = make_array(0, &Value::int(0)).unwrap();
    assert!(s.is_empty());
    assert_eq!(s.cap(), 0);
}

#[test]
fn test_make_slice_with_spare_capacity() {
    let s = make_slice(1, 4, &Value::text("")).unwrap();
    assert_eq!(s.len(), 1);
    assert_eq!(s.cap(), 4);
}

#[test]
fn test_make_slice_rejects_bad_sizes() {
    assert_eq!(
        make_slice(-1, 2, &Value::int(0)).unwrap_err().kind,
        RuntimeErrorKind::NegativeLength { length: -1 }
    );
    assert_eq!(
        make_slice(3, 2, &Value::int(0)).unwrap_err().kind,
        RuntimeErrorKind::LengthExceedsCapacity {
            length: 3,
            capacity: 2
        }
    );
}

#[test]
fn test_make_array_rejects_void_example() {
    assert!(make_array(1, &Value::Void).is_err());
}

// append

#[test]
fn test_append_within_capacity_aliases() {
    let s = make_slice(1, 4, &Value::int(0)).unwrap();
    let t = append(&s, &Value::int(7)).unwrap();
    assert!(t.shares_backing(&s));
    assert_eq!(t.len(), 2);
    assert_eq!(t.cap(), 4);
    assert_eq!(s.len(), 1);

    t.set(0, Value::int(5)).unwrap();
    assert_eq!(s.get(0).unwrap(), Value::int(5));
}

#[test]
fn test_append_at_capacity_grows() {
    let s = make_array(2, &Value::int(1)).unwrap();
    let t = append(&s, &Value::int(2)).unwrap();
    assert!(!t.shares_backing(&s));
    assert_eq!(t.cap(), 4);
    assert_eq!(t.to_vec(), ints(&[1, 1, 2]));

    t.set(0, Value::int(9)).unwrap();
    assert_eq!(s.get(0).unwrap(), Value::int(1));
}

#[test]
fn test_append_to_empty_allocates_one() {
    let s = Slice::empty();
    let t = append(&s, &Value::int(1)).unwrap();
    assert_eq!(t.len(), 1);
    assert_eq!(t.cap(), 1);
}

#[test]
fn test_append_sibling_overwrites_shared_slot() {
    let base = make_slice(0, 2, &Value::int(0)).unwrap();
    let a = append(&base, &Value::int(1)).unwrap();
    let b = append(&base, &Value::int(2)).unwrap();
    assert_eq!(a.get(0).unwrap(), Value::int(2));
    assert_eq!(b.get(0).unwrap(), Value::int(2));
}

#[test]
fn test_append_copies_sequence_value() {
    let s = Slice::empty();
    let row = Value::sequence(ints(&[1, 2]));
    let t = append(&s, &row).unwrap();
    match (t.get(0).unwrap(), &row) {
        (Value::Sequence(stored), Value::Sequence(orig)) => {
            assert!(!Heap::ptr_eq(&stored, orig));
        }
        _ => panic!("expected sequences"),
    }
    assert_eq!(t.get(0).unwrap(), row);
}

#[test]
fn test_three_appends_fill_reserved_capacity() {
    let mut s = make_slice(0, 3, &Value::int(0)).unwrap();
    for n in 1..=3 {
        s = append(&s, &Value::int(n)).unwrap();
    }
    assert_eq!(s.len(), 3);
    assert_eq!(s.cap(), 3);
    assert_eq!(s.to_vec(), ints(&[1, 2, 3]));
}

#[test]
fn test_growth_doubles_capacity() {
    let mut s = Slice::empty();
    let mut caps = Vec::new();
    for n in 0..5 {
        s = append(&s, &Value::int(n)).unwrap();
        caps.push(s.cap());
    }
    assert_eq!(caps, vec![1, 2, 4, 4, 8]);
}

// get / set

#[test]
fn test_get_respects_header_length() {
    let base = make_slice(1, 3, &Value::int(0)).unwrap();
    let longer = append(&base, &Value::int(4)).unwrap();
    assert_eq!(longer.get(1).unwrap(), Value::int(4));
    assert_eq!(
        base.get(1).unwrap_err().kind,
        RuntimeErrorKind::IndexOutOfRange {
            index: 1,
            length: 1
        }
    );
}
