#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use super::*;
use crate::errors::RuntimeErrorKind;

fn point(x: f64, y: f64) -> Composite {
    Composite::from_fields([("x", Value::Number(x)), ("y", Value::Number(y))])
}

#[test]
fn test_layout_indices_follow_declaration_order() {
    let layout = CompositeLayout::new(["b", "a", "c"]);
    assert_eq!(layout.get_index("b"), Some(0));
    assert_eq!(layout.get_index("a"), Some(1));
    assert_eq!(layout.get_index("c"), Some(2));
    assert_eq!(layout.get_index("d"), None);
    assert_eq!(layout.len(), 3);
    assert!(!layout.is_empty());
}

#[test]
fn test_get_field() {
    let p = point(1.0, 2.0);
    assert_eq!(p.get("x"), Some(&Value::Number(1.0)));
    assert_eq!(p.get("z"), None);
}

#[test]
fn test_set_field_does_not_touch_clone() {
    let original = point(1.0, 2.0);
    let mut copy = original.clone();
    copy.set("x", Value::Number(9.0)).unwrap();
    assert_eq!(original.get("x"), Some(&Value::Number(1.0)));
    assert_eq!(copy.get("x"), Some(&Value::Number(9.0)));
}

#[test]
fn test_set_unknown_field() {
    let mut p = point(1.0, 2.0);
    let err = p.set("z", Value::Number(0.0)).unwrap_err();
    assert_eq!(
        err.kind,
        RuntimeErrorKind::UndefinedField {
            field: "z".to_string()
        }
    );
}

#[test]
fn test_new_rejects_field_count_mismatch() {
    let layout = Heap::new(CompositeLayout::new(["x", "y"]));
    assert!(Composite::new(layout.clone(), vec![Value::Number(1.0)]).is_err());
    assert!(Composite::new(layout, vec![Value::Number(1.0), Value::Number(2.0)]).is_ok());
}

#[test]
fn test_iter_in_layout_order() {
    let p = point(3.0, 4.0);
    let names: Vec<&str> = p.iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["x", "y"]);
}
