use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_fixed_width_entry_names() {
    assert_eq!(BinaryOp::AddInt.entry_name(), "binary_Add_int");
    assert_eq!(BinaryOp::SubInt.entry_name(), "binary_Sub_int");
    assert_eq!(BinaryOp::MulInt.entry_name(), "binary_Mul_int");
    assert_eq!(BinaryOp::DivInt.entry_name(), "binary_Div_int");
}

#[test]
fn test_entry_names_round_trip() {
    for op in BinaryOp::ALL {
        assert_eq!(BinaryOp::from_entry_name(op.entry_name()), Some(op));
    }
    for op in UnaryOp::ALL {
        assert_eq!(UnaryOp::from_entry_name(op.entry_name()), Some(op));
    }
    assert_eq!(BinaryOp::from_entry_name("binary_Pow"), None);
    assert_eq!(UnaryOp::from_entry_name("binary_Add"), None);
}

#[test]
fn test_symbols() {
    assert_eq!(BinaryOp::BwAndNot.as_symbol(), "&^");
    assert_eq!(BinaryOp::MulInt.as_symbol(), BinaryOp::Mul.as_symbol());
    assert_eq!(UnaryOp::BwCompl.as_symbol(), "^");
    assert_eq!(UnaryOp::Not.as_symbol(), "!");
}

#[test]
fn test_classification() {
    assert!(BinaryOp::Or.is_short_circuit());
    assert!(BinaryOp::And.is_short_circuit());
    assert!(!BinaryOp::BwOr.is_short_circuit());

    assert!(BinaryOp::Leq.is_comparison());
    assert!(!BinaryOp::Add.is_comparison());

    assert!(BinaryOp::Mod.is_fixed_width());
    assert!(BinaryOp::MulInt.is_fixed_width());
    assert!(!BinaryOp::Mul.is_fixed_width());
    assert!(!BinaryOp::Div.is_fixed_width());
}

#[test]
fn test_all_is_exhaustive_and_unique() {
    let mut names: Vec<_> = BinaryOp::ALL.iter().map(|op| op.entry_name()).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), BinaryOp::ALL.len());
}
