use crate::lang::token::*;

#[test]
fn test_exact_match_only() {
    assert_eq!(Register::from_token("x"), Some(Register::X));
    assert_eq!(Register::from_token("tick"), Some(Register::Tick));
    assert_eq!(Register::from_token("X"), None);
    assert_eq!(Register::from_token("xx"), None);
    assert_eq!(Operator::from_token("^="), Some(Operator::Xor));
    assert_eq!(Operator::from_token("=="), None);
    assert_eq!(Comparison::from_token("<="), Some(Comparison::LtEq));
    assert_eq!(Comparison::from_token("="), None);
    assert_eq!(Key::from_token("action"), Some(Key::Action));
    assert_eq!(Word::from_token(":"), Some(Word::Label));
    assert_eq!(Word::from_token("PRINT"), None);
}

#[test]
fn test_ids() {
    assert_eq!(Register::COUNT, 13);
    assert_eq!(Register::X.id(), 0);
    assert_eq!(Register::from_id(Register::Ink.id()), Some(Register::Ink));
    assert_eq!(Register::from_id(13), None);
    assert_eq!(Operator::from_id(9), None);
    assert_eq!(Key::from_id(4), Some(Key::Right));
}

#[test]
fn test_display() {
    assert_eq!(Register::Ink.to_string(), "ink");
    assert_eq!(Operator::Mod.to_string(), "%=");
    assert_eq!(Comparison::NotEq.to_string(), "!=");
}

#[test]
fn test_comparison_eval() {
    assert!(Comparison::Lt.eval(1, 2));
    assert!(!Comparison::Lt.eval(2, 2));
    assert!(Comparison::LtEq.eval(2, 2));
    assert!(Comparison::Gt.eval(255, 0));
    assert!(Comparison::GtEq.eval(0, 0));
    assert!(Comparison::Eq.eval(7, 7));
    assert!(Comparison::NotEq.eval(7, 8));
}
