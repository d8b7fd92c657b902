use crate::number::Number;
use crate::operator::{Operator, OperatorError, parse_operators};

fn n(value: i64) -> Number {
    Number::from_integer(value)
}

#[test]
fn test_catalog_order_and_symbols() {
    let symbols: String = Operator::ALL.iter().map(|op| op.symbol()).collect();
    assert_eq!(symbols, "+-*/^");
    assert_eq!(Operator::Pow.to_string(), "^");
}

#[test]
fn test_commutativity_flags() {
    assert!(Operator::Add.is_commutative());
    assert!(Operator::Mul.is_commutative());
    assert!(!Operator::Sub.is_commutative());
    assert!(!Operator::Div.is_commutative());
    assert!(!Operator::Pow.is_commutative());
}

#[test]
fn test_precedence_levels() {
    assert_eq!(Operator::Add.precedence(), Operator::Sub.precedence());
    assert_eq!(Operator::Mul.precedence(), Operator::Div.precedence());
    assert!(Operator::Add.precedence() > Operator::Mul.precedence());
    assert!(Operator::Mul.precedence() > Operator::Pow.precedence());
}

#[test]
fn test_division_guard() {
    assert!(Operator::Div.is_valid(&n(3), &n(2)));
    assert!(!Operator::Div.is_valid(&n(3), &n(0)));
    assert!(Operator::Div.is_valid(&n(0), &n(3)));
    assert_eq!(Operator::Div.apply(&n(3), &n(0)), None);
    assert_eq!(Operator::Div.apply(&n(3), &n(2)), Number::new(3, 2));
}

#[test]
fn test_power_guard() {
    assert!(Operator::Pow.is_valid(&n(2), &n(10)));
    assert!(!Operator::Pow.is_valid(&n(2), &n(11)));
    assert!(!Operator::Pow.is_valid(&n(2), &n(-11)));
    assert!(Operator::Pow.is_valid(&n(2), &n(-10)));
    assert!(!Operator::Pow.is_valid(&n(0), &n(0)));
    assert!(!Operator::Pow.is_valid(&n(0), &n(-2)));
    assert!(Operator::Pow.is_valid(&n(0), &n(2)));
    assert!(Operator::Pow.is_valid(&n(-2), &n(3)));

    let half = Number::new(1, 2).unwrap_or_default();
    assert!(!Operator::Pow.is_valid(&n(-4), &half));
    assert!(Operator::Pow.is_valid(&n(4), &half));
}

#[test]
fn test_apply_values() {
    assert_eq!(Operator::Add.apply(&n(5), &n(3)), Some(n(8)));
    assert_eq!(Operator::Sub.apply(&n(3), &n(5)), Some(n(-2)));
    assert_eq!(Operator::Mul.apply(&n(4), &n(6)), Some(n(24)));
    assert_eq!(Operator::Pow.apply(&n(2), &n(3)), Some(n(8)));
}

#[test]
fn test_power_without_rational_result_is_not_applied() {
    let half = Number::new(1, 2).unwrap_or_default();
    assert!(Operator::Pow.is_valid(&n(2), &half));
    assert_eq!(Operator::Pow.apply(&n(2), &half), None);
    assert_eq!(Operator::Pow.apply(&n(4), &half), Some(n(2)));
}

#[test]
fn test_from_symbol() {
    assert_eq!(Operator::from_symbol('*'), Ok(Operator::Mul));
    assert_eq!(
        Operator::from_symbol('%'),
        Err(OperatorError::UnknownSymbol { symbol: '%' })
    );
}

#[test]
fn test_parse_operators_keeps_catalog_order() {
    let result = parse_operators("^/+");
    assert_eq!(
        result,
        Ok(vec![Operator::Add, Operator::Div, Operator::Pow])
    );

    let result = parse_operators("++--");
    assert_eq!(result, Ok(vec![Operator::Add, Operator::Sub]));
}

#[test]
fn test_parse_operators_rejects_bad_input() {
    assert_eq!(parse_operators(""), Err(OperatorError::EmptySet));
    assert_eq!(parse_operators("  "), Err(OperatorError::EmptySet));
    assert_eq!(
        parse_operators("+x"),
        Err(OperatorError::UnknownSymbol { symbol: 'x' })
    );
}
