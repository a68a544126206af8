use minicalc::{
    ast::{Expr, SyntaxKind, SyntaxTree, Token},
    error::RuntimeError,
    interpreter::evaluator::core::Evaluator,
};

fn number(value: i64, position: usize) -> Expr {
    Expr::literal(Token::new(SyntaxKind::NumberToken, position, value.to_string(), Some(value)))
}

fn evaluate(source: &str) -> Result<i64, RuntimeError> {
    let tree = SyntaxTree::parse(source);
    assert!(tree.diagnostics().is_empty(), "unexpected diagnostics for {source:?}");
    Evaluator::new(tree.root()).evaluate()
}

#[test]
fn evaluates_with_precedence_and_associativity() {
    assert_eq!(evaluate("2+3*4"), Ok(14));
    assert_eq!(evaluate("(2+3)*4"), Ok(20));
    assert_eq!(evaluate("10-3-2"), Ok(5));
    assert_eq!(evaluate("20/4/5"), Ok(1));
    assert_eq!(evaluate("((1+2)*(3+4)-1)/4"), Ok(5));
}

#[test]
fn division_by_zero_is_an_arithmetic_error() {
    let error = evaluate("5/0").unwrap_err();
    assert_eq!(error, RuntimeError::DivisionByZero { position: 1 });
    assert!(error.is_arithmetic());
    assert_eq!(error.to_string(), "Error at 1: Division by zero.");
}

#[test]
fn zero_divisor_from_subexpression() {
    assert!(matches!(evaluate("1/(3-3)"), Err(RuntimeError::DivisionByZero { .. })));
}

#[test]
fn overflow_is_reported() {
    assert_eq!(evaluate("9223372036854775807 + 1"),
               Err(RuntimeError::Overflow { position: 20 }));
    assert!(matches!(evaluate("0 - 9223372036854775807 - 2"),
                     Err(RuntimeError::Overflow { .. })));
    assert!(matches!(evaluate("(0-9223372036854775807-1)/(0-1)"),
                     Err(RuntimeError::Overflow { .. })));
}

#[test]
fn unsupported_operator_in_hand_built_tree() {
    let op = Token::new(SyntaxKind::OpenParenthesisToken, 1, "(", None);
    let tree = Expr::binary(number(1, 0), op, number(2, 2));

    let error = Evaluator::new(&tree).evaluate().unwrap_err();
    assert_eq!(error,
               RuntimeError::UnsupportedOperator { kind:     SyntaxKind::OpenParenthesisToken,
                                                   position: 1, });
    assert!(!error.is_arithmetic());
}

#[test]
fn literal_without_value_fails() {
    let tree = Expr::literal(Token::new(SyntaxKind::NumberToken, 4, "4", None));
    assert_eq!(tree.evaluate(), Err(RuntimeError::MissingValue { position: 4 }));
}

#[test]
fn hand_built_tree_evaluates() {
    let open = Token::new(SyntaxKind::OpenParenthesisToken, 0, "(", None);
    let close = Token::new(SyntaxKind::CloseParenthesisToken, 4, ")", None);
    let minus = Token::new(SyntaxKind::MinusToken, 2, "-", None);
    let inner = Expr::binary(number(9, 1), minus, number(4, 3));
    let tree = Expr::parenthesized(open, inner, close);
    assert_eq!(tree.evaluate(), Ok(5));
}

#[test]
fn evaluation_is_deterministic() {
    let tree = SyntaxTree::parse("7*(6-1)/2");
    let evaluator = Evaluator::new(tree.root());
    assert_eq!(evaluator.evaluate(), Ok(17));
    assert_eq!(evaluator.evaluate(), Ok(17));
}
