use crate::{
    ast::{BinaryOperator, Token},
    error::RuntimeError,
    interpreter::evaluator::core::{EvalResult, Evaluator},
};

impl Evaluator<'_> {
    /// Evaluates a binary operation between two integers.
    ///
    /// All four operations are checked; division truncates toward zero.
    ///
    /// # Parameters
    /// - `op`: The operator token.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// The computed integer, or a `RuntimeError` for division by zero,
    /// overflow, or an operator token that is not `+`, `-`, `*` or `/`.
    ///
    /// # Example
    /// ```
    /// use minicalc::{
    ///     ast::{SyntaxKind, Token},
    ///     error::RuntimeError,
    ///     interpreter::evaluator::core::Evaluator,
    /// };
    ///
    /// let slash = Token::new(SyntaxKind::SlashToken, 1, "/", None);
    /// assert_eq!(Evaluator::eval_binary(&slash, -7, 2), Ok(-3));
    /// assert_eq!(Evaluator::eval_binary(&slash, 7, 0),
    ///            Err(RuntimeError::DivisionByZero { position: 1 }));
    /// ```
    pub fn eval_binary(op: &Token, left: i64, right: i64) -> EvalResult<i64> {
        use BinaryOperator::{Add, Div, Mul, Sub};

        let position = op.position;
        let Some(operator) = BinaryOperator::from_kind(op.kind) else {
            return Err(RuntimeError::UnsupportedOperator { kind: op.kind,
                                                           position });
        };

        let result = match operator {
            Add => left.checked_add(right),
            Sub => left.checked_sub(right),
            Mul => left.checked_mul(right),
            Div => {
                if right == 0 {
                    return Err(RuntimeError::DivisionByZero { position });
                }
                left.checked_div(right)
            },
        };

        result.ok_or(RuntimeError::Overflow { position })
    }
}
