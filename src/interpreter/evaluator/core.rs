use crate::{ast::Expr, error::RuntimeError};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Reduces a syntax tree to a single integer.
///
/// The evaluator holds no state besides the root it was created with, so the
/// same tree always evaluates to the same result and a failed evaluation
/// leaves nothing behind.
///
/// # Example
/// ```
/// use minicalc::{
///     ast::SyntaxTree,
///     error::RuntimeError,
///     interpreter::evaluator::core::Evaluator,
/// };
///
/// let tree = SyntaxTree::parse("10 - 3 - 2");
/// assert_eq!(Evaluator::new(tree.root()).evaluate(), Ok(5));
///
/// let tree = SyntaxTree::parse("5 / 0");
/// assert!(matches!(Evaluator::new(tree.root()).evaluate(),
///                  Err(RuntimeError::DivisionByZero { .. })));
/// ```
pub struct Evaluator<'a> {
    root: &'a Expr,
}

impl<'a> Evaluator<'a> {
    /// Creates an evaluator for the tree rooted at `root`.
    #[must_use]
    pub const fn new(root: &'a Expr) -> Self {
        Self { root }
    }

    /// Evaluates the root expression.
    pub fn evaluate(&self) -> EvalResult<i64> {
        let result = Self::eval(self.root);
        if let Err(e) = &result {
            tracing::debug!(error = %e, "evaluation failed");
        }
        result
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// The evaluator dispatches based on expression variant: literals yield
    /// their token's value, parenthesized expressions their inner value, and
    /// binary expressions combine both operands.
    pub fn eval(expr: &Expr) -> EvalResult<i64> {
        match expr {
            Expr::Literal { token } => {
                token.value
                     .ok_or(RuntimeError::MissingValue { position: token.position })
            },
            Expr::Parenthesized { expr, .. } => Self::eval(expr),
            Expr::Binary { left, op, right } => {
                let left = Self::eval(left)?;
                let right = Self::eval(right)?;
                Self::eval_binary(op, left, right)
            },
        }
    }
}
