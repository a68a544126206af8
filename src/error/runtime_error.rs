use crate::ast::SyntaxKind;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
///
/// Every variant carries the source position of the token that caused it.
pub enum RuntimeError {
    /// Attempted division by zero.
    DivisionByZero {
        /// Position of the `/` token.
        position: usize,
    },
    /// Arithmetic operation overflowed an `i64`.
    Overflow {
        /// Position of the operator token.
        position: usize,
    },
    /// A binary expression whose operator is not one of `+ - * /`.
    UnsupportedOperator {
        /// The kind of the offending operator token.
        kind:     SyntaxKind,
        /// Position of the operator token.
        position: usize,
    },
    /// A literal whose token carries no numeric value.
    MissingValue {
        /// Position of the literal token.
        position: usize,
    },
}

impl RuntimeError {
    /// Returns `true` for failures of the arithmetic itself, as opposed to a
    /// malformed tree.
    #[must_use]
    pub const fn is_arithmetic(&self) -> bool {
        matches!(self, Self::DivisionByZero { .. } | Self::Overflow { .. })
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero { position } => {
                write!(f, "Error at {position}: Division by zero.")
            },
            Self::Overflow { position } => write!(f,
                                                  "Error at {position}: Integer overflow while trying to compute result."),
            Self::UnsupportedOperator { kind, position } => {
                write!(f, "Error at {position}: Unsupported binary operator {kind}.")
            },
            Self::MissingValue { position } => {
                write!(f, "Error at {position}: Literal has no value.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
