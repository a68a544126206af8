/// Core parser state and the parse entry point.
///
/// Holds the filtered token list, the cursor over it, and the diagnostics
/// carried over from the scanner; also implements token matching with error
/// repair.
pub mod core;

/// Binary operator parsing.
///
/// Implements the two precedence levels, additive and multiplicative, each
/// folding a left-leaning chain of binary expressions.
pub mod binary;

/// Primary expression parsing.
///
/// Number literals and parenthesized expressions, including the placeholder
/// literal synthesized when neither is found.
pub mod primary;
