/// Core evaluation logic for expressions.
///
/// Contains the `Evaluator` entry point and the recursive dispatch over the
/// expression variants.
pub mod core;

/// Binary operator evaluation.
///
/// Implements the four integer operations with overflow and division by zero
/// checks.
pub mod binary;
