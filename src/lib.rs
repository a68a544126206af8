//! # minicalc
//!
//! minicalc is a small front-end for integer arithmetic written in Rust.
//! It scans a source string of integers, `+`, `-`, `*`, `/` and parentheses,
//! parses it into a syntax tree with the usual precedence rules, and
//! evaluates that tree to a single integer.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{ast::SyntaxTree, error::ParseError};

/// Defines the structure of parsed code.
///
/// This module declares the token model, the `Expr` enum, and the
/// `SyntaxTree` aggregate. The tree is built by the parser and traversed by
/// the evaluator and the pretty printer.
///
/// # Responsibilities
/// - Defines token and node kinds as one closed enumeration.
/// - Attaches source positions to every token for error reporting.
/// - Exposes child lists so any tree can be walked generically.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines the collected diagnostics of the scanner and parser,
/// and the errors raised while evaluating a tree.
///
/// # Responsibilities
/// - Defines diagnostics for malformed input (recoverable).
/// - Defines runtime errors for failed evaluations (fatal to that evaluation).
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of evaluation.
///
/// This module ties together lexing, parsing, evaluation and tree printing.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser and evaluator.
/// - Manages the flow of data and diagnostics between phases.
pub mod interpreter;
/// Source positions and ranges.
pub mod text;

/// Parses and evaluates `source` in one step.
///
/// If the source produces any diagnostic, they are returned together as a
/// [`ParseError`] and nothing is evaluated; otherwise the result of
/// evaluating the tree is returned.
///
/// # Errors
/// Returns an error if parsing reports diagnostics, or if evaluation fails
/// (division by zero, overflow).
///
/// # Examples
/// ```
/// use minicalc::get_result;
///
/// assert_eq!(get_result("(2 + 3) * 4").unwrap(), 20);
///
/// // Unknown character.
/// assert!(get_result("2 + $3").is_err());
///
/// // Division by zero.
/// assert!(get_result("5 / 0").is_err());
/// ```
pub fn get_result(source: &str) -> Result<i64, Box<dyn std::error::Error>> {
    let tree = SyntaxTree::parse(source);
    if tree.has_errors() {
        return Err(Box::new(ParseError { diagnostics: tree.diagnostics().to_vec() }));
    }
    Ok(tree.evaluate()?)
}
