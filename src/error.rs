/// Recoverable scanner and parser findings.
///
/// Diagnostics are collected rather than raised; scanning and parsing always
/// run to completion and hand back whatever they found alongside a
/// best-effort tree.
pub mod diagnostic;
/// Parse failure surfaced by the one-shot entry points.
///
/// Wraps the diagnostics of a tree that could not be trusted, so callers that
/// want a plain `Result` can treat a malformed source as an error.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// division by zero, arithmetic overflow, or operators the evaluator does
/// not know.
pub mod runtime_error;

pub use diagnostic::{Diagnostic, DiagnosticBag};
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
