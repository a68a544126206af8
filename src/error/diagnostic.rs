use std::fmt;

use crate::{ast::SyntaxKind, text::TextSpan};

/// A single recoverable problem found in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Where in the source the problem is.
    pub span:    TextSpan,
    /// Human readable description.
    pub message: String,
}

impl Diagnostic {
    /// Creates a diagnostic.
    #[must_use]
    pub fn new(span: TextSpan, message: impl Into<String>) -> Self {
        Self { span,
               message: message.into() }
    }

    /// Renders the diagnostic above the source line it refers to, with the
    /// offending span underlined by `^`.
    ///
    /// `source` is the single line that was parsed. Columns follow
    /// characters, so a character outside the Basic Multilingual Plane gets
    /// one caret even though it spans two code units. Zero-width spans (a
    /// missing token) get a single caret where the token was expected.
    ///
    /// # Example
    /// ```
    /// use minicalc::ast::SyntaxTree;
    ///
    /// let tree = SyntaxTree::parse("2+$3");
    /// assert_eq!(tree.diagnostics()[0].render("2+$3"),
    ///            "Error at 2: bad character input: `$`\n    2+$3\n      ^");
    /// ```
    #[must_use]
    pub fn render(&self, source: &str) -> String {
        let mut underline = String::from("    ");
        let mut offset = 0;
        let mut carets = 0;
        for character in source.chars() {
            if offset < self.span.start {
                underline.push(if character == '\t' { '\t' } else { ' ' });
            } else if offset < self.span.end() {
                underline.push('^');
                carets += 1;
            } else {
                break;
            }
            offset += character.len_utf16();
        }
        if carets == 0 {
            underline.push('^');
        }

        format!("{self}\n    {source}\n{underline}")
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error at {}: {}", self.span.start, self.message)
    }
}

/// Append-only collection of diagnostics for one parse.
///
/// The scanner owns a bag while it runs; the parser takes it over once the
/// token list is built and keeps appending, then freezes the result into the
/// syntax tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiagnosticBag {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticBag {
    /// Creates an empty bag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn report(&mut self, span: TextSpan, message: String) {
        tracing::debug!(%span, %message, "diagnostic reported");
        self.diagnostics.push(Diagnostic::new(span, message));
    }

    /// Reports a character the scanner does not recognise.
    pub fn report_bad_character(&mut self, position: usize, character: char) {
        self.report(TextSpan::new(position, character.len_utf16()),
                    format!("bad character input: `{character}`"));
    }

    /// Reports a digit run that does not fit in an `i64`.
    pub fn report_invalid_number(&mut self, span: TextSpan, text: &str) {
        self.report(span, format!("the number `{text}` is not a valid 64-bit integer"));
    }

    /// Reports a token of the wrong kind where `expected` was required.
    pub fn report_unexpected_token(&mut self,
                                   span: TextSpan,
                                   actual: SyntaxKind,
                                   expected: SyntaxKind) {
        self.report(span, format!("unexpected token {actual}, expected {expected}"));
    }

    /// Reports parentheses or operator chains deeper than the parser accepts.
    pub fn report_nested_too_deeply(&mut self, span: TextSpan, max_depth: usize) {
        self.report(span,
                    format!("expression nested too deeply, at most {max_depth} levels are allowed"));
    }

    /// Number of diagnostics collected so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Returns `true` when nothing was reported.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Iterates over the diagnostics in report order.
    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.diagnostics.iter()
    }

    /// Freezes the bag into a plain list.
    #[must_use]
    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}
