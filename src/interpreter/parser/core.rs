use crate::{
    ast::{Expr, SyntaxKind, SyntaxTree, Token},
    error::DiagnosticBag,
    interpreter::lexer::Scanner,
};

/// Maximum height of a syntax tree built by the parser.
///
/// Parenthesis nesting and operator chains both add to the height. The
/// parser, evaluator and printer all recurse once per level, so anything
/// deeper is reported and cut off instead of being built.
pub const MAX_DEPTH: usize = 256;

/// An expression together with the height of its tree.
pub(in crate::interpreter::parser) struct Parsed {
    pub(in crate::interpreter::parser) expr:   Expr,
    /// Number of nodes on the longest root-to-leaf path.
    pub(in crate::interpreter::parser) height: usize,
}

impl Parsed {
    pub(in crate::interpreter::parser) const fn leaf(expr: Expr) -> Self {
        Self { expr, height: 1 }
    }
}

/// Recursive-descent parser over a fully buffered token list.
///
/// The constructor drives a [`Scanner`] to the end of the source, drops
/// whitespace and bad tokens (their diagnostics stay behind), and takes over
/// the scanner's diagnostics. [`Parser::parse`] then builds the tree.
///
/// # Example
/// ```
/// use minicalc::interpreter::parser::core::Parser;
///
/// let tree = Parser::new("(1 + 2) * 3").parse();
/// assert!(tree.diagnostics().is_empty());
/// assert_eq!(tree.evaluate().unwrap(), 9);
/// ```
pub struct Parser {
    /// Significant tokens, always ending in exactly one end-of-file token.
    pub(in crate::interpreter::parser) tokens:      Vec<Token>,
    /// Index of the current token.
    pub(in crate::interpreter::parser) position:    usize,
    /// Number of parentheses currently open.
    pub(in crate::interpreter::parser) depth:       usize,
    pub(in crate::interpreter::parser) diagnostics: DiagnosticBag,
    /// Set once the depth limit has been reported, so a long input yields a
    /// single diagnostic.
    too_deep: bool,
}

impl Parser {
    /// Scans `source` and prepares a parser over its tokens.
    #[must_use]
    pub fn new(source: &str) -> Self {
        let mut scanner = Scanner::new(source);
        let mut tokens = Vec::new();
        loop {
            let token = scanner.next_token();
            if token.kind == SyntaxKind::EndOfFileToken {
                tokens.push(token);
                break;
            }
            if !token.kind.is_trivia() {
                tokens.push(token);
            }
        }

        Self { tokens,
               position: 0,
               depth: 0,
               diagnostics: scanner.into_diagnostics(),
               too_deep: false }
    }

    /// Parses the whole token list into a [`SyntaxTree`].
    ///
    /// Grammar: `source := expression EOF`
    ///
    /// Never fails; anything malformed is reported in the tree's
    /// diagnostics.
    #[must_use]
    pub fn parse(mut self) -> SyntaxTree {
        let root = self.parse_expression().expr;
        let eof_token = self.match_token(SyntaxKind::EndOfFileToken);

        tracing::debug!(tokens = self.tokens.len(),
                        diagnostics = self.diagnostics.len(),
                        "parsed source");

        SyntaxTree::new(self.diagnostics.into_vec(), root, eof_token)
    }

    /// The current token.
    ///
    /// Past the end this stays on the final end-of-file token.
    pub(in crate::interpreter::parser) fn current(&self) -> &Token {
        let last = self.tokens.len() - 1;
        &self.tokens[self.position.min(last)]
    }

    /// Consumes and returns the current token.
    pub(in crate::interpreter::parser) fn next_token(&mut self) -> Token {
        let token = self.current().clone();
        self.position += 1;
        token
    }

    /// Consumes the current token if it has the `expected` kind.
    ///
    /// Otherwise reports the mismatch, still advances past the offending
    /// token, and returns a zero-width token of the expected kind at the
    /// current position so the caller can build a complete node.
    pub(in crate::interpreter::parser) fn match_token(&mut self, expected: SyntaxKind) -> Token {
        if self.current().kind == expected {
            return self.next_token();
        }

        let actual = self.next_token();
        self.diagnostics.report_unexpected_token(actual.span(), actual.kind, expected);
        Token::missing(expected, actual.position)
    }

    /// Reports that `at` lies beyond [`MAX_DEPTH`], once per parse.
    pub(in crate::interpreter::parser) fn report_too_deep(&mut self, at: &Token) {
        if !self.too_deep {
            self.too_deep = true;
            self.diagnostics.report_nested_too_deeply(at.span(), MAX_DEPTH);
        }
    }
}
