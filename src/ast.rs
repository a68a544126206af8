use std::fmt;

use crate::{
    error::{Diagnostic, RuntimeError},
    interpreter::{evaluator::core::Evaluator, parser::core::Parser, printer::pretty_print},
    text::TextSpan,
};

/// The closed set of token and node categories.
///
/// Token kinds come first; the last three variants classify expression
/// nodes. Both tokens and expressions report their category through this one
/// enum so that generic traversal (see [`SyntaxNode`]) can treat them
/// uniformly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyntaxKind {
    /// An integer literal such as `42`.
    NumberToken,
    /// `+`
    PlusToken,
    /// `-`
    MinusToken,
    /// `*`
    AsteriskToken,
    /// `/`
    SlashToken,
    /// `(`
    OpenParenthesisToken,
    /// `)`
    CloseParenthesisToken,
    /// A maximal run of whitespace.
    WhitespaceToken,
    /// Input the scanner could not make sense of.
    BadToken,
    /// Marks the end of the source.
    EndOfFileToken,
    /// A number literal wrapped as an expression.
    LiteralExpression,
    /// `( expression )`
    ParenthesizedExpression,
    /// `left <op> right`
    BinaryExpression,
}

impl SyntaxKind {
    /// Returns `true` for token kinds the parser never sees.
    #[must_use]
    pub const fn is_trivia(self) -> bool {
        matches!(self, Self::WhitespaceToken | Self::BadToken)
    }
}

impl fmt::Display for SyntaxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A single lexical unit produced by the scanner.
///
/// Tokens are plain data. Once created they are only read, and each one is
/// owned by the expression node that embeds it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Lexical category.
    pub kind:     SyntaxKind,
    /// Zero-based UTF-16 code-unit offset into the source.
    pub position: usize,
    /// The raw source text. Empty for tokens synthesized during error repair.
    pub text:     String,
    /// Parsed payload; present only for number tokens.
    pub value:    Option<i64>,
}

impl Token {
    /// Creates a token.
    #[must_use]
    pub fn new(kind: SyntaxKind,
               position: usize,
               text: impl Into<String>,
               value: Option<i64>)
               -> Self {
        Self { kind,
               position,
               text: text.into(),
               value }
    }

    /// Creates a zero-width token of `kind` at `position`, used by the parser
    /// to stand in for a token that was expected but missing.
    ///
    /// Missing number tokens carry the value `0` so the repaired tree stays
    /// evaluable.
    #[must_use]
    pub fn missing(kind: SyntaxKind, position: usize) -> Self {
        let value = (kind == SyntaxKind::NumberToken).then_some(0);
        Self::new(kind, position, String::new(), value)
    }

    /// The source range covered by the token text.
    #[must_use]
    pub fn span(&self) -> TextSpan {
        TextSpan::new(self.position, self.text.encode_utf16().count())
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}: '{}'", self.kind, self.position, self.text)?;
        if let Some(value) = self.value {
            write!(f, " = {value}")?;
        }
        Ok(())
    }
}

/// Binding strength of `+` and `-`.
pub const ADDITIVE_PRECEDENCE: u8 = 1;
/// Binding strength of `*` and `/`.
pub const MULTIPLICATIVE_PRECEDENCE: u8 = 2;

/// The four arithmetic operators understood by the evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl BinaryOperator {
    /// Maps a token kind to its operator, or `None` if the kind is not a
    /// binary operator.
    ///
    /// # Example
    /// ```
    /// use minicalc::ast::{BinaryOperator, SyntaxKind};
    ///
    /// assert_eq!(BinaryOperator::from_kind(SyntaxKind::SlashToken), Some(BinaryOperator::Div));
    /// assert_eq!(BinaryOperator::from_kind(SyntaxKind::NumberToken), None);
    /// ```
    #[must_use]
    pub const fn from_kind(kind: SyntaxKind) -> Option<Self> {
        match kind {
            SyntaxKind::PlusToken => Some(Self::Add),
            SyntaxKind::MinusToken => Some(Self::Sub),
            SyntaxKind::AsteriskToken => Some(Self::Mul),
            SyntaxKind::SlashToken => Some(Self::Div),
            _ => None,
        }
    }

    /// Binding strength; larger binds tighter.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => ADDITIVE_PRECEDENCE,
            Self::Mul | Self::Div => MULTIPLICATIVE_PRECEDENCE,
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{symbol}")
    }
}

/// An expression node of the syntax tree.
///
/// Nodes are built whole by the parser from already-parsed children and are
/// never changed afterwards. Concatenating the tokens reachable through
/// [`Expr::children`] reproduces the non-whitespace tokens the node was parsed
/// from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A number literal.
    Literal {
        /// The number token.
        token: Token,
    },
    /// An expression wrapped in parentheses.
    Parenthesized {
        /// The `(` token.
        open:  Token,
        /// The wrapped expression.
        expr:  Box<Self>,
        /// The `)` token, possibly synthesized.
        close: Token,
    },
    /// `left <op> right`.
    Binary {
        /// Left operand.
        left:  Box<Self>,
        /// The operator token.
        op:    Token,
        /// Right operand.
        right: Box<Self>,
    },
}

impl Expr {
    /// Wraps a number token as a literal expression.
    #[must_use]
    pub const fn literal(token: Token) -> Self {
        Self::Literal { token }
    }

    /// Builds a parenthesized expression.
    #[must_use]
    pub fn parenthesized(open: Token, expr: Self, close: Token) -> Self {
        Self::Parenthesized { open,
                              expr: Box::new(expr),
                              close }
    }

    /// Builds a binary expression.
    #[must_use]
    pub fn binary(left: Self, op: Token, right: Self) -> Self {
        Self::Binary { left: Box::new(left),
                       op,
                       right: Box::new(right) }
    }

    /// The node category.
    #[must_use]
    pub const fn kind(&self) -> SyntaxKind {
        match self {
            Self::Literal { .. } => SyntaxKind::LiteralExpression,
            Self::Parenthesized { .. } => SyntaxKind::ParenthesizedExpression,
            Self::Binary { .. } => SyntaxKind::BinaryExpression,
        }
    }

    /// The direct children of this node, in source order.
    #[must_use]
    pub fn children(&self) -> Vec<SyntaxNode<'_>> {
        match self {
            Self::Literal { token } => vec![SyntaxNode::Token(token)],
            Self::Parenthesized { open, expr, close } => {
                vec![SyntaxNode::Token(open), SyntaxNode::Expr(expr), SyntaxNode::Token(close)]
            },
            Self::Binary { left, op, right } => {
                vec![SyntaxNode::Expr(left), SyntaxNode::Token(op), SyntaxNode::Expr(right)]
            },
        }
    }

    /// The source range from the first to the last token of the node.
    #[must_use]
    pub fn span(&self) -> TextSpan {
        match self {
            Self::Literal { token } => token.span(),
            Self::Parenthesized { open, close, .. } => {
                TextSpan::from_bounds(open.position, close.span().end())
            },
            Self::Binary { left, right, .. } => {
                TextSpan::from_bounds(left.span().start, right.span().end())
            },
        }
    }

    /// Every token of the node, depth first, in source order.
    #[must_use]
    pub fn tokens(&self) -> Vec<&Token> {
        let mut tokens = Vec::new();
        collect_tokens(SyntaxNode::Expr(self), &mut tokens);
        tokens
    }

    /// Reduces the expression to an integer.
    ///
    /// Shorthand for `Evaluator::new(self).evaluate()`.
    pub fn evaluate(&self) -> Result<i64, RuntimeError> {
        Evaluator::new(self).evaluate()
    }
}

fn collect_tokens<'a>(node: SyntaxNode<'a>, out: &mut Vec<&'a Token>) {
    match node {
        SyntaxNode::Token(token) => out.push(token),
        SyntaxNode::Expr(expr) => {
            for child in expr.children() {
                collect_tokens(child, out);
            }
        },
    }
}

/// A borrowed view of any tree element: either a token or an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxNode<'a> {
    /// A leaf token.
    Token(&'a Token),
    /// An inner expression node.
    Expr(&'a Expr),
}

impl<'a> SyntaxNode<'a> {
    /// The category of the element.
    #[must_use]
    pub const fn kind(self) -> SyntaxKind {
        match self {
            Self::Token(token) => token.kind,
            Self::Expr(expr) => expr.kind(),
        }
    }

    /// Direct children; tokens have none.
    #[must_use]
    pub fn children(self) -> Vec<Self> {
        match self {
            Self::Token(_) => Vec::new(),
            Self::Expr(expr) => expr.children(),
        }
    }

    /// The token, if this element is one.
    #[must_use]
    pub const fn as_token(self) -> Option<&'a Token> {
        match self {
            Self::Token(token) => Some(token),
            Self::Expr(_) => None,
        }
    }
}

/// The product of parsing one source string.
///
/// Bundles the diagnostics collected while scanning and parsing, the root
/// expression, and the end-of-file token. A tree is built once and never
/// modified; if [`SyntaxTree::diagnostics`] is non-empty the root may contain
/// placeholder nodes and should not be trusted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxTree {
    diagnostics: Vec<Diagnostic>,
    root:        Expr,
    eof_token:   Token,
}

impl SyntaxTree {
    pub(crate) const fn new(diagnostics: Vec<Diagnostic>, root: Expr, eof_token: Token) -> Self {
        Self { diagnostics,
               root,
               eof_token }
    }

    /// Scans and parses `source` into a tree.
    ///
    /// Never fails: malformed input yields diagnostics and a best-effort
    /// tree.
    ///
    /// # Example
    /// ```
    /// use minicalc::ast::SyntaxTree;
    ///
    /// let tree = SyntaxTree::parse("2 + 3 * 4");
    /// assert!(tree.diagnostics().is_empty());
    /// assert_eq!(tree.root().evaluate().unwrap(), 14);
    ///
    /// let broken = SyntaxTree::parse("2 + $3");
    /// assert!(broken.has_errors());
    /// ```
    #[must_use]
    pub fn parse(source: &str) -> Self {
        Parser::new(source).parse()
    }

    /// Diagnostics in the order they were encountered.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Returns `true` when any diagnostic was reported.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// The root expression.
    #[must_use]
    pub const fn root(&self) -> &Expr {
        &self.root
    }

    /// The end-of-file token reached by the parser.
    #[must_use]
    pub const fn eof_token(&self) -> &Token {
        &self.eof_token
    }

    /// Evaluates the root expression.
    pub fn evaluate(&self) -> Result<i64, RuntimeError> {
        self.root.evaluate()
    }

    /// Renders the tree with box-drawing guides, one node per line.
    #[must_use]
    pub fn pretty(&self) -> String {
        let mut out = String::new();
        pretty_print(&mut out, SyntaxNode::Expr(&self.root), "", true);
        out
    }
}

impl fmt::Display for SyntaxTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pretty())
    }
}
