use logos::Logos;

use crate::{
    ast::{SyntaxKind, Token},
    error::DiagnosticBag,
    text::TextSpan,
};

/// The raw lexical categories recognised in source text.
///
/// This is the pattern table driving the scanner. It only knows about text;
/// positions, trivia handling and diagnostics are added by [`Scanner`].
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(error = LexError)]
pub enum Lexeme {
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Number(i64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Spaces, tabs, newlines and other Unicode whitespace.
    #[regex(r"\s+")]
    Whitespace,
}

impl Lexeme {
    /// The syntax kind this lexeme becomes once wrapped in a [`Token`].
    #[must_use]
    pub const fn kind(self) -> SyntaxKind {
        match self {
            Self::Number(_) => SyntaxKind::NumberToken,
            Self::Plus => SyntaxKind::PlusToken,
            Self::Minus => SyntaxKind::MinusToken,
            Self::Star => SyntaxKind::AsteriskToken,
            Self::Slash => SyntaxKind::SlashToken,
            Self::LParen => SyntaxKind::OpenParenthesisToken,
            Self::RParen => SyntaxKind::CloseParenthesisToken,
            Self::Whitespace => SyntaxKind::WhitespaceToken,
        }
    }
}

/// Why a stretch of input did not form a lexeme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LexError {
    /// No pattern matched the character.
    #[default]
    BadCharacter,
    /// A digit run too large for an `i64`.
    NumberTooLarge,
}

/// Parses an integer literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Ok(i64)`: The parsed integer value if successful.
/// - `Err(LexError::NumberTooLarge)`: If the digits overflow an `i64`.
fn parse_integer(lex: &mut logos::Lexer<Lexeme>) -> Result<i64, LexError> {
    lex.slice().parse().map_err(|_| LexError::NumberTooLarge)
}

/// Turns source text into [`Token`]s, one per call to
/// [`Scanner::next_token`].
///
/// The scanner never fails. Unrecognised input becomes a
/// [`SyntaxKind::BadToken`] plus a diagnostic, and once the source is
/// exhausted every further call returns an end-of-file token at the final
/// position.
///
/// # Example
/// ```
/// use minicalc::{ast::SyntaxKind, interpreter::lexer::Scanner};
///
/// let mut scanner = Scanner::new("12 +");
/// assert_eq!(scanner.next_token().value, Some(12));
/// assert_eq!(scanner.next_token().kind, SyntaxKind::WhitespaceToken);
/// assert_eq!(scanner.next_token().kind, SyntaxKind::PlusToken);
/// assert_eq!(scanner.next_token().kind, SyntaxKind::EndOfFileToken);
/// assert_eq!(scanner.next_token().kind, SyntaxKind::EndOfFileToken);
/// ```
pub struct Scanner<'source> {
    lexer:       logos::Lexer<'source, Lexeme>,
    /// UTF-16 code units consumed so far; the position of the next token.
    position:    usize,
    diagnostics: DiagnosticBag,
}

impl<'source> Scanner<'source> {
    /// Creates a scanner positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'source str) -> Self {
        Self { lexer:       Lexeme::lexer(source),
               position:    0,
               diagnostics: DiagnosticBag::new(), }
    }

    /// Scans and returns the next token.
    pub fn next_token(&mut self) -> Token {
        let Some(result) = self.lexer.next() else {
            return Token::new(SyntaxKind::EndOfFileToken, self.position, String::new(), None);
        };

        let text = self.lexer.slice();
        let start = self.position;
        self.position += text.encode_utf16().count();

        let token = match result {
            Ok(Lexeme::Number(value)) => {
                Token::new(SyntaxKind::NumberToken, start, text, Some(value))
            },
            Ok(lexeme) => Token::new(lexeme.kind(), start, text, None),
            Err(LexError::NumberTooLarge) => {
                self.diagnostics
                    .report_invalid_number(TextSpan::from_bounds(start, self.position), text);
                Token::new(SyntaxKind::BadToken, start, text, None)
            },
            Err(LexError::BadCharacter) => {
                let mut offset = start;
                for character in text.chars() {
                    self.diagnostics.report_bad_character(offset, character);
                    offset += character.len_utf16();
                }
                Token::new(SyntaxKind::BadToken, start, text, None)
            },
        };

        tracing::trace!(%token, "scanned");
        token
    }

    /// Gives up the scanner, handing its diagnostics to the caller.
    #[must_use]
    pub fn into_diagnostics(self) -> DiagnosticBag {
        self.diagnostics
    }
}

/// Scans all of `source`, including trivia, up to and including the first
/// end-of-file token.
///
/// # Example
/// ```
/// use minicalc::{ast::SyntaxKind, interpreter::lexer::tokenize};
///
/// let (tokens, diagnostics) = tokenize("1+$");
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(kinds,
///            [SyntaxKind::NumberToken,
///             SyntaxKind::PlusToken,
///             SyntaxKind::BadToken,
///             SyntaxKind::EndOfFileToken]);
/// assert_eq!(diagnostics.len(), 1);
/// ```
#[must_use]
pub fn tokenize(source: &str) -> (Vec<Token>, DiagnosticBag) {
    let mut scanner = Scanner::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = scanner.next_token();
        let done = token.kind == SyntaxKind::EndOfFileToken;
        tokens.push(token);
        if done {
            break;
        }
    }
    (tokens, scanner.into_diagnostics())
}
