use crate::{
    ast::{Expr, SyntaxKind, Token},
    interpreter::parser::core::{MAX_DEPTH, Parsed, Parser},
};

impl Parser {
    /// Parses a primary expression: a number or a parenthesized expression.
    ///
    /// The rule is: `primary := NUMBER | "(" expression ")"`
    ///
    /// A missing `)` is reported and replaced by a synthesized token. When
    /// neither a number nor `(` is found, the offending token is reported and
    /// consumed, and a literal with value `0` takes its place.
    ///
    /// # Returns
    /// An `Expr::Literal` or `Expr::Parenthesized` node.
    pub(in crate::interpreter::parser) fn parse_primary(&mut self) -> Parsed {
        if self.current().kind == SyntaxKind::OpenParenthesisToken {
            return self.parse_parenthesized();
        }

        let number = self.match_token(SyntaxKind::NumberToken);
        Parsed::leaf(Expr::literal(number))
    }

    /// Parses `"(" expression ")"`.
    ///
    /// Past [`MAX_DEPTH`] the whole group is skipped without recursing and a
    /// zero literal stands in for it.
    fn parse_parenthesized(&mut self) -> Parsed {
        let open = self.next_token();
        if self.depth >= MAX_DEPTH {
            self.report_too_deep(&open);
            self.skip_group();
            return Parsed::leaf(Expr::literal(Token::missing(SyntaxKind::NumberToken,
                                                             open.position)));
        }

        self.depth += 1;
        let inner = self.parse_expression();
        self.depth -= 1;
        let close = self.match_token(SyntaxKind::CloseParenthesisToken);

        let height = inner.height + 1;
        if height > MAX_DEPTH {
            self.report_too_deep(&open);
            return Parsed::leaf(Expr::literal(Token::missing(SyntaxKind::NumberToken,
                                                             open.position)));
        }

        Parsed { expr: Expr::parenthesized(open, inner.expr, close),
                 height }
    }

    /// Consumes tokens up to and including the `)` that balances an already
    /// consumed `(`, or up to the end of input.
    fn skip_group(&mut self) {
        let mut open = 1_usize;
        while open > 0 {
            match self.current().kind {
                SyntaxKind::EndOfFileToken => return,
                SyntaxKind::OpenParenthesisToken => open += 1,
                SyntaxKind::CloseParenthesisToken => open -= 1,
                _ => {},
            }
            self.position += 1;
        }
    }
}
