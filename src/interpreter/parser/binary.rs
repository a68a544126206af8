use crate::{
    ast::{ADDITIVE_PRECEDENCE, BinaryOperator, Expr, MULTIPLICATIVE_PRECEDENCE},
    interpreter::parser::core::{MAX_DEPTH, Parsed, Parser},
};

impl Parser {
    /// Parses a full expression.
    ///
    /// This is the entry point for expression parsing; it begins at the
    /// lowest-precedence level.
    ///
    /// Grammar: `expression := term`
    pub(in crate::interpreter::parser) fn parse_expression(&mut self) -> Parsed {
        self.parse_term()
    }

    /// Parses addition and subtraction expressions.
    ///
    /// Handles left-associative binary operators: `+` and `-`.
    ///
    /// The rule is: `term := factor (("+" | "-") factor)*`
    ///
    /// # Returns
    /// A left-leaning `Expr::Binary` chain, or the lone factor.
    pub(in crate::interpreter::parser) fn parse_term(&mut self) -> Parsed {
        let mut left = self.parse_factor();
        while self.current_operator_has(ADDITIVE_PRECEDENCE) {
            left = self.parse_operand(left, Self::parse_factor);
        }
        left
    }

    /// Parses multiplication and division expressions.
    ///
    /// Handles left-associative binary operators: `*` and `/`.
    ///
    /// The rule is: `factor := primary (("*" | "/") primary)*`
    ///
    /// # Returns
    /// A left-leaning `Expr::Binary` chain, or the lone primary.
    pub(in crate::interpreter::parser) fn parse_factor(&mut self) -> Parsed {
        let mut left = self.parse_primary();
        while self.current_operator_has(MULTIPLICATIVE_PRECEDENCE) {
            left = self.parse_operand(left, Self::parse_primary);
        }
        left
    }

    /// Consumes the current operator and its right operand, folding both into
    /// `left`.
    ///
    /// If the combined node would be taller than [`MAX_DEPTH`], the limit is
    /// reported and the right operand is dropped, keeping `left` as is.
    fn parse_operand(&mut self, left: Parsed, parse_right: fn(&mut Self) -> Parsed) -> Parsed {
        let op = self.next_token();
        let right = parse_right(self);

        let height = left.height.max(right.height) + 1;
        if height > MAX_DEPTH {
            self.report_too_deep(&op);
            return left;
        }

        Parsed { expr: Expr::binary(left.expr, op, right.expr),
                 height }
    }

    /// Returns `true` if the current token is a binary operator of the given
    /// precedence.
    fn current_operator_has(&self, precedence: u8) -> bool {
        BinaryOperator::from_kind(self.current().kind).is_some_and(|op| op.precedence() == precedence)
    }
}
