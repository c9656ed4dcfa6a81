use crate::{
    ast::{
        BinOp, Expr, TernaryOp, UnaryOp,
        operators::{L_TERMINAL, SEPARATOR, V_TERMINAL},
    },
    cursor::Cursor,
    error::FormulaError,
};

/// Single-pass recursive-descent compiler for formula source.
///
/// Each call to [`parse_expression`](Parser::parse_expression) consumes
/// exactly one expression from the cursor and never backtracks. Malformed
/// input never aborts the parse: the offending construct becomes a zero
/// literal and a diagnostic is recorded.
pub struct Parser {
    cursor: Cursor,
    diagnostics: Vec<FormulaError>,
}

impl Parser {
    pub fn new(cursor: Cursor) -> Self {
        Parser {
            cursor,
            diagnostics: Vec::new(),
        }
    }

    /// Characters consumed so far.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Input left after the last parsed expression, with leading blanks.
    pub fn remaining(&self) -> String {
        self.cursor.remaining()
    }

    /// Problems recorded so far, in the order they were met.
    pub fn diagnostics(&self) -> &[FormulaError] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<FormulaError> {
        self.diagnostics
    }

    /// Parses one expression starting at the cursor.
    pub fn parse_expression(&mut self) -> Expr {
        self.cursor.skip_blanks();
        let position = self.cursor.position();

        let Some(code) = self.cursor.current_char() else {
            self.diagnostics.push(FormulaError::UnexpectedEnd { position });
            return Expr::zero();
        };

        if code.is_ascii_digit() || code == '.' || code == '-' {
            return self.parse_literal(code, position);
        }

        self.cursor.next_char();

        if code == L_TERMINAL {
            return Expr::LTerm;
        }
        if code == V_TERMINAL {
            return Expr::VTerm;
        }
        if let Some(op) = UnaryOp::from_char(code) {
            return self.parse_unary(op);
        }
        if let Some(op) = BinOp::from_char(code) {
            return self.parse_binary(op);
        }
        if let Some(op) = TernaryOp::from_char(code) {
            return self.parse_ternary(op);
        }

        self.diagnostics
            .push(FormulaError::UnknownOperator { code, position });
        // The operand is still consumed so that siblings line up the same
        // way they always have.
        self.parse_expression();
        Expr::zero()
    }

    fn parse_literal(&mut self, found: char, position: usize) -> Expr {
        match self.cursor.read_number() {
            Some(value) => Expr::Literal(value),
            None => {
                self.diagnostics
                    .push(FormulaError::InvalidLiteral { found, position });
                Expr::zero()
            }
        }
    }

    fn parse_unary(&mut self, op: UnaryOp) -> Expr {
        let operand = self.parse_expression();
        Expr::Unary {
            op,
            operand: Box::new(operand),
        }
    }

    fn parse_binary(&mut self, op: BinOp) -> Expr {
        let left = self.parse_expression();
        let right = self.parse_sibling();
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    fn parse_ternary(&mut self, op: TernaryOp) -> Expr {
        let first = self.parse_expression();
        let second = self.parse_sibling();
        let third = self.parse_sibling();
        Expr::Ternary {
            op,
            first: Box::new(first),
            second: Box::new(second),
            third: Box::new(third),
        }
    }

    /// Parses a non-first operand. A separator directly at the cursor is
    /// skipped; a missing one is not an error.
    fn parse_sibling(&mut self) -> Expr {
        self.cursor.eat(SEPARATOR);
        self.parse_expression()
    }
}

/// Compiles formula source into an expression tree.
///
/// Never fails: empty or malformed source compiles to a tree that evaluates
/// to zero where it is broken. Trailing input after the first complete
/// expression is ignored.
///
/// # Examples
///
/// ```
/// use curvelang::parse;
///
/// let expr = parse("+1,2");
/// assert_eq!(curvelang::evaluate(&expr, 0.0, 0.0), 3.0);
///
/// let broken = parse("x");
/// assert_eq!(curvelang::evaluate(&broken, 10.0, 5.0), 0.0);
/// ```
pub fn parse(source: &str) -> Expr {
    Parser::new(Cursor::new(source)).parse_expression()
}
