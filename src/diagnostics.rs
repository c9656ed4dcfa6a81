//! Optional strict checking on top of the fail-soft compiler.
//!
//! [`parse_with_diagnostics`] builds exactly the tree [`parse`](crate::parse)
//! builds and additionally reports every spot where a zero was substituted,
//! plus any input left over after the first complete expression.

use crate::{ast::Expr, cursor::Cursor, error::FormulaError, parser::Parser};

/// A compiled tree together with what the compiler noticed along the way.
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed {
    pub expr: Expr,
    /// In source order.
    pub diagnostics: Vec<FormulaError>,
    /// Characters consumed by the top-level expression.
    pub consumed: usize,
}

impl Parsed {
    /// True when nothing was substituted and nothing was left over.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// The first problem, if any.
    pub fn first_error(&self) -> Option<&FormulaError> {
        self.diagnostics.first()
    }
}

/// Compiles `source` and collects diagnostics.
///
/// # Examples
///
/// ```
/// use curvelang::{FormulaError, parse_with_diagnostics};
///
/// let parsed = parse_with_diagnostics("+1,2 extra");
/// assert_eq!(parsed.consumed, 4);
/// assert!(matches!(
///     parsed.first_error(),
///     Some(FormulaError::TrailingInput { position: 5, .. })
/// ));
/// ```
pub fn parse_with_diagnostics(source: &str) -> Parsed {
    let mut parser = Parser::new(Cursor::new(source));
    let expr = parser.parse_expression();
    let consumed = parser.position();

    let rest = parser.remaining();
    let trimmed = rest.trim_start_matches([' ', '\t']);
    let trailing = if trimmed.is_empty() {
        None
    } else {
        Some(FormulaError::TrailingInput {
            rest: trimmed.to_string(),
            position: consumed + (rest.chars().count() - trimmed.chars().count()),
        })
    };

    let mut diagnostics = parser.into_diagnostics();
    diagnostics.extend(trailing);

    Parsed {
        expr,
        diagnostics,
        consumed,
    }
}
