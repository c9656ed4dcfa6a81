use thiserror::Error;

/// Problems found while compiling a formula.
///
/// The default compiler never returns these: each one marks a spot where a
/// zero was substituted. They surface only through
/// [`parse_with_diagnostics`](crate::parse_with_diagnostics) and
/// [`Formula::strict`](crate::Formula::strict).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormulaError {
    #[error("unknown operator '{code}' at position {position}")]
    UnknownOperator { code: char, position: usize },

    #[error("formula ended early at position {position}: missing operand")]
    UnexpectedEnd { position: usize },

    #[error("'{found}' at position {position} does not start a number")]
    InvalidLiteral { found: char, position: usize },

    #[error("unexpected trailing input \"{rest}\" at position {position}")]
    TrailingInput { rest: String, position: usize },
}

impl FormulaError {
    /// Character offset the problem was found at.
    pub fn position(&self) -> usize {
        match self {
            FormulaError::UnknownOperator { position, .. }
            | FormulaError::UnexpectedEnd { position }
            | FormulaError::InvalidLiteral { position, .. }
            | FormulaError::TrailingInput { position, .. } => *position,
        }
    }
}
