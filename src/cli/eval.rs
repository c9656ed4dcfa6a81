//! Evaluate a single formula

use super::{CliError, check_source_len};
use crate::Formula;

/// Options for the eval command
#[derive(Debug, Clone, Default)]
pub struct EvalOptions {
    /// Formula source
    pub formula: String,
    /// First input (`(`)
    pub l: f32,
    /// Second input (`)`)
    pub v: f32,
    /// Reject malformed formulas instead of substituting zero
    pub strict: bool,
    /// Only check the formula, don't evaluate
    pub syntax_only: bool,
}

/// A formula evaluated at one point
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub formula: String,
    pub l: f32,
    pub v: f32,
    pub result: f32,
}

/// Result of an eval operation
#[derive(Debug)]
pub enum EvalResult {
    /// Syntax check passed
    SyntaxValid,
    /// Formula evaluated
    Success(Evaluation),
}

/// Execute an eval operation
pub fn execute_eval(options: &EvalOptions) -> Result<EvalResult, CliError> {
    check_source_len(&options.formula)?;

    if options.syntax_only {
        // Syntax checks always apply strict rules.
        Formula::strict(options.formula.as_str())?;
        return Ok(EvalResult::SyntaxValid);
    }

    let formula = if options.strict {
        Formula::strict(options.formula.as_str())?
    } else {
        Formula::new(options.formula.as_str())
    };

    Ok(EvalResult::Success(Evaluation {
        formula: formula.source().to_string(),
        l: options.l,
        v: options.v,
        result: formula.evaluate(options.l, options.v),
    }))
}
