use std::{convert::Infallible, fmt, str::FromStr, sync::Arc};

use parking_lot::RwLock;
use tracing::{debug, trace, warn};

use crate::{
    ast::Expr, diagnostics::parse_with_diagnostics, error::FormulaError, evaluator::evaluate,
    parser::parse,
};

/// Source used when a formula is created from an empty string.
pub const DEFAULT_SOURCE: &str = "0";

/// A formula's source text together with its compiled tree.
///
/// The tree always exists: source that does not make sense compiles to a
/// tree that yields zero, so every `Formula` can be evaluated.
///
/// # Examples
///
/// ```
/// use curvelang::Formula;
///
/// let mut cost = Formula::new("*10,^1.15,(");
/// assert_eq!(cost.source(), "*10,^1.15,(");
/// assert!((cost.evaluate(0.0, 0.0) - 10.0).abs() < 1e-4);
///
/// cost.update_formula("+(,)");
/// assert_eq!(cost.evaluate(2.0, 3.0), 5.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Formula {
    source: String,
    expr: Expr,
}

fn normalize(source: String) -> String {
    if source.is_empty() {
        DEFAULT_SOURCE.to_string()
    } else {
        source
    }
}

impl Formula {
    /// Compiles `source`. An empty string is replaced by `"0"`.
    pub fn new(source: impl Into<String>) -> Self {
        let source = normalize(source.into());
        let expr = parse(&source);
        debug!(source = %source, depth = expr.depth(), "compiled formula");
        Formula { source, expr }
    }

    /// Compiles `source`, rejecting anything the fail-soft compiler would
    /// have patched with a zero, and trailing input.
    pub fn strict(source: impl Into<String>) -> Result<Self, FormulaError> {
        let source = normalize(source.into());
        let parsed = parse_with_diagnostics(&source);
        if let Some(err) = parsed.first_error() {
            warn!(source = %source, error = %err, "rejected formula");
            return Err(err.clone());
        }
        Ok(Formula {
            source,
            expr: parsed.expr,
        })
    }

    /// Result of the formula for inputs `l` and `v`.
    pub fn evaluate(&self, l: f32, v: f32) -> f32 {
        evaluate(&self.expr, l, v)
    }

    /// Replaces the source and recompiles. The old tree is dropped only once
    /// the new one is complete.
    pub fn update_formula(&mut self, source: impl Into<String>) {
        let next = Formula::new(source);
        trace!(from = %self.source, to = %next.source, "formula updated");
        *self = next;
    }

    /// Like [`update_formula`](Formula::update_formula) but keeps the current
    /// formula when the new source does not pass strict checking.
    pub fn try_update_formula(&mut self, source: impl Into<String>) -> Result<(), FormulaError> {
        let next = Formula::strict(source)?;
        trace!(from = %self.source, to = %next.source, "formula updated");
        *self = next;
        Ok(())
    }

    /// The text the formula was built from, verbatim.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn expr(&self) -> &Expr {
        &self.expr
    }
}

impl Default for Formula {
    fn default() -> Self {
        Formula::new(DEFAULT_SOURCE)
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl FromStr for Formula {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Formula::new(s))
    }
}

/// A formula that many threads evaluate while another may replace it.
///
/// Readers work on an immutable snapshot; [`update_formula`] compiles the
/// replacement before taking the write lock, so the lock is held only for
/// the pointer swap and no reader can see a half-built tree.
///
/// [`update_formula`]: SharedFormula::update_formula
#[derive(Debug, Default)]
pub struct SharedFormula {
    current: RwLock<Arc<Formula>>,
}

impl SharedFormula {
    pub fn new(source: impl Into<String>) -> Self {
        SharedFormula {
            current: RwLock::new(Arc::new(Formula::new(source))),
        }
    }

    /// The formula as of now. Later updates do not affect the snapshot.
    pub fn snapshot(&self) -> Arc<Formula> {
        Arc::clone(&self.current.read())
    }

    pub fn evaluate(&self, l: f32, v: f32) -> f32 {
        self.snapshot().evaluate(l, v)
    }

    pub fn update_formula(&self, source: impl Into<String>) {
        let next = Arc::new(Formula::new(source));
        *self.current.write() = next;
    }

    pub fn source(&self) -> String {
        self.snapshot().source().to_string()
    }
}

impl From<Formula> for SharedFormula {
    fn from(formula: Formula) -> Self {
        SharedFormula {
            current: RwLock::new(Arc::new(formula)),
        }
    }
}
