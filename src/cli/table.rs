//! Tabulate a formula over a range of `L`

use super::CliError;
use crate::Formula;

/// Upper bound on the rows a single table may produce.
pub const MAX_TABLE_ROWS: usize = 10_000;

/// Upper bound, in characters, on formula source accepted by the CLI.
///
/// Parsing and evaluation recurse once per nesting level, so this also
/// bounds stack depth.
pub const MAX_SOURCE_LEN: usize = 1024;

/// Rejects formula source longer than [`MAX_SOURCE_LEN`].
pub fn check_source_len(source: &str) -> Result<(), CliError> {
    let len = source.chars().count();
    if len > MAX_SOURCE_LEN {
        return Err(CliError::FormulaTooLong {
            len,
            max: MAX_SOURCE_LEN,
        });
    }
    Ok(())
}

/// Options for the table command
#[derive(Debug, Clone)]
pub struct TableOptions {
    /// Formula source
    pub formula: String,
    /// First value of `L`
    pub from: f32,
    /// Last value of `L` (inclusive when the step lands on it)
    pub to: f32,
    /// Distance between consecutive values of `L`
    pub step: f32,
    /// Second input, fixed for every row
    pub v: f32,
    /// Reject malformed formulas instead of substituting zero
    pub strict: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        TableOptions {
            formula: String::new(),
            from: 1.0,
            to: 10.0,
            step: 1.0,
            v: 0.0,
            strict: false,
        }
    }
}

/// One evaluated point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableRow {
    pub l: f32,
    pub result: f32,
}

/// Evaluate the formula at `from`, `from + step`, ... up to `to`.
pub fn execute_table(options: &TableOptions) -> Result<Vec<TableRow>, CliError> {
    let TableOptions {
        from, to, step, v, ..
    } = *options;

    check_source_len(&options.formula)?;
    if !(from.is_finite() && to.is_finite()) {
        return Err(CliError::InvalidRange("bounds must be finite".to_string()));
    }
    if !(step.is_finite() && step > 0.0) {
        return Err(CliError::InvalidRange(format!(
            "step must be positive, got {}",
            step
        )));
    }
    if from > to {
        return Err(CliError::InvalidRange(format!(
            "start {} is past end {}",
            from, to
        )));
    }

    // Computed in f64 and by index so rounding does not drift across rows.
    let span = (f64::from(to) - f64::from(from)) / f64::from(step);
    let steps = (span + 1e-6).floor();
    if steps >= MAX_TABLE_ROWS as f64 {
        return Err(CliError::InvalidRange(format!(
            "range produces more than {} rows",
            MAX_TABLE_ROWS
        )));
    }

    let formula = if options.strict {
        Formula::strict(options.formula.as_str())?
    } else {
        Formula::new(options.formula.as_str())
    };

    let rows = (0..=steps as usize)
        .map(|i| {
            let l = (f64::from(from) + i as f64 * f64::from(step)) as f32;
            TableRow {
                l,
                result: formula.evaluate(l, v),
            }
        })
        .collect();
    Ok(rows)
}
