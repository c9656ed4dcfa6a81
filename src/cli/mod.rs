//! CLI support for curvelang
//!
//! Provides programmatic access to the `curve` CLI functionality so tools
//! that embed formulas can reuse it.

mod convert;
mod docs;
mod eval;
mod onboard;
mod repl;
mod table;

pub use convert::{evaluation_to_json, number_to_json, table_to_json};
pub use docs::{DocCategory, get_doc_category, get_docs_overview};
pub use eval::{EvalOptions, EvalResult, Evaluation, execute_eval};
pub use onboard::get_onboarding_content;
pub use repl::{ReplOptions, run_repl};
pub use table::{
    MAX_SOURCE_LEN, MAX_TABLE_ROWS, TableOptions, TableRow, check_source_len, execute_table,
};

use std::io;

use thiserror::Error;

/// Errors that can occur during CLI operations
#[derive(Debug, Error)]
pub enum CliError {
    /// Formula rejected in strict mode
    #[error("Formula error: {0}")]
    Formula(#[from] crate::FormulaError),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Formula source over the CLI length limit
    #[error("Formula too long: {len} characters (limit {max})")]
    FormulaTooLong { len: usize, max: usize },

    /// Table range that cannot be walked
    #[error("Invalid range: {0}")]
    InvalidRange(String),

    /// Unknown documentation category
    #[error("Unknown category: '{0}'\nRun 'curve docs' to see available categories.")]
    UnknownCategory(String),
}
