pub mod ast;
pub mod cli;
pub mod cursor;
pub mod diagnostics;
pub mod error;
pub mod evaluator;
pub mod formula;
pub mod parser;

pub use ast::{BinOp, Expr, TernaryOp, UnaryOp};
pub use cursor::Cursor;
pub use diagnostics::{Parsed, parse_with_diagnostics};
pub use error::FormulaError;
pub use evaluator::evaluate;
pub use formula::{Formula, SharedFormula};
pub use parser::{Parser, parse};
