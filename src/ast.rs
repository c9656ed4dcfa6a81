//! # Curve Formula Language - Abstract Syntax Tree
//!
//! A formula is a prefix-notation expression over two float inputs, `L` and
//! `V`. Every operator is a single character followed immediately by its
//! operands; there is no precedence and no grouping, position alone decides
//! the structure.
//!
//! - **[operators]** - Operator glyph tables and arity classes
//! - **[expressions]** - The compiled tree
//!
//! ## Quick Start
//!
//! ```text
//! *10,^1.15,(
//! ```
//!
//! Reads as `10 * 1.15^L`: a classic exponential cost curve.
//!
//! ## Inputs
//!
//! The characters `(` and `)` are not grouping delimiters. `(` reads `L` and
//! `)` reads `V`.
//!
//! ## Separators
//!
//! A single `,` may sit between sibling operands. It is optional: `+1,2` and
//! `+(2` both parse, the second as `L + 2`.
//!
//! ## Negative Numbers
//!
//! `-` only ever starts a negative literal. Subtraction is `_`:
//!
//! ```text
//! _5,3    // 2
//! -5      // -5
//! ```
pub mod expressions;
pub mod operators;

pub use expressions::Expr;
pub use operators::{BinOp, TernaryOp, UnaryOp};
