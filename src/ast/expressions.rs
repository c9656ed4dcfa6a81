use std::fmt;

use crate::ast::{BinOp, TernaryOp, UnaryOp};
use crate::ast::operators::{L_TERMINAL, SEPARATOR, V_TERMINAL};

/// Compiled formula node.
///
/// Every node owns its children exclusively, so a parsed formula is always a
/// tree. The number of children matches the operator's arity by
/// construction.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Decimal literal
    ///
    /// # Example
    /// ```text
    /// 1.15
    /// -5
    /// ```
    Literal(f32),

    /// First input (`(`)
    LTerm,

    /// Second input (`)`)
    VTerm,

    /// Single-operand operation
    ///
    /// # Example
    /// ```text
    /// s16
    /// ```
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },

    /// Two-operand operation
    ///
    /// # Examples
    /// ```text
    /// +1,2
    /// G10,100
    /// ```
    Binary {
        op: BinOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },

    /// Three-operand operation
    ///
    /// # Example
    /// ```text
    /// ?>(,5,1,0
    /// ```
    Ternary {
        op: TernaryOp,
        first: Box<Expr>,
        second: Box<Expr>,
        third: Box<Expr>,
    },
}

impl Expr {
    /// The node every malformed construct resolves to.
    pub fn zero() -> Self {
        Expr::Literal(0.0)
    }

    /// Longest path from this node to a leaf, counting this node.
    pub fn depth(&self) -> usize {
        match self {
            Expr::Literal(_) | Expr::LTerm | Expr::VTerm => 1,
            Expr::Unary { operand, .. } => 1 + operand.depth(),
            Expr::Binary { left, right, .. } => 1 + left.depth().max(right.depth()),
            Expr::Ternary {
                first,
                second,
                third,
                ..
            } => 1 + first.depth().max(second.depth()).max(third.depth()),
        }
    }
}

/// Canonical prefix form: every separator present, literals in shortest
/// round-trip notation. Re-parsing the output of a tree with finite
/// literals yields an equal tree.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal(n) => write!(f, "{}", n),
            Expr::LTerm => write!(f, "{}", L_TERMINAL),
            Expr::VTerm => write!(f, "{}", V_TERMINAL),
            Expr::Unary { op, operand } => write!(f, "{}{}", op.glyph(), operand),
            Expr::Binary { op, left, right } => {
                write!(f, "{}{}{}{}", op.glyph(), left, SEPARATOR, right)
            }
            Expr::Ternary {
                op,
                first,
                second,
                third,
            } => write!(
                f,
                "{}{}{}{}{}{}",
                op.glyph(),
                first,
                SEPARATOR,
                second,
                SEPARATOR,
                third
            ),
        }
    }
}
