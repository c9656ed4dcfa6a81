use crate::ast::{BinOp, Expr, TernaryOp, UnaryOp};

/// Absolute tolerance of `=` and `\`.
pub const EQ_TOLERANCE: f32 = 0.00001;

/// Result of comparison and logical operators when the condition holds.
pub const TRUE: f32 = 1.0;

/// Result of comparison and logical operators when the condition fails.
pub const FALSE: f32 = -1.0;

fn truth(condition: bool) -> f32 {
    if condition { TRUE } else { FALSE }
}

impl UnaryOp {
    pub fn apply(self, x: f32) -> f32 {
        match self {
            UnaryOp::Ln => x.ln(),
            UnaryOp::Log2 => x.log2(),
            UnaryOp::Log10 => x.log10(),
            UnaryOp::Sqrt => x.sqrt(),
            UnaryOp::Cbrt => x.cbrt(),
            UnaryOp::Sin => x.sin(),
            UnaryOp::Cos => x.cos(),
            UnaryOp::Abs => x.abs(),
            UnaryOp::NotPositive => truth(x <= 0.0),
        }
    }
}

impl BinOp {
    pub fn apply(self, a: f32, b: f32) -> f32 {
        match self {
            BinOp::Multiply => a * b,
            BinOp::Divide => {
                if b == 0.0 {
                    0.0
                } else {
                    a / b
                }
            }
            BinOp::Add => a + b,
            BinOp::Subtract => a - b,
            BinOp::Power => a.powf(b),
            // Left operand wins ties and NaN comparisons.
            BinOp::Min => {
                if b < a {
                    b
                } else {
                    a
                }
            }
            BinOp::Max => {
                if a < b {
                    b
                } else {
                    a
                }
            }
            BinOp::LogBase => {
                let (base, value) = (a, b);
                if value <= 0.0 || base <= 0.0 || base == 1.0 {
                    0.0
                } else {
                    value.ln() / base.ln()
                }
            }
            BinOp::Modulo => {
                if b == 0.0 {
                    0.0
                } else {
                    a % b
                }
            }
            BinOp::LessThan => truth(a < b),
            BinOp::GreaterThan => truth(a > b),
            BinOp::ApproxEqual => truth((a - b).abs() < EQ_TOLERANCE),
            BinOp::ApproxNotEqual => truth((a - b).abs() > EQ_TOLERANCE),
            BinOp::And => truth(a > 0.0 && b > 0.0),
            BinOp::Or => truth(a > 0.0 || b > 0.0),
        }
    }
}

impl TernaryOp {
    pub fn apply(self, first: f32, second: f32, third: f32) -> f32 {
        match self {
            TernaryOp::Choose => {
                if first > 0.0 {
                    second
                } else {
                    third
                }
            }
        }
    }
}

/// Evaluates a compiled formula for inputs `l` and `v`.
///
/// Operands are evaluated before their operator, `?` included.
///
/// # Examples
///
/// ```
/// use curvelang::{evaluate, parse};
///
/// let expr = parse("*2,s^2,2");
/// assert_eq!(evaluate(&expr, 0.0, 0.0), 4.0);
///
/// let level = parse("(");
/// assert_eq!(evaluate(&level, 7.0, 3.0), 7.0);
/// ```
pub fn evaluate(expr: &Expr, l: f32, v: f32) -> f32 {
    match expr {
        Expr::Literal(n) => *n,
        Expr::LTerm => l,
        Expr::VTerm => v,
        Expr::Unary { op, operand } => op.apply(evaluate(operand, l, v)),
        Expr::Binary { op, left, right } => {
            let a = evaluate(left, l, v);
            let b = evaluate(right, l, v);
            op.apply(a, b)
        }
        Expr::Ternary {
            op,
            first,
            second,
            third,
        } => {
            let a = evaluate(first, l, v);
            let b = evaluate(second, l, v);
            let c = evaluate(third, l, v);
            op.apply(a, b, c)
        }
    }
}
