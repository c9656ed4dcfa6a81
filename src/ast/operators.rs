/// Glyph that reads the first input (`L`).
pub const L_TERMINAL: char = '(';

/// Glyph that reads the second input (`V`).
pub const V_TERMINAL: char = ')';

/// Optional separator between sibling operands.
pub const SEPARATOR: char = ',';

/// Single-operand operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    /// Natural logarithm (`l`)
    Ln,
    /// Base-2 logarithm (`L`)
    Log2,
    /// Base-10 logarithm (`g`)
    Log10,
    /// Square root (`s`)
    Sqrt,
    /// Cube root (`S`)
    Cbrt,
    /// Sine, radians (`i`)
    Sin,
    /// Cosine, radians (`I`)
    Cos,
    /// Absolute value (`a`)
    Abs,
    /// Not-positive test (`!`): 1 when the operand is <= 0, otherwise -1.
    NotPositive,
}

impl UnaryOp {
    pub const ALL: [UnaryOp; 9] = [
        UnaryOp::Ln,
        UnaryOp::Log2,
        UnaryOp::Log10,
        UnaryOp::Sqrt,
        UnaryOp::Cbrt,
        UnaryOp::Sin,
        UnaryOp::Cos,
        UnaryOp::Abs,
        UnaryOp::NotPositive,
    ];

    pub fn from_char(code: char) -> Option<Self> {
        match code {
            'l' => Some(UnaryOp::Ln),
            'L' => Some(UnaryOp::Log2),
            'g' => Some(UnaryOp::Log10),
            's' => Some(UnaryOp::Sqrt),
            'S' => Some(UnaryOp::Cbrt),
            'i' => Some(UnaryOp::Sin),
            'I' => Some(UnaryOp::Cos),
            'a' => Some(UnaryOp::Abs),
            '!' => Some(UnaryOp::NotPositive),
            _ => None,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            UnaryOp::Ln => 'l',
            UnaryOp::Log2 => 'L',
            UnaryOp::Log10 => 'g',
            UnaryOp::Sqrt => 's',
            UnaryOp::Cbrt => 'S',
            UnaryOp::Sin => 'i',
            UnaryOp::Cos => 'I',
            UnaryOp::Abs => 'a',
            UnaryOp::NotPositive => '!',
        }
    }
}

/// Two-operand operators.
///
/// Comparison and logical operators produce `1.0` for true and `-1.0` for
/// false.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    // Arithmetic
    /// Multiplication (`*`)
    Multiply,
    /// Division (`/`); zero divisor yields 0
    Divide,
    /// Addition (`+`)
    Add,
    /// Subtraction (`_`); `-` only ever starts a negative literal
    Subtract,
    /// Exponentiation (`^`)
    Power,
    /// Minimum (`m`)
    Min,
    /// Maximum (`M`)
    Max,
    /// Logarithm of the second operand in the base of the first (`G`)
    LogBase,
    /// Remainder (`%`); zero divisor yields 0
    Modulo,

    // Comparison
    /// Less than (`<`)
    LessThan,
    /// Greater than (`>`)
    GreaterThan,
    /// Equal within 1e-5 (`=`)
    ApproxEqual,
    /// Not equal beyond 1e-5 (`\`)
    ApproxNotEqual,

    // Logical
    /// Both operands positive (`&`)
    And,
    /// Either operand positive (`|`)
    Or,
}

impl BinOp {
    pub const ALL: [BinOp; 15] = [
        BinOp::Multiply,
        BinOp::Divide,
        BinOp::Add,
        BinOp::Subtract,
        BinOp::Power,
        BinOp::Min,
        BinOp::Max,
        BinOp::LogBase,
        BinOp::LessThan,
        BinOp::GreaterThan,
        BinOp::ApproxEqual,
        BinOp::ApproxNotEqual,
        BinOp::And,
        BinOp::Or,
        BinOp::Modulo,
    ];

    pub fn from_char(code: char) -> Option<Self> {
        match code {
            '*' => Some(BinOp::Multiply),
            '/' => Some(BinOp::Divide),
            '+' => Some(BinOp::Add),
            '_' => Some(BinOp::Subtract),
            '^' => Some(BinOp::Power),
            'm' => Some(BinOp::Min),
            'M' => Some(BinOp::Max),
            'G' => Some(BinOp::LogBase),
            '<' => Some(BinOp::LessThan),
            '>' => Some(BinOp::GreaterThan),
            '=' => Some(BinOp::ApproxEqual),
            '\\' => Some(BinOp::ApproxNotEqual),
            '&' => Some(BinOp::And),
            '|' => Some(BinOp::Or),
            '%' => Some(BinOp::Modulo),
            _ => None,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            BinOp::Multiply => '*',
            BinOp::Divide => '/',
            BinOp::Add => '+',
            BinOp::Subtract => '_',
            BinOp::Power => '^',
            BinOp::Min => 'm',
            BinOp::Max => 'M',
            BinOp::LogBase => 'G',
            BinOp::LessThan => '<',
            BinOp::GreaterThan => '>',
            BinOp::ApproxEqual => '=',
            BinOp::ApproxNotEqual => '\\',
            BinOp::And => '&',
            BinOp::Or => '|',
            BinOp::Modulo => '%',
        }
    }
}

/// Three-operand operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TernaryOp {
    /// `?cond,a,b`: `a` when `cond > 0`, otherwise `b`
    Choose,
}

impl TernaryOp {
    pub const ALL: [TernaryOp; 1] = [TernaryOp::Choose];

    pub fn from_char(code: char) -> Option<Self> {
        match code {
            '?' => Some(TernaryOp::Choose),
            _ => None,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            TernaryOp::Choose => '?',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyphs_round_trip() {
        for op in UnaryOp::ALL {
            assert_eq!(UnaryOp::from_char(op.glyph()), Some(op));
        }
        for op in BinOp::ALL {
            assert_eq!(BinOp::from_char(op.glyph()), Some(op));
        }
        for op in TernaryOp::ALL {
            assert_eq!(TernaryOp::from_char(op.glyph()), Some(op));
        }
    }

    #[test]
    fn test_classes_are_disjoint() {
        let mut seen = std::collections::HashSet::new();
        let glyphs = UnaryOp::ALL
            .iter()
            .map(|op| op.glyph())
            .chain(BinOp::ALL.iter().map(|op| op.glyph()))
            .chain(TernaryOp::ALL.iter().map(|op| op.glyph()))
            .chain([L_TERMINAL, V_TERMINAL]);
        for glyph in glyphs {
            assert!(seen.insert(glyph), "glyph {:?} assigned twice", glyph);
        }
        assert_eq!(seen.len(), 27);
    }
}
