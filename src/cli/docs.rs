//! Documentation content for curve CLI

use super::CliError;

/// Available documentation categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocCategory {
    Syntax,
    Operators,
    Examples,
    Errors,
}

impl DocCategory {
    /// Parse category name from string
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "syntax" | "grammar" => Some(Self::Syntax),
            "operators" | "ops" => Some(Self::Operators),
            "examples" | "example" => Some(Self::Examples),
            "errors" | "error" | "strict" => Some(Self::Errors),
            _ => None,
        }
    }
}

/// Get the docs overview (category listing)
pub fn get_docs_overview() -> &'static str {
    r#"CURVE DOCUMENTATION

Curve formulas are compact prefix-notation expressions over two inputs, L and
V, used to describe growth and cost curves. Every operator is one character
followed directly by its operands.

DOCUMENTATION CATEGORIES

  syntax            Literals, inputs, separators and whitespace
  operators         Every operator glyph with its arity and meaning
  examples          Worked formulas with their results
  errors            How malformed formulas behave, and strict mode

QUICK REFERENCE

  (                 Input L
  )                 Input V
  +1,2              Binary operator: 1 + 2
  s16               Unary operator: sqrt(16)
  ?c,a,b            Ternary: a if c > 0 else b
  _5,3              Subtraction (- only starts negative numbers)

Run 'curve doc <category>' for detailed documentation.
Run 'curve onboard' for a short tutorial.
"#
}

/// Get documentation for a specific category
pub fn get_doc_category(name: &str) -> Result<&'static str, CliError> {
    match DocCategory::from_name(name) {
        Some(DocCategory::Syntax) => Ok(SYNTAX_DOC),
        Some(DocCategory::Operators) => Ok(OPERATORS_DOC),
        Some(DocCategory::Examples) => Ok(EXAMPLES_DOC),
        Some(DocCategory::Errors) => Ok(ERRORS_DOC),
        None => Err(CliError::UnknownCategory(name.to_string())),
    }
}

const SYNTAX_DOC: &str = r#"SYNTAX - Prefix Notation

SHAPE
  [op][x]           unary operators
  [op][x],[y]       binary operators
  [op][x],[y],[z]   ternary operators

  Operands are themselves formulas, so operators stack:
    *2,s^2,2        2 * sqrt(2^2)

  There is no precedence and no grouping. Each operator takes exactly as
  many operands as its arity, read left to right.

INPUTS
  (                 L, the first input (typically a level or count)
  )                 V, the second input (typically a current value)

  The parenthesis characters are input references, not brackets.

NUMBERS
  42  1.15  .5  5.  -3  -.25

  A leading - makes a negative literal. It never means subtraction; use _
  for that. Exponents (1e3) are not part of the grammar.

SEPARATORS
  A single , between operands is optional:
    +1,2   and   +(2   both parse ("+(2" is L + 2)

  The comma must sit directly after the previous operand.

WHITESPACE
  Spaces and tabs are skipped before each operator or number:
    + 1, 2          3

TRAILING INPUT
  Anything after the first complete formula is ignored. Use --strict or
  --syntax-only to reject it.
"#;

const OPERATORS_DOC: &str = r#"OPERATORS

UNARY
  l   log (natural)
  L   log2
  g   log10
  s   sqrt
  S   cbrt
  i   sin (radians)
  I   cos (radians)
  a   abs
  !   not positive: 1 if x <= 0, otherwise -1

BINARY
  *   multiply
  /   divide            (0 when the divisor is 0)
  +   add
  _   subtract
  ^   power
  m   min
  M   max
  G   log base b of v   G[b],[v]  (0 when b <= 0, b = 1 or v <= 0)
  <   less than         ( 1 / -1 )
  >   greater than      ( 1 / -1 )
  =   equal             ( 1 / -1, tolerance 0.00001 )
  \   not equal         ( 1 / -1, tolerance 0.00001 )
  &   and               ( 1 when both > 0, else -1 )
  |   or                ( 1 when either > 0, else -1 )
  %   modulus           (0 when the divisor is 0)

TERNARY
  ?   choose            ?[c],[a],[b] is a when c > 0, else b

TRUTH
  Comparisons return 1 for true and -1 for false. Anything > 0 counts as
  true wherever a condition is read.
"#;

const EXAMPLES_DOC: &str = r#"EXAMPLES

  Formula       Result   Meaning
  +1,2          3        1 + 2
  s16           4        sqrt(16)
  ^2,3          8        2^3
  *2,s^2,2      4        2 * sqrt(2^2)
  L^2,3         3        log2(2^3)
  G10,100       2        log10(100)
  g100          2        log10(100)
  _5,3          2        5 - 3
  -5            -5       negative literal

CURVES
  *10,^1.15,(           10 * 1.15^L          exponential upgrade cost
  +),*(,0.5             V + 0.5 * L          linear accumulation
  ?>(,10,*2,(,(         L > 10 ? 2L : L      piecewise boost

  Preview a curve:
    curve table '*10,^1.15,(' --from 1 --to 20
"#;

const ERRORS_DOC: &str = r#"ERRORS - Fail-Soft Formulas

DEFAULT BEHAVIOR
  Formulas never fail to compile. A broken piece becomes 0:

    x5          0        unknown operator (its operand is still read)
    +1          1        missing operand reads as 0
    ""          0        empty formula
    -           0        a sign with no digits

  Numeric hazards are guarded at the operator:

    /5,0        0        division by zero
    %5,0        0        modulus by zero
    G1,10       0        degenerate log base

STRICT MODE
  curve eval --strict rejects formulas the default mode would patch:

    unknown operator 'x' at position 0
    formula ended early at position 2: missing operand
    '-' at position 0 does not start a number
    unexpected trailing input "junk" at position 5

  curve eval --syntax-only runs the strict checks without evaluating.

LENGTH LIMIT
  The CLI rejects formulas longer than 1024 characters (eval, table, tree);
  the repl prints the error and skips the line.
"#;
