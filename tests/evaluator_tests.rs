use approx::assert_abs_diff_eq;
use curvelang::{evaluate, parse};

fn eval(source: &str, l: f32, v: f32) -> f32 {
    evaluate(&parse(source), l, v)
}

const INPUTS: [(f32, f32); 5] = [(0.0, 0.0), (10.0, 5.0), (-3.5, 2.0), (1.0, -1.0), (1e6, 1e-6)];

// ============================================================================
// Documented results
// ============================================================================

#[test]
fn test_documented_examples() {
    let cases = [
        ("+1,2", 3.0),
        ("s16", 4.0),
        ("^2,3", 8.0),
        ("*2,s^2,2", 4.0),
        ("L^2,3", 3.0),
        ("G10,100", 2.0),
        ("g100", 2.0),
        ("_5,3", 2.0),
        ("-5", -5.0),
    ];

    for (source, expected) in cases {
        for (l, v) in INPUTS {
            assert_abs_diff_eq!(eval(source, l, v), expected, epsilon = 1e-5);
        }
    }
}

#[test]
fn test_literals_are_constant() {
    for source in ["0", "42", "1.15", "-7.25", ".5", "123456"] {
        let expected: f32 = source.parse().unwrap();
        for (l, v) in INPUTS {
            assert_eq!(eval(source, l, v), expected, "source {:?}", source);
        }
    }
}

#[test]
fn test_terminals_read_inputs() {
    for (l, v) in INPUTS {
        assert_eq!(eval("(", l, v), l);
        assert_eq!(eval(")", l, v), v);
    }
}

#[test]
fn test_growth_curve() {
    // 10 * 1.15^L
    assert_abs_diff_eq!(eval("*10,^1.15,(", 0.0, 0.0), 10.0, epsilon = 1e-4);
    assert_abs_diff_eq!(eval("*10,^1.15,(", 2.0, 0.0), 13.225, epsilon = 1e-4);
    // V + L
    assert_eq!(eval("+),(", 3.0, 4.0), 7.0);
}

// ============================================================================
// Numeric guards
// ============================================================================

#[test]
fn test_division_and_modulo_by_zero() {
    for left in ["0", "1", "-4.5", "(", ")"] {
        for (l, v) in INPUTS {
            assert_eq!(eval(&format!("/{},0", left), l, v), 0.0);
            assert_eq!(eval(&format!("%{},0", left), l, v), 0.0);
        }
    }
    assert_eq!(eval("/(,)", 3.0, 0.0), 0.0);
}

#[test]
fn test_division_and_modulo() {
    assert_eq!(eval("/9,2", 0.0, 0.0), 4.5);
    assert_eq!(eval("%7,3", 0.0, 0.0), 1.0);
    // Remainder keeps the sign of the dividend
    assert_eq!(eval("%-7,3", 0.0, 0.0), -1.0);
}

#[test]
fn test_degenerate_log_base() {
    for source in ["G0,10", "G-2,10", "G1,10", "G10,0", "G10,-5", "G-1,-1"] {
        for (l, v) in INPUTS {
            assert_eq!(eval(source, l, v), 0.0, "source {:?}", source);
        }
    }
    assert_abs_diff_eq!(eval("G2,8", 0.0, 0.0), 3.0, epsilon = 1e-5);
}

// ============================================================================
// Unary operators
// ============================================================================

#[test]
fn test_unary_operators() {
    assert_abs_diff_eq!(eval("l1", 0.0, 0.0), 0.0);
    assert_abs_diff_eq!(eval("L8", 0.0, 0.0), 3.0, epsilon = 1e-6);
    assert_abs_diff_eq!(eval("g1000", 0.0, 0.0), 3.0, epsilon = 1e-6);
    assert_abs_diff_eq!(eval("S27", 0.0, 0.0), 3.0, epsilon = 1e-6);
    assert_abs_diff_eq!(eval("i0", 0.0, 0.0), 0.0);
    assert_abs_diff_eq!(eval("I0", 0.0, 0.0), 1.0);
    assert_eq!(eval("a-3", 0.0, 0.0), 3.0);
}

#[test]
fn test_not_positive() {
    assert_eq!(eval("!0", 0.0, 0.0), 1.0);
    assert_eq!(eval("!-2", 0.0, 0.0), 1.0);
    assert_eq!(eval("!2", 0.0, 0.0), -1.0);
    // Not a boolean complement: probing a "false" result (-1) gives true
    assert_eq!(eval("!<2,1", 0.0, 0.0), 1.0);
}

// ============================================================================
// Comparison and logic
// ============================================================================

#[test]
fn test_comparisons_return_sentinels() {
    assert_eq!(eval("<1,2", 0.0, 0.0), 1.0);
    assert_eq!(eval("<2,1", 0.0, 0.0), -1.0);
    assert_eq!(eval(">2,1", 0.0, 0.0), 1.0);
    assert_eq!(eval(">1,1", 0.0, 0.0), -1.0);
}

#[test]
fn test_approximate_equality() {
    assert_eq!(eval("=1,1.000001", 0.0, 0.0), 1.0);
    assert_eq!(eval("=1,1.001", 0.0, 0.0), -1.0);
    assert_eq!(eval("\\1,1.001", 0.0, 0.0), 1.0);
    assert_eq!(eval("\\1,1.000001", 0.0, 0.0), -1.0);
}

#[test]
fn test_logical_operators() {
    assert_eq!(eval("&1,1", 0.0, 0.0), 1.0);
    assert_eq!(eval("&1,0", 0.0, 0.0), -1.0);
    assert_eq!(eval("|0,1", 0.0, 0.0), 1.0);
    assert_eq!(eval("|0,-1", 0.0, 0.0), -1.0);
    // Sentinels compose: -1 is false
    assert_eq!(eval("&<1,2,>1,2", 0.0, 0.0), -1.0);
}

#[test]
fn test_min_max() {
    assert_eq!(eval("m3,-2", 0.0, 0.0), -2.0);
    assert_eq!(eval("M3,-2", 0.0, 0.0), 3.0);
    assert_eq!(eval("m(,)", 4.0, 9.0), 4.0);
}

#[test]
fn test_choose() {
    let source = "?>(,10,*2,(,(";
    assert_eq!(eval(source, 12.0, 0.0), 24.0);
    assert_eq!(eval(source, 10.0, 0.0), 10.0);
    // Zero is not positive
    assert_eq!(eval("?0,1,2", 0.0, 0.0), 2.0);
}

#[test]
fn test_choose_ignores_unselected_branch() {
    // The unselected branch is still evaluated; its NaN must not leak
    assert_eq!(eval("?1,5,l-1", 0.0, 0.0), 5.0);
    assert!(eval("?-1,5,l-1", 0.0, 0.0).is_nan());
    for (l, v) in INPUTS {
        let expected = if l - v > 0.0 { l / v } else { l * v };
        assert_eq!(eval("?_(,),/(,),*(,)", l, v), expected);
    }
}

// ============================================================================
// Malformed input
// ============================================================================

#[test]
fn test_malformed_sources_evaluate_to_zero() {
    for source in ["", "   ", "\t", "x", "x(", "#12", "-", ".", ",", "~)"] {
        for (l, v) in INPUTS {
            assert_eq!(eval(source, l, v), 0.0, "source {:?}", source);
        }
    }
}

#[test]
fn test_missing_operand_reads_zero() {
    assert_eq!(eval("+5", 0.0, 0.0), 5.0);
    assert_eq!(eval("*5", 0.0, 0.0), 0.0);
    assert_eq!(eval("?1,7", 0.0, 0.0), 7.0);
}

#[test]
fn test_evaluation_is_deterministic() {
    let expr = parse("+*(,1.5,s)");
    for (l, v) in INPUTS {
        assert_eq!(evaluate(&expr, l, v).to_bits(), evaluate(&expr, l, v).to_bits());
    }
}
