//! Onboarding tutorial content for curve CLI

/// Get the onboarding tutorial content
pub fn get_onboarding_content() -> &'static str {
    r#"WELCOME TO CURVE

Curve formulas describe how a number grows from two inputs: L (a level) and
V (a current value).

STEP 1: NUMBERS
---------------
A number on its own is a formula.

  curve eval '42'
  => 42

STEP 2: OPERATORS COME FIRST
----------------------------
Write the operator, then its operands separated by commas.

  curve eval '+1,2'
  => 3

STEP 3: INPUTS
--------------
( is L and ) is V. They are not brackets.

  curve eval '*(,)' -l 4 -v 2.5
  => 10

STEP 4: NESTING
---------------
Any operand can itself be a formula.

  curve eval '*2,s^2,2'
  => 4

STEP 5: SUBTRACTION VS NEGATIVE NUMBERS
---------------------------------------
_ subtracts. - only starts a negative number.

  curve eval '_5,3'
  => 2
  curve eval '-5'
  => -5

STEP 6: CONDITIONS
------------------
Comparisons return 1 or -1; ? picks a branch when its condition is > 0.

  curve eval '?>(,10,100,1' -l 12
  => 100

STEP 7: PREVIEW A CURVE
-----------------------
  curve table '*10,^1.15,(' --from 1 --to 5

NEXT STEPS
----------
  curve docs              List all documentation categories
  curve doc operators     Every operator glyph
  curve repl              Try formulas interactively
"#
}
