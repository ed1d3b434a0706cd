use crate::expression::ast::Expression;
use crate::expression::errors::EvalError;

fn num(n: f64) -> Box<Expression> {
    Box::new(Expression::Number(n))
}

#[test]
fn test_division_by_zero() {
    let expr = Expression::Div(num(7.0), num(0.0));
    assert_eq!(expr.evaluate(), Err(EvalError::DivisionByZero));
}

#[test]
fn test_division_by_small_number_is_allowed() {
    // Only an exactly-zero divisor fails; tiny divisors give finite results
    let expr = Expression::Div(num(1.0), num(1e-300));
    assert!(expr.evaluate().is_ok());
}

#[test]
fn test_zeroth_root_fails_for_any_radicand() {
    for radicand in [0.0, 1.0, 9.0, 2005.0] {
        let expr = Expression::Root(num(radicand), num(0.0));
        assert_eq!(expr.evaluate(), Err(EvalError::DivisionByZero));
    }
}

#[test]
fn test_cube_root() {
    let expr = Expression::Root(num(27.0), num(3.0));
    let result = expr.evaluate();
    assert!(result.is_ok());
    if let Ok(value) = result {
        assert!((value - 3.0).abs() < 1e-9);
    }
}

#[test]
fn test_even_root_of_negative_is_discarded() {
    // -16 ^ (1/2) is NaN; no signed-root convention is applied
    let inner = Expression::Sub(num(0.0), num(16.0));
    let expr = Expression::Root(Box::new(inner), num(2.0));
    assert_eq!(expr.evaluate(), Err(EvalError::InvalidResult));
}

#[test]
fn test_negative_base_fractional_exponent_is_discarded() {
    let base = Expression::Sub(num(0.0), num(2.0));
    let expr = Expression::Pow(Box::new(base), num(0.5));
    assert_eq!(expr.evaluate(), Err(EvalError::InvalidResult));
}

#[test]
fn test_overflowing_power_is_discarded() {
    let expr = Expression::Pow(num(9999.0), num(9999.0));
    assert_eq!(expr.evaluate(), Err(EvalError::Overflow));
}

#[test]
fn test_factorial_evaluation() {
    let expr = Expression::Factorial(num(5.0));
    assert_eq!(expr.evaluate(), Ok(120.0));

    let expr = Expression::Factorial(num(13.0));
    assert_eq!(expr.evaluate(), Err(EvalError::FactorialDomain));
}

#[test]
fn test_natural_precedence_display() {
    // 0 * 9 + 0 + 5
    let expr = Expression::Add(
        Box::new(Expression::Add(
            Box::new(Expression::Mul(num(0.0), num(9.0))),
            num(0.0),
        )),
        num(5.0),
    );
    assert_eq!(expr.to_string(), "0 * 9 + 0 + 5");
    assert_eq!(expr.evaluate(), Ok(5.0));
}

#[test]
fn test_grouped_operand_display() {
    let expr = Expression::Mul(Box::new(Expression::Add(num(1.0), num(2.0))), num(3.0));
    assert_eq!(expr.to_string(), "(1 + 2) * 3");
}

#[test]
fn test_subtraction_display_keeps_right_parens() {
    let expr = Expression::Sub(num(9.0), Box::new(Expression::Sub(num(5.0), num(2.0))));
    assert_eq!(expr.to_string(), "9 - (5 - 2)");
    assert_eq!(expr.evaluate(), Ok(6.0));
}

#[test]
fn test_power_associativity_display() {
    let right = Expression::Pow(num(2.0), Box::new(Expression::Pow(num(3.0), num(2.0))));
    assert_eq!(right.to_string(), "2 ^ 3 ^ 2");
    assert_eq!(right.evaluate(), Ok(512.0));

    let left = Expression::Pow(Box::new(Expression::Pow(num(2.0), num(3.0))), num(2.0));
    assert_eq!(left.to_string(), "(2 ^ 3) ^ 2");
    assert_eq!(left.evaluate(), Ok(64.0));
}

#[test]
fn test_function_call_display() {
    let expr = Expression::Add(
        Box::new(Expression::Root(
            Box::new(Expression::Add(num(1.0), num(2.0))),
            num(3.0),
        )),
        Box::new(Expression::Factorial(num(4.0))),
    );
    assert_eq!(expr.to_string(), "root(1 + 2, 3) + fact(4)");
}
