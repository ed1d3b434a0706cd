use log::debug;

use crate::expression::ast::Expression;
use crate::expression::errors::EvalError;

/// Largest argument accepted by `fact`, guarding against explosive growth
pub const MAX_FACTORIAL_ARG: f64 = 12.0;

#[inline]
fn is_integer(value: f64) -> bool {
    if value.abs() > 2_f64.powi(52) {
        true
    } else {
        (value - value.round()).abs() < f64::EPSILON
    }
}

/// Classify a computed value: NaN and infinities are failures, never results.
#[inline]
fn finite(value: f64) -> Result<f64, EvalError> {
    if value.is_nan() {
        Err(EvalError::InvalidResult)
    } else if value.is_infinite() {
        Err(EvalError::Overflow)
    } else {
        Ok(value)
    }
}

fn factorial(n: f64) -> Result<f64, EvalError> {
    if !is_integer(n) || n < 0.0 || n > MAX_FACTORIAL_ARG {
        debug!("Factorial argument out of domain: {}", n);
        return Err(EvalError::FactorialDomain);
    }

    let mut result = 1.0;
    for k in 2..=(n.round() as u64) {
        result *= k as f64;
    }
    Ok(result)
}

impl Expression {
    /// # Errors
    ///
    /// Returns an error when attempting:
    /// - Division by zero, or a zeroth root
    /// - Factorial of a negative, fractional, or > 12 argument
    /// - Any operation whose result is NaN or infinite
    pub fn evaluate(&self) -> Result<f64, EvalError> {
        let result = match self {
            Expression::Number(n) => Ok(*n),
            Expression::Add(l, r) => finite(l.evaluate()? + r.evaluate()?),
            Expression::Sub(l, r) => finite(l.evaluate()? - r.evaluate()?),
            Expression::Mul(l, r) => finite(l.evaluate()? * r.evaluate()?),
            Expression::Div(l, r) => {
                let divisor = r.evaluate()?;
                if divisor == 0.0 {
                    debug!("Division by zero attempted");
                    Err(EvalError::DivisionByZero)
                } else {
                    finite(l.evaluate()? / divisor)
                }
            }
            Expression::Pow(l, r) => {
                let base = l.evaluate()?;
                let exponent = r.evaluate()?;
                // Negative base with fractional exponent yields NaN and is
                // rejected by the finite check.
                finite(base.powf(exponent))
            }
            Expression::Root(a, b) => {
                let index = b.evaluate()?;
                if index == 0.0 {
                    debug!("Zeroth root attempted");
                    Err(EvalError::DivisionByZero)
                } else {
                    // Negative radicands with even or fractional index come out
                    // as NaN and are discarded, not given a signed convention.
                    finite(a.evaluate()?.powf(1.0 / index))
                }
            }
            Expression::Factorial(x) => factorial(x.evaluate()?),
        };

        if let Err(e) = &result {
            debug!("Expression evaluation failed: {}", e);
        }

        result
    }
}

#[cfg(test)]
mod tests_inner_helpers {
    use super::{factorial, is_integer};
    use crate::expression::EvalError;

    #[test]
    fn test_is_integer() {
        assert!(is_integer(1.0));
        assert!(is_integer(42.0));
        assert!(is_integer(-17.0));
        assert!(!is_integer(1.5));
        assert!(!is_integer(1.234_567));

        assert!(is_integer(2_f64.powi(53)));
        assert!(is_integer(1e15));
    }

    #[test]
    fn test_factorial_values() {
        assert_eq!(factorial(0.0), Ok(1.0));
        assert_eq!(factorial(1.0), Ok(1.0));
        assert_eq!(factorial(5.0), Ok(120.0));
        assert_eq!(factorial(9.0), Ok(362_880.0));
        assert_eq!(factorial(12.0), Ok(479_001_600.0));
    }

    #[test]
    fn test_factorial_domain() {
        assert_eq!(factorial(13.0), Err(EvalError::FactorialDomain));
        assert_eq!(factorial(-1.0), Err(EvalError::FactorialDomain));
        assert_eq!(factorial(2.5), Err(EvalError::FactorialDomain));
    }
}
