use thiserror::Error;

/// Evaluation failures; each one silently discards a single candidate expression
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Factorial argument must be an integer in 0..=12")]
    FactorialDomain,
    #[error("Result is not a finite real number")]
    InvalidResult,
    #[error("Result exceeds the representable range")]
    Overflow,
}
