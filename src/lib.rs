//! Equidate - a library for finding arithmetic identities in the digits of a date
//!
//! Given a date-like string, this library extracts its digits, regroups them
//! into numbers, builds arithmetic expressions over each grouping, and reports
//! every pair of expressions whose values agree within a tolerance, such as
//! `0 * 9 + 0 + 5 = 2 * 0 + 0 + 5` for "09052005".

pub mod export;
pub mod expression;
pub mod solver;
pub mod utils;

// Re-export the main public API
pub use expression::{EvalError, Expression};
pub use solver::{
    Equation, EquationSolver, Operator, OperatorSet, SearchOptions, SearchResult, SolverError,
    SortPolicy, sort_equations,
};
pub use utils::{InputError, extract_digits};

/// Search the digits of `date_input` for matching left/right expression pairs
///
/// This is a convenience function that extracts the digits, runs a solver with
/// the given options, and wraps the deduplicated equations in a result.
///
/// # Arguments
///
/// * `date_input` - A date in any textual form; non-digit characters are ignored
/// * `options` - Operator set, factorial tokens, group cap, tolerance, budget
///
/// # Errors
///
/// Fails with `SolverError::Input` when the input contains fewer than 3
/// digits. Evaluation failures inside the search (division by zero, factorial
/// domain, non-finite results) are recovered locally and never surface here.
///
/// # Examples
///
/// ```
/// use equidate::{SearchOptions, generate_equations};
///
/// match generate_equations("123", &SearchOptions::default()) {
///     Ok(result) => println!("Found {} equations", result.len()),
///     Err(e) => eprintln!("Error: {}", e),
/// }
/// ```
pub fn generate_equations(
    date_input: &str,
    options: &SearchOptions,
) -> Result<SearchResult, SolverError> {
    let digits = extract_digits(date_input)?;

    let solver = EquationSolver::with_options(options.clone());
    let equations = solver.find_equations(&digits);
    Ok(SearchResult::new(digits, equations))
}
