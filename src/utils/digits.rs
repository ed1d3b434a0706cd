use log::{debug, warn};

use crate::utils::errors::InputError;

/// Minimum digit count for a meaningful search
const MIN_DIGITS: usize = 3;

/// Extract all decimal digits from a raw date string, in order, discarding
/// separators such as `/`, `-`, `.` or whitespace.
///
/// # Errors
///
/// Returns `InputError::InsufficientDigits` when fewer than 3 digits remain.
pub fn extract_digits(input: &str) -> Result<Vec<u8>, InputError> {
    debug!("Extracting digits from '{}'", input);

    let digits: Vec<u8> = input
        .chars()
        .filter_map(|c| c.to_digit(10))
        .map(|d| d as u8)
        .collect();

    if digits.len() < MIN_DIGITS {
        warn!(
            "Only {} digit(s) found in '{}', need at least {}",
            digits.len(),
            input,
            MIN_DIGITS
        );
        return Err(InputError::InsufficientDigits {
            found: digits.len(),
        });
    }

    debug!("Extracted digits: {:?}", digits);
    Ok(digits)
}

/// Render a digit sequence back to its compact string form, e.g. "09052005".
pub fn digits_to_string(digits: &[u8]) -> String {
    digits.iter().map(|&d| char::from(b'0' + d)).collect()
}
