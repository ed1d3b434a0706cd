use thiserror::Error;

/// Fatal input-validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Input must contain at least 3 digits, found {found}")]
    InsufficientDigits { found: usize },
}
