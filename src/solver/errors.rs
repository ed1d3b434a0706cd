use thiserror::Error;

use crate::utils::InputError;

#[derive(Error, Debug)]
pub enum SolverError {
    #[error("Input error: {0}")]
    Input(#[from] InputError),
}
