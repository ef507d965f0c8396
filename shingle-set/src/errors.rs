//! Error definitions.
use std::result;

use thiserror::Error;

/// A specialized Result type for this library.
pub type Result<T, E = ShingleSetError> = result::Result<T, E>;

/// Errors in this library.
#[derive(Debug, Error)]
pub enum ShingleSetError {
    /// Contains [`InputError`].
    #[error(transparent)]
    Input(#[from] InputError),
}

impl ShingleSetError {
    pub(crate) const fn input(msg: &'static str) -> Self {
        Self::Input(InputError { msg })
    }
}

/// Error used when the input argument is invalid.
#[derive(Debug, Error)]
#[error("InputError: {msg}")]
pub struct InputError {
    msg: &'static str,
}
