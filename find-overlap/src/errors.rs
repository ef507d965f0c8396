//! Error definitions.
use std::result;

use shingle_set::ShingleSetError;
use thiserror::Error;

/// A specialized Result type for this library.
pub type Result<T, E = FindOverlapError> = result::Result<T, E>;

/// Errors in this library.
#[derive(Debug, Error)]
pub enum FindOverlapError {
    /// Contains [`InputError`].
    #[error(transparent)]
    Input(#[from] InputError),

    /// Propagated from the shingle set.
    #[error(transparent)]
    ShingleSet(#[from] ShingleSetError),
}

impl FindOverlapError {
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
