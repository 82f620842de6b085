//! Error types for Autoinjector

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("an injection response needs at least one reason")]
    EmptyReasons,
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput(reason.into())
    }
}
