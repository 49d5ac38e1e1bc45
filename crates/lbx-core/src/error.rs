use std::num::ParseIntError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid key pattern: {0}")]
    InvalidPattern(String),

    #[error("invalid label namespace: {0}")]
    InvalidNamespace(String),
}

pub type CoreResult<T> = Result<T, CoreError>;

/// Failure to decode a single label value into its typed field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("invalid duration: {0}")]
    Duration(String),

    #[error("invalid integer: {0}")]
    Integer(#[from] ParseIntError),

    #[error("invalid boolean: {0:?}")]
    Bool(String),
}
