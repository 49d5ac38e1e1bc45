use thiserror::Error;

use crate::RecordKind;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown {kind} field: {field}")]
    UnknownField { kind: RecordKind, field: String },
}

pub type ModelResult<T> = Result<T, ModelError>;
