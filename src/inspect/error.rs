use thiserror::Error;

use crate::codec::CodecError;

#[derive(Debug, Error)]
pub enum InspectError {
    #[error("Unknown column type: {0}")]
    UnknownType(String),

    #[error("Invalid {column} value at row {row}: {reason}")]
    InvalidValue {
        row: usize,
        column: &'static str,
        reason: String,
    },

    #[error(transparent)]
    Codec(#[from] CodecError),
}
