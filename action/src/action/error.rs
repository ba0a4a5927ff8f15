use thiserror::Error;

/// Errors produced while constructing, decoding or costing actions.
#[derive(Debug, Error)]
pub enum Error {
    #[error("action: empty input to decode")]
    EmptyInput,

    #[error("action: nil target to decode into")]
    NilTarget,

    #[error("action: invalid encoding: {0}")]
    InvalidEncoding(#[source] cbor::DecodeError),

    #[error("action: invalid argument: {0}")]
    InvalidArgument(String),

    #[error("action: intrinsic gas overflow")]
    GasOverflow,
}

impl From<cbor::DecodeError> for Error {
    fn from(e: cbor::DecodeError) -> Self {
        Error::InvalidEncoding(e)
    }
}
