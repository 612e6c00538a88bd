use payload_abi::{AbiError, Direction, StreamType};
use thiserror::Error;

pub type ResolveResult<T> = Result<T, ResolveError>;

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("collaborator failed: {0}")]
    Collaborator(String),

    #[error("{rule} does not support {stream_type:?} streams with direction {direction:?}")]
    UnsupportedStream {
        rule: &'static str,
        stream_type: StreamType,
        direction: Direction,
    },

    #[error("unknown stream type {0}")]
    UnknownStreamType(u32),

    #[error("invalid instance id {0}")]
    InvalidInstance(u32),

    #[error("volume {0} outside [0, 1]")]
    InvalidVolume(f32),

    #[error("invalid capture profile: {0}")]
    InvalidCaptureProfile(&'static str),
}

impl ResolveError {
    pub fn collaborator(msg: impl Into<String>) -> Self {
        ResolveError::Collaborator(msg.into())
    }
}

impl From<AbiError> for ResolveError {
    fn from(err: AbiError) -> Self {
        match err {
            AbiError::UnknownStreamType(raw) => ResolveError::UnknownStreamType(raw),
            other => ResolveError::Collaborator(other.to_string()),
        }
    }
}
