use thiserror::Error;

pub type CodecResult<T> = Result<T, CodecError>;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("unsupported bit width {0}")]
    UnsupportedBitWidth(u32),

    #[error("channel count {0} has no default channel map")]
    UnsupportedChannelCount(usize),

    #[error("field {offset}+{len} exceeds block of {total} bytes")]
    OutOfBounds {
        offset: usize,
        len: usize,
        total: usize,
    },

    #[error("payload of {0} bytes does not fit the 32-bit size field")]
    TooLarge(usize),

    #[error("failed to allocate parameter block of {size} bytes")]
    AllocationFailed { size: usize },
}

impl CodecError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        CodecError::InvalidInput(msg.into())
    }
}
