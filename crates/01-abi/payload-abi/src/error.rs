use thiserror::Error;

pub type AbiResult<T> = Result<T, AbiError>;

/// Raw values that fall outside a closed enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AbiError {
    #[error("unknown stream type {0}")]
    UnknownStreamType(u32),

    #[error("unknown stream direction {0:#x}")]
    UnknownDirection(u32),

    #[error("unknown loopback kind {0}")]
    UnknownLoopbackKind(u32),
}
