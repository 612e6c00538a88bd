use crate::error::{CodecError, CodecResult};

/// Size of the header preceding every parameter payload.
pub const HEADER_SIZE: usize = 16;
/// Every block is padded to a multiple of this many bytes.
pub const BLOCK_ALIGNMENT: usize = 8;

const MIID_OFFSET: usize = 0;
const PARAM_ID_OFFSET: usize = 4;
const PARAM_SIZE_OFFSET: usize = 8;
const ERROR_CODE_OFFSET: usize = 12;

/// Zero bytes needed after `len` bytes to reach the block alignment.
pub const fn padding_for(len: usize) -> usize {
    (BLOCK_ALIGNMENT - len % BLOCK_ALIGNMENT) % BLOCK_ALIGNMENT
}

/// Fixed header in front of each parameter payload.
///
/// `param_size` counts the payload bytes only: neither the header nor the
/// trailing alignment padding is included.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParamHeader {
    pub module_instance_id: u32,
    pub param_id: u32,
    pub param_size: u32,
    pub error_code: u32,
}

impl ParamHeader {
    pub fn new(module_instance_id: u32, param_id: u32, param_size: u32) -> Self {
        Self {
            module_instance_id,
            param_id,
            param_size,
            error_code: 0,
        }
    }

    pub(crate) fn write_to(&self, out: &mut [u8; HEADER_SIZE]) {
        put_u32(out, MIID_OFFSET, self.module_instance_id);
        put_u32(out, PARAM_ID_OFFSET, self.param_id);
        put_u32(out, PARAM_SIZE_OFFSET, self.param_size);
        put_u32(out, ERROR_CODE_OFFSET, self.error_code);
    }

    /// Decodes a header from the front of `bytes`.
    pub fn read_from(bytes: &[u8]) -> CodecResult<Self> {
        let raw: &[u8; HEADER_SIZE] = bytes
            .get(..HEADER_SIZE)
            .and_then(|b| b.try_into().ok())
            .ok_or(CodecError::OutOfBounds {
                offset: 0,
                len: HEADER_SIZE,
                total: bytes.len(),
            })?;
        Ok(Self {
            module_instance_id: get_u32(raw, MIID_OFFSET),
            param_id: get_u32(raw, PARAM_ID_OFFSET),
            param_size: get_u32(raw, PARAM_SIZE_OFFSET),
            error_code: get_u32(raw, ERROR_CODE_OFFSET),
        })
    }
}

fn put_u32(out: &mut [u8; HEADER_SIZE], offset: usize, value: u32) {
    out[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
}

fn get_u32(raw: &[u8; HEADER_SIZE], offset: usize) -> u32 {
    u32::from_le_bytes([
        raw[offset],
        raw[offset + 1],
        raw[offset + 2],
        raw[offset + 3],
    ])
}
