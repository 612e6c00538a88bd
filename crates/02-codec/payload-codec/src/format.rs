use crate::error::{CodecError, CodecResult};

/// Fixed-point sample representation derived from a bit depth.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedPointFormat {
    pub bit_width: u16,
    pub bits_per_sample: u16,
    pub q_factor: u16,
}

/// Maps a bit depth onto its fixed-point container.
///
/// 16 and 32 bits are carried as-is with Q = width - 1. 24-bit audio is
/// widened into a 32-bit container at Q27.
pub fn fixed_point_format(bit_width: u32) -> CodecResult<FixedPointFormat> {
    match bit_width {
        16 | 32 => {
            let width = bit_width as u16;
            Ok(FixedPointFormat {
                bit_width: width,
                bits_per_sample: width,
                q_factor: width - 1,
            })
        }
        24 => Ok(FixedPointFormat {
            bit_width: 32,
            bits_per_sample: 32,
            q_factor: 27,
        }),
        other => Err(CodecError::UnsupportedBitWidth(other)),
    }
}
