use crate::error::{CodecError, CodecResult};
use crate::header::{padding_for, HEADER_SIZE};
use crate::span::FieldSpan;

/// Size description of one parameter block: header, payload fields in
/// order, then alignment padding.
///
/// Fields are appended with [`BlockLayout::push_field`] and
/// [`BlockLayout::push_array`]; each returns the span the encoder later
/// writes through.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockLayout {
    end: usize,
}

impl Default for BlockLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockLayout {
    /// Layout holding only the header.
    pub fn new() -> Self {
        Self { end: HEADER_SIZE }
    }

    pub fn push_field(&mut self, len: usize) -> CodecResult<FieldSpan> {
        let span = FieldSpan::new(self.end, len);
        self.end = self
            .end
            .checked_add(len)
            .ok_or(CodecError::TooLarge(usize::MAX))?;
        Ok(span)
    }

    /// Appends `count` elements of `elem_size` bytes each.
    pub fn push_array(&mut self, count: usize, elem_size: usize) -> CodecResult<FieldSpan> {
        let len = count
            .checked_mul(elem_size)
            .ok_or(CodecError::TooLarge(usize::MAX))?;
        self.push_field(len)
    }

    /// Header plus payload, without padding.
    pub fn unpadded_len(&self) -> usize {
        self.end
    }

    pub fn padding(&self) -> usize {
        padding_for(self.end)
    }

    pub fn total_len(&self) -> usize {
        self.end + self.padding()
    }

    /// Value of the header's `param_size` slot.
    pub fn param_size(&self) -> CodecResult<u32> {
        let payload = self.end - HEADER_SIZE;
        u32::try_from(payload).map_err(|_| CodecError::TooLarge(payload))
    }
}
