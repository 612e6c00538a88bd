//! Owned parameter blocks and the checked writer encoders fill them with.

use log::debug;

use crate::error::{CodecError, CodecResult};
use crate::header::{ParamHeader, HEADER_SIZE};
use crate::layout::BlockLayout;
use crate::span::FieldSpan;

/// Encoded parameter block: header, payload, zero padding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParamBlock {
    bytes: Vec<u8>,
    padding: usize,
}

impl ParamBlock {
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Total length including padding.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always false: a block carries at least its header.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn padding(&self) -> usize {
        self.padding
    }

    pub fn header(&self) -> CodecResult<ParamHeader> {
        ParamHeader::read_from(&self.bytes)
    }

    /// Payload bytes between the header and the padding.
    pub fn payload(&self) -> &[u8] {
        &self.bytes[HEADER_SIZE..self.bytes.len() - self.padding]
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.bytes
    }
}

impl AsRef<[u8]> for ParamBlock {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

fn alloc_zeroed(size: usize) -> CodecResult<Vec<u8>> {
    let mut bytes = Vec::new();
    bytes
        .try_reserve_exact(size)
        .map_err(|_| CodecError::AllocationFailed { size })?;
    bytes.resize(size, 0);
    Ok(bytes)
}

/// Writes one block laid out by a [`BlockLayout`]. The header is written on
/// construction; payload fields are filled through [`FieldCursor`]s.
pub(crate) struct BlockWriter {
    bytes: Vec<u8>,
    layout: BlockLayout,
    header: ParamHeader,
}

impl BlockWriter {
    pub(crate) fn new(layout: BlockLayout, miid: u32, param_id: u32) -> CodecResult<Self> {
        let header = ParamHeader::new(miid, param_id, layout.param_size()?);
        let mut bytes = alloc_zeroed(layout.total_len())?;
        let slot: &mut [u8; HEADER_SIZE] = bytes
            .get_mut(..HEADER_SIZE)
            .and_then(|b| b.try_into().ok())
            .ok_or(CodecError::OutOfBounds {
                offset: 0,
                len: HEADER_SIZE,
                total: layout.total_len(),
            })?;
        header.write_to(slot);
        Ok(Self {
            bytes,
            layout,
            header,
        })
    }

    /// Opens a cursor over `span` after checking it against the payload end.
    pub(crate) fn cursor(&mut self, span: FieldSpan) -> CodecResult<FieldCursor<'_>> {
        let total = self.layout.unpadded_len();
        if span.offset < HEADER_SIZE || !span.fits(total) {
            return Err(CodecError::OutOfBounds {
                offset: span.offset,
                len: span.len,
                total,
            });
        }
        Ok(FieldCursor {
            buf: &mut self.bytes[span.range()],
            pos: 0,
            span,
        })
    }

    pub(crate) fn finish(self) -> ParamBlock {
        debug!(
            "param block miid={:#x} param_id={:#x} param_size={} padding={} total={}",
            self.header.module_instance_id,
            self.header.param_id,
            self.header.param_size,
            self.layout.padding(),
            self.bytes.len()
        );
        ParamBlock {
            bytes: self.bytes,
            padding: self.layout.padding(),
        }
    }
}

/// Sequential little-endian writer confined to one span.
pub(crate) struct FieldCursor<'a> {
    buf: &'a mut [u8],
    pos: usize,
    span: FieldSpan,
}

impl FieldCursor<'_> {
    pub(crate) fn put(&mut self, src: &[u8]) -> CodecResult<()> {
        let end = self.pos + src.len();
        let dst = self
            .buf
            .get_mut(self.pos..end)
            .ok_or(CodecError::OutOfBounds {
                offset: self.span.offset + self.pos,
                len: src.len(),
                total: self.span.end(),
            })?;
        dst.copy_from_slice(src);
        self.pos = end;
        Ok(())
    }

    pub(crate) fn put_u8(&mut self, value: u8) -> CodecResult<()> {
        self.put(&[value])
    }

    pub(crate) fn put_u16(&mut self, value: u16) -> CodecResult<()> {
        self.put(&value.to_le_bytes())
    }

    pub(crate) fn put_i16(&mut self, value: i16) -> CodecResult<()> {
        self.put(&value.to_le_bytes())
    }

    pub(crate) fn put_u32(&mut self, value: u32) -> CodecResult<()> {
        self.put(&value.to_le_bytes())
    }

    pub(crate) fn put_i32(&mut self, value: i32) -> CodecResult<()> {
        self.put(&value.to_le_bytes())
    }
}
