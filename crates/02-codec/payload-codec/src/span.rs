//! Byte spans addressing one field group inside a parameter block.
//!
//! Encoders never index the block buffer directly: a [`crate::BlockLayout`]
//! hands out spans once, and every write goes through a span that is checked
//! against the allocated length first.

use std::ops::Range;

/// Contiguous byte range within a parameter block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpan {
    /// Offset from the start of the block (header included).
    pub offset: usize,
    /// Length of the span in bytes.
    pub len: usize,
}

impl FieldSpan {
    pub fn new(offset: usize, len: usize) -> Self {
        Self { offset, len }
    }

    /// Exclusive end offset.
    pub fn end(&self) -> usize {
        self.offset + self.len
    }

    pub fn range(&self) -> Range<usize> {
        self.offset..self.end()
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if the span lies entirely within `total` bytes.
    pub fn fits(&self, total: usize) -> bool {
        self.offset
            .checked_add(self.len)
            .is_some_and(|end| end <= total)
    }
}
