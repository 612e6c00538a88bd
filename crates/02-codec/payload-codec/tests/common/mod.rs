#![allow(dead_code)]

use payload_codec::{ParamBlock, ParamHeader, HEADER_SIZE};

/// Little-endian reader over an encoded payload.
pub struct Reader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    pub fn take(&mut self, len: usize) -> &'a [u8] {
        let out = &self.bytes[self.pos..self.pos + len];
        self.pos += len;
        out
    }

    pub fn u8(&mut self) -> u8 {
        self.take(1)[0]
    }

    pub fn u16(&mut self) -> u16 {
        u16::from_le_bytes(self.take(2).try_into().unwrap())
    }

    pub fn i16(&mut self) -> i16 {
        i16::from_le_bytes(self.take(2).try_into().unwrap())
    }

    pub fn u32(&mut self) -> u32 {
        u32::from_le_bytes(self.take(4).try_into().unwrap())
    }

    pub fn i32(&mut self) -> i32 {
        i32::from_le_bytes(self.take(4).try_into().unwrap())
    }

    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.pos
    }
}

/// Checks the framing invariants every block must hold and returns its header.
pub fn check_framing(block: &ParamBlock) -> ParamHeader {
    let header = block.header().expect("header");
    assert_eq!(block.len() % 8, 0, "block length {} not aligned", block.len());
    assert!(block.padding() < 8);
    assert_eq!(
        header.param_size as usize,
        block.len() - block.padding() - HEADER_SIZE
    );
    assert_eq!(header.error_code, 0);
    assert!(block.as_bytes()[block.len() - block.padding()..]
        .iter()
        .all(|b| *b == 0));
    header
}
