use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

/// One `(key, value)` entry of a graph or calibration key vector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KvPair {
    pub key: u32,
    pub value: u32,
}

impl KvPair {
    pub const fn new(key: u32, value: u32) -> Self {
        Self { key, value }
    }
}

impl From<(u32, u32)> for KvPair {
    fn from((key, value): (u32, u32)) -> Self {
        Self { key, value }
    }
}

impl fmt::Display for KvPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:#010x}, {:#x})", self.key, self.value)
    }
}

/// Ordered key vector. Order is significant and must match what the
/// downstream graph or calibration lookup expects.
pub type KeyVector = SmallVec<[KvPair; 8]>;
