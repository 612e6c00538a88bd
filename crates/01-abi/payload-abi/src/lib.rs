//! Shared identifiers for the DSP payload builder.
//!
//! This crate defines the vocabulary exchanged between the key-vector
//! resolver (layer 03), the parameter block codec (layer 02), and the
//! orchestration code that composes them. It carries no behaviour beyond
//! raw-value conversions so both sides agree on every numeric id.

#![allow(missing_docs)]

mod channel;
mod device;
mod error;
pub mod key;
mod kv;
pub mod param;
mod stream;
mod tag;
pub mod value;

pub use channel::ChannelRole;
pub use device::{DeviceAttributes, DeviceId};
pub use error::{AbiError, AbiResult};
pub use kv::{KeyVector, KvPair};
pub use stream::{Direction, LoopbackKind, StreamAttributes, StreamType};
pub use tag::{CalTag, GraphTag, Tag};
