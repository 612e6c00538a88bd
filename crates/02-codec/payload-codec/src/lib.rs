//! Parameter block codec for DSP module configuration.
//!
//! Every encoder produces a [`ParamBlock`]: a 16-byte [`ParamHeader`], the
//! parameter's payload, and zero padding up to the next 8-byte boundary.
//! Encoders are pure and allocate a fresh block per call; failures never
//! leave a partially written block behind.
//!
//! The [`channel_map`] module resolves channel-role orderings for the
//! media-format encoders.

#![allow(missing_docs)]

mod block;
pub mod channel_map;
mod encode;
mod error;
mod format;
mod header;
mod layout;
mod span;

pub use block::ParamBlock;
pub use channel_map::{resolve_channel_map, ChannelMap, SpeakerRotation};
pub use encode::*;
pub use error::{CodecError, CodecResult};
pub use format::{fixed_point_format, FixedPointFormat};
pub use header::{padding_for, ParamHeader, BLOCK_ALIGNMENT, HEADER_SIZE};
pub use layout::BlockLayout;
pub use span::FieldSpan;
