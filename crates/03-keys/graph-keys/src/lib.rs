//! Key-vector resolution for graph and calibration lookup.
//!
//! A [`Resolver`] turns stream and device attributes, reported through the
//! [`StreamSource`] collaborator, into the ordered `(key, value)` vectors the
//! graph manager and calibration database are indexed by. Rules are
//! exhaustive matches over the closed enums in `payload-abi`; the only shared
//! state is the [`VoiceModes`] table.

#![allow(missing_docs)]

mod calibration;
mod config;
mod device;
mod device_pp;
mod error;
mod resolver;
mod source;
mod stream;
mod tag;
mod voice_modes;

pub use calibration::volume_level;
pub use config::{OpModePolicy, ResolverConfig};
pub use device::device_kv;
pub use error::{ResolveError, ResolveResult};
pub use resolver::{BackendDevices, Resolver, RxTxKv, SidetoneMode, VsidInfo};
pub use source::{CaptureProfiles, StreamSource};
pub use tag::{tag_kv, TagKv};
pub use voice_modes::{VoiceModeTable, VoiceModes};

use payload_abi::{KeyVector, KvPair};

pub(crate) fn kv(pairs: &[(u32, u32)]) -> KeyVector {
    pairs.iter().map(|&pair| KvPair::from(pair)).collect()
}
