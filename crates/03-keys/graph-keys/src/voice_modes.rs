//! Voice session id to mode value table.
//!
//! Readers take a lock-free snapshot; writers are serialized and publish a
//! fresh table, so a snapshot never observes a half-applied update.

use std::sync::Arc;

use arc_swap::ArcSwap;
use log::{debug, trace};
use parking_lot::Mutex;
use payload_abi::value::{VOICELBMMODE1, VOICELBMMODE2, VOICEMMODE1, VOICEMMODE2};
use payload_abi::KvPair;
use smallvec::SmallVec;

use crate::config::ResolverConfig;

/// Immutable `(vsid, mode)` table. The set of vsids is fixed at
/// construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VoiceModeTable {
    entries: SmallVec<[KvPair; 4]>,
}

impl Default for VoiceModeTable {
    fn default() -> Self {
        Self {
            entries: [VOICEMMODE1, VOICEMMODE2, VOICELBMMODE1, VOICELBMMODE2]
                .into_iter()
                .map(|vsid| KvPair::new(vsid, 0))
                .collect(),
        }
    }
}

impl VoiceModeTable {
    pub fn mode_for(&self, vsid: u32) -> Option<u32> {
        self.entries
            .iter()
            .find(|entry| entry.key == vsid)
            .map(|entry| entry.value)
    }

    pub fn entries(&self) -> &[KvPair] {
        &self.entries
    }

    /// Copy of this table with `pairs` applied on top.
    pub fn with_overrides(&self, pairs: &[KvPair]) -> Self {
        let mut table = self.clone();
        table.apply(pairs);
        table
    }

    fn apply(&mut self, pairs: &[KvPair]) -> usize {
        let mut applied = 0;
        for pair in pairs {
            match self.entries.iter_mut().find(|entry| entry.key == pair.key) {
                Some(entry) => {
                    trace!("voice mode {:#x} -> {:#x}", pair.key, pair.value);
                    entry.value = pair.value;
                    applied += 1;
                }
                None => trace!("ignoring unknown vsid {:#x}", pair.key),
            }
        }
        applied
    }
}

/// Shared, synchronized voice-mode table.
pub struct VoiceModes {
    current: ArcSwap<VoiceModeTable>,
    writer: Mutex<()>,
}

impl Default for VoiceModes {
    fn default() -> Self {
        Self::new()
    }
}

impl VoiceModes {
    pub fn new() -> Self {
        Self {
            current: ArcSwap::from_pointee(VoiceModeTable::default()),
            writer: Mutex::new(()),
        }
    }

    pub fn from_config(config: &ResolverConfig) -> Self {
        let modes = Self::new();
        modes.update(&config.voice_modes);
        modes
    }

    pub fn snapshot(&self) -> Arc<VoiceModeTable> {
        self.current.load_full()
    }

    pub fn mode_for(&self, vsid: u32) -> Option<u32> {
        self.current.load().mode_for(vsid)
    }

    /// Overwrites the mode of every known vsid in `pairs`; unknown vsids are
    /// ignored. Returns the number of pairs applied.
    pub fn update(&self, pairs: &[KvPair]) -> usize {
        if pairs.is_empty() {
            return 0;
        }
        let _guard = self.writer.lock();
        let mut next = VoiceModeTable::clone(&self.current.load());
        let applied = next.apply(pairs);
        if applied > 0 {
            self.current.store(Arc::new(next));
        }
        debug!("voice modes updated: {applied} of {} pairs applied", pairs.len());
        applied
    }
}
