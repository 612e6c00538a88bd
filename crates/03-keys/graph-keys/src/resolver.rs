//! Entry point tying the rule tables to the stream collaborator.

use std::sync::Arc;

use log::debug;
use payload_abi::key::VOLUME;
use payload_abi::value::LEVEL_15;
use payload_abi::{CalTag, DeviceId, KeyVector, KvPair, StreamType, Tag};

use crate::calibration;
use crate::config::{OpModePolicy, ResolverConfig};
use crate::device;
use crate::device_pp;
use crate::error::ResolveResult;
use crate::kv;
use crate::source::{CaptureProfiles, StreamSource};
use crate::stream;
use crate::tag::{self, TagKv};
use crate::voice_modes::VoiceModes;

/// Separate key vectors for the playback (rx) and capture (tx) paths.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RxTxKv {
    pub rx: KeyVector,
    pub tx: KeyVector,
}

/// Backend devices a graph is being opened for. `None` leaves that path
/// without device keys.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BackendDevices {
    pub rx: Option<DeviceId>,
    pub tx: Option<DeviceId>,
}

impl BackendDevices {
    pub fn new(rx: Option<DeviceId>, tx: Option<DeviceId>) -> Self {
        Self { rx, tx }
    }
}

/// Sidetone path of a voice call. Only software sidetone adds a graph key;
/// hardware sidetone runs in the codec and resolves like `Off`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SidetoneMode {
    #[default]
    Off,
    Hardware,
    Software,
}

/// Voice session keying for voice-call streams.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VsidInfo {
    /// Key paired with the session's mode value.
    pub vsid_key: u32,
    /// `(vsid, mode)` overrides for this resolution only. The shared table
    /// changes only through [`VoiceModes::update`].
    pub modes: Vec<KvPair>,
}

impl Default for VsidInfo {
    fn default() -> Self {
        Self {
            vsid_key: payload_abi::key::VSID,
            modes: Vec::new(),
        }
    }
}

/// Resolves graph and calibration key vectors for streams.
///
/// Safe to share across threads; the voice-mode table is the only mutable
/// state.
pub struct Resolver {
    op_mode: OpModePolicy,
    voice_modes: VoiceModes,
    profiles: Arc<dyn CaptureProfiles>,
}

impl Resolver {
    pub fn new(config: ResolverConfig, profiles: Arc<dyn CaptureProfiles>) -> Self {
        Self {
            op_mode: config.op_mode,
            voice_modes: VoiceModes::from_config(&config),
            profiles,
        }
    }

    pub fn voice_modes(&self) -> &VoiceModes {
        &self.voice_modes
    }

    pub fn op_mode(&self) -> OpModePolicy {
        self.op_mode
    }

    /// Graph keys selecting the stream's own subgraph.
    pub fn stream_kv(&self, source: &dyn StreamSource) -> ResolveResult<KeyVector> {
        let attrs = source.attributes()?;
        stream::stream_kv(&attrs, source)
    }

    /// Rx and tx stream keys for loopback and voice-call streams.
    pub fn stream_kv_rx_tx(
        &self,
        source: &dyn StreamSource,
        vsid: &VsidInfo,
    ) -> ResolveResult<RxTxKv> {
        let attrs = source.attributes()?;
        stream::stream_kv_rx_tx(&attrs, &self.voice_modes, vsid)
    }

    pub fn stream_pp_kv(&self, source: &dyn StreamSource) -> ResolveResult<RxTxKv> {
        let attrs = source.attributes()?;
        stream::stream_pp_kv(&attrs)
    }

    pub fn device_kv(&self, id: DeviceId) -> KeyVector {
        device::device_kv(id)
    }

    /// Device keys for both paths, plus the software sidetone pair on the
    /// tx path of voice calls.
    pub fn device_kv_rx_tx(
        &self,
        source: &dyn StreamSource,
        targets: BackendDevices,
        sidetone: SidetoneMode,
    ) -> ResolveResult<RxTxKv> {
        let attrs = source.attributes()?;
        Ok(device::device_kv_rx_tx(&attrs, targets, sidetone))
    }

    /// Stream rx/tx keys followed by device rx/tx keys.
    pub fn stream_device_kv(
        &self,
        source: &dyn StreamSource,
        targets: BackendDevices,
        vsid: &VsidInfo,
        sidetone: SidetoneMode,
    ) -> ResolveResult<RxTxKv> {
        let attrs = source.attributes()?;
        let mut out = stream::stream_kv_rx_tx(&attrs, &self.voice_modes, vsid)?;
        let devices = device::device_kv_rx_tx(&attrs, targets, sidetone);
        out.rx.extend(devices.rx);
        out.tx.extend(devices.tx);
        Ok(out)
    }

    /// Device post-processing keys. `aux` holds caller-selected pairs for
    /// capture paths.
    pub fn device_pp_kv(
        &self,
        source: &dyn StreamSource,
        targets: BackendDevices,
        aux: &[KvPair],
    ) -> ResolveResult<RxTxKv> {
        let attrs = source.attributes()?;
        device_pp::device_pp_kv(&attrs, source, targets, aux)
    }

    /// Calibration keys used when a graph is first opened. The volume starts
    /// at the quietest level so the ramp goes up.
    pub fn stream_ckv(&self) -> KeyVector {
        kv(&[(VOLUME, LEVEL_15)])
    }

    pub fn device_pp_ckv(&self, source: &dyn StreamSource) -> ResolveResult<KeyVector> {
        let attrs = source.attributes()?;
        if attrs.stream_type != StreamType::VoiceUi {
            debug!("device_pp_ckv: no device calibration for {:?}", attrs.stream_type);
            return Ok(KeyVector::new());
        }
        let devices = source.associated_devices()?;
        Ok(device_pp::device_pp_ckv(&devices))
    }

    pub fn cal_kv(&self, source: &dyn StreamSource, tag: CalTag) -> ResolveResult<KeyVector> {
        let attrs = source.attributes()?;
        calibration::cal_kv(&attrs, source, self.profiles.as_ref(), tag)
    }

    pub fn tag_kv(&self, source: &dyn StreamSource, tag: Tag) -> ResolveResult<TagKv> {
        let attrs = source.attributes()?;
        Ok(tag::tag_kv(tag, attrs.direction, self.op_mode))
    }
}
