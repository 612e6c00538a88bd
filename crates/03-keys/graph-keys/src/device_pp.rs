//! Device post-processing keys and calibration.

use log::{debug, trace};
use payload_abi::key::*;
use payload_abi::value::*;
use payload_abi::{
    DeviceAttributes, DeviceId, Direction, KeyVector, KvPair, LoopbackKind, StreamAttributes,
    StreamType,
};

use crate::device::target_kv;
use crate::error::ResolveResult;
use crate::resolver::{BackendDevices, RxTxKv};
use crate::source::StreamSource;
use crate::stream::unsupported;

/// Contribution each associated device makes, fixed by the stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PpRule {
    Voice,
    Playback,
    Capture,
    VoipPlayback,
    HfpSink,
    HfpSource,
    VoiceUi,
    Nothing,
}

fn pp_rule(attrs: &StreamAttributes) -> ResolveResult<PpRule> {
    use StreamType::*;

    Ok(match attrs.stream_type {
        VoiceCall => PpRule::Voice,
        LowLatency | Compressed | DeepBuffer | PcmOffload => match attrs.direction {
            Direction::Output => PpRule::Playback,
            Direction::Input => PpRule::Capture,
            Direction::Both => PpRule::Nothing,
        },
        VoipRx => PpRule::VoipPlayback,
        VoipTx => PpRule::Capture,
        Loopback => match attrs.loopback {
            LoopbackKind::HfpRx => PpRule::HfpSink,
            LoopbackKind::HfpTx => PpRule::HfpSource,
            LoopbackKind::Pcm => PpRule::Nothing,
        },
        VoiceUi => PpRule::VoiceUi,
        Generic | VoiceCallRecord | VoiceCallMusic | UltraLowLatency | Proxy => {
            return Err(unsupported("device_pp_kv", attrs))
        }
    })
}

/// Applies the stream's rule to every associated device, then appends the
/// device keys of the rx and tx targets. Unsupported streams fail before any
/// device is queried.
pub(crate) fn device_pp_kv(
    attrs: &StreamAttributes,
    source: &dyn StreamSource,
    targets: BackendDevices,
    aux: &[KvPair],
) -> ResolveResult<RxTxKv> {
    let rule = pp_rule(attrs)?;
    let devices = source.associated_devices()?;
    let mut out = RxTxKv::default();
    for device in &devices {
        trace!("device pp {rule:?} for {:?} ({} ch)", device.id, device.channels);
        match rule {
            PpRule::Voice => {
                if Some(device.id) == targets.rx {
                    out.rx.push(KvPair::new(DEVICEPP_RX, DEVICEPP_RX_VOICE_DEFAULT));
                }
                if Some(device.id) == targets.tx {
                    out.tx.extend_from_slice(aux);
                }
            }
            PpRule::Playback if device.id == DeviceId::OutProxy => {
                out.rx.push(KvPair::new(DEVICEPP_RX, DEVICEPP_RX_DEFAULT));
            }
            PpRule::Playback => out.rx.push(KvPair::new(DEVICEPP_RX, DEVICEPP_RX_AUDIO_MBDRC)),
            PpRule::Capture => out.tx.extend_from_slice(aux),
            PpRule::VoipPlayback => out.rx.push(KvPair::new(DEVICEPP_RX, DEVICEPP_RX_VOIP_MBDRC)),
            PpRule::HfpSink => out.rx.push(KvPair::new(DEVICEPP_RX, DEVICEPP_RX_HFPSINK)),
            PpRule::HfpSource => out.tx.push(KvPair::new(
                DEVICEPP_TX,
                DEVICEPP_TX_HFP_SINK_FLUENCE_SMECNS,
            )),
            PpRule::VoiceUi => out.tx.extend(source.device_pp_modifiers()),
            PpRule::Nothing => {}
        }
    }
    out.rx.extend(target_kv(targets.rx));
    out.tx.extend(target_kv(targets.tx));
    debug!(
        "device_pp_kv {:?}: rx {} pairs, tx {} pairs",
        attrs.stream_type,
        out.rx.len(),
        out.tx.len()
    );
    Ok(out)
}

/// Per-device channel calibration for voice-UI streams; other streams have
/// none.
pub(crate) fn device_pp_ckv(devices: &[DeviceAttributes]) -> KeyVector {
    devices
        .iter()
        .map(|device| KvPair::new(CHANNELS, device.channels))
        .collect()
}
