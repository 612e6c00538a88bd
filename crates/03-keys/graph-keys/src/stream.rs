//! Stream-level graph key rules.

use log::{debug, warn};
use payload_abi::key::*;
use payload_abi::value::*;
use payload_abi::{Direction, KeyVector, KvPair, LoopbackKind, StreamAttributes, StreamType};

use crate::error::{ResolveError, ResolveResult};
use crate::kv;
use crate::resolver::{RxTxKv, VsidInfo};
use crate::source::StreamSource;
use crate::voice_modes::VoiceModes;

pub(crate) fn unsupported(rule: &'static str, attrs: &StreamAttributes) -> ResolveError {
    warn!(
        "{rule}: unsupported stream {:?} direction {:?}",
        attrs.stream_type, attrs.direction
    );
    ResolveError::UnsupportedStream {
        rule,
        stream_type: attrs.stream_type,
        direction: attrs.direction,
    }
}

pub(crate) fn stream_kv(
    attrs: &StreamAttributes,
    source: &dyn StreamSource,
) -> ResolveResult<KeyVector> {
    use Direction::{Both, Input, Output};
    use StreamType::*;

    let out = match (attrs.stream_type, attrs.direction) {
        (LowLatency, Output) => kv(&[(STREAMRX, PCM_LL_PLAYBACK), (INSTANCE, INSTANCE_1)]),
        (LowLatency, Input) => kv(&[(STREAMTX, RAW_RECORD)]),
        (LowLatency, Both) => kv(&[(STREAMRX, PCM_RX_LOOPBACK)]),
        (UltraLowLatency, Output) => kv(&[(STREAMRX, PCM_ULL_PLAYBACK)]),
        (UltraLowLatency, Input) => kv(&[(STREAMTX, PCM_ULL_RECORD)]),
        (Proxy, Output) => kv(&[(STREAMRX, PCM_PROXY_PLAYBACK)]),
        (Proxy, Input) => kv(&[(STREAMTX, PCM_PROXY_RECORD)]),
        (DeepBuffer, Output) => kv(&[(STREAMRX, PCM_DEEP_BUFFER)]),
        (DeepBuffer, Input) => kv(&[(STREAMTX, PCM_RECORD)]),
        (PcmOffload, Output) => kv(&[(STREAMRX, PCM_OFFLOAD_PLAYBACK), (INSTANCE, INSTANCE_1)]),
        (Compressed, Output) => kv(&[
            (STREAMRX, COMPRESSED_OFFLOAD_PLAYBACK),
            (INSTANCE, INSTANCE_1),
        ]),
        (VoipTx, _) => kv(&[(STREAMTX, VOIP_TX_RECORD)]),
        (VoipRx, _) => kv(&[(STREAMRX, VOIP_RX_PLAYBACK)]),
        (VoiceUi, _) => voice_ui_kv(source)?,
        (VoiceCallRecord, _) => kv(&[(STREAMTX, INCALL_RECORD)]),
        (VoiceCallMusic, _) => kv(&[(STREAMRX, INCALL_MUSIC)]),
        (Generic, _) => KeyVector::new(),
        _ => return Err(unsupported("stream_kv", attrs)),
    };
    debug!("stream_kv {:?}: {} pairs", attrs.stream_type, out.len());
    Ok(out)
}

fn voice_ui_kv(source: &dyn StreamSource) -> ResolveResult<KeyVector> {
    let mut out = kv(&[(STREAMTX, VOICE_UI)]);
    out.extend(source.stream_modifiers());
    let instance = source.instance_id();
    if instance < INSTANCE_1 {
        warn!("voice-ui stream with instance id {instance}");
        return Err(ResolveError::InvalidInstance(instance));
    }
    out.push(KvPair::new(INSTANCE, instance));
    Ok(out)
}

/// Rx/Tx stream keys for loopback and voice-call streams.
///
/// Voice calls tag both paths with the mode of the stream's session when it
/// is known. `vsid.modes` overrides the shared table for this call only.
pub(crate) fn stream_kv_rx_tx(
    attrs: &StreamAttributes,
    voice_modes: &VoiceModes,
    vsid: &VsidInfo,
) -> ResolveResult<RxTxKv> {
    let mut out = RxTxKv::default();
    match attrs.stream_type {
        StreamType::Loopback => match attrs.loopback {
            LoopbackKind::HfpRx => {
                out.rx.push(KvPair::new(STREAMRX, HFP_RX_PLAYBACK));
                out.tx.push(KvPair::new(STREAMTX, HFP_RX_CAPTURE));
            }
            LoopbackKind::HfpTx => {}
            LoopbackKind::Pcm => out.rx.push(KvPair::new(STREAMRX, PCM_RX_LOOPBACK)),
        },
        StreamType::VoiceCall => {
            let table = voice_modes.snapshot().with_overrides(&vsid.modes);
            out.rx.push(KvPair::new(STREAMRX, VOICE_CALL_RX));
            out.tx.push(KvPair::new(STREAMTX, VOICE_CALL_TX));
            if let Some(mode) = table.mode_for(attrs.vsid) {
                let pair = KvPair::new(vsid.vsid_key, mode);
                out.rx.push(pair);
                out.tx.push(pair);
            }
        }
        _ => return Err(unsupported("stream_kv_rx_tx", attrs)),
    }
    debug!(
        "stream_kv_rx_tx {:?}: rx {} pairs, tx {} pairs",
        attrs.stream_type,
        out.rx.len(),
        out.tx.len()
    );
    Ok(out)
}

/// Stream post-processing keys; only voice calls carry any.
pub(crate) fn stream_pp_kv(attrs: &StreamAttributes) -> ResolveResult<RxTxKv> {
    match attrs.stream_type {
        StreamType::VoiceCall => Ok(RxTxKv {
            rx: kv(&[(STREAMPP_RX, STREAMPP_RX_DEFAULT)]),
            tx: KeyVector::new(),
        }),
        _ => Err(unsupported("stream_pp_kv", attrs)),
    }
}
