use log::{debug, trace};
use payload_abi::key::*;
use payload_abi::value::*;
use payload_abi::{Direction, GraphTag, KeyVector, Tag};

use crate::config::OpModePolicy;
use crate::kv;

/// Key contribution of one runtime tag and the graph stage it applies to.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TagKv {
    pub kv: KeyVector,
    /// `None` when the tag is not recognized.
    pub graph_tag: Option<GraphTag>,
}

/// Resolves a runtime tag. Media-format tags target the stream MFC on input
/// streams and the device MFC otherwise.
pub fn tag_kv(tag: Tag, direction: Direction, op_mode: OpModePolicy) -> TagKv {
    let mfc = if direction.is_input() {
        GraphTag::StreamMfc
    } else {
        GraphTag::DeviceMfc
    };

    let (pairs, target) = match tag {
        Tag::Mute => (kv(&[(MUTE, ON)]), GraphTag::Mute),
        Tag::Unmute => (kv(&[(MUTE, OFF)]), GraphTag::Mute),
        Tag::Pause => (kv(&[(PAUSE, ON)]), GraphTag::Pause),
        Tag::Resume => (kv(&[(PAUSE, OFF)]), GraphTag::Pause),
        Tag::SlowTalkOff => (kv(&[(SLOW_TALK, SLOW_TALK_OFF)]), GraphTag::StreamSlowTalk),
        Tag::SlowTalkOn => (kv(&[(SLOW_TALK, SLOW_TALK_ON)]), GraphTag::StreamSlowTalk),
        Tag::MfcSr8k => (kv(&[(SAMPLINGRATE, SAMPLINGRATE_8K)]), mfc),
        Tag::MfcSr16k => (kv(&[(SAMPLINGRATE, SAMPLINGRATE_16K)]), mfc),
        Tag::MfcSr22k => (kv(&[(SAMPLINGRATE, SAMPLINGRATE_22K)]), mfc),
        Tag::MfcSr32k => (kv(&[(SAMPLINGRATE, SAMPLINGRATE_32K)]), mfc),
        Tag::MfcSr44k => (kv(&[(SAMPLINGRATE, SAMPLINGRATE_44K)]), mfc),
        Tag::MfcSr48k => (kv(&[(SAMPLINGRATE, SAMPLINGRATE_48K)]), mfc),
        Tag::MfcSr96k => (kv(&[(SAMPLINGRATE, SAMPLINGRATE_96K)]), mfc),
        Tag::MfcSr192k => (kv(&[(SAMPLINGRATE, SAMPLINGRATE_192K)]), mfc),
        Tag::MfcSr384k => (kv(&[(SAMPLINGRATE, SAMPLINGRATE_384K)]), mfc),
        Tag::Channels1 => (kv(&[(CHANNELS, CHANNELS_1)]), mfc),
        Tag::Channels2 => (kv(&[(CHANNELS, CHANNELS_2)]), mfc),
        Tag::Channels3 => (kv(&[(CHANNELS, CHANNELS_3)]), mfc),
        Tag::Channels4 => (kv(&[(CHANNELS, CHANNELS_4)]), mfc),
        Tag::BitWidth16 => (kv(&[(BITWIDTH, BITWIDTH_16)]), mfc),
        Tag::BitWidth24 => (kv(&[(BITWIDTH, BITWIDTH_24)]), mfc),
        Tag::BitWidth32 => (kv(&[(BITWIDTH, BITWIDTH_32)]), mfc),
        Tag::FluenceOn => (kv(&[(FLUENCE, FLUENCE_ON)]), GraphTag::Fluence),
        Tag::FluenceOff => (kv(&[(FLUENCE, FLUENCE_OFF)]), GraphTag::Fluence),
        Tag::FluenceEc => (kv(&[(FLUENCE, FLUENCE_EC)]), GraphTag::Fluence),
        Tag::FluenceNs => (kv(&[(FLUENCE, FLUENCE_NS)]), GraphTag::Fluence),
        Tag::OpMode => match op_mode {
            OpModePolicy::Exclusive => (kv(&[(MODULE_OP_MODE, NORMAL)]), GraphTag::ModuleOpMode),
            OpModePolicy::FallThroughUplink => (
                kv(&[
                    (MODULE_OP_MODE, NORMAL),
                    (MUX_DEMUX_CONFIG, MUX_DEMUX_CONFIG_UPLINK),
                ]),
                GraphTag::StreamMuxDemux,
            ),
        },
        Tag::IncallRecordUplink => (
            kv(&[(MUX_DEMUX_CONFIG, MUX_DEMUX_CONFIG_UPLINK)]),
            GraphTag::StreamMuxDemux,
        ),
        Tag::IncallRecordDownlink => (
            kv(&[(MUX_DEMUX_CONFIG, MUX_DEMUX_CONFIG_DOWNLINK)]),
            GraphTag::StreamMuxDemux,
        ),
        Tag::IncallRecordUplinkDownlinkMono => (
            kv(&[(MUX_DEMUX_CONFIG, MUX_DEMUX_CONFIG_UPLINK_DOWNLINK_MONO)]),
            GraphTag::StreamMuxDemux,
        ),
        Tag::IncallRecordUplinkDownlinkStereo => (
            kv(&[(MUX_DEMUX_CONFIG, MUX_DEMUX_CONFIG_UPLINK_DOWNLINK_STEREO)]),
            GraphTag::StreamMuxDemux,
        ),
        Tag::Unrecognized(raw) => {
            debug!("tag_kv: unrecognized tag {raw:#x}");
            return TagKv::default();
        }
    };
    trace!("tag_kv {tag:?} -> {target:?} {:?}", pairs.as_slice());
    TagKv {
        kv: pairs,
        graph_tag: Some(target),
    }
}
