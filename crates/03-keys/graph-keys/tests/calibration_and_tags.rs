//! Calibration and runtime tag rules.

mod common;

use common::{pairs, resolver, resolver_with, MockStream};
use graph_keys::{OpModePolicy, ResolveError, ResolverConfig};
use payload_abi::key::*;
use payload_abi::value::*;
use payload_abi::{CalTag, DeviceAttributes, DeviceId, Direction, GraphTag, StreamType, Tag};

#[test]
fn graph_open_calibration_starts_quiet() {
    assert_eq!(resolver().stream_ckv().to_vec(), pairs(&[(VOLUME, LEVEL_15)]));
}

#[test]
fn volume_tag_quantizes_stream_volume() {
    let resolver = resolver();
    let mut stream = MockStream::new(StreamType::LowLatency, Direction::Output);
    for (volume, level) in [(0.0, LEVEL_15), (0.003, LEVEL_14), (0.95, LEVEL_0)] {
        stream.volume = volume;
        assert_eq!(
            resolver.cal_kv(&stream, CalTag::StreamVolume).unwrap().to_vec(),
            pairs(&[(VOLUME, level)])
        );
    }
    stream.volume = 1.5;
    assert!(matches!(
        resolver.cal_kv(&stream, CalTag::StreamVolume),
        Err(ResolveError::InvalidVolume(_))
    ));
}

#[test]
fn volume_lookup_failure_propagates() {
    let mut stream = MockStream::new(StreamType::LowLatency, Direction::Output);
    stream.fail_volume = true;
    assert!(matches!(
        resolver().cal_kv(&stream, CalTag::StreamVolume),
        Err(ResolveError::Collaborator(_))
    ));
}

#[test]
fn module_channels_for_detection_stream() {
    let sva = MockStream::new(StreamType::VoiceUi, Direction::Input)
        .with_modifiers(&[(VUI_STREAM_CFG, VUI_STREAM_CFG_SVA)]);
    let out = resolver_with(ResolverConfig::default(), Some(3))
        .cal_kv(&sva, CalTag::ModuleChannels)
        .unwrap();
    assert_eq!(out.to_vec(), pairs(&[(CHANNELS, 3)]));
}

#[test]
fn module_channels_skips_other_streams() {
    let resolver = resolver();
    let hotword = MockStream::new(StreamType::VoiceUi, Direction::Input)
        .with_modifiers(&[(VUI_STREAM_CFG, VUI_STREAM_CFG_HOTWORD)]);
    assert!(resolver
        .cal_kv(&hotword, CalTag::ModuleChannels)
        .unwrap()
        .is_empty());

    let bare = MockStream::new(StreamType::VoiceUi, Direction::Input);
    assert!(resolver.cal_kv(&bare, CalTag::ModuleChannels).unwrap().is_empty());

    let music = MockStream::new(StreamType::DeepBuffer, Direction::Output);
    assert!(resolver.cal_kv(&music, CalTag::ModuleChannels).unwrap().is_empty());
}

#[test]
fn module_channels_requires_capture_profile() {
    let sva = MockStream::new(StreamType::VoiceUi, Direction::Input)
        .with_modifiers(&[(VUI_STREAM_CFG, VUI_STREAM_CFG_SVA)]);
    for channels in [None, Some(0)] {
        assert!(matches!(
            resolver_with(ResolverConfig::default(), channels)
                .cal_kv(&sva, CalTag::ModuleChannels),
            Err(ResolveError::InvalidCaptureProfile(_))
        ));
    }
}

#[test]
fn speaker_protection_first_speaker_decides() {
    let resolver = resolver();
    let stereo = MockStream::new(StreamType::LowLatency, Direction::Output).with_devices(&[
        DeviceAttributes::new(DeviceId::OutHandset, 1),
        DeviceAttributes::new(DeviceId::OutSpeaker, 2),
        DeviceAttributes::new(DeviceId::OutSpeaker, 1),
    ]);
    assert_eq!(
        resolver
            .cal_kv(&stereo, CalTag::SpeakerProtectionEnabled)
            .unwrap()
            .to_vec(),
        pairs(&[(SPK_PRO_CH_MAP, LEFT_RIGHT)])
    );

    let mono = MockStream::new(StreamType::LowLatency, Direction::Output)
        .with_devices(&[DeviceAttributes::new(DeviceId::OutSpeaker, 1)]);
    assert_eq!(
        resolver
            .cal_kv(&mono, CalTag::SpeakerProtectionEnabled)
            .unwrap()
            .to_vec(),
        pairs(&[(SPK_PRO_CH_MAP, RIGHT_MONO)])
    );

    let headset = MockStream::new(StreamType::LowLatency, Direction::Output)
        .with_devices(&[DeviceAttributes::new(DeviceId::OutWiredHeadset, 2)]);
    assert!(resolver
        .cal_kv(&headset, CalTag::SpeakerProtectionEnabled)
        .unwrap()
        .is_empty());
}

#[test]
fn speaker_protection_disabled_and_unknown_tags() {
    let resolver = resolver();
    let stream = MockStream::new(StreamType::LowLatency, Direction::Output);
    assert_eq!(
        resolver
            .cal_kv(&stream, CalTag::SpeakerProtectionDisabled)
            .unwrap()
            .to_vec(),
        pairs(&[(SPK_PRO_CH_MAP, SP_DISABLED)])
    );
    assert!(resolver
        .cal_kv(&stream, CalTag::from(0x1234))
        .unwrap()
        .is_empty());
}

#[test]
fn input_sample_rate_tag_targets_stream_mfc() {
    let record = MockStream::new(StreamType::DeepBuffer, Direction::Input);
    let out = resolver().tag_kv(&record, Tag::MfcSr48k).unwrap();
    assert_eq!(out.kv.to_vec(), pairs(&[(SAMPLINGRATE, SAMPLINGRATE_48K)]));
    assert_eq!(out.graph_tag, Some(GraphTag::StreamMfc));
}

#[test]
fn tag_table() {
    let cases: &[(Tag, (u32, u32), GraphTag)] = &[
        (Tag::Mute, (MUTE, ON), GraphTag::Mute),
        (Tag::Unmute, (MUTE, OFF), GraphTag::Mute),
        (Tag::Pause, (PAUSE, ON), GraphTag::Pause),
        (Tag::Resume, (PAUSE, OFF), GraphTag::Pause),
        (Tag::SlowTalkOn, (SLOW_TALK, SLOW_TALK_ON), GraphTag::StreamSlowTalk),
        (Tag::SlowTalkOff, (SLOW_TALK, SLOW_TALK_OFF), GraphTag::StreamSlowTalk),
        (Tag::MfcSr22k, (SAMPLINGRATE, SAMPLINGRATE_22K), GraphTag::DeviceMfc),
        (Tag::MfcSr384k, (SAMPLINGRATE, SAMPLINGRATE_384K), GraphTag::DeviceMfc),
        (Tag::Channels4, (CHANNELS, CHANNELS_4), GraphTag::DeviceMfc),
        (Tag::BitWidth32, (BITWIDTH, BITWIDTH_32), GraphTag::DeviceMfc),
        (Tag::FluenceEc, (FLUENCE, FLUENCE_EC), GraphTag::Fluence),
        (Tag::FluenceNs, (FLUENCE, FLUENCE_NS), GraphTag::Fluence),
        (
            Tag::IncallRecordDownlink,
            (MUX_DEMUX_CONFIG, MUX_DEMUX_CONFIG_DOWNLINK),
            GraphTag::StreamMuxDemux,
        ),
        (
            Tag::IncallRecordUplinkDownlinkStereo,
            (MUX_DEMUX_CONFIG, MUX_DEMUX_CONFIG_UPLINK_DOWNLINK_STEREO),
            GraphTag::StreamMuxDemux,
        ),
    ];
    let resolver = resolver();
    let playback = MockStream::new(StreamType::LowLatency, Direction::Output);
    for (tag, pair, target) in cases {
        let out = resolver.tag_kv(&playback, *tag).unwrap();
        assert_eq!(out.kv.to_vec(), pairs(&[*pair]), "{tag:?}");
        assert_eq!(out.graph_tag, Some(*target), "{tag:?}");
    }
}

#[test]
fn op_mode_follows_configured_policy() {
    let stream = MockStream::new(StreamType::VoiceCallRecord, Direction::Input);

    let out = resolver().tag_kv(&stream, Tag::OpMode).unwrap();
    assert_eq!(out.kv.to_vec(), pairs(&[(MODULE_OP_MODE, NORMAL)]));
    assert_eq!(out.graph_tag, Some(GraphTag::ModuleOpMode));

    let config = ResolverConfig {
        op_mode: OpModePolicy::FallThroughUplink,
        ..Default::default()
    };
    let out = resolver_with(config, None)
        .tag_kv(&stream, Tag::OpMode)
        .unwrap();
    assert_eq!(
        out.kv.to_vec(),
        pairs(&[
            (MODULE_OP_MODE, NORMAL),
            (MUX_DEMUX_CONFIG, MUX_DEMUX_CONFIG_UPLINK)
        ])
    );
    assert_eq!(out.graph_tag, Some(GraphTag::StreamMuxDemux));
}

#[test]
fn unrecognized_tag_resolves_to_nothing() {
    let stream = MockStream::new(StreamType::LowLatency, Direction::Output);
    let out = resolver().tag_kv(&stream, Tag::from(500)).unwrap();
    assert!(out.kv.is_empty());
    assert_eq!(out.graph_tag, None);
}
