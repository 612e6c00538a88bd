//! Graph-open flows: resolve the keys for a stream, then build the
//! configuration blocks sent to the opened graph.

use std::sync::Arc;

use graph_keys::{
    BackendDevices, CaptureProfiles, ResolveResult, Resolver, ResolverConfig, SidetoneMode,
    StreamSource, VsidInfo,
};
use payload_abi::key::*;
use payload_abi::value::*;
use payload_abi::{
    CalTag, DeviceAttributes, DeviceId, Direction, KeyVector, KvPair, StreamAttributes,
    StreamType, Tag,
};
use payload_codec::{
    encode_mfc_output_format, encode_sound_model, encode_speaker_r0t0, encode_wakeup_config,
    MfcOutputFormat, SpeakerR0T0, WakeUpConfig,
};

struct Session {
    attrs: StreamAttributes,
    devices: Vec<DeviceAttributes>,
    modifiers: KeyVector,
    volume: f32,
}

impl Session {
    fn new(stream_type: StreamType, direction: Direction, devices: &[DeviceAttributes]) -> Self {
        Self {
            attrs: StreamAttributes::new(stream_type, direction),
            devices: devices.to_vec(),
            modifiers: KeyVector::new(),
            volume: 1.0,
        }
    }
}

impl StreamSource for Session {
    fn attributes(&self) -> ResolveResult<StreamAttributes> {
        Ok(self.attrs)
    }

    fn associated_devices(&self) -> ResolveResult<Vec<DeviceAttributes>> {
        Ok(self.devices.clone())
    }

    fn stream_modifiers(&self) -> KeyVector {
        self.modifiers.clone()
    }

    fn device_pp_modifiers(&self) -> KeyVector {
        KeyVector::new()
    }

    fn instance_id(&self) -> u32 {
        1
    }

    fn volume(&self) -> ResolveResult<f32> {
        Ok(self.volume)
    }
}

struct DetectionProfile(u32);

impl CaptureProfiles for DetectionProfile {
    fn detection_channels(&self) -> Option<u32> {
        Some(self.0)
    }
}

fn resolver(detection_channels: u32) -> Resolver {
    let _ = env_logger::builder().is_test(true).try_init();
    Resolver::new(
        ResolverConfig::default(),
        Arc::new(DetectionProfile(detection_channels)),
    )
}

#[test]
fn speaker_playback_open() {
    let resolver = resolver(1);
    let speaker = DeviceAttributes::new(DeviceId::OutSpeaker, 2);
    let mut session = Session::new(StreamType::LowLatency, Direction::Output, &[speaker]);
    session.volume = 0.5;

    let mut graph_kv = resolver.stream_kv(&session).unwrap();
    graph_kv.extend(resolver.device_kv(speaker.id));
    assert_eq!(
        graph_kv.as_slice(),
        &[
            KvPair::new(STREAMRX, PCM_LL_PLAYBACK),
            KvPair::new(INSTANCE, INSTANCE_1),
            KvPair::new(DEVICERX, SPEAKER),
        ]
    );

    assert_eq!(
        resolver.stream_ckv().as_slice(),
        &[KvPair::new(VOLUME, LEVEL_15)]
    );
    assert_eq!(
        resolver
            .cal_kv(&session, CalTag::StreamVolume)
            .unwrap()
            .as_slice(),
        &[KvPair::new(VOLUME, LEVEL_3)]
    );
    assert_eq!(
        resolver
            .cal_kv(&session, CalTag::SpeakerProtectionEnabled)
            .unwrap()
            .as_slice(),
        &[KvPair::new(SPK_PRO_CH_MAP, LEFT_RIGHT)]
    );

    let mfc = encode_mfc_output_format(
        0x4001,
        &MfcOutputFormat {
            sample_rate: 48_000,
            bit_width: 16,
            channels: speaker.channels as u16,
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(mfc.header().unwrap().param_size, 12);

    let r0t0 = encode_speaker_r0t0(
        0x4002,
        &[
            SpeakerR0T0 {
                r0_cali_q24: 0x0080_0000,
                t0_cali_q6: 25 << 6,
            },
            SpeakerR0T0 {
                r0_cali_q24: 0x0081_0000,
                t0_cali_q6: 25 << 6,
            },
        ],
    )
    .unwrap();
    assert_eq!(&r0t0.payload()[..4], &2u32.to_le_bytes());
}

#[test]
fn voice_call_open_with_sidetone_and_record_tag() {
    let resolver = resolver(1);
    let mut call = Session::new(
        StreamType::VoiceCall,
        Direction::Both,
        &[
            DeviceAttributes::new(DeviceId::OutHandset, 1),
            DeviceAttributes::new(DeviceId::InHandsetMic, 1),
        ],
    );
    call.attrs = call.attrs.with_vsid(VOICEMMODE1);
    let targets = BackendDevices::new(Some(DeviceId::OutHandset), Some(DeviceId::InHandsetMic));
    let vsid = VsidInfo {
        modes: vec![KvPair::new(VOICEMMODE1, 2)],
        ..Default::default()
    };

    let keys = resolver
        .stream_device_kv(&call, targets, &vsid, SidetoneMode::Software)
        .unwrap();
    assert_eq!(
        keys.rx.as_slice(),
        &[
            KvPair::new(STREAMRX, VOICE_CALL_RX),
            KvPair::new(VSID, 2),
            KvPair::new(DEVICERX, HANDSET),
        ]
    );
    assert_eq!(
        keys.tx.as_slice(),
        &[
            KvPair::new(STREAMTX, VOICE_CALL_TX),
            KvPair::new(VSID, 2),
            KvPair::new(DEVICETX, HANDSETMIC),
            KvPair::new(SW_SIDETONE, SW_SIDETONE_ON),
        ]
    );

    let pp = resolver.device_pp_kv(&call, targets, &[]).unwrap();
    assert_eq!(
        pp.rx.as_slice(),
        &[
            KvPair::new(DEVICEPP_RX, DEVICEPP_RX_VOICE_DEFAULT),
            KvPair::new(DEVICERX, HANDSET),
        ]
    );

    let record = Session::new(StreamType::VoiceCallRecord, Direction::Input, &[]);
    let tag = resolver
        .tag_kv(&record, Tag::IncallRecordUplinkDownlinkMono)
        .unwrap();
    assert_eq!(
        tag.kv.as_slice(),
        &[KvPair::new(
            MUX_DEMUX_CONFIG,
            MUX_DEMUX_CONFIG_UPLINK_DOWNLINK_MONO
        )]
    );
}

#[test]
fn detection_open_loads_model_and_keyword_config() {
    let resolver = resolver(3);
    let mut vui = Session::new(
        StreamType::VoiceUi,
        Direction::Input,
        &[DeviceAttributes::new(DeviceId::InHandsetVaMic, 3)],
    );
    vui.modifiers.push(KvPair::new(VUI_STREAM_CFG, VUI_STREAM_CFG_SVA));

    let graph_kv = resolver.stream_kv(&vui).unwrap();
    assert_eq!(graph_kv[0], KvPair::new(STREAMTX, VOICE_UI));
    assert_eq!(graph_kv.last(), Some(&KvPair::new(INSTANCE, 1)));
    assert_eq!(
        resolver
            .cal_kv(&vui, CalTag::ModuleChannels)
            .unwrap()
            .as_slice(),
        &[KvPair::new(CHANNELS, 3)]
    );
    assert_eq!(
        resolver.device_pp_ckv(&vui).unwrap().as_slice(),
        &[KvPair::new(CHANNELS, 3)]
    );

    let model: Vec<u8> = (0..64u8).collect();
    let block = encode_sound_model(0x6001, &model, 8, 21).unwrap();
    assert_eq!(block.payload(), &model[8..29]);
    assert_eq!(block.padding(), 3);

    let wakeup = encode_wakeup_config(
        0x6001,
        &WakeUpConfig {
            mode: 1,
            num_active_models: 2,
            confidence_levels: &[60, 70],
            keyword_user_enables: &[1, 0],
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(wakeup.payload().len(), 6 + 2 + 2);
    assert_eq!(&wakeup.payload()[6..], &[60, 70, 1, 0]);
}
