//! Every encoder kind, driven with arbitrary inputs, yields a well-framed
//! block.

use payload_codec::*;
use proptest::prelude::*;

fn assert_framed(block: &ParamBlock, miid: u32) {
    let header = block.header().unwrap();
    assert_eq!(header.module_instance_id, miid);
    assert_eq!(header.error_code, 0);
    assert_eq!(block.len() % BLOCK_ALIGNMENT, 0);
    assert_eq!(
        HEADER_SIZE + header.param_size as usize + block.padding(),
        block.len()
    );
    assert_eq!(block.padding(), padding_for(header.param_size as usize));
}

fn every_kind(miid: u32, channels: u16, bytes: &[u8]) -> Vec<ParamBlock> {
    let media = MediaConfig {
        sample_rate: 48_000,
        bit_width: 24,
        channels,
        channel_map: None,
    };
    let models = bytes.len().clamp(1, 8) as u8;
    let levels = vec![50u8; 8];
    vec![
        encode_mfc_output_format(
            miid,
            &MfcOutputFormat {
                sample_rate: 44_100,
                bit_width: 24,
                channels,
                ..Default::default()
            },
        )
        .unwrap(),
        encode_rat_media_format(miid, &media).unwrap(),
        encode_pcm_output_format(miid, &media).unwrap(),
        encode_cop_output_format(miid, &media).unwrap(),
        encode_usb_audio_config(miid, &UsbAudioConfig::default()).unwrap(),
        encode_dp_audio_config(miid, &DpAudioConfig::default()).unwrap(),
        encode_mono_switch(miid, 0, EncoderChannelMode::Mono).unwrap(),
        encode_session_time_query(miid).unwrap(),
        encode_custom(miid, 0x1000, bytes).unwrap(),
        encode_query(miid, 0x1001, bytes.len()).unwrap(),
        encode_speaker_r0t0(miid, &[SpeakerR0T0::default()]).unwrap(),
        encode_wakeup_config(
            miid,
            &WakeUpConfig {
                num_active_models: models,
                confidence_levels: &levels,
                keyword_user_enables: &levels,
                ..Default::default()
            },
        )
        .unwrap(),
        encode_wakeup_buffer_config(miid, &WakeUpBufferConfig::default()).unwrap(),
        encode_setup_duration(miid, &[PortSetupDuration::default()]).unwrap(),
        encode_event_config(miid, 1).unwrap(),
        encode_detection_reset(miid).unwrap(),
        encode_doa_query(miid).unwrap(),
    ]
}

proptest! {
    #[test]
    fn all_kinds_are_framed(
        miid in any::<u32>(),
        channels in 1u16..=8,
        bytes in proptest::collection::vec(any::<u8>(), 0..64),
    ) {
        let blocks = every_kind(miid, channels, &bytes);
        prop_assert_eq!(blocks.len(), 17);
        for block in &blocks {
            assert_framed(block, miid);
        }
    }
}
