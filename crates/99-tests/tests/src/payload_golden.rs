//! Byte-exact expectations for representative blocks.

use payload_codec::{
    encode_custom, encode_detection_reset, encode_mfc_output_format, encode_usb_audio_config,
    MfcOutputFormat, SpeakerRotation, UsbAudioConfig,
};

#[rustfmt::skip]
const MFC_STEREO_48K: [u8; 32] = [
    // header: miid, param id, param size, error code
    0x01, 0x40, 0x00, 0x00,
    0x24, 0x10, 0x00, 0x08,
    0x0C, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
    // rate 48000, bit width 16, 2 channels
    0x80, 0xBB, 0x00, 0x00,
    0x10, 0x00, 0x02, 0x00,
    // L, R
    0x01, 0x00, 0x02, 0x00,
    // padding
    0x00, 0x00, 0x00, 0x00,
];

#[test]
fn mfc_stereo_48k_matches_golden() {
    let block = encode_mfc_output_format(
        0x4001,
        &MfcOutputFormat {
            sample_rate: 48_000,
            bit_width: 16,
            channels: 2,
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(block.as_bytes(), &MFC_STEREO_48K);
}

#[test]
fn rotated_speaker_swaps_role_words() {
    let block = encode_mfc_output_format(
        0x4001,
        &MfcOutputFormat {
            sample_rate: 48_000,
            bit_width: 16,
            channels: 2,
            rotation: SpeakerRotation::RightLeft,
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(&block.as_bytes()[24..28], &[0x02, 0x00, 0x01, 0x00]);
    assert_eq!(&block.as_bytes()[..24], &MFC_STEREO_48K[..24]);
}

#[test]
fn usb_config_is_already_aligned() {
    let block = encode_usb_audio_config(
        0x7001,
        &UsbAudioConfig {
            usb_token: 0x0003_0001,
            svc_interval: 1000,
        },
    )
    .unwrap();
    #[rustfmt::skip]
    let expected = [
        0x01, 0x70, 0x00, 0x00,
        0xD6, 0x10, 0x00, 0x08,
        0x08, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00,
        0x01, 0x00, 0x03, 0x00,
        0xE8, 0x03, 0x00, 0x00,
    ];
    assert_eq!(block.as_bytes(), &expected);
    assert_eq!(block.padding(), 0);
}

#[test]
fn custom_block_pads_after_payload() {
    let block = encode_custom(0x10, 0xC0DE, &[0xAA, 0xBB, 0xCC]).unwrap();
    assert_eq!(block.len(), 24);
    assert_eq!(&block.as_bytes()[8..12], &3u32.to_le_bytes());
    assert_eq!(&block.as_bytes()[16..], &[0xAA, 0xBB, 0xCC, 0, 0, 0, 0, 0]);
}

#[test]
fn reset_is_header_only() {
    let block = encode_detection_reset(0x6001).unwrap();
    assert_eq!(block.len(), 16);
    assert_eq!(&block.as_bytes()[8..12], &[0, 0, 0, 0]);
}
