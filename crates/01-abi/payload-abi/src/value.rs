//! Values paired with the keys in [`crate::key`].

// STREAMRX
pub const PCM_DEEP_BUFFER: u32 = 0xA100_0001;
pub const PCM_RX_LOOPBACK: u32 = 0xA100_0003;
pub const VOIP_RX_PLAYBACK: u32 = 0xA100_0005;
pub const COMPRESSED_OFFLOAD_PLAYBACK: u32 = 0xA100_000A;
pub const HFP_RX_PLAYBACK: u32 = 0xA100_000C;
pub const PCM_LL_PLAYBACK: u32 = 0xA100_000E;
pub const PCM_OFFLOAD_PLAYBACK: u32 = 0xA100_000F;
pub const VOICE_CALL_RX: u32 = 0xA100_0010;
pub const PCM_ULL_PLAYBACK: u32 = 0xA100_0011;
pub const PCM_PROXY_PLAYBACK: u32 = 0xA100_0012;
pub const INCALL_MUSIC: u32 = 0xA100_0013;

// STREAMTX
pub const PCM_RECORD: u32 = 0xB100_0001;
pub const VOICE_UI: u32 = 0xB100_0003;
pub const VOIP_TX_RECORD: u32 = 0xB100_0004;
pub const HFP_RX_CAPTURE: u32 = 0xB100_0005;
pub const VOICE_CALL_TX: u32 = 0xB100_0007;
pub const RAW_RECORD: u32 = 0xB100_0009;
pub const PCM_ULL_RECORD: u32 = 0xB100_000A;
pub const PCM_PROXY_RECORD: u32 = 0xB100_000B;
pub const INCALL_RECORD: u32 = 0xB100_000C;

// DEVICERX
pub const SPEAKER: u32 = 0xA200_0001;
pub const HEADPHONES: u32 = 0xA200_0002;
pub const BT_RX: u32 = 0xA200_0003;
pub const HANDSET: u32 = 0xA200_0004;
pub const USB_RX: u32 = 0xA200_0005;
pub const HDMI_RX: u32 = 0xA200_0006;
pub const PROXY_RX: u32 = 0xA200_0007;

// DEVICETX
pub const SPEAKER_MIC: u32 = 0xA300_0001;
pub const BT_TX: u32 = 0xA300_0002;
pub const HEADPHONE_MIC: u32 = 0xA300_0003;
pub const HANDSETMIC: u32 = 0xA300_0004;
pub const USB_TX: u32 = 0xA300_0005;
pub const HANDSETMIC_VA: u32 = 0xA300_0006;
pub const HEADSETMIC_VA: u32 = 0xA300_0007;
pub const PROXY_TX: u32 = 0xA300_0008;

// BT_PROFILE
pub const A2DP: u32 = 0xB400_0001;
pub const SCO: u32 = 0xB400_0002;

// DEVICEPP_RX
pub const DEVICEPP_RX_DEFAULT: u32 = 0xAC00_0001;
pub const DEVICEPP_RX_AUDIO_MBDRC: u32 = 0xAC00_0002;
pub const DEVICEPP_RX_VOIP_MBDRC: u32 = 0xAC00_0003;
pub const DEVICEPP_RX_HFPSINK: u32 = 0xAC00_0004;
pub const DEVICEPP_RX_VOICE_DEFAULT: u32 = 0xAC00_0005;

// DEVICEPP_TX
pub const DEVICEPP_TX_HFP_SINK_FLUENCE_SMECNS: u32 = 0xAD00_000A;

// STREAMPP_RX
pub const STREAMPP_RX_DEFAULT: u32 = 0xAF00_0001;

// INSTANCE
pub const INSTANCE_1: u32 = 1;
pub const INSTANCE_2: u32 = 2;

// VOLUME levels; LEVEL_0 is the loudest.
pub const LEVEL_0: u32 = 0;
pub const LEVEL_1: u32 = 1;
pub const LEVEL_2: u32 = 2;
pub const LEVEL_3: u32 = 3;
pub const LEVEL_4: u32 = 4;
pub const LEVEL_5: u32 = 5;
pub const LEVEL_6: u32 = 6;
pub const LEVEL_7: u32 = 7;
pub const LEVEL_8: u32 = 8;
pub const LEVEL_9: u32 = 9;
pub const LEVEL_10: u32 = 10;
pub const LEVEL_11: u32 = 11;
pub const LEVEL_12: u32 = 12;
pub const LEVEL_13: u32 = 13;
pub const LEVEL_14: u32 = 14;
pub const LEVEL_15: u32 = 15;

// SAMPLINGRATE
pub const SAMPLINGRATE_8K: u32 = 8_000;
pub const SAMPLINGRATE_16K: u32 = 16_000;
pub const SAMPLINGRATE_22K: u32 = 22_050;
pub const SAMPLINGRATE_32K: u32 = 32_000;
pub const SAMPLINGRATE_44K: u32 = 44_100;
pub const SAMPLINGRATE_48K: u32 = 48_000;
pub const SAMPLINGRATE_96K: u32 = 96_000;
pub const SAMPLINGRATE_192K: u32 = 192_000;
pub const SAMPLINGRATE_384K: u32 = 384_000;

// CHANNELS
pub const CHANNELS_1: u32 = 1;
pub const CHANNELS_2: u32 = 2;
pub const CHANNELS_3: u32 = 3;
pub const CHANNELS_4: u32 = 4;

// BITWIDTH
pub const BITWIDTH_16: u32 = 16;
pub const BITWIDTH_24: u32 = 24;
pub const BITWIDTH_32: u32 = 32;

// MUTE / PAUSE / SW_SIDETONE
pub const OFF: u32 = 0;
pub const ON: u32 = 1;
pub const SW_SIDETONE_ON: u32 = 1;

// SLOW_TALK
pub const SLOW_TALK_OFF: u32 = 0;
pub const SLOW_TALK_ON: u32 = 1;

// FLUENCE
pub const FLUENCE_OFF: u32 = 0;
pub const FLUENCE_ON: u32 = 1;
pub const FLUENCE_EC: u32 = 2;
pub const FLUENCE_NS: u32 = 3;

// MUX_DEMUX_CONFIG
pub const MUX_DEMUX_CONFIG_UPLINK: u32 = 1;
pub const MUX_DEMUX_CONFIG_DOWNLINK: u32 = 2;
pub const MUX_DEMUX_CONFIG_UPLINK_DOWNLINK_MONO: u32 = 3;
pub const MUX_DEMUX_CONFIG_UPLINK_DOWNLINK_STEREO: u32 = 4;

// MODULE_OP_MODE
pub const NORMAL: u32 = 0;

// SPK_PRO_CH_MAP
pub const LEFT_RIGHT: u32 = 1;
pub const RIGHT_MONO: u32 = 2;
pub const SP_DISABLED: u32 = 3;

// VUI_STREAM_CFG
pub const VUI_STREAM_CFG_SVA: u32 = 1;
pub const VUI_STREAM_CFG_HOTWORD: u32 = 2;

// Voice session ids, the keys of the voice-mode table.
pub const VOICEMMODE1: u32 = 0x11C0_5000;
pub const VOICEMMODE2: u32 = 0x11DC_5000;
pub const VOICELBMMODE1: u32 = 0x1200_6000;
pub const VOICELBMMODE2: u32 = 0x121C_6000;
