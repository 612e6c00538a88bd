//! Parameter ids and media-format constants understood by DSP modules.

pub const PARAM_ID_MFC_OUTPUT_MEDIA_FORMAT: u32 = 0x0800_1024;
pub const PARAM_ID_USB_AUDIO_INTF_CFG: u32 = 0x0800_10D6;
pub const PARAM_ID_DISPLAY_PORT_INTF_CFG: u32 = 0x0800_1154;
pub const PARAM_ID_RAT_MEDIA_FORMAT: u32 = 0x0800_1011;
pub const PARAM_ID_PCM_OUTPUT_FORMAT_CFG: u32 = 0x0800_1008;
pub const PARAM_ID_COP_PACKETIZER_OUTPUT_MEDIA_FORMAT: u32 = 0x0800_115A;
pub const PARAM_ID_SPR_SESSION_TIME: u32 = 0x0800_1040;
pub const PARAM_ID_DETECTION_ENGINE_SOUND_MODEL: u32 = 0x0800_1049;
pub const PARAM_ID_DETECTION_ENGINE_CONFIG_VOICE_WAKEUP: u32 = 0x0800_104A;
pub const PARAM_ID_VOICE_WAKEUP_BUFFERING_CONFIG: u32 = 0x0800_104B;
pub const PARAM_ID_DETECTION_ENGINE_GENERIC_EVENT_CFG: u32 = 0x0800_104C;
pub const PARAM_ID_DETECTION_ENGINE_RESET: u32 = 0x0800_104F;
pub const PARAM_ID_AUDIO_DAM_DOWNSTREAM_SETUP_DURATION: u32 = 0x0800_1052;
pub const PARAM_ID_FFV_DOA_TRACKING_MONITOR: u32 = 0x0800_1070;
pub const PARAM_ID_APTX_CLASSIC_SWITCH_ENC_PCM_INPUT: u32 = 0x0800_1120;
pub const PARAM_ID_APTX_ADAPTIVE_ENC_SWITCH_TO_MONO: u32 = 0x0800_1121;
pub const PARAM_ID_SP_TH_VI_R0T0_CFG: u32 = 0x0800_1182;

/// Media format id of linear PCM.
pub const MEDIA_FMT_ID_PCM: u32 = 0x0900_1000;
/// Fixed-point sample data.
pub const DATA_FORMAT_FIXED_POINT: u32 = 1;

pub const PCM_LITTLE_ENDIAN: i16 = 1;
pub const PCM_LSB_ALIGNED: i16 = 1;
pub const PCM_MSB_ALIGNED: i16 = 2;
pub const PCM_INTERLEAVED: i16 = 1;

/// Maximum keyword/user models a detection engine accepts at once.
pub const MAX_SOUND_TRIGGER_USERS: usize = 8;

/// Codec format selecting the aptX classic dual-mono switch payload.
pub const CODEC_TYPE_APTX_DUAL_MONO: u32 = 0x2600_0000;
