//! Key identifiers of graph, calibration, and tag key vectors.
//!
//! These must match the keys registered with the graph manager and the
//! calibration database bit for bit. Graph keys live in the `0xA1..0xBA`
//! families, tag keys in `0xD0..`.

// Graph keys.
pub const STREAMRX: u32 = 0xA100_0000;
pub const DEVICERX: u32 = 0xA200_0000;
pub const DEVICETX: u32 = 0xA300_0000;
pub const VOLUME: u32 = 0xA400_0000;
pub const SAMPLINGRATE: u32 = 0xA500_0000;
pub const BITWIDTH: u32 = 0xA600_0000;
pub const PAUSE: u32 = 0xA700_0000;
pub const MUTE: u32 = 0xA800_0000;
pub const CHANNELS: u32 = 0xA900_0000;
pub const INSTANCE: u32 = 0xAB00_0000;
pub const DEVICEPP_RX: u32 = 0xAC00_0000;
pub const DEVICEPP_TX: u32 = 0xAD00_0000;
pub const STREAMPP_RX: u32 = 0xAF00_0000;
pub const STREAMTX: u32 = 0xB100_0000;
pub const VSID: u32 = 0xB300_0000;
pub const BT_PROFILE: u32 = 0xB400_0000;
pub const SW_SIDETONE: u32 = 0xBA00_0000;

// Calibration-only keys.
pub const SPK_PRO_CH_MAP: u32 = 0xBB00_0000;

// Tag keys.
pub const FLUENCE: u32 = 0xD000_0000;
pub const SLOW_TALK: u32 = 0xD100_0000;
pub const MUX_DEMUX_CONFIG: u32 = 0xD200_0000;
pub const MODULE_OP_MODE: u32 = 0xD300_0000;

// Stream modifier keys reported by voice-UI streams.
pub const VUI_STREAM_CFG: u32 = 0xD400_0000;
