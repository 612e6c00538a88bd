use log::debug;
use payload_abi::param::{
    CODEC_TYPE_APTX_DUAL_MONO, PARAM_ID_APTX_ADAPTIVE_ENC_SWITCH_TO_MONO,
    PARAM_ID_APTX_CLASSIC_SWITCH_ENC_PCM_INPUT, PARAM_ID_DISPLAY_PORT_INTF_CFG,
    PARAM_ID_USB_AUDIO_INTF_CFG,
};

use crate::block::{BlockWriter, ParamBlock};
use crate::error::CodecResult;
use crate::layout::BlockLayout;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UsbAudioConfig {
    pub usb_token: u32,
    pub svc_interval: u32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DpAudioConfig {
    pub channel_allocation: u32,
    pub mst_idx: u32,
    pub dptx_idx: u32,
}

/// Channel mode requested from a Bluetooth encoder.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum EncoderChannelMode {
    Mono = 1,
    Stereo = 2,
}

pub fn encode_usb_audio_config(miid: u32, cfg: &UsbAudioConfig) -> CodecResult<ParamBlock> {
    debug!(
        "usb audio config token={:#x} svc_interval={}",
        cfg.usb_token, cfg.svc_interval
    );
    let mut layout = BlockLayout::new();
    let fixed = layout.push_field(8)?;
    let mut writer = BlockWriter::new(layout, miid, PARAM_ID_USB_AUDIO_INTF_CFG)?;
    let mut out = writer.cursor(fixed)?;
    out.put_u32(cfg.usb_token)?;
    out.put_u32(cfg.svc_interval)?;
    Ok(writer.finish())
}

pub fn encode_dp_audio_config(miid: u32, cfg: &DpAudioConfig) -> CodecResult<ParamBlock> {
    debug!(
        "display port config channel_allocation={:#x} mst={} dptx={}",
        cfg.channel_allocation, cfg.mst_idx, cfg.dptx_idx
    );
    let mut layout = BlockLayout::new();
    let fixed = layout.push_field(12)?;
    let mut writer = BlockWriter::new(layout, miid, PARAM_ID_DISPLAY_PORT_INTF_CFG)?;
    let mut out = writer.cursor(fixed)?;
    out.put_u32(cfg.channel_allocation)?;
    out.put_u32(cfg.mst_idx)?;
    out.put_u32(cfg.dptx_idx)?;
    Ok(writer.finish())
}

/// Mono/stereo switch for an aptX encoder. Dual-mono codecs take the
/// classic parameter id, everything else the adaptive one.
pub fn encode_mono_switch(
    miid: u32,
    codec_format: u32,
    mode: EncoderChannelMode,
) -> CodecResult<ParamBlock> {
    let param_id = if codec_format == CODEC_TYPE_APTX_DUAL_MONO {
        PARAM_ID_APTX_CLASSIC_SWITCH_ENC_PCM_INPUT
    } else {
        PARAM_ID_APTX_ADAPTIVE_ENC_SWITCH_TO_MONO
    };
    debug!("encoder channel switch codec={codec_format:#x} mode={mode:?}");
    let mut layout = BlockLayout::new();
    let fixed = layout.push_field(4)?;
    let mut writer = BlockWriter::new(layout, miid, param_id)?;
    writer.cursor(fixed)?.put_u32(mode as u32)?;
    Ok(writer.finish())
}
