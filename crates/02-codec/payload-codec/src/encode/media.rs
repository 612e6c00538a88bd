use log::{debug, warn};
use payload_abi::param::{
    DATA_FORMAT_FIXED_POINT, MEDIA_FMT_ID_PCM, PARAM_ID_COP_PACKETIZER_OUTPUT_MEDIA_FORMAT,
    PARAM_ID_MFC_OUTPUT_MEDIA_FORMAT, PARAM_ID_PCM_OUTPUT_FORMAT_CFG, PARAM_ID_RAT_MEDIA_FORMAT,
    PCM_INTERLEAVED, PCM_LITTLE_ENDIAN, PCM_LSB_ALIGNED, PCM_MSB_ALIGNED,
};

use crate::block::{BlockWriter, ParamBlock};
use crate::channel_map::{resolve_channel_map, ChannelMap, SpeakerRotation};
use crate::error::{CodecError, CodecResult};
use crate::format::fixed_point_format;
use crate::layout::BlockLayout;

const MFC_FIXED_LEN: usize = 8;
const RAT_FIXED_LEN: usize = 16;
const COP_FIXED_LEN: usize = 8;
const MEDIA_FMT_HEADER_LEN: usize = 12;
/// Eight i16 PCM format fields following the media-format header.
pub const PCM_FORMAT_FIELDS_LEN: usize = 16;

/// Output format of a media format converter module.
#[derive(Clone, Copy, Debug, Default)]
pub struct MfcOutputFormat<'a> {
    pub sample_rate: i32,
    pub bit_width: i16,
    pub channels: u16,
    pub channel_map: Option<&'a [u16]>,
    pub rotation: SpeakerRotation,
}

/// Media configuration shared by the RAT, PCM converter and COP packetizer
/// encoders.
#[derive(Clone, Copy, Debug, Default)]
pub struct MediaConfig<'a> {
    pub sample_rate: u32,
    pub bit_width: u32,
    pub channels: u16,
    pub channel_map: Option<&'a [u16]>,
}

fn media_roles(
    channels: u16,
    explicit: Option<&[u16]>,
    rotation: SpeakerRotation,
) -> CodecResult<ChannelMap> {
    if channels == 0 {
        warn!("media format with zero channels");
        return Err(CodecError::invalid("channel count must be at least 1"));
    }
    resolve_channel_map(usize::from(channels), explicit, rotation)
}

pub fn encode_mfc_output_format(miid: u32, cfg: &MfcOutputFormat<'_>) -> CodecResult<ParamBlock> {
    let roles = media_roles(cfg.channels, cfg.channel_map, cfg.rotation)?;
    let num_channels = i16::try_from(cfg.channels)
        .map_err(|_| CodecError::invalid(format!("{} channels overflow i16", cfg.channels)))?;
    debug!(
        "mfc output format rate={} bit_width={} channels={}",
        cfg.sample_rate, cfg.bit_width, cfg.channels
    );

    let mut layout = BlockLayout::new();
    let fixed = layout.push_field(MFC_FIXED_LEN)?;
    let map = layout.push_array(roles.len(), 2)?;

    let mut writer = BlockWriter::new(layout, miid, PARAM_ID_MFC_OUTPUT_MEDIA_FORMAT)?;
    let mut out = writer.cursor(fixed)?;
    out.put_i32(cfg.sample_rate)?;
    out.put_i16(cfg.bit_width)?;
    out.put_i16(num_channels)?;
    let mut out = writer.cursor(map)?;
    for role in &roles {
        out.put_u16(*role)?;
    }
    Ok(writer.finish())
}

pub fn encode_rat_media_format(miid: u32, cfg: &MediaConfig<'_>) -> CodecResult<ParamBlock> {
    let roles = media_roles(cfg.channels, cfg.channel_map, SpeakerRotation::LeftRight)?;
    let fmt = fixed_point_format(cfg.bit_width)?;
    debug!(
        "rat media format rate={} bits_per_sample={} q={} channels={}",
        cfg.sample_rate, fmt.bits_per_sample, fmt.q_factor, cfg.channels
    );

    let mut layout = BlockLayout::new();
    let fixed = layout.push_field(RAT_FIXED_LEN)?;
    let map = layout.push_array(roles.len(), 2)?;

    let mut writer = BlockWriter::new(layout, miid, PARAM_ID_RAT_MEDIA_FORMAT)?;
    let mut out = writer.cursor(fixed)?;
    out.put_u32(cfg.sample_rate)?;
    out.put_u16(fmt.bits_per_sample)?;
    out.put_u16(fmt.q_factor)?;
    out.put_u32(DATA_FORMAT_FIXED_POINT)?;
    out.put_u32(u32::from(cfg.channels))?;
    let mut out = writer.cursor(map)?;
    for role in &roles {
        out.put_u16(*role)?;
    }
    Ok(writer.finish())
}

/// PCM converter output format.
///
/// Widths go through [`fixed_point_format`]. 24-bit input lands MSB-aligned
/// in its 32-bit container; other widths are LSB-aligned. Role codes are
/// written as single bytes.
pub fn encode_pcm_output_format(miid: u32, cfg: &MediaConfig<'_>) -> CodecResult<ParamBlock> {
    let roles = media_roles(cfg.channels, cfg.channel_map, SpeakerRotation::LeftRight)?;
    let fmt = fixed_point_format(cfg.bit_width)?;
    let alignment = if cfg.bit_width == 24 {
        PCM_MSB_ALIGNED
    } else {
        PCM_LSB_ALIGNED
    };
    let num_channels = i16::try_from(cfg.channels)
        .map_err(|_| CodecError::invalid(format!("{} channels overflow i16", cfg.channels)))?;
    let narrow_roles = roles
        .iter()
        .map(|role| {
            u8::try_from(*role)
                .map_err(|_| CodecError::invalid(format!("role code {role} overflows u8")))
        })
        .collect::<CodecResult<Vec<u8>>>()?;
    let fmt_payload_size = u32::try_from(PCM_FORMAT_FIELDS_LEN + narrow_roles.len())
        .map_err(|_| CodecError::TooLarge(narrow_roles.len()))?;
    debug!(
        "pcm output format bit_width={} bits_per_sample={} q={} alignment={} channels={}",
        fmt.bit_width, fmt.bits_per_sample, fmt.q_factor, alignment, cfg.channels
    );

    let mut layout = BlockLayout::new();
    let media_hdr = layout.push_field(MEDIA_FMT_HEADER_LEN)?;
    let fields = layout.push_field(PCM_FORMAT_FIELDS_LEN)?;
    let map = layout.push_array(narrow_roles.len(), 1)?;

    let mut writer = BlockWriter::new(layout, miid, PARAM_ID_PCM_OUTPUT_FORMAT_CFG)?;
    let mut out = writer.cursor(media_hdr)?;
    out.put_u32(DATA_FORMAT_FIXED_POINT)?;
    out.put_u32(MEDIA_FMT_ID_PCM)?;
    out.put_u32(fmt_payload_size)?;
    let mut out = writer.cursor(fields)?;
    out.put_i16(fmt.bit_width as i16)?;
    out.put_i16(alignment)?;
    out.put_i16(fmt.bits_per_sample as i16)?;
    out.put_i16(fmt.q_factor as i16)?;
    out.put_i16(PCM_LITTLE_ENDIAN)?;
    out.put_i16(PCM_INTERLEAVED)?;
    out.put_i16(0)?;
    out.put_i16(num_channels)?;
    writer.cursor(map)?.put(&narrow_roles)?;
    Ok(writer.finish())
}

/// COP packetizer output format. The bit width is carried unconverted.
pub fn encode_cop_output_format(miid: u32, cfg: &MediaConfig<'_>) -> CodecResult<ParamBlock> {
    let roles = media_roles(cfg.channels, cfg.channel_map, SpeakerRotation::LeftRight)?;
    let bits_per_sample = u16::try_from(cfg.bit_width)
        .map_err(|_| CodecError::UnsupportedBitWidth(cfg.bit_width))?;
    debug!(
        "cop output format rate={} bits_per_sample={} channels={}",
        cfg.sample_rate, bits_per_sample, cfg.channels
    );

    let mut layout = BlockLayout::new();
    let fixed = layout.push_field(COP_FIXED_LEN)?;
    let map = layout.push_array(roles.len(), 2)?;

    let mut writer = BlockWriter::new(layout, miid, PARAM_ID_COP_PACKETIZER_OUTPUT_MEDIA_FORMAT)?;
    let mut out = writer.cursor(fixed)?;
    out.put_u32(cfg.sample_rate)?;
    out.put_u16(bits_per_sample)?;
    out.put_u16(cfg.channels)?;
    let mut out = writer.cursor(map)?;
    for role in &roles {
        out.put_u16(*role)?;
    }
    Ok(writer.finish())
}
