//! Voice-activation detection engine parameters.

use log::{debug, trace, warn};
use payload_abi::param::{
    MAX_SOUND_TRIGGER_USERS, PARAM_ID_AUDIO_DAM_DOWNSTREAM_SETUP_DURATION,
    PARAM_ID_DETECTION_ENGINE_CONFIG_VOICE_WAKEUP, PARAM_ID_DETECTION_ENGINE_GENERIC_EVENT_CFG,
    PARAM_ID_DETECTION_ENGINE_RESET, PARAM_ID_DETECTION_ENGINE_SOUND_MODEL,
    PARAM_ID_FFV_DOA_TRACKING_MONITOR, PARAM_ID_VOICE_WAKEUP_BUFFERING_CONFIG,
};

use crate::block::{BlockWriter, ParamBlock};
use crate::error::{CodecError, CodecResult};
use crate::layout::BlockLayout;

/// Target and interferer angles (2 x i16 each) plus 360 per-degree activity
/// bytes.
pub const DOA_TRACKING_MONITOR_LEN: usize = 368;

const WAKEUP_FIXED_LEN: usize = 6;

/// Keyword detection settings for up to [`MAX_SOUND_TRIGGER_USERS`] models.
#[derive(Clone, Copy, Debug, Default)]
pub struct WakeUpConfig<'a> {
    pub mode: u16,
    pub custom_payload_size: u16,
    pub num_active_models: u8,
    pub confidence_levels: &'a [u8],
    pub keyword_user_enables: &'a [u8],
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WakeUpBufferConfig {
    pub hist_buffer_duration_ms: u32,
    pub pre_roll_duration_ms: u32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PortSetupDuration {
    pub output_port_id: u32,
    pub duration_ms: i32,
}

/// Copies `size` bytes of a sound model starting at `offset` in `data`.
pub fn encode_sound_model(
    miid: u32,
    data: &[u8],
    offset: usize,
    size: usize,
) -> CodecResult<ParamBlock> {
    if size == 0 {
        warn!("empty sound model");
        return Err(CodecError::invalid("sound model size must be at least 1"));
    }
    let model = offset
        .checked_add(size)
        .and_then(|end| data.get(offset..end))
        .ok_or(CodecError::OutOfBounds {
            offset,
            len: size,
            total: data.len(),
        })?;
    debug!("sound model offset={offset} size={size}");

    let mut layout = BlockLayout::new();
    let body = layout.push_field(size)?;
    let mut writer = BlockWriter::new(layout, miid, PARAM_ID_DETECTION_ENGINE_SOUND_MODEL)?;
    writer.cursor(body)?.put(model)?;
    Ok(writer.finish())
}

pub fn encode_wakeup_config(miid: u32, cfg: &WakeUpConfig<'_>) -> CodecResult<ParamBlock> {
    let n = usize::from(cfg.num_active_models);
    if n == 0 || n > MAX_SOUND_TRIGGER_USERS {
        warn!("wake-up config with {n} active models");
        return Err(CodecError::invalid(format!(
            "active models must be 1..={MAX_SOUND_TRIGGER_USERS}, got {n}"
        )));
    }
    let confidence = cfg.confidence_levels.get(..n).ok_or_else(|| {
        CodecError::invalid(format!(
            "{} confidence levels for {n} models",
            cfg.confidence_levels.len()
        ))
    })?;
    let enables = cfg.keyword_user_enables.get(..n).ok_or_else(|| {
        CodecError::invalid(format!(
            "{} keyword enables for {n} models",
            cfg.keyword_user_enables.len()
        ))
    })?;
    debug!(
        "wake-up config mode={} custom_payload_size={} models={n}",
        cfg.mode, cfg.custom_payload_size
    );
    trace!("confidence={confidence:?} enables={enables:?}");

    let mut layout = BlockLayout::new();
    let fixed = layout.push_field(WAKEUP_FIXED_LEN)?;
    let levels = layout.push_array(n, 1)?;
    let kw_enables = layout.push_array(n, 1)?;

    let mut writer =
        BlockWriter::new(layout, miid, PARAM_ID_DETECTION_ENGINE_CONFIG_VOICE_WAKEUP)?;
    let mut out = writer.cursor(fixed)?;
    out.put_u16(cfg.mode)?;
    out.put_u16(cfg.custom_payload_size)?;
    out.put_u8(cfg.num_active_models)?;
    out.put_u8(0)?;
    writer.cursor(levels)?.put(confidence)?;
    writer.cursor(kw_enables)?.put(enables)?;
    Ok(writer.finish())
}

pub fn encode_wakeup_buffer_config(
    miid: u32,
    cfg: &WakeUpBufferConfig,
) -> CodecResult<ParamBlock> {
    debug!(
        "wake-up buffering hist={}ms preroll={}ms",
        cfg.hist_buffer_duration_ms, cfg.pre_roll_duration_ms
    );
    let mut layout = BlockLayout::new();
    let fixed = layout.push_field(8)?;
    let mut writer = BlockWriter::new(layout, miid, PARAM_ID_VOICE_WAKEUP_BUFFERING_CONFIG)?;
    let mut out = writer.cursor(fixed)?;
    out.put_u32(cfg.hist_buffer_duration_ms)?;
    out.put_u32(cfg.pre_roll_duration_ms)?;
    Ok(writer.finish())
}

/// Setup duration for each downstream output port of the buffering module.
pub fn encode_setup_duration(miid: u32, ports: &[PortSetupDuration]) -> CodecResult<ParamBlock> {
    if ports.is_empty() {
        warn!("setup duration without output ports");
        return Err(CodecError::invalid("at least one output port is required"));
    }
    let num_ports = u32::try_from(ports.len()).map_err(|_| CodecError::TooLarge(ports.len()))?;
    debug!("downstream setup duration ports={num_ports}");

    let mut layout = BlockLayout::new();
    let count = layout.push_field(4)?;
    let entries = layout.push_array(ports.len(), 8)?;

    let mut writer =
        BlockWriter::new(layout, miid, PARAM_ID_AUDIO_DAM_DOWNSTREAM_SETUP_DURATION)?;
    writer.cursor(count)?.put_u32(num_ports)?;
    let mut out = writer.cursor(entries)?;
    for port in ports {
        trace!("port {:#x}: {}ms", port.output_port_id, port.duration_ms);
        out.put_u32(port.output_port_id)?;
        out.put_i32(port.duration_ms)?;
    }
    Ok(writer.finish())
}

pub fn encode_event_config(miid: u32, event_mode: u32) -> CodecResult<ParamBlock> {
    debug!("generic event config mode={event_mode:#x}");
    let mut layout = BlockLayout::new();
    let fixed = layout.push_field(4)?;
    let mut writer = BlockWriter::new(layout, miid, PARAM_ID_DETECTION_ENGINE_GENERIC_EVENT_CFG)?;
    writer.cursor(fixed)?.put_u32(event_mode)?;
    Ok(writer.finish())
}

/// Header-only reset command.
pub fn encode_detection_reset(miid: u32) -> CodecResult<ParamBlock> {
    Ok(BlockWriter::new(BlockLayout::new(), miid, PARAM_ID_DETECTION_ENGINE_RESET)?.finish())
}

/// Zeroed direction-of-arrival tracking block for a parameter get.
pub fn encode_doa_query(miid: u32) -> CodecResult<ParamBlock> {
    let mut layout = BlockLayout::new();
    layout.push_field(DOA_TRACKING_MONITOR_LEN)?;
    Ok(BlockWriter::new(layout, miid, PARAM_ID_FFV_DOA_TRACKING_MONITOR)?.finish())
}
