use log::debug;
use payload_abi::param::PARAM_ID_SPR_SESSION_TIME;

use crate::block::{BlockWriter, ParamBlock};
use crate::error::CodecResult;
use crate::layout::BlockLayout;

/// Session time, absolute time and timestamp words plus the flag word.
pub const SESSION_TIME_LEN: usize = 28;

/// Zeroed session time block for the DSP to fill in on a get.
pub fn encode_session_time_query(miid: u32) -> CodecResult<ParamBlock> {
    let mut layout = BlockLayout::new();
    layout.push_field(SESSION_TIME_LEN)?;
    Ok(BlockWriter::new(layout, miid, PARAM_ID_SPR_SESSION_TIME)?.finish())
}

/// Wraps caller-built payload bytes under a header. An empty payload yields
/// a header-only block.
pub fn encode_custom(miid: u32, param_id: u32, payload: &[u8]) -> CodecResult<ParamBlock> {
    debug!("custom payload param_id={param_id:#x} len={}", payload.len());
    let mut layout = BlockLayout::new();
    let body = layout.push_field(payload.len())?;
    let mut writer = BlockWriter::new(layout, miid, param_id)?;
    if !body.is_empty() {
        writer.cursor(body)?.put(payload)?;
    }
    Ok(writer.finish())
}

/// Zeroed block of `reply_size` payload bytes for a parameter get.
pub fn encode_query(miid: u32, param_id: u32, reply_size: usize) -> CodecResult<ParamBlock> {
    debug!("query param_id={param_id:#x} reply_size={reply_size}");
    let mut layout = BlockLayout::new();
    layout.push_field(reply_size)?;
    Ok(BlockWriter::new(layout, miid, param_id)?.finish())
}
