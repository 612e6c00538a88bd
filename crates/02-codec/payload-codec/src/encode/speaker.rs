use log::{debug, trace, warn};
use payload_abi::param::PARAM_ID_SP_TH_VI_R0T0_CFG;

use crate::block::{BlockWriter, ParamBlock};
use crate::error::{CodecError, CodecResult};
use crate::layout::BlockLayout;

/// Calibrated resistance (Q24 ohms) and temperature (Q6 degrees C) of one
/// speaker.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SpeakerR0T0 {
    pub r0_cali_q24: i32,
    pub t0_cali_q6: i32,
}

pub fn encode_speaker_r0t0(miid: u32, speakers: &[SpeakerR0T0]) -> CodecResult<ParamBlock> {
    if speakers.is_empty() {
        warn!("speaker calibration without speakers");
        return Err(CodecError::invalid("at least one speaker is required"));
    }
    let num_speakers =
        u32::try_from(speakers.len()).map_err(|_| CodecError::TooLarge(speakers.len()))?;
    debug!("speaker r0t0 calibration speakers={num_speakers}");

    let mut layout = BlockLayout::new();
    let count = layout.push_field(4)?;
    let entries = layout.push_array(speakers.len(), 8)?;

    let mut writer = BlockWriter::new(layout, miid, PARAM_ID_SP_TH_VI_R0T0_CFG)?;
    writer.cursor(count)?.put_u32(num_speakers)?;
    let mut out = writer.cursor(entries)?;
    for (idx, spk) in speakers.iter().enumerate() {
        trace!("speaker {idx}: r0={} t0={}", spk.r0_cali_q24, spk.t0_cali_q6);
        out.put_i32(spk.r0_cali_q24)?;
        out.put_i32(spk.t0_cali_q6)?;
    }
    Ok(writer.finish())
}
