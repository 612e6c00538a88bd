use log::{debug, warn};
use payload_abi::key::{CHANNELS, SPK_PRO_CH_MAP, VOLUME};
use payload_abi::value::*;
use payload_abi::{CalTag, DeviceId, KeyVector, StreamAttributes, StreamType};

use crate::error::{ResolveError, ResolveResult};
use crate::kv;
use crate::source::{CaptureProfiles, StreamSource};

/// Exclusive upper bound of each volume step, quietest first.
const VOLUME_STEPS: [(f32, u32); 15] = [
    (0.002172, LEVEL_15),
    (0.004660, LEVEL_14),
    (0.01, LEVEL_13),
    (0.014877, LEVEL_12),
    (0.023646, LEVEL_11),
    (0.037584, LEVEL_10),
    (0.055912, LEVEL_9),
    (0.088869, LEVEL_8),
    (0.141254, LEVEL_7),
    (0.189453, LEVEL_6),
    (0.266840, LEVEL_5),
    (0.375838, LEVEL_4),
    (0.504081, LEVEL_3),
    (0.709987, LEVEL_2),
    (0.9, LEVEL_1),
];

/// Quantizes a linear volume in `[0, 1]` to a calibration level, 15 being
/// the quietest and 0 the loudest.
pub fn volume_level(volume: f32) -> ResolveResult<u32> {
    if !(0.0..=1.0).contains(&volume) {
        warn!("volume {volume} outside [0, 1]");
        return Err(ResolveError::InvalidVolume(volume));
    }
    Ok(VOLUME_STEPS
        .iter()
        .find(|(bound, _)| volume < *bound)
        .map_or(LEVEL_0, |(_, level)| *level))
}

pub(crate) fn cal_kv(
    attrs: &StreamAttributes,
    source: &dyn StreamSource,
    profiles: &dyn CaptureProfiles,
    tag: CalTag,
) -> ResolveResult<KeyVector> {
    let out = match tag {
        CalTag::StreamVolume => kv(&[(VOLUME, volume_level(source.volume()?)?)]),
        CalTag::ModuleChannels => module_channels_kv(attrs, source, profiles)?,
        CalTag::SpeakerProtectionEnabled => {
            let devices = source.associated_devices()?;
            match devices.iter().find(|d| d.id == DeviceId::OutSpeaker) {
                Some(speaker) if speaker.channels > 1 => kv(&[(SPK_PRO_CH_MAP, LEFT_RIGHT)]),
                Some(_) => kv(&[(SPK_PRO_CH_MAP, RIGHT_MONO)]),
                None => KeyVector::new(),
            }
        }
        CalTag::SpeakerProtectionDisabled => kv(&[(SPK_PRO_CH_MAP, SP_DISABLED)]),
        CalTag::Unrecognized(raw) => {
            debug!("cal_kv: unrecognized calibration tag {raw:#x}");
            KeyVector::new()
        }
    };
    debug!("cal_kv {:?}: {:?}", tag, out.as_slice());
    Ok(out)
}

/// Detection (SVA) voice-UI streams are calibrated per capture channel
/// count. Other streams and voice-UI configurations get nothing.
fn module_channels_kv(
    attrs: &StreamAttributes,
    source: &dyn StreamSource,
    profiles: &dyn CaptureProfiles,
) -> ResolveResult<KeyVector> {
    if attrs.stream_type != StreamType::VoiceUi {
        return Ok(KeyVector::new());
    }
    let modifiers = source.stream_modifiers();
    if modifiers.first().map(|m| m.value) != Some(VUI_STREAM_CFG_SVA) {
        debug!("cal_kv: skipping channel calibration for non-detection stream");
        return Ok(KeyVector::new());
    }
    let channels = profiles
        .detection_channels()
        .ok_or(ResolveError::InvalidCaptureProfile("no detection capture profile"))?;
    if channels == 0 {
        warn!("detection capture profile has zero channels");
        return Err(ResolveError::InvalidCaptureProfile(
            "capture profile has no channels",
        ));
    }
    Ok(kv(&[(CHANNELS, channels)]))
}
