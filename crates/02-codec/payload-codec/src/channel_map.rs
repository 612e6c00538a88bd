//! Channel-role ordering for media-format payloads.
//!
//! A caller-supplied role array always wins. Otherwise the count selects a
//! default layout; counts without one are rejected.

use log::trace;
use payload_abi::ChannelRole::{self, Cs, Lb, Lfe, Ls, Rb, Rs, C, L, R};
use smallvec::SmallVec;

use crate::error::{CodecError, CodecResult};

/// Resolved role codes, one per channel.
pub type ChannelMap = SmallVec<[u16; 8]>;

/// Physical orientation of a stereo speaker pair.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SpeakerRotation {
    #[default]
    LeftRight,
    RightLeft,
}

/// Default role layout for `channels`, if one exists.
pub fn default_roles(channels: usize) -> Option<&'static [ChannelRole]> {
    let roles: &'static [ChannelRole] = match channels {
        1 => &[C],
        2 => &[L, R],
        3 => &[L, R, C],
        4 => &[L, R, Lb, Rb],
        5 => &[L, R, C, Lb, Rb],
        6 => &[L, R, C, Lfe, Lb, Rb],
        7 => &[L, R, C, Ls, Rs, Lb, Rb],
        8 => &[L, R, C, Ls, Rs, Cs, Lb, Rb],
        _ => return None,
    };
    Some(roles)
}

/// Resolves the role sequence for `channels`.
///
/// `explicit` is used verbatim and must hold exactly `channels` codes.
/// Rotation only applies to the stereo default.
pub fn resolve_channel_map(
    channels: usize,
    explicit: Option<&[u16]>,
    rotation: SpeakerRotation,
) -> CodecResult<ChannelMap> {
    if let Some(roles) = explicit {
        if roles.len() != channels {
            return Err(CodecError::invalid(format!(
                "channel map holds {} roles for {} channels",
                roles.len(),
                channels
            )));
        }
        trace!("explicit channel map {:?}", roles);
        return Ok(SmallVec::from_slice(roles));
    }

    let roles = default_roles(channels).ok_or(CodecError::UnsupportedChannelCount(channels))?;
    let mut map: ChannelMap = roles.iter().map(|role| role.code()).collect();
    if channels == 2 && rotation == SpeakerRotation::RightLeft {
        map.swap(0, 1);
    }
    trace!("default channel map for {} channels: {:?}", channels, map);
    Ok(map)
}
