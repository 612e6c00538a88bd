/// Runtime control tag requested by the caller.
///
/// Raw ids that are not listed land in [`Tag::Unrecognized`] and resolve to
/// no key contribution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tag {
    Mute,
    Unmute,
    SlowTalkOff,
    SlowTalkOn,
    Pause,
    Resume,
    MfcSr8k,
    MfcSr16k,
    MfcSr22k,
    MfcSr32k,
    MfcSr44k,
    MfcSr48k,
    MfcSr96k,
    MfcSr192k,
    MfcSr384k,
    FluenceOn,
    FluenceOff,
    FluenceEc,
    FluenceNs,
    Channels1,
    Channels2,
    Channels3,
    Channels4,
    BitWidth16,
    BitWidth24,
    BitWidth32,
    OpMode,
    IncallRecordUplink,
    IncallRecordDownlink,
    IncallRecordUplinkDownlinkMono,
    IncallRecordUplinkDownlinkStereo,
    Unrecognized(u32),
}

const TAG_TABLE: [(u32, Tag); 31] = [
    (1, Tag::Mute),
    (2, Tag::Unmute),
    (3, Tag::SlowTalkOff),
    (4, Tag::SlowTalkOn),
    (5, Tag::Pause),
    (6, Tag::Resume),
    (7, Tag::MfcSr8k),
    (8, Tag::MfcSr16k),
    (9, Tag::MfcSr22k),
    (10, Tag::MfcSr32k),
    (11, Tag::MfcSr44k),
    (12, Tag::MfcSr48k),
    (13, Tag::MfcSr96k),
    (14, Tag::MfcSr192k),
    (15, Tag::MfcSr384k),
    (16, Tag::FluenceOn),
    (17, Tag::FluenceOff),
    (18, Tag::FluenceEc),
    (19, Tag::FluenceNs),
    (20, Tag::Channels1),
    (21, Tag::Channels2),
    (22, Tag::Channels3),
    (23, Tag::Channels4),
    (24, Tag::BitWidth16),
    (25, Tag::BitWidth24),
    (26, Tag::BitWidth32),
    (27, Tag::OpMode),
    (28, Tag::IncallRecordUplink),
    (29, Tag::IncallRecordDownlink),
    (30, Tag::IncallRecordUplinkDownlinkMono),
    (31, Tag::IncallRecordUplinkDownlinkStereo),
];

impl Tag {
    pub fn raw(self) -> u32 {
        if let Tag::Unrecognized(raw) = self {
            return raw;
        }
        TAG_TABLE
            .iter()
            .find(|(_, tag)| *tag == self)
            .map(|(raw, _)| *raw)
            .unwrap_or_default()
    }
}

impl From<u32> for Tag {
    fn from(raw: u32) -> Self {
        TAG_TABLE
            .iter()
            .find(|(id, _)| *id == raw)
            .map(|(_, tag)| *tag)
            .unwrap_or(Tag::Unrecognized(raw))
    }
}

/// Calibration tag selecting one calibration key rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CalTag {
    StreamVolume,
    ModuleChannels,
    SpeakerProtectionEnabled,
    SpeakerProtectionDisabled,
    Unrecognized(u32),
}

impl CalTag {
    pub const fn raw(self) -> u32 {
        match self {
            CalTag::StreamVolume => GraphTag::StreamVolume.raw(),
            CalTag::ModuleChannels => GraphTag::ModuleChannels.raw(),
            CalTag::SpeakerProtectionEnabled => 0x40,
            CalTag::SpeakerProtectionDisabled => 0x41,
            CalTag::Unrecognized(raw) => raw,
        }
    }
}

impl From<u32> for CalTag {
    fn from(raw: u32) -> Self {
        match raw {
            r if r == GraphTag::StreamVolume.raw() => CalTag::StreamVolume,
            r if r == GraphTag::ModuleChannels.raw() => CalTag::ModuleChannels,
            0x40 => CalTag::SpeakerProtectionEnabled,
            0x41 => CalTag::SpeakerProtectionDisabled,
            other => CalTag::Unrecognized(other),
        }
    }
}

/// Graph stage selector handed back with a tag key vector. The caller uses
/// it to find the module instance the tag configuration applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GraphTag {
    StreamVolume,
    Mute,
    Pause,
    StreamMfc,
    DeviceMfc,
    Fluence,
    StreamSlowTalk,
    ModuleChannels,
    ModuleOpMode,
    StreamMuxDemux,
}

impl GraphTag {
    pub const fn raw(self) -> u32 {
        match self {
            GraphTag::StreamVolume => 0xC000_0001,
            GraphTag::Mute => 0xC000_0002,
            GraphTag::Pause => 0xC000_0003,
            GraphTag::StreamMfc => 0xC000_0004,
            GraphTag::DeviceMfc => 0xC000_0005,
            GraphTag::Fluence => 0xC000_0006,
            GraphTag::StreamSlowTalk => 0xC000_0007,
            GraphTag::ModuleChannels => 0xC000_0008,
            GraphTag::ModuleOpMode => 0xC000_0009,
            GraphTag::StreamMuxDemux => 0xC000_000A,
        }
    }
}
