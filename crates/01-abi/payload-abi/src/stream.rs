use crate::error::{AbiError, AbiResult};

/// Semantic stream type reported by the stream collaborator.
///
/// Closed set: every resolver rule matches on it exhaustively, and raw values
/// outside the set are rejected at conversion time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StreamType {
    LowLatency,
    DeepBuffer,
    Compressed,
    VoipRx,
    VoipTx,
    VoiceCallMusic,
    Generic,
    VoiceCallRecord,
    VoiceCall,
    Loopback,
    VoiceUi,
    PcmOffload,
    UltraLowLatency,
    Proxy,
}

impl StreamType {
    pub const fn raw(self) -> u32 {
        match self {
            StreamType::LowLatency => 1,
            StreamType::DeepBuffer => 2,
            StreamType::Compressed => 3,
            StreamType::VoipRx => 5,
            StreamType::VoipTx => 6,
            StreamType::VoiceCallMusic => 7,
            StreamType::Generic => 8,
            StreamType::VoiceCallRecord => 11,
            StreamType::VoiceCall => 14,
            StreamType::Loopback => 15,
            StreamType::VoiceUi => 17,
            StreamType::PcmOffload => 18,
            StreamType::UltraLowLatency => 19,
            StreamType::Proxy => 20,
        }
    }
}

impl TryFrom<u32> for StreamType {
    type Error = AbiError;

    fn try_from(raw: u32) -> AbiResult<Self> {
        Ok(match raw {
            1 => StreamType::LowLatency,
            2 => StreamType::DeepBuffer,
            3 => StreamType::Compressed,
            5 => StreamType::VoipRx,
            6 => StreamType::VoipTx,
            7 => StreamType::VoiceCallMusic,
            8 => StreamType::Generic,
            11 => StreamType::VoiceCallRecord,
            14 => StreamType::VoiceCall,
            15 => StreamType::Loopback,
            17 => StreamType::VoiceUi,
            18 => StreamType::PcmOffload,
            19 => StreamType::UltraLowLatency,
            20 => StreamType::Proxy,
            other => return Err(AbiError::UnknownStreamType(other)),
        })
    }
}

/// Stream direction. The raw form is a bitmask: output `0x1`, input `0x2`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Output,
    Input,
    /// Both bits set; used by loopback-style low-latency streams.
    Both,
}

impl Direction {
    pub const OUTPUT_BIT: u32 = 0x1;
    pub const INPUT_BIT: u32 = 0x2;

    pub const fn raw(self) -> u32 {
        match self {
            Direction::Output => Self::OUTPUT_BIT,
            Direction::Input => Self::INPUT_BIT,
            Direction::Both => Self::OUTPUT_BIT | Self::INPUT_BIT,
        }
    }

    pub const fn is_input(self) -> bool {
        matches!(self, Direction::Input)
    }
}

impl TryFrom<u32> for Direction {
    type Error = AbiError;

    fn try_from(raw: u32) -> AbiResult<Self> {
        match raw {
            Self::OUTPUT_BIT => Ok(Direction::Output),
            Self::INPUT_BIT => Ok(Direction::Input),
            0x3 => Ok(Direction::Both),
            other => Err(AbiError::UnknownDirection(other)),
        }
    }
}

/// Loopback sub-type carried by loopback streams.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LoopbackKind {
    #[default]
    Pcm,
    HfpRx,
    HfpTx,
}

impl TryFrom<u32> for LoopbackKind {
    type Error = AbiError;

    fn try_from(raw: u32) -> AbiResult<Self> {
        match raw {
            0 => Ok(LoopbackKind::Pcm),
            1 => Ok(LoopbackKind::HfpRx),
            2 => Ok(LoopbackKind::HfpTx),
            other => Err(AbiError::UnknownLoopbackKind(other)),
        }
    }
}

/// Attributes a stream collaborator reports for one stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StreamAttributes {
    pub stream_type: StreamType,
    pub direction: Direction,
    /// Only meaningful for [`StreamType::Loopback`].
    pub loopback: LoopbackKind,
    /// Voice session id; only meaningful for [`StreamType::VoiceCall`].
    pub vsid: u32,
}

impl StreamAttributes {
    pub fn new(stream_type: StreamType, direction: Direction) -> Self {
        Self {
            stream_type,
            direction,
            loopback: LoopbackKind::Pcm,
            vsid: 0,
        }
    }

    pub fn with_loopback(mut self, loopback: LoopbackKind) -> Self {
        self.loopback = loopback;
        self
    }

    pub fn with_vsid(mut self, vsid: u32) -> Self {
        self.vsid = vsid;
        self
    }
}
