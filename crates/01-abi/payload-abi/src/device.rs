/// Physical device id.
///
/// Device enumeration grows independently of the resolver, so raw values
/// that are not listed here land in [`DeviceId::Other`] instead of failing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DeviceId {
    OutHandset,
    OutSpeaker,
    OutWiredHeadset,
    OutWiredHeadphone,
    OutBluetoothSco,
    OutBluetoothA2dp,
    OutAuxDigital,
    OutHdmi,
    OutUsbDevice,
    OutUsbHeadset,
    OutProxy,
    OutAuxDigital1,
    InHandsetMic,
    InSpeakerMic,
    InBluetoothScoHeadset,
    InWiredHeadset,
    InUsbDevice,
    InUsbHeadset,
    InHandsetVaMic,
    InHeadsetVaMic,
    InProxy,
    Other(u32),
}

impl DeviceId {
    pub const fn raw(self) -> u32 {
        match self {
            DeviceId::OutHandset => 1,
            DeviceId::OutSpeaker => 2,
            DeviceId::OutWiredHeadset => 3,
            DeviceId::OutWiredHeadphone => 4,
            DeviceId::OutBluetoothSco => 6,
            DeviceId::OutBluetoothA2dp => 7,
            DeviceId::OutAuxDigital => 8,
            DeviceId::OutHdmi => 9,
            DeviceId::OutUsbDevice => 10,
            DeviceId::OutUsbHeadset => 11,
            DeviceId::OutProxy => 15,
            DeviceId::OutAuxDigital1 => 16,
            DeviceId::InHandsetMic => 18,
            DeviceId::InSpeakerMic => 19,
            DeviceId::InBluetoothScoHeadset => 20,
            DeviceId::InWiredHeadset => 21,
            DeviceId::InUsbDevice => 26,
            DeviceId::InUsbHeadset => 27,
            DeviceId::InHandsetVaMic => 28,
            DeviceId::InHeadsetVaMic => 30,
            DeviceId::InProxy => 33,
            DeviceId::Other(raw) => raw,
        }
    }
}

impl From<u32> for DeviceId {
    fn from(raw: u32) -> Self {
        match raw {
            1 => DeviceId::OutHandset,
            2 => DeviceId::OutSpeaker,
            3 => DeviceId::OutWiredHeadset,
            4 => DeviceId::OutWiredHeadphone,
            6 => DeviceId::OutBluetoothSco,
            7 => DeviceId::OutBluetoothA2dp,
            8 => DeviceId::OutAuxDigital,
            9 => DeviceId::OutHdmi,
            10 => DeviceId::OutUsbDevice,
            11 => DeviceId::OutUsbHeadset,
            15 => DeviceId::OutProxy,
            16 => DeviceId::OutAuxDigital1,
            18 => DeviceId::InHandsetMic,
            19 => DeviceId::InSpeakerMic,
            20 => DeviceId::InBluetoothScoHeadset,
            21 => DeviceId::InWiredHeadset,
            26 => DeviceId::InUsbDevice,
            27 => DeviceId::InUsbHeadset,
            28 => DeviceId::InHandsetVaMic,
            30 => DeviceId::InHeadsetVaMic,
            33 => DeviceId::InProxy,
            other => DeviceId::Other(other),
        }
    }
}

impl PartialEq<u32> for DeviceId {
    fn eq(&self, other: &u32) -> bool {
        self.raw() == *other
    }
}

/// Attributes of one device associated with a stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeviceAttributes {
    pub id: DeviceId,
    pub channels: u32,
}

impl DeviceAttributes {
    pub fn new(id: DeviceId, channels: u32) -> Self {
        Self { id, channels }
    }
}
