use log::{debug, trace};
use payload_abi::key::*;
use payload_abi::value::*;
use payload_abi::{DeviceId, KeyVector, KvPair, StreamAttributes, StreamType};

use crate::kv;
use crate::resolver::{BackendDevices, RxTxKv, SidetoneMode};

/// Graph keys of one backend device.
///
/// Unlisted devices contribute nothing. A2DP output is keyed by the
/// Bluetooth path elsewhere and is empty here too.
pub fn device_kv(id: DeviceId) -> KeyVector {
    use DeviceId::*;

    match id {
        OutSpeaker => kv(&[(DEVICERX, SPEAKER)]),
        OutHandset => kv(&[(DEVICERX, HANDSET)]),
        OutBluetoothA2dp => KeyVector::new(),
        OutBluetoothSco => kv(&[(DEVICERX, BT_RX), (BT_PROFILE, SCO)]),
        OutAuxDigital | OutAuxDigital1 | OutHdmi => kv(&[(DEVICERX, HDMI_RX)]),
        OutWiredHeadset | OutWiredHeadphone => kv(&[(DEVICERX, HEADPHONES)]),
        OutUsbHeadset | OutUsbDevice => kv(&[(DEVICERX, USB_RX)]),
        OutProxy => kv(&[(DEVICERX, PROXY_RX)]),
        InSpeakerMic => kv(&[(DEVICETX, SPEAKER_MIC)]),
        InBluetoothScoHeadset => kv(&[(DEVICETX, BT_TX), (BT_PROFILE, SCO)]),
        InWiredHeadset => kv(&[(DEVICETX, HEADPHONE_MIC)]),
        InUsbDevice | InUsbHeadset => kv(&[(DEVICETX, USB_TX)]),
        InHandsetMic => kv(&[(DEVICETX, HANDSETMIC)]),
        InHandsetVaMic => kv(&[(DEVICETX, HANDSETMIC_VA)]),
        InHeadsetVaMic => kv(&[(DEVICETX, HEADSETMIC_VA)]),
        InProxy => kv(&[(DEVICETX, PROXY_TX)]),
        Other(raw) => {
            trace!("no device keys for device id {raw}");
            KeyVector::new()
        }
    }
}

pub(crate) fn target_kv(id: Option<DeviceId>) -> KeyVector {
    id.map(device_kv).unwrap_or_default()
}

pub(crate) fn device_kv_rx_tx(
    attrs: &StreamAttributes,
    targets: BackendDevices,
    sidetone: SidetoneMode,
) -> RxTxKv {
    let mut out = RxTxKv {
        rx: target_kv(targets.rx),
        tx: target_kv(targets.tx),
    };
    if attrs.stream_type == StreamType::VoiceCall && sidetone == SidetoneMode::Software {
        debug!("software sidetone on voice call tx path");
        out.tx.push(KvPair::new(SW_SIDETONE, SW_SIDETONE_ON));
    }
    out
}
