use payload_abi::{DeviceAttributes, KeyVector, StreamAttributes};

use crate::error::ResolveResult;

/// Read-only view of one stream, supplied by the embedding audio stack.
///
/// Fallible queries propagate their error out of the resolution that
/// asked for them.
pub trait StreamSource {
    fn attributes(&self) -> ResolveResult<StreamAttributes>;

    /// Devices the stream is currently routed to, in routing order.
    fn associated_devices(&self) -> ResolveResult<Vec<DeviceAttributes>>;

    /// Stream configuration pairs selected by the stream (voice-UI only).
    fn stream_modifiers(&self) -> KeyVector;

    /// Device pre-processing pairs selected by the stream (voice-UI only).
    fn device_pp_modifiers(&self) -> KeyVector;

    fn instance_id(&self) -> u32;

    /// Linear volume of the first channel.
    fn volume(&self) -> ResolveResult<f32>;
}

/// Capture-profile lookups owned by the resource registry.
pub trait CaptureProfiles: Send + Sync {
    /// Channel count of the active detection capture profile, if one is
    /// selected.
    fn detection_channels(&self) -> Option<u32>;
}
