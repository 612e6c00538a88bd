#![allow(dead_code)]

use std::sync::Arc;

use graph_keys::{
    CaptureProfiles, ResolveError, ResolveResult, Resolver, ResolverConfig, StreamSource,
};
use payload_abi::{
    DeviceAttributes, Direction, KeyVector, KvPair, StreamAttributes, StreamType,
};

/// Scripted stream collaborator.
#[derive(Clone, Debug)]
pub struct MockStream {
    pub attrs: StreamAttributes,
    pub devices: Vec<DeviceAttributes>,
    pub modifiers: KeyVector,
    pub pp_modifiers: KeyVector,
    pub instance: u32,
    pub volume: f32,
    pub fail_attributes: bool,
    pub fail_devices: bool,
    pub fail_volume: bool,
}

impl MockStream {
    pub fn new(stream_type: StreamType, direction: Direction) -> Self {
        Self {
            attrs: StreamAttributes::new(stream_type, direction),
            devices: Vec::new(),
            modifiers: KeyVector::new(),
            pp_modifiers: KeyVector::new(),
            instance: 1,
            volume: 1.0,
            fail_attributes: false,
            fail_devices: false,
            fail_volume: false,
        }
    }

    pub fn with_devices(mut self, devices: &[DeviceAttributes]) -> Self {
        self.devices = devices.to_vec();
        self
    }

    pub fn with_modifiers(mut self, pairs: &[(u32, u32)]) -> Self {
        self.modifiers = pairs.iter().map(|&p| KvPair::from(p)).collect();
        self
    }

    pub fn with_pp_modifiers(mut self, pairs: &[(u32, u32)]) -> Self {
        self.pp_modifiers = pairs.iter().map(|&p| KvPair::from(p)).collect();
        self
    }
}

impl StreamSource for MockStream {
    fn attributes(&self) -> ResolveResult<StreamAttributes> {
        if self.fail_attributes {
            return Err(ResolveError::collaborator("attributes unavailable"));
        }
        Ok(self.attrs)
    }

    fn associated_devices(&self) -> ResolveResult<Vec<DeviceAttributes>> {
        if self.fail_devices {
            return Err(ResolveError::collaborator("devices unavailable"));
        }
        Ok(self.devices.clone())
    }

    fn stream_modifiers(&self) -> KeyVector {
        self.modifiers.clone()
    }

    fn device_pp_modifiers(&self) -> KeyVector {
        self.pp_modifiers.clone()
    }

    fn instance_id(&self) -> u32 {
        self.instance
    }

    fn volume(&self) -> ResolveResult<f32> {
        if self.fail_volume {
            return Err(ResolveError::collaborator("volume unavailable"));
        }
        Ok(self.volume)
    }
}

pub struct FixedProfiles(pub Option<u32>);

impl CaptureProfiles for FixedProfiles {
    fn detection_channels(&self) -> Option<u32> {
        self.0
    }
}

pub fn resolver() -> Resolver {
    resolver_with(ResolverConfig::default(), Some(2))
}

pub fn resolver_with(config: ResolverConfig, detection_channels: Option<u32>) -> Resolver {
    let _ = env_logger::builder().is_test(true).try_init();
    Resolver::new(config, Arc::new(FixedProfiles(detection_channels)))
}

pub fn pairs(list: &[(u32, u32)]) -> Vec<KvPair> {
    list.iter().map(|&p| KvPair::from(p)).collect()
}
