use payload_abi::KvPair;
use serde::{Deserialize, Serialize};

/// How the op-mode tag resolves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpModePolicy {
    /// Only the module op-mode pair.
    #[default]
    Exclusive,
    /// The op-mode pair followed by the uplink mux/demux pair, targeting the
    /// stream mux/demux stage.
    FallThroughUplink,
}

/// Resolver settings. Missing fields take their defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    pub op_mode: OpModePolicy,
    /// `(vsid, mode)` overrides applied on top of the built-in voice modes.
    pub voice_modes: Vec<KvPair>,
}
