//! End-to-end checks across the key resolver and the parameter codec.

#[cfg(test)]
mod graph_open;

#[cfg(test)]
mod payload_golden;

#[cfg(test)]
mod framing_sweep;
