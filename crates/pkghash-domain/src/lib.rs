//! Pure fingerprint evaluation (no IO).
//!
//! Input: per-file digests produced by the repo adapter, plus the stored record (if any).
//! Output: the combined fingerprint and the gate decision.

#![forbid(unsafe_code)]

pub mod fingerprint;
pub mod model;
pub mod settings;

mod gate;

#[cfg(test)]
mod proptests;

pub use fingerprint::{combine_digests, digest_bytes, fingerprint_for};
pub use gate::{GateState, InstallReason, evaluate};
pub use settings::GateSettings;
