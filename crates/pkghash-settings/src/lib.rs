//! Config parsing and override resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod resolve;

pub use model::{InstallConfig, PkghashConfigV1};
pub use resolve::{Overrides, ResolvedConfig};

/// Parse `pkghash.toml` (or equivalent) into a typed model.
///
/// Blank input is the default config.
pub fn parse_config_toml(input: &str) -> anyhow::Result<PkghashConfigV1> {
    if input.trim().is_empty() {
        return Ok(PkghashConfigV1::default());
    }
    let cfg: PkghashConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective gate settings (defaults + config file + CLI overrides).
pub fn resolve_config(
    cfg: PkghashConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
