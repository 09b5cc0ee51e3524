use crate::error::GateError;
use anyhow::Context;
use camino::Utf8Path;
use pkghash_domain::GateSettings;
use pkghash_settings::Overrides;

/// Load and resolve gate settings.
///
/// `config_path` is resolved against `project_root`. A missing config file means
/// defaults; a config file that exists but cannot be read or parsed is an error.
pub fn load_settings(
    project_root: &Utf8Path,
    config_path: &Utf8Path,
    overrides: Overrides,
) -> Result<GateSettings, GateError> {
    let path = project_root.join(config_path);

    let text = if path.exists() {
        tracing::debug!(path = %path, "loading config");
        std::fs::read_to_string(&path)
            .with_context(|| format!("read config {path}"))
            .map_err(GateError::Config)?
    } else {
        tracing::debug!(path = %path, "no config file, using defaults");
        String::new()
    };

    let cfg = pkghash_settings::parse_config_toml(&text)
        .with_context(|| format!("parse config {path}"))
        .map_err(GateError::Config)?;
    let resolved = pkghash_settings::resolve_config(cfg, overrides)
        .context("resolve config")
        .map_err(GateError::Config)?;

    Ok(resolved.effective)
}
