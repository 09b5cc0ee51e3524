use crate::model::PkghashConfigV1;
use anyhow::Context;
use camino::{Utf8Component, Utf8Path};
use pkghash_domain::GateSettings;
use pkghash_types::{RepoPath, ids};

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub install_command: Option<String>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: GateSettings,
}

pub fn resolve_config(
    cfg: PkghashConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    if let Some(schema) = cfg.schema.as_deref()
        && schema != ids::SCHEMA_CONFIG_V1
    {
        anyhow::bail!(
            "unknown config schema: {schema} (expected {})",
            ids::SCHEMA_CONFIG_V1
        );
    }

    let mut effective = GateSettings::default();

    if let Some(p) = cfg.manifest.as_deref() {
        effective.manifest = parse_input_path("manifest", p)?;
    }
    if let Some(p) = cfg.lockfile.as_deref() {
        effective.lockfile = parse_input_path("lockfile", p)?;
    }
    if let Some(p) = cfg.patches_dir.as_deref() {
        effective.patches_dir = parse_input_path("patches_dir", p)?;
    }
    if let Some(p) = cfg.record_file.as_deref() {
        effective.record_file = parse_input_path("record_file", p)?;
    }

    // install command: CLI override wins over config
    if let Some(cmd) = overrides.install_command.or(cfg.install.command) {
        effective.install_command = parse_install_command(&cmd)?;
    }

    Ok(ResolvedConfig { effective })
}

fn parse_input_path(field: &str, v: &str) -> anyhow::Result<RepoPath> {
    validate_relative(v).with_context(|| format!("invalid {field}: {v:?}"))?;
    Ok(RepoPath::new(v))
}

/// Inputs and the record must stay inside the project root.
fn validate_relative(v: &str) -> anyhow::Result<()> {
    if v.trim().is_empty() {
        anyhow::bail!("path must not be empty");
    }
    for component in Utf8Path::new(v).components() {
        match component {
            Utf8Component::Normal(_) | Utf8Component::CurDir => {}
            Utf8Component::ParentDir => anyhow::bail!("path must not contain `..`"),
            Utf8Component::RootDir | Utf8Component::Prefix(_) => {
                anyhow::bail!("path must be relative to the project root")
            }
        }
    }
    Ok(())
}

fn parse_install_command(v: &str) -> anyhow::Result<String> {
    let cmd = v.trim();
    if cmd.is_empty() {
        anyhow::bail!("install command must not be empty");
    }
    Ok(cmd.to_string())
}
