use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// `pkghash.toml` schema v1.
///
/// Every field is optional; an absent field keeps the npm default.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct PkghashConfigV1 {
    /// Optional schema string for tooling (`pkghash.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Where the fingerprint record lives (default `.npm-install-hash`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub record_file: Option<String>,

    /// Primary manifest (default `package.json`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manifest: Option<String>,

    /// Lock file (default `package-lock.json`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lockfile: Option<String>,

    /// Directory whose direct children are hashed as patches (default `patches`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patches_dir: Option<String>,

    #[serde(default)]
    pub install: InstallConfig,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct InstallConfig {
    /// Shell command run when the fingerprint is missing or stale (default `npm install`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
}
