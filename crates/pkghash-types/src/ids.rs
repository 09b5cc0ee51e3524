//! Well-known names for the fingerprint gate.
//!
//! These are the defaults of the filesystem contract; `pkghash.toml` may override
//! the file names and the install command.

pub const TOOL_NAME: &str = "packages-hash";

// Inputs
pub const PRIMARY_MANIFEST: &str = "package.json";
pub const LOCKFILE: &str = "package-lock.json";
pub const PATCHES_DIR: &str = "patches";

// Persisted state
pub const RECORD_FILE: &str = ".npm-install-hash";

// Install collaborator
pub const DEFAULT_INSTALL_COMMAND: &str = "npm install";

// Configuration
pub const DEFAULT_CONFIG_FILE: &str = "pkghash.toml";
pub const SCHEMA_CONFIG_V1: &str = "pkghash.config.v1";

/// Environment variable holding the `tracing` filter directive for the CLI.
pub const LOG_ENV: &str = "PKGHASH_LOG";
