//! Use case orchestration for pkghash.
//!
//! This crate provides the application layer: the `check` and `write` use cases that
//! coordinate settings, the repo adapters, the domain decision, and the install
//! collaborator. It returns typed results instead of exiting the process.
//!
//! The CLI crate depends on this; it only handles argument parsing, logging, and exit codes.

#![forbid(unsafe_code)]

mod check;
mod error;
mod install;
mod settings;
mod status;
mod write;

pub use check::{CheckOutput, run_check};
pub use error::GateError;
pub use install::{InstallError, Installer, ShellInstaller};
pub use settings::load_settings;
pub use status::{status_message, write_message};
pub use write::{WriteOutput, run_write};

use camino::Utf8Path;
use pkghash_domain::GateSettings;

/// Input shared by both use cases.
#[derive(Clone, Copy, Debug)]
pub struct GateInput<'a> {
    /// Directory holding the manifest, lock file, patches, and record.
    pub project_root: &'a Utf8Path,
    pub settings: &'a GateSettings,
}
