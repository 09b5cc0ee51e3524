//! User-facing status lines. With default settings these read exactly like the npm contract.

use pkghash_domain::{GateState, InstallReason};
use pkghash_types::RepoPath;

pub fn status_message(state: &GateState, install_command: &str) -> String {
    match state {
        GateState::NeedsInstall(InstallReason::MissingRecord) => {
            format!("No hash file found, running {install_command}...")
        }
        GateState::NeedsInstall(InstallReason::Changed { .. }) => {
            format!("Package or patch files have changed, running {install_command}...")
        }
        GateState::UpToDate => {
            format!("Package and patch files unchanged, skipping {install_command}")
        }
    }
}

pub fn write_message(record_file: &RepoPath) -> String {
    format!("Updated {record_file} file")
}
