use pkghash_types::{RepoPath, ids};

/// Resolved inputs and collaborator for one gate run.
///
/// Built by `pkghash-settings`; the defaults are the fixed npm contract.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GateSettings {
    pub manifest: RepoPath,
    pub lockfile: RepoPath,
    pub patches_dir: RepoPath,
    pub record_file: RepoPath,
    pub install_command: String,
}

impl Default for GateSettings {
    fn default() -> Self {
        Self {
            manifest: RepoPath::new(ids::PRIMARY_MANIFEST),
            lockfile: RepoPath::new(ids::LOCKFILE),
            patches_dir: RepoPath::new(ids::PATCHES_DIR),
            record_file: RepoPath::new(ids::RECORD_FILE),
            install_command: ids::DEFAULT_INSTALL_COMMAND.to_string(),
        }
    }
}
