//! Repository adapters: discover fingerprint inputs, hash them, read and write the record.
//!
//! This crate is allowed to do filesystem IO. It does not spawn processes; the install
//! collaborator lives in `pkghash-app`.

#![forbid(unsafe_code)]

mod digest;
mod discover;
mod record;

use anyhow::Context;
use camino::Utf8Path;
use pkghash_domain::GateSettings;
use pkghash_domain::model::{FileDigest, ManifestSet};
use pkghash_types::Fingerprint;

pub use digest::hash_inputs;
pub use discover::discover_inputs;
pub use record::{read_record, write_record};

/// Everything computed from the current filesystem state.
#[derive(Clone, Debug)]
pub struct Snapshot {
    pub inputs: ManifestSet,
    pub files: Vec<FileDigest>,
    pub fingerprint: Fingerprint,
}

/// Compute the fingerprint of the project rooted at `project_root`.
pub fn compute_fingerprint(
    project_root: &Utf8Path,
    settings: &GateSettings,
) -> anyhow::Result<Snapshot> {
    let inputs = discover_inputs(project_root, settings).context("discover inputs")?;
    let files = hash_inputs(project_root, &inputs).context("hash inputs")?;
    let fingerprint = pkghash_domain::fingerprint_for(&files);

    tracing::debug!(inputs = inputs.len(), %fingerprint, "computed fingerprint");

    Ok(Snapshot {
        inputs,
        files,
        fingerprint,
    })
}
