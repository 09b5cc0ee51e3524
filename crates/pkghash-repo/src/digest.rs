use anyhow::Context;
use camino::Utf8Path;
use pkghash_domain::digest_bytes;
use pkghash_domain::model::{FileDigest, ManifestSet};

/// Read and hash every discovered input, one at a time.
///
/// Any read failure aborts the whole computation; there is no partial fingerprint.
pub fn hash_inputs(project_root: &Utf8Path, set: &ManifestSet) -> anyhow::Result<Vec<FileDigest>> {
    let mut out = Vec::with_capacity(set.len());
    for entry in &set.entries {
        let abs = entry.path.under(project_root);
        let bytes = std::fs::read(&abs).with_context(|| format!("read {abs}"))?;
        let digest = digest_bytes(&bytes);
        tracing::debug!(
            path = %entry.path,
            kind = entry.kind.as_str(),
            bytes = bytes.len(),
            %digest,
            "hashed input"
        );
        out.push(FileDigest {
            entry: entry.clone(),
            digest,
        });
    }
    Ok(out)
}
