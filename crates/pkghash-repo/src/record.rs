use anyhow::Context;
use camino::Utf8Path;
use pkghash_types::{Fingerprint, RepoPath};

/// Read the raw fingerprint record, or `None` if it does not exist.
///
/// The value is returned untrimmed; comparison trims it. Invalid UTF-8 is decoded
/// lossily, so a corrupted record reads as a stale value rather than an error.
pub fn read_record(project_root: &Utf8Path, record: &RepoPath) -> anyhow::Result<Option<String>> {
    let abs = record.under(project_root);
    if !abs.exists() {
        return Ok(None);
    }
    let bytes = std::fs::read(&abs).with_context(|| format!("read {abs}"))?;
    Ok(Some(String::from_utf8_lossy(&bytes).into_owned()))
}

/// Overwrite the fingerprint record with `fingerprint`, verbatim.
pub fn write_record(
    project_root: &Utf8Path,
    record: &RepoPath,
    fingerprint: &Fingerprint,
) -> anyhow::Result<()> {
    let abs = record.under(project_root);
    if let Some(parent) = abs.parent()
        && !parent.as_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {parent}"))?;
    }
    std::fs::write(&abs, fingerprint.as_str()).with_context(|| format!("write {abs}"))?;
    Ok(())
}
