use anyhow::Context;
use camino::Utf8Path;
use pkghash_domain::GateSettings;
use pkghash_domain::model::{InputKind, ManifestEntry, ManifestSet};
use pkghash_types::RepoPath;
use walkdir::WalkDir;

/// Discover the fingerprint inputs present under `project_root`.
///
/// Behavior:
/// - The manifest and lock file are listed if they exist; absence is not an error.
/// - Every regular file directly inside the patches directory is listed (no recursion).
///   Subdirectories are skipped; symlinks are followed.
/// - A patches path that exists but is not a directory is an error.
pub fn discover_inputs(
    project_root: &Utf8Path,
    settings: &GateSettings,
) -> anyhow::Result<ManifestSet> {
    let mut entries = Vec::new();

    for (kind, path) in [
        (InputKind::Manifest, &settings.manifest),
        (InputKind::Lockfile, &settings.lockfile),
    ] {
        if path.under(project_root).exists() {
            entries.push(ManifestEntry {
                kind,
                path: path.clone(),
            });
        } else {
            tracing::debug!(path = %path, kind = kind.as_str(), "input absent, skipping");
        }
    }

    entries.extend(discover_patches(project_root, &settings.patches_dir)?);

    Ok(ManifestSet { entries })
}

fn discover_patches(
    project_root: &Utf8Path,
    patches_dir: &RepoPath,
) -> anyhow::Result<Vec<ManifestEntry>> {
    let abs = patches_dir.under(project_root);
    if !abs.exists() {
        tracing::debug!(path = %patches_dir, "patches directory absent, skipping");
        return Ok(Vec::new());
    }
    if !abs.is_dir() {
        anyhow::bail!("patches path is not a directory: {abs}");
    }

    let mut out = Vec::new();
    // Stable order for logs; the fingerprint itself is order independent.
    for entry in WalkDir::new(&abs)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry.with_context(|| format!("read directory {abs}"))?;
        if !entry.file_type().is_file() {
            tracing::debug!(path = %entry.path().display(), "not a regular file, skipping");
            continue;
        }
        let name = entry
            .file_name()
            .to_str()
            .with_context(|| format!("non UTF-8 file name in {abs}: {:?}", entry.file_name()))?;
        out.push(ManifestEntry {
            kind: InputKind::Patch,
            path: patches_dir.join(name),
        });
    }

    Ok(out)
}
