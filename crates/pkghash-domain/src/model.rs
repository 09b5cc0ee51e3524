use pkghash_types::RepoPath;

/// Role a file plays in the manifest set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum InputKind {
    Manifest,
    Lockfile,
    Patch,
}

impl InputKind {
    pub fn as_str(self) -> &'static str {
        match self {
            InputKind::Manifest => "manifest",
            InputKind::Lockfile => "lockfile",
            InputKind::Patch => "patch",
        }
    }
}

/// A file that exists on disk and contributes to the fingerprint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ManifestEntry {
    pub kind: InputKind,
    pub path: RepoPath,
}

/// All inputs discovered for one project. Absent optional inputs are simply not listed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ManifestSet {
    pub entries: Vec<ManifestEntry>,
}

impl ManifestSet {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn count_of(&self, kind: InputKind) -> usize {
        self.entries.iter().filter(|e| e.kind == kind).count()
    }
}

/// Content digest of a single input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileDigest {
    pub entry: ManifestEntry,
    /// Lowercase hex SHA-256 of the file bytes.
    pub digest: String,
}
