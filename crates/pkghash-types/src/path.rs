use camino::{Utf8Path, Utf8PathBuf};

/// Path of a fingerprint input, relative to the project root.
///
/// Always uses forward slashes and never starts with `./`, so log output and
/// test assertions read the same on every platform.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RepoPath(String);

impl RepoPath {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        let mut v = s.as_ref().replace('\\', "/");
        while let Some(rest) = v.strip_prefix("./") {
            v = rest.to_string();
        }
        if v.is_empty() {
            v = ".".to_string();
        }
        Self(v)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn join(&self, segment: &str) -> RepoPath {
        if self.0 == "." {
            return RepoPath::new(segment);
        }
        RepoPath::new(Utf8Path::new(self.as_str()).join(segment).as_str())
    }

    /// Resolve against the project root for filesystem access.
    pub fn under(&self, root: &Utf8Path) -> Utf8PathBuf {
        root.join(self.as_str())
    }
}

impl std::fmt::Display for RepoPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&Utf8Path> for RepoPath {
    fn from(value: &Utf8Path) -> Self {
        RepoPath::new(value.as_str())
    }
}
