use crate::model::FileDigest;
use pkghash_types::Fingerprint;
use sha2::{Digest, Sha256};

/// Lowercase hex SHA-256 of `bytes`.
pub fn digest_bytes(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

/// Combine per-file digests into the project fingerprint.
///
/// The digests are sorted lexicographically and concatenated without a separator
/// before hashing again, so discovery order never affects the result.
pub fn combine_digests<I, S>(digests: I) -> Fingerprint
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut sorted: Vec<String> = digests
        .into_iter()
        .map(|d| d.as_ref().to_string())
        .collect();
    sorted.sort();

    let canonical = sorted.concat();
    Fingerprint::from_hex(digest_bytes(canonical.as_bytes()))
}

pub fn fingerprint_for(files: &[FileDigest]) -> Fingerprint {
    combine_digests(files.iter().map(|f| f.digest.as_str()))
}
