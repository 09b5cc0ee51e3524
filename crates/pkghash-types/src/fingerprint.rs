/// Hex-encoded SHA-256 digest summarizing every tracked input.
///
/// Comparison against a stored record is plain string equality, so the
/// wrapped value is always lowercase hex as produced by the domain crate.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Length of the hex encoding of a 256-bit digest.
    pub const HEX_LEN: usize = 64;

    pub fn from_hex(hex: impl Into<String>) -> Self {
        Self(hex.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the value has the shape of a digest (64 lowercase hex characters).
    pub fn is_well_formed(&self) -> bool {
        self.0.len() == Self::HEX_LEN
            && self
                .0
                .bytes()
                .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
    }

    /// Compare against the contents of a fingerprint record (surrounding whitespace ignored).
    pub fn matches_record(&self, stored: &str) -> bool {
        stored.trim() == self.0
    }
}

impl std::fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
