use pkghash_types::Fingerprint;

/// Why an install is required.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InstallReason {
    /// No fingerprint record exists yet.
    MissingRecord,
    /// The record holds a different value than the current fingerprint.
    Changed { stored: String },
}

/// Outcome of comparing the current fingerprint against the stored record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GateState {
    NeedsInstall(InstallReason),
    UpToDate,
}

impl GateState {
    pub fn needs_install(&self) -> bool {
        matches!(self, GateState::NeedsInstall(_))
    }
}

/// Decide whether to install.
///
/// `stored` is the raw record contents; surrounding whitespace is ignored and the
/// remainder is compared byte-for-byte against `current`.
pub fn evaluate(stored: Option<&str>, current: &Fingerprint) -> GateState {
    match stored {
        None => GateState::NeedsInstall(InstallReason::MissingRecord),
        Some(raw) if current.matches_record(raw) => GateState::UpToDate,
        Some(raw) => GateState::NeedsInstall(InstallReason::Changed {
            stored: raw.trim().to_string(),
        }),
    }
}
