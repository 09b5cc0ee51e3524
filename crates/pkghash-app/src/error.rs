use crate::install::InstallError;

/// Every failure the use cases can report. None of them is retried.
#[derive(Debug, thiserror::Error)]
pub enum GateError {
    /// The config file could not be read, parsed, or resolved.
    #[error("{0:#}")]
    Config(anyhow::Error),

    /// An input or the record could not be read, or the record could not be written.
    #[error("{0:#}")]
    Io(anyhow::Error),

    /// The install collaborator failed.
    #[error("{0}")]
    Install(InstallError),
}

impl GateError {
    pub(crate) fn io(err: anyhow::Error) -> Self {
        GateError::Io(err)
    }
}

impl From<InstallError> for GateError {
    fn from(value: InstallError) -> Self {
        GateError::Install(value)
    }
}
