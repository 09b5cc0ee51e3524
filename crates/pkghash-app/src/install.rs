//! The install collaborator: an external command run when the fingerprint is stale.

use camino::Utf8Path;
use std::process::{Command, ExitStatus};

#[derive(Debug, thiserror::Error)]
pub enum InstallError {
    #[error("Command failed to start: {command}: {error}")]
    Spawn {
        command: String,
        error: std::io::Error,
    },

    #[error("Command failed: {command} (exit code {code})")]
    ExitCode { command: String, code: i32 },

    #[error("Command failed: {command} (terminated by signal)")]
    Terminated { command: String },
}

/// Runs the install command. Implementations block until it finishes.
pub trait Installer {
    fn install(&self, project_root: &Utf8Path, command: &str) -> Result<(), InstallError>;
}

/// Runs the command through the platform shell with inherited standard streams.
#[derive(Clone, Copy, Debug, Default)]
pub struct ShellInstaller;

impl Installer for ShellInstaller {
    fn install(&self, project_root: &Utf8Path, command: &str) -> Result<(), InstallError> {
        tracing::info!(command, cwd = %project_root, "running install command");

        let status = shell(command)
            .current_dir(project_root)
            .status()
            .map_err(|error| InstallError::Spawn {
                command: command.to_string(),
                error,
            })?;

        tracing::debug!(?status, "install command finished");
        check_status(command, status)
    }
}

#[cfg(windows)]
fn shell(command: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.arg("/C").arg(command);
    cmd
}

#[cfg(not(windows))]
fn shell(command: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg(command);
    cmd
}

fn check_status(command: &str, status: ExitStatus) -> Result<(), InstallError> {
    if status.success() {
        return Ok(());
    }
    match status.code() {
        Some(code) => Err(InstallError::ExitCode {
            command: command.to_string(),
            code,
        }),
        None => Err(InstallError::Terminated {
            command: command.to_string(),
        }),
    }
}
