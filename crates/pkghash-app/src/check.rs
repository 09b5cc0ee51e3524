//! The `check` use case: compare the current fingerprint to the record and install if stale.

use crate::GateInput;
use crate::error::GateError;
use crate::install::Installer;
use crate::status::status_message;
use anyhow::Context;
use pkghash_domain::{GateState, InstallReason};
use pkghash_types::Fingerprint;
use std::io::Write;

/// Output from the check use case.
#[derive(Clone, Debug)]
pub struct CheckOutput {
    pub state: GateState,
    pub fingerprint: Fingerprint,
}

/// Run the check use case.
///
/// The status line goes to `out` (flushed) before the installer runs, so it appears
/// ahead of the install command's own output. The record is never modified here.
pub fn run_check(
    input: GateInput<'_>,
    installer: &dyn Installer,
    out: &mut dyn Write,
) -> Result<CheckOutput, GateError> {
    let snapshot = pkghash_repo::compute_fingerprint(input.project_root, input.settings)
        .map_err(GateError::io)?;

    let stored = pkghash_repo::read_record(input.project_root, &input.settings.record_file)
        .context("read fingerprint record")
        .map_err(GateError::io)?;

    let state = pkghash_domain::evaluate(stored.as_deref(), &snapshot.fingerprint);
    match &state {
        GateState::NeedsInstall(InstallReason::MissingRecord) => {
            tracing::info!(record = %input.settings.record_file, "no fingerprint record");
        }
        GateState::NeedsInstall(InstallReason::Changed { stored }) => {
            tracing::info!(%stored, current = %snapshot.fingerprint, "fingerprint changed");
        }
        GateState::UpToDate => {
            tracing::info!(fingerprint = %snapshot.fingerprint, "fingerprint unchanged");
        }
    }

    writeln!(out, "{}", status_message(&state, &input.settings.install_command))
        .and_then(|()| out.flush())
        .context("write status")
        .map_err(GateError::io)?;

    if state.needs_install() {
        installer.install(input.project_root, &input.settings.install_command)?;
    }

    Ok(CheckOutput {
        state,
        fingerprint: snapshot.fingerprint,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::install::InstallError;
    use crate::write::run_write;
    use camino::Utf8Path;
    use pkghash_domain::GateSettings;
    use pkghash_test_util::TempProject;
    use std::cell::RefCell;

    /// Records invocations instead of running anything.
    #[derive(Default)]
    struct RecordingInstaller {
        calls: RefCell<Vec<String>>,
        fail_with: Option<i32>,
    }

    impl RecordingInstaller {
        fn failing(code: i32) -> Self {
            Self {
                fail_with: Some(code),
                ..Default::default()
            }
        }

        fn count(&self) -> usize {
            self.calls.borrow().len()
        }
    }

    impl Installer for RecordingInstaller {
        fn install(&self, _project_root: &Utf8Path, command: &str) -> Result<(), InstallError> {
            self.calls.borrow_mut().push(command.to_string());
            match self.fail_with {
                Some(code) => Err(InstallError::ExitCode {
                    command: command.to_string(),
                    code,
                }),
                None => Ok(()),
            }
        }
    }

    fn check(
        project: &TempProject,
        settings: &GateSettings,
        installer: &RecordingInstaller,
    ) -> (Result<CheckOutput, GateError>, String) {
        let mut out = Vec::new();
        let input = GateInput {
            project_root: project.root(),
            settings,
        };
        let res = run_check(input, installer, &mut out);
        (res, String::from_utf8(out).expect("utf8 status"))
    }

    fn write(project: &TempProject, settings: &GateSettings) {
        let input = GateInput {
            project_root: project.root(),
            settings,
        };
        run_write(input, &mut Vec::new()).expect("write");
    }

    #[test]
    fn no_record_installs_once() {
        let project = TempProject::with_sample_manifest();
        let settings = GateSettings::default();
        let installer = RecordingInstaller::default();

        let (res, out) = check(&project, &settings, &installer);
        let output = res.expect("check");

        assert_eq!(
            output.state,
            GateState::NeedsInstall(InstallReason::MissingRecord)
        );
        assert_eq!(out, "No hash file found, running npm install...\n");
        assert_eq!(*installer.calls.borrow(), vec!["npm install".to_string()]);
        assert!(!project.exists(".npm-install-hash"));
    }

    #[test]
    fn full_scenario_install_write_skip_change() {
        let project = TempProject::with_sample_manifest();
        let settings = GateSettings::default();
        let installer = RecordingInstaller::default();

        let (res, _) = check(&project, &settings, &installer);
        let first = res.expect("first check");
        assert_eq!(installer.count(), 1);

        write(&project, &settings);
        assert_eq!(project.read(".npm-install-hash"), first.fingerprint.as_str());

        let (res, out) = check(&project, &settings, &installer);
        assert_eq!(res.expect("second check").state, GateState::UpToDate);
        assert_eq!(out, "Package and patch files unchanged, skipping npm install\n");
        assert_eq!(installer.count(), 1);

        project.write("package.json", r#"{"dependencies":{"test":"2.0.0"}}"#);
        let (res, out) = check(&project, &settings, &installer);
        let changed = res.expect("third check");
        assert_eq!(
            changed.state,
            GateState::NeedsInstall(InstallReason::Changed {
                stored: first.fingerprint.as_str().to_string()
            })
        );
        assert_eq!(
            out,
            "Package or patch files have changed, running npm install...\n"
        );
        assert_eq!(installer.count(), 2);
    }

    #[test]
    fn check_twice_without_write_installs_twice() {
        let project = TempProject::with_sample_manifest();
        let settings = GateSettings::default();
        let installer = RecordingInstaller::default();

        check(&project, &settings, &installer).0.expect("first");
        check(&project, &settings, &installer).0.expect("second");

        assert_eq!(installer.count(), 2);
    }

    #[test]
    fn stale_placeholder_record_triggers_install() {
        let project = TempProject::with_sample_manifest();
        project.write("package-lock.json", "{\"lockfileVersion\": 1}");
        project.write(".npm-install-hash", "matching-hash");
        let installer = RecordingInstaller::default();

        let (res, _) = check(&project, &GateSettings::default(), &installer);

        assert!(res.expect("check").state.needs_install());
        assert_eq!(installer.count(), 1);
        assert_eq!(project.read(".npm-install-hash"), "matching-hash");
    }

    #[test]
    fn corrupted_record_triggers_install() {
        let project = TempProject::with_sample_manifest();
        project.write_bytes(".npm-install-hash", &[0xff, 0xfe, b'a']);
        let installer = RecordingInstaller::default();

        let (res, out) = check(&project, &GateSettings::default(), &installer);

        assert!(matches!(
            res.expect("check").state,
            GateState::NeedsInstall(InstallReason::Changed { .. })
        ));
        assert!(out.starts_with("Package or patch files have changed"));
        assert_eq!(installer.count(), 1);
    }

    #[test]
    fn install_failure_is_fatal_and_leaves_record_alone() {
        let project = TempProject::with_sample_manifest();
        project.write(".npm-install-hash", "stale");
        let installer = RecordingInstaller::failing(1);

        let (res, out) = check(&project, &GateSettings::default(), &installer);

        let err = res.unwrap_err();
        assert!(matches!(err, GateError::Install(_)));
        assert_eq!(err.to_string(), "Command failed: npm install (exit code 1)");
        assert!(out.starts_with("Package or patch files have changed"));
        assert_eq!(project.read(".npm-install-hash"), "stale");
    }

    #[test]
    fn unreadable_input_fails_before_install() {
        let project = TempProject::new();
        project.mkdir("package.json");
        let installer = RecordingInstaller::default();

        let (res, out) = check(&project, &GateSettings::default(), &installer);

        assert!(matches!(res.unwrap_err(), GateError::Io(_)));
        assert!(out.is_empty());
        assert_eq!(installer.count(), 0);
    }

    #[test]
    fn configured_command_is_passed_to_installer() {
        let project = TempProject::with_sample_manifest();
        let settings = GateSettings {
            install_command: "npm ci".to_string(),
            ..GateSettings::default()
        };
        let installer = RecordingInstaller::default();

        let (res, out) = check(&project, &settings, &installer);

        res.expect("check");
        assert_eq!(out, "No hash file found, running npm ci...\n");
        assert_eq!(*installer.calls.borrow(), vec!["npm ci".to_string()]);
    }
}
