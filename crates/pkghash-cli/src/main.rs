//! CLI entry point for pkghash.
//!
//! This module is intentionally thin: it handles argument parsing, logging setup, and exit codes.
//! All gate logic lives in the `pkghash-app` crate.

use camino::Utf8PathBuf;
use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use pkghash_app::{GateInput, ShellInstaller, load_settings, run_check, run_write};
use pkghash_settings::Overrides;
use pkghash_types::ids;
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    name = "packages-hash",
    version,
    about = "Skip npm install when package manifests and patches are unchanged"
)]
struct Cli {
    /// Project directory holding package.json, the lock file, patches, and the hash record.
    #[arg(long, default_value = ".")]
    project_root: Utf8PathBuf,

    /// Path to the pkghash config TOML (relative to the project root).
    #[arg(long, default_value = ids::DEFAULT_CONFIG_FILE)]
    config: Utf8PathBuf,

    /// Override the install command (default `npm install`).
    #[arg(long)]
    install_command: Option<String>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check if packages need to be reinstalled.
    Check {
        /// Extra arguments are accepted and ignored.
        #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
        _extra: Vec<String>,
    },
    /// Write current package hash to file.
    Write {
        #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
        _extra: Vec<String>,
    },
}

fn usage() -> String {
    format!(
        "Usage: {name} [check|write]\n  \
         check: Check if packages need to be reinstalled\n  \
         write: Write current package hash to file\n",
        name = ids::TOOL_NAME
    )
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
            _ => {
                eprint!("{}", usage());
                return ExitCode::FAILURE;
            }
        },
    };

    init_tracing();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "command failed");
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Diagnostics go to stderr so stdout carries only the status lines.
fn init_tracing() {
    let env_filter = EnvFilter::try_from_env(ids::LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(env_filter)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    if !cli.project_root.is_dir() {
        anyhow::bail!("project root is not a directory: {}", cli.project_root);
    }

    let overrides = Overrides {
        install_command: cli.install_command.clone(),
    };
    let settings = load_settings(&cli.project_root, &cli.config, overrides)?;
    let input = GateInput {
        project_root: &cli.project_root,
        settings: &settings,
    };

    let mut stdout = std::io::stdout();
    match cli.cmd {
        Commands::Check { .. } => {
            run_check(input, &ShellInstaller, &mut stdout)?;
        }
        Commands::Write { .. } => {
            run_write(input, &mut stdout)?;
        }
    }

    Ok(())
}
