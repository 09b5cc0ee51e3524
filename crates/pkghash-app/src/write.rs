//! The `write` use case: commit the current fingerprint as the known-good state.

use crate::GateInput;
use crate::error::GateError;
use crate::status::write_message;
use anyhow::Context;
use pkghash_types::Fingerprint;
use std::io::Write;

#[derive(Clone, Debug)]
pub struct WriteOutput {
    pub fingerprint: Fingerprint,
}

pub fn run_write(input: GateInput<'_>, out: &mut dyn Write) -> Result<WriteOutput, GateError> {
    let snapshot = pkghash_repo::compute_fingerprint(input.project_root, input.settings)
        .map_err(GateError::io)?;

    pkghash_repo::write_record(
        input.project_root,
        &input.settings.record_file,
        &snapshot.fingerprint,
    )
    .context("write fingerprint record")
    .map_err(GateError::io)?;

    tracing::info!(
        record = %input.settings.record_file,
        fingerprint = %snapshot.fingerprint,
        "fingerprint record updated"
    );

    writeln!(out, "{}", write_message(&input.settings.record_file))
        .context("write status")
        .map_err(GateError::io)?;

    Ok(WriteOutput {
        fingerprint: snapshot.fingerprint,
    })
}
