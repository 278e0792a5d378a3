//! Restarting the device service

use std::process::Command;

use crate::error::{Result, UpdateError};

/// Result of the restart attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RestartOutcome {
    Restarted,
    /// Command ran and exited non-zero; `None` when killed by a signal
    Failed(Option<i32>),
    /// Command could not be started
    SpawnFailed(String),
}

impl RestartOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, RestartOutcome::Restarted)
    }
}

/// Run `argv` and wait for it; only the exit status is inspected
///
/// Failures are reported through the outcome, never as an error. An empty
/// `argv` is the only error.
pub fn restart_service(argv: &[String]) -> Result<RestartOutcome> {
    let (program, args) = argv.split_first().ok_or(UpdateError::EmptyCommand)?;
    tracing::info!(command = %argv.join(" "), "restarting service");

    let outcome = match Command::new(program).args(args).status() {
        Ok(status) if status.success() => RestartOutcome::Restarted,
        Ok(status) => RestartOutcome::Failed(status.code()),
        Err(err) => RestartOutcome::SpawnFailed(err.to_string()),
    };

    if !outcome.is_success() {
        tracing::warn!(?outcome, "service restart failed");
    }
    Ok(outcome)
}
