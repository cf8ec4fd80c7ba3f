//! Fire-and-forget spawning of user-configured shell commands.

use crate::{AppError, AppResult};

use std::{panic::Location, process::Stdio};

use error_location::ErrorLocation;
use tokio::process::Command;
use tracing::{info, instrument};

const SHELL: &str = "sh";

/// Spawn `command_line` through the shell without waiting for it.
///
/// The child is reaped in the background by the runtime. Must be called
/// from within a tokio runtime.
#[track_caller]
#[instrument]
pub fn spawn_command(command_line: &str) -> AppResult<()> {
    spawn_with_shell(SHELL, command_line)
}

#[track_caller]
pub(crate) fn spawn_with_shell(shell: &str, command_line: &str) -> AppResult<()> {
    let command_line = command_line.trim();

    if command_line.is_empty() {
        return Err(AppError::CommandSpawnFailed {
            command: command_line.to_string(),
            reason: "empty command line".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let child = Command::new(shell)
        .arg("-c")
        .arg(command_line)
        .stdin(Stdio::null())
        .spawn()
        .map_err(|e| AppError::CommandSpawnFailed {
            command: command_line.to_string(),
            reason: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

    info!(command = command_line, pid = ?child.id(), "Command spawned");

    Ok(())
}
