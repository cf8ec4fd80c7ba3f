use crate::NotificationStream;

use std::time::Duration;

/// Threshold whose configured command may be spawned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelCommand {
    /// Low battery level command.
    Low,
    /// Critical battery level command.
    Critical,
}

impl LevelCommand {
    /// Pause between the crossing and the re-check before spawning.
    pub fn delay(self) -> Duration {
        match self {
            LevelCommand::Low => Duration::from_secs(5),
            LevelCommand::Critical => Duration::from_secs(30),
        }
    }

    /// Name used in log messages.
    pub fn label(self) -> &'static str {
        match self {
            LevelCommand::Low => "low",
            LevelCommand::Critical => "critical",
        }
    }

    /// Notification summary shown when the command cannot be spawned.
    pub fn failure_summary(self) -> &'static str {
        match self {
            LevelCommand::Low => "Cannot spawn low battery level command!",
            LevelCommand::Critical => "Cannot spawn critical battery level command!",
        }
    }

    /// Notification slot for spawn failures of this command.
    pub fn failure_stream(self) -> NotificationStream {
        match self {
            LevelCommand::Low => NotificationStream::LowCommandFailure,
            LevelCommand::Critical => NotificationStream::CriticalCommandFailure,
        }
    }
}
