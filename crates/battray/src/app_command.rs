use crate::LevelCommand;

use uuid::Uuid;

/// Commands delivered to the poll driver.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// A threshold command's debounce delay has elapsed.
    LevelCommandDue {
        /// Which threshold was crossed.
        level: LevelCommand,
        /// Discharging session the crossing belonged to.
        session_id: Option<Uuid>,
    },
    /// Request application shutdown.
    Shutdown,
}
