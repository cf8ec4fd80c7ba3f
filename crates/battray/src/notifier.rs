//! Desktop notifications, one replaceable popup per stream.

use crate::{AppError, AppResult};

use std::panic::Location;

use error_location::ErrorLocation;
use notify_rust::{Notification, NotificationHandle, Timeout, Urgency};
use tracing::{debug, instrument};

const APP_NAME: &str = "battray";

/// Independent notification slots. A new notification on a stream
/// replaces the one already shown there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationStream {
    /// Status changes.
    Info,
    /// Low level reached.
    LowLevel,
    /// Critical level reached.
    CriticalLevel,
    /// The low level command could not be spawned.
    LowCommandFailure,
    /// The critical level command could not be spawned.
    CriticalCommandFailure,
    /// The left click command could not be spawned.
    ClickCommandFailure,
}

/// A notification to show.
#[derive(Debug, Clone)]
pub struct NotificationRequest {
    /// Slot to show it in.
    pub stream: NotificationStream,
    /// First line.
    pub summary: String,
    /// Optional second line.
    pub body: Option<String>,
    /// How long it stays visible.
    pub timeout: Timeout,
    /// Urgency hint for the notification server.
    pub urgency: Urgency,
}

/// Shows notifications and keeps the handle of the last one per stream.
pub struct Notifier {
    hidden: bool,
    info: Option<NotificationHandle>,
    low_level: Option<NotificationHandle>,
    critical_level: Option<NotificationHandle>,
    low_command_failure: Option<NotificationHandle>,
    critical_command_failure: Option<NotificationHandle>,
    click_command_failure: Option<NotificationHandle>,
}

impl Notifier {
    /// Create a notifier; when `hidden` nothing is ever shown.
    pub fn new(hidden: bool) -> Self {
        Self {
            hidden,
            info: None,
            low_level: None,
            critical_level: None,
            low_command_failure: None,
            critical_command_failure: None,
            click_command_failure: None,
        }
    }

    /// Show `request`, replacing the previous notification of its stream.
    #[track_caller]
    #[instrument(skip(self, request), fields(stream = ?request.stream, summary = %request.summary))]
    pub fn show(&mut self, request: &NotificationRequest) -> AppResult<()> {
        if self.hidden {
            debug!("Notifications hidden");
            return Ok(());
        }

        let body = request.body.as_deref().unwrap_or_default();
        let slot = self.slot(request.stream);

        if let Some(handle) = slot.as_mut() {
            handle
                .summary(&request.summary)
                .body(body)
                .timeout(request.timeout)
                .urgency(request.urgency);
            handle.update();
            return Ok(());
        }

        let handle = Notification::new()
            .appname(APP_NAME)
            .summary(&request.summary)
            .body(body)
            .timeout(request.timeout)
            .urgency(request.urgency)
            .show()
            .map_err(|e| AppError::NotificationError {
                reason: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;
        *slot = Some(handle);

        Ok(())
    }

    fn slot(&mut self, stream: NotificationStream) -> &mut Option<NotificationHandle> {
        match stream {
            NotificationStream::Info => &mut self.info,
            NotificationStream::LowLevel => &mut self.low_level,
            NotificationStream::CriticalLevel => &mut self.critical_level,
            NotificationStream::LowCommandFailure => &mut self.low_command_failure,
            NotificationStream::CriticalCommandFailure => &mut self.critical_command_failure,
            NotificationStream::ClickCommandFailure => &mut self.click_command_failure,
        }
    }
}
