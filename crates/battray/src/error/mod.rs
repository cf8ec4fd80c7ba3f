use battray_core::PowerError;

use std::{panic::Location, result::Result as StdResult};

use error_location::ErrorLocation;
use thiserror::Error;

/// Application-level errors for the battray binary.
///
/// All variants include `ErrorLocation` for call-site tracking.
#[derive(Error, Debug)]
pub enum AppError {
    /// Power subsystem error from battray-core.
    #[error("Power error: {source} {location}")]
    Power {
        /// The underlying power error.
        #[source]
        source: PowerError,
        /// Location where this error was created.
        location: ErrorLocation,
    },

    /// Creating or updating the tray icon failed.
    #[error("Tray error: {reason} {location}")]
    TrayError {
        /// Human-readable reason for failure.
        reason: String,
        /// Location where this error was created.
        location: ErrorLocation,
    },

    /// Decoding or building an icon image failed.
    #[error("Icon error: {reason} {location}")]
    IconError {
        /// Human-readable reason for failure.
        reason: String,
        /// Location where this error was created.
        location: ErrorLocation,
    },

    /// Showing a desktop notification failed.
    #[error("Notification failed: {reason} {location}")]
    NotificationError {
        /// Human-readable reason for failure.
        reason: String,
        /// Location where this error was created.
        location: ErrorLocation,
    },

    /// Spawning a user-configured command failed.
    #[error("Cannot spawn command {command:?}: {reason} {location}")]
    CommandSpawnFailed {
        /// The command line that failed.
        command: String,
        /// Human-readable reason for failure.
        reason: String,
        /// Location where this error was created.
        location: ErrorLocation,
    },

    /// Failed to send message through async channel.
    #[error("Channel send failed: {message} {location}")]
    ChannelSendFailed {
        /// Human-readable error message.
        message: String,
        /// Location where this error was created.
        location: ErrorLocation,
    },
}

// Manual From<PowerError> with location tracking.
// Cannot use #[from] because it does not support extra fields.
impl From<PowerError> for AppError {
    #[track_caller]
    fn from(source: PowerError) -> Self {
        AppError::Power {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convenience type alias for Results using `AppError`.
pub type Result<T> = StdResult<T, AppError>;
