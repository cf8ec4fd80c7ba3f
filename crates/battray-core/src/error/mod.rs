use error_location::ErrorLocation;
use thiserror::Error;

/// Power-management errors with source location tracking.
#[derive(Error, Debug)]
pub enum PowerError {
    /// Neither sysfs nor `/proc/apm` is available on this system.
    #[error("No power management support found {location}")]
    NoPowerSource {
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Reading the power-management interface failed.
    #[error("Failed to read {path:?}: {source} {location}")]
    ReadFailed {
        /// File that could not be read.
        path: std::path::PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The power-management interface returned data we could not understand.
    #[error("Failed to parse power sample: {reason} {location}")]
    ParseFailed {
        /// Description of the malformed data.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

/// Result type alias using [`PowerError`].
pub type Result<T> = std::result::Result<T, PowerError>;
