#[allow(clippy::module_inception)]
mod config;

pub(crate) use config::Config;

/// Default poll interval in seconds.
pub(crate) const DEFAULT_UPDATE_INTERVAL_SECS: u64 = 5;
