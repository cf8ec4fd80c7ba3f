//! Runtime configuration for battray.
//!
//! Built once from the command line and never written anywhere. Invalid
//! values are corrected to their defaults with a warning; nothing here is
//! fatal.

use crate::{Cli, IconLocator, LevelCommand, config::DEFAULT_UPDATE_INTERVAL_SECS};

use std::time::Duration;

use battray_core::{DEFAULT_CRITICAL_LEVEL, DEFAULT_LOW_LEVEL, IconTheme, ThresholdLevels};
use tracing::{info, instrument, warn};

/// Immutable settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Time between two polls.
    pub update_interval: Duration,
    /// Low and critical thresholds, with `critical <= low`.
    pub levels: ThresholdLevels,
    /// Icon naming scheme.
    pub icon_theme: IconTheme,
    /// Command spawned on left click.
    pub command_left_click: Option<String>,
    /// Command spawned when the low level is reached.
    pub command_low_level: Option<String>,
    /// Command spawned when the critical level is reached.
    pub command_critical_level: Option<String>,
    /// Suppress desktop notifications.
    pub hide_notification: bool,
}

impl Config {
    /// Build and normalize the configuration from parsed arguments.
    #[instrument(skip(cli, locator))]
    pub fn from_cli(cli: &Cli, locator: &IconLocator) -> Self {
        let config = Self {
            update_interval: Self::normalize_update_interval(cli.update_interval),
            levels: Self::normalize_levels(cli.low_level, cli.critical_level),
            icon_theme: Self::resolve_icon_theme(cli.icon_type.as_deref(), locator),
            command_left_click: non_empty(cli.command_left_click.as_deref()),
            command_low_level: non_empty(cli.command_low_level.as_deref()),
            command_critical_level: non_empty(cli.command_critical_level.as_deref()),
            hide_notification: cli.hide_notification,
        };

        info!(
            update_interval_secs = config.update_interval.as_secs(),
            low_level = config.levels.low,
            critical_level = config.levels.critical,
            icon_theme = %config.icon_theme,
            "Configuration resolved"
        );

        config
    }

    /// Command configured for a threshold, if any.
    pub fn command_for(&self, level: LevelCommand) -> Option<&str> {
        match level {
            LevelCommand::Low => self.command_low_level.as_deref(),
            LevelCommand::Critical => self.command_critical_level.as_deref(),
        }
    }

    /// Poll interval; non-positive values fall back to the default.
    pub(crate) fn normalize_update_interval(requested: Option<i64>) -> Duration {
        let default = Duration::from_secs(DEFAULT_UPDATE_INTERVAL_SECS);

        match requested {
            None => default,
            Some(secs) => match u64::try_from(secs) {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    warn!(
                        requested = secs,
                        default_secs = DEFAULT_UPDATE_INTERVAL_SECS,
                        "Invalid update interval! It has been reset to default"
                    );
                    default
                }
            },
        }
    }

    /// Threshold levels; out-of-range or inverted values fall back to the defaults.
    pub(crate) fn normalize_levels(low: Option<i64>, critical: Option<i64>) -> ThresholdLevels {
        let mut low = percent_or_default(low, DEFAULT_LOW_LEVEL, "low");
        let mut critical = percent_or_default(critical, DEFAULT_CRITICAL_LEVEL, "critical");

        if critical > low {
            warn!(
                low,
                critical,
                "Critical level is higher than low level! They have been reset to default"
            );
            low = DEFAULT_LOW_LEVEL;
            critical = DEFAULT_CRITICAL_LEVEL;
        }

        ThresholdLevels { low, critical }
    }

    /// Requested theme if installed, otherwise the first installed theme.
    ///
    /// Falls back to [`IconTheme::Standard`] drawn from built-in glyphs
    /// when no theme is installed.
    pub(crate) fn resolve_icon_theme(requested: Option<&str>, locator: &IconLocator) -> IconTheme {
        if let Some(name) = requested {
            match IconTheme::from_name(name) {
                Some(theme) if locator.has_theme(theme) => return theme,
                _ => warn!(icon_type = name, "Unknown icon type"),
            }
        }

        IconTheme::ALL
            .into_iter()
            .find(|theme| locator.has_theme(*theme))
            .unwrap_or_else(|| {
                warn!("No icon type found! Using built-in icons");
                IconTheme::Standard
            })
    }
}

fn percent_or_default(requested: Option<i64>, default: u8, name: &str) -> u8 {
    let Some(requested) = requested else {
        return default;
    };

    match u8::try_from(requested) {
        Ok(percent) if percent <= 100 => percent,
        _ => {
            warn!(
                level = name,
                requested,
                default,
                "Invalid {} level! It has been reset to default",
                name
            );
            default
        }
    }
}

fn non_empty(command: Option<&str>) -> Option<String> {
    command
        .map(str::trim)
        .filter(|command| !command.is_empty())
        .map(str::to_string)
}
