//! Icon-name tokens for the three supported icon themes.

use crate::engine::BatteryState;

use std::fmt;

use tracing::debug;

/// Icon naming scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconTheme {
    /// `battery-good-charging` style names.
    Standard,
    /// `notification-battery-060-plugged` style names.
    Notification,
    /// `gpm-primary-040-charging` style names.
    Gpm,
}

impl IconTheme {
    /// All themes, in auto-detection order.
    pub const ALL: [IconTheme; 3] = [IconTheme::Standard, IconTheme::Notification, IconTheme::Gpm];

    /// Name used on the command line.
    pub fn name(self) -> &'static str {
        match self {
            IconTheme::Standard => "standard",
            IconTheme::Notification => "notification",
            IconTheme::Gpm => "gpm",
        }
    }

    /// Look up a theme by its command-line name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|theme| theme.name() == name)
    }

    /// Icon whose presence means the theme is installed.
    pub fn marker_icon(self) -> &'static str {
        match self {
            IconTheme::Standard => "battery-full",
            IconTheme::Notification => "notification-battery-100",
            IconTheme::Gpm => "gpm-primary-100",
        }
    }

    fn prefix(self) -> &'static str {
        match self {
            IconTheme::Standard => "battery",
            IconTheme::Notification => "notification-battery",
            IconTheme::Gpm => "gpm-primary",
        }
    }
}

impl fmt::Display for IconTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What an icon depicts, independent of the theme's naming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconKind {
    /// No battery or unknown status.
    Missing,
    /// Running on battery (or not charging).
    Discharging,
    /// Charging.
    Charging,
    /// Full and on AC.
    Charged,
}

/// Resolved icon name plus what it depicts.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IconName {
    token: String,
    kind: IconKind,
    fill: u8,
}

impl IconName {
    /// Theme-specific icon file stem, e.g. `battery-low-charging`.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// What the icon depicts.
    pub fn kind(&self) -> IconKind {
        self.kind
    }

    /// Upper bound of the percentage bucket (20, 40, 60, 80 or 100).
    pub fn fill(&self) -> u8 {
        self.fill
    }
}

impl fmt::Display for IconName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.token)
    }
}

/// Pick the icon for a state and percentage.
pub fn icon_name(state: BatteryState, percentage: u8, theme: IconTheme) -> IconName {
    let kind = match state {
        BatteryState::Missing | BatteryState::Unknown => IconKind::Missing,
        BatteryState::Charging => IconKind::Charging,
        BatteryState::Charged => IconKind::Charged,
        BatteryState::Discharging
        | BatteryState::NotCharging
        | BatteryState::LowLevel
        | BatteryState::CriticalLevel => IconKind::Discharging,
    };

    let fill = match percentage {
        0..=20 => 20,
        21..=40 => 40,
        41..=60 => 60,
        61..=80 => 80,
        _ => 100,
    };

    let mut token = theme.prefix().to_string();

    if kind == IconKind::Missing {
        token.push_str(match theme {
            IconTheme::Notification => "-empty",
            IconTheme::Standard | IconTheme::Gpm => "-missing",
        });
    } else {
        match theme {
            IconTheme::Notification => {
                token.push_str(&format!("-{:03}", fill));
                if matches!(kind, IconKind::Charging | IconKind::Charged) {
                    token.push_str("-plugged");
                }
            }
            IconTheme::Gpm => {
                if kind == IconKind::Charged {
                    token.push_str("-charged");
                } else {
                    token.push_str(&format!("-{:03}", fill));
                }
                if kind == IconKind::Charging {
                    token.push_str("-charging");
                }
            }
            IconTheme::Standard => {
                token.push_str(match fill {
                    20 => "-caution",
                    40 => "-low",
                    60 | 80 => "-good",
                    _ => "-full",
                });
                match kind {
                    IconKind::Charging => token.push_str("-charging"),
                    IconKind::Charged => token.push_str("-charged"),
                    IconKind::Missing | IconKind::Discharging => {}
                }
            }
        }
    }

    debug!(icon_name = %token);

    IconName { token, kind, fill }
}
