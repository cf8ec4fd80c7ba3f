//! What one poll looks like to the user: tray contents and notifications.

use crate::{NotificationRequest, NotificationStream, TrayUpdate};

use battray_core::{
    BatteryState, IconTheme, PollReport, battery_string, icon_name, time_string, tooltip_string,
};

use notify_rust::{Timeout, Urgency};

/// Tray update plus the notifications raised by one poll.
#[derive(Debug, Clone)]
pub struct Presentation {
    /// New tray icon and tooltip.
    pub tray: TrayUpdate,
    /// Notifications to show, in order.
    pub notifications: Vec<NotificationRequest>,
}

impl Presentation {
    /// Build the presentation of `report`.
    ///
    /// A threshold crossing replaces the tooltip's status line with the
    /// low or critical wording for this poll only.
    pub fn from_report(report: &PollReport, theme: IconTheme) -> Self {
        let battery = battery_string(report.state, report.percentage);
        let time = time_string(report.minutes);

        let mut notifications = Vec::new();
        let mut tooltip_battery = battery.clone();

        // Entering a discharging session is always announced.
        if report.state_changed || report.entered_session {
            let timeout = match report.state {
                BatteryState::Missing => Timeout::Never,
                _ => Timeout::Default,
            };

            notifications.push(NotificationRequest {
                stream: NotificationStream::Info,
                summary: battery,
                body: time.clone(),
                timeout,
                urgency: Urgency::Normal,
            });
        }

        if report.crossed_low {
            tooltip_battery = battery_string(BatteryState::LowLevel, report.percentage);

            notifications.push(NotificationRequest {
                stream: NotificationStream::LowLevel,
                summary: tooltip_battery.clone(),
                body: time.clone(),
                timeout: Timeout::Never,
                urgency: Urgency::Normal,
            });
        }

        if report.crossed_critical {
            tooltip_battery = battery_string(BatteryState::CriticalLevel, report.percentage);

            notifications.push(NotificationRequest {
                stream: NotificationStream::CriticalLevel,
                summary: tooltip_battery.clone(),
                body: time.clone(),
                timeout: Timeout::Never,
                urgency: Urgency::Critical,
            });
        }

        let tray = TrayUpdate {
            icon: icon_name(report.state, report.percentage, theme),
            tooltip: tooltip_string(&tooltip_battery, time.as_deref()),
        };

        Self {
            tray,
            notifications,
        }
    }
}
