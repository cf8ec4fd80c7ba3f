//! Human-readable status strings.

use crate::engine::BatteryState;

use tracing::debug;

/// Describe a battery state.
pub fn battery_string(state: BatteryState, percentage: u8) -> String {
    let text = match state {
        BatteryState::Missing => "Battery is missing!".to_string(),
        BatteryState::Unknown => "Battery status is unknown!".to_string(),
        BatteryState::Charged => "Battery is charged!".to_string(),
        BatteryState::Charging => format!("Battery is charging ({}%)", percentage),
        BatteryState::Discharging => {
            format!("Battery is discharging ({}% remaining)", percentage)
        }
        BatteryState::NotCharging => {
            format!("Battery is not charging ({}% remaining)", percentage)
        }
        BatteryState::LowLevel => format!("Battery level is low! ({}% remaining)", percentage),
        BatteryState::CriticalLevel => {
            format!("Battery level is critical! ({}% remaining)", percentage)
        }
    };

    debug!(battery_string = %text);

    text
}

/// Describe a remaining time, or nothing when it is unknown.
pub fn time_string(minutes: Option<u32>) -> Option<String> {
    let minutes = minutes?;
    let hours = minutes / 60;
    let minutes = minutes % 60;

    let text = if hours > 0 {
        format!(
            "{} {}, {} remaining",
            hours,
            plural(hours, "hour", "hours"),
            count_phrase(minutes, "minute", "minutes")
        )
    } else {
        format!("{} remaining", count_phrase(minutes, "minute", "minutes"))
    };

    debug!(time_string = %text);

    Some(text)
}

/// Join the status line and the optional time line.
pub fn tooltip_string(battery: &str, time: Option<&str>) -> String {
    match time {
        Some(time) => format!("{}\n{}", battery, time),
        None => battery.to_string(),
    }
}

fn count_phrase(count: u32, singular: &str, plural_form: &str) -> String {
    format!("{} {}", count, plural(count, singular, plural_form))
}

fn plural<'a>(count: u32, singular: &'a str, plural: &'a str) -> &'a str {
    if count == 1 { singular } else { plural }
}
