use crate::{BatteryState, battery_string, time_string, tooltip_string};

/// WHAT: Every state has its own status line
/// WHY: One match over the state replaces per-state duplicated formatting
#[test]
fn given_each_state_when_formatting_then_expected_text() {
    // Given/When/Then
    let cases = [
        (BatteryState::Missing, "Battery is missing!"),
        (BatteryState::Unknown, "Battery status is unknown!"),
        (BatteryState::Charged, "Battery is charged!"),
        (BatteryState::Charging, "Battery is charging (42%)"),
        (BatteryState::Discharging, "Battery is discharging (42% remaining)"),
        (BatteryState::NotCharging, "Battery is not charging (42% remaining)"),
        (BatteryState::LowLevel, "Battery level is low! (42% remaining)"),
        (BatteryState::CriticalLevel, "Battery level is critical! (42% remaining)"),
    ];

    for (state, expected) in cases {
        assert_eq!(battery_string(state, 42), expected);
    }
}

/// WHAT: Absent time renders nothing
/// WHY: A missing estimate must never show a nonsensical time
#[test]
fn given_no_minutes_when_formatting_time_then_none() {
    // Given/When/Then
    assert_eq!(time_string(None), None);
}

/// WHAT: Minutes-only phrases agree in number
/// WHY: "1 minutes" reads wrong
#[test]
fn given_under_an_hour_when_formatting_time_then_minutes_phrase() {
    // Given/When/Then
    assert_eq!(time_string(Some(0)).as_deref(), Some("0 minutes remaining"));
    assert_eq!(time_string(Some(1)).as_deref(), Some("1 minute remaining"));
    assert_eq!(time_string(Some(45)).as_deref(), Some("45 minutes remaining"));
}

/// WHAT: Hours and minutes phrases agree in number
/// WHY: Long runtimes are easier to read split into hours
#[test]
fn given_over_an_hour_when_formatting_time_then_hours_and_minutes_phrase() {
    // Given/When/Then
    assert_eq!(
        time_string(Some(61)).as_deref(),
        Some("1 hour, 1 minute remaining")
    );
    assert_eq!(
        time_string(Some(60)).as_deref(),
        Some("1 hour, 0 minutes remaining")
    );
    assert_eq!(
        time_string(Some(135)).as_deref(),
        Some("2 hours, 15 minutes remaining")
    );
}

/// WHAT: Tooltip joins status and time on two lines
/// WHY: Without a time only the status is shown
#[test]
fn given_status_and_optional_time_when_building_tooltip_then_joined_by_newline() {
    // Given/When/Then
    assert_eq!(
        tooltip_string("Battery is charging (50%)", Some("48 minutes remaining")),
        "Battery is charging (50%)\n48 minutes remaining"
    );
    assert_eq!(tooltip_string("Battery is charged!", None), "Battery is charged!");
}
