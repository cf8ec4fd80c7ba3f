use crate::{
    BatteryEngine, BatteryState, CoreResult, PowerError, PowerSample, RawStatus, ThresholdLevels,
    TimeUnit,
};

use std::{
    panic::Location,
    time::{Duration, Instant},
};

use error_location::ErrorLocation;

fn sample(status: RawStatus, percentage: u8) -> CoreResult<PowerSample> {
    Ok(PowerSample {
        status,
        percentage,
        remaining_time: None,
        time_unit: TimeUnit::Minutes,
        charging_flag: false,
    })
}

fn read_failure() -> CoreResult<PowerSample> {
    Err(PowerError::ParseFailed {
        reason: "garbage".to_string(),
        location: ErrorLocation::from(Location::caller()),
    })
}

/// WHAT: Read failure reports Unknown instead of propagating
/// WHY: The poll must still complete and update the UI
#[test]
fn given_read_failure_when_processing_then_unknown_state() {
    // Given: A fresh engine
    let mut engine = BatteryEngine::new(ThresholdLevels::default());

    // When: The sample could not be read
    let report = engine.process(read_failure());

    // Then: Unknown at 0% with no time, announced as a change
    assert_eq!(report.state, BatteryState::Unknown);
    assert_eq!(report.percentage, 0);
    assert_eq!(report.minutes, None);
    assert!(report.state_changed);
    assert!(!report.crossed_low && !report.crossed_critical);
}

/// WHAT: State change is reported once per transition
/// WHY: Info notifications fire only when the visible status changes
#[test]
fn given_repeated_states_when_processing_then_change_reported_once() {
    // Given: A fresh engine
    let t0 = Instant::now();
    let mut engine = BatteryEngine::new_at(ThresholdLevels::default(), t0);

    // When: Charging twice, then discharging, then not charging
    let first = engine.process_at(sample(RawStatus::Charging, 50), t0);
    let second = engine.process_at(sample(RawStatus::Charging, 50), t0);
    let unplugged = engine.process_at(sample(RawStatus::High, 50), t0);
    let not_charging = engine.process_at(sample(RawStatus::NotCharging, 50), t0);

    // Then: Only the first and the unplug are changes
    assert!(first.state_changed);
    assert!(!second.state_changed);
    assert!(unplugged.state_changed);
    assert!(!not_charging.state_changed);
}

/// WHAT: Charged and Missing force the displayed percentage
/// WHY: Charged always shows 100% and Missing shows 0%
#[test]
fn given_charged_and_missing_when_processing_then_percentage_forced() {
    // Given: A fresh engine
    let mut engine = BatteryEngine::new(ThresholdLevels::default());

    // When/Then
    let charged = engine.process(sample(RawStatus::Charging, 100));
    assert_eq!((charged.state, charged.percentage), (BatteryState::Charged, 100));

    let missing = engine.process(sample(RawStatus::NotPresent, 42));
    assert_eq!((missing.state, missing.percentage), (BatteryState::Missing, 0));
}

/// WHAT: Hardware remaining time bypasses the estimator
/// WHY: A reported time is more accurate than a two-point extrapolation
#[test]
fn given_hardware_time_in_seconds_when_discharging_then_rounded_minutes_used() {
    // Given: A discharging sample reporting 5399 seconds
    let mut engine = BatteryEngine::new(ThresholdLevels::default());
    let reported = Ok(PowerSample {
        status: RawStatus::High,
        percentage: 60,
        remaining_time: Some(5399),
        time_unit: TimeUnit::Seconds,
        charging_flag: false,
    });

    // When: Processing it
    let report = engine.process(reported);

    // Then: 89.98 minutes rounds to 90
    assert_eq!(report.minutes, Some(90));
}

/// WHAT: Estimator fills in when charging hardware reports no time
/// WHY: Some drivers never report a charge rate
#[test]
fn given_charging_without_hardware_time_when_percentage_ticks_then_estimate_appears() {
    // Given: Charging at 50%
    let t0 = Instant::now();
    let mut engine = BatteryEngine::new_at(ThresholdLevels::default(), t0);
    let seeded = engine.process_at(sample(RawStatus::Charging, 50), t0);

    // When: 120 seconds later the battery reads 52%
    let ticked = engine.process_at(
        sample(RawStatus::Charging, 52),
        t0 + Duration::from_secs(120),
    );

    // Then: No estimate at first, then 48 / (2/120) to full
    assert_eq!(seeded.minutes, None);
    assert_eq!(ticked.minutes, Some(2880));
}

/// WHAT: A new charging session starts from a clean memo
/// WHY: The previous session's estimate would be stale
#[test]
fn given_new_charging_session_when_percentage_unchanged_then_no_stale_estimate() {
    // Given: A charging session that produced an estimate
    let t0 = Instant::now();
    let mut engine = BatteryEngine::new_at(ThresholdLevels::default(), t0);
    engine.process_at(sample(RawStatus::Charging, 50), t0);
    let estimated = engine.process_at(
        sample(RawStatus::Charging, 52),
        t0 + Duration::from_secs(120),
    );
    assert_eq!(estimated.minutes, Some(2880));

    // When: Unplugged, then plugged in again at the same level
    engine.process_at(sample(RawStatus::High, 52), t0 + Duration::from_secs(130));
    let replugged = engine.process_at(
        sample(RawStatus::Charging, 52),
        t0 + Duration::from_secs(140),
    );

    // Then: No estimate carried over
    assert_eq!(replugged.minutes, None);
}

/// WHAT: Discharging without hardware time falls back to the estimator
/// WHY: APM drivers frequently report -1 for the remaining time
#[test]
fn given_discharging_without_hardware_time_when_percentage_ticks_then_estimate_to_empty() {
    // Given: Discharging at 80%
    let t0 = Instant::now();
    let mut engine = BatteryEngine::new_at(ThresholdLevels::default(), t0);
    engine.process_at(sample(RawStatus::High, 80), t0);

    // When: 60 seconds later at 70%
    let report = engine.process_at(sample(RawStatus::High, 70), t0 + Duration::from_secs(60));

    // Then: 420 to empty
    assert_eq!(report.minutes, Some(420));
}

/// WHAT: Threshold crossings surface in the report with a session id
/// WHY: The poll driver schedules commands and correlates logs from it
#[test]
fn given_discharge_below_levels_when_processing_then_crossings_reported_once() {
    // Given: Levels 20/5
    let mut engine = BatteryEngine::new(ThresholdLevels {
        low: 20,
        critical: 5,
    });

    // When: Draining through both thresholds
    let above = engine.process(sample(RawStatus::High, 30));
    let low = engine.process(sample(RawStatus::Low, 19));
    let still_low = engine.process(sample(RawStatus::Low, 18));
    let critical = engine.process(sample(RawStatus::Critical, 4));

    // Then: Each crossing is reported on exactly one poll
    assert!(!above.crossed_low);
    assert!(low.crossed_low && !low.crossed_critical);
    assert!(!still_low.crossed_low);
    assert!(critical.crossed_critical && !critical.crossed_low);

    assert!(above.session_id.is_some());
    assert_eq!(above.session_id, critical.session_id);
}

/// WHAT: Charging never reports a session id or crossings
/// WHY: Thresholds only apply while discharging
#[test]
fn given_charging_below_levels_when_processing_then_no_session() {
    // Given: A fresh engine
    let mut engine = BatteryEngine::new(ThresholdLevels::default());

    // When: Charging at 2%
    let report = engine.process(sample(RawStatus::Charging, 2));

    // Then: Nothing fires
    assert_eq!(report.session_id, None);
    assert!(!report.crossed_low && !report.crossed_critical);
}

/// WHAT: Re-check before a deferred command
/// WHY: The command is skipped once the battery stops discharging
#[test]
fn given_deferred_recheck_when_sampling_then_only_discharging_continues() {
    // Given/When/Then
    assert!(BatteryEngine::still_discharging(&sample(RawStatus::High, 4)));
    assert!(BatteryEngine::still_discharging(&sample(RawStatus::NotCharging, 4)));
    assert!(!BatteryEngine::still_discharging(&sample(RawStatus::Charging, 4)));
    assert!(!BatteryEngine::still_discharging(&sample(RawStatus::NotPresent, 0)));
    assert!(BatteryEngine::still_discharging(&read_failure()));
}

/// WHAT: Engines are independent
/// WHY: No state is shared through statics
#[test]
fn given_two_engines_when_processing_then_state_not_shared() {
    // Given: Two engines
    let mut first = BatteryEngine::new(ThresholdLevels::default());
    let mut second = BatteryEngine::new(ThresholdLevels::default());

    // When: Both see the same low discharge
    let crossed = first.process(sample(RawStatus::High, 10));
    let other = second.process(sample(RawStatus::High, 10));

    // Then: Both fire independently
    assert!(crossed.crossed_low);
    assert!(other.crossed_low);
    assert_ne!(crossed.session_id, other.session_id);
}

/// WHAT: A deferred command runs when its session is still current
/// WHY: The battery kept draining through the delay, so the command is wanted
#[test]
fn given_same_session_still_discharging_when_command_due_then_runs() {
    // Given: A session that crossed critical
    let mut engine = BatteryEngine::new(ThresholdLevels::default());
    let crossed = engine.process(sample(RawStatus::Critical, 4));
    assert!(crossed.crossed_critical);

    // When: The delay elapses with the battery still discharging
    let due = engine.level_command_due(crossed.session_id, &sample(RawStatus::Critical, 3));

    // Then: The command runs
    assert_eq!(engine.session_id(), crossed.session_id);
    assert!(due);
}

/// WHAT: A deferred command from an ended session is dropped
/// WHY: Unplug, replug and unplug within the delay starts a new session
/// whose own crossing schedules the command again; running both would
/// execute it twice
#[test]
fn given_new_session_started_during_delay_when_old_command_due_then_skipped() {
    // Given: Session A crosses critical, then a brief charge starts session B
    let mut engine = BatteryEngine::new(ThresholdLevels::default());
    let first = engine.process(sample(RawStatus::Critical, 4));
    engine.process(sample(RawStatus::Charging, 4));
    let second = engine.process(sample(RawStatus::Critical, 4));
    assert!(second.crossed_critical);
    assert_ne!(first.session_id, second.session_id);

    // When: Both delays elapse while session B is discharging
    let still_discharging = sample(RawStatus::Critical, 3);
    let first_due = engine.level_command_due(first.session_id, &still_discharging);
    let second_due = engine.level_command_due(second.session_id, &still_discharging);

    // Then: Only session B's command runs
    assert!(!first_due);
    assert!(second_due);
}

/// WHAT: A deferred command is dropped once the battery charges
/// WHY: Plugging in during the delay cancels the command
#[test]
fn given_charging_at_recheck_when_command_due_then_skipped() {
    // Given: A session that crossed low
    let mut engine = BatteryEngine::new(ThresholdLevels::default());
    let crossed = engine.process(sample(RawStatus::Low, 15));

    // When: The re-check sample is charging
    let due = engine.level_command_due(crossed.session_id, &sample(RawStatus::Charging, 15));

    // Then
    assert!(!due);
}

/// WHAT: Unplugging is reported as a new discharging session
/// WHY: The poll driver announces every (re)entered discharging session
#[test]
fn given_unplugged_when_processing_then_entered_session_reported_once() {
    // Given: A charging battery
    let mut engine = BatteryEngine::new(ThresholdLevels::default());
    let charging = engine.process(sample(RawStatus::Charging, 70));

    // When: Unplugged for two polls
    let unplugged = engine.process(sample(RawStatus::High, 70));
    let draining = engine.process(sample(RawStatus::High, 69));

    // Then: Only the first discharging poll starts a session
    assert!(!charging.entered_session);
    assert!(unplugged.entered_session);
    assert!(!draining.entered_session);
}

/// WHAT: Unplugging starts the discharge estimate from a clean memo
/// WHY: A time to full must never be shown as a time to empty
#[test]
fn given_charging_estimate_when_unplugged_then_no_carried_over_estimate() {
    // Given: A charging session with an estimate
    let t0 = Instant::now();
    let mut engine = BatteryEngine::new_at(ThresholdLevels::default(), t0);
    engine.process_at(sample(RawStatus::Charging, 50), t0);
    let charging = engine.process_at(
        sample(RawStatus::Charging, 52),
        t0 + Duration::from_secs(120),
    );
    assert_eq!(charging.minutes, Some(2880));

    // When: Unplugged at the same percentage
    let unplugged = engine.process_at(sample(RawStatus::High, 52), t0 + Duration::from_secs(130));

    // Then: No estimate until the percentage moves
    assert_eq!(unplugged.minutes, None);
}
