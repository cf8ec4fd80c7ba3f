use crate::{BatteryState, PowerSample, RawStatus, TimeUnit, classify};

fn sample(status: RawStatus, percentage: u8, charging_flag: bool) -> PowerSample {
    PowerSample {
        status,
        percentage,
        remaining_time: None,
        time_unit: TimeUnit::Minutes,
        charging_flag,
    }
}

/// WHAT: Hardware level codes all classify as discharging
/// WHY: High/Low/Critical are hardware levels, not the configured thresholds
#[test]
fn given_hardware_level_codes_when_classifying_then_discharging_regardless_of_percentage() {
    // Given: Every hardware level code at a spread of percentages
    let codes = [RawStatus::High, RawStatus::Low, RawStatus::Critical];

    for code in codes {
        for percentage in [0, 1, 5, 20, 50, 99, 100] {
            // When: Classifying the sample
            let state = classify(&sample(code, percentage, false));

            // Then: Always discharging
            assert_eq!(state, BatteryState::Discharging, "{:?} at {}%", code, percentage);
        }
    }
}

/// WHAT: Charging code splits into Charged and Charging on 100%
/// WHY: A full battery on AC should not claim to be charging
#[test]
fn given_charging_code_when_classifying_then_charged_only_at_full() {
    // Given/When: Charging code at 100% and below
    let full = classify(&sample(RawStatus::Charging, 100, false));
    let partial = classify(&sample(RawStatus::Charging, 99, false));

    // Then: Charged at 100, charging otherwise
    assert_eq!(full, BatteryState::Charged);
    assert_eq!(partial, BatteryState::Charging);
}

/// WHAT: Charging flag overrides the status code
/// WHY: Some hardware reports charging only through the flag bit
#[test]
fn given_charging_flag_when_classifying_then_flag_wins_over_code() {
    // Given: Samples whose code says otherwise but the flag is set
    let discharging_code = sample(RawStatus::High, 60, true);
    let missing_code = sample(RawStatus::NotPresent, 100, true);
    let unknown_code = sample(RawStatus::Unrecognized, 30, true);

    // When/Then: Flag forces Charging or Charged
    assert_eq!(classify(&discharging_code), BatteryState::Charging);
    assert_eq!(classify(&missing_code), BatteryState::Charged);
    assert_eq!(classify(&unknown_code), BatteryState::Charging);
}

/// WHAT: Remaining codes map to Missing, Unknown and NotCharging
/// WHY: Every raw code must produce exactly one state
#[test]
fn given_other_codes_when_classifying_then_missing_unknown_or_not_charging() {
    // Given/When/Then
    assert_eq!(
        classify(&sample(RawStatus::NotPresent, 0, false)),
        BatteryState::Missing
    );
    assert_eq!(
        classify(&sample(RawStatus::Unrecognized, 50, false)),
        BatteryState::Unknown
    );
    assert_eq!(
        classify(&sample(RawStatus::NotCharging, 80, false)),
        BatteryState::NotCharging
    );
}

/// WHAT: APM status bytes map onto raw codes
/// WHY: Unlisted bytes (e.g. 0xff) must not be mistaken for a known status
#[test]
fn given_apm_status_bytes_when_mapping_then_known_and_unrecognized_codes() {
    // Given/When/Then
    assert_eq!(RawStatus::from_apm_code(0x00), RawStatus::High);
    assert_eq!(RawStatus::from_apm_code(0x01), RawStatus::Low);
    assert_eq!(RawStatus::from_apm_code(0x02), RawStatus::Critical);
    assert_eq!(RawStatus::from_apm_code(0x03), RawStatus::Charging);
    assert_eq!(RawStatus::from_apm_code(0x04), RawStatus::NotPresent);
    assert_eq!(RawStatus::from_apm_code(0xff), RawStatus::Unrecognized);
}

/// WHAT: Discharging and NotCharging count as the same visible status
/// WHY: Switching between them must not re-announce the discharging session
#[test]
fn given_discharging_family_when_comparing_then_not_a_change() {
    // Given/When/Then
    assert!(!BatteryState::Discharging.differs_from(BatteryState::NotCharging));
    assert!(!BatteryState::NotCharging.differs_from(BatteryState::Discharging));
    assert!(!BatteryState::Charging.differs_from(BatteryState::Charging));
    assert!(BatteryState::Charging.differs_from(BatteryState::Charged));
    assert!(BatteryState::Discharging.differs_from(BatteryState::Charging));
}
