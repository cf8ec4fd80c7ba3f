use crate::power::{PowerSample, RawStatus};

/// Semantic battery state derived from a [`PowerSample`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BatteryState {
    /// No battery is present.
    Missing,
    /// The status could not be determined.
    Unknown,
    /// Charging and at 100%.
    Charged,
    /// Charging below 100%.
    Charging,
    /// Running on battery.
    Discharging,
    /// On external power but not charging.
    NotCharging,
    /// Discharging at or below the low threshold. Never produced by [`classify`].
    LowLevel,
    /// Discharging at or below the critical threshold. Never produced by [`classify`].
    CriticalLevel,
}

impl BatteryState {
    /// Whether this state belongs to a discharging session.
    pub fn is_discharging(self) -> bool {
        matches!(
            self,
            BatteryState::Discharging
                | BatteryState::NotCharging
                | BatteryState::LowLevel
                | BatteryState::CriticalLevel
        )
    }

    /// Whether moving from `self` to `next` is a visible change of status.
    ///
    /// Any two discharging states count as the same status.
    pub fn differs_from(self, next: BatteryState) -> bool {
        if self.is_discharging() && next.is_discharging() {
            return false;
        }
        self != next
    }
}

/// Classify a raw sample.
pub fn classify(sample: &PowerSample) -> BatteryState {
    let charging = || {
        if sample.percentage == 100 {
            BatteryState::Charged
        } else {
            BatteryState::Charging
        }
    };

    // Some hardware reports charging only through the flag.
    if sample.charging_flag {
        return charging();
    }

    match sample.status {
        RawStatus::High | RawStatus::Low | RawStatus::Critical => BatteryState::Discharging,
        RawStatus::Charging => charging(),
        RawStatus::NotCharging => BatteryState::NotCharging,
        RawStatus::NotPresent => BatteryState::Missing,
        RawStatus::Unrecognized => BatteryState::Unknown,
    }
}
