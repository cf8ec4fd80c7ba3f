/// Raw battery status code as reported by the power-management interface.
///
/// `High`, `Low` and `Critical` are the hardware's own level codes and all
/// mean the battery is discharging. They are unrelated to the configurable
/// low/critical thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawStatus {
    /// Discharging, hardware reports a high level.
    High,
    /// Discharging, hardware reports a low level.
    Low,
    /// Discharging, hardware reports a critical level.
    Critical,
    /// Battery is charging (or full while on AC).
    Charging,
    /// External power is connected but the battery is not charging.
    NotCharging,
    /// The selected battery is not present.
    NotPresent,
    /// Any code we do not recognize.
    Unrecognized,
}

impl RawStatus {
    /// Map an APM battery status byte to a raw status.
    pub fn from_apm_code(code: u8) -> Self {
        match code {
            0x00 => RawStatus::High,
            0x01 => RawStatus::Low,
            0x02 => RawStatus::Critical,
            0x03 => RawStatus::Charging,
            0x04 => RawStatus::NotPresent,
            _ => RawStatus::Unrecognized,
        }
    }
}

/// Unit of the hardware-reported remaining time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    /// Remaining time is expressed in minutes.
    Minutes,
    /// Remaining time is expressed in seconds.
    Seconds,
}

/// One reading of the power-management interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PowerSample {
    /// Raw status code.
    pub status: RawStatus,
    /// Charge level in percent, clamped to 0..=100.
    pub percentage: u8,
    /// Remaining time reported by the hardware, `None` when unavailable.
    pub remaining_time: Option<u32>,
    /// Unit of `remaining_time`.
    pub time_unit: TimeUnit,
    /// Separate "charging" flag some hardware sets instead of the status code.
    pub charging_flag: bool,
}

impl PowerSample {
    /// A sample describing an absent battery.
    pub fn not_present() -> Self {
        Self {
            status: RawStatus::NotPresent,
            percentage: 0,
            remaining_time: None,
            time_unit: TimeUnit::Minutes,
            charging_flag: false,
        }
    }

    /// Hardware remaining time in whole minutes.
    ///
    /// Seconds are rounded to the nearest minute.
    pub fn remaining_minutes(&self) -> Option<u32> {
        self.remaining_time.map(|time| match self.time_unit {
            TimeUnit::Minutes => time,
            TimeUnit::Seconds => time.saturating_add(30) / 60,
        })
    }
}
