//! Linux sysfs reader for `/sys/class/power_supply`.

use crate::{
    CoreResult, PowerError,
    power::{PowerSample, PowerSource, RawStatus, TimeUnit},
};

use std::{
    fs,
    panic::Location,
    path::{Path, PathBuf},
};

use error_location::ErrorLocation;
use tracing::{debug, info, instrument, warn};

const POWER_SUPPLY_PATH: &str = "/sys/class/power_supply";

/// Reads samples from the first battery found under `/sys/class/power_supply`.
#[derive(Debug, Clone)]
pub struct SysfsReader {
    battery_path: Option<PathBuf>,
}

impl SysfsReader {
    /// Whether the kernel exposes the power_supply class.
    pub fn is_supported() -> bool {
        Path::new(POWER_SUPPLY_PATH).exists()
    }

    /// Scan `/sys/class/power_supply` for a battery.
    pub fn discover() -> Self {
        Self::discover_in(POWER_SUPPLY_PATH)
    }

    /// Scan a custom power_supply directory for a battery.
    ///
    /// Only the first supply whose `type` is `Battery` is used.
    #[instrument(skip(base), fields(base = ?base.as_ref()))]
    pub fn discover_in<P: AsRef<Path>>(base: P) -> Self {
        let battery_path = find_battery(base.as_ref());

        match &battery_path {
            Some(path) => info!(battery = ?path, "Battery found"),
            None => warn!("No battery found in power_supply class"),
        }

        Self { battery_path }
    }

    /// Reader bound to a specific battery directory.
    pub fn with_battery_path<P: AsRef<Path>>(path: P) -> Self {
        Self {
            battery_path: Some(path.as_ref().to_path_buf()),
        }
    }

    #[track_caller]
    fn read_attribute(&self, battery: &Path, name: &str) -> CoreResult<String> {
        let path = battery.join(name);
        fs::read_to_string(&path)
            .map(|contents| contents.trim().to_string())
            .map_err(|e| PowerError::ReadFailed {
                path,
                source: e,
                location: ErrorLocation::from(Location::caller()),
            })
    }

    fn read_optional_seconds(&self, battery: &Path, name: &str) -> Option<u32> {
        let value = self.read_attribute(battery, name).ok()?;
        value.parse::<u32>().ok().filter(|seconds| *seconds > 0)
    }
}

impl PowerSource for SysfsReader {
    fn name(&self) -> &'static str {
        "sysfs"
    }

    #[track_caller]
    #[instrument(skip(self))]
    fn read(&mut self) -> CoreResult<PowerSample> {
        let Some(battery) = self.battery_path.as_deref() else {
            return Ok(PowerSample::not_present());
        };

        // The directory disappears when the battery is pulled.
        if !battery.exists() {
            return Ok(PowerSample::not_present());
        }

        let status_text = self.read_attribute(battery, "status")?;
        let capacity_text = self.read_attribute(battery, "capacity")?;

        let capacity = capacity_text
            .parse::<i64>()
            .map_err(|e| PowerError::ParseFailed {
                reason: format!("invalid capacity {:?}: {}", capacity_text, e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let status = parse_status(&status_text);

        let remaining_time = match status {
            RawStatus::High => self.read_optional_seconds(battery, "time_to_empty_now"),
            RawStatus::Charging => self.read_optional_seconds(battery, "time_to_full_now"),
            _ => None,
        };

        let sample = PowerSample {
            status,
            percentage: capacity.clamp(0, 100) as u8,
            remaining_time,
            time_unit: TimeUnit::Seconds,
            charging_flag: false,
        };

        debug!(
            status = %status_text,
            percentage = sample.percentage,
            remaining_time = ?sample.remaining_time,
            "sysfs sample"
        );

        Ok(sample)
    }
}

/// Map a sysfs `status` attribute to a raw status.
///
/// "Full" is reported as charging so that a full battery on AC classifies
/// as charged.
pub(crate) fn parse_status(status: &str) -> RawStatus {
    match status {
        "Charging" | "Full" => RawStatus::Charging,
        "Discharging" => RawStatus::High,
        "Not charging" => RawStatus::NotCharging,
        _ => RawStatus::Unrecognized,
    }
}

fn find_battery(base: &Path) -> Option<PathBuf> {
    let mut entries: Vec<PathBuf> = fs::read_dir(base)
        .ok()?
        .flatten()
        .map(|entry| entry.path())
        .collect();

    // read_dir order is unspecified; BAT0 should win over BAT1.
    entries.sort();

    entries.into_iter().find(|path| {
        fs::read_to_string(path.join("type"))
            .map(|kind| kind.trim() == "Battery")
            .unwrap_or(false)
    })
}
