//! Linux APM reader.
//!
//! `/proc/apm` holds a single line:
//!
//! ```text
//! 1.16 1.2 0x03 0x01 0x03 0x09 98% -1 ?
//! ```
//!
//! driver version, BIOS version, BIOS flags, AC line status, battery
//! status, battery flags, percentage, remaining time and its unit.

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
use tracing::{debug, instrument};

const PROC_APM_PATH: &str = "/proc/apm";

/// Battery flag bit set while charging.
const CHARGING_FLAG: u8 = 1 << 3;

/// Battery flags value meaning "unknown"; no individual bit is meaningful.
const FLAGS_UNKNOWN: u8 = 0xff;

/// Reads samples from `/proc/apm`.
#[derive(Debug, Clone)]
pub struct ApmReader {
    path: PathBuf,
}

impl ApmReader {
    /// Reader for the kernel's `/proc/apm`.
    pub fn new() -> Self {
        Self::with_path(PROC_APM_PATH)
    }

    /// Reader for an APM file at a custom location.
    pub fn with_path<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Whether the kernel exposes APM.
    pub fn is_supported() -> bool {
        Path::new(PROC_APM_PATH).exists()
    }
}

impl Default for ApmReader {
    fn default() -> Self {
        Self::new()
    }
}

impl PowerSource for ApmReader {
    fn name(&self) -> &'static str {
        "apm"
    }

    #[track_caller]
    #[instrument(skip(self))]
    fn read(&mut self) -> CoreResult<PowerSample> {
        let contents = fs::read_to_string(&self.path).map_err(|e| PowerError::ReadFailed {
            path: self.path.clone(),
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })?;

        parse_apm_line(&contents)
    }
}

/// Parse the contents of `/proc/apm`.
#[track_caller]
pub(crate) fn parse_apm_line(line: &str) -> CoreResult<PowerSample> {
    let fields: Vec<&str> = line.split_whitespace().collect();

    if fields.len() < 9 {
        return Err(PowerError::ParseFailed {
            reason: format!("expected 9 fields, found {}", fields.len()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let status_code = parse_hex(fields[4])?;
    let flags = parse_hex(fields[5])?;
    let percentage = parse_int(fields[6].trim_end_matches('%'))?;
    let time = parse_int(fields[7])?;

    let time_unit = match fields[8] {
        "min" => TimeUnit::Minutes,
        _ => TimeUnit::Seconds,
    };

    let sample = PowerSample {
        status: RawStatus::from_apm_code(status_code),
        percentage: percentage.clamp(0, 100) as u8,
        remaining_time: u32::try_from(time).ok(),
        time_unit,
        charging_flag: flags != FLAGS_UNKNOWN && flags & CHARGING_FLAG != 0,
    };

    debug!(
        status_code,
        flags,
        percentage = sample.percentage,
        remaining_time = ?sample.remaining_time,
        "APM sample"
    );

    Ok(sample)
}

#[track_caller]
fn parse_hex(field: &str) -> CoreResult<u8> {
    let digits = field.trim_start_matches("0x");
    u8::from_str_radix(digits, 16).map_err(|e| PowerError::ParseFailed {
        reason: format!("invalid hex field {:?}: {}", field, e),
        location: ErrorLocation::from(Location::caller()),
    })
}

#[track_caller]
fn parse_int(field: &str) -> CoreResult<i64> {
    field.parse::<i64>().map_err(|e| PowerError::ParseFailed {
        reason: format!("invalid integer field {:?}: {}", field, e),
        location: ErrorLocation::from(Location::caller()),
    })
}
