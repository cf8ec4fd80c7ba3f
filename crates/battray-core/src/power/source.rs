use crate::{
    CoreResult, PowerError,
    power::{ApmReader, PowerSample, SysfsReader},
};

use std::panic::Location;

use error_location::ErrorLocation;
use tracing::{info, instrument};

/// A power-management interface that can be sampled once per poll.
///
/// Implementations must return quickly: `read` is called from the poll
/// loop and only performs small file reads.
pub trait PowerSource: Send {
    /// Short name of the backend, used in logs.
    fn name(&self) -> &'static str;

    /// Take one sample.
    fn read(&mut self) -> CoreResult<PowerSample>;
}

/// Open the best available power source.
///
/// Prefers sysfs, then falls back to `/proc/apm`.
///
/// # Errors
///
/// Returns [`PowerError::NoPowerSource`] when neither interface exists.
#[track_caller]
#[instrument]
pub fn open_power_source() -> CoreResult<Box<dyn PowerSource>> {
    if SysfsReader::is_supported() {
        let reader = SysfsReader::discover();
        info!(source = reader.name(), "Power source opened");
        return Ok(Box::new(reader));
    }

    if ApmReader::is_supported() {
        let reader = ApmReader::new();
        info!(source = reader.name(), "Power source opened");
        return Ok(Box::new(reader));
    }

    Err(PowerError::NoPowerSource {
        location: ErrorLocation::from(Location::caller()),
    })
}
