//! battray Core Library
//!
//! Battery-state inference for a system tray indicator: power-management
//! readers, a status classifier, a remaining-time estimator for hardware
//! that does not report a rate, and per-session low/critical latches.
//!
//! # Example
//!
//! ```no_run
//! use battray_core::{
//!     BatteryEngine, CoreResult, ThresholdLevels, battery_string, open_power_source,
//!     time_string,
//! };
//!
//! use std::{thread::sleep, time::Duration};
//!
//! fn main() -> CoreResult<()> {
//!     let mut source = open_power_source()?;
//!     let mut engine = BatteryEngine::new(ThresholdLevels::default());
//!
//!     loop {
//!         let report = engine.poll(source.as_mut());
//!         println!("{}", battery_string(report.state, report.percentage));
//!         if let Some(time) = time_string(report.minutes) {
//!             println!("{}", time);
//!         }
//!         sleep(Duration::from_secs(5));
//!     }
//! }
//! ```

mod engine;
mod error;
mod format;
mod power;

pub use {
    engine::{
        BatteryEngine, BatteryState, DEFAULT_CRITICAL_LEVEL, DEFAULT_LOW_LEVEL, EMPTY_CAPACITY,
        EstimationMemo, FULL_CAPACITY, Observation, PollReport, SessionTracker, ThresholdLevels,
        classify,
    },
    error::{PowerError, Result as CoreResult},
    format::{IconKind, IconName, IconTheme, battery_string, icon_name, time_string, tooltip_string},
    power::{ApmReader, PowerSample, PowerSource, RawStatus, SysfsReader, TimeUnit, open_power_source},
};
