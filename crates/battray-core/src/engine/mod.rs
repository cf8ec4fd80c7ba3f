mod battery_engine;
mod battery_state;
mod estimator;
mod session_tracker;
mod threshold_levels;

pub use {
    battery_engine::{BatteryEngine, PollReport},
    battery_state::{BatteryState, classify},
    estimator::{EMPTY_CAPACITY, EstimationMemo, FULL_CAPACITY},
    session_tracker::{Observation, SessionTracker},
    threshold_levels::{DEFAULT_CRITICAL_LEVEL, DEFAULT_LOW_LEVEL, ThresholdLevels},
};
