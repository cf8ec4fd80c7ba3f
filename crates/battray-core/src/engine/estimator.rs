//! Remaining-time estimation for hardware that reports no rate.
//!
//! Some batteries and drivers never report a charge or discharge rate. The
//! estimator derives one from two samples: the last percentage seen and the
//! time elapsed since it was seen. The line through those samples is solved
//! for the target level (100 when charging, 0 when discharging):
//!
//! ```text
//! y = mx + b  =>  x = (y - b) / m
//! ```
//!
//! The estimate only moves when the percentage does. Between ticks the last
//! estimate is held so the tooltip does not jitter.

use std::time::Instant;

use tracing::debug;

/// Target level when estimating time to full.
pub const FULL_CAPACITY: u8 = 100;

/// Target level when estimating time to empty.
pub const EMPTY_CAPACITY: u8 = 0;

/// State carried between polls by the estimator.
#[derive(Debug, Clone, Copy)]
pub struct EstimationMemo {
    remaining_capacity: Option<u8>,
    estimate: Option<u32>,
    reference: Instant,
}

impl EstimationMemo {
    /// Fresh memo with nothing remembered.
    pub fn new() -> Self {
        Self::new_at(Instant::now())
    }

    /// Fresh memo whose reference clock starts at `now`.
    pub fn new_at(now: Instant) -> Self {
        Self {
            remaining_capacity: None,
            estimate: None,
            reference: now,
        }
    }

    /// Last remembered capacity.
    pub fn remaining_capacity(&self) -> Option<u8> {
        self.remaining_capacity
    }

    /// Last memoized estimate in minutes.
    pub fn estimate(&self) -> Option<u32> {
        self.estimate
    }

    /// Forget everything and restart the reference clock.
    pub fn reset(&mut self) {
        self.reset_at(Instant::now());
    }

    /// Forget everything and restart the reference clock at `now`.
    pub fn reset_at(&mut self, now: Instant) {
        *self = Self::new_at(now);
    }

    /// Estimate minutes until `percentage` reaches `target`.
    pub fn estimate_minutes(&mut self, percentage: u8, target: u8) -> Option<u32> {
        self.estimate_minutes_at(percentage, target, Instant::now())
    }

    /// Estimate minutes until `percentage` reaches `target`, as of `now`.
    ///
    /// Returns `None` while there is not yet a second distinct sample, when
    /// no time has elapsed since the last one, or when the battery moves
    /// away from `target`.
    pub fn estimate_minutes_at(&mut self, percentage: u8, target: u8, now: Instant) -> Option<u32> {
        let Some(remembered) = self.remaining_capacity else {
            self.remaining_capacity = Some(percentage);
            self.reference = now;
            return self.estimate;
        };

        if remembered == percentage {
            return self.estimate;
        }

        let elapsed = now.saturating_duration_since(self.reference).as_secs_f64();
        let rate = (f64::from(percentage) - f64::from(remembered)) / elapsed;

        if elapsed <= 0.0 || !rate.is_finite() {
            debug!(percentage, remembered, elapsed, "No time elapsed, skipping estimate");
            return None;
        }

        // Rate is in percent per second; the quotient is reported as minutes.
        let minutes = ((f64::from(target) - f64::from(percentage)) / rate).trunc();

        self.estimate = if minutes.is_finite() && minutes >= 0.0 {
            Some(minutes as u32)
        } else {
            None
        };
        self.remaining_capacity = Some(percentage);
        self.reference = now;

        debug!(
            percentage,
            remembered,
            elapsed,
            rate,
            estimate = ?self.estimate,
            "Remaining time estimated"
        );

        self.estimate
    }
}

impl Default for EstimationMemo {
    fn default() -> Self {
        Self::new()
    }
}
