use crate::{
    CoreResult,
    engine::{
        BatteryState, EMPTY_CAPACITY, EstimationMemo, FULL_CAPACITY, SessionTracker,
        ThresholdLevels, classify,
    },
    power::{PowerSample, PowerSource},
};

use std::time::Instant;

use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

/// Everything the poll driver needs to act on one poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollReport {
    /// Classified state.
    pub state: BatteryState,
    /// Charge level shown to the user.
    pub percentage: u8,
    /// Remaining minutes (to full or to empty), `None` when unknown.
    pub minutes: Option<u32>,
    /// The visible status changed since the previous poll.
    pub state_changed: bool,
    /// A new discharging session started on this poll.
    pub entered_session: bool,
    /// The low threshold was crossed on this poll.
    pub crossed_low: bool,
    /// The critical threshold was crossed on this poll.
    pub crossed_critical: bool,
    /// Current discharging session, if any.
    pub session_id: Option<Uuid>,
}

/// Battery-state inference engine.
///
/// Owns all state carried across polls: the previous state and latches
/// (via [`SessionTracker`]) and the remaining-time memo. One instance per
/// monitored battery; instances are independent.
#[derive(Debug, Clone)]
pub struct BatteryEngine {
    levels: ThresholdLevels,
    estimator: EstimationMemo,
    tracker: SessionTracker,
}

impl BatteryEngine {
    /// Create an engine with normalized threshold levels.
    pub fn new(levels: ThresholdLevels) -> Self {
        Self::new_at(levels, Instant::now())
    }

    /// Create an engine whose estimation clock starts at `now`.
    pub fn new_at(levels: ThresholdLevels, now: Instant) -> Self {
        Self {
            levels,
            estimator: EstimationMemo::new_at(now),
            tracker: SessionTracker::new(),
        }
    }

    /// Threshold levels in use.
    pub fn levels(&self) -> ThresholdLevels {
        self.levels
    }

    /// Read one sample from `source` and process it.
    #[instrument(skip(self, source), fields(source = source.name()))]
    pub fn poll(&mut self, source: &mut dyn PowerSource) -> PollReport {
        let sample = source.read();
        self.process(sample)
    }

    /// Process one sample (or read failure).
    pub fn process(&mut self, sample: CoreResult<PowerSample>) -> PollReport {
        self.process_at(sample, Instant::now())
    }

    /// Process one sample as of `now`.
    ///
    /// A read failure classifies as [`BatteryState::Unknown`]; the poll
    /// still completes.
    pub fn process_at(&mut self, sample: CoreResult<PowerSample>, now: Instant) -> PollReport {
        let sample = match sample {
            Ok(sample) => Some(sample),
            Err(e) => {
                warn!(error = %e, "Power sample read failed, reporting unknown state");
                None
            }
        };

        let state = sample.as_ref().map_or(BatteryState::Unknown, classify);
        let previous = self.tracker.previous();
        let hardware_minutes = sample.as_ref().and_then(PowerSample::remaining_minutes);

        let (percentage, minutes) = match state {
            BatteryState::Missing | BatteryState::Unknown => (0, None),
            BatteryState::Charged => (FULL_CAPACITY, None),
            BatteryState::Charging => {
                let percentage = sample.map_or(0, |s| s.percentage);

                if previous != Some(BatteryState::Charging) {
                    self.estimator.reset_at(now);
                }

                let minutes = hardware_minutes.or_else(|| {
                    self.estimator
                        .estimate_minutes_at(percentage, FULL_CAPACITY, now)
                });

                (percentage, minutes)
            }
            BatteryState::Discharging
            | BatteryState::NotCharging
            | BatteryState::LowLevel
            | BatteryState::CriticalLevel => {
                let percentage = sample.map_or(0, |s| s.percentage);

                if !previous.is_some_and(BatteryState::is_discharging) {
                    self.estimator.reset_at(now);
                }

                let minutes = hardware_minutes.or_else(|| {
                    self.estimator
                        .estimate_minutes_at(percentage, EMPTY_CAPACITY, now)
                });

                (percentage, minutes)
            }
        };

        let state_changed = previous.is_none_or(|previous| previous.differs_from(state));
        let observation = self.tracker.observe(state, percentage, self.levels);

        let report = PollReport {
            state,
            percentage,
            minutes,
            state_changed,
            entered_session: observation.entered_session,
            crossed_low: observation.crossed_low,
            crossed_critical: observation.crossed_critical,
            session_id: self.tracker.session_id(),
        };

        if state_changed {
            info!(state = ?state, percentage, minutes = ?minutes, "Battery state changed");
        }

        if report.crossed_low {
            warn!(session_id = ?report.session_id, percentage, low = self.levels.low, "Low battery level reached");
        }

        if report.crossed_critical {
            warn!(
                session_id = ?report.session_id,
                percentage,
                critical = self.levels.critical,
                "Critical battery level reached"
            );
        }

        debug!(report = ?report, "Poll complete");

        report
    }

    /// Current discharging session, if any.
    pub fn session_id(&self) -> Option<Uuid> {
        self.tracker.session_id()
    }

    /// Whether a threshold command scheduled during `session_id` may run now.
    ///
    /// The session it was scheduled in must still be the current one, and
    /// `sample` must still describe a discharging battery. A command from a
    /// session that ended in the meantime is stale, even when a newer session
    /// is discharging again.
    pub fn level_command_due(
        &self,
        session_id: Option<Uuid>,
        sample: &CoreResult<PowerSample>,
    ) -> bool {
        session_id.is_some() && session_id == self.session_id() && Self::still_discharging(sample)
    }

    /// Whether `sample` still describes a discharging battery.
    ///
    /// Used to re-check before running a deferred threshold command. A read
    /// failure does not cancel the command.
    pub fn still_discharging(sample: &CoreResult<PowerSample>) -> bool {
        match sample {
            Ok(sample) => classify(sample).is_discharging(),
            Err(_) => true,
        }
    }
}
