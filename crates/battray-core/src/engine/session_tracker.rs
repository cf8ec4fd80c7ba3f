use crate::engine::{BatteryState, ThresholdLevels};

use tracing::{info, instrument};
use uuid::Uuid;

/// What the tracker saw on one poll.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Observation {
    /// A new discharging session started on this poll.
    pub entered_session: bool,
    /// The low threshold was crossed for the first time this session.
    pub crossed_low: bool,
    /// The critical threshold was crossed for the first time this session.
    pub crossed_critical: bool,
}

/// One-shot low/critical latches scoped to a discharging session.
///
/// A session is a continuous run of polls in a discharging state. Each
/// latch fires at most once per session; only leaving the session and
/// coming back re-arms them.
#[derive(Debug, Clone, Default)]
pub struct SessionTracker {
    previous: Option<BatteryState>,
    low_triggered: bool,
    critical_triggered: bool,
    session_id: Option<Uuid>,
}

impl SessionTracker {
    /// Tracker with no history.
    pub fn new() -> Self {
        Self::default()
    }

    /// State classified on the previous poll.
    pub fn previous(&self) -> Option<BatteryState> {
        self.previous
    }

    /// Identifier of the current discharging session, if any.
    pub fn session_id(&self) -> Option<Uuid> {
        self.session_id
    }

    /// Record this poll's state and evaluate the thresholds.
    #[instrument(skip(self, levels))]
    pub fn observe(
        &mut self,
        state: BatteryState,
        percentage: u8,
        levels: ThresholdLevels,
    ) -> Observation {
        let was_discharging = self.previous.is_some_and(BatteryState::is_discharging);
        self.previous = Some(state);

        if !state.is_discharging() {
            self.session_id = None;
            return Observation::default();
        }

        let mut observation = Observation::default();

        if !was_discharging {
            let session_id = Uuid::new_v4();
            self.low_triggered = false;
            self.critical_triggered = false;
            self.session_id = Some(session_id);
            observation.entered_session = true;

            info!(session_id = %session_id, percentage, "Discharging session started");
        }

        if !self.low_triggered && percentage <= levels.low {
            self.low_triggered = true;
            observation.crossed_low = true;
        }

        if !self.critical_triggered && percentage <= levels.critical {
            self.critical_triggered = true;
            observation.crossed_critical = true;
        }

        observation
    }
}
