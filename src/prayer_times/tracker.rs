use chrono::{Duration, NaiveDateTime};

use crate::models::NextPrayerState;

pub const DEFAULT_DWELL_SECS: u64 = 120;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackerState {
    Idle,
    Tracking {
        stable: NextPrayerState,
        committed_at: NaiveDateTime,
    },
}

/// Holds the "next prayer" shown on screen steady across ticks near a
/// boundary. A new event is only accepted once `dwell` has passed since
/// the last committed change.
#[derive(Debug, Clone)]
pub struct NextPrayerTracker {
    state: TrackerState,
    dwell: Duration,
}

impl NextPrayerTracker {
    pub fn new(dwell: Duration) -> Self {
        Self {
            state: TrackerState::Idle,
            dwell,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> &TrackerState {
        &self.state
    }

    pub fn current(&self) -> Option<&NextPrayerState> {
        match &self.state {
            TrackerState::Idle => None,
            TrackerState::Tracking { stable, .. } => Some(stable),
        }
    }

    /// Feed one tick's candidate and return the stabilized value.
    pub fn observe(&mut self, candidate: NextPrayerState, now: NaiveDateTime) -> NextPrayerState {
        let (stable, committed_at) = match std::mem::replace(&mut self.state, TrackerState::Idle) {
            TrackerState::Idle => {
                log::debug!("Tracking next prayer: {}", candidate.event.name);
                (candidate, now)
            }
            TrackerState::Tracking {
                stable,
                committed_at,
            } => {
                if stable.event.name == candidate.event.name {
                    (candidate, committed_at)
                } else if now - committed_at >= self.dwell {
                    log::debug!(
                        "Next prayer changed: {} -> {}",
                        stable.event.name,
                        candidate.event.name
                    );
                    (candidate, now)
                } else {
                    // Held event may already be behind us
                    let remaining = (stable.event.instant - now).max(Duration::zero());
                    (NextPrayerState { remaining, ..stable }, committed_at)
                }
            }
        };

        self.state = TrackerState::Tracking {
            stable: stable.clone(),
            committed_at,
        };
        stable
    }
}

impl Default for NextPrayerTracker {
    fn default() -> Self {
        Self::new(Duration::seconds(DEFAULT_DWELL_SECS as i64))
    }
}
