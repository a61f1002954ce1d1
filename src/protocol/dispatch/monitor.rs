//! Per-message arrival bookkeeping, compared against each decoder's period
//! hint by an external watchdog.
use embassy_time::{Duration, Instant};

/// Reception history of one message identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ArrivalStats {
    /// Frames successfully dispatched since registration or the last reset.
    pub count: u32,
    /// Timestamp of the most recent timestamped frame.
    pub last_arrival: Option<Instant>,
    /// Gap between the two most recent timestamped frames.
    pub last_interval: Option<Duration>,
}

impl ArrivalStats {
    /// Account for one dispatched frame. Untimestamped frames only bump the count.
    pub fn record(&mut self, timestamp: Option<Instant>) {
        self.count = self.count.saturating_add(1);
        if let Some(now) = timestamp {
            if let Some(previous) = self.last_arrival {
                // Out-of-order stamps leave the previous interval in place.
                if let Some(gap) = now.checked_duration_since(previous) {
                    self.last_interval = Some(gap);
                }
            }
            self.last_arrival = Some(now);
        }
    }

    /// `true` when the last arrival is older than `limit` at `now`.
    /// A message never seen with a timestamp is not overdue.
    pub fn is_overdue(&self, now: Instant, limit: Duration) -> bool {
        match self.last_arrival {
            Some(last) => now
                .checked_duration_since(last)
                .is_some_and(|elapsed| elapsed > limit),
            None => false,
        }
    }

    /// Forget everything.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
