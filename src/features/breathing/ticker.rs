//! Repeating tick schedule driven by an external clock.
//!
//! The ticker never reads the clock itself. Callers pass `Instant`s in, which
//! keeps the schedule deterministic under test and lets a single event loop
//! own time.

use std::time::{Duration, Instant};

/// Period between breathing ticks.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// A cancellable repeating schedule.
///
/// Cancellation is dropping the value. The first poll after creation arms
/// it; every later poll reports how many whole periods have passed.
#[derive(Debug, Clone)]
pub struct Ticker {
    period: Duration,
    next_due: Option<Instant>,
}

impl Ticker {
    /// Create an unarmed ticker with the given period.
    #[must_use]
    pub const fn new(period: Duration) -> Self {
        Self {
            period,
            next_due: None,
        }
    }

    /// Create a ticker already armed at `now`.
    #[must_use]
    pub fn armed_at(period: Duration, now: Instant) -> Self {
        Self {
            period,
            next_due: Some(now + period),
        }
    }

    /// Number of ticks that came due up to `now`.
    ///
    /// Advances the schedule past every reported tick so each period is
    /// reported exactly once. Late polls catch up instead of drifting.
    pub fn due(&mut self, now: Instant) -> u32 {
        let Some(mut next) = self.next_due else {
            self.next_due = Some(now + self.period);
            return 0;
        };

        let mut count = 0;
        while next <= now {
            count += 1;
            next += self.period;
        }
        self.next_due = Some(next);
        count
    }

    /// Time left until the next tick, or `None` if not yet armed.
    #[must_use]
    pub fn until_next(&self, now: Instant) -> Option<Duration> {
        self.next_due
            .map(|next| next.saturating_duration_since(now))
    }

    /// Whether the first poll has happened.
    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.next_due.is_some()
    }
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new(TICK_PERIOD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_poll_arms() {
        let start = Instant::now();
        let mut ticker = Ticker::default();
        assert!(!ticker.is_armed());
        assert_eq!(ticker.due(start), 0);
        assert!(ticker.is_armed());
        assert_eq!(ticker.until_next(start), Some(TICK_PERIOD));
    }

    #[test]
    fn test_reports_each_period_once() {
        let start = Instant::now();
        let mut ticker = Ticker::armed_at(TICK_PERIOD, start);

        assert_eq!(ticker.due(start + Duration::from_millis(999)), 0);
        assert_eq!(ticker.due(start + Duration::from_secs(1)), 1);
        assert_eq!(ticker.due(start + Duration::from_millis(1500)), 0);
        assert_eq!(ticker.due(start + Duration::from_secs(2)), 1);
    }

    #[test]
    fn test_late_poll_catches_up() {
        let start = Instant::now();
        let mut ticker = Ticker::armed_at(TICK_PERIOD, start);

        assert_eq!(ticker.due(start + Duration::from_millis(3500)), 3);
        // Schedule stays aligned to the original start.
        assert_eq!(
            ticker.until_next(start + Duration::from_millis(3500)),
            Some(Duration::from_millis(500))
        );
    }

    #[test]
    fn test_until_next_saturates() {
        let start = Instant::now();
        let ticker = Ticker::armed_at(TICK_PERIOD, start);
        assert_eq!(
            ticker.until_next(start + Duration::from_secs(5)),
            Some(Duration::ZERO)
        );
    }
}
