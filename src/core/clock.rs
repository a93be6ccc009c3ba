//! Reveal clock
//!
//! Host-side scheduler for reveal ticks. The session never owns a timer;
//! the event loop asks the clock how long it may block and whether a tick
//! is due, then feeds [`super::Event::Tick`] into the reducer.

use std::time::{Duration, Instant};

/// Default delay between revealed sub-lines
pub const DEFAULT_TICK: Duration = Duration::from_millis(50);

/// Single-shot periodic timer, armed only while a reveal runs
#[derive(Debug, Clone)]
pub struct RevealClock {
    interval: Duration,
    next_due: Option<Instant>,
}

impl Default for RevealClock {
    fn default() -> Self {
        Self::new(DEFAULT_TICK)
    }
}

impl RevealClock {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(Duration::from_millis(1)),
            next_due: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_armed(&self) -> bool {
        self.next_due.is_some()
    }

    /// Start ticking one interval from `now`. No-op if already armed.
    pub fn arm(&mut self, now: Instant) {
        if self.next_due.is_none() {
            self.next_due = Some(now + self.interval);
        }
    }

    pub fn disarm(&mut self) {
        self.next_due = None;
    }

    /// Arm or disarm to match whether a reveal is running
    pub fn sync(&mut self, revealing: bool, now: Instant) {
        if revealing {
            self.arm(now);
        } else {
            self.disarm();
        }
    }

    /// How long the event loop may wait for input before the next tick
    pub fn poll_timeout(&self, now: Instant, idle: Duration) -> Duration {
        match self.next_due {
            Some(due) => due.saturating_duration_since(now).min(idle),
            None => idle,
        }
    }

    /// True when a tick is due. Schedules the following one.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(due) if now >= due => {
                self.next_due = Some(now + self.interval);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn test_disarmed_never_fires() {
        let mut clock = RevealClock::new(50 * MS);
        let now = Instant::now();
        assert!(!clock.is_armed());
        assert!(!clock.fire(now + 1000 * MS));
        assert_eq!(clock.poll_timeout(now, 250 * MS), 250 * MS);
    }

    #[test]
    fn test_fires_after_interval() {
        let mut clock = RevealClock::new(50 * MS);
        let start = Instant::now();
        clock.arm(start);

        assert!(!clock.fire(start + 10 * MS));
        assert_eq!(clock.poll_timeout(start + 10 * MS, 250 * MS), 40 * MS);
        assert!(clock.fire(start + 50 * MS));
        // Rescheduled relative to the firing time
        assert!(!clock.fire(start + 60 * MS));
        assert!(clock.fire(start + 100 * MS));
    }

    #[test]
    fn test_arm_is_idempotent() {
        let mut clock = RevealClock::new(50 * MS);
        let start = Instant::now();
        clock.arm(start);
        clock.arm(start + 40 * MS);
        assert!(clock.fire(start + 50 * MS));
    }

    #[test]
    fn test_sync_follows_reveal_state() {
        let mut clock = RevealClock::default();
        let now = Instant::now();
        clock.sync(true, now);
        assert!(clock.is_armed());
        clock.sync(false, now);
        assert!(!clock.is_armed());
        assert_eq!(clock.poll_timeout(now, 5 * MS), 5 * MS);
    }

    #[test]
    fn test_overdue_timeout_is_zero() {
        let mut clock = RevealClock::new(50 * MS);
        let start = Instant::now();
        clock.arm(start);
        assert_eq!(clock.poll_timeout(start + 80 * MS, 250 * MS), Duration::ZERO);
    }
}
