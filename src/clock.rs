//! Time sources for timestamps and reset scheduling.
//!
//! The flow needs two notions of "now": a wall-clock instant to stamp
//! accepted submissions with, and a monotonic tick to schedule the automatic
//! form reset against. Injecting both through one trait keeps the reset
//! delay testable without sleeping.

use chrono::{DateTime, Utc};
use std::cell::Cell;
use std::time::{Duration, Instant};

/// Injected time source.
///
pub trait Clock {
    /// Wall-clock time, used for submission timestamps.
    fn now_wall(&self) -> DateTime<Utc>;

    /// Monotonic offset from an arbitrary epoch, used for scheduling.
    fn now_tick(&self) -> Duration;
}

/// Real time: `Utc::now` plus a monotonic instant taken at construction.
///
#[derive(Debug)]
pub struct SystemClock {
    started: Instant,
}

impl SystemClock {
    pub fn new() -> SystemClock {
        SystemClock {
            started: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> SystemClock {
        SystemClock::new()
    }
}

impl Clock for SystemClock {
    fn now_wall(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn now_tick(&self) -> Duration {
        self.started.elapsed()
    }
}

/// Hand-driven clock for tests: time only moves when told to.
///
#[derive(Debug)]
pub struct ManualClock {
    wall: Cell<DateTime<Utc>>,
    tick: Cell<Duration>,
}

impl ManualClock {
    /// Start at the given wall time with a zero tick.
    ///
    pub fn starting_at(wall: DateTime<Utc>) -> ManualClock {
        ManualClock {
            wall: Cell::new(wall),
            tick: Cell::new(Duration::ZERO),
        }
    }

    /// Advance both wall and tick time by the given amount.
    ///
    pub fn advance(&self, by: Duration) {
        let by_wall = chrono::Duration::from_std(by).unwrap_or_else(|_| chrono::Duration::zero());
        self.wall.set(self.wall.get() + by_wall);
        self.tick.set(self.tick.get() + by);
    }
}

impl Default for ManualClock {
    fn default() -> ManualClock {
        ManualClock::starting_at(Utc::now())
    }
}

impl Clock for ManualClock {
    fn now_wall(&self) -> DateTime<Utc> {
        self.wall.get()
    }

    fn now_tick(&self) -> Duration {
        self.tick.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_system_clock_tick_is_monotonic() {
        let clock = SystemClock::new();
        let first = clock.now_tick();
        let second = clock.now_tick();
        assert!(second >= first);
    }

    #[test]
    fn test_manual_clock_stands_still_until_advanced() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let clock = ManualClock::starting_at(start);
        assert_eq!(clock.now_wall(), start);
        assert_eq!(clock.now_tick(), Duration::ZERO);
        assert_eq!(clock.now_tick(), Duration::ZERO);
    }

    #[test]
    fn test_manual_clock_advances_wall_and_tick_together() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let clock = ManualClock::starting_at(start);
        clock.advance(Duration::from_secs(3));
        assert_eq!(clock.now_tick(), Duration::from_secs(3));
        assert_eq!(
            clock.now_wall(),
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 3).unwrap()
        );
    }
}
