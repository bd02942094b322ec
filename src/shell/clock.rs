//! Time sources for commands that depend on the wall clock.

use std::time::{Duration, Instant};

use chrono::{DateTime, Local};

/// Wall clock plus elapsed time since the widget started.
pub trait Clock {
    /// Current local time.
    fn now(&self) -> DateTime<Local>;

    /// Time elapsed since the clock was started.
    fn uptime(&self) -> Duration;
}

/// Clock backed by the system time.
#[derive(Debug, Clone)]
pub struct SystemClock {
    started: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    /// Clock whose uptime counts from `started` (e.g. process start).
    pub fn started_at(started: Instant) -> Self {
        Self { started }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }

    fn uptime(&self) -> Duration {
        self.started.elapsed()
    }
}

/// Clock with fixed, manually advanced readings.
#[derive(Debug, Clone)]
pub struct FixedClock {
    pub now: DateTime<Local>,
    pub uptime: Duration,
}

impl FixedClock {
    pub fn new(now: DateTime<Local>, uptime: Duration) -> Self {
        Self { now, uptime }
    }

    /// Move both readings forward.
    pub fn advance(&mut self, by: Duration) {
        self.uptime += by;
        if let Ok(delta) = chrono::Duration::from_std(by) {
            self.now += delta;
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.now
    }

    fn uptime(&self) -> Duration {
        self.uptime
    }
}
