//! Time sources and the fixed-rate drivers built on them.
//!
//! The game never sleeps or reads the wall clock itself.  A [`Scheduler`] is
//! polled with "now" and answers which pulses are due, so tests can drive a
//! whole minute of play through a [`VirtualClock`] instantly.

use std::cell::Cell;
use std::time::{Duration, Instant};

/// Fast driver period: roughly 30 ticks per second.
pub const FRAME_PERIOD: Duration = Duration::from_millis(33);
/// Countdown driver period.
pub const SECOND: Duration = Duration::from_secs(1);

/// Monotonic time since some fixed origin.
pub trait Clock {
    fn now(&self) -> Duration;
}

pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// A clock that only moves when told to.
#[derive(Debug, Default)]
pub struct VirtualClock {
    now: Cell<Duration>,
}

impl VirtualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for VirtualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

// ── Drivers ──────────────────────────────────────────────────────────────────

/// Fires every `period`, first one period after it was started.  Missed
/// deadlines are all delivered on the next poll; there is no drift correction.
#[derive(Clone, Debug)]
pub struct Ticker {
    period: Duration,
    next_due: Duration,
}

impl Ticker {
    pub fn new(period: Duration, now: Duration) -> Self {
        Self {
            period,
            next_due: now + period,
        }
    }

    fn next_due(&self) -> Duration {
        self.next_due
    }

    pub fn is_due(&self, now: Duration) -> bool {
        now >= self.next_due
    }

    fn fire(&mut self) {
        self.next_due += self.period;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pulse {
    /// Fast tick: enemy motion then collisions.
    Frame,
    /// One second off the countdown.
    Second,
}

/// The two periodic drivers of a running game.
#[derive(Clone, Debug)]
pub struct Scheduler {
    frame_period: Duration,
    frame: Ticker,
    second: Ticker,
}

impl Scheduler {
    pub fn new(frame_period: Duration, now: Duration) -> Self {
        Self {
            frame_period,
            frame: Ticker::new(frame_period, now),
            second: Ticker::new(SECOND, now),
        }
    }

    /// Cancel both drivers and start them again from `now`.
    pub fn restart(&mut self, now: Duration) {
        *self = Self::new(self.frame_period, now);
    }

    /// Earliest instant at which [`poll`](Self::poll) will return something.
    pub fn next_deadline(&self) -> Duration {
        self.frame.next_due().min(self.second.next_due())
    }

    /// Every pulse due at or before `now`, in deadline order.  When both
    /// drivers are due at the same instant the frame runs first.
    pub fn poll(&mut self, now: Duration) -> Vec<Pulse> {
        let mut pulses = Vec::new();
        loop {
            let pulse = match (self.frame.is_due(now), self.second.is_due(now)) {
                (false, false) => break,
                (true, false) => Pulse::Frame,
                (false, true) => Pulse::Second,
                (true, true) if self.frame.next_due() <= self.second.next_due() => Pulse::Frame,
                (true, true) => Pulse::Second,
            };
            match pulse {
                Pulse::Frame => self.frame.fire(),
                Pulse::Second => self.second.fire(),
            }
            pulses.push(pulse);
        }
        pulses
    }
}
