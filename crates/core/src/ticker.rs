//! Ticker - a restartable repeating timer with a mutable interval
//!
//! The ticker never calls back into the game. Its owner polls it, and each
//! `poll` reports at most one due firing. That keeps ticks strictly sequential
//! and lets `stop` cancel a pending firing by clearing the deadline, with no
//! flag that could race against an in-flight callback.
//!
//! Time comes from a [`Clock`]. [`SystemClock`] reads the monotonic clock;
//! [`ManualClock`] is advanced by hand, which makes timing fully deterministic
//! in tests.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use log::warn;

use crate::types::GameError;

/// Source of monotonic milliseconds.
pub trait Clock {
    fn now_ms(&self) -> u64;
}

/// Wall-clock time measured from construction.
#[derive(Debug, Clone, Copy)]
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
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

/// Fake clock. Clones share the same time.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Arc<AtomicU64>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, ms: u64) {
        self.now.store(ms, Ordering::SeqCst);
    }

    pub fn advance(&self, ms: u64) {
        self.now.fetch_add(ms, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.load(Ordering::SeqCst)
    }
}

/// Repeating timer driven by polling.
#[derive(Debug, Clone)]
pub struct Ticker<C: Clock> {
    clock: C,
    interval_ms: u64,
    /// Next firing time; `None` while stopped.
    deadline_ms: Option<u64>,
}

impl<C: Clock> Ticker<C> {
    /// Create a stopped ticker.
    ///
    /// Fails with [`GameError::InvalidInterval`] for a zero interval.
    pub fn new(clock: C, interval_ms: u64) -> Result<Self, GameError> {
        validate_interval(interval_ms as i64)?;
        Ok(Self {
            clock,
            interval_ms,
            deadline_ms: None,
        })
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    pub fn is_running(&self) -> bool {
        self.deadline_ms.is_some()
    }

    pub fn next_deadline_ms(&self) -> Option<u64> {
        self.deadline_ms
    }

    /// Schedule the first firing one interval from now. No-op when running.
    pub fn start(&mut self) {
        if self.deadline_ms.is_none() {
            self.deadline_ms = Some(self.clock.now_ms() + self.interval_ms);
        }
    }

    /// Cancel any pending firing. No-op when stopped.
    pub fn stop(&mut self) {
        self.deadline_ms = None;
    }

    /// Change the interval.
    ///
    /// The value is validated before anything changes. A running ticker is
    /// restarted, so its next firing lands exactly one new interval from now.
    pub fn set_interval(&mut self, interval_ms: i64) -> Result<(), GameError> {
        if let Err(err) = validate_interval(interval_ms) {
            warn!("rejected ticker interval {interval_ms}ms");
            return Err(err);
        }
        self.interval_ms = interval_ms as u64;
        if self.is_running() {
            self.stop();
            self.start();
        }
        Ok(())
    }

    /// Report whether a firing is due, consuming it.
    ///
    /// The next deadline follows the previous one by one interval. If the
    /// owner fell more than a full interval behind, the schedule re-anchors
    /// to now instead of bursting through the backlog.
    pub fn poll(&mut self) -> bool {
        let Some(deadline) = self.deadline_ms else {
            return false;
        };
        let now = self.clock.now_ms();
        if now < deadline {
            return false;
        }

        let next = deadline + self.interval_ms;
        self.deadline_ms = Some(if next <= now {
            now + self.interval_ms
        } else {
            next
        });
        true
    }

    /// Time left until the next firing, `None` while stopped.
    pub fn time_until_due(&self) -> Option<Duration> {
        let deadline = self.deadline_ms?;
        Some(Duration::from_millis(
            deadline.saturating_sub(self.clock.now_ms()),
        ))
    }
}

fn validate_interval(interval_ms: i64) -> Result<(), GameError> {
    if interval_ms <= 0 {
        return Err(GameError::InvalidInterval(interval_ms));
    }
    Ok(())
}
