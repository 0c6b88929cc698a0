//! Sliding-window request limiter for remote-model calls.
//!
//! Not a token bucket: the limiter keeps the timestamps of successful calls
//! and drops the ones older than the window whenever it counts.

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::Instant;

pub const DEFAULT_MAX_REQUESTS: usize = 5;
pub const DEFAULT_WINDOW: Duration = Duration::from_secs(60);

/// One limiter is built at startup and shared by every AI entry point.
pub type SharedRateLimiter = Arc<Mutex<RateLimiter>>;

#[derive(Debug)]
pub struct RateLimiter {
    max_requests: usize,
    window: Duration,
    /// Oldest first.
    requests: VecDeque<Instant>,
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_REQUESTS, DEFAULT_WINDOW)
    }
}

impl RateLimiter {
    pub fn new(max_requests: usize, window: Duration) -> Self {
        Self {
            max_requests,
            window,
            requests: VecDeque::with_capacity(max_requests),
        }
    }

    pub fn shared(self) -> SharedRateLimiter {
        Arc::new(Mutex::new(self))
    }

    pub fn can_make_request(&mut self) -> bool {
        self.prune(Instant::now());
        self.requests.len() < self.max_requests
    }

    /// Records a call made now and returns its timestamp.
    pub fn record_request(&mut self) -> Instant {
        let now = Instant::now();
        self.requests.push_back(now);
        now
    }

    /// Checks and records in one step, so concurrent callers holding the
    /// shared lock can never overshoot the window. `Err` carries the wait in
    /// whole seconds.
    pub fn try_acquire(&mut self) -> Result<Instant, u64> {
        if !self.can_make_request() {
            return Err(self.wait_secs());
        }
        Ok(self.record_request())
    }

    /// Returns a slot taken by `try_acquire` whose call did not succeed.
    pub fn release(&mut self, slot: Instant) {
        if let Some(pos) = self.requests.iter().rposition(|t| *t == slot) {
            self.requests.remove(pos);
        }
    }

    pub fn remaining_requests(&mut self) -> usize {
        self.prune(Instant::now());
        self.max_requests.saturating_sub(self.requests.len())
    }

    /// Time until the oldest recorded request leaves the window. Zero when
    /// nothing is recorded.
    pub fn reset_time(&self) -> Duration {
        match self.requests.front() {
            Some(oldest) => self.window.saturating_sub(oldest.elapsed()),
            None => Duration::ZERO,
        }
    }

    /// Whole seconds a caller should wait, rounded up.
    pub fn wait_secs(&self) -> u64 {
        self.reset_time().as_secs_f64().ceil() as u64
    }

    fn prune(&mut self, now: Instant) {
        while let Some(oldest) = self.requests.front() {
            if now.duration_since(*oldest) >= self.window {
                self.requests.pop_front();
            } else {
                break;
            }
        }
    }
}
