//! Request pacing
//!
//! A leaky bucket with capacity one: each caller reserves the next free
//! slot under a short lock, then sleeps until its slot arrives. Sequential
//! and concurrent callers see the same spacing, so one pacer shared by
//! every client of a service enforces that service's request budget.

use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use tokio::time::{Instant, sleep_until};

/// Enforces a minimum interval between requests to one service
#[derive(Debug)]
pub struct RequestPacer {
    interval: Duration,
    next_slot: Mutex<Option<Instant>>,
}

impl RequestPacer {
    /// Allow one request per `interval`
    #[must_use]
    pub const fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_slot: Mutex::new(None),
        }
    }

    /// Pacer that never waits
    #[must_use]
    pub const fn unlimited() -> Self {
        Self::new(Duration::ZERO)
    }

    /// Configured spacing
    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Wait for the next request slot
    pub async fn acquire(&self) {
        if self.interval.is_zero() {
            return;
        }
        let slot = {
            let mut next = self.next_slot.lock().unwrap_or_else(PoisonError::into_inner);
            let now = Instant::now();
            let slot = next.map_or(now, |n| n.max(now));
            *next = Some(slot + self.interval);
            slot
        };
        sleep_until(slot).await;
    }
}
