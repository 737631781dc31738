//! Periodic tick source for the watch loop.

#![allow(missing_docs)]

use std::time::{Duration, Instant};

use crossbeam_channel::Receiver;

/// Owned ticker. Dropping it stops the ticks.
#[derive(Debug)]
pub struct Ticker {
    rx: Receiver<Instant>,
    interval: Duration,
}

impl Ticker {
    /// First tick arrives one `interval` after start.
    #[must_use]
    pub fn start(interval: Duration) -> Self {
        Self {
            rx: crossbeam_channel::tick(interval),
            interval,
        }
    }

    pub fn receiver(&self) -> &Receiver<Instant> {
        &self.rx
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }
}
