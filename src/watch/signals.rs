//! SIGINT/SIGTERM fan-in: a dispatcher thread forwards OS signals into a
//! channel the watch loop can `select!` on alongside the ticker.
//!
//! [`SignalGuard`] owns the subscription. Dropping it closes the signal
//! iterator and joins the dispatcher thread.

#![allow(missing_docs)]

use std::fmt;

use crossbeam_channel::Receiver;

use crate::core::errors::Result;

/// A termination request observed by the loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StopSignal {
    Interrupt,
    Terminate,
}

impl StopSignal {
    /// Map a raw signal number to a stop request.
    #[must_use]
    pub fn from_raw(signal: i32) -> Option<Self> {
        #[cfg(unix)]
        {
            use signal_hook::consts::{SIGINT, SIGTERM};
            match signal {
                SIGINT => Some(Self::Interrupt),
                SIGTERM => Some(Self::Terminate),
                _ => None,
            }
        }
        #[cfg(not(unix))]
        {
            let _ = signal;
            None
        }
    }

    /// Conventional lowercase description, as `kill -l` style tools print it.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Interrupt => "interrupt",
            Self::Terminate => "terminated",
        }
    }
}

impl fmt::Display for StopSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

// ──────────────────── signal guard ────────────────────

/// Owned subscription to SIGINT and SIGTERM.
#[derive(Debug)]
pub struct SignalGuard {
    rx: Receiver<StopSignal>,
    #[cfg(unix)]
    handle: signal_hook::iterator::Handle,
    #[cfg(unix)]
    thread: Option<std::thread::JoinHandle<()>>,
}

impl SignalGuard {
    /// Register handlers and start the dispatcher thread.
    #[cfg(unix)]
    pub fn install() -> Result<Self> {
        use signal_hook::consts::{SIGINT, SIGTERM};
        use signal_hook::iterator::Signals;

        use crate::core::errors::WbgError;

        let mut signals =
            Signals::new([SIGINT, SIGTERM]).map_err(|e| WbgError::io("signals", e))?;
        let handle = signals.handle();
        // One pending stop is enough; extra deliveries are dropped.
        let (tx, rx) = crossbeam_channel::bounded(1);

        let thread = std::thread::Builder::new()
            .name("wbg-signals".to_string())
            .spawn(move || {
                for raw in signals.forever() {
                    if let Some(signal) = StopSignal::from_raw(raw) {
                        let _ = tx.try_send(signal);
                    }
                }
            })
            .map_err(|e| WbgError::io("signals", e))?;

        Ok(Self {
            rx,
            handle,
            thread: Some(thread),
        })
    }

    /// Platforms without POSIX signals get a channel that never fires.
    #[cfg(not(unix))]
    pub fn install() -> Result<Self> {
        Ok(Self {
            rx: crossbeam_channel::never(),
        })
    }

    pub fn receiver(&self) -> &Receiver<StopSignal> {
        &self.rx
    }
}

#[cfg(unix)]
impl Drop for SignalGuard {
    fn drop(&mut self) {
        self.handle.close();
        if let Some(thread) = self.thread.take()
            && thread.join().is_err()
        {
            eprintln!("[WBG-SIGNAL] dispatcher thread panicked");
        }
    }
}

// ──────────────────── tests ────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptions_name_the_signal() {
        assert_eq!(StopSignal::Interrupt.to_string(), "interrupt");
        assert_eq!(StopSignal::Terminate.to_string(), "terminated");
    }

    #[cfg(unix)]
    #[test]
    fn raw_numbers_map_to_stop_requests() {
        use signal_hook::consts::{SIGHUP, SIGINT, SIGTERM};
        assert_eq!(StopSignal::from_raw(SIGINT), Some(StopSignal::Interrupt));
        assert_eq!(StopSignal::from_raw(SIGTERM), Some(StopSignal::Terminate));
        assert_eq!(StopSignal::from_raw(SIGHUP), None);
    }

    #[test]
    fn guard_installs_and_drops_cleanly() {
        let guard = SignalGuard::install().expect("install signal guard");
        assert!(guard.receiver().try_recv().is_err());
        drop(guard);
    }
}
