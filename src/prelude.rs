//! Convenience re-exports for library consumers.
//!
//! ```rust,no_run
//! use watchbygraph::prelude::*;
//! ```

// Core
pub use crate::core::config::Config;
pub use crate::core::errors::{ErrorKind, Result, WbgError};

// Sampling
pub use crate::sampler::{CommandExecutor, SampleSource, parse_sample};

// Graph
pub use crate::graph::{PlotOptions, RollingGraphRenderer, SampleWindow, plot};

// Watch loop
pub use crate::watch::{SignalGuard, StopReason, StopSignal, Ticker, WatchLoop, join_command};
