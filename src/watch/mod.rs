//! The watch loop and the resources it owns: ticker, signal subscription,
//! terminal frame output.

pub mod display;
pub mod loop_main;
pub mod signals;
pub mod ticker;

pub use loop_main::{StopReason, WatchLoop, join_command, run};
pub use signals::{SignalGuard, StopSignal};
pub use ticker::Ticker;
