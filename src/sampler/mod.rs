//! Sampling: turn one run of an external command into one `f64`.

pub mod executor;

pub use executor::{CommandExecutor, SampleSource, parse_sample};
