#![forbid(unsafe_code)]

//! watchbygraph: run a shell command once per second and plot its numeric
//! output as a rolling ASCII line graph.
//!
//! Two pieces meet in a single timed loop:
//! 1. **Sampler**: runs `<shell> -c <command>` and parses trimmed stdout as `f64`
//! 2. **Rolling graph**: keeps the last N samples and renders a fixed-height chart
//!
//! # Library usage
//!
//! ```rust,no_run
//! use watchbygraph::prelude::*;
//!
//! let mut renderer = RollingGraphRenderer::new(100, 10);
//! let value = parse_sample(" 42\n").unwrap();
//! println!("{}", renderer.next(value));
//! ```

pub mod prelude;

pub mod core;
pub mod graph;
pub mod logger;
pub mod sampler;
pub mod watch;
