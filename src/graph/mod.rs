//! Rolling graph: bounded sample window and its ASCII chart.

pub mod plot;
pub mod renderer;
pub mod window;

pub use plot::{PlotOptions, plot};
pub use renderer::RollingGraphRenderer;
pub use window::SampleWindow;
