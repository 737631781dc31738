//! Rolling renderer: window plus plot, one call per sample.

#![allow(missing_docs)]

use crate::graph::plot::{PlotOptions, plot};
use crate::graph::window::SampleWindow;

/// Keeps the most recent samples and renders them as a fixed-height chart.
#[derive(Debug, Clone)]
pub struct RollingGraphRenderer {
    window: SampleWindow,
    options: PlotOptions,
}

impl RollingGraphRenderer {
    /// `max_samples` of zero keeps every sample.
    #[must_use]
    pub fn new(max_samples: usize, height: usize) -> Self {
        Self {
            window: SampleWindow::new(max_samples),
            options: PlotOptions::with_height(height),
        }
    }

    /// Record `sample` and render the updated history.
    pub fn next(&mut self, sample: f64) -> String {
        self.window.push(sample);
        self.render()
    }

    /// Render the current history without changing it.
    pub fn render(&mut self) -> String {
        plot(self.window.as_slice(), &self.options)
    }

    /// Current history, oldest first.
    #[must_use]
    pub fn history(&self) -> Vec<f64> {
        self.window.to_vec()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.window.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }
}
