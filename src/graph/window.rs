//! Bounded FIFO history of samples.

#![allow(missing_docs)]

use std::collections::VecDeque;

/// Sliding window of the most recent samples.
///
/// A capacity of zero means unbounded. At capacity, pushing evicts the oldest
/// sample before appending, so `len()` never exceeds `capacity()`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleWindow {
    samples: VecDeque<f64>,
    capacity: usize,
}

impl SampleWindow {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a sample, returning the evicted one if the window was full.
    pub fn push(&mut self, sample: f64) -> Option<f64> {
        let evicted = if self.capacity > 0 && self.samples.len() == self.capacity {
            self.samples.pop_front()
        } else {
            None
        };
        self.samples.push_back(sample);
        evicted
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Samples oldest-first, as one contiguous slice.
    pub fn as_slice(&mut self) -> &[f64] {
        self.samples.make_contiguous()
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().copied()
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<f64> {
        self.iter().collect()
    }
}
