//! Core types for border representation

use crate::error::{Error, Result};
use crate::strategy::Strategy;
use std::fmt;

/// A validated sequence of histogram bin borders
///
/// Holds `num_bins + 1` strictly increasing edges. The first border sits
/// below the smallest sample value and the last above the largest, so every
/// value lands strictly inside the covered span under half-open binning.
#[derive(Debug, Clone, PartialEq)]
pub struct BorderSet {
    /// Border positions, ascending
    edges: Vec<f64>,
    /// Strategy that produced the borders
    strategy: Strategy,
}

impl BorderSet {
    /// Validate and wrap a computed edge sequence
    ///
    /// Fails with [`Error::BorderCount`] when the sequence does not hold
    /// exactly `num_bins + 1` edges, or [`Error::NotIncreasing`] when any
    /// adjacent pair fails to strictly increase.
    pub fn new(edges: Vec<f64>, strategy: Strategy, num_bins: usize) -> Result<Self> {
        let expected = num_bins + 1;
        if edges.len() != expected {
            return Err(Error::BorderCount {
                expected,
                actual: edges.len(),
            });
        }
        for (index, pair) in edges.windows(2).enumerate() {
            // Also rejects NaN edges, which fail every comparison
            if !(pair[0] < pair[1]) {
                return Err(Error::NotIncreasing {
                    index,
                    left: pair[0],
                    right: pair[1],
                });
            }
        }
        Ok(Self { edges, strategy })
    }

    /// Get the border positions
    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    /// Get the number of bins the borders delimit
    pub fn num_bins(&self) -> usize {
        self.edges.len() - 1
    }

    /// Get the number of borders
    pub fn num_borders(&self) -> usize {
        self.edges.len()
    }

    /// Get the lowest border
    pub fn first(&self) -> f64 {
        self.edges[0]
    }

    /// Get the highest border
    pub fn last(&self) -> f64 {
        self.edges[self.edges.len() - 1]
    }

    /// Get the total span covered by the borders
    pub fn span(&self) -> f64 {
        self.last() - self.first()
    }

    /// Get the strategy that produced the borders
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Get the width of each bin
    pub fn widths(&self) -> Vec<f64> {
        self.edges.windows(2).map(|pair| pair[1] - pair[0]).collect()
    }

    /// Find which bin contains a given value
    ///
    /// Bins are half-open `[left, right)`; values at or beyond the last
    /// border, or below the first, belong to no bin.
    pub fn bin_index(&self, value: f64) -> Option<usize> {
        if !(value >= self.first() && value < self.last()) {
            return None;
        }
        Some(self.edges.partition_point(|&edge| edge <= value) - 1)
    }

    /// Consume the set and return the border positions
    pub fn into_edges(self) -> Vec<f64> {
        self.edges
    }
}

impl fmt::Display for BorderSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BorderSet({} bins, {} strategy, span=[{:.3}, {:.3}])",
            self.num_bins(),
            self.strategy,
            self.first(),
            self.last()
        )
    }
}
