//! Core trait for border-edge computation

use crate::error::Result;

/// Trait for computing raw border edges under one binning strategy
///
/// Implementations receive the sample sorted ascending and produce the raw
/// edge sequence, before the outer-border safety adjustment is applied.
/// Callers guarantee a non-empty sample, `num_bins >= 1`, and a positive
/// finite range; the surrounding pipeline validates the result.
pub trait EdgeBuilder {
    /// Compute raw edges for a pre-sorted sample
    ///
    /// The returned sequence is expected to hold `num_bins + 1` edges; shapes
    /// where the strategy cannot honor that are surfaced by validation.
    fn raw_edges(&self, sorted_sample: &[f64], num_bins: usize) -> Result<Vec<f64>>;

    /// Strategy tag used in diagnostics
    fn name(&self) -> &'static str;
}
