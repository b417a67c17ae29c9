//! Border computation pipeline
//!
//! Guards the input, dispatches to the strategy's edge builder, applies the
//! outer-border safety adjustment, and validates the result.

use crate::error::{Error, Result};
use crate::strategy::Strategy;
use crate::types::BorderSet;
use tracing::debug;

/// Divisor applied to the data range to obtain the outer safety gap
///
/// The first border moves one gap below the sample minimum and the last one
/// gap above the maximum, so no value can land exactly on an outer border
/// under half-open binning. Outer borders shift if this value changes.
pub const SAFETY_GAP_DIVISOR: f64 = 20.0;

/// Compute bin borders for an unsorted sample
///
/// Sorts a copy ascending and delegates to [`compute_borders_sorted`].
pub fn compute_borders(sample: &[f64], strategy: Strategy, num_bins: usize) -> Result<BorderSet> {
    let mut sorted = sample.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    compute_borders_sorted(&sorted, strategy, num_bins)
}

/// Compute bin borders for a sample already sorted ascending
///
/// The sort order is trusted, not checked. An unsorted sample produces an
/// edge sequence that validation will usually, but not always, reject.
pub fn compute_borders_sorted(
    sorted_sample: &[f64],
    strategy: Strategy,
    num_bins: usize,
) -> Result<BorderSet> {
    Error::check_non_empty(sorted_sample)?;
    Error::check_num_bins(num_bins)?;

    let bottom = sorted_sample[0];
    let top = sorted_sample[sorted_sample.len() - 1];
    Error::check_range(bottom, top)?;

    debug!(
        "Computing {} borders with {} strategy for {} values in [{}, {}]",
        num_bins + 1,
        strategy,
        sorted_sample.len(),
        bottom,
        top
    );

    let mut edges = strategy.builder().raw_edges(sorted_sample, num_bins)?;
    widen_outer_borders(&mut edges, top - bottom);

    let borders = BorderSet::new(edges, strategy, num_bins)?;
    debug!("Borders span [{}, {}]", borders.first(), borders.last());
    Ok(borders)
}

/// Move the outermost borders one safety gap beyond the data extremes
fn widen_outer_borders(edges: &mut [f64], range: f64) {
    let gap = range / SAFETY_GAP_DIVISOR;
    if let Some(first) = edges.first_mut() {
        *first -= gap;
    }
    if let Some(last) = edges.last_mut() {
        *last += gap;
    }
}
