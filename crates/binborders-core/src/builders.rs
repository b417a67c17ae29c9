//! Edge builders for the binning strategies

use crate::error::{Error, Result};
use crate::traits::EdgeBuilder;

/// Extra headroom added to the bin count when sizing the regular step
///
/// The divisor `num_bins + STEP_HEADROOM` leaves the generated grid slightly
/// short of the sample maximum, so the true maximum can close the final bin
/// as its own edge. Width and expwidth borders shift if this value changes.
pub const STEP_HEADROOM: f64 = 0.1;

/// Equal-occupancy bins: edges at fixed strides through the sorted sample
///
/// The stride is `len / num_bins` rounded down. When the sample size is not
/// a multiple of the bin count, the leftover values join the last bin rather
/// than forming their own.
pub struct EqualOccupancy;

impl EdgeBuilder for EqualOccupancy {
    fn raw_edges(&self, sorted_sample: &[f64], num_bins: usize) -> Result<Vec<f64>> {
        let len = sorted_sample.len();
        let stride = len / num_bins;
        if stride == 0 {
            return Err(Error::InsufficientData {
                expected: num_bins,
                actual: len,
            });
        }

        let mut edges: Vec<f64> = (0..=len - stride)
            .step_by(stride)
            .map(|i| sorted_sample[i])
            .collect();
        edges.push(sorted_sample[len - 1]);
        Ok(edges)
    }

    fn name(&self) -> &'static str {
        "occupancy"
    }
}

/// Equal-width bins across the data range
pub struct EqualWidth;

impl EdgeBuilder for EqualWidth {
    fn raw_edges(&self, sorted_sample: &[f64], num_bins: usize) -> Result<Vec<f64>> {
        let bottom = sorted_sample[0];
        let top = sorted_sample[sorted_sample.len() - 1];
        let step = (top - bottom) / (num_bins as f64 + STEP_HEADROOM);

        let mut edges: Vec<f64> = (0..num_bins)
            .map(|i| bottom + i as f64 * step)
            .collect();
        edges.push(top);
        Ok(edges)
    }

    fn name(&self) -> &'static str {
        "width"
    }
}

/// Exponentially widening bins
///
/// Edges follow `bottom + (exp(i * step) - 1)` with the step sized in log
/// space over the range, packing narrow bins near the low end. Requires a
/// range greater than one; narrower ranges give a non-positive step and a
/// non-increasing raw sequence, which validation rejects downstream.
pub struct ExponentialWidth;

impl EdgeBuilder for ExponentialWidth {
    fn raw_edges(&self, sorted_sample: &[f64], num_bins: usize) -> Result<Vec<f64>> {
        let bottom = sorted_sample[0];
        let top = sorted_sample[sorted_sample.len() - 1];
        let log_range = (top - bottom).ln();
        let step = log_range / (num_bins as f64 + STEP_HEADROOM);

        let mut edges: Vec<f64> = (0..num_bins)
            .map(|i| bottom + ((i as f64 * step).exp() - 1.0))
            .collect();
        edges.push(top);
        Ok(edges)
    }

    fn name(&self) -> &'static str {
        "expwidth"
    }
}
