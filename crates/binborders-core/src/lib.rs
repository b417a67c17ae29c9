//! Histogram bin-border computation for flattened intensity samples
//!
//! This crate computes the border positions a histogram should use for a
//! one-dimensional sample, without counting anything into bins. It offers
//! three placement strategies and validates every result before handing it
//! back, so downstream binning code can rely on the border sequence.
//!
//! # Key Features
//!
//! - **Three strategies**: equal occupancy, equal width, and exponentially
//!   growing width for right-skewed data
//! - **Safety margin**: the outer borders sit strictly beyond the data
//!   extremes, so no value lands on an outer edge under half-open binning
//! - **Validated output**: border count and strict monotonicity are checked
//!   before a [`BorderSet`] is produced
//! - **Plain slices**: works with any `&[f64]` sample
//!
//! # Examples
//!
//! ## Equal-Width Borders
//!
//! ```rust
//! use binborders_core::{compute_borders, Strategy};
//!
//! let sample = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
//! let borders = compute_borders(&sample, Strategy::Width, 3).unwrap();
//!
//! assert_eq!(borders.num_bins(), 3);
//! assert!(borders.first() < 1.0);
//! assert!(borders.last() > 10.0);
//! ```
//!
//! ## Equal-Occupancy Borders
//!
//! ```rust
//! use binborders_core::occupancy_borders;
//!
//! let sample: Vec<f64> = (1..=20).map(f64::from).collect();
//! let borders = occupancy_borders(&sample, 4).unwrap();
//!
//! // Each bin covers five of the twenty values
//! assert_eq!(borders.num_borders(), 5);
//! assert_eq!(borders.bin_index(1.0), Some(0));
//! assert_eq!(borders.bin_index(20.0), Some(3));
//! ```
//!
//! ## Selecting a Strategy by Tag
//!
//! ```rust
//! use binborders_core::Strategy;
//!
//! let strategy: Strategy = "expwidth".parse().unwrap();
//! assert_eq!(strategy, Strategy::ExpWidth);
//! assert!("median".parse::<Strategy>().is_err());
//! ```

pub mod builders;
pub mod compute;
pub mod error;
pub mod strategy;
pub mod traits;
pub mod types;

// Re-export main types and traits
pub use builders::{EqualOccupancy, EqualWidth, ExponentialWidth, STEP_HEADROOM};
pub use compute::{compute_borders, compute_borders_sorted, SAFETY_GAP_DIVISOR};
pub use error::{Error, Result};
pub use strategy::Strategy;
pub use traits::EdgeBuilder;
pub use types::BorderSet;

// Convenience functions
/// Compute borders giving each bin an approximately equal sample count
pub fn occupancy_borders(sample: &[f64], num_bins: usize) -> Result<BorderSet> {
    compute_borders(sample, Strategy::Occupancy, num_bins)
}

/// Compute borders with a uniform width across the data range
pub fn width_borders(sample: &[f64], num_bins: usize) -> Result<BorderSet> {
    compute_borders(sample, Strategy::Width, num_bins)
}

/// Compute borders whose widths grow exponentially from the low end
pub fn expwidth_borders(sample: &[f64], num_bins: usize) -> Result<BorderSet> {
    compute_borders(sample, Strategy::ExpWidth, num_bins)
}
