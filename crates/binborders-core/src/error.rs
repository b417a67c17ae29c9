//! Error types for bin-border computation

use thiserror::Error;

/// Errors that can occur while computing or validating bin borders
#[derive(Error, Debug)]
pub enum Error {
    /// Strategy tag outside the recognized set
    #[error("Unknown binning strategy '{0}' (expected one of: occupancy, width, expwidth)")]
    UnknownStrategy(String),

    /// Invalid parameter provided
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Empty sample provided
    #[error("Cannot compute bin borders of an empty sample")]
    EmptySample,

    /// Sample too small for the requested bin count
    #[error("Insufficient data: need at least {expected} values, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Sample range unusable for binning
    #[error("Degenerate sample range [{bottom}, {top}]: borders need a positive finite span")]
    DegenerateRange { bottom: f64, top: f64 },

    /// Computed border count does not match the requested bin count
    #[error("Border count mismatch: expected {expected} borders, computed {actual}")]
    BorderCount { expected: usize, actual: usize },

    /// Adjacent borders fail the strictly-increasing invariant
    #[error("Borders not strictly increasing at index {index}: {left} >= {right}")]
    NotIncreasing { index: usize, left: f64, right: f64 },

    /// Unparseable numeric token in a sample file
    #[error("Invalid sample value '{token}' on line {line}")]
    InvalidSampleValue { token: String, line: usize },

    /// IO error while reading samples or writing borders
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions
impl Error {
    /// Check that the sample is non-empty
    pub fn check_non_empty(sample: &[f64]) -> Result<()> {
        if sample.is_empty() {
            return Err(Error::EmptySample);
        }
        Ok(())
    }

    /// Check that at least one bin was requested
    pub fn check_num_bins(num_bins: usize) -> Result<()> {
        if num_bins == 0 {
            return Err(Error::InvalidParameter(
                "num_bins must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Check that the sample extremes span a positive finite range
    pub fn check_range(bottom: f64, top: f64) -> Result<()> {
        let range = top - bottom;
        if !range.is_finite() || range <= 0.0 {
            return Err(Error::DegenerateRange { bottom, top });
        }
        Ok(())
    }
}
