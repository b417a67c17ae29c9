//! Binning strategy selection

use crate::builders::{EqualOccupancy, EqualWidth, ExponentialWidth};
use crate::error::{Error, Result};
use crate::traits::EdgeBuilder;
use std::fmt;
use std::str::FromStr;

/// The recognized binning strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Approximately equal sample count per bin
    Occupancy,
    /// Uniform bin width across the data range
    Width,
    /// Bin widths growing exponentially from the low end
    ExpWidth,
}

impl Strategy {
    /// Every recognized strategy, in tag order
    pub const ALL: [Strategy; 3] = [Strategy::Occupancy, Strategy::Width, Strategy::ExpWidth];

    /// The lowercase tag accepted on the command line
    pub fn tag(&self) -> &'static str {
        match self {
            Strategy::Occupancy => "occupancy",
            Strategy::Width => "width",
            Strategy::ExpWidth => "expwidth",
        }
    }

    /// The edge builder implementing this strategy
    pub fn builder(&self) -> &'static dyn EdgeBuilder {
        match self {
            Strategy::Occupancy => &EqualOccupancy,
            Strategy::Width => &EqualWidth,
            Strategy::ExpWidth => &ExponentialWidth,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for Strategy {
    type Err = Error;

    /// Parse a strategy tag, case-sensitively
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "occupancy" => Ok(Strategy::Occupancy),
            "width" => Ok(Strategy::Width),
            "expwidth" => Ok(Strategy::ExpWidth),
            other => Err(Error::UnknownStrategy(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_round_trip() {
        for strategy in Strategy::ALL {
            assert_eq!(strategy.tag().parse::<Strategy>().ok(), Some(strategy));
            assert_eq!(strategy.to_string(), strategy.tag());
        }
    }

    #[test]
    fn test_unknown_tag_rejected() {
        let err = "bogus".parse::<Strategy>().unwrap_err();
        assert!(matches!(err, Error::UnknownStrategy(ref tag) if tag == "bogus"));
    }

    #[test]
    fn test_tags_are_case_sensitive() {
        assert!("Width".parse::<Strategy>().is_err());
        assert!("OCCUPANCY".parse::<Strategy>().is_err());
    }

    #[test]
    fn test_builder_names_match_tags() {
        for strategy in Strategy::ALL {
            assert_eq!(strategy.builder().name(), strategy.tag());
        }
    }
}
