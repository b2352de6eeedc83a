//! Fare cabins and per-cabin prices.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Error returned when parsing an unknown cabin name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown cabin: {0:?} (expected economy, business or first)")]
pub struct InvalidCabin(String);

/// A fare cabin.
///
/// The set is closed: a cabin name that is not one of these is rejected when
/// parsed, so a search can never be asked for a price that does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Cabin {
    Economy,
    Business,
    First,
}

impl Cabin {
    /// All cabins, cheapest class first.
    pub const ALL: [Cabin; 3] = [Cabin::Economy, Cabin::Business, Cabin::First];

    /// Lowercase name, as used in schedule files and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Cabin::Economy => "economy",
            Cabin::Business => "business",
            Cabin::First => "first",
        }
    }

    /// Capitalized name for display ("Economy").
    pub fn title(&self) -> &'static str {
        match self {
            Cabin::Economy => "Economy",
            Cabin::Business => "Business",
            Cabin::First => "First",
        }
    }
}

impl FromStr for Cabin {
    type Err = InvalidCabin;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "economy" => Ok(Cabin::Economy),
            "business" => Ok(Cabin::Business),
            "first" => Ok(Cabin::First),
            _ => Err(InvalidCabin(s.to_string())),
        }
    }
}

impl fmt::Display for Cabin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Flat prices of one flight leg, one per cabin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Fares {
    pub economy: u32,
    pub business: u32,
    pub first: u32,
}

impl Fares {
    /// Create a fare table.
    pub fn new(economy: u32, business: u32, first: u32) -> Self {
        Self {
            economy,
            business,
            first,
        }
    }

    /// Price of this leg in the given cabin.
    pub fn price_for(&self, cabin: Cabin) -> u32 {
        match cabin {
            Cabin::Economy => self.economy,
            Cabin::Business => self.business,
            Cabin::First => self.first,
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Every cabin parses back from its own name
        #[test]
        fn name_roundtrip(idx in 0usize..3) {
            let cabin = Cabin::ALL[idx];
            prop_assert_eq!(cabin.as_str().parse::<Cabin>().unwrap(), cabin);
            prop_assert_eq!(cabin.title().parse::<Cabin>().unwrap(), cabin);
        }

        /// price_for picks exactly the matching field
        #[test]
        fn price_for_selects_field(e in 0u32..10_000, b in 0u32..10_000, f in 0u32..10_000) {
            let fares = Fares::new(e, b, f);
            prop_assert_eq!(fares.price_for(Cabin::Economy), e);
            prop_assert_eq!(fares.price_for(Cabin::Business), b);
            prop_assert_eq!(fares.price_for(Cabin::First), f);
        }
    }
}
