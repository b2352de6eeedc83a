//! Airport code types.

use std::fmt;
use std::sync::Arc;

/// Error returned when parsing an invalid airport code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid airport code: {reason}")]
pub struct InvalidAirportCode {
    reason: &'static str,
}

/// An airport code such as "ICN" or "SFO".
///
/// Codes are opaque identifiers: they are not checked against a list of real
/// airports. A code is non-empty and contains no whitespace. Codes order
/// lexically, which the search uses to break ties deterministically.
///
/// Cloning is cheap; the text is shared.
///
/// # Examples
///
/// ```
/// use flight_planner::domain::AirportCode;
///
/// let icn = AirportCode::parse("ICN").unwrap();
/// assert_eq!(icn.as_str(), "ICN");
///
/// assert!(AirportCode::parse("").is_err());
/// assert!(AirportCode::parse("I CN").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AirportCode(Arc<str>);

impl AirportCode {
    /// Parse an airport code from a string.
    pub fn parse(s: &str) -> Result<Self, InvalidAirportCode> {
        if s.is_empty() {
            return Err(InvalidAirportCode {
                reason: "must not be empty",
            });
        }

        if s.chars().any(char::is_whitespace) {
            return Err(InvalidAirportCode {
                reason: "must not contain whitespace",
            });
        }

        Ok(AirportCode(Arc::from(s)))
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AirportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AirportCode({})", self.as_str())
    }
}

impl fmt::Display for AirportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
