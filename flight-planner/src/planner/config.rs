//! Search configuration for the itinerary planner.

use chrono::Duration;

/// Default minimum time on the ground between connecting flights.
pub const DEFAULT_MIN_LAYOVER_MINS: i64 = 60;

/// Configuration parameters for itinerary search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Minimum time between arriving on one flight and departing on the
    /// next (minutes). A layover exactly this long is allowed.
    pub min_layover_mins: i64,
}

impl SearchConfig {
    /// Create a new configuration with the given minimum layover.
    pub fn new(min_layover_mins: i64) -> Self {
        Self { min_layover_mins }
    }

    /// Returns the minimum layover as a Duration.
    pub fn min_layover(&self) -> Duration {
        Duration::minutes(self.min_layover_mins)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_layover_mins: DEFAULT_MIN_LAYOVER_MINS,
        }
    }
}
