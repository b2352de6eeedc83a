//! Domain error types.
//!
//! These errors represent validation failures in the domain layer. They are
//! distinct from file and parse errors, which live with the schedule loader.

use super::{AirportCode, ClockTime};

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// A flight must land after it takes off on the same day
    #[error("flight {flight_number}: arrival {arrive} must be after departure {depart}")]
    ArrivalNotAfterDeparture {
        flight_number: String,
        depart: ClockTime,
        arrive: ClockTime,
    },

    /// Flight numbers identify records in reports and errors
    #[error("flight number must not be empty")]
    EmptyFlightNumber,

    /// Consecutive legs don't share an airport
    #[error("legs do not connect: arrives at {0} but next leg departs {1}")]
    Disconnected(AirportCode, AirportCode),

    /// Itinerary has no flights
    #[error("itinerary must have at least one flight")]
    EmptyItinerary,
}
