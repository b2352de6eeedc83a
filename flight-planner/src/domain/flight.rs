//! Scheduled flight legs.

use chrono::Duration;

use super::{AirportCode, Cabin, ClockTime, DomainError, Fares};

/// One scheduled flight between two airports.
///
/// Flights are immutable once built. `Flight::new` is the only constructor
/// and it guarantees the flight arrives strictly after it departs.
///
/// # Examples
///
/// ```
/// use flight_planner::domain::{AirportCode, Cabin, ClockTime, Fares, Flight};
///
/// let flight = Flight::new(
///     AirportCode::parse("ICN").unwrap(),
///     AirportCode::parse("NRT").unwrap(),
///     "KE701",
///     ClockTime::parse_hhmm("08:00").unwrap(),
///     ClockTime::parse_hhmm("10:15").unwrap(),
///     Fares::new(180, 420, 900),
/// )
/// .unwrap();
///
/// assert_eq!(flight.price_for(Cabin::Business), 420);
/// assert_eq!(flight.duration().num_minutes(), 135);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Flight {
    origin: AirportCode,
    dest: AirportCode,
    flight_number: String,
    depart: ClockTime,
    arrive: ClockTime,
    fares: Fares,
}

impl Flight {
    /// Build a flight, validating its timing.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the flight number is empty or `arrive <= depart`.
    pub fn new(
        origin: AirportCode,
        dest: AirportCode,
        flight_number: impl Into<String>,
        depart: ClockTime,
        arrive: ClockTime,
        fares: Fares,
    ) -> Result<Self, DomainError> {
        let flight_number = flight_number.into();

        if flight_number.is_empty() {
            return Err(DomainError::EmptyFlightNumber);
        }

        if arrive <= depart {
            return Err(DomainError::ArrivalNotAfterDeparture {
                flight_number,
                depart,
                arrive,
            });
        }

        Ok(Self {
            origin,
            dest,
            flight_number,
            depart,
            arrive,
            fares,
        })
    }

    /// Departure airport.
    pub fn origin(&self) -> &AirportCode {
        &self.origin
    }

    /// Arrival airport.
    pub fn dest(&self) -> &AirportCode {
        &self.dest
    }

    /// Flight number as given in the schedule.
    pub fn flight_number(&self) -> &str {
        &self.flight_number
    }

    /// Scheduled departure time.
    pub fn depart(&self) -> ClockTime {
        self.depart
    }

    /// Scheduled arrival time.
    pub fn arrive(&self) -> ClockTime {
        self.arrive
    }

    /// All cabin prices.
    pub fn fares(&self) -> &Fares {
        &self.fares
    }

    /// Price of this leg in `cabin`.
    pub fn price_for(&self, cabin: Cabin) -> u32 {
        self.fares.price_for(cabin)
    }

    /// Time in the air. Always positive.
    pub fn duration(&self) -> Duration {
        self.arrive.signed_duration_since(self.depart)
    }
}
