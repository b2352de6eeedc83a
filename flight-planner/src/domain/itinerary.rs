//! Itinerary types.
//!
//! An `Itinerary` is a complete trip from origin to destination made of one
//! or more connecting flights.

use std::sync::Arc;

use chrono::Duration;

use super::{AirportCode, Cabin, ClockTime, DomainError, Flight};

/// A chain of connecting flights.
///
/// # Invariants
///
/// - At least one flight
/// - Consecutive flights connect (destination of one = origin of next)
///
/// Layover rules are a search concern and are not checked here; see
/// [`Itinerary::shortest_layover`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Itinerary {
    flights: Vec<Arc<Flight>>,
}

impl Itinerary {
    /// Constructs an itinerary from flights in travel order.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - The list is empty
    /// - Flights don't connect (destination != next origin)
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::Arc;
    /// use flight_planner::domain::{AirportCode, ClockTime, Fares, Flight, Itinerary};
    ///
    /// let code = |s: &str| AirportCode::parse(s).unwrap();
    /// let time = |s: &str| ClockTime::parse_hhmm(s).unwrap();
    ///
    /// let first = Flight::new(code("A"), code("B"), "F1", time("08:00"), time("10:00"), Fares::new(100, 200, 300)).unwrap();
    /// let second = Flight::new(code("B"), code("C"), "F2", time("11:00"), time("13:00"), Fares::new(50, 100, 150)).unwrap();
    ///
    /// let itinerary = Itinerary::new(vec![Arc::new(first), Arc::new(second)]).unwrap();
    /// assert_eq!(itinerary.stop_count(), 1);
    /// assert_eq!(itinerary.arrival_time(), time("13:00"));
    /// ```
    pub fn new(flights: Vec<Arc<Flight>>) -> Result<Self, DomainError> {
        if flights.is_empty() {
            return Err(DomainError::EmptyItinerary);
        }

        for window in flights.windows(2) {
            let prev_dest = window[0].dest();
            let next_origin = window[1].origin();
            if prev_dest != next_origin {
                return Err(DomainError::Disconnected(
                    prev_dest.clone(),
                    next_origin.clone(),
                ));
            }
        }

        Ok(Itinerary { flights })
    }

    /// The flights in travel order.
    pub fn flights(&self) -> &[Arc<Flight>] {
        &self.flights
    }

    /// Returns the first flight.
    pub fn first_flight(&self) -> &Flight {
        // Invariant: at least one flight
        &self.flights[0]
    }

    /// Returns the last flight.
    pub fn last_flight(&self) -> &Flight {
        // Invariant: at least one flight
        &self.flights[self.flights.len() - 1]
    }

    /// Origin airport of the first flight.
    pub fn origin(&self) -> &AirportCode {
        self.first_flight().origin()
    }

    /// Destination airport of the last flight.
    pub fn destination(&self) -> &AirportCode {
        self.last_flight().dest()
    }

    /// Departure time of the first flight.
    pub fn departure_time(&self) -> ClockTime {
        self.first_flight().depart()
    }

    /// Arrival time of the last flight.
    pub fn arrival_time(&self) -> ClockTime {
        self.last_flight().arrive()
    }

    /// Elapsed time from first departure to final arrival.
    pub fn duration(&self) -> Duration {
        self.arrival_time()
            .signed_duration_since(self.departure_time())
    }

    /// Number of intermediate stops (0 for a nonstop flight).
    pub fn stop_count(&self) -> usize {
        self.flights.len() - 1
    }

    /// Returns true for a single-flight itinerary.
    pub fn is_nonstop(&self) -> bool {
        self.flights.len() == 1
    }

    /// Sum of every leg's price in `cabin`.
    pub fn total_price(&self, cabin: Cabin) -> u64 {
        self.flights
            .iter()
            .map(|f| u64::from(f.price_for(cabin)))
            .sum()
    }

    /// Airports where the traveller changes planes.
    pub fn connections(&self) -> impl Iterator<Item = &AirportCode> {
        self.flights[..self.flights.len() - 1]
            .iter()
            .map(|f| f.dest())
    }

    /// Ground time at each connection, in travel order.
    pub fn layovers(&self) -> impl Iterator<Item = Duration> + '_ {
        self.flights
            .windows(2)
            .map(|w| w[1].depart().signed_duration_since(w[0].arrive()))
    }

    /// The tightest connection, or `None` for a nonstop itinerary.
    pub fn shortest_layover(&self) -> Option<Duration> {
        self.layovers().min()
    }
}
