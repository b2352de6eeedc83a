//! Route graph over scheduled flights.
//!
//! Maps each airport to the flights departing it. The graph is built once
//! from the loaded schedule and is read-only while searching.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::{AirportCode, Flight};

/// Outbound flights per airport.
///
/// Flights keep their input order within each airport so that searches
/// break ties the same way on every run.
#[derive(Debug, Clone, Default)]
pub struct RouteGraph {
    departures: HashMap<AirportCode, Vec<Arc<Flight>>>,
    flight_count: usize,
}

impl RouteGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the graph from a collection of flights.
    ///
    /// # Examples
    ///
    /// ```
    /// use flight_planner::domain::{AirportCode, ClockTime, Fares, Flight};
    /// use flight_planner::planner::RouteGraph;
    ///
    /// let code = |s: &str| AirportCode::parse(s).unwrap();
    /// let time = |s: &str| ClockTime::parse_hhmm(s).unwrap();
    /// let flight = Flight::new(code("ICN"), code("NRT"), "KE701", time("08:00"), time("10:15"), Fares::default()).unwrap();
    ///
    /// let graph = RouteGraph::build(vec![flight]);
    /// assert_eq!(graph.departures_from(&code("ICN")).len(), 1);
    /// assert!(graph.departures_from(&code("NRT")).is_empty());
    /// ```
    pub fn build<I>(flights: I) -> Self
    where
        I: IntoIterator<Item = Flight>,
    {
        let mut graph = Self::new();
        for flight in flights {
            graph.add(Arc::new(flight));
        }
        graph
    }

    /// Add one flight to its origin's departure list.
    pub fn add(&mut self, flight: Arc<Flight>) {
        self.departures
            .entry(flight.origin().clone())
            .or_default()
            .push(flight);
        self.flight_count += 1;
    }

    /// Flights leaving `airport`, in input order.
    ///
    /// Returns an empty slice for airports with no departures.
    pub fn departures_from(&self, airport: &AirportCode) -> &[Arc<Flight>] {
        self.departures
            .get(airport)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Returns true if any flight departs or arrives at `airport`.
    pub fn serves(&self, airport: &AirportCode) -> bool {
        self.departures.contains_key(airport)
            || self
                .departures
                .values()
                .flatten()
                .any(|f| f.dest() == airport)
    }

    /// Number of airports with at least one departure.
    pub fn origin_count(&self) -> usize {
        self.departures.len()
    }

    /// Total number of flights.
    pub fn flight_count(&self) -> usize {
        self.flight_count
    }

    /// Returns true if the graph has no flights.
    pub fn is_empty(&self) -> bool {
        self.flight_count == 0
    }
}
