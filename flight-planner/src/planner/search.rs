//! Priority-queue itinerary search.
//!
//! Both searches are the same label-setting walk over the route graph:
//! labels are popped from a min-heap in order of the optimized cost and the
//! first label to reach the destination wins. The two searches differ only
//! in the [`Criterion`] that assigns costs.
//!
//! An airport is expanded again only when a label lands there strictly
//! earlier than every label already expanded at it. Labels pop in cost
//! order, so an earlier expansion is never more expensive, and landing no
//! earlier means every onward connection was already available to it.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};
use std::fmt;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::domain::{AirportCode, Cabin, ClockTime, Flight, Itinerary};

use super::config::SearchConfig;
use super::graph::RouteGraph;

/// Request for itinerary search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// Airport the traveller starts from.
    pub origin: AirportCode,

    /// Airport the traveller wants to reach.
    pub destination: AirportCode,

    /// The first flight may not leave before this time.
    pub earliest_departure: ClockTime,
}

impl SearchRequest {
    /// Create a new search request.
    pub fn new(
        origin: AirportCode,
        destination: AirportCode,
        earliest_departure: ClockTime,
    ) -> Self {
        Self {
            origin,
            destination,
            earliest_departure,
        }
    }
}

/// The quantity a search minimizes.
///
/// `Cost` orders heap entries. It must never decrease along a path, or the
/// first label to reach the destination would not be the optimal one.
pub trait Criterion {
    /// Accumulated cost of a partial itinerary.
    type Cost: Ord + Copy + fmt::Debug;

    /// Cost of standing at the origin before boarding anything.
    fn initial(&self, request: &SearchRequest) -> Self::Cost;

    /// Cost after appending `flight` to a path costing `cost`.
    fn extend(&self, cost: Self::Cost, flight: &Flight) -> Self::Cost;
}

/// Minimize the arrival time at the destination.
#[derive(Debug, Clone, Copy, Default)]
pub struct EarliestArrival;

impl Criterion for EarliestArrival {
    type Cost = ClockTime;

    fn initial(&self, request: &SearchRequest) -> ClockTime {
        request.earliest_departure
    }

    fn extend(&self, _cost: ClockTime, flight: &Flight) -> ClockTime {
        flight.arrive()
    }
}

/// Minimize the total fare in one cabin.
#[derive(Debug, Clone, Copy)]
pub struct CheapestFare(pub Cabin);

impl Criterion for CheapestFare {
    type Cost = u64;

    fn initial(&self, _request: &SearchRequest) -> u64 {
        0
    }

    fn extend(&self, cost: u64, flight: &Flight) -> u64 {
        cost + u64::from(flight.price_for(self.0))
    }
}

/// Result of a single search.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The optimal itinerary, or `None` if the destination is unreachable.
    pub itinerary: Option<Itinerary>,

    /// Number of airports expanded before the search stopped.
    pub airports_expanded: usize,
}

/// A node in the search tree. The path to a label is recovered by following
/// `parent` links back to the origin label.
#[derive(Debug)]
struct Label {
    /// Flight taken to reach this label; `None` only at the origin.
    flight: Option<Arc<Flight>>,
    parent: Option<usize>,
}

/// Heap entry: cost first, then arrival time and airport code so that equal
/// costs pop in a reproducible order, then label index so that the earliest
/// pushed label wins any remaining tie.
type HeapEntry<C> = Reverse<(C, ClockTime, AirportCode, usize)>;

/// Itinerary planner over a fixed route graph.
pub struct Planner<'a> {
    graph: &'a RouteGraph,
    config: &'a SearchConfig,
}

impl<'a> Planner<'a> {
    /// Create a new planner.
    pub fn new(graph: &'a RouteGraph, config: &'a SearchConfig) -> Self {
        Self { graph, config }
    }

    /// The itinerary that reaches the destination soonest.
    pub fn earliest_arrival(&self, request: &SearchRequest) -> Option<Itinerary> {
        self.search(&EarliestArrival, request).itinerary
    }

    /// The itinerary with the lowest total fare in `cabin`.
    pub fn cheapest(&self, request: &SearchRequest, cabin: Cabin) -> Option<Itinerary> {
        self.search(&CheapestFare(cabin), request).itinerary
    }

    /// Run a search minimizing `criterion`.
    ///
    /// The first flight must leave at or after the requested earliest
    /// departure; every later flight must leave at least the configured
    /// minimum layover after the previous one lands. A request whose origin
    /// is its destination finds nothing, since an itinerary needs a flight.
    pub fn search<C: Criterion>(&self, criterion: &C, request: &SearchRequest) -> SearchResult {
        if request.origin == request.destination {
            debug!(
                airport = %request.origin,
                "Origin equals destination, nothing to search"
            );
            return SearchResult {
                itinerary: None,
                airports_expanded: 0,
            };
        }

        let min_layover = self.config.min_layover_mins;

        let mut labels = vec![Label {
            flight: None,
            parent: None,
        }];
        let mut heap: BinaryHeap<HeapEntry<C::Cost>> = BinaryHeap::new();
        heap.push(Reverse((
            criterion.initial(request),
            request.earliest_departure,
            request.origin.clone(),
            0,
        )));

        // Earliest landing expanded at each airport
        let mut settled: HashMap<AirportCode, ClockTime> = HashMap::new();
        let mut airports_expanded = 0;

        while let Some(Reverse((cost, arrival, airport, idx))) = heap.pop() {
            let at_origin = labels[idx].flight.is_none();

            if airport == request.destination && !at_origin {
                let itinerary = reconstruct(&labels, idx);
                debug!(
                    origin = %request.origin,
                    destination = %request.destination,
                    cost = ?cost,
                    airports_expanded,
                    labels = labels.len(),
                    "Itinerary found"
                );
                return SearchResult {
                    itinerary,
                    airports_expanded,
                };
            }

            if settled.get(&airport).is_some_and(|landed| *landed <= arrival) {
                trace!(airport = %airport, cost = ?cost, "Skipping dominated label");
                continue;
            }
            settled.insert(airport.clone(), arrival);
            airports_expanded += 1;

            // No layover before the first flight
            let ready = if at_origin {
                i64::from(arrival.minutes())
            } else {
                i64::from(arrival.minutes()) + min_layover
            };

            for flight in self.graph.departures_from(&airport) {
                if i64::from(flight.depart().minutes()) < ready {
                    continue;
                }

                if settled
                    .get(flight.dest())
                    .is_some_and(|landed| *landed <= flight.arrive())
                {
                    continue;
                }

                let next_cost = criterion.extend(cost, flight);
                labels.push(Label {
                    flight: Some(Arc::clone(flight)),
                    parent: Some(idx),
                });
                heap.push(Reverse((
                    next_cost,
                    flight.arrive(),
                    flight.dest().clone(),
                    labels.len() - 1,
                )));
            }
        }

        debug!(
            origin = %request.origin,
            destination = %request.destination,
            airports_expanded,
            "No itinerary found"
        );

        SearchResult {
            itinerary: None,
            airports_expanded,
        }
    }
}

/// Follow parent links from `idx` back to the origin and build the itinerary.
fn reconstruct(labels: &[Label], idx: usize) -> Option<Itinerary> {
    let mut flights = Vec::new();
    let mut current = Some(idx);

    while let Some(i) = current {
        let label = &labels[i];
        if let Some(flight) = &label.flight {
            flights.push(Arc::clone(flight));
        }
        current = label.parent;
    }

    flights.reverse();
    Itinerary::new(flights).ok()
}
