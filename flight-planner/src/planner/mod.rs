//! Itinerary planner using priority-queue search.
//!
//! This module implements the core planning algorithms that answer:
//! "Leaving no earlier than this time, what is the soonest I can arrive,
//! and what is the cheapest way to get there in each cabin?"
//!
//! Flights are grouped into a route graph, then searched with a min-heap
//! keyed on arrival time or accumulated fare, honouring a minimum layover
//! between connecting flights.

mod compare;
mod config;
mod graph;
mod search;


pub use compare::{Comparison, ComparisonRow, NO_ITINERARY_NOTE, SearchMode, compare};
pub use config::{DEFAULT_MIN_LAYOVER_MINS, SearchConfig};
pub use graph::RouteGraph;
pub use search::{CheapestFare, Criterion, EarliestArrival, Planner, SearchRequest, SearchResult};
