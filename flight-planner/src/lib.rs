//! Flight itinerary planner.
//!
//! Answers: "Leaving after this time, what is the fastest way to get there,
//! and what is the cheapest way in each cabin?"
//!
//! Schedules are loaded from text or CSV files, grouped into a route graph,
//! and searched with a minimum layover between connecting flights.

pub mod cli;
pub mod domain;
pub mod planner;
pub mod report;
pub mod schedule;
