//! Comparison reports.
//!
//! A [`Comparison`](crate::planner::Comparison) renders either as a
//! fixed-width text table or as JSON.

mod json;
mod table;

pub use json::{ComparisonReport, ItineraryReport, LegReport, RowReport, render_json};
pub use table::{ComparisonTemplate, RowView, render_table};
