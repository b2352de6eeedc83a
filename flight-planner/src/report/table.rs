//! Plain-text comparison table.

use std::fmt;

use askama::Template;

use crate::domain::format_duration;
use crate::planner::{Comparison, ComparisonRow};

/// Placeholder for a value the row does not have.
const MISSING: &str = "N/A";

/// Whole comparison report.
#[derive(Template)]
#[template(path = "comparison.txt")]
pub struct ComparisonTemplate {
    pub origin: String,
    pub destination: String,
    pub earliest: String,
    pub header: String,
    pub rule: String,
    pub rows: Vec<RowView>,
}

impl ComparisonTemplate {
    /// Create from a finished comparison.
    pub fn from_comparison(comparison: &Comparison) -> Self {
        let header = format_line(&[
            "Mode",
            "Cabin",
            "Dep",
            "Arr",
            "Duration",
            "Stops",
            "Total Price",
            "Note",
        ]);
        let rule = "-".repeat(header.len());

        Self {
            origin: comparison.request.origin.to_string(),
            destination: comparison.request.destination.to_string(),
            earliest: comparison.request.earliest_departure.to_string(),
            header,
            rule,
            rows: comparison.rows.iter().map(RowView::from_row).collect(),
        }
    }
}

/// One table row, already formatted cell by cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub mode: String,
    pub cabin: String,
    pub depart: String,
    pub arrive: String,
    pub duration: String,
    pub stops: String,
    pub price: String,
    pub note: String,
}

impl RowView {
    /// Create from a comparison row.
    pub fn from_row(row: &ComparisonRow) -> Self {
        let cabin = row
            .cabin()
            .map_or_else(|| "-".to_string(), |c| c.title().to_string());
        let price = row
            .total_price()
            .map_or_else(|| MISSING.to_string(), |p| p.to_string());

        match &row.itinerary {
            Some(itinerary) => Self {
                mode: row.label(),
                cabin,
                depart: itinerary.departure_time().to_string(),
                arrive: itinerary.arrival_time().to_string(),
                duration: format_duration(itinerary.duration()),
                stops: itinerary.stop_count().to_string(),
                price,
                note: row.note.clone(),
            },
            None => Self {
                mode: row.label(),
                cabin,
                depart: MISSING.to_string(),
                arrive: MISSING.to_string(),
                duration: MISSING.to_string(),
                stops: MISSING.to_string(),
                price,
                note: row.note.clone(),
            },
        }
    }
}

impl fmt::Display for RowView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_line(&[
            &self.mode,
            &self.cabin,
            &self.depart,
            &self.arrive,
            &self.duration,
            &self.stops,
            &self.price,
            &self.note,
        ]))
    }
}

/// Pad the first seven cells to their column widths.
fn format_line(cells: &[&str; 8]) -> String {
    let [mode, cabin, dep, arr, duration, stops, price, note] = cells;
    let line = format!("{mode:20} {cabin:10} {dep:6} {arr:6} {duration:10} {stops:5} {price:12} {note}");
    line.trim_end().to_string()
}

/// Render a comparison as a fixed-width text table.
pub fn render_table(comparison: &Comparison) -> Result<String, askama::Error> {
    ComparisonTemplate::from_comparison(comparison).render()
}
