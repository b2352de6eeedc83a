//! Side-by-side comparison of search modes.
//!
//! Runs the earliest-arrival search once and the cheapest search once per
//! cabin, collecting one row per run for the reporters.

use std::fmt;

use tracing::info;

use crate::domain::{Cabin, Itinerary};

use super::search::{Planner, SearchRequest};

/// Note attached to a row whose search found nothing.
pub const NO_ITINERARY_NOTE: &str = "(no valid itinerary)";

/// What a comparison row optimizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// Soonest arrival at the destination.
    EarliestArrival,
    /// Lowest total fare in one cabin.
    Cheapest(Cabin),
}

impl SearchMode {
    /// Every mode, in report order.
    pub fn all() -> Vec<SearchMode> {
        std::iter::once(SearchMode::EarliestArrival)
            .chain(Cabin::ALL.into_iter().map(SearchMode::Cheapest))
            .collect()
    }

    /// The cabin used for pricing, if the mode has one.
    pub fn cabin(&self) -> Option<Cabin> {
        match self {
            SearchMode::EarliestArrival => None,
            SearchMode::Cheapest(cabin) => Some(*cabin),
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchMode::EarliestArrival => f.pad("Earliest arrival"),
            SearchMode::Cheapest(cabin) => f.pad(&format!("Cheapest ({})", cabin.title())),
        }
    }
}

/// One search mode and its outcome.
#[derive(Debug, Clone)]
pub struct ComparisonRow {
    pub mode: SearchMode,
    pub itinerary: Option<Itinerary>,
    pub note: String,
}

impl ComparisonRow {
    /// Build a row, deriving the note from whether anything was found.
    pub fn new(mode: SearchMode, itinerary: Option<Itinerary>) -> Self {
        let note = if itinerary.is_some() {
            String::new()
        } else {
            NO_ITINERARY_NOTE.to_string()
        };
        Self {
            mode,
            itinerary,
            note,
        }
    }

    /// Display label, e.g. "Cheapest (Economy)".
    pub fn label(&self) -> String {
        self.mode.to_string()
    }

    /// The cabin used for pricing; `None` for earliest arrival.
    pub fn cabin(&self) -> Option<Cabin> {
        self.mode.cabin()
    }

    /// Total price in the row's cabin, if it has both a cabin and a result.
    pub fn total_price(&self) -> Option<u64> {
        let cabin = self.cabin()?;
        self.itinerary.as_ref().map(|i| i.total_price(cabin))
    }
}

/// All rows for one query, in report order.
#[derive(Debug, Clone)]
pub struct Comparison {
    pub request: SearchRequest,
    pub rows: Vec<ComparisonRow>,
}

impl Comparison {
    /// Returns true if no mode found an itinerary.
    pub fn is_unreachable(&self) -> bool {
        self.rows.iter().all(|row| row.itinerary.is_none())
    }
}

/// Run every search mode for `request`.
///
/// Rows come back earliest arrival first, then economy, business, first.
/// A mode that finds nothing still gets a row.
pub fn compare(planner: &Planner<'_>, request: &SearchRequest) -> Comparison {
    let rows: Vec<ComparisonRow> = SearchMode::all()
        .into_iter()
        .map(|mode| {
            let itinerary = match mode {
                SearchMode::EarliestArrival => planner.earliest_arrival(request),
                SearchMode::Cheapest(cabin) => planner.cheapest(request, cabin),
            };
            ComparisonRow::new(mode, itinerary)
        })
        .collect();

    info!(
        origin = %request.origin,
        destination = %request.destination,
        earliest = %request.earliest_departure,
        found = rows.iter().filter(|r| r.itinerary.is_some()).count(),
        "Comparison complete"
    );

    Comparison {
        request: request.clone(),
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AirportCode, ClockTime, Fares, Flight};
    use crate::planner::{RouteGraph, SearchConfig};

    fn code(s: &str) -> AirportCode {
        AirportCode::parse(s).unwrap()
    }

    fn time(s: &str) -> ClockTime {
        ClockTime::parse_hhmm(s).unwrap()
    }

    fn flight(number: &str, from: &str, to: &str, dep: &str, arr: &str, fares: (u32, u32, u32)) -> Flight {
        Flight::new(
            code(from),
            code(to),
            number,
            time(dep),
            time(arr),
            Fares::new(fares.0, fares.1, fares.2),
        )
        .unwrap()
    }

    fn graph() -> RouteGraph {
        RouteGraph::build(vec![
            flight("AB1", "A", "B", "08:00", "10:00", (100, 200, 300)),
            flight("BC1", "B", "C", "11:00", "13:00", (50, 100, 150)),
            flight("AC1", "A", "C", "09:00", "15:00", (200, 250, 300)),
        ])
    }

    #[test]
    fn mode_labels() {
        let labels: Vec<String> = SearchMode::all().iter().map(|m| m.to_string()).collect();
        assert_eq!(
            labels,
            vec![
                "Earliest arrival",
                "Cheapest (Economy)",
                "Cheapest (Business)",
                "Cheapest (First)",
            ]
        );
        assert_eq!(format!("{:20}|", SearchMode::EarliestArrival), "Earliest arrival    |");
    }

    #[test]
    fn mode_cabins() {
        assert_eq!(SearchMode::EarliestArrival.cabin(), None);
        assert_eq!(SearchMode::Cheapest(Cabin::First).cabin(), Some(Cabin::First));
    }

    #[test]
    fn rows_in_fixed_order() {
        let graph = graph();
        let config = SearchConfig::default();
        let planner = Planner::new(&graph, &config);
        let request = SearchRequest::new(code("A"), code("C"), time("07:00"));

        let comparison = compare(&planner, &request);

        let modes: Vec<_> = comparison.rows.iter().map(|r| r.mode).collect();
        assert_eq!(modes, SearchMode::all());
        assert!(!comparison.is_unreachable());
        assert_eq!(comparison.request, request);
    }

    #[test]
    fn rows_carry_results() {
        let graph = graph();
        let config = SearchConfig::default();
        let planner = Planner::new(&graph, &config);
        let request = SearchRequest::new(code("A"), code("C"), time("07:00"));

        let comparison = compare(&planner, &request);
        let rows = &comparison.rows;

        assert_eq!(rows[0].itinerary.as_ref().unwrap().arrival_time(), time("13:00"));
        assert_eq!(rows[0].total_price(), None);
        assert_eq!(rows[0].cabin(), None);
        assert_eq!(rows[1].total_price(), Some(150));
        assert_eq!(rows[2].total_price(), Some(250));
        assert_eq!(rows[3].total_price(), Some(300));
        assert!(rows.iter().all(|r| r.note.is_empty()));
    }

    #[test]
    fn unreachable_rows_have_note() {
        let graph = graph();
        let config = SearchConfig::default();
        let planner = Planner::new(&graph, &config);
        let request = SearchRequest::new(code("C"), code("A"), time("07:00"));

        let comparison = compare(&planner, &request);

        assert_eq!(comparison.rows.len(), 4);
        assert!(comparison.is_unreachable());
        for row in &comparison.rows {
            assert!(row.itinerary.is_none());
            assert_eq!(row.note, NO_ITINERARY_NOTE);
            assert_eq!(row.total_price(), None);
        }
    }
}
