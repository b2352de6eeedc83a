//! JSON comparison report.

use serde::Serialize;

use crate::domain::{Cabin, Flight, Itinerary};
use crate::planner::{Comparison, ComparisonRow};

/// A whole comparison.
#[derive(Debug, Serialize)]
pub struct ComparisonReport {
    /// Origin airport code
    pub origin: String,

    /// Destination airport code
    pub destination: String,

    /// Earliest allowed departure (HH:MM)
    pub earliest_departure: String,

    /// One entry per search mode
    pub rows: Vec<RowReport>,
}

/// One search mode and its outcome.
#[derive(Debug, Serialize)]
pub struct RowReport {
    /// Display label, e.g. "Cheapest (Economy)"
    pub mode: String,

    /// Cabin used for pricing (absent for earliest arrival)
    pub cabin: Option<Cabin>,

    /// Whether an itinerary was found
    pub found: bool,

    /// Empty when found
    pub note: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub itinerary: Option<ItineraryReport>,
}

/// A found itinerary.
#[derive(Debug, Serialize)]
pub struct ItineraryReport {
    pub departure: String,
    pub arrival: String,
    pub duration_minutes: i64,
    pub stops: usize,

    /// Sum of leg prices in the row's cabin
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_price: Option<u64>,

    pub legs: Vec<LegReport>,
}

/// One flight of an itinerary.
#[derive(Debug, Serialize)]
pub struct LegReport {
    pub flight_number: String,
    pub origin: String,
    pub dest: String,
    pub depart: String,
    pub arrive: String,
}

impl ComparisonReport {
    /// Create from a finished comparison.
    pub fn from_comparison(comparison: &Comparison) -> Self {
        Self {
            origin: comparison.request.origin.to_string(),
            destination: comparison.request.destination.to_string(),
            earliest_departure: comparison.request.earliest_departure.to_string(),
            rows: comparison.rows.iter().map(RowReport::from_row).collect(),
        }
    }
}

impl RowReport {
    /// Create from a comparison row.
    pub fn from_row(row: &ComparisonRow) -> Self {
        Self {
            mode: row.label(),
            cabin: row.cabin(),
            found: row.itinerary.is_some(),
            note: row.note.clone(),
            itinerary: row
                .itinerary
                .as_ref()
                .map(|i| ItineraryReport::from_itinerary(i, row.total_price())),
        }
    }
}

impl ItineraryReport {
    /// Create from an itinerary and the price already computed for its row.
    pub fn from_itinerary(itinerary: &Itinerary, total_price: Option<u64>) -> Self {
        Self {
            departure: itinerary.departure_time().to_string(),
            arrival: itinerary.arrival_time().to_string(),
            duration_minutes: itinerary.duration().num_minutes(),
            stops: itinerary.stop_count(),
            total_price,
            legs: itinerary
                .flights()
                .iter()
                .map(|f| LegReport::from_flight(f))
                .collect(),
        }
    }
}

impl LegReport {
    /// Create from a flight.
    pub fn from_flight(flight: &Flight) -> Self {
        Self {
            flight_number: flight.flight_number().to_string(),
            origin: flight.origin().to_string(),
            dest: flight.dest().to_string(),
            depart: flight.depart().to_string(),
            arrive: flight.arrive().to_string(),
        }
    }
}

/// Render a comparison as pretty-printed JSON.
pub fn render_json(comparison: &Comparison) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&ComparisonReport::from_comparison(comparison))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AirportCode, ClockTime, Fares};
    use crate::planner::{NO_ITINERARY_NOTE, Planner, RouteGraph, SearchConfig, SearchRequest, compare};
    use serde_json::Value;

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

    fn render(origin: &str, dest: &str) -> Value {
        let graph = RouteGraph::build(vec![
            flight("AB1", "A", "B", "08:00", "10:00", (100, 200, 300)),
            flight("BC1", "B", "C", "11:00", "13:00", (50, 100, 150)),
            flight("AC1", "A", "C", "09:00", "15:00", (200, 250, 300)),
        ]);
        let config = SearchConfig::default();
        let planner = Planner::new(&graph, &config);
        let comparison = compare(
            &planner,
            &SearchRequest::new(code(origin), code(dest), time("07:00")),
        );
        serde_json::from_str(&render_json(&comparison).unwrap()).unwrap()
    }

    #[test]
    fn route_fields() {
        let json = render("A", "C");

        assert_eq!(json["origin"], "A");
        assert_eq!(json["destination"], "C");
        assert_eq!(json["earliest_departure"], "07:00");
        assert_eq!(json["rows"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn earliest_row() {
        let json = render("A", "C");
        let row = &json["rows"][0];

        assert_eq!(row["mode"], "Earliest arrival");
        assert!(row["cabin"].is_null());
        assert_eq!(row["found"], true);
        assert_eq!(row["note"], "");

        let itinerary = &row["itinerary"];
        assert_eq!(itinerary["departure"], "08:00");
        assert_eq!(itinerary["arrival"], "13:00");
        assert_eq!(itinerary["duration_minutes"], 300);
        assert_eq!(itinerary["stops"], 1);
        assert!(itinerary.get("total_price").is_none());

        let legs: Vec<&str> = itinerary["legs"]
            .as_array()
            .unwrap()
            .iter()
            .map(|l| l["flight_number"].as_str().unwrap())
            .collect();
        assert_eq!(legs, vec!["AB1", "BC1"]);
    }

    #[test]
    fn cheapest_rows() {
        let json = render("A", "C");
        let rows = json["rows"].as_array().unwrap();

        assert_eq!(rows[1]["cabin"], "economy");
        assert_eq!(rows[1]["itinerary"]["total_price"], 150);
        assert_eq!(rows[2]["cabin"], "business");
        assert_eq!(rows[2]["itinerary"]["total_price"], 250);
        assert_eq!(rows[3]["itinerary"]["legs"][0]["flight_number"], "AC1");
        assert_eq!(rows[3]["itinerary"]["legs"][0]["depart"], "09:00");
    }

    #[test]
    fn unreachable_rows() {
        let json = render("C", "A");

        for row in json["rows"].as_array().unwrap() {
            assert_eq!(row["found"], false);
            assert_eq!(row["note"], NO_ITINERARY_NOTE);
            assert!(row.get("itinerary").is_none());
        }
    }
}
