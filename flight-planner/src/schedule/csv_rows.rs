//! CSV schedule files.
//!
//! The header row must name every column in [`COLUMNS`]; column order is
//! free and extra columns are ignored.

use std::io::Read;

use serde::Deserialize;
use tracing::debug;

use crate::domain::Flight;

use super::error::LoadError;
use super::record::{COLUMNS, RawRecord};

/// One CSV row, before validation.
#[derive(Debug, Deserialize)]
struct CsvFlightRow {
    origin: String,
    dest: String,
    flight_number: String,
    depart: String,
    arrive: String,
    economy: String,
    business: String,
    first: String,
}

impl CsvFlightRow {
    fn as_raw(&self) -> RawRecord<'_> {
        RawRecord {
            origin: &self.origin,
            dest: &self.dest,
            flight_number: &self.flight_number,
            depart: &self.depart,
            arrive: &self.arrive,
            economy: &self.economy,
            business: &self.business,
            first: &self.first,
        }
    }
}

/// Parse every flight from a CSV schedule.
///
/// `path` names the source in error messages. Line numbers count the header
/// as line 1.
pub fn parse_flights_csv<R: Read>(path: &str, reader: R) -> Result<Vec<Flight>, LoadError> {
    let csv_error = |source| LoadError::Csv {
        path: path.to_string(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers().map_err(csv_error)?.clone();
    let missing: Vec<String> = COLUMNS
        .iter()
        .filter(|column| !headers.iter().any(|h| h == **column))
        .map(|column| column.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(LoadError::MissingColumns {
            path: path.to_string(),
            missing,
        });
    }

    let mut flights = Vec::new();
    for result in reader.records() {
        let record = result.map_err(csv_error)?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        let row: CsvFlightRow = record.deserialize(Some(&headers)).map_err(csv_error)?;

        let flight = row
            .as_raw()
            .into_flight()
            .map_err(|error| LoadError::Record {
                path: path.to_string(),
                line,
                error,
            })?;
        flights.push(flight);
    }

    debug!(path, flights = flights.len(), "Parsed CSV schedule");
    Ok(flights)
}
