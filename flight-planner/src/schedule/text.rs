//! Whitespace-separated schedule files.
//!
//! One flight per line:
//!
//! ```text
//! # origin dest flight depart arrive economy business first
//! ICN NRT KE701 08:00 10:15 180 420 900
//! ```
//!
//! Blank lines and lines starting with `#` are ignored.

use std::io::BufRead;

use tracing::debug;

use crate::domain::Flight;

use super::error::{LoadError, RecordError};
use super::record::RawRecord;

/// Parse one line. Returns `Ok(None)` for blank and comment lines.
pub fn parse_line(line: &str) -> Result<Option<Flight>, RecordError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let fields: Vec<&str> = line.split_whitespace().collect();
    RawRecord::from_fields(&fields)?.into_flight().map(Some)
}

/// Parse every flight from a text schedule.
///
/// `path` names the source in error messages. Line numbers start at 1.
pub fn parse_flights_txt<R: BufRead>(path: &str, reader: R) -> Result<Vec<Flight>, LoadError> {
    let mut flights = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| LoadError::Io {
            path: path.to_string(),
            source,
        })?;

        match parse_line(&line) {
            Ok(Some(flight)) => flights.push(flight),
            Ok(None) => {}
            Err(error) => {
                return Err(LoadError::Record {
                    path: path.to_string(),
                    line: idx as u64 + 1,
                    error,
                });
            }
        }
    }

    debug!(path, flights = flights.len(), "Parsed text schedule");
    Ok(flights)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCHEDULE: &str = "\
# origin dest flight depart arrive economy business first
ICN NRT KE701 08:00 10:15 180 420 900

NRT SFO JL002 12:00 22:30 650 2100 5200
   # indented comment
ICN SFO KE023 9:00 20:00 900 2500 6000
";

    #[test]
    fn skips_blank_and_comment_lines() {
        assert!(parse_line("").unwrap().is_none());
        assert!(parse_line("   ").unwrap().is_none());
        assert!(parse_line("# comment").unwrap().is_none());
    }

    #[test]
    fn parses_schedule() {
        let flights = parse_flights_txt("flights.txt", SCHEDULE.as_bytes()).unwrap();

        assert_eq!(flights.len(), 3);
        assert_eq!(flights[0].flight_number(), "KE701");
        assert_eq!(flights[1].origin().as_str(), "NRT");
        assert_eq!(flights[2].depart().to_string(), "09:00");
    }

    #[test]
    fn extra_whitespace_between_fields() {
        let flight = parse_line("  ICN\tNRT   KE701 08:00 10:15  1 2 3  ")
            .unwrap()
            .unwrap();
        assert_eq!(flight.dest().as_str(), "NRT");
    }

    #[test]
    fn error_reports_line_number() {
        let input = "ICN NRT KE701 08:00 10:15 180 420 900\n\nICN NRT KE703 11:00 10:00 1 2 3\n";
        let err = parse_flights_txt("flights.txt", input.as_bytes()).unwrap_err();

        assert_eq!(err.line(), Some(3));
        assert_eq!(
            err.to_string(),
            "flights.txt:3: flight KE703: arrival 10:00 must be after departure 11:00"
        );
    }

    #[test]
    fn wrong_field_count_aborts_load() {
        let input = "ICN NRT KE701 08:00 10:15 180 420 900\nICN NRT 08:00\n";
        let err = parse_flights_txt("s.txt", input.as_bytes()).unwrap_err();

        assert_eq!(err.to_string(), "s.txt:2: expected 8 fields, got 3");
    }

    #[test]
    fn empty_input() {
        let flights = parse_flights_txt("empty.txt", "".as_bytes()).unwrap();
        assert!(flights.is_empty());
    }
}
