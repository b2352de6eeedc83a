//! Flight schedule loading.
//!
//! Schedules come in two formats, chosen by file extension: `.csv` files
//! use a header row naming each column, anything else is read as
//! whitespace-separated text. Both go through the same record validation,
//! and a single bad record fails the whole load.

mod csv_rows;
mod error;
mod record;
mod text;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use tracing::info;

use crate::domain::Flight;

pub use csv_rows::parse_flights_csv;
pub use error::{LoadError, RecordError};
pub use record::{COLUMNS, RawRecord};
pub use text::{parse_flights_txt, parse_line};

/// Returns true if `path` should be read with the CSV loader.
pub fn is_csv(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
}

/// Load every flight from the schedule file at `path`.
pub fn load_flights(path: &Path) -> Result<Vec<Flight>, LoadError> {
    let name = path.display().to_string();
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: name.clone(),
        source,
    })?;
    let reader = BufReader::new(file);

    let flights = if is_csv(path) {
        parse_flights_csv(&name, reader)?
    } else {
        parse_flights_txt(&name, reader)?
    };

    info!(path = %name, flights = flights.len(), "Loaded schedule");
    Ok(flights)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn temp_file(suffix: &str, contents: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn csv_detection() {
        assert!(is_csv(Path::new("flights.csv")));
        assert!(is_csv(Path::new("dir/FLIGHTS.CSV")));
        assert!(!is_csv(Path::new("flights.txt")));
        assert!(!is_csv(Path::new("flights")));
        assert!(!is_csv(Path::new("csv")));
    }

    #[test]
    fn loads_text_file() {
        let file = temp_file(".txt", "ICN NRT KE701 08:00 10:15 180 420 900\n");
        let flights = load_flights(file.path()).unwrap();

        assert_eq!(flights.len(), 1);
        assert_eq!(flights[0].flight_number(), "KE701");
    }

    #[test]
    fn loads_csv_file() {
        let file = temp_file(
            ".CSV",
            "origin,dest,flight_number,depart,arrive,economy,business,first\n\
             ICN,NRT,KE701,08:00,10:15,180,420,900\n",
        );
        let flights = load_flights(file.path()).unwrap();

        assert_eq!(flights.len(), 1);
        assert_eq!(flights[0].dest().as_str(), "NRT");
    }

    #[test]
    fn file_without_extension_is_text() {
        let file = temp_file("", "# just a comment\nICN NRT KE701 08:00 10:15 1 2 3\n");
        assert_eq!(load_flights(file.path()).unwrap().len(), 1);
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.txt");

        let err = load_flights(&path).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("nope.txt"));
    }

    #[test]
    fn error_names_file_and_line() {
        let file = temp_file(".txt", "ICN NRT KE701 08:00 10:15 180 420 900\nbad line\n");
        let err = load_flights(file.path()).unwrap_err();

        let expected = format!("{}:2: expected 8 fields, got 2", file.path().display());
        assert_eq!(err.to_string(), expected);
    }
}
