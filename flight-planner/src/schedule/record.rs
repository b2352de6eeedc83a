//! Validation of one schedule record into a `Flight`.

use crate::domain::{AirportCode, ClockTime, Fares, Flight};

use super::error::RecordError;

/// Column names, in text-format field order.
pub const COLUMNS: [&str; 8] = [
    "origin",
    "dest",
    "flight_number",
    "depart",
    "arrive",
    "economy",
    "business",
    "first",
];

/// The eight raw fields of a flight record, not yet validated.
#[derive(Debug, Clone, Copy)]
pub struct RawRecord<'a> {
    pub origin: &'a str,
    pub dest: &'a str,
    pub flight_number: &'a str,
    pub depart: &'a str,
    pub arrive: &'a str,
    pub economy: &'a str,
    pub business: &'a str,
    pub first: &'a str,
}

impl<'a> RawRecord<'a> {
    /// Build from fields in text-format order.
    pub fn from_fields(fields: &[&'a str]) -> Result<Self, RecordError> {
        match *fields {
            [origin, dest, flight_number, depart, arrive, economy, business, first] => Ok(Self {
                origin,
                dest,
                flight_number,
                depart,
                arrive,
                economy,
                business,
                first,
            }),
            _ => Err(RecordError::FieldCount {
                expected: COLUMNS.len(),
                found: fields.len(),
            }),
        }
    }

    /// Validate every field and build the flight.
    pub fn into_flight(self) -> Result<Flight, RecordError> {
        let flight = Flight::new(
            airport("origin", self.origin)?,
            airport("dest", self.dest)?,
            self.flight_number.trim(),
            time("depart", self.depart)?,
            time("arrive", self.arrive)?,
            Fares::new(
                price("economy", self.economy)?,
                price("business", self.business)?,
                price("first", self.first)?,
            ),
        )?;
        Ok(flight)
    }
}

fn airport(field: &'static str, value: &str) -> Result<AirportCode, RecordError> {
    AirportCode::parse(value.trim()).map_err(|source| RecordError::Airport { field, source })
}

fn time(field: &'static str, value: &str) -> Result<ClockTime, RecordError> {
    ClockTime::parse_hhmm(value).map_err(|source| RecordError::Time { field, source })
}

fn price(field: &'static str, value: &str) -> Result<u32, RecordError> {
    let trimmed = value.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(RecordError::Price {
            field,
            value: value.to_string(),
        });
    }
    trimmed.parse().map_err(|_| RecordError::Price {
        field,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Cabin, DomainError};

    fn fields(line: &str) -> Vec<&str> {
        line.split_whitespace().collect()
    }

    #[test]
    fn valid_record() {
        let f = fields("ICN NRT KE701 08:00 10:15 180 420 900");
        let flight = RawRecord::from_fields(&f).unwrap().into_flight().unwrap();

        assert_eq!(flight.origin().as_str(), "ICN");
        assert_eq!(flight.dest().as_str(), "NRT");
        assert_eq!(flight.flight_number(), "KE701");
        assert_eq!(flight.depart().to_string(), "08:00");
        assert_eq!(flight.arrive().to_string(), "10:15");
        assert_eq!(flight.price_for(Cabin::Economy), 180);
        assert_eq!(flight.price_for(Cabin::Business), 420);
        assert_eq!(flight.price_for(Cabin::First), 900);
    }

    #[test]
    fn wrong_field_count() {
        let f = fields("ICN NRT KE701 08:00 10:15 180 420");
        assert_eq!(
            RawRecord::from_fields(&f).unwrap_err(),
            RecordError::FieldCount {
                expected: 8,
                found: 7
            }
        );
    }

    #[test]
    fn bad_time() {
        let f = fields("ICN NRT KE701 8am 10:15 180 420 900");
        let err = RawRecord::from_fields(&f).unwrap().into_flight().unwrap_err();
        assert!(matches!(err, RecordError::Time { field: "depart", .. }));
    }

    #[test]
    fn bad_prices() {
        for bad in ["-5", "12.5", "abc", "99999999999"] {
            let line = format!("ICN NRT KE701 08:00 10:15 {bad} 420 900");
            let f = fields(&line);
            let err = RawRecord::from_fields(&f).unwrap().into_flight().unwrap_err();
            assert!(
                matches!(err, RecordError::Price { field: "economy", .. }),
                "{bad} should be rejected, got {err:?}"
            );
        }
    }

    #[test]
    fn arrival_not_after_departure() {
        let f = fields("ICN NRT KE701 10:15 10:15 180 420 900");
        let err = RawRecord::from_fields(&f).unwrap().into_flight().unwrap_err();
        assert!(matches!(
            err,
            RecordError::Domain(DomainError::ArrivalNotAfterDeparture { .. })
        ));
    }

    #[test]
    fn empty_airport() {
        let f = ["", "NRT", "KE701", "08:00", "10:15", "1", "2", "3"];
        let err = RawRecord::from_fields(&f).unwrap().into_flight().unwrap_err();
        assert!(matches!(err, RecordError::Airport { field: "origin", .. }));
    }
}
