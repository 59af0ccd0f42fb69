//! Age at the time of the report, as shown on every worksheet header.

use jiff::civil::{Date, DateTime};
use jiff::{Timestamp, Unit, tz::TimeZone};

use crate::error::CoreError;

/// Age shown when the birthdate is missing or unparseable.
pub const UNKNOWN_AGE: &str = "0,0";

/// Parse a birthdate in `dd/mm/yyyy`, `dd.mm.yyyy`, ISO date, ISO datetime
/// or RFC 3339 form.
pub fn parse_birthdate(raw: &str) -> Result<Date, CoreError> {
    let raw = raw.trim();
    let invalid = || CoreError::InvalidDate(raw.to_string());

    if raw.contains('/') || (raw.contains('.') && !raw.contains('-')) {
        let parts: Vec<&str> = raw.split(['/', '.']).map(str::trim).collect();
        let [day, month, year] = parts.as_slice() else {
            return Err(invalid());
        };
        let day: i8 = day.parse().map_err(|_| invalid())?;
        let month: i8 = month.parse().map_err(|_| invalid())?;
        let year: i16 = year.parse().map_err(|_| invalid())?;
        return Date::new(year, month, day).map_err(|_| invalid());
    }

    if let Ok(date) = raw.parse::<Date>() {
        return Ok(date);
    }
    if let Ok(datetime) = raw.parse::<DateTime>() {
        return Ok(datetime.date());
    }
    raw.parse::<Timestamp>()
        .map(|ts| ts.to_zoned(TimeZone::UTC).date())
        .map_err(|_| invalid())
}

/// Full years and remaining months between `birthdate` and `today`,
/// formatted as `"years,months"`.
///
/// Unparseable or future birthdates yield [`UNKNOWN_AGE`].
pub fn age(birthdate: &str, today: Date) -> String {
    let Ok(born) = parse_birthdate(birthdate) else {
        return UNKNOWN_AGE.to_string();
    };
    if born > today {
        return UNKNOWN_AGE.to_string();
    }
    match born.until((Unit::Year, today)) {
        Ok(span) => format!("{},{}", span.get_years(), span.get_months()),
        Err(_) => UNKNOWN_AGE.to_string(),
    }
}
