use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

/// Format the readings endpoint expects for `StartDate` / `EndDate`.
pub(crate) const REQUEST_DATE_FORMAT: &str = "%d.%m.%Y %H:%M:%S";

/// Conversion into the wall-clock date and time sent to the service.
///
/// The service works in station-local time without an offset, so zoned datetimes
/// are reduced to their local wall-clock time and plain dates start at midnight.
pub trait IntoRequestDateTime {
    fn into_request_datetime(self) -> NaiveDateTime;
}

impl IntoRequestDateTime for NaiveDateTime {
    fn into_request_datetime(self) -> NaiveDateTime {
        self
    }
}

impl IntoRequestDateTime for NaiveDate {
    fn into_request_datetime(self) -> NaiveDateTime {
        self.and_time(NaiveTime::MIN)
    }
}

impl<Tz: TimeZone> IntoRequestDateTime for DateTime<Tz> {
    fn into_request_datetime(self) -> NaiveDateTime {
        self.naive_local()
    }
}

pub(crate) fn format_request_datetime(datetime: NaiveDateTime) -> String {
    datetime.format(REQUEST_DATE_FORMAT).to_string()
}

const NAIVE_READ_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

// `%#z` takes `+03`, `+0300` and `+03:00`
const OFFSET_READ_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f%#z",
    "%Y-%m-%d %H:%M:%S%.f%#z",
    "%Y-%m-%dT%H:%M%#z",
    "%Y-%m-%d %H:%M%#z",
];

/// Parses an ISO-8601 `ReadTime` value.
///
/// Accepts `T` or space as the date/time separator, minute or second precision,
/// optional fractional seconds and an optional `Z`/`+HH`/`+HH:MM`/`+HHMM` offset.
/// When an offset is present the local wall-clock part is kept. A bare date is
/// read as midnight.
pub(crate) fn parse_read_time(value: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    let value = value.trim();
    let first_err = match NaiveDateTime::parse_from_str(value, NAIVE_READ_TIME_FORMATS[0]) {
        Ok(dt) => return Ok(dt),
        Err(e) => e,
    };

    for format in &NAIVE_READ_TIME_FORMATS[1..] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(dt);
        }
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.naive_local());
    }
    for format in OFFSET_READ_TIME_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(value, format) {
            return Ok(dt.naive_local());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date.into_request_datetime());
    }
    Err(first_err)
}
