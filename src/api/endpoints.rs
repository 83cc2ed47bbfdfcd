use crate::types::date_time::format_request_datetime;
use chrono::NaiveDateTime;

const HANDLER_PATH: &str = "/havakalitesi/OpenDataPortalHandler";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Endpoint {
    Stations,
    ReadingsByStation,
}

impl Endpoint {
    fn method_name(&self) -> &'static str {
        match self {
            Endpoint::Stations => "GetAQIStations",
            Endpoint::ReadingsByStation => "GetAQIByStationId",
        }
    }

    pub(crate) fn path(&self) -> String {
        format!("{}/{}", HANDLER_PATH, self.method_name())
    }
}

pub(crate) fn readings_query(
    station_id: &str,
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> [(&'static str, String); 3] {
    [
        ("StationId", station_id.to_string()),
        ("StartDate", format_request_datetime(start)),
        ("EndDate", format_request_datetime(end)),
    ]
}
