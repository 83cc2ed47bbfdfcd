mod air_quality;
mod api;
mod config;
mod error;
mod types;

#[cfg(test)]
mod test_server;

pub use air_quality::*;
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use error::{AirQualityError, ErrorKind};

pub use types::date_time::IntoRequestDateTime;
pub use types::geometry::{GeometryError, LatLon};
pub use types::reading::{Aqi, Concentration, Readings};
pub use types::station::Station;
