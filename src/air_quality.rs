//! This module provides the main entry point for the Istanbul air quality open data
//! service. It lists monitoring stations and fetches the historical concentration and
//! AQI readings of a single station.

use crate::api::endpoints::{readings_query, Endpoint};
use crate::api::fetch::get_json;
use crate::config::ClientConfig;
use crate::error::AirQualityError;
use crate::types::date_time::IntoRequestDateTime;
use crate::types::reading::{readings_from_raw, RawReading, Readings};
use crate::types::station::{stations_from_raw, RawStation, Station};
use bon::bon;
use log::{debug, info};
use reqwest::Client;

/// The main client struct for the air quality service.
///
/// Every call performs exactly one HTTP request. There is no caching and no retry: a
/// failure is returned to the caller as is, and no partial result is produced.
/// The client is cheap to clone and can be shared between tasks.
///
/// # Examples
///
/// ```rust,no_run
/// # use havakalitesi::{AirQuality, AirQualityError};
/// # async fn run() -> Result<(), AirQualityError> {
/// let client = AirQuality::new()?;
/// let stations = client.stations().await?;
/// for station in &stations {
///     println!("{} at {}", station.name, station.location());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct AirQuality {
    config: ClientConfig,
    http: Client,
}

#[bon]
impl AirQuality {
    /// Creates a client that talks to the public service with default timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`AirQualityError::ClientBuild`] if the HTTP client cannot be initialised
    /// (e.g. the TLS backend fails to load).
    pub fn new() -> Result<Self, AirQualityError> {
        Self::with_config(ClientConfig::default())
    }

    /// Creates a client from a custom [`ClientConfig`], e.g. to change the timeout or
    /// point at a mirror.
    ///
    /// # Errors
    ///
    /// Returns [`AirQualityError::ClientBuild`] if the HTTP client cannot be built from
    /// the configuration.
    pub fn with_config(config: ClientConfig) -> Result<Self, AirQualityError> {
        let http = config
            .build_http_client()
            .map_err(AirQualityError::ClientBuild)?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Lists all monitoring stations, in the order the service returns them.
    ///
    /// # Errors
    ///
    /// * [`AirQualityError::NetworkRequest`] / [`AirQualityError::HttpStatus`] when the
    ///   request fails or the status is not a success.
    /// * [`AirQualityError::JsonParse`] when the body is not the expected JSON or a
    ///   required field (`Id`, `Name`, `Adress`, `Location`) is missing.
    /// * [`AirQualityError::InvalidGeometry`] when a station location is not a valid
    ///   `POINT (lng lat)` string.
    pub async fn stations(&self) -> Result<Vec<Station>, AirQualityError> {
        let url = self.config.endpoint_url(&Endpoint::Stations.path());
        let no_params: &[(&str, &str)] = &[];
        let raw: Vec<RawStation> = get_json(&self.http, &url, no_params).await?;

        let stations = stations_from_raw(raw)?;
        info!("Parsed {} stations", stations.len());
        Ok(stations)
    }

    /// Fetches the concentration and AQI readings of one station between two moments.
    ///
    /// This method uses a builder pattern.
    ///
    /// # Arguments
    ///
    /// * `.station(&str)`: **Required.** The station id, as found in [`Station::id`].
    ///   It is sent exactly as given; only an empty or all-whitespace id is rejected.
    /// * `.start(impl IntoRequestDateTime)`: **Required.** Start of the range.
    /// * `.end(impl IntoRequestDateTime)`: **Required.** End of the range.
    ///
    /// The range is passed to the service as is. A start after the end is not rejected
    /// here; what the service returns for it is up to the service.
    ///
    /// # Errors
    ///
    /// * [`AirQualityError::InvalidInput`] if the station id is empty or only whitespace.
    ///   No request is sent.
    /// * Network and JSON errors as for [`AirQuality::stations`].
    /// * [`AirQualityError::InvalidReadTime`] when a `ReadTime` is not ISO-8601.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use havakalitesi::{AirQuality, AirQualityError};
    /// # use chrono::NaiveDate;
    /// # async fn run() -> Result<(), AirQualityError> {
    /// let client = AirQuality::new()?;
    /// let readings = client
    ///     .readings()
    ///     .station("6b7a9840-1e13-4045-a79d-0f881c4852ad")
    ///     .start(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap())
    ///     .end(NaiveDate::from_ymd_opt(2020, 1, 2).unwrap())
    ///     .call()
    ///     .await?;
    /// println!("{} concentrations, {} AQI values", readings.concentrations.len(), readings.aqi.len());
    /// # Ok(())
    /// # }
    /// ```
    #[builder]
    pub async fn readings<S, E>(
        &self,
        station: &str,
        start: S,
        end: E,
    ) -> Result<Readings, AirQualityError>
    where
        S: IntoRequestDateTime,
        E: IntoRequestDateTime,
    {
        if station.trim().is_empty() {
            return Err(AirQualityError::InvalidInput(
                "station id must not be empty".to_string(),
            ));
        }

        let start = start.into_request_datetime();
        let end = end.into_request_datetime();
        if start > end {
            debug!(
                "Start {} is after end {} for station {}, passing through unchanged",
                start, end, station
            );
        }

        let url = self.config.endpoint_url(&Endpoint::ReadingsByStation.path());
        let query = readings_query(station, start, end);
        let raw: Vec<RawReading> = get_json(&self.http, &url, &query[..]).await?;

        let readings = readings_from_raw(raw)?;
        info!(
            "Parsed {} concentration and {} AQI readings for station {}",
            readings.concentrations.len(),
            readings.aqi.len(),
            station
        );
        Ok(readings)
    }
}
