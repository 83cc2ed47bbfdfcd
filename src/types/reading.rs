//! Pollutant concentration and AQI records, and the mapping from the nested
//! per-timestamp entries the readings endpoint returns.

use crate::error::AirQualityError;
use crate::types::date_time::parse_read_time;
use chrono::NaiveDateTime;
use log::debug;
use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Raw measured pollutant levels at one point in time.
///
/// Every pollutant is optional: stations do not measure everything (CO is often
/// missing), and a missing value is `None`, never `0.0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Concentration {
    pub read_time: NaiveDateTime,
    pub pm10: Option<f64>,
    pub so2: Option<f64>,
    pub o3: Option<f64>,
    pub no2: Option<f64>,
    pub co: Option<f64>,
}

/// Air Quality Index values at one point in time.
///
/// The per-pollutant fields are sub-indices; `aqi_index` is the overall index and
/// `contaminant_parameter` names the pollutant that determined it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aqi {
    pub read_time: NaiveDateTime,
    pub pm10: Option<f64>,
    pub so2: Option<f64>,
    pub o3: Option<f64>,
    pub no2: Option<f64>,
    pub co: Option<f64>,
    pub aqi_index: f64,
    /// Dominant pollutant, e.g. `"PM10"`.
    pub contaminant_parameter: String,
    /// Textual description of the air quality category (Turkish).
    pub state: String,
    /// Category colour as a hex string, e.g. `"#13a261"`.
    pub color: String,
}

/// The result of a readings request.
///
/// Both sequences follow the server's order. A timestamp can appear in one, both
/// or neither of them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Readings {
    pub concentrations: Vec<Concentration>,
    pub aqi: Vec<Aqi>,
}

impl Readings {
    pub fn into_parts(self) -> (Vec<Concentration>, Vec<Aqi>) {
        (self.concentrations, self.aqi)
    }

    pub fn is_empty(&self) -> bool {
        self.concentrations.is_empty() && self.aqi.is_empty()
    }
}

/// One entry of the `GetAQIByStationId` response.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawReading {
    #[serde(rename = "ReadTime")]
    pub read_time: String,
    #[serde(rename = "Concentration", default, deserialize_with = "non_empty_object")]
    pub concentration: Option<RawConcentration>,
    #[serde(rename = "AQI", default, deserialize_with = "non_empty_object")]
    pub aqi: Option<RawAqi>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawConcentration {
    #[serde(rename = "PM10", default)]
    pub pm10: Option<f64>,
    #[serde(rename = "SO2", default)]
    pub so2: Option<f64>,
    #[serde(rename = "O3", default)]
    pub o3: Option<f64>,
    #[serde(rename = "NO2", default)]
    pub no2: Option<f64>,
    #[serde(rename = "CO", default)]
    pub co: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawAqi {
    #[serde(rename = "PM10", default)]
    pub pm10: Option<f64>,
    #[serde(rename = "SO2", default)]
    pub so2: Option<f64>,
    #[serde(rename = "O3", default)]
    pub o3: Option<f64>,
    #[serde(rename = "NO2", default)]
    pub no2: Option<f64>,
    #[serde(rename = "CO", default)]
    pub co: Option<f64>,
    #[serde(rename = "AQIIndex")]
    pub aqi_index: f64,
    #[serde(rename = "ContaminantParameter")]
    pub contaminant_parameter: String,
    #[serde(rename = "State")]
    pub state: String,
    #[serde(rename = "Color")]
    pub color: String,
}

/// `null`, a missing key and `{}` all mean "no data for this timestamp".
/// A non-empty object must deserialize into `T` in full.
fn non_empty_object<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value: Option<Map<String, Value>> = Option::deserialize(deserializer)?;
    match value {
        Some(map) if !map.is_empty() => serde_json::from_value(Value::Object(map))
            .map(Some)
            .map_err(D::Error::custom),
        _ => Ok(None),
    }
}

impl RawConcentration {
    fn with_read_time(self, read_time: NaiveDateTime) -> Concentration {
        Concentration {
            read_time,
            pm10: self.pm10,
            so2: self.so2,
            o3: self.o3,
            no2: self.no2,
            co: self.co,
        }
    }
}

impl RawAqi {
    fn with_read_time(self, read_time: NaiveDateTime) -> Aqi {
        Aqi {
            read_time,
            pm10: self.pm10,
            so2: self.so2,
            o3: self.o3,
            no2: self.no2,
            co: self.co,
            aqi_index: self.aqi_index,
            contaminant_parameter: self.contaminant_parameter,
            state: self.state,
            color: self.color,
        }
    }
}

/// Splits raw entries into the concentration and AQI sequences.
///
/// The read time is parsed once per entry and shared by both derived records.
pub(crate) fn readings_from_raw(raw: Vec<RawReading>) -> Result<Readings, AirQualityError> {
    let mut readings = Readings::default();

    for record in raw {
        let read_time = parse_read_time(&record.read_time).map_err(|source| {
            AirQualityError::InvalidReadTime {
                value: record.read_time.clone(),
                source,
            }
        })?;

        if record.concentration.is_none() && record.aqi.is_none() {
            debug!("No concentration or AQI data at {}", read_time);
            continue;
        }
        if let Some(concentration) = record.concentration {
            readings
                .concentrations
                .push(concentration.with_read_time(read_time));
        }
        if let Some(aqi) = record.aqi {
            readings.aqi.push(aqi.with_read_time(read_time));
        }
    }

    Ok(readings)
}
