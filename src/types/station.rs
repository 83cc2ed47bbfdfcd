//! Defines the monitoring station record and the raw shape the stations endpoint
//! returns for it.

use crate::error::AirQualityError;
use crate::types::geometry::LatLon;
use serde::{Deserialize, Serialize};

/// A fixed air-quality monitoring station.
///
/// Identity is [`Station::id`]; two values with the same id describe the same station.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    /// The service's station identifier (a UUID string), used when requesting readings.
    pub id: String,
    /// Human readable station name (e.g., "Maslak").
    pub name: String,
    /// Postal or descriptive address of the station.
    pub address: String,
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
}

impl Station {
    /// The station position as a [`LatLon`] pair.
    pub fn location(&self) -> LatLon {
        LatLon(self.latitude, self.longitude)
    }
}

/// One entry of the `GetAQIStations` response, as sent by the service.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawStation {
    #[serde(rename = "Id")]
    pub id: String,
    #[serde(rename = "Name")]
    pub name: String,
    // Upstream spelling
    #[serde(rename = "Adress")]
    pub address: String,
    #[serde(rename = "Location")]
    pub location: String,
}

impl TryFrom<RawStation> for Station {
    type Error = AirQualityError;

    fn try_from(raw: RawStation) -> Result<Self, Self::Error> {
        let LatLon(latitude, longitude) =
            LatLon::from_wkt_point(&raw.location).map_err(|source| {
                AirQualityError::InvalidGeometry {
                    station: raw.id.clone(),
                    source,
                }
            })?;
        Ok(Station {
            id: raw.id,
            name: raw.name,
            address: raw.address,
            latitude,
            longitude,
        })
    }
}

/// Maps every raw entry in server order, failing on the first bad one.
pub(crate) fn stations_from_raw(raw: Vec<RawStation>) -> Result<Vec<Station>, AirQualityError> {
    raw.into_iter().map(Station::try_from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;

    fn raw(value: serde_json::Value) -> Vec<RawStation> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_maps_adress_and_location() {
        let stations = stations_from_raw(raw(json!([{
            "Id": "6b7a9840-1e13-4045-a79d-0f881c4852ad",
            "Name": "Maslak",
            "Adress": "İstanbul / Sarıyer - Turkey",
            "Location": "POINT (29.02451200417135 41.10007237141238)"
        }])))
        .unwrap();

        assert_eq!(
            stations,
            vec![Station {
                id: "6b7a9840-1e13-4045-a79d-0f881c4852ad".to_string(),
                name: "Maslak".to_string(),
                address: "İstanbul / Sarıyer - Turkey".to_string(),
                latitude: 41.10007237141238,
                longitude: 29.02451200417135,
            }]
        );
        assert_eq!(
            stations[0].location(),
            LatLon(41.10007237141238, 29.02451200417135)
        );
    }

    #[test]
    fn test_correctly_spelled_address_is_not_accepted() {
        let result = serde_json::from_value::<Vec<RawStation>>(json!([{
            "Id": "a",
            "Name": "Tuzla",
            "Address": "İstanbul - Tuzla",
            "Location": "POINT (29.3026 40.8431)"
        }]));
        assert!(result.is_err());
    }

    #[test]
    fn test_bad_geometry_fails_whole_list() {
        let result = stations_from_raw(raw(json!([
            {"Id": "a", "Name": "A", "Adress": "x", "Location": "POINT (29.0 41.0)"},
            {"Id": "b", "Name": "B", "Adress": "y", "Location": "POINT 29 41"}
        ])));

        let err = result.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Protocol);
        assert!(matches!(err, AirQualityError::InvalidGeometry { ref station, .. } if station == "b"));
    }
}
