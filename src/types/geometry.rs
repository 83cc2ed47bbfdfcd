//! Geographic coordinates and the `POINT (lng lat)` geometry strings the service
//! uses to describe station locations.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const POINT_KEYWORD: &str = "POINT";

/// Represents a geographical coordinate using latitude and longitude.
///
/// Latitude is the first element (index 0), and longitude is the second (index 1).
/// Note that the service's geometry strings list the coordinates the other way
/// around (`POINT (lng lat)`).
///
/// # Examples
///
/// ```
/// use havakalitesi::LatLon;
///
/// let maslak: LatLon = "POINT (29.0245 41.1000)".parse().unwrap();
/// assert_eq!(maslak.0, 41.1000); // Latitude
/// assert_eq!(maslak.1, 29.0245); // Longitude
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLon(pub f64, pub f64);

/// Reasons a geometry string could not be turned into a [`LatLon`].
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeometryError {
    #[error("Geometry string is empty")]
    Empty,

    #[error("Geometry '{0}' does not start with the POINT keyword")]
    MissingKeyword(String),

    #[error("Geometry '{0}' is not enclosed in a single pair of parentheses")]
    Parenthesization(String),

    #[error("Geometry '{input}' has {found} coordinates, expected 2")]
    CoordinateCount { input: String, found: usize },

    #[error("Coordinate '{value}' in geometry '{input}' is not a finite number")]
    InvalidCoordinate { input: String, value: String },
}

impl LatLon {
    pub fn latitude(&self) -> f64 {
        self.0
    }

    pub fn longitude(&self) -> f64 {
        self.1
    }

    /// Parses a geometry string of the form `POINT (<lng> <lat>)`.
    ///
    /// Whitespace around the whole string and inside the parentheses is tolerated.
    /// Anything else (missing keyword, extra text, unbalanced parentheses, more or
    /// fewer than two numbers) is rejected; no default coordinate is ever returned.
    ///
    /// # Errors
    ///
    /// Returns a [`GeometryError`] describing the first problem found.
    pub fn from_wkt_point(input: &str) -> Result<Self, GeometryError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(GeometryError::Empty);
        }

        let rest = trimmed
            .strip_prefix(POINT_KEYWORD)
            .ok_or_else(|| GeometryError::MissingKeyword(input.to_string()))?;

        // The keyword must be followed by whitespace or directly by '('
        let body = rest.trim_start();
        let inner = body
            .strip_prefix('(')
            .and_then(|b| b.strip_suffix(')'))
            .filter(|inner| !inner.contains(['(', ')']))
            .ok_or_else(|| GeometryError::Parenthesization(input.to_string()))?;

        let parts: Vec<&str> = inner.split_whitespace().collect();
        let [lng, lat] = parts[..] else {
            return Err(GeometryError::CoordinateCount {
                input: input.to_string(),
                found: parts.len(),
            });
        };

        let longitude = parse_coordinate(input, lng)?;
        let latitude = parse_coordinate(input, lat)?;
        Ok(LatLon(latitude, longitude))
    }

    /// Formats the coordinate back into the service's `POINT (lng lat)` notation.
    pub fn to_wkt_point(&self) -> String {
        format!("{} ({} {})", POINT_KEYWORD, self.1, self.0)
    }
}

fn parse_coordinate(input: &str, value: &str) -> Result<f64, GeometryError> {
    value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| GeometryError::InvalidCoordinate {
            input: input.to_string(),
            value: value.to_string(),
        })
}

impl FromStr for LatLon {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_wkt_point(s)
    }
}

impl fmt::Display for LatLon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_wkt_point())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_point_swaps_to_lat_lon() {
        let point = LatLon::from_wkt_point("POINT (29.0245 41.1000)").unwrap();
        assert_eq!(point.latitude(), 41.1000);
        assert_eq!(point.longitude(), 29.0245);
    }

    #[test]
    fn test_parse_full_precision_station_location() {
        let point: LatLon = "POINT (29.02451200417135 41.10007237141238)".parse().unwrap();
        assert_eq!(point, LatLon(41.10007237141238, 29.02451200417135));
    }

    #[test]
    fn test_parse_tolerates_extra_whitespace() {
        let point = LatLon::from_wkt_point("  POINT(  28.70756 \t 41.22092 ) ").unwrap();
        assert_eq!(point, LatLon(41.22092, 28.70756));
    }

    #[test]
    fn test_parse_negative_coordinates() {
        let point = LatLon::from_wkt_point("POINT (-73.9857 -40.7484)").unwrap();
        assert_eq!(point, LatLon(-40.7484, -73.9857));
    }

    #[test]
    fn test_format_then_parse_round_trips() {
        let locations = [
            LatLon(41.10007237141238, 29.02451200417135),
            LatLon(40.843121743887025, 29.302621843152615),
            LatLon(-33.8688, 151.2093),
            LatLon(0.0, 0.0),
        ];
        for location in locations {
            let parsed = LatLon::from_wkt_point(&location.to_string()).unwrap();
            assert!((parsed.0 - location.0).abs() < 1e-12);
            assert!((parsed.1 - location.1).abs() < 1e-12);
        }
    }

    #[test]
    fn test_malformed_geometries_are_rejected() {
        assert_eq!(LatLon::from_wkt_point(""), Err(GeometryError::Empty));
        assert!(matches!(
            LatLon::from_wkt_point("POINT 29 41"),
            Err(GeometryError::Parenthesization(_))
        ));
        assert!(matches!(
            LatLon::from_wkt_point("POINT (abc def)"),
            Err(GeometryError::InvalidCoordinate { .. })
        ));
        assert!(matches!(
            LatLon::from_wkt_point("(29.0 41.0)"),
            Err(GeometryError::MissingKeyword(_))
        ));
        assert!(matches!(
            LatLon::from_wkt_point("POINT (29.0 41.0"),
            Err(GeometryError::Parenthesization(_))
        ));
        assert!(matches!(
            LatLon::from_wkt_point("POINT ((29.0 41.0))"),
            Err(GeometryError::Parenthesization(_))
        ));
        assert!(matches!(
            LatLon::from_wkt_point("POINT (29.0 41.0 12.0)"),
            Err(GeometryError::CoordinateCount { found: 3, .. })
        ));
        assert!(matches!(
            LatLon::from_wkt_point("POINT (29.0)"),
            Err(GeometryError::CoordinateCount { found: 1, .. })
        ));
        assert!(matches!(
            LatLon::from_wkt_point("POINT (NaN 41.0)"),
            Err(GeometryError::InvalidCoordinate { .. })
        ));
    }
}
