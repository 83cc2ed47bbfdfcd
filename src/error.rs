use crate::types::geometry::GeometryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AirQualityError {
    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to parse JSON response from {url}")]
    JsonParse {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid location geometry for station '{station}'")]
    InvalidGeometry {
        station: String,
        #[source]
        source: GeometryError,
    },

    #[error("Invalid ReadTime '{value}'")]
    InvalidReadTime {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to build HTTP client")]
    ClientBuild(#[source] reqwest::Error),
}

/// Coarse classification of an [`AirQualityError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Connection failure, timeout, DNS failure or a non-2xx status.
    Network,
    /// The response arrived but was not what the service is documented to send,
    /// including malformed geometry and date strings.
    Protocol,
    /// The request was rejected locally before anything was sent.
    Input,
    /// The HTTP client could not be built, e.g. a TLS backend failure or a
    /// configuration value reqwest does not accept.
    Client,
}

impl AirQualityError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AirQualityError::NetworkRequest(..) | AirQualityError::HttpStatus { .. } => {
                ErrorKind::Network
            }
            AirQualityError::JsonParse { .. }
            | AirQualityError::InvalidGeometry { .. }
            | AirQualityError::InvalidReadTime { .. } => ErrorKind::Protocol,
            AirQualityError::InvalidInput(_) => ErrorKind::Input,
            AirQualityError::ClientBuild(_) => ErrorKind::Client,
        }
    }

    pub fn is_network(&self) -> bool {
        self.kind() == ErrorKind::Network
    }

    pub fn is_protocol(&self) -> bool {
        self.kind() == ErrorKind::Protocol
    }
}
