//! Connection settings for the [`AirQuality`](crate::AirQuality) client.

use bon::Builder;
use std::time::Duration;

/// Host of the Istanbul Metropolitan Municipality open data API.
pub const DEFAULT_BASE_URL: &str = "https://api.ibb.gov.tr";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Settings used to build the underlying HTTP client.
///
/// Every field has a default, so only the settings that differ need to be given.
///
/// # Examples
///
/// ```
/// use havakalitesi::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::builder()
///     .timeout(Duration::from_secs(5))
///     .build();
/// assert_eq!(config.base_url, "https://api.ibb.gov.tr");
/// assert_eq!(config.timeout, Duration::from_secs(5));
/// ```
#[derive(Debug, Clone, Builder)]
pub struct ClientConfig {
    /// Scheme and host the endpoint paths are appended to, without a trailing slash.
    #[builder(default = DEFAULT_BASE_URL.to_string(), into)]
    pub base_url: String,
    /// Upper bound on a whole request, from connecting until the body is read.
    #[builder(default = DEFAULT_TIMEOUT)]
    pub timeout: Duration,
    #[builder(default = DEFAULT_CONNECT_TIMEOUT)]
    pub connect_timeout: Duration,
    #[builder(default = DEFAULT_USER_AGENT.to_string(), into)]
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl ClientConfig {
    pub(crate) fn build_http_client(&self) -> Result<reqwest::Client, reqwest::Error> {
        reqwest::Client::builder()
            .timeout(self.timeout)
            .connect_timeout(self.connect_timeout)
            .user_agent(self.user_agent.as_str())
            .build()
    }

    pub(crate) fn endpoint_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}
