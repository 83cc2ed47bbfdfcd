use crate::error::AirQualityError;
use log::{info, warn};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Issues a single GET and decodes the JSON body into `T`.
///
/// Transport errors and non-2xx statuses are network errors; a body that does not
/// decode into `T` is a protocol error. Nothing is retried.
pub(crate) async fn get_json<T, Q>(
    client: &Client,
    url: &str,
    query: &Q,
) -> Result<T, AirQualityError>
where
    T: DeserializeOwned,
    Q: Serialize + ?Sized,
{
    info!("Requesting {}", url);

    let response = client
        .get(url)
        .query(query)
        .send()
        .await
        .map_err(|e| AirQualityError::NetworkRequest(url.to_string(), e))?;

    let response = match response.error_for_status() {
        Ok(resp) => resp,
        Err(e) => {
            warn!("HTTP error for {}: {:?}", url, e);
            return Err(if let Some(status) = e.status() {
                AirQualityError::HttpStatus {
                    url: url.to_string(),
                    status,
                    source: e,
                }
            } else {
                AirQualityError::NetworkRequest(url.to_string(), e)
            });
        }
    };

    // Read the whole body first so decode failures are told apart from transport ones
    let body = response
        .bytes()
        .await
        .map_err(|e| AirQualityError::NetworkRequest(url.to_string(), e))?;

    serde_json::from_slice(&body).map_err(|source| AirQualityError::JsonParse {
        url: url.to_string(),
        source,
    })
}
