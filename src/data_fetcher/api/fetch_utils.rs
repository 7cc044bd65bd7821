//! Single-shot JSON fetching and response-shape checks

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error, info, instrument};

use crate::error::AppError;

/// Issues one GET to `url` and parses the body as JSON.
///
/// No retries: a transport failure or non-2xx status is returned as
/// `AppError::Fetch` carrying the reqwest error. A body that is not JSON
/// becomes `AppError::ApiMalformedJson`.
#[instrument(skip(client))]
pub(super) async fn fetch_json(client: &Client, url: &str) -> Result<Value, AppError> {
    info!("Fetching data from URL: {url}");

    let response = client.get(url).send().await.map_err(|e| {
        error!("Request failed for URL {}: {}", url, e);
        AppError::fetch(url, e)
    })?;

    let status = response.status();
    debug!("Response status: {status}");

    let response = response.error_for_status().map_err(|e| {
        error!(
            "HTTP {} - {} (URL: {})",
            status.as_u16(),
            status.canonical_reason().unwrap_or("Unknown error"),
            url
        );
        AppError::fetch(url, e)
    })?;

    let response_text = response.text().await.map_err(|e| {
        error!("Failed to read response text from URL {}: {}", url, e);
        AppError::fetch(url, e)
    })?;

    debug!("Response length: {} bytes", response_text.len());

    serde_json::from_str::<Value>(&response_text).map_err(|e| {
        error!("Failed to parse API response: {} (URL: {})", e, url);
        if response_text.trim().is_empty() {
            AppError::api_malformed_json("Response body is empty", url)
        } else {
            AppError::api_malformed_json(e.to_string(), url)
        }
    })
}

/// Fails with `AppError::Validation` for the first of `keys` absent from `body`.
pub(super) fn require_keys(body: &Value, keys: &[&str], url: &str) -> Result<(), AppError> {
    for key in keys {
        if body.get(key).is_none() {
            error!("Required key {key} missing in response from {url}");
            return Err(AppError::validation(*key, url));
        }
    }
    Ok(())
}

/// Converts an already-validated body into its typed form.
pub(super) fn decode<T: DeserializeOwned>(body: Value, url: &str) -> Result<T, AppError> {
    serde_json::from_value(body).map_err(|e| {
        error!("Unexpected response structure from {}: {}", url, e);
        AppError::api_unexpected_structure(e.to_string(), url)
    })
}
