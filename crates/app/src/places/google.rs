//! Google Places details client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::places::{PlaceDetails, PlacesError, PlacesService};

/// Default Google Places API base URL.
pub const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api/place";

/// Configuration for the Google Places client.
#[derive(Debug, Clone)]
pub struct GooglePlacesConfig {
    /// API base URL, e.g. [`DEFAULT_BASE_URL`].
    pub base_url: String,

    /// Google API key.
    pub api_key: String,

    /// Per-request timeout.
    pub timeout: Duration,
}

/// HTTP client for the Google Places details endpoint.
#[derive(Debug, Clone)]
pub struct GooglePlacesClient {
    config: GooglePlacesConfig,
    http: Client,
}

impl GooglePlacesClient {
    /// Create a new client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: GooglePlacesConfig) -> Result<Self, PlacesError> {
        let http = Client::builder().timeout(config.timeout).build()?;

        Ok(Self { config, http })
    }
}

#[async_trait]
impl PlacesService for GooglePlacesClient {
    async fn lookup_by_place_id(&self, place_id: &str) -> Result<PlaceDetails, PlacesError> {
        let url = format!(
            "{}/details/json",
            self.config.base_url.trim_end_matches('/')
        );

        let response = self
            .http
            .get(&url)
            .query(&[("place_id", place_id), ("key", self.config.api_key.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(PlacesError::UnexpectedResponse(format!(
                "details request failed with status {status}: {text}"
            )));
        }

        let parsed: DetailsResponse = response.json().await?;

        match (parsed.status.as_str(), parsed.result) {
            ("OK", Some(result)) => {
                debug!(place_id, "retrieved place details");

                PlaceDetails::try_from(result)
            }
            _ => {
                warn!(place_id, status = %parsed.status, "place lookup rejected");

                Err(PlacesError::Rejected {
                    status: parsed.status,
                    message: parsed.error_message,
                })
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct DetailsResponse {
    status: String,
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error_message: Option<String>,
}
