//! Places Config

use std::time::Duration;

use clap::Args;
use savvy_app::places::{GooglePlacesConfig, google::DEFAULT_BASE_URL};

/// Places lookup settings.
#[derive(Debug, Args)]
pub struct PlacesConfig {
    /// Google Places API key
    #[arg(long, env = "PLACES_API_KEY", hide_env_values = true)]
    pub places_api_key: String,

    /// Google Places API base URL
    #[arg(long, env = "PLACES_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub places_base_url: String,

    /// Places request timeout in seconds
    #[arg(long, env = "PLACES_TIMEOUT_SECONDS", default_value_t = 10_u64)]
    pub places_timeout_seconds: u64,
}

impl PlacesConfig {
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.places_timeout_seconds)
    }

    /// Client settings for the places lookup service.
    #[must_use]
    pub fn client_config(&self) -> GooglePlacesConfig {
        GooglePlacesConfig {
            base_url: self.places_base_url.clone(),
            api_key: self.places_api_key.clone(),
            timeout: self.timeout(),
        }
    }
}
