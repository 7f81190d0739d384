//! Places lookup
//!
//! Resolves an external place identifier into structured business details.

use async_trait::async_trait;
use mockall::automock;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

pub mod google;

pub use google::{GooglePlacesClient, GooglePlacesConfig};

/// Structured place details, along with the raw document they came from.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceDetails {
    pub place_id: String,
    pub name: String,
    pub formatted_address: String,
    pub formatted_phone_number: Option<String>,
    pub raw: Value,
}

#[derive(Debug, Deserialize)]
struct PlaceFields {
    place_id: String,
    name: String,
    formatted_address: String,
    #[serde(default)]
    formatted_phone_number: Option<String>,
}

impl TryFrom<Value> for PlaceDetails {
    type Error = PlacesError;

    fn try_from(raw: Value) -> Result<Self, Self::Error> {
        let fields = PlaceFields::deserialize(&raw).map_err(PlacesError::InvalidDetails)?;

        Ok(Self {
            place_id: fields.place_id,
            name: fields.name,
            formatted_address: fields.formatted_address,
            formatted_phone_number: fields.formatted_phone_number,
            raw,
        })
    }
}

/// Errors that can occur when looking up a place.
#[derive(Debug, Error)]
pub enum PlacesError {
    /// An HTTP transport or serialization error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The places service returned a non-2xx response.
    #[error("unexpected response from places service: {0}")]
    UnexpectedResponse(String),

    /// The places service answered but refused the lookup.
    #[error("place lookup rejected with status {status}")]
    Rejected {
        status: String,
        message: Option<String>,
    },

    /// The place document is missing required fields.
    #[error("invalid place details")]
    InvalidDetails(#[source] serde_json::Error),
}

#[automock]
#[async_trait]
pub trait PlacesService: Send + Sync {
    /// Look up full place details by external place identifier.
    async fn lookup_by_place_id(&self, place_id: &str) -> Result<PlaceDetails, PlacesError>;
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn details_from_complete_document() -> TestResult {
        let raw = json!({
            "place_id": "abc",
            "name": "Acme Store",
            "formatted_address": "1 Main St",
            "formatted_phone_number": "555-0100",
            "rating": 4.5
        });

        let details = PlaceDetails::try_from(raw.clone())?;

        assert_eq!(details.place_id, "abc");
        assert_eq!(details.name, "Acme Store");
        assert_eq!(details.formatted_address, "1 Main St");
        assert_eq!(details.formatted_phone_number.as_deref(), Some("555-0100"));
        assert_eq!(details.raw, raw);

        Ok(())
    }

    #[test]
    fn details_phone_number_is_optional() -> TestResult {
        let details = PlaceDetails::try_from(json!({
            "place_id": "abc",
            "name": "Acme Store",
            "formatted_address": "1 Main St"
        }))?;

        assert!(details.formatted_phone_number.is_none());

        Ok(())
    }

    #[test]
    fn details_missing_name_is_invalid() {
        let result = PlaceDetails::try_from(json!({
            "place_id": "abc",
            "formatted_address": "1 Main St"
        }));

        assert!(
            matches!(result, Err(PlacesError::InvalidDetails(_))),
            "expected InvalidDetails, got {result:?}"
        );
    }
}
