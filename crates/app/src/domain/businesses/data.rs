//! Businesses Data

use serde_json::Value;

use crate::places::PlaceDetails;

/// New Business Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewBusiness {
    pub name: String,
    pub address: String,
    pub phone_number: Option<String>,

    /// External places identifier the business is keyed on.
    pub place_id: String,

    /// Raw details returned by the places service.
    pub place: Value,
}

impl From<PlaceDetails> for NewBusiness {
    fn from(details: PlaceDetails) -> Self {
        NewBusiness {
            name: details.name,
            address: details.formatted_address,
            phone_number: details.formatted_phone_number,
            place_id: details.place_id,
            place: details.raw,
        }
    }
}
