//! Prices Data

use serde::Deserialize;
use thiserror::Error;

use crate::{
    domain::{products::data::NewProduct, users::UserUuid},
    places::PlaceDetails,
};

/// Largest magnitude at which every integer is exactly representable as `f64`.
const MAX_EXACT_FLOAT_CENTS: f64 = 9_007_199_254_740_992.0;

/// New Price Submission Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewPriceSubmission {
    pub product: NewProduct,
    pub business: BusinessReference,
    pub price: PriceAmount,
    pub user: UserUuid,
    pub image: Option<String>,
}

/// The business a price was observed at, as supplied by the submitter.
#[derive(Debug, Clone, PartialEq)]
pub enum BusinessReference {
    /// A bare place identifier that still needs looking up.
    PlaceId(String),

    /// Place details that were already resolved.
    Place(PlaceDetails),
}

/// A submitted price, before coercion to integer cents.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PriceAmount {
    Integer(i64),
    Decimal(f64),
    Text(String),
}

/// The submitted price could not be coerced to integer cents.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("price is not an integer amount: {0}")]
pub struct InvalidPrice(pub String);

impl PriceAmount {
    /// Coerce to integer cents. Fractional amounts are truncated toward zero,
    /// text must hold a decimal integer.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidPrice`] for non-finite or out of range numbers and for
    /// text that is not an integer.
    pub fn to_cents(&self) -> Result<i64, InvalidPrice> {
        match self {
            Self::Integer(cents) => Ok(*cents),
            Self::Decimal(amount) => {
                let truncated = amount.trunc();

                if !truncated.is_finite() || truncated.abs() > MAX_EXACT_FLOAT_CENTS {
                    return Err(InvalidPrice(amount.to_string()));
                }

                #[expect(
                    clippy::cast_possible_truncation,
                    reason = "value is integral and bounded by MAX_EXACT_FLOAT_CENTS"
                )]
                let cents = truncated as i64;

                Ok(cents)
            }
            Self::Text(text) => text
                .trim()
                .parse::<i64>()
                .map_err(|_parse_error| InvalidPrice(text.clone())),
        }
    }
}

impl From<i64> for PriceAmount {
    fn from(cents: i64) -> Self {
        Self::Integer(cents)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn integer_is_taken_as_is() {
        assert_eq!(PriceAmount::Integer(500).to_cents(), Ok(500));
    }

    #[test]
    fn decimal_truncates_toward_zero() {
        assert_eq!(PriceAmount::Decimal(5.99).to_cents(), Ok(5));
        assert_eq!(PriceAmount::Decimal(-5.99).to_cents(), Ok(-5));
    }

    #[test]
    fn decimal_rejects_non_finite() {
        assert!(PriceAmount::Decimal(f64::NAN).to_cents().is_err());
        assert!(PriceAmount::Decimal(f64::INFINITY).to_cents().is_err());
        assert!(PriceAmount::Decimal(1e300).to_cents().is_err());
    }

    #[test]
    fn text_must_be_an_integer() {
        assert_eq!(PriceAmount::Text(" 250 ".to_string()).to_cents(), Ok(250));
        assert_eq!(
            PriceAmount::Text("2.50".to_string()).to_cents(),
            Err(InvalidPrice("2.50".to_string()))
        );
        assert!(PriceAmount::Text("cheap".to_string()).to_cents().is_err());
    }

    #[test]
    fn deserializes_any_json_amount() -> TestResult {
        let amounts: Vec<PriceAmount> = serde_json::from_value(json!([500, 5.5, "700"]))?;

        assert_eq!(
            amounts,
            vec![
                PriceAmount::Integer(500),
                PriceAmount::Decimal(5.5),
                PriceAmount::Text("700".to_string()),
            ]
        );

        Ok(())
    }
}
