//! Price Responses

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use savvy_app::domain::{
    businesses::records::BusinessRecord,
    prices::models::{DailyAverage, PriceStats, PriceSubmission},
};

const SUBMITTED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Business a price was observed at
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct BusinessResponse {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub phone_number: Option<String>,

    /// External places identifier
    pub place_id: String,
}

impl From<BusinessRecord> for BusinessResponse {
    fn from(business: BusinessRecord) -> Self {
        BusinessResponse {
            id: business.uuid.into(),
            name: business.name,
            address: business.address,
            phone_number: business.phone_number,
            place_id: business.place_id,
        }
    }
}

/// Price submission
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PriceSubmissionResponse {
    pub price_id: Uuid,
    pub product: Uuid,

    /// Submitting user, omitted from public listings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<Uuid>,

    /// Price in pence/cents
    pub price: i64,

    pub image: Option<String>,

    /// The UTC date and time the price was submitted, `YYYY-MM-DD HH:MM:SS`
    pub submitted_at: String,

    /// The business the price was observed at
    pub business_details: BusinessResponse,
}

impl From<PriceSubmission> for PriceSubmissionResponse {
    fn from(submission: PriceSubmission) -> Self {
        PriceSubmissionResponse {
            price_id: submission.uuid.into(),
            product: submission.product.into(),
            user: submission.user.map(Into::into),
            price: submission.price,
            image: submission.image,
            submitted_at: submission
                .submitted_at
                .strftime(SUBMITTED_AT_FORMAT)
                .to_string(),
            business_details: submission.business.into(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PriceSubmissionsResponse {
    pub prices: Vec<PriceSubmissionResponse>,
}

impl From<Vec<PriceSubmission>> for PriceSubmissionsResponse {
    fn from(submissions: Vec<PriceSubmission>) -> Self {
        PriceSubmissionsResponse {
            prices: submissions.into_iter().map(Into::into).collect(),
        }
    }
}

/// Price statistics; every value is -1 when the product has no prices
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PriceStatsResponse {
    pub average_price: i64,
    pub lowest_price: i64,
    pub highest_price: i64,
}

impl From<PriceStats> for PriceStatsResponse {
    fn from(stats: PriceStats) -> Self {
        PriceStatsResponse {
            average_price: stats.average_price,
            lowest_price: stats.lowest_price,
            highest_price: stats.highest_price,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct DailyAverageResponse {
    /// UTC calendar day, `YYYY-MM-DD`
    pub date: String,

    pub average_price: i64,
}

impl From<DailyAverage> for DailyAverageResponse {
    fn from(day: DailyAverage) -> Self {
        DailyAverageResponse {
            date: day.date.to_string(),
            average_price: day.average_price,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PriceHistoryResponse {
    pub history: Vec<DailyAverageResponse>,
}

/// Create Price Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PriceCreatedResponse {
    /// Created price UUID
    pub id: Uuid,
}
