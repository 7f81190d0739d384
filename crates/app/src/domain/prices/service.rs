//! Prices service.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use rustc_hash::FxHashMap;
use tracing::{debug, info, warn};

use crate::{
    domain::{
        businesses::{
            BusinessesService,
            records::{BusinessRecord, BusinessUuid},
        },
        prices::{
            data::{BusinessReference, NewPriceSubmission},
            errors::PricesServiceError,
            models::{DailyAverage, PriceStats, PriceSubmission},
            query::{
                AggregateQuery, GroupKey, PriceAggregate, PriceFilter, PriceGrouping,
                SubmissionQuery,
            },
            records::{NewPriceRecord, PriceUuid},
            store::PriceStore,
        },
        products::{ProductsService, records::ProductUuid},
    },
    places::PlacesService,
};

/// Price repository
///
/// Reads and writes price records through a [`PriceStore`], resolving the
/// products and businesses they reference through the injected services.
#[derive(Clone)]
pub struct PriceRepository {
    store: Arc<dyn PriceStore>,
    products: Arc<dyn ProductsService>,
    businesses: Arc<dyn BusinessesService>,
    places: Arc<dyn PlacesService>,
}

impl PriceRepository {
    #[must_use]
    pub fn new(
        store: Arc<dyn PriceStore>,
        products: Arc<dyn ProductsService>,
        businesses: Arc<dyn BusinessesService>,
        places: Arc<dyn PlacesService>,
    ) -> Self {
        Self {
            store,
            products,
            businesses,
            places,
        }
    }

    async fn aggregate(
        &self,
        product: ProductUuid,
        group_by: PriceGrouping,
    ) -> Result<Vec<PriceAggregate>, PricesServiceError> {
        Ok(self
            .store
            .aggregate(&AggregateQuery {
                filter: PriceFilter::product(product),
                group_by,
            })
            .await?)
    }
}

impl Debug for PriceRepository {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("PriceRepository").finish_non_exhaustive()
    }
}

#[async_trait]
impl PricesService for PriceRepository {
    async fn price_stats(&self, product: ProductUuid) -> Result<PriceStats, PricesServiceError> {
        let stats = self
            .aggregate(product, PriceGrouping::Product)
            .await?
            .into_iter()
            .find_map(|aggregate| {
                // Stores only emit non-empty groups; an empty one reads as no data.
                debug_assert!(aggregate.count > 0, "price store emitted an empty group");

                Some(PriceStats {
                    average_price: aggregate.average()?,
                    lowest_price: aggregate.lowest,
                    highest_price: aggregate.highest,
                })
            });

        let Some(stats) = stats else {
            warn!(%product, "no prices recorded for product");

            return Ok(PriceStats::NO_DATA);
        };

        debug!(%product, ?stats, "retrieved price stats");

        Ok(stats)
    }

    async fn average_price_per_day(
        &self,
        product: ProductUuid,
    ) -> Result<Vec<DailyAverage>, PricesServiceError> {
        let mut days: Vec<DailyAverage> = self
            .aggregate(product, PriceGrouping::SubmittedDay)
            .await?
            .into_iter()
            .filter_map(|aggregate| match aggregate.key {
                GroupKey::Day(date) => Some(DailyAverage {
                    date,
                    average_price: aggregate.average()?,
                }),
                GroupKey::Product(_) => None,
            })
            .collect();

        days.sort_by_key(|day| day.date);

        debug!(%product, days = days.len(), "retrieved average price per day");

        Ok(days)
    }

    async fn get_submissions(
        &self,
        query: SubmissionQuery,
    ) -> Result<Vec<PriceSubmission>, PricesServiceError> {
        let records = self.store.find(&query).await?;

        let mut businesses: FxHashMap<BusinessUuid, BusinessRecord> = FxHashMap::default();
        let mut submissions = Vec::with_capacity(records.len());

        for record in records {
            let business = match businesses.get(&record.business) {
                Some(business) => business.clone(),
                None => {
                    let business = self.businesses.get_business(record.business).await?;

                    businesses.insert(record.business, business.clone());

                    business
                }
            };

            submissions.push(PriceSubmission {
                uuid: record.uuid,
                product: record.product,
                user: Some(record.user),
                price: record.price,
                image: record.image,
                submitted_at: record.submitted_at,
                business,
            });
        }

        debug!(filter = ?query.filter, submissions = submissions.len(), "retrieved submissions");

        Ok(submissions)
    }

    async fn get_sanitized_submissions(
        &self,
        query: SubmissionQuery,
    ) -> Result<Vec<PriceSubmission>, PricesServiceError> {
        Ok(self
            .get_submissions(query)
            .await?
            .into_iter()
            .map(PriceSubmission::sanitized)
            .collect())
    }

    async fn add_price(
        &self,
        submission: NewPriceSubmission,
    ) -> Result<PriceUuid, PricesServiceError> {
        let price = submission.price.to_cents()?;

        let product = self.products.add_product(submission.product).await?;

        let place = match submission.business {
            BusinessReference::PlaceId(place_id) => {
                self.places.lookup_by_place_id(&place_id).await?
            }
            BusinessReference::Place(details) => details,
        };

        let business = self.businesses.add_business(place.into()).await?;

        let uuid = self
            .store
            .insert(NewPriceRecord {
                product: product.uuid,
                business: business.uuid,
                user: submission.user,
                price,
                image: submission.image,
                submitted_at: Timestamp::now(),
            })
            .await?
            .ok_or(PricesServiceError::NotInserted)?;

        info!(
            price_uuid = %uuid,
            product = %product.uuid,
            business = %business.uuid,
            price,
            "price added"
        );

        Ok(uuid)
    }
}

#[automock]
#[async_trait]
pub trait PricesService: Send + Sync {
    /// Average, lowest and highest price of a product.
    ///
    /// Returns [`PriceStats::NO_DATA`] when the product has no prices.
    async fn price_stats(&self, product: ProductUuid) -> Result<PriceStats, PricesServiceError>;

    /// Average price of a product per UTC day, in date order.
    async fn average_price_per_day(
        &self,
        product: ProductUuid,
    ) -> Result<Vec<DailyAverage>, PricesServiceError>;

    /// Submissions matching the query, each with its business details.
    async fn get_submissions(
        &self,
        query: SubmissionQuery,
    ) -> Result<Vec<PriceSubmission>, PricesServiceError>;

    /// Like [`get_submissions`](PricesService::get_submissions), without the
    /// submitting user.
    async fn get_sanitized_submissions(
        &self,
        query: SubmissionQuery,
    ) -> Result<Vec<PriceSubmission>, PricesServiceError>;

    /// Records a price, resolving its product and business first.
    async fn add_price(
        &self,
        submission: NewPriceSubmission,
    ) -> Result<PriceUuid, PricesServiceError>;
}
