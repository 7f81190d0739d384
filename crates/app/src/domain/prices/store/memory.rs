//! In-memory price store.

use std::{
    cmp::Reverse,
    collections::{BTreeMap, btree_map::Entry},
    sync::Arc,
};

use async_trait::async_trait;
use jiff::tz::TimeZone;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::prices::{
    query::{AggregateQuery, GroupKey, PriceAggregate, PriceGrouping, SubmissionQuery},
    records::{NewPriceRecord, PriceRecord, PriceUuid},
    store::{PriceStore, PriceStoreError},
};

/// Price store holding its records in process memory.
///
/// Applies the same filtering, grouping and ordering rules as
/// [`PgPriceStore`](crate::domain::prices::store::PgPriceStore).
#[derive(Debug, Clone, Default)]
pub struct MemoryPriceStore {
    records: Arc<RwLock<Vec<PriceRecord>>>,
}

impl MemoryPriceStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn group_key(record: &PriceRecord, group_by: PriceGrouping) -> GroupKey {
    match group_by {
        PriceGrouping::Product => GroupKey::Product(record.product),
        PriceGrouping::SubmittedDay => {
            GroupKey::Day(record.submitted_at.to_zoned(TimeZone::UTC).date())
        }
    }
}

#[async_trait]
impl PriceStore for MemoryPriceStore {
    async fn aggregate(
        &self,
        query: &AggregateQuery,
    ) -> Result<Vec<PriceAggregate>, PriceStoreError> {
        let records = self.records.read().await;
        let mut groups: BTreeMap<GroupKey, PriceAggregate> = BTreeMap::new();

        for record in records.iter().filter(|record| query.filter.matches(record)) {
            let key = group_key(record, query.group_by);

            match groups.entry(key) {
                Entry::Vacant(entry) => {
                    entry.insert(PriceAggregate {
                        key,
                        count: 1,
                        total: record.price,
                        lowest: record.price,
                        highest: record.price,
                    });
                }
                Entry::Occupied(mut entry) => {
                    let group = entry.get_mut();

                    group.total = group
                        .total
                        .checked_add(record.price)
                        .ok_or(PriceStoreError::Overflow)?;
                    group.count += 1;
                    group.lowest = group.lowest.min(record.price);
                    group.highest = group.highest.max(record.price);
                }
            }
        }

        debug!(groups = groups.len(), group_by = ?query.group_by, "aggregated prices");

        Ok(groups.into_values().collect())
    }

    async fn find(&self, query: &SubmissionQuery) -> Result<Vec<PriceRecord>, PriceStoreError> {
        let records = self.records.read().await;

        let mut matching: Vec<PriceRecord> = records
            .iter()
            .filter(|record| query.filter.matches(record))
            .cloned()
            .collect();

        if query.most_recent {
            matching.sort_by_key(|record| (Reverse(record.submitted_at), record.uuid));
        } else {
            matching.sort_by_key(|record| (record.submitted_at, record.uuid));
        }

        if let Some(limit) = query.limit {
            matching.truncate(usize::try_from(limit.get()).unwrap_or(usize::MAX));
        }

        Ok(matching)
    }

    async fn insert(&self, price: NewPriceRecord) -> Result<Option<PriceUuid>, PriceStoreError> {
        let uuid = PriceUuid::new();

        self.records.write().await.push(PriceRecord {
            uuid,
            product: price.product,
            business: price.business,
            user: price.user,
            price: price.price,
            image: price.image,
            submitted_at: price.submitted_at,
        });

        Ok(Some(uuid))
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroU32;

    use jiff::{Timestamp, ToSpan, civil::date};
    use testresult::TestResult;

    use crate::domain::{
        businesses::records::BusinessUuid,
        prices::query::PriceFilter,
        products::records::ProductUuid,
        users::UserUuid,
    };

    use super::*;

    fn new_price(product: ProductUuid, price: i64, submitted_at: Timestamp) -> NewPriceRecord {
        NewPriceRecord {
            product,
            business: BusinessUuid::new(),
            user: UserUuid::new(),
            price,
            image: None,
            submitted_at,
        }
    }

    #[tokio::test]
    async fn aggregate_groups_by_utc_day_in_date_order() -> TestResult {
        let store = MemoryPriceStore::new();
        let product = ProductUuid::new();
        let late: Timestamp = "2026-03-02T23:30:00Z".parse()?;
        let early: Timestamp = "2026-03-01T00:15:00Z".parse()?;

        store.insert(new_price(product, 400, late)).await?;
        store.insert(new_price(product, 100, early)).await?;
        store.insert(new_price(product, 201, early.checked_add(2.hours())?)).await?;
        store.insert(new_price(ProductUuid::new(), 9_999, early)).await?;

        let aggregates = store
            .aggregate(&AggregateQuery {
                filter: PriceFilter::product(product),
                group_by: PriceGrouping::SubmittedDay,
            })
            .await?;

        let days: Vec<(GroupKey, Option<i64>)> = aggregates
            .iter()
            .map(|aggregate| (aggregate.key, aggregate.average()))
            .collect();

        assert_eq!(
            days,
            vec![
                (GroupKey::Day(date(2026, 3, 1)), Some(150)),
                (GroupKey::Day(date(2026, 3, 2)), Some(400)),
            ]
        );

        Ok(())
    }

    #[tokio::test]
    async fn find_sorts_and_limits() -> TestResult {
        let store = MemoryPriceStore::new();
        let product = ProductUuid::new();
        let start: Timestamp = "2026-03-01T09:00:00Z".parse()?;

        let middle = store
            .insert(new_price(product, 200, start.checked_add(1.hour())?))
            .await?;
        let oldest = store.insert(new_price(product, 100, start)).await?;
        let newest = store
            .insert(new_price(product, 300, start.checked_add(2.hours())?))
            .await?;

        let all = store
            .find(&SubmissionQuery::new(PriceFilter::product(product)))
            .await?;

        let recent = store
            .find(&SubmissionQuery {
                filter: PriceFilter::product(product),
                limit: NonZeroU32::new(2),
                most_recent: true,
            })
            .await?;

        let uuids = |records: &[PriceRecord]| {
            records
                .iter()
                .map(|record| Some(record.uuid))
                .collect::<Vec<_>>()
        };

        assert_eq!(uuids(&all), vec![oldest, middle, newest]);
        assert_eq!(uuids(&recent), vec![newest, middle]);

        Ok(())
    }

    #[tokio::test]
    async fn aggregate_total_overflow_is_an_error() -> TestResult {
        let store = MemoryPriceStore::new();
        let product = ProductUuid::new();
        let price = i64::MAX / 2 + 1;

        store.insert(new_price(product, price, Timestamp::UNIX_EPOCH)).await?;
        store.insert(new_price(product, price, Timestamp::UNIX_EPOCH)).await?;

        let result = store
            .aggregate(&AggregateQuery {
                filter: PriceFilter::product(product),
                group_by: PriceGrouping::Product,
            })
            .await;

        assert!(
            matches!(result, Err(PriceStoreError::Overflow)),
            "expected Overflow, got {result:?}"
        );

        Ok(())
    }
}
