use std::sync::Arc;

use bookstall_core::{
    DEFAULT_PRICE_MAX, DEFAULT_PRICE_MIN, DEFAULT_RATING_MAX, DEFAULT_RATING_MIN, PriceRange,
    RatingRange, SyntheticAttributeRecord, env_parse_with_default,
};
use bookstall_storage::{ATTRIBUTES_ENTITY, AttributeStore, StorageBackend, StorageError};

use crate::ServiceError;

/// Get-or-create and like/unlike over the persisted attribute records.
pub struct AttributeService {
    storage: Arc<StorageBackend>,
    prices: PriceRange,
    ratings: RatingRange,
}

impl AttributeService {
    #[must_use]
    pub fn new(storage: Arc<StorageBackend>) -> Self {
        Self { storage, prices: PriceRange::default(), ratings: RatingRange::default() }
    }

    #[must_use]
    pub const fn with_ranges(
        storage: Arc<StorageBackend>,
        prices: PriceRange,
        ratings: RatingRange,
    ) -> Self {
        Self { storage, prices, ratings }
    }

    /// Ranges from `BOOKSTALL_PRICE_MIN/MAX` and `BOOKSTALL_RATING_MIN/MAX`.
    pub fn from_env(storage: Arc<StorageBackend>) -> Result<Self, ServiceError> {
        let prices = PriceRange::new(
            env_parse_with_default("BOOKSTALL_PRICE_MIN", DEFAULT_PRICE_MIN),
            env_parse_with_default("BOOKSTALL_PRICE_MAX", DEFAULT_PRICE_MAX),
        )?;
        let ratings = RatingRange::new(
            env_parse_with_default("BOOKSTALL_RATING_MIN", DEFAULT_RATING_MIN),
            env_parse_with_default("BOOKSTALL_RATING_MAX", DEFAULT_RATING_MAX),
        )?;
        Ok(Self::with_ranges(storage, prices, ratings))
    }

    #[must_use]
    pub const fn price_range(&self) -> &PriceRange {
        &self.prices
    }

    #[must_use]
    pub const fn rating_range(&self) -> &RatingRange {
        &self.ratings
    }

    pub async fn get(&self, id: &str) -> Result<Option<SyntheticAttributeRecord>, ServiceError> {
        let id = require_non_blank(id, "book id")?;
        Ok(self.storage.find_attributes(id).await?)
    }

    /// Existing record for `id`, or a freshly generated one.
    ///
    /// Concurrent callers for the same id all observe the record of whichever
    /// insert the store accepted first.
    pub async fn get_or_create(&self, id: &str) -> Result<SyntheticAttributeRecord, ServiceError> {
        let id = require_non_blank(id, "book id")?;

        if let Some(existing) = self.storage.find_attributes(id).await? {
            tracing::debug!(id, "attributes found");
            return Ok(existing);
        }

        let candidate = {
            let mut rng = rand::rng();
            SyntheticAttributeRecord::generate(id, &self.prices, &self.ratings, &mut rng)
        };

        if self.storage.insert_attributes_if_absent(&candidate).await? {
            tracing::info!(
                id,
                price = candidate.price,
                rating = candidate.rating,
                "attributes created"
            );
            return Ok(candidate);
        }

        tracing::debug!(id, "lost creation race, reading stored attributes");
        self.storage.find_attributes(id).await?.ok_or_else(|| {
            ServiceError::Storage(StorageError::NotFound {
                entity: ATTRIBUTES_ENTITY,
                id: id.to_owned(),
            })
        })
    }

    /// Adds `user_id` to the like set. Does not create missing records.
    pub async fn like(
        &self,
        id: &str,
        user_id: &str,
    ) -> Result<SyntheticAttributeRecord, ServiceError> {
        let id = require_non_blank(id, "book id")?;
        let user_id = require_non_blank(user_id, "user id")?;
        let record = self.storage.add_like(id, user_id).await?;
        tracing::debug!(id, user_id, likes = record.like_count(), "book liked");
        Ok(record)
    }

    /// Removes `user_id` from the like set. `None` if `id` has no record.
    pub async fn unlike(
        &self,
        id: &str,
        user_id: &str,
    ) -> Result<Option<SyntheticAttributeRecord>, ServiceError> {
        let id = require_non_blank(id, "book id")?;
        let user_id = require_non_blank(user_id, "user id")?;
        let record = self.storage.remove_like(id, user_id).await?;
        if record.is_none() {
            tracing::debug!(id, user_id, "unlike on book without attributes");
        }
        Ok(record)
    }
}

fn require_non_blank<'a>(value: &'a str, what: &str) -> Result<&'a str, ServiceError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ServiceError::InvalidInput(format!("{what} must not be empty")));
    }
    Ok(trimmed)
}
