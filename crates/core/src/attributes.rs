//! Synthetic per-book attributes: a generated price, a generated star rating
//! and the set of users who liked the book.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_PRICE_MAX, DEFAULT_PRICE_MIN, DEFAULT_RATING_MAX, DEFAULT_RATING_MIN, PRICE_STEP,
};
use crate::error::{CoreError, Result};

/// Persisted attributes for one external book id.
///
/// Created once on first request. `price` and `rating` never change after
/// creation; `liked_by` only changes through like/unlike.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyntheticAttributeRecord {
    pub id: String,
    pub price: u32,
    pub rating: u8,
    /// User ids; a set, serialized in sorted order
    pub liked_by: BTreeSet<String>,
    pub created_at: DateTime<Utc>,
}

impl SyntheticAttributeRecord {
    /// Draws a fresh record for `id` with an empty like set.
    #[must_use]
    pub fn generate<R: Rng + ?Sized>(
        id: impl Into<String>,
        prices: &PriceRange,
        ratings: &RatingRange,
        rng: &mut R,
    ) -> Self {
        Self {
            id: id.into(),
            price: prices.sample(rng),
            rating: ratings.sample(rng),
            liked_by: BTreeSet::new(),
            created_at: Utc::now(),
        }
    }

    #[must_use]
    pub fn like_count(&self) -> usize {
        self.liked_by.len()
    }

    #[must_use]
    pub fn is_liked_by(&self, user_id: &str) -> bool {
        self.liked_by.contains(user_id)
    }
}

/// Inclusive price range. Always contains at least one multiple of [`PRICE_STEP`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PriceRange {
    min: u32,
    max: u32,
}

impl PriceRange {
    /// # Errors
    /// Returns `InvalidInput` if `min > max` or no multiple of 5 lies within the range.
    pub fn new(min: u32, max: u32) -> Result<Self> {
        if min > max {
            return Err(CoreError::InvalidInput(format!(
                "price range min {min} is greater than max {max}"
            )));
        }
        let range = Self { min, max };
        if range.lowest_step() > range.highest_step() {
            return Err(CoreError::InvalidInput(format!(
                "price range [{min}, {max}] contains no multiple of {PRICE_STEP}"
            )));
        }
        Ok(range)
    }

    #[must_use]
    pub const fn min(&self) -> u32 {
        self.min
    }

    #[must_use]
    pub const fn max(&self) -> u32 {
        self.max
    }

    #[must_use]
    pub fn contains(&self, price: u32) -> bool {
        (self.min..=self.max).contains(&price)
    }

    fn lowest_step(&self) -> u32 {
        self.min.div_ceil(PRICE_STEP).saturating_mul(PRICE_STEP)
    }

    fn highest_step(&self) -> u32 {
        (self.max / PRICE_STEP) * PRICE_STEP
    }

    /// Uniform draw over `[min, max]`, rounded to the nearest multiple of 5.
    ///
    /// Rounding can step past a bound that is not itself a multiple of 5,
    /// so the result is clamped to the innermost multiples inside the range.
    #[allow(
        clippy::as_conversions,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "value is rounded and bounded by u32 range endpoints"
    )]
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        let step = f64::from(PRICE_STEP);
        let raw = rng.random_range(f64::from(self.min)..=f64::from(self.max));
        let rounded = ((raw / step).round() * step) as u32;
        rounded.clamp(self.lowest_step(), self.highest_step())
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self { min: DEFAULT_PRICE_MIN, max: DEFAULT_PRICE_MAX }
    }
}

/// Inclusive star rating range, at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RatingRange {
    min: u8,
    max: u8,
}

impl RatingRange {
    /// # Errors
    /// Returns `InvalidInput` if `min` is zero or greater than `max`.
    pub fn new(min: u8, max: u8) -> Result<Self> {
        if min == 0 {
            return Err(CoreError::InvalidInput("rating range must start at 1 or above".into()));
        }
        if min > max {
            return Err(CoreError::InvalidInput(format!(
                "rating range min {min} is greater than max {max}"
            )));
        }
        Ok(Self { min, max })
    }

    #[must_use]
    pub const fn min(&self) -> u8 {
        self.min
    }

    #[must_use]
    pub const fn max(&self) -> u8 {
        self.max
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u8 {
        rng.random_range(self.min..=self.max)
    }
}

impl Default for RatingRange {
    fn default() -> Self {
        Self { min: DEFAULT_RATING_MIN, max: DEFAULT_RATING_MAX }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn default_range_draws_are_steps_within_bounds() {
        let range = PriceRange::default();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10_000 {
            let price = range.sample(&mut rng);
            assert_eq!(price % 5, 0, "price {price} is not a multiple of 5");
            assert!(range.contains(price), "price {price} outside [20, 100]");
        }
    }

    #[test]
    fn default_range_reaches_both_ends() {
        let range = PriceRange::default();
        let mut rng = StdRng::seed_from_u64(11);
        let draws: BTreeSet<u32> = (0..20_000).map(|_| range.sample(&mut rng)).collect();
        assert_eq!(draws.first(), Some(&20));
        assert_eq!(draws.last(), Some(&100));
    }

    #[test]
    fn unaligned_bounds_never_round_outside() {
        let range = PriceRange::new(22, 98).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..10_000 {
            let price = range.sample(&mut rng);
            assert_eq!(price % 5, 0);
            assert!((25..=95).contains(&price), "price {price} escaped [22, 98]");
        }
    }

    #[test]
    fn single_value_range() {
        let range = PriceRange::new(45, 45).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(range.sample(&mut rng), 45);
    }

    #[test]
    fn invalid_price_ranges_are_rejected() {
        assert!(matches!(PriceRange::new(100, 20), Err(CoreError::InvalidInput(_))));
        assert!(matches!(PriceRange::new(21, 24), Err(CoreError::InvalidInput(_))));
    }

    #[test]
    fn rating_draws_stay_in_range() {
        let range = RatingRange::default();
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..1_000 {
            let rating = range.sample(&mut rng);
            assert!((1..=5).contains(&rating));
        }
    }

    #[test]
    fn invalid_rating_ranges_are_rejected() {
        assert!(RatingRange::new(0, 5).is_err());
        assert!(RatingRange::new(4, 2).is_err());
    }

    #[test]
    fn generated_record_starts_without_likes() {
        let mut rng = StdRng::seed_from_u64(9);
        let record = SyntheticAttributeRecord::generate(
            "book-1",
            &PriceRange::default(),
            &RatingRange::default(),
            &mut rng,
        );
        assert_eq!(record.id, "book-1");
        assert_eq!(record.like_count(), 0);
        assert!(!record.is_liked_by("alice"));
    }
}
