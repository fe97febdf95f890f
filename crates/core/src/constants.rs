//! Shared constants for bookstall.

/// Books with fewer pages than this are sold at a discount.
pub const DISCOUNT_PAGE_THRESHOLD: u32 = 150;

/// Discounted price = original price * NUMERATOR / DENOMINATOR (20% off).
pub const DISCOUNT_NUMERATOR: u32 = 4;
pub const DISCOUNT_DENOMINATOR: u32 = 5;

/// Generated prices are always a multiple of this.
pub const PRICE_STEP: u32 = 5;

/// Default inclusive price range for newly seen books.
pub const DEFAULT_PRICE_MIN: u32 = 20;
pub const DEFAULT_PRICE_MAX: u32 = 100;

/// Default inclusive star rating range for newly seen books.
pub const DEFAULT_RATING_MIN: u8 = 1;
pub const DEFAULT_RATING_MAX: u8 = 5;

/// Separator between title and authors in a dedup key.
pub const DEDUP_KEY_SEPARATOR: char = '-';

/// Default number of volumes requested from the catalog per query.
pub const DEFAULT_CATALOG_MAX_RESULTS: u32 = 20;

/// Upper bound the catalog accepts for `maxResults`.
pub const MAX_CATALOG_RESULTS: u32 = 40;

/// PostgreSQL connection pool: maximum connections.
pub const PG_POOL_MAX_CONNECTIONS: u32 = 20;

/// PostgreSQL connection pool: acquire timeout in seconds.
pub const PG_POOL_ACQUIRE_TIMEOUT_SECS: u64 = 10;

/// PostgreSQL connection pool: idle timeout in seconds.
pub const PG_POOL_IDLE_TIMEOUT_SECS: u64 = 300;

/// Default SQLite connection pool size.
pub const DEFAULT_SQLITE_POOL_SIZE: u32 = 8;
