use bookstall_catalog::{CatalogError, DEFAULT_BASE_URL, GoogleBooksClient, OrderBy};
use bookstall_core::{
    CatalogItem, DEFAULT_CATALOG_MAX_RESULTS, env_non_empty, env_parse_with_default,
    filter_by_author, normalize,
};

/// Per-request listing knobs; `None` falls back to the service defaults.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListingOptions {
    pub order_by: Option<OrderBy>,
    pub max_results: Option<u32>,
}

/// Catalog listings, already normalized. Upstream failures become empty
/// listings and are only logged.
pub struct CatalogService {
    client: Option<GoogleBooksClient>,
    max_results: u32,
}

impl CatalogService {
    #[must_use]
    pub const fn new(client: Option<GoogleBooksClient>, max_results: u32) -> Self {
        Self { client, max_results }
    }

    /// Client from `GOOGLE_BOOKS_API_URL` / `GOOGLE_BOOKS_API_KEY`. A client
    /// that cannot be built leaves the service unconfigured.
    #[must_use]
    pub fn from_env() -> Self {
        let base_url =
            env_non_empty("GOOGLE_BOOKS_API_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_owned());
        let api_key = env_non_empty("GOOGLE_BOOKS_API_KEY");
        let max_results =
            env_parse_with_default("BOOKSTALL_CATALOG_MAX_RESULTS", DEFAULT_CATALOG_MAX_RESULTS);

        let client = match GoogleBooksClient::new(&base_url, api_key) {
            Ok(client) => Some(client),
            Err(e) => {
                tracing::warn!(error = %e, "catalog client unavailable, listings will be empty");
                None
            },
        };
        Self::new(client, max_results)
    }

    #[must_use]
    pub const fn is_configured(&self) -> bool {
        self.client.is_some()
    }

    /// Free-text search.
    pub async fn search(&self, query: &str, options: ListingOptions) -> Vec<CatalogItem> {
        let items = self.fetch(query.trim(), options).await;
        normalize(items)
    }

    /// Subject shelf (`subject:<name>`).
    pub async fn shelf(&self, subject: &str, options: ListingOptions) -> Vec<CatalogItem> {
        let subject = subject.trim();
        if subject.is_empty() {
            return Vec::new();
        }
        let items = self.fetch(&format!("subject:{subject}"), options).await;
        normalize(items)
    }

    /// Newest books by `author`, keeping only exact (case-insensitive) author matches.
    pub async fn author_books(&self, author: &str) -> Vec<CatalogItem> {
        let author = author.trim();
        if author.is_empty() {
            return Vec::new();
        }
        let options = ListingOptions { order_by: Some(OrderBy::Newest), max_results: None };
        let items = self.fetch(&format!("inauthor:{author}"), options).await;
        normalize(filter_by_author(items, author))
    }

    /// Single volume; `None` when unknown or the catalog is unreachable.
    pub async fn volume(&self, id: &str) -> Option<CatalogItem> {
        let client = self.client.as_ref()?;
        match client.volume(id).await {
            Ok(item) => item,
            Err(e) => {
                log_catalog_error(&e, id);
                None
            },
        }
    }

    async fn fetch(&self, query: &str, options: ListingOptions) -> Vec<CatalogItem> {
        if query.is_empty() {
            return Vec::new();
        }
        let Some(client) = self.client.as_ref() else {
            tracing::warn!(query, "catalog not configured, returning empty listing");
            return Vec::new();
        };
        let order_by = options.order_by.unwrap_or_default();
        let max_results = options.max_results.unwrap_or(self.max_results);
        match client.search(query, order_by, max_results).await {
            Ok(items) => items,
            Err(e) => {
                log_catalog_error(&e, query);
                Vec::new()
            },
        }
    }
}

fn log_catalog_error(error: &CatalogError, subject: &str) {
    tracing::warn!(
        subject,
        transient = error.is_transient(),
        error = %error,
        "catalog request failed"
    );
}
