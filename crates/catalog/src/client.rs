use bookstall_core::{CatalogItem, MAX_CATALOG_RESULTS};
use reqwest::StatusCode;

use crate::api_types::{OrderBy, Volume, VolumesResponse};
use crate::error::CatalogError;

/// Public Google Books endpoint.
pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/books/v1";
const REQUEST_TIMEOUT_SECS: u64 = 15;
const ERROR_BODY_PREVIEW: usize = 200;

/// Client for the volumes API.
pub struct GoogleBooksClient {
    client: reqwest::Client,
    api_key: Option<String>,
    base_url: reqwest::Url,
}

impl std::fmt::Debug for GoogleBooksClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleBooksClient")
            .field("client", &self.client)
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("base_url", &self.base_url())
            .finish()
    }
}

impl GoogleBooksClient {
    /// # Errors
    /// Returns an error if `base_url` is not a usable http(s) URL or the HTTP
    /// client cannot be built (TLS backend failure).
    pub fn new(base_url: &str, api_key: Option<String>) -> Result<Self, CatalogError> {
        let base_url = reqwest::Url::parse(base_url)
            .map_err(|e| CatalogError::ClientInit(format!("invalid base URL {base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(CatalogError::ClientInit(format!("base URL {base_url} has no path")));
        }
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| CatalogError::ClientInit(e.to_string()))?;
        Ok(Self { client, api_key, base_url })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    /// Base URL with `segments` appended, each percent-encoded as one path segment.
    fn endpoint(&self, segments: &[&str]) -> Result<reqwest::Url, CatalogError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                CatalogError::ClientInit(format!("base URL {} has no path", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// `GET /volumes?q=...`. A response without `items` yields an empty list.
    ///
    /// # Errors
    /// Returns an error on transport failure, a non-success status, or an
    /// undecodable body.
    pub async fn search(
        &self,
        query: &str,
        order_by: OrderBy,
        max_results: u32,
    ) -> Result<Vec<CatalogItem>, CatalogError> {
        let max_results = max_results.clamp(1, MAX_CATALOG_RESULTS).to_string();
        let mut params = vec![
            ("q", query),
            ("orderBy", order_by.as_str()),
            ("maxResults", max_results.as_str()),
        ];
        if let Some(key) = self.api_key.as_deref() {
            params.push(("key", key));
        }

        let url = self.endpoint(&["volumes"])?;
        let response = self.client.get(url).query(&params).send().await?;
        let body = read_success_body(response).await?;

        let parsed: VolumesResponse =
            serde_json::from_str(&body).map_err(|e| CatalogError::JsonParse {
                context: format!(
                    "volumes response (body: {})",
                    truncate(&body, ERROR_BODY_PREVIEW)
                ),
                source: e,
            })?;

        let total = parsed.items.len();
        let items: Vec<CatalogItem> =
            parsed.items.into_iter().filter_map(Volume::into_item).collect();
        if items.len() < total {
            tracing::debug!(
                query,
                dropped = total - items.len(),
                "dropped volumes without id or title"
            );
        }
        Ok(items)
    }

    /// `GET /volumes/{id}`. `None` on 404 or when the volume has no title.
    ///
    /// # Errors
    /// Returns an error on transport failure, any other non-success status,
    /// or an undecodable body.
    pub async fn volume(&self, id: &str) -> Result<Option<CatalogItem>, CatalogError> {
        let mut request = self.client.get(self.endpoint(&["volumes", id])?);
        if let Some(key) = self.api_key.as_deref() {
            request = request.query(&[("key", key)]);
        }

        let response = request.send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let body = read_success_body(response).await?;

        let volume: Volume = serde_json::from_str(&body).map_err(|e| CatalogError::JsonParse {
            context: format!("volume {id} (body: {})", truncate(&body, ERROR_BODY_PREVIEW)),
            source: e,
        })?;
        Ok(volume.into_item())
    }
}

async fn read_success_body(response: reqwest::Response) -> Result<String, CatalogError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.text().await?);
    }
    let body = response.text().await.unwrap_or_else(|_| "Could not read error body".to_owned());
    Err(CatalogError::HttpStatus {
        code: status.as_u16(),
        body: truncate(&body, ERROR_BODY_PREVIEW).to_owned(),
    })
}

/// Truncates a string to the given maximum length at a char boundary.
#[must_use]
pub fn truncate(s: &str, max_len: usize) -> &str {
    if s.len() <= max_len {
        s
    } else {
        let mut end = max_len;
        while end > 0 && !s.is_char_boundary(end) {
            end = end.saturating_sub(1);
        }
        s.get(..end).unwrap_or("")
    }
}
