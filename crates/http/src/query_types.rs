//! Request/query types (Deserialize)

use bookstall_catalog::OrderBy;
use bookstall_service::ListingOptions;
use serde::Deserialize;

use crate::api_error::ApiError;

/// Query string shared by the listing endpoints.
///
/// Accepts both snake_case and the camelCase names older clients send.
#[derive(Debug, Default, Deserialize)]
pub struct ListingQuery {
    #[serde(default)]
    pub q: String,
    #[serde(default, alias = "maxResults")]
    pub max_results: Option<u32>,
    #[serde(default, alias = "orderBy")]
    pub order_by: Option<String>,
}

impl ListingQuery {
    pub fn options(&self) -> Result<ListingOptions, ApiError> {
        let order_by = self
            .order_by
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .map(str::parse::<OrderBy>)
            .transpose()
            .map_err(ApiError::BadRequest)?;
        Ok(ListingOptions { order_by, max_results: self.max_results })
    }
}

#[derive(Debug, Deserialize)]
pub struct LikeRequest {
    #[serde(default, alias = "userId")]
    pub user_id: String,
}
