//! Response types (Serialize)

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct VersionResponse {
    pub version: &'static str,
    pub storage: &'static str,
    pub catalog_configured: bool,
}

/// Shape served on `/books-detail/{id}`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyPriceResponse {
    pub book_id: String,
    pub price: u32,
}
