//! Wire types for the volumes API and their narrowing into `CatalogItem`.

use std::fmt;
use std::str::FromStr;

use bookstall_core::{CatalogItem, strip_html};
use serde::{Deserialize, Serialize};

/// Result ordering accepted by the volumes endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderBy {
    #[default]
    Relevance,
    Newest,
}

impl OrderBy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Relevance => "relevance",
            Self::Newest => "newest",
        }
    }
}

impl fmt::Display for OrderBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "relevance" => Ok(Self::Relevance),
            "newest" => Ok(Self::Newest),
            other => Err(format!("unknown order: {other}")),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct VolumesResponse {
    #[serde(default)]
    pub items: Vec<Volume>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Volume {
    pub id: Option<String>,
    pub volume_info: Option<VolumeInfo>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct VolumeInfo {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub authors: Option<Vec<String>>,
    pub publisher: Option<String>,
    pub published_date: Option<String>,
    pub description: Option<String>,
    pub page_count: Option<u32>,
    #[serde(default)]
    pub categories: Vec<String>,
    pub average_rating: Option<f64>,
    pub ratings_count: Option<u32>,
    pub language: Option<String>,
    pub image_links: Option<ImageLinks>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ImageLinks {
    pub small_thumbnail: Option<String>,
    pub thumbnail: Option<String>,
}

impl Volume {
    /// Narrow into a `CatalogItem`. `None` when the id or title is missing.
    pub(crate) fn into_item(self) -> Option<CatalogItem> {
        let id = self.id.filter(|id| !id.trim().is_empty())?;
        let info = self.volume_info?;
        let title = info.title.filter(|t| !t.trim().is_empty())?;

        let thumbnail = info
            .image_links
            .and_then(|links| links.thumbnail.or(links.small_thumbnail))
            .filter(|t| !t.is_empty());

        let mut item = CatalogItem::new(id, title)
            .maybe_authors(info.authors)
            .maybe_thumbnail(thumbnail)
            .maybe_page_count(info.page_count);
        item.subtitle = info.subtitle;
        item.publisher = info.publisher;
        item.published_date = info.published_date;
        item.description = info.description.as_deref().map(strip_html);
        item.categories = info.categories;
        item.language = info.language;
        item.average_rating = info.average_rating;
        item.ratings_count = info.ratings_count;
        Some(item)
    }
}
