use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::DEDUP_KEY_SEPARATOR;

/// A catalog entry narrowed from an external volume payload.
///
/// Everything except `id` and `title` is optional because the upstream
/// catalog omits fields freely. `has_discount` is derived by
/// [`normalize`](crate::normalize) and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Opaque identifier, unique per catalog source
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Ordered author names
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authors: Option<Vec<String>>,
    /// Cover thumbnail URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_date: Option<String>,
    /// Plain-text description (markup already stripped)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ratings_count: Option<u32>,
    #[serde(default)]
    pub has_discount: bool,
}

impl CatalogItem {
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            subtitle: None,
            authors: None,
            thumbnail: None,
            page_count: None,
            publisher: None,
            published_date: None,
            description: None,
            categories: Vec::new(),
            language: None,
            average_rating: None,
            ratings_count: None,
            has_discount: false,
        }
    }

    #[must_use]
    pub fn authors<I, S>(mut self, authors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.authors = Some(authors.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn maybe_authors(mut self, authors: Option<Vec<String>>) -> Self {
        self.authors = authors;
        self
    }

    #[must_use]
    pub fn thumbnail(mut self, thumbnail: impl Into<String>) -> Self {
        self.thumbnail = Some(thumbnail.into());
        self
    }

    #[must_use]
    pub fn maybe_thumbnail(mut self, thumbnail: Option<String>) -> Self {
        self.thumbnail = thumbnail;
        self
    }

    #[must_use]
    pub const fn page_count(mut self, page_count: u32) -> Self {
        self.page_count = Some(page_count);
        self
    }

    #[must_use]
    pub const fn maybe_page_count(mut self, page_count: Option<u32>) -> Self {
        self.page_count = page_count;
        self
    }

    /// True when the item carries a non-empty author list and a thumbnail.
    #[must_use]
    pub fn is_displayable(&self) -> bool {
        let has_authors = self.authors.as_ref().is_some_and(|a| !a.is_empty());
        let has_thumbnail = self.thumbnail.as_ref().is_some_and(|t| !t.is_empty());
        has_authors && has_thumbnail
    }

    #[must_use]
    pub fn dedup_key(&self) -> DedupKey {
        DedupKey::new(&self.title, self.authors.as_deref())
    }
}

/// `title-author1,author2`; the author part is empty when authors are absent.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DedupKey(String);

impl DedupKey {
    #[must_use]
    pub fn new(title: &str, authors: Option<&[String]>) -> Self {
        let joined = authors.map(|a| a.join(",")).unwrap_or_default();
        Self(format!("{title}{DEDUP_KEY_SEPARATOR}{joined}"))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DedupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dedup_key_joins_title_and_authors() {
        let item = CatalogItem::new("v1", "Dune").authors(["Frank Herbert", "Brian Herbert"]);
        assert_eq!(item.dedup_key().as_str(), "Dune-Frank Herbert,Brian Herbert");
    }

    #[test]
    fn dedup_key_without_authors_has_empty_suffix() {
        let item = CatalogItem::new("v1", "Dune");
        assert_eq!(item.dedup_key().to_string(), "Dune-");
    }

    #[test]
    fn displayable_requires_authors_and_thumbnail() {
        let base = CatalogItem::new("v1", "Dune");
        assert!(!base.clone().thumbnail("t").is_displayable());
        assert!(!base.clone().authors(["A"]).is_displayable());
        assert!(!base.clone().authors(Vec::<String>::new()).thumbnail("t").is_displayable());
        assert!(base.authors(["A"]).thumbnail("t").is_displayable());
    }

    #[test]
    fn serialization_skips_absent_fields() {
        let item = CatalogItem::new("v1", "Dune");
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json, serde_json::json!({"id": "v1", "title": "Dune", "has_discount": false}));
    }
}
