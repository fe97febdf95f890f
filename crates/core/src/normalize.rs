//! Listing normalization: drop undisplayable entries, collapse duplicates,
//! flag discounts.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::catalog::{CatalogItem, DedupKey};
use crate::pricing::is_discounted;

static HTML_TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());

/// Normalizes a raw catalog listing for display.
///
/// Items without a non-empty author list or a thumbnail are excluded. Of the
/// remaining items, only the first occurrence of each [`DedupKey`] survives,
/// in input order, and each survivor gets its `has_discount` flag set.
/// Never fails: malformed input simply yields fewer (possibly zero) items.
#[must_use]
pub fn normalize(items: Vec<CatalogItem>) -> Vec<CatalogItem> {
    let mut seen: HashSet<DedupKey> = HashSet::with_capacity(items.len());
    items
        .into_iter()
        .filter(CatalogItem::is_displayable)
        .filter(|item| seen.insert(item.dedup_key()))
        .map(|mut item| {
            item.has_discount = is_discounted(item.page_count);
            item
        })
        .collect()
}

/// Keeps items credited to `author`, compared case-insensitively after trimming.
///
/// Author searches upstream are fuzzy; this narrows them to exact credits.
#[must_use]
pub fn filter_by_author(items: Vec<CatalogItem>, author: &str) -> Vec<CatalogItem> {
    let wanted = author.trim().to_lowercase();
    if wanted.is_empty() {
        return Vec::new();
    }
    items
        .into_iter()
        .filter(|item| {
            item.authors
                .as_ref()
                .is_some_and(|authors| authors.iter().any(|a| a.trim().to_lowercase() == wanted))
        })
        .collect()
}

/// Removes markup tags from a description.
#[must_use]
pub fn strip_html(text: &str) -> String {
    HTML_TAG_REGEX.replace_all(text, "").trim().to_owned()
}
