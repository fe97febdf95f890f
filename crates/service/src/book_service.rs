use std::sync::Arc;

use bookstall_core::{CatalogItem, PriceQuote, SyntheticAttributeRecord};
use serde::Serialize;

use crate::{AttributeService, CatalogService, ServiceError};

/// Detail view: catalog volume (if reachable), attributes and the price quote.
#[derive(Debug, Clone, Serialize)]
pub struct BookDetail {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<CatalogItem>,
    pub attributes: SyntheticAttributeRecord,
    pub quote: PriceQuote,
}

pub struct BookService {
    attributes: Arc<AttributeService>,
    catalog: Arc<CatalogService>,
}

impl BookService {
    #[must_use]
    pub const fn new(attributes: Arc<AttributeService>, catalog: Arc<CatalogService>) -> Self {
        Self { attributes, catalog }
    }

    pub async fn detail(&self, id: &str) -> Result<BookDetail, ServiceError> {
        let id = id.trim();
        if id.is_empty() {
            return Err(ServiceError::InvalidInput("book id must not be empty".into()));
        }
        let (volume, attributes) =
            tokio::join!(self.catalog.volume(id), self.attributes.get_or_create(id));
        let attributes = attributes?;
        let page_count = volume.as_ref().and_then(|v| v.page_count);
        let quote = PriceQuote::new(attributes.price, page_count);
        let volume = volume.map(|mut v| {
            v.has_discount = quote.has_discount;
            v
        });
        Ok(BookDetail { id: attributes.id.clone(), volume, attributes, quote })
    }
}
