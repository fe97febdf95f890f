use anyhow::Result;
use bookstall_service::{CatalogService, ListingOptions};

pub(crate) async fn run_search(
    query: &str,
    subject: bool,
    author: bool,
    max_results: Option<u32>,
) -> Result<()> {
    let catalog = CatalogService::from_env();
    let options = ListingOptions { order_by: None, max_results };
    let items = if author {
        catalog.author_books(query).await
    } else if subject {
        catalog.shelf(query, options).await
    } else {
        catalog.search(query, options).await
    };
    println!("{}", serde_json::to_string_pretty(&items)?);
    Ok(())
}
