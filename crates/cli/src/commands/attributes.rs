use anyhow::Result;
use bookstall_service::AttributeService;

use crate::open_storage;

async fn service() -> Result<AttributeService> {
    Ok(AttributeService::from_env(open_storage().await?)?)
}

pub(crate) async fn run_attributes(id: &str) -> Result<()> {
    let record = service().await?.get_or_create(id).await?;
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}

pub(crate) async fn run_like(id: &str, user: &str) -> Result<()> {
    let record = service().await?.like(id, user).await?;
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}

pub(crate) async fn run_unlike(id: &str, user: &str) -> Result<()> {
    match service().await?.unlike(id, user).await? {
        Some(record) => println!("{}", serde_json::to_string_pretty(&record)?),
        None => println!("No attributes for book: {id}"),
    }
    Ok(())
}
