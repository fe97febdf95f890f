use std::sync::Arc;

use anyhow::Result;
use bookstall_http::{AppState, create_router};
use bookstall_service::{AttributeService, CatalogService};
use tokio::net::TcpListener;
use tokio::signal;

use crate::open_storage;

pub(crate) async fn run(port: u16, host: String) -> Result<()> {
    let storage = open_storage().await?;
    let storage_kind = storage.kind();

    let attribute_service = Arc::new(AttributeService::from_env(storage)?);
    let catalog_service = Arc::new(CatalogService::from_env());
    if !catalog_service.is_configured() {
        tracing::warn!("Catalog client not configured, listings will be empty");
    }

    let state = Arc::new(AppState::new(attribute_service, catalog_service, storage_kind));
    let router = create_router(state);

    let addr = format!("{host}:{port}");
    tracing::info!(storage = storage_kind, "Starting HTTP server on {}", addr);
    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
        tracing::info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
                tracing::info!("Received terminate signal, shutting down");
            },
            Err(e) => {
                tracing::warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
