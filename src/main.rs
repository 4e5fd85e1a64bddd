use std::sync::Arc;

use anyhow::Context;
use axum::{
    middleware,
    routing::get,
    Router,
};
use tower_http::trace::TraceLayer;
use tracing::info;

mod config;
mod cors;
mod error;
mod handlers;
mod models;
mod seed;
mod store;

use crate::config::Config;
use crate::handlers::products;
use crate::store::ProductStore;

/// Shared application state. Cloned per request; the store sits behind an Arc.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ProductStore>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env();

    // Structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_new(&config.log_filter)
                .with_context(|| format!("invalid log filter {:?}", config.log_filter))?,
        )
        .with_target(false)
        .compact()
        .init();

    let store = Arc::new(seed::seeded_store());
    info!(count = store.len().await, "Mock products loaded");

    let app = build_router(AppState { store });

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!("Listening on http://{}", addr);
    info!("Available endpoints:");
    for endpoint in [
        "GET    /api/health",
        "GET    /api/products",
        "GET    /api/products/:id",
        "POST   /api/products",
        "PUT    /api/products/:id",
        "DELETE /api/products/:id",
    ] {
        info!("  {}", endpoint);
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

fn build_router(state: AppState) -> Router {
    Router::new()
        // ── Health ──────────────────────────────────────────────────────────
        .route(
            "/api/health",
            get(handlers::health).fallback(handlers::endpoint_not_found),
        )

        // ── Products CRUD ───────────────────────────────────────────────────
        .route(
            "/api/products",
            get(products::list_products)
                .post(products::create_product)
                .fallback(handlers::endpoint_not_found),
        )
        .route(
            "/api/products/",
            get(products::missing_id)
                .put(products::missing_id)
                .delete(products::missing_id)
                .fallback(handlers::endpoint_not_found),
        )
        .route(
            "/api/products/*id",
            get(products::get_product)
                .put(products::update_product)
                .delete(products::delete_product)
                .fallback(handlers::endpoint_not_found),
        )
        .fallback(handlers::endpoint_not_found)

        // ── Middleware ──────────────────────────────────────────────────────
        .layer(middleware::from_fn(handlers::reject_head))
        .layer(middleware::from_fn(cors::cors))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
