#![recursion_limit = "256"]

mod config;
mod routes;
mod state;
mod store;

use std::sync::Arc;

use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::store::PetStore;

#[tokio::main]
async fn main() {
    // Optional `.env` for local development.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid server configuration");

    let store: Arc<dyn PetStore> = match &config.backend {
        Some(backend) => {
            let rest = store::rest::RestStore::new(backend).expect("pet backend client build failed");
            tracing::info!(endpoint = rest.endpoint(), "pet backend configured");
            Arc::new(rest)
        }
        None => {
            tracing::warn!("PETS_BACKEND_URL not set, serving the seeded in-memory catalog");
            Arc::new(store::memory::MemoryStore::seeded())
        }
    };

    let state = state::AppState::new(store);
    let app = routes::leptos_app(state)
        .expect("router init failed")
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http());

    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "petsos listening");
    axum::serve(listener, app).await.expect("server failed");
}
