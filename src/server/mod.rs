//! HTTP surface: router, shared state, and the serve loop.
//!
//! The service is stateless across requests; the only shared state is the
//! immutable default [`ConversionConfig`] handlers derive per-request
//! configs from. CORS is wide open so the API can be called directly from
//! browsers on any origin.

pub mod handlers;
pub mod types;

use crate::config::ConversionConfig;
use axum::{
    http::{header, Method},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Shared state for all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Service-level defaults and limits; per-request fields override the
    /// defaults, never the limits.
    pub defaults: Arc<ConversionConfig>,
}

impl AppState {
    pub fn new(defaults: ConversionConfig) -> Self {
        Self {
            defaults: Arc::new(defaults),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ConversionConfig::default())
    }
}

/// Build the API router with all endpoints and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/", get(handlers::service_index))
        .route("/api/index", get(handlers::service_index))
        .route(
            "/api/convert",
            post(handlers::convert_pdf).fallback(handlers::method_not_allowed),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Bind `addr` and serve the API until the process exits.
pub async fn serve(addr: &str, state: AppState) -> Result<(), std::io::Error> {
    let app = build_router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await
}
