//! Noor Server Library
//!
//! Same-origin audio range proxy and reading-content API for Noor Recite.
//!
//! This library exposes the router and its components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod services;
pub mod state;

use axum::Router;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

// Re-export commonly used types for convenience
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use services::{ContentClient, TafsirStore};
pub use state::AppState;

/// Build the application router with request tracing and CORS
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .nest("/api", api::routes())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
