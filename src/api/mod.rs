//! HTTP API server

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::store::AlbumStore;

pub mod handlers;
pub mod json;
pub mod state;

pub use json::IndentedJson;
pub use state::AppState;

/// Build the API router using the provided application state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/albums",
            get(handlers::list_albums).post(handlers::create_album),
        )
        .route("/albums/:id", get(handlers::get_album))
        .fallback(handlers::fallback)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Convenience helper wrapping a store directly
pub fn create_store_router(store: Arc<dyn AlbumStore>) -> Router {
    create_router(AppState::new(store))
}
