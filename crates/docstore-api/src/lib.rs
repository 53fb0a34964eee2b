//! docstore-api - Document store REST API layer
//!
//! This crate provides the HTTP layer that uses the DocumentBackend trait
//! to serve document upload and retrieval. It is storage-agnostic.
//!
//! # Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use docstore_api::{create_router, AppState};
//! use docstore_core::FsDocumentStore;
//!
//! let store = FsDocumentStore::new("./uploads")?;
//! let state = AppState::new(Arc::new(store));
//! let router = create_router(state);
//! ```

pub mod error;
pub mod handlers;
pub mod state;

pub use error::ApiError;
pub use state::AppState;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Largest accepted upload body. Replaces axum's 2 MiB default, which is
/// too small for a file store.
pub const MAX_UPLOAD_BYTES: usize = 64 * 1024 * 1024;

/// Create the document store REST API router with the given application state
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(|| async { "OK" }))
        // Document routes
        .route("/documents", post(handlers::documents::upload_document))
        .route("/documents/{name}", get(handlers::documents::get_document))
        // Middleware
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
