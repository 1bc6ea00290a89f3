//! HTTP server for durable-viewer.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(unreachable_pub, reason = "pub items are re-exported")]
#![allow(clippy::absolute_paths, reason = "Explicit paths for clarity")]
#![allow(missing_debug_implementations, reason = "Internal types")]
#![allow(clippy::missing_docs_in_private_items, reason = "Internal crate")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::min_ident_chars, reason = "Short closure params are idiomatic")]
#![allow(clippy::exhaustive_structs, reason = "HTTP types are stable")]
#![allow(clippy::single_call_fn, reason = "Helper functions improve readability")]

pub mod api_error;
pub mod cookies;
mod handlers;
mod query_types;
pub mod session;
mod viewer;

use axum::{
    Router,
    routing::{any, get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use durable_viewer_client::ListingClient;
use durable_viewer_core::ViewerConfig;

pub use api_error::ApiError;
pub use session::Session;

/// Shared application state for all HTTP handlers.
///
/// Holds no per-user data: credentials travel with each request in cookies.
pub struct AppState {
    /// Client for the management API, shared so connections are pooled
    pub client: ListingClient,
    /// Cookie lifetime and listing limits
    pub config: ViewerConfig,
}

impl AppState {
    /// Builds the state, creating the listing client from `config`.
    ///
    /// # Errors
    /// Returns an error if the listing client cannot be built.
    pub fn new(config: ViewerConfig) -> Result<Self, durable_viewer_client::ClientError> {
        let client = ListingClient::new(&config)?;
        Ok(Self { client, config })
    }
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/login", post(handlers::auth::login).get(viewer::serve_ui))
        .route("/logout", any(handlers::auth::logout))
        .route("/api/namespaces", get(handlers::listing::list_namespaces))
        .route("/api/objects", get(handlers::listing::list_objects))
        .fallback(viewer::serve_ui)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
