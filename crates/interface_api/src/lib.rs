//! HTTP API Layer
//!
//! This crate provides the REST API for the lost-and-found registry using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for reports, search, claims, admin, and exports
//! - **Middleware**: Admin shared-secret gate and request logging
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Consistent error responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, new_shared_store, config::ApiConfig};
//!
//! let app = create_router(new_shared_store(), ApiConfig::default());
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;
pub mod auth;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post, delete},
    middleware as axum_middleware,
};
use tokio::sync::RwLock;
use tower_http::trace::TraceLayer;
use tower_http::cors::{CorsLayer, Any};

use infra_store::SessionStore;

use crate::config::ApiConfig;
use crate::middleware::{admin_auth_middleware, request_log_middleware};
use crate::handlers::{admin, claims, health, items, reports, search};

/// Shared handle to the session store
///
/// The Axum runtime may serve requests from several workers; the RwLock
/// serializes access so each user action still runs as one complete
/// operation over the collections, and no handler holds the lock across
/// external I/O.
pub type SharedStore = Arc<RwLock<SessionStore>>;

/// Creates a fresh store for one session
pub fn new_shared_store() -> SharedStore {
    Arc::new(RwLock::new(SessionStore::new()))
}

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
    pub config: ApiConfig,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `store` - The session store backing all collections
/// * `config` - API configuration
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(store: SharedStore, config: ApiConfig) -> Router {
    let state = AppState { store, config };

    // Public routes (no auth required)
    let public_routes = Router::new()
        .route("/health", get(health::health_check));

    // Item routes
    let item_routes = Router::new()
        .route("/:kind", post(items::report_item))
        .route("/:kind", get(items::list_items))
        .route("/:kind/recent", get(items::recent_items))
        .route("/:kind/:id", get(items::get_item))
        .route("/:kind/:id/image", get(items::get_item_image));

    // Claim routes
    let claim_routes = Router::new()
        .route("/", post(claims::submit_claim))
        .route("/handoff", post(claims::stage_handoff))
        .route("/handoff", get(claims::take_handoff));

    // Report routes
    let report_routes = Router::new()
        .route("/statistics", get(reports::statistics))
        .route("/export", get(reports::export));

    // Administrative routes, gated by the shared secret
    let admin_routes = Router::new()
        .route("/claims", get(admin::list_claims))
        .route("/claims/:id/approve", post(admin::approve_claim))
        .route("/claims/:id/reject", post(admin::reject_claim))
        .route("/claims/:id", delete(admin::delete_claim))
        .route("/items/:kind/:id/return", post(admin::return_item))
        .route("/items/:kind/:id/close", post(admin::close_item))
        .route("/items/:kind/:id", delete(admin::delete_item))
        .layer(axum_middleware::from_fn_with_state(state.clone(), admin_auth_middleware));

    // Combine all routes
    let api_routes = Router::new()
        .nest("/items", item_routes)
        .nest("/claims", claim_routes)
        .nest("/reports", report_routes)
        .route("/search", get(search::search))
        .nest("/admin", admin_routes);

    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(axum_middleware::from_fn(request_log_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
