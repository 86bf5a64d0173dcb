//! API routes configuration module

use crate::api::docs;
use crate::api::handlers::{create_shipment, get_shipment, health, list_shipments};
use crate::db::SharedRepository;
use axum::{routing::get, Extension, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Creates and configures the API router with all routes
///
/// # Arguments
/// * `repository` - Shipment repository shared across handlers
///
/// # Returns
/// * `Router` - Configured router with all API endpoints and middleware
pub fn app(repository: SharedRepository) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/shipments", get(list_shipments).post(create_shipment))
        .route("/shipments/:id", get(get_shipment))
        .merge(docs::router())
        .layer(Extension(repository))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
