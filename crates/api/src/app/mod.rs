//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: the shared bank data source handed to handlers
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `errors.rs`: domain error to response mapping

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

pub mod errors;
pub mod routes;
pub mod services;

use services::AppServices;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(services: AppServices) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .nest("/api", routes::router())
        .fallback(routes::system::not_found)
        .layer(ServiceBuilder::new().layer(Extension(Arc::new(services))))
}
