//! HTTP API application wiring (Axum router + warehouse wiring).
//!
//! This folder is structured like:
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;

use warehouse_catalog::Warehouse;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;

/// Build the full HTTP router around `warehouse` (public entrypoint used by
/// `main.rs` and the black-box tests).
pub fn build_app(warehouse: Arc<Warehouse>) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(
            ServiceBuilder::new()
                .layer(Extension(warehouse))
                .layer(axum::middleware::from_fn(middleware::log_requests)),
        )
}
