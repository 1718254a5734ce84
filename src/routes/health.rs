// ABOUTME: Health check route for liveness probes
// ABOUTME: Returns a static JSON payload with the crate version
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde_json::json;

/// Create the /health route
#[must_use]
pub fn routes() -> Router {
    Router::new().route("/health", get(handle_health))
}

async fn handle_health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "version": env!("CARGO_PKG_VERSION"),
        })),
    )
}
