//! Health check endpoint for container orchestration.
//!
//! A liveness probe: it answers 200 whenever the process can serve HTTP, and
//! deliberately does not touch the database.

use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// GET /api/health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
