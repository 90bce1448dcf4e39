//! The liveness probe.

use axum::Json;
use serde::{Deserialize, Serialize};

/// The body of a health check response.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct Health {
    /// Always "healthy" while the server can answer requests.
    pub status: String,
}

/// A route handler that reports the server is up.
pub async fn get_health() -> Json<Health> {
    Json(Health {
        status: "healthy".to_owned(),
    })
}
