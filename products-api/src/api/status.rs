//! Health check endpoint for monitoring that the service is up.

use rocket::{Route, serde::json::Json};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
    pub built: String,
    pub git_commit: Option<String>,
}

/// Health Status endpoint.
///
/// - **URL:** `/status`
/// - **Method:** `GET`
/// - **Purpose:** Returns the health status of the application
///
/// It does not touch the database; it always returns a "running" status if
/// the server is able to answer at all.
///
/// # Response
///
/// **Success (HTTP 200 OK):**
/// ```json
/// {
///   "status": "running",
///   "version": "0.1.0",
///   "built": "Sat, 01 Mar 2025 12:00:00 +0000",
///   "git_commit": "cd51275141a2e7d49737aa7dd4e8ff7c9a804d67"
/// }
/// ```
#[get("/status")]
pub fn health_status() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        built: built_info::BUILT_TIME_UTC.to_string(),
        git_commit: built_info::GIT_COMMIT_HASH.map(str::to_string),
    })
}

pub fn routes() -> Vec<Route> {
    routes![health_status]
}
