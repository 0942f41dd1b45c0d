//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `"ok"` when the store is reachable, `"degraded"` otherwise.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// Configured store provider.
    pub store: String,
    /// Whether the store answered its health check.
    pub store_healthy: bool,
    /// When the server started.
    pub started_at: DateTime<Utc>,
    /// Seconds since start.
    pub uptime_seconds: i64,
}
