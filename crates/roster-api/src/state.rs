//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use roster_core::config::AppConfig;
use roster_service::employee::EmployeeService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are cheap to clone across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Employee service
    pub employee_service: Arc<EmployeeService>,
    /// When this process started serving
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// Creates the state from its parts, stamping the start time.
    pub fn new(config: AppConfig, employee_service: Arc<EmployeeService>) -> Self {
        Self {
            config: Arc::new(config),
            employee_service,
            started_at: Utc::now(),
        }
    }
}
