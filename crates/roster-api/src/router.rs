//! Route definitions for the Roster HTTP API.
//!
//! All routes are mounted under `/api`. The router receives `AppState`
//! and passes it to all handlers via Axum's `State` extractor.

use axum::{Router, routing::get};

use crate::handlers;
use crate::state::AppState;

/// Build the API router with all routes, without outer middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(employee_routes())
        .merge(health_routes());

    Router::new().nest("/api", api_routes).with_state(state)
}

/// Employee CRUD and lookup
fn employee_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/employees",
            get(handlers::employee::list_employees).post(handlers::employee::create_employee),
        )
        .route("/employees/search", get(handlers::employee::find_by_name))
        .route(
            "/employees/{id}",
            get(handlers::employee::get_employee)
                .put(handlers::employee::update_employee)
                .delete(handlers::employee::delete_employee),
        )
}

/// Health check
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
