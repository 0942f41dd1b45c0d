//! Application builder: wires router + middleware + state into an Axum app.

use std::sync::Arc;

use axum::Router;
use axum::middleware as axum_middleware;
use tower_http::trace::TraceLayer;

use roster_core::config::AppConfig;
use roster_core::error::AppError;
use roster_database::EmployeeStore;
use roster_service::employee::EmployeeService;

use crate::middleware::cors::build_cors_layer;
use crate::middleware::logging::request_logging;
use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config.server.cors);

    build_router(state)
        .layer(axum_middleware::from_fn(request_logging))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Builds the application state on top of an already connected store.
pub fn build_state(config: AppConfig, store: &EmployeeStore) -> AppState {
    let employee_service = Arc::new(EmployeeService::new(store.repository()));
    AppState::new(config, employee_service)
}

/// Runs the Roster server until Ctrl+C or SIGTERM.
pub async fn run_server(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Roster v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Employee store ───────────────────────────────────
    tracing::info!(
        "Initializing employee store (provider: {})...",
        config.database.provider
    );
    let store = EmployeeStore::connect(&config.database).await?;

    // ── Step 2: Services and state ───────────────────────────────
    let addr = config.server.bind_address();
    let app = build_app(build_state(config, &store));

    // ── Step 3: Serve ────────────────────────────────────────────
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("Roster server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    // ── Step 4: Release resources ────────────────────────────────
    store.close().await;
    tracing::info!("Roster server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown...");
}
