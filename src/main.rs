// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use crate::application::dashboard_service::DashboardService;
use crate::application::launch_source::load_dataset;
use crate::infrastructure::config::load_app_config;
use crate::infrastructure::csv_source::CsvLaunchSource;
use crate::presentation::app_state::AppState;
use crate::presentation::router::build_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let app_config = load_app_config()?;

    // Load the dataset once; it is never mutated afterwards
    let source = CsvLaunchSource::new(&app_config.dataset.path);
    let dataset = Arc::new(load_dataset(&source).await?);

    // Create services (application layer)
    let dashboard_service = DashboardService::new(dataset, app_config.dashboard.clone());

    // Create application state
    let state = Arc::new(AppState { dashboard_service });

    // Build router (presentation layer)
    let router = build_router(state);

    // Start server
    let addr = app_config.server.bind_address()?;
    tracing::info!("Starting launch-dashboard service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
