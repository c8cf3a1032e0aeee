// Router - Maps dashboard interactions onto handlers
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    get_controls, health_check, list_sites, outcome_chart, scatter_chart,
};
use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn build_router(state: Arc<AppState>) -> Router {
    // Compression is handled per response in http_response, not with a layer
    Router::new()
        .route("/healthz", get(health_check))
        .route("/sites", get(list_sites))
        .route("/controls", get(get_controls))
        .route("/charts/outcomes", get(outcome_chart))
        .route("/charts/scatter", get(scatter_chart))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
