// HTTP request handlers
use crate::domain::selection::ALL_SITES;
use crate::infrastructure::http_response::{accepts_brotli, json_response};
use crate::presentation::app_state::AppState;
use crate::presentation::error::AppError;
use axum::{
    extract::{Query, State, rejection::QueryRejection},
    http::HeaderMap,
    response::Response,
};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct SiteQuery {
    pub site: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ScatterQuery {
    pub site: Option<String>,
    pub low: Option<f64>,
    pub high: Option<f64>,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Ordered site catalog
pub async fn list_sites(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Result<Response, AppError> {
    let sites = state.dashboard_service.sites();
    Ok(json_response(&sites, accepts_brotli(&headers)).await?)
}

/// Site dropdown options and payload slider bounds
pub async fn get_controls(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Result<Response, AppError> {
    let controls = state.dashboard_service.controls();
    Ok(json_response(&controls, accepts_brotli(&headers)).await?)
}

/// Pie chart for the selected site
pub async fn outcome_chart(
    query: Result<Query<SiteQuery>, QueryRejection>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Result<Response, AppError> {
    let Query(query) = query?;
    let site = query.site.as_deref().unwrap_or(ALL_SITES);

    let chart = state.dashboard_service.outcome_chart(site);
    Ok(json_response(&chart, accepts_brotli(&headers)).await?)
}

/// Scatter chart for the selected site and payload range
pub async fn scatter_chart(
    query: Result<Query<ScatterQuery>, QueryRejection>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Result<Response, AppError> {
    let Query(query) = query?;
    let site = query.site.as_deref().unwrap_or(ALL_SITES);

    let chart = state
        .dashboard_service
        .scatter_chart(site, query.low, query.high)?;
    Ok(json_response(&chart, accepts_brotli(&headers)).await?)
}
