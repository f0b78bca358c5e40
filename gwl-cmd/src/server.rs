//! HTTP surface of the dashboard.
//!
//! `GET /` serves the server-rendered page; the page's script posts every
//! control change to the `/api/*` endpoints and redraws from the JSON they
//! return. Handlers share one read-only [`Database`] through [`AppState`].

use crate::config::DashboardConfig;
use crate::dashboard::{self, DashboardView};
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use gwl_chart_ui::{assets, page};
use gwl_core::FilterSelection;
use gwl_data::trend::TrendConfig;
use gwl_db::Database;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::Arc;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub trend: Arc<TrendConfig>,
}

impl AppState {
    pub fn new(db: Database, trend: TrendConfig) -> Self {
        Self {
            db,
            trend: Arc::new(trend),
        }
    }
}

/// Any handler failure becomes a `500` with the error chain as plain text.
pub struct AppError(anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        log::error!("server: request failed: {:#}", self.0);
        (StatusCode::INTERNAL_SERVER_ERROR, format!("{:#}", self.0)).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

#[derive(Debug, Deserialize)]
pub struct SitesRequest {
    #[serde(default)]
    pub regions: BTreeSet<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SitesResponse {
    pub sites: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct SiteRegionsRequest {
    #[serde(default)]
    pub site_ids: BTreeSet<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LabelResponse {
    pub label: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/assets/{name}", get(asset))
        .route("/health", get(health))
        .route("/api/regions", get(regions))
        .route("/api/sites", post(sites))
        .route("/api/site-regions", post(site_regions))
        .route("/api/dashboard", post(update_dashboard))
        .with_state(state)
}

/// Bind `config.bind_address()` and serve until the process is stopped.
pub async fn serve(config: &DashboardConfig, db: Database) -> anyhow::Result<()> {
    let app = router(AppState::new(db, config.trend_config()));
    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!("server: dashboard listening on http://{}", address);
    axum::serve(listener, app).await?;
    Ok(())
}

/// The page itself fails as HTML rather than plain text.
async fn index(State(state): State<AppState>) -> Response {
    match state.db.query_regions() {
        Ok(regions) => Html(page::render_page(&regions)).into_response(),
        Err(err) => {
            log::error!("server: cannot render dashboard: {:#}", err);
            let body = page::render_error_page(&format!("{:#}", err));
            (StatusCode::INTERNAL_SERVER_ERROR, Html(body)).into_response()
        }
    }
}

async fn asset(Path(name): Path<String>) -> Response {
    match assets::find(&name) {
        Some(asset) => ([(header::CONTENT_TYPE, asset.content_type)], asset.body).into_response(),
        None => (StatusCode::NOT_FOUND, format!("no asset named {name}")).into_response(),
    }
}

async fn health() -> &'static str {
    "ok"
}

async fn regions(State(state): State<AppState>) -> Result<Json<Vec<String>>, AppError> {
    Ok(Json(state.db.query_regions()?))
}

async fn sites(
    State(state): State<AppState>,
    Json(request): Json<SitesRequest>,
) -> Result<Json<SitesResponse>, AppError> {
    debug!("server: site options for {} regions", request.regions.len());
    let sites = dashboard::site_options(&state.db, &request.regions)?;
    Ok(Json(SitesResponse { sites }))
}

async fn site_regions(
    State(state): State<AppState>,
    Json(request): Json<SiteRegionsRequest>,
) -> Result<Json<LabelResponse>, AppError> {
    debug!("server: region label for {} sites", request.site_ids.len());
    let label = dashboard::region_label(&state.db, &request.site_ids)?;
    Ok(Json(LabelResponse { label }))
}

async fn update_dashboard(
    State(state): State<AppState>,
    Json(selection): Json<FilterSelection>,
) -> Result<Json<DashboardView>, AppError> {
    debug!(
        "server: dashboard update for {} regions, {} sites, variable {}",
        selection.regions.len(),
        selection.site_ids.len(),
        selection.variable
    );
    let view = dashboard::update_dashboard(&state.db, &selection, &state.trend)?;
    Ok(Json(view))
}
