// HTTP request handlers
use crate::application::console::ConsoleSnapshot;
use crate::application::error::ConsoleError;
use crate::domain::banner::{Banner, BannerDraft, BannerId};
use crate::domain::metrics::DashboardMetrics;
use crate::domain::view::ViewId;
use crate::presentation::app_state::AppState;
use crate::presentation::error::ApiError;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::Redirect,
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct SelectViewRequest {
    pub view: String,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

pub async fn get_console(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ConsoleSnapshot>, ConsoleError> {
    Ok(Json(state.console.snapshot().await?))
}

pub async fn select_view(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SelectViewRequest>, JsonRejection>,
) -> Result<Json<ConsoleSnapshot>, ApiError> {
    let Json(request) = payload?;
    let view: ViewId = request.view.parse().map_err(ConsoleError::from)?;
    Ok(Json(state.console.select_view(view).await?))
}

pub async fn remount(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ConsoleSnapshot>, ConsoleError> {
    Ok(Json(state.console.remount().await?))
}

pub async fn list_banners(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Banner>>, ConsoleError> {
    Ok(Json(state.console.list_banners().await?))
}

/// Deleting an unknown banner still answers 204 so double clicks are harmless.
pub async fn delete_banner(
    id: Result<Path<u64>, PathRejection>,
    State(state): State<Arc<AppState>>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = id?;
    state.console.delete_banner(BannerId(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn create_banner(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<BannerDraft>, JsonRejection>,
) -> Result<(StatusCode, Json<Banner>), ApiError> {
    let Json(draft) = payload?;
    let banner = state.console.create_banner(draft).await?;
    Ok((StatusCode::CREATED, Json(banner)))
}

pub async fn update_banner(
    id: Result<Path<u64>, PathRejection>,
    State(state): State<Arc<AppState>>,
    payload: Result<Json<BannerDraft>, JsonRejection>,
) -> Result<Json<Banner>, ApiError> {
    let Path(id) = id?;
    let Json(draft) = payload?;
    Ok(Json(state.console.update_banner(BannerId(id), draft).await?))
}

pub async fn get_analytics(
    State(state): State<Arc<AppState>>,
) -> Result<Json<DashboardMetrics>, ConsoleError> {
    Ok(Json(state.console.metrics().await?))
}

/// "Visit Site" leaves the console for the public site.
pub async fn visit_site(State(state): State<Arc<AppState>>) -> Redirect {
    Redirect::to(&state.site_url)
}
