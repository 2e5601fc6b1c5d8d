//! JSON API over the resort view operations
//!
//! Each endpoint is a thin wrapper around a `piste_core::views`
//! function. The guard-clause no-update paths surface as `204 No
//! Content`, so clients keep whatever they are currently showing.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tower_http::cors::CorsLayer;

use piste_core::views::{self, MapFilter, Metric};
use piste_core::{Profile, ResortTable};

/// Shared state for all handlers
#[derive(Clone)]
pub struct AppState {
    pub table: Arc<ResortTable>,
    pub profile: Profile,
}

/// Build the service router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/api/map", get(map))
        .route("/api/countries", get(countries))
        .route("/api/bar", get(bar))
        .route("/api/report-card", get(report_card))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn healthz(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "profile": state.profile.as_str(),
    }))
}

#[derive(Debug, Deserialize)]
struct MapParams {
    price: Option<u32>,
    summer: Option<bool>,
    night: Option<bool>,
    park: Option<bool>,
}

#[derive(Debug, Serialize)]
struct MapResponse {
    title: String,
    figure: views::MapFigure,
}

async fn map(State(state): State<AppState>, Query(params): Query<MapParams>) -> Response {
    let filter = MapFilter {
        max_price: params.price.unwrap_or(0),
        summer_skiing: params.summer.unwrap_or(false),
        night_skiing: params.night.unwrap_or(false),
        snow_park: params.park.unwrap_or(false),
    };
    match views::map_view(&state.table, &filter) {
        Some((title, figure)) => Json(MapResponse { title, figure }).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}

#[derive(Debug, Deserialize)]
struct CountriesParams {
    continent: String,
}

async fn countries(
    State(state): State<AppState>,
    Query(params): Query<CountriesParams>,
) -> Json<Vec<String>> {
    Json(views::countries_in(&state.table, &params.continent))
}

#[derive(Debug, Deserialize)]
struct BarParams {
    country: Option<String>,
    metric: String,
}

#[derive(Debug, Serialize)]
struct BarResponse {
    title: String,
    figure: views::BarFigure,
}

async fn bar(State(state): State<AppState>, Query(params): Query<BarParams>) -> Response {
    let metric: Metric = match params.metric.parse() {
        Ok(m) => m,
        Err(message) => {
            return (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
        }
    };
    let country = params.country.unwrap_or_default();
    match views::bar_view(&state.table, &country, metric) {
        Some((title, figure)) => Json(BarResponse { title, figure }).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}

#[derive(Debug, Deserialize)]
struct ReportCardParams {
    resort: String,
}

async fn report_card(
    State(state): State<AppState>,
    Query(params): Query<ReportCardParams>,
) -> Response {
    match views::report_card(&state.table, &params.resort) {
        Some(card) => Json(card).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": format!("Unknown resort: {}", params.resort) })),
        )
            .into_response(),
    }
}
