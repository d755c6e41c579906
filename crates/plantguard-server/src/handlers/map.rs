//! Map page handlers: outbreak markers and risk forecasts

use crate::error::ApiError;
use crate::AppState;
use axum::{extract::State, Json};
use plantguard_core::{DiseaseForecast, MapMarker};

pub async fn markers(State(state): State<AppState>) -> Result<Json<Vec<MapMarker>>, ApiError> {
    Ok(Json(state.insights.map_markers().await?))
}

pub async fn forecasts(
    State(state): State<AppState>,
) -> Result<Json<Vec<DiseaseForecast>>, ApiError> {
    Ok(Json(state.insights.forecasts().await?))
}
