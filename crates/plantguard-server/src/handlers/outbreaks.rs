//! Outbreak handlers

use crate::error::ApiError;
use crate::AppState;
use axum::{
    extract::{Query, State},
    Json,
};
use plantguard_core::DiseaseOutbreak;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct OutbreakQuery {
    region: Option<String>,
}

pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<OutbreakQuery>,
) -> Result<Json<Vec<DiseaseOutbreak>>, ApiError> {
    let outbreaks = match query.region {
        Some(region) => state.store.get_outbreaks_by_region(&region).await?,
        None => state.store.get_all_outbreaks().await?,
    };
    Ok(Json(outbreaks))
}
