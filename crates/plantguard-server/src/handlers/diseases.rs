//! Disease catalog handlers

use super::parse_id;
use crate::error::ApiError;
use crate::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use plantguard_core::{DiseaseCategory, PlantCategory, PlantDisease, PreventionMethod, Treatment};

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<PlantDisease>>, ApiError> {
    Ok(Json(state.store.get_all_diseases().await?))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PlantDisease>, ApiError> {
    let disease = match parse_id(&id, "disease")? {
        Some(id) => state.store.get_disease(id).await?,
        None => None,
    };

    disease
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Disease not found"))
}

pub async fn by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Json<Vec<PlantDisease>>, ApiError> {
    Ok(Json(state.store.get_diseases_by_category(&category).await?))
}

pub async fn treatments(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Treatment>>, ApiError> {
    let treatments = match parse_id(&id, "disease")? {
        Some(id) => state.store.get_treatments_by_disease_id(id).await?,
        None => Vec::new(),
    };
    Ok(Json(treatments))
}

pub async fn prevention(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<PreventionMethod>>, ApiError> {
    let methods = match parse_id(&id, "disease")? {
        Some(id) => state.store.get_preventions_by_disease_id(id).await?,
        None => Vec::new(),
    };
    Ok(Json(methods))
}

/// Plant categories the catalog can be filtered by
pub async fn categories() -> Json<Vec<DiseaseCategory>> {
    Json(
        PlantCategory::VARIANTS
            .into_iter()
            .map(DiseaseCategory::from)
            .collect(),
    )
}
