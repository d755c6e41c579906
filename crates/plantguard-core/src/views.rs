//! Derived views: map markers, forecasts and mocked detection
//!
//! Nothing here is stored. Each view is recomputed from a snapshot of the
//! base collections.

use crate::{RandomSource, Result, StoreError};
use plantguard_types::{
    DiseaseDetectionResult, DiseaseForecast, DiseaseOutbreak, MapMarker, PlantDisease, RecordId,
    RiskLevel, MAX_CONFIDENCE, MIN_CONFIDENCE, UNKNOWN_DISEASE, UNKNOWN_SEVERITY,
};
use std::collections::HashMap;
use tracing::warn;

/// Risk tiers handed out by position, first disease first
const FORECAST_TIERS: [RiskLevel; 3] = [RiskLevel::High, RiskLevel::Moderate, RiskLevel::Low];

/// Fixed risk tiers for the first three diseases in insertion order
pub fn forecasts(diseases: &[PlantDisease]) -> Vec<DiseaseForecast> {
    diseases
        .iter()
        .zip(FORECAST_TIERS)
        .map(|(disease, risk_level)| DiseaseForecast {
            disease_name: disease.name.clone(),
            risk_level,
            risk_percentage: risk_level.percentage(),
        })
        .collect()
}

/// One marker per outbreak, joined with its disease when it exists
pub fn map_markers(outbreaks: &[DiseaseOutbreak], diseases: &[PlantDisease]) -> Vec<MapMarker> {
    let by_id: HashMap<RecordId, &PlantDisease> = diseases.iter().map(|d| (d.id, d)).collect();

    outbreaks
        .iter()
        .map(|outbreak| {
            let disease = by_id.get(&outbreak.disease_id);
            MapMarker {
                id: outbreak.id,
                lat: parse_coordinate(outbreak.id, &outbreak.latitude),
                lng: parse_coordinate(outbreak.id, &outbreak.longitude),
                disease_id: outbreak.disease_id,
                disease_name: disease
                    .map(|d| d.name.clone())
                    .unwrap_or_else(|| UNKNOWN_DISEASE.to_string()),
                severity: disease
                    .map(|d| d.severity.to_string())
                    .unwrap_or_else(|| UNKNOWN_SEVERITY.to_string()),
                report_count: outbreak.report_count,
                region: outbreak.region.clone(),
            }
        })
        .collect()
}

fn parse_coordinate(outbreak_id: RecordId, raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => {
            warn!("Outbreak {} has unparseable coordinate {:?}", outbreak_id, raw);
            0.0
        }
    }
}

/// Pretend to classify `image`: pick a random disease and a random confidence
///
/// The image bytes are never inspected.
pub fn detect(
    _image: &[u8],
    diseases: &[PlantDisease],
    random: &dyn RandomSource,
) -> Result<DiseaseDetectionResult> {
    if diseases.is_empty() {
        return Err(StoreError::EmptyCatalog);
    }

    let disease = &diseases[random.index(diseases.len())];
    Ok(DiseaseDetectionResult {
        detected: true,
        disease_name: disease.name.clone(),
        confidence: random.between(MIN_CONFIDENCE, MAX_CONFIDENCE),
        disease_id: disease.id,
    })
}
