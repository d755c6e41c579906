//! Derived response shapes, computed per request and never stored

use crate::RecordId;
use serde::{Deserialize, Serialize};

/// Name used on a marker whose outbreak references a missing disease
pub const UNKNOWN_DISEASE: &str = "Unknown Disease";
/// Severity used on a marker whose outbreak references a missing disease
pub const UNKNOWN_SEVERITY: &str = "Unknown";

/// Inclusive bounds of the mocked detection confidence
pub const MIN_CONFIDENCE: u32 = 70;
pub const MAX_CONFIDENCE: u32 = 99;

/// Map-ready projection of an outbreak joined with its disease
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapMarker {
    pub id: RecordId,
    pub lat: f64,
    pub lng: f64,
    pub disease_id: RecordId,
    pub disease_name: String,
    pub severity: String,
    pub report_count: i32,
    pub region: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    pub fn percentage(&self) -> u32 {
        match self {
            RiskLevel::High => 85,
            RiskLevel::Moderate => 60,
            RiskLevel::Low => 25,
        }
    }
}

/// Placeholder risk tier for a disease. Not a statistical model output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiseaseForecast {
    pub disease_name: String,
    pub risk_level: RiskLevel,
    pub risk_percentage: u32,
}

/// Result of the mocked image detection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiseaseDetectionResult {
    pub detected: bool,
    pub disease_name: String,
    pub confidence: u32,
    pub disease_id: RecordId,
}
