//! Disease outbreak types

use crate::RecordId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outbreak lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutbreakStatus {
    Active,
    Contained,
    Resolved,
}

/// A recorded disease occurrence in a region
///
/// `disease_id` is not checked against the disease catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiseaseOutbreak {
    pub id: RecordId,
    pub disease_id: RecordId,
    pub region: String,
    /// Decimal degrees, kept as text
    pub latitude: String,
    pub longitude: String,
    pub detected_date: DateTime<Utc>,
    pub report_count: i32,
    pub status: OutbreakStatus,
}

impl DiseaseOutbreak {
    pub fn from_new(id: RecordId, new: NewDiseaseOutbreak) -> Self {
        Self {
            id,
            disease_id: new.disease_id,
            region: new.region,
            latitude: new.latitude,
            longitude: new.longitude,
            detected_date: new.detected_date,
            report_count: new.report_count,
            status: new.status,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDiseaseOutbreak {
    pub disease_id: RecordId,
    pub region: String,
    pub latitude: String,
    pub longitude: String,
    pub detected_date: DateTime<Utc>,
    pub report_count: i32,
    pub status: OutbreakStatus,
}
