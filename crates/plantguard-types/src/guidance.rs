//! Treatment and prevention guidance attached to a disease

use crate::RecordId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TreatmentType {
    Organic,
    Chemical,
    Biological,
    Mechanical,
}

/// A way to treat a disease
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Treatment {
    pub id: RecordId,
    pub disease_id: RecordId,
    pub name: String,
    #[serde(rename = "type")]
    pub treatment_type: TreatmentType,
    pub description: String,
    pub instructions: String,
}

impl Treatment {
    pub fn from_new(id: RecordId, new: NewTreatment) -> Self {
        Self {
            id,
            disease_id: new.disease_id,
            name: new.name,
            treatment_type: new.treatment_type,
            description: new.description,
            instructions: new.instructions,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTreatment {
    pub disease_id: RecordId,
    pub name: String,
    #[serde(rename = "type")]
    pub treatment_type: TreatmentType,
    pub description: String,
    pub instructions: String,
}

/// A preventive practice. `icon` is a free-text key the frontend maps to an icon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreventionMethod {
    pub id: RecordId,
    pub disease_id: RecordId,
    pub name: String,
    pub description: String,
    pub icon: String,
}

impl PreventionMethod {
    pub fn from_new(id: RecordId, new: NewPreventionMethod) -> Self {
        Self {
            id,
            disease_id: new.disease_id,
            name: new.name,
            description: new.description,
            icon: new.icon,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPreventionMethod {
    pub disease_id: RecordId,
    pub name: String,
    pub description: String,
    pub icon: String,
}
