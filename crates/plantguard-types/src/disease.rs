//! Plant disease types

use crate::RecordId;
use serde::{Deserialize, Serialize};

/// How damaging a disease is
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DiseaseSeverity {
    Low,
    Moderate,
    High,
    Severe,
}

impl std::fmt::Display for DiseaseSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiseaseSeverity::Low => write!(f, "Low"),
            DiseaseSeverity::Moderate => write!(f, "Moderate"),
            DiseaseSeverity::High => write!(f, "High"),
            DiseaseSeverity::Severe => write!(f, "Severe"),
        }
    }
}

/// Disease type labels used by the sample catalog. The stored `type` field is free text.
pub mod disease_type {
    pub const FUNGAL: &str = "Fungal";
}

/// A catalogued plant disease
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantDisease {
    pub id: RecordId,
    pub name: String,
    #[serde(rename = "type")]
    pub disease_type: String,
    pub severity: DiseaseSeverity,
    pub description: String,
    pub symptoms: String,
    pub images: Vec<String>,
    pub affected_plants: Vec<String>,
}

impl PlantDisease {
    pub fn from_new(id: RecordId, new: NewPlantDisease) -> Self {
        Self {
            id,
            name: new.name,
            disease_type: new.disease_type,
            severity: new.severity,
            description: new.description,
            symptoms: new.symptoms,
            images: new.images,
            affected_plants: new.affected_plants,
        }
    }

    /// Whether any affected plant name contains `needle`, ignoring case
    pub fn affects(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.affected_plants
            .iter()
            .any(|plant| plant.to_lowercase().contains(&needle))
    }
}

/// Disease fields without an id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPlantDisease {
    pub name: String,
    #[serde(rename = "type")]
    pub disease_type: String,
    pub severity: DiseaseSeverity,
    pub description: String,
    pub symptoms: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub affected_plants: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mildew() -> PlantDisease {
        PlantDisease::from_new(
            1,
            NewPlantDisease {
                name: "Powdery Mildew".to_string(),
                disease_type: disease_type::FUNGAL.to_string(),
                severity: DiseaseSeverity::Moderate,
                description: "desc".to_string(),
                symptoms: "spots".to_string(),
                images: vec![],
                affected_plants: vec!["Cucumbers".to_string(), "Roses".to_string()],
            },
        )
    }

    #[test]
    fn test_serializes_camel_case_with_type_field() {
        let json = serde_json::to_value(mildew()).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["type"], "Fungal");
        assert_eq!(json["severity"], "Moderate");
        assert_eq!(json["affectedPlants"][1], "Roses");
        assert!(json.get("disease_type").is_none());
    }

    #[test]
    fn test_affects_ignores_case() {
        let disease = mildew();
        assert!(disease.affects("rose"));
        assert!(disease.affects("CUCUMBER"));
        assert!(!disease.affects("Tomatoes"));
    }

    #[test]
    fn test_severity_label_matches_json() {
        for severity in [DiseaseSeverity::Low, DiseaseSeverity::Severe] {
            let json = serde_json::to_value(severity).unwrap();
            assert_eq!(json, severity.to_string());
        }
    }
}
