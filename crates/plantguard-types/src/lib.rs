//! PlantGuard Types - Pure type definitions
//!
//! Records, insert payloads and derived view shapes shared by the store and
//! the HTTP layer. No async runtime dependencies.

pub mod disease;
pub mod guidance;
pub mod news;
pub mod outbreak;
pub mod user;
pub mod views;

pub use disease::*;
pub use guidance::*;
pub use news::*;
pub use outbreak::*;
pub use user::*;
pub use views::*;

use serde::{Deserialize, Serialize};

/// Record identifier, assigned sequentially per collection starting at 1
pub type RecordId = i32;

/// Category sentinel that matches every disease
pub const ALL_CATEGORIES: &str = "All";

/// Plant categories offered by the catalog filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlantCategory {
    All,
    Vegetables,
    Fruits,
    Ornamentals,
    Houseplants,
}

impl PlantCategory {
    pub const VARIANTS: [PlantCategory; 5] = [
        PlantCategory::All,
        PlantCategory::Vegetables,
        PlantCategory::Fruits,
        PlantCategory::Ornamentals,
        PlantCategory::Houseplants,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PlantCategory::All => ALL_CATEGORIES,
            PlantCategory::Vegetables => "Vegetables",
            PlantCategory::Fruits => "Fruits",
            PlantCategory::Ornamentals => "Ornamentals",
            PlantCategory::Houseplants => "Houseplants",
        }
    }
}

/// Category entry as listed to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiseaseCategory {
    pub id: String,
    pub name: String,
}

impl From<PlantCategory> for DiseaseCategory {
    fn from(category: PlantCategory) -> Self {
        Self {
            id: category.as_str().to_string(),
            name: category.as_str().to_string(),
        }
    }
}
