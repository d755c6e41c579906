//! Derived views over the catalog: map markers, forecasts, mocked detection

use plantguard_core::{views, PlantStore, RandomSource, Result};
use plantguard_core::{DiseaseDetectionResult, DiseaseForecast, MapMarker};
use std::sync::Arc;
use tracing::{debug, info};

pub struct InsightService {
    store: Arc<dyn PlantStore>,
    random: Arc<dyn RandomSource>,
}

impl InsightService {
    pub fn new(store: Arc<dyn PlantStore>, random: Arc<dyn RandomSource>) -> Self {
        Self { store, random }
    }

    pub async fn map_markers(&self) -> Result<Vec<MapMarker>> {
        let outbreaks = self.store.get_all_outbreaks().await?;
        let diseases = self.store.get_all_diseases().await?;
        debug!("Building {} map markers", outbreaks.len());
        Ok(views::map_markers(&outbreaks, &diseases))
    }

    pub async fn forecasts(&self) -> Result<Vec<DiseaseForecast>> {
        let diseases = self.store.get_all_diseases().await?;
        Ok(views::forecasts(&diseases))
    }

    pub async fn detect_disease(&self, image: &[u8]) -> Result<DiseaseDetectionResult> {
        let diseases = self.store.get_all_diseases().await?;
        let result = views::detect(image, &diseases, self.random.as_ref())?;
        info!(
            "Detection on {} byte image: {} ({}%)",
            image.len(),
            result.disease_name,
            result.confidence
        );
        Ok(result)
    }
}
