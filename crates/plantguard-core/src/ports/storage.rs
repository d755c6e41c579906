//! Storage traits for the plant catalog
//!
//! Every collection is keyed by a sequential [`RecordId`] starting at 1.
//! `get_all_*` methods return records in insertion order. Inserts assign the
//! next id and never reuse one.

use crate::Result;
use async_trait::async_trait;
use plantguard_types::{
    DiseaseOutbreak, NewDiseaseOutbreak, NewNewsArticle, NewPlantDisease, NewPreventionMethod,
    NewTreatment, NewUser, NewsArticle, PlantDisease, PreventionMethod, RecordId, Treatment, User,
};

/// User store
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn get_all_users(&self) -> Result<Vec<User>>;
    async fn get_user(&self, id: RecordId) -> Result<Option<User>>;
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;
    /// Fails with [`crate::StoreError::UsernameTaken`] if the username exists
    async fn create_user(&self, user: NewUser) -> Result<User>;
}

/// Disease catalog store
#[async_trait]
pub trait DiseaseStore: Send + Sync {
    async fn get_all_diseases(&self) -> Result<Vec<PlantDisease>>;
    async fn get_disease(&self, id: RecordId) -> Result<Option<PlantDisease>>;
    /// `"All"` returns every disease, anything else filters on affected plants
    async fn get_diseases_by_category(&self, category: &str) -> Result<Vec<PlantDisease>>;
    async fn create_disease(&self, disease: NewPlantDisease) -> Result<PlantDisease>;
}

/// Outbreak store
#[async_trait]
pub trait OutbreakStore: Send + Sync {
    async fn get_all_outbreaks(&self) -> Result<Vec<DiseaseOutbreak>>;
    async fn get_outbreak(&self, id: RecordId) -> Result<Option<DiseaseOutbreak>>;
    async fn get_outbreaks_by_region(&self, region: &str) -> Result<Vec<DiseaseOutbreak>>;
    async fn create_outbreak(&self, outbreak: NewDiseaseOutbreak) -> Result<DiseaseOutbreak>;
}

/// Treatment store
#[async_trait]
pub trait TreatmentStore: Send + Sync {
    async fn get_all_treatments(&self) -> Result<Vec<Treatment>>;
    async fn get_treatment(&self, id: RecordId) -> Result<Option<Treatment>>;
    async fn get_treatments_by_disease_id(&self, disease_id: RecordId) -> Result<Vec<Treatment>>;
    async fn create_treatment(&self, treatment: NewTreatment) -> Result<Treatment>;
}

/// Prevention method store
#[async_trait]
pub trait PreventionStore: Send + Sync {
    async fn get_all_prevention_methods(&self) -> Result<Vec<PreventionMethod>>;
    async fn get_prevention_method(&self, id: RecordId) -> Result<Option<PreventionMethod>>;
    async fn get_preventions_by_disease_id(
        &self,
        disease_id: RecordId,
    ) -> Result<Vec<PreventionMethod>>;
    async fn create_prevention_method(
        &self,
        method: NewPreventionMethod,
    ) -> Result<PreventionMethod>;
}

/// News article store
#[async_trait]
pub trait NewsStore: Send + Sync {
    async fn get_all_news_articles(&self) -> Result<Vec<NewsArticle>>;
    async fn get_news_article(&self, id: RecordId) -> Result<Option<NewsArticle>>;
    /// Newest first, at most `limit` articles
    async fn get_latest_news_articles(&self, limit: usize) -> Result<Vec<NewsArticle>>;
    async fn create_news_article(&self, article: NewNewsArticle) -> Result<NewsArticle>;
}

/// Every collection the application needs, behind one object
pub trait PlantStore:
    UserStore + DiseaseStore + OutbreakStore + TreatmentStore + PreventionStore + NewsStore
{
}

impl<T> PlantStore for T where
    T: UserStore + DiseaseStore + OutbreakStore + TreatmentStore + PreventionStore + NewsStore
{
}
