//! In-memory plant catalog store using DashMap

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use plantguard_core::ports::{
    DiseaseStore, NewsStore, OutbreakStore, PreventionStore, TreatmentStore, UserStore,
};
use plantguard_core::{query, Result, StoreError};
use plantguard_core::{
    DiseaseOutbreak, NewDiseaseOutbreak, NewNewsArticle, NewPlantDisease, NewPreventionMethod,
    NewTreatment, NewUser, NewsArticle, PlantDisease, PreventionMethod, RecordId, Treatment, User,
};
use std::sync::atomic::{AtomicI32, Ordering};
use tracing::{debug, info};

/// One id-keyed collection with its own counter
struct Collection<T> {
    records: DashMap<RecordId, T>,
    next_id: AtomicI32,
}

impl<T: Clone> Collection<T> {
    fn new() -> Self {
        Self {
            records: DashMap::new(),
            next_id: AtomicI32::new(1),
        }
    }

    /// Reserve the next id and store the record built from it
    fn insert_with(&self, build: impl FnOnce(RecordId) -> T) -> T {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let record = build(id);
        self.records.insert(id, record.clone());
        record
    }

    fn get(&self, id: RecordId) -> Option<T> {
        self.records.get(&id).map(|entry| entry.value().clone())
    }

    /// All records in insertion (= id) order
    fn all(&self) -> Vec<T> {
        let mut entries: Vec<(RecordId, T)> = self
            .records
            .iter()
            .map(|entry| (*entry.key(), entry.value().clone()))
            .collect();
        entries.sort_by_key(|(id, _)| *id);
        entries.into_iter().map(|(_, record)| record).collect()
    }

    fn filter(&self, predicate: impl Fn(&T) -> bool) -> Vec<T> {
        self.all().into_iter().filter(|r| predicate(r)).collect()
    }
}

/// Process-lifetime store for every collection
pub struct MemoryStore {
    users: Collection<User>,
    usernames: DashMap<String, RecordId>,
    diseases: Collection<PlantDisease>,
    outbreaks: Collection<DiseaseOutbreak>,
    treatments: Collection<Treatment>,
    preventions: Collection<PreventionMethod>,
    news: Collection<NewsArticle>,
}

impl MemoryStore {
    /// Empty store, every counter at 1
    pub fn new() -> Self {
        Self {
            users: Collection::new(),
            usernames: DashMap::new(),
            diseases: Collection::new(),
            outbreaks: Collection::new(),
            treatments: Collection::new(),
            preventions: Collection::new(),
            news: Collection::new(),
        }
    }

    /// Store pre-populated with the sample catalog
    pub fn with_sample_data() -> Self {
        let store = Self::new();
        super::seed::populate(&store);
        info!(
            "Sample data loaded: {} diseases, {} outbreaks, {} treatments, {} prevention methods, {} articles",
            store.diseases.records.len(),
            store.outbreaks.records.len(),
            store.treatments.records.len(),
            store.preventions.records.len(),
            store.news.records.len()
        );
        store
    }

    pub fn insert_disease(&self, disease: NewPlantDisease) -> PlantDisease {
        self.diseases
            .insert_with(|id| PlantDisease::from_new(id, disease))
    }

    pub fn insert_outbreak(&self, outbreak: NewDiseaseOutbreak) -> DiseaseOutbreak {
        self.outbreaks
            .insert_with(|id| DiseaseOutbreak::from_new(id, outbreak))
    }

    pub fn insert_treatment(&self, treatment: NewTreatment) -> Treatment {
        self.treatments
            .insert_with(|id| Treatment::from_new(id, treatment))
    }

    pub fn insert_prevention_method(&self, method: NewPreventionMethod) -> PreventionMethod {
        self.preventions
            .insert_with(|id| PreventionMethod::from_new(id, method))
    }

    pub fn insert_news_article(&self, article: NewNewsArticle) -> NewsArticle {
        self.news
            .insert_with(|id| NewsArticle::from_new(id, article))
    }

    pub fn insert_user(&self, user: NewUser) -> Result<User> {
        // The entry keeps the username shard locked until the user is stored
        match self.usernames.entry(user.username.clone()) {
            Entry::Occupied(_) => Err(StoreError::UsernameTaken(user.username)),
            Entry::Vacant(slot) => {
                let user = self.users.insert_with(|id| User::from_new(id, user));
                slot.insert(user.id);
                Ok(user)
            }
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn get_all_users(&self) -> Result<Vec<User>> {
        Ok(self.users.all())
    }

    async fn get_user(&self, id: RecordId) -> Result<Option<User>> {
        Ok(self.users.get(id))
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        Ok(self
            .usernames
            .get(username)
            .and_then(|entry| self.users.get(*entry.value())))
    }

    async fn create_user(&self, user: NewUser) -> Result<User> {
        let user = self.insert_user(user)?;
        info!("Created user {} ({})", user.id, user.username);
        Ok(user)
    }
}

#[async_trait]
impl DiseaseStore for MemoryStore {
    async fn get_all_diseases(&self) -> Result<Vec<PlantDisease>> {
        Ok(self.diseases.all())
    }

    async fn get_disease(&self, id: RecordId) -> Result<Option<PlantDisease>> {
        Ok(self.diseases.get(id))
    }

    async fn get_diseases_by_category(&self, category: &str) -> Result<Vec<PlantDisease>> {
        debug!("Filtering diseases by category {:?}", category);
        Ok(query::diseases_by_category(self.diseases.all(), category))
    }

    async fn create_disease(&self, disease: NewPlantDisease) -> Result<PlantDisease> {
        let disease = self.insert_disease(disease);
        info!("Created disease {} ({})", disease.id, disease.name);
        Ok(disease)
    }
}

#[async_trait]
impl OutbreakStore for MemoryStore {
    async fn get_all_outbreaks(&self) -> Result<Vec<DiseaseOutbreak>> {
        Ok(self.outbreaks.all())
    }

    async fn get_outbreak(&self, id: RecordId) -> Result<Option<DiseaseOutbreak>> {
        Ok(self.outbreaks.get(id))
    }

    async fn get_outbreaks_by_region(&self, region: &str) -> Result<Vec<DiseaseOutbreak>> {
        Ok(self.outbreaks.filter(|o| o.region == region))
    }

    async fn create_outbreak(&self, outbreak: NewDiseaseOutbreak) -> Result<DiseaseOutbreak> {
        let outbreak = self.insert_outbreak(outbreak);
        info!(
            "Created outbreak {} for disease {} in {}",
            outbreak.id, outbreak.disease_id, outbreak.region
        );
        Ok(outbreak)
    }
}

#[async_trait]
impl TreatmentStore for MemoryStore {
    async fn get_all_treatments(&self) -> Result<Vec<Treatment>> {
        Ok(self.treatments.all())
    }

    async fn get_treatment(&self, id: RecordId) -> Result<Option<Treatment>> {
        Ok(self.treatments.get(id))
    }

    async fn get_treatments_by_disease_id(&self, disease_id: RecordId) -> Result<Vec<Treatment>> {
        Ok(self.treatments.filter(|t| t.disease_id == disease_id))
    }

    async fn create_treatment(&self, treatment: NewTreatment) -> Result<Treatment> {
        let treatment = self.insert_treatment(treatment);
        info!(
            "Created treatment {} for disease {}",
            treatment.id, treatment.disease_id
        );
        Ok(treatment)
    }
}

#[async_trait]
impl PreventionStore for MemoryStore {
    async fn get_all_prevention_methods(&self) -> Result<Vec<PreventionMethod>> {
        Ok(self.preventions.all())
    }

    async fn get_prevention_method(&self, id: RecordId) -> Result<Option<PreventionMethod>> {
        Ok(self.preventions.get(id))
    }

    async fn get_preventions_by_disease_id(
        &self,
        disease_id: RecordId,
    ) -> Result<Vec<PreventionMethod>> {
        Ok(self.preventions.filter(|p| p.disease_id == disease_id))
    }

    async fn create_prevention_method(
        &self,
        method: NewPreventionMethod,
    ) -> Result<PreventionMethod> {
        let method = self.insert_prevention_method(method);
        info!(
            "Created prevention method {} for disease {}",
            method.id, method.disease_id
        );
        Ok(method)
    }
}

#[async_trait]
impl NewsStore for MemoryStore {
    async fn get_all_news_articles(&self) -> Result<Vec<NewsArticle>> {
        Ok(self.news.all())
    }

    async fn get_news_article(&self, id: RecordId) -> Result<Option<NewsArticle>> {
        Ok(self.news.get(id))
    }

    async fn get_latest_news_articles(&self, limit: usize) -> Result<Vec<NewsArticle>> {
        debug!("Fetching latest {} news articles", limit);
        Ok(query::latest_news(self.news.all(), limit))
    }

    async fn create_news_article(&self, article: NewNewsArticle) -> Result<NewsArticle> {
        let article = self.insert_news_article(article);
        info!("Created news article {} ({})", article.id, article.title);
        Ok(article)
    }
}
