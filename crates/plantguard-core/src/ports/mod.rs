//! Port traits (interfaces) for dependency injection

pub mod random;
pub mod storage;

pub use random::{RandomSource, SeededRandom, ThreadRandom};
pub use storage::{
    DiseaseStore, NewsStore, OutbreakStore, PlantStore, PreventionStore, TreatmentStore,
    UserStore,
};
