//! Error types for PlantGuard

use thiserror::Error;

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Username already taken: {0}")]
    UsernameTaken(String),

    #[error("Disease catalog is empty")]
    EmptyCatalog,
}
