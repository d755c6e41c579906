//! PlantGuard Core Library
//!
//! Error types, storage and randomness ports, and the query and derived-view
//! computations shared by every store implementation.

// Re-export pure types from plantguard-types
pub use plantguard_types::*;

pub mod error;
pub mod ports;
pub mod query;
pub mod views;

pub use error::{Result, StoreError};
pub use ports::{PlantStore, RandomSource, SeededRandom, ThreadRandom};
