//! Storage layer
//!
//! Uses DashMap (in-memory) for every collection. Nothing survives a restart.

pub mod memory;
mod seed;

pub use memory::MemoryStore;
