//! Business logic services

pub mod insights;

pub use insights::InsightService;
