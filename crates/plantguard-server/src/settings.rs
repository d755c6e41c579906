//! Server configuration
//!
//! Sources, lowest priority first: built-in defaults, an optional
//! `plantguard.toml` in the working directory, `PLANTGUARD_*` environment
//! variables.

use anyhow::{Context, Result};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File};
use plantguard_core::DEFAULT_NEWS_LIMIT;
use serde::Deserialize;
use std::path::PathBuf;

const CONFIG_FILE: &str = "plantguard";
const ENV_PREFIX: &str = "PLANTGUARD";

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub bind_address: String,
    pub log_level: String,
    /// Prebuilt frontend served for non-API paths
    pub static_dir: Option<PathBuf>,
    pub seed_sample_data: bool,
    /// Pins the mocked detection to a reproducible sequence
    pub detection_seed: Option<u64>,
    pub news_default_limit: usize,
}

impl ServerConfig {
    pub fn load() -> Result<Self> {
        let builder = Config::builder()
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true));
        Self::from_builder(builder)
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self> {
        builder
            .set_default("bind_address", "0.0.0.0:5000")?
            .set_default("log_level", "info")?
            .set_default("seed_sample_data", true)?
            .set_default("news_default_limit", DEFAULT_NEWS_LIMIT as i64)?
            .build()
            .context("Failed to read configuration sources")?
            .try_deserialize()
            .context("Invalid configuration")
    }
}
