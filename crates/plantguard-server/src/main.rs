//! PlantGuard Server
//!
//! REST backend for the plant disease catalog: diseases, treatments,
//! prevention methods, outbreak map, forecasts, news and a mocked image
//! detection endpoint.
//!
//! All data lives in memory and is reseeded on every start.

mod error;
mod handlers;
mod routes;
mod services;
mod settings;
mod storage;

use anyhow::{Context, Result};
use plantguard_core::{PlantStore, RandomSource, SeededRandom, ThreadRandom};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use settings::ServerConfig;
use services::InsightService;
use storage::MemoryStore;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PlantStore>,
    pub insights: Arc<InsightService>,
    pub news_default_limit: usize,
}

impl AppState {
    pub fn new(
        store: Arc<dyn PlantStore>,
        random: Arc<dyn RandomSource>,
        news_default_limit: usize,
    ) -> Self {
        let insights = Arc::new(InsightService::new(store.clone(), random));
        Self {
            store,
            insights,
            news_default_limit,
        }
    }
}

#[tokio::main]
async fn main() {
    // Set up panic hook to log crashes
    std::panic::set_hook(Box::new(|info| {
        let location = info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()));
        let payload = if let Some(s) = info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };
        eprintln!("[PANIC] PlantGuard server at {:?}: {}", location, payload);
        tracing::error!("PlantGuard server panicked at {:?}: {}", location, payload);
    }));

    let config = match ServerConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("[FATAL] Failed to load configuration: {:#}", e);
            std::process::exit(1);
        }
    };

    // Initialize tracing, RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    if let Err(e) = tracing_subscriber::fmt().with_env_filter(filter).try_init() {
        eprintln!("[FATAL] Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    info!("Starting PlantGuard Server v{}", env!("CARGO_PKG_VERSION"));
    info!("PID: {}", std::process::id());

    if let Err(e) = run_server(config).await {
        error!("Server failed: {:#}", e);
        std::process::exit(1);
    }
}

async fn run_server(config: ServerConfig) -> Result<()> {
    info!(
        "Config loaded: bind={}, seed_sample_data={}",
        config.bind_address, config.seed_sample_data
    );

    let store: Arc<dyn PlantStore> = if config.seed_sample_data {
        Arc::new(MemoryStore::with_sample_data())
    } else {
        warn!("Sample data disabled, starting with an empty catalog");
        Arc::new(MemoryStore::new())
    };

    let random: Arc<dyn RandomSource> = match config.detection_seed {
        Some(seed) => {
            info!("Detection pinned to seed {}", seed);
            Arc::new(SeededRandom::new(seed))
        }
        None => Arc::new(ThreadRandom),
    };

    let state = AppState::new(store, random, config.news_default_limit);

    if let Some(dir) = &config.static_dir {
        info!("Static files directory: {}", dir.display());
    }
    let app = routes::build_router(state, config.static_dir.as_deref());

    let addr: SocketAddr = config
        .bind_address
        .parse()
        .context("Failed to parse bind address")?;
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    info!("Server ready to accept connections");
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
