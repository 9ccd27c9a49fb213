use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::{services::activity_store::ActivityStore, utils::startup_utils};

mod error;
mod api;
mod services;
mod models;
mod utils;

const DEFAULT_LOG_FILTER: &str = "activities_api=info";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let config = match startup_utils::ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{}", e);
            std::process::exit(1);
        }
    };

    let store = Arc::new(ActivityStore::seeded());
    tracing::info!("Loaded {} activities", store.len());

    if let Err(e) = startup_utils::create_server(config, store).await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}
