//! Roost application binary - composition root.
//!
//! Ties the workspace crates together into a single executable:
//! 1. Load configuration from TOML
//! 2. Open the SQLite store (listings + reminders)
//! 3. Build the Gemini-backed intent classifier
//! 4. Start the axum API server

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use roost_api::AppState;
use roost_assist::{Assistant, Dispatcher, GeminiClassifier};
use roost_core::config::RoostConfig;
use roost_core::RoostError;
use roost_store::{Database, ListingRepository, ReminderRepository};

/// Rental-marketplace assistant backend.
#[derive(Debug, Parser)]
#[command(name = "roost", version, about)]
struct Cli {
    /// Path to the configuration file.
    #[arg(long, default_value = "roost.toml")]
    config: PathBuf,

    /// Override the configured listen port.
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), RoostError> {
    let cli = Cli::parse();

    let mut config = RoostConfig::load_or_default(&cli.config);
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.general.log_level.clone())),
        )
        .init();

    let api_key = std::env::var(&config.assistant.api_key_env).map_err(|_| {
        RoostError::Config(format!(
            "Missing API key: set the {} environment variable",
            config.assistant.api_key_env
        ))
    })?;

    let db_path = PathBuf::from(&config.general.data_dir).join("roost.db");
    let database = Arc::new(Database::new(&db_path)?);
    let listings = Arc::new(ListingRepository::new(Arc::clone(&database)));
    let reminders = Arc::new(ReminderRepository::new(database));

    let classifier = Arc::new(GeminiClassifier::new(
        api_key,
        config.assistant.model.clone(),
    ));
    let dispatcher = Dispatcher::new(listings, reminders, config.assistant.max_recommendations);
    let assistant = Assistant::new(classifier, dispatcher);

    let state = AppState::new(config, assistant);
    roost_api::start_server(state).await
}
