//! Dave-PMEA entry point.
//!
//! Initializes tracing, loads configuration from TOML, builds the application
//! state (which owns the memory log), and serves the router until a shutdown
//! signal arrives.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use dave_pmea::config::{AppConfig, DEFAULT_CONFIG_PATH, DEFAULT_LOG_FILTER};
use dave_pmea::http::start_server;
use dave_pmea::{create_router, AppState};

/// Dave-PMEA: a single-turn prompt improvement service
#[derive(Parser, Debug)]
#[command(name = "dave-pmea", version, about)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Log level filter (e.g., "dave_pmea=debug,axum=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Configuration is loaded first so the log format is known
    let config = AppConfig::load_or_default(&args.config)?;

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    let registry = tracing_subscriber::registry().with(EnvFilter::new(&log_filter));
    if config.logging.is_json() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!(
        config = %args.config,
        host = %config.http.host,
        port = config.http.port,
        server_url = ?config.openapi.server_url,
        "Loaded configuration"
    );

    let state = AppState::new(config.clone());
    let app = create_router(state.clone());

    start_server(app, &config.http).await?;

    tracing::info!(
        log_len = state.memory.len(),
        "Server stopped, discarding memory log"
    );
    drop(state);

    Ok(())
}
