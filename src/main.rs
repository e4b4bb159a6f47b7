//! Mirror API server.
//!
//! This is the application entry point. It parses the command line, loads
//! configuration, initializes tracing, prepares the database schema (without
//! failing if the database is down), sets up the Axum router and starts the
//! HTTP server.

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mirror::config::{AppConfig, ConfigOverrides, LoggingConfig, DEFAULT_LOG_FILTER};
use mirror::http::start_server;
use mirror::store::{MirrorStore, PgStore};
use mirror::{create_router, AppState};

/// Mirror: swap-case-and-reverse words over HTTP
#[derive(Parser, Debug)]
#[command(name = "mirror", version, about)]
struct Args {
    /// Path to an optional TOML configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Log level filter (e.g., "mirror=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "PORT")]
    port: Option<u16>,
}

fn init_tracing(log_filter: &str, logging: &LoggingConfig) {
    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(log_filter));

    if logging.is_json() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args = Args::parse();

    // Load configuration: file (optional) < env/CLI overrides
    let config = AppConfig::resolve(
        args.config.as_deref(),
        ConfigOverrides {
            database_url: args.database_url,
            port: args.port,
        },
    )?;

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
    init_tracing(&log_filter, &config.logging);

    tracing::info!(
        host = %config.http.host,
        port = config.http.port,
        max_connections = config.database.max_connections,
        "Loaded configuration"
    );

    // The pool connects lazily; a malformed URL is the only failure here
    let store = PgStore::connect_lazy(&config.database)?;

    // Schema setup must not block startup: the database may come up later
    if let Err(e) = store.initialize().await {
        tracing::warn!(error = %e, "Database initialization failed, continuing without it");
    }

    // Create application state and router
    let state = AppState::new(Arc::new(store));
    let app = create_router(state);

    start_server(app, &config.http).await?;

    tracing::info!("Server stopped");
    Ok(())
}
