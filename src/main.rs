//! Parsegate: a web gateway to an external diagnostic log parser.
//!
//! This is the application entry point. It loads configuration from a TOML
//! file, initializes tracing, wires the command-line parser adapter into the
//! application state, sets up the Axum router, and starts the HTTP server.

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use parsegate::config::{AppConfig, DEFAULT_CONFIG_PATH, DEFAULT_LOG_FILTER};
use parsegate::http::server::start_server;
use parsegate::parser::CommandParser;
use parsegate::routes::create_router;
use parsegate::state::AppState;

/// Parsegate: a web gateway to an external diagnostic log parser
#[derive(Parser, Debug)]
#[command(name = "parsegate", version, about)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Log level filter (e.g., "parsegate=debug")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args = Args::parse();

    // Load configuration before tracing init so logging.format can apply
    let config = AppConfig::load(&args.config)?;

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(&log_filter));
    if config.logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!("Loaded configuration");

    // Process-invocation adapter for the external parser
    let parser = CommandParser::new(&config.parser);
    tracing::info!(
        command = %parser.program(),
        pretty = config.parser.pretty,
        timeout_seconds = config.parser.timeout_seconds,
        "External log parser configured"
    );

    // Create application state and router
    let state = AppState::new(config.clone(), Arc::new(parser));
    let app = create_router(state);

    // Start server
    start_server(app, &config).await?;

    Ok(())
}
