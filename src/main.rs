//! Hex Blueprint: microservice template entry point.
//!
//! Loads configuration from a TOML file, initializes tracing, wires the
//! application services into the REST adapter and starts the HTTP server.

use std::sync::Arc;

use clap::Parser;

use hex_blueprint::application::query::service::GetHealthQueryService;
use hex_blueprint::infrastructure::adapters::inbound::rest::create_router;
use hex_blueprint::infrastructure::configuration::{AppConfig, DEFAULT_CONFIG_PATH, OPENAPI_PATH};
use hex_blueprint::infrastructure::http::start_server;
use hex_blueprint::infrastructure::logging::{init_tracing, resolve_log_filter};
use hex_blueprint::infrastructure::state::AppState;
use hex_blueprint::AppError;

/// Hex Blueprint: template microservice with hexagonal architecture
#[derive(Parser, Debug)]
#[command(name = "hex-blueprint", version, about)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, env = "CONFIG_PATH", default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Log level filter (e.g., "hex_blueprint=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    let config = AppConfig::load(&args.config)?;

    let log_filter = resolve_log_filter(args.log_level, std::env::var("RUST_LOG").ok());
    init_tracing(&log_filter, config.logging.format);

    tracing::info!(
        path = %args.config,
        host = %config.http.host,
        port = config.http.port,
        cors_origins = ?config.cors.allowed_origins,
        "Loaded configuration"
    );

    let state = AppState::new(config.clone(), Arc::new(GetHealthQueryService::new()));
    let app = create_router(state)?;
    tracing::info!(openapi = OPENAPI_PATH, "Routes ready");

    start_server(app, &config.http).await?;

    Ok(())
}
