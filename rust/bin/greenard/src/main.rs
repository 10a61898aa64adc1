//! `greenard`: the GreenAR plant catalogue server.
//!
//! Usage:
//!   greenard [-c <config.toml>] [--listen <addr>] [--data <plants.csv>]
//!
//! Without a config file, every setting takes its default and the plant
//! table is read from `plants.csv` next to the executable.
//! Under `cargo run` that is `target/<profile>/plants.csv`, so point at the
//! sample table explicitly when running from the workspace root:
//!
//!   cargo run -p greenard -- --data rust/bin/greenard/plants.csv

mod bootstrap;
mod config;
mod cors;
mod routes;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use greenar_core::Module;
use tracing::info;

use config::ServerConfig;
use cors::CorsPolicy;

/// GreenAR plant catalogue server.
#[derive(Parser, Debug)]
#[command(name = "greenard", about = "GreenAR plant catalogue server")]
struct Cli {
    /// Path to a TOML config file.
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Listen address (overrides server.listen).
    #[arg(long = "listen")]
    listen: Option<String>,

    /// CSV plant table (overrides data.csv_path).
    #[arg(long = "data")]
    data: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    // Load server configuration, then apply CLI overrides.
    if let Some(path) = &cli.config {
        info!("Loading configuration from {}", path.display());
    }
    let mut server_config = ServerConfig::load_or_default(cli.config.as_deref())?;
    if let Some(listen) = cli.listen {
        server_config.server.listen = listen;
    }
    if let Some(data) = cli.data {
        server_config.data.csv_path = Some(data);
    }

    bootstrap::verify_config(&server_config)?;

    // Load the plant table once; it is read-only from here on.
    let service_config = server_config.service_config();
    let csv_path = service_config.resolve_data_file();
    let plants_module = bootstrap::load_plants(&csv_path, &server_config)?;
    info!("Plants module initialized");

    let module_routes = vec![(plants_module.name(), plants_module.routes())];
    let cors_policy = Arc::new(CorsPolicy::new(server_config.cors.origins.clone()));
    info!("CORS origins: {}", server_config.cors.origins.join(", "));

    let app = routes::build_router(plants_module.service(), module_routes, cors_policy);

    // Start server.
    let listener = tokio::net::TcpListener::bind(&service_config.listen).await?;
    info!("GreenAR API listening on {}", service_config.listen);
    axum::serve(listener, app).await?;

    Ok(())
}
