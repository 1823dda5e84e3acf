//! Upclink server binary.

use anyhow::{Context, Result};
use clap::Parser;
use figment::Figment;
use figment::providers::{Env, Format, Toml};
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use upclink_core::config::AppConfig;
use upclink_server::{AppState, create_router};

/// Upclink - a barcode lookup proxy for the eBay Browse API
#[derive(Parser, Debug)]
#[command(name = "upclinkd")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(
        short,
        long,
        env = "UPCLINK_CONFIG",
        default_value = "config/server.toml"
    )]
    config: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Startup banner
    tracing::info!("Upclink v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration (file is optional, env vars can provide/override
    // everything). The flat PORT / EBAY_CLIENT_ID / EBAY_CLIENT_SECRET
    // variables are mapped into the config tree for compatibility with the
    // documented interface; UPCLINK_-prefixed variables address any field.
    let config_path = std::path::Path::new(&args.config);
    let mut figment = Figment::new();

    if config_path.exists() {
        tracing::info!(config_path = %args.config, "Loading configuration from file");
        figment = figment.merge(Toml::file(&args.config));
    } else {
        tracing::debug!("No config file found at {}", args.config);
    }

    let config: AppConfig = figment
        .merge(Env::prefixed("UPCLINK_").split("__"))
        .merge(Env::raw().only(&["PORT"]).map(|_| "server.port".into()))
        .merge(
            Env::raw()
                .only(&["EBAY_CLIENT_ID"])
                .map(|_| "upstream.client_id".into()),
        )
        .merge(
            Env::raw()
                .only(&["EBAY_CLIENT_SECRET"])
                .map(|_| "upstream.client_secret".into()),
        )
        .extract()
        .context("failed to load configuration")?;

    config
        .validate()
        .context("invalid configuration (set EBAY_CLIENT_ID and EBAY_CLIENT_SECRET)")?;

    // Create state and router
    let state = AppState::new(config.clone());
    let app = create_router(state);

    // Parse bind address
    let addr: SocketAddr = config
        .server
        .listen_addr()
        .parse()
        .context("invalid bind address")?;

    tracing::info!("Upclink proxy listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind to {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}
