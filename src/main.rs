//! Contact Relay - Main entry point
//!
//! Loads configuration, then serves `POST /api/contact` until Ctrl-C.

use anyhow::Result;
use contact_relay::server::{run_server, AppState};
use contact_relay::{Config, ContactService, ContactServiceImpl, Metrics};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can seed the filter
    let config = Config::from_env();

    let level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let metrics = Metrics::new();
    let service = ContactServiceImpl::from_config(&config, metrics.clone());

    if service.email_enabled() {
        info!(
            "Email delivery enabled via {} (from: {})",
            config.resend_api_url,
            config.sender()
        );
    } else {
        warn!("RESEND_API_KEY not set; submissions will be logged, not emailed");
    }

    let state = AppState::new(
        Arc::new(service) as Arc<dyn ContactService>,
        metrics.clone(),
    );

    let listener = TcpListener::bind(config.bind_addr).await?;
    info!("Listening on http://{}", listener.local_addr()?);

    run_server(listener, state).await?;

    info!("Contact relay shutdown complete ({})", metrics.summary());
    Ok(())
}
