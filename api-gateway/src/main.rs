//! envpeek HTTP server

use std::sync::Arc;

use api_gateway::config::AppConfig;
use api_gateway::{router, telemetry, AppState};
use clap::Parser;
use config_lookup::ConfigLookupService;
use dotenv::dotenv;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info};

/// envpeek server
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    /// Listening host, overrides HOST
    #[clap(long)]
    host: Option<String>,
    /// Listening port, overrides PORT
    #[clap(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenv().ok();

    let args = Args::parse();
    let config = AppConfig::from_env().with_overrides(args.host, args.port);

    let log_level = telemetry::init_tracing(&config)?;

    let state = Arc::new(AppState::with_bundled_templates(
        ConfigLookupService::from_process_env(),
    )?);
    let app = router(state, log_level);

    let addr = config.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    info!("Listening on {}", addr);

    // Run until interrupt signal
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown");
}
