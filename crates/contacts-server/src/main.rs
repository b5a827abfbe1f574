//! Binary entrypoint for the contacts HTTP server.
//!
//! Configuration comes from environment variables (see
//! [`contacts_server::config`]). Log verbosity follows `RUST_LOG`.

use std::process::ExitCode;

use contacts_server::config::ServerConfig;
use contacts_server::error::ServerError;
use contacts_server::router::build_router_with_config;
use contacts_server::state::AppState;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "contacts_server=info,tower_http=info";

#[tokio::main]
async fn main() -> ExitCode {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "server terminated");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), ServerError> {
    let config = ServerConfig::from_env()?;
    let state = AppState::new(config.store);
    let app = build_router_with_config(state, &config);

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        %addr,
        store = %config.store,
        cors_origin = ?config.frontend_origin,
        "contacts server listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("contacts server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
