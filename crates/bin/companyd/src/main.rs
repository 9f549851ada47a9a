//! Daemon entry point for the company directory.
//!
//! Loads configuration from CLI arguments and the environment, reads the
//! company dataset once, and serves the query API over HTTP until interrupted.

mod config;
mod directory;

use std::fmt;
use std::future::Future;

use company_http::HttpServer;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::CompanydConfig;
use crate::directory::build_directory;

const DEFAULT_LOG_FILTER: &str = "companyd=info,company_store=info,company_core=info,company_http=info,tower_http=info";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = CompanydConfig::from_args()?;
    init_tracing();

    let directory = build_directory(&config)?;
    let server = HttpServer::new(directory, config.http_config());
    server.serve(shutdown_signal()).await
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn shutdown_signal() {
    let reason = first_signal(interrupt(), terminate()).await;
    info!("{reason} received, shutting down");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ShutdownReason {
    Interrupt,
    Terminate,
}

impl fmt::Display for ShutdownReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Interrupt => f.write_str("SIGINT"),
            Self::Terminate => f.write_str("SIGTERM"),
        }
    }
}

async fn first_signal<I, T>(interrupt: I, terminate: T) -> ShutdownReason
where
    I: Future<Output = ()>,
    T: Future<Output = ()>,
{
    tokio::select! {
        () = interrupt => ShutdownReason::Interrupt,
        () = terminate => ShutdownReason::Terminate,
    }
}

async fn interrupt() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for SIGINT: {err}");
        std::future::pending::<()>().await;
    }
}

#[cfg(unix)]
async fn terminate() {
    use tokio::signal::unix::{SignalKind, signal};

    match signal(SignalKind::terminate()) {
        Ok(mut stream) => {
            stream.recv().await;
        }
        Err(err) => {
            warn!("failed to listen for SIGTERM: {err}");
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(not(unix))]
async fn terminate() {
    std::future::pending::<()>().await;
}

#[cfg(test)]
mod tests {
    use std::future::{pending, ready};

    use super::*;

    #[tokio::test]
    async fn terminate_alone_triggers_shutdown() {
        let reason = first_signal(pending(), ready(())).await;
        assert_eq!(reason, ShutdownReason::Terminate);
    }

    #[tokio::test]
    async fn interrupt_alone_triggers_shutdown() {
        let reason = first_signal(ready(()), pending()).await;
        assert_eq!(reason, ShutdownReason::Interrupt);
    }
}
