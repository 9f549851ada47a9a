//! HTTP query server for the company directory.
//!
//! Serves name search and id lookup over a shared, read-only
//! [`CompanyDirectory`].

mod error;
mod handlers;

use std::future::Future;
use std::net::SocketAddr;
use std::time::Duration;

use axum::Router;
use axum::routing::get;
use company_core::CompanyDirectory;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

pub use error::{ApiError, ErrorResponse};

const DEFAULT_ADDR: SocketAddr = SocketAddr::new(
    std::net::IpAddr::V4(std::net::Ipv4Addr::LOCALHOST),
    5000,
);

/// Configuration for the HTTP query server.
#[derive(Debug, Clone)]
pub struct HttpServerConfig {
    pub addr: SocketAddr,
    pub cors: bool,
    pub request_timeout: Option<Duration>,
}

impl HttpServerConfig {
    #[must_use]
    pub const fn new(addr: SocketAddr) -> Self {
        Self {
            addr,
            cors: true,
            request_timeout: Some(Duration::from_secs(30)),
        }
    }

    #[must_use]
    pub const fn with_cors(mut self, cors: bool) -> Self {
        self.cors = cors;
        self
    }

    /// Sets the per-request timeout. `None` disables it.
    #[must_use]
    pub const fn with_request_timeout(mut self, request_timeout: Option<Duration>) -> Self {
        self.request_timeout = request_timeout;
        self
    }
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ADDR)
    }
}

/// HTTP server wrapper.
pub struct HttpServer {
    config: HttpServerConfig,
    state: AppState,
}

impl HttpServer {
    #[must_use]
    pub const fn new(directory: CompanyDirectory, config: HttpServerConfig) -> Self {
        Self {
            config,
            state: AppState { directory },
        }
    }

    /// Runs the HTTP server until `shutdown` resolves, then drains in-flight
    /// requests.
    ///
    /// # Errors
    /// Returns any listener or server error.
    pub async fn serve<F>(self, shutdown: F) -> Result<(), Box<dyn std::error::Error + Send + Sync>>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let listener = tokio::net::TcpListener::bind(self.config.addr).await?;
        let addr = listener.local_addr()?;
        let records = self.state.directory.len();
        let app = build_router(self.state, &self.config);

        info!(records, "company-http listening on {addr}");
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await?;
        info!("company-http stopped");
        Ok(())
    }
}

/// Builds the application router for `directory`.
///
/// Exposed so the routes can be driven in-process without binding a socket.
#[must_use]
pub fn router(directory: CompanyDirectory, config: &HttpServerConfig) -> Router {
    build_router(AppState { directory }, config)
}

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) directory: CompanyDirectory,
}

fn build_router(state: AppState, config: &HttpServerConfig) -> Router {
    let mut router = Router::new()
        .route("/health", get(handlers::health))
        .route("/api/companies", get(handlers::search_companies))
        .route("/api/companies/:id", get(handlers::get_company))
        .fallback(handlers::route_not_found)
        .with_state(state);

    if let Some(timeout) = config.request_timeout {
        router = router.layer(TimeoutLayer::new(timeout));
    }
    if config.cors {
        router = router.layer(CorsLayer::permissive());
    }
    router.layer(TraceLayer::new_for_http())
}
