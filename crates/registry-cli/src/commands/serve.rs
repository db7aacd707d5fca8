//! `registry serve` command implementation.
//!
//! Read-only HTTP server for the package registry:
//!
//! ```text
//! GET /            → service name and version
//! GET /categories  → category listing of the newest package versions
//! ```
//!
//! The listing is rebuilt from the packages directory on every request.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use miette::{IntoDiagnostic, Result};
use registry_core::version::SERVICE_NAME;
use registry_core::{build_category_listing, CategoryTitles, Config, Error, VERSION};
use serde::Serialize;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};

const JSON_CONTENT_TYPE: &str = "application/json";

/// Immutable state shared by all requests.
#[derive(Debug, Clone)]
pub struct ServerState {
    /// Directory holding the package directories.
    pub packages_dir: PathBuf,
    /// Display title overrides for categories.
    pub titles: CategoryTitles,
}

impl ServerState {
    #[must_use]
    pub fn new(packages_dir: PathBuf) -> Self {
        Self {
            packages_dir,
            titles: CategoryTitles::builtin(),
        }
    }
}

/// Index document served at `/`.
#[derive(Debug, Serialize)]
struct ServiceInfo {
    #[serde(rename = "service.name")]
    service_name: &'static str,
    version: &'static str,
}

/// Run the HTTP server until Ctrl+C.
pub async fn run(config: Config) -> Result<()> {
    let addr: SocketAddr = config.bind_addr().parse().into_diagnostic()?;
    let state = Arc::new(ServerState::new(config.packages_dir.clone()));
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .into_diagnostic()?;
    info!(
        addr = %addr,
        packages_dir = %config.packages_dir.display(),
        "registry listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .into_diagnostic()?;

    info!("registry stopped");
    Ok(())
}

/// Build the router.
pub fn router(state: Arc<ServerState>) -> Router {
    Router::new()
        .route("/", get(serve_index))
        .route("/categories", get(serve_categories))
        .with_state(state)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}

// ============================================================================
// Route Handlers
// ============================================================================

/// Serve the index document.
async fn serve_index() -> Response {
    let info = ServiceInfo {
        service_name: SERVICE_NAME,
        version: VERSION,
    };
    match serde_json::to_string_pretty(&info) {
        Ok(body) => json_response(body),
        Err(e) => error_response(&Error::from(e)),
    }
}

/// Serve the category listing.
///
/// Listing runs on the blocking pool since it reads every manifest from disk.
async fn serve_categories(State(state): State<Arc<ServerState>>) -> Response {
    let listing = tokio::task::spawn_blocking(move || {
        build_category_listing(&state.packages_dir, &state.titles)
    })
    .await;

    let listing = match listing {
        Ok(Ok(listing)) => listing,
        Ok(Err(e)) => return error_response(&e),
        Err(e) => {
            error!(error = %e, "category listing task failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, "internal error").into_response();
        }
    };

    super::categories::log_listing(&listing);

    match listing.to_json() {
        Ok(body) => json_response(body),
        Err(e) => error_response(&e),
    }
}

fn json_response(body: String) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, JSON_CONTENT_TYPE)],
        body,
    )
        .into_response()
}

/// Map a listing error to its HTTP response.
///
/// An unavailable package source is a 404; a rendering failure is a 500.
fn error_response(err: &Error) -> Response {
    let status = match err {
        Error::SourceUnavailable { .. } => StatusCode::NOT_FOUND,
        Error::RenderFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    error!(status = status.as_u16(), error = %err, "request failed");
    (status, err.to_string()).into_response()
}
