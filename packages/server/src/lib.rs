//! HTTP API Server for the Arbor Node Tree
//!
//! Exposes the tree operations from `arbor-core` as a small REST API. The
//! server holds one [`TreeService`] behind shared state; request handling is
//! fully parallel and the service performs no cross-request locking.
//!
//! # Endpoints
//!
//! - `GET /api/health` - Health check
//! - `GET /api/nodes` - Full tree, or a single node via `?id=`
//! - `POST /api/nodes` - Create a node
//! - `PUT /api/nodes/:id` - Rename a node
//! - `DELETE /api/nodes/:id` - Delete a node and all descendants
//! - `PUT /api/nodes/changeParent/:id` - Move a node under a new parent
//! - `PUT /api/nodes/changeOrder/:id` - Reorder a node among its siblings

use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use arbor_core::services::TreeService;

mod node_endpoints;

// Shared HTTP error handling
mod http_error;

// Re-export HttpError for use by endpoint modules
pub use http_error::HttpError;

/// Application state shared across all endpoints.
#[derive(Clone)]
pub struct AppState {
    pub tree: Arc<TreeService>,
}

/// Create the application router with all endpoint modules.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(node_endpoints::routes(state))
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server on the given port.
///
/// # Errors
///
/// Returns an error if the listener fails to bind or the server fails to
/// start.
pub async fn start_server(tree: Arc<TreeService>, port: u16) -> anyhow::Result<()> {
    let state = AppState { tree };
    let app = create_router(state);

    let addr = format!("127.0.0.1:{}", port);
    tracing::info!("🚀 Arbor HTTP server starting on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
