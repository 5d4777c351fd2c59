//! Node Endpoints
//!
//! Request handlers for the tree operations. Handlers validate request
//! shape, delegate to [`TreeService`], and translate service errors into
//! [`HttpError`] responses.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{delete, get, post, put},
    Router,
};
use serde::{Deserialize, Serialize};

use crate::{AppState, HttpError};
use arbor_core::models::Node;

/// Query parameters for `GET /api/nodes`
#[derive(Debug, Deserialize)]
struct GetNodesQuery {
    /// When present, fetch this single node instead of the whole tree
    id: Option<i64>,
}

/// Body for `POST /api/nodes`
///
/// Both fields are optional at the wire level so missing fields surface as a
/// 400 validation error rather than a deserialization failure.
#[derive(Debug, Deserialize)]
struct CreateNodeRequest {
    parent_id: Option<i64>,
    title: Option<String>,
}

/// Body for `PUT /api/nodes/:id`
#[derive(Debug, Deserialize)]
struct RenameNodeRequest {
    title: String,
}

/// Body for `PUT /api/nodes/changeParent/:id`
#[derive(Debug, Deserialize)]
struct ChangeParentRequest {
    new_parent_id: i64,
}

/// Body for `PUT /api/nodes/changeOrder/:id`
#[derive(Debug, Deserialize)]
struct ChangeOrderRequest {
    new_ordering: i64,
}

/// Confirmation payload for subtree deletion
#[derive(Debug, Serialize)]
struct DeleteResponse {
    message: String,
    deleted: u64,
}

/// Health check response
#[derive(Debug, Serialize)]
struct HealthStatus {
    status: String,
    version: String,
}

/// Health check endpoint
///
/// ```bash
/// curl http://localhost:3000/api/health
/// ```
async fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Get a single node (`?id=`) or the full tree.
///
/// The tree listing is sorted by `(parent_id, ordering)`: each sibling set
/// appears together in rank order.
///
/// ```bash
/// curl http://localhost:3000/api/nodes
/// curl http://localhost:3000/api/nodes?id=2
/// ```
async fn get_nodes(
    State(state): State<AppState>,
    Query(query): Query<GetNodesQuery>,
) -> Result<Response, HttpError> {
    match query.id {
        Some(id) => {
            let node = state.tree.get_node(id).await?;
            Ok(Json(node).into_response())
        }
        None => {
            let nodes = state.tree.get_tree().await?;
            Ok(Json(nodes).into_response())
        }
    }
}

/// Create a node as the last child of an existing parent.
///
/// ```bash
/// curl -X POST http://localhost:3000/api/nodes \
///   -H "Content-Type: application/json" \
///   -d '{"parent_id": 1, "title": "My node"}'
/// ```
async fn create_node(
    State(state): State<AppState>,
    Json(request): Json<CreateNodeRequest>,
) -> Result<(StatusCode, Json<Node>), HttpError> {
    let (Some(parent_id), Some(title)) = (request.parent_id, request.title) else {
        return Err(HttpError::new(
            "Both parent_id and title are required",
            "VALIDATION_ERROR",
        ));
    };

    let node = state.tree.create_node(parent_id, title).await.map_err(|e| {
        tracing::error!("Node creation failed: {}", e);
        HttpError::from(e)
    })?;

    Ok((StatusCode::CREATED, Json(node)))
}

/// Rename a node.
///
/// ```bash
/// curl -X PUT http://localhost:3000/api/nodes/2 \
///   -H "Content-Type: application/json" \
///   -d '{"title": "Renamed"}'
/// ```
async fn rename_node(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<RenameNodeRequest>,
) -> Result<Json<Node>, HttpError> {
    let node = state.tree.rename_node(id, request.title).await?;
    Ok(Json(node))
}

/// Delete a node and all of its descendants.
///
/// ```bash
/// curl -X DELETE http://localhost:3000/api/nodes/2
/// ```
async fn delete_node(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<DeleteResponse>, HttpError> {
    let result = state.tree.delete_subtree(id).await?;
    Ok(Json(DeleteResponse {
        message: "Successfully deleted!".to_string(),
        deleted: result.deleted,
    }))
}

/// Move a node under a new parent, appended as its last child.
///
/// ```bash
/// curl -X PUT http://localhost:3000/api/nodes/changeParent/3 \
///   -H "Content-Type: application/json" \
///   -d '{"new_parent_id": 2}'
/// ```
async fn change_parent(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<ChangeParentRequest>,
) -> Result<Json<Node>, HttpError> {
    let node = state.tree.reparent_node(id, request.new_parent_id).await?;
    Ok(Json(node))
}

/// Move a node to a 1-based position among its siblings.
///
/// Returns the full renumbered sibling sequence.
///
/// ```bash
/// curl -X PUT http://localhost:3000/api/nodes/changeOrder/3 \
///   -H "Content-Type: application/json" \
///   -d '{"new_ordering": 1}'
/// ```
async fn change_order(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<ChangeOrderRequest>,
) -> Result<Json<Vec<Node>>, HttpError> {
    let siblings = state.tree.reorder_node(id, request.new_ordering).await?;
    Ok(Json(siblings))
}

/// Create the router with all node endpoints.
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/nodes", get(get_nodes))
        .route("/api/nodes", post(create_node))
        .route("/api/nodes/:id", put(rename_node))
        .route("/api/nodes/:id", delete(delete_node))
        .route("/api/nodes/changeParent/:id", put(change_parent))
        .route("/api/nodes/changeOrder/:id", put(change_order))
        .with_state(state)
}
