//! Service Layer Error Types
//!
//! Error types for tree operations. Every public operation fails with one of
//! these before issuing any write, except `Store`, which can surface
//! mid-operation (already-issued writes are not rolled back).

use thiserror::Error;

/// Tree operation errors.
#[derive(Error, Debug)]
pub enum TreeServiceError {
    /// Node not found by id
    #[error("Node not found: {id}")]
    NodeNotFound { id: i64 },

    /// Referenced parent does not exist
    #[error("Parent node not found: {parent_id}")]
    ParentNotFound { parent_id: i64 },

    /// Request-level validation failed (missing or empty fields)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Reparent target is the node itself or one of its descendants
    #[error("Cannot move node {node_id} under {target_id}: target is the node itself or one of its descendants")]
    CircularReference { node_id: i64, target_id: i64 },

    /// The root node cannot be deleted or reparented
    #[error("The root node cannot be {action}")]
    RootProtected { action: &'static str },

    /// Underlying store failure
    #[error("Store operation failed: {0}")]
    Store(#[from] anyhow::Error),
}

impl TreeServiceError {
    /// Create a node not found error
    pub fn node_not_found(id: i64) -> Self {
        Self::NodeNotFound { id }
    }

    /// Create a parent not found error
    pub fn parent_not_found(parent_id: i64) -> Self {
        Self::ParentNotFound { parent_id }
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a circular reference error
    pub fn circular_reference(node_id: i64, target_id: i64) -> Self {
        Self::CircularReference { node_id, target_id }
    }

    /// Create a root protection error; `action` is a past participle such as
    /// "deleted" or "reparented"
    pub fn root_protected(action: &'static str) -> Self {
        Self::RootProtected { action }
    }
}
