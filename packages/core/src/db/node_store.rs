//! NodeStore Trait - Persistence Abstraction Layer
//!
//! This module defines the `NodeStore` trait that abstracts node persistence
//! for the tree service. The trait enables swapping backend implementations
//! without changing any of the tree mutation logic in `TreeService`.
//!
//! # Design Decisions
//!
//! 1. **Async-First**: All methods are async so embedded and networked
//!    backends share one interface
//! 2. **Minimal Surface**: Only the capabilities the tree algorithms need -
//!    lookup by id, lookup by parent, ordered scan, insert, partial update,
//!    delete, and one bulk conditional update for closing ordering gaps
//! 3. **Error Handling**: Uses `anyhow::Result` for flexible error context;
//!    the service layer wraps failures into its own error type
//! 4. **No Invariants**: The store never enforces tree shape; dense ordering
//!    and acyclicity are the service's job
//!
//! # Examples
//!
//! ```rust,no_run
//! use arbor_core::db::{MemoryStore, NodeStore};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let store: Arc<dyn NodeStore> = Arc::new(MemoryStore::with_root("Root").await);
//!     let root = store.get_node(1).await?.expect("root is seeded");
//!     assert_eq!(root.title, "Root");
//!     Ok(())
//! }
//! ```

use crate::models::{Node, NodeUpdate};
use anyhow::Result;
use async_trait::async_trait;

/// Abstraction layer for node persistence operations.
///
/// Implementations must be `Send + Sync` so the service can be shared across
/// request handlers.
#[async_trait]
pub trait NodeStore: Send + Sync {
    /// Insert a new node record.
    ///
    /// Takes ownership of the node and returns it back as persisted.
    ///
    /// # Errors
    ///
    /// Returns an error if a node with the same id already exists or the
    /// backend write fails.
    async fn insert_node(&self, node: Node) -> Result<Node>;

    /// Get a node by id.
    ///
    /// Returns `Ok(None)` when the node does not exist; absence is not an
    /// error at this layer.
    async fn get_node(&self, id: i64) -> Result<Option<Node>>;

    /// Get the direct children of a parent, sorted by `ordering` ascending.
    ///
    /// A parent with no children (or a nonexistent parent id) yields an
    /// empty vector.
    async fn get_children(&self, parent_id: i64) -> Result<Vec<Node>>;

    /// Get every node, sorted by `(parent_id, ordering)` ascending.
    ///
    /// The root (with no parent) sorts first.
    async fn get_all_nodes(&self) -> Result<Vec<Node>>;

    /// Highest node id currently in the store, or `None` when empty.
    ///
    /// Used for monotonic id assignment.
    async fn max_id(&self) -> Result<Option<i64>>;

    /// Apply a sparse partial update to a node.
    ///
    /// Only fields present in `update` are written. Returns the updated node,
    /// or `Ok(None)` when the id does not exist.
    async fn update_node(&self, id: i64, update: NodeUpdate) -> Result<Option<Node>>;

    /// Delete a single node record.
    ///
    /// Returns `true` when a record was removed, `false` when the id did not
    /// exist. This deletes exactly one record; recursive subtree removal is
    /// orchestrated by the service.
    async fn delete_node(&self, id: i64) -> Result<bool>;

    /// Bulk conditional update: shift the `ordering` of every child of
    /// `parent_id` whose ordering is strictly greater than `above` by
    /// `delta`.
    ///
    /// This is the primitive the service uses to close the gap left behind
    /// when a node departs a sibling set. Returns the number of rows
    /// changed.
    async fn shift_orderings(&self, parent_id: i64, above: i64, delta: i64) -> Result<u64>;
}
