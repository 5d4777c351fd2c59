//! Tree Service - Core Tree Operations
//!
//! This module provides the business logic layer for the node tree:
//!
//! - Reads (single node, whole tree)
//! - Create, rename
//! - Recursive subtree deletion
//! - Reparenting with ancestor-cycle detection
//! - Explicit sibling reordering
//!
//! Every public operation reads current state from the store, runs the
//! relevant algorithm in memory, then issues one or more writes back. There
//! is no cross-operation locking: individual store calls are atomic, but a
//! multi-write operation can interleave with another one. A failed store call
//! aborts the rest of the operation without rolling back writes already
//! issued.
//!
//! # Root Node
//!
//! Node id 1 is the root. It always exists, has no parent, and is rejected
//! from deletion and reparenting before any traversal or write happens.

use crate::db::NodeStore;
use crate::models::{DeleteResult, Node, NodeUpdate, ROOT_NODE_ID};
use crate::services::error::TreeServiceError;
use crate::services::ordering;
use std::sync::Arc;

/// Core service for tree reads and mutations.
///
/// # Examples
///
/// ```no_run
/// use arbor_core::db::MemoryStore;
/// use arbor_core::services::TreeService;
/// use std::sync::Arc;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let store = Arc::new(MemoryStore::with_root("Root").await);
///     let service = TreeService::new(store);
///
///     let node = service.create_node(1, "First child".to_string()).await?;
///     assert_eq!(node.id, 2);
///     assert_eq!(node.ordering, 1);
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct TreeService {
    /// Store handle for all persistence operations
    store: Arc<dyn NodeStore>,
}

impl TreeService {
    /// Create a service over an already-opened store handle.
    pub fn new(store: Arc<dyn NodeStore>) -> Self {
        Self { store }
    }

    /// Get a single node by id.
    ///
    /// # Errors
    ///
    /// `NodeNotFound` when the id does not exist.
    pub async fn get_node(&self, id: i64) -> Result<Node, TreeServiceError> {
        self.store
            .get_node(id)
            .await?
            .ok_or(TreeServiceError::NodeNotFound { id })
    }

    /// Get every node, sorted by `(parent_id, ordering)` ascending.
    ///
    /// The ordering groups each sibling set together in rank order; it is not
    /// a strict parent-before-child global ordering.
    pub async fn get_tree(&self) -> Result<Vec<Node>, TreeServiceError> {
        Ok(self.store.get_all_nodes().await?)
    }

    /// Create a node as the last child of an existing parent.
    ///
    /// The new node takes id = (current max id) + 1 (2 when only the root
    /// exists) and ordering = (max sibling ordering) + 1, or 1 when the
    /// parent has no children yet.
    ///
    /// # Errors
    ///
    /// - `Validation` when the title is empty
    /// - `ParentNotFound` when `parent_id` does not reference an existing
    ///   node; nothing is persisted
    pub async fn create_node(
        &self,
        parent_id: i64,
        title: String,
    ) -> Result<Node, TreeServiceError> {
        if title.trim().is_empty() {
            return Err(TreeServiceError::validation("title must not be empty"));
        }
        if self.store.get_node(parent_id).await?.is_none() {
            return Err(TreeServiceError::parent_not_found(parent_id));
        }

        let siblings = self.store.get_children(parent_id).await?;
        let ordering = ordering::next_ordering(&siblings);
        let id = self.store.max_id().await?.unwrap_or(ROOT_NODE_ID) + 1;

        let node = self
            .store
            .insert_node(Node::new(id, title, Some(parent_id), ordering))
            .await?;

        tracing::debug!(
            "Created node {} under parent {} at ordering {}",
            node.id,
            parent_id,
            node.ordering
        );
        Ok(node)
    }

    /// Update a node's title. Nothing else changes.
    ///
    /// # Errors
    ///
    /// `NodeNotFound` when the id does not exist.
    pub async fn rename_node(&self, id: i64, title: String) -> Result<Node, TreeServiceError> {
        let node = self
            .store
            .update_node(id, NodeUpdate::title(title))
            .await?
            .ok_or(TreeServiceError::NodeNotFound { id })?;

        tracing::debug!("Renamed node {}", id);
        Ok(node)
    }

    /// Delete a node and every one of its descendants.
    ///
    /// Traversal uses an explicit work list instead of recursion, so
    /// adversarially deep trees cannot exhaust the call stack. Nodes are
    /// removed children-first (post-order), so no surviving node ever
    /// references an already-deleted parent. Afterwards the departed node's
    /// former siblings are shifted down to close the ordering gap.
    ///
    /// Deleting an id that does not exist removes nothing and succeeds.
    ///
    /// # Errors
    ///
    /// `RootProtected` when `id` is the root, rejected before any traversal.
    pub async fn delete_subtree(&self, id: i64) -> Result<DeleteResult, TreeServiceError> {
        if id == ROOT_NODE_ID {
            return Err(TreeServiceError::root_protected("deleted"));
        }
        let Some(node) = self.store.get_node(id).await? else {
            return Ok(DeleteResult { deleted: 0 });
        };

        // Pre-order collection; deleting in reverse gives post-order.
        let mut pending = vec![id];
        let mut discovered = Vec::new();
        while let Some(current) = pending.pop() {
            discovered.push(current);
            for child in self.store.get_children(current).await? {
                pending.push(child.id);
            }
        }

        let mut deleted = 0u64;
        for &node_id in discovered.iter().rev() {
            if self.store.delete_node(node_id).await? {
                deleted += 1;
            }
        }

        // Close the gap the deleted node left among its former siblings.
        if let Some(parent_id) = node.parent_id {
            self.store
                .shift_orderings(parent_id, node.ordering, -1)
                .await?;
        }

        tracing::debug!("Deleted subtree rooted at {} ({} nodes)", id, deleted);
        Ok(DeleteResult { deleted })
    }

    /// Move a node (and implicitly its whole subtree) under a new parent,
    /// appending it as the last child.
    ///
    /// The old sibling set is renumbered to close the departure gap; the node
    /// arrives at rank max+1 among its new siblings. Moving a node under its
    /// current parent therefore sends it to the end of its own sibling set.
    ///
    /// A `new_parent_id` that references no existing node is accepted: the
    /// ancestor walk treats a missing link as the end of the chain.
    ///
    /// # Errors
    ///
    /// - `RootProtected` when `id` is the root
    /// - `NodeNotFound` when `id` does not exist
    /// - `CircularReference` when the target is the node itself or one of
    ///   its descendants; the tree is left unchanged
    pub async fn reparent_node(
        &self,
        id: i64,
        new_parent_id: i64,
    ) -> Result<Node, TreeServiceError> {
        if id == ROOT_NODE_ID {
            return Err(TreeServiceError::root_protected("reparented"));
        }
        let node = self.get_node(id).await?;
        self.ensure_no_cycle(id, new_parent_id).await?;

        // Departure: close the gap under the old parent.
        if let Some(old_parent_id) = node.parent_id {
            self.store
                .shift_orderings(old_parent_id, node.ordering, -1)
                .await?;
        }

        // Arrival: append after the new siblings. The moving node is filtered
        // out so a same-parent move still produces a dense set.
        let new_siblings: Vec<Node> = self
            .store
            .get_children(new_parent_id)
            .await?
            .into_iter()
            .filter(|n| n.id != id)
            .collect();
        let ordering = ordering::next_ordering(&new_siblings);

        let updated = self
            .store
            .update_node(id, NodeUpdate::reparent(new_parent_id, ordering))
            .await?
            .ok_or(TreeServiceError::NodeNotFound { id })?;

        tracing::debug!(
            "Moved node {} under parent {} at ordering {}",
            id,
            new_parent_id,
            ordering
        );
        Ok(updated)
    }

    /// Move a node to a 1-based position within its current sibling set.
    ///
    /// Positions outside `[1, N]` are clamped to the nearest end. Every
    /// sibling's ordering is rewritten to its new sequence index regardless
    /// of whether it moved.
    ///
    /// Returns the full renumbered sibling sequence.
    ///
    /// # Errors
    ///
    /// `NodeNotFound` when the id does not exist.
    pub async fn reorder_node(
        &self,
        id: i64,
        position: i64,
    ) -> Result<Vec<Node>, TreeServiceError> {
        let node = self.get_node(id).await?;

        // The root is its own single-member sibling set; reordering it is a
        // no-op.
        let siblings = match node.parent_id {
            Some(parent_id) => self.store.get_children(parent_id).await?,
            None => vec![node],
        };

        let resequenced = ordering::resequence(siblings, id, position);
        for sibling in &resequenced {
            self.store
                .update_node(sibling.id, NodeUpdate::ordering(sibling.ordering))
                .await?;
        }

        tracing::debug!("Reordered node {} to position {}", id, position);
        Ok(resequenced)
    }

    /// Cycle guard: reject assigning `new_parent_id` as the parent of
    /// `node_id` when that would make the node its own ancestor.
    ///
    /// Walks parent links upward from the candidate parent. Encountering
    /// `node_id` anywhere on the chain (including the candidate itself)
    /// rejects the move. The walk ends successfully at the root or at a
    /// parent id that no longer exists.
    async fn ensure_no_cycle(
        &self,
        node_id: i64,
        new_parent_id: i64,
    ) -> Result<(), TreeServiceError> {
        let mut cursor = Some(new_parent_id);
        while let Some(current) = cursor {
            let Some(ancestor) = self.store.get_node(current).await? else {
                break;
            };
            if ancestor.id == node_id {
                return Err(TreeServiceError::circular_reference(node_id, new_parent_id));
            }
            cursor = ancestor.parent_id;
        }
        Ok(())
    }
}
