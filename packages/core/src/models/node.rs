//! Node Data Structures
//!
//! This module defines the `Node` record and the sparse update type used by
//! the store layer.
//!
//! # Examples
//!
//! ```rust
//! use arbor_core::models::Node;
//!
//! let node = Node::new(2, "Projects".to_string(), Some(1), 1);
//! assert!(!node.is_root());
//! ```

use serde::{Deserialize, Serialize};

/// Id of the root node. The root always exists, has no parent, and is exempt
/// from deletion and reparenting.
pub const ROOT_NODE_ID: i64 = 1;

/// A single labeled entry in the tree.
///
/// # Fields
///
/// - `id`: Unique positive integer, immutable, assigned monotonically
/// - `title`: Free-text label
/// - `parent_id`: Reference to the parent node, `None` only for the root
/// - `ordering`: 1-based rank among siblings sharing the same `parent_id`;
///   the ranks of any sibling set form a dense 1..=N sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Unique identifier, never reused or changed
    pub id: i64,

    /// Free-text label
    pub title: String,

    /// Parent node id; `None` means this node is the root
    pub parent_id: Option<i64>,

    /// 1-based rank among siblings
    pub ordering: i64,
}

impl Node {
    /// Create a new node record.
    pub fn new(id: i64, title: String, parent_id: Option<i64>, ordering: i64) -> Self {
        Self {
            id,
            title,
            parent_id,
            ordering,
        }
    }

    /// Whether this node is the tree root (no parent).
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

/// Sparse partial update for a node.
///
/// Only the fields that are `Some` are written; everything else is left
/// untouched. `parent_id` here is always a concrete new parent - no public
/// operation ever detaches a node from the tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeUpdate {
    /// New title, if renaming
    pub title: Option<String>,

    /// New parent id, if reparenting
    pub parent_id: Option<i64>,

    /// New sibling rank, if reordering or reparenting
    pub ordering: Option<i64>,
}

impl NodeUpdate {
    /// Update that only changes the title.
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    /// Update that only changes the sibling rank.
    pub fn ordering(ordering: i64) -> Self {
        Self {
            ordering: Some(ordering),
            ..Default::default()
        }
    }

    /// Update that moves a node under a new parent at the given rank.
    pub fn reparent(parent_id: i64, ordering: i64) -> Self {
        Self {
            parent_id: Some(parent_id),
            ordering: Some(ordering),
            ..Default::default()
        }
    }
}

/// Outcome of a subtree deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResult {
    /// Number of nodes removed (the requested node plus all descendants;
    /// zero when the requested id did not exist)
    pub deleted: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_detection() {
        let root = Node::new(ROOT_NODE_ID, "Root".to_string(), None, 1);
        let child = Node::new(2, "Child".to_string(), Some(ROOT_NODE_ID), 1);

        assert!(root.is_root());
        assert!(!child.is_root());
    }

    #[test]
    fn test_node_update_constructors() {
        assert_eq!(
            NodeUpdate::title("Renamed"),
            NodeUpdate {
                title: Some("Renamed".to_string()),
                parent_id: None,
                ordering: None,
            }
        );
        assert_eq!(
            NodeUpdate::reparent(4, 2),
            NodeUpdate {
                title: None,
                parent_id: Some(4),
                ordering: Some(2),
            }
        );
    }

    #[test]
    fn test_node_serialization_shape() {
        let node = Node::new(3, "Notes".to_string(), Some(1), 2);
        let json = serde_json::to_value(&node).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": 3,
                "title": "Notes",
                "parent_id": 1,
                "ordering": 2,
            })
        );
    }
}
