//! In-Memory Node Store
//!
//! `MemoryStore` keeps all node records in a `BTreeMap` behind a
//! `tokio::sync::RwLock`. Each trait method takes the lock once, so every
//! store call is atomic from the caller's perspective; interleaving between
//! calls of a multi-step operation is the service layer's accepted
//! weak-consistency model.
//!
//! The store enforces nothing about tree shape. It will happily hold a node
//! whose parent id points nowhere - keeping the structure well formed is the
//! tree service's job.

use crate::models::{Node, NodeUpdate, ROOT_NODE_ID};
use anyhow::{bail, Result};
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

/// In-process implementation of [`NodeStore`](crate::db::NodeStore).
#[derive(Debug, Default)]
pub struct MemoryStore {
    nodes: RwLock<BTreeMap<i64, Node>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with the root node (id 1, ordering 1).
    ///
    /// The service assumes the root exists, so this is the constructor the
    /// bootstrap path uses.
    pub async fn with_root(title: impl Into<String>) -> Self {
        let store = Self::new();
        {
            let mut nodes = store.nodes.write().await;
            nodes.insert(
                ROOT_NODE_ID,
                Node::new(ROOT_NODE_ID, title.into(), None, 1),
            );
        }
        store
    }

    /// Number of nodes currently held. Test helper.
    pub async fn len(&self) -> usize {
        self.nodes.read().await.len()
    }

    /// Whether the store holds no nodes.
    pub async fn is_empty(&self) -> bool {
        self.nodes.read().await.is_empty()
    }
}

#[async_trait]
impl super::NodeStore for MemoryStore {
    async fn insert_node(&self, node: Node) -> Result<Node> {
        let mut nodes = self.nodes.write().await;
        if nodes.contains_key(&node.id) {
            bail!("duplicate node id: {}", node.id);
        }
        nodes.insert(node.id, node.clone());
        Ok(node)
    }

    async fn get_node(&self, id: i64) -> Result<Option<Node>> {
        Ok(self.nodes.read().await.get(&id).cloned())
    }

    async fn get_children(&self, parent_id: i64) -> Result<Vec<Node>> {
        let nodes = self.nodes.read().await;
        let mut children: Vec<Node> = nodes
            .values()
            .filter(|n| n.parent_id == Some(parent_id))
            .cloned()
            .collect();
        children.sort_by_key(|n| n.ordering);
        Ok(children)
    }

    async fn get_all_nodes(&self) -> Result<Vec<Node>> {
        let nodes = self.nodes.read().await;
        let mut all: Vec<Node> = nodes.values().cloned().collect();
        // Option<i64> orders None first, which puts the root ahead of
        // everything else.
        all.sort_by_key(|n| (n.parent_id, n.ordering));
        Ok(all)
    }

    async fn max_id(&self) -> Result<Option<i64>> {
        // BTreeMap keys are sorted, so the last key is the max id.
        Ok(self.nodes.read().await.keys().next_back().copied())
    }

    async fn update_node(&self, id: i64, update: NodeUpdate) -> Result<Option<Node>> {
        let mut nodes = self.nodes.write().await;
        let Some(node) = nodes.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(title) = update.title {
            node.title = title;
        }
        if let Some(parent_id) = update.parent_id {
            node.parent_id = Some(parent_id);
        }
        if let Some(ordering) = update.ordering {
            node.ordering = ordering;
        }
        Ok(Some(node.clone()))
    }

    async fn delete_node(&self, id: i64) -> Result<bool> {
        Ok(self.nodes.write().await.remove(&id).is_some())
    }

    async fn shift_orderings(&self, parent_id: i64, above: i64, delta: i64) -> Result<u64> {
        let mut nodes = self.nodes.write().await;
        let mut changed = 0;
        for node in nodes.values_mut() {
            if node.parent_id == Some(parent_id) && node.ordering > above {
                node.ordering += delta;
                changed += 1;
            }
        }
        Ok(changed)
    }
}
