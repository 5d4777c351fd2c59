//! Persistence Layer
//!
//! This module defines the [`NodeStore`] abstraction that the tree service
//! talks to, plus the in-process [`MemoryStore`] implementation.
//!
//! The store is deliberately dumb: it can look nodes up by id and by parent,
//! scan all nodes in (parent_id, ordering) order, insert, partially update,
//! delete, and apply one bulk conditional update (`shift_orderings`). All
//! tree invariants live in the service layer, not here.

mod memory_store;
mod node_store;

pub use memory_store::MemoryStore;
pub use node_store::NodeStore;
