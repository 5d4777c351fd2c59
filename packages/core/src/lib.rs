//! Arbor Core Tree Logic Layer
//!
//! This crate provides the data model, persistence abstraction, and tree
//! mutation algorithms for the Arbor node-tree service.
//!
//! # Architecture
//!
//! - **Single rooted tree**: node id 1 is the root; it is never deleted or
//!   reparented
//! - **Dense sibling ordering**: children of any parent are ranked 1..=N with
//!   no gaps or duplicates
//! - **Store abstraction**: all persistence goes through the [`db::NodeStore`]
//!   trait, so the tree algorithms never touch a concrete backend
//!
//! # Modules
//!
//! - [`models`] - Data structures (Node, NodeUpdate, DeleteResult)
//! - [`db`] - Node store trait and the in-memory implementation
//! - [`services`] - TreeService orchestration and the ordering engine

pub mod db;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use db::*;
pub use models::*;
pub use services::*;
