//! Data Models
//!
//! Core data structures shared by the store layer and the tree service.

mod node;

pub use node::{DeleteResult, Node, NodeUpdate, ROOT_NODE_ID};
