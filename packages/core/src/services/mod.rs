//! Service Layer
//!
//! Business logic on top of the store: the [`TreeService`] orchestrator and
//! the pure sibling-ordering engine.

mod error;
pub mod ordering;
mod tree_service;


pub use error::TreeServiceError;
pub use tree_service::TreeService;
