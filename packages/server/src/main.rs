//! Arbor HTTP Server Binary
//!
//! Starts the node-tree REST API over an in-process store seeded with the
//! root node.
//!
//! # Usage
//!
//! ```bash
//! # Default settings (port 3000)
//! cargo run --bin arbor-server
//!
//! # Custom port
//! SERVER_PORT=3001 cargo run --bin arbor-server
//! ```
//!
//! # Environment Variables
//!
//! - `SERVER_PORT`: Server port (default: 3000)
//! - `RUST_LOG`: Logging level (e.g., "info", "debug", "trace")

use std::env;
use std::sync::Arc;

use arbor_core::db::MemoryStore;
use arbor_core::services::TreeService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("🌳 Arbor Node Tree Server");

    let port = env::var("SERVER_PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(3000);

    tracing::info!("📡 Port: {}", port);

    // Open the store explicitly and seed the root node; the handle lives for
    // the duration of the process and is dropped at shutdown.
    let store = Arc::new(MemoryStore::with_root("Root").await);
    let tree = Arc::new(TreeService::new(store));

    tracing::info!("✅ Tree service initialized");

    arbor_server::start_server(tree, port).await?;

    Ok(())
}
