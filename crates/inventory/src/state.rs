//! Application state with repository-based storage.
//!
//! The repository handle is built once at startup and shared by every
//! handler invocation, whether it arrives over HTTP or through `invoke`.

use std::sync::Arc;

use inventory_core::storage::InventoryRepository;

use crate::config::Config;

/// Shared application state.
///
/// This is cloned for each request handler and contains the repository
/// trait object for store access.
#[derive(Clone)]
pub struct AppState {
    /// Inventory repository for the configured backend.
    pub repo: Arc<dyn InventoryRepository>,
    /// Application configuration.
    pub config: Config,
}

impl AppState {
    /// Creates a new AppState with the given repository and configuration.
    pub fn new(repo: Arc<dyn InventoryRepository>, config: Config) -> Self {
        Self { repo, config }
    }
}

// ============================================================================
// Factory functions for the storage backends
// ============================================================================

#[cfg(feature = "inmemory")]
mod inmemory {
    use super::*;
    use crate::storage::InMemoryRepository;

    impl AppState {
        /// Creates AppState backed by an empty in-memory store.
        pub async fn from_config(config: &Config) -> Result<Self, anyhow::Error> {
            tracing::warn!("Using in-memory storage, data will not be persisted");
            Ok(Self::new(
                Arc::new(InMemoryRepository::new()),
                config.clone(),
            ))
        }
    }
}

#[cfg(feature = "dynamodb")]
mod dynamodb {
    use super::*;
    use crate::storage::DynamoDbRepository;

    impl AppState {
        /// Creates AppState backed by DynamoDB.
        pub async fn from_config(config: &Config) -> Result<Self, anyhow::Error> {
            let repo = DynamoDbRepository::from_config(config).await;
            tracing::info!(table = %repo.table_name(), "Using DynamoDB storage");
            Ok(Self::new(Arc::new(repo), config.clone()))
        }
    }
}

// ============================================================================
// Test support - provides Default implementation for unit tests
// ============================================================================
