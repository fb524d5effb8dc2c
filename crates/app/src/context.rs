//! App Context

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::{
    auth::{AuthService, MemoryIdentityProvider, StoreAuthService},
    config::AppConfig,
    domain::{
        admin::{AdminService, StoreAdminService},
        catalog::{CatalogService, StoreCatalogService},
    },
    handoff::{Handoff, HandoffError},
    store::{DocumentStore, MemoryDocumentStore, StoreError},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to load document store")]
    Store(#[from] StoreError),

    #[error("invalid hand-off settings")]
    Handoff(#[from] HandoffError),
}

#[derive(Clone)]
pub struct AppContext {
    pub catalog: Arc<dyn CatalogService>,
    pub admin: Arc<dyn AdminService>,
    pub auth: Arc<dyn AuthService>,
    pub handoff: Handoff,
}

impl AppContext {
    /// Build services over an existing document store.
    ///
    /// # Errors
    ///
    /// Returns an error if the hand-off currency is unknown.
    pub fn with_store(
        store: Arc<dyn DocumentStore>,
        config: &AppConfig,
    ) -> Result<Self, AppInitError> {
        let identity = Arc::new(MemoryIdentityProvider::new());

        Ok(Self {
            catalog: Arc::new(StoreCatalogService::new(store.clone())),
            admin: Arc::new(StoreAdminService::new(store.clone(), identity.clone())),
            auth: Arc::new(StoreAuthService::new(store, identity)),
            handoff: Handoff::new(config.handoff.phone.clone(), &config.handoff.currency)?,
        })
    }

    /// Build application context from the configured seed file.
    ///
    /// # Errors
    ///
    /// Returns an error when the seed cannot be loaded or the hand-off settings are invalid.
    pub async fn from_config(config: &AppConfig) -> Result<Self, AppInitError> {
        let store = MemoryDocumentStore::from_seed_file(&config.store.seed).await?;

        info!(seed = %config.store.seed.display(), "document store loaded");

        Self::with_store(Arc::new(store), config)
    }
}
