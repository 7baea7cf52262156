//! Read access to persisted incidents.
//!
//! The HTTP layer only sees [`IncidentStore`]; which backend sits behind it
//! is decided once at startup from [`Config`].

use std::{io, path::PathBuf, sync::Arc};

use async_trait::async_trait;
use tracing::info;

use crate::{
    config::{Config, StoreKind},
    database,
    models::incident::Incident,
};

pub mod memory;
pub mod mongo;

pub use memory::MemoryIncidentStore;
pub use mongo::MongoIncidentStore;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("failed to read seed file {path}: {source}")]
    SeedIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed seed file {path}: {source}")]
    SeedFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[async_trait]
pub trait IncidentStore: Send + Sync {
    /// All incidents, in the store's natural order.
    async fn list(&self) -> Result<Vec<Incident>, StoreError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Incident>, StoreError>;
}

/// Opens the backend selected by `config`.
pub async fn open(config: &Config) -> Result<Arc<dyn IncidentStore>, StoreError> {
    match config.store {
        StoreKind::Memory => {
            let store = match &config.seed_path {
                Some(path) => MemoryIncidentStore::from_seed_file(path)?,
                None => MemoryIncidentStore::default(),
            };
            info!(incidents = store.len(), "using in-memory incident store");
            Ok(Arc::new(store))
        }
        StoreKind::Mongo => {
            let db = database::connect(&config.mongodb_uri, &config.mongodb_database).await?;
            info!(database = %config.mongodb_database, "using mongodb incident store");
            Ok(Arc::new(MongoIncidentStore::new(&db)))
        }
    }
}
