use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, Collection, Database};
use tracing::debug;

use super::{IncidentStore, StoreError};
use crate::models::incident::{Incident, IncidentDocument};

const COLLECTION: &str = "incidents";

pub struct MongoIncidentStore {
    collection: Collection<IncidentDocument>,
}

impl MongoIncidentStore {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection::<IncidentDocument>(COLLECTION),
        }
    }
}

#[async_trait]
impl IncidentStore for MongoIncidentStore {
    async fn list(&self) -> Result<Vec<Incident>, StoreError> {
        let cursor = self.collection.find(None, None).await?;
        let documents: Vec<IncidentDocument> = cursor.try_collect().await?;
        debug!(count = documents.len(), "loaded incidents");

        Ok(documents.into_iter().map(Incident::from).collect())
    }
    async fn find_by_id(&self, id: i64) -> Result<Option<Incident>, StoreError> {
        let document = self.collection.find_one(doc! { "_id": id }, None).await?;

        Ok(document.map(Incident::from))
    }
}
