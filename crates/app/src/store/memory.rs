//! In-process document store.

use std::path::Path;

use async_trait::async_trait;
use rustc_hash::FxHashMap;
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::store::{Collection, Document, DocumentStore, Fields, StoreError};

/// Document store kept in memory, guarded by a read/write lock.
///
/// Documents keep their insertion order, which is what listings (and so
/// promotion stacking) follow.
#[derive(Debug, Default)]
pub struct MemoryDocumentStore {
    collections: RwLock<FxHashMap<Collection, Vec<Document>>>,
}

impl MemoryDocumentStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from a JSON seed of the form
    /// `{ "<collection>": [ { "id": "...", ...fields } ] }`.
    ///
    /// Documents without a string `id` get a generated one.
    ///
    /// # Errors
    ///
    /// Returns an error if the seed is not valid JSON of that shape or names an
    /// unknown collection.
    pub fn from_seed(seed: &str) -> Result<Self, StoreError> {
        let raw: FxHashMap<String, Vec<Fields>> =
            serde_json::from_str(seed).map_err(StoreError::Seed)?;

        let mut collections = FxHashMap::default();

        for (name, documents) in raw {
            let collection: Collection = name.parse()?;

            let documents: Vec<Document> = documents
                .into_iter()
                .map(|mut fields| {
                    let id = match fields.remove("id") {
                        Some(Value::String(id)) => id,
                        _ => new_id(),
                    };

                    Document::new(id, fields)
                })
                .collect();

            debug!(%collection, count = documents.len(), "seeded collection");

            collections.insert(collection, documents);
        }

        Ok(Self {
            collections: RwLock::new(collections),
        })
    }

    /// Build a store from a JSON seed file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub async fn from_seed_file(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let contents = tokio::fs::read_to_string(path).await?;

        Self::from_seed(&contents)
    }
}

fn new_id() -> String {
    Uuid::now_v7().simple().to_string()
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn list(&self, collection: Collection) -> Result<Vec<Document>, StoreError> {
        let collections = self.collections.read().await;

        Ok(collections.get(&collection).cloned().unwrap_or_default())
    }

    async fn get(&self, collection: Collection, id: &str) -> Result<Option<Document>, StoreError> {
        let collections = self.collections.read().await;

        Ok(collections
            .get(&collection)
            .and_then(|documents| documents.iter().find(|document| document.id == id))
            .cloned())
    }

    async fn find_eq(
        &self,
        collection: Collection,
        field: &str,
        value: &Value,
    ) -> Result<Vec<Document>, StoreError> {
        let collections = self.collections.read().await;

        Ok(collections
            .get(&collection)
            .map(|documents| {
                documents
                    .iter()
                    .filter(|document| document.fields.get(field) == Some(value))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn add(&self, collection: Collection, fields: Fields) -> Result<String, StoreError> {
        let id = new_id();

        self.collections
            .write()
            .await
            .entry(collection)
            .or_default()
            .push(Document::new(id.clone(), fields));

        Ok(id)
    }

    async fn set(
        &self,
        collection: Collection,
        id: &str,
        fields: Fields,
    ) -> Result<(), StoreError> {
        let mut collections = self.collections.write().await;
        let documents = collections.entry(collection).or_default();

        match documents.iter_mut().find(|document| document.id == id) {
            Some(document) => document.fields = fields,
            None => documents.push(Document::new(id, fields)),
        }

        Ok(())
    }

    async fn update(
        &self,
        collection: Collection,
        id: &str,
        fields: Fields,
    ) -> Result<(), StoreError> {
        let mut collections = self.collections.write().await;

        let document = collections
            .get_mut(&collection)
            .and_then(|documents| documents.iter_mut().find(|document| document.id == id))
            .ok_or_else(|| StoreError::NotFound {
                collection,
                id: id.to_string(),
            })?;

        document.fields.extend(fields);

        Ok(())
    }

    async fn merge(
        &self,
        collection: Collection,
        id: &str,
        fields: Fields,
    ) -> Result<(), StoreError> {
        let mut collections = self.collections.write().await;
        let documents = collections.entry(collection).or_default();

        match documents.iter_mut().find(|document| document.id == id) {
            Some(document) => document.fields.extend(fields),
            None => documents.push(Document::new(id, fields)),
        }

        Ok(())
    }

    async fn delete(&self, collection: Collection, id: &str) -> Result<(), StoreError> {
        let mut collections = self.collections.write().await;

        let documents = collections.get_mut(&collection);
        let position = documents
            .as_ref()
            .and_then(|documents| documents.iter().position(|document| document.id == id));

        match (documents, position) {
            (Some(documents), Some(position)) => {
                documents.remove(position);

                Ok(())
            }
            _ => Err(StoreError::NotFound {
                collection,
                id: id.to_string(),
            }),
        }
    }
}
