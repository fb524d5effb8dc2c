//! Document store boundary.
//!
//! The storefront persists everything as loosely-typed documents grouped into
//! named collections. Services only ever talk to [`DocumentStore`]; records are
//! validated into typed entities in [`crate::documents`].

use std::{fmt, str::FromStr};

use async_trait::async_trait;
use mockall::automock;
use petalo::products::ProductKind;
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

mod memory;

pub use memory::MemoryDocumentStore;

/// Field map of a stored document, excluding its id.
pub type Fields = Map<String, Value>;

/// Document store errors.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("document {collection}/{id} not found")]
    NotFound { collection: Collection, id: String },

    #[error("unknown collection: {0}")]
    UnknownCollection(String),

    #[error("documents must serialize to an object")]
    NotAnObject,

    #[error("failed to encode document")]
    Encode(#[source] serde_json::Error),

    #[error("failed to read seed file")]
    Io(#[from] std::io::Error),

    #[error("failed to parse seed data")]
    Seed(#[source] serde_json::Error),
}

/// Named collection of documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Flowers,
    Jewelry,
    FlowerCategories,
    JewelryCategories,
    Promotions,
    Users,
    PageContent,
}

impl Collection {
    /// Every collection the storefront uses.
    pub const ALL: [Collection; 7] = [
        Collection::Flowers,
        Collection::Jewelry,
        Collection::FlowerCategories,
        Collection::JewelryCategories,
        Collection::Promotions,
        Collection::Users,
        Collection::PageContent,
    ];

    /// Collection holding products of `kind`.
    #[must_use]
    pub const fn products(kind: ProductKind) -> Self {
        match kind {
            ProductKind::Flowers => Collection::Flowers,
            ProductKind::Jewelry => Collection::Jewelry,
        }
    }

    /// Collection holding categories of `kind`.
    #[must_use]
    pub const fn categories(kind: ProductKind) -> Self {
        match kind {
            ProductKind::Flowers => Collection::FlowerCategories,
            ProductKind::Jewelry => Collection::JewelryCategories,
        }
    }

    /// Stored collection name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Collection::Flowers => "flowers",
            Collection::Jewelry => "jewelry",
            Collection::FlowerCategories => "flowerCategories",
            Collection::JewelryCategories => "jewelryCategories",
            Collection::Promotions => "promotions",
            Collection::Users => "users",
            Collection::PageContent => "pageContent",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Collection {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Collection::ALL
            .into_iter()
            .find(|collection| collection.as_str() == s)
            .ok_or_else(|| StoreError::UnknownCollection(s.to_string()))
    }
}

/// A stored document.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: String,
    pub fields: Fields,
}

impl Document {
    #[must_use]
    pub fn new(id: impl Into<String>, fields: Fields) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }
}

/// Serialize a record into document fields.
///
/// # Errors
///
/// Returns an error if the record does not serialize to a JSON object.
pub fn to_fields<T: Serialize>(record: &T) -> Result<Fields, StoreError> {
    match serde_json::to_value(record).map_err(StoreError::Encode)? {
        Value::Object(fields) => Ok(fields),
        _ => Err(StoreError::NotAnObject),
    }
}

#[automock]
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Every document in `collection`, in insertion order.
    async fn list(&self, collection: Collection) -> Result<Vec<Document>, StoreError>;

    /// A single document, if present.
    async fn get(&self, collection: Collection, id: &str) -> Result<Option<Document>, StoreError>;

    /// Documents whose `field` equals `value`.
    async fn find_eq(
        &self,
        collection: Collection,
        field: &str,
        value: &Value,
    ) -> Result<Vec<Document>, StoreError>;

    /// Stores a new document under a generated id and returns the id.
    async fn add(&self, collection: Collection, fields: Fields) -> Result<String, StoreError>;

    /// Creates or replaces the document at `id`.
    async fn set(&self, collection: Collection, id: &str, fields: Fields)
    -> Result<(), StoreError>;

    /// Merges `fields` into an existing document.
    async fn update(
        &self,
        collection: Collection,
        id: &str,
        fields: Fields,
    ) -> Result<(), StoreError>;

    /// Merges `fields` into the document at `id`, creating it if missing.
    async fn merge(
        &self,
        collection: Collection,
        id: &str,
        fields: Fields,
    ) -> Result<(), StoreError>;

    /// Removes an existing document.
    async fn delete(&self, collection: Collection, id: &str) -> Result<(), StoreError>;
}
