//! Category records.

use jiff::Timestamp;
use petalo::products::{Category, ProductKind};
use serde::{Deserialize, Serialize};

use crate::documents::RecordError;

/// Stored shape of a `flowerCategories` or `jewelryCategories` document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
}

impl CategoryDocument {
    /// Convert into a category of `kind`.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::MissingField`] when the name is absent.
    pub fn into_category(self, id: String, kind: ProductKind) -> Result<Category, RecordError> {
        Ok(Category {
            id,
            kind,
            name: self.name.ok_or(RecordError::MissingField("name"))?,
            created_at: self.created_at,
        })
    }
}

impl From<&Category> for CategoryDocument {
    fn from(category: &Category) -> Self {
        Self {
            name: Some(category.name.clone()),
            created_at: category.created_at,
        }
    }
}
