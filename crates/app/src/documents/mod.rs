//! Stored record shapes.
//!
//! Documents arrive loosely typed: fields may be missing, dates may be empty
//! strings and enum values may be anything. Each record type here mirrors the
//! stored shape and converts into a typed entity, rejecting what the storefront
//! cannot price.

use petalo::promotions::ApplicabilityError;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use tracing::warn;

use crate::store::{Collection, Document, Fields};

mod categories;
mod pages;
mod products;
mod promotions;
mod users;

pub use categories::CategoryDocument;
pub use pages::{
    AboutContent, HomeContent, Page, PageContent, QuickViewCard, UnknownPage, ValueCard, VideoCard,
};
pub use products::ProductDocument;
pub use promotions::PromotionDocument;
pub use users::UserDocument;

/// Reasons a stored record cannot become a typed entity.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("malformed record: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("missing field: {0}")]
    MissingField(&'static str),

    #[error("invalid date in {field}: {value:?}")]
    InvalidDate { field: &'static str, value: String },

    #[error(transparent)]
    Applicability(#[from] ApplicabilityError),
}

/// Deserialize a record from document fields.
///
/// # Errors
///
/// Returns [`RecordError::Decode`] if the fields do not fit `T`.
pub fn decode<T: DeserializeOwned>(fields: Fields) -> Result<T, RecordError> {
    Ok(serde_json::from_value(Value::Object(fields))?)
}

/// Convert every document, skipping the ones that fail with a warning.
pub(crate) fn valid_records<T, F>(
    collection: Collection,
    documents: Vec<Document>,
    mut convert: F,
) -> Vec<T>
where
    F: FnMut(Document) -> Result<T, RecordError>,
{
    documents
        .into_iter()
        .filter_map(|document| {
            let id = document.id.clone();

            convert(document)
                .inspect_err(|error| {
                    warn!(%collection, %id, %error, "skipping invalid record");
                })
                .ok()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use crate::store::to_fields;

    use super::*;

    fn document(id: &str, fields: &Value) -> Result<Document, crate::store::StoreError> {
        Ok(Document::new(id, to_fields(fields)?))
    }

    #[test]
    fn invalid_records_are_skipped() -> TestResult {
        let documents = vec![
            document("a", &json!({ "value": 1 }))?,
            document("b", &json!({ "value": "uno" }))?,
            document("c", &json!({ "value": 3 }))?,
        ];

        let values = valid_records(Collection::Promotions, documents, |document| {
            decode::<Value>(document.fields)?
                .get("value")
                .and_then(Value::as_i64)
                .ok_or(RecordError::MissingField("value"))
        });

        assert_eq!(values, [1, 3]);

        Ok(())
    }
}
