//! Product records.

use petalo::products::{Product, ProductKind};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::documents::RecordError;

/// Stored shape of a `flowers` or `jewelry` document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub price: Option<Decimal>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ProductDocument {
    /// Convert into a product of `kind`, the kind being implied by the collection.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::MissingField`] when the name or price is absent.
    pub fn into_product(self, id: String, kind: ProductKind) -> Result<Product, RecordError> {
        Ok(Product {
            id,
            kind,
            name: self.name.ok_or(RecordError::MissingField("name"))?,
            category: self.category.unwrap_or_default(),
            price: self.price.ok_or(RecordError::MissingField("price"))?,
            image_url: self.image_url.filter(|url| !url.is_empty()),
            description: self.description.filter(|text| !text.is_empty()),
        })
    }
}

impl From<&Product> for ProductDocument {
    fn from(product: &Product) -> Self {
        Self {
            name: Some(product.name.clone()),
            category: Some(product.category.clone()),
            price: Some(product.price),
            image_url: product.image_url.clone(),
            description: product.description.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use crate::{documents::decode, store::to_fields};

    use super::*;

    #[test]
    fn stored_numbers_become_decimal_prices() -> TestResult {
        let record: ProductDocument = decode(to_fields(&json!({
            "name": "Rosa roja",
            "category": "Rosas",
            "price": 12990,
            "imageUrl": "",
        }))?)?;

        let product = record.into_product("rosa".into(), ProductKind::Flowers)?;

        assert_eq!(product.price, Decimal::from(12_990));
        assert_eq!(product.kind, ProductKind::Flowers);
        assert_eq!(product.image_url, None);

        Ok(())
    }

    #[test]
    fn missing_price_is_rejected() -> TestResult {
        let record: ProductDocument = decode(to_fields(&json!({ "name": "Rosa" }))?)?;

        assert!(matches!(
            record.into_product("rosa".into(), ProductKind::Flowers),
            Err(RecordError::MissingField("price"))
        ));

        Ok(())
    }

    #[test]
    fn writes_prices_as_numbers() -> TestResult {
        let product = Product::new("r", ProductKind::Jewelry, "Anillo", "Anillos", Decimal::from(500));

        let fields = to_fields(&ProductDocument::from(&product))?;

        assert_eq!(fields.get("price"), Some(&json!(500.0)));
        assert!(!fields.contains_key("imageUrl"));

        Ok(())
    }
}
