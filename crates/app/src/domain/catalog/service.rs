//! Catalog service.

use std::sync::Arc;

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use petalo::{
    catalog::{CatalogFilter, PricedProduct, price_catalog, promoted_products},
    pricing::price_product,
    products::{Category, Product, ProductKind},
    promotions::Promotion,
};
use tracing::debug;

use crate::{
    documents::{
        CategoryDocument, ProductDocument, PromotionDocument, decode, valid_records,
    },
    domain::catalog::{errors::CatalogServiceError, models::Listing},
    store::{Collection, DocumentStore},
};

#[derive(Clone)]
pub struct StoreCatalogService {
    store: Arc<dyn DocumentStore>,
}

impl StoreCatalogService {
    #[must_use]
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    async fn every_product(&self) -> Result<Vec<Product>, CatalogServiceError> {
        let (mut flowers, jewelry) = tokio::try_join!(
            self.products(ProductKind::Flowers),
            self.products(ProductKind::Jewelry),
        )?;

        flowers.extend(jewelry);

        Ok(flowers)
    }
}

#[async_trait]
impl CatalogService for StoreCatalogService {
    async fn products(&self, kind: ProductKind) -> Result<Vec<Product>, CatalogServiceError> {
        let collection = Collection::products(kind);
        let documents = self.store.list(collection).await?;

        Ok(valid_records(collection, documents, |document| {
            decode::<ProductDocument>(document.fields)?.into_product(document.id, kind)
        }))
    }

    async fn categories(&self, kind: ProductKind) -> Result<Vec<Category>, CatalogServiceError> {
        let collection = Collection::categories(kind);
        let documents = self.store.list(collection).await?;

        Ok(valid_records(collection, documents, |document| {
            decode::<CategoryDocument>(document.fields)?.into_category(document.id, kind)
        }))
    }

    async fn promotions(&self) -> Result<Vec<Promotion>, CatalogServiceError> {
        let documents = self.store.list(Collection::Promotions).await?;

        Ok(valid_records(Collection::Promotions, documents, |document| {
            decode::<PromotionDocument>(document.fields)?.into_promotion(document.id)
        }))
    }

    async fn catalog(
        &self,
        kind: ProductKind,
        category: Option<String>,
        now: Timestamp,
    ) -> Result<Vec<Listing>, CatalogServiceError> {
        let (products, promotions) = tokio::try_join!(self.products(kind), self.promotions())?;

        let filter = match category.as_deref() {
            Some(name) => CatalogFilter::Category { kind, name },
            None => CatalogFilter::Kind(kind),
        };

        let listings: Vec<Listing> = price_catalog(&products, &promotions, now, filter)?
            .into_iter()
            .map(Listing::from)
            .collect();

        debug!(%kind, ?category, count = listings.len(), "priced catalog");

        Ok(listings)
    }

    async fn offers(
        &self,
        kind: Option<ProductKind>,
        now: Timestamp,
    ) -> Result<Vec<Listing>, CatalogServiceError> {
        let (products, promotions) = match kind {
            Some(kind) => tokio::try_join!(self.products(kind), self.promotions())?,
            None => tokio::try_join!(self.every_product(), self.promotions())?,
        };

        let listings: Vec<Listing> = promoted_products(&products, &promotions, now, kind)?
            .into_iter()
            .map(Listing::from)
            .collect();

        debug!(?kind, count = listings.len(), "priced offers");

        Ok(listings)
    }

    async fn priced_product(
        &self,
        kind: ProductKind,
        id: &str,
        now: Timestamp,
    ) -> Result<Listing, CatalogServiceError> {
        let (document, promotions) = tokio::try_join!(
            async {
                Ok::<_, CatalogServiceError>(
                    self.store.get(Collection::products(kind), id).await?,
                )
            },
            self.promotions(),
        )?;

        let document = document.ok_or_else(|| CatalogServiceError::NotFound {
            kind,
            id: id.to_string(),
        })?;

        let product =
            decode::<ProductDocument>(document.fields)?.into_product(document.id, kind)?;
        let pricing = price_product(&product, &promotions, now)?;

        Ok(Listing::from(PricedProduct {
            product: &product,
            pricing,
        }))
    }
}

#[automock]
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Valid products of `kind`, in stored order.
    async fn products(&self, kind: ProductKind) -> Result<Vec<Product>, CatalogServiceError>;

    /// Valid categories of `kind`, in stored order.
    async fn categories(&self, kind: ProductKind) -> Result<Vec<Category>, CatalogServiceError>;

    /// Valid promotions, in stored order.
    async fn promotions(&self) -> Result<Vec<Promotion>, CatalogServiceError>;

    /// Priced listing for a kind's catalog page, optionally narrowed to one category.
    async fn catalog(
        &self,
        kind: ProductKind,
        category: Option<String>,
        now: Timestamp,
    ) -> Result<Vec<Listing>, CatalogServiceError>;

    /// Products with at least one live promotion, optionally of one kind.
    async fn offers(
        &self,
        kind: Option<ProductKind>,
        now: Timestamp,
    ) -> Result<Vec<Listing>, CatalogServiceError>;

    /// A single priced product.
    async fn priced_product(
        &self,
        kind: ProductKind,
        id: &str,
        now: Timestamp,
    ) -> Result<Listing, CatalogServiceError>;
}
