//! Admin service.

use std::sync::Arc;

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use petalo::{
    products::{Category, Product, ProductKind},
    promotions::Promotion,
};
use serde_json::json;
use tracing::info;

use crate::{
    auth::{IdentityProvider, Permission, Role, Session, User},
    documents::{
        CategoryDocument, Page, PageContent, ProductDocument, PromotionDocument, UserDocument,
        decode, valid_records,
    },
    domain::admin::{
        errors::AdminServiceError,
        models::{NewProduct, NewPromotion, NewUser},
        validation::{
            validate_category_name, validate_product, validate_promotion, validate_user,
        },
    },
    store::{Collection, DocumentStore, Fields, to_fields},
};

const ACTIVE_STATUS: &str = "active";

#[derive(Clone)]
pub struct StoreAdminService {
    store: Arc<dyn DocumentStore>,
    identity: Arc<dyn IdentityProvider>,
}

impl StoreAdminService {
    #[must_use]
    pub fn new(store: Arc<dyn DocumentStore>, identity: Arc<dyn IdentityProvider>) -> Self {
        Self { store, identity }
    }
}

fn product_from_form(id: String, form: NewProduct) -> Product {
    Product {
        id,
        kind: form.kind,
        name: form.name,
        category: form.category,
        price: form.price,
        image_url: form.image_url.filter(|url| !url.is_empty()),
        description: form.description.filter(|text| !text.is_empty()),
    }
}

#[async_trait]
impl AdminService for StoreAdminService {
    async fn add_product(
        &self,
        session: &Session,
        product: NewProduct,
    ) -> Result<Product, AdminServiceError> {
        session.require(Permission::EditContent)?;
        validate_product(&product)?;

        let collection = Collection::products(product.kind);
        let mut product = product_from_form(String::new(), product);

        product.id = self
            .store
            .add(collection, to_fields(&ProductDocument::from(&product))?)
            .await?;

        info!(%collection, id = %product.id, by = %session.email, "product added");

        Ok(product)
    }

    async fn update_product(
        &self,
        session: &Session,
        id: &str,
        product: NewProduct,
    ) -> Result<Product, AdminServiceError> {
        session.require(Permission::EditContent)?;
        validate_product(&product)?;

        let collection = Collection::products(product.kind);
        let product = product_from_form(id.to_string(), product);

        if self.store.get(collection, id).await?.is_none() {
            return Err(AdminServiceError::NotFound {
                collection,
                id: id.to_string(),
            });
        }

        self.store
            .set(collection, id, to_fields(&ProductDocument::from(&product))?)
            .await?;

        info!(%collection, %id, by = %session.email, "product updated");

        Ok(product)
    }

    async fn delete_product(
        &self,
        session: &Session,
        kind: ProductKind,
        id: &str,
    ) -> Result<(), AdminServiceError> {
        session.require(Permission::DeleteContent)?;

        let collection = Collection::products(kind);

        self.store.delete(collection, id).await?;

        info!(%collection, %id, by = %session.email, "product deleted");

        Ok(())
    }

    async fn add_category(
        &self,
        session: &Session,
        kind: ProductKind,
        name: &str,
    ) -> Result<Category, AdminServiceError> {
        session.require(Permission::EditContent)?;

        let collection = Collection::categories(kind);
        let mut category = Category {
            id: String::new(),
            kind,
            name: validate_category_name(name)?,
            created_at: Some(Timestamp::now()),
        };

        category.id = self
            .store
            .add(collection, to_fields(&CategoryDocument::from(&category))?)
            .await?;

        info!(%collection, id = %category.id, name = %category.name, "category added");

        Ok(category)
    }

    async fn add_promotion(
        &self,
        session: &Session,
        promotion: NewPromotion,
    ) -> Result<Promotion, AdminServiceError> {
        session.require(Permission::EditContent)?;
        validate_promotion(&promotion)?;

        let mut promotion = Promotion::new(
            String::new(),
            promotion.name,
            promotion.discount_type,
            promotion.discount_value,
            promotion.applies_to,
        )
        .with_description(promotion.description)
        .with_schedule(promotion.schedule)
        .with_active(promotion.is_active);

        promotion.created_at = Some(Timestamp::now());
        promotion.id = self
            .store
            .add(
                Collection::Promotions,
                to_fields(&PromotionDocument::from(&promotion))?,
            )
            .await?;

        info!(id = %promotion.id, target = promotion.applies_to.target(), "promotion added");

        Ok(promotion)
    }

    async fn delete_promotion(&self, session: &Session, id: &str) -> Result<(), AdminServiceError> {
        session.require(Permission::DeleteContent)?;

        self.store.delete(Collection::Promotions, id).await?;

        info!(%id, by = %session.email, "promotion deleted");

        Ok(())
    }

    async fn page_content(&self, page: Page) -> Result<PageContent, AdminServiceError> {
        match self.store.get(Collection::PageContent, page.id()).await? {
            Some(document) => Ok(PageContent::from_fields(page, document.fields)?),
            None => Ok(PageContent::default_for(page)),
        }
    }

    async fn save_page_content(
        &self,
        session: &Session,
        content: PageContent,
    ) -> Result<PageContent, AdminServiceError> {
        session.require(Permission::EditContent)?;

        let page = content.page();

        self.store
            .merge(Collection::PageContent, page.id(), content.to_fields()?)
            .await?;

        info!(%page, by = %session.email, "page content saved");

        self.page_content(page).await
    }

    async fn list_users(&self, session: &Session) -> Result<Vec<User>, AdminServiceError> {
        session.require(Permission::ManageUsers)?;

        let documents = self.store.list(Collection::Users).await?;

        Ok(valid_records(Collection::Users, documents, |document| {
            decode::<UserDocument>(document.fields)?.into_user(document.id)
        }))
    }

    async fn add_user(&self, session: &Session, user: NewUser) -> Result<User, AdminServiceError> {
        session.require(Permission::ManageUsers)?;
        validate_user(&user)?;

        let existing = self
            .store
            .find_eq(Collection::Users, "email", &json!(user.email))
            .await?;

        if !existing.is_empty() {
            return Err(AdminServiceError::EmailTaken);
        }

        let uid = self.identity.create_user(&user.email, &user.password).await?;

        let created = User {
            uid,
            email: user.email,
            role: user.role,
            status: ACTIVE_STATUS.to_string(),
            created_at: Some(Timestamp::now()),
            created_by: Some(session.email.clone()),
        };

        self.store
            .set(
                Collection::Users,
                &created.uid,
                to_fields(&UserDocument::from(&created))?,
            )
            .await?;

        info!(uid = %created.uid, role = %created.role, by = %session.email, "user added");

        Ok(created)
    }

    async fn set_user_role(
        &self,
        session: &Session,
        uid: &str,
        role: Role,
    ) -> Result<(), AdminServiceError> {
        session.require(Permission::ManageUsers)?;

        let mut fields = Fields::new();
        fields.insert("role".to_string(), json!(role));
        fields.insert("updatedAt".to_string(), json!(Timestamp::now()));

        self.store.update(Collection::Users, uid, fields).await?;

        info!(%uid, %role, by = %session.email, "user role changed");

        Ok(())
    }

    async fn delete_user(&self, session: &Session, uid: &str) -> Result<(), AdminServiceError> {
        session.require(Permission::ManageUsers)?;

        self.store.delete(Collection::Users, uid).await?;

        info!(%uid, by = %session.email, "user deleted");

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait AdminService: Send + Sync {
    /// Adds a product to its kind's collection.
    async fn add_product(
        &self,
        session: &Session,
        product: NewProduct,
    ) -> Result<Product, AdminServiceError>;

    /// Replaces an existing product.
    async fn update_product(
        &self,
        session: &Session,
        id: &str,
        product: NewProduct,
    ) -> Result<Product, AdminServiceError>;

    /// Deletes a product immediately.
    async fn delete_product(
        &self,
        session: &Session,
        kind: ProductKind,
        id: &str,
    ) -> Result<(), AdminServiceError>;

    /// Adds a category; products referencing other names are left alone.
    async fn add_category(
        &self,
        session: &Session,
        kind: ProductKind,
        name: &str,
    ) -> Result<Category, AdminServiceError>;

    /// Adds a promotion at the end of the stacking order.
    async fn add_promotion(
        &self,
        session: &Session,
        promotion: NewPromotion,
    ) -> Result<Promotion, AdminServiceError>;

    /// Deletes a promotion.
    async fn delete_promotion(&self, session: &Session, id: &str) -> Result<(), AdminServiceError>;

    /// Current content of `page`, or its defaults if it was never edited.
    async fn page_content(&self, page: Page) -> Result<PageContent, AdminServiceError>;

    /// Merges `content` into the stored page and returns the result.
    async fn save_page_content(
        &self,
        session: &Session,
        content: PageContent,
    ) -> Result<PageContent, AdminServiceError>;

    /// Lists admin-surface users.
    async fn list_users(&self, session: &Session) -> Result<Vec<User>, AdminServiceError>;

    /// Registers an account with the identity provider and stores its role.
    async fn add_user(&self, session: &Session, user: NewUser) -> Result<User, AdminServiceError>;

    /// Changes a user's role.
    async fn set_user_role(
        &self,
        session: &Session,
        uid: &str,
        role: Role,
    ) -> Result<(), AdminServiceError>;

    /// Deletes a user's role document. The identity account is left in place.
    async fn delete_user(&self, session: &Session, uid: &str) -> Result<(), AdminServiceError>;
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use petalo::promotions::{Applicability, DiscountType, Schedule};
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::{
        auth::{AuthService, MockIdentityProvider},
        documents::{AboutContent, HomeContent},
        domain::{admin::validation::ValidationError, catalog::CatalogService},
        store::MemoryDocumentStore,
        test::{NOW, SEED, TestContext},
    };

    use super::*;

    fn tulip() -> NewProduct {
        NewProduct {
            kind: ProductKind::Flowers,
            name: "Tulipanes".into(),
            category: "Tulipanes".into(),
            price: Decimal::from(9_990),
            image_url: Some(String::new()),
            description: None,
        }
    }

    fn jewelry_sale() -> NewPromotion {
        NewPromotion {
            name: "Joyas".into(),
            description: "$5.000 menos en joyas".into(),
            discount_type: DiscountType::Fixed,
            discount_value: Decimal::from(5_000),
            applies_to: Applicability::Kind(ProductKind::Jewelry),
            schedule: Schedule::between(date(2025, 1, 1), date(2025, 1, 31)),
            is_active: true,
        }
    }

    fn new_user(email: &str) -> NewUser {
        NewUser {
            email: email.into(),
            password: "123456".into(),
            confirm_password: "123456".into(),
            role: Role::Editor,
        }
    }

    #[tokio::test]
    async fn added_product_shows_up_priced_in_the_catalog() -> TestResult {
        let ctx = TestContext::new();

        let product = ctx
            .admin
            .add_product(&TestContext::editor_session(), tulip())
            .await?;

        let listing = ctx
            .catalog
            .priced_product(ProductKind::Flowers, &product.id, NOW)
            .await?;

        assert_eq!(listing.product, product);
        assert_eq!(listing.product.image_url, None);
        assert_eq!(listing.final_price, Decimal::new(7_992, 0));

        Ok(())
    }

    #[tokio::test]
    async fn update_overwrites_an_existing_product() -> TestResult {
        let ctx = TestContext::new();

        let updated = ctx
            .admin
            .update_product(
                &TestContext::editor_session(),
                "lirio",
                NewProduct {
                    name: "Lirios blancos".into(),
                    category: "Lirios".into(),
                    price: Decimal::from(9_000),
                    ..tulip()
                },
            )
            .await?;

        let products = ctx.catalog.products(ProductKind::Flowers).await?;

        assert!(products.contains(&updated));

        let missing = ctx
            .admin
            .update_product(&TestContext::editor_session(), "nada", tulip())
            .await;

        assert!(matches!(missing, Err(AdminServiceError::NotFound { .. })));

        Ok(())
    }

    #[tokio::test]
    async fn editors_cannot_delete() {
        let ctx = TestContext::new();

        let result = ctx
            .admin
            .delete_product(&TestContext::editor_session(), ProductKind::Flowers, "lirio")
            .await;

        assert!(matches!(
            result,
            Err(AdminServiceError::Forbidden(Permission::DeleteContent))
        ));
    }

    #[tokio::test]
    async fn viewers_cannot_edit() {
        let ctx = TestContext::new();

        let result = ctx
            .admin
            .add_product(&TestContext::viewer_session(), tulip())
            .await;

        assert!(matches!(
            result,
            Err(AdminServiceError::Forbidden(Permission::EditContent))
        ));
    }

    #[tokio::test]
    async fn admins_delete_products_and_promotions() -> TestResult {
        let ctx = TestContext::new();
        let admin = TestContext::admin_session();

        ctx.admin
            .delete_product(&admin, ProductKind::Flowers, "rosa-roja")
            .await?;
        ctx.admin.delete_promotion(&admin, "flores-20").await?;

        let offers = ctx.catalog.offers(None, NOW).await?;

        assert!(offers.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn categories_are_stored_trimmed() -> TestResult {
        let ctx = TestContext::new();

        let category = ctx
            .admin
            .add_category(&TestContext::editor_session(), ProductKind::Jewelry, "  Aros ")
            .await?;

        let names: Vec<String> = ctx
            .catalog
            .categories(ProductKind::Jewelry)
            .await?
            .into_iter()
            .map(|category| category.name)
            .collect();

        assert_eq!(category.name, "Aros");
        assert_eq!(names, ["Anillos", "Collares", "Aros"]);

        Ok(())
    }

    #[tokio::test]
    async fn new_promotions_stack_after_existing_ones() -> TestResult {
        let ctx = TestContext::new();

        let promotion = ctx
            .admin
            .add_promotion(&TestContext::editor_session(), jewelry_sale())
            .await?;

        let stored = ctx.catalog.promotions().await?;

        assert_eq!(stored.last().map(|p| p.id.as_str()), Some(promotion.id.as_str()));

        let jewelry = ctx.catalog.offers(Some(ProductKind::Jewelry), NOW).await?;
        let prices: Vec<Decimal> = jewelry.iter().map(|listing| listing.final_price).collect();

        assert_eq!(prices, [Decimal::from(45_000), Decimal::from(20_000)]);

        Ok(())
    }

    #[tokio::test]
    async fn invalid_promotions_are_rejected_before_writing() {
        let ctx = TestContext::new();

        let result = ctx
            .admin
            .add_promotion(
                &TestContext::editor_session(),
                NewPromotion {
                    discount_value: Decimal::ZERO,
                    ..jewelry_sale()
                },
            )
            .await;

        assert!(matches!(
            result,
            Err(AdminServiceError::Invalid(ValidationError::ZeroDiscount))
        ));
    }

    #[tokio::test]
    async fn added_users_can_sign_in_with_their_role() -> TestResult {
        let ctx = TestContext::new();

        let user = ctx
            .admin
            .add_user(&TestContext::admin_session(), new_user("nueva@petalo.cl"))
            .await?;

        let session = ctx.auth.sign_in("nueva@petalo.cl", "123456").await?;

        assert_eq!(session.uid, user.uid);
        assert_eq!(session.role, Role::Editor);
        assert_eq!(user.created_by.as_deref(), Some("admin@petalo.cl"));
        assert_eq!(user.status, "active");

        Ok(())
    }

    #[tokio::test]
    async fn registered_emails_are_rejected_before_the_identity_provider() -> TestResult {
        let mut identity = MockIdentityProvider::new();
        identity.expect_create_user().never();
        identity.expect_sign_in().never();

        let store = MemoryDocumentStore::from_seed(SEED)?;
        let service = StoreAdminService::new(Arc::new(store), Arc::new(identity));

        let result = service
            .add_user(&TestContext::admin_session(), new_user("editor@petalo.cl"))
            .await;

        assert!(matches!(result, Err(AdminServiceError::EmailTaken)));

        Ok(())
    }

    #[tokio::test]
    async fn only_admins_manage_users() {
        let ctx = TestContext::new();

        let result = ctx.admin.list_users(&TestContext::editor_session()).await;

        assert!(matches!(
            result,
            Err(AdminServiceError::Forbidden(Permission::ManageUsers))
        ));
    }

    #[tokio::test]
    async fn role_changes_and_deletions_apply_to_user_documents() -> TestResult {
        let ctx = TestContext::new();
        let admin = TestContext::admin_session();

        ctx.admin.set_user_role(&admin, "u-editor", Role::Viewer).await?;

        let session = ctx.auth.resolve_session("u-editor", "editor@petalo.cl").await?;

        assert_eq!(session.role, Role::Viewer);

        ctx.admin.delete_user(&admin, "u-editor").await?;

        let users = ctx.admin.list_users(&admin).await?;

        assert_eq!(
            users.iter().map(|user| user.uid.as_str()).collect::<Vec<_>>(),
            ["u-admin"]
        );

        Ok(())
    }

    #[tokio::test]
    async fn unedited_pages_read_as_their_defaults() -> TestResult {
        let ctx = TestContext::new();

        let home = ctx.admin.page_content(Page::Home).await?;

        assert_eq!(home, PageContent::default_for(Page::Home));

        Ok(())
    }

    #[tokio::test]
    async fn saved_page_content_is_merged_into_the_stored_page() -> TestResult {
        let ctx = TestContext::new();

        let PageContent::About(mut about) = ctx.admin.page_content(Page::About).await? else {
            return Err("expected about content".into());
        };

        assert_eq!(about.title, "Nuestra historia");
        assert_eq!(about.subtitle, AboutContent::default().subtitle);

        about.mission_text = "Flores frescas todos los días".into();

        let saved = ctx
            .admin
            .save_page_content(&TestContext::editor_session(), PageContent::About(about.clone()))
            .await?;

        assert_eq!(saved, PageContent::About(about));

        let stored = ctx
            .store
            .get(Collection::PageContent, "quienesSomos")
            .await?
            .map(|document| document.fields)
            .unwrap_or_default();

        assert_eq!(
            stored.get("missionText"),
            Some(&json!("Flores frescas todos los días"))
        );
        assert_eq!(
            stored.get("bannerUrl"),
            Some(&json!("https://images.petalo.cl/banner.jpg"))
        );

        Ok(())
    }

    #[tokio::test]
    async fn first_save_creates_the_page() -> TestResult {
        let ctx = TestContext::new();

        let home = HomeContent {
            main_slogan: "Flores y joyas".into(),
            ..HomeContent::default()
        };

        ctx.admin
            .save_page_content(&TestContext::admin_session(), PageContent::Home(home.clone()))
            .await?;

        assert_eq!(
            ctx.admin.page_content(Page::Home).await?,
            PageContent::Home(home)
        );

        Ok(())
    }

    #[tokio::test]
    async fn viewers_cannot_edit_pages() {
        let ctx = TestContext::new();

        let result = ctx
            .admin
            .save_page_content(
                &TestContext::viewer_session(),
                PageContent::default_for(Page::Home),
            )
            .await;

        assert!(matches!(
            result,
            Err(AdminServiceError::Forbidden(Permission::EditContent))
        ));
    }
}
