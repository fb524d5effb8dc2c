//! Auth service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use tracing::{debug, warn};

use crate::{
    auth::{AuthError, IdentityProvider, Role, Session},
    documents::{UserDocument, decode},
    store::{Collection, DocumentStore},
};

#[derive(Clone)]
pub struct StoreAuthService {
    store: Arc<dyn DocumentStore>,
    identity: Arc<dyn IdentityProvider>,
}

impl StoreAuthService {
    #[must_use]
    pub fn new(store: Arc<dyn DocumentStore>, identity: Arc<dyn IdentityProvider>) -> Self {
        Self { store, identity }
    }
}

#[async_trait]
impl AuthService for StoreAuthService {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let uid = self.identity.sign_in(email, password).await?;

        self.resolve_session(&uid, email).await
    }

    async fn resolve_session(&self, uid: &str, email: &str) -> Result<Session, AuthError> {
        let role = match self.store.get(Collection::Users, uid).await? {
            None => {
                debug!(%uid, "no user document, defaulting to viewer");

                Role::Viewer
            }
            Some(document) => match decode::<UserDocument>(document.fields) {
                Ok(record) => record.role.unwrap_or_default(),
                Err(error) => {
                    warn!(%uid, %error, "unreadable user document, defaulting to viewer");

                    Role::Viewer
                }
            },
        };

        Ok(Session::new(uid, email, role))
    }

    async fn authorize(
        &self,
        uid: &str,
        email: &str,
        required: Role,
    ) -> Result<Session, AuthError> {
        let session = self.resolve_session(uid, email).await?;

        if let Err(error) = session.require_role(required) {
            debug!(%uid, role = %session.role, %required, "access denied");

            return Err(error);
        }

        Ok(session)
    }
}

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Signs in with email and password and resolves the user's role.
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError>;

    /// Builds the session of an already authenticated account.
    ///
    /// Accounts without a user document are viewers.
    async fn resolve_session(&self, uid: &str, email: &str) -> Result<Session, AuthError>;

    /// Builds the session and checks it may open pages gated on `required`.
    async fn authorize(
        &self,
        uid: &str,
        email: &str,
        required: Role,
    ) -> Result<Session, AuthError>;
}
