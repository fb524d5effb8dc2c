//! Identity provider boundary.

use async_trait::async_trait;
use mockall::automock;
use rustc_hash::FxHashMap;
use sha2::{Digest, Sha256};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::auth::AuthError;

/// Hosted email/password identity service.
#[automock]
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Verifies credentials and returns the account uid.
    async fn sign_in(&self, email: &str, password: &str) -> Result<String, AuthError>;

    /// Registers a new account and returns its uid.
    async fn create_user(&self, email: &str, password: &str) -> Result<String, AuthError>;
}

#[derive(Debug, Clone)]
struct Account {
    uid: String,
    password_hash: String,
}

/// Identity provider holding accounts in memory with hashed passwords.
#[derive(Debug, Default)]
pub struct MemoryIdentityProvider {
    accounts: RwLock<FxHashMap<String, Account>>,
}

impl MemoryIdentityProvider {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an existing account.
    #[must_use]
    pub fn with_account(mut self, uid: &str, email: &str, password: &str) -> Self {
        self.accounts.get_mut().insert(
            normalize_email(email),
            Account {
                uid: uid.to_string(),
                password_hash: hash_password(password),
            },
        );

        self
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn hash_password(password: &str) -> String {
    format!("{:x}", Sha256::digest(password.as_bytes()))
}

#[async_trait]
impl IdentityProvider for MemoryIdentityProvider {
    async fn sign_in(&self, email: &str, password: &str) -> Result<String, AuthError> {
        let accounts = self.accounts.read().await;

        accounts
            .get(&normalize_email(email))
            .filter(|account| account.password_hash == hash_password(password))
            .map(|account| account.uid.clone())
            .ok_or(AuthError::InvalidCredentials)
    }

    async fn create_user(&self, email: &str, password: &str) -> Result<String, AuthError> {
        let mut accounts = self.accounts.write().await;
        let key = normalize_email(email);

        if accounts.contains_key(&key) {
            return Err(AuthError::EmailInUse);
        }

        let uid = Uuid::now_v7().simple().to_string();

        accounts.insert(
            key,
            Account {
                uid: uid.clone(),
                password_hash: hash_password(password),
            },
        );

        Ok(uid)
    }
}
