//! User records.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::{
    auth::{Role, User},
    documents::RecordError,
};

/// Stored shape of a `users` document, keyed by the identity provider uid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

impl UserDocument {
    /// Convert into a user; a missing role reads as viewer.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::MissingField`] when the email is absent.
    pub fn into_user(self, id: String) -> Result<User, RecordError> {
        Ok(User {
            uid: self.uid.unwrap_or(id),
            email: self.email.ok_or(RecordError::MissingField("email"))?,
            role: self.role.unwrap_or_default(),
            status: self.status.unwrap_or_else(|| "active".to_string()),
            created_at: self.created_at,
            created_by: self.created_by,
        })
    }
}

impl From<&User> for UserDocument {
    fn from(user: &User) -> Self {
        Self {
            email: Some(user.email.clone()),
            uid: Some(user.uid.clone()),
            role: Some(user.role),
            status: Some(user.status.clone()),
            created_at: user.created_at,
            created_by: user.created_by.clone(),
            updated_at: None,
        }
    }
}
