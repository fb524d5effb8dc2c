//! Auth models.

use jiff::Timestamp;

use crate::auth::{AuthError, Permission, Role};

/// A registered admin-surface user.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub uid: String,
    pub email: String,
    pub role: Role,
    pub status: String,
    pub created_at: Option<Timestamp>,
    pub created_by: Option<String>,
}

/// The signed-in user on whose behalf an admin operation runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub uid: String,
    pub email: String,
    pub role: Role,
}

impl Session {
    #[must_use]
    pub fn new(uid: impl Into<String>, email: impl Into<String>, role: Role) -> Self {
        Self {
            uid: uid.into(),
            email: email.into(),
            role,
        }
    }

    /// Fails unless the session's role grants `permission`.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Forbidden`] naming the missing permission.
    pub fn require(&self, permission: Permission) -> Result<(), AuthError> {
        if self.role.has_permission(permission) {
            Ok(())
        } else {
            Err(AuthError::Forbidden(permission))
        }
    }

    /// Fails unless the session's role may open pages gated on `required`.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::RoleRequired`] naming the required role.
    pub fn require_role(&self, required: Role) -> Result<(), AuthError> {
        if self.role.can_access(required) {
            Ok(())
        } else {
            Err(AuthError::RoleRequired(required))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_checks_the_role_table() {
        let editor = Session::new("u1", "editor@petalo.cl", Role::Editor);

        assert!(editor.require(Permission::EditContent).is_ok());
        assert!(matches!(
            editor.require(Permission::DeleteContent),
            Err(AuthError::Forbidden(Permission::DeleteContent))
        ));
    }

    #[test]
    fn require_role_follows_the_role_hierarchy() {
        let editor = Session::new("u1", "editor@petalo.cl", Role::Editor);
        let admin = Session::new("u2", "admin@petalo.cl", Role::Admin);

        assert!(editor.require_role(Role::Viewer).is_ok());
        assert!(editor.require_role(Role::Editor).is_ok());
        assert!(admin.require_role(Role::Editor).is_ok());
        assert!(matches!(
            editor.require_role(Role::Admin),
            Err(AuthError::RoleRequired(Role::Admin))
        ));
    }
}
