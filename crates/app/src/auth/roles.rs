//! Roles and permissions.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::auth::AuthError;

/// Admin-surface role of a user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Full access, including user management
    Admin,

    /// Content editing
    Editor,

    /// Read-only dashboard access
    #[default]
    Viewer,
}

/// A single capability granted by a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    ViewDashboard,
    EditContent,
    ManageUsers,
    ViewAnalytics,
    DeleteContent,
    ManageSettings,
}

impl Permission {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Permission::ViewDashboard => "view_dashboard",
            Permission::EditContent => "edit_content",
            Permission::ManageUsers => "manage_users",
            Permission::ViewAnalytics => "view_analytics",
            Permission::DeleteContent => "delete_content",
            Permission::ManageSettings => "manage_settings",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::Editor, Role::Viewer];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Editor => "editor",
            Role::Viewer => "viewer",
        }
    }

    /// Permissions granted to the role.
    #[must_use]
    pub const fn permissions(self) -> &'static [Permission] {
        match self {
            Role::Admin => &[
                Permission::ViewDashboard,
                Permission::EditContent,
                Permission::ManageUsers,
                Permission::ViewAnalytics,
                Permission::DeleteContent,
                Permission::ManageSettings,
            ],
            Role::Editor => &[
                Permission::ViewDashboard,
                Permission::EditContent,
                Permission::ViewAnalytics,
            ],
            Role::Viewer => &[Permission::ViewDashboard],
        }
    }

    #[must_use]
    pub fn has_permission(self, permission: Permission) -> bool {
        self.permissions().contains(&permission)
    }

    /// Whether a holder of this role may open a page gated on `required`.
    ///
    /// Admins reach everything and viewer pages are open to every role.
    #[must_use]
    pub const fn can_access(self, required: Role) -> bool {
        matches!(
            (self, required),
            (Role::Admin, _) | (_, Role::Viewer) | (Role::Editor, Role::Editor)
        )
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = AuthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| AuthError::UnknownRole(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_holds_every_permission() {
        for permission in Role::Admin.permissions() {
            assert!(Role::Admin.has_permission(*permission));
        }

        assert_eq!(Role::Admin.permissions().len(), 6);
    }

    #[test]
    fn editor_cannot_delete_or_manage_users() {
        assert!(Role::Editor.has_permission(Permission::EditContent));
        assert!(Role::Editor.has_permission(Permission::ViewAnalytics));
        assert!(!Role::Editor.has_permission(Permission::DeleteContent));
        assert!(!Role::Editor.has_permission(Permission::ManageUsers));
    }

    #[test]
    fn viewer_only_sees_the_dashboard() {
        assert_eq!(Role::Viewer.permissions(), [Permission::ViewDashboard]);
    }

    #[test]
    fn page_access_follows_role_rank() {
        assert!(Role::Admin.can_access(Role::Admin));
        assert!(Role::Admin.can_access(Role::Editor));
        assert!(Role::Editor.can_access(Role::Editor));
        assert!(Role::Editor.can_access(Role::Viewer));
        assert!(Role::Viewer.can_access(Role::Viewer));

        assert!(!Role::Editor.can_access(Role::Admin));
        assert!(!Role::Viewer.can_access(Role::Editor));
    }

    #[test]
    fn roles_parse_from_stored_names() {
        assert!(matches!("editor".parse::<Role>(), Ok(Role::Editor)));
        assert!(matches!(
            "owner".parse::<Role>(),
            Err(AuthError::UnknownRole(role)) if role == "owner"
        ));
    }
}
