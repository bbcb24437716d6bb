//! Permission checks gating admin visibility.
//!
//! Permissions use the format `"app_label.codename"` (e.g.
//! `"masterdata.view_uom"`). Users hold direct permissions and inherit group
//! permissions; superusers pass every check and inactive users none. The menu
//! component asks one question of this module: does the principal hold the
//! `view` or `change` permission for a model?

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::user::User;

/// A single permission, identified by a codename and the model it applies to.
///
/// Permissions are typically auto-generated per model (add, change, delete,
/// view) but can also be created manually.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Permission {
    /// The machine-readable identifier (e.g. "`view_uom`").
    pub codename: String,
    /// The human-readable name (e.g. "Can view UOM").
    pub name: String,
    /// The application label the permission belongs to (e.g. "masterdata").
    pub app_label: String,
}

impl Permission {
    /// Creates a new permission.
    pub fn new(
        codename: impl Into<String>,
        name: impl Into<String>,
        app_label: impl Into<String>,
    ) -> Self {
        Self {
            codename: codename.into(),
            name: name.into(),
            app_label: app_label.into(),
        }
    }

    /// Returns the full permission string in `"app_label.codename"` format.
    pub fn full_codename(&self) -> String {
        format!("{}.{}", self.app_label, self.codename)
    }
}

/// A group of users with shared permissions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    /// The group name.
    pub name: String,
    /// Permissions assigned to this group.
    pub permissions: Vec<Permission>,
}

impl Group {
    /// Creates a new group with the given name and no permissions.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            permissions: Vec::new(),
        }
    }

    /// Adds a permission to this group.
    pub fn add_permission(&mut self, permission: Permission) {
        if !self.permissions.contains(&permission) {
            self.permissions.push(permission);
        }
    }

    /// Returns all permission strings in `"app_label.codename"` format.
    pub fn get_permissions(&self) -> HashSet<String> {
        self.permissions
            .iter()
            .map(Permission::full_codename)
            .collect()
    }
}

/// Checks if a user has a specific permission.
///
/// The permission string should be in `"app_label.codename"` format.
/// Superusers automatically have all permissions. Inactive users have none.
pub fn has_perm(user: &User, perm: &str) -> bool {
    if !user.is_active {
        return false;
    }
    if user.is_superuser {
        return true;
    }
    get_all_permissions(user).contains(perm)
}

/// Checks if a user holds the `view` or `change` permission for a model.
///
/// This is the visibility rule the navigation menu applies: a model is shown
/// when the principal may at least read it.
pub fn has_view_or_change_perm(user: &User, app_label: &str, model_name: &str) -> bool {
    has_perm(user, &format!("{app_label}.view_{model_name}"))
        || has_perm(user, &format!("{app_label}.change_{model_name}"))
}

/// Checks if a user has any permissions for the given application label.
pub fn has_module_perms(user: &User, app_label: &str) -> bool {
    if !user.is_active {
        return false;
    }
    if user.is_superuser {
        return true;
    }
    let prefix = format!("{app_label}.");
    get_all_permissions(user)
        .iter()
        .any(|p| p.starts_with(&prefix))
}

/// Returns all directly-assigned permissions for a user.
pub fn get_all_permissions(user: &User) -> HashSet<String> {
    user.user_permissions.iter().cloned().collect()
}

/// Returns all permissions for a user including permissions from the given
/// groups, resolving the user's group memberships by name.
pub fn get_all_permissions_with_groups(user: &User, groups: &[Group]) -> HashSet<String> {
    let mut perms = get_all_permissions(user);

    for group in groups {
        if user.groups.contains(&group.name) {
            perms.extend(group.get_permissions());
        }
    }

    perms
}

/// Generates default permissions for a model (add, change, delete, view).
pub fn generate_default_permissions(app_label: &str, model_name: &str) -> Vec<Permission> {
    ["add", "change", "delete", "view"]
        .into_iter()
        .map(|action| {
            Permission::new(
                format!("{action}_{model_name}"),
                format!("Can {action} {model_name}"),
                app_label,
            )
        })
        .collect()
}
