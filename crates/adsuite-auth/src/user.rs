//! The principal whose permissions gate what the admin panel shows.
//!
//! [`User`] carries identity fields plus the permission assignments that the
//! menu and admin components consult. Authentication itself (passwords,
//! sessions) is handled outside this backend; records here only reference
//! users by id for auditing and read their permission sets for visibility
//! checks.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An authenticated principal.
///
/// # Examples
///
/// ```
/// use adsuite_auth::user::User;
///
/// let mut user = User::new("accountant");
/// user.user_permissions.push("finance.view_extrafee".to_string());
/// assert!(user.is_active);
/// assert!(!user.is_superuser);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// The user's id.
    pub id: i64,
    /// The user's unique username.
    pub username: String,
    /// The user's first name.
    pub first_name: String,
    /// The user's last name.
    pub last_name: String,
    /// The user's email address.
    pub email: String,
    /// Whether this user account is active. Inactive accounts hold no permissions.
    pub is_active: bool,
    /// Whether this user can access the admin panel.
    pub is_staff: bool,
    /// Whether this user has all permissions (superuser).
    pub is_superuser: bool,
    /// When this user account was created.
    pub date_joined: DateTime<Utc>,
    /// Group names this user belongs to.
    pub groups: Vec<String>,
    /// Permission codenames directly assigned to this user,
    /// in `"app_label.codename"` format.
    pub user_permissions: Vec<String>,
}

impl User {
    /// Creates a new active, non-staff user with the given username.
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            id: 0,
            username: username.into(),
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            is_active: true,
            is_staff: false,
            is_superuser: false,
            date_joined: Utc::now(),
            groups: Vec::new(),
            user_permissions: Vec::new(),
        }
    }

    /// Creates a superuser (staff, all permissions).
    pub fn superuser(username: impl Into<String>) -> Self {
        let mut user = Self::new(username);
        user.is_staff = true;
        user.is_superuser = true;
        user
    }

    /// Returns the user's full name, or the username when no name is set.
    pub fn full_name(&self) -> String {
        let name = format!("{} {}", self.first_name, self.last_name);
        let name = name.trim();
        if name.is_empty() {
            self.username.clone()
        } else {
            name.to_string()
        }
    }
}
