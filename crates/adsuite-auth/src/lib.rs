//! # adsuite-auth
//!
//! Principals and permissions for the adsuite ERP backend.
//!
//! ## Modules
//!
//! - [`user`] - The [`User`](user::User) principal
//! - [`permissions`] - Permission and group checks gating admin visibility

pub mod permissions;
pub mod user;

pub use permissions::{
    generate_default_permissions, has_module_perms, has_perm, has_view_or_change_perm, Group,
    Permission,
};
pub use user::User;
