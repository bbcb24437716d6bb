//! # adsuite
//!
//! An ERP backend for media and advertising businesses.
//!
//! This is the meta-crate that re-exports all sub-crates for convenient
//! access. You can depend on `adsuite` to get the entire backend, or depend
//! on individual crates for finer-grained control.

/// Core types: settings, app registry, logging, and error types.
pub use adsuite_core as core;

/// Record layer: the `Model` trait, fields, values, and audit columns.
#[cfg(feature = "db")]
pub use adsuite_db as db;

/// Principals and permissions.
#[cfg(feature = "auth")]
pub use adsuite_auth as auth;

/// Admin panel registry: model registration and admin URLs.
#[cfg(feature = "admin")]
pub use adsuite_admin as admin;

/// Permission-filtered navigation menu.
#[cfg(feature = "menu")]
pub use adsuite_menu as menu;

/// Master data: units of measure and payroll records.
#[cfg(feature = "masterdata")]
pub use adsuite_masterdata as masterdata;

/// Finance: extra fee records.
#[cfg(feature = "finance")]
pub use adsuite_finance as finance;

/// Management commands (CLI).
#[cfg(feature = "cli")]
pub use adsuite_cli as cli;
