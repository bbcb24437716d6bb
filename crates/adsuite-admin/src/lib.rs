//! # adsuite-admin
//!
//! Admin panel registry for the adsuite ERP backend: record types are
//! registered with display configurations, and the navigation menu discovers
//! them through the [`AdminSite`](site::AdminSite).
//!
//! ## Modules
//!
//! - [`model_admin`] - Per-record display configuration
//! - [`site`] - The central registry and admin URL builder

pub mod model_admin;
pub mod site;

pub use model_admin::{Fieldset, ModelAdmin};
pub use site::AdminSite;
