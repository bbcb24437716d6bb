//! # adsuite-core
//!
//! Core types for the adsuite ERP backend. This crate has no internal
//! dependencies and provides the foundation for all other crates.
//!
//! ## Modules
//!
//! - [`error`] - Error types and result aliases
//! - [`settings`] - Backend settings with TOML loading
//! - [`apps`] - Application registry and lifecycle management
//! - [`logging`] - Tracing-based logging integration

pub mod apps;
pub mod error;
pub mod logging;
pub mod settings;

// Re-export the most commonly used types at the crate root.
pub use error::{ErpError, ErpResult, ValidationError};
pub use settings::Settings;
