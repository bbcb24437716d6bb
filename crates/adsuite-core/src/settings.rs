//! Settings for the adsuite backend.
//!
//! This module provides the [`Settings`] struct, which holds backend
//! configuration with sensible defaults and optional TOML loading. The design
//! mirrors a Django settings module: installed apps, databases, locale, and
//! logging are all declared in one place and handed to the pieces that need
//! them.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ErpError, ErpResult};

/// Database connection configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseSettings {
    /// The database engine identifier (e.g. `adsuite.db.backends.postgresql`).
    pub engine: String,
    /// The database name (or file path for `SQLite`).
    pub name: String,
    /// The database user.
    pub user: String,
    /// The database password.
    pub password: String,
    /// The database host.
    pub host: String,
    /// The database port.
    pub port: u16,
    /// Additional engine-specific options.
    pub options: HashMap<String, String>,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            engine: "adsuite.db.backends.sqlite3".to_string(),
            name: "erp.sqlite3".to_string(),
            user: String::new(),
            password: String::new(),
            host: String::new(),
            port: 0,
            options: HashMap::new(),
        }
    }
}

/// The complete set of backend settings.
///
/// # Examples
///
/// ```
/// use adsuite_core::settings::Settings;
///
/// let settings = Settings::default();
/// assert!(settings.debug);
/// assert_eq!(settings.admin_url_prefix, "/admin");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // ── Core ─────────────────────────────────────────────────────────

    /// Whether debug mode is enabled.
    pub debug: bool,
    /// List of installed application dotted paths.
    pub installed_apps: Vec<String>,
    /// URL prefix under which the admin panel is mounted.
    pub admin_url_prefix: String,

    // ── Database ─────────────────────────────────────────────────────

    /// Database configurations, keyed by alias (e.g. "default").
    pub databases: HashMap<String, DatabaseSettings>,

    // ── Internationalization ─────────────────────────────────────────

    /// The language code (e.g. "en-us", "vi").
    pub language_code: String,
    /// The default time zone (e.g. "UTC", "Asia/Ho_Chi_Minh").
    pub time_zone: String,
    /// Whether to use timezone-aware datetimes.
    pub use_tz: bool,

    // ── Logging ──────────────────────────────────────────────────────

    /// The log level (e.g. "info", "debug", "warn").
    pub log_level: String,

    // ── Escape hatch ─────────────────────────────────────────────────

    /// Custom settings that don't fit into the above categories.
    pub extra: HashMap<String, serde_json::Value>,
}

impl Default for Settings {
    fn default() -> Self {
        let mut databases = HashMap::new();
        databases.insert("default".to_string(), DatabaseSettings::default());

        Self {
            debug: true,
            installed_apps: Vec::new(),
            admin_url_prefix: "/admin".to_string(),
            databases,
            language_code: "en-us".to_string(),
            time_zone: "UTC".to_string(),
            use_tz: true,
            log_level: "info".to_string(),
            extra: HashMap::new(),
        }
    }
}

impl Settings {
    /// Parses settings from a TOML string.
    ///
    /// Missing keys fall back to their defaults, so a settings file only
    /// needs to declare what it overrides.
    pub fn from_toml_str(content: &str) -> ErpResult<Self> {
        toml::from_str(content)
            .map_err(|e| ErpError::ConfigurationError(format!("invalid settings TOML: {e}")))
    }

    /// Loads settings from a TOML file on disk.
    pub fn from_toml_file(path: impl AsRef<Path>) -> ErpResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Returns the default database configuration, if declared.
    pub fn default_database(&self) -> Option<&DatabaseSettings> {
        self.databases.get("default")
    }

    /// Returns `true` if the given application dotted path is installed.
    pub fn is_installed(&self, app: &str) -> bool {
        self.installed_apps.iter().any(|a| a == app)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert!(settings.debug);
        assert_eq!(settings.language_code, "en-us");
        assert_eq!(settings.time_zone, "UTC");
        assert!(settings.use_tz);
        assert_eq!(settings.log_level, "info");
        assert!(settings.installed_apps.is_empty());
        assert!(settings.default_database().is_some());
    }

    #[test]
    fn test_default_database() {
        let settings = Settings::default();
        let db = settings.default_database().unwrap();
        assert_eq!(db.engine, "adsuite.db.backends.sqlite3");
        assert_eq!(db.name, "erp.sqlite3");
    }

    #[test]
    fn test_from_toml_str_overrides() {
        let settings = Settings::from_toml_str(
            r#"
            debug = false
            language_code = "vi"
            time_zone = "Asia/Ho_Chi_Minh"
            installed_apps = ["adsuite.finance", "adsuite.masterdata"]
            log_level = "debug"
            "#,
        )
        .unwrap();
        assert!(!settings.debug);
        assert_eq!(settings.language_code, "vi");
        assert_eq!(settings.time_zone, "Asia/Ho_Chi_Minh");
        assert_eq!(settings.installed_apps.len(), 2);
        assert_eq!(settings.log_level, "debug");
        // Untouched keys keep their defaults.
        assert_eq!(settings.admin_url_prefix, "/admin");
    }

    #[test]
    fn test_from_toml_str_database_table() {
        let settings = Settings::from_toml_str(
            r#"
            [databases.default]
            engine = "adsuite.db.backends.postgresql"
            name = "erp"
            host = "localhost"
            port = 5432
            "#,
        )
        .unwrap();
        let db = settings.default_database().unwrap();
        assert_eq!(db.engine, "adsuite.db.backends.postgresql");
        assert_eq!(db.port, 5432);
    }

    #[test]
    fn test_from_toml_str_invalid() {
        let result = Settings::from_toml_str("debug = [not toml");
        assert!(matches!(result, Err(ErpError::ConfigurationError(_))));
    }

    #[test]
    fn test_is_installed() {
        let mut settings = Settings::default();
        settings.installed_apps.push("adsuite.finance".to_string());
        assert!(settings.is_installed("adsuite.finance"));
        assert!(!settings.is_installed("adsuite.masterdata"));
    }
}
