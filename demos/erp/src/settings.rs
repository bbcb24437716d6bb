//! Settings for the ERP demo backend.

use adsuite_core::settings::Settings;

/// Returns the programmatic default settings for the demo.
pub fn erp_settings() -> Settings {
    let mut settings = Settings::default();
    settings.installed_apps = vec![
        "adsuite.finance".to_string(),
        "adsuite.masterdata".to_string(),
    ];
    settings.language_code = "vi".to_string();
    settings.time_zone = "Asia/Ho_Chi_Minh".to_string();
    settings
}

/// Loads settings from a TOML file, falling back to the programmatic
/// defaults when the file cannot be read or parsed.
pub fn load_settings_from_toml(path: &str) -> Settings {
    Settings::from_toml_file(path).unwrap_or_else(|e| {
        tracing::warn!("Failed to load {path}: {e}; using defaults");
        erp_settings()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_erp_settings() {
        let settings = erp_settings();
        assert!(settings.is_installed("adsuite.finance"));
        assert!(settings.is_installed("adsuite.masterdata"));
        assert_eq!(settings.language_code, "vi");
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let settings = load_settings_from_toml("does-not-exist.toml");
        assert!(settings.is_installed("adsuite.finance"));
    }
}
