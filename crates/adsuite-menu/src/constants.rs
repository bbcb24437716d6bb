//! Static display overrides for the navigation menu.
//!
//! Applications get a default icon and their registry display name unless an
//! entry here overrides them. The table is keyed by application label.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// The icon used for applications without an override entry.
pub const DEFAULT_MENU_ICON: &str = "fa-cube";

/// A display override for one application.
#[derive(Debug, Clone, Copy)]
pub struct MenuDetail {
    /// Overrides the application's display name, when set.
    pub title: Option<&'static str>,
    /// Overrides the application's icon, when set.
    pub icon: Option<&'static str>,
}

/// Per-application display overrides, keyed by application label.
pub static MENU_EXTRA_DETAILS: Lazy<HashMap<&'static str, MenuDetail>> = Lazy::new(|| {
    HashMap::from([
        (
            "finance",
            MenuDetail {
                title: Some("Finance"),
                icon: Some("fa-coins"),
            },
        ),
        (
            "masterdata",
            MenuDetail {
                title: Some("Master Data"),
                icon: Some("fa-database"),
            },
        ),
        (
            "auth",
            MenuDetail {
                title: None,
                icon: Some("fa-users"),
            },
        ),
    ])
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_overrides() {
        let detail = MENU_EXTRA_DETAILS.get("finance").unwrap();
        assert_eq!(detail.title, Some("Finance"));
        assert_eq!(detail.icon, Some("fa-coins"));
    }

    #[test]
    fn test_partial_override() {
        let detail = MENU_EXTRA_DETAILS.get("auth").unwrap();
        assert!(detail.title.is_none());
        assert_eq!(detail.icon, Some("fa-users"));
    }

    #[test]
    fn test_unknown_app_has_no_entry() {
        assert!(!MENU_EXTRA_DETAILS.contains_key("sales"));
    }
}
