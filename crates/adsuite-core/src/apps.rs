//! Application registry for the adsuite backend.
//!
//! Each business domain (finance, masterdata, ...) is packaged as an
//! application. The [`AppConfig`] trait describes one installed application
//! and [`AppRegistry`] manages their lifecycle. The navigation menu reads
//! application display names from this registry when grouping models.

use std::collections::HashMap;

/// Configuration for an installed application.
///
/// Implement this trait for each application that participates in the
/// backend lifecycle. The [`ready`](AppConfig::ready) method is called after
/// all applications have been loaded; use it for one-time initialization
/// such as admin registrations.
///
/// # Examples
///
/// ```
/// use adsuite_core::apps::AppConfig;
///
/// struct FinanceConfig;
///
/// impl AppConfig for FinanceConfig {
///     fn name(&self) -> &str { "adsuite.finance" }
///     fn verbose_name(&self) -> &str { "Finance" }
/// }
///
/// let config = FinanceConfig;
/// assert_eq!(config.label(), "finance");
/// ```
pub trait AppConfig: Send + Sync {
    /// Returns the full dotted path of the application.
    fn name(&self) -> &str;

    /// Returns a short label derived from the name (the last component).
    ///
    /// For example, `"adsuite.masterdata"` yields `"masterdata"`.
    fn label(&self) -> &str {
        self.name().rsplit('.').next().unwrap_or_else(|| self.name())
    }

    /// Returns a human-readable name for the application.
    fn verbose_name(&self) -> &str {
        self.name()
    }

    /// Called after all apps have been loaded.
    ///
    /// Override this to perform one-time initialization such as registering
    /// models with the admin site or seeding lookup caches.
    fn ready(&self) {}
}

/// The central registry of installed applications.
///
/// Applications are registered via [`register`](AppRegistry::register) and
/// then [`populate`](AppRegistry::populate) is called once to finalize
/// initialization (calling each app's `ready()` method).
pub struct AppRegistry {
    apps: Vec<Box<dyn AppConfig>>,
    app_labels: HashMap<String, usize>,
    ready: bool,
}

impl Default for AppRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl AppRegistry {
    /// Creates a new, empty `AppRegistry`.
    pub fn new() -> Self {
        Self {
            apps: Vec::new(),
            app_labels: HashMap::new(),
            ready: false,
        }
    }

    /// Registers an application.
    ///
    /// # Panics
    ///
    /// Panics if an application with the same label is already registered,
    /// or if [`populate`](AppRegistry::populate) has already been called.
    pub fn register(&mut self, app: Box<dyn AppConfig>) {
        assert!(
            !self.ready,
            "Cannot register apps after the registry has been populated"
        );

        let label = app.label().to_string();
        assert!(
            !self.app_labels.contains_key(&label),
            "Application with label '{label}' is already registered"
        );

        let index = self.apps.len();
        self.app_labels.insert(label, index);
        self.apps.push(app);
    }

    /// Returns the configuration for the app with the given label, if registered.
    pub fn get_app_config(&self, label: &str) -> Option<&dyn AppConfig> {
        self.app_labels
            .get(label)
            .map(|&idx| self.apps[idx].as_ref())
    }

    /// Returns a slice of all registered app configurations, in registration order.
    pub fn get_app_configs(&self) -> &[Box<dyn AppConfig>] {
        &self.apps
    }

    /// Returns the display name for an application label.
    ///
    /// Falls back to the label itself when the application is not registered
    /// (a model may be registered with the admin site under a label that has
    /// no app config).
    pub fn verbose_name(&self, label: &str) -> String {
        self.get_app_config(label)
            .map_or_else(|| label.to_string(), |app| app.verbose_name().to_string())
    }

    /// Returns the number of registered applications.
    pub fn len(&self) -> usize {
        self.apps.len()
    }

    /// Returns `true` if no applications are registered.
    pub fn is_empty(&self) -> bool {
        self.apps.is_empty()
    }

    /// Finalizes the registry by calling `ready()` on each app in registration order.
    ///
    /// # Panics
    ///
    /// Panics if `populate` has already been called.
    pub fn populate(&mut self) {
        assert!(!self.ready, "AppRegistry has already been populated");

        for app in &self.apps {
            app.ready();
        }

        self.ready = true;
    }

    /// Returns `true` if the registry has been populated.
    pub const fn is_ready(&self) -> bool {
        self.ready
    }
}
