//! Admin site registry and URL building.
//!
//! The [`AdminSite`] is the central registry where record types are
//! registered with their [`ModelAdmin`] configurations. The navigation menu
//! enumerates it to discover which models exist, and asks it for the admin
//! URLs (app index and changelist) it links to.
//!
//! Registration order is preserved: components that do not sort explicitly
//! (the flat model list in the menu) see models in the order the
//! applications registered them.

use crate::model_admin::ModelAdmin;

/// The admin site, responsible for model registration and admin URL building.
///
/// # Examples
///
/// ```
/// use adsuite_admin::model_admin::ModelAdmin;
/// use adsuite_admin::site::AdminSite;
///
/// let mut site = AdminSite::new("admin");
/// site.register(ModelAdmin::master("masterdata", "uom"));
/// assert!(site.is_registered("masterdata.uom"));
/// assert_eq!(site.changelist_url("masterdata", "uom"), "/admin/masterdata/uom/");
/// ```
pub struct AdminSite {
    /// The site name.
    name: String,
    /// The URL prefix for all admin routes.
    url_prefix: String,
    /// Registered model admin configurations, in registration order.
    registered: Vec<ModelAdmin>,
}

impl AdminSite {
    /// Creates a new admin site with the given name.
    ///
    /// The URL prefix defaults to `/admin`.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            url_prefix: "/admin".to_string(),
            registered: Vec::new(),
        }
    }

    /// Sets the URL prefix for admin routes.
    #[must_use]
    pub fn url_prefix(mut self, prefix: &str) -> Self {
        self.url_prefix = prefix.trim_end_matches('/').to_string();
        self
    }

    /// Returns the site name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the URL prefix.
    pub fn url_prefix_str(&self) -> &str {
        &self.url_prefix
    }

    /// Registers a record type with its admin configuration.
    ///
    /// Re-registering a model key replaces the previous configuration in
    /// place, keeping its position in the registration order.
    pub fn register(&mut self, admin: ModelAdmin) {
        let key = admin.model_key();
        if let Some(existing) = self.registered.iter_mut().find(|a| a.model_key() == key) {
            *existing = admin;
        } else {
            self.registered.push(admin);
        }
    }

    /// Unregisters a record type from the admin site.
    pub fn unregister(&mut self, model_key: &str) {
        self.registered.retain(|a| a.model_key() != model_key);
    }

    /// Returns the `ModelAdmin` for a registered record type, if any.
    pub fn get_model_admin(&self, model_key: &str) -> Option<&ModelAdmin> {
        self.registered.iter().find(|a| a.model_key() == model_key)
    }

    /// Returns all registered admin configurations, in registration order.
    pub fn model_admins(&self) -> &[ModelAdmin] {
        &self.registered
    }

    /// Returns all registered model keys, in registration order.
    pub fn registered_models(&self) -> Vec<String> {
        self.registered.iter().map(ModelAdmin::model_key).collect()
    }

    /// Returns the number of registered record types.
    pub fn model_count(&self) -> usize {
        self.registered.len()
    }

    /// Returns whether a record type is registered.
    pub fn is_registered(&self, model_key: &str) -> bool {
        self.get_model_admin(model_key).is_some()
    }

    /// Returns the admin URL for an application's model index page.
    pub fn app_list_url(&self, app_label: &str) -> String {
        format!("{}/{app_label}/", self.url_prefix)
    }

    /// Returns the admin URL for a model's changelist page.
    pub fn changelist_url(&self, app_label: &str, model_name: &str) -> String {
        format!("{}/{app_label}/{model_name}/", self.url_prefix)
    }
}

impl std::fmt::Debug for AdminSite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminSite")
            .field("name", &self.name)
            .field("url_prefix", &self.url_prefix)
            .field("model_count", &self.registered.len())
            .field("models", &self.registered_models().join(", "))
            .finish_non_exhaustive()
    }
}
