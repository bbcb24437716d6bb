//! Menu items for the admin navigation sidebar.
//!
//! [`MenuItem`] is the base presentation entry. [`AppList`] and [`ModelList`]
//! auto-populate their children from the admin site's model registry,
//! filtered by glob include/exclude patterns over dotted `app.model` names
//! and by the requesting principal's view-or-change permission. [`Menu`]
//! holds the top-level entries and is materialized fresh against a
//! [`MenuContext`] on every admin page render; nothing is cached between
//! requests.

use std::collections::BTreeMap;

use glob::Pattern;
use serde::{Deserialize, Serialize};

use adsuite_admin::model_admin::ModelAdmin;
use adsuite_admin::site::AdminSite;
use adsuite_auth::permissions::has_view_or_change_perm;
use adsuite_auth::user::User;
use adsuite_core::apps::AppRegistry;

use crate::constants::{DEFAULT_MENU_ICON, MENU_EXTRA_DETAILS};

/// Everything a menu entry needs to materialize itself for one request:
/// the model registry, the application registry (display names), and the
/// requesting principal.
#[derive(Clone, Copy)]
pub struct MenuContext<'a> {
    /// The admin site holding the registered record types.
    pub site: &'a AdminSite,
    /// The application registry, consulted for display names.
    pub apps: &'a AppRegistry,
    /// The principal whose permissions gate visibility.
    pub user: &'a User,
}

impl<'a> MenuContext<'a> {
    /// Creates a new context.
    pub const fn new(site: &'a AdminSite, apps: &'a AppRegistry, user: &'a User) -> Self {
        Self { site, apps, user }
    }
}

/// A single navigable entry in the admin sidebar.
///
/// Children are owned exclusively by their parent, so the structure is a
/// tree by construction. Leaf items have an empty child list.
///
/// # Examples
///
/// ```
/// use adsuite_menu::items::MenuItem;
///
/// let item = MenuItem::new("Dashboard", "/admin/")
///     .icon("fa-home")
///     .child(MenuItem::new("Reports", "/admin/reports/"));
/// assert!(item.is_selected("/admin/reports/"));
/// assert!(!item.is_empty());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    /// The menu item title.
    pub title: String,
    /// The menu item URL.
    pub url: String,
    /// An optional icon identifier (e.g. "fa-coins").
    pub icon: Option<String>,
    /// CSS classes added to the rendered item.
    pub css_classes: Vec<String>,
    /// Optional tooltip text.
    pub description: Option<String>,
    /// Disabled items are displayed but not clickable.
    pub enabled: bool,
    /// Child menu items.
    pub children: Vec<MenuItem>,
}

impl Default for MenuItem {
    fn default() -> Self {
        Self {
            title: "Untitled menu item".to_string(),
            url: "#".to_string(),
            icon: None,
            css_classes: Vec::new(),
            description: None,
            enabled: true,
            children: Vec::new(),
        }
    }
}

impl MenuItem {
    /// Creates a new menu item with a title and URL.
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            ..Self::default()
        }
    }

    /// Sets the icon.
    #[must_use]
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Adds a CSS class.
    #[must_use]
    pub fn css_class(mut self, class: impl Into<String>) -> Self {
        self.css_classes.push(class.into());
        self
    }

    /// Sets the tooltip text.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets whether the item is clickable.
    #[must_use]
    pub const fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Appends a child item.
    #[must_use]
    pub fn child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// Returns `true` if this item is active: its URL equals the current
    /// path, or any descendant is selected.
    pub fn is_selected(&self, current_path: &str) -> bool {
        self.url == current_path || self.children.iter().any(|c| c.is_selected(current_path))
    }

    /// Returns `true` if the menu item is empty.
    ///
    /// Always `false` for plain items; [`AppList`] and [`ModelList`] override
    /// this based on their built child list.
    pub const fn is_empty(&self) -> bool {
        false
    }
}

/// Returns `true` if the dotted model name matches any of the patterns.
///
/// Patterns use glob-style wildcards (`masterdata.*`). A pattern that fails
/// to parse matches nothing.
fn matches_any(model_key: &str, patterns: &[String]) -> bool {
    patterns
        .iter()
        .any(|p| Pattern::new(p).is_ok_and(|pat| pat.matches(model_key)))
}

/// Returns the registered models visible to the context's principal, in
/// registration order.
///
/// A model is visible iff its dotted name matches an inclusion pattern (or
/// the inclusion list is empty), matches no exclusion pattern, and the
/// principal holds the view or change permission on it.
fn visible_models<'a>(
    ctx: &MenuContext<'a>,
    include: &[String],
    exclude: &[String],
) -> Vec<&'a ModelAdmin> {
    ctx.site
        .model_admins()
        .iter()
        .filter(|admin| {
            let key = admin.model_key();
            (include.is_empty() || matches_any(&key, include))
                && !matches_any(&key, exclude)
                && has_view_or_change_perm(ctx.user, &admin.app_label, &admin.model_name)
        })
        .collect()
}

/// A menu item that lists installed applications and their models.
///
/// Visible models are grouped by owning application: one child per
/// application (sorted by label), each containing one grandchild per model
/// (sorted by plural display name). Application titles and icons come from
/// the registry, overridden by [`MENU_EXTRA_DETAILS`].
///
/// If no include/exclude patterns are given, all registered models are
/// candidates; permission filtering always applies.
#[derive(Debug, Clone, Default)]
pub struct AppList {
    /// The menu item title.
    pub title: String,
    /// Inclusion patterns over dotted `app.model` names; empty means all.
    pub models: Vec<String>,
    /// Exclusion patterns over dotted `app.model` names.
    pub exclude: Vec<String>,
    /// The built child list, one item per application.
    pub children: Vec<MenuItem>,
}

impl AppList {
    /// Creates a new application list item with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Sets the inclusion patterns.
    #[must_use]
    pub fn models(mut self, patterns: Vec<&str>) -> Self {
        self.models = patterns.into_iter().map(String::from).collect();
        self
    }

    /// Sets the exclusion patterns.
    #[must_use]
    pub fn exclude(mut self, patterns: Vec<&str>) -> Self {
        self.exclude = patterns.into_iter().map(String::from).collect();
        self
    }

    /// Builds the child list from the models visible to the context's
    /// principal.
    pub fn init_with_context(&mut self, ctx: &MenuContext<'_>) {
        struct AppGroup {
            title: String,
            url: String,
            models: Vec<(String, String)>,
        }

        let mut apps: BTreeMap<String, AppGroup> = BTreeMap::new();
        for admin in visible_models(ctx, &self.models, &self.exclude) {
            let group = apps
                .entry(admin.app_label.clone())
                .or_insert_with(|| AppGroup {
                    title: ctx.apps.verbose_name(&admin.app_label),
                    url: ctx.site.app_list_url(&admin.app_label),
                    models: Vec::new(),
                });
            group.models.push((
                admin.verbose_name_plural.clone(),
                ctx.site.changelist_url(&admin.app_label, &admin.model_name),
            ));
        }

        for (app_label, mut group) in apps {
            let mut title = group.title;
            let mut icon = DEFAULT_MENU_ICON;
            if let Some(detail) = MENU_EXTRA_DETAILS.get(app_label.as_str()) {
                if let Some(t) = detail.title {
                    title = t.to_string();
                }
                if let Some(i) = detail.icon {
                    icon = i;
                }
            }

            let mut item = MenuItem::new(title, group.url).icon(icon);
            group.models.sort_by(|a, b| a.0.cmp(&b.0));
            for (model_title, model_url) in group.models {
                item.children.push(MenuItem::new(model_title, model_url));
            }
            self.children.push(item);
        }
    }

    /// Returns `true` if the built child list is empty.
    ///
    /// Unlike [`MenuItem::is_empty`], this reflects the post-filtering
    /// result: an application list over zero visible models is empty.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns `true` if any built child is selected.
    pub fn is_selected(&self, current_path: &str) -> bool {
        self.children.iter().any(|c| c.is_selected(current_path))
    }
}

/// A menu item that flattens a set of models into direct children.
///
/// Applies the same visibility filtering as [`AppList`] but skips the
/// application grouping level: every visible model becomes a direct child,
/// in registration order (no explicit sort).
#[derive(Debug, Clone, Default)]
pub struct ModelList {
    /// The menu item title.
    pub title: String,
    /// Inclusion patterns over dotted `app.model` names; empty means all.
    pub models: Vec<String>,
    /// Exclusion patterns over dotted `app.model` names.
    pub exclude: Vec<String>,
    /// The built child list, one item per visible model.
    pub children: Vec<MenuItem>,
}

impl ModelList {
    /// Creates a new model list item with the given title and inclusion
    /// patterns.
    pub fn new(title: impl Into<String>, models: Vec<&str>) -> Self {
        Self {
            title: title.into(),
            models: models.into_iter().map(String::from).collect(),
            ..Self::default()
        }
    }

    /// Sets the exclusion patterns.
    #[must_use]
    pub fn exclude(mut self, patterns: Vec<&str>) -> Self {
        self.exclude = patterns.into_iter().map(String::from).collect();
        self
    }

    /// Builds the child list from the models visible to the context's
    /// principal.
    pub fn init_with_context(&mut self, ctx: &MenuContext<'_>) {
        for admin in visible_models(ctx, &self.models, &self.exclude) {
            self.children.push(MenuItem::new(
                admin.verbose_name_plural.clone(),
                ctx.site.changelist_url(&admin.app_label, &admin.model_name),
            ));
        }
    }

    /// Returns `true` if the built child list is empty.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns `true` if any built child is selected.
    pub fn is_selected(&self, current_path: &str) -> bool {
        self.children.iter().any(|c| c.is_selected(current_path))
    }
}

/// One top-level entry of a [`Menu`].
#[derive(Debug, Clone)]
pub enum MenuEntry {
    /// A plain, hand-configured item.
    Item(MenuItem),
    /// An auto-populated application list.
    AppList(AppList),
    /// An auto-populated flat model list.
    ModelList(ModelList),
}

impl MenuEntry {
    /// Returns the entry title.
    pub fn title(&self) -> &str {
        match self {
            Self::Item(item) => &item.title,
            Self::AppList(list) => &list.title,
            Self::ModelList(list) => &list.title,
        }
    }

    /// Materializes the entry against the request context.
    ///
    /// Plain items have nothing to build; list entries populate their
    /// children.
    pub fn init_with_context(&mut self, ctx: &MenuContext<'_>) {
        match self {
            Self::Item(_) => {}
            Self::AppList(list) => list.init_with_context(ctx),
            Self::ModelList(list) => list.init_with_context(ctx),
        }
    }

    /// Returns `true` if the entry or any descendant is selected.
    pub fn is_selected(&self, current_path: &str) -> bool {
        match self {
            Self::Item(item) => item.is_selected(current_path),
            Self::AppList(list) => list.is_selected(current_path),
            Self::ModelList(list) => list.is_selected(current_path),
        }
    }

    /// Returns `true` if the entry has nothing to show.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Item(item) => item.is_empty(),
            Self::AppList(list) => list.is_empty(),
            Self::ModelList(list) => list.is_empty(),
        }
    }
}

impl From<MenuItem> for MenuEntry {
    fn from(item: MenuItem) -> Self {
        Self::Item(item)
    }
}

impl From<AppList> for MenuEntry {
    fn from(list: AppList) -> Self {
        Self::AppList(list)
    }
}

impl From<ModelList> for MenuEntry {
    fn from(list: ModelList) -> Self {
        Self::ModelList(list)
    }
}

/// The admin sidebar menu: an ordered list of top-level entries.
///
/// A fresh `Menu` is built and materialized for every admin page render and
/// discarded with the response.
///
/// # Examples
///
/// ```
/// use adsuite_menu::items::{AppList, Menu, MenuItem};
///
/// let menu = Menu::new()
///     .child(MenuItem::new("Dashboard", "/admin/"))
///     .child(AppList::new("Applications").exclude(vec!["auth.*"]));
/// assert_eq!(menu.children.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Menu {
    /// The top-level entries, in display order.
    pub children: Vec<MenuEntry>,
}

impl Menu {
    /// Creates an empty menu.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a top-level entry.
    #[must_use]
    pub fn child(mut self, entry: impl Into<MenuEntry>) -> Self {
        self.children.push(entry.into());
        self
    }

    /// Materializes every entry against the request context.
    pub fn init_with_context(&mut self, ctx: &MenuContext<'_>) {
        for entry in &mut self.children {
            entry.init_with_context(ctx);
        }
    }
}
