//! # adsuite-menu
//!
//! The navigation menu for the adsuite admin panel. Menu entries are built
//! fresh on every page render: auto-populated entries enumerate the admin
//! site's model registry, filter by glob include/exclude patterns and by the
//! requesting principal's permissions, and produce a tree of
//! [`MenuItem`](items::MenuItem).
//!
//! ## Modules
//!
//! - [`items`] - `MenuItem`, `AppList`, `ModelList`, `Menu`
//! - [`constants`] - Per-application display overrides

pub mod constants;
pub mod items;

pub use constants::{MenuDetail, DEFAULT_MENU_ICON, MENU_EXTRA_DETAILS};
pub use items::{AppList, Menu, MenuContext, MenuEntry, MenuItem, ModelList};
