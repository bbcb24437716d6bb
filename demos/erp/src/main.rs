//! # adsuite ERP demo
//!
//! A working ERP backend wiring the adsuite crates together:
//!
//! - **Apps**: the finance and masterdata applications
//! - **Admin**: model registrations with master/generic-relation configs
//! - **Menu**: the permission-filtered navigation sidebar
//! - **CLI**: management commands, including the `initialuom` seed
//!
//! ## Running
//!
//! ```bash
//! # Act as the management utility:
//! cargo run --package erp-demo -- initialuom CREATIVE
//!
//! # Or run the guided demonstration:
//! cargo run --package erp-demo
//! ```

mod settings;

use adsuite_admin::site::AdminSite;
use adsuite_auth::user::User;
use adsuite_cli::command::CommandRegistry;
use adsuite_cli::commands::register_builtin_commands;
use adsuite_core::apps::AppRegistry;
use adsuite_core::logging::setup_logging;
use adsuite_finance::apps::FinanceConfig;
use adsuite_finance::extrafee::{ExtraFee, ExtraFeeStore};
use adsuite_masterdata::apps::MasterdataConfig;
use adsuite_masterdata::payroll::{Payroll, PayrollStore};
use adsuite_masterdata::uom::UomStore;
use adsuite_menu::items::{AppList, Menu, MenuContext, MenuEntry, MenuItem, ModelList};
use rust_decimal::Decimal;

use settings::{erp_settings, load_settings_from_toml};

fn main() {
    // Load settings - try TOML first, fall back to programmatic defaults
    let settings = if std::path::Path::new("erp.toml").exists() {
        load_settings_from_toml("erp.toml")
    } else {
        erp_settings()
    };
    setup_logging(&settings);
    tracing::info!(
        "ERP configured: debug={}, apps={:?}",
        settings.debug,
        settings.installed_apps
    );

    // Install the applications and let them finish initialization.
    let mut apps = AppRegistry::new();
    apps.register(Box::new(FinanceConfig));
    apps.register(Box::new(MasterdataConfig));
    apps.populate();

    // Register every model with the admin site.
    let mut site = AdminSite::new("admin");
    adsuite_finance::apps::register_admin(&mut site);
    adsuite_masterdata::apps::register_admin(&mut site);
    tracing::info!("Admin site holds {} models", site.model_count());

    // The stores the backend works against.
    let uoms = UomStore::new();
    let payrolls = PayrollStore::new();
    let fees = ExtraFeeStore::new();

    let mut registry = CommandRegistry::new();
    register_builtin_commands(&mut registry, &uoms);

    let rt = tokio::runtime::Runtime::new().expect("tokio runtime");

    // With CLI arguments, act as the management utility; otherwise walk
    // through a demonstration of each component.
    if std::env::args().len() > 1 {
        let matches = registry.build_cli().get_matches();
        if let Err(e) = rt.block_on(registry.execute(&matches, &settings)) {
            tracing::error!("Command failed: {e}");
            std::process::exit(1);
        }
        return;
    }

    demonstrate_cli(&rt, &registry, &settings, &uoms);
    demonstrate_menu(&site, &apps);
    demonstrate_records(&payrolls, &fees);

    tracing::info!("ERP demo complete!");
}

/// Runs the seed command the way the CLI would and shows the result.
fn demonstrate_cli(
    rt: &tokio::runtime::Runtime,
    registry: &CommandRegistry,
    settings: &adsuite_core::Settings,
    uoms: &UomStore,
) {
    tracing::info!("--- Management Commands ---");
    for name in registry.list_commands() {
        if let Some(cmd) = registry.get(name) {
            tracing::info!("  {} - {}", name, cmd.help());
        }
    }

    let matches = registry
        .build_cli()
        .try_get_matches_from(["adsuite", "initialuom", "CREATIVE"])
        .expect("seed arguments");
    match rt.block_on(registry.execute(&matches, settings)) {
        Ok(()) => tracing::info!("Seeded {} units of measure", uoms.count()),
        Err(e) => tracing::warn!("Seed failed: {e}"),
    }

    if let Ok(word) = uoms.get_by_code("UOM_WORD") {
        tracing::info!("  UOM_WORD = {:?} (id {})", word.name, word.id);
    }
}

/// Builds the sidebar menu for two principals and prints the trees.
fn demonstrate_menu(site: &AdminSite, apps: &AppRegistry) {
    tracing::info!("\n--- Navigation Menu ---");

    let admin = User::superuser("admin");
    let mut clerk = User::new("clerk");
    clerk
        .user_permissions
        .push("masterdata.view_uom".to_string());

    for user in [&admin, &clerk] {
        let ctx = MenuContext::new(site, apps, user);
        let mut menu = Menu::new()
            .child(MenuItem::new("Dashboard", "/admin/"))
            .child(AppList::new("Applications"))
            .child(ModelList::new("Master Data", vec!["masterdata.*"]));
        menu.init_with_context(&ctx);

        tracing::info!("Menu for {}:", user.username);
        for entry in &menu.children {
            if entry.is_empty() && !matches!(entry, MenuEntry::Item(_)) {
                tracing::info!("  {} (hidden: empty)", entry.title());
                continue;
            }
            tracing::info!("  {}", entry.title());
            if let MenuEntry::AppList(list) = entry {
                for app in &list.children {
                    tracing::info!("    {} -> {}", app.title, app.url);
                    for model in &app.children {
                        tracing::info!("      {} -> {}", model.title, model.url);
                    }
                }
            }
        }
    }
}

/// Creates a payroll allowance and an extra fee to show the record stores.
fn demonstrate_records(payrolls: &PayrollStore, fees: &ExtraFeeStore) {
    tracing::info!("\n--- Business Records ---");

    let mut payroll = Payroll::new("Content writer allowance", "hr.employee", 42);
    payroll.allowance = Decimal::new(1_500_000, 0);
    let payroll = payrolls.insert(payroll);
    tracing::info!(
        "Payroll #{} for {}: {}",
        payroll.id,
        payroll.content_object(),
        payroll.allowance
    );

    let mut fee = ExtraFee::new(11);
    fee.unit_price = Decimal::new(250_000, 0);
    fee.quantity = Some(2.0);
    fee.total_amount = Decimal::new(500_000, 0);
    let fee = fees.insert(fee);
    tracing::info!(
        "ExtraFee #{} on task {}: total {}",
        fee.id,
        fee.processing_task_id,
        fee.total_amount
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wiring_registers_everything() {
        let mut apps = AppRegistry::new();
        apps.register(Box::new(FinanceConfig));
        apps.register(Box::new(MasterdataConfig));
        apps.populate();
        assert_eq!(apps.len(), 2);

        let mut site = AdminSite::new("admin");
        adsuite_finance::apps::register_admin(&mut site);
        adsuite_masterdata::apps::register_admin(&mut site);
        assert_eq!(site.model_count(), 3);
    }

    #[test]
    fn test_demo_menu_for_superuser() {
        let mut apps = AppRegistry::new();
        apps.register(Box::new(FinanceConfig));
        apps.register(Box::new(MasterdataConfig));

        let mut site = AdminSite::new("admin");
        adsuite_finance::apps::register_admin(&mut site);
        adsuite_masterdata::apps::register_admin(&mut site);

        let admin = User::superuser("admin");
        let ctx = MenuContext::new(&site, &apps, &admin);
        let mut list = AppList::new("Applications");
        list.init_with_context(&ctx);

        let titles: Vec<&str> = list.children.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["Finance", "Master Data"]);
    }
}
