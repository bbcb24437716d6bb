//! Application configuration and admin registrations for master data.

use adsuite_admin::model_admin::ModelAdmin;
use adsuite_admin::site::AdminSite;
use adsuite_core::apps::AppConfig;

use crate::payroll::Payroll;
use crate::uom::Uom;

/// The masterdata application.
pub struct MasterdataConfig;

impl AppConfig for MasterdataConfig {
    fn name(&self) -> &str {
        "adsuite.masterdata"
    }

    fn verbose_name(&self) -> &str {
        "Master Data"
    }
}

/// Returns the admin configuration for units of measure.
pub fn uom_admin() -> ModelAdmin {
    ModelAdmin::master_for::<Uom>()
        .append_to_first_fieldset(vec!["code", "base_uom"])
        .append_list_display(vec!["code", "base_uom"])
        .search_fields(vec!["code", "name"])
        .ordering(vec!["code"])
}

/// Returns the admin configuration for payroll records.
///
/// Starts from the master configuration, adds the generic-relation columns,
/// and appends the payroll-specific fields to the form and the list view.
pub fn payroll_admin() -> ModelAdmin {
    ModelAdmin::master_for::<Payroll>()
        .with_generic_relation()
        .append_to_first_fieldset(vec![
            "is_active",
            "effective_date",
            "expiry_date",
            "allowance",
        ])
        .append_list_display(vec![
            "content_object",
            "effective_date",
            "expiry_date",
            "allowance",
        ])
}

/// Registers the masterdata models with the admin site.
pub fn register_admin(site: &mut AdminSite) {
    site.register(uom_admin());
    site.register(payroll_admin());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_config() {
        let config = MasterdataConfig;
        assert_eq!(config.name(), "adsuite.masterdata");
        assert_eq!(config.label(), "masterdata");
        assert_eq!(config.verbose_name(), "Master Data");
    }

    #[test]
    fn test_uom_admin() {
        let admin = uom_admin();
        assert_eq!(admin.model_key(), "masterdata.uom");
        assert_eq!(admin.verbose_name_plural, "UOMs");
        assert_eq!(admin.fieldsets[0].fields, vec!["name", "code", "base_uom"]);
        assert_eq!(admin.ordering, vec!["code"]);
    }

    #[test]
    fn test_payroll_admin_extends_master() {
        let admin = payroll_admin();
        assert_eq!(admin.model_key(), "masterdata.payroll");
        // Master name column, generic relation, then the payroll fields.
        assert_eq!(
            admin.fieldsets[0].fields,
            vec![
                "name",
                "content_type",
                "object_id",
                "is_active",
                "effective_date",
                "expiry_date",
                "allowance"
            ]
        );
        assert_eq!(
            admin.list_display,
            vec![
                "name",
                "content_object",
                "effective_date",
                "expiry_date",
                "allowance"
            ]
        );
        assert!(admin.readonly_fields.contains(&"creator".to_string()));
    }

    #[test]
    fn test_register_admin() {
        let mut site = AdminSite::new("admin");
        register_admin(&mut site);
        assert!(site.is_registered("masterdata.uom"));
        assert!(site.is_registered("masterdata.payroll"));
        assert_eq!(site.model_count(), 2);
    }
}
