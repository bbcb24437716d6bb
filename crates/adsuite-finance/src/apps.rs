//! Application configuration and admin registrations for finance.

use adsuite_admin::model_admin::{Fieldset, ModelAdmin};
use adsuite_admin::site::AdminSite;
use adsuite_core::apps::AppConfig;
use adsuite_db::AUDIT_FIELD_NAMES;

use crate::extrafee::ExtraFee;

/// The finance application.
pub struct FinanceConfig;

impl AppConfig for FinanceConfig {
    fn name(&self) -> &str {
        "adsuite.finance"
    }

    fn verbose_name(&self) -> &str {
        "Finance"
    }
}

/// Returns the admin configuration for extra fees.
///
/// Extra fees have no display name column, so this does not start from the
/// master configuration; it declares its own fieldsets and keeps the audit
/// columns read-only.
pub fn extrafee_admin() -> ModelAdmin {
    ModelAdmin::for_model::<ExtraFee>()
        .list_display(vec![
            "processing_task",
            "product",
            "unit_price",
            "quantity",
            "total_amount",
        ])
        .readonly_fields(AUDIT_FIELD_NAMES.to_vec())
        .ordering(vec!["-created"])
        .fieldsets(vec![
            Fieldset::new(vec![
                "processing_task",
                "product",
                "extra_fee_type",
                "unit_price",
                "unit_percentage",
                "quantity",
                "unit_amount",
                "total_amount",
            ]),
            Fieldset::new(AUDIT_FIELD_NAMES.to_vec())
                .name("Audit")
                .classes(vec!["collapse"]),
        ])
}

/// Registers the finance models with the admin site.
pub fn register_admin(site: &mut AdminSite) {
    site.register(extrafee_admin());
}
