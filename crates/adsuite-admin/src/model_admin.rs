//! Model administration configuration.
//!
//! [`ModelAdmin`] controls how a record type is displayed and edited in the
//! admin panel: list columns, fieldsets, read-only fields. Business records
//! all derive from the master configuration ([`ModelAdmin::master`]), which
//! seeds the audit columns; records attached to arbitrary targets add the
//! generic-relation fields on top
//! ([`with_generic_relation`](ModelAdmin::with_generic_relation)).

use serde::{Deserialize, Serialize};

use adsuite_db::{Model, AUDIT_FIELD_NAMES};

/// Configuration for how a record type is displayed and managed in the admin
/// panel.
///
/// # Examples
///
/// ```
/// use adsuite_admin::model_admin::ModelAdmin;
///
/// let admin = ModelAdmin::master("masterdata", "uom")
///     .verbose_name("UOM")
///     .verbose_name_plural("UOMs")
///     .append_list_display(vec!["code", "base_uom"])
///     .append_to_first_fieldset(vec!["code", "base_uom"]);
/// assert!(admin.readonly_fields.contains(&"created".to_string()));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelAdmin {
    /// The application label (e.g. "finance").
    pub app_label: String,
    /// The model name in lowercase (e.g. "extrafee").
    pub model_name: String,
    /// The human-readable verbose name.
    pub verbose_name: String,
    /// The human-readable plural verbose name.
    pub verbose_name_plural: String,
    /// Fields to display in the list view.
    pub list_display: Vec<String>,
    /// Fields searched when using the search box.
    pub search_fields: Vec<String>,
    /// Default ordering for the list view (prefix with "-" for descending).
    pub ordering: Vec<String>,
    /// Number of items per page in list view.
    pub list_per_page: usize,
    /// Fields that are read-only in forms.
    pub readonly_fields: Vec<String>,
    /// Fields to exclude from forms.
    pub exclude: Vec<String>,
    /// Fieldset groupings for the detail/change view.
    pub fieldsets: Vec<Fieldset>,
}

impl ModelAdmin {
    /// Creates a new `ModelAdmin` with default configuration.
    pub fn new(app_label: impl Into<String>, model_name: impl Into<String>) -> Self {
        let model = model_name.into();
        let verbose = model.replace('_', " ");
        let verbose_plural = format!("{verbose}s");
        Self {
            app_label: app_label.into(),
            model_name: model,
            verbose_name: verbose,
            verbose_name_plural: verbose_plural,
            list_display: vec!["__str__".to_string()],
            search_fields: Vec::new(),
            ordering: Vec::new(),
            list_per_page: 100,
            readonly_fields: Vec::new(),
            exclude: Vec::new(),
            fieldsets: Vec::new(),
        }
    }

    /// Creates the master-model configuration every business record starts
    /// from: a `name` column up front, the audit columns read-only, and a
    /// collapsed audit fieldset at the bottom.
    pub fn master(app_label: impl Into<String>, model_name: impl Into<String>) -> Self {
        let mut admin = Self::new(app_label, model_name);
        admin.list_display = vec!["name".to_string()];
        admin.readonly_fields = AUDIT_FIELD_NAMES.iter().map(ToString::to_string).collect();
        admin.fieldsets = vec![
            Fieldset::new(vec!["name"]),
            Fieldset::new(AUDIT_FIELD_NAMES.to_vec())
                .name("Audit")
                .classes(vec!["collapse"]),
        ];
        admin
    }

    /// Creates a `ModelAdmin` pre-filled from a record type's metadata.
    pub fn for_model<M: Model>() -> Self {
        let meta = M::meta();
        Self::new(meta.app_label, meta.model_name)
            .verbose_name(meta.verbose_name.clone())
            .verbose_name_plural(meta.verbose_name_plural.clone())
    }

    /// Creates the master-model configuration pre-filled from a record
    /// type's metadata.
    pub fn master_for<M: Model>() -> Self {
        let meta = M::meta();
        Self::master(meta.app_label, meta.model_name)
            .verbose_name(meta.verbose_name.clone())
            .verbose_name_plural(meta.verbose_name_plural.clone())
    }

    /// Adds the generic-relation columns (`content_type`, `object_id`) to the
    /// first fieldset, for records attached to arbitrary target objects.
    #[must_use]
    pub fn with_generic_relation(mut self) -> Self {
        if self.fieldsets.is_empty() {
            self.fieldsets.push(Fieldset::new(vec![]));
        }
        self.fieldsets[0]
            .fields
            .extend(["content_type".to_string(), "object_id".to_string()]);
        self
    }

    /// Sets the verbose name.
    #[must_use]
    pub fn verbose_name(mut self, name: impl Into<String>) -> Self {
        self.verbose_name = name.into();
        self
    }

    /// Sets the plural verbose name.
    #[must_use]
    pub fn verbose_name_plural(mut self, name: impl Into<String>) -> Self {
        self.verbose_name_plural = name.into();
        self
    }

    /// Sets the fields to display in the list view.
    #[must_use]
    pub fn list_display(mut self, fields: Vec<&str>) -> Self {
        self.list_display = fields.into_iter().map(String::from).collect();
        self
    }

    /// Appends fields to the list display, after whatever the base
    /// configuration put there.
    #[must_use]
    pub fn append_list_display(mut self, fields: Vec<&str>) -> Self {
        self.list_display.extend(fields.into_iter().map(String::from));
        self
    }

    /// Sets the fields to search over.
    #[must_use]
    pub fn search_fields(mut self, fields: Vec<&str>) -> Self {
        self.search_fields = fields.into_iter().map(String::from).collect();
        self
    }

    /// Sets the default ordering.
    #[must_use]
    pub fn ordering(mut self, fields: Vec<&str>) -> Self {
        self.ordering = fields.into_iter().map(String::from).collect();
        self
    }

    /// Sets the number of items per page.
    #[must_use]
    pub const fn list_per_page(mut self, count: usize) -> Self {
        self.list_per_page = count;
        self
    }

    /// Sets the read-only fields.
    #[must_use]
    pub fn readonly_fields(mut self, fields: Vec<&str>) -> Self {
        self.readonly_fields = fields.into_iter().map(String::from).collect();
        self
    }

    /// Sets the excluded fields.
    #[must_use]
    pub fn exclude(mut self, fields: Vec<&str>) -> Self {
        self.exclude = fields.into_iter().map(String::from).collect();
        self
    }

    /// Sets the fieldsets for the detail/change view.
    #[must_use]
    pub fn fieldsets(mut self, fieldsets: Vec<Fieldset>) -> Self {
        self.fieldsets = fieldsets;
        self
    }

    /// Appends fields to the first fieldset, creating it when absent.
    ///
    /// This is how record admins extend the master configuration with their
    /// own columns.
    #[must_use]
    pub fn append_to_first_fieldset(mut self, fields: Vec<&str>) -> Self {
        if self.fieldsets.is_empty() {
            self.fieldsets.push(Fieldset::new(vec![]));
        }
        self.fieldsets[0]
            .fields
            .extend(fields.into_iter().map(String::from));
        self
    }

    /// Returns the model key in `"app_label.model_name"` format.
    pub fn model_key(&self) -> String {
        format!("{}.{}", self.app_label, self.model_name)
    }
}

/// A grouping of fields in the admin detail/change view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fieldset {
    /// Optional display name for this fieldset group.
    pub name: Option<String>,
    /// The fields included in this fieldset.
    pub fields: Vec<String>,
    /// CSS classes to apply to this fieldset (e.g. `"collapse"`, `"wide"`).
    pub classes: Vec<String>,
    /// Optional description text displayed below the fieldset title.
    pub description: Option<String>,
}

impl Fieldset {
    /// Creates a new fieldset with the given fields and no title.
    pub fn new(fields: Vec<&str>) -> Self {
        Self {
            name: None,
            fields: fields.into_iter().map(String::from).collect(),
            classes: Vec::new(),
            description: None,
        }
    }

    /// Sets the fieldset title.
    #[must_use]
    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    /// Sets the CSS classes.
    #[must_use]
    pub fn classes(mut self, classes: Vec<&str>) -> Self {
        self.classes = classes.into_iter().map(String::from).collect();
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn description(mut self, desc: &str) -> Self {
        self.description = Some(desc.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::LazyLock;

    use adsuite_db::fields::{FieldDef, FieldType};
    use adsuite_db::model::ModelMeta;
    use adsuite_db::value::Value;

    struct Quota {
        id: i64,
    }

    impl Model for Quota {
        fn meta() -> &'static ModelMeta {
            static META: LazyLock<ModelMeta> = LazyLock::new(|| ModelMeta {
                app_label: "sales",
                model_name: "quota",
                db_table: "sales_quota".to_string(),
                verbose_name: "Quota".to_string(),
                verbose_name_plural: "Quotas".to_string(),
                ordering: vec![],
                fields: vec![FieldDef::new("id", FieldType::BigAutoField).primary_key()],
            });
            &META
        }

        fn pk(&self) -> Option<i64> {
            (self.id != 0).then_some(self.id)
        }

        fn field_values(&self) -> Vec<(&'static str, Value)> {
            vec![("id", Value::Int(self.id))]
        }
    }

    #[test]
    fn test_for_model_reads_meta() {
        let admin = ModelAdmin::for_model::<Quota>();
        assert_eq!(admin.model_key(), "sales.quota");
        assert_eq!(admin.verbose_name_plural, "Quotas");
        assert!(admin.readonly_fields.is_empty());
        assert_eq!(Quota { id: 3 }.pk(), Some(3));
    }

    #[test]
    fn test_master_for_reads_meta_and_audit() {
        let admin = ModelAdmin::master_for::<Quota>();
        assert_eq!(admin.model_key(), "sales.quota");
        assert_eq!(admin.verbose_name, "Quota");
        assert!(admin.readonly_fields.contains(&"created".to_string()));
    }

    #[test]
    fn test_model_admin_new_defaults() {
        let admin = ModelAdmin::new("finance", "extrafee");
        assert_eq!(admin.app_label, "finance");
        assert_eq!(admin.model_name, "extrafee");
        assert_eq!(admin.verbose_name, "extrafee");
        assert_eq!(admin.verbose_name_plural, "extrafees");
        assert_eq!(admin.list_display, vec!["__str__"]);
        assert_eq!(admin.list_per_page, 100);
        assert!(admin.fieldsets.is_empty());
    }

    #[test]
    fn test_model_admin_model_key() {
        let admin = ModelAdmin::new("masterdata", "uom");
        assert_eq!(admin.model_key(), "masterdata.uom");
    }

    #[test]
    fn test_master_seeds_audit_columns() {
        let admin = ModelAdmin::master("masterdata", "payroll");
        assert_eq!(admin.list_display, vec!["name"]);
        assert_eq!(
            admin.readonly_fields,
            vec!["created", "modified", "creator", "last_modified_by"]
        );
        assert_eq!(admin.fieldsets.len(), 2);
        assert_eq!(admin.fieldsets[1].name, Some("Audit".to_string()));
        assert_eq!(admin.fieldsets[1].classes, vec!["collapse"]);
    }

    #[test]
    fn test_with_generic_relation_extends_first_fieldset() {
        let admin = ModelAdmin::master("masterdata", "payroll").with_generic_relation();
        assert_eq!(
            admin.fieldsets[0].fields,
            vec!["name", "content_type", "object_id"]
        );
    }

    #[test]
    fn test_with_generic_relation_on_bare_admin() {
        let admin = ModelAdmin::new("masterdata", "payroll").with_generic_relation();
        assert_eq!(admin.fieldsets.len(), 1);
        assert_eq!(admin.fieldsets[0].fields, vec!["content_type", "object_id"]);
    }

    #[test]
    fn test_append_to_first_fieldset() {
        let admin = ModelAdmin::master("masterdata", "payroll")
            .append_to_first_fieldset(vec!["is_active", "effective_date"]);
        assert_eq!(
            admin.fieldsets[0].fields,
            vec!["name", "is_active", "effective_date"]
        );
    }

    #[test]
    fn test_append_list_display() {
        let admin = ModelAdmin::master("masterdata", "payroll")
            .append_list_display(vec!["effective_date", "allowance"]);
        assert_eq!(admin.list_display, vec!["name", "effective_date", "allowance"]);
    }

    #[test]
    fn test_builder_chain() {
        let admin = ModelAdmin::new("finance", "extrafee")
            .verbose_name("Extra Fee")
            .verbose_name_plural("Extra Fees")
            .list_display(vec!["unit_price", "quantity", "total_amount"])
            .search_fields(vec!["product"])
            .ordering(vec!["-created"])
            .list_per_page(50)
            .exclude(vec!["internal_note"]);
        assert_eq!(admin.verbose_name, "Extra Fee");
        assert_eq!(admin.verbose_name_plural, "Extra Fees");
        assert_eq!(admin.list_display.len(), 3);
        assert_eq!(admin.ordering, vec!["-created"]);
        assert_eq!(admin.list_per_page, 50);
        assert_eq!(admin.exclude, vec!["internal_note"]);
    }

    #[test]
    fn test_fieldset_builder() {
        let fs = Fieldset::new(vec!["a", "b"])
            .name("Basics")
            .classes(vec!["wide"])
            .description("Main fields");
        assert_eq!(fs.name, Some("Basics".to_string()));
        assert_eq!(fs.classes, vec!["wide"]);
        assert_eq!(fs.description, Some("Main fields".to_string()));
    }

    #[test]
    fn test_verbose_name_with_underscore() {
        let admin = ModelAdmin::new("masterdata", "pay_grade");
        assert_eq!(admin.verbose_name, "pay grade");
        assert_eq!(admin.verbose_name_plural, "pay grades");
    }

    #[test]
    fn test_serialization() {
        let admin = ModelAdmin::master("masterdata", "uom").list_per_page(25);
        let json = serde_json::to_string(&admin).unwrap();
        assert!(json.contains("\"app_label\":\"masterdata\""));
        assert!(json.contains("\"list_per_page\":25"));
    }
}
