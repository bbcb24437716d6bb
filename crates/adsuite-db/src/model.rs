//! Model trait and metadata for persisted business records.
//!
//! The [`Model`] trait is implemented by every record type (UOM, Payroll,
//! ExtraFee). It exposes static metadata through [`ModelMeta`] and per-record
//! field values; stores and the admin panel work against this surface rather
//! than concrete structs.

use crate::fields::FieldDef;
use crate::value::Value;

/// Metadata describing a record type: its owning application, display names,
/// table, ordering, and field definitions.
///
/// This captures the equivalent of a Django model's `class Meta`.
#[derive(Debug)]
pub struct ModelMeta {
    /// The owning application label (e.g. "masterdata").
    pub app_label: &'static str,
    /// The model name in lowercase (e.g. "uom").
    pub model_name: &'static str,
    /// The database table name.
    pub db_table: String,
    /// The human-readable singular name.
    pub verbose_name: String,
    /// The human-readable plural name.
    pub verbose_name_plural: String,
    /// Default ordering field names (prefix with "-" for descending).
    pub ordering: Vec<String>,
    /// Field definitions, in declaration order.
    pub fields: Vec<FieldDef>,
}

impl ModelMeta {
    /// Returns the model key in `"app_label.model_name"` format.
    pub fn model_key(&self) -> String {
        format!("{}.{}", self.app_label, self.model_name)
    }

    /// Returns the field definition with the given name, if declared.
    pub fn get_field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// The core trait for all persisted record types.
///
/// # Examples
///
/// ```
/// use std::sync::LazyLock;
///
/// use adsuite_db::fields::{FieldDef, FieldType};
/// use adsuite_db::model::{Model, ModelMeta};
/// use adsuite_db::value::Value;
///
/// struct Campaign {
///     id: i64,
///     name: String,
/// }
///
/// impl Model for Campaign {
///     fn meta() -> &'static ModelMeta {
///         static META: LazyLock<ModelMeta> = LazyLock::new(|| ModelMeta {
///             app_label: "sales",
///             model_name: "campaign",
///             db_table: "sales_campaign".to_string(),
///             verbose_name: "campaign".to_string(),
///             verbose_name_plural: "campaigns".to_string(),
///             ordering: vec![],
///             fields: vec![
///                 FieldDef::new("id", FieldType::BigAutoField).primary_key(),
///                 FieldDef::new("name", FieldType::CharField).max_length(100),
///             ],
///         });
///         &META
///     }
///
///     fn pk(&self) -> Option<i64> {
///         (self.id != 0).then_some(self.id)
///     }
///
///     fn field_values(&self) -> Vec<(&'static str, Value)> {
///         vec![
///             ("id", Value::Int(self.id)),
///             ("name", Value::String(self.name.clone())),
///         ]
///     }
/// }
/// ```
pub trait Model: Send + Sync + 'static {
    /// Returns the static metadata for this record type.
    fn meta() -> &'static ModelMeta;

    /// Returns the database table name.
    fn table_name() -> &'static str {
        Self::meta().db_table.as_str()
    }

    /// Returns the application label this record type belongs to.
    fn app_label() -> &'static str {
        Self::meta().app_label
    }

    /// Returns the model key in `"app_label.model_name"` format.
    fn model_key() -> String {
        Self::meta().model_key()
    }

    /// Returns the primary key, or `None` if the record is unsaved.
    fn pk(&self) -> Option<i64>;

    /// Returns all field name-value pairs for this record.
    fn field_values(&self) -> Vec<(&'static str, Value)>;

    /// Returns the value of a single field, if declared.
    fn get_value(&self, name: &str) -> Option<Value> {
        self.field_values()
            .into_iter()
            .find_map(|(n, v)| (n == name).then_some(v))
    }
}
