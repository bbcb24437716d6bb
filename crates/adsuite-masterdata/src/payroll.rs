//! Payroll records.
//!
//! A [`Payroll`] grants an allowance to an arbitrary target object (an
//! employee, a department) through a generic relation: the target's model
//! key plus its id. The grant is bounded by optional effective and expiry
//! dates.

use std::sync::{Arc, LazyLock, RwLock};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use adsuite_core::error::{ErpError, ErpResult};
use adsuite_db::audit::{audit_field_defs, AuditFields};
use adsuite_db::fields::{FieldDef, FieldType};
use adsuite_db::model::{Model, ModelMeta};
use adsuite_db::value::Value;

/// A payroll allowance attached to a target object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payroll {
    /// Primary key. Zero means unsaved.
    pub id: i64,
    /// The record display name.
    pub name: String,
    /// The model key of the target object (e.g. "hr.employee").
    pub content_type: String,
    /// The id of the target object.
    pub object_id: i64,
    /// Whether this payroll is currently in force.
    pub is_active: bool,
    /// The first day the allowance applies, if bounded.
    pub effective_date: Option<NaiveDate>,
    /// The last day the allowance applies, if bounded.
    pub expiry_date: Option<NaiveDate>,
    /// The allowance amount.
    pub allowance: Decimal,
    /// Audit columns.
    pub audit: AuditFields,
}

impl Payroll {
    /// Creates a new unsaved payroll record attached to a target object.
    pub fn new(name: impl Into<String>, content_type: impl Into<String>, object_id: i64) -> Self {
        Self {
            id: 0,
            name: name.into(),
            content_type: content_type.into(),
            object_id,
            is_active: true,
            effective_date: None,
            expiry_date: None,
            allowance: Decimal::ZERO,
            audit: AuditFields::new(),
        }
    }

    /// Returns a display string for the generic-relation target
    /// (e.g. `"hr.employee #42"`).
    pub fn content_object(&self) -> String {
        format!("{} #{}", self.content_type, self.object_id)
    }

    /// Returns `true` if the payroll is active and in force on the given day.
    pub fn in_force(&self, on: NaiveDate) -> bool {
        self.is_active
            && self.effective_date.map_or(true, |d| d <= on)
            && self.expiry_date.map_or(true, |d| d >= on)
    }
}

impl Model for Payroll {
    fn meta() -> &'static ModelMeta {
        static META: LazyLock<ModelMeta> = LazyLock::new(|| ModelMeta {
            app_label: "masterdata",
            model_name: "payroll",
            db_table: "masterdata_payroll".to_string(),
            verbose_name: "Payroll".to_string(),
            verbose_name_plural: "Payrolls".to_string(),
            ordering: vec!["-created".to_string()],
            fields: [
                vec![
                    FieldDef::new("id", FieldType::BigAutoField).primary_key(),
                    FieldDef::new("name", FieldType::CharField)
                        .max_length(255)
                        .verbose_name("Name"),
                    FieldDef::new("content_type", FieldType::CharField)
                        .max_length(128)
                        .verbose_name("Content Type"),
                    FieldDef::new("object_id", FieldType::BigIntegerField)
                        .verbose_name("Object Id"),
                    FieldDef::new("is_active", FieldType::BooleanField)
                        .default(true)
                        .verbose_name("Active"),
                    FieldDef::new("effective_date", FieldType::DateField)
                        .nullable()
                        .blank()
                        .verbose_name("Effective Date"),
                    FieldDef::new("expiry_date", FieldType::DateField)
                        .nullable()
                        .blank()
                        .verbose_name("Expiry Date"),
                    FieldDef::new(
                        "allowance",
                        FieldType::DecimalField {
                            max_digits: 20,
                            decimal_places: 2,
                        },
                    )
                    .default(Decimal::ZERO)
                    .verbose_name("Allowance"),
                ],
                audit_field_defs(),
            ]
            .concat(),
        });
        &META
    }

    fn pk(&self) -> Option<i64> {
        (self.id != 0).then_some(self.id)
    }

    fn field_values(&self) -> Vec<(&'static str, Value)> {
        vec![
            ("id", Value::Int(self.id)),
            ("name", Value::String(self.name.clone())),
            ("content_type", Value::String(self.content_type.clone())),
            ("object_id", Value::Int(self.object_id)),
            ("is_active", Value::Bool(self.is_active)),
            ("effective_date", Value::from(self.effective_date)),
            ("expiry_date", Value::from(self.expiry_date)),
            ("allowance", Value::Decimal(self.allowance)),
            ("created", Value::DateTime(self.audit.created)),
            ("modified", Value::DateTime(self.audit.modified)),
        ]
    }
}

/// Rows and the id counter behind a [`PayrollStore`].
#[derive(Debug, Default)]
struct PayrollTable {
    rows: Vec<Payroll>,
    next_id: i64,
}

/// Thread-safe in-memory store for payroll records.
#[derive(Debug, Clone, Default)]
pub struct PayrollStore {
    table: Arc<RwLock<PayrollTable>>,
}

impl PayrollStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a new record, assigning its id. Returns the stored record.
    pub fn insert(&self, mut payroll: Payroll) -> Payroll {
        let mut table = self.table.write().unwrap();
        table.next_id += 1;
        payroll.id = table.next_id;
        table.rows.push(payroll.clone());
        payroll
    }

    /// Returns the record with the given id.
    pub fn get(&self, id: i64) -> ErpResult<Payroll> {
        let table = self.table.read().unwrap();
        table
            .rows
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| ErpError::DoesNotExist(format!("Payroll with id {id}")))
    }

    /// Writes back a modified record, refreshing its modification timestamp.
    pub fn save(&self, mut payroll: Payroll) -> ErpResult<Payroll> {
        let mut table = self.table.write().unwrap();
        let row = table
            .rows
            .iter_mut()
            .find(|p| p.id == payroll.id)
            .ok_or_else(|| ErpError::DoesNotExist(format!("Payroll with id {}", payroll.id)))?;
        payroll.audit.touch(None);
        *row = payroll.clone();
        Ok(payroll)
    }

    /// Returns all records attached to the given target object.
    pub fn for_object(&self, content_type: &str, object_id: i64) -> Vec<Payroll> {
        let table = self.table.read().unwrap();
        table
            .rows
            .iter()
            .filter(|p| p.content_type == content_type && p.object_id == object_id)
            .cloned()
            .collect()
    }

    /// Returns all records, in insertion order.
    pub fn all(&self) -> Vec<Payroll> {
        self.table.read().unwrap().rows.clone()
    }

    /// Returns the number of stored records.
    pub fn count(&self) -> usize {
        self.table.read().unwrap().rows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_model_meta() {
        assert_eq!(Payroll::table_name(), "masterdata_payroll");
        assert_eq!(Payroll::model_key(), "masterdata.payroll");
        let allowance = Payroll::meta().get_field("allowance").unwrap();
        assert_eq!(
            allowance.field_type,
            FieldType::DecimalField {
                max_digits: 20,
                decimal_places: 2
            }
        );
    }

    #[test]
    fn test_content_object_display() {
        let payroll = Payroll::new("Lunch allowance", "hr.employee", 42);
        assert_eq!(payroll.content_object(), "hr.employee #42");
    }

    #[test]
    fn test_in_force_unbounded() {
        let payroll = Payroll::new("Lunch allowance", "hr.employee", 42);
        assert!(payroll.in_force(date(2023, 6, 1)));
    }

    #[test]
    fn test_in_force_window() {
        let mut payroll = Payroll::new("Lunch allowance", "hr.employee", 42);
        payroll.effective_date = Some(date(2023, 1, 1));
        payroll.expiry_date = Some(date(2023, 12, 31));
        assert!(payroll.in_force(date(2023, 6, 1)));
        assert!(!payroll.in_force(date(2024, 1, 1)));
        assert!(!payroll.in_force(date(2022, 12, 31)));
    }

    #[test]
    fn test_in_force_inactive() {
        let mut payroll = Payroll::new("Lunch allowance", "hr.employee", 42);
        payroll.is_active = false;
        assert!(!payroll.in_force(date(2023, 6, 1)));
    }

    #[test]
    fn test_store_insert_and_get() {
        let store = PayrollStore::new();
        let stored = store.insert(Payroll::new("Lunch allowance", "hr.employee", 42));
        assert_eq!(stored.id, 1);
        assert_eq!(store.get(1).unwrap().name, "Lunch allowance");
        assert!(store.get(2).unwrap_err().is_not_found());
    }

    #[test]
    fn test_store_save() {
        let store = PayrollStore::new();
        let mut stored = store.insert(Payroll::new("Lunch allowance", "hr.employee", 42));
        stored.allowance = Decimal::new(150_000, 0);
        store.save(stored).unwrap();
        assert_eq!(store.get(1).unwrap().allowance, Decimal::new(150_000, 0));
    }

    #[test]
    fn test_store_for_object() {
        let store = PayrollStore::new();
        store.insert(Payroll::new("Lunch", "hr.employee", 42));
        store.insert(Payroll::new("Phone", "hr.employee", 42));
        store.insert(Payroll::new("Lunch", "hr.employee", 7));
        assert_eq!(store.for_object("hr.employee", 42).len(), 2);
        assert_eq!(store.count(), 3);
    }
}
