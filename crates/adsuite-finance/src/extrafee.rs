//! Extra fees.
//!
//! An [`ExtraFee`] is a surcharge billed against a processing task,
//! optionally tied to a product and a fee type. Amounts are plain decimal
//! columns; no derivation happens here, the admin forms write them as
//! entered.

use std::sync::{Arc, LazyLock, RwLock};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use adsuite_core::error::{ErpError, ErpResult};
use adsuite_db::audit::{audit_field_defs, AuditFields};
use adsuite_db::fields::{foreign_key, FieldDef, FieldType, OnDelete};
use adsuite_db::model::{Model, ModelMeta};
use adsuite_db::value::Value;

/// An extra fee billed against a processing task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtraFee {
    /// Primary key. Zero means unsaved.
    pub id: i64,
    /// The price per unit.
    pub unit_price: Decimal,
    /// An optional percentage applied on top of the unit price.
    pub unit_percentage: Option<f64>,
    /// The billed quantity.
    pub quantity: Option<f64>,
    /// The amount per unit, as entered.
    pub unit_amount: Decimal,
    /// The total amount, as entered.
    pub total_amount: Decimal,
    /// The fee type this fee is classified under, if any.
    pub extra_fee_type_id: Option<i64>,
    /// The processing task this fee is billed against.
    pub processing_task_id: i64,
    /// The product the fee relates to, if any.
    pub product_id: Option<i64>,
    /// Audit columns.
    pub audit: AuditFields,
}

impl ExtraFee {
    /// Creates a new unsaved fee against a processing task, with the column
    /// defaults (zero amounts, quantity one).
    pub fn new(processing_task_id: i64) -> Self {
        Self {
            id: 0,
            unit_price: Decimal::ZERO,
            unit_percentage: Some(0.0),
            quantity: Some(1.0),
            unit_amount: Decimal::ZERO,
            total_amount: Decimal::ZERO,
            extra_fee_type_id: None,
            processing_task_id,
            product_id: None,
            audit: AuditFields::new(),
        }
    }
}

impl Model for ExtraFee {
    fn meta() -> &'static ModelMeta {
        static META: LazyLock<ModelMeta> = LazyLock::new(|| ModelMeta {
            app_label: "finance",
            model_name: "extrafee",
            db_table: "finance_extra_fee".to_string(),
            verbose_name: "Extra Fee".to_string(),
            verbose_name_plural: "Extra Fees".to_string(),
            ordering: vec!["-created".to_string()],
            fields: [
                vec![
                    FieldDef::new("id", FieldType::BigAutoField).primary_key(),
                    FieldDef::new(
                        "unit_price",
                        FieldType::DecimalField {
                            max_digits: 20,
                            decimal_places: 2,
                        },
                    )
                    .default(Decimal::ZERO)
                    .verbose_name("Unit Price"),
                    FieldDef::new("unit_percentage", FieldType::FloatField)
                        .nullable()
                        .blank()
                        .default(0.0)
                        .verbose_name("Percentage"),
                    FieldDef::new("quantity", FieldType::FloatField)
                        .nullable()
                        .blank()
                        .default(1.0)
                        .verbose_name("Quantity"),
                    FieldDef::new(
                        "unit_amount",
                        FieldType::DecimalField {
                            max_digits: 20,
                            decimal_places: 2,
                        },
                    )
                    .default(Decimal::ZERO)
                    .verbose_name("Unit Amount"),
                    FieldDef::new(
                        "total_amount",
                        FieldType::DecimalField {
                            max_digits: 20,
                            decimal_places: 2,
                        },
                    )
                    .default(Decimal::ZERO)
                    .verbose_name("Total Amount"),
                    foreign_key("extra_fee_type", "finance.extrafeetype", OnDelete::Cascade)
                        .nullable()
                        .blank()
                        .verbose_name("Extra Fee Type"),
                    foreign_key("processing_task", "tasks.processingtask", OnDelete::Cascade)
                        .verbose_name("Processing Task"),
                    foreign_key("product", "catalog.product", OnDelete::Cascade)
                        .nullable()
                        .blank()
                        .verbose_name("Product"),
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
            ("unit_price", Value::Decimal(self.unit_price)),
            ("unit_percentage", Value::from(self.unit_percentage)),
            ("quantity", Value::from(self.quantity)),
            ("unit_amount", Value::Decimal(self.unit_amount)),
            ("total_amount", Value::Decimal(self.total_amount)),
            ("extra_fee_type", Value::from(self.extra_fee_type_id)),
            ("processing_task", Value::Int(self.processing_task_id)),
            ("product", Value::from(self.product_id)),
            ("created", Value::DateTime(self.audit.created)),
            ("modified", Value::DateTime(self.audit.modified)),
        ]
    }
}

/// Rows and the id counter behind an [`ExtraFeeStore`].
#[derive(Debug, Default)]
struct ExtraFeeTable {
    rows: Vec<ExtraFee>,
    next_id: i64,
}

/// Thread-safe in-memory store for extra fees.
#[derive(Debug, Clone, Default)]
pub struct ExtraFeeStore {
    table: Arc<RwLock<ExtraFeeTable>>,
}

impl ExtraFeeStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a new record, assigning its id. Returns the stored record.
    pub fn insert(&self, mut fee: ExtraFee) -> ExtraFee {
        let mut table = self.table.write().unwrap();
        table.next_id += 1;
        fee.id = table.next_id;
        table.rows.push(fee.clone());
        fee
    }

    /// Returns the record with the given id.
    pub fn get(&self, id: i64) -> ErpResult<ExtraFee> {
        let table = self.table.read().unwrap();
        table
            .rows
            .iter()
            .find(|f| f.id == id)
            .cloned()
            .ok_or_else(|| ErpError::DoesNotExist(format!("ExtraFee with id {id}")))
    }

    /// Writes back a modified record, refreshing its modification timestamp.
    pub fn save(&self, mut fee: ExtraFee) -> ErpResult<ExtraFee> {
        let mut table = self.table.write().unwrap();
        let row = table
            .rows
            .iter_mut()
            .find(|f| f.id == fee.id)
            .ok_or_else(|| ErpError::DoesNotExist(format!("ExtraFee with id {}", fee.id)))?;
        fee.audit.touch(None);
        *row = fee.clone();
        Ok(fee)
    }

    /// Returns all fees billed against the given processing task.
    pub fn for_task(&self, processing_task_id: i64) -> Vec<ExtraFee> {
        let table = self.table.read().unwrap();
        table
            .rows
            .iter()
            .filter(|f| f.processing_task_id == processing_task_id)
            .cloned()
            .collect()
    }

    /// Returns all records, in insertion order.
    pub fn all(&self) -> Vec<ExtraFee> {
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

    #[test]
    fn test_model_meta() {
        assert_eq!(ExtraFee::table_name(), "finance_extra_fee");
        assert_eq!(ExtraFee::model_key(), "finance.extrafee");
        assert_eq!(ExtraFee::meta().verbose_name_plural, "Extra Fees");
        assert!(ExtraFee::meta().get_field("product").unwrap().null);
        assert!(!ExtraFee::meta().get_field("processing_task").unwrap().null);
    }

    #[test]
    fn test_new_defaults() {
        let fee = ExtraFee::new(11);
        assert!(fee.pk().is_none());
        assert_eq!(fee.unit_price, Decimal::ZERO);
        assert_eq!(fee.quantity, Some(1.0));
        assert_eq!(fee.unit_percentage, Some(0.0));
        assert_eq!(fee.processing_task_id, 11);
    }

    #[test]
    fn test_store_insert_and_get() {
        let store = ExtraFeeStore::new();
        let stored = store.insert(ExtraFee::new(11));
        assert_eq!(stored.id, 1);
        assert_eq!(store.get(1).unwrap().processing_task_id, 11);
        assert!(store.get(9).unwrap_err().is_not_found());
    }

    #[test]
    fn test_store_save_updates_amounts() {
        let store = ExtraFeeStore::new();
        let mut fee = store.insert(ExtraFee::new(11));
        fee.unit_price = Decimal::new(25_000, 0);
        fee.total_amount = Decimal::new(50_000, 0);
        store.save(fee).unwrap();
        let stored = store.get(1).unwrap();
        assert_eq!(stored.unit_price, Decimal::new(25_000, 0));
        assert_eq!(stored.total_amount, Decimal::new(50_000, 0));
    }

    #[test]
    fn test_store_for_task() {
        let store = ExtraFeeStore::new();
        store.insert(ExtraFee::new(11));
        store.insert(ExtraFee::new(11));
        store.insert(ExtraFee::new(12));
        assert_eq!(store.for_task(11).len(), 2);
        assert_eq!(store.count(), 3);
    }

    #[test]
    fn test_field_values_carry_nullables() {
        let fee = ExtraFee::new(11);
        assert_eq!(fee.get_value("product"), Some(Value::Null));
        assert_eq!(fee.get_value("quantity"), Some(Value::Float(1.0)));
    }
}
