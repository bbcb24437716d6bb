//! Units of measure.
//!
//! A [`Uom`] is a master-data lookup record identified by a unique code.
//! Derived units (a 60-second script, a post of 300 words) reference the base
//! unit they are denominated in through an optional self-reference.

use std::sync::{Arc, LazyLock, RwLock};

use serde::{Deserialize, Serialize};

use adsuite_core::error::{ErpError, ErpResult, ValidationError};
use adsuite_db::audit::{audit_field_defs, AuditFields};
use adsuite_db::fields::{foreign_key, FieldDef, FieldType, OnDelete};
use adsuite_db::model::{Model, ModelMeta};
use adsuite_db::value::Value;

/// A unit of measure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Uom {
    /// Primary key. Zero means unsaved.
    pub id: i64,
    /// The unique machine-readable code (e.g. "`UOM_WORD`").
    pub code: String,
    /// The localized display name.
    pub name: String,
    /// The id of the base unit this unit is denominated in, if any.
    pub base_uom_id: Option<i64>,
    /// Audit columns.
    pub audit: AuditFields,
}

impl Uom {
    /// Creates a new unsaved unit of measure.
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: 0,
            code: code.into(),
            name: name.into(),
            base_uom_id: None,
            audit: AuditFields::new(),
        }
    }
}

impl Model for Uom {
    fn meta() -> &'static ModelMeta {
        static META: LazyLock<ModelMeta> = LazyLock::new(|| ModelMeta {
            app_label: "masterdata",
            model_name: "uom",
            db_table: "masterdata_uom".to_string(),
            verbose_name: "UOM".to_string(),
            verbose_name_plural: "UOMs".to_string(),
            ordering: vec!["code".to_string()],
            fields: [
                vec![
                    FieldDef::new("id", FieldType::BigAutoField).primary_key(),
                    FieldDef::new("code", FieldType::CharField)
                        .max_length(64)
                        .unique()
                        .verbose_name("Code"),
                    FieldDef::new("name", FieldType::CharField)
                        .max_length(255)
                        .verbose_name("Name"),
                    foreign_key("base_uom", "masterdata.uom", OnDelete::SetNull)
                        .nullable()
                        .blank()
                        .verbose_name("Base UOM"),
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
            ("code", Value::String(self.code.clone())),
            ("name", Value::String(self.name.clone())),
            ("base_uom", Value::from(self.base_uom_id)),
            ("created", Value::DateTime(self.audit.created)),
            ("modified", Value::DateTime(self.audit.modified)),
        ]
    }
}

/// Rows and the id counter behind a [`UomStore`].
#[derive(Debug, Default)]
struct UomTable {
    rows: Vec<Uom>,
    next_id: i64,
}

/// Thread-safe in-memory store for units of measure.
///
/// Cloning is cheap: clones share the same underlying table, so a store can
/// be handed to management commands and admin components alike.
///
/// # Examples
///
/// ```
/// use adsuite_masterdata::uom::UomStore;
///
/// let store = UomStore::new();
/// let word = store.update_or_create("UOM_WORD", "Word").unwrap();
/// assert_eq!(store.get_by_code("UOM_WORD").unwrap().id, word.id);
/// ```
#[derive(Debug, Clone, Default)]
pub struct UomStore {
    table: Arc<RwLock<UomTable>>,
}

impl UomStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the unit with the given code, or updates its name if the code
    /// already exists. Returns the stored record.
    ///
    /// This is the upsert the seed command relies on for idempotency: running
    /// it twice for the same code leaves one record with the latest name.
    pub fn update_or_create(&self, code: &str, name: &str) -> ErpResult<Uom> {
        if code.trim().is_empty() {
            return Err(ErpError::ValidationError(ValidationError::new(
                "UOM code must not be empty.",
                "required",
            )));
        }

        let mut table = self.table.write().unwrap();
        if let Some(row) = table.rows.iter_mut().find(|u| u.code == code) {
            if row.name != name {
                row.name = name.to_string();
                row.audit.touch(None);
            }
            return Ok(row.clone());
        }

        table.next_id += 1;
        let mut uom = Uom::new(code, name);
        uom.id = table.next_id;
        table.rows.push(uom.clone());
        Ok(uom)
    }

    /// Returns the unit with the given code.
    pub fn get_by_code(&self, code: &str) -> ErpResult<Uom> {
        let table = self.table.read().unwrap();
        table
            .rows
            .iter()
            .find(|u| u.code == code)
            .cloned()
            .ok_or_else(|| ErpError::DoesNotExist(format!("UOM with code '{code}'")))
    }

    /// Returns the unit with the given id.
    pub fn get(&self, id: i64) -> ErpResult<Uom> {
        let table = self.table.read().unwrap();
        table
            .rows
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or_else(|| ErpError::DoesNotExist(format!("UOM with id {id}")))
    }

    /// Writes back a modified record, refreshing its modification timestamp.
    pub fn save(&self, mut uom: Uom) -> ErpResult<Uom> {
        let mut table = self.table.write().unwrap();
        let row = table
            .rows
            .iter_mut()
            .find(|u| u.id == uom.id)
            .ok_or_else(|| ErpError::DoesNotExist(format!("UOM with id {}", uom.id)))?;
        uom.audit.touch(None);
        *row = uom.clone();
        Ok(uom)
    }

    /// Returns all units, in insertion order.
    pub fn all(&self) -> Vec<Uom> {
        self.table.read().unwrap().rows.clone()
    }

    /// Returns the number of stored units.
    pub fn count(&self) -> usize {
        self.table.read().unwrap().rows.len()
    }

    /// Removes all units.
    pub fn clear(&self) {
        let mut table = self.table.write().unwrap();
        table.rows.clear();
        table.next_id = 0;
    }
}
