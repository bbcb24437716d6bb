//! Audit columns shared by all persisted business records.
//!
//! Every master-data and finance record carries the same four columns:
//! creation and modification timestamps plus the creating and last-modifying
//! users. [`AuditFields`] bundles them so record structs embed one field
//! instead of repeating the set.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::fields::{foreign_key, FieldDef, FieldType, OnDelete};

/// The audit column names, in the order the admin panel displays them.
pub const AUDIT_FIELD_NAMES: [&str; 4] = ["created", "modified", "creator", "last_modified_by"];

/// Returns the field definitions for the audit columns.
///
/// Record types append these to their own fields when declaring metadata, so
/// every persisted table carries the same four columns.
pub fn audit_field_defs() -> Vec<FieldDef> {
    vec![
        FieldDef::new("created", FieldType::DateTimeField).not_editable(),
        FieldDef::new("modified", FieldType::DateTimeField).not_editable(),
        foreign_key("creator", "auth.user", OnDelete::Cascade)
            .nullable()
            .blank()
            .verbose_name("Created by"),
        foreign_key("last_modified_by", "auth.user", OnDelete::Cascade)
            .nullable()
            .blank()
            .verbose_name("Last modified by"),
    ]
}

/// Auditing columns embedded in every persisted record.
///
/// `created` is set once when the record is first written; `modified` is
/// refreshed on every save via [`touch`](AuditFields::touch). The user
/// references are optional because records written by system commands (data
/// seeding) have no acting user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditFields {
    /// When the record was first created.
    pub created: DateTime<Utc>,
    /// When the record was last modified.
    pub modified: DateTime<Utc>,
    /// The id of the user who created the record, if any.
    pub creator_id: Option<i64>,
    /// The id of the user who last modified the record, if any.
    pub last_modified_by_id: Option<i64>,
}

impl AuditFields {
    /// Creates audit fields stamped with the current time and no acting user.
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            created: now,
            modified: now,
            creator_id: None,
            last_modified_by_id: None,
        }
    }

    /// Creates audit fields attributed to the given user.
    pub fn created_by(user_id: i64) -> Self {
        let mut audit = Self::new();
        audit.creator_id = Some(user_id);
        audit.last_modified_by_id = Some(user_id);
        audit
    }

    /// Refreshes the modification timestamp, optionally recording the
    /// modifying user.
    pub fn touch(&mut self, user_id: Option<i64>) {
        self.modified = Utc::now();
        if user_id.is_some() {
            self.last_modified_by_id = user_id;
        }
    }
}

impl Default for AuditFields {
    fn default() -> Self {
        Self::new()
    }
}
