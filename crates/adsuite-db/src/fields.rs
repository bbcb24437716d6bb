//! Field definitions for business records.
//!
//! [`FieldDef`] and [`FieldType`] describe record fields and their column
//! mappings. The admin panel uses these to decide which columns to show and
//! which to keep read-only; schema descriptions (verbose names, uniqueness,
//! nullability) live here rather than in the record structs themselves.

use serde::{Deserialize, Serialize};

use crate::value::Value;

/// The storage type of a record field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldType {
    /// Auto-incrementing 64-bit integer primary key.
    BigAutoField,
    /// Variable-length string with a max length.
    CharField,
    /// Unlimited-length text.
    TextField,
    /// 32-bit signed integer.
    IntegerField,
    /// 64-bit signed integer.
    BigIntegerField,
    /// 64-bit floating-point number.
    FloatField,
    /// Fixed-precision decimal number.
    DecimalField {
        /// Maximum total digits.
        max_digits: u32,
        /// Digits after the decimal point.
        decimal_places: u32,
    },
    /// Boolean (true/false).
    BooleanField,
    /// Date without time.
    DateField,
    /// Date and time.
    DateTimeField,
    /// Many-to-one relationship.
    ForeignKey {
        /// The target model key (e.g. "masterdata.uom").
        to: String,
        /// Behavior when the referenced record is deleted.
        on_delete: OnDelete,
    },
}

/// Behavior when a referenced record is deleted (ON DELETE action).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OnDelete {
    /// Delete all related records.
    Cascade,
    /// Prevent deletion if related records exist.
    Protect,
    /// Set the foreign key to NULL.
    SetNull,
    /// Take no action (may cause integrity errors).
    DoNothing,
}

/// Complete definition of a record field.
///
/// Constructed manually when implementing the [`Model`](crate::model::Model)
/// trait; the builder mirrors the keyword arguments a Django field takes.
///
/// # Examples
///
/// ```
/// use adsuite_db::fields::{FieldDef, FieldType};
///
/// let code = FieldDef::new("code", FieldType::CharField)
///     .max_length(64)
///     .unique()
///     .verbose_name("Code");
/// assert!(code.unique);
/// ```
#[derive(Debug, Clone)]
pub struct FieldDef {
    /// The attribute name of this field.
    pub name: &'static str,
    /// The type of this field.
    pub field_type: FieldType,
    /// Whether this field is the primary key.
    pub primary_key: bool,
    /// Whether NULL is allowed.
    pub null: bool,
    /// Whether the field may be left blank in admin forms.
    pub blank: bool,
    /// Default value for new records.
    pub default: Option<Value>,
    /// Whether a UNIQUE constraint is applied.
    pub unique: bool,
    /// Maximum character length (for `CharField` and similar).
    pub max_length: Option<usize>,
    /// Human-readable name for the field.
    pub verbose_name: String,
    /// Whether the field is editable in admin forms.
    pub editable: bool,
}

impl FieldDef {
    /// Creates a new `FieldDef` with sensible defaults.
    ///
    /// Only the field name and type are required; everything else takes its
    /// default (non-null, no uniqueness, editable).
    pub fn new(name: &'static str, field_type: FieldType) -> Self {
        Self {
            name,
            field_type,
            primary_key: false,
            null: false,
            blank: false,
            default: None,
            unique: false,
            max_length: None,
            verbose_name: name.replace('_', " "),
            editable: true,
        }
    }

    /// Marks this field as the primary key.
    #[must_use]
    pub const fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    /// Allows NULL values.
    #[must_use]
    pub const fn nullable(mut self) -> Self {
        self.null = true;
        self
    }

    /// Allows the field to be left blank in admin forms.
    #[must_use]
    pub const fn blank(mut self) -> Self {
        self.blank = true;
        self
    }

    /// Sets the maximum character length.
    #[must_use]
    pub const fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    /// Marks this field as having a UNIQUE constraint.
    #[must_use]
    pub const fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    /// Sets the default value for this field.
    #[must_use]
    pub fn default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Sets the verbose (human-readable) name.
    #[must_use]
    pub fn verbose_name(mut self, name: impl Into<String>) -> Self {
        self.verbose_name = name.into();
        self
    }

    /// Marks this field as not editable in admin forms.
    #[must_use]
    pub const fn not_editable(mut self) -> Self {
        self.editable = false;
        self
    }

    /// Returns `true` if this field is a relational field.
    pub const fn is_relation(&self) -> bool {
        matches!(self.field_type, FieldType::ForeignKey { .. })
    }
}

/// Shorthand for a foreign-key field definition.
pub fn foreign_key(name: &'static str, to: impl Into<String>, on_delete: OnDelete) -> FieldDef {
    FieldDef::new(
        name,
        FieldType::ForeignKey {
            to: to.into(),
            on_delete,
        },
    )
}
