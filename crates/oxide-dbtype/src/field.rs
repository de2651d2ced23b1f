//! Field and table metadata.
//!
//! These records are produced by whatever maps application types onto
//! tables and are read, never modified, by the column renderer.

use serde::{Deserialize, Serialize};

/// Width used for string columns when the field does not set one.
pub const DEFAULT_STRING_WIDTH: usize = 255;

/// Width used for UUIDs stored as strings.
pub const DEFAULT_UUID_WIDTH: usize = 48;

/// Logical SQL types a field can be persisted as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SqlType {
    /// Bounded character string.
    String,
    /// Unbounded character string.
    LongString,
    /// Boolean.
    Boolean,
    /// Date and time.
    Date,
    /// Single character.
    Char,
    /// 8-bit integer.
    Byte,
    /// Raw bytes.
    ByteArray,
    /// 16-bit integer.
    Short,
    /// 32-bit integer.
    Integer,
    /// 64-bit integer.
    Long,
    /// Single precision float.
    Float,
    /// Double precision float.
    Double,
    /// Serialized object bytes.
    Serializable,
    /// Arbitrary precision decimal.
    BigDecimal,
    /// UUID.
    Uuid,
}

impl SqlType {
    /// Returns the default width for types that carry one.
    #[must_use]
    pub const fn default_width(self) -> Option<usize> {
        match self {
            Self::String => Some(DEFAULT_STRING_WIDTH),
            Self::Uuid => Some(DEFAULT_UUID_WIDTH),
            _ => None,
        }
    }

    /// Returns whether the type is an integer type usable for generated ids.
    #[must_use]
    pub const fn is_integer(self) -> bool {
        matches!(self, Self::Byte | Self::Short | Self::Integer | Self::Long)
    }
}

/// Default value for a column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DefaultValue {
    /// No default value.
    #[default]
    None,
    /// NULL default.
    Null,
    /// Boolean default.
    Bool(bool),
    /// Integer default.
    Integer(i64),
    /// Float default.
    Float(f64),
    /// String default, quoted as a literal.
    String(String),
    /// SQL expression (e.g., "CURRENT_TIMESTAMP"), emitted verbatim.
    Expression(String),
}

/// Metadata for one persisted field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldType {
    /// Field name in the mapped type.
    pub name: String,
    /// Column name, when different from the field name.
    #[serde(default)]
    pub column_name: Option<String>,
    /// SQL type.
    pub sql_type: SqlType,
    /// Explicit width (string types only).
    #[serde(default)]
    pub width: Option<usize>,
    /// Whether the column allows NULL values.
    #[serde(default = "default_nullable")]
    pub nullable: bool,
    /// Whether the field is the table's id.
    #[serde(default)]
    pub id: bool,
    /// Whether the database generates the id.
    #[serde(default)]
    pub generated_id: bool,
    /// Sequence backing a generated id.
    #[serde(default)]
    pub generated_id_sequence: Option<String>,
    /// Whether the column has its own UNIQUE constraint.
    #[serde(default)]
    pub unique: bool,
    /// Group name for a multi-column UNIQUE constraint.
    #[serde(default)]
    pub unique_combo: Option<String>,
    /// Default value.
    #[serde(default)]
    pub default: DefaultValue,
}

const fn default_nullable() -> bool {
    true
}

impl FieldType {
    /// Creates a nullable, non-id field.
    #[must_use]
    pub fn new(name: impl Into<String>, sql_type: SqlType) -> Self {
        Self {
            name: name.into(),
            column_name: None,
            sql_type,
            width: None,
            nullable: true,
            id: false,
            generated_id: false,
            generated_id_sequence: None,
            unique: false,
            unique_combo: None,
            default: DefaultValue::None,
        }
    }

    /// Sets the column name.
    #[must_use]
    pub fn column(mut self, column_name: impl Into<String>) -> Self {
        self.column_name = Some(column_name.into());
        self
    }

    /// Sets the width.
    #[must_use]
    pub const fn width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    /// Marks the field as NOT NULL.
    #[must_use]
    pub const fn not_null(mut self) -> Self {
        self.nullable = false;
        self
    }

    /// Marks the field as the id.
    #[must_use]
    pub const fn id(mut self) -> Self {
        self.id = true;
        self
    }

    /// Marks the field as a database-generated id.
    #[must_use]
    pub const fn generated_id(mut self) -> Self {
        self.id = true;
        self.generated_id = true;
        self
    }

    /// Marks the field as an id generated from the named sequence.
    #[must_use]
    pub fn generated_id_sequence(mut self, sequence: impl Into<String>) -> Self {
        self.id = true;
        self.generated_id = true;
        self.generated_id_sequence = Some(sequence.into());
        self
    }

    /// Adds a UNIQUE constraint on this column.
    #[must_use]
    pub const fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    /// Puts this column into a multi-column UNIQUE group.
    #[must_use]
    pub fn unique_combo(mut self, group: impl Into<String>) -> Self {
        self.unique_combo = Some(group.into());
        self
    }

    /// Sets the default value.
    #[must_use]
    pub fn default(mut self, default: DefaultValue) -> Self {
        self.default = default;
        self
    }

    /// Returns the column name, falling back to the field name.
    #[must_use]
    pub fn column_name(&self) -> &str {
        self.column_name.as_deref().unwrap_or(&self.name)
    }

    /// Returns the effective width for width-carrying types.
    #[must_use]
    pub fn effective_width(&self) -> Option<usize> {
        self.width
            .filter(|w| *w > 0)
            .or_else(|| self.sql_type.default_width())
    }

    /// Returns true when the id comes from a named sequence.
    #[must_use]
    pub const fn is_generated_id_sequence(&self) -> bool {
        self.generated_id_sequence.is_some()
    }

    /// Returns true when the database generates this field's value.
    ///
    /// A named sequence implies a generated id even when the flag is unset,
    /// as it can be in hand-written schemas.
    #[must_use]
    pub const fn is_generated_id(&self) -> bool {
        self.generated_id || self.is_generated_id_sequence()
    }

    /// Returns true when the field is part of the primary key.
    #[must_use]
    pub const fn is_id(&self) -> bool {
        self.id || self.is_generated_id()
    }
}

/// A table and its ordered fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableInfo {
    /// Table name.
    pub name: String,
    /// Fields in column order.
    pub fields: Vec<FieldType>,
}

impl TableInfo {
    /// Creates a table description.
    #[must_use]
    pub fn new(name: impl Into<String>, fields: Vec<FieldType>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    /// Returns the first id field.
    #[must_use]
    pub fn id_field(&self) -> Option<&FieldType> {
        self.fields.iter().find(|f| f.is_id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_name_falls_back_to_field_name() {
        let field = FieldType::new("id", SqlType::String);
        assert_eq!(field.column_name(), "id");
        let field = field.column("user_id");
        assert_eq!(field.column_name(), "user_id");
    }

    #[test]
    fn test_effective_width() {
        assert_eq!(
            FieldType::new("s", SqlType::String).effective_width(),
            Some(255)
        );
        assert_eq!(
            FieldType::new("s", SqlType::String).width(40).effective_width(),
            Some(40)
        );
        assert_eq!(
            FieldType::new("s", SqlType::String).width(0).effective_width(),
            Some(255)
        );
        assert_eq!(FieldType::new("n", SqlType::Integer).effective_width(), None);
    }

    #[test]
    fn test_generated_id_sequence_implies_id() {
        let field = FieldType::new("gen_id", SqlType::Integer).generated_id_sequence("genId_seq");
        assert!(field.id);
        assert!(field.generated_id);
        assert!(field.is_generated_id_sequence());
    }

    #[test]
    fn test_id_field() {
        let table = TableInfo::new("foo", vec![FieldType::new("stuff", SqlType::String)]);
        assert!(table.id_field().is_none());

        let table = TableInfo::new("foo", vec![FieldType::new("id", SqlType::String).id()]);
        assert_eq!(table.id_field().map(|f| f.name.as_str()), Some("id"));
    }

    #[test]
    fn test_sequence_without_generated_flag_is_generated_id() {
        let field: FieldType = serde_json::from_str(
            r#"{"name": "id", "sql_type": "long", "generated_id_sequence": "my_seq"}"#,
        )
        .unwrap();
        assert!(!field.generated_id);
        assert!(field.is_generated_id());
        assert!(field.is_id());
    }

    #[test]
    fn test_field_from_json_defaults() {
        let field: FieldType =
            serde_json::from_str(r#"{"name": "stuff", "sql_type": "string"}"#).unwrap();
        assert!(field.nullable);
        assert!(!field.id);
        assert_eq!(field.default, DefaultValue::None);
    }
}
