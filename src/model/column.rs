//! Column-level model types

use std::fmt;

use crate::util::quote_identifier;

/// A column data type keyword.
///
/// The catalog is closed: parsing tries `ColumnType::ALL` in order and the
/// first keyword that matches wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnType {
    // numeric
    TinyInt,
    SmallInt,
    MediumInt,
    Int,
    BigInt,
    Float,
    Double,
    Decimal,
    // character
    VarChar,
    Char,
    TinyText,
    Text,
    MediumText,
    LongText,
    // temporal
    DateTime,
    Date,
    Time,
    Timestamp,
    // blob
    TinyBlob,
    Blob,
    MediumBlob,
    LongBlob,
    // binary
    Binary,
    VarBinary,
}

impl ColumnType {
    /// Every type keyword, in match order.
    pub const ALL: [ColumnType; 24] = [
        ColumnType::TinyInt,
        ColumnType::SmallInt,
        ColumnType::MediumInt,
        ColumnType::Int,
        ColumnType::BigInt,
        ColumnType::Float,
        ColumnType::Double,
        ColumnType::Decimal,
        ColumnType::VarChar,
        ColumnType::Char,
        ColumnType::TinyText,
        ColumnType::Text,
        ColumnType::MediumText,
        ColumnType::LongText,
        ColumnType::DateTime,
        ColumnType::Date,
        ColumnType::Time,
        ColumnType::Timestamp,
        ColumnType::TinyBlob,
        ColumnType::Blob,
        ColumnType::MediumBlob,
        ColumnType::LongBlob,
        ColumnType::Binary,
        ColumnType::VarBinary,
    ];

    /// The lowercase keyword text
    pub fn keyword(self) -> &'static str {
        match self {
            ColumnType::TinyInt => "tinyint",
            ColumnType::SmallInt => "smallint",
            ColumnType::MediumInt => "mediumint",
            ColumnType::Int => "int",
            ColumnType::BigInt => "bigint",
            ColumnType::Float => "float",
            ColumnType::Double => "double",
            ColumnType::Decimal => "decimal",
            ColumnType::VarChar => "varchar",
            ColumnType::Char => "char",
            ColumnType::TinyText => "tinytext",
            ColumnType::Text => "text",
            ColumnType::MediumText => "mediumtext",
            ColumnType::LongText => "longtext",
            ColumnType::DateTime => "datetime",
            ColumnType::Date => "date",
            ColumnType::Time => "time",
            ColumnType::Timestamp => "timestamp",
            ColumnType::TinyBlob => "tinyblob",
            ColumnType::Blob => "blob",
            ColumnType::MediumBlob => "mediumblob",
            ColumnType::LongBlob => "longblob",
            ColumnType::Binary => "binary",
            ColumnType::VarBinary => "varbinary",
        }
    }

    /// Look up a type by keyword, ignoring ASCII case.
    pub fn from_keyword(word: &str) -> Option<ColumnType> {
        ColumnType::ALL
            .into_iter()
            .find(|ty| ty.keyword().eq_ignore_ascii_case(word))
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A column modifier keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    NotNull,
    Null,
    AutoIncrement,
    PrimaryKey,
    Unique,
    Binary,
    Unsigned,
}

impl Attribute {
    /// Every attribute, in match order. `NotNull` precedes `Null`.
    pub const ALL: [Attribute; 7] = [
        Attribute::NotNull,
        Attribute::Null,
        Attribute::AutoIncrement,
        Attribute::PrimaryKey,
        Attribute::Unique,
        Attribute::Binary,
        Attribute::Unsigned,
    ];

    /// The lowercase keyword text; multi-word attributes are space separated
    pub fn keyword(self) -> &'static str {
        match self {
            Attribute::NotNull => "not null",
            Attribute::Null => "null",
            Attribute::AutoIncrement => "auto_increment",
            Attribute::PrimaryKey => "primary key",
            Attribute::Unique => "unique",
            Attribute::Binary => "binary",
            Attribute::Unsigned => "unsigned",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.keyword().to_uppercase())
    }
}

/// The value of a `DEFAULT` (or column `COMMENT`) clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefaultValue {
    /// `DEFAULT NULL`
    Null,
    /// `DEFAULT 'text'`: the text between the quotes, escapes left as written
    Literal(String),
    /// `DEFAULT 0`, `DEFAULT -1`, `DEFAULT 1.5`
    Numeric(String),
    /// The `CURRENT_TIMESTAMP [ON UPDATE CURRENT_TIMESTAMP]` chain, tokens as
    /// written joined by single spaces
    Expression(String),
}

impl DefaultValue {
    /// The clause value as plain text (`NULL` for the null marker).
    pub fn as_text(&self) -> &str {
        match self {
            DefaultValue::Null => "NULL",
            DefaultValue::Literal(s) | DefaultValue::Numeric(s) | DefaultValue::Expression(s) => s,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, DefaultValue::Null)
    }
}

impl fmt::Display for DefaultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefaultValue::Null => f.write_str("NULL"),
            DefaultValue::Literal(s) => write!(f, "'{}'", s),
            DefaultValue::Numeric(s) | DefaultValue::Expression(s) => f.write_str(s),
        }
    }
}

/// A parsed column type with its optional `(length[, scale])` parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeSpec {
    pub kind: ColumnType,
    /// Length or precision digits
    pub length: Option<String>,
    /// Scale digits, only present together with `length`
    pub scale: Option<String>,
}

impl fmt::Display for TypeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind.keyword())?;
        match (&self.length, &self.scale) {
            (Some(length), Some(scale)) => write!(f, "({},{})", length, scale),
            (Some(length), None) => write!(f, "({})", length),
            _ => Ok(()),
        }
    }
}

/// A column definition from the field list of a `CREATE TABLE` statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Column name, backticks stripped
    pub name: String,
    pub data_type: ColumnType,
    pub length: Option<String>,
    pub scale: Option<String>,
    /// Modifiers in source order, repeats preserved
    pub attributes: Vec<Attribute>,
    pub default: Option<DefaultValue>,
    /// Inline `COMMENT '...'` text as written, empty when absent
    pub comment: String,
}

impl Column {
    /// Create a column with only a name and a type
    pub fn new(name: impl Into<String>, data_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            data_type,
            length: None,
            scale: None,
            attributes: Vec::new(),
            default: None,
            comment: String::new(),
        }
    }

    /// The type together with its parameters
    pub fn type_spec(&self) -> TypeSpec {
        TypeSpec {
            kind: self.data_type,
            length: self.length.clone(),
            scale: self.scale.clone(),
        }
    }

    pub fn has_attribute(&self, attribute: Attribute) -> bool {
        self.attributes.contains(&attribute)
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", quote_identifier(&self.name), self.type_spec())?;
        for attribute in &self.attributes {
            write!(f, " {}", attribute)?;
        }
        if let Some(default) = &self.default {
            write!(f, " DEFAULT {}", default)?;
        }
        if !self.comment.is_empty() {
            write!(f, " COMMENT '{}'", self.comment)?;
        }
        Ok(())
    }
}
