//! Table-level model types

use std::fmt;

use super::column::Column;
use crate::util::quote_identifier;

/// Kind of a table-level key clause
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    Primary,
    Unique,
    Index,
    Fulltext,
    Foreign,
}

/// Target of a `FOREIGN KEY ... REFERENCES` clause
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignReference {
    pub table: String,
    pub columns: Vec<String>,
}

/// A key or index clause from the field list, e.g. `PRIMARY KEY (id)`.
///
/// These are not columns and never appear in [`Table::columns`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyDefinition {
    pub kind: KeyKind,
    /// Index name, or the `CONSTRAINT` name when one was given
    pub name: Option<String>,
    pub columns: Vec<String>,
    /// Only set for `KeyKind::Foreign`
    pub references: Option<ForeignReference>,
}

impl KeyDefinition {
    pub fn new(kind: KeyKind, columns: Vec<String>) -> Self {
        Self {
            kind,
            name: None,
            columns,
            references: None,
        }
    }
}

impl fmt::Display for KeyDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keyword = match self.kind {
            KeyKind::Primary => "PRIMARY KEY",
            KeyKind::Unique => "UNIQUE KEY",
            KeyKind::Index => "KEY",
            KeyKind::Fulltext => "FULLTEXT KEY",
            KeyKind::Foreign => "FOREIGN KEY",
        };
        if self.kind == KeyKind::Foreign {
            if let Some(name) = &self.name {
                write!(f, "CONSTRAINT {} ", quote_identifier(name))?;
            }
            f.write_str(keyword)?;
        } else {
            f.write_str(keyword)?;
            match (&self.name, self.kind) {
                (_, KeyKind::Primary) | (None, _) => {}
                (Some(name), _) => write!(f, " {}", quote_identifier(name))?,
            }
        }
        write!(f, " ({})", join_identifiers(&self.columns))?;
        if let Some(references) = &self.references {
            write!(
                f,
                " REFERENCES {} ({})",
                quote_identifier(&references.table),
                join_identifiers(&references.columns)
            )?;
        }
        Ok(())
    }
}

/// The structured description of one `CREATE TABLE` statement
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Table {
    /// Database qualifier from `db.table`, if present
    pub schema: Option<String>,
    pub name: String,
    /// Columns in declaration order; duplicates are preserved
    pub columns: Vec<Column>,
    /// Key and index clauses in declaration order
    pub keys: Vec<KeyDefinition>,
    /// Table-level `COMMENT='...'`, empty when absent
    pub comment: String,
}

impl Table {
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// The table-level `PRIMARY KEY (...)` clause, if any
    pub fn primary_key(&self) -> Option<&KeyDefinition> {
        self.keys.iter().find(|k| k.kind == KeyKind::Primary)
    }

    /// `schema.name` when qualified, otherwise just the name
    pub fn qualified_name(&self) -> String {
        match &self.schema {
            Some(schema) => format!("{}.{}", schema, self.name),
            None => self.name.clone(),
        }
    }
}

/// Re-serializes the table as a `CREATE TABLE` statement the parser accepts.
impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CREATE TABLE ")?;
        if let Some(schema) = &self.schema {
            write!(f, "{}.", quote_identifier(schema))?;
        }
        writeln!(f, "{} (", quote_identifier(&self.name))?;

        let items: Vec<String> = self
            .columns
            .iter()
            .map(ToString::to_string)
            .chain(self.keys.iter().map(ToString::to_string))
            .collect();
        for (i, item) in items.iter().enumerate() {
            let separator = if i + 1 < items.len() { "," } else { "" };
            writeln!(f, "  {}{}", item, separator)?;
        }

        f.write_str(")")?;
        if !self.comment.is_empty() {
            write!(f, " COMMENT='{}'", self.comment)?;
        }
        f.write_str(";")
    }
}

fn join_identifiers(names: &[String]) -> String {
    names
        .iter()
        .map(|n| quote_identifier(n))
        .collect::<Vec<_>>()
        .join(", ")
}
