//! Structured description of a parsed `CREATE TABLE` statement

mod column;
mod table;

pub use column::{Attribute, Column, ColumnType, DefaultValue, TypeSpec};
pub use table::{ForeignReference, KeyDefinition, KeyKind, Table};
