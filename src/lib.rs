//! rust-mysql-ddl: structured descriptions of MySQL `CREATE TABLE` statements
//!
//! This library turns the text of one `CREATE TABLE` statement, typically
//! taken from a `mysqldump` file, into a [`Table`]: the table name, its
//! columns in declaration order (type, modifiers, default, inline comment),
//! its key clauses and the table-level comment.
//!
//! ```
//! use rust_mysql_ddl::{parse_create_table, ColumnType};
//!
//! let table = parse_create_table(
//!     "CREATE TABLE `user` ( user_id int(22), user_name varchar ) COMMENT='users';",
//! )
//! .unwrap();
//!
//! assert_eq!(table.name, "user");
//! assert_eq!(table.columns[0].data_type, ColumnType::Int);
//! assert_eq!(table.comment, "users");
//! ```

pub mod error;
pub mod model;
pub mod parser;
mod util;

pub use error::DdlError;
pub use model::{
    Attribute, Column, ColumnType, DefaultValue, ForeignReference, KeyDefinition, KeyKind, Table,
    TypeSpec,
};
pub use parser::{
    extract_table_comment, parse_column_definition, parse_create_table,
    parse_create_table_file, parse_create_table_with, DdlGrammar, ParseOptions,
};
