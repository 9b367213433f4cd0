//! MySQL `CREATE TABLE` parsing

mod column_parser;
mod grammar;
mod table_comment;
mod table_parser;
mod token_parser_base;

use std::path::Path;

use encoding_rs::WINDOWS_1252;

use crate::error::DdlError;
use crate::model::Table;

pub use column_parser::parse_column_definition;
pub use grammar::DdlGrammar;
pub use table_comment::extract_table_comment;

/// Options for parsing a `CREATE TABLE` statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Scan the text after the column list for `COMMENT='...'`.
    /// When disabled, [`Table::comment`] is always empty.
    pub table_comment: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            table_comment: true,
        }
    }
}

/// Parse one `CREATE TABLE` statement with default options.
///
/// Keywords match case-insensitively; identifiers and string contents keep
/// their case. Anything after the closing parenthesis is only scanned for
/// the table comment.
pub fn parse_create_table(sql: &str) -> Result<Table, DdlError> {
    parse_create_table_with(sql, &ParseOptions::default())
}

/// Parse one `CREATE TABLE` statement.
pub fn parse_create_table_with(sql: &str, options: &ParseOptions) -> Result<Table, DdlError> {
    DdlGrammar::with_options(sql, options.clone())?.table()
}

/// Read a SQL file and parse the `CREATE TABLE` statement it contains.
pub fn parse_create_table_file(path: &Path) -> Result<Table, DdlError> {
    let content = read_file_with_encoding_fallback(path)?;

    // Strip UTF-8 BOM if present
    let content = content.strip_prefix('\u{FEFF}').unwrap_or(&content);

    parse_create_table(content)
}

/// Read a file as a string, trying UTF-8 first, then Windows-1252 as fallback
fn read_file_with_encoding_fallback(path: &Path) -> Result<String, DdlError> {
    let bytes = std::fs::read(path).map_err(|e| DdlError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    match String::from_utf8(bytes) {
        Ok(s) => Ok(s),
        Err(err) => {
            // Dumps written by older Windows tools are often CP-1252
            let bytes = err.into_bytes();
            let (decoded, _, had_errors) = WINDOWS_1252.decode(&bytes);
            if had_errors {
                Err(DdlError::InvalidEncoding {
                    path: path.to_path_buf(),
                })
            } else {
                Ok(decoded.into_owned())
            }
        }
    }
}
