//! Common test utilities for rust-mysql-ddl tests

#![allow(dead_code)]

use std::io::Write;
use std::path::PathBuf;

use tempfile::NamedTempFile;

/// The canonical mysqldump-style table used across tests
pub const T_ORG_BACK: &str = include_str!("../fixtures/t_org_back.sql");

/// Get the path to a test fixture
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Helper to create a temp SQL file with content
pub fn create_sql_file(content: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::with_suffix(".sql").unwrap();
    file.write_all(content).unwrap();
    file.flush().unwrap();
    file
}

/// Build a `CREATE TABLE` statement from column definition lines
pub fn create_table_sql(name: &str, items: &[&str], tail: &str) -> String {
    format!(
        "CREATE TABLE `{}` (\n  {}\n){}",
        name,
        items.join(",\n  "),
        tail
    )
}
