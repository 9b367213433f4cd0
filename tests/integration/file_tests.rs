//! File loading tests

use pretty_assertions::assert_eq;
use rust_mysql_ddl::{parse_create_table, parse_create_table_file, DdlError};

use crate::common::{create_sql_file, fixture_path, T_ORG_BACK};

#[test]
fn test_parse_fixture_file() {
    let table = parse_create_table_file(&fixture_path("t_org_back.sql")).unwrap();
    assert_eq!(table, parse_create_table(T_ORG_BACK).unwrap());
}

#[test]
fn test_utf8_bom_is_stripped() {
    let mut content = vec![0xEF, 0xBB, 0xBF];
    content.extend_from_slice(T_ORG_BACK.as_bytes());
    let file = create_sql_file(&content);

    let table = parse_create_table_file(file.path()).unwrap();
    assert_eq!(table.name, "t_org_back");
    assert_eq!(table.comment, "组织结构备份表");
}

#[test]
fn test_windows_1252_fallback() {
    // 0xE9 is "é" in Windows-1252 and not valid UTF-8 on its own
    let mut content = b"CREATE TABLE caf\xE9 (nom varchar(20) COMMENT 'pr".to_vec();
    content.push(0xE9);
    content.extend_from_slice(b"nom') COMMENT='menu';");
    let file = create_sql_file(&content);

    let table = parse_create_table_file(file.path()).unwrap();
    assert_eq!(table.name, "café");
    assert_eq!(table.columns[0].comment, "prénom");
    assert_eq!(table.comment, "menu");
}

#[test]
fn test_missing_file() {
    let path = fixture_path("does_not_exist.sql");
    match parse_create_table_file(&path) {
        Err(DdlError::FileRead { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected a file read error, got {other:?}"),
    }
}

#[test]
fn test_syntax_error_from_file() {
    let file = create_sql_file(b"CREATE TABLE t (a int");
    let err = parse_create_table_file(file.path()).unwrap_err();
    assert_eq!(err.offset(), Some("CREATE TABLE t (a int".len()));
}
