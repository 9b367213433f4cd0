//! Column comment and table comment tests

use pretty_assertions::assert_eq;
use rust_mysql_ddl::{
    extract_table_comment, parse_create_table, parse_create_table_with, DdlGrammar,
    ParseOptions,
};

use crate::common::create_table_sql;

// ============================================================================
// Column comments
// ============================================================================

#[test]
fn test_column_comment_rule() {
    let mut grammar = DdlGrammar::new("COMMENT '主键'").unwrap();
    assert_eq!(grammar.column_comment(), Some("主键".to_string()));
    assert!(grammar.is_at_end());
}

#[test]
fn test_column_comment_absent() {
    let mut grammar = DdlGrammar::new(", next int").unwrap();
    assert_eq!(grammar.column_comment(), None);
    assert_eq!(grammar.offset(), 0);
}

#[test]
fn test_column_comment_keyword_without_text() {
    let mut grammar = DdlGrammar::new("comment").unwrap();
    assert_eq!(grammar.column_comment(), Some(String::new()));
}

#[test]
fn test_column_comment_ends_at_comma_and_paren() {
    let sql = create_table_sql(
        "t",
        &["a int COMMENT 'first, with comma'", "b int COMMENT 'last (paren)'"],
        ";",
    );
    let table = parse_create_table(&sql).unwrap();
    assert_eq!(table.columns[0].comment, "first, with comma");
    assert_eq!(table.columns[1].comment, "last (paren)");
}

// ============================================================================
// Table comment
// ============================================================================

#[test]
fn test_last_column_comment_is_not_the_table_comment() {
    let sql = create_table_sql("t", &["a int", "b int COMMENT 'column b'"], " ENGINE=InnoDB;");
    let table = parse_create_table(&sql).unwrap();
    assert_eq!(table.columns[1].comment, "column b");
    assert_eq!(table.comment, "");
}

#[test]
fn test_table_comment_distinct_from_column_comments() {
    let sql = create_table_sql(
        "t",
        &["a int COMMENT 'column a'"],
        " ENGINE=InnoDB DEFAULT CHARSET=utf8mb4 COMMENT='table t';",
    );
    let table = parse_create_table(&sql).unwrap();
    assert_eq!(table.columns[0].comment, "column a");
    assert_eq!(table.comment, "table t");
}

#[test]
fn test_table_comment_in_any_clause_order() {
    for tail in [
        " COMMENT='x' ENGINE=InnoDB DEFAULT CHARSET=utf8",
        " ENGINE=InnoDB COMMENT='x' DEFAULT CHARSET=utf8",
        " ENGINE=InnoDB DEFAULT CHARSET=utf8 COMMENT 'x'",
        "COMMENT='x'",
    ] {
        let sql = create_table_sql("t", &["a int"], tail);
        assert_eq!(parse_create_table(&sql).unwrap().comment, "x", "tail {tail:?}");
    }
}

#[test]
fn test_table_without_comment_clause() {
    for tail in ["", ";", " ENGINE=InnoDB DEFAULT CHARSET=utf8;", "\n\n-- end of dump\n"] {
        let sql = create_table_sql("t", &["a int COMMENT 'col'"], tail);
        assert_eq!(parse_create_table(&sql).unwrap().comment, "", "tail {tail:?}");
    }
}

#[test]
fn test_table_comment_can_be_disabled() {
    let sql = create_table_sql("t", &["a int"], " COMMENT='ignored'");
    let options = ParseOptions {
        table_comment: false,
    };
    let table = parse_create_table_with(&sql, &options).unwrap();
    assert_eq!(table.comment, "");
}

#[test]
fn test_extract_table_comment_standalone() {
    assert_eq!(extract_table_comment(" ENGINE=MyISAM COMMENT='legacy'"), "legacy");
    assert_eq!(extract_table_comment(" ENGINE=MyISAM"), "");
}

#[test]
fn test_column_and_table_comments_read_the_same_text() {
    let sql = create_table_sql("t", &[r"a int COMMENT 'C:\data'"], r" COMMENT='C:\data'");
    let table = parse_create_table(&sql).unwrap();
    assert_eq!(table.columns[0].comment, r"C:\data");
    assert_eq!(table.comment, table.columns[0].comment);
}
