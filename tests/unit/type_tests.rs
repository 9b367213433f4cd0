//! Column type rule tests

use pretty_assertions::assert_eq;
use rust_mysql_ddl::{ColumnType, DdlGrammar, TypeSpec};

fn parse_type(sql: &str) -> TypeSpec {
    let mut grammar = DdlGrammar::new(sql).unwrap();
    let spec = grammar
        .data_type()
        .unwrap_or_else(|e| panic!("failed to parse type {sql:?}: {e}"));
    assert!(grammar.is_at_end(), "type {sql:?} left input unconsumed");
    spec
}

// ============================================================================
// Whole catalog
// ============================================================================

#[test]
fn test_every_type_keyword_parses_bare() {
    for ty in ColumnType::ALL {
        assert_eq!(parse_type(ty.keyword()).kind, ty);
    }
}

#[test]
fn test_every_type_keyword_parses_with_length() {
    for ty in ColumnType::ALL {
        for digits in ["1", "22", "1024", "000"] {
            let spec = parse_type(&format!("{}({})", ty.keyword(), digits));
            assert_eq!(spec.kind, ty);
            assert_eq!(spec.length.as_deref(), Some(digits));
            assert_eq!(spec.scale, None);
        }
    }
}

#[test]
fn test_every_type_keyword_parses_with_length_and_scale() {
    for ty in ColumnType::ALL {
        let spec = parse_type(&format!("{}(18,2)", ty.keyword()));
        assert_eq!(spec.kind, ty);
        assert_eq!(spec.length.as_deref(), Some("18"));
        assert_eq!(spec.scale.as_deref(), Some("2"));

        let spec = parse_type(&format!("{}( 10 , 25 )", ty.keyword()));
        assert_eq!(spec.scale.as_deref(), Some("25"));
    }
}

#[test]
fn test_type_keywords_ignore_case() {
    for ty in ColumnType::ALL {
        let upper = ty.keyword().to_uppercase();
        assert_eq!(parse_type(&upper).kind, ty);

        let mut mixed: String = ty.keyword().to_string();
        mixed[..1].make_ascii_uppercase();
        assert_eq!(parse_type(&format!("{mixed}(5)")).kind, ty);
    }
}

// ============================================================================
// Keyword boundaries
// ============================================================================

#[test]
fn test_similar_keywords_do_not_mis_dispatch() {
    assert_eq!(parse_type("int").kind, ColumnType::Int);
    assert_eq!(parse_type("tinyint").kind, ColumnType::TinyInt);
    assert_eq!(parse_type("datetime").kind, ColumnType::DateTime);
    assert_eq!(parse_type("date").kind, ColumnType::Date);
    assert_eq!(parse_type("timestamp").kind, ColumnType::Timestamp);
    assert_eq!(parse_type("time").kind, ColumnType::Time);
    assert_eq!(parse_type("varbinary(14)").kind, ColumnType::VarBinary);
    assert_eq!(parse_type("binary(14)").kind, ColumnType::Binary);
}

#[test]
fn test_unknown_type_is_rejected() {
    for sql in ["integer", "json", "enum('a')", "`int`", "123"] {
        let mut grammar = DdlGrammar::new(sql).unwrap();
        let err = grammar.data_type().unwrap_err();
        assert_eq!(err.offset(), Some(0), "input {sql:?}");
        assert_eq!(err.expected(), Some("column type"));
    }
}

#[test]
fn test_type_spec_display_keeps_parameters() {
    assert_eq!(parse_type("DECIMAL(10,2)").to_string(), "decimal(10,2)");
    assert_eq!(parse_type("VarChar(255)").to_string(), "varchar(255)");
    assert_eq!(parse_type("text").to_string(), "text");
}
