//! Tests for parser error cases.

mod common;
use common::*;

use oxide_mysql::{ErrorCode, Parser};

#[test]
fn error_incomplete_select() {
    let err = parse_err("SELECT");
    assert_eq!(err.code, ErrorCode::ParseError);
    assert_eq!(err.code.code(), 1064);
}

#[test]
fn error_missing_from_table() {
    let _ = parse_err("SELECT * FROM");
}

#[test]
fn error_unclosed_paren() {
    let _ = parse_err("SELECT (1 + 2");
}

#[test]
fn error_reserved_word_as_column() {
    let _ = parse_err("SELECT select FROM t");
}

#[test]
fn error_position_of_misspelled_keyword() {
    let err = parse_err("SELEC 1");
    assert_eq!((err.line, err.column), (1, 1));
    assert!(err.near.starts_with("SELEC"));
}

#[test]
fn error_position_on_second_line() {
    let err = parse_err("SELECT 1;\nSELECT FROM t");
    assert_eq!(err.line, 2);
    assert_eq!(err.column, 8);
    assert!(err.near.starts_with("FROM"));
    assert!(err.to_string().starts_with("[1064]"));
}

#[test]
fn error_unknown_client_charset() {
    let err = Parser::new().parse("SELECT 1", "klingon", "").unwrap_err();
    assert_eq!(err.code, ErrorCode::UnknownCharacterSet);
}

#[test]
fn error_blank_database_name() {
    let err = parse_err("SELECT * FROM ` `.t");
    assert_eq!(err.code, ErrorCode::WrongDbName);
}

#[test]
fn error_parse_one_stmt_needs_exactly_one() {
    let parser = Parser::new();
    assert!(parser.parse_one_stmt("", "", "").is_err());
    assert!(parser.parse_one_stmt("SELECT 1; SELECT 2", "", "").is_err());
}

#[test]
fn error_no_partial_result() {
    assert!(Parser::new().parse("SELECT 1; SELEC 2", "", "").is_err());
}

#[test]
fn error_scope_keyword_before_system_variable() {
    let err = parse_err("SET GLOBAL @@session.autocommit = 1");
    assert_eq!(err.code, ErrorCode::IncorrectGlobalLocalVar);
    assert_eq!(err.code.code(), 1238);
    assert_eq!(err.to_string(), "[1238] Variable 'autocommit' is a SESSION variable");
}
