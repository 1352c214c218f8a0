//! Tests for reserved and non-reserved keyword handling.

mod common;
use common::*;

use oxide_mysql::lexer::Keyword;
use oxide_mysql::Parser;

fn reserved() -> impl Iterator<Item = &'static str> {
    Keyword::ALL
        .iter()
        .filter(|kw| kw.is_reserved(false))
        .map(Keyword::as_str)
}

fn non_reserved() -> impl Iterator<Item = &'static str> {
    Keyword::ALL
        .iter()
        .filter(|kw| !kw.is_reserved(false))
        .map(Keyword::as_str)
}

#[test]
fn reserved_keywords_are_qualified_names() {
    let parser = Parser::new();
    for kw in reserved() {
        for sql in [
            format!("SELECT * FROM db.{kw}"),
            format!("SELECT * FROM {kw}.desc"),
            format!("SELECT t.{kw} FROM t"),
        ] {
            if let Err(e) = parser.parse(&sql, "", "") {
                panic!("Failed to parse: {sql}\nError: {e}");
            }
        }
    }
}

#[test]
fn reserved_keywords_are_not_bare_columns() {
    let _ = parse_err("SELECT select FROM tbl");
    let _ = parse_err("SELECT * FROM desc");
    let _ = parse_err("SELECT a FROM t WHERE order = 1");
}

#[test]
fn non_reserved_keywords_are_columns() {
    let parser = Parser::new();
    for kw in non_reserved() {
        let sql = format!("SELECT {kw} FROM tbl");
        if let Err(e) = parser.parse(&sql, "", "") {
            panic!("Failed to parse: {sql}\nError: {e}");
        }
    }
}

#[test]
fn select_option_words_as_columns() {
    assert_restore("select sql_cache from t", "SELECT `sql_cache` FROM `t`");
    assert_restore(
        "select sql_no_cache a, sql_buffer_result from t",
        "SELECT SQL_NO_CACHE `a`,`sql_buffer_result` FROM `t`",
    );
}

#[test]
fn window_words_reserved_only_with_window_functions() {
    let _ = parse("SELECT rank FROM t");
    let mut parser = Parser::new();
    parser.enable_window_func(true);
    assert!(parser.parse("SELECT rank FROM t", "", "").is_err());
    assert!(parser.parse("SELECT t.rank FROM t", "", "").is_ok());
}

#[test]
fn keyword_lookup_is_case_insensitive() {
    assert_eq!(Keyword::from_str("select"), Some(Keyword::Select));
    assert_eq!(Keyword::from_str("SeLeCt"), Some(Keyword::Select));
    assert_eq!(Keyword::from_str("not_a_keyword"), None);
}
