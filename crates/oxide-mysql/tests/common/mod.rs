#![allow(dead_code)]

use oxide_mysql::ast::{CreateTable, Query, Select, Statement};
use oxide_mysql::{restore, ParseError, Parser, RestoreFlags, SqlMode, Warning};

pub fn parse(sql: &str) -> Statement {
    parse_in(sql, SqlMode::empty())
}

pub fn parse_in(sql: &str, mode: SqlMode) -> Statement {
    let mut parser = Parser::new();
    parser.set_sql_mode(mode);
    parser
        .parse_one_stmt(sql, "", "")
        .unwrap_or_else(|e| panic!("Failed to parse: {sql}\nError: {e:?}"))
        .stmt
}

pub fn parse_with_warnings(sql: &str) -> (Vec<Statement>, Vec<Warning>) {
    let (stmts, warnings) = Parser::new()
        .parse(sql, "", "")
        .unwrap_or_else(|e| panic!("Failed to parse: {sql}\nError: {e:?}"));
    (stmts.into_iter().map(|node| node.stmt).collect(), warnings)
}

pub fn parse_err(sql: &str) -> ParseError {
    parse_err_in(sql, SqlMode::empty())
}

pub fn parse_err_in(sql: &str, mode: SqlMode) -> ParseError {
    let mut parser = Parser::new();
    parser.set_sql_mode(mode);
    parser
        .parse(sql, "", "")
        .expect_err(&format!("Expected parse error for: {sql}"))
}

pub fn parse_query(sql: &str) -> Query {
    match parse(sql) {
        Statement::Select(q) => *q,
        other => panic!("Expected SELECT, got {other:?}"),
    }
}

pub fn parse_select(sql: &str) -> Select {
    match parse_query(sql).body {
        oxide_mysql::ast::QueryBody::Select(s) => *s,
        other => panic!("Expected a single SELECT block, got {other:?}"),
    }
}

pub fn parse_create_table(sql: &str) -> CreateTable {
    match parse(sql) {
        Statement::CreateTable(c) => *c,
        other => panic!("Expected CREATE TABLE, got {other:?}"),
    }
}

pub fn restore_default(stmt: &Statement) -> String {
    restore(stmt, RestoreFlags::DEFAULT)
        .unwrap_or_else(|e| panic!("Failed to restore: {stmt:?}\nError: {e:?}"))
}

/// Verifies that restoring is stable: the restored text parses back to an
/// equal tree, and restoring that tree again yields the same text.
pub fn round_trip(sql: &str) -> String {
    let ast1 = parse(sql);
    let rendered1 = restore_default(&ast1);
    let ast2 = parse(&rendered1);
    assert_eq!(
        ast1, ast2,
        "Round-trip changed the tree.\n  Input:    {sql}\n  Restored: {rendered1}"
    );
    let rendered2 = restore_default(&ast2);
    assert_eq!(
        rendered1, rendered2,
        "Round-trip failed.\n  Input:    {sql}\n  First:    {rendered1}\n  Second:   {rendered2}"
    );
    rendered1
}

pub fn assert_restore(sql: &str, expected: &str) {
    assert_eq!(round_trip(sql), expected, "Input: {sql}");
}
