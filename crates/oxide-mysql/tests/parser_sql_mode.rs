//! Tests for SQL mode effects and parser configuration.

mod common;
use common::*;

use oxide_mysql::ast::{BinaryOp, ExprKind, Literal, QueryBody, SelectField, Statement, UnaryOp};
use oxide_mysql::{restore, ErrorCode, Parser, ParserConfig, RestoreFlags, SqlMode};

fn first_field(stmt: Statement) -> ExprKind {
    let Statement::Select(query) = stmt else {
        panic!("Expected SELECT");
    };
    let QueryBody::Select(select) = query.body else {
        panic!("Expected a single SELECT block");
    };
    match select.fields.into_iter().next() {
        Some(SelectField::Expr { expr, .. }) => expr.kind,
        other => panic!("Expected an expression field, got {other:?}"),
    }
}

#[test]
fn ansi_quotes_reads_double_quotes_as_identifiers() {
    let kind = first_field(parse_in(r#"SELECT t."dot"=10 FROM t"#, SqlMode::ANSI_QUOTES));
    let ExprKind::Binary { left, op, .. } = kind else {
        panic!("Expected a comparison, got {kind:?}");
    };
    assert_eq!(op, BinaryOp::Eq);
    assert!(matches!(
        &left.kind,
        ExprKind::Column(c) if c.name == "dot" && c.table.as_deref() == Some("t")
    ));

    let kind = first_field(parse(r#"SELECT "dot" FROM t"#));
    assert!(matches!(kind, ExprKind::Literal(Literal::String(_))));
}

#[test]
fn no_backslash_escapes_in_executable_comment() {
    let _ = parse_in(r"SELECT /*! '\' */;", SqlMode::NO_BACKSLASH_ESCAPES);
    let _ = parse_err(r"SELECT /*! '\' */;");
}

#[test]
fn no_backslash_escapes_restore() {
    let mode = SqlMode::NO_BACKSLASH_ESCAPES;
    let stmt = parse_in(r"SELECT 'a\'", mode);
    let flags = RestoreFlags::DEFAULT | RestoreFlags::STRING_NO_BACKSLASH_ESCAPES;
    let sql = restore(&stmt, flags).unwrap();
    assert_eq!(sql, r"SELECT _UTF8MB4'a\'");
    assert_eq!(parse_in(&sql, mode), stmt);
}

#[test]
fn high_not_precedence() {
    let sql = "SELECT NOT 1 BETWEEN -5 AND 5";
    let kind = first_field(parse(sql));
    assert!(matches!(kind, ExprKind::Unary { op: UnaryOp::Not, .. }));

    let kind = first_field(parse_in(sql, SqlMode::HIGH_NOT_PRECEDENCE));
    let ExprKind::Between { expr, .. } = kind else {
        panic!("Expected BETWEEN, got {kind:?}");
    };
    assert!(matches!(expr.kind, ExprKind::Unary { op: UnaryOp::Not2, .. }));
}

#[test]
fn pipes_as_concat() {
    let kind = first_field(parse("SELECT 'a' || 'b'"));
    assert!(matches!(kind, ExprKind::Binary { op: BinaryOp::LogicOr, .. }));

    let kind = first_field(parse_in("SELECT 'a' || 'b'", SqlMode::PIPES_AS_CONCAT));
    let ExprKind::Func(call) = kind else {
        panic!("Expected a concat call, got {kind:?}");
    };
    assert_eq!(call.name, "concat");
}

#[test]
fn mode_strings() {
    let mode: SqlMode = "ansi_quotes, high_not_precedence".parse().unwrap();
    assert_eq!(mode, SqlMode::ANSI_QUOTES | SqlMode::HIGH_NOT_PRECEDENCE);
    assert!("ANSI".parse::<SqlMode>().unwrap().contains(SqlMode::PIPES_AS_CONCAT));
    assert!("NOT_A_MODE".parse::<SqlMode>().is_err());
}

#[test]
fn config_from_json() {
    let config: ParserConfig = serde_json::from_str(
        r#"{"sql_mode": "ANSI_QUOTES,PIPES_AS_CONCAT", "enable_window_func": true}"#,
    )
    .unwrap();
    assert!(config.sql_mode.contains(SqlMode::ANSI_QUOTES));
    assert!(config.enable_window_func);
    assert!(config.strict_double_type_check);
    assert_eq!(config.executable_comment_version, 80011);

    let parser = Parser::with_config(config);
    let stmt = parser
        .parse_one_stmt(r#"SELECT "a" || "b" FROM t"#, "", "")
        .unwrap()
        .stmt;
    assert!(matches!(first_field(stmt), ExprKind::Func(_)));
}

#[test]
fn config_serializes_mode_as_text() {
    let config = ParserConfig {
        sql_mode: SqlMode::ANSI_QUOTES,
        ..ParserConfig::default()
    };
    let json = serde_json::to_value(&config).unwrap();
    assert_eq!(json["sql_mode"], "ANSI_QUOTES");
    let back: ParserConfig = serde_json::from_value(json).unwrap();
    assert_eq!(back, config);
}

#[test]
fn config_rejects_unknown_mode() {
    assert!(serde_json::from_str::<ParserConfig>(r#"{"sql_mode": "BOGUS"}"#).is_err());
}

#[test]
fn removed_charset_introducer() {
    let mut parser = Parser::new();
    parser.charsets_mut().remove_charset("gbk");
    let err = parser.parse("SELECT _gbk'x'", "", "").unwrap_err();
    assert_eq!(err.code, ErrorCode::UnknownCharacterSet);
}

#[test]
fn parse_logs_through_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
    let (stmts, warnings) = parse_with_warnings("SELECT /*+ NO_SUCH_HINT() */ 1; SELECT 2");
    assert_eq!(stmts.len(), 2);
    assert_eq!(warnings.len(), 1);
}
