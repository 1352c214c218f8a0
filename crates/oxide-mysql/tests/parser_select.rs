//! Tests for SELECT parsing and restoring.

mod common;
use common::*;

use oxide_mysql::ast::{
    ExprKind, HintArgs, HintTable, Literal, QueryBody, SelectField, SetOperator, Statement,
};
use oxide_mysql::{ErrorCode, Parser};

#[test]
fn select_literal_without_from() {
    let select = parse_select("SELECT 1");
    assert_eq!(select.fields.len(), 1);
    assert!(select.from.is_none());
}

#[test]
fn select_signed_and_unsigned_overflow() {
    let select = parse_select("SELECT 9223372036854775807");
    let SelectField::Expr { expr, .. } = &select.fields[0] else {
        panic!("expected an expression field");
    };
    assert_eq!(expr.kind, ExprKind::Literal(Literal::Int(i64::MAX)));

    let select = parse_select("SELECT 9223372036854775808");
    let SelectField::Expr { expr, .. } = &select.fields[0] else {
        panic!("expected an expression field");
    };
    assert_eq!(
        expr.kind,
        ExprKind::Literal(Literal::Uint(9_223_372_036_854_775_808))
    );
}

#[test]
fn select_table_hints() {
    let select = parse_select(
        "SELECT /*+ TIDB_INLJ(t1, T2), tidb_inlj(t3, t4) */ c1, c2 FROM t1, t2 WHERE t1.c1 = t2.c1",
    );
    assert_eq!(select.hints.len(), 2);
    for hint in &select.hints {
        assert_eq!(hint.name, "tidb_inlj");
    }
    assert_eq!(
        select.hints[0].args,
        HintArgs::Tables(vec![HintTable::new("t1"), HintTable::new("t2")])
    );
    assert_eq!(
        select.hints[1].args,
        HintArgs::Tables(vec![HintTable::new("t3"), HintTable::new("t4")])
    );
}

#[test]
fn select_table_hints_restore() {
    assert_restore(
        "SELECT /*+ TIDB_INLJ(t1, T2), tidb_inlj(t3, t4) */ c1, c2 FROM t1, t2 WHERE t1.c1 = t2.c1",
        "SELECT /*+ TIDB_INLJ(`t1`, `t2`), TIDB_INLJ(`t3`, `t4`)*/ `c1`,`c2` FROM (`t1`) JOIN `t2` WHERE `t1`.`c1`=`t2`.`c1`",
    );
}

#[test]
fn select_unknown_hint_warns_once() {
    let (stmts, warnings) = parse_with_warnings("SELECT /*+ NO_SUCH_HINT(a), HASH_AGG() */ a FROM t");
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].code, ErrorCode::UnsupportedHint);
    assert!(warnings[0].message.contains("NO_SUCH_HINT"));
    let Statement::Select(query) = &stmts[0] else {
        panic!("expected SELECT");
    };
    let QueryBody::Select(select) = &query.body else {
        panic!("expected a single SELECT block");
    };
    assert_eq!(select.hints.len(), 1);
    assert_eq!(select.hints[0].name, "hash_agg");
}

#[test]
fn select_malformed_hint_block_is_ignored() {
    let (stmts, warnings) = parse_with_warnings("SELECT /*+ 😅 */ SLEEP(1)");
    assert_eq!(stmts.len(), 1);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].code, ErrorCode::HintSyntax);
    let Statement::Select(query) = &stmts[0] else {
        panic!("expected SELECT");
    };
    let QueryBody::Select(select) = &query.body else {
        panic!("expected a single SELECT block");
    };
    assert!(select.hints.is_empty());
}

#[test]
fn select_recursive_cte() {
    let query = parse_query(
        "WITH RECURSIVE cte(n) AS (SELECT 1 UNION ALL SELECT n+1 FROM cte WHERE n < 5) SELECT * FROM cte",
    );
    let with = query.with.expect("WITH clause");
    assert!(with.recursive);
    assert_eq!(with.ctes.len(), 1);
    assert_eq!(with.ctes[0].name, "cte");
    assert_eq!(with.ctes[0].columns, ["n"]);
    assert!(matches!(
        with.ctes[0].query.body,
        QueryBody::SetOp {
            op: SetOperator::Union,
            all: true,
            ..
        }
    ));
}

#[test]
fn select_recursive_cte_restore() {
    assert_restore(
        "WITH RECURSIVE cte(n) AS (SELECT 1 UNION ALL SELECT n+1 FROM cte WHERE n < 5) SELECT * FROM cte;",
        "WITH RECURSIVE `cte` (`n`) AS (SELECT 1 UNION ALL SELECT `n`+1 FROM `cte` WHERE `n`<5) SELECT * FROM `cte`",
    );
}

#[test]
fn select_string_literal_restores_with_charset() {
    assert_restore(
        "select * from t where a = 'x'",
        "SELECT * FROM `t` WHERE `a`=_UTF8MB4'x'",
    );
}

#[test]
fn select_clauses_round_trip() {
    assert_restore(
        "select a, b as c from t where a > 1",
        "SELECT `a`,`b` AS `c` FROM `t` WHERE `a`>1",
    );
    assert_restore(
        "select * from a join b using (x, y)",
        "SELECT * FROM (`a`) JOIN `b` USING (`x`, `y`)",
    );
    assert_restore(
        "select a from t order by a desc limit 2, 3 for update of t skip locked",
        "SELECT `a` FROM `t` ORDER BY `a` DESC LIMIT 2,3 FOR UPDATE OF `t` SKIP LOCKED",
    );
    assert_restore(
        "select 1 union all select 2 intersect select 3 order by 1",
        "SELECT 1 UNION ALL SELECT 2 INTERSECT SELECT 3 ORDER BY 1",
    );
    assert_restore("table t", "TABLE `t`");
    round_trip("select * from a left join b on a.x = b.x natural right join c");
    round_trip("select * from (select a from t) d (x)");
    round_trip("select * from t partition (p0) as x use index for join (i1, primary)");
    round_trip("select a from t where a not between 1 and 2 and b in (1, 2) and c is not null");
    round_trip("select case a when 1 then 'x' else 'y' end, count(distinct b) from t");
    round_trip("select cast(a as char(10) charset latin1), convert(a using utf8mb4) from t");
    round_trip("select d + interval 1 day from t where not exists (select 1)");
}

#[test]
fn select_window_functions_need_the_flag() {
    let sql = "SELECT ROW_NUMBER() OVER (PARTITION BY a ORDER BY b) FROM t";
    let mut parser = Parser::new();
    parser.enable_window_func(true);
    let stmt = parser.parse_one_stmt(sql, "", "").unwrap().stmt;
    let restored = restore_default(&stmt);
    assert_eq!(parser.parse_one_stmt(&restored, "", "").unwrap().stmt, stmt);
}

#[test]
fn select_member_of_requires_parens() {
    let _ = parse("SELECT 1 MEMBER OF (a)");
    let _ = parse_err("SELECT 1 MEMBER OF a");
}

#[test]
fn select_identifier_like_number() {
    let select = parse_select("select 99e+r10 from t1");
    let SelectField::Expr { expr, .. } = &select.fields[0] else {
        panic!("expected an expression field");
    };
    let ExprKind::Binary { left, .. } = &expr.kind else {
        panic!("expected a binary expression, got {expr:?}");
    };
    assert!(matches!(&left.kind, ExprKind::Column(c) if c.name == "99e"));
}

#[test]
fn select_statement_texts() {
    let (stmts, _) = Parser::new().parse("/*! SET x=1; SELECT 2 */", "", "").unwrap();
    assert_eq!(stmts.len(), 2);
    assert_eq!(stmts[1].text, " SELECT 2 */");
}

#[test]
fn select_empty_input_has_no_statements() {
    let parser = Parser::new();
    assert!(parser.parse("", "", "").unwrap().0.is_empty());
    assert!(parser.parse(";;", "", "").unwrap().0.is_empty());
}

#[test]
fn float_literal_overflow() {
    assert_restore("SELECT 1e308, 2.5e-3", "SELECT 1e308,2.5e-3");
    let err = parse_err("SELECT 1e308, 1e309");
    assert_eq!(err.code, ErrorCode::ParseError);
    assert!(err.message.starts_with("invalid numeric literal"), "{}", err.message);
    assert_eq!(err.near, "1e309");
}
