//! Tests for session, transaction, account and administrative statements.

mod common;
use common::*;

use oxide_mysql::ast::{ExprKind, Literal, SetAssignment, SetTarget, Statement, VarScope};

#[test]
fn set_transaction_isolation() {
    let Statement::Set(assignments) = parse("SET SESSION TRANSACTION ISOLATION LEVEL REPEATABLE READ")
    else {
        panic!("Expected SET");
    };
    assert_eq!(assignments.len(), 1);
    let SetAssignment::Variable {
        target: SetTarget::System { name, scope },
        value: Some(value),
    } = &assignments[0]
    else {
        panic!("Expected a system variable assignment, got {:?}", assignments[0]);
    };
    assert_eq!(name, "tx_isolation");
    assert_eq!(*scope, VarScope::Session);
    let ExprKind::Literal(Literal::String(value)) = &value.kind else {
        panic!("Expected a string value, got {value:?}");
    };
    assert_eq!(value.value, b"REPEATABLE-READ");
}

#[test]
fn set_transaction_isolation_restore() {
    assert_restore(
        "SET SESSION TRANSACTION ISOLATION LEVEL REPEATABLE READ",
        "SET @@SESSION.`tx_isolation`=_UTF8MB4'REPEATABLE-READ'",
    );
}

#[test]
fn set_variants() {
    assert_restore(
        "set @a = 1, global max_connections = default, @@sql_mode = 'ansi'",
        "SET @`a`=1, @@GLOBAL.`max_connections`=DEFAULT, @@`sql_mode`=_UTF8MB4'ansi'",
    );
    assert_restore(
        "set names utf8mb4 collate utf8mb4_bin",
        "SET NAMES UTF8MB4 COLLATE utf8mb4_bin",
    );
    assert_restore("set character set latin1", "SET CHARSET LATIN1");
    assert_restore("set role all except r1", "SET ROLE ALL EXCEPT 'r1'@'%'");
}

#[test]
fn transactions() {
    assert_restore("begin pessimistic", "BEGIN PESSIMISTIC");
    assert_restore(
        "start transaction with consistent snapshot",
        "START TRANSACTION WITH CONSISTENT SNAPSHOT",
    );
    assert_restore("commit work and chain", "COMMIT AND CHAIN");
    assert_restore("rollback to savepoint sp", "ROLLBACK TO `sp`");
    assert_restore("savepoint sp", "SAVEPOINT `sp`");
}

#[test]
fn prepared_statements() {
    assert_restore("prepare s from 'select ?'", "PREPARE `s` FROM 'select ?'");
    assert_restore("execute s using @a, @b", "EXECUTE `s` USING @`a`,@`b`");
    assert_restore("deallocate prepare s", "DEALLOCATE PREPARE `s`");
}

#[test]
fn accounts_and_privileges() {
    assert_restore(
        "create user u identified with mysql_native_password as '*ABC'",
        "CREATE USER 'u'@'%' IDENTIFIED WITH 'mysql_native_password' AS '*ABC'",
    );
    assert_restore(
        "grant select (a, b), insert on db.* to u with grant option",
        "GRANT SELECT (`a`, `b`), INSERT ON `db`.* TO 'u'@'%' WITH GRANT OPTION",
    );
    assert_restore("revoke r1 from u", "REVOKE 'r1'@'%' FROM 'u'@'%'");
    assert_restore(
        "rename user a to b, c@h to d@h",
        "RENAME USER 'a'@'%' TO 'b'@'%', 'c'@'h' TO 'd'@'h'",
    );
}

#[test]
fn show_statements() {
    assert_restore(
        "show full tables in db like 't%'",
        "SHOW FULL TABLES FROM `db` LIKE _UTF8MB4't%'",
    );
    assert_restore("show variables", "SHOW SESSION VARIABLES");
    assert_restore("show columns from t from db", "SHOW COLUMNS FROM `db`.`t`");
}

#[test]
fn admin_statements() {
    assert_restore(
        "admin show ddl jobs 5 where state = 'done'",
        "ADMIN SHOW DDL JOBS 5 WHERE `state`=_UTF8MB4'done'",
    );
    assert_restore("admin cancel ddl jobs 1, 2", "ADMIN CANCEL DDL JOBS 1, 2");
    assert_restore("kill connection 12", "KILL 12");
    assert_restore(
        "flush local tables t1, t2 with read lock",
        "FLUSH NO_WRITE_TO_BINLOG TABLES `t1`, `t2` WITH READ LOCK",
    );
}

#[test]
fn explain_statements() {
    assert_restore(
        "explain analyze format='Brief' select 1",
        "EXPLAIN ANALYZE FORMAT = 'brief' SELECT 1",
    );
    assert_restore("describe t c", "DESC `t` `c`");
    assert_restore("explain for connection 7", "EXPLAIN FOR CONNECTION 7");
}

#[test]
fn operational_statements() {
    assert_restore(
        "backup database * to 's3://b/p' rate_limit = 120 mb/second checksum = false",
        "BACKUP DATABASE * TO 's3://b/p' RATE_LIMIT = 120 MB/SECOND CHECKSUM = FALSE",
    );
    assert_restore("query watch remove 3", "QUERY WATCH REMOVE 3");
    assert_restore(
        "drop global binding for select * from t",
        "DROP GLOBAL BINDING FOR SELECT * FROM `t`",
    );
    assert_restore("use db1", "USE `db1`");
}

#[test]
fn plan_replayer_capture() {
    assert_restore(
        "plan replayer capture 'sql_digest' 'plan_digest'",
        "PLAN REPLAYER CAPTURE 'sql_digest' 'plan_digest'",
    );
    assert_restore(
        "plan replayer capture remove 'a' 'b'",
        "PLAN REPLAYER CAPTURE REMOVE 'a' 'b'",
    );
    let _ = parse_err("plan replayer capture 'a'");
}

#[test]
fn binding_wildcard_schema() {
    assert_restore(
        "CREATE GLOBAL BINDING FOR SELECT * FROM *.t USING SELECT * FROM *.t USE INDEX (i)",
        "CREATE GLOBAL BINDING FOR SELECT * FROM *.`t` USING SELECT * FROM *.`t` USE INDEX (`i`)",
    );
    assert_restore(
        "DROP GLOBAL BINDING FOR SELECT * FROM *.t",
        "DROP GLOBAL BINDING FOR SELECT * FROM *.`t`",
    );
    let _ = parse_err("SELECT * FROM *.t");
}

#[test]
fn default_resource_group() {
    assert_restore(
        "ALTER RESOURCE GROUP default BACKGROUND = (TASK_TYPES = 'br,ddl', UTILIZATION_LIMIT = 30)",
        "ALTER RESOURCE GROUP `default` BACKGROUND = (TASK_TYPES='br,ddl', UTILIZATION_LIMIT=30)",
    );
    assert_restore("set resource group default", "SET RESOURCE GROUP `default`");
}
