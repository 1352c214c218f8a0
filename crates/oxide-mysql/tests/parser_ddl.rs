//! Tests for DDL statements: tables, partitions, indexes, views and the
//! cluster-level objects.

mod common;
use common::*;

use oxide_mysql::ast::{ColumnOption, PartitionKind, PartitionValues, TableName};
use oxide_mysql::{ErrorCode, Parser};

#[test]
fn create_table_unsigned_columns() {
    let create = parse_create_table("CREATE TABLE foo (a SMALLINT UNSIGNED, b INT UNSIGNED);");
    assert_eq!(create.table, TableName::new("foo"));
    assert_eq!(create.columns.len(), 2);
    assert!(create.columns.iter().all(|c| c.data_type.unsigned));
    assert_restore(
        "CREATE TABLE foo (a SMALLINT UNSIGNED, b INT UNSIGNED);",
        "CREATE TABLE `foo` (`a` SMALLINT UNSIGNED,`b` INT UNSIGNED)",
    );
}

#[test]
fn create_table_auto_random() {
    let sql = "CREATE TABLE t (a bigint AUTO_RANDOM(5, 53) PRIMARY KEY, b varchar(255));";
    let create = parse_create_table(sql);
    assert!(create.columns[0].options.contains(&ColumnOption::AutoRandom {
        shard_bits: Some(5),
        range_bits: Some(53),
    }));
    assert!(round_trip(sql).contains("AUTO_RANDOM(5, 53)"));

    let create = parse_create_table("CREATE TABLE t (a bigint AUTO_RANDOM(3) PRIMARY KEY)");
    assert!(create.columns[0].options.contains(&ColumnOption::AutoRandom {
        shard_bits: Some(3),
        range_bits: None,
    }));
}

#[test]
fn create_table_round_trips() {
    round_trip(
        "create table if not exists t (id bigint unsigned not null auto_increment primary key, \
         name varchar(32) character set utf8mb4 collate utf8mb4_bin default 'x' comment 'n')",
    );
    round_trip(
        "create table t (a int, b int, primary key (a), unique key ub (b desc), \
         constraint fk foreign key (b) references u (x) on delete cascade)",
    );
    round_trip("create table t (a int) engine=InnoDB default charset=utf8mb4 auto_increment=5");
    assert_restore("create table t like u", "CREATE TABLE `t` LIKE `u`");
}

#[test]
fn partition_hash_rejects_less_than() {
    let err = parse_err(
        "CREATE TABLE t (a INT) PARTITION BY HASH (a) (PARTITION x VALUES LESS THAN (10))",
    );
    assert_eq!(err.code, ErrorCode::PartitionWrongValues);
}

#[test]
fn partition_list_default_flag() {
    let create = parse_create_table(
        "CREATE TABLE t (a INT) PARTITION BY LIST (a) (PARTITION x VALUES IN (10, DEFAULT))",
    );
    let partition = create.partition.expect("partitioning");
    assert_eq!(partition.method.kind, PartitionKind::List);
    assert!(matches!(
        &partition.defs[0].values,
        PartitionValues::In { values, default: true } if values.len() == 1
    ));
}

#[test]
fn partition_system_time_needs_two_definitions() {
    let err = parse_err("CREATE TABLE t (a INT) PARTITION BY SYSTEM_TIME (PARTITION x HISTORY)");
    assert_eq!(err.code, ErrorCode::SystemVersioningWrongPartitions);
}

#[test]
fn partition_range_shape_errors() {
    assert_eq!(
        parse_err("CREATE TABLE t (a INT) PARTITION BY RANGE (a) (PARTITION x)").code,
        ErrorCode::PartitionRequiresValues
    );
    assert_eq!(
        parse_err("CREATE TABLE t (a INT) PARTITION BY RANGE (a)").code,
        ErrorCode::PartitionsMustBeDefined
    );
}

#[test]
fn partition_round_trips() {
    assert_restore(
        "create table t (a int) partition by range (a) \
         (partition p0 values less than (10), partition p1 values less than maxvalue)",
        "CREATE TABLE `t` (`a` INT) PARTITION BY RANGE (`a`) \
         (PARTITION `p0` VALUES LESS THAN (10),PARTITION `p1` VALUES LESS THAN (MAXVALUE))",
    );
    round_trip("create table t (a int) partition by list (a) (partition p values in (1, default))");
    round_trip("create table t (a int) partition by linear key algorithm = 2 (a) partitions 4");
}

#[test]
fn alter_table_round_trips() {
    assert_restore(
        "alter table t add column b int after a, drop index i, modify c bigint first",
        "ALTER TABLE `t` ADD COLUMN `b` INT AFTER `a`, DROP INDEX `i`, MODIFY COLUMN `c` BIGINT FIRST",
    );
}

#[test]
fn sequences() {
    assert_restore(
        "create sequence if not exists s increment = 2 start 10 nocache cycle comment 'x'",
        "CREATE SEQUENCE IF NOT EXISTS `s` INCREMENT BY 2 START WITH 10 NOCACHE CYCLE COMMENT = 'x'",
    );
    assert_restore("alter sequence s restart", "ALTER SEQUENCE `s` RESTART");
    assert_restore(
        "drop sequence if exists s1, s2",
        "DROP SEQUENCE IF EXISTS `s1`, `s2`",
    );
}

#[test]
fn sequence_increment_out_of_range() {
    let err = parse_err("CREATE SEQUENCE seq INCREMENT -9223372036854775809");
    assert_eq!(err.code, ErrorCode::DataOutOfRange);
}

#[test]
fn double_precision_depends_on_strict_check() {
    let _ = parse_err("CREATE TABLE t (a DOUBLE(10))");
    let mut parser = Parser::new();
    parser.set_strict_double_type_check(false);
    assert!(parser.parse_one_stmt("CREATE TABLE t (a DOUBLE(10))", "", "").is_ok());
}

#[test]
fn drop_statements() {
    assert_restore("truncate t", "TRUNCATE TABLE `t`");
    assert_restore(
        "rename table a to b, c to d",
        "RENAME TABLE `a` TO `b`, `c` TO `d`",
    );
    assert_restore("drop placement policy p", "DROP PLACEMENT POLICY `p`");
    assert_restore(
        "drop resource group if exists rg",
        "DROP RESOURCE GROUP IF EXISTS `rg`",
    );
}
