//! Tests for INSERT, UPDATE, DELETE, LOAD DATA and the other DML forms.

mod common;
use common::*;

use oxide_mysql::ast::{OnDuplicate, Statement};
use oxide_mysql::ErrorCode;

const LOAD_HEX: &str =
    "LOAD DATA LOCAL INFILE '/tmp/t.csv' INTO TABLE t FIELDS TERMINATED BY X'6B6B' ENCLOSED BY X'0D'";

#[test]
fn load_data_hex_separators() {
    let Statement::LoadData(load) = parse(LOAD_HEX) else {
        panic!("Expected LOAD DATA");
    };
    assert!(load.local);
    assert_eq!(load.on_duplicate, OnDuplicate::Ignore);
    let fields = load.fields.expect("fields clause");
    assert_eq!(fields.terminated.as_deref(), Some(&b"kk"[..]));
    assert_eq!(fields.enclosed.as_deref(), Some(&b"\r"[..]));
}

#[test]
fn load_data_restore() {
    assert_restore(
        LOAD_HEX,
        "LOAD DATA LOCAL INFILE '/tmp/t.csv' IGNORE INTO TABLE `t` FIELDS TERMINATED BY 'kk' ENCLOSED BY '\\r'",
    );
}

#[test]
fn load_data_enclosed_by_must_be_one_byte() {
    let err = parse_err(
        "LOAD DATA LOCAL INFILE '/tmp/t.csv' INTO TABLE t FIELDS TERMINATED BY X'6B6B' ENCLOSED BY X'0D0D'",
    );
    assert_eq!(err.code, ErrorCode::FieldSeparatorArg);
}

#[test]
fn insert_forms() {
    assert_restore(
        "insert ignore into t (a, b) values (1, 2), (3, default) on duplicate key update a = values(a)",
        "INSERT IGNORE INTO `t` (`a`,`b`) VALUES (1,2),(3,DEFAULT) ON DUPLICATE KEY UPDATE `a`=VALUES(`a`)",
    );
    assert_restore(
        "replace low_priority t set a = 1",
        "REPLACE LOW_PRIORITY INTO `t` SET `a`=1",
    );
    assert_restore("insert into t values ()", "INSERT INTO `t` VALUES ()");
    round_trip("insert into t partition (p1) select * from u");
}

#[test]
fn update_and_delete() {
    assert_restore(
        "update low_priority t set a = a + 1 where b = 2 order by c limit 10",
        "UPDATE LOW_PRIORITY `t` SET `a`=`a`+1 WHERE `b`=2 ORDER BY `c` LIMIT 10",
    );
    assert_restore(
        "delete quick from t where a = 1 limit 1",
        "DELETE QUICK FROM `t` WHERE `a`=1 LIMIT 1",
    );
    round_trip("delete t1, t2.* from t1 join t2 on t1.a = t2.a");
    round_trip("with c as (select 1 as a) update t, c set t.a = c.a");
}

#[test]
fn import_call_and_batch() {
    assert_restore(
        "import into t (a, @b) from 's3://bucket/x.csv' format 'csv' with detached",
        "IMPORT INTO `t` (`a`,@`b`) FROM 's3://bucket/x.csv' FORMAT 'csv' WITH DETACHED",
    );
    assert_restore("call p(1, @a)", "CALL `p`(1,@`a`)");
    assert_restore(
        "batch on id limit 100 dry run delete from t where a > 1",
        "BATCH ON `id` LIMIT 100 DRY RUN DELETE FROM `t` WHERE `a`>1",
    );
    assert_restore("do 1, 2", "DO 1, 2");
}
