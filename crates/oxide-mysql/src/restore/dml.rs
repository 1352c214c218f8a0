//! INSERT, UPDATE, DELETE, LOAD DATA, IMPORT INTO, CALL and BATCH.

use super::query::write_hints;
use super::{Restore, RestoreCtx, RestoreError, RestoreResult};
use crate::ast::{
    Assignment, Call, Delete, DeleteForm, DryRun, ImportInto, ImportSource, Insert, InsertSource,
    LoadColumn, LoadData, LoadOption, NonTransactionalDml, OnDuplicate, TableName, Update,
    WithClause,
};

impl Restore for Assignment {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        self.column.restore(ctx)?;
        ctx.write_plain("=")?;
        self.value.restore(ctx)
    }
}

/// Writes `WITH ... ` ahead of UPDATE or DELETE and opens its name scope.
/// Returns whether a scope was pushed.
fn open_with(ctx: &mut RestoreCtx<'_>, with: Option<&WithClause>) -> Result<bool, RestoreError> {
    let Some(with) = with else {
        return Ok(false);
    };
    ctx.push_cte_scope(with.ctes.iter().map(|cte| cte.name.clone()).collect());
    with.restore(ctx)?;
    ctx.write_plain(" ")?;
    Ok(true)
}

impl Restore for Insert {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        ctx.write_keyword(if self.replace { "REPLACE " } else { "INSERT " })?;
        write_hints(ctx, &self.hints)?;
        if let Some(priority) = self.priority.as_str() {
            ctx.write_keyword(priority)?;
            ctx.write_plain(" ")?;
        }
        if self.ignore {
            ctx.write_keyword("IGNORE ")?;
        }
        ctx.write_keyword("INTO ")?;
        ctx.write_table_name(&self.table)?;
        if !self.partitions.is_empty() {
            ctx.write_keyword(" PARTITION")?;
            ctx.write_plain("(")?;
            ctx.write_name_list(&self.partitions)?;
            ctx.write_plain(")")?;
        }
        if !self.columns.is_empty() {
            ctx.write_plain(" (")?;
            ctx.write_list(&self.columns, ",")?;
            ctx.write_plain(")")?;
        }
        match &self.source {
            InsertSource::Values(rows) => {
                ctx.write_keyword(" VALUES ")?;
                for (i, row) in rows.iter().enumerate() {
                    if i > 0 {
                        ctx.write_plain(",")?;
                    }
                    ctx.write_plain("(")?;
                    ctx.write_list(row, ",")?;
                    ctx.write_plain(")")?;
                }
            }
            InsertSource::Set(assignments) => {
                ctx.write_keyword(" SET ")?;
                ctx.write_list(assignments, ",")?;
            }
            InsertSource::Query(query) => {
                ctx.write_plain(" ")?;
                query.restore(ctx)?;
            }
        }
        if !self.on_duplicate.is_empty() {
            ctx.write_keyword(" ON DUPLICATE KEY UPDATE ")?;
            ctx.write_list(&self.on_duplicate, ",")?;
        }
        Ok(())
    }
}

impl Restore for Update {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        let scoped = open_with(ctx, self.with.as_ref())?;
        ctx.write_keyword("UPDATE ")?;
        write_hints(ctx, &self.hints)?;
        if self.low_priority {
            ctx.write_keyword("LOW_PRIORITY ")?;
        }
        if self.ignore {
            ctx.write_keyword("IGNORE ")?;
        }
        self.tables.restore(ctx)?;
        ctx.write_keyword(" SET ")?;
        ctx.write_list(&self.assignments, ",")?;
        if let Some(selection) = &self.selection {
            ctx.write_keyword(" WHERE ")?;
            selection.restore(ctx)?;
        }
        if !self.order_by.is_empty() {
            ctx.write_keyword(" ORDER BY ")?;
            ctx.write_list(&self.order_by, ",")?;
        }
        if let Some(limit) = &self.limit {
            ctx.write_plain(" ")?;
            limit.restore(ctx)?;
        }
        if scoped {
            ctx.pop_cte_scope();
        }
        Ok(())
    }
}

impl Restore for Delete {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        let scoped = open_with(ctx, self.with.as_ref())?;
        ctx.write_keyword("DELETE ")?;
        write_hints(ctx, &self.hints)?;
        if self.low_priority {
            ctx.write_keyword("LOW_PRIORITY ")?;
        }
        if self.quick {
            ctx.write_keyword("QUICK ")?;
        }
        if self.ignore {
            ctx.write_keyword("IGNORE ")?;
        }
        match self.form {
            DeleteForm::Single => {
                ctx.write_keyword("FROM ")?;
                self.from.restore(ctx)?;
            }
            DeleteForm::BeforeFrom => {
                write_targets(ctx, &self.targets)?;
                ctx.write_keyword(" FROM ")?;
                self.from.restore(ctx)?;
            }
            DeleteForm::Using => {
                ctx.write_keyword("FROM ")?;
                write_targets(ctx, &self.targets)?;
                ctx.write_keyword(" USING ")?;
                self.from.restore(ctx)?;
            }
        }
        if let Some(selection) = &self.selection {
            ctx.write_keyword(" WHERE ")?;
            selection.restore(ctx)?;
        }
        if !self.order_by.is_empty() {
            ctx.write_keyword(" ORDER BY ")?;
            ctx.write_list(&self.order_by, ",")?;
        }
        if let Some(limit) = &self.limit {
            ctx.write_plain(" ")?;
            limit.restore(ctx)?;
        }
        if scoped {
            ctx.pop_cte_scope();
        }
        Ok(())
    }
}

fn write_targets(ctx: &mut RestoreCtx<'_>, targets: &[TableName]) -> RestoreResult {
    for (i, target) in targets.iter().enumerate() {
        if i > 0 {
            ctx.write_plain(",")?;
        }
        ctx.write_raw_table_name(target)?;
    }
    Ok(())
}

impl Restore for LoadColumn {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        match self {
            Self::Column(column) => column.restore(ctx),
            Self::Variable(name) => {
                ctx.write_plain("@")?;
                ctx.write_name(name)
            }
        }
    }
}

impl Restore for LoadOption {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        ctx.write_word(&self.name)?;
        if let Some(value) = &self.value {
            ctx.write_plain("=")?;
            value.restore(ctx)?;
        }
        Ok(())
    }
}

/// Writes the column list and SET clause shared by LOAD DATA and
/// IMPORT INTO.
fn write_load_columns(
    ctx: &mut RestoreCtx<'_>,
    columns: &[LoadColumn],
    set: &[Assignment],
) -> RestoreResult {
    if !columns.is_empty() {
        ctx.write_plain(" (")?;
        ctx.write_list(columns, ",")?;
        ctx.write_plain(")")?;
    }
    if !set.is_empty() {
        ctx.write_keyword(" SET ")?;
        ctx.write_list(set, ",")?;
    }
    Ok(())
}

fn write_load_options(ctx: &mut RestoreCtx<'_>, options: &[LoadOption]) -> RestoreResult {
    if !options.is_empty() {
        ctx.write_keyword(" WITH ")?;
        ctx.write_list(options, ", ")?;
    }
    Ok(())
}

fn write_format(ctx: &mut RestoreCtx<'_>, format: Option<&String>) -> RestoreResult {
    if let Some(format) = format {
        ctx.write_keyword(" FORMAT ")?;
        ctx.write_string(format)?;
    }
    Ok(())
}

impl Restore for LoadData {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        ctx.write_keyword("LOAD DATA ")?;
        if self.low_priority {
            ctx.write_keyword("LOW_PRIORITY ")?;
        }
        if self.local {
            ctx.write_keyword("LOCAL ")?;
        }
        ctx.write_keyword("INFILE ")?;
        ctx.write_string(&self.path)?;
        write_format(ctx, self.format.as_ref())?;
        match self.on_duplicate {
            OnDuplicate::Error => {}
            OnDuplicate::Ignore => ctx.write_keyword(" IGNORE")?,
            OnDuplicate::Replace => ctx.write_keyword(" REPLACE")?,
        }
        ctx.write_keyword(" INTO TABLE ")?;
        ctx.write_table_name(&self.table)?;
        if let Some(charset) = &self.charset {
            ctx.write_keyword(" CHARACTER SET ")?;
            ctx.write_keyword(charset)?;
        }
        if let Some(fields) = &self.fields {
            ctx.write_plain(" ")?;
            fields.restore(ctx)?;
        }
        if let Some(lines) = &self.lines {
            ctx.write_plain(" ")?;
            lines.restore(ctx)?;
        }
        if let Some(count) = self.ignore_lines {
            ctx.write_keyword(" IGNORE ")?;
            ctx.write_display(count)?;
            ctx.write_keyword(" LINES")?;
        }
        write_load_columns(ctx, &self.columns, &self.set)?;
        write_load_options(ctx, &self.options)
    }
}

impl Restore for ImportInto {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        ctx.write_keyword("IMPORT INTO ")?;
        ctx.write_table_name(&self.table)?;
        write_load_columns(ctx, &self.columns, &self.set)?;
        ctx.write_keyword(" FROM ")?;
        match &self.source {
            ImportSource::Path(path) => ctx.write_string(path)?,
            ImportSource::Query(query) => query.restore(ctx)?,
        }
        write_format(ctx, self.format.as_ref())?;
        write_load_options(ctx, &self.options)
    }
}

impl Restore for Call {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        ctx.write_keyword("CALL ")?;
        ctx.write_table_name(&self.procedure)?;
        ctx.write_plain("(")?;
        ctx.write_list(&self.args, ",")?;
        ctx.write_plain(")")
    }
}

impl Restore for NonTransactionalDml {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        ctx.write_keyword("BATCH ")?;
        if let Some(column) = &self.shard_column {
            ctx.write_keyword("ON ")?;
            column.restore(ctx)?;
            ctx.write_plain(" ")?;
        }
        ctx.write_keyword("LIMIT ")?;
        ctx.write_display(self.limit)?;
        match self.dry_run {
            None => {}
            Some(DryRun::Plain) => ctx.write_keyword(" DRY RUN")?,
            Some(DryRun::Query) => ctx.write_keyword(" DRY RUN QUERY")?,
        }
        ctx.write_plain(" ")?;
        self.dml.restore(ctx)
    }
}

#[cfg(test)]
mod tests {
    use crate::restore::{restore, RestoreFlags};
    use crate::Parser;

    fn round_trip(sql: &str) -> String {
        let parser = Parser::new();
        let stmt = parser.parse_one_stmt(sql, "", "").unwrap().stmt;
        let restored = restore(&stmt, RestoreFlags::DEFAULT).unwrap();
        let again = parser.parse_one_stmt(&restored, "", "").unwrap().stmt;
        assert_eq!(again, stmt, "{restored}");
        restored
    }

    #[test]
    fn test_insert_forms() {
        assert_eq!(
            round_trip("insert ignore into t (a, b) values (1, 2), (3, default) on duplicate key update a = values(a)"),
            "INSERT IGNORE INTO `t` (`a`,`b`) VALUES (1,2),(3,DEFAULT) ON DUPLICATE KEY UPDATE `a`=VALUES(`a`)"
        );
        assert_eq!(
            round_trip("replace low_priority t set a = 1"),
            "REPLACE LOW_PRIORITY INTO `t` SET `a`=1"
        );
        assert_eq!(
            round_trip("insert into t partition (p1) select * from u"),
            "INSERT INTO `t` PARTITION(`p1`) SELECT * FROM `u`"
        );
        assert_eq!(round_trip("insert into t values ()"), "INSERT INTO `t` VALUES ()");
    }

    #[test]
    fn test_update_and_delete() {
        assert_eq!(
            round_trip("update low_priority t set a = a + 1 where b = 2 order by c limit 10"),
            "UPDATE LOW_PRIORITY `t` SET `a`=`a`+1 WHERE `b`=2 ORDER BY `c` LIMIT 10"
        );
        assert_eq!(
            round_trip("delete quick from t where a = 1 limit 1"),
            "DELETE QUICK FROM `t` WHERE `a`=1 LIMIT 1"
        );
        assert_eq!(
            round_trip("delete t1, t2.* from t1 join t2 on t1.a = t2.a"),
            "DELETE `t1`,`t2` FROM (`t1`) JOIN `t2` ON `t1`.`a`=`t2`.`a`"
        );
        assert_eq!(
            round_trip("delete from t1 using t1, t2 where t1.a = t2.a"),
            "DELETE FROM `t1` USING (`t1`) JOIN `t2` WHERE `t1`.`a`=`t2`.`a`"
        );
        round_trip("with c as (select 1 as a) update t, c set t.a = c.a");
    }

    #[test]
    fn test_load_data() {
        assert_eq!(
            round_trip(
                "load data local infile '/tmp/t.csv' into table t fields terminated by 'kk' enclosed by '\\r'"
            ),
            "LOAD DATA LOCAL INFILE '/tmp/t.csv' IGNORE INTO TABLE `t` FIELDS TERMINATED BY 'kk' ENCLOSED BY '\\r'"
        );
        assert_eq!(
            round_trip(
                "load data infile 'a' replace into table t character set utf8mb4 lines starting by 'x' ignore 1 rows (a, @b) set c = @b with thread = 2, detached"
            ),
            "LOAD DATA INFILE 'a' REPLACE INTO TABLE `t` CHARACTER SET UTF8MB4 LINES STARTING BY 'x' IGNORE 1 LINES (`a`,@`b`) SET `c`=@`b` WITH THREAD=2, DETACHED"
        );
    }

    #[test]
    fn test_import_call_batch() {
        assert_eq!(
            round_trip("import into t (a, @b) from 's3://bucket/x.csv' format 'csv' with detached"),
            "IMPORT INTO `t` (`a`,@`b`) FROM 's3://bucket/x.csv' FORMAT 'csv' WITH DETACHED"
        );
        assert_eq!(round_trip("call db.p"), "CALL `db`.`p`()");
        assert_eq!(round_trip("call p(1, @a)"), "CALL `p`(1,@`a`)");
        assert_eq!(
            round_trip("batch on id limit 100 dry run delete from t where a > 1"),
            "BATCH ON `id` LIMIT 100 DRY RUN DELETE FROM `t` WHERE `a`>1"
        );
    }
}
