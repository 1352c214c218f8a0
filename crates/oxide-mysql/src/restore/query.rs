//! Query expressions, table references and optimizer hints.

use super::expr::restore_nested_query;
use super::{Restore, RestoreCtx, RestoreResult};
use crate::ast::{
    CommonTableExpr, Expr, FieldsClause, GroupBy, Hint, HintArgs, HintTable, IndexHint, IndexHintKind,
    IndexHintScope, Join, JoinKind, Limit, LinesClause, LockClause, LockMode, LockWait,
    NamedWindow, Query, QueryBody, Select, SelectField, SelectInto, TableRef, TableSource,
    WithClause,
};

const MB: u64 = 1 << 20;
const GB: u64 = 1 << 30;

impl Restore for Query {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        let scoped = self.with.is_some();
        if let Some(with) = &self.with {
            ctx.push_cte_scope(with.ctes.iter().map(|cte| cte.name.clone()).collect());
            with.restore(ctx)?;
            ctx.write_plain(" ")?;
        }
        self.body.restore(ctx)?;
        if !self.order_by.is_empty() {
            ctx.write_keyword(" ORDER BY ")?;
            ctx.write_list(&self.order_by, ",")?;
        }
        if let Some(limit) = &self.limit {
            ctx.write_plain(" ")?;
            limit.restore(ctx)?;
        }
        if let Some(into) = &self.into {
            ctx.write_plain(" ")?;
            into.restore(ctx)?;
        }
        if let Some(lock) = &self.lock {
            ctx.write_plain(" ")?;
            lock.restore(ctx)?;
        }
        if scoped {
            ctx.pop_cte_scope();
        }
        Ok(())
    }
}

impl Restore for WithClause {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        ctx.write_keyword("WITH ")?;
        if self.recursive {
            ctx.write_keyword("RECURSIVE ")?;
        }
        ctx.write_list(&self.ctes, ", ")
    }
}

impl Restore for CommonTableExpr {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        ctx.write_name(&self.name)?;
        if !self.columns.is_empty() {
            ctx.write_plain(" (")?;
            ctx.write_name_list(&self.columns)?;
            ctx.write_plain(")")?;
        }
        ctx.write_keyword(" AS ")?;
        ctx.write_plain("(")?;
        restore_nested_query(ctx, &self.query)?;
        ctx.write_plain(")")
    }
}

impl Restore for QueryBody {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        match self {
            Self::Select(select) => select.restore(ctx),
            Self::SetOp {
                op,
                all,
                left,
                right,
            } => {
                left.restore(ctx)?;
                ctx.write_plain(" ")?;
                ctx.write_keyword(op.as_str())?;
                ctx.write_plain(" ")?;
                if *all {
                    ctx.write_keyword("ALL ")?;
                }
                right.restore(ctx)
            }
            Self::Paren(query) => {
                ctx.write_plain("(")?;
                restore_nested_query(ctx, query)?;
                ctx.write_plain(")")
            }
            Self::Values(rows) => {
                ctx.write_keyword("VALUES ")?;
                write_rows(ctx, rows)
            }
            Self::Table(table) => {
                ctx.write_keyword("TABLE ")?;
                ctx.write_table_name(table)
            }
        }
    }
}

/// Writes `ROW(..), ROW(..)`.
pub(super) fn write_rows(ctx: &mut RestoreCtx<'_>, rows: &[Vec<Expr>]) -> RestoreResult {
    for (i, row) in rows.iter().enumerate() {
        if i > 0 {
            ctx.write_plain(", ")?;
        }
        ctx.write_keyword("ROW")?;
        ctx.write_plain("(")?;
        ctx.write_list(row, ",")?;
        ctx.write_plain(")")?;
    }
    Ok(())
}

impl Restore for Select {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        ctx.write_keyword("SELECT ")?;
        write_hints(ctx, &self.hints)?;
        let options = &self.options;
        let flags = [
            (options.distinct, "DISTINCT "),
            (options.high_priority, "HIGH_PRIORITY "),
            (options.straight_join, "STRAIGHT_JOIN "),
            (options.small_result, "SQL_SMALL_RESULT "),
            (options.big_result, "SQL_BIG_RESULT "),
            (options.buffer_result, "SQL_BUFFER_RESULT "),
            (options.cache == Some(true), "SQL_CACHE "),
            (options.cache == Some(false), "SQL_NO_CACHE "),
            (options.calc_found_rows, "SQL_CALC_FOUND_ROWS "),
        ];
        for (set, keyword) in flags {
            if set {
                ctx.write_keyword(keyword)?;
            }
        }
        ctx.write_list(&self.fields, ",")?;
        match &self.from {
            Some(from) => {
                ctx.write_keyword(" FROM ")?;
                from.restore(ctx)?;
            }
            None if self.selection.is_some() || self.group_by.is_some() || self.having.is_some() => {
                ctx.write_keyword(" FROM DUAL")?;
            }
            None => {}
        }
        if let Some(selection) = &self.selection {
            ctx.write_keyword(" WHERE ")?;
            selection.restore(ctx)?;
        }
        if let Some(group_by) = &self.group_by {
            ctx.write_plain(" ")?;
            group_by.restore(ctx)?;
        }
        if let Some(having) = &self.having {
            ctx.write_keyword(" HAVING ")?;
            having.restore(ctx)?;
        }
        if !self.windows.is_empty() {
            ctx.write_keyword(" WINDOW ")?;
            ctx.write_list(&self.windows, ",")?;
        }
        Ok(())
    }
}

impl Restore for SelectField {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        match self {
            Self::Wildcard { table: None } => ctx.write_plain("*"),
            Self::Wildcard { table: Some(table) } => {
                ctx.write_raw_table_name(table)?;
                ctx.write_plain(".*")
            }
            Self::Expr { expr, alias } => {
                expr.restore(ctx)?;
                if let Some(alias) = alias {
                    ctx.write_keyword(" AS ")?;
                    ctx.write_name(alias)?;
                }
                Ok(())
            }
        }
    }
}

impl Restore for GroupBy {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        ctx.write_keyword("GROUP BY ")?;
        ctx.write_list(&self.items, ",")?;
        if self.rollup {
            ctx.write_keyword(" WITH ROLLUP")?;
        }
        Ok(())
    }
}

impl Restore for NamedWindow {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        ctx.write_name(&self.name)?;
        ctx.write_keyword(" AS ")?;
        ctx.write_plain("(")?;
        self.spec.restore(ctx)?;
        ctx.write_plain(")")
    }
}

impl Restore for TableRef {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        match self {
            Self::Table(source) => source.restore(ctx),
            Self::Derived {
                query,
                alias,
                columns,
            } => {
                ctx.write_plain("(")?;
                restore_nested_query(ctx, query)?;
                ctx.write_plain(")")?;
                if let Some(alias) = alias {
                    ctx.write_keyword(" AS ")?;
                    ctx.write_name(alias)?;
                    if !columns.is_empty() {
                        ctx.write_plain(" (")?;
                        ctx.write_name_list(columns)?;
                        ctx.write_plain(")")?;
                    }
                }
                Ok(())
            }
            Self::Join(join) => join.restore(ctx),
        }
    }
}

impl Restore for TableSource {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        ctx.write_table_name(&self.name)?;
        if !self.partitions.is_empty() {
            ctx.write_keyword(" PARTITION")?;
            ctx.write_plain("(")?;
            ctx.write_name_list(&self.partitions)?;
            ctx.write_plain(")")?;
        }
        if let Some(as_of) = &self.as_of {
            ctx.write_keyword(" AS OF TIMESTAMP ")?;
            as_of.restore(ctx)?;
        }
        if let Some(alias) = &self.alias {
            ctx.write_keyword(" AS ")?;
            ctx.write_name(alias)?;
        }
        for hint in &self.index_hints {
            ctx.write_plain(" ")?;
            hint.restore(ctx)?;
        }
        Ok(())
    }
}

impl Restore for IndexHint {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        ctx.write_keyword(match self.kind {
            IndexHintKind::Use => "USE INDEX",
            IndexHintKind::Ignore => "IGNORE INDEX",
            IndexHintKind::Force => "FORCE INDEX",
        })?;
        ctx.write_keyword(match self.scope {
            IndexHintScope::Any => " ",
            IndexHintScope::Join => " FOR JOIN ",
            IndexHintScope::OrderBy => " FOR ORDER BY ",
            IndexHintScope::GroupBy => " FOR GROUP BY ",
        })?;
        ctx.write_plain("(")?;
        for (i, index) in self.indexes.iter().enumerate() {
            if i > 0 {
                ctx.write_plain(", ")?;
            }
            if index == "PRIMARY" {
                ctx.write_keyword("PRIMARY")?;
            } else {
                ctx.write_name(index)?;
            }
        }
        ctx.write_plain(")")
    }
}

impl Restore for Join {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        let nested = ctx.join_level != 0;
        if nested {
            ctx.write_plain("(")?;
        }
        ctx.join_level += 1;
        let result = self.restore_sides(ctx);
        ctx.join_level -= 1;
        result?;
        if nested {
            ctx.write_plain(")")?;
        }
        Ok(())
    }
}

impl Join {
    fn restore_sides(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        self.left.restore(ctx)?;
        let Some(right) = &self.right else {
            return Ok(());
        };
        if self.natural {
            ctx.write_keyword(" NATURAL")?;
        }
        match self.kind {
            JoinKind::Cross => {}
            JoinKind::Left => ctx.write_keyword(" LEFT")?,
            JoinKind::Right => ctx.write_keyword(" RIGHT")?,
        }
        ctx.write_keyword(if self.straight {
            " STRAIGHT_JOIN "
        } else {
            " JOIN "
        })?;
        right.restore(ctx)?;
        if let Some(on) = &self.on {
            ctx.write_keyword(" ON ")?;
            on.restore(ctx)?;
        } else if !self.using.is_empty() {
            ctx.write_keyword(" USING ")?;
            ctx.write_plain("(")?;
            ctx.write_name_list(&self.using)?;
            ctx.write_plain(")")?;
        }
        Ok(())
    }
}

impl Restore for Limit {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        ctx.write_keyword("LIMIT ")?;
        if let Some(offset) = &self.offset {
            offset.restore(ctx)?;
            ctx.write_plain(",")?;
        }
        self.count.restore(ctx)
    }
}

impl Restore for LockClause {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        ctx.write_keyword(match self.mode {
            LockMode::Update => "FOR UPDATE",
            LockMode::Share => "FOR SHARE",
            LockMode::InShareMode => "LOCK IN SHARE MODE",
        })?;
        if !self.tables.is_empty() {
            ctx.write_keyword(" OF ")?;
            ctx.write_table_names(&self.tables)?;
        }
        match self.wait {
            LockWait::Default => Ok(()),
            LockWait::NoWait => ctx.write_keyword(" NOWAIT"),
            LockWait::Wait(seconds) => {
                ctx.write_keyword(" WAIT ")?;
                ctx.write_display(seconds)
            }
            LockWait::SkipLocked => ctx.write_keyword(" SKIP LOCKED"),
        }
    }
}

impl Restore for SelectInto {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        ctx.write_keyword("INTO ")?;
        match self {
            Self::Outfile {
                path,
                fields,
                lines,
            } => {
                ctx.write_keyword("OUTFILE ")?;
                ctx.write_string(path)?;
                if let Some(fields) = fields {
                    ctx.write_plain(" ")?;
                    fields.restore(ctx)?;
                }
                if let Some(lines) = lines {
                    ctx.write_plain(" ")?;
                    lines.restore(ctx)?;
                }
                Ok(())
            }
            Self::Dumpfile(path) => {
                ctx.write_keyword("DUMPFILE ")?;
                ctx.write_string(path)
            }
            Self::Variables(targets) => ctx.write_list(targets, ","),
        }
    }
}

impl Restore for FieldsClause {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        ctx.write_keyword(if self.columns_keyword {
            "COLUMNS"
        } else {
            "FIELDS"
        })?;
        if let Some(terminated) = &self.terminated {
            ctx.write_keyword(" TERMINATED BY ")?;
            ctx.write_bytes(terminated)?;
        }
        if let Some(enclosed) = &self.enclosed {
            if self.optionally {
                ctx.write_keyword(" OPTIONALLY")?;
            }
            ctx.write_keyword(" ENCLOSED BY ")?;
            ctx.write_bytes(enclosed)?;
        }
        if let Some(escaped) = &self.escaped {
            ctx.write_keyword(" ESCAPED BY ")?;
            ctx.write_bytes(escaped)?;
        }
        if let Some(null) = &self.defined_null_by {
            ctx.write_keyword(" DEFINED NULL BY ")?;
            ctx.write_bytes(null)?;
        }
        Ok(())
    }
}

impl Restore for LinesClause {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        ctx.write_keyword("LINES")?;
        if let Some(starting) = &self.starting {
            ctx.write_keyword(" STARTING BY ")?;
            ctx.write_bytes(starting)?;
        }
        if let Some(terminated) = &self.terminated {
            ctx.write_keyword(" TERMINATED BY ")?;
            ctx.write_bytes(terminated)?;
        }
        Ok(())
    }
}

/// Writes `/*+ HINT(..), HINT(..)*/ ` when `hints` is not empty.
pub(super) fn write_hints(ctx: &mut RestoreCtx<'_>, hints: &[Hint]) -> RestoreResult {
    if hints.is_empty() {
        return Ok(());
    }
    ctx.write_plain("/*+ ")?;
    ctx.write_list(hints, ", ")?;
    ctx.write_plain("*/ ")
}

fn write_query_block(ctx: &mut RestoreCtx<'_>, query_block: Option<&String>) -> RestoreResult {
    if let Some(query_block) = query_block {
        ctx.write_plain("@")?;
        ctx.write_name(query_block)?;
    }
    Ok(())
}

impl Restore for HintTable {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        if let Some(schema) = &self.schema {
            ctx.write_name(schema)?;
            ctx.write_plain(".")?;
        }
        ctx.write_name(&self.table)?;
        write_query_block(ctx, self.query_block.as_ref())?;
        if !self.partitions.is_empty() {
            ctx.write_keyword(" PARTITION")?;
            ctx.write_plain("(")?;
            ctx.write_name_list(&self.partitions)?;
            ctx.write_plain(")")?;
        }
        Ok(())
    }
}

impl Restore for Hint {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        ctx.write_keyword(&self.name)?;
        ctx.write_plain("(")?;
        write_query_block(ctx, self.query_block.as_ref())?;
        let has_args = match &self.args {
            HintArgs::None => false,
            HintArgs::Tables(tables) => !tables.is_empty(),
            _ => true,
        };
        if self.query_block.is_some() && has_args {
            ctx.write_plain(" ")?;
        }
        match &self.args {
            HintArgs::None => {}
            HintArgs::Tables(tables) => ctx.write_list(tables, ", ")?,
            HintArgs::Indexes { table, indexes } => {
                table.restore(ctx)?;
                for index in indexes {
                    ctx.write_plain(", ")?;
                    ctx.write_name(index)?;
                }
            }
            HintArgs::Integer(value) => ctx.write_display(value)?,
            HintArgs::MemoryQuota(bytes) => {
                if *bytes != 0 && bytes % GB == 0 {
                    ctx.write_display(format_args!("{} GB", bytes / GB))?;
                } else {
                    ctx.write_display(format_args!("{} MB", bytes / MB))?;
                }
            }
            HintArgs::Bool(value) => ctx.write_keyword(if *value { "TRUE" } else { "FALSE" })?,
            HintArgs::Storage(engines) => {
                for (i, (engine, tables)) in engines.iter().enumerate() {
                    if i > 0 {
                        ctx.write_plain(", ")?;
                    }
                    ctx.write_keyword(engine)?;
                    ctx.write_plain("[")?;
                    ctx.write_list(tables, ", ")?;
                    ctx.write_plain("]")?;
                }
            }
            HintArgs::Ident(name) => ctx.write_name(name)?,
            HintArgs::SetVar { name, value } => {
                ctx.write_plain(name)?;
                ctx.write_plain("=")?;
                ctx.write_plain(value)?;
            }
        }
        ctx.write_plain(")")
    }
}

#[cfg(test)]
mod tests {
    use crate::config::ParserConfig;
    use crate::restore::{restore, restore_with_default_db, RestoreFlags};
    use crate::Parser;

    fn round_trip(sql: &str) -> String {
        let parser = Parser::with_config(ParserConfig {
            enable_window_func: true,
            ..ParserConfig::default()
        });
        let stmt = parser.parse_one_stmt(sql, "", "").unwrap().stmt;
        let restored = restore(&stmt, RestoreFlags::DEFAULT).unwrap();
        let again = parser.parse_one_stmt(&restored, "", "").unwrap().stmt;
        assert_eq!(again, stmt, "{restored}");
        restored
    }

    #[test]
    fn test_simple_select() {
        assert_eq!(
            round_trip("select a, b as c from t where a > 1"),
            "SELECT `a`,`b` AS `c` FROM `t` WHERE `a`>1"
        );
        assert_eq!(round_trip("select 1 from dual where 1"), "SELECT 1 FROM DUAL WHERE 1");
        assert_eq!(round_trip("select t.*, db.u.* from t"), "SELECT `t`.*,`db`.`u`.* FROM `t`");
    }

    #[test]
    fn test_comma_join_is_parenthesized() {
        assert_eq!(
            round_trip(
                "SELECT /*+ TIDB_INLJ(t1, t2), TIDB_INLJ(t3, t4) */ c1, c2 FROM t1, t2 WHERE t1.c1 = t2.c1"
            ),
            "SELECT /*+ TIDB_INLJ(`t1`, `t2`), TIDB_INLJ(`t3`, `t4`)*/ `c1`,`c2` FROM (`t1`) JOIN `t2` WHERE `t1`.`c1`=`t2`.`c1`"
        );
    }

    #[test]
    fn test_outer_joins() {
        assert_eq!(
            round_trip("select * from a left join b on a.x = b.x natural right join c"),
            "SELECT * FROM ((`a`) LEFT JOIN `b` ON `a`.`x`=`b`.`x`) NATURAL RIGHT JOIN `c`"
        );
        assert_eq!(
            round_trip("select * from a join b using (x, y)"),
            "SELECT * FROM (`a`) JOIN `b` USING (`x`, `y`)"
        );
        round_trip("select * from a straight_join (b join c on b.x = c.x)");
    }

    #[test]
    fn test_derived_table_and_index_hints() {
        assert_eq!(
            round_trip("select * from (select a from t) d (x)"),
            "SELECT * FROM (SELECT `a` FROM `t`) AS `d` (`x`)"
        );
        assert_eq!(
            round_trip("select * from t partition (p0) as x use index for join (i1, primary)"),
            "SELECT * FROM `t` PARTITION(`p0`) AS `x` USE INDEX FOR JOIN (`i1`, PRIMARY)"
        );
    }

    #[test]
    fn test_query_tail() {
        assert_eq!(
            round_trip("select a from t order by a desc limit 2, 3 for update of t skip locked"),
            "SELECT `a` FROM `t` ORDER BY `a` DESC LIMIT 2,3 FOR UPDATE OF `t` SKIP LOCKED"
        );
        assert_eq!(
            round_trip("select a from t offset 2 rows fetch next 5 rows only"),
            "SELECT `a` FROM `t` LIMIT 2,5"
        );
        assert_eq!(
            round_trip("select a from t lock in share mode"),
            "SELECT `a` FROM `t` LOCK IN SHARE MODE"
        );
        assert_eq!(
            round_trip("select a from t into @x, @y"),
            "SELECT `a` FROM `t` INTO @`x`,@`y`"
        );
        assert_eq!(
            round_trip("select a from t into outfile '/tmp/a' fields terminated by ',' optionally enclosed by '\"' lines terminated by '\\n'"),
            "SELECT `a` FROM `t` INTO OUTFILE '/tmp/a' FIELDS TERMINATED BY ',' OPTIONALLY ENCLOSED BY '\"' LINES TERMINATED BY '\\n'"
        );
    }

    #[test]
    fn test_set_operations() {
        assert_eq!(
            round_trip("select 1 union all select 2 intersect select 3 order by 1"),
            "SELECT 1 UNION ALL SELECT 2 INTERSECT SELECT 3 ORDER BY 1"
        );
        assert_eq!(
            round_trip("(select 1) except values row(1, 2)"),
            "(SELECT 1) EXCEPT VALUES ROW(1,2)"
        );
        assert_eq!(round_trip("table t"), "TABLE `t`");
    }

    #[test]
    fn test_with_clause() {
        assert_eq!(
            round_trip(
                "with recursive cte (n) as (select 1 union all select n + 1 from cte where n < 5) select * from cte"
            ),
            "WITH RECURSIVE `cte` (`n`) AS (SELECT 1 UNION ALL SELECT `n`+1 FROM `cte` WHERE `n`<5) SELECT * FROM `cte`"
        );
    }

    #[test]
    fn test_default_db() {
        let stmt = Parser::new()
            .parse_one_stmt("with c as (select 1) select * from c, t", "", "")
            .unwrap()
            .stmt;
        assert_eq!(
            restore_with_default_db(&stmt, RestoreFlags::DEFAULT, "test").unwrap(),
            "WITH `c` AS (SELECT 1) SELECT * FROM (`c`) JOIN `test`.`t`"
        );
    }

    #[test]
    fn test_group_by_and_windows() {
        assert_eq!(
            round_trip(
                "select a, sum(b) over w from t group by a with rollup having a > 1 window w as (order by a)"
            ),
            "SELECT `a`,SUM(`b`) OVER `w` FROM `t` GROUP BY `a` WITH ROLLUP HAVING `a`>1 WINDOW `w` AS (ORDER BY `a`)"
        );
        assert_eq!(
            round_trip("select distinct sql_no_cache sql_calc_found_rows a from t"),
            "SELECT DISTINCT SQL_NO_CACHE SQL_CALC_FOUND_ROWS `a` FROM `t`"
        );
    }

    #[test]
    fn test_hint_arguments() {
        assert_eq!(
            round_trip(
                "select /*+ memory_quota(2 gb), use_index(@qb1 t, i1), read_from_storage(tiflash[t]), set_var(max_execution_time=1000) */ 1"
            ),
            "SELECT /*+ MEMORY_QUOTA(2 GB), USE_INDEX(@`qb1` `t`, `i1`), READ_FROM_STORAGE(TIFLASH[`t`]), SET_VAR(max_execution_time=1000)*/ 1"
        );
    }
}
