//! SHOW, ADMIN and the operational statements.

use super::cluster::write_partition_names;
use super::{Restore, RestoreCtx, RestoreResult};
use crate::ast::{
    Admin, Analyze, AnalyzeTarget, BdrRole, Brie, BrieKind, BrieScope, BrieValue,
    CalibrateOption, CalibrateResource, Explain, ExplainTarget, Expr, Flush, FlushKind, Kill,
    PlanCacheScope, PlanReplayer, QueryWatch, QueryWatchOption, Show, ShowFilter, ShowKind,
    SlowQueryKind, Trace, Traffic, VarScope,
};

fn write_scope(ctx: &mut RestoreCtx<'_>, scope: VarScope) -> RestoreResult {
    ctx.write_keyword(if scope == VarScope::Global { "GLOBAL " } else { "SESSION " })
}

fn write_opt_db(ctx: &mut RestoreCtx<'_>, db: Option<&String>) -> RestoreResult {
    if let Some(db) = db {
        ctx.write_keyword(" FROM ")?;
        ctx.write_name(db)?;
    }
    Ok(())
}

/// SHOW targets that are a fixed run of keywords.
const fn show_words(kind: &ShowKind) -> Option<&'static str> {
    Some(match kind {
        ShowKind::Databases => "DATABASES",
        ShowKind::Warnings => "WARNINGS",
        ShowKind::Errors => "ERRORS",
        ShowKind::CountWarnings => "COUNT(*) WARNINGS",
        ShowKind::CountErrors => "COUNT(*) ERRORS",
        ShowKind::Engines => "ENGINES",
        ShowKind::Charset => "CHARSET",
        ShowKind::Collation => "COLLATION",
        ShowKind::Privileges => "PRIVILEGES",
        ShowKind::Plugins => "PLUGINS",
        ShowKind::Profiles => "PROFILES",
        ShowKind::MasterStatus => "MASTER STATUS",
        ShowKind::BindingCacheStatus => "BINDING_CACHE STATUS",
        ShowKind::StatsMeta => "STATS_META",
        ShowKind::StatsHistograms => "STATS_HISTOGRAMS",
        ShowKind::StatsBuckets => "STATS_BUCKETS",
        ShowKind::StatsHealthy => "STATS_HEALTHY",
        ShowKind::StatsTopn => "STATS_TOPN",
        ShowKind::StatsLocked => "STATS_LOCKED",
        ShowKind::StatsExtended => "STATS_EXTENDED",
        ShowKind::AnalyzeStatus => "ANALYZE STATUS",
        ShowKind::ColumnStatsUsage => "COLUMN_STATS_USAGE",
        ShowKind::Backups => "BACKUPS",
        ShowKind::Restores => "RESTORES",
        ShowKind::PlacementLabels => "PLACEMENT LABELS",
        ShowKind::Placement => "PLACEMENT",
        ShowKind::Builtins => "BUILTINS",
        ShowKind::ImportJobs => "IMPORT JOBS",
        ShowKind::DistributionJobs => "DISTRIBUTION JOBS",
        ShowKind::SessionStates => "SESSION_STATES",
        ShowKind::Config => "CONFIG",
        ShowKind::ProcedureStatus => "PROCEDURE STATUS",
        ShowKind::FunctionStatus => "FUNCTION STATUS",
        ShowKind::TrafficJobs => "TRAFFIC JOBS",
        ShowKind::BackupLogsStatus => "BACKUP LOGS STATUS",
        _ => return None,
    })
}

impl Restore for ShowKind {
    #[allow(clippy::too_many_lines)]
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        if let Some(words) = show_words(self) {
            return ctx.write_keyword(words);
        }
        match self {
            Self::Tables { full, db } => {
                if *full {
                    ctx.write_keyword("FULL ")?;
                }
                ctx.write_keyword("TABLES")?;
                write_opt_db(ctx, db.as_ref())
            }
            Self::TableStatus(db) => {
                ctx.write_keyword("TABLE STATUS")?;
                write_opt_db(ctx, db.as_ref())
            }
            Self::Columns {
                extended,
                full,
                table,
            } => {
                if *extended {
                    ctx.write_keyword("EXTENDED ")?;
                }
                if *full {
                    ctx.write_keyword("FULL ")?;
                }
                ctx.write_keyword("COLUMNS FROM ")?;
                ctx.write_table_name(table)
            }
            Self::Index(table) => {
                ctx.write_keyword("INDEX FROM ")?;
                ctx.write_table_name(table)
            }
            Self::Variables(scope) => {
                write_scope(ctx, *scope)?;
                ctx.write_keyword("VARIABLES")
            }
            Self::Status(scope) => {
                write_scope(ctx, *scope)?;
                ctx.write_keyword("STATUS")
            }
            Self::Bindings(global) => {
                ctx.write_keyword(if *global { "GLOBAL BINDINGS" } else { "SESSION BINDINGS" })
            }
            Self::Processlist(full) => {
                if *full {
                    ctx.write_keyword("FULL ")?;
                }
                ctx.write_keyword("PROCESSLIST")
            }
            Self::CreateTable(table) => {
                ctx.write_keyword("CREATE TABLE ")?;
                ctx.write_table_name(table)
            }
            Self::CreateView(table) => {
                ctx.write_keyword("CREATE VIEW ")?;
                ctx.write_table_name(table)
            }
            Self::CreateSequence(table) => {
                ctx.write_keyword("CREATE SEQUENCE ")?;
                ctx.write_table_name(table)
            }
            Self::CreateDatabase {
                if_not_exists,
                name,
            } => {
                ctx.write_keyword("CREATE DATABASE ")?;
                if *if_not_exists {
                    ctx.write_keyword("IF NOT EXISTS ")?;
                }
                ctx.write_name(name)
            }
            Self::CreateUser(user) => {
                ctx.write_keyword("CREATE USER ")?;
                user.restore(ctx)
            }
            Self::CreatePlacementPolicy(name) => {
                ctx.write_keyword("CREATE PLACEMENT POLICY ")?;
                ctx.write_name(name)
            }
            Self::CreateResourceGroup(name) => {
                ctx.write_keyword("CREATE RESOURCE GROUP ")?;
                ctx.write_name(name)
            }
            Self::Grants { user, roles } => {
                ctx.write_keyword("GRANTS")?;
                if let Some(user) = user {
                    ctx.write_keyword(" FOR ")?;
                    user.restore(ctx)?;
                    if !roles.is_empty() {
                        ctx.write_keyword(" USING ")?;
                        ctx.write_list(roles, ", ")?;
                    }
                }
                Ok(())
            }
            Self::Triggers(db) => {
                ctx.write_keyword("TRIGGERS")?;
                write_opt_db(ctx, db.as_ref())
            }
            Self::Events(db) => {
                ctx.write_keyword("EVENTS")?;
                write_opt_db(ctx, db.as_ref())
            }
            Self::OpenTables(db) => {
                ctx.write_keyword("OPEN TABLES")?;
                write_opt_db(ctx, db.as_ref())
            }
            Self::PlacementFor {
                db,
                table,
                partition,
            } => {
                ctx.write_keyword("PLACEMENT FOR ")?;
                if let Some(db) = db {
                    ctx.write_keyword("DATABASE ")?;
                    return ctx.write_name(db);
                }
                if let Some(table) = table {
                    ctx.write_keyword("TABLE ")?;
                    ctx.write_table_name(table)?;
                }
                if let Some(partition) = partition {
                    ctx.write_keyword(" PARTITION ")?;
                    ctx.write_name(partition)?;
                }
                Ok(())
            }
            Self::Regions {
                table,
                partitions,
                index,
            } => {
                ctx.write_keyword("TABLE ")?;
                ctx.write_table_name(table)?;
                write_partition_names(ctx, partitions)?;
                if let Some(index) = index {
                    ctx.write_keyword(" INDEX ")?;
                    ctx.write_name(index)?;
                }
                ctx.write_keyword(" REGIONS")
            }
            Self::TableNextRowId(table) => {
                ctx.write_keyword("TABLE ")?;
                ctx.write_table_name(table)?;
                ctx.write_keyword(" NEXT_ROW_ID")
            }
            Self::ImportJob(id) => {
                ctx.write_keyword("IMPORT JOB ")?;
                ctx.write_display(id)
            }
            Self::BackupLogsMetadata(url) => {
                ctx.write_keyword("BACKUP LOGS METADATA FROM ")?;
                ctx.write_string(url)
            }
            _ => Ok(()),
        }
    }
}

impl Restore for Show {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        ctx.write_keyword("SHOW ")?;
        self.kind.restore(ctx)?;
        match &self.filter {
            Some(ShowFilter::Like(pattern)) => {
                ctx.write_keyword(" LIKE ")?;
                pattern.restore(ctx)
            }
            Some(ShowFilter::Where(expr)) => {
                ctx.write_keyword(" WHERE ")?;
                expr.restore(ctx)
            }
            None => Ok(()),
        }
    }
}

fn write_ids(ctx: &mut RestoreCtx<'_>, ids: &[u64]) -> RestoreResult {
    for (i, id) in ids.iter().enumerate() {
        if i > 0 {
            ctx.write_plain(", ")?;
        }
        ctx.write_display(id)?;
    }
    Ok(())
}

/// Writes `name = value, ...` with names as spelled.
fn write_assignments(ctx: &mut RestoreCtx<'_>, options: &[(String, Expr)], sep: &str) -> RestoreResult {
    for (i, (name, value)) in options.iter().enumerate() {
        if i > 0 {
            ctx.write_plain(sep)?;
        }
        ctx.write_plain(name)?;
        ctx.write_plain(" = ")?;
        value.restore(ctx)?;
    }
    Ok(())
}

impl Restore for Admin {
    #[allow(clippy::too_many_lines)]
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        ctx.write_keyword("ADMIN ")?;
        match self {
            Self::ShowDdl => ctx.write_keyword("SHOW DDL"),
            Self::ShowDdlJobs { count, filter } => {
                ctx.write_keyword("SHOW DDL JOBS")?;
                if let Some(count) = count {
                    ctx.write_plain(" ")?;
                    ctx.write_display(count)?;
                }
                if let Some(filter) = filter {
                    ctx.write_keyword(" WHERE ")?;
                    filter.restore(ctx)?;
                }
                Ok(())
            }
            Self::ShowDdlJobQueries(ids) => {
                ctx.write_keyword("SHOW DDL JOB QUERIES ")?;
                write_ids(ctx, ids)
            }
            Self::ShowDdlJobQueriesLimit { limit, offset } => {
                ctx.write_keyword("SHOW DDL JOB QUERIES LIMIT ")?;
                ctx.write_display(limit)?;
                if let Some(offset) = offset {
                    ctx.write_keyword(" OFFSET ")?;
                    ctx.write_display(offset)?;
                }
                Ok(())
            }
            Self::ShowNextRowId(table) => {
                ctx.write_keyword("SHOW ")?;
                ctx.write_table_name(table)?;
                ctx.write_keyword(" NEXT_ROW_ID")
            }
            Self::CheckTable(tables) => {
                ctx.write_keyword("CHECK TABLE ")?;
                ctx.write_table_names(tables)
            }
            Self::CheckIndex {
                table,
                index,
                ranges,
            } => {
                ctx.write_keyword("CHECK INDEX ")?;
                ctx.write_table_name(table)?;
                ctx.write_plain(" ")?;
                ctx.write_name(index)?;
                for (i, (lower, upper)) in ranges.iter().enumerate() {
                    ctx.write_plain(if i == 0 { " " } else { ", " })?;
                    ctx.write_display(format_args!("({lower},{upper})"))?;
                }
                Ok(())
            }
            Self::RecoverIndex { table, index } => {
                ctx.write_keyword("RECOVER INDEX ")?;
                ctx.write_table_name(table)?;
                ctx.write_plain(" ")?;
                ctx.write_name(index)
            }
            Self::CleanupIndex { table, index } => {
                ctx.write_keyword("CLEANUP INDEX ")?;
                ctx.write_table_name(table)?;
                ctx.write_plain(" ")?;
                ctx.write_name(index)
            }
            Self::CleanupTableLock(tables) => {
                ctx.write_keyword("CLEANUP TABLE LOCK ")?;
                ctx.write_table_names(tables)
            }
            Self::ChecksumTable(tables) => {
                ctx.write_keyword("CHECKSUM TABLE ")?;
                ctx.write_table_names(tables)
            }
            Self::CancelDdlJobs(ids) => {
                ctx.write_keyword("CANCEL DDL JOBS ")?;
                write_ids(ctx, ids)
            }
            Self::PauseDdlJobs(ids) => {
                ctx.write_keyword("PAUSE DDL JOBS ")?;
                write_ids(ctx, ids)
            }
            Self::ResumeDdlJobs(ids) => {
                ctx.write_keyword("RESUME DDL JOBS ")?;
                write_ids(ctx, ids)
            }
            Self::AlterDdlJob { job_id, options } => {
                ctx.write_keyword("ALTER DDL JOBS ")?;
                ctx.write_display(job_id)?;
                ctx.write_plain(" ")?;
                write_assignments(ctx, options, ", ")
            }
            Self::PluginsEnable(names) => {
                ctx.write_keyword("PLUGINS ENABLE ")?;
                ctx.write_name_list(names)
            }
            Self::PluginsDisable(names) => {
                ctx.write_keyword("PLUGINS DISABLE ")?;
                ctx.write_name_list(names)
            }
            Self::ShowSlowRecent(count) => {
                ctx.write_keyword("SHOW SLOW RECENT ")?;
                ctx.write_display(count)
            }
            Self::ShowSlowTop { kind, count } => {
                ctx.write_keyword("SHOW SLOW TOP ")?;
                match kind {
                    SlowQueryKind::Default => {}
                    SlowQueryKind::Internal => ctx.write_keyword("INTERNAL ")?,
                    SlowQueryKind::All => ctx.write_keyword("ALL ")?,
                }
                ctx.write_display(count)
            }
            Self::ReloadExprPushdownBlacklist => ctx.write_keyword("RELOAD EXPR_PUSHDOWN_BLACKLIST"),
            Self::ReloadOptRuleBlacklist => ctx.write_keyword("RELOAD OPT_RULE_BLACKLIST"),
            Self::ReloadBindings => ctx.write_keyword("RELOAD BINDINGS"),
            Self::ReloadStatsExtended => ctx.write_keyword("RELOAD STATS_EXTENDED"),
            Self::FlushBindings => ctx.write_keyword("FLUSH BINDINGS"),
            Self::CaptureBindings => ctx.write_keyword("CAPTURE BINDINGS"),
            Self::EvolveBindings => ctx.write_keyword("EVOLVE BINDINGS"),
            Self::FlushPlanCache(scope) => {
                ctx.write_keyword(match scope {
                    PlanCacheScope::Instance => "FLUSH INSTANCE PLAN_CACHE",
                    PlanCacheScope::Session => "FLUSH SESSION PLAN_CACHE",
                    PlanCacheScope::Global => "FLUSH GLOBAL PLAN_CACHE",
                })
            }
            Self::SetBdrRole(role) => {
                ctx.write_keyword("SET BDR ROLE ")?;
                ctx.write_keyword(match role {
                    BdrRole::Primary => "PRIMARY",
                    BdrRole::Secondary => "SECONDARY",
                    BdrRole::LocalOnly => "LOCAL_ONLY",
                })
            }
            Self::UnsetBdrRole => ctx.write_keyword("UNSET BDR ROLE"),
            Self::ShowBdrRole => ctx.write_keyword("SHOW BDR ROLE"),
            Self::ShowTelemetry => ctx.write_keyword("SHOW TELEMETRY"),
            Self::ResetTelemetryId => ctx.write_keyword("RESET TELEMETRY_ID"),
        }
    }
}

impl Restore for Analyze {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        ctx.write_keyword("ANALYZE ")?;
        if self.no_write_to_binlog {
            ctx.write_keyword("NO_WRITE_TO_BINLOG ")?;
        }
        ctx.write_keyword("TABLE ")?;
        ctx.write_table_names(&self.tables)?;
        if !self.partitions.is_empty() {
            ctx.write_keyword(" PARTITION ")?;
            ctx.write_name_list(&self.partitions)?;
        }
        match &self.target {
            AnalyzeTarget::Table => {}
            AnalyzeTarget::Indexes(indexes) => {
                ctx.write_keyword(" INDEX")?;
                if !indexes.is_empty() {
                    ctx.write_plain(" ")?;
                    ctx.write_name_list(indexes)?;
                }
            }
            AnalyzeTarget::Columns(columns) => {
                ctx.write_keyword(" COLUMNS ")?;
                ctx.write_list(columns, ", ")?;
            }
            AnalyzeTarget::PredicateColumns => ctx.write_keyword(" PREDICATE COLUMNS")?,
            AnalyzeTarget::AllColumns => ctx.write_keyword(" ALL COLUMNS")?,
            AnalyzeTarget::UpdateHistogram(columns) => {
                ctx.write_keyword(" UPDATE HISTOGRAM ON ")?;
                ctx.write_list(columns, ", ")?;
            }
            AnalyzeTarget::DropHistogram(columns) => {
                ctx.write_keyword(" DROP HISTOGRAM ON ")?;
                ctx.write_list(columns, ", ")?;
            }
        }
        for (i, (kind, value)) in self.options.iter().enumerate() {
            ctx.write_keyword(if i == 0 { " WITH " } else { ", " })?;
            value.restore(ctx)?;
            ctx.write_plain(" ")?;
            ctx.write_keyword(kind.as_str())?;
        }
        Ok(())
    }
}

impl Restore for Flush {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        ctx.write_keyword("FLUSH ")?;
        if self.no_write_to_binlog {
            ctx.write_keyword("NO_WRITE_TO_BINLOG ")?;
        }
        match &self.kind {
            FlushKind::Tables { tables, read_lock } => {
                ctx.write_keyword("TABLES")?;
                if !tables.is_empty() {
                    ctx.write_plain(" ")?;
                    ctx.write_table_names(tables)?;
                }
                if *read_lock {
                    ctx.write_keyword(" WITH READ LOCK")?;
                }
                Ok(())
            }
            FlushKind::Privileges => ctx.write_keyword("PRIVILEGES"),
            FlushKind::Status => ctx.write_keyword("STATUS"),
            FlushKind::Hosts => ctx.write_keyword("HOSTS"),
            FlushKind::Logs => ctx.write_keyword("LOGS"),
            FlushKind::ClientErrorsSummary => ctx.write_keyword("CLIENT_ERRORS_SUMMARY"),
            FlushKind::TidbPlugins(names) => {
                ctx.write_keyword("TIDB PLUGINS ")?;
                ctx.write_name_list(names)
            }
            FlushKind::StatsDelta(cluster) => {
                ctx.write_keyword("STATS_DELTA")?;
                if *cluster {
                    ctx.write_keyword(" CLUSTER")?;
                }
                Ok(())
            }
        }
    }
}

impl Restore for Kill {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        ctx.write_keyword("KILL ")?;
        if self.tidb {
            ctx.write_keyword("TIDB ")?;
        }
        if self.query {
            ctx.write_keyword("QUERY ")?;
        }
        ctx.write_display(self.connection_id)
    }
}

fn write_format(ctx: &mut RestoreCtx<'_>, format: Option<&String>) -> RestoreResult {
    if let Some(format) = format {
        ctx.write_keyword("FORMAT = ")?;
        ctx.write_string(format)?;
        ctx.write_plain(" ")?;
    }
    Ok(())
}

impl Restore for Explain {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        if let ExplainTarget::Table { table, column } = &self.target {
            ctx.write_keyword("DESC ")?;
            ctx.write_table_name(table)?;
            if let Some(column) = column {
                ctx.write_plain(" ")?;
                ctx.write_name(column)?;
            }
            return Ok(());
        }
        ctx.write_keyword("EXPLAIN ")?;
        if self.analyze {
            ctx.write_keyword("ANALYZE ")?;
        }
        write_format(ctx, self.format.as_ref())?;
        match &self.target {
            ExplainTarget::Statement(stmt) => stmt.restore(ctx),
            ExplainTarget::Connection(id) => {
                ctx.write_keyword("FOR CONNECTION ")?;
                ctx.write_display(id)
            }
            ExplainTarget::Table { .. } => Ok(()),
        }
    }
}

impl Restore for Trace {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        ctx.write_keyword("TRACE ")?;
        if let Some(target) = &self.plan_target {
            ctx.write_keyword("PLAN ")?;
            if let Some(target) = target {
                ctx.write_keyword("TARGET = ")?;
                ctx.write_string(target)?;
                ctx.write_plain(" ")?;
            }
        } else {
            write_format(ctx, self.format.as_ref())?;
        }
        self.stmt.restore(ctx)
    }
}

impl Restore for PlanReplayer {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        ctx.write_keyword("PLAN REPLAYER ")?;
        match self {
            Self::Dump {
                explain,
                analyze,
                stmt,
                file,
            } => {
                ctx.write_keyword("DUMP ")?;
                if *explain {
                    ctx.write_keyword("EXPLAIN ")?;
                    if *analyze {
                        ctx.write_keyword("ANALYZE ")?;
                    }
                }
                if let Some(stmt) = stmt {
                    stmt.restore(ctx)
                } else if let Some(file) = file {
                    ctx.write_string(file)
                } else {
                    Ok(())
                }
            }
            Self::Load(file) => {
                ctx.write_keyword("LOAD ")?;
                ctx.write_string(file)
            }
            Self::Capture {
                sql_digest,
                plan_digest,
            } => {
                ctx.write_keyword("CAPTURE ")?;
                ctx.write_string(sql_digest)?;
                ctx.write_plain(" ")?;
                ctx.write_string(plan_digest)
            }
            Self::CaptureRemove {
                sql_digest,
                plan_digest,
            } => {
                ctx.write_keyword("CAPTURE REMOVE ")?;
                ctx.write_string(sql_digest)?;
                ctx.write_plain(" ")?;
                ctx.write_string(plan_digest)
            }
        }
    }
}

impl Restore for Traffic {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        let (keyword, dir, options) = match self {
            Self::CancelJobs => return ctx.write_keyword("CANCEL TRAFFIC JOBS"),
            Self::Capture { dir, options } => ("TRAFFIC CAPTURE TO ", dir, options),
            Self::Replay { dir, options } => ("TRAFFIC REPLAY FROM ", dir, options),
        };
        ctx.write_keyword(keyword)?;
        ctx.write_string(dir)?;
        if !options.is_empty() {
            ctx.write_plain(" ")?;
            write_assignments(ctx, options, " ")?;
        }
        Ok(())
    }
}

impl Restore for BrieValue {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        match self {
            Self::Int(n) => ctx.write_display(n),
            Self::String(s) => ctx.write_string(s),
            Self::Bool(true) => ctx.write_keyword("TRUE"),
            Self::Bool(false) => ctx.write_keyword("FALSE"),
            Self::RateLimit(n) => {
                ctx.write_display(n)?;
                ctx.write_keyword(" MB/SECOND")
            }
            Self::Ago(n, unit) => {
                ctx.write_display(n)?;
                ctx.write_plain(" ")?;
                ctx.write_keyword(unit.as_str())?;
                ctx.write_keyword(" AGO")
            }
        }
    }
}

impl Restore for Brie {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        ctx.write_keyword(match self.kind {
            BrieKind::Backup => "BACKUP ",
            BrieKind::Restore => "RESTORE ",
            BrieKind::StreamStart => "BACKUP LOGS TO ",
            BrieKind::StreamStop => "STOP BACKUP LOGS",
            BrieKind::StreamPause => "PAUSE BACKUP LOGS",
            BrieKind::StreamResume => "RESUME BACKUP LOGS",
            BrieKind::StreamPurge => "PURGE BACKUP LOGS FROM ",
            BrieKind::RestorePoint => "RESTORE POINT FROM ",
        })?;
        match &self.scope {
            BrieScope::None => {}
            BrieScope::Databases(dbs) => {
                ctx.write_keyword("DATABASE ")?;
                if dbs.is_empty() {
                    ctx.write_plain("*")?;
                } else {
                    ctx.write_name_list(dbs)?;
                }
            }
            BrieScope::Tables(tables) => {
                ctx.write_keyword("TABLE ")?;
                ctx.write_table_names(tables)?;
            }
        }
        match self.kind {
            BrieKind::Backup => ctx.write_keyword(" TO ")?,
            BrieKind::Restore => ctx.write_keyword(" FROM ")?,
            _ => {}
        }
        if let Some(storage) = &self.storage {
            ctx.write_string(storage)?;
        }
        for (name, value) in &self.options {
            ctx.write_plain(" ")?;
            ctx.write_plain(name)?;
            ctx.write_plain(" = ")?;
            value.restore(ctx)?;
        }
        Ok(())
    }
}

impl Restore for CalibrateResource {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        ctx.write_keyword("CALIBRATE RESOURCE")?;
        if let Some(workload) = &self.workload {
            ctx.write_keyword(" WORKLOAD ")?;
            return ctx.write_keyword(workload);
        }
        for option in &self.options {
            let (keyword, value) = match option {
                CalibrateOption::StartTime(value) => (" START_TIME = ", value),
                CalibrateOption::EndTime(value) => (" END_TIME = ", value),
                CalibrateOption::Duration(value) => (" DURATION = ", value),
            };
            ctx.write_keyword(keyword)?;
            value.restore(ctx)?;
        }
        Ok(())
    }
}

impl Restore for QueryWatchOption {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        match self {
            Self::ResourceGroup(group) => {
                ctx.write_keyword("RESOURCE GROUP ")?;
                ctx.write_name(group)
            }
            Self::Action(action) => {
                ctx.write_keyword("ACTION = ")?;
                action.restore(ctx)
            }
            Self::SqlDigest(digest) => {
                ctx.write_keyword("SQL DIGEST ")?;
                ctx.write_string(digest)
            }
            Self::PlanDigest(digest) => {
                ctx.write_keyword("PLAN DIGEST ")?;
                ctx.write_string(digest)
            }
            Self::SqlText { kind, text } => {
                ctx.write_keyword("SQL TEXT ")?;
                ctx.write_keyword(kind.as_str())?;
                ctx.write_keyword(" TO ")?;
                ctx.write_string(text)
            }
        }
    }
}

impl Restore for QueryWatch {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        ctx.write_keyword("QUERY WATCH ")?;
        match self {
            Self::Add(options) => {
                ctx.write_keyword("ADD ")?;
                ctx.write_list(options, " ")
            }
            Self::Remove(id) => {
                ctx.write_keyword("REMOVE ")?;
                ctx.write_display(id)
            }
            Self::RemoveGroup(group) => {
                ctx.write_keyword("REMOVE RESOURCE GROUP ")?;
                ctx.write_name(group)
            }
        }
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
    fn test_show() {
        assert_eq!(
            round_trip("show full tables in db like 't%'"),
            "SHOW FULL TABLES FROM `db` LIKE _UTF8MB4't%'"
        );
        assert_eq!(
            round_trip("show columns from t from db"),
            "SHOW COLUMNS FROM `db`.`t`"
        );
        assert_eq!(round_trip("show variables"), "SHOW SESSION VARIABLES");
        assert_eq!(round_trip("show count(*) warnings"), "SHOW COUNT(*) WARNINGS");
        assert_eq!(
            round_trip("show grants for u using r1, r2"),
            "SHOW GRANTS FOR 'u'@'%' USING 'r1'@'%', 'r2'@'%'"
        );
        assert_eq!(
            round_trip("show table t partition (p0) index idx regions"),
            "SHOW TABLE `t` PARTITION(`p0`) INDEX `idx` REGIONS"
        );
        assert_eq!(
            round_trip("show placement for table t partition p1"),
            "SHOW PLACEMENT FOR TABLE `t` PARTITION `p1`"
        );
        assert_eq!(
            round_trip("show create database if not exists d"),
            "SHOW CREATE DATABASE IF NOT EXISTS `d`"
        );
    }

    #[test]
    fn test_admin() {
        assert_eq!(
            round_trip("admin show ddl jobs 5 where state = 'done'"),
            "ADMIN SHOW DDL JOBS 5 WHERE `state`=_UTF8MB4'done'"
        );
        assert_eq!(
            round_trip("admin show ddl job queries limit 3, 10"),
            "ADMIN SHOW DDL JOB QUERIES LIMIT 10 OFFSET 3"
        );
        assert_eq!(
            round_trip("admin check index t idx (1,2), (3,4)"),
            "ADMIN CHECK INDEX `t` `idx` (1,2), (3,4)"
        );
        assert_eq!(round_trip("admin cancel ddl jobs 1, 2"), "ADMIN CANCEL DDL JOBS 1, 2");
        assert_eq!(
            round_trip("admin flush session plan_cache"),
            "ADMIN FLUSH SESSION PLAN_CACHE"
        );
        assert_eq!(round_trip("admin show slow top all 3"), "ADMIN SHOW SLOW TOP ALL 3");
        assert_eq!(round_trip("admin set bdr role primary"), "ADMIN SET BDR ROLE PRIMARY");
    }

    #[test]
    fn test_analyze_flush_kill() {
        assert_eq!(
            round_trip("analyze table t partition p0, p1 index idx with 10 buckets, 4 cmsketch depth"),
            "ANALYZE TABLE `t` PARTITION `p0`, `p1` INDEX `idx` WITH 10 BUCKETS, 4 CMSKETCH DEPTH"
        );
        assert_eq!(
            round_trip("analyze table t update histogram on a, b"),
            "ANALYZE TABLE `t` UPDATE HISTOGRAM ON `a`, `b`"
        );
        assert_eq!(
            round_trip("flush local tables t1, t2 with read lock"),
            "FLUSH NO_WRITE_TO_BINLOG TABLES `t1`, `t2` WITH READ LOCK"
        );
        assert_eq!(round_trip("flush stats_delta cluster"), "FLUSH STATS_DELTA CLUSTER");
        assert_eq!(round_trip("kill tidb query 12"), "KILL TIDB QUERY 12");
        assert_eq!(round_trip("kill connection 12"), "KILL 12");
    }

    #[test]
    fn test_explain_and_trace() {
        assert_eq!(
            round_trip("explain analyze format='Brief' select 1"),
            "EXPLAIN ANALYZE FORMAT = 'brief' SELECT 1"
        );
        assert_eq!(round_trip("explain for connection 7"), "EXPLAIN FOR CONNECTION 7");
        assert_eq!(round_trip("describe t c"), "DESC `t` `c`");
        assert_eq!(
            round_trip("trace format='row' select 1"),
            "TRACE FORMAT = 'row' SELECT 1"
        );
        assert_eq!(
            round_trip("trace plan target = 'estimation' select 1"),
            "TRACE PLAN TARGET = 'estimation' SELECT 1"
        );
        assert_eq!(
            round_trip("plan replayer dump explain analyze select 1"),
            "PLAN REPLAYER DUMP EXPLAIN ANALYZE SELECT 1"
        );
        assert_eq!(
            round_trip("plan replayer capture remove 'a' 'b'"),
            "PLAN REPLAYER CAPTURE REMOVE 'a' 'b'"
        );
    }

    #[test]
    fn test_operational_statements() {
        assert_eq!(
            round_trip("backup database * to 's3://b/p' rate_limit = 120 mb/second checksum = false"),
            "BACKUP DATABASE * TO 's3://b/p' RATE_LIMIT = 120 MB/SECOND CHECKSUM = FALSE"
        );
        assert_eq!(
            round_trip("restore table a.t from 'local:///tmp'"),
            "RESTORE TABLE `a`.`t` FROM 'local:///tmp'"
        );
        assert_eq!(round_trip("pause backup logs"), "PAUSE BACKUP LOGS");
        assert_eq!(
            round_trip("query watch add resource group rg action kill sql text exact to 'select 1'"),
            "QUERY WATCH ADD RESOURCE GROUP `rg` ACTION = KILL SQL TEXT EXACT TO 'select 1'"
        );
        assert_eq!(round_trip("query watch remove 3"), "QUERY WATCH REMOVE 3");
        assert_eq!(
            round_trip("calibrate resource workload oltp_read_only"),
            "CALIBRATE RESOURCE WORKLOAD OLTP_READ_ONLY"
        );
        assert_eq!(round_trip("cancel traffic jobs"), "CANCEL TRAFFIC JOBS");
    }
}
