//! Cluster-level DDL: sequences, placement policies, resource groups,
//! bindings, flashback and region splitting.

use super::ddl::{write_if_exists, write_table_options};
use super::{Restore, RestoreCtx, RestoreResult};
use crate::ast::{
    AlterPlacementPolicy, AlterRange, AlterSequence, BackgroundSettings, BindingSource,
    BindingTarget, Burstable, CreateBinding, CreatePlacementPolicy, CreateSequence,
    CreateStatistics, DistributeTable, DropStats, Expr, Flashback, GroupPriority, PlacementOption,
    QueryLimit, QueryLimitCondition, RecoverTable, ResourceGroup, ResourceGroupOption, RuPerSec,
    RunawayAction, SequenceOption, SplitRegion, SplitSpec,
};

impl Restore for SequenceOption {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        let (keyword, value) = match self {
            Self::IncrementBy(n) => ("INCREMENT BY", Some(n)),
            Self::StartWith(n) => ("START WITH", Some(n)),
            Self::MinValue(n) => ("MINVALUE", Some(n)),
            Self::NoMinValue => ("NOMINVALUE", None),
            Self::MaxValue(n) => ("MAXVALUE", Some(n)),
            Self::NoMaxValue => ("NOMAXVALUE", None),
            Self::Cache(n) => ("CACHE", Some(n)),
            Self::NoCache => ("NOCACHE", None),
            Self::Cycle => ("CYCLE", None),
            Self::NoCycle => ("NOCYCLE", None),
            Self::Restart => ("RESTART", None),
            Self::RestartWith(n) => ("RESTART WITH", Some(n)),
        };
        ctx.write_keyword(keyword)?;
        if let Some(value) = value {
            ctx.write_plain(" ")?;
            ctx.write_display(value)?;
        }
        Ok(())
    }
}

impl Restore for CreateSequence {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        ctx.write_keyword("CREATE SEQUENCE ")?;
        if self.if_not_exists {
            ctx.write_keyword("IF NOT EXISTS ")?;
        }
        ctx.write_table_name(&self.name)?;
        for option in &self.options {
            ctx.write_plain(" ")?;
            option.restore(ctx)?;
        }
        if !self.table_options.is_empty() {
            ctx.write_plain(" ")?;
            write_table_options(ctx, &self.table_options)?;
        }
        Ok(())
    }
}

impl Restore for AlterSequence {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        ctx.write_keyword("ALTER SEQUENCE ")?;
        write_if_exists(ctx, self.if_exists)?;
        ctx.write_table_name(&self.name)?;
        for option in &self.options {
            ctx.write_plain(" ")?;
            option.restore(ctx)?;
        }
        Ok(())
    }
}

impl Restore for PlacementOption {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        let (name, text) = match self {
            Self::Followers(n) | Self::Voters(n) | Self::Learners(n) => {
                let name = match self {
                    Self::Followers(_) => "FOLLOWERS",
                    Self::Voters(_) => "VOTERS",
                    _ => "LEARNERS",
                };
                ctx.write_keyword(name)?;
                ctx.write_plain("=")?;
                return ctx.write_display(n);
            }
            Self::PrimaryRegion(s) => ("PRIMARY_REGION", s),
            Self::Regions(s) => ("REGIONS", s),
            Self::Schedule(s) => ("SCHEDULE", s),
            Self::Constraints(s) => ("CONSTRAINTS", s),
            Self::LeaderConstraints(s) => ("LEADER_CONSTRAINTS", s),
            Self::FollowerConstraints(s) => ("FOLLOWER_CONSTRAINTS", s),
            Self::VoterConstraints(s) => ("VOTER_CONSTRAINTS", s),
            Self::LearnerConstraints(s) => ("LEARNER_CONSTRAINTS", s),
            Self::SurvivalPreferences(s) => ("SURVIVAL_PREFERENCES", s),
        };
        ctx.write_keyword(name)?;
        ctx.write_plain("=")?;
        ctx.write_string(text)
    }
}

fn write_placement_options(
    ctx: &mut RestoreCtx<'_>,
    options: &[PlacementOption],
) -> RestoreResult {
    for option in options {
        ctx.write_plain(" ")?;
        option.restore(ctx)?;
    }
    Ok(())
}

impl Restore for CreatePlacementPolicy {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        ctx.write_keyword("CREATE ")?;
        if self.or_replace {
            ctx.write_keyword("OR REPLACE ")?;
        }
        ctx.write_keyword("PLACEMENT POLICY ")?;
        if self.if_not_exists {
            ctx.write_keyword("IF NOT EXISTS ")?;
        }
        ctx.write_name(&self.name)?;
        write_placement_options(ctx, &self.options)
    }
}

impl Restore for AlterPlacementPolicy {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        ctx.write_keyword("ALTER PLACEMENT POLICY ")?;
        write_if_exists(ctx, self.if_exists)?;
        ctx.write_name(&self.name)?;
        write_placement_options(ctx, &self.options)
    }
}

impl Restore for RunawayAction {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        match self {
            Self::DryRun => ctx.write_keyword("DRYRUN"),
            Self::Cooldown => ctx.write_keyword("COOLDOWN"),
            Self::Kill => ctx.write_keyword("KILL"),
            Self::SwitchGroup(group) => {
                ctx.write_keyword("SWITCH_GROUP")?;
                ctx.write_plain("(")?;
                ctx.write_name(group)?;
                ctx.write_plain(")")
            }
        }
    }
}

impl Restore for QueryLimit {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        let mut first = true;
        let mut sep = |ctx: &mut RestoreCtx<'_>| {
            if std::mem::take(&mut first) {
                Ok(())
            } else {
                ctx.write_plain(" ")
            }
        };
        ctx.write_plain("(")?;
        for condition in &self.conditions {
            sep(ctx)?;
            match condition {
                QueryLimitCondition::ExecElapsed(elapsed) => {
                    ctx.write_keyword("EXEC_ELAPSED")?;
                    ctx.write_plain("=")?;
                    ctx.write_string(elapsed)?;
                }
                QueryLimitCondition::Ru(ru) => {
                    ctx.write_keyword("RU")?;
                    ctx.write_plain("=")?;
                    ctx.write_display(ru)?;
                }
                QueryLimitCondition::ProcessedKeys(keys) => {
                    ctx.write_keyword("PROCESSED_KEYS")?;
                    ctx.write_plain("=")?;
                    ctx.write_display(keys)?;
                }
            }
        }
        if let Some(action) = &self.action {
            sep(ctx)?;
            ctx.write_keyword("ACTION")?;
            ctx.write_plain("=")?;
            action.restore(ctx)?;
        }
        if let Some((kind, duration)) = &self.watch {
            sep(ctx)?;
            ctx.write_keyword("WATCH")?;
            ctx.write_plain("=")?;
            ctx.write_keyword(kind.as_str())?;
            if let Some(duration) = duration {
                ctx.write_keyword(" DURATION")?;
                ctx.write_plain("=")?;
                ctx.write_string(duration)?;
            }
        }
        ctx.write_plain(")")
    }
}

impl Restore for BackgroundSettings {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        ctx.write_plain("(")?;
        if let Some(task_types) = &self.task_types {
            ctx.write_keyword("TASK_TYPES")?;
            ctx.write_plain("=")?;
            ctx.write_string(task_types)?;
        }
        if let Some(limit) = self.utilization_limit {
            if self.task_types.is_some() {
                ctx.write_plain(", ")?;
            }
            ctx.write_keyword("UTILIZATION_LIMIT")?;
            ctx.write_plain("=")?;
            ctx.write_display(limit)?;
        }
        ctx.write_plain(")")
    }
}

impl Restore for ResourceGroupOption {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        match self {
            Self::RuPerSec(ru) => {
                ctx.write_keyword("RU_PER_SEC")?;
                ctx.write_plain(" = ")?;
                match ru {
                    RuPerSec::Limit(n) => ctx.write_display(n),
                    RuPerSec::Unlimited => ctx.write_keyword("UNLIMITED"),
                }
            }
            Self::Priority(priority) => {
                ctx.write_keyword("PRIORITY")?;
                ctx.write_plain(" = ")?;
                ctx.write_keyword(match priority {
                    GroupPriority::Low => "LOW",
                    GroupPriority::Medium => "MEDIUM",
                    GroupPriority::High => "HIGH",
                })
            }
            Self::Burstable(burstable) => {
                ctx.write_keyword("BURSTABLE")?;
                ctx.write_plain(" = ")?;
                ctx.write_keyword(match burstable {
                    Burstable::Off => "OFF",
                    Burstable::Moderated => "MODERATED",
                    Burstable::Unlimited => "UNLIMITED",
                })
            }
            Self::QueryLimit(limit) => {
                ctx.write_keyword("QUERY_LIMIT")?;
                ctx.write_plain(" = ")?;
                match limit {
                    Some(limit) => limit.restore(ctx),
                    None => ctx.write_keyword("NULL"),
                }
            }
            Self::Background(settings) => {
                ctx.write_keyword("BACKGROUND")?;
                ctx.write_plain(" = ")?;
                match settings {
                    Some(settings) => settings.restore(ctx),
                    None => ctx.write_keyword("NULL"),
                }
            }
        }
    }
}

/// Writes CREATE or ALTER RESOURCE GROUP. `if_exists` reads as IF NOT EXISTS
/// on CREATE.
pub(super) fn write_resource_group(
    ctx: &mut RestoreCtx<'_>,
    group: &ResourceGroup,
    create: bool,
) -> RestoreResult {
    if create {
        ctx.write_keyword("CREATE RESOURCE GROUP ")?;
        if group.if_exists {
            ctx.write_keyword("IF NOT EXISTS ")?;
        }
    } else {
        ctx.write_keyword("ALTER RESOURCE GROUP ")?;
        write_if_exists(ctx, group.if_exists)?;
    }
    ctx.write_name(&group.name)?;
    ctx.write_plain(" ")?;
    ctx.write_list(&group.options, ", ")
}

impl Restore for CreateStatistics {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        ctx.write_keyword("CREATE STATISTICS ")?;
        if self.if_not_exists {
            ctx.write_keyword("IF NOT EXISTS ")?;
        }
        ctx.write_name(&self.name)?;
        ctx.write_plain("(")?;
        ctx.write_keyword(self.kind.as_str())?;
        ctx.write_plain(")")?;
        ctx.write_keyword(" ON ")?;
        ctx.write_table_name(&self.table)?;
        ctx.write_plain("(")?;
        ctx.write_list(&self.columns, ", ")?;
        ctx.write_plain(")")
    }
}

impl Restore for DropStats {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        ctx.write_keyword("DROP STATS ")?;
        ctx.write_table_names(&self.tables)?;
        if !self.partitions.is_empty() {
            ctx.write_keyword(" PARTITION ")?;
            ctx.write_name_list(&self.partitions)?;
        } else if self.global {
            ctx.write_keyword(" GLOBAL")?;
        }
        Ok(())
    }
}

fn write_digests(ctx: &mut RestoreCtx<'_>, digests: &[String]) -> RestoreResult {
    for (i, digest) in digests.iter().enumerate() {
        if i > 0 {
            ctx.write_plain(", ")?;
        }
        ctx.write_string(digest)?;
    }
    Ok(())
}

/// Writes `GLOBAL BINDING` or `SESSION BINDING`.
pub(super) fn write_binding_scope(ctx: &mut RestoreCtx<'_>, global: bool) -> RestoreResult {
    ctx.write_keyword(if global {
        "GLOBAL BINDING"
    } else {
        "SESSION BINDING"
    })
}

impl Restore for BindingTarget {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        match self {
            Self::Statement { origin, hinted } => {
                origin.restore(ctx)?;
                if let Some(hinted) = hinted {
                    ctx.write_keyword(" USING ")?;
                    hinted.restore(ctx)?;
                }
                Ok(())
            }
            Self::SqlDigests(digests) => {
                ctx.write_keyword("SQL DIGEST ")?;
                write_digests(ctx, digests)
            }
        }
    }
}

impl Restore for CreateBinding {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        ctx.write_keyword("CREATE ")?;
        write_binding_scope(ctx, self.global)?;
        match &self.source {
            BindingSource::Statement { origin, hinted } => {
                if let Some(origin) = origin {
                    ctx.write_keyword(" FOR ")?;
                    origin.restore(ctx)?;
                }
                ctx.write_keyword(" USING ")?;
                hinted.restore(ctx)
            }
            BindingSource::PlanDigests(digests) => {
                ctx.write_keyword(" FROM HISTORY USING PLAN DIGEST ")?;
                write_digests(ctx, digests)
            }
        }
    }
}

impl Restore for Flashback {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        match self {
            Self::Table { table, new_name } => {
                ctx.write_keyword("FLASHBACK TABLE ")?;
                ctx.write_table_name(table)?;
                if let Some(new_name) = new_name {
                    ctx.write_keyword(" TO ")?;
                    ctx.write_name(new_name)?;
                }
                Ok(())
            }
            Self::Database { name, new_name } => {
                ctx.write_keyword("FLASHBACK DATABASE ")?;
                ctx.write_name(name)?;
                if let Some(new_name) = new_name {
                    ctx.write_keyword(" TO ")?;
                    ctx.write_name(new_name)?;
                }
                Ok(())
            }
            Self::ClusterToTimestamp(ts) => {
                ctx.write_keyword("FLASHBACK CLUSTER TO TIMESTAMP ")?;
                ctx.write_string(ts)
            }
            Self::ClusterToTso(tso) => {
                ctx.write_keyword("FLASHBACK CLUSTER TO TSO ")?;
                ctx.write_display(tso)
            }
            Self::TablesToTimestamp { tables, timestamp } => {
                ctx.write_keyword("FLASHBACK TABLE ")?;
                ctx.write_table_names(tables)?;
                ctx.write_keyword(" TO TIMESTAMP ")?;
                ctx.write_string(timestamp)
            }
            Self::DatabaseToTimestamp { name, timestamp } => {
                ctx.write_keyword("FLASHBACK DATABASE ")?;
                ctx.write_name(name)?;
                ctx.write_keyword(" TO TIMESTAMP ")?;
                ctx.write_string(timestamp)
            }
        }
    }
}

impl Restore for RecoverTable {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        ctx.write_keyword("RECOVER TABLE ")?;
        match self {
            Self::ByJob(job) => {
                ctx.write_keyword("BY JOB ")?;
                ctx.write_display(job)
            }
            Self::Table { table, job_num } => {
                ctx.write_table_name(table)?;
                if let Some(job) = job_num {
                    ctx.write_plain(" ")?;
                    ctx.write_display(job)?;
                }
                Ok(())
            }
        }
    }
}

fn write_paren_exprs(ctx: &mut RestoreCtx<'_>, exprs: &[Expr]) -> RestoreResult {
    ctx.write_plain("(")?;
    ctx.write_list(exprs, ",")?;
    ctx.write_plain(")")
}

pub(super) fn write_partition_names(ctx: &mut RestoreCtx<'_>, partitions: &[String]) -> RestoreResult {
    if partitions.is_empty() {
        return Ok(());
    }
    ctx.write_keyword(" PARTITION")?;
    ctx.write_plain("(")?;
    ctx.write_name_list(partitions)?;
    ctx.write_plain(")")
}

impl Restore for SplitRegion {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        ctx.write_keyword("SPLIT ")?;
        if self.partition_keyword {
            ctx.write_keyword("PARTITION ")?;
        }
        ctx.write_keyword("TABLE ")?;
        ctx.write_table_name(&self.table)?;
        write_partition_names(ctx, &self.partitions)?;
        if let Some(index) = &self.index {
            ctx.write_keyword(" INDEX ")?;
            ctx.write_name(index)?;
        }
        match &self.spec {
            SplitSpec::Between {
                lower,
                upper,
                regions,
            } => {
                ctx.write_keyword(" BETWEEN ")?;
                write_paren_exprs(ctx, lower)?;
                ctx.write_keyword(" AND ")?;
                write_paren_exprs(ctx, upper)?;
                ctx.write_keyword(" REGIONS ")?;
                ctx.write_display(regions)
            }
            SplitSpec::By(rows) => {
                ctx.write_keyword(" BY ")?;
                for (i, row) in rows.iter().enumerate() {
                    if i > 0 {
                        ctx.write_plain(",")?;
                    }
                    write_paren_exprs(ctx, row)?;
                }
                Ok(())
            }
        }
    }
}

impl Restore for DistributeTable {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        ctx.write_keyword("DISTRIBUTE TABLE ")?;
        ctx.write_table_name(&self.table)?;
        write_partition_names(ctx, &self.partitions)?;
        for (key, value) in &self.options {
            ctx.write_plain(" ")?;
            ctx.write_word(&key.to_ascii_uppercase())?;
            ctx.write_plain("=")?;
            ctx.write_string(value)?;
        }
        Ok(())
    }
}

impl Restore for AlterRange {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        ctx.write_keyword("ALTER RANGE ")?;
        ctx.write_name(&self.name)?;
        ctx.write_keyword(" PLACEMENT POLICY ")?;
        ctx.write_name(&self.policy)
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
    fn test_sequences() {
        assert_eq!(
            round_trip("create sequence if not exists s increment = 2 start 10 nocache cycle comment 'x'"),
            "CREATE SEQUENCE IF NOT EXISTS `s` INCREMENT BY 2 START WITH 10 NOCACHE CYCLE COMMENT = 'x'"
        );
        assert_eq!(
            round_trip("alter sequence s minvalue -5 no maxvalue restart with 3"),
            "ALTER SEQUENCE `s` MINVALUE -5 NOMAXVALUE RESTART WITH 3"
        );
        assert_eq!(round_trip("alter sequence s restart"), "ALTER SEQUENCE `s` RESTART");
    }

    #[test]
    fn test_placement_policies() {
        assert_eq!(
            round_trip("create or replace placement policy p primary_region='us' regions='us,eu' followers=2"),
            "CREATE OR REPLACE PLACEMENT POLICY `p` PRIMARY_REGION='us' REGIONS='us,eu' FOLLOWERS=2"
        );
        assert_eq!(
            round_trip("alter placement policy if exists p constraints = '[+disk=ssd]'"),
            "ALTER PLACEMENT POLICY IF EXISTS `p` CONSTRAINTS='[+disk=ssd]'"
        );
    }

    #[test]
    fn test_resource_groups() {
        assert_eq!(
            round_trip("create resource group if not exists rg ru_per_sec = 100 priority = high burstable"),
            "CREATE RESOURCE GROUP IF NOT EXISTS `rg` RU_PER_SEC = 100, PRIORITY = HIGH, BURSTABLE = MODERATED"
        );
        assert_eq!(
            round_trip(
                "alter resource group rg query_limit = (exec_elapsed = '60s', action = switch_group(rg2), watch = similar duration = '10m')"
            ),
            "ALTER RESOURCE GROUP `rg` QUERY_LIMIT = (EXEC_ELAPSED='60s' ACTION=SWITCH_GROUP(`rg2`) WATCH=SIMILAR DURATION='10m')"
        );
        assert_eq!(
            round_trip("alter resource group rg query_limit = null background = (task_types = 'br', utilization_limit = 30)"),
            "ALTER RESOURCE GROUP `rg` QUERY_LIMIT = NULL, BACKGROUND = (TASK_TYPES='br', UTILIZATION_LIMIT=30)"
        );
    }

    #[test]
    fn test_statistics_and_bindings() {
        assert_eq!(
            round_trip("create statistics if not exists st (correlation) on t (a, b)"),
            "CREATE STATISTICS IF NOT EXISTS `st`(CORRELATION) ON `t`(`a`, `b`)"
        );
        assert_eq!(
            round_trip("drop stats t partition p0, p1"),
            "DROP STATS `t` PARTITION `p0`, `p1`"
        );
        assert_eq!(round_trip("drop stats t global"), "DROP STATS `t` GLOBAL");
        assert_eq!(
            round_trip("create global binding for select * from t using select * from t use index (a)"),
            "CREATE GLOBAL BINDING FOR SELECT * FROM `t` USING SELECT * FROM `t` USE INDEX (`a`)"
        );
        assert_eq!(
            round_trip("create global binding for select * from *.t using select * from *.t use index (i)"),
            "CREATE GLOBAL BINDING FOR SELECT * FROM *.`t` USING SELECT * FROM *.`t` USE INDEX (`i`)"
        );
        assert_eq!(
            round_trip("create binding from history using plan digest 'abc', 'def'"),
            "CREATE SESSION BINDING FROM HISTORY USING PLAN DIGEST 'abc', 'def'"
        );
    }

    #[test]
    fn test_flashback_recover_split() {
        assert_eq!(
            round_trip("flashback table t to t2"),
            "FLASHBACK TABLE `t` TO `t2`"
        );
        assert_eq!(
            round_trip("flashback schema d to timestamp '2024-01-01 00:00:00'"),
            "FLASHBACK DATABASE `d` TO TIMESTAMP '2024-01-01 00:00:00'"
        );
        assert_eq!(round_trip("flashback cluster to tso 42"), "FLASHBACK CLUSTER TO TSO 42");
        assert_eq!(round_trip("recover table by job 7"), "RECOVER TABLE BY JOB 7");
        assert_eq!(round_trip("recover table t 3"), "RECOVER TABLE `t` 3");
        assert_eq!(
            round_trip("split table t index i between (1) and (100) regions 10"),
            "SPLIT TABLE `t` INDEX `i` BETWEEN (1) AND (100) REGIONS 10"
        );
        assert_eq!(
            round_trip("split region for partition table t partition (p1) by (10), (20)"),
            "SPLIT PARTITION TABLE `t` PARTITION(`p1`) BY (10),(20)"
        );
        assert_eq!(
            round_trip("distribute table t rule = 'leader-scatter' engine = tikv"),
            "DISTRIBUTE TABLE `t` RULE='leader-scatter' ENGINE='tikv'"
        );
        assert_eq!(
            round_trip("alter range global placement policy = p"),
            "ALTER RANGE `global` PLACEMENT POLICY `p`"
        );
    }
}
