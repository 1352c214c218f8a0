//! Cluster-level DDL: sequences, placement policies, resource groups,
//! extended statistics, plan bindings, flashback, region splitting and
//! table distribution.

use super::error::ParseError;
use super::parser::Grammar;
use crate::ast::{
    AlterPlacementPolicy, AlterRange, AlterSequence, BackgroundSettings, BindingSource,
    BindingTarget, Burstable, CreateBinding, CreatePlacementPolicy, CreateSequence,
    CreateStatistics, DistributeTable, DropStats, Flashback, GroupPriority, PlacementOption,
    QueryLimit, QueryLimitCondition, RecoverTable, ResourceGroup, ResourceGroupOption, RuPerSec,
    RunawayAction, SequenceOption, SplitRegion, SplitSpec, Statement, StatisticsKind,
    WatchKind,
};
use crate::lexer::{Keyword, TokenKind};

impl Grammar<'_> {
    // Sequences

    /// CREATE SEQUENCE after the `SEQUENCE` keyword.
    pub(super) fn parse_create_sequence(&mut self) -> Result<Statement, ParseError> {
        let if_not_exists = self.parse_if_not_exists()?;
        let name = self.parse_table_name()?;
        let options = self.parse_sequence_options()?;
        let table_options = self.parse_table_options(true)?;
        Ok(Statement::CreateSequence(Box::new(CreateSequence {
            if_not_exists,
            name,
            options,
            table_options,
        })))
    }

    pub(super) fn parse_alter_sequence(&mut self) -> Result<Statement, ParseError> {
        let if_exists = self.parse_if_exists()?;
        let name = self.parse_table_name()?;
        let options = self.parse_sequence_options()?;
        if options.is_empty() {
            return Err(self.error());
        }
        Ok(Statement::AlterSequence(Box::new(AlterSequence {
            if_exists,
            name,
            options,
        })))
    }

    pub(super) fn parse_drop_sequence(&mut self) -> Result<Statement, ParseError> {
        let if_exists = self.parse_if_exists()?;
        let names = self.parse_table_name_list()?;
        Ok(Statement::DropSequence { if_exists, names })
    }

    fn parse_sequence_options(&mut self) -> Result<Vec<SequenceOption>, ParseError> {
        let mut options = Vec::new();
        loop {
            let option = if self.eat_word("increment") {
                if !self.eat_keyword(Keyword::By) {
                    self.eat_eq();
                }
                SequenceOption::IncrementBy(self.expect_i64()?)
            } else if self.eat_keyword(Keyword::Start) {
                if !self.eat_keyword(Keyword::With) {
                    self.eat_eq();
                }
                SequenceOption::StartWith(self.expect_i64()?)
            } else if self.eat_keyword(Keyword::Minvalue) {
                self.eat_eq();
                SequenceOption::MinValue(self.expect_i64()?)
            } else if self.eat_keyword(Keyword::Maxvalue) {
                self.eat_eq();
                SequenceOption::MaxValue(self.expect_i64()?)
            } else if self.eat_keyword(Keyword::Cache) {
                self.eat_eq();
                SequenceOption::Cache(self.expect_i64()?)
            } else if self.eat_keyword(Keyword::Nominvalue) {
                SequenceOption::NoMinValue
            } else if self.eat_keyword(Keyword::Nomaxvalue) {
                SequenceOption::NoMaxValue
            } else if self.eat_keyword(Keyword::Nocache) {
                SequenceOption::NoCache
            } else if self.eat_keyword(Keyword::Nocycle) {
                SequenceOption::NoCycle
            } else if self.eat_keyword(Keyword::Cycle) {
                SequenceOption::Cycle
            } else if self.check_keyword(Keyword::No)
                && matches!(
                    self.peek_token(1).as_keyword(),
                    Some(Keyword::Minvalue | Keyword::Maxvalue | Keyword::Cache | Keyword::Cycle)
                )
            {
                self.advance();
                let kw = self.current().as_keyword();
                self.advance();
                match kw {
                    Some(Keyword::Minvalue) => SequenceOption::NoMinValue,
                    Some(Keyword::Maxvalue) => SequenceOption::NoMaxValue,
                    Some(Keyword::Cache) => SequenceOption::NoCache,
                    _ => SequenceOption::NoCycle,
                }
            } else if self.eat_keyword(Keyword::Restart) {
                if self.eat_keyword(Keyword::With) || self.eat(&TokenKind::Eq) {
                    SequenceOption::RestartWith(self.expect_i64()?)
                } else if matches!(
                    self.current().kind,
                    TokenKind::Integer(_) | TokenKind::Minus | TokenKind::Plus
                ) {
                    SequenceOption::RestartWith(self.expect_i64()?)
                } else {
                    SequenceOption::Restart
                }
            } else {
                return Ok(options);
            };
            options.push(option);
            self.eat(&TokenKind::Comma);
        }
    }

    // Placement policies

    /// CREATE PLACEMENT POLICY with the cursor on `PLACEMENT`.
    pub(super) fn parse_create_placement_policy(
        &mut self,
        or_replace: bool,
    ) -> Result<Statement, ParseError> {
        self.expect_keyword(Keyword::Placement)?;
        self.expect_keyword(Keyword::Policy)?;
        let if_not_exists = self.parse_if_not_exists()?;
        let name = self.expect_identifier()?;
        let options = self.parse_placement_options()?;
        Ok(Statement::CreatePlacementPolicy(Box::new(
            CreatePlacementPolicy {
                or_replace,
                if_not_exists,
                name,
                options,
            },
        )))
    }

    pub(super) fn parse_alter_placement_policy(&mut self) -> Result<Statement, ParseError> {
        self.expect_keyword(Keyword::Placement)?;
        self.expect_keyword(Keyword::Policy)?;
        let if_exists = self.parse_if_exists()?;
        let name = self.expect_identifier()?;
        let options = self.parse_placement_options()?;
        Ok(Statement::AlterPlacementPolicy(Box::new(AlterPlacementPolicy {
            if_exists,
            name,
            options,
        })))
    }

    fn parse_placement_options(&mut self) -> Result<Vec<PlacementOption>, ParseError> {
        let mut options = Vec::new();
        loop {
            let Some(word) = self.identifier_at(0).map(|w| w.to_ascii_lowercase()) else {
                return Ok(options);
            };
            let option = match word.as_str() {
                "primary_region" => PlacementOption::PrimaryRegion(self.placement_string()?),
                "regions" => PlacementOption::Regions(self.placement_string()?),
                "schedule" => PlacementOption::Schedule(self.placement_string()?),
                "constraints" => PlacementOption::Constraints(self.placement_string()?),
                "leader_constraints" => {
                    PlacementOption::LeaderConstraints(self.placement_string()?)
                }
                "follower_constraints" => {
                    PlacementOption::FollowerConstraints(self.placement_string()?)
                }
                "voter_constraints" => PlacementOption::VoterConstraints(self.placement_string()?),
                "learner_constraints" => {
                    PlacementOption::LearnerConstraints(self.placement_string()?)
                }
                "survival_preferences" => {
                    PlacementOption::SurvivalPreferences(self.placement_string()?)
                }
                "followers" => PlacementOption::Followers(self.placement_count()?),
                "voters" => PlacementOption::Voters(self.placement_count()?),
                "learners" => PlacementOption::Learners(self.placement_count()?),
                _ => return Ok(options),
            };
            options.push(option);
            self.eat(&TokenKind::Comma);
        }
    }

    fn placement_string(&mut self) -> Result<String, ParseError> {
        self.advance();
        self.eat_eq();
        self.expect_string()
    }

    fn placement_count(&mut self) -> Result<u64, ParseError> {
        self.advance();
        self.eat_eq();
        self.expect_u64()
    }

    // Resource groups

    /// A resource group name; the reserved `DEFAULT` names the default group.
    pub(super) fn expect_resource_group_name(&mut self) -> Result<String, ParseError> {
        if self.eat_keyword(Keyword::Default) {
            return Ok("default".to_string());
        }
        self.expect_identifier()
    }

    /// CREATE RESOURCE GROUP after `GROUP`.
    pub(super) fn parse_create_resource_group(&mut self) -> Result<Statement, ParseError> {
        let if_exists = self.parse_if_not_exists()?;
        let name = self.expect_resource_group_name()?;
        let options = self.parse_resource_group_options()?;
        if options.is_empty() {
            return Err(self.error());
        }
        Ok(Statement::CreateResourceGroup(Box::new(ResourceGroup {
            if_exists,
            name,
            options,
        })))
    }

    /// ALTER RESOURCE GROUP after `GROUP`.
    pub(super) fn parse_alter_resource_group(&mut self) -> Result<Statement, ParseError> {
        let if_exists = self.parse_if_exists()?;
        let name = self.expect_resource_group_name()?;
        let options = self.parse_resource_group_options()?;
        if options.is_empty() {
            return Err(self.error());
        }
        Ok(Statement::AlterResourceGroup(Box::new(ResourceGroup {
            if_exists,
            name,
            options,
        })))
    }

    fn parse_resource_group_options(&mut self) -> Result<Vec<ResourceGroupOption>, ParseError> {
        let mut options = Vec::new();
        loop {
            let option = if self.eat_word("ru_per_sec") {
                self.eat_eq();
                if self.eat_word("unlimited") {
                    ResourceGroupOption::RuPerSec(RuPerSec::Unlimited)
                } else {
                    ResourceGroupOption::RuPerSec(RuPerSec::Limit(self.expect_u64()?))
                }
            } else if self.eat_word("priority") {
                self.eat_eq();
                let priority = if self.eat_word("low") {
                    GroupPriority::Low
                } else if self.eat_word("medium") {
                    GroupPriority::Medium
                } else {
                    self.expect_word("high")?;
                    GroupPriority::High
                };
                ResourceGroupOption::Priority(priority)
            } else if self.eat_word("burstable") {
                let burstable = if self.eat(&TokenKind::Eq) {
                    if self.eat_word("off") || self.eat_keyword(Keyword::False) {
                        Burstable::Off
                    } else if self.eat_word("unlimited") {
                        Burstable::Unlimited
                    } else if self.eat_keyword(Keyword::True) {
                        Burstable::Moderated
                    } else {
                        self.expect_word("moderated")?;
                        Burstable::Moderated
                    }
                } else {
                    Burstable::Moderated
                };
                ResourceGroupOption::Burstable(burstable)
            } else if self.eat_word("query_limit") {
                self.eat_eq();
                ResourceGroupOption::QueryLimit(self.parse_query_limit()?)
            } else if self.eat_word("background") {
                self.eat_eq();
                ResourceGroupOption::Background(self.parse_background_settings()?)
            } else {
                return Ok(options);
            };
            options.push(option);
            self.eat(&TokenKind::Comma);
        }
    }

    /// `NULL`, `()` or `(condition ... ACTION = a [WATCH = w [DURATION = d]])`
    fn parse_query_limit(&mut self) -> Result<Option<QueryLimit>, ParseError> {
        if self.eat_keyword(Keyword::Null) {
            return Ok(None);
        }
        self.expect(&TokenKind::LeftParen)?;
        if self.eat(&TokenKind::RightParen) {
            return Ok(None);
        }
        let mut limit = QueryLimit {
            conditions: Vec::new(),
            action: None,
            watch: None,
        };
        loop {
            if self.eat_word("exec_elapsed") {
                self.eat_eq();
                limit
                    .conditions
                    .push(QueryLimitCondition::ExecElapsed(self.expect_string()?));
            } else if self.eat_word("ru") {
                self.eat_eq();
                limit.conditions.push(QueryLimitCondition::Ru(self.expect_u64()?));
            } else if self.eat_word("processed_keys") {
                self.eat_eq();
                limit
                    .conditions
                    .push(QueryLimitCondition::ProcessedKeys(self.expect_u64()?));
            } else if self.eat_keyword(Keyword::Action) {
                self.eat_eq();
                limit.action = Some(self.parse_runaway_action()?);
            } else if self.eat_word("watch") {
                self.eat_eq();
                let kind = self.parse_watch_kind()?;
                let duration = self.parse_opt_watch_duration()?;
                limit.watch = Some((kind, duration));
            } else {
                return Err(self.error());
            }
            self.eat(&TokenKind::Comma);
            if self.eat(&TokenKind::RightParen) {
                return Ok(Some(limit));
            }
        }
    }

    /// `[DURATION = 'd' | DURATION = UNLIMITED]`
    pub(super) fn parse_opt_watch_duration(&mut self) -> Result<Option<String>, ParseError> {
        if !self.eat_word("duration") {
            return Ok(None);
        }
        self.eat_eq();
        if self.eat_word("unlimited") {
            return Ok(None);
        }
        self.expect_string().map(Some)
    }

    pub(super) fn parse_runaway_action(&mut self) -> Result<RunawayAction, ParseError> {
        if self.eat_word("dryrun") {
            return Ok(RunawayAction::DryRun);
        }
        if self.eat_word("cooldown") {
            return Ok(RunawayAction::Cooldown);
        }
        if self.eat_keyword(Keyword::Kill) {
            return Ok(RunawayAction::Kill);
        }
        self.expect_word("switch_group")?;
        self.expect(&TokenKind::LeftParen)?;
        let group = self.expect_identifier()?;
        self.expect(&TokenKind::RightParen)?;
        Ok(RunawayAction::SwitchGroup(group))
    }

    pub(super) fn parse_watch_kind(&mut self) -> Result<WatchKind, ParseError> {
        if self.eat_word("exact") {
            return Ok(WatchKind::Exact);
        }
        if self.eat_word("similar") {
            return Ok(WatchKind::Similar);
        }
        self.expect_word("plan")?;
        Ok(WatchKind::Plan)
    }

    fn parse_background_settings(&mut self) -> Result<Option<BackgroundSettings>, ParseError> {
        if self.eat_keyword(Keyword::Null) {
            return Ok(None);
        }
        self.expect(&TokenKind::LeftParen)?;
        if self.eat(&TokenKind::RightParen) {
            return Ok(None);
        }
        let mut settings = BackgroundSettings::default();
        loop {
            if self.eat_word("task_types") {
                self.eat_eq();
                settings.task_types = Some(self.expect_string()?);
            } else if self.eat_word("utilization_limit") {
                self.eat_eq();
                settings.utilization_limit = Some(self.expect_u64()?);
            } else {
                return Err(self.error());
            }
            self.eat(&TokenKind::Comma);
            if self.eat(&TokenKind::RightParen) {
                return Ok(Some(settings));
            }
        }
    }

    // Extended statistics

    /// `CREATE STATISTICS [IF NOT EXISTS] s (kind) ON t (a, b)`
    pub(super) fn parse_create_statistics(&mut self) -> Result<Statement, ParseError> {
        let if_not_exists = self.parse_if_not_exists()?;
        let name = self.expect_identifier()?;
        self.expect(&TokenKind::LeftParen)?;
        let kind = if self.eat_word("cardinality") {
            StatisticsKind::Cardinality
        } else if self.eat_word("dependency") {
            StatisticsKind::Dependency
        } else {
            self.expect_word("correlation")?;
            StatisticsKind::Correlation
        };
        self.expect(&TokenKind::RightParen)?;
        self.expect_keyword(Keyword::On)?;
        let table = self.parse_table_name()?;
        self.expect(&TokenKind::LeftParen)?;
        let mut columns = vec![self.parse_column_name()?];
        while self.eat(&TokenKind::Comma) {
            columns.push(self.parse_column_name()?);
        }
        self.expect(&TokenKind::RightParen)?;
        Ok(Statement::CreateStatistics(Box::new(CreateStatistics {
            if_not_exists,
            name,
            kind,
            table,
            columns,
        })))
    }

    /// `DROP STATS t, ... [PARTITION p, ... | GLOBAL]` after `STATS`.
    pub(super) fn parse_drop_stats(&mut self) -> Result<Statement, ParseError> {
        let tables = self.parse_table_name_list()?;
        let mut partitions = Vec::new();
        let mut global = false;
        if self.eat_keyword(Keyword::Partition) {
            partitions = self.parse_identifier_list()?;
        } else if self.eat_keyword(Keyword::Global) {
            global = true;
        }
        Ok(Statement::DropStats(Box::new(DropStats {
            tables,
            partitions,
            global,
        })))
    }

    // Bindings

    fn parse_binding_scope(&mut self) -> Result<bool, ParseError> {
        let global = self.eat_keyword(Keyword::Global);
        if !global {
            self.eat_keyword(Keyword::Session);
        }
        self.expect_keyword(Keyword::Binding)?;
        Ok(global)
    }

    /// `CREATE [GLOBAL | SESSION] BINDING ...` with the cursor after `CREATE`.
    pub(super) fn parse_create_binding(&mut self) -> Result<Statement, ParseError> {
        let global = self.parse_binding_scope()?;
        let source = if self.eat_keyword(Keyword::From) {
            self.expect_keyword(Keyword::History)?;
            self.expect_keyword(Keyword::Using)?;
            self.expect_word("plan")?;
            self.expect_word("digest")?;
            BindingSource::PlanDigests(self.parse_digest_list()?)
        } else {
            let origin = if self.eat_keyword(Keyword::For) {
                Some(self.parse_binding_statement()?)
            } else {
                None
            };
            self.expect_keyword(Keyword::Using)?;
            let hinted = self.parse_binding_statement()?;
            BindingSource::Statement { origin, hinted }
        };
        Ok(Statement::CreateBinding(Box::new(CreateBinding {
            global,
            source,
        })))
    }

    /// `DROP [GLOBAL | SESSION] BINDING FOR ...` with the cursor after `DROP`.
    pub(super) fn parse_drop_binding(&mut self) -> Result<Statement, ParseError> {
        let global = self.parse_binding_scope()?;
        self.expect_keyword(Keyword::For)?;
        let target = self.parse_binding_target()?;
        Ok(Statement::DropBinding { global, target })
    }

    /// The part after `FOR`: `SQL DIGEST 'd', ...` or `stmt [USING stmt]`.
    pub(super) fn parse_binding_target(&mut self) -> Result<BindingTarget, ParseError> {
        if self.check_keyword(Keyword::Sql) && self.check_word_at(1, "digest") {
            self.advance();
            self.advance();
            return Ok(BindingTarget::SqlDigests(self.parse_digest_list()?));
        }
        let origin = self.parse_binding_statement()?;
        let hinted = if self.eat_keyword(Keyword::Using) {
            Some(self.parse_binding_statement()?)
        } else {
            None
        };
        Ok(BindingTarget::Statement { origin, hinted })
    }

    fn parse_digest_list(&mut self) -> Result<Vec<String>, ParseError> {
        let mut digests = vec![self.expect_string()?];
        while self.eat(&TokenKind::Comma) {
            digests.push(self.expect_string()?);
        }
        Ok(digests)
    }

    // Flashback and recovery

    pub(super) fn parse_flashback(&mut self) -> Result<Statement, ParseError> {
        self.expect_word("flashback")?;
        let flashback = if self.eat_word("cluster") {
            self.expect_keyword(Keyword::To)?;
            if self.eat_keyword(Keyword::Timestamp) {
                Flashback::ClusterToTimestamp(self.expect_string()?)
            } else {
                self.expect_word("tso")?;
                Flashback::ClusterToTso(self.expect_u64()?)
            }
        } else if self.eat_keyword(Keyword::Database) || self.eat_word("schema") {
            let name = self.expect_identifier()?;
            if self.eat_keyword(Keyword::To) {
                if self.check_keyword(Keyword::Timestamp) && self.check_string_at(1) {
                    self.advance();
                    Flashback::DatabaseToTimestamp {
                        name,
                        timestamp: self.expect_string()?,
                    }
                } else {
                    Flashback::Database {
                        name,
                        new_name: Some(self.expect_identifier()?),
                    }
                }
            } else {
                Flashback::Database {
                    name,
                    new_name: None,
                }
            }
        } else {
            self.expect_keyword(Keyword::Table)?;
            let mut tables = self.parse_table_name_list()?;
            if self.eat_keyword(Keyword::To) {
                if self.check_keyword(Keyword::Timestamp) && self.check_string_at(1) {
                    self.advance();
                    Flashback::TablesToTimestamp {
                        tables,
                        timestamp: self.expect_string()?,
                    }
                } else if tables.len() == 1 {
                    Flashback::Table {
                        table: tables.remove(0),
                        new_name: Some(self.expect_identifier()?),
                    }
                } else {
                    return Err(self.error());
                }
            } else if tables.len() == 1 {
                Flashback::Table {
                    table: tables.remove(0),
                    new_name: None,
                }
            } else {
                return Err(self.error());
            }
        };
        Ok(Statement::Flashback(Box::new(flashback)))
    }

    fn check_string_at(&self, n: usize) -> bool {
        matches!(self.peek_kind(n), TokenKind::String(_))
    }

    /// `RECOVER TABLE BY JOB n` or `RECOVER TABLE t [n]`
    pub(super) fn parse_recover(&mut self) -> Result<Statement, ParseError> {
        self.expect_keyword(Keyword::Recover)?;
        self.expect_keyword(Keyword::Table)?;
        let recover = if self.check_keyword(Keyword::By) && self.check_word_at(1, "job") {
            self.advance();
            self.advance();
            RecoverTable::ByJob(self.expect_u64()?)
        } else {
            let table = self.parse_table_name()?;
            let job_num = if matches!(self.current().kind, TokenKind::Integer(_)) {
                Some(self.expect_u64()?)
            } else {
                None
            };
            RecoverTable::Table { table, job_num }
        };
        Ok(Statement::RecoverTable(Box::new(recover)))
    }

    // Regions

    /// `SPLIT [PARTITION] TABLE t [PARTITION (p)] [INDEX i] BETWEEN ... | BY ...`
    pub(super) fn parse_split(&mut self) -> Result<Statement, ParseError> {
        self.expect_word("split")?;
        if self.eat_word("region") {
            self.expect_keyword(Keyword::For)?;
        }
        let partition_keyword = self.eat_keyword(Keyword::Partition);
        self.expect_keyword(Keyword::Table)?;
        let table = self.parse_table_name()?;
        let partitions = self.parse_opt_partition_names()?;
        let index = if self.eat_keyword(Keyword::Index) {
            Some(self.expect_identifier()?)
        } else {
            None
        };
        let spec = if self.eat_keyword(Keyword::Between) {
            let lower = self.parse_paren_expr_list()?;
            self.expect_keyword(Keyword::And)?;
            let upper = self.parse_paren_expr_list()?;
            self.expect_word("regions")?;
            SplitSpec::Between {
                lower,
                upper,
                regions: self.expect_u64()?,
            }
        } else {
            self.expect_keyword(Keyword::By)?;
            let mut rows = vec![self.parse_paren_expr_list()?];
            while self.eat(&TokenKind::Comma) {
                rows.push(self.parse_paren_expr_list()?);
            }
            SplitSpec::By(rows)
        };
        Ok(Statement::SplitRegion(Box::new(SplitRegion {
            partition_keyword,
            table,
            partitions,
            index,
            spec,
        })))
    }

    /// `DISTRIBUTE TABLE t [PARTITION (p)] key = 'value' ...`
    pub(super) fn parse_distribute(&mut self) -> Result<Statement, ParseError> {
        self.expect_word("distribute")?;
        self.expect_keyword(Keyword::Table)?;
        let table = self.parse_table_name()?;
        let partitions = self.parse_opt_partition_names()?;
        let mut options = Vec::new();
        while let Some(key) = self.identifier_at(0) {
            self.advance();
            self.eat_eq();
            options.push((key.to_ascii_lowercase(), self.expect_name_or_string()?));
            self.eat(&TokenKind::Comma);
        }
        Ok(Statement::DistributeTable(Box::new(DistributeTable {
            table,
            partitions,
            options,
        })))
    }

    /// `ALTER RANGE name PLACEMENT POLICY [=] p` after `RANGE`.
    pub(super) fn parse_alter_range(&mut self) -> Result<Statement, ParseError> {
        let name = self.expect_identifier()?;
        self.expect_keyword(Keyword::Placement)?;
        self.expect_keyword(Keyword::Policy)?;
        self.eat_eq();
        let policy = self.expect_name_or_string()?;
        Ok(Statement::AlterRange(Box::new(AlterRange { name, policy })))
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::{
        BindingSource, BindingTarget, Burstable, Flashback, PlacementOption, QueryBody,
        QueryLimitCondition, RecoverTable, ResourceGroupOption, RuPerSec, RunawayAction,
        SequenceOption, SplitSpec, Statement, StatisticsKind, TableName, TableRef, WatchKind,
    };
    use crate::{ErrorCode, Parser};

    fn parse(sql: &str) -> Statement {
        Parser::new().parse_one_stmt(sql, "", "").unwrap().stmt
    }

    #[test]
    fn test_sequence_options() {
        let Statement::CreateSequence(seq) = parse(
            "CREATE SEQUENCE IF NOT EXISTS s INCREMENT BY -2 START WITH 10 MINVALUE 1 \
             NO MAXVALUE CACHE = 100 NOCYCLE COMMENT 'x'",
        ) else {
            panic!("expected CREATE SEQUENCE");
        };
        assert!(seq.if_not_exists);
        assert_eq!(
            seq.options,
            vec![
                SequenceOption::IncrementBy(-2),
                SequenceOption::StartWith(10),
                SequenceOption::MinValue(1),
                SequenceOption::NoMaxValue,
                SequenceOption::Cache(100),
                SequenceOption::NoCycle,
            ]
        );
        assert_eq!(seq.table_options.len(), 1);

        let Statement::AlterSequence(alter) = parse("ALTER SEQUENCE s RESTART") else {
            panic!("expected ALTER SEQUENCE");
        };
        assert_eq!(alter.options, vec![SequenceOption::Restart]);
    }

    #[test]
    fn test_sequence_increment_out_of_range() {
        let err = Parser::new()
            .parse_one_stmt("CREATE SEQUENCE seq INCREMENT -9223372036854775809", "", "")
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::DataOutOfRange);
    }

    #[test]
    fn test_placement_policy() {
        let Statement::CreatePlacementPolicy(policy) = parse(
            "CREATE PLACEMENT POLICY IF NOT EXISTS p PRIMARY_REGION=\"us-east\" \
             REGIONS=\"us-east,us-west\" FOLLOWERS=4",
        ) else {
            panic!("expected CREATE PLACEMENT POLICY");
        };
        assert_eq!(policy.options.len(), 3);
        assert_eq!(policy.options[2], PlacementOption::Followers(4));
        assert!(matches!(
            parse("CREATE OR REPLACE PLACEMENT POLICY p LEARNERS=1"),
            Statement::CreatePlacementPolicy(p) if p.or_replace
        ));
    }

    #[test]
    fn test_resource_group() {
        let Statement::CreateResourceGroup(group) = parse(
            "CREATE RESOURCE GROUP rg RU_PER_SEC = 100 PRIORITY = HIGH BURSTABLE \
             QUERY_LIMIT = (EXEC_ELAPSED = '60s', ACTION = SWITCH_GROUP(rg2), WATCH = SIMILAR DURATION = '10m')",
        ) else {
            panic!("expected CREATE RESOURCE GROUP");
        };
        assert_eq!(group.options[0], ResourceGroupOption::RuPerSec(RuPerSec::Limit(100)));
        assert_eq!(group.options[2], ResourceGroupOption::Burstable(Burstable::Moderated));
        let ResourceGroupOption::QueryLimit(Some(limit)) = &group.options[3] else {
            panic!("expected query limit");
        };
        assert_eq!(limit.conditions, vec![QueryLimitCondition::ExecElapsed("60s".into())]);
        assert_eq!(limit.action, Some(RunawayAction::SwitchGroup("rg2".into())));
        assert_eq!(limit.watch, Some((WatchKind::Similar, Some("10m".into()))));

        let Statement::AlterResourceGroup(alter) =
            parse("ALTER RESOURCE GROUP rg QUERY_LIMIT = NULL BACKGROUND = (TASK_TYPES = 'br')")
        else {
            panic!("expected ALTER RESOURCE GROUP");
        };
        assert_eq!(alter.options[0], ResourceGroupOption::QueryLimit(None));

        let Statement::AlterResourceGroup(default) = parse(
            "ALTER RESOURCE GROUP default BACKGROUND = (TASK_TYPES = 'br,ddl', UTILIZATION_LIMIT = 30)",
        ) else {
            panic!("expected ALTER RESOURCE GROUP");
        };
        assert_eq!(default.name, "default");
        assert!(matches!(default.options[0], ResourceGroupOption::Background(Some(_))));
        assert!(matches!(
            parse("DROP RESOURCE GROUP IF EXISTS default"),
            Statement::DropResourceGroup { name, .. } if name == "default"
        ));
    }

    #[test]
    fn test_statistics_and_stats() {
        let Statement::CreateStatistics(stats) =
            parse("CREATE STATISTICS IF NOT EXISTS s (CORRELATION) ON t (a, b)")
        else {
            panic!("expected CREATE STATISTICS");
        };
        assert_eq!(stats.kind, StatisticsKind::Correlation);
        assert_eq!(stats.columns.len(), 2);
        assert!(matches!(parse("DROP STATISTICS s"), Statement::DropStatistics(n) if n == "s"));
        assert!(matches!(
            parse("DROP STATS t PARTITION p0, p1"),
            Statement::DropStats(d) if d.partitions.len() == 2
        ));
    }

    #[test]
    fn test_bindings() {
        let Statement::CreateBinding(binding) =
            parse("CREATE GLOBAL BINDING FOR SELECT * FROM t USING SELECT /*+ USE_INDEX(t, i) */ * FROM t")
        else {
            panic!("expected CREATE BINDING");
        };
        assert!(binding.global);
        assert!(matches!(binding.source, BindingSource::Statement { origin: Some(_), .. }));

        let Statement::CreateBinding(history) =
            parse("CREATE BINDING FROM HISTORY USING PLAN DIGEST 'a', 'b'")
        else {
            panic!("expected CREATE BINDING");
        };
        assert!(!history.global);
        assert_eq!(
            history.source,
            BindingSource::PlanDigests(vec!["a".into(), "b".into()])
        );

        let Statement::DropBinding { global, target } =
            parse("DROP SESSION BINDING FOR SQL DIGEST 'd'")
        else {
            panic!("expected DROP BINDING");
        };
        assert!(!global);
        assert_eq!(target, BindingTarget::SqlDigests(vec!["d".into()]));
    }

    #[test]
    fn test_binding_wildcard_schema() {
        let Statement::DropBinding { target, .. } = parse("DROP GLOBAL BINDING FOR SELECT * FROM *.t")
        else {
            panic!("expected DROP BINDING");
        };
        let BindingTarget::Statement { origin, hinted: None } = target else {
            panic!("expected a statement target");
        };
        let Statement::Select(query) = *origin else {
            panic!("expected SELECT");
        };
        let QueryBody::Select(select) = query.body else {
            panic!("expected a SELECT block");
        };
        let Some(TableRef::Table(source)) = select.from else {
            panic!("expected a table source");
        };
        assert_eq!(source.name, TableName::any_schema("t"));

        let err = Parser::new()
            .parse_one_stmt("SELECT * FROM *.t", "", "")
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ParseError);
    }

    #[test]
    fn test_flashback_and_recover() {
        let Statement::Flashback(cluster) = parse("FLASHBACK CLUSTER TO TSO 445494839813079041")
        else {
            panic!("expected FLASHBACK");
        };
        assert_eq!(*cluster, Flashback::ClusterToTso(445_494_839_813_079_041));
        let Statement::Flashback(table) = parse("FLASHBACK TABLE t TO t2") else {
            panic!("expected FLASHBACK");
        };
        assert!(matches!(*table, Flashback::Table { new_name: Some(_), .. }));
        let Statement::Flashback(ts) =
            parse("FLASHBACK TABLE a, b TO TIMESTAMP '2024-01-01 00:00:00'")
        else {
            panic!("expected FLASHBACK");
        };
        assert!(matches!(*ts, Flashback::TablesToTimestamp { ref tables, .. } if tables.len() == 2));
        let Statement::RecoverTable(recover) = parse("RECOVER TABLE BY JOB 42") else {
            panic!("expected RECOVER TABLE");
        };
        assert_eq!(*recover, RecoverTable::ByJob(42));
    }

    #[test]
    fn test_split_and_distribute() {
        let Statement::SplitRegion(split) =
            parse("SPLIT TABLE t INDEX idx BETWEEN (0) AND (100) REGIONS 10")
        else {
            panic!("expected SPLIT");
        };
        assert_eq!(split.index.as_deref(), Some("idx"));
        assert!(matches!(split.spec, SplitSpec::Between { regions: 10, .. }));
        let Statement::SplitRegion(by) = parse("SPLIT PARTITION TABLE t BY (1), (2), (3)") else {
            panic!("expected SPLIT");
        };
        assert!(by.partition_keyword);
        assert!(matches!(by.spec, SplitSpec::By(ref rows) if rows.len() == 3));

        let Statement::DistributeTable(distribute) =
            parse("DISTRIBUTE TABLE t PARTITION (p0) RULE = 'leader-scatter' ENGINE = 'tikv'")
        else {
            panic!("expected DISTRIBUTE TABLE");
        };
        assert_eq!(distribute.partitions, vec!["p0"]);
        assert_eq!(distribute.options[1], ("engine".to_string(), "tikv".to_string()));
        assert!(matches!(
            parse("ALTER RANGE global PLACEMENT POLICY = p"),
            Statement::AlterRange(r) if r.name == "global"
        ));
    }
}
