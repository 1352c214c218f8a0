//! SHOW, ADMIN, ANALYZE, FLUSH, KILL, EXPLAIN, TRACE and the TiDB
//! operational statements (backup/restore, query watch, traffic capture,
//! plan replayer, resource calibration).

use super::error::ParseError;
use super::parser::Grammar;
use super::pratt::NO_INFIX_BP;
use crate::ast::{
    Admin, Analyze, AnalyzeOptionKind, AnalyzeTarget, BdrRole, Brie, BrieKind, BrieScope,
    BrieValue, CalibrateOption, CalibrateResource, ColumnName, Explain, ExplainTarget, Expr,
    Flush, FlushKind, Kill, PlanCacheScope, PlanReplayer, QueryWatch, QueryWatchOption, Show,
    ShowFilter, ShowKind, SlowQueryKind, Statement, TableName, Trace, Traffic, VarScope,
};
use crate::lexer::{Keyword, TokenKind};

impl Grammar<'_> {
    /// Reads an option name written as an identifier or any keyword,
    /// upper-cased.
    fn expect_option_name(&mut self) -> Result<String, ParseError> {
        let name = match &self.current().kind {
            TokenKind::Identifier(name) | TokenKind::QuotedIdentifier(name) => name.clone(),
            TokenKind::Keyword(kw) => kw.as_str().to_string(),
            _ => return Err(self.error()),
        };
        self.advance();
        Ok(name.to_ascii_uppercase())
    }

    fn parse_u64_list(&mut self) -> Result<Vec<u64>, ParseError> {
        let mut values = vec![self.expect_u64()?];
        while self.eat(&TokenKind::Comma) {
            values.push(self.expect_u64()?);
        }
        Ok(values)
    }

    // SHOW

    #[allow(clippy::too_many_lines)]
    pub(super) fn parse_show(&mut self) -> Result<Statement, ParseError> {
        self.expect_keyword(Keyword::Show)?;

        let scope = if self.eat_keyword(Keyword::Global) {
            Some(VarScope::Global)
        } else if self.eat_keyword(Keyword::Session) || self.eat_keyword(Keyword::Local) {
            Some(VarScope::Session)
        } else {
            None
        };
        if let Some(scope) = scope {
            let kind = if self.eat_keyword(Keyword::Variables) {
                ShowKind::Variables(scope)
            } else if self.eat_keyword(Keyword::Status) {
                ShowKind::Status(scope)
            } else {
                self.expect_keyword(Keyword::Bindings)?;
                ShowKind::Bindings(scope == VarScope::Global)
            };
            return self.finish_show(kind);
        }

        let extended = self.eat_keyword(Keyword::Extended);
        let full = self.eat_keyword(Keyword::Full);
        if self.eat_keyword(Keyword::Columns) || self.eat_keyword(Keyword::Fields) {
            let table = self.parse_show_table_from()?;
            return self.finish_show(ShowKind::Columns {
                extended,
                full,
                table,
            });
        }
        if extended {
            return Err(self.error());
        }
        if full {
            if self.eat_keyword(Keyword::Processlist) {
                return self.finish_show(ShowKind::Processlist(true));
            }
            self.expect_keyword(Keyword::Tables)?;
            let db = self.parse_opt_show_db()?;
            return self.finish_show(ShowKind::Tables { full: true, db });
        }

        let kind = match self.current().as_keyword() {
            Some(Keyword::Tables) => {
                self.advance();
                ShowKind::Tables {
                    full: false,
                    db: self.parse_opt_show_db()?,
                }
            }
            Some(Keyword::Table) => {
                self.advance();
                if self.eat_keyword(Keyword::Status) {
                    ShowKind::TableStatus(self.parse_opt_show_db()?)
                } else {
                    let table = self.parse_table_name()?;
                    if self.eat_word("next_row_id") {
                        ShowKind::TableNextRowId(table)
                    } else {
                        let partitions = self.parse_opt_partition_names()?;
                        let index = if self.eat_keyword(Keyword::Index) {
                            Some(self.expect_identifier()?)
                        } else {
                            None
                        };
                        self.expect_word("regions")?;
                        ShowKind::Regions {
                            table,
                            partitions,
                            index,
                        }
                    }
                }
            }
            Some(Keyword::Index | Keyword::Indexes | Keyword::Keys) => {
                self.advance();
                ShowKind::Index(self.parse_show_table_from()?)
            }
            Some(Keyword::Databases) => {
                self.advance();
                ShowKind::Databases
            }
            Some(Keyword::Variables) => {
                self.advance();
                ShowKind::Variables(VarScope::Session)
            }
            Some(Keyword::Status) => {
                self.advance();
                ShowKind::Status(VarScope::Session)
            }
            Some(Keyword::Bindings) => {
                self.advance();
                ShowKind::Bindings(false)
            }
            Some(Keyword::Warnings) => {
                self.advance();
                ShowKind::Warnings
            }
            Some(Keyword::Errors) => {
                self.advance();
                ShowKind::Errors
            }
            Some(Keyword::Processlist) => {
                self.advance();
                ShowKind::Processlist(false)
            }
            Some(Keyword::Engines) => {
                self.advance();
                ShowKind::Engines
            }
            Some(Keyword::Storage) => {
                self.advance();
                self.expect_keyword(Keyword::Engines)?;
                ShowKind::Engines
            }
            Some(Keyword::Charset) => {
                self.advance();
                ShowKind::Charset
            }
            Some(Keyword::Character) => {
                self.advance();
                self.expect_keyword(Keyword::Set)?;
                ShowKind::Charset
            }
            Some(Keyword::Collation) => {
                self.advance();
                ShowKind::Collation
            }
            Some(Keyword::Create) => {
                self.advance();
                return self.parse_show_create();
            }
            Some(Keyword::Grants) => {
                self.advance();
                let (user, roles) = if self.eat_keyword(Keyword::For) {
                    let user = self.parse_user_identity()?;
                    let roles = if self.eat_keyword(Keyword::Using) {
                        self.parse_user_identity_list()?
                    } else {
                        Vec::new()
                    };
                    (Some(user), roles)
                } else {
                    (None, Vec::new())
                };
                return Ok(Statement::Show(Box::new(Show {
                    kind: ShowKind::Grants { user, roles },
                    filter: None,
                })));
            }
            Some(Keyword::Privileges) => {
                self.advance();
                ShowKind::Privileges
            }
            Some(Keyword::Plugins) => {
                self.advance();
                ShowKind::Plugins
            }
            Some(Keyword::Triggers) => {
                self.advance();
                ShowKind::Triggers(self.parse_opt_show_db()?)
            }
            Some(Keyword::Events) => {
                self.advance();
                ShowKind::Events(self.parse_opt_show_db()?)
            }
            Some(Keyword::Open) => {
                self.advance();
                self.expect_keyword(Keyword::Tables)?;
                ShowKind::OpenTables(self.parse_opt_show_db()?)
            }
            Some(Keyword::Profiles) => {
                self.advance();
                ShowKind::Profiles
            }
            Some(Keyword::StatsExtended) => {
                self.advance();
                ShowKind::StatsExtended
            }
            Some(Keyword::Analyze) => {
                self.advance();
                self.expect_keyword(Keyword::Status)?;
                ShowKind::AnalyzeStatus
            }
            Some(Keyword::Placement) => {
                self.advance();
                if self.eat_word("labels") {
                    ShowKind::PlacementLabels
                } else if self.eat_keyword(Keyword::For) {
                    self.parse_show_placement_for()?
                } else {
                    ShowKind::Placement
                }
            }
            Some(Keyword::Import) => {
                self.advance();
                if self.eat_word("jobs") {
                    ShowKind::ImportJobs
                } else {
                    self.expect_word("job")?;
                    return Ok(Statement::Show(Box::new(Show {
                        kind: ShowKind::ImportJob(self.expect_u64()?),
                        filter: None,
                    })));
                }
            }
            Some(Keyword::Procedure | Keyword::Function) => {
                let procedure = self.check_keyword(Keyword::Procedure);
                self.advance();
                self.expect_keyword(Keyword::Status)?;
                if procedure {
                    ShowKind::ProcedureStatus
                } else {
                    ShowKind::FunctionStatus
                }
            }
            Some(Keyword::Backup) => {
                self.advance();
                self.expect_keyword(Keyword::Logs)?;
                if self.eat_keyword(Keyword::Status) {
                    ShowKind::BackupLogsStatus
                } else {
                    self.expect_word("metadata")?;
                    self.expect_keyword(Keyword::From)?;
                    return Ok(Statement::Show(Box::new(Show {
                        kind: ShowKind::BackupLogsMetadata(self.expect_string()?),
                        filter: None,
                    })));
                }
            }
            _ => self.parse_show_word()?,
        };
        self.finish_show(kind)
    }

    /// SHOW targets spelled with non-keyword words.
    fn parse_show_word(&mut self) -> Result<ShowKind, ParseError> {
        if self.check_word("count")
            && self.check_at_kind(1, &TokenKind::LeftParen)
            && self.check_at_kind(2, &TokenKind::Star)
            && self.check_at_kind(3, &TokenKind::RightParen)
        {
            for _ in 0..4 {
                self.advance();
            }
            if self.eat_keyword(Keyword::Warnings) {
                return Ok(ShowKind::CountWarnings);
            }
            self.expect_keyword(Keyword::Errors)?;
            return Ok(ShowKind::CountErrors);
        }
        let Some(word) = self.identifier_at(0).map(|w| w.to_ascii_lowercase()) else {
            return Err(self.error());
        };
        let kind = match word.as_str() {
            "schemas" => ShowKind::Databases,
            "master" => {
                self.advance();
                self.expect_keyword(Keyword::Status)?;
                return Ok(ShowKind::MasterStatus);
            }
            "binding_cache" => {
                self.advance();
                self.expect_keyword(Keyword::Status)?;
                return Ok(ShowKind::BindingCacheStatus);
            }
            "stats_meta" => ShowKind::StatsMeta,
            "stats_histograms" => ShowKind::StatsHistograms,
            "stats_buckets" => ShowKind::StatsBuckets,
            "stats_healthy" => ShowKind::StatsHealthy,
            "stats_topn" => ShowKind::StatsTopn,
            "stats_locked" => ShowKind::StatsLocked,
            "column_stats_usage" => ShowKind::ColumnStatsUsage,
            "backups" => ShowKind::Backups,
            "restores" => ShowKind::Restores,
            "builtins" => ShowKind::Builtins,
            "session_states" => ShowKind::SessionStates,
            "config" => ShowKind::Config,
            "distribution" => {
                self.advance();
                self.expect_word("jobs")?;
                return Ok(ShowKind::DistributionJobs);
            }
            "traffic" => {
                self.advance();
                self.expect_word("jobs")?;
                return Ok(ShowKind::TrafficJobs);
            }
            _ => return Err(self.error()),
        };
        self.advance();
        Ok(kind)
    }

    fn check_at_kind(&self, n: usize, kind: &TokenKind) -> bool {
        self.peek_kind(n) == kind
    }

    fn parse_show_create(&mut self) -> Result<Statement, ParseError> {
        let kind = match self.current().as_keyword() {
            Some(Keyword::Table) => {
                self.advance();
                ShowKind::CreateTable(self.parse_table_name()?)
            }
            Some(Keyword::View) => {
                self.advance();
                ShowKind::CreateView(self.parse_table_name()?)
            }
            Some(Keyword::Sequence) => {
                self.advance();
                ShowKind::CreateSequence(self.parse_table_name()?)
            }
            Some(Keyword::Database) => {
                self.advance();
                self.parse_show_create_database()?
            }
            Some(Keyword::User) => {
                self.advance();
                ShowKind::CreateUser(self.parse_user_identity()?)
            }
            Some(Keyword::Placement) => {
                self.advance();
                self.expect_keyword(Keyword::Policy)?;
                ShowKind::CreatePlacementPolicy(self.expect_identifier()?)
            }
            Some(Keyword::Resource) => {
                self.advance();
                self.expect_keyword(Keyword::Group)?;
                ShowKind::CreateResourceGroup(self.expect_identifier()?)
            }
            _ if self.eat_word("schema") => self.parse_show_create_database()?,
            _ => return Err(self.error()),
        };
        Ok(Statement::Show(Box::new(Show { kind, filter: None })))
    }

    fn parse_show_create_database(&mut self) -> Result<ShowKind, ParseError> {
        let if_not_exists = self.parse_if_not_exists()?;
        let name = self.expect_identifier()?;
        Ok(ShowKind::CreateDatabase {
            if_not_exists,
            name,
        })
    }

    /// `DATABASE d` or `TABLE t [PARTITION p]` after `PLACEMENT FOR`.
    fn parse_show_placement_for(&mut self) -> Result<ShowKind, ParseError> {
        if self.eat_keyword(Keyword::Database) || self.eat_word("schema") {
            return Ok(ShowKind::PlacementFor {
                db: Some(self.expect_identifier()?),
                table: None,
                partition: None,
            });
        }
        self.expect_keyword(Keyword::Table)?;
        let table = self.parse_table_name()?;
        let partition = if self.eat_keyword(Keyword::Partition) {
            Some(self.expect_identifier()?)
        } else {
            None
        };
        Ok(ShowKind::PlacementFor {
            db: None,
            table: Some(table),
            partition,
        })
    }

    fn eat_from_or_in(&mut self) -> bool {
        self.eat_keyword(Keyword::From) || self.eat_keyword(Keyword::In)
    }

    /// `{FROM | IN} t [{FROM | IN} db]`
    fn parse_show_table_from(&mut self) -> Result<TableName, ParseError> {
        if !self.eat_from_or_in() {
            return Err(self.error());
        }
        let mut table = self.parse_table_name()?;
        if self.eat_from_or_in() {
            table.schema = Some(self.expect_identifier()?);
        }
        Ok(table)
    }

    fn parse_opt_show_db(&mut self) -> Result<Option<String>, ParseError> {
        if self.eat_from_or_in() {
            return self.expect_identifier().map(Some);
        }
        Ok(None)
    }

    fn finish_show(&mut self, kind: ShowKind) -> Result<Statement, ParseError> {
        let filter = if self.eat_keyword(Keyword::Like) {
            Some(ShowFilter::Like(self.parse_expression(NO_INFIX_BP)?))
        } else if self.eat_keyword(Keyword::Where) {
            Some(ShowFilter::Where(self.parse_expr()?))
        } else {
            None
        };
        Ok(Statement::Show(Box::new(Show { kind, filter })))
    }

    // ADMIN

    #[allow(clippy::too_many_lines)]
    pub(super) fn parse_admin(&mut self) -> Result<Statement, ParseError> {
        self.expect_keyword(Keyword::Admin)?;
        let admin = match self.current().as_keyword() {
            Some(Keyword::Show) => {
                self.advance();
                self.parse_admin_show()?
            }
            Some(Keyword::Check) => {
                self.advance();
                if self.eat_keyword(Keyword::Table) {
                    Admin::CheckTable(self.parse_table_name_list()?)
                } else {
                    self.expect_keyword(Keyword::Index)?;
                    let table = self.parse_table_name()?;
                    let index = self.expect_identifier()?;
                    let mut ranges = Vec::new();
                    while self.eat(&TokenKind::LeftParen) {
                        let lower = self.expect_i64()?;
                        self.expect(&TokenKind::Comma)?;
                        let upper = self.expect_i64()?;
                        self.expect(&TokenKind::RightParen)?;
                        ranges.push((lower, upper));
                        if !self.eat(&TokenKind::Comma) {
                            break;
                        }
                    }
                    Admin::CheckIndex {
                        table,
                        index,
                        ranges,
                    }
                }
            }
            Some(Keyword::Recover) => {
                self.advance();
                self.expect_keyword(Keyword::Index)?;
                let table = self.parse_table_name()?;
                let index = self.expect_identifier()?;
                Admin::RecoverIndex { table, index }
            }
            Some(Keyword::Cleanup) => {
                self.advance();
                if self.eat_keyword(Keyword::Index) {
                    let table = self.parse_table_name()?;
                    let index = self.expect_identifier()?;
                    Admin::CleanupIndex { table, index }
                } else {
                    self.expect_keyword(Keyword::Table)?;
                    self.expect_keyword(Keyword::Lock)?;
                    Admin::CleanupTableLock(self.parse_table_name_list()?)
                }
            }
            Some(Keyword::Checksum) => {
                self.advance();
                self.expect_keyword(Keyword::Table)?;
                Admin::ChecksumTable(self.parse_table_name_list()?)
            }
            Some(Keyword::Cancel | Keyword::Pause | Keyword::Resume) => {
                let verb = self.current().as_keyword();
                self.advance();
                self.expect_keyword(Keyword::Ddl)?;
                self.expect_word("jobs")?;
                let ids = self.parse_u64_list()?;
                match verb {
                    Some(Keyword::Cancel) => Admin::CancelDdlJobs(ids),
                    Some(Keyword::Pause) => Admin::PauseDdlJobs(ids),
                    _ => Admin::ResumeDdlJobs(ids),
                }
            }
            Some(Keyword::Alter) => {
                self.advance();
                self.expect_keyword(Keyword::Ddl)?;
                self.expect_word("jobs")?;
                let job_id = self.expect_u64()?;
                let mut options = Vec::new();
                loop {
                    let name = self.expect_option_name()?.to_ascii_lowercase();
                    self.expect(&TokenKind::Eq)?;
                    options.push((name, self.parse_expression(NO_INFIX_BP)?));
                    if !self.eat(&TokenKind::Comma) {
                        break;
                    }
                }
                Admin::AlterDdlJob { job_id, options }
            }
            Some(Keyword::Plugins) => {
                self.advance();
                if self.eat_keyword(Keyword::Enable) {
                    Admin::PluginsEnable(self.parse_identifier_list()?)
                } else {
                    self.expect_keyword(Keyword::Disable)?;
                    Admin::PluginsDisable(self.parse_identifier_list()?)
                }
            }
            Some(Keyword::Reload) => {
                self.advance();
                if self.eat_keyword(Keyword::Bindings) {
                    Admin::ReloadBindings
                } else if self.eat_keyword(Keyword::StatsExtended) {
                    Admin::ReloadStatsExtended
                } else if self.eat_word("expr_pushdown_blacklist") {
                    Admin::ReloadExprPushdownBlacklist
                } else {
                    self.expect_word("opt_rule_blacklist")?;
                    Admin::ReloadOptRuleBlacklist
                }
            }
            Some(Keyword::Flush) => {
                self.advance();
                if self.eat_keyword(Keyword::Bindings) {
                    Admin::FlushBindings
                } else {
                    let scope = if self.eat_keyword(Keyword::Instance) {
                        PlanCacheScope::Instance
                    } else if self.eat_keyword(Keyword::Session) {
                        PlanCacheScope::Session
                    } else {
                        self.expect_keyword(Keyword::Global)?;
                        PlanCacheScope::Global
                    };
                    self.expect_word("plan_cache")?;
                    Admin::FlushPlanCache(scope)
                }
            }
            Some(Keyword::Set) => {
                self.advance();
                self.expect_word("bdr")?;
                self.expect_keyword(Keyword::Role)?;
                let role = if self.eat_keyword(Keyword::Primary) {
                    BdrRole::Primary
                } else if self.eat_word("secondary") {
                    BdrRole::Secondary
                } else {
                    self.expect_word("local_only")?;
                    BdrRole::LocalOnly
                };
                Admin::SetBdrRole(role)
            }
            _ if self.eat_word("capture") => {
                self.expect_keyword(Keyword::Bindings)?;
                Admin::CaptureBindings
            }
            _ if self.eat_word("evolve") => {
                self.expect_keyword(Keyword::Bindings)?;
                Admin::EvolveBindings
            }
            _ if self.eat_word("unset") => {
                self.expect_word("bdr")?;
                self.expect_keyword(Keyword::Role)?;
                Admin::UnsetBdrRole
            }
            _ if self.eat_word("reset") => {
                self.expect_word("telemetry_id")?;
                Admin::ResetTelemetryId
            }
            _ => return Err(self.error()),
        };
        Ok(Statement::Admin(Box::new(admin)))
    }

    /// The part of `ADMIN SHOW ...` after `SHOW`.
    fn parse_admin_show(&mut self) -> Result<Admin, ParseError> {
        if self.eat_keyword(Keyword::Ddl) {
            if self.eat_word("jobs") {
                let count = if matches!(self.current().kind, TokenKind::Integer(_)) {
                    Some(self.expect_u64()?)
                } else {
                    None
                };
                let filter = if self.eat_keyword(Keyword::Where) {
                    Some(self.parse_expr()?)
                } else {
                    None
                };
                return Ok(Admin::ShowDdlJobs { count, filter });
            }
            if self.eat_word("job") {
                self.expect_word("queries")?;
                if self.eat_keyword(Keyword::Limit) {
                    let first = self.expect_u64()?;
                    if self.eat(&TokenKind::Comma) {
                        return Ok(Admin::ShowDdlJobQueriesLimit {
                            limit: self.expect_u64()?,
                            offset: Some(first),
                        });
                    }
                    let offset = if self.eat_keyword(Keyword::Offset) {
                        Some(self.expect_u64()?)
                    } else {
                        None
                    };
                    return Ok(Admin::ShowDdlJobQueriesLimit {
                        limit: first,
                        offset,
                    });
                }
                return Ok(Admin::ShowDdlJobQueries(self.parse_u64_list()?));
            }
            return Ok(Admin::ShowDdl);
        }
        if self.eat_keyword(Keyword::Slow) {
            if self.eat_word("recent") {
                return Ok(Admin::ShowSlowRecent(self.expect_u64()?));
            }
            self.expect_word("top")?;
            let kind = if self.eat_word("internal") {
                SlowQueryKind::Internal
            } else if self.eat_keyword(Keyword::All) {
                SlowQueryKind::All
            } else {
                SlowQueryKind::Default
            };
            return Ok(Admin::ShowSlowTop {
                kind,
                count: self.expect_u64()?,
            });
        }
        if self.eat_word("bdr") {
            self.expect_keyword(Keyword::Role)?;
            return Ok(Admin::ShowBdrRole);
        }
        if self.eat_word("telemetry") {
            return Ok(Admin::ShowTelemetry);
        }
        let table = self.parse_table_name()?;
        self.expect_word("next_row_id")?;
        Ok(Admin::ShowNextRowId(table))
    }

    // ANALYZE

    /// `ANALYZE [NO_WRITE_TO_BINLOG | LOCAL] TABLE t, ... [target] [WITH options]`
    pub(super) fn parse_analyze(&mut self) -> Result<Statement, ParseError> {
        self.expect_keyword(Keyword::Analyze)?;
        let no_write_to_binlog =
            self.eat_keyword(Keyword::NoWriteToBinlog) || self.eat_keyword(Keyword::Local);
        self.expect_keyword(Keyword::Table)?;
        let tables = self.parse_table_name_list()?;
        let partitions = if self.eat_keyword(Keyword::Partition) {
            self.parse_identifier_list()?
        } else {
            Vec::new()
        };
        let target = if self.eat_keyword(Keyword::Index) {
            if self.is_identifier_at(0) && !self.check_keyword(Keyword::With) {
                AnalyzeTarget::Indexes(self.parse_identifier_list()?)
            } else {
                AnalyzeTarget::Indexes(Vec::new())
            }
        } else if self.eat_keyword(Keyword::Columns) {
            AnalyzeTarget::Columns(self.parse_column_name_list()?)
        } else if self.eat_word("predicate") {
            self.expect_keyword(Keyword::Columns)?;
            AnalyzeTarget::PredicateColumns
        } else if self.check_keyword(Keyword::All) && self.check_keyword_at(1, Keyword::Columns) {
            self.advance();
            self.advance();
            AnalyzeTarget::AllColumns
        } else if self.eat_keyword(Keyword::Update) {
            self.expect_word("histogram")?;
            self.expect_keyword(Keyword::On)?;
            AnalyzeTarget::UpdateHistogram(self.parse_column_name_list()?)
        } else if self.eat_keyword(Keyword::Drop) {
            self.expect_word("histogram")?;
            self.expect_keyword(Keyword::On)?;
            AnalyzeTarget::DropHistogram(self.parse_column_name_list()?)
        } else {
            AnalyzeTarget::Table
        };
        let mut options = Vec::new();
        if self.eat_keyword(Keyword::With) {
            loop {
                let value = self.parse_expression(NO_INFIX_BP)?;
                let kind = if self.eat_word("buckets") {
                    AnalyzeOptionKind::Buckets
                } else if self.eat_word("topn") {
                    AnalyzeOptionKind::TopN
                } else if self.eat_word("samples") {
                    AnalyzeOptionKind::Samples
                } else if self.eat_word("samplerate") {
                    AnalyzeOptionKind::SampleRate
                } else {
                    self.expect_word("cmsketch")?;
                    if self.eat_word("depth") {
                        AnalyzeOptionKind::CmSketchDepth
                    } else {
                        self.expect_word("width")?;
                        AnalyzeOptionKind::CmSketchWidth
                    }
                };
                options.push((kind, value));
                if !self.eat(&TokenKind::Comma) {
                    break;
                }
            }
        }
        Ok(Statement::Analyze(Box::new(Analyze {
            no_write_to_binlog,
            tables,
            partitions,
            target,
            options,
        })))
    }

    fn parse_column_name_list(&mut self) -> Result<Vec<ColumnName>, ParseError> {
        let mut columns = vec![self.parse_column_name()?];
        while self.eat(&TokenKind::Comma) {
            columns.push(self.parse_column_name()?);
        }
        Ok(columns)
    }

    // FLUSH and KILL

    pub(super) fn parse_flush(&mut self) -> Result<Statement, ParseError> {
        self.expect_keyword(Keyword::Flush)?;
        let no_write_to_binlog =
            self.eat_keyword(Keyword::NoWriteToBinlog) || self.eat_keyword(Keyword::Local);
        let kind = match self.current().as_keyword() {
            Some(Keyword::Tables | Keyword::Table) => {
                self.advance();
                let tables = if self.is_identifier_at(0) && !self.check_keyword(Keyword::With) {
                    self.parse_table_name_list()?
                } else {
                    Vec::new()
                };
                let read_lock = if self.eat_keyword(Keyword::With) {
                    self.expect_keyword(Keyword::Read)?;
                    self.expect_keyword(Keyword::Lock)?;
                    true
                } else {
                    false
                };
                FlushKind::Tables { tables, read_lock }
            }
            Some(Keyword::Privileges) => {
                self.advance();
                FlushKind::Privileges
            }
            Some(Keyword::Status) => {
                self.advance();
                FlushKind::Status
            }
            Some(Keyword::Hosts) => {
                self.advance();
                FlushKind::Hosts
            }
            Some(Keyword::Logs) => {
                self.advance();
                FlushKind::Logs
            }
            Some(Keyword::Binary | Keyword::Engine | Keyword::General | Keyword::Slow)
                if self.check_keyword_at(1, Keyword::Logs) =>
            {
                self.advance();
                self.advance();
                FlushKind::Logs
            }
            _ if self.eat_word("client_errors_summary") => FlushKind::ClientErrorsSummary,
            _ if self.eat_word("tidb") => {
                self.expect_keyword(Keyword::Plugins)?;
                FlushKind::TidbPlugins(self.parse_identifier_list()?)
            }
            _ if self.eat_word("stats_delta") => FlushKind::StatsDelta(self.eat_word("cluster")),
            _ => return Err(self.error()),
        };
        Ok(Statement::Flush(Box::new(Flush {
            no_write_to_binlog,
            kind,
        })))
    }

    /// `KILL [TIDB] [QUERY | CONNECTION] id`
    pub(super) fn parse_kill(&mut self) -> Result<Statement, ParseError> {
        self.expect_keyword(Keyword::Kill)?;
        let tidb = self.eat_word("tidb");
        let query = if self.eat_keyword(Keyword::Query) {
            true
        } else {
            self.eat_keyword(Keyword::Connection);
            false
        };
        let connection_id = self.expect_u64()?;
        Ok(Statement::Kill(Kill {
            tidb,
            query,
            connection_id,
        }))
    }

    // EXPLAIN and TRACE

    /// `FORMAT = {'name' | name}`, lower-cased.
    fn parse_opt_format(&mut self) -> Result<Option<String>, ParseError> {
        if !(self.check_keyword(Keyword::Format) && self.check_at_kind(1, &TokenKind::Eq)) {
            return Ok(None);
        }
        self.advance();
        self.advance();
        Ok(Some(self.expect_name_or_string()?.to_ascii_lowercase()))
    }

    pub(super) fn parse_explain(&mut self) -> Result<Statement, ParseError> {
        self.advance();
        if self.is_identifier_at(0)
            && !(self.check_keyword(Keyword::Format) && self.check_at_kind(1, &TokenKind::Eq))
            && !self.is_statement_keyword()
        {
            let table = self.parse_table_name()?;
            let column = if let Some(column) = self.identifier_at(0) {
                self.advance();
                Some(column)
            } else if self.check_string() {
                Some(self.expect_string()?)
            } else {
                None
            };
            return Ok(Statement::Explain(Box::new(Explain {
                analyze: false,
                format: None,
                target: ExplainTarget::Table { table, column },
            })));
        }
        let analyze = self.eat_keyword(Keyword::Analyze);
        let format = self.parse_opt_format()?;
        let target = if self.check_keyword(Keyword::For)
            && self.check_keyword_at(1, Keyword::Connection)
        {
            self.advance();
            self.advance();
            ExplainTarget::Connection(self.expect_u64()?)
        } else {
            ExplainTarget::Statement(self.parse_nested_statement()?)
        };
        Ok(Statement::Explain(Box::new(Explain {
            analyze,
            format,
            target,
        })))
    }

    /// Non-reserved keywords that begin a statement rather than name a table.
    fn is_statement_keyword(&self) -> bool {
        matches!(
            self.current().as_keyword(),
            Some(
                Keyword::Admin
                    | Keyword::Backup
                    | Keyword::Begin
                    | Keyword::Cancel
                    | Keyword::Commit
                    | Keyword::Deallocate
                    | Keyword::Do
                    | Keyword::Execute
                    | Keyword::Flush
                    | Keyword::Help
                    | Keyword::Import
                    | Keyword::Pause
                    | Keyword::Prepare
                    | Keyword::Purge
                    | Keyword::Query
                    | Keyword::Recover
                    | Keyword::Restore
                    | Keyword::Resume
                    | Keyword::Rollback
                    | Keyword::Savepoint
                    | Keyword::Set
                    | Keyword::Show
                    | Keyword::Start
                    | Keyword::Trace
                    | Keyword::Truncate
                    | Keyword::Unlock
            )
        ) || ["batch", "flashback", "split", "distribute", "traffic", "calibrate"]
            .iter()
            .any(|word| self.check_word(word))
    }

    /// `TRACE [FORMAT = 'f'] stmt` or `TRACE PLAN [TARGET = 't'] stmt`
    pub(super) fn parse_trace(&mut self) -> Result<Statement, ParseError> {
        self.expect_keyword(Keyword::Trace)?;
        let mut format = None;
        let mut plan_target = None;
        if self.check_word("plan") && !self.check_at_kind(1, &TokenKind::Eq) {
            self.advance();
            let target = if self.check_word("target") && self.check_at_kind(1, &TokenKind::Eq) {
                self.advance();
                self.advance();
                Some(self.expect_string()?)
            } else {
                None
            };
            plan_target = Some(target);
        } else {
            format = self.parse_opt_format()?;
        }
        let stmt = self.parse_nested_statement()?;
        Ok(Statement::Trace(Box::new(Trace {
            format,
            plan_target,
            stmt,
        })))
    }

    // Backup and restore

    #[allow(clippy::too_many_lines)]
    pub(super) fn parse_brie(&mut self) -> Result<Statement, ParseError> {
        let (kind, storage) = match self.current().as_keyword() {
            Some(Keyword::Backup) => {
                self.advance();
                if self.eat_keyword(Keyword::Logs) {
                    self.expect_keyword(Keyword::To)?;
                    (BrieKind::StreamStart, Some(self.expect_string()?))
                } else {
                    let scope = self.parse_brie_scope()?;
                    self.expect_keyword(Keyword::To)?;
                    let storage = self.expect_string()?;
                    let options = self.parse_brie_options()?;
                    return Ok(Statement::Brie(Box::new(Brie {
                        kind: BrieKind::Backup,
                        scope,
                        storage: Some(storage),
                        options,
                    })));
                }
            }
            Some(Keyword::Restore) => {
                self.advance();
                if self.eat_word("point") {
                    self.expect_keyword(Keyword::From)?;
                    (BrieKind::RestorePoint, Some(self.expect_string()?))
                } else {
                    let scope = self.parse_brie_scope()?;
                    self.expect_keyword(Keyword::From)?;
                    let storage = self.expect_string()?;
                    let options = self.parse_brie_options()?;
                    return Ok(Statement::Brie(Box::new(Brie {
                        kind: BrieKind::Restore,
                        scope,
                        storage: Some(storage),
                        options,
                    })));
                }
            }
            Some(Keyword::Pause) => {
                self.advance();
                self.expect_keyword(Keyword::Backup)?;
                self.expect_keyword(Keyword::Logs)?;
                (BrieKind::StreamPause, None)
            }
            Some(Keyword::Resume) => {
                self.advance();
                self.expect_keyword(Keyword::Backup)?;
                self.expect_keyword(Keyword::Logs)?;
                (BrieKind::StreamResume, None)
            }
            Some(Keyword::Purge) => {
                self.advance();
                self.expect_keyword(Keyword::Backup)?;
                self.expect_keyword(Keyword::Logs)?;
                self.expect_keyword(Keyword::From)?;
                (BrieKind::StreamPurge, Some(self.expect_string()?))
            }
            _ => {
                self.expect_word("stop")?;
                self.expect_keyword(Keyword::Backup)?;
                self.expect_keyword(Keyword::Logs)?;
                (BrieKind::StreamStop, None)
            }
        };
        let options = self.parse_brie_options()?;
        Ok(Statement::Brie(Box::new(Brie {
            kind,
            scope: BrieScope::None,
            storage,
            options,
        })))
    }

    /// `DATABASE {* | db, ...}` or `TABLE t, ...`; `*` is an empty list.
    fn parse_brie_scope(&mut self) -> Result<BrieScope, ParseError> {
        if self.eat_keyword(Keyword::Database) || self.eat_word("schema") {
            if self.eat(&TokenKind::Star) {
                return Ok(BrieScope::Databases(Vec::new()));
            }
            return Ok(BrieScope::Databases(self.parse_identifier_list()?));
        }
        self.expect_keyword(Keyword::Table)?;
        Ok(BrieScope::Tables(self.parse_table_name_list()?))
    }

    fn parse_brie_options(&mut self) -> Result<Vec<(String, BrieValue)>, ParseError> {
        let mut options = Vec::new();
        while !matches!(self.current().kind, TokenKind::Eof | TokenKind::Semicolon) {
            let name = self.expect_option_name()?;
            self.eat_eq();
            let value = match &self.current().kind {
                TokenKind::Integer(_) => {
                    let n = self.expect_u64()?;
                    if self.eat_word("mb") {
                        self.expect(&TokenKind::Slash)?;
                        self.expect_word("second")?;
                        BrieValue::RateLimit(n)
                    } else if self.time_unit_at(0).is_some() && self.check_word_at(1, "ago") {
                        let unit = self.parse_time_unit()?;
                        self.advance();
                        BrieValue::Ago(n, unit)
                    } else {
                        BrieValue::Int(n)
                    }
                }
                TokenKind::String(_) => BrieValue::String(self.expect_string()?),
                TokenKind::Keyword(Keyword::True) => {
                    self.advance();
                    BrieValue::Bool(true)
                }
                TokenKind::Keyword(Keyword::False) => {
                    self.advance();
                    BrieValue::Bool(false)
                }
                _ => return Err(self.error()),
            };
            options.push((name, value));
            self.eat(&TokenKind::Comma);
        }
        Ok(options)
    }

    // Resource control

    /// `QUERY WATCH ADD options` or `QUERY WATCH REMOVE ...`
    pub(super) fn parse_query_watch(&mut self) -> Result<Statement, ParseError> {
        self.expect_keyword(Keyword::Query)?;
        self.expect_word("watch")?;
        if self.eat_keyword(Keyword::Remove) {
            if self.eat_keyword(Keyword::Resource) {
                self.expect_keyword(Keyword::Group)?;
                return Ok(Statement::QueryWatch(Box::new(QueryWatch::RemoveGroup(
                    self.expect_identifier()?,
                ))));
            }
            return Ok(Statement::QueryWatch(Box::new(QueryWatch::Remove(
                self.expect_u64()?,
            ))));
        }
        self.expect_keyword(Keyword::Add)?;
        let mut options = Vec::new();
        loop {
            let option = if self.eat_keyword(Keyword::Resource) {
                self.expect_keyword(Keyword::Group)?;
                QueryWatchOption::ResourceGroup(self.expect_identifier()?)
            } else if self.eat_keyword(Keyword::Action) {
                self.eat_eq();
                QueryWatchOption::Action(self.parse_runaway_action()?)
            } else if self.check_keyword(Keyword::Sql) && self.check_word_at(1, "digest") {
                self.advance();
                self.advance();
                QueryWatchOption::SqlDigest(self.expect_string()?)
            } else if self.check_word("plan") && self.check_word_at(1, "digest") {
                self.advance();
                self.advance();
                QueryWatchOption::PlanDigest(self.expect_string()?)
            } else if self.check_keyword(Keyword::Sql) && self.check_word_at(1, "text") {
                self.advance();
                self.advance();
                let kind = self.parse_watch_kind()?;
                self.expect_keyword(Keyword::To)?;
                QueryWatchOption::SqlText {
                    kind,
                    text: self.expect_string()?,
                }
            } else {
                break;
            };
            options.push(option);
            self.eat(&TokenKind::Comma);
        }
        if options.is_empty() {
            return Err(self.error());
        }
        Ok(Statement::QueryWatch(Box::new(QueryWatch::Add(options))))
    }

    /// `CALIBRATE RESOURCE [WORKLOAD w | time options]`
    pub(super) fn parse_calibrate(&mut self) -> Result<Statement, ParseError> {
        self.expect_word("calibrate")?;
        self.expect_keyword(Keyword::Resource)?;
        let mut calibrate = CalibrateResource {
            workload: None,
            options: Vec::new(),
        };
        if self.eat_word("workload") {
            calibrate.workload = Some(self.expect_option_name()?);
            return Ok(Statement::CalibrateResource(Box::new(calibrate)));
        }
        loop {
            let option = if self.eat_word("start_time") {
                self.eat_eq();
                CalibrateOption::StartTime(self.parse_expr()?)
            } else if self.eat_word("end_time") {
                self.eat_eq();
                CalibrateOption::EndTime(self.parse_expr()?)
            } else if self.eat_word("duration") {
                self.eat_eq();
                CalibrateOption::Duration(self.parse_expr()?)
            } else {
                break;
            };
            calibrate.options.push(option);
            self.eat(&TokenKind::Comma);
        }
        Ok(Statement::CalibrateResource(Box::new(calibrate)))
    }

    // Diagnostics

    pub(super) fn parse_plan_replayer(&mut self) -> Result<Statement, ParseError> {
        self.expect_word("plan")?;
        self.expect_word("replayer")?;
        let replayer = if self.eat_word("dump") {
            let explain = self.eat_keyword(Keyword::Explain);
            let analyze = explain && self.eat_keyword(Keyword::Analyze);
            if self.check_string() {
                PlanReplayer::Dump {
                    explain,
                    analyze,
                    stmt: None,
                    file: Some(self.expect_string()?),
                }
            } else {
                PlanReplayer::Dump {
                    explain,
                    analyze,
                    stmt: Some(self.parse_nested_statement()?),
                    file: None,
                }
            }
        } else if self.eat_keyword(Keyword::Load) {
            PlanReplayer::Load(self.expect_string()?)
        } else {
            self.expect_word("capture")?;
            let remove = self.eat_keyword(Keyword::Remove);
            let sql_digest = self.expect_single_string()?;
            let plan_digest = self.expect_single_string()?;
            if remove {
                PlanReplayer::CaptureRemove {
                    sql_digest,
                    plan_digest,
                }
            } else {
                PlanReplayer::Capture {
                    sql_digest,
                    plan_digest,
                }
            }
        };
        Ok(Statement::PlanReplayer(Box::new(replayer)))
    }

    /// `TRAFFIC {CAPTURE TO | REPLAY FROM} 'dir' options` or `CANCEL TRAFFIC JOBS`
    pub(super) fn parse_traffic(&mut self) -> Result<Statement, ParseError> {
        if self.eat_keyword(Keyword::Cancel) {
            self.expect_word("traffic")?;
            self.expect_word("jobs")?;
            return Ok(Statement::Traffic(Box::new(Traffic::CancelJobs)));
        }
        self.expect_word("traffic")?;
        let capture = if self.eat_word("capture") {
            self.expect_keyword(Keyword::To)?;
            true
        } else {
            self.expect_word("replay")?;
            self.expect_keyword(Keyword::From)?;
            false
        };
        let dir = self.expect_string()?;
        let mut options: Vec<(String, Expr)> = Vec::new();
        while !matches!(self.current().kind, TokenKind::Eof | TokenKind::Semicolon) {
            let name = self.expect_option_name()?;
            self.expect(&TokenKind::Eq)?;
            options.push((name, self.parse_expression(NO_INFIX_BP)?));
            self.eat(&TokenKind::Comma);
        }
        let traffic = if capture {
            Traffic::Capture { dir, options }
        } else {
            Traffic::Replay { dir, options }
        };
        Ok(Statement::Traffic(Box::new(traffic)))
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::{
        Admin, AnalyzeOptionKind, AnalyzeTarget, BrieKind, BrieScope, BrieValue, ExplainTarget,
        FlushKind, PlanReplayer, QueryWatch, QueryWatchOption, ShowFilter, ShowKind,
        SlowQueryKind, Statement, TableName, TimeUnit, Traffic, VarScope, WatchKind,
    };
    use crate::Parser;

    fn parse(sql: &str) -> Statement {
        Parser::new().parse_one_stmt(sql, "", "").unwrap().stmt
    }

    fn show(sql: &str) -> (ShowKind, Option<ShowFilter>) {
        match parse(sql) {
            Statement::Show(show) => (show.kind, show.filter),
            other => panic!("expected SHOW, got {other:?}"),
        }
    }

    fn admin(sql: &str) -> Admin {
        match parse(sql) {
            Statement::Admin(admin) => *admin,
            other => panic!("expected ADMIN, got {other:?}"),
        }
    }

    #[test]
    fn test_show_tables_and_columns() {
        let (kind, filter) = show("SHOW FULL TABLES FROM db LIKE 't%'");
        assert_eq!(
            kind,
            ShowKind::Tables {
                full: true,
                db: Some("db".into())
            }
        );
        assert!(matches!(filter, Some(ShowFilter::Like(_))));
        let (kind, _) = show("SHOW EXTENDED FULL COLUMNS FROM t FROM db");
        assert_eq!(
            kind,
            ShowKind::Columns {
                extended: true,
                full: true,
                table: TableName::qualified("db", "t")
            }
        );
        let (kind, filter) = show("SHOW GLOBAL VARIABLES WHERE Variable_name = 'x'");
        assert_eq!(kind, ShowKind::Variables(VarScope::Global));
        assert!(matches!(filter, Some(ShowFilter::Where(_))));
    }

    #[test]
    fn test_show_misc_targets() {
        assert_eq!(show("SHOW COUNT(*) WARNINGS").0, ShowKind::CountWarnings);
        assert_eq!(show("SHOW STATS_META").0, ShowKind::StatsMeta);
        assert_eq!(show("SHOW GLOBAL BINDINGS").0, ShowKind::Bindings(true));
        assert_eq!(show("SHOW CREATE TABLE t").0, ShowKind::CreateTable(TableName::new("t")));
        assert_eq!(show("SHOW IMPORT JOB 7").0, ShowKind::ImportJob(7));
        assert!(matches!(
            show("SHOW TABLE t INDEX i REGIONS").0,
            ShowKind::Regions { index: Some(_), .. }
        ));
        assert!(matches!(
            show("SHOW PLACEMENT FOR TABLE t PARTITION p0").0,
            ShowKind::PlacementFor { partition: Some(_), .. }
        ));
        assert!(matches!(
            show("SHOW GRANTS FOR 'u'@'%' USING r1").0,
            ShowKind::Grants { user: Some(_), roles } if roles.len() == 1
        ));
    }

    #[test]
    fn test_admin_statements() {
        assert!(matches!(
            admin("ADMIN SHOW DDL JOBS 10 WHERE state != 'done'"),
            Admin::ShowDdlJobs { count: Some(10), filter: Some(_) }
        ));
        assert_eq!(
            admin("ADMIN SHOW DDL JOB QUERIES LIMIT 3, 10"),
            Admin::ShowDdlJobQueriesLimit {
                limit: 10,
                offset: Some(3)
            }
        );
        assert_eq!(admin("ADMIN CANCEL DDL JOBS 1, 2"), Admin::CancelDdlJobs(vec![1, 2]));
        assert!(matches!(
            admin("ADMIN CHECK INDEX t idx (1, 10), (20, 30)"),
            Admin::CheckIndex { ranges, .. } if ranges == vec![(1, 10), (20, 30)]
        ));
        assert_eq!(
            admin("ADMIN SHOW SLOW TOP INTERNAL 3"),
            Admin::ShowSlowTop {
                kind: SlowQueryKind::Internal,
                count: 3
            }
        );
        assert!(matches!(
            admin("ADMIN ALTER DDL JOBS 5 thread = 8, batch_size = 256"),
            Admin::AlterDdlJob { job_id: 5, options } if options[1].0 == "batch_size"
        ));
        assert!(matches!(admin("ADMIN FLUSH SESSION PLAN_CACHE"), Admin::FlushPlanCache(_)));
    }

    #[test]
    fn test_analyze() {
        let Statement::Analyze(analyze) =
            parse("ANALYZE TABLE t PARTITION p0 INDEX i1, i2 WITH 4 BUCKETS, 0.5 SAMPLERATE")
        else {
            panic!("expected ANALYZE");
        };
        assert_eq!(analyze.partitions, vec!["p0"]);
        assert_eq!(
            analyze.target,
            AnalyzeTarget::Indexes(vec!["i1".into(), "i2".into()])
        );
        assert_eq!(analyze.options[1].0, AnalyzeOptionKind::SampleRate);
        let Statement::Analyze(all) = parse("ANALYZE TABLE t ALL COLUMNS") else {
            panic!("expected ANALYZE");
        };
        assert_eq!(all.target, AnalyzeTarget::AllColumns);
    }

    #[test]
    fn test_flush_and_kill() {
        let Statement::Flush(flush) = parse("FLUSH NO_WRITE_TO_BINLOG TABLES t1, t2 WITH READ LOCK")
        else {
            panic!("expected FLUSH");
        };
        assert!(flush.no_write_to_binlog);
        assert!(matches!(flush.kind, FlushKind::Tables { ref tables, read_lock: true } if tables.len() == 2));
        let Statement::Kill(kill) = parse("KILL TIDB QUERY 12") else {
            panic!("expected KILL");
        };
        assert!(kill.tidb && kill.query);
        assert_eq!(kill.connection_id, 12);
    }

    #[test]
    fn test_explain_forms() {
        let Statement::Explain(explain) = parse("EXPLAIN ANALYZE FORMAT = 'Brief' SELECT 1")
        else {
            panic!("expected EXPLAIN");
        };
        assert!(explain.analyze);
        assert_eq!(explain.format.as_deref(), Some("brief"));
        assert!(matches!(explain.target, ExplainTarget::Statement(_)));
        let Statement::Explain(desc) = parse("DESC t c") else {
            panic!("expected DESC");
        };
        assert!(matches!(desc.target, ExplainTarget::Table { column: Some(_), .. }));
        let Statement::Explain(conn) = parse("EXPLAIN FOR CONNECTION 42") else {
            panic!("expected EXPLAIN");
        };
        assert_eq!(conn.target, ExplainTarget::Connection(42));
    }

    #[test]
    fn test_trace() {
        let Statement::Trace(trace) = parse("TRACE FORMAT = 'json' SELECT 1") else {
            panic!("expected TRACE");
        };
        assert_eq!(trace.format.as_deref(), Some("json"));
        let Statement::Trace(plan) = parse("TRACE PLAN TARGET = 'estimation' SELECT 1") else {
            panic!("expected TRACE");
        };
        assert_eq!(plan.plan_target, Some(Some("estimation".into())));
    }

    #[test]
    fn test_backup_and_restore() {
        let Statement::Brie(backup) = parse(
            "BACKUP DATABASE * TO 's3://bucket/path' RATE_LIMIT = 120 MB/SECOND SNAPSHOT = 5 MINUTE AGO CHECKSUM = FALSE",
        ) else {
            panic!("expected BACKUP");
        };
        assert_eq!(backup.kind, BrieKind::Backup);
        assert_eq!(backup.scope, BrieScope::Databases(Vec::new()));
        assert_eq!(backup.options[0], ("RATE_LIMIT".into(), BrieValue::RateLimit(120)));
        assert_eq!(
            backup.options[1],
            ("SNAPSHOT".into(), BrieValue::Ago(5, TimeUnit::Minute))
        );
        assert_eq!(backup.options[2], ("CHECKSUM".into(), BrieValue::Bool(false)));

        let Statement::Brie(stop) = parse("STOP BACKUP LOGS") else {
            panic!("expected STOP BACKUP LOGS");
        };
        assert_eq!(stop.kind, BrieKind::StreamStop);
        let Statement::Brie(restore) = parse("RESTORE TABLE db.t FROM 'local:///tmp'") else {
            panic!("expected RESTORE");
        };
        assert!(matches!(restore.scope, BrieScope::Tables(ref t) if t.len() == 1));
    }

    #[test]
    fn test_query_watch_and_calibrate() {
        let Statement::QueryWatch(watch) = parse(
            "QUERY WATCH ADD RESOURCE GROUP rg ACTION KILL SQL TEXT EXACT TO 'select 1'",
        ) else {
            panic!("expected QUERY WATCH");
        };
        let QueryWatch::Add(options) = *watch else {
            panic!("expected ADD");
        };
        assert_eq!(options.len(), 3);
        assert_eq!(
            options[2],
            QueryWatchOption::SqlText {
                kind: WatchKind::Exact,
                text: "select 1".into()
            }
        );
        assert!(matches!(
            parse("QUERY WATCH REMOVE 3"),
            Statement::QueryWatch(w) if *w == QueryWatch::Remove(3)
        ));
        assert!(matches!(
            parse("CALIBRATE RESOURCE START_TIME '2023-04-18 08:00:00' DURATION '10m'"),
            Statement::CalibrateResource(c) if c.options.len() == 2
        ));
        assert!(matches!(
            parse("CALIBRATE RESOURCE WORKLOAD oltp_read_write"),
            Statement::CalibrateResource(c) if c.workload.as_deref() == Some("OLTP_READ_WRITE")
        ));
    }

    #[test]
    fn test_plan_replayer_and_traffic() {
        assert!(matches!(
            parse("PLAN REPLAYER DUMP EXPLAIN ANALYZE SELECT * FROM t"),
            Statement::PlanReplayer(p) if matches!(*p, PlanReplayer::Dump { analyze: true, stmt: Some(_), .. })
        ));
        assert!(matches!(
            parse("PLAN REPLAYER CAPTURE REMOVE 'a' 'b'"),
            Statement::PlanReplayer(p) if matches!(*p, PlanReplayer::CaptureRemove { .. })
        ));
        let Statement::PlanReplayer(capture) =
            parse("PLAN REPLAYER CAPTURE 'sql_digest' 'plan_digest'")
        else {
            panic!("expected PLAN REPLAYER");
        };
        assert_eq!(
            *capture,
            PlanReplayer::Capture {
                sql_digest: "sql_digest".to_string(),
                plan_digest: "plan_digest".to_string(),
            }
        );
        let Statement::Traffic(capture) = parse("TRAFFIC CAPTURE TO '/tmp' DURATION = '1m'") else {
            panic!("expected TRAFFIC");
        };
        assert!(matches!(*capture, Traffic::Capture { ref options, .. } if options[0].0 == "DURATION"));
        assert!(matches!(
            parse("CANCEL TRAFFIC JOBS"),
            Statement::Traffic(t) if *t == Traffic::CancelJobs
        ));
    }
}
