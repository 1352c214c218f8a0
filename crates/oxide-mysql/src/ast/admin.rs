//! Administrative, transactional and session statements.

use super::ddl::{RunawayAction, UserIdentity, WatchKind};
use super::expression::{ColumnName, Expr, TimeUnit, VarScope};
use super::query::TableName;
use super::statement::Statement;

/// The left-hand side of a SET assignment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SetTarget {
    /// `@name`
    User(String),
    /// `@@[scope.]name`, `GLOBAL name`, `SESSION name` or a bare `name`.
    System {
        /// Lower-case name.
        name: String,
        /// Scope.
        scope: VarScope,
    },
}

/// One element of a `SET` list.
#[derive(Debug, Clone, PartialEq)]
pub enum SetAssignment {
    /// `target = value`; `value` is `None` for `DEFAULT`.
    Variable {
        /// Assigned variable.
        target: SetTarget,
        /// New value.
        value: Option<Expr>,
    },
    /// `NAMES cs [COLLATE c]`; `None` for `DEFAULT`.
    Names {
        /// Charset.
        charset: Option<String>,
        /// Collation.
        collate: Option<String>,
    },
    /// `CHARACTER SET cs`; `None` for `DEFAULT`.
    Charset(Option<String>),
}

/// `SET ROLE ...`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SetRole {
    Default,
    None,
    /// `ALL [EXCEPT roles]`
    All(Vec<UserIdentity>),
    /// Explicit roles.
    Roles(Vec<UserIdentity>),
}

/// Target of `SET BINDING` and `DROP BINDING`.
#[derive(Debug, Clone, PartialEq)]
pub enum BindingTarget {
    /// `FOR stmt [USING stmt]`
    Statement {
        /// Original statement.
        origin: Box<Statement>,
        /// Hinted statement.
        hinted: Option<Box<Statement>>,
    },
    /// `FOR SQL DIGEST 'd1', 'd2'`
    SqlDigests(Vec<String>),
}

/// CREATE BINDING.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateBinding {
    /// `GLOBAL` (true) or `SESSION` (false).
    pub global: bool,
    /// Binding source.
    pub source: BindingSource,
}

/// What a binding is created from.
#[derive(Debug, Clone, PartialEq)]
pub enum BindingSource {
    /// `[FOR stmt] USING stmt`
    Statement {
        /// Original statement; omitted when the hinted statement is matched.
        origin: Option<Box<Statement>>,
        /// Hinted statement.
        hinted: Box<Statement>,
    },
    /// `FROM HISTORY USING PLAN DIGEST 'a', 'b'`
    PlanDigests(Vec<String>),
}

/// Variants of SHOW.
#[derive(Debug, Clone, PartialEq)]
pub enum ShowKind {
    Databases,
    /// `SHOW [FULL] TABLES [FROM db]`
    Tables {
        /// `FULL`
        full: bool,
        /// Database.
        db: Option<String>,
    },
    /// `SHOW TABLE STATUS [FROM db]`
    TableStatus(Option<String>),
    /// `SHOW [EXTENDED] [FULL] COLUMNS FROM t [FROM db]`
    Columns {
        /// `EXTENDED`
        extended: bool,
        /// `FULL`
        full: bool,
        /// Table.
        table: TableName,
    },
    /// `SHOW INDEX FROM t`
    Index(TableName),
    /// `SHOW [GLOBAL | SESSION] VARIABLES`
    Variables(VarScope),
    /// `SHOW [GLOBAL | SESSION] STATUS`
    Status(VarScope),
    Warnings,
    Errors,
    /// `SHOW COUNT(*) WARNINGS`
    CountWarnings,
    /// `SHOW COUNT(*) ERRORS`
    CountErrors,
    /// `SHOW [FULL] PROCESSLIST`
    Processlist(bool),
    Engines,
    Charset,
    Collation,
    CreateTable(TableName),
    CreateView(TableName),
    CreateSequence(TableName),
    /// `SHOW CREATE DATABASE [IF NOT EXISTS] db`
    CreateDatabase {
        /// `IF NOT EXISTS`
        if_not_exists: bool,
        /// Database.
        name: String,
    },
    CreateUser(UserIdentity),
    CreatePlacementPolicy(String),
    CreateResourceGroup(String),
    /// `SHOW GRANTS [FOR user [USING roles]]`
    Grants {
        /// Account.
        user: Option<UserIdentity>,
        /// Active roles.
        roles: Vec<UserIdentity>,
    },
    Privileges,
    Plugins,
    /// `SHOW TRIGGERS [FROM db]`
    Triggers(Option<String>),
    /// `SHOW EVENTS [FROM db]`
    Events(Option<String>),
    /// `SHOW OPEN TABLES [FROM db]`
    OpenTables(Option<String>),
    Profiles,
    MasterStatus,
    /// `SHOW [GLOBAL | SESSION] BINDINGS`
    Bindings(bool),
    BindingCacheStatus,
    StatsMeta,
    StatsHistograms,
    StatsBuckets,
    StatsHealthy,
    StatsTopn,
    StatsLocked,
    StatsExtended,
    AnalyzeStatus,
    ColumnStatsUsage,
    Backups,
    Restores,
    PlacementLabels,
    Placement,
    /// `SHOW PLACEMENT FOR DATABASE db | TABLE t [PARTITION p]`
    PlacementFor {
        /// Database target.
        db: Option<String>,
        /// Table target.
        table: Option<TableName>,
        /// Partition.
        partition: Option<String>,
    },
    /// `SHOW TABLE t [PARTITION (p)] [INDEX idx] REGIONS`
    Regions {
        /// Table.
        table: TableName,
        /// Partitions.
        partitions: Vec<String>,
        /// Index.
        index: Option<String>,
    },
    /// `SHOW TABLE t NEXT_ROW_ID`
    TableNextRowId(TableName),
    Builtins,
    ImportJobs,
    /// `SHOW IMPORT JOB n`
    ImportJob(u64),
    DistributionJobs,
    SessionStates,
    Config,
    /// `SHOW PROCEDURE STATUS`
    ProcedureStatus,
    /// `SHOW FUNCTION STATUS`
    FunctionStatus,
    /// `SHOW TRAFFIC JOBS`
    TrafficJobs,
    /// `SHOW BACKUP LOGS STATUS`
    BackupLogsStatus,
    /// `SHOW BACKUP LOGS METADATA FROM 'url'`
    BackupLogsMetadata(String),
}

/// `LIKE pattern` or `WHERE expr` after SHOW.
#[derive(Debug, Clone, PartialEq)]
pub enum ShowFilter {
    Like(Expr),
    Where(Expr),
}

/// SHOW.
#[derive(Debug, Clone, PartialEq)]
pub struct Show {
    /// Variant.
    pub kind: ShowKind,
    /// Filter.
    pub filter: Option<ShowFilter>,
}

/// `ADMIN SHOW SLOW` selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlowQueryKind {
    Default,
    Internal,
    All,
}

/// `ADMIN FLUSH ... PLAN_CACHE` scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlanCacheScope {
    Instance,
    Session,
    Global,
}

/// BDR role of a cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BdrRole {
    Primary,
    Secondary,
    LocalOnly,
}

/// ADMIN statements.
#[derive(Debug, Clone, PartialEq)]
pub enum Admin {
    ShowDdl,
    /// `ADMIN SHOW DDL JOBS [n] [WHERE expr]`
    ShowDdlJobs {
        /// Job count.
        count: Option<u64>,
        /// Filter.
        filter: Option<Expr>,
    },
    /// `ADMIN SHOW DDL JOB QUERIES 1, 2`
    ShowDdlJobQueries(Vec<u64>),
    /// `ADMIN SHOW DDL JOB QUERIES LIMIT n [OFFSET m]`
    ShowDdlJobQueriesLimit {
        /// Row count.
        limit: u64,
        /// Offset.
        offset: Option<u64>,
    },
    /// `ADMIN SHOW t NEXT_ROW_ID`
    ShowNextRowId(TableName),
    /// `ADMIN CHECK TABLE t1, t2`
    CheckTable(Vec<TableName>),
    /// `ADMIN CHECK INDEX t idx [(a, b), ...]`
    CheckIndex {
        /// Table.
        table: TableName,
        /// Index.
        index: String,
        /// Handle ranges.
        ranges: Vec<(i64, i64)>,
    },
    /// `ADMIN RECOVER INDEX t idx`
    RecoverIndex {
        /// Table.
        table: TableName,
        /// Index.
        index: String,
    },
    /// `ADMIN CLEANUP INDEX t idx`
    CleanupIndex {
        /// Table.
        table: TableName,
        /// Index.
        index: String,
    },
    /// `ADMIN CLEANUP TABLE LOCK t1, t2`
    CleanupTableLock(Vec<TableName>),
    /// `ADMIN CHECKSUM TABLE t1, t2`
    ChecksumTable(Vec<TableName>),
    /// `ADMIN CANCEL DDL JOBS 1, 2`
    CancelDdlJobs(Vec<u64>),
    /// `ADMIN PAUSE DDL JOBS 1, 2`
    PauseDdlJobs(Vec<u64>),
    /// `ADMIN RESUME DDL JOBS 1, 2`
    ResumeDdlJobs(Vec<u64>),
    /// `ADMIN ALTER DDL JOBS n key = value, ...`
    AlterDdlJob {
        /// Job id.
        job_id: u64,
        /// Lower-case option names and values.
        options: Vec<(String, Expr)>,
    },
    /// `ADMIN PLUGINS ENABLE a, b`
    PluginsEnable(Vec<String>),
    /// `ADMIN PLUGINS DISABLE a, b`
    PluginsDisable(Vec<String>),
    /// `ADMIN SHOW SLOW RECENT n`
    ShowSlowRecent(u64),
    /// `ADMIN SHOW SLOW TOP [INTERNAL | ALL] n`
    ShowSlowTop {
        /// Selector.
        kind: SlowQueryKind,
        /// Row count.
        count: u64,
    },
    ReloadExprPushdownBlacklist,
    ReloadOptRuleBlacklist,
    ReloadBindings,
    ReloadStatsExtended,
    FlushBindings,
    CaptureBindings,
    EvolveBindings,
    /// `ADMIN FLUSH INSTANCE | SESSION | GLOBAL PLAN_CACHE`
    FlushPlanCache(PlanCacheScope),
    /// `ADMIN SET BDR ROLE role`
    SetBdrRole(BdrRole),
    UnsetBdrRole,
    ShowBdrRole,
    ShowTelemetry,
    ResetTelemetryId,
}

/// An option of ANALYZE ... WITH.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnalyzeOptionKind {
    Buckets,
    TopN,
    CmSketchDepth,
    CmSketchWidth,
    Samples,
    SampleRate,
}

impl AnalyzeOptionKind {
    /// Returns the SQL keyword.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Buckets => "BUCKETS",
            Self::TopN => "TOPN",
            Self::CmSketchDepth => "CMSKETCH DEPTH",
            Self::CmSketchWidth => "CMSKETCH WIDTH",
            Self::Samples => "SAMPLES",
            Self::SampleRate => "SAMPLERATE",
        }
    }
}

/// What ANALYZE collects.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AnalyzeTarget {
    /// The whole table.
    Table,
    /// `INDEX [a, b]`; empty for all indexes.
    Indexes(Vec<String>),
    /// `COLUMNS a, b`
    Columns(Vec<ColumnName>),
    PredicateColumns,
    AllColumns,
    /// `UPDATE HISTOGRAM ON a, b`
    UpdateHistogram(Vec<ColumnName>),
    /// `DROP HISTOGRAM ON a, b`
    DropHistogram(Vec<ColumnName>),
}

/// ANALYZE TABLE.
#[derive(Debug, Clone, PartialEq)]
pub struct Analyze {
    /// `NO_WRITE_TO_BINLOG` / `LOCAL`
    pub no_write_to_binlog: bool,
    /// Tables.
    pub tables: Vec<TableName>,
    /// `PARTITION p0, p1`
    pub partitions: Vec<String>,
    /// Target.
    pub target: AnalyzeTarget,
    /// `WITH n BUCKETS, ...`
    pub options: Vec<(AnalyzeOptionKind, Expr)>,
}

/// Source of PREPARE.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PrepareSource {
    /// `FROM 'sql'`
    Text(String),
    /// `FROM @var`
    Variable(String),
}

/// `BEGIN` / `START TRANSACTION` options.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Begin {
    /// `START TRANSACTION` instead of `BEGIN`.
    pub start_transaction: bool,
    /// `BEGIN PESSIMISTIC` (true) or `BEGIN OPTIMISTIC` (false).
    pub pessimistic: Option<bool>,
    /// `READ ONLY` (true) or `READ WRITE` (false).
    pub read_only: Option<bool>,
    /// `READ ONLY AS OF TIMESTAMP expr`
    pub as_of: Option<Expr>,
    /// `WITH CONSISTENT SNAPSHOT`
    pub consistent_snapshot: bool,
    /// `WITH CAUSAL CONSISTENCY ONLY`
    pub causal_consistency_only: bool,
}

/// `AND [NO] CHAIN` / `[NO] RELEASE` of COMMIT and ROLLBACK.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Completion {
    #[default]
    Default,
    Chain,
    NoChain,
    Release,
    NoRelease,
}

/// A table lock type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableLockType {
    Read,
    ReadLocal,
    Write,
    WriteLocal,
}

impl TableLockType {
    /// Returns the SQL keywords.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Read => "READ",
            Self::ReadLocal => "READ LOCAL",
            Self::Write => "WRITE",
            Self::WriteLocal => "WRITE LOCAL",
        }
    }
}

/// What FLUSH flushes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FlushKind {
    /// `TABLES [t1, t2] [WITH READ LOCK]`
    Tables {
        /// Tables.
        tables: Vec<TableName>,
        /// `WITH READ LOCK`
        read_lock: bool,
    },
    Privileges,
    Status,
    Hosts,
    Logs,
    ClientErrorsSummary,
    /// `TIDB PLUGINS a, b`
    TidbPlugins(Vec<String>),
    /// `STATS_DELTA [CLUSTER]`
    StatsDelta(bool),
}

/// FLUSH.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Flush {
    /// `NO_WRITE_TO_BINLOG` / `LOCAL`
    pub no_write_to_binlog: bool,
    /// Target.
    pub kind: FlushKind,
}

/// KILL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Kill {
    /// `KILL TIDB`
    pub tidb: bool,
    /// `QUERY` (true) or `CONNECTION`/implicit (false).
    pub query: bool,
    /// Connection id.
    pub connection_id: u64,
}

/// What EXPLAIN explains.
#[derive(Debug, Clone, PartialEq)]
pub enum ExplainTarget {
    /// A statement.
    Statement(Box<Statement>),
    /// `FOR CONNECTION n`
    Connection(u64),
    /// `DESC t [col]`
    Table {
        /// Table.
        table: TableName,
        /// Column.
        column: Option<String>,
    },
}

/// EXPLAIN / DESCRIBE.
#[derive(Debug, Clone, PartialEq)]
pub struct Explain {
    /// `ANALYZE`
    pub analyze: bool,
    /// `FORMAT = 'name'`, lower-case.
    pub format: Option<String>,
    /// Target.
    pub target: ExplainTarget,
}

/// TRACE.
#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    /// `FORMAT = 'name'`
    pub format: Option<String>,
    /// `PLAN [TARGET = 'name']`
    pub plan_target: Option<Option<String>>,
    /// Traced statement.
    pub stmt: Box<Statement>,
}

/// PLAN REPLAYER.
#[derive(Debug, Clone, PartialEq)]
pub enum PlanReplayer {
    /// `PLAN REPLAYER DUMP [EXPLAIN [ANALYZE]] stmt | 'file'`
    Dump {
        /// `EXPLAIN`
        explain: bool,
        /// `ANALYZE`
        analyze: bool,
        /// Statement.
        stmt: Option<Box<Statement>>,
        /// File with statements.
        file: Option<String>,
    },
    /// `PLAN REPLAYER LOAD 'file'`
    Load(String),
    /// `PLAN REPLAYER CAPTURE 'sql' 'plan'`
    Capture {
        /// SQL digest.
        sql_digest: String,
        /// Plan digest.
        plan_digest: String,
    },
    /// `PLAN REPLAYER CAPTURE REMOVE 'sql' 'plan'`
    CaptureRemove {
        /// SQL digest.
        sql_digest: String,
        /// Plan digest.
        plan_digest: String,
    },
}

/// TRAFFIC.
#[derive(Debug, Clone, PartialEq)]
pub enum Traffic {
    /// `TRAFFIC CAPTURE TO 'dir' options`
    Capture {
        /// Output directory.
        dir: String,
        /// Upper-case option names and values.
        options: Vec<(String, Expr)>,
    },
    /// `TRAFFIC REPLAY FROM 'dir' options`
    Replay {
        /// Input directory.
        dir: String,
        /// Upper-case option names and values.
        options: Vec<(String, Expr)>,
    },
    /// `CANCEL TRAFFIC JOBS`
    CancelJobs,
}

/// BACKUP / RESTORE family verbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BrieKind {
    Backup,
    Restore,
    /// `BACKUP LOGS TO`
    StreamStart,
    /// `STOP BACKUP LOGS`
    StreamStop,
    /// `PAUSE BACKUP LOGS`
    StreamPause,
    /// `RESUME BACKUP LOGS`
    StreamResume,
    /// `PURGE BACKUP LOGS FROM`
    StreamPurge,
    /// `RESTORE POINT FROM`
    RestorePoint,
}

/// Objects a BRIE statement covers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BrieScope {
    /// Log streams and point restores.
    None,
    /// `DATABASE *` (empty) or `DATABASE a, b`.
    Databases(Vec<String>),
    /// `TABLE t1, t2`
    Tables(Vec<TableName>),
}

/// A typed BRIE option value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BrieValue {
    Int(u64),
    String(String),
    Bool(bool),
    /// `n MB/SECOND`
    RateLimit(u64),
    /// `n unit AGO`
    Ago(u64, TimeUnit),
}

/// BACKUP, RESTORE and the log-stream statements.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Brie {
    /// Verb.
    pub kind: BrieKind,
    /// Covered objects.
    pub scope: BrieScope,
    /// Storage URL.
    pub storage: Option<String>,
    /// Upper-case option names and values.
    pub options: Vec<(String, BrieValue)>,
}

/// A privilege with an optional column list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Privilege {
    /// Upper-case privilege words, e.g. `CREATE TEMPORARY TABLES`.
    pub name: String,
    /// Column list.
    pub columns: Vec<String>,
}

/// Object type of GRANT / REVOKE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ObjectType {
    #[default]
    Unspecified,
    Table,
    Function,
    Procedure,
}

/// Privilege level of GRANT / REVOKE.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GrantLevel {
    /// `*`
    Current,
    /// `*.*`
    Global,
    /// `db.*`
    Database(String),
    /// `[db.]t`
    Table(TableName),
}

/// Authentication of an account.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AuthOption {
    /// `IDENTIFIED BY 'secret'`
    Password(String),
    /// `IDENTIFIED BY PASSWORD 'hash'`
    Hash(String),
    /// `IDENTIFIED WITH plugin [BY 'secret' | AS 'hash']`
    Plugin {
        /// Plugin name.
        plugin: String,
        /// `BY 'secret'`
        password: Option<String>,
        /// `AS 'hash'`
        hash: Option<String>,
    },
}

/// An account with optional authentication.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserSpec {
    /// Account name.
    pub user: UserIdentity,
    /// Authentication.
    pub auth: Option<AuthOption>,
}

/// A TLS requirement.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TlsOption {
    None,
    Ssl,
    X509,
    Cipher(String),
    Issuer(String),
    Subject(String),
    San(String),
}

/// `WITH` resource limit names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceLimit {
    MaxQueriesPerHour,
    MaxUpdatesPerHour,
    MaxConnectionsPerHour,
    MaxUserConnections,
}

impl ResourceLimit {
    /// Returns the SQL keyword.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MaxQueriesPerHour => "MAX_QUERIES_PER_HOUR",
            Self::MaxUpdatesPerHour => "MAX_UPDATES_PER_HOUR",
            Self::MaxConnectionsPerHour => "MAX_CONNECTIONS_PER_HOUR",
            Self::MaxUserConnections => "MAX_USER_CONNECTIONS",
        }
    }
}

/// Account options of CREATE / ALTER USER.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum UserOption {
    /// `REQUIRE a AND b`
    Require(Vec<TlsOption>),
    /// `WITH MAX_QUERIES_PER_HOUR n ...`
    Limits(Vec<(ResourceLimit, u64)>),
    /// `PASSWORD EXPIRE [DEFAULT | NEVER | INTERVAL n DAY]`; the payload is
    /// `None` for a bare `PASSWORD EXPIRE`, `Some(None)` for DEFAULT and
    /// `Some(Some(0))` for NEVER.
    PasswordExpire(Option<Option<u64>>),
    /// `PASSWORD HISTORY n | DEFAULT`
    PasswordHistory(Option<u64>),
    /// `PASSWORD REUSE INTERVAL n DAY | DEFAULT`
    PasswordReuseInterval(Option<u64>),
    /// `FAILED_LOGIN_ATTEMPTS n`
    FailedLoginAttempts(u64),
    /// `PASSWORD_LOCK_TIME n | UNBOUNDED`
    PasswordLockTime(Option<u64>),
    /// `ACCOUNT LOCK` (true) or `ACCOUNT UNLOCK` (false).
    AccountLock(bool),
    /// `COMMENT 'text'`
    Comment(String),
    /// `ATTRIBUTE 'json'`
    Attribute(String),
    /// `RESOURCE GROUP rg`
    ResourceGroup(String),
}

/// CREATE USER / CREATE ROLE.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CreateUser {
    /// CREATE ROLE.
    pub role: bool,
    /// `IF NOT EXISTS`
    pub if_not_exists: bool,
    /// Accounts.
    pub users: Vec<UserSpec>,
    /// Account options.
    pub options: Vec<UserOption>,
}

/// ALTER USER.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AlterUser {
    /// `IF EXISTS`
    pub if_exists: bool,
    /// Accounts; a `USER()` target is an identity with `current_user` set.
    pub users: Vec<UserSpec>,
    /// Account options.
    pub options: Vec<UserOption>,
}

/// DROP USER / DROP ROLE.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DropUser {
    /// DROP ROLE.
    pub role: bool,
    /// `IF EXISTS`
    pub if_exists: bool,
    /// Accounts.
    pub users: Vec<UserIdentity>,
}

/// GRANT privileges.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grant {
    /// Privileges.
    pub privileges: Vec<Privilege>,
    /// Object type.
    pub object_type: ObjectType,
    /// Privilege level.
    pub level: GrantLevel,
    /// Grantees.
    pub users: Vec<UserSpec>,
    /// `REQUIRE ...`
    pub require: Vec<TlsOption>,
    /// `WITH GRANT OPTION`
    pub with_grant_option: bool,
}

/// REVOKE privileges.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Revoke {
    /// Privileges.
    pub privileges: Vec<Privilege>,
    /// Object type.
    pub object_type: ObjectType,
    /// Privilege level.
    pub level: GrantLevel,
    /// Accounts.
    pub users: Vec<UserIdentity>,
}

/// `CALIBRATE RESOURCE` time options.
#[derive(Debug, Clone, PartialEq)]
pub enum CalibrateOption {
    StartTime(Expr),
    EndTime(Expr),
    Duration(Expr),
}

/// CALIBRATE RESOURCE.
#[derive(Debug, Clone, PartialEq)]
pub struct CalibrateResource {
    /// `WORKLOAD name`, upper-case.
    pub workload: Option<String>,
    /// Time window options.
    pub options: Vec<CalibrateOption>,
}

/// Options of QUERY WATCH ADD.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QueryWatchOption {
    /// `RESOURCE GROUP rg`
    ResourceGroup(String),
    /// `ACTION = action`
    Action(RunawayAction),
    /// `SQL DIGEST 'd'`
    SqlDigest(String),
    /// `PLAN DIGEST 'd'`
    PlanDigest(String),
    /// `SQL TEXT EXACT | SIMILAR | PLAN TO 'sql'`
    SqlText {
        /// Match kind.
        kind: WatchKind,
        /// SQL text.
        text: String,
    },
}

/// QUERY WATCH.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QueryWatch {
    /// `QUERY WATCH ADD options`
    Add(Vec<QueryWatchOption>),
    /// `QUERY WATCH REMOVE n`
    Remove(u64),
    /// `QUERY WATCH REMOVE RESOURCE GROUP rg`
    RemoveGroup(String),
}

/// `DROP STATS t [PARTITION p | GLOBAL]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DropStats {
    /// Tables.
    pub tables: Vec<TableName>,
    /// `PARTITION p0, p1`
    pub partitions: Vec<String>,
    /// `GLOBAL`
    pub global: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_spellings() {
        assert_eq!(TableLockType::WriteLocal.as_str(), "WRITE LOCAL");
        assert_eq!(AnalyzeOptionKind::CmSketchDepth.as_str(), "CMSKETCH DEPTH");
        assert_eq!(ResourceLimit::MaxUserConnections.as_str(), "MAX_USER_CONNECTIONS");
    }

    #[test]
    fn test_begin_defaults() {
        let begin = Begin::default();
        assert!(!begin.start_transaction);
        assert!(begin.read_only.is_none());
        assert_eq!(Completion::default(), Completion::Default);
    }
}
