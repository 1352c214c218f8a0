//! Data definition statements.

use super::expression::{ColumnName, Expr, OrderItem, TimeUnit};
use super::partition::{PartitionDef, PartitionOptions};
use super::query::{Query, TableName};
use super::types::DataType;

/// `ON DELETE` / `ON UPDATE` action of a foreign key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceAction {
    Restrict,
    Cascade,
    SetNull,
    NoAction,
    SetDefault,
}

impl ReferenceAction {
    /// Returns the SQL keywords.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Restrict => "RESTRICT",
            Self::Cascade => "CASCADE",
            Self::SetNull => "SET NULL",
            Self::NoAction => "NO ACTION",
            Self::SetDefault => "SET DEFAULT",
        }
    }
}

/// `MATCH FULL | PARTIAL | SIMPLE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceMatch {
    Full,
    Partial,
    Simple,
}

impl ReferenceMatch {
    /// Returns the SQL keyword.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Full => "FULL",
            Self::Partial => "PARTIAL",
            Self::Simple => "SIMPLE",
        }
    }
}

/// `REFERENCES t (cols) [MATCH ..] [ON DELETE ..] [ON UPDATE ..]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceDef {
    /// Referenced table.
    pub table: TableName,
    /// Referenced columns.
    pub parts: Vec<IndexPart>,
    /// Match type.
    pub match_type: Option<ReferenceMatch>,
    /// `ON DELETE` action.
    pub on_delete: Option<ReferenceAction>,
    /// `ON UPDATE` action.
    pub on_update: Option<ReferenceAction>,
}

/// `COLUMN_FORMAT` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnFormat {
    Default,
    Fixed,
    Dynamic,
}

/// `STORAGE` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnStorage {
    Default,
    Disk,
    Memory,
}

/// An option attached to a column definition.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnOption {
    NotNull,
    Null,
    /// `PRIMARY KEY [CLUSTERED | NONCLUSTERED]`
    PrimaryKey(Option<bool>),
    UniqueKey,
    AutoIncrement,
    /// `DEFAULT expr`
    Default(Expr),
    /// `ON UPDATE CURRENT_TIMESTAMP`
    OnUpdate(Expr),
    /// `COMMENT 'text'`
    Comment(String),
    /// `COLLATE name`
    Collate(String),
    /// `[GENERATED ALWAYS] AS (expr) [VIRTUAL | STORED]`
    Generated {
        /// Generation expression.
        expr: Expr,
        /// `STORED`
        stored: bool,
    },
    /// `CHECK (expr) [[NOT] ENFORCED]`
    Check {
        /// Condition.
        expr: Expr,
        /// Enforcement.
        enforced: bool,
    },
    /// Inline foreign key.
    References(ReferenceDef),
    /// `COLUMN_FORMAT ...`
    ColumnFormat(ColumnFormat),
    /// `STORAGE ...`
    Storage(ColumnStorage),
    /// `AUTO_RANDOM[(shard_bits[, range_bits])]`
    AutoRandom {
        /// Shard bits.
        shard_bits: Option<u64>,
        /// Range bits.
        range_bits: Option<u64>,
    },
    /// `SECONDARY_ENGINE_ATTRIBUTE = 'json'`
    SecondaryEngineAttribute(String),
}

/// A column definition.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDef {
    /// Column name.
    pub name: String,
    /// Column type.
    pub data_type: DataType,
    /// Options in source order.
    pub options: Vec<ColumnOption>,
}

/// Key of an index part.
#[derive(Debug, Clone, PartialEq)]
pub enum IndexKey {
    /// `col[(len)]`
    Column {
        /// Column name.
        name: ColumnName,
        /// Prefix length.
        length: Option<u64>,
    },
    /// `(expr)`
    Expr(Expr),
}

/// One part of an index key list.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexPart {
    /// Indexed column or expression.
    pub key: IndexKey,
    /// `DESC`
    pub desc: bool,
}

impl IndexPart {
    /// Creates an ascending column part.
    #[must_use]
    pub fn column(name: impl Into<String>) -> Self {
        Self {
            key: IndexKey::Column {
                name: ColumnName::new(name),
                length: None,
            },
            desc: false,
        }
    }
}

/// `USING ...` index algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndexType {
    Btree,
    Hash,
    Rtree,
    Hypo,
    Hnsw,
    Inverted,
}

impl IndexType {
    /// Returns the SQL keyword.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Btree => "BTREE",
            Self::Hash => "HASH",
            Self::Rtree => "RTREE",
            Self::Hypo => "HYPO",
            Self::Hnsw => "HNSW",
            Self::Inverted => "INVERTED",
        }
    }

    /// Parses an index type name (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_uppercase().as_str() {
            "BTREE" => Some(Self::Btree),
            "HASH" => Some(Self::Hash),
            "RTREE" => Some(Self::Rtree),
            "HYPO" => Some(Self::Hypo),
            "HNSW" => Some(Self::Hnsw),
            "INVERTED" => Some(Self::Inverted),
            _ => None,
        }
    }
}

/// Options following an index key list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct IndexOptions {
    /// `KEY_BLOCK_SIZE = n`
    pub key_block_size: Option<u64>,
    /// `USING type`
    pub using: Option<IndexType>,
    /// `WITH PARSER name`
    pub parser: Option<String>,
    /// `COMMENT 'text'`
    pub comment: Option<String>,
    /// `VISIBLE` (true) or `INVISIBLE` (false).
    pub visible: Option<bool>,
    /// `CLUSTERED` (true) or `NONCLUSTERED` (false).
    pub clustered: Option<bool>,
    /// `GLOBAL` (true) or `LOCAL` (false).
    pub global: Option<bool>,
    /// `ADD_COLUMNAR_REPLICA_ON_DEMAND`
    pub add_columnar_replica_on_demand: bool,
    /// `SECONDARY_ENGINE_ATTRIBUTE = 'json'`
    pub secondary_engine_attribute: Option<String>,
}

impl IndexOptions {
    /// Returns true if no option is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// The kind of a table constraint or index.
#[derive(Debug, Clone, PartialEq)]
pub enum ConstraintKind {
    PrimaryKey,
    Unique,
    /// `KEY` or `INDEX`.
    Index,
    Fulltext,
    Spatial,
    /// `VECTOR INDEX`
    Vector,
    /// `COLUMNAR INDEX`
    Columnar,
    /// `FOREIGN KEY (cols) REFERENCES ...`
    ForeignKey(ReferenceDef),
    /// `CHECK (expr) [[NOT] ENFORCED]`
    Check {
        /// Condition.
        expr: Expr,
        /// Enforcement.
        enforced: bool,
    },
}

/// A table-level constraint or index definition.
#[derive(Debug, Clone, PartialEq)]
pub struct Constraint {
    /// Kind.
    pub kind: ConstraintKind,
    /// Index name, or the `CONSTRAINT` symbol when no index name is given.
    pub name: Option<String>,
    /// `IF NOT EXISTS` (in ALTER TABLE ADD INDEX).
    pub if_not_exists: bool,
    /// Key parts.
    pub parts: Vec<IndexPart>,
    /// Index options.
    pub options: IndexOptions,
}

/// `ROW_FORMAT` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowFormat {
    Default,
    Dynamic,
    Fixed,
    Compressed,
    Redundant,
    Compact,
    TokudbDefault,
    TokudbFast,
    TokudbSmall,
    TokudbZlib,
    TokudbQuicklz,
    TokudbLzma,
    TokudbSnappy,
    TokudbUncompressed,
}

impl RowFormat {
    const ALL: [Self; 14] = [
        Self::Default,
        Self::Dynamic,
        Self::Fixed,
        Self::Compressed,
        Self::Redundant,
        Self::Compact,
        Self::TokudbDefault,
        Self::TokudbFast,
        Self::TokudbSmall,
        Self::TokudbZlib,
        Self::TokudbQuicklz,
        Self::TokudbLzma,
        Self::TokudbSnappy,
        Self::TokudbUncompressed,
    ];

    /// Returns the SQL keyword.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "DEFAULT",
            Self::Dynamic => "DYNAMIC",
            Self::Fixed => "FIXED",
            Self::Compressed => "COMPRESSED",
            Self::Redundant => "REDUNDANT",
            Self::Compact => "COMPACT",
            Self::TokudbDefault => "TOKUDB_DEFAULT",
            Self::TokudbFast => "TOKUDB_FAST",
            Self::TokudbSmall => "TOKUDB_SMALL",
            Self::TokudbZlib => "TOKUDB_ZLIB",
            Self::TokudbQuicklz => "TOKUDB_QUICKLZ",
            Self::TokudbLzma => "TOKUDB_LZMA",
            Self::TokudbSnappy => "TOKUDB_SNAPPY",
            Self::TokudbUncompressed => "TOKUDB_UNCOMPRESSED",
        }
    }

    /// Parses a row format name (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|format| format.as_str().eq_ignore_ascii_case(name))
    }
}

/// A table option. Options taking `DEFAULT` use `None` for it.
#[derive(Debug, Clone, PartialEq)]
pub enum TableOption {
    Engine(String),
    Charset(String),
    Collate(String),
    AutoIncrement(u64),
    AutoIdCache(u64),
    AutoRandomBase(u64),
    AvgRowLength(u64),
    Checksum(u64),
    TableChecksum(u64),
    Comment(String),
    Compression(String),
    Connection(String),
    Password(String),
    KeyBlockSize(u64),
    MaxRows(u64),
    MinRows(u64),
    DelayKeyWrite(u64),
    RowFormat(RowFormat),
    StatsPersistent(Option<u64>),
    StatsAutoRecalc(Option<u64>),
    StatsSamplePages(Option<u64>),
    PackKeys(Option<u64>),
    ShardRowIdBits(u64),
    PreSplitRegions(u64),
    Tablespace(String),
    Nodegroup(u64),
    DataDirectory(String),
    IndexDirectory(String),
    InsertMethod(String),
    Encryption(String),
    StorageMedia(String),
    SecondaryEngine(Option<String>),
    SecondaryEngineAttribute(String),
    EngineAttribute(String),
    Union(Vec<TableName>),
    PlacementPolicy(Option<String>),
    StatsBuckets(Option<u64>),
    StatsTopN(Option<u64>),
    StatsColsChoice(Option<String>),
    StatsColList(Option<String>),
    StatsSampleRate(Option<String>),
    /// `TTL = col + INTERVAL n unit`
    Ttl {
        /// Time column.
        column: ColumnName,
        /// Interval amount.
        interval: Expr,
        /// Interval unit.
        unit: TimeUnit,
    },
    /// `TTL_ENABLE = 'ON' | 'OFF'`
    TtlEnable(bool),
    /// `TTL_JOB_INTERVAL = '1h'`
    TtlJobInterval(String),
    /// `AUTOEXTEND_SIZE = n`
    AutoextendSize(String),
}

/// `TEMPORARY` flavor of CREATE/DROP TABLE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TemporaryKind {
    #[default]
    None,
    /// `TEMPORARY` / `LOCAL TEMPORARY`
    Local,
    /// `GLOBAL TEMPORARY`
    Global,
}

/// Handling of duplicate rows in `CREATE TABLE ... AS SELECT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CreateDuplicate {
    #[default]
    Error,
    Ignore,
    Replace,
}

/// CREATE TABLE.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateTable {
    /// TEMPORARY flavor.
    pub temporary: TemporaryKind,
    /// `IF NOT EXISTS`
    pub if_not_exists: bool,
    /// Table name.
    pub table: TableName,
    /// Column definitions.
    pub columns: Vec<ColumnDef>,
    /// Constraints and indexes.
    pub constraints: Vec<Constraint>,
    /// `LIKE other`
    pub like: Option<TableName>,
    /// Table options.
    pub options: Vec<TableOption>,
    /// Partitioning.
    pub partition: Option<PartitionOptions>,
    /// `IGNORE` / `REPLACE` before `AS`.
    pub duplicate: CreateDuplicate,
    /// `AS SELECT ...`, `AS VALUES ...` or `AS TABLE ...`.
    pub query: Option<Box<Query>>,
    /// `ON COMMIT DELETE ROWS` (true) or `ON COMMIT PRESERVE ROWS` (false).
    pub on_commit_delete_rows: Option<bool>,
}

impl CreateTable {
    /// Creates an empty definition of `table`.
    #[must_use]
    pub const fn new(table: TableName) -> Self {
        Self {
            temporary: TemporaryKind::None,
            if_not_exists: false,
            table,
            columns: Vec::new(),
            constraints: Vec::new(),
            like: None,
            options: Vec::new(),
            partition: None,
            duplicate: CreateDuplicate::Error,
            query: None,
            on_commit_delete_rows: None,
        }
    }
}

/// `FIRST` or `AFTER col` in column changes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum ColumnPosition {
    #[default]
    None,
    First,
    After(ColumnName),
}

/// `ALGORITHM = ...` of ALTER TABLE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlterAlgorithm {
    Default,
    Copy,
    Inplace,
    Instant,
}

impl AlterAlgorithm {
    /// Returns the SQL keyword.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "DEFAULT",
            Self::Copy => "COPY",
            Self::Inplace => "INPLACE",
            Self::Instant => "INSTANT",
        }
    }
}

/// `LOCK = ...` of ALTER TABLE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlterLock {
    Default,
    None,
    Shared,
    Exclusive,
}

impl AlterLock {
    /// Returns the SQL keyword.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "DEFAULT",
            Self::None => "NONE",
            Self::Shared => "SHARED",
            Self::Exclusive => "EXCLUSIVE",
        }
    }
}

/// Partition maintenance verbs of ALTER TABLE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartitionMaintenance {
    Analyze,
    Check,
    Optimize,
    Rebuild,
    Repair,
    Truncate,
    Discard,
    Import,
}

impl PartitionMaintenance {
    /// Returns the SQL keyword.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Analyze => "ANALYZE",
            Self::Check => "CHECK",
            Self::Optimize => "OPTIMIZE",
            Self::Rebuild => "REBUILD",
            Self::Repair => "REPAIR",
            Self::Truncate => "TRUNCATE",
            Self::Discard => "DISCARD",
            Self::Import => "IMPORT",
        }
    }
}

/// Partitions named by a maintenance spec.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PartitionSelection {
    All,
    Names(Vec<String>),
}

/// One comma-separated item of ALTER TABLE.
#[derive(Debug, Clone, PartialEq)]
pub enum AlterTableSpec {
    /// Table options.
    Options(Vec<TableOption>),
    /// `ADD COLUMN [IF NOT EXISTS] def [position]` or `ADD COLUMN (def, ...)`.
    AddColumns {
        /// `IF NOT EXISTS`
        if_not_exists: bool,
        /// Definitions.
        columns: Vec<ColumnDef>,
        /// Parenthesized list form.
        parenthesized: bool,
        /// Position of a single column.
        position: ColumnPosition,
    },
    /// `ADD [CONSTRAINT] ...`
    AddConstraint(Constraint),
    /// `DROP COLUMN [IF EXISTS] col`
    DropColumn {
        /// `IF EXISTS`
        if_exists: bool,
        /// Column.
        name: ColumnName,
    },
    /// `DROP PRIMARY KEY`
    DropPrimaryKey,
    /// `DROP INDEX [IF EXISTS] idx`
    DropIndex {
        /// `IF EXISTS`
        if_exists: bool,
        /// Index.
        name: String,
    },
    /// `DROP FOREIGN KEY [IF EXISTS] fk`
    DropForeignKey {
        /// `IF EXISTS`
        if_exists: bool,
        /// Constraint.
        name: String,
    },
    /// `DROP CHECK c` / `DROP CONSTRAINT c`
    DropCheck(String),
    /// `MODIFY [COLUMN] [IF EXISTS] def [position]`
    ModifyColumn {
        /// `IF EXISTS`
        if_exists: bool,
        /// New definition.
        column: ColumnDef,
        /// Position.
        position: ColumnPosition,
    },
    /// `CHANGE [COLUMN] [IF EXISTS] old def [position]`
    ChangeColumn {
        /// `IF EXISTS`
        if_exists: bool,
        /// Old name.
        old: ColumnName,
        /// New definition.
        column: ColumnDef,
        /// Position.
        position: ColumnPosition,
    },
    /// `RENAME COLUMN a TO b`
    RenameColumn {
        /// Old name.
        old: ColumnName,
        /// New name.
        new: ColumnName,
    },
    /// `RENAME [TO | AS] t`
    RenameTable(TableName),
    /// `RENAME INDEX a TO b`
    RenameIndex {
        /// Old name.
        old: String,
        /// New name.
        new: String,
    },
    /// `ALTER [COLUMN] c SET DEFAULT expr` / `DROP DEFAULT`
    AlterColumnDefault {
        /// Column.
        name: ColumnName,
        /// New default; `None` for DROP DEFAULT.
        default: Option<Expr>,
    },
    /// `ALTER INDEX idx VISIBLE | INVISIBLE`
    AlterIndexVisibility {
        /// Index.
        name: String,
        /// Visibility.
        visible: bool,
    },
    /// `ALTER CHECK c [NOT] ENFORCED`
    AlterCheck {
        /// Constraint.
        name: String,
        /// Enforcement.
        enforced: bool,
    },
    /// `LOCK = ...`
    Lock(AlterLock),
    /// `ALGORITHM = ...`
    Algorithm(AlterAlgorithm),
    /// `FORCE`
    Force,
    /// `CONVERT TO CHARACTER SET cs [COLLATE c]`; `None` for DEFAULT.
    ConvertToCharset {
        /// Charset.
        charset: Option<String>,
        /// Collation.
        collate: Option<String>,
    },
    /// `DISCARD TABLESPACE` (false) / `IMPORT TABLESPACE` (true).
    Tablespace(bool),
    /// `ENABLE KEYS` (true) / `DISABLE KEYS` (false).
    Keys(bool),
    /// `ORDER BY ...`
    OrderBy(Vec<OrderItem>),
    /// `WITH VALIDATION` (true) / `WITHOUT VALIDATION` (false).
    Validation(bool),
    /// `CACHE` (true) / `NOCACHE` (false).
    Cache(bool),
    /// `READ ONLY` (true) / `READ WRITE` (false).
    ReadOnly(bool),
    /// `SET TIFLASH REPLICA n [LOCATION LABELS 'a', 'b']`
    TiflashReplica {
        /// Replica count.
        count: u64,
        /// Location labels.
        labels: Vec<String>,
    },
    /// `COMPACT [TIFLASH REPLICA]` / `COMPACT PARTITION p`
    Compact {
        /// Partitions to compact.
        partitions: Vec<String>,
        /// `TIFLASH REPLICA`
        tiflash: bool,
    },
    /// `ATTRIBUTES = 'x'`; `None` for DEFAULT.
    Attributes(Option<String>),
    /// `PARTITION p ATTRIBUTES = 'x'`
    PartitionAttributes {
        /// Partition.
        name: String,
        /// Attributes; `None` for DEFAULT.
        attributes: Option<String>,
    },
    /// `PARTITION p PLACEMENT POLICY = x`
    PartitionPlacement {
        /// Partition.
        name: String,
        /// Policy; `None` for DEFAULT.
        policy: Option<String>,
    },
    /// `REMOVE TTL`
    RemoveTtl,
    /// `REMOVE PARTITIONING`
    RemovePartitioning,
    /// `ADD PARTITION [IF NOT EXISTS] (defs)` / `ADD PARTITION PARTITIONS n`
    AddPartitions {
        /// `IF NOT EXISTS`
        if_not_exists: bool,
        /// Definitions.
        defs: Vec<PartitionDef>,
        /// `PARTITIONS n`
        count: Option<u64>,
    },
    /// `DROP PARTITION [IF EXISTS] p, q`
    DropPartition {
        /// `IF EXISTS`
        if_exists: bool,
        /// Partitions.
        names: Vec<String>,
    },
    /// `COALESCE PARTITION n`
    CoalescePartition(u64),
    /// `REORGANIZE PARTITION [p, q INTO (defs)]`
    ReorganizePartition {
        /// Source partitions; empty for all.
        names: Vec<String>,
        /// Target definitions.
        defs: Vec<PartitionDef>,
    },
    /// `EXCHANGE PARTITION p WITH TABLE t [WITH | WITHOUT VALIDATION]`
    ExchangePartition {
        /// Partition.
        name: String,
        /// Table.
        table: TableName,
        /// Validation clause.
        validation: Option<bool>,
    },
    /// `ANALYZE PARTITION p`, `TRUNCATE PARTITION ALL`, ...
    Partitions {
        /// Verb.
        op: PartitionMaintenance,
        /// Partitions.
        selection: PartitionSelection,
    },
    /// `FIRST PARTITION LESS THAN (v)` of INTERVAL partitioning.
    FirstPartition(Expr),
    /// `LAST PARTITION LESS THAN (v)` of INTERVAL partitioning.
    LastPartition(Expr),
    /// `MERGE FIRST PARTITION LESS THAN (v)`
    MergeFirstPartition(Expr),
    /// `SPLIT MAXVALUE PARTITION LESS THAN (v)`
    SplitMaxvaluePartition(Expr),
}

/// ALTER TABLE.
#[derive(Debug, Clone, PartialEq)]
pub struct AlterTable {
    /// Table name.
    pub table: TableName,
    /// Comma-separated specs.
    pub specs: Vec<AlterTableSpec>,
    /// Trailing `PARTITION BY ...`.
    pub partition: Option<PartitionOptions>,
}

/// Index flavor of CREATE INDEX.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndexKind {
    Plain,
    Unique,
    Fulltext,
    Spatial,
    Vector,
    Columnar,
}

impl IndexKind {
    /// Returns the keyword written before `INDEX`, if any.
    #[must_use]
    pub const fn as_str(self) -> Option<&'static str> {
        match self {
            Self::Plain => None,
            Self::Unique => Some("UNIQUE"),
            Self::Fulltext => Some("FULLTEXT"),
            Self::Spatial => Some("SPATIAL"),
            Self::Vector => Some("VECTOR"),
            Self::Columnar => Some("COLUMNAR"),
        }
    }
}

/// CREATE INDEX.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateIndex {
    /// Index flavor.
    pub kind: IndexKind,
    /// `IF NOT EXISTS`
    pub if_not_exists: bool,
    /// Index name.
    pub name: String,
    /// Table.
    pub table: TableName,
    /// Key parts.
    pub parts: Vec<IndexPart>,
    /// Options.
    pub options: IndexOptions,
    /// `ALGORITHM = ...`
    pub algorithm: Option<AlterAlgorithm>,
    /// `LOCK = ...`
    pub lock: Option<AlterLock>,
}

/// DROP INDEX.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DropIndex {
    /// `IF EXISTS`
    pub if_exists: bool,
    /// Index name.
    pub name: String,
    /// Table.
    pub table: TableName,
}

/// A `user@host` account name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserIdentity {
    /// User name; empty for `CURRENT_USER`.
    pub user: String,
    /// Host name.
    pub host: String,
    /// `CURRENT_USER`
    pub current_user: bool,
}

impl UserIdentity {
    /// Creates `user@host`.
    #[must_use]
    pub fn new(user: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            host: host.into(),
            current_user: false,
        }
    }
}

/// `ALGORITHM = ...` of CREATE VIEW.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewAlgorithm {
    Undefined,
    Merge,
    TempTable,
}

impl ViewAlgorithm {
    /// Returns the SQL keyword.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Undefined => "UNDEFINED",
            Self::Merge => "MERGE",
            Self::TempTable => "TEMPTABLE",
        }
    }
}

/// `WITH [CASCADED | LOCAL] CHECK OPTION`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewCheckOption {
    Cascaded,
    Local,
}

/// CREATE VIEW.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateView {
    /// `OR REPLACE`
    pub or_replace: bool,
    /// `ALGORITHM = ...`
    pub algorithm: Option<ViewAlgorithm>,
    /// `DEFINER = user`
    pub definer: Option<UserIdentity>,
    /// `SQL SECURITY DEFINER` (true) or `INVOKER` (false).
    pub security_definer: Option<bool>,
    /// View name.
    pub name: TableName,
    /// Column names.
    pub columns: Vec<String>,
    /// View body.
    pub query: Box<Query>,
    /// Check option.
    pub check_option: Option<ViewCheckOption>,
}

/// Options of CREATE/ALTER DATABASE.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DatabaseOption {
    Charset(String),
    Collate(String),
    Encryption(String),
    /// `PLACEMENT POLICY = p`; `None` for DEFAULT.
    PlacementPolicy(Option<String>),
    /// `SET TIFLASH REPLICA n`
    TiflashReplica(u64),
}

/// CREATE DATABASE.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CreateDatabase {
    /// `IF NOT EXISTS`
    pub if_not_exists: bool,
    /// Database name.
    pub name: String,
    /// Options.
    pub options: Vec<DatabaseOption>,
}

/// ALTER DATABASE.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AlterDatabase {
    /// Database name; `None` for the current database.
    pub name: Option<String>,
    /// Options.
    pub options: Vec<DatabaseOption>,
}

/// DROP DATABASE.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DropDatabase {
    /// `IF EXISTS`
    pub if_exists: bool,
    /// Database name.
    pub name: String,
}

/// DROP TABLE / DROP VIEW.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DropTable {
    /// `IF EXISTS`
    pub if_exists: bool,
    /// `DROP VIEW`
    pub view: bool,
    /// TEMPORARY flavor.
    pub temporary: TemporaryKind,
    /// Tables.
    pub tables: Vec<TableName>,
    /// `CASCADE` (true) or `RESTRICT` (false).
    pub cascade: Option<bool>,
}

/// Sequence options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SequenceOption {
    IncrementBy(i64),
    StartWith(i64),
    MinValue(i64),
    NoMinValue,
    MaxValue(i64),
    NoMaxValue,
    Cache(i64),
    NoCache,
    Cycle,
    NoCycle,
    Restart,
    RestartWith(i64),
}

/// CREATE SEQUENCE.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateSequence {
    /// `IF NOT EXISTS`
    pub if_not_exists: bool,
    /// Sequence name.
    pub name: TableName,
    /// Sequence options.
    pub options: Vec<SequenceOption>,
    /// Table options.
    pub table_options: Vec<TableOption>,
}

/// ALTER SEQUENCE.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AlterSequence {
    /// `IF EXISTS`
    pub if_exists: bool,
    /// Sequence name.
    pub name: TableName,
    /// Sequence options.
    pub options: Vec<SequenceOption>,
}

/// Options of placement policies.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PlacementOption {
    PrimaryRegion(String),
    Regions(String),
    Followers(u64),
    Voters(u64),
    Learners(u64),
    Schedule(String),
    Constraints(String),
    LeaderConstraints(String),
    FollowerConstraints(String),
    VoterConstraints(String),
    LearnerConstraints(String),
    SurvivalPreferences(String),
}

/// CREATE PLACEMENT POLICY.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CreatePlacementPolicy {
    /// `OR REPLACE`
    pub or_replace: bool,
    /// `IF NOT EXISTS`
    pub if_not_exists: bool,
    /// Policy name.
    pub name: String,
    /// Options.
    pub options: Vec<PlacementOption>,
}

/// ALTER PLACEMENT POLICY.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AlterPlacementPolicy {
    /// `IF EXISTS`
    pub if_exists: bool,
    /// Policy name.
    pub name: String,
    /// Options.
    pub options: Vec<PlacementOption>,
}

/// `RU_PER_SEC` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuPerSec {
    Limit(u64),
    Unlimited,
}

/// `PRIORITY` value of a resource group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupPriority {
    Low,
    Medium,
    High,
}

/// `BURSTABLE` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Burstable {
    Off,
    Moderated,
    Unlimited,
}

/// A runaway-query condition of `QUERY_LIMIT`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QueryLimitCondition {
    /// `EXEC_ELAPSED = '60s'`
    ExecElapsed(String),
    /// `RU = n`
    Ru(u64),
    /// `PROCESSED_KEYS = n`
    ProcessedKeys(u64),
}

/// `ACTION` of a query limit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RunawayAction {
    DryRun,
    Cooldown,
    Kill,
    /// `SWITCH_GROUP(rg)`
    SwitchGroup(String),
}

/// `WATCH` type of a query limit or query watch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WatchKind {
    Exact,
    Similar,
    Plan,
}

impl WatchKind {
    /// Returns the SQL keyword.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Exact => "EXACT",
            Self::Similar => "SIMILAR",
            Self::Plan => "PLAN",
        }
    }
}

/// `QUERY_LIMIT = (...)` of a resource group.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryLimit {
    /// Trigger conditions.
    pub conditions: Vec<QueryLimitCondition>,
    /// Action.
    pub action: Option<RunawayAction>,
    /// `WATCH = kind [DURATION = 'd']`
    pub watch: Option<(WatchKind, Option<String>)>,
}

/// `BACKGROUND = (...)` of a resource group.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct BackgroundSettings {
    /// `TASK_TYPES = 'br,ddl'`
    pub task_types: Option<String>,
    /// `UTILIZATION_LIMIT = n`
    pub utilization_limit: Option<u64>,
}

/// Options of resource groups.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResourceGroupOption {
    RuPerSec(RuPerSec),
    Priority(GroupPriority),
    Burstable(Burstable),
    /// `QUERY_LIMIT = (...)`; `None` for `NULL` or `()`.
    QueryLimit(Option<QueryLimit>),
    /// `BACKGROUND = (...)`; `None` for `NULL` or `()`.
    Background(Option<BackgroundSettings>),
}

/// CREATE / ALTER RESOURCE GROUP.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceGroup {
    /// `IF [NOT] EXISTS`
    pub if_exists: bool,
    /// Group name.
    pub name: String,
    /// Options.
    pub options: Vec<ResourceGroupOption>,
}

/// Extended statistics type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatisticsKind {
    Cardinality,
    Dependency,
    Correlation,
}

impl StatisticsKind {
    /// Returns the SQL keyword.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cardinality => "CARDINALITY",
            Self::Dependency => "DEPENDENCY",
            Self::Correlation => "CORRELATION",
        }
    }
}

/// CREATE STATISTICS.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CreateStatistics {
    /// `IF NOT EXISTS`
    pub if_not_exists: bool,
    /// Statistics name.
    pub name: String,
    /// Statistics type.
    pub kind: StatisticsKind,
    /// Table.
    pub table: TableName,
    /// Columns.
    pub columns: Vec<ColumnName>,
}

/// FLASHBACK targets.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Flashback {
    /// `FLASHBACK TABLE t [TO t2]`
    Table {
        /// Table.
        table: TableName,
        /// New name.
        new_name: Option<String>,
    },
    /// `FLASHBACK DATABASE db [TO db2]`
    Database {
        /// Database.
        name: String,
        /// New name.
        new_name: Option<String>,
    },
    /// `FLASHBACK CLUSTER TO TIMESTAMP '...'`
    ClusterToTimestamp(String),
    /// `FLASHBACK CLUSTER TO TSO n`
    ClusterToTso(u64),
    /// `FLASHBACK TABLE t1, t2 TO TIMESTAMP '...'`
    TablesToTimestamp {
        /// Tables.
        tables: Vec<TableName>,
        /// Timestamp.
        timestamp: String,
    },
    /// `FLASHBACK DATABASE db TO TIMESTAMP '...'`
    DatabaseToTimestamp {
        /// Database.
        name: String,
        /// Timestamp.
        timestamp: String,
    },
}

/// RECOVER TABLE.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RecoverTable {
    /// `RECOVER TABLE t [n]`
    Table {
        /// Table.
        table: TableName,
        /// Job number.
        job_num: Option<u64>,
    },
    /// `RECOVER TABLE BY JOB n`
    ByJob(u64),
}

/// The split points of SPLIT TABLE.
#[derive(Debug, Clone, PartialEq)]
pub enum SplitSpec {
    /// `BETWEEN (lo) AND (hi) REGIONS n`
    Between {
        /// Lower bound.
        lower: Vec<Expr>,
        /// Upper bound.
        upper: Vec<Expr>,
        /// Region count.
        regions: u64,
    },
    /// `BY (v1), (v2)`
    By(Vec<Vec<Expr>>),
}

/// SPLIT [PARTITION] TABLE.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitRegion {
    /// `SPLIT PARTITION TABLE`
    pub partition_keyword: bool,
    /// Table.
    pub table: TableName,
    /// `PARTITION (p0)`
    pub partitions: Vec<String>,
    /// `INDEX idx`
    pub index: Option<String>,
    /// Split points.
    pub spec: SplitSpec,
}

/// DISTRIBUTE TABLE.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DistributeTable {
    /// Table.
    pub table: TableName,
    /// `PARTITION (p0)`
    pub partitions: Vec<String>,
    /// `KEY = 'value'` options, keys lower-case.
    pub options: Vec<(String, String)>,
}

/// ALTER RANGE name PLACEMENT POLICY = p.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AlterRange {
    /// Range name.
    pub name: String,
    /// Policy name.
    pub policy: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_type_names() {
        assert_eq!(IndexType::from_name("hnsw"), Some(IndexType::Hnsw));
        assert_eq!(IndexType::from_name("ivf"), None);
        assert_eq!(IndexType::Inverted.as_str(), "INVERTED");
    }

    #[test]
    fn test_row_format_names() {
        assert_eq!(RowFormat::from_name("compact"), Some(RowFormat::Compact));
        assert_eq!(RowFormat::from_name("TOKUDB_LZMA"), Some(RowFormat::TokudbLzma));
        assert_eq!(RowFormat::from_name("sparse"), None);
    }

    #[test]
    fn test_index_options_empty() {
        let mut options = IndexOptions::default();
        assert!(options.is_empty());
        options.visible = Some(false);
        assert!(!options.is_empty());
    }
}
