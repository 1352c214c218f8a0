//! Token types for the MySQL lexer.

use super::Span;

macro_rules! define_keywords {
    ($($variant:ident => $text:literal),* $(,)?) => {
        /// MySQL/TiDB keywords.
        ///
        /// Only the words listed by [`Keyword::is_reserved`] are reserved; all
        /// others may also be used as plain identifiers.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Keyword {
            $(
                #[doc = $text]
                $variant,
            )*
        }

        impl Keyword {
            /// Every keyword, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),*];

            /// Attempts to parse a keyword from a string (case-insensitive).
            #[must_use]
            #[allow(clippy::should_implement_trait)]
            pub fn from_str(s: &str) -> Option<Self> {
                if s.len() > MAX_KEYWORD_LEN {
                    return None;
                }
                match s.to_ascii_uppercase().as_str() {
                    $($text => Some(Self::$variant),)*
                    _ => None,
                }
            }

            /// Returns the canonical upper-case spelling.
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)*
                }
            }
        }
    };
}

const MAX_KEYWORD_LEN: usize = 32;

define_keywords! {
    Action => "ACTION",
    Add => "ADD",
    Admin => "ADMIN",
    After => "AFTER",
    Against => "AGAINST",
    Algorithm => "ALGORITHM",
    All => "ALL",
    Alter => "ALTER",
    Always => "ALWAYS",
    Analyze => "ANALYZE",
    And => "AND",
    Any => "ANY",
    Array => "ARRAY",
    As => "AS",
    Asc => "ASC",
    Ascii => "ASCII",
    At => "AT",
    Attribute => "ATTRIBUTE",
    Attributes => "ATTRIBUTES",
    AutoIdCache => "AUTO_ID_CACHE",
    AutoIncrement => "AUTO_INCREMENT",
    AutoRandom => "AUTO_RANDOM",
    AutoRandomBase => "AUTO_RANDOM_BASE",
    Avg => "AVG",
    AvgRowLength => "AVG_ROW_LENGTH",
    Backup => "BACKUP",
    Begin => "BEGIN",
    Between => "BETWEEN",
    Bigint => "BIGINT",
    Binary => "BINARY",
    Binding => "BINDING",
    Bindings => "BINDINGS",
    Bit => "BIT",
    Blob => "BLOB",
    Bool => "BOOL",
    Boolean => "BOOLEAN",
    Both => "BOTH",
    Btree => "BTREE",
    By => "BY",
    Byte => "BYTE",
    Cache => "CACHE",
    Call => "CALL",
    Cancel => "CANCEL",
    Cascade => "CASCADE",
    Cascaded => "CASCADED",
    Case => "CASE",
    Change => "CHANGE",
    Char => "CHAR",
    Character => "CHARACTER",
    Charset => "CHARSET",
    Check => "CHECK",
    Checksum => "CHECKSUM",
    Cleanup => "CLEANUP",
    Client => "CLIENT",
    Coalesce => "COALESCE",
    Collate => "COLLATE",
    Collation => "COLLATION",
    Column => "COLUMN",
    ColumnFormat => "COLUMN_FORMAT",
    Columns => "COLUMNS",
    Comment => "COMMENT",
    Commit => "COMMIT",
    Committed => "COMMITTED",
    Compact => "COMPACT",
    Compressed => "COMPRESSED",
    Compression => "COMPRESSION",
    Connection => "CONNECTION",
    Consistent => "CONSISTENT",
    Constraint => "CONSTRAINT",
    Continue => "CONTINUE",
    Convert => "CONVERT",
    Create => "CREATE",
    Cross => "CROSS",
    CumeDist => "CUME_DIST",
    Current => "CURRENT",
    CurrentDate => "CURRENT_DATE",
    CurrentRole => "CURRENT_ROLE",
    CurrentTime => "CURRENT_TIME",
    CurrentTimestamp => "CURRENT_TIMESTAMP",
    CurrentUser => "CURRENT_USER",
    Cursor => "CURSOR",
    Cycle => "CYCLE",
    Data => "DATA",
    Database => "DATABASE",
    Databases => "DATABASES",
    Date => "DATE",
    Datetime => "DATETIME",
    Day => "DAY",
    DayHour => "DAY_HOUR",
    DayMicrosecond => "DAY_MICROSECOND",
    DayMinute => "DAY_MINUTE",
    DaySecond => "DAY_SECOND",
    Ddl => "DDL",
    Deallocate => "DEALLOCATE",
    Decimal => "DECIMAL",
    Default => "DEFAULT",
    Definer => "DEFINER",
    Delayed => "DELAYED",
    DelayKeyWrite => "DELAY_KEY_WRITE",
    Delete => "DELETE",
    DenseRank => "DENSE_RANK",
    Desc => "DESC",
    Describe => "DESCRIBE",
    Directory => "DIRECTORY",
    Disable => "DISABLE",
    Discard => "DISCARD",
    Distinct => "DISTINCT",
    Distinctrow => "DISTINCTROW",
    Div => "DIV",
    Do => "DO",
    Double => "DOUBLE",
    Drop => "DROP",
    Dual => "DUAL",
    Duplicate => "DUPLICATE",
    Dynamic => "DYNAMIC",
    Else => "ELSE",
    Elseif => "ELSEIF",
    Enable => "ENABLE",
    Enclosed => "ENCLOSED",
    Encryption => "ENCRYPTION",
    End => "END",
    Enforced => "ENFORCED",
    Engine => "ENGINE",
    Engines => "ENGINES",
    Enum => "ENUM",
    Errors => "ERRORS",
    Escape => "ESCAPE",
    Escaped => "ESCAPED",
    Event => "EVENT",
    Events => "EVENTS",
    Except => "EXCEPT",
    Exchange => "EXCHANGE",
    Execute => "EXECUTE",
    Exists => "EXISTS",
    Exit => "EXIT",
    Expansion => "EXPANSION",
    Explain => "EXPLAIN",
    Extended => "EXTENDED",
    False => "FALSE",
    Fetch => "FETCH",
    Fields => "FIELDS",
    File => "FILE",
    First => "FIRST",
    FirstValue => "FIRST_VALUE",
    Fixed => "FIXED",
    Float => "FLOAT",
    Float4 => "FLOAT4",
    Float8 => "FLOAT8",
    Flush => "FLUSH",
    Following => "FOLLOWING",
    For => "FOR",
    Force => "FORCE",
    Foreign => "FOREIGN",
    Format => "FORMAT",
    From => "FROM",
    Full => "FULL",
    Fulltext => "FULLTEXT",
    Function => "FUNCTION",
    General => "GENERAL",
    Generated => "GENERATED",
    Global => "GLOBAL",
    Grant => "GRANT",
    Grants => "GRANTS",
    Group => "GROUP",
    Groups => "GROUPS",
    Hash => "HASH",
    Having => "HAVING",
    Help => "HELP",
    HighPriority => "HIGH_PRIORITY",
    History => "HISTORY",
    Hosts => "HOSTS",
    Hour => "HOUR",
    HourMicrosecond => "HOUR_MICROSECOND",
    HourMinute => "HOUR_MINUTE",
    HourSecond => "HOUR_SECOND",
    Identified => "IDENTIFIED",
    If => "IF",
    Ignore => "IGNORE",
    Ilike => "ILIKE",
    Import => "IMPORT",
    In => "IN",
    Index => "INDEX",
    Indexes => "INDEXES",
    Infile => "INFILE",
    Inner => "INNER",
    Inout => "INOUT",
    Insert => "INSERT",
    InsertMethod => "INSERT_METHOD",
    Instance => "INSTANCE",
    Int => "INT",
    Int1 => "INT1",
    Int2 => "INT2",
    Int3 => "INT3",
    Int4 => "INT4",
    Int8 => "INT8",
    Integer => "INTEGER",
    Intersect => "INTERSECT",
    Interval => "INTERVAL",
    Into => "INTO",
    Invisible => "INVISIBLE",
    Invoker => "INVOKER",
    Is => "IS",
    Isolation => "ISOLATION",
    Iterate => "ITERATE",
    Join => "JOIN",
    Json => "JSON",
    Key => "KEY",
    KeyBlockSize => "KEY_BLOCK_SIZE",
    Keys => "KEYS",
    Kill => "KILL",
    Lag => "LAG",
    Language => "LANGUAGE",
    Last => "LAST",
    LastValue => "LAST_VALUE",
    Lead => "LEAD",
    Leading => "LEADING",
    Leave => "LEAVE",
    Left => "LEFT",
    Less => "LESS",
    Level => "LEVEL",
    Like => "LIKE",
    Limit => "LIMIT",
    Linear => "LINEAR",
    Lines => "LINES",
    List => "LIST",
    Load => "LOAD",
    Local => "LOCAL",
    Localtime => "LOCALTIME",
    Localtimestamp => "LOCALTIMESTAMP",
    Lock => "LOCK",
    Locked => "LOCKED",
    Logs => "LOGS",
    Long => "LONG",
    Longblob => "LONGBLOB",
    Longtext => "LONGTEXT",
    LowPriority => "LOW_PRIORITY",
    Match => "MATCH",
    MaxRows => "MAX_ROWS",
    Maxvalue => "MAXVALUE",
    Mediumblob => "MEDIUMBLOB",
    Mediumint => "MEDIUMINT",
    Mediumtext => "MEDIUMTEXT",
    Memory => "MEMORY",
    Merge => "MERGE",
    Microsecond => "MICROSECOND",
    Middleint => "MIDDLEINT",
    MinRows => "MIN_ROWS",
    Minute => "MINUTE",
    MinuteMicrosecond => "MINUTE_MICROSECOND",
    MinuteSecond => "MINUTE_SECOND",
    Minvalue => "MINVALUE",
    Mod => "MOD",
    Mode => "MODE",
    Modify => "MODIFY",
    Month => "MONTH",
    Names => "NAMES",
    National => "NATIONAL",
    Natural => "NATURAL",
    Never => "NEVER",
    Next => "NEXT",
    No => "NO",
    Nocache => "NOCACHE",
    Nocycle => "NOCYCLE",
    Nodegroup => "NODEGROUP",
    Nomaxvalue => "NOMAXVALUE",
    Nominvalue => "NOMINVALUE",
    None => "NONE",
    Not => "NOT",
    Nowait => "NOWAIT",
    NoWriteToBinlog => "NO_WRITE_TO_BINLOG",
    NthValue => "NTH_VALUE",
    Ntile => "NTILE",
    Null => "NULL",
    Nulls => "NULLS",
    Numeric => "NUMERIC",
    Of => "OF",
    Offset => "OFFSET",
    On => "ON",
    Only => "ONLY",
    Open => "OPEN",
    Optimize => "OPTIMIZE",
    Option => "OPTION",
    Optional => "OPTIONAL",
    Optionally => "OPTIONALLY",
    Or => "OR",
    Order => "ORDER",
    Out => "OUT",
    Outer => "OUTER",
    Outfile => "OUTFILE",
    Over => "OVER",
    PackKeys => "PACK_KEYS",
    Parser => "PARSER",
    Partial => "PARTIAL",
    Partition => "PARTITION",
    Partitioning => "PARTITIONING",
    Partitions => "PARTITIONS",
    Password => "PASSWORD",
    Pause => "PAUSE",
    PercentRank => "PERCENT_RANK",
    Placement => "PLACEMENT",
    Plugins => "PLUGINS",
    Policy => "POLICY",
    Preceding => "PRECEDING",
    Precision => "PRECISION",
    Prepare => "PREPARE",
    Primary => "PRIMARY",
    Privileges => "PRIVILEGES",
    Procedure => "PROCEDURE",
    Process => "PROCESS",
    Processlist => "PROCESSLIST",
    Profiles => "PROFILES",
    Purge => "PURGE",
    Quarter => "QUARTER",
    Query => "QUERY",
    Quick => "QUICK",
    Range => "RANGE",
    Rank => "RANK",
    Read => "READ",
    Real => "REAL",
    Rebuild => "REBUILD",
    Recover => "RECOVER",
    Recursive => "RECURSIVE",
    Redundant => "REDUNDANT",
    References => "REFERENCES",
    Regexp => "REGEXP",
    Release => "RELEASE",
    Reload => "RELOAD",
    Remove => "REMOVE",
    Rename => "RENAME",
    Reorganize => "REORGANIZE",
    Repair => "REPAIR",
    Repeat => "REPEAT",
    Repeatable => "REPEATABLE",
    Replace => "REPLACE",
    Require => "REQUIRE",
    Resource => "RESOURCE",
    Respect => "RESPECT",
    Restart => "RESTART",
    Restore => "RESTORE",
    Restrict => "RESTRICT",
    Resume => "RESUME",
    Revoke => "REVOKE",
    Right => "RIGHT",
    Rlike => "RLIKE",
    Role => "ROLE",
    Rollback => "ROLLBACK",
    Rollup => "ROLLUP",
    Routine => "ROUTINE",
    Row => "ROW",
    RowCount => "ROW_COUNT",
    RowFormat => "ROW_FORMAT",
    RowNumber => "ROW_NUMBER",
    Rows => "ROWS",
    Savepoint => "SAVEPOINT",
    Second => "SECOND",
    SecondMicrosecond => "SECOND_MICROSECOND",
    Select => "SELECT",
    Separator => "SEPARATOR",
    Sequence => "SEQUENCE",
    Serial => "SERIAL",
    Serializable => "SERIALIZABLE",
    Session => "SESSION",
    Set => "SET",
    ShardRowIdBits => "SHARD_ROW_ID_BITS",
    Share => "SHARE",
    Shared => "SHARED",
    Show => "SHOW",
    Shutdown => "SHUTDOWN",
    Signed => "SIGNED",
    Simple => "SIMPLE",
    Skip => "SKIP",
    Slow => "SLOW",
    Smallint => "SMALLINT",
    Snapshot => "SNAPSHOT",
    Some => "SOME",
    Spatial => "SPATIAL",
    Sql => "SQL",
    SqlBigResult => "SQL_BIG_RESULT",
    SqlBufferResult => "SQL_BUFFER_RESULT",
    SqlCache => "SQL_CACHE",
    SqlCalcFoundRows => "SQL_CALC_FOUND_ROWS",
    Sqlexception => "SQLEXCEPTION",
    SqlNoCache => "SQL_NO_CACHE",
    SqlSmallResult => "SQL_SMALL_RESULT",
    Sqlstate => "SQLSTATE",
    Sqlwarning => "SQLWARNING",
    Ssl => "SSL",
    Start => "START",
    Starting => "STARTING",
    Stats => "STATS",
    StatsAutoRecalc => "STATS_AUTO_RECALC",
    StatsExtended => "STATS_EXTENDED",
    StatsPersistent => "STATS_PERSISTENT",
    StatsSamplePages => "STATS_SAMPLE_PAGES",
    Status => "STATUS",
    Storage => "STORAGE",
    Stored => "STORED",
    StraightJoin => "STRAIGHT_JOIN",
    Subpartition => "SUBPARTITION",
    Subpartitions => "SUBPARTITIONS",
    Super => "SUPER",
    Table => "TABLE",
    Tables => "TABLES",
    Tablesample => "TABLESAMPLE",
    Tablespace => "TABLESPACE",
    Temporary => "TEMPORARY",
    Temptable => "TEMPTABLE",
    Terminated => "TERMINATED",
    Text => "TEXT",
    Than => "THAN",
    Then => "THEN",
    Time => "TIME",
    Timestamp => "TIMESTAMP",
    Tinyblob => "TINYBLOB",
    Tinyint => "TINYINT",
    Tinytext => "TINYTEXT",
    To => "TO",
    Trace => "TRACE",
    Traditional => "TRADITIONAL",
    Trailing => "TRAILING",
    Transaction => "TRANSACTION",
    Trigger => "TRIGGER",
    Triggers => "TRIGGERS",
    True => "TRUE",
    Truncate => "TRUNCATE",
    Ttl => "TTL",
    TtlEnable => "TTL_ENABLE",
    TtlJobInterval => "TTL_JOB_INTERVAL",
    Type => "TYPE",
    Unbounded => "UNBOUNDED",
    Uncommitted => "UNCOMMITTED",
    Undefined => "UNDEFINED",
    Union => "UNION",
    Unique => "UNIQUE",
    Unknown => "UNKNOWN",
    Unlock => "UNLOCK",
    Unsigned => "UNSIGNED",
    Until => "UNTIL",
    Update => "UPDATE",
    Usage => "USAGE",
    Use => "USE",
    User => "USER",
    Using => "USING",
    UtcDate => "UTC_DATE",
    UtcTime => "UTC_TIME",
    UtcTimestamp => "UTC_TIMESTAMP",
    Validation => "VALIDATION",
    Value => "VALUE",
    Values => "VALUES",
    Varbinary => "VARBINARY",
    Varchar => "VARCHAR",
    Varcharacter => "VARCHARACTER",
    Variables => "VARIABLES",
    Varying => "VARYING",
    View => "VIEW",
    Virtual => "VIRTUAL",
    Visible => "VISIBLE",
    Wait => "WAIT",
    Warnings => "WARNINGS",
    Week => "WEEK",
    When => "WHEN",
    Where => "WHERE",
    While => "WHILE",
    Window => "WINDOW",
    With => "WITH",
    Without => "WITHOUT",
    Work => "WORK",
    Write => "WRITE",
    Xor => "XOR",
    Year => "YEAR",
    YearMonth => "YEAR_MONTH",
    Zerofill => "ZEROFILL",
}

impl Keyword {
    /// Returns true if the keyword can never be used as a bare identifier.
    ///
    /// Window-function words are only reserved while window functions are
    /// enabled on the parser.
    #[must_use]
    pub const fn is_reserved(self, window_functions: bool) -> bool {
        if self.is_window_reserved() {
            return window_functions;
        }
        matches!(
            self,
            Self::Add
                | Self::All
                | Self::Alter
                | Self::Analyze
                | Self::And
                | Self::Array
                | Self::As
                | Self::Asc
                | Self::Between
                | Self::Bigint
                | Self::Binary
                | Self::Blob
                | Self::Both
                | Self::By
                | Self::Call
                | Self::Cascade
                | Self::Case
                | Self::Change
                | Self::Char
                | Self::Character
                | Self::Check
                | Self::Collate
                | Self::Column
                | Self::Constraint
                | Self::Continue
                | Self::Convert
                | Self::Create
                | Self::Cross
                | Self::CurrentDate
                | Self::CurrentRole
                | Self::CurrentTime
                | Self::CurrentTimestamp
                | Self::CurrentUser
                | Self::Cursor
                | Self::Database
                | Self::Databases
                | Self::DayHour
                | Self::DayMicrosecond
                | Self::DayMinute
                | Self::DaySecond
                | Self::Decimal
                | Self::Default
                | Self::Delayed
                | Self::Delete
                | Self::Desc
                | Self::Describe
                | Self::Distinct
                | Self::Distinctrow
                | Self::Div
                | Self::Double
                | Self::Drop
                | Self::Dual
                | Self::Else
                | Self::Elseif
                | Self::Enclosed
                | Self::Escaped
                | Self::Except
                | Self::Exists
                | Self::Exit
                | Self::Explain
                | Self::False
                | Self::Fetch
                | Self::Float
                | Self::Float4
                | Self::Float8
                | Self::For
                | Self::Force
                | Self::Foreign
                | Self::From
                | Self::Fulltext
                | Self::Generated
                | Self::Grant
                | Self::Group
                | Self::Having
                | Self::HighPriority
                | Self::HourMicrosecond
                | Self::HourMinute
                | Self::HourSecond
                | Self::If
                | Self::Ignore
                | Self::Ilike
                | Self::In
                | Self::Index
                | Self::Infile
                | Self::Inner
                | Self::Inout
                | Self::Insert
                | Self::Int
                | Self::Int1
                | Self::Int2
                | Self::Int3
                | Self::Int4
                | Self::Int8
                | Self::Integer
                | Self::Intersect
                | Self::Interval
                | Self::Into
                | Self::Is
                | Self::Iterate
                | Self::Join
                | Self::Key
                | Self::Keys
                | Self::Kill
                | Self::Leading
                | Self::Leave
                | Self::Left
                | Self::Like
                | Self::Limit
                | Self::Linear
                | Self::Lines
                | Self::Load
                | Self::Localtime
                | Self::Localtimestamp
                | Self::Lock
                | Self::Long
                | Self::Longblob
                | Self::Longtext
                | Self::LowPriority
                | Self::Match
                | Self::Maxvalue
                | Self::Mediumblob
                | Self::Mediumint
                | Self::Mediumtext
                | Self::Middleint
                | Self::MinuteMicrosecond
                | Self::MinuteSecond
                | Self::Mod
                | Self::Natural
                | Self::Not
                | Self::NoWriteToBinlog
                | Self::Null
                | Self::Numeric
                | Self::Of
                | Self::On
                | Self::Optimize
                | Self::Option
                | Self::Optionally
                | Self::Or
                | Self::Order
                | Self::Out
                | Self::Outer
                | Self::Outfile
                | Self::Partition
                | Self::Precision
                | Self::Primary
                | Self::Procedure
                | Self::Range
                | Self::Read
                | Self::Real
                | Self::Recursive
                | Self::References
                | Self::Regexp
                | Self::Release
                | Self::Rename
                | Self::Repeat
                | Self::Replace
                | Self::Require
                | Self::Restrict
                | Self::Revoke
                | Self::Right
                | Self::Rlike
                | Self::Row
                | Self::Rows
                | Self::SecondMicrosecond
                | Self::Select
                | Self::Set
                | Self::Show
                | Self::Smallint
                | Self::Spatial
                | Self::Sql
                | Self::SqlBigResult
                | Self::SqlCalcFoundRows
                | Self::Sqlexception
                | Self::SqlSmallResult
                | Self::Sqlstate
                | Self::Sqlwarning
                | Self::Ssl
                | Self::Starting
                | Self::StatsExtended
                | Self::Stored
                | Self::StraightJoin
                | Self::Table
                | Self::Tablesample
                | Self::Terminated
                | Self::Then
                | Self::Tinyblob
                | Self::Tinyint
                | Self::Tinytext
                | Self::To
                | Self::Trailing
                | Self::Trigger
                | Self::True
                | Self::Union
                | Self::Unique
                | Self::Unlock
                | Self::Unsigned
                | Self::Until
                | Self::Update
                | Self::Usage
                | Self::Use
                | Self::Using
                | Self::UtcDate
                | Self::UtcTime
                | Self::UtcTimestamp
                | Self::Values
                | Self::Varbinary
                | Self::Varchar
                | Self::Varcharacter
                | Self::Varying
                | Self::Virtual
                | Self::When
                | Self::Where
                | Self::While
                | Self::With
                | Self::Write
                | Self::Xor
                | Self::YearMonth
                | Self::Zerofill
        )
    }

    /// Returns true for words reserved only when window functions are on.
    #[must_use]
    pub const fn is_window_reserved(self) -> bool {
        matches!(
            self,
            Self::CumeDist
                | Self::DenseRank
                | Self::FirstValue
                | Self::Groups
                | Self::Lag
                | Self::LastValue
                | Self::Lead
                | Self::NthValue
                | Self::Ntile
                | Self::Over
                | Self::PercentRank
                | Self::Rank
                | Self::RowNumber
                | Self::Window
        )
    }

    /// Returns true if the reserved word may still name a function when
    /// directly followed by `(`, e.g. `IF(a, b, c)` or `LEFT(s, 2)`.
    #[must_use]
    pub const fn is_function_name(self) -> bool {
        matches!(
            self,
            Self::Char
                | Self::Convert
                | Self::CurrentDate
                | Self::CurrentRole
                | Self::CurrentTime
                | Self::CurrentTimestamp
                | Self::CurrentUser
                | Self::Database
                | Self::If
                | Self::Insert
                | Self::Left
                | Self::Localtime
                | Self::Localtimestamp
                | Self::Mod
                | Self::Repeat
                | Self::Replace
                | Self::Right
                | Self::UtcDate
                | Self::UtcTime
                | Self::UtcTimestamp
        )
    }
}

/// Errors detected while scanning a single token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    /// A string literal reached end of input.
    #[error("unterminated string literal")]
    UnterminatedString,
    /// A quoted identifier reached end of input.
    #[error("unterminated quoted identifier")]
    UnterminatedIdentifier,
    /// A block comment reached end of input.
    #[error("unterminated comment")]
    UnterminatedComment,
    /// `X'..'` with odd length or non-hex digits.
    #[error("invalid hexadecimal literal")]
    InvalidHex,
    /// `B'..'` with characters other than 0 and 1.
    #[error("invalid bit literal")]
    InvalidBit,
    /// Numeric literal that cannot be represented.
    #[error("invalid numeric literal")]
    InvalidNumber,
    /// A byte that cannot start any token.
    #[error("unexpected character {0:?}")]
    UnexpectedChar(char),
}

/// The kind of token.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // Literals
    /// Integer literal that fits in a `u64`.
    Integer(u64),
    /// Fixed-point literal, kept as source text (e.g. `1.50`).
    Decimal(String),
    /// Literal with an exponent (e.g. `1e10`).
    Float(f64),
    /// String literal with escapes resolved.
    String(Vec<u8>),
    /// `N'...'`
    NationalString(Vec<u8>),
    /// `X'..'` or `0x..`
    HexString(Vec<u8>),
    /// `B'..'` or `0b..`
    BitString(Vec<u8>),
    /// `_charset` prefix of a string literal, lower-cased without the `_`.
    Introducer(String),

    // Identifiers and keywords
    /// Bare identifier.
    Identifier(String),
    /// Back-quoted (or ANSI double-quoted) identifier.
    QuotedIdentifier(String),
    /// SQL keyword.
    Keyword(Keyword),
    /// `@name`
    UserVariable(String),
    /// `@@[scope.]name`, lower-cased.
    SystemVariable(String),
    /// Body of a `/*+ ... */` block in a hint position.
    Hint(String),

    // Operators
    /// +
    Plus,
    /// -
    Minus,
    /// *
    Star,
    /// /
    Slash,
    /// %
    Percent,
    /// =
    Eq,
    /// <=>
    NullSafeEq,
    /// != or <>
    NotEq,
    /// <
    Lt,
    /// <=
    LtEq,
    /// >
    Gt,
    /// >=
    GtEq,
    /// :=
    Assign,
    /// ->
    JsonExtract,
    /// ->>
    JsonUnquoteExtract,
    /// &&
    LogicAnd,
    /// ||
    LogicOr,
    /// !
    Bang,
    /// &
    BitAnd,
    /// |
    BitOr,
    /// ^
    BitXor,
    /// ~
    BitNot,
    /// <<
    LeftShift,
    /// >>
    RightShift,

    // Delimiters
    /// (
    LeftParen,
    /// )
    RightParen,
    /// {
    LeftBrace,
    /// }
    RightBrace,
    /// [
    LeftBracket,
    /// ]
    RightBracket,
    /// ,
    Comma,
    /// ;
    Semicolon,
    /// .
    Dot,
    /// ?
    Question,

    // Special
    /// End of input
    Eof,
    /// Invalid token
    Error(LexError),
}

/// A token with its span in the source code.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// The location in the source code.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Returns true if this is an EOF token.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }

    /// Returns the keyword if this is a keyword token.
    #[must_use]
    pub const fn as_keyword(&self) -> Option<Keyword> {
        match &self.kind {
            TokenKind::Keyword(kw) => Some(*kw),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_from_str() {
        assert_eq!(Keyword::from_str("SELECT"), Some(Keyword::Select));
        assert_eq!(Keyword::from_str("select"), Some(Keyword::Select));
        assert_eq!(Keyword::from_str("Auto_Random"), Some(Keyword::AutoRandom));
        assert_eq!(Keyword::from_str("not_a_keyword"), None);
    }

    #[test]
    fn test_keyword_as_str_round_trips() {
        for kw in Keyword::ALL {
            assert_eq!(Keyword::from_str(kw.as_str()), Some(*kw));
        }
    }

    #[test]
    fn test_window_keywords_follow_toggle() {
        assert!(Keyword::Rank.is_reserved(true));
        assert!(!Keyword::Rank.is_reserved(false));
        assert!(Keyword::Select.is_reserved(false));
        assert!(!Keyword::Begin.is_reserved(true));
    }

    #[test]
    fn test_token_as_keyword() {
        let select = Token::new(TokenKind::Keyword(Keyword::Select), Span::new(0, 6));
        let plus = Token::new(TokenKind::Plus, Span::new(0, 1));
        assert_eq!(select.as_keyword(), Some(Keyword::Select));
        assert_eq!(plus.as_keyword(), None);
        assert!(!select.is_eof());
    }
}
