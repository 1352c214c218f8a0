//! Optimizer hint AST types.

/// A table named inside a hint, e.g. `db.t@sel_1 PARTITION(p0)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct HintTable {
    /// Schema qualifier.
    pub schema: Option<String>,
    /// Table name or alias.
    pub table: String,
    /// `@qb` query block.
    pub query_block: Option<String>,
    /// `PARTITION (p0, p1)`.
    pub partitions: Vec<String>,
}

impl HintTable {
    /// Creates an unqualified hint table.
    #[must_use]
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            ..Self::default()
        }
    }
}

/// Typed hint arguments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HintArgs {
    /// `HASH_AGG()`
    None,
    /// `TIDB_INLJ(t1, t2)`
    Tables(Vec<HintTable>),
    /// `USE_INDEX(t, idx1, idx2)`
    Indexes {
        /// Target table.
        table: HintTable,
        /// Index or column names.
        indexes: Vec<String>,
    },
    /// `MAX_EXECUTION_TIME(1000)`
    Integer(u64),
    /// `MEMORY_QUOTA(1 MB)`, in bytes.
    MemoryQuota(u64),
    /// `USE_TOJA(TRUE)`
    Bool(bool),
    /// `READ_FROM_STORAGE(TIFLASH[t1], TIKV[t2])`, engine names lower-case.
    Storage(Vec<(String, Vec<HintTable>)>),
    /// `QB_NAME(qb)`, `RESOURCE_GROUP(rg)`, `QUERY_TYPE(OLAP)`
    Ident(String),
    /// `SET_VAR(name = value)`
    SetVar {
        /// Variable name.
        name: String,
        /// Value text.
        value: String,
    },
}

/// A recognized optimizer hint.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hint {
    /// Lower-case hint name.
    pub name: String,
    /// Leading `@qb` argument.
    pub query_block: Option<String>,
    /// Arguments.
    pub args: HintArgs,
}

impl Hint {
    /// Creates a hint without a query block.
    #[must_use]
    pub fn new(name: impl Into<String>, args: HintArgs) -> Self {
        Self {
            name: name.into(),
            query_block: None,
            args,
        }
    }
}
