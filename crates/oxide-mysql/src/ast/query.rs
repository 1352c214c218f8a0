//! Query expression AST types: SELECT, set operations, table references.

use super::expression::{Expr, OrderItem, WindowSpec};
use super::hint::Hint;

/// A possibly schema-qualified table name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct TableName {
    /// Schema qualifier.
    pub schema: Option<String>,
    /// Table name.
    pub name: String,
    /// `*.name`, matching the table in any schema. Only bindings accept it.
    pub wildcard_schema: bool,
}

impl TableName {
    /// Creates an unqualified table name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            schema: None,
            name: name.into(),
            wildcard_schema: false,
        }
    }

    /// Creates a schema-qualified table name.
    #[must_use]
    pub fn qualified(schema: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            schema: Some(schema.into()),
            name: name.into(),
            wildcard_schema: false,
        }
    }

    /// Creates a `*.name` table name.
    #[must_use]
    pub fn any_schema(name: impl Into<String>) -> Self {
        Self {
            schema: None,
            name: name.into(),
            wildcard_schema: true,
        }
    }
}

/// Set operators, from loosest to tightest binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SetOperator {
    Union,
    Except,
    Intersect,
}

impl SetOperator {
    /// Returns the SQL keyword.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Union => "UNION",
            Self::Except => "EXCEPT",
            Self::Intersect => "INTERSECT",
        }
    }
}

/// A complete query expression with its trailing clauses.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    /// `WITH` clause.
    pub with: Option<WithClause>,
    /// The query body.
    pub body: QueryBody,
    /// ORDER BY applying to the whole body.
    pub order_by: Vec<OrderItem>,
    /// LIMIT applying to the whole body.
    pub limit: Option<Limit>,
    /// Locking read clause.
    pub lock: Option<LockClause>,
    /// `INTO OUTFILE` or `INTO @var` target.
    pub into: Option<SelectInto>,
}

impl Query {
    /// Wraps a body without trailing clauses.
    #[must_use]
    pub const fn new(body: QueryBody) -> Self {
        Self {
            with: None,
            body,
            order_by: Vec::new(),
            limit: None,
            lock: None,
            into: None,
        }
    }
}

/// The body of a query.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryBody {
    /// A single SELECT block.
    Select(Box<Select>),
    /// Two operands joined by UNION, EXCEPT or INTERSECT.
    SetOp {
        /// Operator.
        op: SetOperator,
        /// `ALL` was given.
        all: bool,
        /// Left operand.
        left: Box<QueryBody>,
        /// Right operand.
        right: Box<QueryBody>,
    },
    /// A parenthesized query.
    Paren(Box<Query>),
    /// `VALUES ROW(...), ROW(...)`.
    Values(Vec<Vec<Expr>>),
    /// `TABLE t`.
    Table(TableName),
}

/// Options written between SELECT and the field list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectOptions {
    /// DISTINCT or DISTINCTROW.
    pub distinct: bool,
    /// HIGH_PRIORITY
    pub high_priority: bool,
    /// STRAIGHT_JOIN
    pub straight_join: bool,
    /// SQL_SMALL_RESULT
    pub small_result: bool,
    /// SQL_BIG_RESULT
    pub big_result: bool,
    /// SQL_BUFFER_RESULT
    pub buffer_result: bool,
    /// `Some(true)` for SQL_CACHE, `Some(false)` for SQL_NO_CACHE.
    pub cache: Option<bool>,
    /// SQL_CALC_FOUND_ROWS
    pub calc_found_rows: bool,
}

/// A single SELECT block.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Select {
    /// Optimizer hints.
    pub hints: Vec<Hint>,
    /// Select options.
    pub options: SelectOptions,
    /// Field list.
    pub fields: Vec<SelectField>,
    /// FROM clause; `None` also for `FROM DUAL`.
    pub from: Option<TableRef>,
    /// WHERE condition.
    pub selection: Option<Expr>,
    /// GROUP BY clause.
    pub group_by: Option<GroupBy>,
    /// HAVING condition.
    pub having: Option<Expr>,
    /// Named windows.
    pub windows: Vec<NamedWindow>,
}

/// An entry of the field list.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectField {
    /// `*` or `t.*`.
    Wildcard {
        /// Qualifying table.
        table: Option<TableName>,
    },
    /// An expression with an optional alias.
    Expr {
        /// The expression.
        expr: Expr,
        /// `AS alias`.
        alias: Option<String>,
    },
}

/// `GROUP BY` items.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupBy {
    /// Grouping items.
    pub items: Vec<OrderItem>,
    /// `WITH ROLLUP`
    pub rollup: bool,
}

/// `WINDOW name AS (spec)`.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedWindow {
    /// Window name.
    pub name: String,
    /// Specification.
    pub spec: WindowSpec,
}

/// A FROM-clause table reference.
#[derive(Debug, Clone, PartialEq)]
pub enum TableRef {
    /// A base table.
    Table(Box<TableSource>),
    /// A derived table.
    Derived {
        /// The sub-query.
        query: Box<Query>,
        /// Alias.
        alias: Option<String>,
        /// Derived column names.
        columns: Vec<String>,
    },
    /// A join, also used to hold a single parenthesized reference.
    Join(Box<Join>),
}

impl TableRef {
    /// Creates an unaliased base-table reference.
    #[must_use]
    pub fn table(name: TableName) -> Self {
        Self::Table(Box::new(TableSource::new(name)))
    }
}

/// A base table in a FROM clause.
#[derive(Debug, Clone, PartialEq)]
pub struct TableSource {
    /// Table name.
    pub name: TableName,
    /// `PARTITION (p0, p1)`.
    pub partitions: Vec<String>,
    /// `AS alias`.
    pub alias: Option<String>,
    /// `AS OF TIMESTAMP expr`.
    pub as_of: Option<Expr>,
    /// Index hints.
    pub index_hints: Vec<IndexHint>,
}

impl TableSource {
    /// Creates a table source without decorations.
    #[must_use]
    pub const fn new(name: TableName) -> Self {
        Self {
            name,
            partitions: Vec::new(),
            alias: None,
            as_of: None,
            index_hints: Vec::new(),
        }
    }
}

/// The join type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JoinKind {
    /// Inner or cross join.
    Cross,
    Left,
    Right,
}

/// A join of two table references.
#[derive(Debug, Clone, PartialEq)]
pub struct Join {
    /// Left operand.
    pub left: TableRef,
    /// Right operand; `None` when the join only wraps `left`.
    pub right: Option<TableRef>,
    /// Join type.
    pub kind: JoinKind,
    /// `NATURAL`
    pub natural: bool,
    /// `STRAIGHT_JOIN`
    pub straight: bool,
    /// `ON` condition.
    pub on: Option<Expr>,
    /// `USING` columns.
    pub using: Vec<String>,
}

impl Join {
    /// Wraps a single table reference.
    #[must_use]
    pub const fn single(left: TableRef) -> Self {
        Self {
            left,
            right: None,
            kind: JoinKind::Cross,
            natural: false,
            straight: false,
            on: None,
            using: Vec::new(),
        }
    }

    /// Creates a cross join.
    #[must_use]
    pub fn cross(left: TableRef, right: TableRef) -> Self {
        Self {
            right: Some(right),
            ..Self::single(left)
        }
    }
}

/// `USE`, `IGNORE` or `FORCE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndexHintKind {
    Use,
    Ignore,
    Force,
}

/// Scope of an index hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndexHintScope {
    /// No `FOR` clause.
    Any,
    Join,
    OrderBy,
    GroupBy,
}

/// `USE INDEX (a, b)` and friends.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IndexHint {
    /// Hint kind.
    pub kind: IndexHintKind,
    /// `FOR ...` scope.
    pub scope: IndexHintScope,
    /// Index names; may be empty for `USE INDEX ()`.
    pub indexes: Vec<String>,
}

/// `LIMIT [offset,] count`.
#[derive(Debug, Clone, PartialEq)]
pub struct Limit {
    /// Row count.
    pub count: Expr,
    /// Rows to skip.
    pub offset: Option<Expr>,
}

/// Kind of locking read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LockMode {
    /// FOR UPDATE
    Update,
    /// FOR SHARE
    Share,
    /// LOCK IN SHARE MODE
    InShareMode,
}

/// What a locking read does on a conflict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LockWait {
    /// Block until the lock is free.
    Default,
    NoWait,
    /// `WAIT n` seconds.
    Wait(u64),
    SkipLocked,
}

/// `FOR UPDATE [OF t] [NOWAIT | WAIT n | SKIP LOCKED]` and friends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockClause {
    /// Lock kind.
    pub mode: LockMode,
    /// `OF` tables.
    pub tables: Vec<TableName>,
    /// Wait policy.
    pub wait: LockWait,
}

/// One CTE of a `WITH` clause.
#[derive(Debug, Clone, PartialEq)]
pub struct CommonTableExpr {
    /// CTE name.
    pub name: String,
    /// Column list.
    pub columns: Vec<String>,
    /// The CTE body.
    pub query: Box<Query>,
}

/// `WITH [RECURSIVE] cte [, cte]`.
#[derive(Debug, Clone, PartialEq)]
pub struct WithClause {
    /// `RECURSIVE`
    pub recursive: bool,
    /// CTEs.
    pub ctes: Vec<CommonTableExpr>,
}

/// FIELDS sub-clause of LOAD DATA and SELECT INTO OUTFILE.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldsClause {
    /// `TERMINATED BY`
    pub terminated: Option<Vec<u8>>,
    /// `[OPTIONALLY] ENCLOSED BY`
    pub enclosed: Option<Vec<u8>>,
    /// `OPTIONALLY`
    pub optionally: bool,
    /// `ESCAPED BY`
    pub escaped: Option<Vec<u8>>,
    /// `DEFINED NULL BY`
    pub defined_null_by: Option<Vec<u8>>,
    /// Written as `COLUMNS` instead of `FIELDS`.
    pub columns_keyword: bool,
}

impl FieldsClause {
    /// Returns true if no sub-option is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.terminated.is_none()
            && self.enclosed.is_none()
            && self.escaped.is_none()
            && self.defined_null_by.is_none()
    }
}

/// LINES sub-clause of LOAD DATA and SELECT INTO OUTFILE.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LinesClause {
    /// `STARTING BY`
    pub starting: Option<Vec<u8>>,
    /// `TERMINATED BY`
    pub terminated: Option<Vec<u8>>,
}

/// `INTO OUTFILE`, `INTO DUMPFILE` or `INTO @var, ...`.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectInto {
    /// `INTO OUTFILE 'path' [FIELDS ...] [LINES ...]`
    Outfile {
        /// Target path.
        path: String,
        /// FIELDS clause.
        fields: Option<FieldsClause>,
        /// LINES clause.
        lines: Option<LinesClause>,
    },
    /// `INTO DUMPFILE 'path'`
    Dumpfile(String),
    /// `INTO @a, @b`
    Variables(Vec<Expr>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_join_wraps() {
        let join = Join::single(TableRef::table(TableName::new("t")));
        assert!(join.right.is_none());
        assert_eq!(join.kind, JoinKind::Cross);
    }

    #[test]
    fn test_fields_clause_empty() {
        let mut fields = FieldsClause::default();
        assert!(fields.is_empty());
        fields.terminated = Some(b",".to_vec());
        assert!(!fields.is_empty());
    }

    #[test]
    fn test_set_operator_keywords() {
        assert_eq!(SetOperator::Intersect.as_str(), "INTERSECT");
        assert_eq!(TableName::qualified("db", "t").schema.as_deref(), Some("db"));
    }
}
