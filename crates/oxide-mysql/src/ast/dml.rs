//! Data manipulation statements.

use super::expression::{ColumnName, Expr, OrderItem};
use super::hint::Hint;
use super::query::{FieldsClause, LinesClause, Limit, Query, TableName, TableRef, WithClause};
use super::statement::Statement;

/// `col = expr` in SET and ON DUPLICATE KEY UPDATE lists.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    /// Target column.
    pub column: ColumnName,
    /// New value.
    pub value: Expr,
}

/// Scheduling modifier of INSERT and REPLACE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InsertPriority {
    #[default]
    Default,
    LowPriority,
    Delayed,
    HighPriority,
}

impl InsertPriority {
    /// Returns the SQL keyword, if any.
    #[must_use]
    pub const fn as_str(self) -> Option<&'static str> {
        match self {
            Self::Default => None,
            Self::LowPriority => Some("LOW_PRIORITY"),
            Self::Delayed => Some("DELAYED"),
            Self::HighPriority => Some("HIGH_PRIORITY"),
        }
    }
}

/// Where inserted rows come from.
#[derive(Debug, Clone, PartialEq)]
pub enum InsertSource {
    /// `VALUES (..), (..)` or `VALUES ROW(..), ROW(..)`.
    Values(Vec<Vec<Expr>>),
    /// `SET a = 1, b = 2`
    Set(Vec<Assignment>),
    /// `SELECT ...`, `TABLE t` or a parenthesized query.
    Query(Box<Query>),
}

/// INSERT or REPLACE.
#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    /// REPLACE instead of INSERT.
    pub replace: bool,
    /// Optimizer hints.
    pub hints: Vec<Hint>,
    /// Scheduling modifier.
    pub priority: InsertPriority,
    /// `IGNORE`
    pub ignore: bool,
    /// Target table.
    pub table: TableName,
    /// `PARTITION (p0)`
    pub partitions: Vec<String>,
    /// Column list.
    pub columns: Vec<ColumnName>,
    /// Row source.
    pub source: InsertSource,
    /// `ON DUPLICATE KEY UPDATE` list.
    pub on_duplicate: Vec<Assignment>,
}

/// Which DELETE syntax was used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeleteForm {
    /// `DELETE FROM t ...`
    Single,
    /// `DELETE t1, t2 FROM refs ...`
    BeforeFrom,
    /// `DELETE FROM t1, t2 USING refs ...`
    Using,
}

/// DELETE.
#[derive(Debug, Clone, PartialEq)]
pub struct Delete {
    /// `WITH` clause.
    pub with: Option<WithClause>,
    /// Optimizer hints.
    pub hints: Vec<Hint>,
    /// `LOW_PRIORITY`
    pub low_priority: bool,
    /// `QUICK`
    pub quick: bool,
    /// `IGNORE`
    pub ignore: bool,
    /// Syntax form.
    pub form: DeleteForm,
    /// Tables rows are deleted from (multi-table forms).
    pub targets: Vec<TableName>,
    /// Table references.
    pub from: TableRef,
    /// WHERE condition.
    pub selection: Option<Expr>,
    /// ORDER BY (single-table only).
    pub order_by: Vec<OrderItem>,
    /// LIMIT (single-table only).
    pub limit: Option<Limit>,
}

/// UPDATE.
#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    /// `WITH` clause.
    pub with: Option<WithClause>,
    /// Optimizer hints.
    pub hints: Vec<Hint>,
    /// `LOW_PRIORITY`
    pub low_priority: bool,
    /// `IGNORE`
    pub ignore: bool,
    /// Table references.
    pub tables: TableRef,
    /// SET list.
    pub assignments: Vec<Assignment>,
    /// WHERE condition.
    pub selection: Option<Expr>,
    /// ORDER BY (single-table only).
    pub order_by: Vec<OrderItem>,
    /// LIMIT (single-table only).
    pub limit: Option<Limit>,
}

impl Update {
    /// Returns true for the multi-table form.
    #[must_use]
    pub fn is_multi_table(&self) -> bool {
        match &self.tables {
            TableRef::Join(join) => join.right.is_some() || !matches!(join.left, TableRef::Table(_)),
            _ => true,
        }
    }
}

/// How rows that duplicate a unique key are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OnDuplicate {
    /// Fail the statement.
    #[default]
    Error,
    Ignore,
    Replace,
}

/// A target of the LOAD DATA / IMPORT INTO column list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LoadColumn {
    /// A table column.
    Column(ColumnName),
    /// A user variable (`@v`).
    Variable(String),
}

/// `name [= value]` in a WITH option list.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadOption {
    /// Lower-case option name.
    pub name: String,
    /// Option value.
    pub value: Option<Expr>,
}

/// LOAD DATA.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadData {
    /// `LOW_PRIORITY`
    pub low_priority: bool,
    /// `LOCAL`
    pub local: bool,
    /// Source file path.
    pub path: String,
    /// `FORMAT 'name'`
    pub format: Option<String>,
    /// Duplicate handling; LOCAL defaults to IGNORE.
    pub on_duplicate: OnDuplicate,
    /// Target table.
    pub table: TableName,
    /// `CHARACTER SET`
    pub charset: Option<String>,
    /// FIELDS clause.
    pub fields: Option<FieldsClause>,
    /// LINES clause.
    pub lines: Option<LinesClause>,
    /// `IGNORE n LINES`
    pub ignore_lines: Option<u64>,
    /// Column list.
    pub columns: Vec<LoadColumn>,
    /// SET list.
    pub set: Vec<Assignment>,
    /// WITH options.
    pub options: Vec<LoadOption>,
}

/// Source of IMPORT INTO.
#[derive(Debug, Clone, PartialEq)]
pub enum ImportSource {
    /// `FROM 'path'`
    Path(String),
    /// `FROM SELECT ...`
    Query(Box<Query>),
}

/// IMPORT INTO.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportInto {
    /// Target table.
    pub table: TableName,
    /// Column list.
    pub columns: Vec<LoadColumn>,
    /// SET list.
    pub set: Vec<Assignment>,
    /// Data source.
    pub source: ImportSource,
    /// `FORMAT 'name'`
    pub format: Option<String>,
    /// WITH options.
    pub options: Vec<LoadOption>,
}

/// `DRY RUN` or `DRY RUN QUERY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DryRun {
    /// Print the split statements.
    Plain,
    /// Print the shard query.
    Query,
}

/// `BATCH [ON col] LIMIT n [DRY RUN [QUERY]] dml`.
#[derive(Debug, Clone, PartialEq)]
pub struct NonTransactionalDml {
    /// Shard column.
    pub shard_column: Option<ColumnName>,
    /// Batch size.
    pub limit: u64,
    /// Dry-run mode.
    pub dry_run: Option<DryRun>,
    /// The DML statement.
    pub dml: Box<Statement>,
}

/// `CALL proc(args)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    /// Procedure name.
    pub procedure: TableName,
    /// Arguments.
    pub args: Vec<Expr>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::query::{Join, TableRef};

    fn update(tables: TableRef) -> Update {
        Update {
            with: None,
            hints: Vec::new(),
            low_priority: false,
            ignore: false,
            tables,
            assignments: Vec::new(),
            selection: None,
            order_by: Vec::new(),
            limit: None,
        }
    }

    #[test]
    fn test_update_multi_table_detection() {
        let single = TableRef::Join(Box::new(Join::single(TableRef::table(TableName::new("t")))));
        assert!(!update(single).is_multi_table());

        let multi = TableRef::Join(Box::new(Join::cross(
            TableRef::table(TableName::new("t1")),
            TableRef::table(TableName::new("t2")),
        )));
        assert!(update(multi).is_multi_table());
    }

    #[test]
    fn test_priority_keywords() {
        assert_eq!(InsertPriority::Default.as_str(), None);
        assert_eq!(InsertPriority::Delayed.as_str(), Some("DELAYED"));
    }
}
