//! Partitioning clause AST types.

use super::expression::{ColumnName, Expr, TimeUnit};

/// Partitioning strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartitionKind {
    Hash,
    Key,
    Range,
    List,
    SystemTime,
}

impl PartitionKind {
    /// Returns the SQL keyword.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hash => "HASH",
            Self::Key => "KEY",
            Self::Range => "RANGE",
            Self::List => "LIST",
            Self::SystemTime => "SYSTEM_TIME",
        }
    }
}

/// `INTERVAL (n unit) FIRST PARTITION LESS THAN (..) LAST PARTITION LESS THAN (..)`.
///
/// Expanding the interval into explicit partitions is left to consumers.
#[derive(Debug, Clone, PartialEq)]
pub struct IntervalPartition {
    /// Interval length.
    pub interval: Expr,
    /// Interval unit for temporal columns.
    pub unit: Option<TimeUnit>,
    /// End of the first range.
    pub first: Option<Expr>,
    /// End of the last range.
    pub last: Option<Expr>,
    /// `NULL PARTITION`
    pub null_partition: bool,
    /// `MAXVALUE PARTITION`
    pub maxvalue_partition: bool,
}

/// `SYSTEM_TIME` options.
#[derive(Debug, Clone, PartialEq)]
pub struct SystemTimeOptions {
    /// `INTERVAL n unit`
    pub interval: Option<(Expr, TimeUnit)>,
    /// `LIMIT n`
    pub limit: Option<u64>,
}

/// The `PARTITION BY` or `SUBPARTITION BY` part.
#[derive(Debug, Clone, PartialEq)]
pub struct PartitionMethod {
    /// Strategy.
    pub kind: PartitionKind,
    /// `LINEAR`
    pub linear: bool,
    /// Partitioning expression of HASH, RANGE and LIST.
    pub expr: Option<Expr>,
    /// Column list of KEY and the COLUMNS variants.
    pub columns: Vec<ColumnName>,
    /// `RANGE COLUMNS` / `LIST COLUMNS`.
    pub columns_form: bool,
    /// `KEY ALGORITHM = n`
    pub key_algorithm: Option<u64>,
    /// INTERVAL partitioning.
    pub interval: Option<IntervalPartition>,
    /// SYSTEM_TIME options.
    pub system_time: Option<SystemTimeOptions>,
    /// `PARTITIONS n` or `SUBPARTITIONS n`.
    pub count: Option<u64>,
}

impl PartitionMethod {
    /// Creates a method of the given kind with no arguments.
    #[must_use]
    pub const fn new(kind: PartitionKind) -> Self {
        Self {
            kind,
            linear: false,
            expr: None,
            columns: Vec::new(),
            columns_form: false,
            key_algorithm: None,
            interval: None,
            system_time: None,
            count: None,
        }
    }
}

/// Bound or value list of a partition.
#[derive(Debug, Clone, PartialEq)]
pub enum PartitionValues {
    /// No VALUES clause.
    None,
    /// `VALUES LESS THAN (..)`; MAXVALUE is [`ExprKind::MaxValue`](super::ExprKind::MaxValue).
    LessThan(Vec<Expr>),
    /// `VALUES IN (..)`; tuples are row expressions.
    In {
        /// Listed values.
        values: Vec<Expr>,
        /// `DEFAULT` appeared in the list.
        default: bool,
    },
    /// `HISTORY`
    History,
    /// `CURRENT`
    Current,
}

/// Options of a partition or subpartition definition.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PartitionOption {
    Engine(String),
    Comment(String),
    DataDirectory(String),
    IndexDirectory(String),
    MaxRows(u64),
    MinRows(u64),
    Tablespace(String),
    Nodegroup(u64),
    PlacementPolicy(String),
    Attributes(String),
    SecondaryEngineAttribute(String),
}

/// `SUBPARTITION name [options]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SubPartitionDef {
    /// Name.
    pub name: String,
    /// Options.
    pub options: Vec<PartitionOption>,
}

/// `PARTITION name [VALUES ...] [options] [(subpartitions)]`.
#[derive(Debug, Clone, PartialEq)]
pub struct PartitionDef {
    /// Name.
    pub name: String,
    /// Values clause.
    pub values: PartitionValues,
    /// Options.
    pub options: Vec<PartitionOption>,
    /// Subpartitions.
    pub subs: Vec<SubPartitionDef>,
}

/// A complete partitioning clause.
#[derive(Debug, Clone, PartialEq)]
pub struct PartitionOptions {
    /// Partitioning method.
    pub method: PartitionMethod,
    /// Subpartitioning method (HASH or KEY).
    pub sub: Option<PartitionMethod>,
    /// Explicit definitions.
    pub defs: Vec<PartitionDef>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_defaults() {
        let method = PartitionMethod::new(PartitionKind::Key);
        assert!(!method.linear);
        assert!(method.columns.is_empty());
        assert_eq!(method.kind.as_str(), "KEY");
    }
}
