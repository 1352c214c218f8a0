//! Abstract syntax tree for MySQL statements.
//!
//! Every node owns its children. Expressions carry the byte [`Span`](crate::Span)
//! they were parsed from; equality ignores spans, so a tree restored to SQL and
//! parsed again compares equal to the original.

mod admin;
mod ddl;
mod dml;
mod expression;
mod hint;
mod partition;
mod query;
mod statement;
mod types;

pub use admin::{
    Admin, AlterUser, Analyze, AnalyzeOptionKind, AnalyzeTarget, AuthOption, BdrRole, Begin,
    BindingSource, BindingTarget, Brie, BrieKind, BrieScope, BrieValue, CalibrateOption,
    CalibrateResource, Completion, CreateBinding, CreateUser, DropStats, DropUser, Explain,
    ExplainTarget, Flush, FlushKind, Grant, GrantLevel, Kill, ObjectType, PlanCacheScope,
    PlanReplayer, PrepareSource, Privilege, QueryWatch, QueryWatchOption, ResourceLimit, Revoke,
    SetAssignment, SetRole, SetTarget, Show, ShowFilter, ShowKind, SlowQueryKind, TableLockType,
    TlsOption, Trace, Traffic, UserOption, UserSpec,
};
pub use ddl::{
    AlterAlgorithm, AlterDatabase, AlterLock, AlterPlacementPolicy, AlterRange, AlterSequence,
    AlterTable, AlterTableSpec, BackgroundSettings, Burstable, ColumnDef, ColumnFormat,
    ColumnOption, ColumnPosition, ColumnStorage, Constraint, ConstraintKind, CreateDatabase,
    CreateDuplicate, CreateIndex, CreatePlacementPolicy, CreateSequence, CreateStatistics,
    CreateTable, CreateView, DatabaseOption, DistributeTable, DropDatabase, DropIndex, DropTable,
    Flashback, GroupPriority, IndexKey, IndexKind, IndexOptions, IndexPart, IndexType,
    PartitionMaintenance, PartitionSelection, PlacementOption, QueryLimit, QueryLimitCondition,
    RecoverTable, ReferenceAction, ReferenceDef, ReferenceMatch, ResourceGroup, ResourceGroupOption,
    RowFormat, RuPerSec, RunawayAction, SequenceOption, SplitRegion, SplitSpec, StatisticsKind,
    TableOption, TemporaryKind, UserIdentity, ViewAlgorithm, ViewCheckOption, WatchKind,
};
pub use dml::{
    Assignment, Call, Delete, DeleteForm, DryRun, ImportInto, ImportSource, Insert, InsertPriority,
    InsertSource, LoadColumn, LoadData, LoadOption, NonTransactionalDml, OnDuplicate, Update,
};
pub use expression::{
    BinaryOp, CastFunction, CastType, ColumnName, Expr, ExprKind, FrameBound, FrameUnit, FuncCall,
    GetFormatSelector, InList, LikeKind, Literal, MatchModifier, NullTreatment, OrderItem, Over,
    Quantifier, StringLiteral, TemporalKind, TimeUnit, TrimDirection, UnaryOp, VarScope, Variable,
    WindowFrame, WindowSpec,
};
pub use hint::{Hint, HintArgs, HintTable};
pub use partition::{
    IntervalPartition, PartitionDef, PartitionKind, PartitionMethod, PartitionOption,
    PartitionOptions, PartitionValues, SubPartitionDef, SystemTimeOptions,
};
pub use query::{
    CommonTableExpr, FieldsClause, GroupBy, IndexHint, IndexHintKind, IndexHintScope, Join,
    JoinKind, Limit, LinesClause, LockClause, LockMode, LockWait, NamedWindow, Query, QueryBody,
    Select, SelectField, SelectInto, SelectOptions, SetOperator, TableName, TableRef, TableSource,
    WithClause,
};
pub use statement::{Statement, StmtNode};
pub use types::{DataType, TypeKind};
