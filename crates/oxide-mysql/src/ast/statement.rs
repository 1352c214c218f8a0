//! Top-level statements.

use crate::lexer::Span;

use super::admin::{
    Admin, AlterUser, Analyze, Begin, BindingTarget, Brie, CalibrateResource, Completion,
    CreateBinding, CreateUser, DropStats, DropUser, Explain, Flush, Grant, Kill, PlanReplayer,
    PrepareSource, QueryWatch, Revoke, SetAssignment, SetRole, Show, TableLockType, Trace,
    Traffic,
};
use super::ddl::{
    AlterDatabase, AlterPlacementPolicy, AlterRange, AlterSequence, AlterTable, CreateDatabase,
    CreateIndex, CreatePlacementPolicy, CreateSequence, CreateStatistics, CreateTable, CreateView,
    DistributeTable, DropDatabase, DropIndex, DropTable, Flashback, RecoverTable, ResourceGroup,
    SplitRegion, UserIdentity,
};
use super::dml::{Call, Delete, ImportInto, Insert, LoadData, NonTransactionalDml, Update};
use super::expression::Expr;
use super::query::{Query, TableName};

/// A parsed SQL statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    // Queries and DML
    /// SELECT, set operations, `VALUES ...` and `TABLE t`.
    Select(Box<Query>),
    /// INSERT and REPLACE.
    Insert(Box<Insert>),
    Update(Box<Update>),
    Delete(Box<Delete>),
    LoadData(Box<LoadData>),
    ImportInto(Box<ImportInto>),
    NonTransactionalDml(Box<NonTransactionalDml>),
    Call(Box<Call>),
    /// `DO expr, ...`
    Do(Vec<Expr>),

    // DDL
    CreateTable(Box<CreateTable>),
    AlterTable(Box<AlterTable>),
    /// DROP TABLE and DROP VIEW.
    DropTable(Box<DropTable>),
    /// `RENAME TABLE a TO b, ...`
    RenameTable(Vec<(TableName, TableName)>),
    /// `TRUNCATE [TABLE] t`
    Truncate(TableName),
    CreateView(Box<CreateView>),
    CreateIndex(Box<CreateIndex>),
    DropIndex(Box<DropIndex>),
    CreateDatabase(Box<CreateDatabase>),
    AlterDatabase(Box<AlterDatabase>),
    DropDatabase(Box<DropDatabase>),
    CreateSequence(Box<CreateSequence>),
    AlterSequence(Box<AlterSequence>),
    /// `DROP SEQUENCE [IF EXISTS] s, ...`
    DropSequence {
        /// `IF EXISTS`
        if_exists: bool,
        /// Sequences.
        names: Vec<TableName>,
    },
    CreatePlacementPolicy(Box<CreatePlacementPolicy>),
    AlterPlacementPolicy(Box<AlterPlacementPolicy>),
    /// `DROP PLACEMENT POLICY [IF EXISTS] p`
    DropPlacementPolicy {
        /// `IF EXISTS`
        if_exists: bool,
        /// Policy.
        name: String,
    },
    CreateResourceGroup(Box<ResourceGroup>),
    AlterResourceGroup(Box<ResourceGroup>),
    /// `DROP RESOURCE GROUP [IF EXISTS] rg`
    DropResourceGroup {
        /// `IF EXISTS`
        if_exists: bool,
        /// Group.
        name: String,
    },
    CreateStatistics(Box<CreateStatistics>),
    /// `DROP STATISTICS s`
    DropStatistics(String),
    Flashback(Box<Flashback>),
    RecoverTable(Box<RecoverTable>),
    SplitRegion(Box<SplitRegion>),
    DistributeTable(Box<DistributeTable>),
    AlterRange(Box<AlterRange>),

    // Session and administration
    /// `SET a = 1, NAMES ..., ...`
    Set(Vec<SetAssignment>),
    /// `SET PASSWORD [FOR user] = 'secret'`
    SetPassword {
        /// Account.
        user: Option<UserIdentity>,
        /// New password.
        password: String,
    },
    SetRole(SetRole),
    /// `SET DEFAULT ROLE ... TO users`
    SetDefaultRole {
        /// Roles.
        roles: SetRole,
        /// Accounts.
        users: Vec<UserIdentity>,
    },
    /// `SET BINDING ENABLED | DISABLED FOR ...`
    SetBinding {
        /// ENABLED.
        enabled: bool,
        /// Target.
        target: BindingTarget,
    },
    /// `SET SESSION_STATES 'json'`
    SetSessionStates(String),
    /// `SET CONFIG type|'instance' name = value`
    SetConfig {
        /// Component type, lower-case.
        component: Option<String>,
        /// Instance address.
        instance: Option<String>,
        /// Item name.
        name: String,
        /// Value.
        value: Expr,
    },
    /// `SET RESOURCE GROUP rg`
    SetResourceGroup(String),
    Show(Box<Show>),
    Admin(Box<Admin>),
    Analyze(Box<Analyze>),
    /// `PREPARE s FROM ...`
    Prepare {
        /// Statement name.
        name: String,
        /// SQL source.
        source: PrepareSource,
    },
    /// `EXECUTE s [USING @a, ...]`
    Execute {
        /// Statement name.
        name: String,
        /// User variables.
        using: Vec<Expr>,
    },
    /// `DEALLOCATE PREPARE s`
    Deallocate(String),
    Begin(Box<Begin>),
    /// `COMMIT [WORK] [completion]`
    Commit(Completion),
    /// `ROLLBACK [WORK] [TO [SAVEPOINT] sp | completion]`
    Rollback {
        /// Savepoint.
        savepoint: Option<String>,
        /// Completion type.
        completion: Completion,
    },
    /// `SAVEPOINT sp`
    Savepoint(String),
    /// `RELEASE SAVEPOINT sp`
    ReleaseSavepoint(String),
    /// `LOCK TABLES t READ, ...`
    LockTables(Vec<(TableName, TableLockType)>),
    UnlockTables,
    Flush(Box<Flush>),
    Kill(Kill),
    Explain(Box<Explain>),
    Trace(Box<Trace>),
    PlanReplayer(Box<PlanReplayer>),
    Traffic(Box<Traffic>),
    Brie(Box<Brie>),
    Grant(Box<Grant>),
    Revoke(Box<Revoke>),
    /// `GRANT roles TO users [WITH ADMIN OPTION]`
    GrantRole {
        /// Roles.
        roles: Vec<UserIdentity>,
        /// Accounts.
        users: Vec<UserIdentity>,
    },
    /// `REVOKE roles FROM users`
    RevokeRole {
        /// Roles.
        roles: Vec<UserIdentity>,
        /// Accounts.
        users: Vec<UserIdentity>,
    },
    CreateUser(Box<CreateUser>),
    AlterUser(Box<AlterUser>),
    DropUser(Box<DropUser>),
    /// `RENAME USER a TO b, ...`
    RenameUser(Vec<(UserIdentity, UserIdentity)>),
    /// `ALTER INSTANCE RELOAD TLS [NO ROLLBACK ON ERROR]`
    AlterInstance {
        /// `NO ROLLBACK ON ERROR`
        no_rollback_on_error: bool,
    },
    CreateBinding(Box<CreateBinding>),
    /// `DROP [GLOBAL | SESSION] BINDING FOR ...`
    DropBinding {
        /// GLOBAL.
        global: bool,
        /// Target.
        target: BindingTarget,
    },
    CalibrateResource(Box<CalibrateResource>),
    QueryWatch(Box<QueryWatch>),
    DropStats(Box<DropStats>),
    /// `LOAD STATS 'path'`
    LoadStats(String),
    /// `LOCK STATS t1, t2`
    LockStats(Vec<TableName>),
    /// `UNLOCK STATS t1, t2`
    UnlockStats(Vec<TableName>),
    /// `USE db`
    Use(String),
    /// `HELP 'topic'`
    Help(String),
    Shutdown,
    Restart,
}

impl Statement {
    /// Returns true for statements that only read data.
    #[must_use]
    pub fn is_read_only(&self) -> bool {
        match self {
            Self::Select(query) => query.into.is_none() && query.lock.is_none(),
            Self::Show(_) | Self::Explain(_) | Self::Help(_) | Self::Use(_) => true,
            _ => false,
        }
    }
}

/// A statement together with where it came from.
#[derive(Debug, Clone)]
pub struct StmtNode {
    /// The statement.
    pub stmt: Statement,
    /// Byte range of the statement text.
    pub span: Span,
    /// The statement's source text, up to but excluding the `;`.
    pub text: String,
}

impl PartialEq for StmtNode {
    fn eq(&self, other: &Self) -> bool {
        self.stmt == other.stmt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::query::QueryBody;

    #[test]
    fn test_read_only_classification() {
        let select = Statement::Select(Box::new(Query::new(QueryBody::Select(Box::default()))));
        assert!(select.is_read_only());
        assert!(Statement::Help("x".into()).is_read_only());
        assert!(!Statement::Truncate(TableName::new("t")).is_read_only());
    }

    #[test]
    fn test_node_equality_ignores_text() {
        let a = StmtNode {
            stmt: Statement::Shutdown,
            span: Span::new(0, 8),
            text: "shutdown".into(),
        };
        let b = StmtNode {
            stmt: Statement::Shutdown,
            span: Span::new(10, 18),
            text: "SHUTDOWN".into(),
        };
        assert_eq!(a, b);
    }
}
