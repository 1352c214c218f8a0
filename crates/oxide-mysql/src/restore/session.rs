//! SET, transactions, prepared statements and table locks.

use super::{Restore, RestoreCtx, RestoreResult};
use crate::ast::{
    Begin, Completion, Expr, PrepareSource, SetAssignment, SetRole, SetTarget, TableLockType,
    TableName, UserIdentity, VarScope,
};

impl Restore for SetTarget {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        match self {
            Self::User(name) => {
                ctx.write_plain("@")?;
                ctx.write_name(name)
            }
            Self::System { name, scope } => {
                ctx.write_plain("@@")?;
                match scope {
                    VarScope::Implicit => {}
                    VarScope::Global => ctx.write_keyword("GLOBAL.")?,
                    VarScope::Session => ctx.write_keyword("SESSION.")?,
                    VarScope::Instance => ctx.write_keyword("INSTANCE.")?,
                }
                ctx.write_name(name)
            }
        }
    }
}

impl Restore for SetAssignment {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        match self {
            Self::Variable { target, value } => {
                target.restore(ctx)?;
                ctx.write_plain("=")?;
                match value {
                    Some(value) => value.restore(ctx),
                    None => ctx.write_keyword("DEFAULT"),
                }
            }
            Self::Names { charset, collate } => {
                ctx.write_keyword("NAMES ")?;
                let Some(charset) = charset else {
                    return ctx.write_keyword("DEFAULT");
                };
                ctx.write_keyword(charset)?;
                if let Some(collate) = collate {
                    ctx.write_keyword(" COLLATE ")?;
                    ctx.write_plain(collate)?;
                }
                Ok(())
            }
            Self::Charset(charset) => {
                ctx.write_keyword("CHARSET ")?;
                ctx.write_keyword(charset.as_deref().unwrap_or("DEFAULT"))
            }
        }
    }
}

/// Writes `SET a=1, @b=2`.
pub(super) fn write_set(ctx: &mut RestoreCtx<'_>, assignments: &[SetAssignment]) -> RestoreResult {
    ctx.write_keyword("SET ")?;
    ctx.write_list(assignments, ", ")
}

impl Restore for SetRole {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        match self {
            Self::Default => ctx.write_keyword("DEFAULT"),
            Self::None => ctx.write_keyword("NONE"),
            Self::All(except) => {
                ctx.write_keyword("ALL")?;
                if !except.is_empty() {
                    ctx.write_keyword(" EXCEPT ")?;
                    ctx.write_list(except, ", ")?;
                }
                Ok(())
            }
            Self::Roles(roles) => ctx.write_list(roles, ", "),
        }
    }
}

pub(super) fn write_set_password(
    ctx: &mut RestoreCtx<'_>,
    user: Option<&UserIdentity>,
    password: &str,
) -> RestoreResult {
    ctx.write_keyword("SET PASSWORD")?;
    if let Some(user) = user {
        ctx.write_keyword(" FOR ")?;
        user.restore(ctx)?;
    }
    ctx.write_plain("=")?;
    ctx.write_string(password)
}

pub(super) fn write_set_default_role(
    ctx: &mut RestoreCtx<'_>,
    roles: &SetRole,
    users: &[UserIdentity],
) -> RestoreResult {
    ctx.write_keyword("SET DEFAULT ROLE ")?;
    roles.restore(ctx)?;
    ctx.write_keyword(" TO ")?;
    ctx.write_list(users, ", ")
}

/// Writes `SET CONFIG component name = value`. The name is kept as it was
/// spelled in the source.
pub(super) fn write_set_config(
    ctx: &mut RestoreCtx<'_>,
    component: Option<&String>,
    instance: Option<&String>,
    name: &str,
    value: &Expr,
) -> RestoreResult {
    ctx.write_keyword("SET CONFIG ")?;
    if let Some(instance) = instance {
        ctx.write_string(instance)?;
    } else if let Some(component) = component {
        ctx.write_keyword(component)?;
    }
    ctx.write_plain(" ")?;
    ctx.write_plain(name)?;
    ctx.write_plain(" = ")?;
    value.restore(ctx)
}

pub(super) fn write_prepare(
    ctx: &mut RestoreCtx<'_>,
    name: &str,
    source: &PrepareSource,
) -> RestoreResult {
    ctx.write_keyword("PREPARE ")?;
    ctx.write_name(name)?;
    ctx.write_keyword(" FROM ")?;
    match source {
        PrepareSource::Text(sql) => ctx.write_string(sql),
        PrepareSource::Variable(var) => {
            ctx.write_plain("@")?;
            ctx.write_name(var)
        }
    }
}

pub(super) fn write_execute(ctx: &mut RestoreCtx<'_>, name: &str, using: &[Expr]) -> RestoreResult {
    ctx.write_keyword("EXECUTE ")?;
    ctx.write_name(name)?;
    if !using.is_empty() {
        ctx.write_keyword(" USING ")?;
        ctx.write_list(using, ",")?;
    }
    Ok(())
}

impl Restore for Begin {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        if !self.start_transaction {
            ctx.write_keyword("BEGIN")?;
            return match self.pessimistic {
                Some(true) => ctx.write_keyword(" PESSIMISTIC"),
                Some(false) => ctx.write_keyword(" OPTIMISTIC"),
                None => Ok(()),
            };
        }
        ctx.write_keyword("START TRANSACTION")?;
        match self.read_only {
            Some(false) => ctx.write_keyword(" READ WRITE")?,
            Some(true) => {
                ctx.write_keyword(" READ ONLY")?;
                if let Some(ts) = &self.as_of {
                    ctx.write_keyword(" AS OF TIMESTAMP ")?;
                    ts.restore(ctx)?;
                }
            }
            None => {}
        }
        if self.consistent_snapshot {
            ctx.write_keyword(" WITH CONSISTENT SNAPSHOT")?;
        } else if self.causal_consistency_only {
            ctx.write_keyword(" WITH CAUSAL CONSISTENCY ONLY")?;
        }
        Ok(())
    }
}

pub(super) fn write_completion(ctx: &mut RestoreCtx<'_>, completion: Completion) -> RestoreResult {
    match completion {
        Completion::Default => Ok(()),
        Completion::Chain => ctx.write_keyword(" AND CHAIN"),
        Completion::NoChain => ctx.write_keyword(" AND NO CHAIN"),
        Completion::Release => ctx.write_keyword(" RELEASE"),
        Completion::NoRelease => ctx.write_keyword(" NO RELEASE"),
    }
}

pub(super) fn write_rollback(
    ctx: &mut RestoreCtx<'_>,
    savepoint: Option<&String>,
    completion: Completion,
) -> RestoreResult {
    ctx.write_keyword("ROLLBACK")?;
    if let Some(savepoint) = savepoint {
        ctx.write_keyword(" TO ")?;
        return ctx.write_name(savepoint);
    }
    write_completion(ctx, completion)
}

pub(super) fn write_lock_tables(
    ctx: &mut RestoreCtx<'_>,
    locks: &[(TableName, TableLockType)],
) -> RestoreResult {
    ctx.write_keyword("LOCK TABLES ")?;
    for (i, (table, lock)) in locks.iter().enumerate() {
        if i > 0 {
            ctx.write_plain(", ")?;
        }
        ctx.write_table_name(table)?;
        ctx.write_plain(" ")?;
        ctx.write_keyword(lock.as_str())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::restore::{restore, RestoreFlags};
    use crate::Parser;

    fn round_trip(sql: &str) -> String {
        let parser = Parser::new();
        let stmt = parser.parse_one_stmt(sql, "", "").unwrap().stmt;
        let restored = restore(&stmt, RestoreFlags::DEFAULT).unwrap();
        let again = parser.parse_one_stmt(&restored, "", "").unwrap().stmt;
        assert_eq!(again, stmt, "{restored}");
        restored
    }

    #[test]
    fn test_set_variables() {
        assert_eq!(
            round_trip("SET SESSION TRANSACTION ISOLATION LEVEL REPEATABLE READ"),
            "SET @@SESSION.`tx_isolation`=_UTF8MB4'REPEATABLE-READ'"
        );
        assert_eq!(
            round_trip("set transaction read only"),
            "SET @@SESSION.`tx_read_only`=_UTF8MB4'1'"
        );
        assert_eq!(
            round_trip("set @a = 1, global max_connections = default, @@sql_mode = 'ansi'"),
            "SET @`a`=1, @@GLOBAL.`max_connections`=DEFAULT, @@`sql_mode`=_UTF8MB4'ansi'"
        );
        assert_eq!(round_trip("set autocommit = on"), "SET @@SESSION.`autocommit`=_UTF8MB4'ON'");
    }

    #[test]
    fn test_set_names_and_charset() {
        assert_eq!(
            round_trip("set names utf8mb4 collate utf8mb4_bin"),
            "SET NAMES UTF8MB4 COLLATE utf8mb4_bin"
        );
        assert_eq!(round_trip("set names default"), "SET NAMES DEFAULT");
        assert_eq!(round_trip("set character set latin1"), "SET CHARSET LATIN1");
        assert_eq!(round_trip("set charset default"), "SET CHARSET DEFAULT");
    }

    #[test]
    fn test_set_other_forms() {
        assert_eq!(
            round_trip("set password for 'u'@'localhost' = password('x')"),
            "SET PASSWORD FOR 'u'@'localhost'='x'"
        );
        assert_eq!(round_trip("set role all except r1"), "SET ROLE ALL EXCEPT 'r1'@'%'");
        assert_eq!(
            round_trip("set default role r1, r2 to u"),
            "SET DEFAULT ROLE 'r1'@'%', 'r2'@'%' TO 'u'@'%'"
        );
        assert_eq!(round_trip("set resource group rg1"), "SET RESOURCE GROUP `rg1`");
        assert_eq!(
            round_trip("set binding disabled for sql digest 'abc'"),
            "SET BINDING DISABLED FOR SQL DIGEST 'abc'"
        );
        assert_eq!(
            round_trip("set config tikv split.qps-threshold = 10"),
            "SET CONFIG TIKV split.qps-threshold = 10"
        );
    }

    #[test]
    fn test_transactions() {
        assert_eq!(round_trip("begin pessimistic"), "BEGIN PESSIMISTIC");
        assert_eq!(
            round_trip("start transaction read only as of timestamp '2024-01-01'"),
            "START TRANSACTION READ ONLY AS OF TIMESTAMP _UTF8MB4'2024-01-01'"
        );
        assert_eq!(
            round_trip("start transaction with consistent snapshot"),
            "START TRANSACTION WITH CONSISTENT SNAPSHOT"
        );
        assert_eq!(round_trip("commit work and chain"), "COMMIT AND CHAIN");
        assert_eq!(round_trip("rollback to savepoint sp"), "ROLLBACK TO `sp`");
        assert_eq!(round_trip("rollback release"), "ROLLBACK RELEASE");
    }

    #[test]
    fn test_prepared_and_locks() {
        assert_eq!(
            round_trip("prepare s from 'select ?'"),
            "PREPARE `s` FROM 'select ?'"
        );
        assert_eq!(round_trip("prepare s from @sql"), "PREPARE `s` FROM @`sql`");
        assert_eq!(round_trip("execute s using @a, @b"), "EXECUTE `s` USING @`a`,@`b`");
        assert_eq!(
            round_trip("lock tables t read local, u as x low_priority write"),
            "LOCK TABLES `t` READ LOCAL, `u` WRITE"
        );
    }
}
