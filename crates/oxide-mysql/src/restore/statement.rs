//! Statement dispatch.

use super::cluster::{write_binding_scope, write_resource_group};
use super::ddl::write_if_exists;
use super::security::{write_rename_user, write_role_grant};
use super::session::{
    write_completion, write_execute, write_lock_tables, write_prepare, write_rollback, write_set,
    write_set_config, write_set_default_role, write_set_password,
};
use super::{Restore, RestoreCtx, RestoreResult};
use crate::ast::Statement;

impl Restore for Statement {
    #[allow(clippy::too_many_lines)]
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        match self {
            Self::Select(query) => query.restore(ctx),
            Self::Insert(insert) => insert.restore(ctx),
            Self::Update(update) => update.restore(ctx),
            Self::Delete(delete) => delete.restore(ctx),
            Self::LoadData(load) => load.restore(ctx),
            Self::ImportInto(import) => import.restore(ctx),
            Self::NonTransactionalDml(dml) => dml.restore(ctx),
            Self::Call(call) => call.restore(ctx),
            Self::Do(exprs) => {
                ctx.write_keyword("DO ")?;
                ctx.write_list(exprs, ", ")
            }

            Self::CreateTable(create) => create.restore(ctx),
            Self::AlterTable(alter) => alter.restore(ctx),
            Self::DropTable(drop) => drop.restore(ctx),
            Self::RenameTable(pairs) => {
                ctx.write_keyword("RENAME TABLE ")?;
                for (i, (old, new)) in pairs.iter().enumerate() {
                    if i > 0 {
                        ctx.write_plain(", ")?;
                    }
                    ctx.write_table_name(old)?;
                    ctx.write_keyword(" TO ")?;
                    ctx.write_table_name(new)?;
                }
                Ok(())
            }
            Self::Truncate(table) => {
                ctx.write_keyword("TRUNCATE TABLE ")?;
                ctx.write_table_name(table)
            }
            Self::CreateView(view) => view.restore(ctx),
            Self::CreateIndex(index) => index.restore(ctx),
            Self::DropIndex(index) => index.restore(ctx),
            Self::CreateDatabase(db) => db.restore(ctx),
            Self::AlterDatabase(db) => db.restore(ctx),
            Self::DropDatabase(db) => db.restore(ctx),
            Self::CreateSequence(seq) => seq.restore(ctx),
            Self::AlterSequence(seq) => seq.restore(ctx),
            Self::DropSequence { if_exists, names } => {
                ctx.write_keyword("DROP SEQUENCE ")?;
                write_if_exists(ctx, *if_exists)?;
                ctx.write_table_names(names)
            }
            Self::CreatePlacementPolicy(policy) => policy.restore(ctx),
            Self::AlterPlacementPolicy(policy) => policy.restore(ctx),
            Self::DropPlacementPolicy { if_exists, name } => {
                ctx.write_keyword("DROP PLACEMENT POLICY ")?;
                write_if_exists(ctx, *if_exists)?;
                ctx.write_name(name)
            }
            Self::CreateResourceGroup(group) => write_resource_group(ctx, group, true),
            Self::AlterResourceGroup(group) => write_resource_group(ctx, group, false),
            Self::DropResourceGroup { if_exists, name } => {
                ctx.write_keyword("DROP RESOURCE GROUP ")?;
                write_if_exists(ctx, *if_exists)?;
                ctx.write_name(name)
            }
            Self::CreateStatistics(stats) => stats.restore(ctx),
            Self::DropStatistics(name) => {
                ctx.write_keyword("DROP STATISTICS ")?;
                ctx.write_name(name)
            }
            Self::Flashback(flashback) => flashback.restore(ctx),
            Self::RecoverTable(recover) => recover.restore(ctx),
            Self::SplitRegion(split) => split.restore(ctx),
            Self::DistributeTable(distribute) => distribute.restore(ctx),
            Self::AlterRange(range) => range.restore(ctx),

            Self::Set(assignments) => write_set(ctx, assignments),
            Self::SetPassword { user, password } => write_set_password(ctx, user.as_ref(), password),
            Self::SetRole(role) => {
                ctx.write_keyword("SET ROLE ")?;
                role.restore(ctx)
            }
            Self::SetDefaultRole { roles, users } => write_set_default_role(ctx, roles, users),
            Self::SetBinding { enabled, target } => {
                ctx.write_keyword(if *enabled {
                    "SET BINDING ENABLED FOR "
                } else {
                    "SET BINDING DISABLED FOR "
                })?;
                target.restore(ctx)
            }
            Self::SetSessionStates(states) => {
                ctx.write_keyword("SET SESSION_STATES ")?;
                ctx.write_string(states)
            }
            Self::SetConfig {
                component,
                instance,
                name,
                value,
            } => write_set_config(ctx, component.as_ref(), instance.as_ref(), name, value),
            Self::SetResourceGroup(group) => {
                ctx.write_keyword("SET RESOURCE GROUP ")?;
                ctx.write_name(group)
            }
            Self::Show(show) => show.restore(ctx),
            Self::Admin(admin) => admin.restore(ctx),
            Self::Analyze(analyze) => analyze.restore(ctx),
            Self::Prepare { name, source } => write_prepare(ctx, name, source),
            Self::Execute { name, using } => write_execute(ctx, name, using),
            Self::Deallocate(name) => {
                ctx.write_keyword("DEALLOCATE PREPARE ")?;
                ctx.write_name(name)
            }
            Self::Begin(begin) => begin.restore(ctx),
            Self::Commit(completion) => {
                ctx.write_keyword("COMMIT")?;
                write_completion(ctx, *completion)
            }
            Self::Rollback {
                savepoint,
                completion,
            } => write_rollback(ctx, savepoint.as_ref(), *completion),
            Self::Savepoint(name) => {
                ctx.write_keyword("SAVEPOINT ")?;
                ctx.write_name(name)
            }
            Self::ReleaseSavepoint(name) => {
                ctx.write_keyword("RELEASE SAVEPOINT ")?;
                ctx.write_name(name)
            }
            Self::LockTables(locks) => write_lock_tables(ctx, locks),
            Self::UnlockTables => ctx.write_keyword("UNLOCK TABLES"),
            Self::Flush(flush) => flush.restore(ctx),
            Self::Kill(kill) => kill.restore(ctx),
            Self::Explain(explain) => explain.restore(ctx),
            Self::Trace(trace) => trace.restore(ctx),
            Self::PlanReplayer(replayer) => replayer.restore(ctx),
            Self::Traffic(traffic) => traffic.restore(ctx),
            Self::Brie(brie) => brie.restore(ctx),
            Self::Grant(grant) => grant.restore(ctx),
            Self::Revoke(revoke) => revoke.restore(ctx),
            Self::GrantRole { roles, users } => write_role_grant(ctx, true, roles, users),
            Self::RevokeRole { roles, users } => write_role_grant(ctx, false, roles, users),
            Self::CreateUser(create) => create.restore(ctx),
            Self::AlterUser(alter) => alter.restore(ctx),
            Self::DropUser(drop) => drop.restore(ctx),
            Self::RenameUser(pairs) => write_rename_user(ctx, pairs),
            Self::AlterInstance {
                no_rollback_on_error,
            } => {
                ctx.write_keyword("ALTER INSTANCE RELOAD TLS")?;
                if *no_rollback_on_error {
                    ctx.write_keyword(" NO ROLLBACK ON ERROR")?;
                }
                Ok(())
            }
            Self::CreateBinding(binding) => binding.restore(ctx),
            Self::DropBinding { global, target } => {
                ctx.write_keyword("DROP ")?;
                write_binding_scope(ctx, *global)?;
                ctx.write_keyword(" FOR ")?;
                target.restore(ctx)
            }
            Self::CalibrateResource(calibrate) => calibrate.restore(ctx),
            Self::QueryWatch(watch) => watch.restore(ctx),
            Self::DropStats(stats) => stats.restore(ctx),
            Self::LoadStats(path) => {
                ctx.write_keyword("LOAD STATS ")?;
                ctx.write_string(path)
            }
            Self::LockStats(tables) => {
                ctx.write_keyword("LOCK STATS ")?;
                ctx.write_table_names(tables)
            }
            Self::UnlockStats(tables) => {
                ctx.write_keyword("UNLOCK STATS ")?;
                ctx.write_table_names(tables)
            }
            Self::Use(db) => {
                ctx.write_keyword("USE ")?;
                ctx.write_name(db)
            }
            Self::Help(topic) => {
                ctx.write_keyword("HELP ")?;
                ctx.write_string(topic)
            }
            Self::Shutdown => ctx.write_keyword("SHUTDOWN"),
            Self::Restart => ctx.write_keyword("RESTART"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::restore::{restore, restore_with_default_db, RestoreFlags};
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
    fn test_simple_statements() {
        assert_eq!(round_trip("do 1, 2"), "DO 1, 2");
        assert_eq!(
            round_trip("rename table a to b, c to d"),
            "RENAME TABLE `a` TO `b`, `c` TO `d`"
        );
        assert_eq!(round_trip("truncate t"), "TRUNCATE TABLE `t`");
        assert_eq!(
            round_trip("drop sequence if exists s1, s2"),
            "DROP SEQUENCE IF EXISTS `s1`, `s2`"
        );
        assert_eq!(
            round_trip("drop placement policy p"),
            "DROP PLACEMENT POLICY `p`"
        );
        assert_eq!(
            round_trip("drop resource group if exists rg"),
            "DROP RESOURCE GROUP IF EXISTS `rg`"
        );
        assert_eq!(round_trip("use db1"), "USE `db1`");
        assert_eq!(round_trip("help 'select'"), "HELP 'select'");
        assert_eq!(round_trip("shutdown"), "SHUTDOWN");
        assert_eq!(
            round_trip("alter instance reload tls no rollback on error"),
            "ALTER INSTANCE RELOAD TLS NO ROLLBACK ON ERROR"
        );
    }

    #[test]
    fn test_session_statements() {
        assert_eq!(round_trip("deallocate prepare s"), "DEALLOCATE PREPARE `s`");
        assert_eq!(round_trip("savepoint sp"), "SAVEPOINT `sp`");
        assert_eq!(round_trip("release savepoint sp"), "RELEASE SAVEPOINT `sp`");
        assert_eq!(round_trip("unlock tables"), "UNLOCK TABLES");
        assert_eq!(round_trip("set session_states '{}'"), "SET SESSION_STATES '{}'");
        assert_eq!(round_trip("load stats '/tmp/s.json'"), "LOAD STATS '/tmp/s.json'");
        assert_eq!(round_trip("lock stats t1, t2"), "LOCK STATS `t1`, `t2`");
        assert_eq!(round_trip("unlock stats t1"), "UNLOCK STATS `t1`");
    }

    #[test]
    fn test_binding_statements() {
        assert_eq!(
            round_trip("drop global binding for select * from t"),
            "DROP GLOBAL BINDING FOR SELECT * FROM `t`"
        );
        assert_eq!(
            round_trip("drop session binding for sql digest 'abc'"),
            "DROP SESSION BINDING FOR SQL DIGEST 'abc'"
        );
    }

    #[test]
    fn test_default_db_qualification() {
        let stmt = Parser::new()
            .parse_one_stmt("truncate table t", "", "")
            .unwrap()
            .stmt;
        assert_eq!(
            restore_with_default_db(&stmt, RestoreFlags::DEFAULT, "test").unwrap(),
            "TRUNCATE TABLE `test`.`t`"
        );
    }

    #[test]
    fn test_display_uses_default_flags() {
        let stmt = Parser::new().parse_one_stmt("use d", "", "").unwrap().stmt;
        assert_eq!(stmt.to_string(), "USE `d`");
    }
}
