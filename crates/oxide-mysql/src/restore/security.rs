//! Accounts, roles and privileges.

use super::{Restore, RestoreCtx, RestoreResult};
use crate::ast::{
    AlterUser, AuthOption, CreateUser, DropUser, Grant, GrantLevel, ObjectType, Privilege, Revoke,
    TlsOption, UserIdentity, UserOption, UserSpec,
};

impl Restore for UserIdentity {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        if self.current_user {
            return ctx.write_keyword("CURRENT_USER");
        }
        ctx.write_string(&self.user)?;
        ctx.write_plain("@")?;
        ctx.write_string(&self.host)
    }
}

impl Restore for AuthOption {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        ctx.write_keyword("IDENTIFIED ")?;
        match self {
            Self::Password(password) => {
                ctx.write_keyword("BY ")?;
                ctx.write_string(password)
            }
            Self::Hash(hash) => {
                ctx.write_keyword("BY PASSWORD ")?;
                ctx.write_string(hash)
            }
            Self::Plugin {
                plugin,
                password,
                hash,
            } => {
                ctx.write_keyword("WITH ")?;
                ctx.write_string(plugin)?;
                if let Some(password) = password {
                    ctx.write_keyword(" BY ")?;
                    ctx.write_string(password)?;
                } else if let Some(hash) = hash {
                    ctx.write_keyword(" AS ")?;
                    ctx.write_string(hash)?;
                }
                Ok(())
            }
        }
    }
}

impl Restore for UserSpec {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        self.user.restore(ctx)?;
        if let Some(auth) = &self.auth {
            ctx.write_plain(" ")?;
            auth.restore(ctx)?;
        }
        Ok(())
    }
}

impl Restore for TlsOption {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        let (keyword, value) = match self {
            Self::None => return ctx.write_keyword("NONE"),
            Self::Ssl => return ctx.write_keyword("SSL"),
            Self::X509 => return ctx.write_keyword("X509"),
            Self::Cipher(v) => ("CIPHER ", v),
            Self::Issuer(v) => ("ISSUER ", v),
            Self::Subject(v) => ("SUBJECT ", v),
            Self::San(v) => ("SAN ", v),
        };
        ctx.write_keyword(keyword)?;
        ctx.write_string(value)
    }
}

fn write_require(ctx: &mut RestoreCtx<'_>, options: &[TlsOption]) -> RestoreResult {
    ctx.write_keyword("REQUIRE ")?;
    for (i, option) in options.iter().enumerate() {
        if i > 0 {
            ctx.write_keyword(" AND ")?;
        }
        option.restore(ctx)?;
    }
    Ok(())
}

fn write_opt_days(ctx: &mut RestoreCtx<'_>, days: Option<u64>) -> RestoreResult {
    match days {
        Some(days) => {
            ctx.write_display(days)?;
            ctx.write_keyword(" DAY")
        }
        None => ctx.write_keyword("DEFAULT"),
    }
}

impl Restore for UserOption {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        match self {
            Self::Require(options) => write_require(ctx, options),
            Self::Limits(limits) => {
                ctx.write_keyword("WITH")?;
                for (limit, value) in limits {
                    ctx.write_plain(" ")?;
                    ctx.write_keyword(limit.as_str())?;
                    ctx.write_plain(" ")?;
                    ctx.write_display(value)?;
                }
                Ok(())
            }
            Self::PasswordExpire(expire) => {
                ctx.write_keyword("PASSWORD EXPIRE")?;
                match expire {
                    None => Ok(()),
                    Some(None) => ctx.write_keyword(" DEFAULT"),
                    Some(Some(0)) => ctx.write_keyword(" NEVER"),
                    Some(Some(days)) => {
                        ctx.write_keyword(" INTERVAL ")?;
                        write_opt_days(ctx, Some(*days))
                    }
                }
            }
            Self::PasswordHistory(count) => {
                ctx.write_keyword("PASSWORD HISTORY ")?;
                match count {
                    Some(count) => ctx.write_display(count),
                    None => ctx.write_keyword("DEFAULT"),
                }
            }
            Self::PasswordReuseInterval(days) => {
                ctx.write_keyword("PASSWORD REUSE INTERVAL ")?;
                write_opt_days(ctx, *days)
            }
            Self::FailedLoginAttempts(n) => {
                ctx.write_keyword("FAILED_LOGIN_ATTEMPTS ")?;
                ctx.write_display(n)
            }
            Self::PasswordLockTime(days) => {
                ctx.write_keyword("PASSWORD_LOCK_TIME ")?;
                match days {
                    Some(days) => ctx.write_display(days),
                    None => ctx.write_keyword("UNBOUNDED"),
                }
            }
            Self::AccountLock(true) => ctx.write_keyword("ACCOUNT LOCK"),
            Self::AccountLock(false) => ctx.write_keyword("ACCOUNT UNLOCK"),
            Self::Comment(comment) => {
                ctx.write_keyword("COMMENT ")?;
                ctx.write_string(comment)
            }
            Self::Attribute(attribute) => {
                ctx.write_keyword("ATTRIBUTE ")?;
                ctx.write_string(attribute)
            }
            Self::ResourceGroup(group) => {
                ctx.write_keyword("RESOURCE GROUP ")?;
                ctx.write_name(group)
            }
        }
    }
}

fn write_user_options(ctx: &mut RestoreCtx<'_>, options: &[UserOption]) -> RestoreResult {
    for option in options {
        ctx.write_plain(" ")?;
        option.restore(ctx)?;
    }
    Ok(())
}

impl Restore for CreateUser {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        ctx.write_keyword(if self.role { "CREATE ROLE " } else { "CREATE USER " })?;
        if self.if_not_exists {
            ctx.write_keyword("IF NOT EXISTS ")?;
        }
        ctx.write_list(&self.users, ", ")?;
        write_user_options(ctx, &self.options)
    }
}

impl Restore for AlterUser {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        ctx.write_keyword("ALTER USER ")?;
        if self.if_exists {
            ctx.write_keyword("IF EXISTS ")?;
        }
        ctx.write_list(&self.users, ", ")?;
        write_user_options(ctx, &self.options)
    }
}

impl Restore for DropUser {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        ctx.write_keyword(if self.role { "DROP ROLE " } else { "DROP USER " })?;
        if self.if_exists {
            ctx.write_keyword("IF EXISTS ")?;
        }
        ctx.write_list(&self.users, ", ")
    }
}

impl Restore for Privilege {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        ctx.write_keyword(&self.name)?;
        if !self.columns.is_empty() {
            ctx.write_plain(" (")?;
            ctx.write_name_list(&self.columns)?;
            ctx.write_plain(")")?;
        }
        Ok(())
    }
}

/// Writes `privs ON [type ]level`.
fn write_grant_target(
    ctx: &mut RestoreCtx<'_>,
    privileges: &[Privilege],
    object_type: ObjectType,
    level: &GrantLevel,
) -> RestoreResult {
    ctx.write_list(privileges, ", ")?;
    ctx.write_keyword(" ON ")?;
    match object_type {
        ObjectType::Unspecified => {}
        ObjectType::Table => ctx.write_keyword("TABLE ")?,
        ObjectType::Function => ctx.write_keyword("FUNCTION ")?,
        ObjectType::Procedure => ctx.write_keyword("PROCEDURE ")?,
    }
    match level {
        GrantLevel::Current => ctx.write_plain("*"),
        GrantLevel::Global => ctx.write_plain("*.*"),
        GrantLevel::Database(db) => {
            ctx.write_name(db)?;
            ctx.write_plain(".*")
        }
        GrantLevel::Table(table) => ctx.write_table_name(table),
    }
}

impl Restore for Grant {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        ctx.write_keyword("GRANT ")?;
        write_grant_target(ctx, &self.privileges, self.object_type, &self.level)?;
        ctx.write_keyword(" TO ")?;
        ctx.write_list(&self.users, ", ")?;
        if !self.require.is_empty() {
            ctx.write_plain(" ")?;
            write_require(ctx, &self.require)?;
        }
        if self.with_grant_option {
            ctx.write_keyword(" WITH GRANT OPTION")?;
        }
        Ok(())
    }
}

impl Restore for Revoke {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        ctx.write_keyword("REVOKE ")?;
        write_grant_target(ctx, &self.privileges, self.object_type, &self.level)?;
        ctx.write_keyword(" FROM ")?;
        ctx.write_list(&self.users, ", ")
    }
}

/// Writes `GRANT r1, r2 TO u` or `REVOKE r1 FROM u`.
pub(super) fn write_role_grant(
    ctx: &mut RestoreCtx<'_>,
    grant: bool,
    roles: &[UserIdentity],
    users: &[UserIdentity],
) -> RestoreResult {
    ctx.write_keyword(if grant { "GRANT " } else { "REVOKE " })?;
    ctx.write_list(roles, ", ")?;
    ctx.write_keyword(if grant { " TO " } else { " FROM " })?;
    ctx.write_list(users, ", ")
}

pub(super) fn write_rename_user(
    ctx: &mut RestoreCtx<'_>,
    pairs: &[(UserIdentity, UserIdentity)],
) -> RestoreResult {
    ctx.write_keyword("RENAME USER ")?;
    for (i, (old, new)) in pairs.iter().enumerate() {
        if i > 0 {
            ctx.write_plain(", ")?;
        }
        old.restore(ctx)?;
        ctx.write_keyword(" TO ")?;
        new.restore(ctx)?;
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
    fn test_create_user() {
        assert_eq!(
            round_trip(
                "create user if not exists 'u'@'LOCALHOST' identified by 'pw' require ssl \
                 with max_queries_per_hour 10 password expire interval 90 day account lock"
            ),
            "CREATE USER IF NOT EXISTS 'u'@'localhost' IDENTIFIED BY 'pw' REQUIRE SSL \
             WITH MAX_QUERIES_PER_HOUR 10 PASSWORD EXPIRE INTERVAL 90 DAY ACCOUNT LOCK"
        );
        assert_eq!(
            round_trip("create user u identified with mysql_native_password as '*ABC'"),
            "CREATE USER 'u'@'%' IDENTIFIED WITH 'mysql_native_password' AS '*ABC'"
        );
        assert_eq!(round_trip("create role r1, r2"), "CREATE ROLE 'r1'@'%', 'r2'@'%'");
    }

    #[test]
    fn test_alter_and_drop_user() {
        assert_eq!(
            round_trip("alter user current_user() identified by 'x'"),
            "ALTER USER CURRENT_USER IDENTIFIED BY 'x'"
        );
        assert_eq!(
            round_trip("alter user if exists u password history default failed_login_attempts 3 password_lock_time unbounded"),
            "ALTER USER IF EXISTS 'u'@'%' PASSWORD HISTORY DEFAULT FAILED_LOGIN_ATTEMPTS 3 PASSWORD_LOCK_TIME UNBOUNDED"
        );
        assert_eq!(
            round_trip("drop role if exists r1"),
            "DROP ROLE IF EXISTS 'r1'@'%'"
        );
        assert_eq!(
            round_trip("rename user a to b, c@h to d@h"),
            "RENAME USER 'a'@'%' TO 'b'@'%', 'c'@'h' TO 'd'@'h'"
        );
    }

    #[test]
    fn test_grant_and_revoke() {
        assert_eq!(
            round_trip("grant select (a, b), insert on db.* to u with grant option"),
            "GRANT SELECT (`a`, `b`), INSERT ON `db`.* TO 'u'@'%' WITH GRANT OPTION"
        );
        assert_eq!(
            round_trip("grant all privileges on *.* to u require cipher 'c' and issuer 'i'"),
            "GRANT ALL ON *.* TO 'u'@'%' REQUIRE CIPHER 'c' AND ISSUER 'i'"
        );
        assert_eq!(
            round_trip("revoke create view on table d.t from u"),
            "REVOKE CREATE VIEW ON TABLE `d`.`t` FROM 'u'@'%'"
        );
        assert_eq!(round_trip("grant r1 to u"), "GRANT 'r1'@'%' TO 'u'@'%'");
        assert_eq!(round_trip("revoke r1 from u"), "REVOKE 'r1'@'%' FROM 'u'@'%'");
    }
}
