//! Accounts and privileges: user identities, CREATE / ALTER / DROP USER,
//! GRANT and REVOKE.

use super::error::ParseError;
use super::parser::Grammar;
use crate::ast::{
    AlterUser, AuthOption, CreateUser, DropUser, Grant, GrantLevel, ObjectType, Privilege,
    ResourceLimit, Revoke, Statement, TableName, TlsOption, UserIdentity, UserOption, UserSpec,
};
use crate::lexer::{Keyword, TokenKind};

impl Grammar<'_> {
    /// Parses `user[@host]` or `CURRENT_USER[()]`.
    ///
    /// The host defaults to `%` and is lower-cased.
    pub(super) fn parse_user_identity(&mut self) -> Result<UserIdentity, ParseError> {
        if self.eat_keyword(Keyword::CurrentUser) {
            if self.eat(&TokenKind::LeftParen) {
                self.expect(&TokenKind::RightParen)?;
            }
            return Ok(UserIdentity {
                user: String::new(),
                host: String::new(),
                current_user: true,
            });
        }
        let user = self.expect_name_or_string()?;
        let host = match &self.current().kind {
            TokenKind::UserVariable(host) => {
                let host = host.to_ascii_lowercase();
                self.advance();
                host
            }
            _ => "%".to_string(),
        };
        Ok(UserIdentity::new(user, host))
    }

    pub(super) fn parse_user_identity_list(&mut self) -> Result<Vec<UserIdentity>, ParseError> {
        let mut users = vec![self.parse_user_identity()?];
        while self.eat(&TokenKind::Comma) {
            users.push(self.parse_user_identity()?);
        }
        Ok(users)
    }

    /// Parses `user [IDENTIFIED ...]`.
    fn parse_user_spec(&mut self) -> Result<UserSpec, ParseError> {
        let user = self.parse_user_identity()?;
        let auth = if self.eat_keyword(Keyword::Identified) {
            Some(self.parse_auth_option()?)
        } else {
            None
        };
        Ok(UserSpec { user, auth })
    }

    fn parse_user_spec_list(&mut self) -> Result<Vec<UserSpec>, ParseError> {
        let mut users = vec![self.parse_user_spec()?];
        while self.eat(&TokenKind::Comma) {
            users.push(self.parse_user_spec()?);
        }
        Ok(users)
    }

    /// `BY 'pw' | BY PASSWORD 'hash' | WITH plugin [BY 'pw' | AS 'hash']`
    fn parse_auth_option(&mut self) -> Result<AuthOption, ParseError> {
        if self.eat_keyword(Keyword::By) {
            if self.eat_keyword(Keyword::Password) {
                return Ok(AuthOption::Hash(self.expect_string()?));
            }
            return Ok(AuthOption::Password(self.expect_string()?));
        }
        self.expect_keyword(Keyword::With)?;
        let plugin = self.expect_name_or_string()?;
        let (password, hash) = if self.eat_keyword(Keyword::By) {
            (Some(self.expect_string()?), None)
        } else if self.eat_keyword(Keyword::As) {
            (None, Some(self.expect_string()?))
        } else {
            (None, None)
        };
        Ok(AuthOption::Plugin {
            plugin,
            password,
            hash,
        })
    }

    /// `REQUIRE NONE | SSL | X509 | tls_option [AND] ...`
    fn parse_tls_options(&mut self) -> Result<Vec<TlsOption>, ParseError> {
        if self.eat_keyword(Keyword::None) {
            return Ok(vec![TlsOption::None]);
        }
        if self.eat_keyword(Keyword::Ssl) {
            return Ok(vec![TlsOption::Ssl]);
        }
        if self.eat_word("x509") {
            return Ok(vec![TlsOption::X509]);
        }
        let mut options = Vec::new();
        loop {
            let option = if self.eat_word("cipher") {
                TlsOption::Cipher(self.expect_string()?)
            } else if self.eat_word("issuer") {
                TlsOption::Issuer(self.expect_string()?)
            } else if self.eat_word("subject") {
                TlsOption::Subject(self.expect_string()?)
            } else if self.eat_word("san") {
                TlsOption::San(self.expect_string()?)
            } else if options.is_empty() {
                return Err(self.error());
            } else {
                return Ok(options);
            };
            options.push(option);
            self.eat_keyword(Keyword::And);
        }
    }

    fn parse_resource_limits(&mut self) -> Result<Vec<(ResourceLimit, u64)>, ParseError> {
        let mut limits = Vec::new();
        loop {
            let limit = if self.eat_word("max_queries_per_hour") {
                ResourceLimit::MaxQueriesPerHour
            } else if self.eat_word("max_updates_per_hour") {
                ResourceLimit::MaxUpdatesPerHour
            } else if self.eat_word("max_connections_per_hour") {
                ResourceLimit::MaxConnectionsPerHour
            } else if self.eat_word("max_user_connections") {
                ResourceLimit::MaxUserConnections
            } else if limits.is_empty() {
                return Err(self.error());
            } else {
                return Ok(limits);
            };
            limits.push((limit, self.expect_u64()?));
        }
    }

    /// Account options after the user list, in any order.
    fn parse_user_options(&mut self) -> Result<Vec<UserOption>, ParseError> {
        let mut options = Vec::new();
        loop {
            let option = if self.eat_keyword(Keyword::Require) {
                UserOption::Require(self.parse_tls_options()?)
            } else if self.check_keyword(Keyword::With) && !self.check_keyword_at(1, Keyword::Grant)
            {
                self.advance();
                UserOption::Limits(self.parse_resource_limits()?)
            } else if self.eat_keyword(Keyword::Password) {
                self.parse_password_option()?
            } else if self.eat_word("failed_login_attempts") {
                UserOption::FailedLoginAttempts(self.expect_u64()?)
            } else if self.eat_word("password_lock_time") {
                if self.eat_keyword(Keyword::Unbounded) {
                    UserOption::PasswordLockTime(None)
                } else {
                    UserOption::PasswordLockTime(Some(self.expect_u64()?))
                }
            } else if self.eat_word("account") {
                if self.eat_keyword(Keyword::Lock) {
                    UserOption::AccountLock(true)
                } else {
                    self.expect_keyword(Keyword::Unlock)?;
                    UserOption::AccountLock(false)
                }
            } else if self.eat_keyword(Keyword::Comment) {
                UserOption::Comment(self.expect_string()?)
            } else if self.eat_keyword(Keyword::Attribute) {
                UserOption::Attribute(self.expect_string()?)
            } else if self.check_keyword(Keyword::Resource) && self.check_keyword_at(1, Keyword::Group)
            {
                self.advance();
                self.advance();
                UserOption::ResourceGroup(self.expect_identifier()?)
            } else {
                return Ok(options);
            };
            options.push(option);
        }
    }

    /// The part after `PASSWORD`.
    fn parse_password_option(&mut self) -> Result<UserOption, ParseError> {
        if self.eat_word("expire") {
            let expire = if self.eat_keyword(Keyword::Default) {
                Some(None)
            } else if self.eat_keyword(Keyword::Never) {
                Some(Some(0))
            } else if self.eat_keyword(Keyword::Interval) {
                let days = self.expect_u64()?;
                self.expect_keyword(Keyword::Day)?;
                Some(Some(days))
            } else {
                None
            };
            return Ok(UserOption::PasswordExpire(expire));
        }
        if self.eat_keyword(Keyword::History) {
            if self.eat_keyword(Keyword::Default) {
                return Ok(UserOption::PasswordHistory(None));
            }
            return Ok(UserOption::PasswordHistory(Some(self.expect_u64()?)));
        }
        self.expect_word("reuse")?;
        self.expect_keyword(Keyword::Interval)?;
        if self.eat_keyword(Keyword::Default) {
            return Ok(UserOption::PasswordReuseInterval(None));
        }
        let days = self.expect_u64()?;
        self.expect_keyword(Keyword::Day)?;
        Ok(UserOption::PasswordReuseInterval(Some(days)))
    }

    /// `CREATE USER | ROLE`, after the `USER` / `ROLE` word.
    pub(super) fn parse_create_user(&mut self, role: bool) -> Result<Statement, ParseError> {
        let if_not_exists = self.parse_if_not_exists()?;
        let users = self.parse_user_spec_list()?;
        let options = if role {
            Vec::new()
        } else {
            self.parse_user_options()?
        };
        Ok(Statement::CreateUser(Box::new(CreateUser {
            role,
            if_not_exists,
            users,
            options,
        })))
    }

    /// `ALTER USER`, after the `USER` word.
    pub(super) fn parse_alter_user(&mut self) -> Result<Statement, ParseError> {
        let if_exists = self.parse_if_exists()?;
        // ALTER USER USER() IDENTIFIED BY 'x'
        if self.check_keyword(Keyword::User) && self.peek_kind(1) == &TokenKind::LeftParen {
            self.advance();
            self.advance();
            self.expect(&TokenKind::RightParen)?;
            self.expect_keyword(Keyword::Identified)?;
            let auth = self.parse_auth_option()?;
            return Ok(Statement::AlterUser(Box::new(AlterUser {
                if_exists,
                users: vec![UserSpec {
                    user: UserIdentity {
                        user: String::new(),
                        host: String::new(),
                        current_user: true,
                    },
                    auth: Some(auth),
                }],
                options: Vec::new(),
            })));
        }
        let users = self.parse_user_spec_list()?;
        let options = self.parse_user_options()?;
        Ok(Statement::AlterUser(Box::new(AlterUser {
            if_exists,
            users,
            options,
        })))
    }

    /// `DROP USER | ROLE`, after the `USER` / `ROLE` word.
    pub(super) fn parse_drop_user(&mut self, role: bool) -> Result<Statement, ParseError> {
        let if_exists = self.parse_if_exists()?;
        let users = self.parse_user_identity_list()?;
        Ok(Statement::DropUser(Box::new(DropUser {
            role,
            if_exists,
            users,
        })))
    }

    /// `RENAME USER a TO b, ...`, after the `USER` word.
    pub(super) fn parse_rename_user(&mut self) -> Result<Statement, ParseError> {
        let mut pairs = Vec::new();
        loop {
            let old = self.parse_user_identity()?;
            self.expect_keyword(Keyword::To)?;
            let new = self.parse_user_identity()?;
            pairs.push((old, new));
            if !self.eat(&TokenKind::Comma) {
                return Ok(Statement::RenameUser(pairs));
            }
        }
    }

    pub(super) fn parse_grant(&mut self) -> Result<Statement, ParseError> {
        self.expect_keyword(Keyword::Grant)?;
        if let Some(roles) = self.speculate(Self::parse_role_list_before_to) {
            let users = self.parse_user_identity_list()?;
            if self.eat_keyword(Keyword::With) {
                self.expect_keyword(Keyword::Admin)?;
                self.expect_keyword(Keyword::Option)?;
            }
            return Ok(Statement::GrantRole { roles, users });
        }
        let privileges = self.parse_privileges()?;
        self.expect_keyword(Keyword::On)?;
        let object_type = self.parse_object_type();
        let level = self.parse_grant_level()?;
        self.expect_keyword(Keyword::To)?;
        let users = self.parse_user_spec_list()?;
        let require = if self.eat_keyword(Keyword::Require) {
            self.parse_tls_options()?
        } else {
            Vec::new()
        };
        let with_grant_option = if self.eat_keyword(Keyword::With) {
            self.expect_keyword(Keyword::Grant)?;
            self.expect_keyword(Keyword::Option)?;
            true
        } else {
            false
        };
        Ok(Statement::Grant(Box::new(Grant {
            privileges,
            object_type,
            level,
            users,
            require,
            with_grant_option,
        })))
    }

    pub(super) fn parse_revoke(&mut self) -> Result<Statement, ParseError> {
        self.expect_keyword(Keyword::Revoke)?;
        if let Some(roles) = self.speculate(Self::parse_role_list_before_from) {
            let users = self.parse_user_identity_list()?;
            return Ok(Statement::RevokeRole { roles, users });
        }
        let privileges = self.parse_privileges()?;
        self.expect_keyword(Keyword::On)?;
        let object_type = self.parse_object_type();
        let level = self.parse_grant_level()?;
        self.expect_keyword(Keyword::From)?;
        let users = self.parse_user_identity_list()?;
        Ok(Statement::Revoke(Box::new(Revoke {
            privileges,
            object_type,
            level,
            users,
        })))
    }

    /// `role, role TO`; fails when the list is a privilege list.
    fn parse_role_list_before_to(&mut self) -> Result<Vec<UserIdentity>, ParseError> {
        let roles = self.parse_role_names()?;
        self.expect_keyword(Keyword::To)?;
        Ok(roles)
    }

    fn parse_role_list_before_from(&mut self) -> Result<Vec<UserIdentity>, ParseError> {
        let roles = self.parse_role_names()?;
        self.expect_keyword(Keyword::From)?;
        Ok(roles)
    }

    /// Role names are identifiers or strings that are not privilege words.
    fn parse_role_names(&mut self) -> Result<Vec<UserIdentity>, ParseError> {
        let mut roles = Vec::new();
        loop {
            if !(self.check_string() || self.is_identifier_at(0)) {
                return Err(self.error());
            }
            roles.push(self.parse_user_identity()?);
            if !self.eat(&TokenKind::Comma) {
                return Ok(roles);
            }
        }
    }

    fn parse_privileges(&mut self) -> Result<Vec<Privilege>, ParseError> {
        let mut privileges = Vec::new();
        loop {
            let mut words = vec![self.expect_privilege_word()?];
            while !self.check_keyword(Keyword::On)
                && !self.check(&TokenKind::Comma)
                && !self.check(&TokenKind::LeftParen)
            {
                words.push(self.expect_privilege_word()?);
            }
            if words == ["ALL", "PRIVILEGES"] {
                words.pop();
            }
            let columns = if self.check(&TokenKind::LeftParen) {
                self.parse_paren_identifier_list()?
            } else {
                Vec::new()
            };
            privileges.push(Privilege {
                name: words.join(" "),
                columns,
            });
            if !self.eat(&TokenKind::Comma) {
                return Ok(privileges);
            }
        }
    }

    fn expect_privilege_word(&mut self) -> Result<String, ParseError> {
        let word = match &self.current().kind {
            TokenKind::Keyword(kw) => kw.as_str().to_string(),
            TokenKind::Identifier(name) => name.to_ascii_uppercase(),
            _ => return Err(self.error()),
        };
        self.advance();
        Ok(word)
    }

    fn parse_object_type(&mut self) -> ObjectType {
        if self.eat_keyword(Keyword::Table) {
            ObjectType::Table
        } else if self.eat_keyword(Keyword::Function) {
            ObjectType::Function
        } else if self.eat_keyword(Keyword::Procedure) {
            ObjectType::Procedure
        } else {
            ObjectType::Unspecified
        }
    }

    /// `*`, `*.*`, `db.*`, `db.t` or `t`.
    fn parse_grant_level(&mut self) -> Result<GrantLevel, ParseError> {
        if self.eat(&TokenKind::Star) {
            if self.eat(&TokenKind::Dot) {
                self.expect(&TokenKind::Star)?;
                return Ok(GrantLevel::Global);
            }
            return Ok(GrantLevel::Current);
        }
        let first = self.expect_identifier()?;
        if !self.eat(&TokenKind::Dot) {
            return Ok(GrantLevel::Table(TableName::new(first)));
        }
        if self.eat(&TokenKind::Star) {
            return Ok(GrantLevel::Database(first));
        }
        let name = self.expect_identifier()?;
        Ok(GrantLevel::Table(TableName::qualified(first, name)))
    }

    /// Consumes an optional `IF NOT EXISTS`.
    pub(super) fn parse_if_not_exists(&mut self) -> Result<bool, ParseError> {
        if self.eat_keyword(Keyword::If) {
            self.expect_keyword(Keyword::Not)?;
            self.expect_keyword(Keyword::Exists)?;
            return Ok(true);
        }
        Ok(false)
    }

    /// Consumes an optional `IF EXISTS`.
    pub(super) fn parse_if_exists(&mut self) -> Result<bool, ParseError> {
        if self.eat_keyword(Keyword::If) {
            self.expect_keyword(Keyword::Exists)?;
            return Ok(true);
        }
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::{AuthOption, GrantLevel, ObjectType, Statement, TlsOption, UserIdentity, UserOption};
    use crate::Parser;

    fn parse(sql: &str) -> Statement {
        Parser::new().parse_one_stmt(sql, "", "").unwrap().stmt
    }

    #[test]
    fn test_user_identity_forms() {
        let Statement::DropUser(drop) = parse("DROP USER 'root'@'LocalHost', bob, CURRENT_USER()")
        else {
            panic!("expected DROP USER");
        };
        assert_eq!(drop.users[0], UserIdentity::new("root", "localhost"));
        assert_eq!(drop.users[1], UserIdentity::new("bob", "%"));
        assert!(drop.users[2].current_user);
    }

    #[test]
    fn test_create_user_options() {
        let Statement::CreateUser(create) = parse(
            "CREATE USER IF NOT EXISTS 'u'@'%' IDENTIFIED BY 'pw' REQUIRE SSL \
             WITH MAX_QUERIES_PER_HOUR 3 PASSWORD EXPIRE NEVER ACCOUNT LOCK",
        ) else {
            panic!("expected CREATE USER");
        };
        assert!(create.if_not_exists);
        assert_eq!(create.users[0].auth, Some(AuthOption::Password("pw".into())));
        assert_eq!(create.options[0], UserOption::Require(vec![TlsOption::Ssl]));
        assert_eq!(create.options[2], UserOption::PasswordExpire(Some(Some(0))));
        assert_eq!(create.options[3], UserOption::AccountLock(true));
    }

    #[test]
    fn test_grant_privileges() {
        let Statement::Grant(grant) =
            parse("GRANT SELECT (a, b), INSERT ON TABLE db.* TO 'u'@'h' WITH GRANT OPTION")
        else {
            panic!("expected GRANT");
        };
        assert_eq!(grant.privileges[0].name, "SELECT");
        assert_eq!(grant.privileges[0].columns, vec!["a", "b"]);
        assert_eq!(grant.object_type, ObjectType::Table);
        assert_eq!(grant.level, GrantLevel::Database("db".into()));
        assert!(grant.with_grant_option);
    }

    #[test]
    fn test_multi_word_privileges() {
        let Statement::Grant(grant) = parse("GRANT ALL PRIVILEGES, CREATE TEMPORARY TABLES ON *.* TO u")
        else {
            panic!("expected GRANT");
        };
        assert_eq!(grant.privileges[0].name, "ALL");
        assert_eq!(grant.privileges[1].name, "CREATE TEMPORARY TABLES");
        assert_eq!(grant.level, GrantLevel::Global);
    }

    #[test]
    fn test_grant_and_revoke_roles() {
        assert!(matches!(
            parse("GRANT r1, 'r2'@'%' TO u1"),
            Statement::GrantRole { ref roles, .. } if roles.len() == 2
        ));
        assert!(matches!(parse("REVOKE r1 FROM u1"), Statement::RevokeRole { .. }));
        assert!(matches!(parse("REVOKE SELECT ON t FROM u1"), Statement::Revoke(_)));
    }

    #[test]
    fn test_rename_user() {
        let Statement::RenameUser(pairs) = parse("RENAME USER a TO b, c@localhost TO d") else {
            panic!("expected RENAME USER");
        };
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[1].0.host, "localhost");
    }
}
