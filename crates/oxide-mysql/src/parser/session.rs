//! SET, transactions, prepared statements, table locks, USE and HELP.

use super::error::{ErrorCode, ParseError};
use super::expr::system_variable;
use super::parser::Grammar;
use crate::ast::{
    Begin, Completion, Expr, PrepareSource, SetAssignment, SetRole, SetTarget, Statement,
    TableLockType, VarScope, Variable,
};
use crate::lexer::{Keyword, TokenKind};

impl Grammar<'_> {
    #[allow(clippy::too_many_lines)]
    pub(super) fn parse_set_statement(&mut self) -> Result<Statement, ParseError> {
        self.expect_keyword(Keyword::Set)?;

        let scope = match self.current().as_keyword() {
            Some(Keyword::Global) => Some(VarScope::Global),
            Some(Keyword::Session | Keyword::Local) => Some(VarScope::Session),
            _ => None,
        };
        if self.check_keyword(Keyword::Transaction)
            || (scope.is_some() && self.check_keyword_at(1, Keyword::Transaction))
        {
            if scope.is_some() {
                self.advance();
            }
            self.advance();
            return self.parse_set_transaction(scope);
        }
        if self.check_keyword(Keyword::Binding)
            || (matches!(scope, Some(VarScope::Global | VarScope::Session))
                && self.check_keyword_at(1, Keyword::Binding))
        {
            if !self.check_keyword(Keyword::Binding) {
                self.advance();
            }
            self.advance();
            let enabled = if self.eat_word("enabled") {
                true
            } else {
                self.expect_word("disabled")?;
                false
            };
            self.expect_keyword(Keyword::For)?;
            let target = self.parse_binding_target()?;
            return Ok(Statement::SetBinding { enabled, target });
        }

        match self.current().as_keyword() {
            Some(Keyword::Password) if !self.assignment_follows(1) => {
                self.advance();
                let user = if self.eat_keyword(Keyword::For) {
                    Some(self.parse_user_identity()?)
                } else {
                    None
                };
                self.expect(&TokenKind::Eq)?;
                let password = if self.eat_keyword(Keyword::Password) {
                    self.expect(&TokenKind::LeftParen)?;
                    let password = self.expect_string()?;
                    self.expect(&TokenKind::RightParen)?;
                    password
                } else {
                    self.expect_string()?
                };
                return Ok(Statement::SetPassword { user, password });
            }
            Some(Keyword::Role) if !self.assignment_follows(1) => {
                self.advance();
                return Ok(Statement::SetRole(self.parse_set_role()?));
            }
            Some(Keyword::Default) if self.check_keyword_at(1, Keyword::Role) => {
                self.advance();
                self.advance();
                let roles = self.parse_set_role()?;
                self.expect_keyword(Keyword::To)?;
                let users = self.parse_user_identity_list()?;
                return Ok(Statement::SetDefaultRole { roles, users });
            }
            Some(Keyword::Resource) if self.check_keyword_at(1, Keyword::Group) => {
                self.advance();
                self.advance();
                return Ok(Statement::SetResourceGroup(self.expect_resource_group_name()?));
            }
            _ => {}
        }
        if self.check_word("session_states") && !self.assignment_follows(1) {
            self.advance();
            return Ok(Statement::SetSessionStates(self.expect_string()?));
        }
        if self.check_word("config") && !self.assignment_follows(1) {
            self.advance();
            return self.parse_set_config();
        }

        let mut assignments = vec![self.parse_set_assignment()?];
        while self.eat(&TokenKind::Comma) {
            assignments.push(self.parse_set_assignment()?);
        }
        Ok(Statement::Set(assignments))
    }

    fn assignment_follows(&self, n: usize) -> bool {
        matches!(self.peek_kind(n), TokenKind::Eq | TokenKind::Assign)
    }

    /// `SET [scope] TRANSACTION` characteristics, as variable assignments.
    fn parse_set_transaction(
        &mut self,
        scope: Option<VarScope>,
    ) -> Result<Statement, ParseError> {
        let mut assignments = Vec::new();
        loop {
            let (name, value) = if self.eat_keyword(Keyword::Isolation) {
                self.expect_keyword(Keyword::Level)?;
                let level = self.parse_isolation_level()?;
                let name = if scope.is_some() {
                    "tx_isolation"
                } else {
                    "tx_isolation_one_shot"
                };
                (name, Expr::string(level))
            } else {
                self.expect_keyword(Keyword::Read)?;
                if self.eat_keyword(Keyword::Write) {
                    ("tx_read_only", Expr::string("0"))
                } else {
                    self.expect_keyword(Keyword::Only)?;
                    if self.check_keyword(Keyword::As) {
                        self.advance();
                        self.expect_keyword(Keyword::Of)?;
                        self.expect_keyword(Keyword::Timestamp)?;
                        ("tx_read_ts", self.parse_expr()?)
                    } else {
                        ("tx_read_only", Expr::string("1"))
                    }
                }
            };
            assignments.push(SetAssignment::Variable {
                target: SetTarget::System {
                    name: name.to_string(),
                    scope: scope.unwrap_or(VarScope::Session),
                },
                value: Some(value),
            });
            if !self.eat(&TokenKind::Comma) {
                return Ok(Statement::Set(assignments));
            }
        }
    }

    fn parse_isolation_level(&mut self) -> Result<&'static str, ParseError> {
        if self.eat_keyword(Keyword::Repeatable) {
            self.expect_keyword(Keyword::Read)?;
            return Ok("REPEATABLE-READ");
        }
        if self.eat_keyword(Keyword::Serializable) {
            return Ok("SERIALIZABLE");
        }
        self.expect_keyword(Keyword::Read)?;
        if self.eat_keyword(Keyword::Committed) {
            return Ok("READ-COMMITTED");
        }
        self.expect_keyword(Keyword::Uncommitted)?;
        Ok("READ-UNCOMMITTED")
    }

    fn parse_set_assignment(&mut self) -> Result<SetAssignment, ParseError> {
        if self.check_keyword(Keyword::Names) && !self.assignment_follows(1) {
            self.advance();
            if self.eat_keyword(Keyword::Default) {
                return Ok(SetAssignment::Names {
                    charset: None,
                    collate: None,
                });
            }
            let charset = self.parse_charset_name()?;
            let collate = if self.eat_keyword(Keyword::Collate) {
                if self.eat_keyword(Keyword::Default) {
                    None
                } else {
                    Some(self.parse_collation_name()?)
                }
            } else {
                None
            };
            return Ok(SetAssignment::Names {
                charset: Some(charset),
                collate,
            });
        }
        if matches!(
            self.current().as_keyword(),
            Some(Keyword::Charset | Keyword::Character | Keyword::Char)
        ) && !self.assignment_follows(1)
        {
            self.eat_charset_keyword();
            if self.eat_keyword(Keyword::Default) {
                return Ok(SetAssignment::Charset(None));
            }
            return Ok(SetAssignment::Charset(Some(self.parse_charset_name()?)));
        }

        let target = self.parse_set_target()?;
        if !self.eat(&TokenKind::Eq) {
            self.expect(&TokenKind::Assign)?;
        }
        let value = self.parse_set_value()?;
        Ok(SetAssignment::Variable { target, value })
    }

    fn parse_set_target(&mut self) -> Result<SetTarget, ParseError> {
        match &self.current().kind {
            TokenKind::UserVariable(name) => {
                let name = name.clone();
                self.advance();
                return Ok(SetTarget::User(name));
            }
            TokenKind::SystemVariable(name) => {
                let Variable::System { name, scope } = system_variable(name) else {
                    return Err(self.error());
                };
                self.advance();
                return Ok(SetTarget::System { name, scope });
            }
            _ => {}
        }
        let scope_start = self.current().span.start;
        let scope = if self.eat_keyword(Keyword::Global) {
            VarScope::Global
        } else if self.eat_keyword(Keyword::Session) || self.eat_keyword(Keyword::Local) {
            VarScope::Session
        } else if self.eat_keyword(Keyword::Instance) {
            VarScope::Instance
        } else {
            VarScope::Session
        };
        // A scope keyword cannot qualify an `@@` variable a second time.
        if let TokenKind::SystemVariable(written) = &self.current().kind {
            let message = match system_variable(written) {
                Variable::System { name, scope } => {
                    let written_scope = match scope {
                        VarScope::Global => "GLOBAL",
                        VarScope::Instance => "INSTANCE",
                        VarScope::Session | VarScope::Implicit => "SESSION",
                    };
                    format!("Variable '{name}' is a {written_scope} variable")
                }
                Variable::User(name) => format!("Variable '{name}' is a SESSION variable"),
            };
            self.advance();
            return Err(self.error_at(
                ErrorCode::IncorrectGlobalLocalVar,
                message,
                self.span_from(scope_start),
            ));
        }
        let mut name = self.expect_identifier()?.to_ascii_lowercase();
        while self.check(&TokenKind::Dot) {
            self.advance();
            name.push('.');
            name.push_str(&self.expect_identifier()?.to_ascii_lowercase());
        }
        Ok(SetTarget::System { name, scope })
    }

    /// `DEFAULT` yields `None`; `ON` and `BINARY` are taken as strings.
    fn parse_set_value(&mut self) -> Result<Option<Expr>, ParseError> {
        if self.eat_keyword(Keyword::Default) {
            return Ok(None);
        }
        for (keyword, text) in [(Keyword::On, "ON"), (Keyword::Binary, "BINARY")] {
            if self.check_keyword(keyword)
                && matches!(
                    self.peek_kind(1),
                    TokenKind::Comma | TokenKind::Semicolon | TokenKind::Eof
                )
            {
                self.advance();
                return Ok(Some(Expr::string(text)));
            }
        }
        self.parse_expr().map(Some)
    }

    fn parse_set_role(&mut self) -> Result<SetRole, ParseError> {
        if self.eat_keyword(Keyword::Default) {
            return Ok(SetRole::Default);
        }
        if self.eat_keyword(Keyword::None) {
            return Ok(SetRole::None);
        }
        if self.eat_keyword(Keyword::All) {
            let except = if self.eat_keyword(Keyword::Except) {
                self.parse_user_identity_list()?
            } else {
                Vec::new()
            };
            return Ok(SetRole::All(except));
        }
        Ok(SetRole::Roles(self.parse_user_identity_list()?))
    }

    /// `SET CONFIG {component | 'instance'} name = value` after `CONFIG`.
    fn parse_set_config(&mut self) -> Result<Statement, ParseError> {
        let (component, instance) = if self.check_string() {
            (None, Some(self.expect_string()?))
        } else {
            (Some(self.expect_identifier()?.to_ascii_lowercase()), None)
        };
        let start = self.current().span.start;
        let mut end = start;
        while !matches!(
            self.current().kind,
            TokenKind::Eq | TokenKind::Eof | TokenKind::Semicolon
        ) {
            end = self.current().span.end;
            self.advance();
        }
        if end == start {
            return Err(self.error());
        }
        let name = self.source[start..end].to_ascii_lowercase();
        self.expect(&TokenKind::Eq)?;
        let value = self.parse_expr()?;
        Ok(Statement::SetConfig {
            component,
            instance,
            name,
            value,
        })
    }

    // Prepared statements

    /// `PREPARE name FROM {'sql' | @var}`
    pub(super) fn parse_prepare(&mut self) -> Result<Statement, ParseError> {
        self.expect_keyword(Keyword::Prepare)?;
        let name = self.expect_identifier()?;
        self.expect_keyword(Keyword::From)?;
        let source = if let TokenKind::UserVariable(var) = &self.current().kind {
            let var = var.clone();
            self.advance();
            PrepareSource::Variable(var)
        } else {
            PrepareSource::Text(self.expect_string()?)
        };
        Ok(Statement::Prepare { name, source })
    }

    /// `EXECUTE name [USING @a, ...]`
    pub(super) fn parse_execute(&mut self) -> Result<Statement, ParseError> {
        self.expect_keyword(Keyword::Execute)?;
        let name = self.expect_identifier()?;
        let using = if self.eat_keyword(Keyword::Using) {
            self.parse_expr_list()?
        } else {
            Vec::new()
        };
        Ok(Statement::Execute { name, using })
    }

    /// `DEALLOCATE PREPARE name`
    pub(super) fn parse_deallocate(&mut self) -> Result<Statement, ParseError> {
        self.expect_keyword(Keyword::Deallocate)?;
        self.expect_keyword(Keyword::Prepare)?;
        Ok(Statement::Deallocate(self.expect_identifier()?))
    }

    // Transactions

    /// `BEGIN [PESSIMISTIC | OPTIMISTIC]` or `START TRANSACTION ...`
    pub(super) fn parse_begin(&mut self) -> Result<Statement, ParseError> {
        let mut begin = Begin::default();
        if self.eat_keyword(Keyword::Begin) {
            if self.eat_word("pessimistic") {
                begin.pessimistic = Some(true);
            } else if self.eat_word("optimistic") {
                begin.pessimistic = Some(false);
            } else {
                self.eat_keyword(Keyword::Work);
            }
            return Ok(Statement::Begin(Box::new(begin)));
        }
        self.expect_keyword(Keyword::Start)?;
        self.expect_keyword(Keyword::Transaction)?;
        begin.start_transaction = true;
        if self.eat_keyword(Keyword::Read) {
            if self.eat_keyword(Keyword::Write) {
                begin.read_only = Some(false);
            } else {
                self.expect_keyword(Keyword::Only)?;
                begin.read_only = Some(true);
                if self.eat_keyword(Keyword::As) {
                    self.expect_keyword(Keyword::Of)?;
                    self.expect_keyword(Keyword::Timestamp)?;
                    begin.as_of = Some(self.parse_expr()?);
                }
            }
        } else if self.eat_keyword(Keyword::With) {
            if self.eat_keyword(Keyword::Consistent) {
                self.expect_keyword(Keyword::Snapshot)?;
                begin.consistent_snapshot = true;
            } else {
                self.expect_word("causal")?;
                self.expect_word("consistency")?;
                self.expect_keyword(Keyword::Only)?;
                begin.causal_consistency_only = true;
            }
        }
        Ok(Statement::Begin(Box::new(begin)))
    }

    /// `[AND [NO] CHAIN] [[NO] RELEASE]`
    fn parse_completion(&mut self) -> Result<Completion, ParseError> {
        let mut completion = Completion::Default;
        if self.eat_keyword(Keyword::And) {
            completion = if self.eat_keyword(Keyword::No) {
                self.expect_word("chain")?;
                Completion::NoChain
            } else {
                self.expect_word("chain")?;
                Completion::Chain
            };
        }
        if self.check_keyword(Keyword::No) && self.check_keyword_at(1, Keyword::Release) {
            self.advance();
            self.advance();
            if completion == Completion::Default {
                completion = Completion::NoRelease;
            }
        } else if self.eat_keyword(Keyword::Release) && completion != Completion::Chain {
            completion = Completion::Release;
        }
        Ok(completion)
    }

    pub(super) fn parse_commit(&mut self) -> Result<Statement, ParseError> {
        self.expect_keyword(Keyword::Commit)?;
        self.eat_keyword(Keyword::Work);
        Ok(Statement::Commit(self.parse_completion()?))
    }

    /// `ROLLBACK [WORK] [TO [SAVEPOINT] sp | completion]`
    pub(super) fn parse_rollback(&mut self) -> Result<Statement, ParseError> {
        self.expect_keyword(Keyword::Rollback)?;
        self.eat_keyword(Keyword::Work);
        if self.eat_keyword(Keyword::To) {
            self.eat_keyword(Keyword::Savepoint);
            return Ok(Statement::Rollback {
                savepoint: Some(self.expect_identifier()?),
                completion: Completion::Default,
            });
        }
        Ok(Statement::Rollback {
            savepoint: None,
            completion: self.parse_completion()?,
        })
    }

    pub(super) fn parse_savepoint(&mut self) -> Result<Statement, ParseError> {
        self.expect_keyword(Keyword::Savepoint)?;
        Ok(Statement::Savepoint(self.expect_identifier()?))
    }

    /// `RELEASE SAVEPOINT sp`
    pub(super) fn parse_release(&mut self) -> Result<Statement, ParseError> {
        self.expect_keyword(Keyword::Release)?;
        self.expect_keyword(Keyword::Savepoint)?;
        Ok(Statement::ReleaseSavepoint(self.expect_identifier()?))
    }

    // Locks

    /// `LOCK {TABLE | TABLES} t [AS a] lock_type, ...` or `LOCK STATS t, ...`
    pub(super) fn parse_lock(&mut self) -> Result<Statement, ParseError> {
        self.expect_keyword(Keyword::Lock)?;
        if self.eat_keyword(Keyword::Stats) {
            return Ok(Statement::LockStats(self.parse_table_name_list()?));
        }
        if !self.eat_keyword(Keyword::Tables) {
            self.expect_keyword(Keyword::Table)?;
        }
        let mut locks = Vec::new();
        loop {
            let table = self.parse_table_name()?;
            if self.eat_keyword(Keyword::As) {
                self.expect_identifier()?;
            } else if self.is_identifier_at(0)
                && !matches!(
                    self.current().as_keyword(),
                    Some(Keyword::Read | Keyword::Write | Keyword::LowPriority)
                )
            {
                self.advance();
            }
            let lock = if self.eat_keyword(Keyword::Read) {
                if self.eat_keyword(Keyword::Local) {
                    TableLockType::ReadLocal
                } else {
                    TableLockType::Read
                }
            } else {
                self.eat_keyword(Keyword::LowPriority);
                self.expect_keyword(Keyword::Write)?;
                if self.eat_keyword(Keyword::Local) {
                    TableLockType::WriteLocal
                } else {
                    TableLockType::Write
                }
            };
            locks.push((table, lock));
            if !self.eat(&TokenKind::Comma) {
                return Ok(Statement::LockTables(locks));
            }
        }
    }

    /// `UNLOCK {TABLE | TABLES}` or `UNLOCK STATS t, ...`
    pub(super) fn parse_unlock(&mut self) -> Result<Statement, ParseError> {
        self.expect_keyword(Keyword::Unlock)?;
        if self.eat_keyword(Keyword::Stats) {
            return Ok(Statement::UnlockStats(self.parse_table_name_list()?));
        }
        if !self.eat_keyword(Keyword::Tables) {
            self.expect_keyword(Keyword::Table)?;
        }
        Ok(Statement::UnlockTables)
    }

    // Misc

    pub(super) fn parse_use(&mut self) -> Result<Statement, ParseError> {
        self.expect_keyword(Keyword::Use)?;
        let span = self.current().span;
        let name = self.expect_identifier()?;
        self.check_db_name(&name, span)?;
        Ok(Statement::Use(name))
    }

    pub(super) fn parse_help(&mut self) -> Result<Statement, ParseError> {
        self.expect_keyword(Keyword::Help)?;
        Ok(Statement::Help(self.expect_string()?))
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::{
        Completion, ExprKind, Literal, PrepareSource, SetAssignment, SetRole, SetTarget,
        Statement, TableLockType, VarScope,
    };
    use crate::{ErrorCode, Parser};

    fn parse(sql: &str) -> Statement {
        Parser::new().parse_one_stmt(sql, "", "").unwrap().stmt
    }

    fn set_list(sql: &str) -> Vec<SetAssignment> {
        match parse(sql) {
            Statement::Set(list) => list,
            other => panic!("expected SET, got {other:?}"),
        }
    }

    fn system(name: &str, scope: VarScope) -> SetTarget {
        SetTarget::System {
            name: name.into(),
            scope,
        }
    }

    #[test]
    fn test_set_transaction_becomes_variables() {
        let list = set_list("SET SESSION TRANSACTION ISOLATION LEVEL REPEATABLE READ");
        let SetAssignment::Variable { target, value } = &list[0] else {
            panic!("expected variable assignment");
        };
        assert_eq!(*target, system("tx_isolation", VarScope::Session));
        let value = value.as_ref().unwrap();
        assert!(matches!(
            &value.kind,
            ExprKind::Literal(Literal::String(s)) if s.value == b"REPEATABLE-READ"
        ));

        let list = set_list("SET TRANSACTION READ ONLY");
        assert!(matches!(
            &list[0],
            SetAssignment::Variable { target: SetTarget::System { name, .. }, .. } if name == "tx_read_only"
        ));
        let list = set_list("SET TRANSACTION ISOLATION LEVEL READ COMMITTED");
        assert!(matches!(
            &list[0],
            SetAssignment::Variable { target: SetTarget::System { name, .. }, .. } if name == "tx_isolation_one_shot"
        ));
    }

    #[test]
    fn test_set_variables() {
        let list = set_list("SET @a = 1, @@global.sql_mode = DEFAULT, LOCAL autocommit := ON, x = 2");
        assert_eq!(list.len(), 4);
        assert!(matches!(&list[0], SetAssignment::Variable { target: SetTarget::User(n), .. } if n == "a"));
        assert!(matches!(
            &list[1],
            SetAssignment::Variable { target, value: None } if *target == system("sql_mode", VarScope::Global)
        ));
        assert!(matches!(
            &list[2],
            SetAssignment::Variable { target, value: Some(_) } if *target == system("autocommit", VarScope::Session)
        ));
    }

    #[test]
    fn test_scope_keyword_before_system_variable() {
        let err = Parser::new()
            .parse_one_stmt("SET GLOBAL @@session.autocommit = 1", "", "")
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::IncorrectGlobalLocalVar);
        assert_eq!(err.message, "Variable 'autocommit' is a SESSION variable");
        assert_eq!((err.line, err.column), (1, 5));

        let err = Parser::new()
            .parse_one_stmt("SET SESSION @@global.sql_mode = ''", "", "")
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::IncorrectGlobalLocalVar);
    }

    #[test]
    fn test_set_names_and_charset() {
        assert_eq!(
            set_list("SET NAMES utf8mb4 COLLATE utf8mb4_bin")[0],
            SetAssignment::Names {
                charset: Some("utf8mb4".into()),
                collate: Some("utf8mb4_bin".into())
            }
        );
        assert_eq!(
            set_list("SET CHARACTER SET DEFAULT")[0],
            SetAssignment::Charset(None)
        );
    }

    #[test]
    fn test_set_special_forms() {
        assert!(matches!(
            parse("SET PASSWORD FOR 'u'@'%' = 'secret'"),
            Statement::SetPassword { user: Some(_), password } if password == "secret"
        ));
        assert_eq!(parse("SET ROLE ALL EXCEPT r1"), Statement::SetRole(SetRole::All(vec![
            crate::ast::UserIdentity::new("r1", "%")
        ])));
        assert!(matches!(
            parse("SET DEFAULT ROLE NONE TO u1, u2"),
            Statement::SetDefaultRole { roles: SetRole::None, users } if users.len() == 2
        ));
        assert!(matches!(
            parse("SET CONFIG tikv `split.qps-threshold` = 1000"),
            Statement::SetConfig { component: Some(c), .. } if c == "tikv"
        ));
        assert!(matches!(
            parse("SET CONFIG '127.0.0.1:20180' log.level = 'info'"),
            Statement::SetConfig { instance: Some(_), name, .. } if name == "log.level"
        ));
        assert!(matches!(parse("SET RESOURCE GROUP rg1"), Statement::SetResourceGroup(g) if g == "rg1"));
        assert!(matches!(
            parse("SET BINDING DISABLED FOR SELECT * FROM t"),
            Statement::SetBinding { enabled: false, .. }
        ));
        assert!(matches!(parse("SET SESSION_STATES 'x'"), Statement::SetSessionStates(_)));
    }

    #[test]
    fn test_transactions() {
        let Statement::Begin(begin) = parse("START TRANSACTION READ ONLY AS OF TIMESTAMP NOW()")
        else {
            panic!("expected BEGIN");
        };
        assert!(begin.start_transaction);
        assert!(begin.as_of.is_some());
        assert!(matches!(parse("BEGIN PESSIMISTIC"), Statement::Begin(b) if b.pessimistic == Some(true)));
        assert_eq!(parse("COMMIT AND CHAIN"), Statement::Commit(Completion::Chain));
        assert_eq!(parse("COMMIT WORK RELEASE"), Statement::Commit(Completion::Release));
        assert_eq!(
            parse("ROLLBACK TO SAVEPOINT sp"),
            Statement::Rollback {
                savepoint: Some("sp".into()),
                completion: Completion::Default
            }
        );
        assert_eq!(parse("RELEASE SAVEPOINT sp"), Statement::ReleaseSavepoint("sp".into()));
    }

    #[test]
    fn test_prepared_statements() {
        assert_eq!(
            parse("PREPARE s FROM @sql"),
            Statement::Prepare {
                name: "s".into(),
                source: PrepareSource::Variable("sql".into())
            }
        );
        assert!(matches!(parse("EXECUTE s USING @a, @b"), Statement::Execute { using, .. } if using.len() == 2));
        assert_eq!(parse("DEALLOCATE PREPARE s"), Statement::Deallocate("s".into()));
    }

    #[test]
    fn test_locks() {
        let Statement::LockTables(locks) = parse("LOCK TABLES t1 READ LOCAL, t2 AS x WRITE") else {
            panic!("expected LOCK TABLES");
        };
        assert_eq!(locks[0].1, TableLockType::ReadLocal);
        assert_eq!(locks[1].1, TableLockType::Write);
        assert_eq!(parse("UNLOCK TABLES"), Statement::UnlockTables);
        assert!(matches!(parse("LOCK STATS t1, t2"), Statement::LockStats(t) if t.len() == 2));
    }

    #[test]
    fn test_use_and_help() {
        assert_eq!(parse("USE db1"), Statement::Use("db1".into()));
        assert_eq!(parse("HELP 'select'"), Statement::Help("select".into()));
    }
}
