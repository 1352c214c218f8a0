//! INSERT/REPLACE, UPDATE, DELETE, LOAD DATA, IMPORT INTO, CALL, DO and
//! non-transactional BATCH statements.

use super::error::{ErrorCode, ParseError};
use super::parser::Grammar;
use crate::ast::{
    Assignment, Call, Delete, DeleteForm, DryRun, Expr, ImportInto, ImportSource, Insert,
    InsertPriority, InsertSource, Limit, LoadColumn, LoadData, LoadOption, NonTransactionalDml,
    OnDuplicate, OrderItem, Statement, TableName, TableRef, Update, WithClause,
};
use crate::lexer::{Keyword, TokenKind};

impl Grammar<'_> {
    /// `INSERT` or `REPLACE`.
    pub(super) fn parse_insert(&mut self, replace: bool) -> Result<Statement, ParseError> {
        self.advance();
        let hints = self.parse_hints();
        let priority = match self.current().as_keyword() {
            Some(Keyword::LowPriority) => InsertPriority::LowPriority,
            Some(Keyword::Delayed) => InsertPriority::Delayed,
            Some(Keyword::HighPriority) => InsertPriority::HighPriority,
            _ => InsertPriority::Default,
        };
        if priority != InsertPriority::Default {
            self.advance();
        }
        let ignore = !replace && self.eat_keyword(Keyword::Ignore);
        self.eat_keyword(Keyword::Into);
        let table = self.parse_table_name()?;
        let partitions = self.parse_opt_partition_names()?;

        let mut columns = Vec::new();
        if self.check(&TokenKind::LeftParen) && !self.is_query_start(1) {
            self.advance();
            if !self.check(&TokenKind::RightParen) {
                columns.push(self.parse_column_name()?);
                while self.eat(&TokenKind::Comma) {
                    columns.push(self.parse_column_name()?);
                }
            }
            self.expect(&TokenKind::RightParen)?;
        }

        let source = if self.eat_keyword(Keyword::Values) || self.eat_keyword(Keyword::Value) {
            if self.check_keyword(Keyword::Row) {
                InsertSource::Values(self.parse_row_list()?)
            } else {
                InsertSource::Values(self.parse_value_rows()?)
            }
        } else if self.eat_keyword(Keyword::Set) {
            InsertSource::Set(self.parse_assignments()?)
        } else if self.is_query_start(0) || self.check(&TokenKind::LeftParen) {
            InsertSource::Query(Box::new(self.parse_query()?))
        } else {
            return Err(self.error());
        };

        let mut on_duplicate = Vec::new();
        if self.check_keyword(Keyword::On) && self.check_keyword_at(1, Keyword::Duplicate) {
            self.advance();
            self.advance();
            self.expect_keyword(Keyword::Key)?;
            self.expect_keyword(Keyword::Update)?;
            on_duplicate = self.parse_assignments()?;
        }

        Ok(Statement::Insert(Box::new(Insert {
            replace,
            hints,
            priority,
            ignore,
            table,
            partitions,
            columns,
            source,
            on_duplicate,
        })))
    }

    /// `(a, b), (), (c, DEFAULT)`
    fn parse_value_rows(&mut self) -> Result<Vec<Vec<Expr>>, ParseError> {
        let mut rows = Vec::new();
        loop {
            self.expect(&TokenKind::LeftParen)?;
            let row = if self.check(&TokenKind::RightParen) {
                Vec::new()
            } else {
                self.parse_expr_list()?
            };
            self.expect(&TokenKind::RightParen)?;
            rows.push(row);
            if !self.eat(&TokenKind::Comma) {
                return Ok(rows);
            }
        }
    }

    /// `col = expr, ...`
    pub(super) fn parse_assignments(&mut self) -> Result<Vec<Assignment>, ParseError> {
        let mut assignments = Vec::new();
        loop {
            let column = self.parse_column_name()?;
            if !self.eat(&TokenKind::Eq) {
                self.expect(&TokenKind::Assign)?;
            }
            let value = self.parse_expr()?;
            assignments.push(Assignment { column, value });
            if !self.eat(&TokenKind::Comma) {
                return Ok(assignments);
            }
        }
    }

    pub(super) fn parse_update(
        &mut self,
        with: Option<WithClause>,
    ) -> Result<Statement, ParseError> {
        self.expect_keyword(Keyword::Update)?;
        let hints = self.parse_hints();
        let mut low_priority = false;
        let mut ignore = false;
        loop {
            if self.eat_keyword(Keyword::LowPriority) {
                low_priority = true;
            } else if self.eat_keyword(Keyword::Ignore) {
                ignore = true;
            } else {
                break;
            }
        }
        let tables = self.parse_table_refs()?;
        self.expect_keyword(Keyword::Set)?;
        let assignments = self.parse_assignments()?;
        let selection = if self.eat_keyword(Keyword::Where) {
            Some(self.parse_expr()?)
        } else {
            None
        };
        let mut update = Update {
            with,
            hints,
            low_priority,
            ignore,
            tables,
            assignments,
            selection,
            order_by: Vec::new(),
            limit: None,
        };
        let multi = update.is_multi_table();
        (update.order_by, update.limit) = self.parse_single_table_tail("UPDATE", multi)?;
        Ok(Statement::Update(Box::new(update)))
    }

    /// ORDER BY and LIMIT, which only single-table UPDATE and DELETE accept.
    fn parse_single_table_tail(
        &mut self,
        statement: &str,
        multi: bool,
    ) -> Result<(Vec<OrderItem>, Option<Limit>), ParseError> {
        let start = self.current().span;
        let mut order_by = Vec::new();
        if self.eat_keyword(Keyword::Order) {
            if multi {
                return Err(self.error_at(
                    ErrorCode::WrongUsage,
                    format!("Incorrect usage of {statement} and ORDER BY"),
                    start,
                ));
            }
            self.expect_keyword(Keyword::By)?;
            order_by = self.parse_order_by_items()?;
        }
        let start = self.current().span;
        let limit = self.parse_limit()?;
        if multi && limit.is_some() {
            return Err(self.error_at(
                ErrorCode::WrongUsage,
                format!("Incorrect usage of {statement} and LIMIT"),
                start,
            ));
        }
        Ok((order_by, limit))
    }

    pub(super) fn parse_delete(
        &mut self,
        with: Option<WithClause>,
    ) -> Result<Statement, ParseError> {
        self.expect_keyword(Keyword::Delete)?;
        let hints = self.parse_hints();
        let mut low_priority = false;
        let mut quick = false;
        let mut ignore = false;
        loop {
            if self.eat_keyword(Keyword::LowPriority) {
                low_priority = true;
            } else if self.eat_keyword(Keyword::Quick) {
                quick = true;
            } else if self.eat_keyword(Keyword::Ignore) {
                ignore = true;
            } else {
                break;
            }
        }

        let (form, targets, from) = if self.eat_keyword(Keyword::From) {
            let using_targets = self.speculate(|g| {
                let targets = g.parse_delete_targets()?;
                g.expect_keyword(Keyword::Using)?;
                Ok(targets)
            });
            match using_targets {
                Some(targets) => (DeleteForm::Using, targets, self.parse_table_refs()?),
                None => {
                    let from = self.parse_table_refs()?;
                    if is_multi_table(&from) {
                        return Err(self.error());
                    }
                    (DeleteForm::Single, Vec::new(), from)
                }
            }
        } else {
            let targets = self.parse_delete_targets()?;
            self.expect_keyword(Keyword::From)?;
            (DeleteForm::BeforeFrom, targets, self.parse_table_refs()?)
        };

        let selection = if self.eat_keyword(Keyword::Where) {
            Some(self.parse_expr()?)
        } else {
            None
        };
        let (order_by, limit) =
            self.parse_single_table_tail("DELETE", form != DeleteForm::Single)?;
        Ok(Statement::Delete(Box::new(Delete {
            with,
            hints,
            low_priority,
            quick,
            ignore,
            form,
            targets,
            from,
            selection,
            order_by,
            limit,
        })))
    }

    /// `t1[.*], db.t2[.*], ...`
    fn parse_delete_targets(&mut self) -> Result<Vec<TableName>, ParseError> {
        let mut targets = Vec::new();
        loop {
            let first = self.expect_identifier()?;
            let table = if self.eat(&TokenKind::Dot) {
                if self.eat(&TokenKind::Star) {
                    TableName::new(first)
                } else {
                    let name = self.expect_identifier()?;
                    if self.eat(&TokenKind::Dot) {
                        self.expect(&TokenKind::Star)?;
                    }
                    TableName::qualified(first, name)
                }
            } else {
                TableName::new(first)
            };
            targets.push(table);
            if !self.eat(&TokenKind::Comma) {
                return Ok(targets);
            }
        }
    }

    /// `LOAD DATA ...` or `LOAD STATS 'path'`.
    pub(super) fn parse_load(&mut self) -> Result<Statement, ParseError> {
        self.expect_keyword(Keyword::Load)?;
        if self.eat_keyword(Keyword::Stats) {
            return Ok(Statement::LoadStats(self.expect_string()?));
        }
        self.expect_keyword(Keyword::Data)?;
        let low_priority = self.eat_keyword(Keyword::LowPriority);
        let local = self.eat_keyword(Keyword::Local);
        self.expect_keyword(Keyword::Infile)?;
        let path = self.expect_string()?;
        let format = if self.eat_keyword(Keyword::Format) {
            Some(self.expect_string()?)
        } else {
            None
        };
        let on_duplicate = if self.eat_keyword(Keyword::Replace) {
            OnDuplicate::Replace
        } else if self.eat_keyword(Keyword::Ignore) || local {
            OnDuplicate::Ignore
        } else {
            OnDuplicate::Error
        };
        self.expect_keyword(Keyword::Into)?;
        self.expect_keyword(Keyword::Table)?;
        let table = self.parse_table_name()?;
        let charset = if self.eat_charset_keyword() {
            Some(self.parse_charset_name()?)
        } else {
            None
        };
        let fields = self.parse_fields_clause()?;
        let lines = self.parse_lines_clause()?;
        let ignore_lines = if self.eat_keyword(Keyword::Ignore) {
            let count = self.expect_u64()?;
            if !self.eat_keyword(Keyword::Rows) {
                self.expect_keyword(Keyword::Lines)?;
            }
            Some(count)
        } else {
            None
        };
        let columns = self.parse_opt_load_columns()?;
        let set = if self.eat_keyword(Keyword::Set) {
            self.parse_assignments()?
        } else {
            Vec::new()
        };
        let options = self.parse_load_options()?;
        Ok(Statement::LoadData(Box::new(LoadData {
            low_priority,
            local,
            path,
            format,
            on_duplicate,
            table,
            charset,
            fields,
            lines,
            ignore_lines,
            columns,
            set,
            options,
        })))
    }

    /// `(col, @var, ...)`
    fn parse_opt_load_columns(&mut self) -> Result<Vec<LoadColumn>, ParseError> {
        let mut columns = Vec::new();
        if !self.eat(&TokenKind::LeftParen) {
            return Ok(columns);
        }
        while !self.check(&TokenKind::RightParen) {
            if let TokenKind::UserVariable(name) = &self.current().kind {
                columns.push(LoadColumn::Variable(name.clone()));
                self.advance();
            } else {
                columns.push(LoadColumn::Column(self.parse_column_name()?));
            }
            if !self.eat(&TokenKind::Comma) {
                break;
            }
        }
        self.expect(&TokenKind::RightParen)?;
        Ok(columns)
    }

    /// `WITH name [= value], ...`
    fn parse_load_options(&mut self) -> Result<Vec<LoadOption>, ParseError> {
        let mut options = Vec::new();
        if !self.eat_keyword(Keyword::With) {
            return Ok(options);
        }
        loop {
            let name = self.expect_identifier()?.to_ascii_lowercase();
            let value = if self.eat(&TokenKind::Eq) {
                Some(self.parse_expr()?)
            } else {
                None
            };
            options.push(LoadOption { name, value });
            if !self.eat(&TokenKind::Comma) {
                return Ok(options);
            }
        }
    }

    pub(super) fn parse_import(&mut self) -> Result<Statement, ParseError> {
        self.expect_keyword(Keyword::Import)?;
        self.expect_keyword(Keyword::Into)?;
        let table = self.parse_table_name()?;
        let columns = self.parse_opt_load_columns()?;
        let set = if self.eat_keyword(Keyword::Set) {
            self.parse_assignments()?
        } else {
            Vec::new()
        };
        self.expect_keyword(Keyword::From)?;
        let source = if self.check_string() {
            ImportSource::Path(self.expect_string()?)
        } else {
            ImportSource::Query(Box::new(self.parse_query()?))
        };
        let format = if self.eat_keyword(Keyword::Format) {
            Some(self.expect_string()?)
        } else {
            None
        };
        let options = self.parse_load_options()?;
        Ok(Statement::ImportInto(Box::new(ImportInto {
            table,
            columns,
            set,
            source,
            format,
            options,
        })))
    }

    pub(super) fn parse_call(&mut self) -> Result<Statement, ParseError> {
        self.expect_keyword(Keyword::Call)?;
        let procedure = self.parse_table_name()?;
        let args = if self.eat(&TokenKind::LeftParen) {
            let args = if self.check(&TokenKind::RightParen) {
                Vec::new()
            } else {
                self.parse_expr_list()?
            };
            self.expect(&TokenKind::RightParen)?;
            args
        } else {
            Vec::new()
        };
        Ok(Statement::Call(Box::new(Call { procedure, args })))
    }

    pub(super) fn parse_do(&mut self) -> Result<Statement, ParseError> {
        self.expect_keyword(Keyword::Do)?;
        Ok(Statement::Do(self.parse_expr_list()?))
    }

    /// `BATCH [ON col] LIMIT n [DRY RUN [QUERY]] dml`
    pub(super) fn parse_batch(&mut self) -> Result<Statement, ParseError> {
        self.expect_word("batch")?;
        let shard_column = if self.eat_keyword(Keyword::On) {
            Some(self.parse_column_name()?)
        } else {
            None
        };
        self.expect_keyword(Keyword::Limit)?;
        let limit = self.expect_u64()?;
        let dry_run = if self.eat_word("dry") {
            self.expect_word("run")?;
            if self.eat_keyword(Keyword::Query) {
                Some(DryRun::Query)
            } else {
                Some(DryRun::Plain)
            }
        } else {
            None
        };
        let dml = self.parse_nested_statement()?;
        if !matches!(
            *dml,
            Statement::Insert(_) | Statement::Update(_) | Statement::Delete(_)
        ) {
            return Err(self.error_at(
                ErrorCode::NotSupportedYet,
                "Non-transactional DML only supports INSERT, REPLACE, UPDATE and DELETE",
                self.previous_span(),
            ));
        }
        Ok(Statement::NonTransactionalDml(Box::new(NonTransactionalDml {
            shard_column,
            limit,
            dry_run,
            dml,
        })))
    }
}

fn is_multi_table(refs: &TableRef) -> bool {
    match refs {
        TableRef::Join(join) => join.right.is_some() || !matches!(join.left, TableRef::Table(_)),
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::{
        DeleteForm, DryRun, InsertPriority, InsertSource, LoadColumn, OnDuplicate, Statement,
    };
    use crate::{ErrorCode, Parser};

    fn parse(sql: &str) -> Statement {
        Parser::new().parse_one_stmt(sql, "", "").unwrap().stmt
    }

    #[test]
    fn test_insert_sources() {
        let Statement::Insert(insert) = parse("INSERT INTO t (a, b) VALUES (1, 2), ()") else {
            panic!("expected insert");
        };
        assert_eq!(insert.columns.len(), 2);
        assert!(matches!(&insert.source, InsertSource::Values(rows) if rows[1].is_empty()));

        let Statement::Insert(insert) = parse("INSERT t SET a = 1 ON DUPLICATE KEY UPDATE a = a + 1")
        else {
            panic!("expected insert");
        };
        assert!(matches!(insert.source, InsertSource::Set(_)));
        assert_eq!(insert.on_duplicate.len(), 1);

        let Statement::Insert(insert) = parse("INSERT INTO t (SELECT * FROM u)") else {
            panic!("expected insert");
        };
        assert!(matches!(insert.source, InsertSource::Query(_)));
    }

    #[test]
    fn test_replace_priority() {
        let Statement::Insert(insert) = parse("REPLACE LOW_PRIORITY INTO t VALUES (1)") else {
            panic!("expected replace");
        };
        assert!(insert.replace);
        assert_eq!(insert.priority, InsertPriority::LowPriority);
    }

    #[test]
    fn test_delete_forms() {
        let Statement::Delete(delete) = parse("DELETE FROM t WHERE a = 1 ORDER BY a LIMIT 1")
        else {
            panic!("expected delete");
        };
        assert_eq!(delete.form, DeleteForm::Single);

        let Statement::Delete(delete) = parse("DELETE t1, t2 FROM t1 JOIN t2 ON t1.a = t2.a")
        else {
            panic!("expected delete");
        };
        assert_eq!(delete.form, DeleteForm::BeforeFrom);
        assert_eq!(delete.targets.len(), 2);

        let Statement::Delete(delete) = parse("DELETE FROM t1.*, t2 USING t1, t2") else {
            panic!("expected delete");
        };
        assert_eq!(delete.form, DeleteForm::Using);
    }

    #[test]
    fn test_multi_table_order_by_is_wrong_usage() {
        let parser = Parser::new();
        let err = parser
            .parse("UPDATE t1, t2 SET t1.a = 1 ORDER BY t1.a", "", "")
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::WrongUsage);
        let err = parser
            .parse("DELETE t1 FROM t1, t2 LIMIT 1", "", "")
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::WrongUsage);
    }

    #[test]
    fn test_load_data_local_defaults_to_ignore() {
        let Statement::LoadData(load) = parse(
            "LOAD DATA LOCAL INFILE '/tmp/t.csv' INTO TABLE t FIELDS TERMINATED BY X'6B6B' ENCLOSED BY X'0D' IGNORE 1 LINES (a, @b)",
        ) else {
            panic!("expected load data");
        };
        assert_eq!(load.on_duplicate, OnDuplicate::Ignore);
        let fields = load.fields.unwrap();
        assert_eq!(fields.terminated.as_deref(), Some(&b"kk"[..]));
        assert_eq!(fields.enclosed.as_deref(), Some(&b"\r"[..]));
        assert_eq!(load.ignore_lines, Some(1));
        assert_eq!(load.columns[1], LoadColumn::Variable("b".into()));
    }

    #[test]
    fn test_import_into_options() {
        let Statement::ImportInto(import) =
            parse("IMPORT INTO t FROM '/data/*.csv' FORMAT 'csv' WITH DETACHED, THREAD = 4")
        else {
            panic!("expected import");
        };
        assert_eq!(import.options.len(), 2);
        assert_eq!(import.options[0].name, "detached");
    }

    #[test]
    fn test_batch() {
        let Statement::NonTransactionalDml(batch) =
            parse("BATCH ON id LIMIT 100 DRY RUN QUERY DELETE FROM t WHERE a > 1")
        else {
            panic!("expected batch");
        };
        assert_eq!(batch.limit, 100);
        assert_eq!(batch.dry_run, Some(DryRun::Query));
        assert!(Parser::new()
            .parse("BATCH LIMIT 1 SELECT 1", "", "")
            .is_err());
    }
}
