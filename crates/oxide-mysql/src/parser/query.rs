//! Query grammar: SELECT, set operations, table references and the clauses
//! shared with DML (`WITH`, `ORDER BY`, `LIMIT`, `FIELDS`/`LINES`).

use super::error::{ErrorCode, ParseError};
use super::parser::Grammar;
use crate::ast::{
    ColumnName, CommonTableExpr, Expr, ExprKind, FieldsClause, GroupBy, IndexHint, IndexHintKind,
    IndexHintScope, Join, JoinKind, Limit, LinesClause, Literal, LockClause, LockMode, LockWait,
    NamedWindow, Query, QueryBody, Select, SelectField, SelectInto, SelectOptions, SetOperator,
    Statement, TableName, TableRef, TableSource, Variable, WithClause,
};
use crate::lexer::{Keyword, Span, TokenKind};

impl Grammar<'_> {
    /// Returns true if token `n` starts a query expression.
    pub(super) fn is_query_start(&self, n: usize) -> bool {
        match self.peek_kind(n) {
            TokenKind::Keyword(Keyword::Select | Keyword::With | Keyword::Table) => true,
            TokenKind::Keyword(Keyword::Values) => self.check_keyword_at(n + 1, Keyword::Row),
            _ => false,
        }
    }

    /// SELECT, VALUES, TABLE or a parenthesized query used as a statement;
    /// `WITH` may also introduce UPDATE or DELETE.
    pub(super) fn parse_query_statement(&mut self) -> Result<Statement, ParseError> {
        if self.check_keyword(Keyword::With) {
            let with = self.parse_with_clause()?;
            if self.check_keyword(Keyword::Update) {
                return self.parse_update(Some(with));
            }
            if self.check_keyword(Keyword::Delete) {
                return self.parse_delete(Some(with));
            }
            let mut query = self.parse_query_tail()?;
            query.with = Some(with);
            return Ok(Statement::Select(Box::new(query)));
        }
        Ok(Statement::Select(Box::new(self.parse_query()?)))
    }

    /// Parses a complete query expression.
    pub(super) fn parse_query(&mut self) -> Result<Query, ParseError> {
        let with = if self.check_keyword(Keyword::With) {
            Some(self.parse_with_clause()?)
        } else {
            None
        };
        let mut query = self.parse_query_tail()?;
        query.with = with;
        Ok(query)
    }

    /// Parses `( query )`.
    pub(super) fn parse_subquery(&mut self) -> Result<Query, ParseError> {
        self.expect(&TokenKind::LeftParen)?;
        let query = self.parse_query()?;
        self.expect(&TokenKind::RightParen)?;
        Ok(query)
    }

    /// Set-operation body followed by ORDER BY, LIMIT, INTO and locking.
    fn parse_query_tail(&mut self) -> Result<Query, ParseError> {
        let body = self.parse_query_body()?;
        let mut query = Query::new(body);
        if self.eat_keyword(Keyword::Order) {
            self.expect_keyword(Keyword::By)?;
            query.order_by = self.parse_order_by_items()?;
        }
        query.limit = self.parse_limit()?;
        if self.check_keyword(Keyword::Into) {
            query.into = Some(self.parse_select_into()?);
        }
        query.lock = self.parse_lock_clause()?;
        if query.into.is_none() && self.check_keyword(Keyword::Into) {
            query.into = Some(self.parse_select_into()?);
        }
        Ok(query)
    }

    /// `UNION`/`EXCEPT` chains of `INTERSECT` chains, left associative.
    fn parse_query_body(&mut self) -> Result<QueryBody, ParseError> {
        let mut left = self.parse_intersect_chain()?;
        loop {
            let op = match self.current().as_keyword() {
                Some(Keyword::Union) => SetOperator::Union,
                Some(Keyword::Except) => SetOperator::Except,
                _ => return Ok(left),
            };
            self.advance();
            let all = self.parse_set_quantifier();
            let right = self.parse_intersect_chain()?;
            left = QueryBody::SetOp {
                op,
                all,
                left: Box::new(left),
                right: Box::new(right),
            };
        }
    }

    fn parse_intersect_chain(&mut self) -> Result<QueryBody, ParseError> {
        let mut left = self.parse_query_primary()?;
        while self.eat_keyword(Keyword::Intersect) {
            let all = self.parse_set_quantifier();
            let right = self.parse_query_primary()?;
            left = QueryBody::SetOp {
                op: SetOperator::Intersect,
                all,
                left: Box::new(left),
                right: Box::new(right),
            };
        }
        Ok(left)
    }

    fn parse_set_quantifier(&mut self) -> bool {
        if self.eat_keyword(Keyword::All) {
            true
        } else {
            self.eat_keyword(Keyword::Distinct);
            false
        }
    }

    fn parse_query_primary(&mut self) -> Result<QueryBody, ParseError> {
        match self.current().kind {
            TokenKind::Keyword(Keyword::Select) => {
                Ok(QueryBody::Select(Box::new(self.parse_select()?)))
            }
            TokenKind::Keyword(Keyword::Values) => {
                self.advance();
                Ok(QueryBody::Values(self.parse_row_list()?))
            }
            TokenKind::Keyword(Keyword::Table) => {
                self.advance();
                Ok(QueryBody::Table(self.parse_table_name()?))
            }
            TokenKind::LeftParen => Ok(QueryBody::Paren(Box::new(self.parse_subquery()?))),
            _ => Err(self.error()),
        }
    }

    /// Parses `ROW(...), ROW(...)`.
    pub(super) fn parse_row_list(&mut self) -> Result<Vec<Vec<Expr>>, ParseError> {
        let mut rows = Vec::new();
        loop {
            self.expect_keyword(Keyword::Row)?;
            rows.push(self.parse_paren_expr_list()?);
            if !self.eat(&TokenKind::Comma) {
                return Ok(rows);
            }
        }
    }

    pub(super) fn parse_with_clause(&mut self) -> Result<WithClause, ParseError> {
        self.expect_keyword(Keyword::With)?;
        let recursive = self.eat_keyword(Keyword::Recursive);
        let mut ctes = Vec::new();
        loop {
            let name = self.expect_identifier()?;
            let columns = if self.check(&TokenKind::LeftParen) {
                self.parse_paren_identifier_list()?
            } else {
                Vec::new()
            };
            self.expect_keyword(Keyword::As)?;
            let query = self.parse_subquery()?;
            ctes.push(CommonTableExpr {
                name,
                columns,
                query: Box::new(query),
            });
            if !self.eat(&TokenKind::Comma) {
                return Ok(WithClause { recursive, ctes });
            }
        }
    }

    fn parse_select(&mut self) -> Result<Select, ParseError> {
        self.expect_keyword(Keyword::Select)?;
        let mut select = Select {
            hints: self.parse_hints(),
            options: self.parse_select_options(),
            ..Select::default()
        };
        select.fields = self.parse_select_fields()?;
        if self.eat_keyword(Keyword::From) && !self.eat_keyword(Keyword::Dual) {
            select.from = Some(self.parse_table_refs()?);
        }
        if self.eat_keyword(Keyword::Where) {
            select.selection = Some(self.parse_expr()?);
        }
        if self.eat_keyword(Keyword::Group) {
            self.expect_keyword(Keyword::By)?;
            let items = self.parse_order_by_items()?;
            let rollup = self.check_keyword(Keyword::With)
                && self.check_keyword_at(1, Keyword::Rollup);
            if rollup {
                self.advance();
                self.advance();
            }
            select.group_by = Some(GroupBy { items, rollup });
        }
        if self.eat_keyword(Keyword::Having) {
            select.having = Some(self.parse_expr()?);
        }
        if self.config.enable_window_func && self.eat_keyword(Keyword::Window) {
            loop {
                let name = self.expect_identifier()?;
                self.expect_keyword(Keyword::As)?;
                self.expect(&TokenKind::LeftParen)?;
                let spec = self.parse_window_spec()?;
                self.expect(&TokenKind::RightParen)?;
                select.windows.push(NamedWindow { name, spec });
                if !self.eat(&TokenKind::Comma) {
                    break;
                }
            }
        }
        Ok(select)
    }

    fn parse_select_options(&mut self) -> SelectOptions {
        let mut options = SelectOptions::default();
        loop {
            // A non-reserved option word that ends the field list is a column.
            let ends_fields = self.check_keyword_at(1, Keyword::From)
                || matches!(
                    self.peek_kind(1),
                    TokenKind::Comma | TokenKind::Semicolon | TokenKind::Eof
                );
            if ends_fields && self.is_identifier_at(0) {
                return options;
            }
            match self.current().as_keyword() {
                Some(Keyword::All) => {}
                Some(Keyword::Distinct | Keyword::Distinctrow) => options.distinct = true,
                Some(Keyword::HighPriority) => options.high_priority = true,
                Some(Keyword::StraightJoin) => options.straight_join = true,
                Some(Keyword::SqlSmallResult) => options.small_result = true,
                Some(Keyword::SqlBigResult) => options.big_result = true,
                Some(Keyword::SqlBufferResult) => options.buffer_result = true,
                Some(Keyword::SqlCache) => options.cache = Some(true),
                Some(Keyword::SqlNoCache) => options.cache = Some(false),
                Some(Keyword::SqlCalcFoundRows) => options.calc_found_rows = true,
                _ => return options,
            }
            self.advance();
        }
    }

    fn parse_select_fields(&mut self) -> Result<Vec<SelectField>, ParseError> {
        let mut fields = vec![self.parse_select_field()?];
        while self.eat(&TokenKind::Comma) {
            fields.push(self.parse_select_field()?);
        }
        Ok(fields)
    }

    fn parse_select_field(&mut self) -> Result<SelectField, ParseError> {
        if self.eat(&TokenKind::Star) {
            return Ok(SelectField::Wildcard { table: None });
        }
        if self.is_identifier_at(0) && self.peek_kind(1) == &TokenKind::Dot {
            if self.peek_kind(2) == &TokenKind::Star {
                let table = TableName::new(self.expect_identifier()?);
                self.advance();
                self.advance();
                return Ok(SelectField::Wildcard { table: Some(table) });
            }
            if self.peek_kind(3) == &TokenKind::Dot && self.peek_kind(4) == &TokenKind::Star {
                let schema = self.expect_identifier()?;
                self.advance();
                let name = self.expect_identifier()?;
                self.advance();
                self.advance();
                return Ok(SelectField::Wildcard {
                    table: Some(TableName::qualified(schema, name)),
                });
            }
        }
        let expr = self.parse_expr()?;
        let alias = self.parse_alias()?;
        Ok(SelectField::Expr { expr, alias })
    }

    /// Parses `[AS] alias`; the alias may be a string.
    pub(super) fn parse_alias(&mut self) -> Result<Option<String>, ParseError> {
        if self.eat_keyword(Keyword::As) {
            return self.expect_name_or_string().map(Some);
        }
        if self.is_identifier_at(0) && !self.check_keyword(Keyword::Offset) {
            return self.expect_identifier().map(Some);
        }
        if self.check_string() {
            return self.expect_string().map(Some);
        }
        Ok(None)
    }

    /// Parses `[schema.]name`, or `*.name` inside a binding.
    pub(super) fn parse_table_name(&mut self) -> Result<TableName, ParseError> {
        if self.allows_wildcard_schema()
            && self.check(&TokenKind::Star)
            && self.peek_kind(1) == &TokenKind::Dot
        {
            self.advance();
            self.advance();
            return Ok(TableName::any_schema(self.expect_identifier()?));
        }
        let start = self.current().span;
        let first = self.expect_identifier()?;
        if !self.eat(&TokenKind::Dot) {
            return Ok(TableName::new(first));
        }
        self.check_db_name(&first, start)?;
        let name = self.expect_identifier()?;
        Ok(TableName::qualified(first, name))
    }

    /// Parses `name, name, ...`.
    pub(super) fn parse_table_name_list(&mut self) -> Result<Vec<TableName>, ParseError> {
        let mut tables = vec![self.parse_table_name()?];
        while self.eat(&TokenKind::Comma) {
            tables.push(self.parse_table_name()?);
        }
        Ok(tables)
    }

    /// Rejects empty and whitespace-only database names.
    pub(super) fn check_db_name(&self, name: &str, span: Span) -> Result<(), ParseError> {
        if name.trim().is_empty() {
            return Err(self.error_at(
                ErrorCode::WrongDbName,
                format!("Incorrect database name '{name}'"),
                span,
            ));
        }
        Ok(())
    }

    /// Parses an optional `PARTITION (p, ...)`.
    pub(super) fn parse_opt_partition_names(&mut self) -> Result<Vec<String>, ParseError> {
        if self.eat_keyword(Keyword::Partition) {
            self.parse_paren_identifier_list()
        } else {
            Ok(Vec::new())
        }
    }

    // Table references

    /// Parses a FROM list: comma joins and explicit joins, left associative.
    ///
    /// The leftmost reference is always wrapped in a [`Join`], so a single
    /// table is `Join { left: t, right: None }`.
    pub(super) fn parse_table_refs(&mut self) -> Result<TableRef, ParseError> {
        let first = self.parse_table_factor()?;
        let mut acc = match first {
            TableRef::Join(_) => first,
            other => TableRef::Join(Box::new(Join::single(other))),
        };
        acc = self.parse_join_chain(acc)?;
        while self.eat(&TokenKind::Comma) {
            let right = self.parse_table_factor()?;
            acc = TableRef::Join(Box::new(Join::cross(acc, right)));
            acc = self.parse_join_chain(acc)?;
        }
        Ok(acc)
    }

    fn parse_join_chain(&mut self, mut acc: TableRef) -> Result<TableRef, ParseError> {
        loop {
            let mut join = match self.current().as_keyword() {
                Some(Keyword::Natural) => {
                    self.advance();
                    let kind = self.parse_outer_join_kind()?.unwrap_or(JoinKind::Cross);
                    self.expect_keyword(Keyword::Join)?;
                    Join {
                        natural: true,
                        kind,
                        ..Join::single(acc)
                    }
                }
                Some(Keyword::StraightJoin) => {
                    self.advance();
                    Join {
                        straight: true,
                        ..Join::single(acc)
                    }
                }
                Some(Keyword::Join | Keyword::Inner | Keyword::Cross) => {
                    if !self.eat_keyword(Keyword::Inner) {
                        self.eat_keyword(Keyword::Cross);
                    }
                    self.expect_keyword(Keyword::Join)?;
                    Join::single(acc)
                }
                Some(Keyword::Left | Keyword::Right) => {
                    let kind = self.parse_outer_join_kind()?.unwrap_or(JoinKind::Cross);
                    self.expect_keyword(Keyword::Join)?;
                    Join {
                        kind,
                        ..Join::single(acc)
                    }
                }
                _ => return Ok(acc),
            };
            join.right = Some(self.parse_table_factor()?);
            if !join.natural {
                if self.eat_keyword(Keyword::On) {
                    join.on = Some(self.parse_expr()?);
                } else if self.eat_keyword(Keyword::Using) {
                    join.using = self.parse_paren_identifier_list()?;
                } else if join.kind != JoinKind::Cross {
                    return Err(self.error());
                }
            }
            acc = TableRef::Join(Box::new(join));
        }
    }

    /// Parses `LEFT [OUTER]` or `RIGHT [OUTER]`.
    fn parse_outer_join_kind(&mut self) -> Result<Option<JoinKind>, ParseError> {
        let kind = match self.current().as_keyword() {
            Some(Keyword::Left) => JoinKind::Left,
            Some(Keyword::Right) => JoinKind::Right,
            _ => return Ok(None),
        };
        self.advance();
        self.eat_keyword(Keyword::Outer);
        Ok(Some(kind))
    }

    fn parse_table_factor(&mut self) -> Result<TableRef, ParseError> {
        if self.check(&TokenKind::LeftParen) {
            let derived = if self.is_query_start(1) {
                Some(self.parse_subquery()?)
            } else if self.peek_kind(1) == &TokenKind::LeftParen {
                self.speculate(Self::parse_subquery)
            } else {
                None
            };
            if let Some(query) = derived {
                let alias = self.parse_alias()?;
                let columns = if alias.is_some() && self.check(&TokenKind::LeftParen) {
                    self.parse_paren_identifier_list()?
                } else {
                    Vec::new()
                };
                return Ok(TableRef::Derived {
                    query: Box::new(query),
                    alias,
                    columns,
                });
            }
            self.advance();
            let refs = self.parse_table_refs()?;
            self.expect(&TokenKind::RightParen)?;
            return Ok(refs);
        }

        let mut source = TableSource::new(self.parse_table_name()?);
        source.partitions = self.parse_opt_partition_names()?;
        if self.check_keyword(Keyword::As) && self.check_keyword_at(1, Keyword::Of) {
            self.advance();
            self.advance();
            self.expect_keyword(Keyword::Timestamp)?;
            source.as_of = Some(self.parse_expr()?);
        }
        source.alias = self.parse_alias()?;
        source.index_hints = self.parse_index_hints()?;
        Ok(TableRef::Table(Box::new(source)))
    }

    fn parse_index_hints(&mut self) -> Result<Vec<IndexHint>, ParseError> {
        let mut hints = Vec::new();
        loop {
            let kind = match self.current().as_keyword() {
                Some(Keyword::Use) => IndexHintKind::Use,
                Some(Keyword::Ignore) => IndexHintKind::Ignore,
                Some(Keyword::Force) => IndexHintKind::Force,
                _ => return Ok(hints),
            };
            if !matches!(
                self.peek_kind(1),
                TokenKind::Keyword(Keyword::Index | Keyword::Key)
            ) {
                return Ok(hints);
            }
            self.advance();
            self.advance();
            let scope = if self.eat_keyword(Keyword::For) {
                if self.eat_keyword(Keyword::Join) {
                    IndexHintScope::Join
                } else if self.eat_keyword(Keyword::Order) {
                    self.expect_keyword(Keyword::By)?;
                    IndexHintScope::OrderBy
                } else {
                    self.expect_keyword(Keyword::Group)?;
                    self.expect_keyword(Keyword::By)?;
                    IndexHintScope::GroupBy
                }
            } else {
                IndexHintScope::Any
            };
            self.expect(&TokenKind::LeftParen)?;
            let mut indexes = Vec::new();
            while !self.check(&TokenKind::RightParen) {
                if self.eat_keyword(Keyword::Primary) {
                    indexes.push("PRIMARY".to_string());
                } else {
                    indexes.push(self.expect_identifier()?);
                }
                if !self.eat(&TokenKind::Comma) {
                    break;
                }
            }
            self.expect(&TokenKind::RightParen)?;
            hints.push(IndexHint {
                kind,
                scope,
                indexes,
            });
        }
    }

    // Tail clauses

    /// Parses `LIMIT`, `LIMIT ... OFFSET` or `OFFSET ... FETCH`.
    pub(super) fn parse_limit(&mut self) -> Result<Option<Limit>, ParseError> {
        if self.eat_keyword(Keyword::Limit) {
            let first = self.parse_limit_value()?;
            if self.eat(&TokenKind::Comma) {
                let count = self.parse_limit_value()?;
                return Ok(Some(Limit {
                    count,
                    offset: Some(first),
                }));
            }
            let offset = if self.eat_keyword(Keyword::Offset) {
                Some(self.parse_limit_value()?)
            } else {
                None
            };
            return Ok(Some(Limit {
                count: first,
                offset,
            }));
        }

        let offset = if self.eat_keyword(Keyword::Offset) {
            let offset = self.parse_limit_value()?;
            let _ = self.eat_keyword(Keyword::Rows) || self.eat_keyword(Keyword::Row);
            Some(offset)
        } else {
            None
        };
        if self.eat_keyword(Keyword::Fetch) {
            if !self.eat_keyword(Keyword::First) {
                self.expect_keyword(Keyword::Next)?;
            }
            let count = if matches!(self.current().kind, TokenKind::Keyword(Keyword::Row | Keyword::Rows)) {
                Expr::with_span(ExprKind::Literal(Literal::Int(1)), self.current().span)
            } else {
                self.parse_limit_value()?
            };
            if !self.eat_keyword(Keyword::Rows) {
                self.expect_keyword(Keyword::Row)?;
            }
            self.expect_keyword(Keyword::Only)?;
            return Ok(Some(Limit { count, offset }));
        }
        match offset {
            Some(_) => Err(self.error()),
            None => Ok(None),
        }
    }

    /// An integer, `?` or a user variable.
    fn parse_limit_value(&mut self) -> Result<Expr, ParseError> {
        let span = self.current().span;
        let kind = match self.current().kind.clone() {
            TokenKind::Integer(value) => ExprKind::Literal(
                i64::try_from(value).map_or(Literal::Uint(value), Literal::Int),
            ),
            TokenKind::Question => {
                self.advance();
                return Ok(Expr::with_span(
                    ExprKind::Placeholder(self.next_placeholder()),
                    span,
                ));
            }
            TokenKind::UserVariable(name) => ExprKind::Variable(Variable::User(name)),
            _ => return Err(self.error()),
        };
        self.advance();
        Ok(Expr::with_span(kind, span))
    }

    fn parse_lock_clause(&mut self) -> Result<Option<LockClause>, ParseError> {
        if self.check_keyword(Keyword::Lock) && self.check_keyword_at(1, Keyword::In) {
            self.advance();
            self.advance();
            self.expect_keyword(Keyword::Share)?;
            self.expect_keyword(Keyword::Mode)?;
            return Ok(Some(LockClause {
                mode: LockMode::InShareMode,
                tables: Vec::new(),
                wait: LockWait::Default,
            }));
        }
        if !self.check_keyword(Keyword::For)
            || !matches!(
                self.peek_kind(1),
                TokenKind::Keyword(Keyword::Update | Keyword::Share)
            )
        {
            return Ok(None);
        }
        self.advance();
        let mode = if self.eat_keyword(Keyword::Update) {
            LockMode::Update
        } else {
            self.expect_keyword(Keyword::Share)?;
            LockMode::Share
        };
        let tables = if self.eat_keyword(Keyword::Of) {
            self.parse_table_name_list()?
        } else {
            Vec::new()
        };
        let wait = if self.eat_keyword(Keyword::Nowait) {
            LockWait::NoWait
        } else if self.eat_keyword(Keyword::Wait) {
            LockWait::Wait(self.expect_u64()?)
        } else if self.eat_keyword(Keyword::Skip) {
            self.expect_keyword(Keyword::Locked)?;
            LockWait::SkipLocked
        } else {
            LockWait::Default
        };
        Ok(Some(LockClause { mode, tables, wait }))
    }

    fn parse_select_into(&mut self) -> Result<SelectInto, ParseError> {
        self.expect_keyword(Keyword::Into)?;
        if self.eat_keyword(Keyword::Outfile) {
            let path = self.expect_string()?;
            let fields = self.parse_fields_clause()?;
            let lines = self.parse_lines_clause()?;
            return Ok(SelectInto::Outfile {
                path,
                fields,
                lines,
            });
        }
        if self.eat_word("dumpfile") {
            return Ok(SelectInto::Dumpfile(self.expect_string()?));
        }
        let mut targets = Vec::new();
        loop {
            let span = self.current().span;
            let kind = match self.current().kind.clone() {
                TokenKind::UserVariable(name) => ExprKind::Variable(Variable::User(name)),
                _ => ExprKind::Column(ColumnName::new(self.expect_identifier()?)),
            };
            if matches!(kind, ExprKind::Variable(_)) {
                self.advance();
            }
            targets.push(Expr::with_span(kind, span));
            if !self.eat(&TokenKind::Comma) {
                return Ok(SelectInto::Variables(targets));
            }
        }
    }

    /// A separator value: a string or a hexadecimal/bit literal.
    fn parse_separator_bytes(&mut self) -> Result<Vec<u8>, ParseError> {
        match &self.current().kind {
            TokenKind::HexString(bytes) | TokenKind::BitString(bytes) => {
                let bytes = bytes.clone();
                self.advance();
                Ok(bytes)
            }
            _ => self.expect_string_bytes(),
        }
    }

    /// Parses a single-byte separator such as `ENCLOSED BY`.
    fn parse_single_byte_separator(&mut self, clause: &str) -> Result<Vec<u8>, ParseError> {
        let start = self.current().span.start;
        let bytes = self.parse_separator_bytes()?;
        if bytes.len() > 1 {
            return Err(self.error_at(
                ErrorCode::FieldSeparatorArg,
                format!(
                    "Field separator argument is not what is expected; check the manual ({clause})"
                ),
                self.span_from(start),
            ));
        }
        Ok(bytes)
    }

    /// Parses an optional `FIELDS` / `COLUMNS` clause.
    pub(super) fn parse_fields_clause(&mut self) -> Result<Option<FieldsClause>, ParseError> {
        let columns_keyword = if self.eat_keyword(Keyword::Fields) {
            false
        } else if self.eat_keyword(Keyword::Columns) {
            true
        } else {
            return Ok(None);
        };
        let mut fields = FieldsClause {
            columns_keyword,
            ..FieldsClause::default()
        };
        loop {
            if self.eat_keyword(Keyword::Terminated) {
                self.expect_keyword(Keyword::By)?;
                fields.terminated = Some(self.parse_separator_bytes()?);
            } else if self.check_keyword(Keyword::Optionally) || self.check_keyword(Keyword::Enclosed) {
                fields.optionally = self.eat_keyword(Keyword::Optionally);
                self.expect_keyword(Keyword::Enclosed)?;
                self.expect_keyword(Keyword::By)?;
                fields.enclosed = Some(self.parse_single_byte_separator("ENCLOSED BY")?);
            } else if self.eat_keyword(Keyword::Escaped) {
                self.expect_keyword(Keyword::By)?;
                fields.escaped = Some(self.parse_single_byte_separator("ESCAPED BY")?);
            } else if self.check_word("defined") {
                self.advance();
                self.expect_keyword(Keyword::Null)?;
                self.expect_keyword(Keyword::By)?;
                fields.defined_null_by = Some(self.parse_separator_bytes()?);
            } else {
                break;
            }
        }
        if fields.is_empty() {
            return Err(self.error());
        }
        Ok(Some(fields))
    }

    /// Parses an optional `LINES` clause.
    pub(super) fn parse_lines_clause(&mut self) -> Result<Option<LinesClause>, ParseError> {
        if !self.eat_keyword(Keyword::Lines) {
            return Ok(None);
        }
        let mut lines = LinesClause::default();
        loop {
            if self.eat_keyword(Keyword::Starting) {
                self.expect_keyword(Keyword::By)?;
                lines.starting = Some(self.parse_separator_bytes()?);
            } else if self.eat_keyword(Keyword::Terminated) {
                self.expect_keyword(Keyword::By)?;
                lines.terminated = Some(self.parse_separator_bytes()?);
            } else {
                break;
            }
        }
        if lines.starting.is_none() && lines.terminated.is_none() {
            return Err(self.error());
        }
        Ok(Some(lines))
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::{
        ExprKind, JoinKind, LockMode, LockWait, Query, QueryBody, SelectField, SetOperator,
        Statement, TableRef,
    };
    use crate::{ErrorCode, Parser};

    fn query(sql: &str) -> Query {
        match Parser::new().parse_one_stmt(sql, "", "").unwrap().stmt {
            Statement::Select(query) => *query,
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_intersect_binds_tighter() {
        let q = query("SELECT 1 UNION SELECT 2 INTERSECT SELECT 3");
        let QueryBody::SetOp { op, right, .. } = q.body else {
            panic!("expected set operation");
        };
        assert_eq!(op, SetOperator::Union);
        assert!(matches!(*right, QueryBody::SetOp { op: SetOperator::Intersect, .. }));
    }

    #[test]
    fn test_trailing_order_binds_to_set_operation() {
        let q = query("SELECT a FROM t UNION ALL SELECT b FROM u ORDER BY 1 LIMIT 2");
        assert!(matches!(q.body, QueryBody::SetOp { all: true, .. }));
        assert_eq!(q.order_by.len(), 1);
        assert!(q.limit.is_some());
    }

    #[test]
    fn test_comma_join_is_left_nested() {
        let q = query("SELECT * FROM t1, t2, t3");
        let QueryBody::Select(select) = q.body else {
            panic!("expected select");
        };
        let Some(TableRef::Join(outer)) = select.from else {
            panic!("expected join");
        };
        assert!(matches!(outer.left, TableRef::Join(_)));
        assert!(matches!(outer.right, Some(TableRef::Table(_))));
    }

    #[test]
    fn test_left_join_requires_condition() {
        assert!(Parser::new()
            .parse_one_stmt("SELECT * FROM a LEFT JOIN b", "", "")
            .is_err());
        let q = query("SELECT * FROM a NATURAL LEFT JOIN b");
        let QueryBody::Select(select) = q.body else {
            panic!("expected select");
        };
        let Some(TableRef::Join(join)) = select.from else {
            panic!("expected join");
        };
        assert!(join.natural);
        assert_eq!(join.kind, JoinKind::Left);
        assert!(Parser::new()
            .parse_one_stmt("SELECT * FROM a NATURAL INNER JOIN b", "", "")
            .is_err());
    }

    #[test]
    fn test_qualified_wildcards() {
        let q = query("SELECT t.*, db.u.* FROM t");
        let QueryBody::Select(select) = q.body else {
            panic!("expected select");
        };
        assert!(matches!(&select.fields[1], SelectField::Wildcard { table: Some(t) } if t.schema.as_deref() == Some("db")));
    }

    #[test]
    fn test_fetch_normalizes_to_limit() {
        let q = query("SELECT * FROM t OFFSET 5 ROWS FETCH NEXT 3 ROWS ONLY");
        let limit = q.limit.unwrap();
        assert!(limit.offset.is_some());
        assert!(matches!(limit.count.kind, ExprKind::Literal(_)));
    }

    #[test]
    fn test_lock_clauses() {
        let q = query("SELECT * FROM t FOR UPDATE OF t NOWAIT");
        let lock = q.lock.unwrap();
        assert_eq!(lock.mode, LockMode::Update);
        assert_eq!(lock.wait, LockWait::NoWait);
        assert_eq!(lock.tables.len(), 1);
        assert_eq!(
            query("SELECT 1 LOCK IN SHARE MODE").lock.unwrap().mode,
            LockMode::InShareMode
        );
    }

    #[test]
    fn test_outfile_enclosed_by_must_be_one_byte() {
        let err = Parser::new()
            .parse("SELECT a FROM t INTO OUTFILE '/tmp/x' FIELDS ENCLOSED BY 'ab'", "", "")
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::FieldSeparatorArg);
    }

    #[test]
    fn test_empty_db_name() {
        let err = Parser::new()
            .parse("SELECT * FROM ` `.t", "", "")
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::WrongDbName);
    }

    #[test]
    fn test_values_and_table_bodies() {
        assert!(matches!(query("VALUES ROW(1, 2), ROW(3, 4)").body, QueryBody::Values(rows) if rows.len() == 2));
        assert!(matches!(query("TABLE t ORDER BY a").body, QueryBody::Table(_)));
    }
}
