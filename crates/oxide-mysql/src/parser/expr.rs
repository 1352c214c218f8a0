//! Expression grammar.
//!
//! `parse_expression` is a Pratt loop over the binding powers in
//! [`pratt`](super::pratt); predicates (`IS`, `IN`, `BETWEEN`, `LIKE`,
//! `REGEXP`, `MEMBER OF`) and `COLLATE` are special-cased inside the loop.

use super::error::{ErrorCode, ParseError};
use super::parser::Grammar;
use super::pratt::{
    infix_binding_power, token_to_binary_op, ADDITIVE_BP, ASSIGN_BP, BIT_EXPR_BP, CONCAT_BP, HIGH_NOT_BP,
    NOT_BP, PREDICATE_BP, UNARY_BP,
};
use crate::ast::{
    BinaryOp, CastFunction, CastType, ColumnName, Expr, ExprKind, FrameBound, FrameUnit,
    FuncCall, GetFormatSelector, InList, LikeKind, Literal, MatchModifier, NullTreatment,
    OrderItem, Over, Quantifier, StringLiteral, TemporalKind, TimeUnit, TrimDirection, UnaryOp,
    VarScope, Variable, WindowFrame, WindowSpec,
};
use crate::lexer::{Keyword, TokenKind};
use crate::SqlMode;

/// Built-in functions that are calls only when `(` directly follows the
/// name, unless `IGNORE_SPACE` is on.
const SPACE_SENSITIVE_FUNCTIONS: &[&str] = &[
    "adddate",
    "bit_and",
    "bit_or",
    "bit_xor",
    "cast",
    "count",
    "curdate",
    "curtime",
    "date_add",
    "date_sub",
    "extract",
    "group_concat",
    "max",
    "mid",
    "min",
    "now",
    "position",
    "session_user",
    "std",
    "stddev",
    "stddev_pop",
    "stddev_samp",
    "subdate",
    "substr",
    "substring",
    "sum",
    "sysdate",
    "system_user",
    "trim",
    "var_pop",
    "var_samp",
    "variance",
];

/// Aggregates that accept `DISTINCT` or `ALL` before their arguments.
const AGGREGATES: &[&str] = &[
    "approx_count_distinct",
    "approx_percentile",
    "avg",
    "bit_and",
    "bit_or",
    "bit_xor",
    "count",
    "group_concat",
    "json_arrayagg",
    "json_objectagg",
    "max",
    "min",
    "std",
    "stddev",
    "stddev_pop",
    "stddev_samp",
    "sum",
    "var_pop",
    "var_samp",
    "variance",
];

/// Splits `scope.name` of a system variable.
pub(super) fn system_variable(name: &str) -> Variable {
    if let Some((prefix, rest)) = name.split_once('.') {
        let scope = match prefix {
            "global" => Some(VarScope::Global),
            "session" | "local" => Some(VarScope::Session),
            "instance" => Some(VarScope::Instance),
            _ => None,
        };
        if let Some(scope) = scope {
            return Variable::System {
                name: rest.to_string(),
                scope,
            };
        }
    }
    Variable::System {
        name: name.to_string(),
        scope: VarScope::Implicit,
    }
}

impl Grammar<'_> {
    /// Parses a full expression.
    pub(super) fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        self.parse_expression(0)
    }

    /// Parses `expr, expr, ...`.
    pub(super) fn parse_expr_list(&mut self) -> Result<Vec<Expr>, ParseError> {
        let mut exprs = vec![self.parse_expr()?];
        while self.eat(&TokenKind::Comma) {
            exprs.push(self.parse_expr()?);
        }
        Ok(exprs)
    }

    /// Parses `(expr, ...)`.
    pub(super) fn parse_paren_expr_list(&mut self) -> Result<Vec<Expr>, ParseError> {
        self.expect(&TokenKind::LeftParen)?;
        let exprs = self.parse_expr_list()?;
        self.expect(&TokenKind::RightParen)?;
        Ok(exprs)
    }

    /// Parses the items of an `ORDER BY` list.
    pub(super) fn parse_order_by_items(&mut self) -> Result<Vec<OrderItem>, ParseError> {
        let mut items = Vec::new();
        loop {
            let expr = self.parse_expr()?;
            let desc = if self.eat_keyword(Keyword::Desc) {
                true
            } else {
                self.eat_keyword(Keyword::Asc);
                false
            };
            items.push(OrderItem { expr, desc });
            if !self.eat(&TokenKind::Comma) {
                return Ok(items);
            }
        }
    }

    /// Parses `[schema.][table.]column`.
    pub(super) fn parse_column_name(&mut self) -> Result<ColumnName, ParseError> {
        let first = self.expect_identifier()?;
        if !self.eat(&TokenKind::Dot) {
            return Ok(ColumnName::new(first));
        }
        let second = self.expect_identifier()?;
        if !self.eat(&TokenKind::Dot) {
            return Ok(ColumnName {
                schema: None,
                table: Some(first),
                name: second,
            });
        }
        let third = self.expect_identifier()?;
        Ok(ColumnName {
            schema: Some(first),
            table: Some(second),
            name: third,
        })
    }

    /// Returns the time unit named by token `n`, if any.
    pub(super) fn time_unit_at(&self, n: usize) -> Option<TimeUnit> {
        match self.peek_kind(n) {
            TokenKind::Keyword(kw) => TimeUnit::from_name(kw.as_str()),
            TokenKind::Identifier(name) => TimeUnit::from_name(name),
            _ => None,
        }
    }

    pub(super) fn parse_time_unit(&mut self) -> Result<TimeUnit, ParseError> {
        let unit = self.time_unit_at(0).ok_or_else(|| self.error())?;
        self.advance();
        Ok(unit)
    }

    /// Parses an expression with the given minimum binding power.
    pub(super) fn parse_expression(&mut self, min_bp: u8) -> Result<Expr, ParseError> {
        let start = self.current().span.start;
        let mut lhs = self.parse_prefix()?;

        loop {
            let kind = self.current().kind.clone();

            // `||` under PIPES_AS_CONCAT
            if kind == TokenKind::LogicOr && self.sql_mode().contains(SqlMode::PIPES_AS_CONCAT) {
                if CONCAT_BP.0 < min_bp {
                    break;
                }
                self.advance();
                let rhs = self.parse_expression(CONCAT_BP.1)?;
                let call = FuncCall::new("concat", vec![lhs, rhs]);
                lhs = Expr::with_span(ExprKind::Func(Box::new(call)), self.span_from(start));
                continue;
            }

            // MEMBER OF (json)
            if self.check_word("member") && self.check_keyword_at(1, Keyword::Of) {
                if PREDICATE_BP < min_bp {
                    break;
                }
                self.advance();
                self.advance();
                self.expect(&TokenKind::LeftParen)?;
                let target = self.parse_expr()?;
                self.expect(&TokenKind::RightParen)?;
                lhs = Expr::with_span(
                    ExprKind::MemberOf {
                        value: Box::new(lhs),
                        target: Box::new(target),
                    },
                    self.span_from(start),
                );
                continue;
            }

            let Some((l_bp, r_bp)) = infix_binding_power(&kind) else {
                break;
            };
            if l_bp < min_bp {
                break;
            }

            lhs = match kind {
                TokenKind::Keyword(Keyword::Is) => {
                    self.advance();
                    self.parse_is(lhs, start)?
                }
                TokenKind::Keyword(Keyword::Not) => {
                    if !matches!(
                        self.peek_kind(1),
                        TokenKind::Keyword(
                            Keyword::In
                                | Keyword::Between
                                | Keyword::Like
                                | Keyword::Ilike
                                | Keyword::Regexp
                                | Keyword::Rlike
                        )
                    ) {
                        break;
                    }
                    self.advance();
                    self.parse_predicate(lhs, true, start)?
                }
                TokenKind::Keyword(
                    Keyword::In
                    | Keyword::Between
                    | Keyword::Like
                    | Keyword::Ilike
                    | Keyword::Regexp
                    | Keyword::Rlike,
                ) => self.parse_predicate(lhs, false, start)?,
                TokenKind::Keyword(Keyword::Collate) => {
                    self.advance();
                    let collation = self.parse_collation_name()?;
                    Expr::with_span(
                        ExprKind::Collate {
                            expr: Box::new(lhs),
                            collation,
                        },
                        self.span_from(start),
                    )
                }
                _ => {
                    let Some(op) = token_to_binary_op(&kind) else {
                        break;
                    };
                    self.advance();
                    self.parse_binary_rhs(lhs, op, r_bp, start)?
                }
            };
        }

        Ok(lhs)
    }

    fn parse_binary_rhs(
        &mut self,
        lhs: Expr,
        op: BinaryOp,
        r_bp: u8,
        start: usize,
    ) -> Result<Expr, ParseError> {
        // a = ANY (subquery)
        if op.is_comparison()
            && matches!(
                self.peek_kind(0),
                TokenKind::Keyword(Keyword::Any | Keyword::Some | Keyword::All)
            )
            && self.peek_kind(1) == &TokenKind::LeftParen
        {
            let quantifier = if self.check_keyword(Keyword::All) {
                Quantifier::All
            } else {
                Quantifier::Any
            };
            self.advance();
            let query = self.parse_subquery()?;
            return Ok(Expr::with_span(
                ExprKind::CompareSubquery {
                    left: Box::new(lhs),
                    op,
                    quantifier,
                    query: Box::new(query),
                },
                self.span_from(start),
            ));
        }

        // a + INTERVAL n unit
        if matches!(op, BinaryOp::Plus | BinaryOp::Minus) && self.eat_keyword(Keyword::Interval) {
            let amount = self.parse_expr()?;
            let unit_start = self.current().span.start;
            let unit = self.parse_time_unit()?;
            let name = if op == BinaryOp::Plus {
                "date_add"
            } else {
                "date_sub"
            };
            let unit = Expr::with_span(ExprKind::TimeUnit(unit), self.span_from(unit_start));
            let call = FuncCall::new(name, vec![lhs, amount, unit]);
            return Ok(Expr::with_span(
                ExprKind::Func(Box::new(call)),
                self.span_from(start),
            ));
        }

        let rhs = self.parse_expression(r_bp)?;
        Ok(Expr::with_span(
            ExprKind::Binary {
                left: Box::new(lhs),
                op,
                right: Box::new(rhs),
            },
            self.span_from(start),
        ))
    }

    fn parse_is(&mut self, lhs: Expr, start: usize) -> Result<Expr, ParseError> {
        let negated = self.eat_keyword(Keyword::Not);
        let expr = Box::new(lhs);
        let kind = if self.eat_keyword(Keyword::Null) || self.eat_keyword(Keyword::Unknown) {
            ExprKind::IsNull { expr, negated }
        } else if self.eat_keyword(Keyword::True) {
            ExprKind::IsTruth {
                expr,
                value: true,
                negated,
            }
        } else if self.eat_keyword(Keyword::False) {
            ExprKind::IsTruth {
                expr,
                value: false,
                negated,
            }
        } else {
            return Err(self.error());
        };
        Ok(Expr::with_span(kind, self.span_from(start)))
    }

    /// Parses IN, BETWEEN, LIKE or REGEXP after the left operand (and `NOT`).
    fn parse_predicate(
        &mut self,
        lhs: Expr,
        negated: bool,
        start: usize,
    ) -> Result<Expr, ParseError> {
        let Some(keyword) = self.current().as_keyword() else {
            return Err(self.error());
        };
        self.advance();
        let expr = Box::new(lhs);
        let kind = match keyword {
            Keyword::In => ExprKind::In {
                expr,
                list: self.parse_in_list()?,
                negated,
            },
            Keyword::Between => {
                let low = self.parse_expression(BIT_EXPR_BP)?;
                self.expect_keyword(Keyword::And)?;
                let high = self.parse_expression(PREDICATE_BP)?;
                ExprKind::Between {
                    expr,
                    low: Box::new(low),
                    high: Box::new(high),
                    negated,
                }
            }
            Keyword::Like | Keyword::Ilike => {
                let pattern = self.parse_expression(BIT_EXPR_BP)?;
                let escape = if self.eat_keyword(Keyword::Escape) {
                    self.parse_escape_char()?
                } else {
                    None
                };
                ExprKind::Like {
                    expr,
                    pattern: Box::new(pattern),
                    escape,
                    negated,
                    kind: if keyword == Keyword::Like {
                        LikeKind::Like
                    } else {
                        LikeKind::Ilike
                    },
                }
            }
            _ => ExprKind::Regexp {
                expr,
                pattern: Box::new(self.parse_expression(BIT_EXPR_BP)?),
                negated,
            },
        };
        Ok(Expr::with_span(kind, self.span_from(start)))
    }

    fn parse_escape_char(&mut self) -> Result<Option<u8>, ParseError> {
        let span = self.current().span;
        let bytes = self.expect_string_bytes()?;
        match bytes.as_slice() {
            [] => Ok(None),
            [byte] => Ok(Some(*byte)),
            _ => Err(self.error_at(
                ErrorCode::UnknownEscapeChar,
                "Incorrect arguments to ESCAPE",
                span,
            )),
        }
    }

    fn parse_in_list(&mut self) -> Result<InList, ParseError> {
        if self.is_query_start(1) {
            return Ok(InList::Subquery(Box::new(self.parse_subquery()?)));
        }
        if self.peek_kind(1) == &TokenKind::LeftParen {
            if let Some(query) = self.speculate(Self::parse_subquery) {
                return Ok(InList::Subquery(Box::new(query)));
            }
        }
        Ok(InList::Exprs(self.parse_paren_expr_list()?))
    }

    fn parse_prefix(&mut self) -> Result<Expr, ParseError> {
        let start = self.current().span.start;
        let high_not = self.sql_mode().contains(SqlMode::HIGH_NOT_PRECEDENCE);
        let (op, bp) = match self.current().kind {
            TokenKind::Minus => (UnaryOp::Minus, UNARY_BP),
            TokenKind::Plus => (UnaryOp::Plus, UNARY_BP),
            TokenKind::BitNot => (UnaryOp::BitNeg, UNARY_BP),
            TokenKind::Bang => (UnaryOp::Not2, HIGH_NOT_BP),
            TokenKind::Keyword(Keyword::Not) if high_not => (UnaryOp::Not2, HIGH_NOT_BP),
            TokenKind::Keyword(Keyword::Not) => (UnaryOp::Not, NOT_BP),
            TokenKind::Keyword(Keyword::Binary) => {
                self.advance();
                let operand = self.parse_expression(HIGH_NOT_BP)?;
                return Ok(Expr::with_span(
                    ExprKind::Cast {
                        expr: Box::new(operand),
                        target: CastType::Binary(None),
                        array: false,
                        function: CastFunction::BinaryOperator,
                    },
                    self.span_from(start),
                ));
            }
            _ => return self.parse_postfix(),
        };
        self.advance();
        let operand = self.parse_expression(bp)?;
        let kind = match operand.kind {
            // NOT EXISTS folds into the subquery test
            ExprKind::Exists { query, negated } if op == UnaryOp::Not => ExprKind::Exists {
                query,
                negated: !negated,
            },
            kind => ExprKind::Unary {
                op,
                expr: Box::new(Expr::with_span(kind, operand.span)),
            },
        };
        Ok(Expr::with_span(kind, self.span_from(start)))
    }

    /// Parses a primary expression and a trailing `->` / `->>`.
    fn parse_postfix(&mut self) -> Result<Expr, ParseError> {
        let start = self.current().span.start;
        let primary = self.parse_primary()?;
        let unquote = match self.current().kind {
            TokenKind::JsonExtract => false,
            TokenKind::JsonUnquoteExtract => true,
            _ => return Ok(primary),
        };
        let ExprKind::Column(column) = primary.kind else {
            return Err(self.error());
        };
        self.advance();
        let path = self.expect_string()?;
        Ok(Expr::with_span(
            ExprKind::JsonExtract {
                column,
                path,
                unquote,
            },
            self.span_from(start),
        ))
    }

    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let token = self.current().clone();
        let start = token.span.start;
        let literal = |grammar: &Self, lit: Literal| {
            Expr::with_span(ExprKind::Literal(lit), grammar.span_from(start))
        };
        match token.kind {
            TokenKind::Integer(value) => {
                self.advance();
                let lit = i64::try_from(value).map_or(Literal::Uint(value), Literal::Int);
                Ok(literal(self, lit))
            }
            TokenKind::Decimal(text) => {
                self.advance();
                Ok(literal(self, Literal::Decimal(text)))
            }
            TokenKind::Float(value) => {
                self.advance();
                Ok(literal(self, Literal::Float(value)))
            }
            TokenKind::HexString(bytes) => {
                self.advance();
                Ok(literal(self, Literal::Hex(bytes)))
            }
            TokenKind::BitString(bytes) => {
                self.advance();
                Ok(literal(self, Literal::Bit(bytes)))
            }
            TokenKind::String(_) | TokenKind::NationalString(_) | TokenKind::Introducer(_) => {
                let value = self.parse_string_literal()?;
                Ok(literal(self, Literal::String(value)))
            }
            TokenKind::Question => {
                self.advance();
                let index = self.next_placeholder();
                Ok(Expr::with_span(
                    ExprKind::Placeholder(index),
                    self.span_from(start),
                ))
            }
            TokenKind::UserVariable(name) => {
                self.advance();
                let variable = Variable::User(name);
                if self.eat(&TokenKind::Assign) {
                    let value = self.parse_expression(ASSIGN_BP)?;
                    return Ok(Expr::with_span(
                        ExprKind::Assign {
                            variable,
                            value: Box::new(value),
                        },
                        self.span_from(start),
                    ));
                }
                Ok(Expr::with_span(
                    ExprKind::Variable(variable),
                    self.span_from(start),
                ))
            }
            TokenKind::SystemVariable(name) => {
                self.advance();
                Ok(Expr::with_span(
                    ExprKind::Variable(system_variable(&name)),
                    self.span_from(start),
                ))
            }
            TokenKind::LeftParen => self.parse_paren_expr(start),
            TokenKind::LeftBrace => self.parse_odbc_literal(start),
            TokenKind::Keyword(kw) => self.parse_keyword_primary(kw, start),
            TokenKind::Identifier(_) | TokenKind::QuotedIdentifier(_) => {
                self.parse_identifier_expr(start)
            }
            _ => Err(self.error()),
        }
    }

    fn parse_keyword_primary(&mut self, kw: Keyword, start: usize) -> Result<Expr, ParseError> {
        let next_is_paren = self.peek_kind(1) == &TokenKind::LeftParen;
        let kind = match kw {
            Keyword::Null => ExprKind::Literal(Literal::Null),
            Keyword::True => ExprKind::Literal(Literal::Bool(true)),
            Keyword::False => ExprKind::Literal(Literal::Bool(false)),
            Keyword::Maxvalue => ExprKind::MaxValue,
            Keyword::Case => return self.parse_case(start),
            Keyword::Exists => {
                self.advance();
                let query = self.parse_subquery()?;
                return Ok(Expr::with_span(
                    ExprKind::Exists {
                        query: Box::new(query),
                        negated: false,
                    },
                    self.span_from(start),
                ));
            }
            Keyword::Interval => return self.parse_interval(start),
            Keyword::Match => return self.parse_match(start),
            Keyword::Default => {
                self.advance();
                if self.eat(&TokenKind::LeftParen) {
                    let column = self.parse_column_name()?;
                    self.expect(&TokenKind::RightParen)?;
                    return Ok(Expr::with_span(
                        ExprKind::Default(Some(column)),
                        self.span_from(start),
                    ));
                }
                return Ok(Expr::with_span(
                    ExprKind::Default(None),
                    self.span_from(start),
                ));
            }
            Keyword::Values if next_is_paren => {
                self.advance();
                self.advance();
                let column = self.parse_column_name()?;
                self.expect(&TokenKind::RightParen)?;
                return Ok(Expr::with_span(
                    ExprKind::Values(column),
                    self.span_from(start),
                ));
            }
            Keyword::Row if next_is_paren => {
                self.advance();
                let items = self.parse_paren_expr_list()?;
                return Ok(Expr::with_span(ExprKind::Row(items), self.span_from(start)));
            }
            Keyword::Date | Keyword::Time | Keyword::Timestamp
                if matches!(self.peek_kind(1), TokenKind::String(_)) =>
            {
                self.advance();
                let value = self.expect_string()?;
                let kind = match kw {
                    Keyword::Date => TemporalKind::Date,
                    Keyword::Time => TemporalKind::Time,
                    _ => TemporalKind::Timestamp,
                };
                return Ok(Expr::with_span(
                    ExprKind::Literal(Literal::Temporal { kind, value }),
                    self.span_from(start),
                ));
            }
            Keyword::Next if self.check_word_at(1, "value") && self.check_keyword_at(2, Keyword::For) => {
                self.advance();
                self.advance();
                self.advance();
                let table_start = self.current().span.start;
                let table = self.parse_table_name()?;
                let arg = Expr::with_span(ExprKind::TableName(table), self.span_from(table_start));
                let call = FuncCall::new("nextval", vec![arg]);
                return Ok(Expr::with_span(
                    ExprKind::Func(Box::new(call)),
                    self.span_from(start),
                ));
            }
            Keyword::CurrentDate
            | Keyword::CurrentTime
            | Keyword::CurrentTimestamp
            | Keyword::Localtime
            | Keyword::Localtimestamp
            | Keyword::UtcDate
            | Keyword::UtcTime
            | Keyword::UtcTimestamp
            | Keyword::CurrentUser
            | Keyword::CurrentRole
                if !next_is_paren =>
            {
                self.advance();
                let call = FuncCall::new(kw.as_str().to_ascii_lowercase(), Vec::new());
                return Ok(Expr::with_span(
                    ExprKind::Func(Box::new(call)),
                    self.span_from(start),
                ));
            }
            _ if next_is_paren
                && (kw.is_function_name()
                    || (self.config.enable_window_func && kw.is_window_reserved())) =>
            {
                self.advance();
                return self.parse_function_call(None, kw.as_str().to_ascii_lowercase(), start);
            }
            _ if !kw.is_reserved(self.config.enable_window_func) => {
                return self.parse_identifier_expr(start);
            }
            _ => return Err(self.error()),
        };
        self.advance();
        Ok(Expr::with_span(kind, self.span_from(start)))
    }

    /// Parses a column reference or a function call starting with a name.
    fn parse_identifier_expr(&mut self, start: usize) -> Result<Expr, ParseError> {
        let first = self.expect_identifier()?;
        if self.check(&TokenKind::LeftParen) {
            if self.is_call(&first) {
                return self.parse_function_call(None, first, start);
            }
        } else if self.sql_mode().contains(SqlMode::IGNORE_SPACE)
            && is_space_sensitive(&first)
            && !self.check(&TokenKind::Dot)
        {
            return Err(self.error_at(
                ErrorCode::ParseError,
                format!("'{first}' is a reserved function name"),
                self.previous_span(),
            ));
        }
        if !self.eat(&TokenKind::Dot) {
            return Ok(Expr::with_span(
                ExprKind::Column(ColumnName::new(first)),
                self.span_from(start),
            ));
        }
        let second = self.expect_identifier()?;
        if self.check(&TokenKind::LeftParen) {
            return self.parse_function_call(Some(first), second, start);
        }
        let column = if self.eat(&TokenKind::Dot) {
            ColumnName {
                schema: Some(first),
                table: Some(second),
                name: self.expect_identifier()?,
            }
        } else {
            ColumnName {
                schema: None,
                table: Some(first),
                name: second,
            }
        };
        Ok(Expr::with_span(ExprKind::Column(column), self.span_from(start)))
    }

    /// Decides whether `name (` is a call: space-sensitive built-ins need the
    /// parenthesis to be adjacent.
    fn is_call(&self, name: &str) -> bool {
        !is_space_sensitive(name)
            || self.previous_span().end == self.current().span.start
            || self.sql_mode().contains(SqlMode::IGNORE_SPACE)
    }

    fn parse_paren_expr(&mut self, start: usize) -> Result<Expr, ParseError> {
        if self.is_query_start(1) {
            let query = self.parse_subquery()?;
            return Ok(Expr::with_span(
                ExprKind::Subquery(Box::new(query)),
                self.span_from(start),
            ));
        }
        if self.peek_kind(1) == &TokenKind::LeftParen {
            if let Some(query) = self.speculate(Self::parse_subquery) {
                return Ok(Expr::with_span(
                    ExprKind::Subquery(Box::new(query)),
                    self.span_from(start),
                ));
            }
        }
        self.advance();
        let first = self.parse_expr()?;
        if self.eat(&TokenKind::Comma) {
            let mut items = vec![first];
            items.extend(self.parse_expr_list()?);
            self.expect(&TokenKind::RightParen)?;
            return Ok(Expr::with_span(ExprKind::Row(items), self.span_from(start)));
        }
        self.expect(&TokenKind::RightParen)?;
        Ok(Expr::with_span(
            ExprKind::Paren(Box::new(first)),
            self.span_from(start),
        ))
    }

    /// Parses `{d '...'}`, `{t '...'}` and `{ts '...'}`; any other tag
    /// yields the inner expression.
    fn parse_odbc_literal(&mut self, start: usize) -> Result<Expr, ParseError> {
        self.advance();
        let tag = self.expect_identifier()?;
        let expr = self.parse_expr()?;
        self.expect(&TokenKind::RightBrace)?;
        let kind = match tag.to_ascii_lowercase().as_str() {
            "d" => Some(TemporalKind::Date),
            "t" => Some(TemporalKind::Time),
            "ts" => Some(TemporalKind::Timestamp),
            _ => None,
        };
        match (kind, &expr.kind) {
            (Some(kind), ExprKind::Literal(Literal::String(s))) => Ok(Expr::with_span(
                ExprKind::Literal(Literal::Temporal {
                    kind,
                    value: String::from_utf8_lossy(&s.value).into_owned(),
                }),
                self.span_from(start),
            )),
            _ => Ok(expr),
        }
    }

    /// Parses a string literal with an optional introducer.
    ///
    /// Adjacent literals are concatenated. Without an introducer the literal
    /// takes the client charset; `N'...'` is `utf8`.
    pub(super) fn parse_string_literal(&mut self) -> Result<StringLiteral, ParseError> {
        let token = self.current().clone();
        let charset = match &token.kind {
            TokenKind::Introducer(name) => {
                let charset = self
                    .charsets
                    .charset(name)
                    .map(|cs| cs.name.clone())
                    .ok_or_else(|| {
                        self.error_at(
                            ErrorCode::UnknownCharacterSet,
                            format!("Unknown character set: '{name}'"),
                            token.span,
                        )
                    })?;
                self.advance();
                charset
            }
            TokenKind::NationalString(_) => "utf8".to_string(),
            _ => self.client_charset.clone(),
        };
        let introduced = matches!(token.kind, TokenKind::Introducer(_));
        let mut value = match &self.current().kind {
            TokenKind::String(bytes) | TokenKind::NationalString(bytes) => bytes.clone(),
            TokenKind::HexString(bytes) | TokenKind::BitString(bytes) if introduced => {
                bytes.clone()
            }
            _ => return Err(self.error()),
        };
        self.advance();
        while let TokenKind::String(more) = &self.current().kind {
            value.extend_from_slice(more);
            self.advance();
        }
        Ok(StringLiteral { value, charset })
    }

    fn parse_case(&mut self, start: usize) -> Result<Expr, ParseError> {
        self.advance();
        let operand = if self.check_keyword(Keyword::When) {
            None
        } else {
            Some(Box::new(self.parse_expr()?))
        };
        let mut whens = Vec::new();
        while self.eat_keyword(Keyword::When) {
            let condition = self.parse_expr()?;
            self.expect_keyword(Keyword::Then)?;
            let result = self.parse_expr()?;
            whens.push((condition, result));
        }
        if whens.is_empty() {
            return Err(self.error());
        }
        let else_result = if self.eat_keyword(Keyword::Else) {
            Some(Box::new(self.parse_expr()?))
        } else {
            None
        };
        self.expect_keyword(Keyword::End)?;
        Ok(Expr::with_span(
            ExprKind::Case {
                operand,
                whens,
                else_result,
            },
            self.span_from(start),
        ))
    }

    /// Parses `INTERVAL expr unit`, `INTERVAL expr unit + expr` and the
    /// `INTERVAL(n, n1, ...)` function.
    fn parse_interval(&mut self, start: usize) -> Result<Expr, ParseError> {
        self.advance();
        let value = if self.check(&TokenKind::LeftParen) {
            let paren_start = self.current().span.start;
            let args = self.parse_paren_expr_list()?;
            match <[Expr; 1]>::try_from(args) {
                Ok([inner]) if self.time_unit_at(0).is_some() => Expr::with_span(
                    ExprKind::Paren(Box::new(inner)),
                    self.span_from(paren_start),
                ),
                Ok([inner]) => {
                    return Ok(Expr::with_span(
                        ExprKind::Func(Box::new(FuncCall::new("interval", vec![inner]))),
                        self.span_from(start),
                    ));
                }
                Err(args) => {
                    return Ok(Expr::with_span(
                        ExprKind::Func(Box::new(FuncCall::new("interval", args))),
                        self.span_from(start),
                    ));
                }
            }
        } else {
            self.parse_expr()?
        };
        let unit = self.parse_time_unit()?;
        if self.eat(&TokenKind::Plus) {
            let unit_expr = Expr::with_span(ExprKind::TimeUnit(unit), self.previous_span());
            let rhs = self.parse_expression(ADDITIVE_BP)?;
            let call = FuncCall::new("date_add", vec![rhs, value, unit_expr]);
            return Ok(Expr::with_span(
                ExprKind::Func(Box::new(call)),
                self.span_from(start),
            ));
        }
        Ok(Expr::with_span(
            ExprKind::Interval {
                value: Box::new(value),
                unit,
            },
            self.span_from(start),
        ))
    }

    fn parse_match(&mut self, start: usize) -> Result<Expr, ParseError> {
        self.advance();
        self.expect(&TokenKind::LeftParen)?;
        let mut columns = vec![self.parse_column_name()?];
        while self.eat(&TokenKind::Comma) {
            columns.push(self.parse_column_name()?);
        }
        self.expect(&TokenKind::RightParen)?;
        self.expect_keyword(Keyword::Against)?;
        self.expect(&TokenKind::LeftParen)?;
        let against = self.parse_expression(BIT_EXPR_BP)?;
        let modifier = if self.eat_keyword(Keyword::In) {
            if self.eat_keyword(Keyword::Boolean) {
                self.expect_keyword(Keyword::Mode)?;
                MatchModifier::Boolean
            } else {
                self.expect_keyword(Keyword::Natural)?;
                self.expect_keyword(Keyword::Language)?;
                self.expect_keyword(Keyword::Mode)?;
                if self.eat_keyword(Keyword::With) {
                    self.expect_keyword(Keyword::Query)?;
                    self.expect_keyword(Keyword::Expansion)?;
                    MatchModifier::NaturalLanguageWithQueryExpansion
                } else {
                    MatchModifier::NaturalLanguage
                }
            }
        } else if self.eat_keyword(Keyword::With) {
            self.expect_keyword(Keyword::Query)?;
            self.expect_keyword(Keyword::Expansion)?;
            MatchModifier::WithQueryExpansion
        } else {
            MatchModifier::NaturalLanguage
        };
        self.expect(&TokenKind::RightParen)?;
        Ok(Expr::with_span(
            ExprKind::MatchAgainst {
                columns,
                against: Box::new(against),
                modifier,
            },
            self.span_from(start),
        ))
    }

    // Functions

    /// Parses the argument list and trailing clauses of a call; the cursor
    /// is on the opening parenthesis.
    fn parse_function_call(
        &mut self,
        schema: Option<String>,
        name: String,
        start: usize,
    ) -> Result<Expr, ParseError> {
        let lower = name.to_ascii_lowercase();
        if schema.is_none() {
            let special = match lower.as_str() {
                "cast" => Some(self.parse_cast(CastFunction::Cast, start)),
                "json_sum_crc32" => Some(self.parse_cast(CastFunction::JsonSumCrc32, start)),
                "convert" => Some(self.parse_convert(start)),
                "char" => Some(self.parse_char_function(start)),
                "extract" => Some(self.parse_extract(start)),
                "date_add" | "date_sub" | "adddate" | "subdate" => {
                    Some(self.parse_date_arith(&lower, start))
                }
                "timestampadd" | "timestampdiff" => Some(self.parse_timestamp_arith(&lower, start)),
                "get_format" => Some(self.parse_get_format(start)),
                "position" => Some(self.parse_position(start)),
                "substring" | "substr" | "mid" => Some(self.parse_substring(&lower, start)),
                "trim" => Some(self.parse_trim(start)),
                "nextval" | "lastval" | "setval" => Some(self.parse_sequence_function(&lower, start)),
                _ => None,
            };
            if let Some(result) = special {
                return result;
            }
        }

        let aggregate = schema.is_none() && AGGREGATES.contains(&lower.as_str());
        let mut call = FuncCall {
            schema,
            name: lower,
            ..FuncCall::default()
        };
        self.expect(&TokenKind::LeftParen)?;
        if aggregate {
            if call.name == "count" && self.eat(&TokenKind::Star) {
                call.star = true;
            } else {
                if self.eat_keyword(Keyword::Distinct) || self.eat_keyword(Keyword::Distinctrow) {
                    call.distinct = true;
                } else {
                    self.eat_keyword(Keyword::All);
                }
                call.args = self.parse_expr_list()?;
                if call.name == "group_concat" {
                    if self.eat_keyword(Keyword::Order) {
                        self.expect_keyword(Keyword::By)?;
                        call.order_by = self.parse_order_by_items()?;
                    }
                    if self.eat_keyword(Keyword::Separator) {
                        call.separator = Some(self.expect_string()?);
                    }
                }
            }
        } else if !self.check(&TokenKind::RightParen) {
            call.args = self.parse_expr_list()?;
        }
        self.expect(&TokenKind::RightParen)?;

        if self.config.enable_window_func {
            if call.name == "nth_value" && self.eat_keyword(Keyword::From) {
                if !self.eat_keyword(Keyword::First) {
                    self.expect_keyword(Keyword::Last)?;
                    call.from_last = true;
                }
            }
            if self.check_keyword_at(1, Keyword::Nulls) {
                if self.eat_keyword(Keyword::Respect) {
                    self.advance();
                    call.null_treatment = Some(NullTreatment::Respect);
                } else if self.eat_keyword(Keyword::Ignore) {
                    self.advance();
                    call.null_treatment = Some(NullTreatment::Ignore);
                }
            }
            if self.eat_keyword(Keyword::Over) {
                call.over = Some(self.parse_over()?);
            }
        }

        Ok(Expr::with_span(
            ExprKind::Func(Box::new(call)),
            self.span_from(start),
        ))
    }

    fn func_expr(&self, name: &str, args: Vec<Expr>, start: usize) -> Expr {
        Expr::with_span(
            ExprKind::Func(Box::new(FuncCall::new(name, args))),
            self.span_from(start),
        )
    }

    fn parse_cast(&mut self, function: CastFunction, start: usize) -> Result<Expr, ParseError> {
        self.expect(&TokenKind::LeftParen)?;
        let expr = self.parse_expr()?;
        self.expect_keyword(Keyword::As)?;
        let target_start = self.current().span;
        let target = self.parse_cast_type()?;
        let array = self.eat_keyword(Keyword::Array);
        if function == CastFunction::JsonSumCrc32
            && !(array && matches!(target, CastType::Unsigned | CastType::Double))
        {
            return Err(ParseError::syntax(self.source, target_start));
        }
        self.expect(&TokenKind::RightParen)?;
        Ok(Expr::with_span(
            ExprKind::Cast {
                expr: Box::new(expr),
                target,
                array,
                function,
            },
            self.span_from(start),
        ))
    }

    fn parse_convert(&mut self, start: usize) -> Result<Expr, ParseError> {
        self.expect(&TokenKind::LeftParen)?;
        let expr = self.parse_expr()?;
        let kind = if self.eat_keyword(Keyword::Using) {
            let charset = self.parse_charset_name()?;
            ExprKind::ConvertUsing {
                expr: Box::new(expr),
                charset,
            }
        } else {
            self.expect(&TokenKind::Comma)?;
            let target = self.parse_cast_type()?;
            ExprKind::Cast {
                expr: Box::new(expr),
                target,
                array: false,
                function: CastFunction::Convert,
            }
        };
        self.expect(&TokenKind::RightParen)?;
        Ok(Expr::with_span(kind, self.span_from(start)))
    }

    fn parse_char_function(&mut self, start: usize) -> Result<Expr, ParseError> {
        self.expect(&TokenKind::LeftParen)?;
        let args = self.parse_expr_list()?;
        let charset = if self.eat_keyword(Keyword::Using) {
            Some(self.parse_charset_name()?)
        } else {
            None
        };
        self.expect(&TokenKind::RightParen)?;
        Ok(Expr::with_span(
            ExprKind::CharFunc { args, charset },
            self.span_from(start),
        ))
    }

    fn time_unit_expr(&mut self) -> Result<Expr, ParseError> {
        let start = self.current().span.start;
        let unit = self.parse_time_unit()?;
        Ok(Expr::with_span(ExprKind::TimeUnit(unit), self.span_from(start)))
    }

    fn parse_extract(&mut self, start: usize) -> Result<Expr, ParseError> {
        self.expect(&TokenKind::LeftParen)?;
        let unit = self.time_unit_expr()?;
        self.expect_keyword(Keyword::From)?;
        let expr = self.parse_expr()?;
        self.expect(&TokenKind::RightParen)?;
        Ok(self.func_expr("extract", vec![unit, expr], start))
    }

    /// `DATE_ADD(x, INTERVAL n unit)`; `ADDDATE(x, n)` means days.
    fn parse_date_arith(&mut self, name: &str, start: usize) -> Result<Expr, ParseError> {
        self.expect(&TokenKind::LeftParen)?;
        let date = self.parse_expr()?;
        self.expect(&TokenKind::Comma)?;
        let (amount, unit) = if self.eat_keyword(Keyword::Interval) {
            let amount = self.parse_expr()?;
            (amount, self.time_unit_expr()?)
        } else if matches!(name, "adddate" | "subdate") {
            let amount = self.parse_expr()?;
            let unit = Expr::with_span(ExprKind::TimeUnit(TimeUnit::Day), self.previous_span());
            (amount, unit)
        } else {
            return Err(self.error());
        };
        self.expect(&TokenKind::RightParen)?;
        Ok(self.func_expr(name, vec![date, amount, unit], start))
    }

    fn parse_timestamp_arith(&mut self, name: &str, start: usize) -> Result<Expr, ParseError> {
        self.expect(&TokenKind::LeftParen)?;
        let mut args = vec![self.time_unit_expr()?];
        self.expect(&TokenKind::Comma)?;
        args.push(self.parse_expr()?);
        self.expect(&TokenKind::Comma)?;
        args.push(self.parse_expr()?);
        self.expect(&TokenKind::RightParen)?;
        Ok(self.func_expr(name, args, start))
    }

    fn parse_get_format(&mut self, start: usize) -> Result<Expr, ParseError> {
        self.expect(&TokenKind::LeftParen)?;
        let selector_start = self.current().span.start;
        let selector = match self.current().as_keyword() {
            Some(Keyword::Date) => GetFormatSelector::Date,
            Some(Keyword::Time) => GetFormatSelector::Time,
            Some(Keyword::Datetime | Keyword::Timestamp) => GetFormatSelector::Datetime,
            _ => return Err(self.error()),
        };
        self.advance();
        let selector = Expr::with_span(
            ExprKind::GetFormatSelector(selector),
            self.span_from(selector_start),
        );
        self.expect(&TokenKind::Comma)?;
        let format = self.parse_expr()?;
        self.expect(&TokenKind::RightParen)?;
        Ok(self.func_expr("get_format", vec![selector, format], start))
    }

    fn parse_position(&mut self, start: usize) -> Result<Expr, ParseError> {
        self.expect(&TokenKind::LeftParen)?;
        let needle = self.parse_expression(BIT_EXPR_BP)?;
        self.expect_keyword(Keyword::In)?;
        let haystack = self.parse_expr()?;
        self.expect(&TokenKind::RightParen)?;
        Ok(self.func_expr("position", vec![needle, haystack], start))
    }

    /// `SUBSTRING(s, pos[, len])` or `SUBSTRING(s FROM pos [FOR len])`.
    fn parse_substring(&mut self, name: &str, start: usize) -> Result<Expr, ParseError> {
        self.expect(&TokenKind::LeftParen)?;
        let mut args = vec![self.parse_expr()?];
        if self.eat_keyword(Keyword::From) {
            args.push(self.parse_expr()?);
            if self.eat_keyword(Keyword::For) {
                args.push(self.parse_expr()?);
            }
        } else {
            self.expect(&TokenKind::Comma)?;
            args.push(self.parse_expr()?);
            if self.eat(&TokenKind::Comma) {
                args.push(self.parse_expr()?);
            }
        }
        self.expect(&TokenKind::RightParen)?;
        Ok(self.func_expr(name, args, start))
    }

    /// Arguments are stored as `[str]`, `[str, remstr]`, `[str, direction]`
    /// or `[str, remstr, direction]`.
    fn parse_trim(&mut self, start: usize) -> Result<Expr, ParseError> {
        self.expect(&TokenKind::LeftParen)?;
        let direction = match self.current().as_keyword() {
            Some(Keyword::Both) => Some(TrimDirection::Both),
            Some(Keyword::Leading) => Some(TrimDirection::Leading),
            Some(Keyword::Trailing) => Some(TrimDirection::Trailing),
            _ => None,
        };
        let args = if let Some(direction) = direction {
            let dir_span = self.current().span;
            self.advance();
            let direction = Expr::with_span(ExprKind::TrimDirection(direction), dir_span);
            if self.eat_keyword(Keyword::From) {
                vec![self.parse_expr()?, direction]
            } else {
                let remove = self.parse_expr()?;
                self.expect_keyword(Keyword::From)?;
                vec![self.parse_expr()?, remove, direction]
            }
        } else {
            let first = self.parse_expr()?;
            if self.eat_keyword(Keyword::From) {
                vec![self.parse_expr()?, first]
            } else {
                vec![first]
            }
        };
        self.expect(&TokenKind::RightParen)?;
        Ok(self.func_expr("trim", args, start))
    }

    /// `NEXTVAL(seq)`, `LASTVAL(seq)`, `SETVAL(seq, n)`.
    fn parse_sequence_function(&mut self, name: &str, start: usize) -> Result<Expr, ParseError> {
        self.expect(&TokenKind::LeftParen)?;
        let table_start = self.current().span.start;
        let table = self.parse_table_name()?;
        let mut args = vec![Expr::with_span(
            ExprKind::TableName(table),
            self.span_from(table_start),
        )];
        while self.eat(&TokenKind::Comma) {
            args.push(self.parse_expr()?);
        }
        self.expect(&TokenKind::RightParen)?;
        Ok(self.func_expr(name, args, start))
    }

    // Windows

    fn parse_over(&mut self) -> Result<Over, ParseError> {
        if self.eat(&TokenKind::LeftParen) {
            let spec = self.parse_window_spec()?;
            self.expect(&TokenKind::RightParen)?;
            Ok(Over::Spec(spec))
        } else {
            Ok(Over::Named(self.expect_identifier()?))
        }
    }

    /// Parses the body of a window specification, without parentheses.
    pub(super) fn parse_window_spec(&mut self) -> Result<WindowSpec, ParseError> {
        let mut spec = WindowSpec::default();
        if self.is_identifier_at(0) {
            spec.base = Some(self.expect_identifier()?);
        }
        if self.eat_keyword(Keyword::Partition) {
            self.expect_keyword(Keyword::By)?;
            spec.partition_by = self.parse_expr_list()?;
        }
        if self.eat_keyword(Keyword::Order) {
            self.expect_keyword(Keyword::By)?;
            spec.order_by = self.parse_order_by_items()?;
        }
        let unit = match self.current().as_keyword() {
            Some(Keyword::Rows) => Some(FrameUnit::Rows),
            Some(Keyword::Range) => Some(FrameUnit::Range),
            Some(Keyword::Groups) => Some(FrameUnit::Groups),
            _ => None,
        };
        if let Some(unit) = unit {
            self.advance();
            let frame = if self.eat_keyword(Keyword::Between) {
                let start = self.parse_frame_bound()?;
                self.expect_keyword(Keyword::And)?;
                let end = self.parse_frame_bound()?;
                WindowFrame {
                    unit,
                    start,
                    end: Some(end),
                }
            } else {
                WindowFrame {
                    unit,
                    start: self.parse_frame_bound()?,
                    end: None,
                }
            };
            spec.frame = Some(frame);
        }
        Ok(spec)
    }

    fn parse_frame_bound(&mut self) -> Result<FrameBound, ParseError> {
        if self.eat_keyword(Keyword::Unbounded) {
            if self.eat_keyword(Keyword::Preceding) {
                return Ok(FrameBound::UnboundedPreceding);
            }
            self.expect_keyword(Keyword::Following)?;
            return Ok(FrameBound::UnboundedFollowing);
        }
        if self.eat_keyword(Keyword::Current) {
            self.expect_keyword(Keyword::Row)?;
            return Ok(FrameBound::CurrentRow);
        }
        let offset = Box::new(self.parse_expression(BIT_EXPR_BP)?);
        if self.eat_keyword(Keyword::Preceding) {
            return Ok(FrameBound::Preceding(offset));
        }
        self.expect_keyword(Keyword::Following)?;
        Ok(FrameBound::Following(offset))
    }
}

fn is_space_sensitive(name: &str) -> bool {
    SPACE_SENSITIVE_FUNCTIONS
        .iter()
        .any(|f| f.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Statement, QueryBody, SelectField};
    use crate::{Parser, ParserConfig};

    fn parse_with(sql: &str, mode: SqlMode) -> Result<Expr, crate::ParseError> {
        let mut parser = Parser::new();
        parser.set_sql_mode(mode);
        parser.parse_expr(sql)
    }

    fn parse(sql: &str) -> Expr {
        parse_with(sql, SqlMode::empty()).unwrap()
    }

    fn first_field(sql: &str) -> Expr {
        let stmt = Parser::new().parse_one_stmt(sql, "", "").unwrap().stmt;
        let Statement::Select(query) = stmt else {
            panic!("expected SELECT");
        };
        let QueryBody::Select(select) = query.body else {
            panic!("expected simple select");
        };
        match select.fields.into_iter().next() {
            Some(SelectField::Expr { expr, .. }) => expr,
            other => panic!("unexpected field {other:?}"),
        }
    }

    #[test]
    fn test_precedence() {
        let expr = parse("1 + 2 * 3");
        let ExprKind::Binary { op, right, .. } = expr.kind else {
            panic!("expected binary");
        };
        assert_eq!(op, BinaryOp::Plus);
        assert!(matches!(right.kind, ExprKind::Binary { op: BinaryOp::Mul, .. }));
    }

    #[test]
    fn test_and_binds_tighter_than_or() {
        let expr = parse("a OR b AND c");
        assert!(matches!(
            expr.kind,
            ExprKind::Binary { op: BinaryOp::LogicOr, .. }
        ));
    }

    #[test]
    fn test_integer_boundary() {
        assert_eq!(
            parse("9223372036854775807").kind,
            ExprKind::Literal(Literal::Int(i64::MAX))
        );
        assert_eq!(
            parse("9223372036854775808").kind,
            ExprKind::Literal(Literal::Uint(9_223_372_036_854_775_808))
        );
    }

    #[test]
    fn test_not_precedence() {
        let expr = parse("NOT 1 BETWEEN -5 AND 5");
        assert!(matches!(expr.kind, ExprKind::Unary { op: UnaryOp::Not, .. }));

        let expr = parse_with("NOT 1 BETWEEN -5 AND 5", SqlMode::HIGH_NOT_PRECEDENCE).unwrap();
        let ExprKind::Between { expr: inner, .. } = expr.kind else {
            panic!("expected BETWEEN");
        };
        assert!(matches!(inner.kind, ExprKind::Unary { op: UnaryOp::Not2, .. }));
    }

    #[test]
    fn test_not_exists_folds() {
        let expr = parse("NOT EXISTS (SELECT 1)");
        assert!(matches!(expr.kind, ExprKind::Exists { negated: true, .. }));
    }

    #[test]
    fn test_predicates() {
        assert!(matches!(
            parse("a NOT IN (1, 2)").kind,
            ExprKind::In { negated: true, list: InList::Exprs(_), .. }
        ));
        assert!(matches!(
            parse("a IN (SELECT b FROM t)").kind,
            ExprKind::In { list: InList::Subquery(_), .. }
        ));
        assert!(matches!(
            parse("a LIKE 'x%' ESCAPE '|'").kind,
            ExprKind::Like { escape: Some(b'|'), .. }
        ));
        assert!(matches!(
            parse("a IS NOT NULL").kind,
            ExprKind::IsNull { negated: true, .. }
        ));
        assert!(matches!(
            parse("a = ANY (SELECT 1)").kind,
            ExprKind::CompareSubquery { quantifier: Quantifier::Any, .. }
        ));
    }

    #[test]
    fn test_escape_too_long() {
        let err = parse_with("a LIKE 'x' ESCAPE 'ab'", SqlMode::empty()).unwrap_err();
        assert_eq!(err.code, ErrorCode::UnknownEscapeChar);
    }

    #[test]
    fn test_member_of_requires_parens() {
        assert!(matches!(parse("1 MEMBER OF (a)").kind, ExprKind::MemberOf { .. }));
        assert!(parse_with("1 MEMBER OF a", SqlMode::empty()).is_err());
    }

    #[test]
    fn test_interval_arithmetic() {
        let ExprKind::Func(call) = parse("d + INTERVAL 1 DAY").kind else {
            panic!("expected call");
        };
        assert_eq!(call.name, "date_add");
        assert_eq!(call.args[2].kind, ExprKind::TimeUnit(TimeUnit::Day));

        let ExprKind::Func(call) = parse("INTERVAL 2 HOUR + d").kind else {
            panic!("expected call");
        };
        assert_eq!(call.name, "date_add");
        assert_eq!(call.args[0].kind, ExprKind::Column(ColumnName::new("d")));
    }

    #[test]
    fn test_special_functions() {
        let ExprKind::Func(call) = parse("TRIM(LEADING 'x' FROM s)").kind else {
            panic!("expected call");
        };
        assert_eq!(call.args.len(), 3);
        assert_eq!(call.args[2].kind, ExprKind::TrimDirection(TrimDirection::Leading));

        let ExprKind::Func(call) = parse("EXTRACT(YEAR FROM d)").kind else {
            panic!("expected call");
        };
        assert_eq!(call.args[0].kind, ExprKind::TimeUnit(TimeUnit::Year));

        let ExprKind::Func(call) = parse("COUNT(DISTINCT a, b)").kind else {
            panic!("expected call");
        };
        assert!(call.distinct);
        assert_eq!(call.args.len(), 2);

        let ExprKind::Func(call) = parse("NEXT VALUE FOR db.seq").kind else {
            panic!("expected call");
        };
        assert_eq!(call.name, "nextval");
        assert!(matches!(call.args[0].kind, ExprKind::TableName(_)));
    }

    #[test]
    fn test_json_sum_crc32_targets() {
        assert!(parse_with("JSON_SUM_CRC32(j AS UNSIGNED ARRAY)", SqlMode::empty()).is_ok());
        assert!(parse_with("JSON_SUM_CRC32(j AS CHAR(10) ARRAY)", SqlMode::empty()).is_err());
        assert!(parse_with("JSON_SUM_CRC32(j AS DOUBLE)", SqlMode::empty()).is_err());
    }

    #[test]
    fn test_space_sensitive_builtins() {
        // `count (a)` is a column followed by a parenthesis
        assert!(parse_with("count (a)", SqlMode::empty()).is_err());
        assert!(matches!(
            parse_with("count (a)", SqlMode::IGNORE_SPACE).unwrap().kind,
            ExprKind::Func(_)
        ));
        assert!(matches!(parse("count").kind, ExprKind::Column(_)));
        assert!(parse_with("count", SqlMode::IGNORE_SPACE).is_err());
    }

    #[test]
    fn test_pipes_as_concat() {
        assert!(matches!(
            parse("'a' || 'b'").kind,
            ExprKind::Binary { op: BinaryOp::LogicOr, .. }
        ));
        let ExprKind::Func(call) = parse_with("'a' || 'b'", SqlMode::PIPES_AS_CONCAT)
            .unwrap()
            .kind
        else {
            panic!("expected concat");
        };
        assert_eq!(call.name, "concat");
    }

    #[test]
    fn test_string_charsets() {
        let lit = |sql: &str| match parse(sql).kind {
            ExprKind::Literal(Literal::String(s)) => s,
            other => panic!("unexpected {other:?}"),
        };
        assert_eq!(lit("'a' 'b'").value, b"ab");
        assert_eq!(lit("'a'").charset, "utf8mb4");
        assert_eq!(lit("_latin1'a'").charset, "latin1");
        assert_eq!(lit("N'a'").charset, "utf8");
        assert_eq!(lit("_binary x'4142'").value, b"AB");
    }

    #[test]
    fn test_removed_charset_introducer() {
        let mut parser = Parser::new();
        parser.charsets_mut().remove_charset("gbk");
        let err = parser.parse_expr("_gbk'x'").unwrap_err();
        assert_eq!(err.code, ErrorCode::UnknownCharacterSet);
    }

    #[test]
    fn test_odbc_literals() {
        assert!(matches!(
            parse("{ts '2020-01-01 00:00:00'}").kind,
            ExprKind::Literal(Literal::Temporal { kind: TemporalKind::Timestamp, .. })
        ));
        assert_eq!(parse("{x 1}").kind, ExprKind::Literal(Literal::Int(1)));
    }

    #[test]
    fn test_variables() {
        assert_eq!(
            parse("@@global.autocommit").kind,
            ExprKind::Variable(Variable::System {
                name: "autocommit".into(),
                scope: VarScope::Global,
            })
        );
        assert!(matches!(parse("@a := 1").kind, ExprKind::Assign { .. }));
    }

    #[test]
    fn test_window_function() {
        let config = ParserConfig {
            enable_window_func: true,
            ..ParserConfig::default()
        };
        let parser = Parser::with_config(config);
        let expr = parser
            .parse_expr("ROW_NUMBER() OVER (PARTITION BY a ORDER BY b ROWS BETWEEN 1 PRECEDING AND CURRENT ROW)")
            .unwrap();
        let ExprKind::Func(call) = expr.kind else {
            panic!("expected call");
        };
        let Some(Over::Spec(spec)) = call.over else {
            panic!("expected window spec");
        };
        assert_eq!(spec.partition_by.len(), 1);
        assert_eq!(spec.frame.unwrap().end, Some(FrameBound::CurrentRow));
    }

    #[test]
    fn test_placeholders_are_numbered() {
        let ExprKind::Row(items) = first_field("SELECT (?, ?)").kind else {
            panic!("expected row");
        };
        assert_eq!(items[1].kind, ExprKind::Placeholder(1));
    }

    #[test]
    fn test_json_extract() {
        assert!(matches!(
            parse("c->>'$.a'").kind,
            ExprKind::JsonExtract { unquote: true, .. }
        ));
    }
}
