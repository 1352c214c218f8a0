//! Expressions, literals and window specifications.

use super::{is_plain_word, Restore, RestoreCtx, RestoreFlags, RestoreResult};
use crate::ast::{
    CastFunction, CastType, ColumnName, Expr, ExprKind, FrameBound, FrameUnit, FuncCall, InList,
    LikeKind, Literal, MatchModifier, NullTreatment, OrderItem, Over, Quantifier, UnaryOp,
    VarScope, Variable, WindowFrame, WindowSpec,
};
use crate::lexer::Keyword;

impl Restore for Expr {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        self.kind.restore(ctx)
    }
}

impl Restore for Literal {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        match self {
            Self::Null => ctx.write_keyword("NULL"),
            Self::Bool(true) => ctx.write_keyword("TRUE"),
            Self::Bool(false) => ctx.write_keyword("FALSE"),
            Self::Int(value) => ctx.write_display(value),
            Self::Uint(value) => ctx.write_display(value),
            Self::Decimal(text) => ctx.write_plain(text),
            Self::Float(value) => ctx.write_display(format_args!("{value:e}")),
            Self::String(s) => ctx.write_literal_string(&s.value, &s.charset),
            Self::Hex(bytes) => ctx.write_hex(bytes),
            Self::Bit(bytes) => {
                ctx.write_plain("b'")?;
                for byte in bytes {
                    ctx.write_display(format_args!("{byte:08b}"))?;
                }
                ctx.write_plain("'")
            }
            Self::Temporal { kind, value } => {
                ctx.write_keyword(kind.as_str())?;
                ctx.write_plain(" ")?;
                ctx.write_string(value)
            }
        }
    }
}

impl Restore for ColumnName {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        if let Some(schema) = &self.schema {
            ctx.write_name(schema)?;
            ctx.write_plain(".")?;
        }
        if let Some(table) = &self.table {
            ctx.write_name(table)?;
            ctx.write_plain(".")?;
        }
        ctx.write_name(&self.name)
    }
}

impl Restore for Variable {
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

impl Restore for OrderItem {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        self.expr.restore(ctx)?;
        if self.desc {
            ctx.write_keyword(" DESC")?;
        }
        Ok(())
    }
}

/// True when the SQL for `expr` begins with `-`, so that a preceding `-`
/// needs a space to avoid `--`.
fn starts_with_minus(expr: &Expr) -> bool {
    match &expr.kind {
        ExprKind::Unary { op, .. } => *op == UnaryOp::Minus,
        ExprKind::Literal(Literal::Int(value)) => *value < 0,
        ExprKind::Literal(Literal::Float(value)) => value.is_sign_negative(),
        ExprKind::Literal(Literal::Decimal(text)) => text.starts_with('-'),
        ExprKind::Binary { left, .. }
        | ExprKind::CompareSubquery { left, .. }
        | ExprKind::Collate { expr: left, .. }
        | ExprKind::Between { expr: left, .. }
        | ExprKind::In { expr: left, .. }
        | ExprKind::Like { expr: left, .. }
        | ExprKind::Regexp { expr: left, .. }
        | ExprKind::IsNull { expr: left, .. }
        | ExprKind::IsTruth { expr: left, .. }
        | ExprKind::MemberOf { value: left, .. } => starts_with_minus(left),
        _ => false,
    }
}

fn write_not(ctx: &mut RestoreCtx<'_>, negated: bool) -> RestoreResult {
    if negated {
        ctx.write_keyword("NOT ")?;
    }
    Ok(())
}

impl Restore for ExprKind {
    #[allow(clippy::too_many_lines)]
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        match self {
            Self::Literal(lit) => lit.restore(ctx),
            Self::Column(column) => column.restore(ctx),
            Self::Placeholder(_) => ctx.write_plain("?"),
            Self::Variable(variable) => variable.restore(ctx),
            Self::Assign { variable, value } => {
                variable.restore(ctx)?;
                ctx.write_plain(":=")?;
                value.restore(ctx)
            }
            Self::Unary { op, expr } => {
                match op {
                    UnaryOp::Not => ctx.write_keyword(op.as_str())?,
                    _ => ctx.write_plain(op.as_str())?,
                }
                if matches!(op, UnaryOp::Minus) && starts_with_minus(expr) {
                    ctx.write_plain(" ")?;
                }
                expr.restore(ctx)
            }
            Self::Binary { left, op, right } => {
                let bracket = ctx.flags().contains(RestoreFlags::BRACKET_AROUND_BINARY_OPERATION);
                if bracket {
                    ctx.write_plain("(")?;
                }
                left.restore(ctx)?;
                if op.is_word() {
                    ctx.write_plain(" ")?;
                    ctx.write_keyword(op.as_str())?;
                    ctx.write_plain(" ")?;
                } else if ctx.flags().contains(RestoreFlags::SPACES_AROUND_BINARY_OPERATION) {
                    ctx.write_plain(" ")?;
                    ctx.write_plain(op.as_str())?;
                    ctx.write_plain(" ")?;
                } else {
                    ctx.write_plain(op.as_str())?;
                    if starts_with_minus(right) {
                        ctx.write_plain(" ")?;
                    }
                }
                right.restore(ctx)?;
                if bracket {
                    ctx.write_plain(")")?;
                }
                Ok(())
            }
            Self::Paren(inner) => {
                ctx.write_plain("(")?;
                inner.restore(ctx)?;
                ctx.write_plain(")")
            }
            Self::Row(items) => {
                ctx.write_keyword("ROW")?;
                ctx.write_plain("(")?;
                ctx.write_list(items, ",")?;
                ctx.write_plain(")")
            }
            Self::Func(call) => call.restore(ctx),
            Self::CharFunc { args, charset } => {
                ctx.write_keyword("CHAR")?;
                ctx.write_plain("(")?;
                ctx.write_list(args, ", ")?;
                if let Some(charset) = charset {
                    ctx.write_keyword(" USING ")?;
                    ctx.write_keyword(charset)?;
                }
                ctx.write_plain(")")
            }
            Self::Cast {
                expr,
                target,
                array,
                function,
            } => restore_cast(ctx, expr, target, *array, *function),
            Self::ConvertUsing { expr, charset } => {
                ctx.write_keyword("CONVERT")?;
                ctx.write_plain("(")?;
                expr.restore(ctx)?;
                ctx.write_keyword(" USING ")?;
                ctx.write_keyword(charset)?;
                ctx.write_plain(")")
            }
            Self::Collate { expr, collation } => {
                expr.restore(ctx)?;
                ctx.write_keyword(" COLLATE ")?;
                ctx.write_plain(collation)
            }
            Self::Case {
                operand,
                whens,
                else_result,
            } => {
                ctx.write_keyword("CASE")?;
                if let Some(operand) = operand {
                    ctx.write_plain(" ")?;
                    operand.restore(ctx)?;
                }
                for (condition, result) in whens {
                    ctx.write_keyword(" WHEN ")?;
                    condition.restore(ctx)?;
                    ctx.write_keyword(" THEN ")?;
                    result.restore(ctx)?;
                }
                if let Some(else_result) = else_result {
                    ctx.write_keyword(" ELSE ")?;
                    else_result.restore(ctx)?;
                }
                ctx.write_keyword(" END")
            }
            Self::Between {
                expr,
                low,
                high,
                negated,
            } => {
                expr.restore(ctx)?;
                ctx.write_plain(" ")?;
                write_not(ctx, *negated)?;
                ctx.write_keyword("BETWEEN ")?;
                low.restore(ctx)?;
                ctx.write_keyword(" AND ")?;
                high.restore(ctx)
            }
            Self::In {
                expr,
                list,
                negated,
            } => {
                expr.restore(ctx)?;
                ctx.write_plain(" ")?;
                write_not(ctx, *negated)?;
                ctx.write_keyword("IN ")?;
                ctx.write_plain("(")?;
                match list {
                    InList::Exprs(items) => ctx.write_list(items, ",")?,
                    InList::Subquery(query) => restore_nested_query(ctx, query)?,
                }
                ctx.write_plain(")")
            }
            Self::Like {
                expr,
                pattern,
                escape,
                negated,
                kind,
            } => {
                expr.restore(ctx)?;
                ctx.write_plain(" ")?;
                write_not(ctx, *negated)?;
                ctx.write_keyword(match kind {
                    LikeKind::Like => "LIKE ",
                    LikeKind::Ilike => "ILIKE ",
                })?;
                pattern.restore(ctx)?;
                if let Some(escape) = escape {
                    ctx.write_keyword(" ESCAPE ")?;
                    ctx.write_bytes(&[*escape])?;
                }
                Ok(())
            }
            Self::Regexp {
                expr,
                pattern,
                negated,
            } => {
                expr.restore(ctx)?;
                ctx.write_plain(" ")?;
                write_not(ctx, *negated)?;
                ctx.write_keyword("REGEXP ")?;
                pattern.restore(ctx)
            }
            Self::IsNull { expr, negated } => {
                expr.restore(ctx)?;
                ctx.write_keyword(" IS ")?;
                write_not(ctx, *negated)?;
                ctx.write_keyword("NULL")
            }
            Self::IsTruth {
                expr,
                value,
                negated,
            } => {
                expr.restore(ctx)?;
                ctx.write_keyword(" IS ")?;
                write_not(ctx, *negated)?;
                ctx.write_keyword(if *value { "TRUE" } else { "FALSE" })
            }
            Self::Exists { query, negated } => {
                write_not(ctx, *negated)?;
                ctx.write_keyword("EXISTS ")?;
                ctx.write_plain("(")?;
                restore_nested_query(ctx, query)?;
                ctx.write_plain(")")
            }
            Self::Subquery(query) => {
                ctx.write_plain("(")?;
                restore_nested_query(ctx, query)?;
                ctx.write_plain(")")
            }
            Self::CompareSubquery {
                left,
                op,
                quantifier,
                query,
            } => {
                left.restore(ctx)?;
                ctx.write_plain(op.as_str())?;
                ctx.write_keyword(match quantifier {
                    Quantifier::Any => "ANY ",
                    Quantifier::All => "ALL ",
                })?;
                ctx.write_plain("(")?;
                restore_nested_query(ctx, query)?;
                ctx.write_plain(")")
            }
            Self::MatchAgainst {
                columns,
                against,
                modifier,
            } => {
                ctx.write_keyword("MATCH")?;
                ctx.write_plain(" (")?;
                ctx.write_list(columns, ",")?;
                ctx.write_plain(") ")?;
                ctx.write_keyword("AGAINST")?;
                ctx.write_plain(" (")?;
                against.restore(ctx)?;
                match modifier {
                    MatchModifier::NaturalLanguage => {}
                    MatchModifier::NaturalLanguageWithQueryExpansion => {
                        ctx.write_keyword(" IN NATURAL LANGUAGE MODE WITH QUERY EXPANSION")?;
                    }
                    MatchModifier::Boolean => ctx.write_keyword(" IN BOOLEAN MODE")?,
                    MatchModifier::WithQueryExpansion => {
                        ctx.write_keyword(" WITH QUERY EXPANSION")?;
                    }
                }
                ctx.write_plain(")")
            }
            Self::Interval { value, unit } => {
                ctx.write_keyword("INTERVAL ")?;
                value.restore(ctx)?;
                ctx.write_plain(" ")?;
                ctx.write_keyword(unit.as_str())
            }
            Self::TimeUnit(unit) => ctx.write_keyword(unit.as_str()),
            Self::GetFormatSelector(selector) => ctx.write_keyword(selector.as_str()),
            Self::TrimDirection(direction) => ctx.write_keyword(direction.as_str()),
            Self::Default(column) => {
                ctx.write_keyword("DEFAULT")?;
                if let Some(column) = column {
                    ctx.write_plain("(")?;
                    column.restore(ctx)?;
                    ctx.write_plain(")")?;
                }
                Ok(())
            }
            Self::Values(column) => {
                ctx.write_keyword("VALUES")?;
                ctx.write_plain("(")?;
                column.restore(ctx)?;
                ctx.write_plain(")")
            }
            Self::MemberOf { value, target } => {
                value.restore(ctx)?;
                ctx.write_keyword(" MEMBER OF ")?;
                ctx.write_plain("(")?;
                target.restore(ctx)?;
                ctx.write_plain(")")
            }
            Self::JsonExtract {
                column,
                path,
                unquote,
            } => {
                column.restore(ctx)?;
                ctx.write_plain(if *unquote { "->>" } else { "->" })?;
                ctx.write_string(path)
            }
            Self::TableName(table) => ctx.write_table_name(table),
            Self::MaxValue => ctx.write_keyword("MAXVALUE"),
        }
    }
}

/// Restores a query nested inside an expression; join nesting restarts.
pub(super) fn restore_nested_query(
    ctx: &mut RestoreCtx<'_>,
    query: &impl Restore,
) -> RestoreResult {
    let level = std::mem::replace(&mut ctx.join_level, 0);
    let result = query.restore(ctx);
    ctx.join_level = level;
    result
}

fn restore_cast(
    ctx: &mut RestoreCtx<'_>,
    expr: &Expr,
    target: &CastType,
    array: bool,
    function: CastFunction,
) -> RestoreResult {
    match function {
        CastFunction::BinaryOperator => {
            ctx.write_keyword("BINARY ")?;
            return expr.restore(ctx);
        }
        CastFunction::Convert => {
            ctx.write_keyword("CONVERT")?;
            ctx.write_plain("(")?;
            expr.restore(ctx)?;
            ctx.write_plain(", ")?;
            target.restore(ctx)?;
            return ctx.write_plain(")");
        }
        CastFunction::Cast => ctx.write_keyword("CAST")?,
        CastFunction::JsonSumCrc32 => ctx.write_keyword("JSON_SUM_CRC32")?,
    }
    ctx.write_plain("(")?;
    expr.restore(ctx)?;
    ctx.write_keyword(" AS ")?;
    target.restore(ctx)?;
    if array {
        ctx.write_keyword(" ARRAY")?;
    }
    ctx.write_plain(")")
}

fn write_len(ctx: &mut RestoreCtx<'_>, len: Option<u64>) -> RestoreResult {
    if let Some(len) = len {
        ctx.write_display(format_args!("({len})"))?;
    }
    Ok(())
}

impl Restore for CastType {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        match self {
            Self::Binary(len) => {
                ctx.write_keyword("BINARY")?;
                write_len(ctx, *len)
            }
            Self::Char { length, charset } => {
                ctx.write_keyword("CHAR")?;
                write_len(ctx, *length)?;
                if let Some(charset) = charset {
                    ctx.write_keyword(" CHARSET ")?;
                    ctx.write_keyword(charset)?;
                }
                Ok(())
            }
            Self::Date => ctx.write_keyword("DATE"),
            Self::Datetime(fsp) => {
                ctx.write_keyword("DATETIME")?;
                write_len(ctx, *fsp)
            }
            Self::Time(fsp) => {
                ctx.write_keyword("TIME")?;
                write_len(ctx, *fsp)
            }
            Self::Decimal(length, decimals) => {
                ctx.write_keyword("DECIMAL")?;
                match (length, decimals) {
                    (Some(length), Some(decimals)) => {
                        ctx.write_display(format_args!("({length},{decimals})"))
                    }
                    (Some(length), None) => ctx.write_display(format_args!("({length})")),
                    _ => Ok(()),
                }
            }
            Self::Signed => ctx.write_keyword("SIGNED"),
            Self::Unsigned => ctx.write_keyword("UNSIGNED"),
            Self::Json => ctx.write_keyword("JSON"),
            Self::Double => ctx.write_keyword("DOUBLE"),
            Self::Float(precision) => {
                ctx.write_keyword("FLOAT")?;
                write_len(ctx, *precision)
            }
            Self::Real => ctx.write_keyword("REAL"),
            Self::Year => ctx.write_keyword("YEAR"),
            Self::Vector(dim) => {
                ctx.write_keyword("VECTOR")?;
                write_len(ctx, *dim)
            }
        }
    }
}

/// Writes a function name so that it parses back as a call to `name`.
fn write_func_name(ctx: &mut RestoreCtx<'_>, name: &str) -> RestoreResult {
    let callable = Keyword::from_str(name).map_or(true, |kw| {
        !kw.is_reserved(true) || kw.is_function_name() || kw.is_window_reserved()
    });
    if callable && is_plain_word(name) {
        ctx.write_keyword(name)
    } else {
        ctx.write_name(name)
    }
}

fn arg_kind(args: &[Expr], i: usize) -> Option<&ExprKind> {
    args.get(i).map(|arg| &arg.kind)
}

impl FuncCall {
    /// Writes the keyword forms of calls whose arguments the grammar
    /// rearranges, such as `EXTRACT(unit FROM e)`. Returns false when the
    /// call has no special form.
    fn restore_special(&self, ctx: &mut RestoreCtx<'_>) -> Result<bool, super::RestoreError> {
        let args = &self.args;
        match (self.name.as_str(), args.len()) {
            ("extract", 2) => {
                let Some(ExprKind::TimeUnit(unit)) = arg_kind(args, 0) else {
                    return Ok(false);
                };
                ctx.write_keyword("EXTRACT")?;
                ctx.write_plain("(")?;
                ctx.write_keyword(unit.as_str())?;
                ctx.write_keyword(" FROM ")?;
                args[1].restore(ctx)?;
            }
            ("date_add" | "date_sub" | "adddate" | "subdate", 3) => {
                let Some(ExprKind::TimeUnit(unit)) = arg_kind(args, 2) else {
                    return Ok(false);
                };
                write_func_name(ctx, &self.name)?;
                ctx.write_plain("(")?;
                args[0].restore(ctx)?;
                ctx.write_plain(", ")?;
                ctx.write_keyword("INTERVAL ")?;
                args[1].restore(ctx)?;
                ctx.write_plain(" ")?;
                ctx.write_keyword(unit.as_str())?;
            }
            ("timestampadd" | "timestampdiff", 3) => {
                if !matches!(arg_kind(args, 0), Some(ExprKind::TimeUnit(_))) {
                    return Ok(false);
                }
                write_func_name(ctx, &self.name)?;
                ctx.write_plain("(")?;
                ctx.write_list(args, ", ")?;
            }
            ("get_format", 2) => {
                write_func_name(ctx, &self.name)?;
                ctx.write_plain("(")?;
                ctx.write_list(args, ", ")?;
            }
            ("position", 2) => {
                ctx.write_keyword("POSITION")?;
                ctx.write_plain("(")?;
                args[0].restore(ctx)?;
                ctx.write_keyword(" IN ")?;
                args[1].restore(ctx)?;
            }
            ("trim", 2 | 3) => {
                ctx.write_keyword("TRIM")?;
                ctx.write_plain("(")?;
                match (arg_kind(args, 1), arg_kind(args, 2)) {
                    (Some(ExprKind::TrimDirection(direction)), None) => {
                        ctx.write_keyword(direction.as_str())?;
                    }
                    (Some(_), None) => args[1].restore(ctx)?,
                    (Some(_), Some(ExprKind::TrimDirection(direction))) => {
                        ctx.write_keyword(direction.as_str())?;
                        ctx.write_plain(" ")?;
                        args[1].restore(ctx)?;
                    }
                    _ => {
                        return Err(super::RestoreError::Malformed(
                            "TRIM expects a direction as its third argument".to_string(),
                        ))
                    }
                }
                ctx.write_keyword(" FROM ")?;
                args[0].restore(ctx)?;
            }
            ("interval", _) if !args.is_empty() => {
                ctx.write_keyword("INTERVAL")?;
                ctx.write_plain("(")?;
                ctx.write_list(args, ", ")?;
            }
            _ => return Ok(false),
        }
        ctx.write_plain(")")?;
        Ok(true)
    }
}

impl Restore for FuncCall {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        if self.schema.is_none() && self.restore_special(ctx)? {
            return Ok(());
        }
        if let Some(schema) = &self.schema {
            ctx.write_name(schema)?;
            ctx.write_plain(".")?;
            ctx.write_name(&self.name)?;
        } else {
            write_func_name(ctx, &self.name)?;
        }
        ctx.write_plain("(")?;
        if self.star {
            ctx.write_plain("*")?;
        } else {
            if self.distinct {
                ctx.write_keyword("DISTINCT ")?;
            }
            ctx.write_list(&self.args, ", ")?;
        }
        if !self.order_by.is_empty() {
            ctx.write_keyword(" ORDER BY ")?;
            ctx.write_list(&self.order_by, ",")?;
        }
        if let Some(separator) = &self.separator {
            ctx.write_keyword(" SEPARATOR ")?;
            ctx.write_string(separator)?;
        }
        ctx.write_plain(")")?;
        if self.from_last {
            ctx.write_keyword(" FROM LAST")?;
        }
        match self.null_treatment {
            Some(NullTreatment::Respect) => ctx.write_keyword(" RESPECT NULLS")?,
            Some(NullTreatment::Ignore) => ctx.write_keyword(" IGNORE NULLS")?,
            None => {}
        }
        if let Some(over) = &self.over {
            ctx.write_keyword(" OVER ")?;
            over.restore(ctx)?;
        }
        Ok(())
    }
}

impl Restore for Over {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        match self {
            Self::Named(name) => ctx.write_name(name),
            Self::Spec(spec) => {
                ctx.write_plain("(")?;
                spec.restore(ctx)?;
                ctx.write_plain(")")
            }
        }
    }
}

impl Restore for WindowSpec {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        let mut sep = "";
        if let Some(base) = &self.base {
            ctx.write_name(base)?;
            sep = " ";
        }
        if !self.partition_by.is_empty() {
            ctx.write_plain(sep)?;
            ctx.write_keyword("PARTITION BY ")?;
            ctx.write_list(&self.partition_by, ", ")?;
            sep = " ";
        }
        if !self.order_by.is_empty() {
            ctx.write_plain(sep)?;
            ctx.write_keyword("ORDER BY ")?;
            ctx.write_list(&self.order_by, ",")?;
            sep = " ";
        }
        if let Some(frame) = &self.frame {
            ctx.write_plain(sep)?;
            frame.restore(ctx)?;
        }
        Ok(())
    }
}

impl Restore for WindowFrame {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        ctx.write_keyword(match self.unit {
            FrameUnit::Rows => "ROWS ",
            FrameUnit::Range => "RANGE ",
            FrameUnit::Groups => "GROUPS ",
        })?;
        match &self.end {
            Some(end) => {
                ctx.write_keyword("BETWEEN ")?;
                self.start.restore(ctx)?;
                ctx.write_keyword(" AND ")?;
                end.restore(ctx)
            }
            None => self.start.restore(ctx),
        }
    }
}

impl Restore for FrameBound {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        match self {
            Self::UnboundedPreceding => ctx.write_keyword("UNBOUNDED PRECEDING"),
            Self::UnboundedFollowing => ctx.write_keyword("UNBOUNDED FOLLOWING"),
            Self::CurrentRow => ctx.write_keyword("CURRENT ROW"),
            Self::Preceding(offset) => {
                offset.restore(ctx)?;
                ctx.write_keyword(" PRECEDING")
            }
            Self::Following(offset) => {
                offset.restore(ctx)?;
                ctx.write_keyword(" FOLLOWING")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ParserConfig;
    use crate::restore::restore;
    use crate::Parser;

    fn restore_expr(sql: &str) -> String {
        let config = ParserConfig {
            enable_window_func: true,
            ..ParserConfig::default()
        };
        let parser = Parser::with_config(config);
        let expr = parser.parse_expr(sql).unwrap();
        let restored = restore(&expr, RestoreFlags::DEFAULT).unwrap();
        assert_eq!(parser.parse_expr(&restored).unwrap(), expr, "{restored}");
        restored
    }

    #[test]
    fn test_operators() {
        assert_eq!(restore_expr("a + b * c"), "`a`+`b`*`c`");
        assert_eq!(restore_expr("a and not b or c"), "`a` AND NOT `b` OR `c`");
        assert_eq!(restore_expr("a div 2"), "`a` DIV 2");
        assert_eq!(restore_expr("(a + b) * c"), "(`a`+`b`)*`c`");
    }

    #[test]
    fn test_double_minus_is_spaced() {
        assert_eq!(restore_expr("- -1"), "- -1");
        assert_eq!(restore_expr("a - -1"), "`a`- -1");
    }

    #[test]
    fn test_literals() {
        assert_eq!(restore_expr("'x'"), "_UTF8MB4'x'");
        assert_eq!(restore_expr("_latin1'x'"), "_LATIN1'x'");
        assert_eq!(restore_expr("x'4142'"), "X'4142'");
        assert_eq!(restore_expr("b'101'"), "b'00000101'");
        assert_eq!(restore_expr("01000001783"), "1000001783");
        assert_eq!(restore_expr("1.50"), "1.50");
        assert_eq!(restore_expr("date '2020-01-01'"), "DATE '2020-01-01'");
        assert_eq!(restore_expr("null"), "NULL");
    }

    #[test]
    fn test_predicates() {
        assert_eq!(
            restore_expr("a not between 1 and 2"),
            "`a` NOT BETWEEN 1 AND 2"
        );
        assert_eq!(restore_expr("a in (1, 2)"), "`a` IN (1,2)");
        assert_eq!(
            restore_expr("a like 'x%' escape '|'"),
            "`a` LIKE _UTF8MB4'x%' ESCAPE '|'"
        );
        assert_eq!(restore_expr("a is not null"), "`a` IS NOT NULL");
        assert_eq!(restore_expr("a is true"), "`a` IS TRUE");
        assert_eq!(
            restore_expr("not exists (select 1)"),
            "NOT EXISTS (SELECT 1)"
        );
        assert_eq!(restore_expr("a = any (select b from t)"), "`a`=ANY (SELECT `b` FROM `t`)");
    }

    #[test]
    fn test_special_functions() {
        assert_eq!(
            restore_expr("extract(day from d)"),
            "EXTRACT(DAY FROM `d`)"
        );
        assert_eq!(
            restore_expr("d + interval 1 day"),
            "DATE_ADD(`d`, INTERVAL 1 DAY)"
        );
        assert_eq!(restore_expr("adddate(d, 3)"), "ADDDATE(`d`, INTERVAL 3 DAY)");
        assert_eq!(
            restore_expr("trim(leading 'x' from s)"),
            "TRIM(LEADING _UTF8MB4'x' FROM `s`)"
        );
        assert_eq!(restore_expr("trim(s)"), "TRIM(`s`)");
        assert_eq!(restore_expr("position('a' in s)"), "POSITION(_UTF8MB4'a' IN `s`)");
        assert_eq!(restore_expr("substring(s from 2 for 3)"), "SUBSTRING(`s`, 2, 3)");
        assert_eq!(
            restore_expr("cast(a as char(10) charset latin1)"),
            "CAST(`a` AS CHAR(10) CHARSET LATIN1)"
        );
        assert_eq!(restore_expr("convert(a using utf8mb4)"), "CONVERT(`a` USING UTF8MB4)");
        assert_eq!(restore_expr("binary a"), "BINARY `a`");
        assert_eq!(restore_expr("next value for s"), "NEXTVAL(`s`)");
        assert_eq!(restore_expr("interval(1, 2, 3)"), "INTERVAL(1, 2, 3)");
    }

    #[test]
    fn test_function_names() {
        assert_eq!(restore_expr("if(a, 1, 2)"), "IF(`a`, 1, 2)");
        assert_eq!(restore_expr("concat(a, b)"), "CONCAT(`a`, `b`)");
        assert_eq!(restore_expr("count(*)"), "COUNT(*)");
        assert_eq!(restore_expr("count(distinct a)"), "COUNT(DISTINCT `a`)");
        assert_eq!(restore_expr("current_user"), "CURRENT_USER()");
        assert_eq!(
            restore_expr("group_concat(a order by b desc separator ';')"),
            "GROUP_CONCAT(`a` ORDER BY `b` DESC SEPARATOR ';')"
        );
    }

    #[test]
    fn test_window_functions() {
        assert_eq!(
            restore_expr(
                "sum(a) over (partition by b order by c rows between 1 preceding and current row)"
            ),
            "SUM(`a`) OVER (PARTITION BY `b` ORDER BY `c` ROWS BETWEEN 1 PRECEDING AND CURRENT ROW)"
        );
        assert_eq!(restore_expr("row_number() over w"), "ROW_NUMBER() OVER `w`");
        assert_eq!(
            restore_expr("nth_value(a, 2) from last ignore nulls over ()"),
            "NTH_VALUE(`a`, 2) FROM LAST IGNORE NULLS OVER ()"
        );
    }

    #[test]
    fn test_case_and_variables() {
        assert_eq!(
            restore_expr("case a when 1 then 'x' else 'y' end"),
            "CASE `a` WHEN 1 THEN _UTF8MB4'x' ELSE _UTF8MB4'y' END"
        );
        assert_eq!(restore_expr("@a := @@global.max_connections"), "@`a`:=@@GLOBAL.`max_connections`");
        assert_eq!(restore_expr("a->>'$.b'"), "`a`->>'$.b'");
    }

    #[test]
    fn test_flags() {
        let expr = Parser::new().parse_expr("a+1 = 'x'").unwrap();
        let flags = RestoreFlags::SPACES_AROUND_BINARY_OPERATION
            | RestoreFlags::BRACKET_AROUND_BINARY_OPERATION
            | RestoreFlags::STRING_WITHOUT_CHARSET
            | RestoreFlags::STRING_SINGLE_QUOTES;
        assert_eq!(restore(&expr, flags).unwrap(), "((a + 1) = 'x')");
    }
}
