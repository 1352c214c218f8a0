//! `PARTITION BY` clauses and partition definitions.
//!
//! Shape rules that do not need a catalog are checked here: VALUES clauses
//! must match the strategy, COLUMNS partitions must list one value per
//! column, and declared counts must match the definitions.

use super::error::{ErrorCode, ParseError};
use super::parser::Grammar;
use crate::ast::{
    ColumnName, Expr, ExprKind, IntervalPartition, PartitionDef, PartitionKind, PartitionMethod,
    PartitionOption, PartitionOptions, PartitionValues, SubPartitionDef, SystemTimeOptions,
};
use crate::lexer::{Keyword, Span, TokenKind};

impl Grammar<'_> {
    /// Parses `PARTITION BY ...` with its definitions and validates the
    /// result.
    pub(super) fn parse_partition_by(&mut self) -> Result<PartitionOptions, ParseError> {
        let start = self.current().span.start;
        self.expect_keyword(Keyword::Partition)?;
        self.expect_keyword(Keyword::By)?;
        let mut method = self.parse_partition_method(false)?;
        if method.kind == PartitionKind::Range && self.check_keyword(Keyword::Interval) {
            method.interval = Some(self.parse_interval_partition()?);
        }
        if self.eat_keyword(Keyword::Partitions) {
            method.count = Some(self.expect_u64()?);
        }
        let sub = if self.eat_keyword(Keyword::Subpartition) {
            self.expect_keyword(Keyword::By)?;
            let mut sub = self.parse_partition_method(true)?;
            if self.eat_keyword(Keyword::Subpartitions) {
                sub.count = Some(self.expect_u64()?);
            }
            Some(sub)
        } else {
            None
        };
        let defs = if self.check(&TokenKind::LeftParen) {
            self.parse_partition_defs()?
        } else {
            Vec::new()
        };
        let options = PartitionOptions { method, sub, defs };
        self.validate_partitions(&options, self.span_from(start))?;
        Ok(options)
    }

    /// Parses a strategy; subpartitions only allow HASH and KEY.
    fn parse_partition_method(&mut self, sub: bool) -> Result<PartitionMethod, ParseError> {
        let linear = self.eat_keyword(Keyword::Linear);
        let kind = match self.current().as_keyword() {
            Some(Keyword::Hash) => PartitionKind::Hash,
            Some(Keyword::Key) => PartitionKind::Key,
            Some(Keyword::Range) if !linear && !sub => PartitionKind::Range,
            Some(Keyword::List) if !linear && !sub => PartitionKind::List,
            _ if !linear && !sub && self.check_word("system_time") => PartitionKind::SystemTime,
            _ => return Err(self.error()),
        };
        self.advance();
        let mut method = PartitionMethod::new(kind);
        method.linear = linear;
        match kind {
            PartitionKind::Hash => {
                method.expr = Some(self.parse_paren_partition_expr()?);
            }
            PartitionKind::Key => {
                if self.eat_keyword(Keyword::Algorithm) {
                    self.expect(&TokenKind::Eq)?;
                    let start = self.current().span;
                    let algorithm = self.expect_u64()?;
                    if !(1..=2).contains(&algorithm) {
                        return Err(self.error_at(
                            ErrorCode::ParseError,
                            format!("Invalid KEY ALGORITHM = {algorithm}"),
                            start,
                        ));
                    }
                    method.key_algorithm = Some(algorithm);
                }
                method.columns = self.parse_paren_column_list(true)?;
            }
            PartitionKind::Range | PartitionKind::List => {
                if self.eat_keyword(Keyword::Columns) {
                    method.columns_form = true;
                    method.columns = self.parse_paren_column_list(false)?;
                } else {
                    method.expr = Some(self.parse_paren_partition_expr()?);
                }
            }
            PartitionKind::SystemTime => {
                let mut options = SystemTimeOptions {
                    interval: None,
                    limit: None,
                };
                if self.eat_keyword(Keyword::Interval) {
                    let value = self.parse_expr()?;
                    let unit = self.parse_time_unit()?;
                    options.interval = Some((value, unit));
                }
                if self.eat_keyword(Keyword::Limit) {
                    options.limit = Some(self.expect_u64()?);
                }
                method.system_time = Some(options);
            }
        }
        Ok(method)
    }

    fn parse_paren_partition_expr(&mut self) -> Result<Expr, ParseError> {
        self.expect(&TokenKind::LeftParen)?;
        let expr = self.parse_expr()?;
        self.expect(&TokenKind::RightParen)?;
        Ok(expr)
    }

    fn parse_paren_column_list(
        &mut self,
        allow_empty: bool,
    ) -> Result<Vec<ColumnName>, ParseError> {
        self.expect(&TokenKind::LeftParen)?;
        let mut columns = Vec::new();
        if !(allow_empty && self.check(&TokenKind::RightParen)) {
            columns.push(self.parse_column_name()?);
            while self.eat(&TokenKind::Comma) {
                columns.push(self.parse_column_name()?);
            }
        }
        self.expect(&TokenKind::RightParen)?;
        Ok(columns)
    }

    /// `INTERVAL (n [unit]) [FIRST PARTITION LESS THAN (..) LAST PARTITION
    /// LESS THAN (..)] [NULL PARTITION] [MAXVALUE PARTITION]`
    fn parse_interval_partition(&mut self) -> Result<IntervalPartition, ParseError> {
        self.expect_keyword(Keyword::Interval)?;
        self.expect(&TokenKind::LeftParen)?;
        let interval = self.parse_expr()?;
        let unit = if self.time_unit_at(0).is_some() {
            Some(self.parse_time_unit()?)
        } else {
            None
        };
        self.expect(&TokenKind::RightParen)?;
        let mut partition = IntervalPartition {
            interval,
            unit,
            first: None,
            last: None,
            null_partition: false,
            maxvalue_partition: false,
        };
        if self.check_keyword(Keyword::First) {
            partition.first = Some(self.parse_range_end(Keyword::First)?);
            partition.last = Some(self.parse_range_end(Keyword::Last)?);
        }
        if self.check_keyword(Keyword::Null) && self.check_keyword_at(1, Keyword::Partition) {
            self.advance();
            self.advance();
            partition.null_partition = true;
        }
        if self.check_keyword(Keyword::Maxvalue) && self.check_keyword_at(1, Keyword::Partition) {
            self.advance();
            self.advance();
            partition.maxvalue_partition = true;
        }
        Ok(partition)
    }

    /// `FIRST|LAST PARTITION LESS THAN (expr)`
    pub(super) fn parse_range_end(&mut self, which: Keyword) -> Result<Expr, ParseError> {
        self.expect_keyword(which)?;
        self.expect_keyword(Keyword::Partition)?;
        self.expect_keyword(Keyword::Less)?;
        self.expect_keyword(Keyword::Than)?;
        self.parse_paren_partition_expr()
    }

    /// Parses `(PARTITION p ..., ...)`.
    pub(super) fn parse_partition_defs(&mut self) -> Result<Vec<PartitionDef>, ParseError> {
        self.expect(&TokenKind::LeftParen)?;
        let mut defs = Vec::new();
        loop {
            defs.push(self.parse_partition_def()?);
            if !self.eat(&TokenKind::Comma) {
                break;
            }
        }
        self.expect(&TokenKind::RightParen)?;
        Ok(defs)
    }

    fn parse_partition_def(&mut self) -> Result<PartitionDef, ParseError> {
        self.expect_keyword(Keyword::Partition)?;
        let name = self.expect_identifier()?;
        let values = self.parse_partition_values()?;
        let options = self.parse_partition_options()?;
        let mut subs = Vec::new();
        if self.check(&TokenKind::LeftParen) {
            self.advance();
            loop {
                self.expect_keyword(Keyword::Subpartition)?;
                let name = self.expect_identifier()?;
                let options = self.parse_partition_options()?;
                subs.push(SubPartitionDef { name, options });
                if !self.eat(&TokenKind::Comma) {
                    break;
                }
            }
            self.expect(&TokenKind::RightParen)?;
        }
        Ok(PartitionDef {
            name,
            values,
            options,
            subs,
        })
    }

    fn parse_partition_values(&mut self) -> Result<PartitionValues, ParseError> {
        if self.eat_keyword(Keyword::Values) {
            if self.eat_keyword(Keyword::Less) {
                self.expect_keyword(Keyword::Than)?;
                if self.check_keyword(Keyword::Maxvalue) {
                    let span = self.current().span;
                    self.advance();
                    return Ok(PartitionValues::LessThan(vec![Expr::with_span(
                        ExprKind::MaxValue,
                        span,
                    )]));
                }
                return Ok(PartitionValues::LessThan(self.parse_paren_expr_list()?));
            }
            self.expect_keyword(Keyword::In)?;
            self.expect(&TokenKind::LeftParen)?;
            let mut values = Vec::new();
            let mut default = false;
            loop {
                if self.check_keyword(Keyword::Default)
                    && matches!(self.peek_kind(1), TokenKind::Comma | TokenKind::RightParen)
                {
                    self.advance();
                    default = true;
                } else {
                    values.push(self.parse_expr()?);
                }
                if !self.eat(&TokenKind::Comma) {
                    break;
                }
            }
            self.expect(&TokenKind::RightParen)?;
            return Ok(PartitionValues::In { values, default });
        }
        if self.eat_keyword(Keyword::History) {
            return Ok(PartitionValues::History);
        }
        if self.eat_keyword(Keyword::Current) {
            return Ok(PartitionValues::Current);
        }
        Ok(PartitionValues::None)
    }

    /// Per-partition options, in any order.
    pub(super) fn parse_partition_options(&mut self) -> Result<Vec<PartitionOption>, ParseError> {
        let mut options = Vec::new();
        loop {
            let option = match self.current().as_keyword() {
                Some(Keyword::Storage | Keyword::Engine) => {
                    self.eat_keyword(Keyword::Storage);
                    self.expect_keyword(Keyword::Engine)?;
                    self.eat_eq();
                    PartitionOption::Engine(self.expect_name_or_string()?)
                }
                Some(Keyword::Comment) => {
                    self.advance();
                    self.eat_eq();
                    PartitionOption::Comment(self.expect_string()?)
                }
                Some(Keyword::Data) => {
                    self.advance();
                    self.expect_keyword(Keyword::Directory)?;
                    self.eat_eq();
                    PartitionOption::DataDirectory(self.expect_string()?)
                }
                Some(Keyword::Index) => {
                    self.advance();
                    self.expect_keyword(Keyword::Directory)?;
                    self.eat_eq();
                    PartitionOption::IndexDirectory(self.expect_string()?)
                }
                Some(Keyword::MaxRows) => {
                    self.advance();
                    self.eat_eq();
                    PartitionOption::MaxRows(self.expect_u64()?)
                }
                Some(Keyword::MinRows) => {
                    self.advance();
                    self.eat_eq();
                    PartitionOption::MinRows(self.expect_u64()?)
                }
                Some(Keyword::Tablespace) => {
                    self.advance();
                    self.eat_eq();
                    PartitionOption::Tablespace(self.expect_identifier()?)
                }
                Some(Keyword::Nodegroup) => {
                    self.advance();
                    self.eat_eq();
                    PartitionOption::Nodegroup(self.expect_u64()?)
                }
                Some(Keyword::Placement) if self.check_keyword_at(1, Keyword::Policy) => {
                    self.advance();
                    self.advance();
                    self.eat_eq();
                    PartitionOption::PlacementPolicy(self.expect_name_or_string()?)
                }
                Some(Keyword::Attributes) => {
                    self.advance();
                    self.eat_eq();
                    PartitionOption::Attributes(self.expect_string()?)
                }
                _ if self.check_word("secondary_engine_attribute") => {
                    self.advance();
                    self.eat_eq();
                    PartitionOption::SecondaryEngineAttribute(self.expect_string()?)
                }
                _ => return Ok(options),
            };
            options.push(option);
        }
    }

    fn validate_partitions(&self, options: &PartitionOptions, span: Span) -> Result<(), ParseError> {
        let method = &options.method;
        let kind = method.kind;
        for def in &options.defs {
            let clause = match (&def.values, kind) {
                (PartitionValues::None, PartitionKind::Range | PartitionKind::List) => {
                    let clause = if kind == PartitionKind::Range {
                        "VALUES LESS THAN"
                    } else {
                        "VALUES IN"
                    };
                    return Err(self.error_at(
                        ErrorCode::PartitionRequiresValues,
                        format!(
                            "Syntax : {} PARTITIONING requires definition of {clause} for each partition",
                            kind.as_str()
                        ),
                        span,
                    ));
                }
                (PartitionValues::LessThan(_), PartitionKind::Range)
                | (PartitionValues::In { .. }, PartitionKind::List)
                | (PartitionValues::History | PartitionValues::Current, PartitionKind::SystemTime)
                | (PartitionValues::None, _) => None,
                (PartitionValues::LessThan(_), _) => Some(("RANGE", "LESS THAN")),
                (PartitionValues::In { .. }, _) => Some(("LIST", "IN")),
                (PartitionValues::History, _) => Some(("SYSTEM_TIME", "HISTORY")),
                (PartitionValues::Current, _) => Some(("SYSTEM_TIME", "CURRENT")),
            };
            if let Some((strategy, clause)) = clause {
                return Err(self.error_at(
                    ErrorCode::PartitionWrongValues,
                    format!(
                        "Only {strategy} PARTITIONING can use VALUES {clause} in partition definition"
                    ),
                    span,
                ));
            }
            self.validate_value_count(method, &def.values, span)?;
        }

        match kind {
            PartitionKind::Range | PartitionKind::List => {
                let generated = method.interval.as_ref().is_some_and(|i| i.first.is_some());
                if options.defs.is_empty() && !generated {
                    return Err(self.error_at(
                        ErrorCode::PartitionsMustBeDefined,
                        format!("For {} partitions each partition must be defined", kind.as_str()),
                        span,
                    ));
                }
            }
            PartitionKind::SystemTime => {
                let counted = options.defs.is_empty() && method.count.is_some();
                if options.defs.len() < 2 && !counted {
                    return Err(self.error_at(
                        ErrorCode::SystemVersioningWrongPartitions,
                        "Wrong partitions: must have at least one HISTORY and exactly one last CURRENT",
                        span,
                    ));
                }
            }
            PartitionKind::Hash | PartitionKind::Key => {}
        }

        if let Some(count) = method.count {
            if count == 0 {
                return Err(self.error_at(
                    ErrorCode::WrongArguments,
                    "Number of partitions = 0 is not an allowed value",
                    span,
                ));
            }
            if !options.defs.is_empty() && usize::try_from(count).ok() != Some(options.defs.len()) {
                return Err(self.error_at(
                    ErrorCode::WrongPartitionCount,
                    "Wrong number of partitions defined, mismatch with previous setting",
                    span,
                ));
            }
        }

        let mut sub_counts = options
            .defs
            .iter()
            .map(|def| def.subs.len())
            .filter(|&n| n > 0);
        if let Some(first) = sub_counts.next() {
            let declared = options
                .sub
                .as_ref()
                .and_then(|sub| sub.count)
                .and_then(|count| usize::try_from(count).ok());
            let consistent = options.defs.iter().all(|def| def.subs.len() == first)
                && declared.map_or(true, |count| count == first);
            if options.sub.is_none() || !consistent {
                return Err(self.error_at(
                    ErrorCode::WrongSubpartitionCount,
                    "Wrong number of subpartitions defined, mismatch with previous setting",
                    span,
                ));
            }
        }
        Ok(())
    }

    /// Checks that each VALUES entry carries one value per partition column.
    fn validate_value_count(
        &self,
        method: &PartitionMethod,
        values: &PartitionValues,
        span: Span,
    ) -> Result<(), ParseError> {
        let expected = if method.columns_form {
            method.columns.len()
        } else {
            1
        };
        let ok = match values {
            PartitionValues::LessThan(list) => list.len() == expected,
            PartitionValues::In { values, .. } => values.iter().all(|value| match &value.kind {
                ExprKind::Row(items) => expected > 1 && items.len() == expected,
                _ => expected == 1,
            }),
            _ => true,
        };
        if ok {
            Ok(())
        } else {
            Err(self.error_at(
                ErrorCode::PartitionColumnList,
                "Inconsistency in usage of column lists for partitioning",
                span,
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::{PartitionKind, PartitionValues, Statement};
    use crate::{ErrorCode, Parser};

    fn partitioned(sql: &str) -> crate::ast::PartitionOptions {
        match Parser::new().parse_one_stmt(sql, "", "").unwrap().stmt {
            Statement::CreateTable(create) => create.partition.unwrap(),
            other => panic!("unexpected {other:?}"),
        }
    }

    fn err(sql: &str) -> ErrorCode {
        Parser::new().parse(sql, "", "").unwrap_err().code
    }

    #[test]
    fn test_list_default_is_a_flag() {
        let options =
            partitioned("CREATE TABLE t (a INT) PARTITION BY LIST (a) (PARTITION x VALUES IN (10, DEFAULT))");
        assert!(matches!(
            &options.defs[0].values,
            PartitionValues::In { values, default: true } if values.len() == 1
        ));
    }

    #[test]
    fn test_values_must_match_strategy() {
        assert_eq!(
            err("CREATE TABLE t (a INT) PARTITION BY HASH (a) (PARTITION x VALUES LESS THAN (10))"),
            ErrorCode::PartitionWrongValues
        );
        assert_eq!(
            err("CREATE TABLE t (a INT) PARTITION BY RANGE (a) (PARTITION x)"),
            ErrorCode::PartitionRequiresValues
        );
        assert_eq!(
            err("CREATE TABLE t (a INT) PARTITION BY RANGE (a)"),
            ErrorCode::PartitionsMustBeDefined
        );
    }

    #[test]
    fn test_system_time_needs_two_partitions() {
        assert_eq!(
            err("CREATE TABLE t (a INT) PARTITION BY SYSTEM_TIME (PARTITION x HISTORY)"),
            ErrorCode::SystemVersioningWrongPartitions
        );
        let options = partitioned(
            "CREATE TABLE t (a INT) PARTITION BY SYSTEM_TIME INTERVAL 1 DAY LIMIT 10 (PARTITION x HISTORY, PARTITION y CURRENT)",
        );
        assert_eq!(options.method.kind, PartitionKind::SystemTime);
    }

    #[test]
    fn test_column_counts() {
        assert_eq!(
            err("CREATE TABLE t (a INT, b INT) PARTITION BY RANGE COLUMNS (a, b) (PARTITION x VALUES LESS THAN (1))"),
            ErrorCode::PartitionColumnList
        );
        partitioned(
            "CREATE TABLE t (a INT, b INT) PARTITION BY LIST COLUMNS (a, b) (PARTITION x VALUES IN ((1, 2), (3, 4)))",
        );
    }

    #[test]
    fn test_partition_counts() {
        assert_eq!(
            err("CREATE TABLE t (a INT) PARTITION BY HASH (a) PARTITIONS 3 (PARTITION x, PARTITION y)"),
            ErrorCode::WrongPartitionCount
        );
        assert_eq!(
            err("CREATE TABLE t (a INT) PARTITION BY RANGE (a) SUBPARTITION BY HASH (a) SUBPARTITIONS 2 (PARTITION x VALUES LESS THAN (1) (SUBPARTITION s0))"),
            ErrorCode::WrongSubpartitionCount
        );
    }

    #[test]
    fn test_interval_partitioning() {
        let options = partitioned(
            "CREATE TABLE t (a INT) PARTITION BY RANGE (a) INTERVAL (100) FIRST PARTITION LESS THAN (100) LAST PARTITION LESS THAN (1000) NULL PARTITION MAXVALUE PARTITION",
        );
        let interval = options.method.interval.unwrap();
        assert!(interval.null_partition && interval.maxvalue_partition);
        assert!(options.defs.is_empty());
    }

    #[test]
    fn test_linear_key_algorithm() {
        let options = partitioned("CREATE TABLE t (a INT) PARTITION BY LINEAR KEY ALGORITHM = 2 (a) PARTITIONS 4");
        assert!(options.method.linear);
        assert_eq!(options.method.key_algorithm, Some(2));
        assert_eq!(options.method.count, Some(4));
    }
}
