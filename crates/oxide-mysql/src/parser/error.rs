//! Parser error and warning types.

use std::fmt;

use crate::lexer::Span;

/// Longest source excerpt quoted in a syntax error.
const NEAR_MAX_LEN: usize = 80;

/// MySQL-compatible error codes surfaced by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Generic syntax error.
    ParseError,
    /// Empty, blank or trailing-space database name.
    WrongDbName,
    /// Unknown or disabled charset.
    UnknownCharacterSet,
    /// Bad argument to a statement or function.
    WrongArguments,
    /// Clause combination not allowed (e.g. ORDER BY in multi-table UPDATE).
    WrongUsage,
    /// Variable used with the wrong scope.
    IncorrectGlobalLocalVar,
    /// Unknown collation.
    UnknownCollation,
    /// `ON UPDATE` on a column type that cannot carry it.
    InvalidOnUpdate,
    /// Fractional or decimal precision above the allowed maximum.
    TooBigPrecision,
    /// Display width above the allowed maximum.
    TooBigDisplaywidth,
    /// RANGE/LIST partition without a VALUES clause.
    PartitionRequiresValues,
    /// VALUES clause not matching the partition strategy.
    PartitionWrongValues,
    /// Declared and defined partition counts differ.
    WrongPartitionCount,
    /// Declared and defined subpartition counts differ.
    WrongSubpartitionCount,
    /// SYSTEM_TIME partitioning with fewer than two partitions.
    SystemVersioningWrongPartitions,
    /// Partitioning strategy that needs explicit definitions.
    PartitionsMustBeDefined,
    /// Wrong number of values for a COLUMNS partition.
    PartitionColumnList,
    /// Integer out of range.
    DataOutOfRange,
    /// `YEAR(n)` with n other than 4.
    InvalidYearColumnLength,
    /// Field or line separator with the wrong length.
    FieldSeparatorArg,
    /// ESCAPE string longer than one character.
    UnknownEscapeChar,
    /// Grammar recognized but unsupported construct.
    NotSupportedYet,
    /// Unknown optimizer hint (warning).
    UnsupportedHint,
    /// Malformed or misplaced hint block (warning).
    HintSyntax,
}

impl ErrorCode {
    /// Returns the MySQL error number.
    #[must_use]
    pub const fn code(self) -> u16 {
        match self {
            Self::ParseError => 1064,
            Self::WrongDbName => 1102,
            Self::UnknownCharacterSet => 1115,
            Self::WrongArguments => 1210,
            Self::WrongUsage => 1221,
            Self::IncorrectGlobalLocalVar => 1238,
            Self::UnknownCollation => 1273,
            Self::InvalidOnUpdate => 1294,
            Self::TooBigPrecision => 1426,
            Self::TooBigDisplaywidth => 1439,
            Self::PartitionRequiresValues => 1479,
            Self::PartitionWrongValues => 1480,
            Self::WrongPartitionCount => 1484,
            Self::WrongSubpartitionCount => 1485,
            Self::SystemVersioningWrongPartitions => 4128,
            Self::PartitionsMustBeDefined => 1492,
            Self::PartitionColumnList => 1653,
            Self::DataOutOfRange => 1690,
            Self::InvalidYearColumnLength => 1818,
            Self::FieldSeparatorArg | Self::UnknownEscapeChar => 1083,
            Self::NotSupportedYet => 1235,
            Self::UnsupportedHint => 8061,
            Self::HintSyntax => 8064,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A fatal parse error.
///
/// No partial AST accompanies an error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("[{code}] {message}")]
pub struct ParseError {
    /// Error classification.
    pub code: ErrorCode,
    /// Human readable message.
    pub message: String,
    /// 1-based line of the offending token.
    pub line: usize,
    /// 1-based byte column of the offending token.
    pub column: usize,
    /// Source text starting at the offending token.
    pub near: String,
    /// The offending token.
    pub span: Span,
}

impl ParseError {
    /// Creates an error with an explicit code and message.
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>, source: &str, span: Span) -> Self {
        let (line, column) = span.line_col(source);
        Self {
            code,
            message: message.into(),
            line,
            column,
            near: near_text(source, span.start),
            span,
        }
    }

    /// Creates a generic syntax error at `span`.
    #[must_use]
    pub fn syntax(source: &str, span: Span) -> Self {
        let mut err = Self::new(ErrorCode::ParseError, String::new(), source, span);
        err.message = format!(
            "You have an error in your SQL syntax; check the manual that corresponds to your \
             MySQL server version for the right syntax to use line {} column {} near \"{}\"",
            err.line, err.column, err.near
        );
        err
    }
}

/// Excerpt of `source` starting at `offset`, cut on a char boundary.
fn near_text(source: &str, offset: usize) -> String {
    let rest = source.get(offset.min(source.len())..).unwrap_or("");
    let mut end = rest.len().min(NEAR_MAX_LEN);
    while !rest.is_char_boundary(end) {
        end -= 1;
    }
    rest[..end].to_string()
}

/// A non-fatal diagnostic accumulated during a parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    /// Warning classification.
    pub code: ErrorCode,
    /// Human readable message.
    pub message: String,
}

impl Warning {
    /// Creates a new warning.
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syntax_error_position() {
        let sql = "SELECT 1;\nSELECT FROM";
        let err = ParseError::syntax(sql, Span::new(17, 21));
        assert_eq!(err.code, ErrorCode::ParseError);
        assert_eq!((err.line, err.column), (2, 8));
        assert_eq!(err.near, "FROM");
        assert!(err.message.contains("line 2 column 8 near \"FROM\""));
    }

    #[test]
    fn test_near_is_truncated_on_char_boundary() {
        let sql = "é".repeat(100);
        let err = ParseError::syntax(&sql, Span::new(0, 2));
        assert!(err.near.len() <= NEAR_MAX_LEN);
        assert_eq!(err.near.chars().count(), 40);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(ErrorCode::ParseError.code(), 1064);
        assert_eq!(ErrorCode::UnknownCharacterSet.code(), 1115);
        assert_eq!(ErrorCode::DataOutOfRange.to_string(), "1690");
    }
}
