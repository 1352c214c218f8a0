//! Expression AST types.

use crate::lexer::Span;

use super::query::{Query, TableName};

/// A string literal with its decoded bytes and effective charset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringLiteral {
    /// Decoded bytes.
    pub value: Vec<u8>,
    /// Lower-case charset: the introducer if present, else the client charset.
    pub charset: String,
}

impl StringLiteral {
    /// Creates a `utf8mb4` literal.
    #[must_use]
    pub fn utf8mb4(value: impl Into<Vec<u8>>) -> Self {
        Self {
            value: value.into(),
            charset: "utf8mb4".to_string(),
        }
    }
}

/// `DATE '...'`, `TIME '...'` or `TIMESTAMP '...'`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemporalKind {
    Date,
    Time,
    Timestamp,
}

impl TemporalKind {
    /// Returns the SQL keyword.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Date => "DATE",
            Self::Time => "TIME",
            Self::Timestamp => "TIMESTAMP",
        }
    }
}

/// A literal value.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// NULL literal.
    Null,
    /// TRUE or FALSE.
    Bool(bool),
    /// Integer within the signed 64-bit range.
    Int(i64),
    /// Integer above `i64::MAX` that fits in 64 bits.
    Uint(u64),
    /// Fixed-point value kept as canonical text.
    Decimal(String),
    /// Approximate value written with an exponent.
    Float(f64),
    /// Quoted string.
    String(StringLiteral),
    /// `X'..'` or `0x..`.
    Hex(Vec<u8>),
    /// `B'..'` or `0b..`.
    Bit(Vec<u8>),
    /// `DATE '2020-01-01'` and friends, also written `{d '...'}`.
    Temporal {
        /// Literal kind.
        kind: TemporalKind,
        /// The quoted value.
        value: String,
    },
}

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    // Logical
    LogicOr,
    LogicXor,
    LogicAnd,

    // Comparison
    Eq,
    NullEq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,

    // Bitwise
    BitOr,
    BitAnd,
    BitXor,
    LeftShift,
    RightShift,

    // Arithmetic
    Plus,
    Minus,
    Mul,
    Div,
    IntDiv,
    Mod,
}

impl BinaryOp {
    /// Returns the SQL representation of the operator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::LogicOr => "OR",
            Self::LogicXor => "XOR",
            Self::LogicAnd => "AND",
            Self::Eq => "=",
            Self::NullEq => "<=>",
            Self::NotEq => "!=",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Gt => ">",
            Self::GtEq => ">=",
            Self::BitOr => "|",
            Self::BitAnd => "&",
            Self::BitXor => "^",
            Self::LeftShift => "<<",
            Self::RightShift => ">>",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::IntDiv => "DIV",
            Self::Mod => "%",
        }
    }

    /// Returns true if the operator is spelled as a word.
    #[must_use]
    pub const fn is_word(&self) -> bool {
        matches!(
            self,
            Self::LogicOr | Self::LogicXor | Self::LogicAnd | Self::IntDiv
        )
    }

    /// Returns true for comparison operators.
    #[must_use]
    pub const fn is_comparison(&self) -> bool {
        matches!(
            self,
            Self::Eq | Self::NullEq | Self::NotEq | Self::Lt | Self::LtEq | Self::Gt | Self::GtEq
        )
    }
}

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    /// Negation (-)
    Minus,
    /// Unary plus (+)
    Plus,
    /// Bitwise NOT (~)
    BitNeg,
    /// Logical NOT, written as a word
    Not,
    /// Logical NOT written `!`, binding tighter than comparisons
    Not2,
}

impl UnaryOp {
    /// Returns the SQL representation of the operator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Minus => "-",
            Self::Plus => "+",
            Self::BitNeg => "~",
            Self::Not => "NOT ",
            Self::Not2 => "!",
        }
    }
}

/// Interval and date-part units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    Microsecond,
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Quarter,
    Year,
    SecondMicrosecond,
    MinuteMicrosecond,
    MinuteSecond,
    HourMicrosecond,
    HourSecond,
    HourMinute,
    DayMicrosecond,
    DaySecond,
    DayMinute,
    DayHour,
    YearMonth,
}

impl TimeUnit {
    const ALL: [Self; 20] = [
        Self::Microsecond,
        Self::Second,
        Self::Minute,
        Self::Hour,
        Self::Day,
        Self::Week,
        Self::Month,
        Self::Quarter,
        Self::Year,
        Self::SecondMicrosecond,
        Self::MinuteMicrosecond,
        Self::MinuteSecond,
        Self::HourMicrosecond,
        Self::HourSecond,
        Self::HourMinute,
        Self::DayMicrosecond,
        Self::DaySecond,
        Self::DayMinute,
        Self::DayHour,
        Self::YearMonth,
    ];

    /// Returns the SQL keyword.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Microsecond => "MICROSECOND",
            Self::Second => "SECOND",
            Self::Minute => "MINUTE",
            Self::Hour => "HOUR",
            Self::Day => "DAY",
            Self::Week => "WEEK",
            Self::Month => "MONTH",
            Self::Quarter => "QUARTER",
            Self::Year => "YEAR",
            Self::SecondMicrosecond => "SECOND_MICROSECOND",
            Self::MinuteMicrosecond => "MINUTE_MICROSECOND",
            Self::MinuteSecond => "MINUTE_SECOND",
            Self::HourMicrosecond => "HOUR_MICROSECOND",
            Self::HourSecond => "HOUR_SECOND",
            Self::HourMinute => "HOUR_MINUTE",
            Self::DayMicrosecond => "DAY_MICROSECOND",
            Self::DaySecond => "DAY_SECOND",
            Self::DayMinute => "DAY_MINUTE",
            Self::DayHour => "DAY_HOUR",
            Self::YearMonth => "YEAR_MONTH",
        }
    }

    /// Parses a unit name (case-insensitive). `SQL_TSI_*` aliases are accepted.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let upper = name.to_ascii_uppercase();
        let upper = upper.strip_prefix("SQL_TSI_").unwrap_or(&upper);
        Self::ALL.into_iter().find(|unit| unit.as_str() == upper)
    }
}

/// Selector of `GET_FORMAT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GetFormatSelector {
    Date,
    Time,
    Datetime,
}

impl GetFormatSelector {
    /// Returns the SQL keyword.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Date => "DATE",
            Self::Time => "TIME",
            Self::Datetime => "DATETIME",
        }
    }
}

/// Direction argument of `TRIM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrimDirection {
    Both,
    Leading,
    Trailing,
}

impl TrimDirection {
    /// Returns the SQL keyword.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Both => "BOTH",
            Self::Leading => "LEADING",
            Self::Trailing => "TRAILING",
        }
    }
}

/// A possibly qualified column reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ColumnName {
    /// Schema qualifier.
    pub schema: Option<String>,
    /// Table qualifier.
    pub table: Option<String>,
    /// Column name.
    pub name: String,
}

impl ColumnName {
    /// Creates an unqualified column name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            schema: None,
            table: None,
            name: name.into(),
        }
    }
}

/// Scope written on a system variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VarScope {
    /// `@@name` without a scope.
    Implicit,
    Global,
    Session,
    Instance,
}

/// A user or system variable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Variable {
    /// `@name`
    User(String),
    /// `@@[scope.]name`
    System {
        /// Lower-case variable name.
        name: String,
        /// Written scope.
        scope: VarScope,
    },
}

/// `ASC`/`DESC` item of ORDER BY and similar lists.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    /// Sort key.
    pub expr: Expr,
    /// Whether DESC was given.
    pub desc: bool,
}

/// Frame unit of a window frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameUnit {
    Rows,
    Range,
    Groups,
}

/// One end of a window frame.
#[derive(Debug, Clone, PartialEq)]
pub enum FrameBound {
    UnboundedPreceding,
    UnboundedFollowing,
    CurrentRow,
    /// `n PRECEDING` or `INTERVAL n unit PRECEDING`.
    Preceding(Box<Expr>),
    /// `n FOLLOWING` or `INTERVAL n unit FOLLOWING`.
    Following(Box<Expr>),
}

/// `ROWS|RANGE|GROUPS` frame clause.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowFrame {
    /// Frame unit.
    pub unit: FrameUnit,
    /// Frame start.
    pub start: FrameBound,
    /// Frame end when written with BETWEEN.
    pub end: Option<FrameBound>,
}

/// An inline or named window specification.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WindowSpec {
    /// Existing window this one refines.
    pub base: Option<String>,
    /// PARTITION BY list.
    pub partition_by: Vec<Expr>,
    /// ORDER BY list.
    pub order_by: Vec<OrderItem>,
    /// Frame clause.
    pub frame: Option<WindowFrame>,
}

/// The target of `OVER`.
#[derive(Debug, Clone, PartialEq)]
pub enum Over {
    /// `OVER w`
    Named(String),
    /// `OVER (...)`
    Spec(WindowSpec),
}

/// `RESPECT NULLS` / `IGNORE NULLS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NullTreatment {
    Respect,
    Ignore,
}

/// A function call: scalar, aggregate or windowed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FuncCall {
    /// Schema of a qualified (stored) function.
    pub schema: Option<String>,
    /// Lower-case function name.
    pub name: String,
    /// Arguments.
    pub args: Vec<Expr>,
    /// `DISTINCT` inside an aggregate.
    pub distinct: bool,
    /// `COUNT(*)`.
    pub star: bool,
    /// `GROUP_CONCAT(... ORDER BY ...)`.
    pub order_by: Vec<OrderItem>,
    /// `GROUP_CONCAT(... SEPARATOR '...')`.
    pub separator: Option<String>,
    /// `NTH_VALUE(...) FROM LAST`.
    pub from_last: bool,
    /// `RESPECT NULLS` / `IGNORE NULLS`.
    pub null_treatment: Option<NullTreatment>,
    /// Window when called with `OVER`.
    pub over: Option<Over>,
}

impl FuncCall {
    /// Creates a plain call.
    #[must_use]
    pub fn new(name: impl Into<String>, args: Vec<Expr>) -> Self {
        Self {
            name: name.into(),
            args,
            ..Self::default()
        }
    }
}

/// Target type of `CAST`/`CONVERT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastFunction {
    /// `CAST(x AS t)`
    Cast,
    /// `CONVERT(x, t)`
    Convert,
    /// `BINARY x`
    BinaryOperator,
    /// `JSON_SUM_CRC32(x AS t ARRAY)`
    JsonSumCrc32,
}

/// Cast target types.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CastType {
    Binary(Option<u64>),
    Char {
        /// Length.
        length: Option<u64>,
        /// `CHARACTER SET` name.
        charset: Option<String>,
    },
    Date,
    Datetime(Option<u64>),
    Time(Option<u64>),
    Decimal(Option<u64>, Option<u64>),
    Signed,
    Unsigned,
    Json,
    Double,
    Float(Option<u64>),
    Real,
    Year,
    Vector(Option<u64>),
}

/// Modifier of `MATCH ... AGAINST`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchModifier {
    NaturalLanguage,
    NaturalLanguageWithQueryExpansion,
    Boolean,
    WithQueryExpansion,
}

/// Quantifier of a comparison against a sub-query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quantifier {
    Any,
    All,
}

/// Right-hand side of `IN`.
#[derive(Debug, Clone, PartialEq)]
pub enum InList {
    /// `IN (a, b, ...)`
    Exprs(Vec<Expr>),
    /// `IN (SELECT ...)`
    Subquery(Box<Query>),
}

/// The kind of pattern match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LikeKind {
    Like,
    Ilike,
}

/// An SQL expression.
///
/// Equality ignores spans so that trees parsed from different text compare
/// equal when their structure is the same.
#[derive(Debug, Clone)]
pub struct Expr {
    /// The expression.
    pub kind: ExprKind,
    /// Source span.
    pub span: Span,
}

impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}

/// The expression variants.
#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    /// A literal value.
    Literal(Literal),
    /// A column reference.
    Column(ColumnName),
    /// A `?` placeholder with its 0-based position.
    Placeholder(usize),
    /// A user or system variable.
    Variable(Variable),
    /// `@var := expr`
    Assign {
        /// Assigned variable.
        variable: Variable,
        /// New value.
        value: Box<Expr>,
    },
    /// A unary expression.
    Unary {
        /// Operator.
        op: UnaryOp,
        /// Operand.
        expr: Box<Expr>,
    },
    /// A binary expression.
    Binary {
        /// Left operand.
        left: Box<Expr>,
        /// Operator.
        op: BinaryOp,
        /// Right operand.
        right: Box<Expr>,
    },
    /// Parenthesized expression.
    Paren(Box<Expr>),
    /// `ROW(a, b)` or `(a, b)`.
    Row(Vec<Expr>),
    /// Function call.
    Func(Box<FuncCall>),
    /// `CHAR(a, b USING charset)`.
    CharFunc {
        /// Code points.
        args: Vec<Expr>,
        /// Result charset.
        charset: Option<String>,
    },
    /// `CAST`, `CONVERT(x, t)`, `BINARY x`.
    Cast {
        /// Converted expression.
        expr: Box<Expr>,
        /// Target type.
        target: CastType,
        /// Multi-valued cast.
        array: bool,
        /// Spelling used.
        function: CastFunction,
    },
    /// `CONVERT(x USING charset)`.
    ConvertUsing {
        /// Converted expression.
        expr: Box<Expr>,
        /// Target charset.
        charset: String,
    },
    /// `expr COLLATE name`.
    Collate {
        /// Collated expression.
        expr: Box<Expr>,
        /// Lower-case collation.
        collation: String,
    },
    /// `CASE` expression.
    Case {
        /// Operand of a simple CASE.
        operand: Option<Box<Expr>>,
        /// WHEN/THEN pairs.
        whens: Vec<(Expr, Expr)>,
        /// ELSE result.
        else_result: Option<Box<Expr>>,
    },
    /// `[NOT] BETWEEN`.
    Between {
        /// Tested expression.
        expr: Box<Expr>,
        /// Lower bound.
        low: Box<Expr>,
        /// Upper bound.
        high: Box<Expr>,
        /// NOT BETWEEN.
        negated: bool,
    },
    /// `[NOT] IN`.
    In {
        /// Tested expression.
        expr: Box<Expr>,
        /// Candidates.
        list: InList,
        /// NOT IN.
        negated: bool,
    },
    /// `[NOT] LIKE|ILIKE pattern [ESCAPE c]`.
    Like {
        /// Tested expression.
        expr: Box<Expr>,
        /// Pattern.
        pattern: Box<Expr>,
        /// Escape byte.
        escape: Option<u8>,
        /// NOT LIKE.
        negated: bool,
        /// LIKE or ILIKE.
        kind: LikeKind,
    },
    /// `[NOT] REGEXP|RLIKE pattern`.
    Regexp {
        /// Tested expression.
        expr: Box<Expr>,
        /// Pattern.
        pattern: Box<Expr>,
        /// NOT REGEXP.
        negated: bool,
    },
    /// `IS [NOT] NULL` (and `IS [NOT] UNKNOWN`).
    IsNull {
        /// Tested expression.
        expr: Box<Expr>,
        /// IS NOT NULL.
        negated: bool,
    },
    /// `IS [NOT] TRUE|FALSE`.
    IsTruth {
        /// Tested expression.
        expr: Box<Expr>,
        /// TRUE or FALSE.
        value: bool,
        /// IS NOT.
        negated: bool,
    },
    /// `[NOT] EXISTS (subquery)`.
    Exists {
        /// Sub-query.
        query: Box<Query>,
        /// NOT EXISTS.
        negated: bool,
    },
    /// Scalar sub-query.
    Subquery(Box<Query>),
    /// `a op ANY|ALL (subquery)`.
    CompareSubquery {
        /// Left operand.
        left: Box<Expr>,
        /// Comparison operator.
        op: BinaryOp,
        /// ANY/SOME or ALL.
        quantifier: Quantifier,
        /// Sub-query.
        query: Box<Query>,
    },
    /// `MATCH (cols) AGAINST (expr [modifier])`.
    MatchAgainst {
        /// Matched columns.
        columns: Vec<ColumnName>,
        /// Search expression.
        against: Box<Expr>,
        /// Search modifier.
        modifier: MatchModifier,
    },
    /// `INTERVAL expr unit`.
    Interval {
        /// Amount.
        value: Box<Expr>,
        /// Unit.
        unit: TimeUnit,
    },
    /// A bare unit used as a function argument (`EXTRACT(DAY FROM x)`).
    TimeUnit(TimeUnit),
    /// First argument of `GET_FORMAT`.
    GetFormatSelector(GetFormatSelector),
    /// Direction argument of `TRIM`.
    TrimDirection(TrimDirection),
    /// `DEFAULT` or `DEFAULT(col)`.
    Default(Option<ColumnName>),
    /// `VALUES(col)` inside ON DUPLICATE KEY UPDATE.
    Values(ColumnName),
    /// `value MEMBER OF (json)`.
    MemberOf {
        /// Searched value.
        value: Box<Expr>,
        /// JSON array.
        target: Box<Expr>,
    },
    /// `col->'path'` or `col->>'path'`.
    JsonExtract {
        /// JSON column.
        column: ColumnName,
        /// JSON path text.
        path: String,
        /// `->>`
        unquote: bool,
    },
    /// Sequence argument of `NEXTVAL`/`LASTVAL`/`SETVAL`.
    TableName(TableName),
    /// `MAXVALUE` inside partition bounds.
    MaxValue,
}

impl Expr {
    /// Creates an expression without a source span.
    #[must_use]
    pub const fn new(kind: ExprKind) -> Self {
        Self {
            kind,
            span: Span::ZERO,
        }
    }

    /// Creates an expression covering `span`.
    #[must_use]
    pub const fn with_span(kind: ExprKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Creates an unqualified column reference.
    #[must_use]
    pub fn column(name: impl Into<String>) -> Self {
        Self::new(ExprKind::Column(ColumnName::new(name)))
    }

    /// Creates a signed integer literal.
    #[must_use]
    pub const fn int(value: i64) -> Self {
        Self::new(ExprKind::Literal(Literal::Int(value)))
    }

    /// Creates a `utf8mb4` string literal.
    #[must_use]
    pub fn string(value: impl Into<Vec<u8>>) -> Self {
        Self::new(ExprKind::Literal(Literal::String(StringLiteral::utf8mb4(
            value,
        ))))
    }

    /// Creates a NULL literal.
    #[must_use]
    pub const fn null() -> Self {
        Self::new(ExprKind::Literal(Literal::Null))
    }

    /// Creates a binary expression.
    #[must_use]
    pub fn binary(self, op: BinaryOp, right: Self) -> Self {
        let span = self.span.merge(right.span);
        Self::with_span(
            ExprKind::Binary {
                left: Box::new(self),
                op,
                right: Box::new(right),
            },
            span,
        )
    }

    /// Creates a unary expression.
    #[must_use]
    pub fn unary(op: UnaryOp, expr: Self) -> Self {
        Self::new(ExprKind::Unary {
            op,
            expr: Box::new(expr),
        })
    }

    /// Creates a plain function call.
    #[must_use]
    pub fn func(name: impl Into<String>, args: Vec<Self>) -> Self {
        Self::new(ExprKind::Func(Box::new(FuncCall::new(name, args))))
    }

    /// Returns the literal if this is one.
    #[must_use]
    pub const fn as_literal(&self) -> Option<&Literal> {
        match &self.kind {
            ExprKind::Literal(lit) => Some(lit),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_ignores_spans() {
        let a = Expr::with_span(ExprKind::Literal(Literal::Int(1)), Span::new(0, 1));
        let b = Expr::with_span(ExprKind::Literal(Literal::Int(1)), Span::new(7, 8));
        assert_eq!(a, b);
        assert_ne!(a, Expr::int(2));
    }

    #[test]
    fn test_binary_merges_spans() {
        let left = Expr::with_span(ExprKind::Literal(Literal::Int(1)), Span::new(0, 1));
        let right = Expr::with_span(ExprKind::Literal(Literal::Int(2)), Span::new(2, 3));
        assert_eq!(left.binary(BinaryOp::Plus, right).span, Span::new(0, 3));
    }

    #[test]
    fn test_time_unit_names() {
        assert_eq!(TimeUnit::from_name("day_hour"), Some(TimeUnit::DayHour));
        assert_eq!(TimeUnit::from_name("SQL_TSI_MONTH"), Some(TimeUnit::Month));
        assert_eq!(TimeUnit::from_name("fortnight"), None);
    }

    #[test]
    fn test_operator_spelling() {
        assert_eq!(BinaryOp::NullEq.as_str(), "<=>");
        assert!(BinaryOp::IntDiv.is_word());
        assert!(!BinaryOp::Plus.is_word());
        assert_eq!(UnaryOp::Not.as_str(), "NOT ");
    }
}
