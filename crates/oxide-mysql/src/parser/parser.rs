//! The public parser and the token cursor shared by the grammar modules.

use tracing::{debug, warn};

use super::error::{ErrorCode, ParseError, Warning};
use crate::ast::{Expr, Statement, StmtNode};
use crate::config::ParserConfig;
use crate::lexer::{CharsetRegistry, Keyword, Lexer, Span, Token, TokenKind};
use crate::SqlMode;

/// Client charset assumed when `parse` is given none.
pub(super) const DEFAULT_CHARSET: &str = "utf8mb4";

/// MySQL-dialect SQL parser.
///
/// A parser instance carries the SQL mode, the window-function switch, the
/// strict `DOUBLE` check and the charset registry. Calls to
/// [`Parser::parse`] are independent of each other: warnings are collected
/// per call and returned next to the statements.
///
/// # Example
///
/// ```
/// use oxide_mysql::Parser;
///
/// let parser = Parser::new();
/// let (stmts, warnings) = parser.parse("SELECT 1; SELECT 2", "", "").unwrap();
/// assert_eq!(stmts.len(), 2);
/// assert!(warnings.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Parser {
    config: ParserConfig,
    charsets: CharsetRegistry,
}

impl Parser {
    /// Creates a parser with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser from a configuration.
    #[must_use]
    pub fn with_config(config: ParserConfig) -> Self {
        Self {
            config,
            charsets: CharsetRegistry::default(),
        }
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Replaces the SQL mode used by subsequent parses.
    pub fn set_sql_mode(&mut self, mode: SqlMode) {
        self.config.sql_mode = mode;
    }

    /// Turns window-function parsing on or off.
    pub fn enable_window_func(&mut self, enable: bool) {
        self.config.enable_window_func = enable;
    }

    /// Turns the `DOUBLE(n)` rejection on or off.
    pub fn set_strict_double_type_check(&mut self, strict: bool) {
        self.config.strict_double_type_check = strict;
    }

    /// Returns the charset registry.
    #[must_use]
    pub const fn charsets(&self) -> &CharsetRegistry {
        &self.charsets
    }

    /// Returns the charset registry for modification.
    pub fn charsets_mut(&mut self) -> &mut CharsetRegistry {
        &mut self.charsets
    }

    /// Parses zero or more `;`-separated statements.
    ///
    /// `charset` and `collation` describe the client connection; string
    /// literals without an introducer take the client charset. Empty values
    /// select `utf8mb4`.
    ///
    /// # Errors
    ///
    /// Returns the first lexical, syntactic or semantic error. No partial
    /// result accompanies an error.
    pub fn parse(
        &self,
        sql: &str,
        charset: &str,
        collation: &str,
    ) -> Result<(Vec<StmtNode>, Vec<Warning>), ParseError> {
        let client_charset = self.client_charset(sql, charset, collation)?;
        let mut grammar = Grammar::new(sql, &self.config, &self.charsets, client_charset);
        let stmts = grammar.parse_statements()?;
        debug!(statements = stmts.len(), bytes = sql.len(), "parsed SQL");
        Ok((stmts, grammar.warnings))
    }

    /// Parses exactly one statement.
    ///
    /// # Errors
    ///
    /// Fails like [`Parser::parse`], and with a syntax error when the input
    /// holds no statement or more than one.
    pub fn parse_one_stmt(
        &self,
        sql: &str,
        charset: &str,
        collation: &str,
    ) -> Result<StmtNode, ParseError> {
        let (stmts, _) = self.parse(sql, charset, collation)?;
        match <[StmtNode; 1]>::try_from(stmts) {
            Ok([stmt]) => Ok(stmt),
            Err(stmts) => {
                let span = stmts
                    .get(1)
                    .map_or_else(|| Span::new(sql.len(), sql.len()), |stmt| stmt.span);
                Err(ParseError::syntax(sql, span))
            }
        }
    }

    /// Parses a standalone expression such as a column default.
    ///
    /// # Errors
    ///
    /// Returns a syntax error if the input is not exactly one expression.
    pub fn parse_expr(&self, sql: &str) -> Result<Expr, ParseError> {
        let mut grammar =
            Grammar::new(sql, &self.config, &self.charsets, DEFAULT_CHARSET.to_string());
        let expr = grammar.parse_expr()?;
        if !grammar.current().is_eof() {
            return Err(grammar.error());
        }
        Ok(expr)
    }

    fn client_charset(
        &self,
        sql: &str,
        charset: &str,
        collation: &str,
    ) -> Result<String, ParseError> {
        if !charset.is_empty() {
            return self
                .charsets
                .charset(charset)
                .map(|cs| cs.name.clone())
                .ok_or_else(|| {
                    ParseError::new(
                        ErrorCode::UnknownCharacterSet,
                        format!("Unknown character set: '{charset}'"),
                        sql,
                        Span::ZERO,
                    )
                });
        }
        if !collation.is_empty() {
            return self
                .charsets
                .collation_charset(collation)
                .map(|cs| cs.name.clone())
                .ok_or_else(|| {
                    ParseError::new(
                        ErrorCode::UnknownCollation,
                        format!("Unknown collation: '{collation}'"),
                        sql,
                        Span::ZERO,
                    )
                });
        }
        Ok(DEFAULT_CHARSET.to_string())
    }
}

/// Token cursor and per-parse state.
///
/// The whole input is tokenized up front so the grammar can look ahead and
/// backtrack freely.
pub(super) struct Grammar<'a> {
    pub(super) source: &'a str,
    tokens: Vec<Token>,
    pos: usize,
    pub(super) config: &'a ParserConfig,
    pub(super) charsets: &'a CharsetRegistry,
    /// Charset of string literals without an introducer.
    pub(super) client_charset: String,
    pub(super) warnings: Vec<Warning>,
    param_counter: usize,
    /// Nesting depth of binding statements, where `*.t` is allowed.
    binding_depth: usize,
}

impl<'a> Grammar<'a> {
    pub(super) fn new(
        source: &'a str,
        config: &'a ParserConfig,
        charsets: &'a CharsetRegistry,
        client_charset: String,
    ) -> Self {
        let mut lexer = Lexer::new(source)
            .with_sql_mode(config.sql_mode)
            .with_executable_comment_version(config.executable_comment_version);
        let tokens = lexer.tokenize();
        let warnings = lexer.take_warnings();
        for warning in &warnings {
            warn!(code = %warning.code, "{}", warning.message);
        }
        Self {
            source,
            tokens,
            pos: 0,
            config,
            charsets,
            client_charset,
            warnings,
            param_counter: 0,
            binding_depth: 0,
        }
    }

    // Cursor

    /// Returns the current token.
    pub(super) fn current(&self) -> &Token {
        self.peek_token(0)
    }

    /// Returns the token `n` positions ahead, or EOF.
    pub(super) fn peek_token(&self, n: usize) -> &Token {
        let last = self.tokens.len().saturating_sub(1);
        &self.tokens[(self.pos + n).min(last)]
    }

    /// Returns the kind of the token `n` positions ahead.
    pub(super) fn peek_kind(&self, n: usize) -> &TokenKind {
        &self.peek_token(n).kind
    }

    /// Advances to the next token; EOF is never passed.
    pub(super) fn advance(&mut self) {
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
    }

    /// Span of the most recently consumed token.
    pub(super) fn previous_span(&self) -> Span {
        self.pos
            .checked_sub(1)
            .and_then(|i| self.tokens.get(i))
            .map_or(Span::ZERO, |token| token.span)
    }

    /// Span from `start` to the end of the last consumed token.
    pub(super) fn span_from(&self, start: usize) -> Span {
        Span::new(start, self.previous_span().end.max(start))
    }

    /// Runs `f`, rewinding the cursor and discarding its warnings when it
    /// fails.
    pub(super) fn speculate<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Option<T> {
        let pos = self.pos;
        let warnings = self.warnings.len();
        let params = self.param_counter;
        if let Ok(value) = f(self) {
            Some(value)
        } else {
            self.pos = pos;
            self.warnings.truncate(warnings);
            self.param_counter = params;
            None
        }
    }

    // Token checks

    pub(super) fn check(&self, kind: &TokenKind) -> bool {
        self.current().kind == *kind
    }

    pub(super) fn check_keyword(&self, keyword: Keyword) -> bool {
        self.check_keyword_at(0, keyword)
    }

    pub(super) fn check_keyword_at(&self, n: usize, keyword: Keyword) -> bool {
        matches!(self.peek_kind(n), TokenKind::Keyword(kw) if *kw == keyword)
    }

    /// Checks for an unquoted word, keyword or not (case-insensitive).
    pub(super) fn check_word(&self, word: &str) -> bool {
        self.check_word_at(0, word)
    }

    pub(super) fn check_word_at(&self, n: usize, word: &str) -> bool {
        match self.peek_kind(n) {
            TokenKind::Identifier(ident) => ident.eq_ignore_ascii_case(word),
            TokenKind::Keyword(kw) => kw.as_str().eq_ignore_ascii_case(word),
            _ => false,
        }
    }

    pub(super) fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(super) fn eat_keyword(&mut self, keyword: Keyword) -> bool {
        if self.check_keyword(keyword) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(super) fn eat_word(&mut self, word: &str) -> bool {
        if self.check_word(word) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(super) fn expect(&mut self, kind: &TokenKind) -> Result<(), ParseError> {
        if self.eat(kind) {
            Ok(())
        } else {
            Err(self.error())
        }
    }

    pub(super) fn expect_keyword(&mut self, keyword: Keyword) -> Result<(), ParseError> {
        if self.eat_keyword(keyword) {
            Ok(())
        } else {
            Err(self.error())
        }
    }

    pub(super) fn expect_word(&mut self, word: &str) -> Result<(), ParseError> {
        if self.eat_word(word) {
            Ok(())
        } else {
            Err(self.error())
        }
    }

    /// Consumes an optional `=`.
    pub(super) fn eat_eq(&mut self) {
        self.eat(&TokenKind::Eq);
    }

    // Values

    /// Returns the name carried by token `n` if it can be an identifier.
    ///
    /// Non-reserved keywords keep their source spelling.
    pub(super) fn identifier_at(&self, n: usize) -> Option<String> {
        let token = self.peek_token(n);
        match &token.kind {
            TokenKind::Identifier(name) | TokenKind::QuotedIdentifier(name) => Some(name.clone()),
            TokenKind::Keyword(kw) if !kw.is_reserved(self.config.enable_window_func) => {
                Some(token.span.slice(self.source).to_string())
            }
            _ => None,
        }
    }

    pub(super) fn is_identifier_at(&self, n: usize) -> bool {
        match self.peek_kind(n) {
            TokenKind::Identifier(_) | TokenKind::QuotedIdentifier(_) => true,
            TokenKind::Keyword(kw) => !kw.is_reserved(self.config.enable_window_func),
            _ => false,
        }
    }

    pub(super) fn expect_identifier(&mut self) -> Result<String, ParseError> {
        let name = self.identifier_at(0).ok_or_else(|| self.error())?;
        self.advance();
        Ok(name)
    }

    /// Parses `a, b, c`.
    pub(super) fn parse_identifier_list(&mut self) -> Result<Vec<String>, ParseError> {
        let mut names = vec![self.expect_identifier()?];
        while self.eat(&TokenKind::Comma) {
            names.push(self.expect_identifier()?);
        }
        Ok(names)
    }

    /// Parses `(a, b, c)`.
    pub(super) fn parse_paren_identifier_list(&mut self) -> Result<Vec<String>, ParseError> {
        self.expect(&TokenKind::LeftParen)?;
        let names = self.parse_identifier_list()?;
        self.expect(&TokenKind::RightParen)?;
        Ok(names)
    }

    pub(super) fn expect_u64(&mut self) -> Result<u64, ParseError> {
        if let TokenKind::Integer(value) = self.current().kind {
            self.advance();
            Ok(value)
        } else {
            Err(self.error())
        }
    }

    /// Parses a possibly negative integer that must fit in an `i64`.
    pub(super) fn expect_i64(&mut self) -> Result<i64, ParseError> {
        let start = self.current().span.start;
        let negative = self.eat(&TokenKind::Minus);
        if !negative {
            self.eat(&TokenKind::Plus);
        }
        let magnitude = match &self.current().kind {
            TokenKind::Integer(value) => i128::from(*value),
            TokenKind::Decimal(text) if !text.contains('.') => {
                text.parse::<i128>().unwrap_or(i128::MAX)
            }
            _ => return Err(self.error()),
        };
        self.advance();
        let value = if negative { -magnitude } else { magnitude };
        i64::try_from(value).map_err(|_| {
            self.error_at(
                ErrorCode::DataOutOfRange,
                format!(
                    "Value {} is out of range",
                    self.span_from(start).slice(self.source)
                ),
                self.span_from(start),
            )
        })
    }

    /// Parses one or more adjacent string literals as raw bytes.
    pub(super) fn expect_string_bytes(&mut self) -> Result<Vec<u8>, ParseError> {
        let TokenKind::String(first) = &self.current().kind else {
            return Err(self.error());
        };
        let mut bytes = first.clone();
        self.advance();
        while let TokenKind::String(more) = &self.current().kind {
            bytes.extend_from_slice(more);
            self.advance();
        }
        Ok(bytes)
    }

    /// Parses a string literal as text.
    pub(super) fn expect_string(&mut self) -> Result<String, ParseError> {
        let bytes = self.expect_string_bytes()?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Parses exactly one string literal, leaving any adjacent literal for
    /// the caller.
    pub(super) fn expect_single_string(&mut self) -> Result<String, ParseError> {
        let TokenKind::String(bytes) = &self.current().kind else {
            return Err(self.error());
        };
        let text = String::from_utf8_lossy(bytes).into_owned();
        self.advance();
        Ok(text)
    }

    pub(super) fn check_string(&self) -> bool {
        matches!(self.current().kind, TokenKind::String(_))
    }

    /// Parses a name given either as an identifier or as a string.
    pub(super) fn expect_name_or_string(&mut self) -> Result<String, ParseError> {
        if self.check_string() {
            self.expect_string()
        } else {
            self.expect_identifier()
        }
    }

    pub(super) fn next_placeholder(&mut self) -> usize {
        let index = self.param_counter;
        self.param_counter += 1;
        index
    }

    pub(super) fn sql_mode(&self) -> SqlMode {
        self.config.sql_mode
    }

    pub(super) fn push_warning(&mut self, warning: Warning) {
        warn!(code = %warning.code, "{}", warning.message);
        self.warnings.push(warning);
    }

    // Errors

    /// Syntax error at the current token.
    pub(super) fn error(&self) -> ParseError {
        let token = self.current();
        let mut err = ParseError::syntax(self.source, token.span);
        if let TokenKind::Error(lex) = &token.kind {
            err.message = format!("{lex}: {}", err.message);
        }
        err
    }

    pub(super) fn error_at(
        &self,
        code: ErrorCode,
        message: impl Into<String>,
        span: Span,
    ) -> ParseError {
        ParseError::new(code, message, self.source, span)
    }

    // Statements

    pub(super) fn parse_statements(&mut self) -> Result<Vec<StmtNode>, ParseError> {
        let mut stmts = Vec::new();
        let mut start = 0;
        loop {
            while self.check(&TokenKind::Semicolon) {
                start = self.current().span.end;
                self.advance();
            }
            if self.current().is_eof() {
                break;
            }
            let stmt = self.parse_statement()?;
            let end = match self.current().kind {
                TokenKind::Semicolon => self.current().span.start,
                TokenKind::Eof => self.source.len(),
                _ => return Err(self.error()),
            };
            let span = Span::new(start, end.max(start));
            debug!(start = span.start, end = span.end, "parsed statement");
            stmts.push(StmtNode {
                stmt,
                span,
                text: span.slice(self.source).to_string(),
            });
        }
        Ok(stmts)
    }

    /// Parses one statement, dispatching on its leading word.
    pub(super) fn parse_statement(&mut self) -> Result<Statement, ParseError> {
        match self.current().kind {
            TokenKind::Keyword(kw) => match kw {
                Keyword::Select
                | Keyword::With
                | Keyword::Values
                | Keyword::Table => self.parse_query_statement(),
                Keyword::Insert => self.parse_insert(false),
                Keyword::Replace => self.parse_insert(true),
                Keyword::Update => self.parse_update(None),
                Keyword::Delete => self.parse_delete(None),
                Keyword::Load => self.parse_load(),
                Keyword::Import => self.parse_import(),
                Keyword::Call => self.parse_call(),
                Keyword::Do => self.parse_do(),
                Keyword::Create => self.parse_create(),
                Keyword::Alter => self.parse_alter(),
                Keyword::Drop => self.parse_drop(),
                Keyword::Rename => self.parse_rename(),
                Keyword::Truncate => self.parse_truncate(),
                Keyword::Recover => self.parse_recover(),
                Keyword::Set => self.parse_set_statement(),
                Keyword::Show => self.parse_show(),
                Keyword::Admin => self.parse_admin(),
                Keyword::Analyze => self.parse_analyze(),
                Keyword::Prepare => self.parse_prepare(),
                Keyword::Execute => self.parse_execute(),
                Keyword::Deallocate => self.parse_deallocate(),
                Keyword::Begin | Keyword::Start => self.parse_begin(),
                Keyword::Commit => self.parse_commit(),
                Keyword::Rollback => self.parse_rollback(),
                Keyword::Savepoint => self.parse_savepoint(),
                Keyword::Release => self.parse_release(),
                Keyword::Lock => self.parse_lock(),
                Keyword::Unlock => self.parse_unlock(),
                Keyword::Flush => self.parse_flush(),
                Keyword::Kill => self.parse_kill(),
                Keyword::Explain | Keyword::Describe | Keyword::Desc => self.parse_explain(),
                Keyword::Trace => self.parse_trace(),
                Keyword::Backup
                | Keyword::Restore
                | Keyword::Pause
                | Keyword::Resume
                | Keyword::Purge => self.parse_brie(),
                Keyword::Grant => self.parse_grant(),
                Keyword::Revoke => self.parse_revoke(),
                Keyword::Use => self.parse_use(),
                Keyword::Help => self.parse_help(),
                Keyword::Shutdown => {
                    self.advance();
                    Ok(Statement::Shutdown)
                }
                Keyword::Restart => {
                    self.advance();
                    Ok(Statement::Restart)
                }
                Keyword::Query => self.parse_query_watch(),
                Keyword::Cancel => self.parse_traffic(),
                _ => Err(self.error()),
            },
            TokenKind::LeftParen => self.parse_query_statement(),
            TokenKind::Identifier(_) => {
                if self.check_word("batch") {
                    self.parse_batch()
                } else if self.check_word("flashback") {
                    self.parse_flashback()
                } else if self.check_word("split") {
                    self.parse_split()
                } else if self.check_word("distribute") {
                    self.parse_distribute()
                } else if self.check_word("plan") {
                    self.parse_plan_replayer()
                } else if self.check_word("traffic") {
                    self.parse_traffic()
                } else if self.check_word("calibrate") {
                    self.parse_calibrate()
                } else if self.check_word("stop") {
                    self.parse_brie()
                } else {
                    Err(self.error())
                }
            }
            _ => Err(self.error()),
        }
    }

    /// Parses a complete statement nested in another one (EXPLAIN, TRACE,
    /// bindings, BATCH).
    pub(super) fn parse_nested_statement(&mut self) -> Result<Box<Statement>, ParseError> {
        self.parse_statement().map(Box::new)
    }

    /// Parses a statement bound by a binding, where table names may use
    /// the `*` schema.
    pub(super) fn parse_binding_statement(&mut self) -> Result<Box<Statement>, ParseError> {
        self.binding_depth += 1;
        let stmt = self.parse_nested_statement();
        self.binding_depth -= 1;
        stmt
    }

    pub(super) const fn allows_wildcard_schema(&self) -> bool {
        self.binding_depth > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{ExprKind, Literal};

    fn parse(sql: &str) -> Vec<StmtNode> {
        Parser::new().parse(sql, "", "").unwrap().0
    }

    #[test]
    fn test_statement_texts() {
        let stmts = parse("SELECT 1; SELECT 2;");
        assert_eq!(stmts.len(), 2);
        assert_eq!(stmts[0].text, "SELECT 1");
        assert_eq!(stmts[1].text, " SELECT 2");
    }

    #[test]
    fn test_empty_statements_are_skipped() {
        assert!(parse("").is_empty());
        assert!(parse(";;").is_empty());
        assert_eq!(parse(";SELECT 1;;").len(), 1);
    }

    #[test]
    fn test_executable_comment_texts() {
        let stmts = parse("/*! SET x=1; SELECT 2 */");
        assert_eq!(stmts.len(), 2);
        assert_eq!(stmts[1].text, " SELECT 2 */");
    }

    #[test]
    fn test_parse_one_stmt_rejects_many() {
        let parser = Parser::new();
        assert!(parser.parse_one_stmt("SELECT 1", "", "").is_ok());
        assert!(parser.parse_one_stmt("SELECT 1; SELECT 2", "", "").is_err());
        assert!(parser.parse_one_stmt("", "", "").is_err());
    }

    #[test]
    fn test_unknown_client_charset() {
        let err = Parser::new().parse("SELECT 1", "klingon", "").unwrap_err();
        assert_eq!(err.code, ErrorCode::UnknownCharacterSet);
    }

    #[test]
    fn test_parse_expr() {
        let expr = Parser::new().parse_expr("1").unwrap();
        assert_eq!(expr.kind, ExprKind::Literal(Literal::Int(1)));
        assert!(Parser::new().parse_expr("1 2").is_err());
    }

    #[test]
    fn test_garbage_is_a_syntax_error() {
        let err = Parser::new().parse("SELEC 1", "", "").unwrap_err();
        assert_eq!(err.code, ErrorCode::ParseError);
        assert_eq!((err.line, err.column), (1, 1));
    }
}
