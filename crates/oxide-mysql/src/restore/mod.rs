//! SQL restoration.
//!
//! Every AST node implements [`Restore`], which writes the node back as SQL
//! text into a [`RestoreCtx`]. The context carries the [`RestoreFlags`] that
//! choose keyword casing, identifier quoting, string literal rendering and
//! operator spacing. With [`RestoreFlags::DEFAULT`] the output parses back to
//! an equal tree.
//!
//! # Example
//!
//! ```
//! use oxide_mysql::{restore, Parser, RestoreFlags};
//!
//! let stmt = Parser::new().parse_one_stmt("select a from t where b = 1", "", "").unwrap();
//! let sql = restore(&stmt.stmt, RestoreFlags::DEFAULT).unwrap();
//! assert_eq!(sql, "SELECT `a` FROM `t` WHERE `b`=1");
//! ```

mod admin;
mod cluster;
mod ddl;
mod dml;
mod expr;
mod query;
mod security;
mod session;
mod statement;

use std::fmt;

use tracing::trace;

use crate::ast::{Statement, TableName};
use crate::lexer::Keyword;

bitflags::bitflags! {
    /// Switches that shape restored SQL.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct RestoreFlags: u32 {
        /// Quote strings with `'` instead of `"`.
        const STRING_SINGLE_QUOTES = 1;
        /// Never write a `_charset` introducer.
        const STRING_WITHOUT_CHARSET = 1 << 1;
        /// Skip the introducer when it names the default charset.
        const STRING_WITHOUT_DEFAULT_CHARSET = 1 << 2;
        const KEYWORD_UPPERCASE = 1 << 3;
        const KEYWORD_LOWERCASE = 1 << 4;
        const NAME_UPPERCASE = 1 << 5;
        const NAME_LOWERCASE = 1 << 6;
        const NAME_DOUBLE_QUOTES = 1 << 7;
        const NAME_BACK_QUOTES = 1 << 8;
        /// Write `a + b` instead of `a+b`.
        const SPACES_AROUND_BINARY_OPERATION = 1 << 9;
        /// Wrap every binary operation in parentheses.
        const BRACKET_AROUND_BINARY_OPERATION = 1 << 10;
        /// Drop the precision of `DOUBLE(n)` when no scale is present.
        const STRICT_DOUBLE_TYPE_CHECK = 1 << 11;
        /// Write backslashes and control characters in strings verbatim,
        /// for readers in `NO_BACKSLASH_ESCAPES` mode.
        const STRING_NO_BACKSLASH_ESCAPES = 1 << 12;

        const DEFAULT = Self::STRING_SINGLE_QUOTES.bits()
            | Self::KEYWORD_UPPERCASE.bits()
            | Self::NAME_BACK_QUOTES.bits();
    }
}

impl Default for RestoreFlags {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Charset whose introducer [`RestoreFlags::STRING_WITHOUT_DEFAULT_CHARSET`] omits.
const DEFAULT_CHARSET: &str = "utf8mb4";

/// Errors raised while restoring.
#[derive(Debug, thiserror::Error)]
pub enum RestoreError {
    /// The output sink refused a write.
    #[error("write failed: {0}")]
    Fmt(#[from] fmt::Error),
    /// The tree holds a shape no SQL text can express.
    #[error("malformed AST: {0}")]
    Malformed(String),
}

/// Result of a restore step.
pub type RestoreResult = Result<(), RestoreError>;

/// Writes an AST node as SQL.
pub trait Restore {
    /// Appends the SQL for `self` to `ctx`.
    ///
    /// # Errors
    ///
    /// Fails when the sink fails or the node is malformed.
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult;
}

impl<T: Restore + ?Sized> Restore for Box<T> {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> RestoreResult {
        (**self).restore(ctx)
    }
}

/// Output sink plus the state threaded through a restore.
pub struct RestoreCtx<'a> {
    flags: RestoreFlags,
    out: &'a mut dyn fmt::Write,
    default_db: Option<String>,
    /// Names bound by the enclosing `WITH` clauses, innermost last.
    cte_names: Vec<Vec<String>>,
    /// Depth inside a join tree; nested joins are parenthesized.
    pub(crate) join_level: usize,
}

impl<'a> RestoreCtx<'a> {
    /// Creates a context writing into `out`.
    pub fn new(flags: RestoreFlags, out: &'a mut dyn fmt::Write) -> Self {
        Self {
            flags,
            out,
            default_db: None,
            cte_names: Vec::new(),
            join_level: 0,
        }
    }

    /// Qualifies unqualified table names with `db`.
    #[must_use]
    pub fn with_default_db(mut self, db: impl Into<String>) -> Self {
        self.default_db = Some(db.into());
        self
    }

    /// Returns the active flags.
    #[must_use]
    pub const fn flags(&self) -> RestoreFlags {
        self.flags
    }

    /// Writes text verbatim.
    ///
    /// # Errors
    ///
    /// Fails when the sink fails.
    pub fn write_plain(&mut self, text: &str) -> RestoreResult {
        self.out.write_str(text)?;
        Ok(())
    }

    /// Writes a value through its `Display` impl.
    ///
    /// # Errors
    ///
    /// Fails when the sink fails.
    pub fn write_display(&mut self, value: impl fmt::Display) -> RestoreResult {
        write!(self.out, "{value}")?;
        Ok(())
    }

    /// Writes a keyword, cased by the keyword flags.
    ///
    /// # Errors
    ///
    /// Fails when the sink fails.
    pub fn write_keyword(&mut self, keyword: &str) -> RestoreResult {
        if self.flags.contains(RestoreFlags::KEYWORD_UPPERCASE) {
            self.out.write_str(&keyword.to_ascii_uppercase())?;
        } else if self.flags.contains(RestoreFlags::KEYWORD_LOWERCASE) {
            self.out.write_str(&keyword.to_ascii_lowercase())?;
        } else {
            self.out.write_str(keyword)?;
        }
        Ok(())
    }

    /// Writes an identifier, cased and quoted by the name flags.
    ///
    /// # Errors
    ///
    /// Fails when the sink fails.
    pub fn write_name(&mut self, name: &str) -> RestoreResult {
        let name = if self.flags.contains(RestoreFlags::NAME_UPPERCASE) {
            name.to_uppercase()
        } else if self.flags.contains(RestoreFlags::NAME_LOWERCASE) {
            name.to_lowercase()
        } else {
            name.to_string()
        };
        let quote = if self.flags.contains(RestoreFlags::NAME_BACK_QUOTES) {
            Some('`')
        } else if self.flags.contains(RestoreFlags::NAME_DOUBLE_QUOTES) {
            Some('"')
        } else {
            None
        };
        match quote {
            Some(quote) => {
                self.out.write_char(quote)?;
                for c in name.chars() {
                    if c == quote {
                        self.out.write_char(quote)?;
                    }
                    self.out.write_char(c)?;
                }
                self.out.write_char(quote)?;
            }
            None => self.out.write_str(&name)?,
        }
        Ok(())
    }

    /// Writes a word that the grammar reads as a plain identifier.
    ///
    /// Simple words that are not reserved are written like keywords; the
    /// rest are written as names.
    ///
    /// # Errors
    ///
    /// Fails when the sink fails.
    pub fn write_word(&mut self, word: &str) -> RestoreResult {
        if is_plain_word(word) && !Keyword::from_str(word).is_some_and(|kw| kw.is_reserved(true)) {
            self.write_keyword(word)
        } else {
            self.write_name(word)
        }
    }

    /// Writes `a, b, c` through `write_name`.
    ///
    /// # Errors
    ///
    /// Fails when the sink fails.
    pub fn write_name_list(&mut self, names: &[String]) -> RestoreResult {
        for (i, name) in names.iter().enumerate() {
            if i > 0 {
                self.write_plain(", ")?;
            }
            self.write_name(name)?;
        }
        Ok(())
    }

    /// Writes a quoted, escaped string without an introducer.
    ///
    /// # Errors
    ///
    /// Fails when the sink fails.
    pub fn write_string(&mut self, value: &str) -> RestoreResult {
        let quote = if self.flags.contains(RestoreFlags::STRING_SINGLE_QUOTES) {
            '\''
        } else {
            '"'
        };
        self.out.write_char(quote)?;
        let escapes = !self.flags.contains(RestoreFlags::STRING_NO_BACKSLASH_ESCAPES);
        for c in value.chars() {
            match c {
                c if c == quote => {
                    self.out.write_char(quote)?;
                    self.out.write_char(quote)?;
                }
                c if !escapes => self.out.write_char(c)?,
                '\\' => self.out.write_str("\\\\")?,
                '\0' => self.out.write_str("\\0")?,
                '\n' => self.out.write_str("\\n")?,
                '\r' => self.out.write_str("\\r")?,
                '\t' => self.out.write_str("\\t")?,
                '\u{8}' => self.out.write_str("\\b")?,
                '\u{1a}' => self.out.write_str("\\Z")?,
                c => self.out.write_char(c)?,
            }
        }
        self.out.write_char(quote)?;
        Ok(())
    }

    /// Writes raw bytes as a string when they are UTF-8, else as `X'..'`.
    ///
    /// # Errors
    ///
    /// Fails when the sink fails.
    pub fn write_bytes(&mut self, value: &[u8]) -> RestoreResult {
        match std::str::from_utf8(value) {
            Ok(text) => self.write_string(text),
            Err(_) => self.write_hex(value),
        }
    }

    /// Writes `X'..'`.
    ///
    /// # Errors
    ///
    /// Fails when the sink fails.
    pub fn write_hex(&mut self, value: &[u8]) -> RestoreResult {
        self.write_plain("X'")?;
        for byte in value {
            write!(self.out, "{byte:02X}")?;
        }
        self.write_plain("'")
    }

    /// Writes a string literal carrying `charset`, with the introducer the
    /// string flags ask for.
    ///
    /// # Errors
    ///
    /// Fails when the sink fails.
    pub fn write_literal_string(&mut self, value: &[u8], charset: &str) -> RestoreResult {
        let introducer = !charset.is_empty()
            && !self.flags.contains(RestoreFlags::STRING_WITHOUT_CHARSET)
            && !(self.flags.contains(RestoreFlags::STRING_WITHOUT_DEFAULT_CHARSET)
                && charset.eq_ignore_ascii_case(DEFAULT_CHARSET));
        match std::str::from_utf8(value) {
            Ok(text) => {
                if introducer {
                    self.write_plain("_")?;
                    self.write_keyword(charset)?;
                }
                self.write_string(text)
            }
            Err(_) => {
                if introducer {
                    self.write_plain("_")?;
                    self.write_keyword(charset)?;
                    self.write_plain(" ")?;
                }
                self.write_hex(value)
            }
        }
    }

    /// Writes a table name, qualified with the default database when it has
    /// no schema and does not name an enclosing common table expression.
    ///
    /// # Errors
    ///
    /// Fails when the sink fails.
    pub fn write_table_name(&mut self, table: &TableName) -> RestoreResult {
        if table.wildcard_schema {
            self.write_plain("*.")?;
            return self.write_name(&table.name);
        }
        let schema = match (&table.schema, &self.default_db) {
            (Some(schema), _) => Some(schema.clone()),
            (None, Some(db)) if !self.is_cte_name(&table.name) => Some(db.clone()),
            _ => None,
        };
        if let Some(schema) = schema {
            self.write_name(&schema)?;
            self.write_plain(".")?;
        }
        self.write_name(&table.name)
    }

    /// Writes a table name exactly as stored.
    ///
    /// # Errors
    ///
    /// Fails when the sink fails.
    pub fn write_raw_table_name(&mut self, table: &TableName) -> RestoreResult {
        if table.wildcard_schema {
            self.write_plain("*.")?;
        } else if let Some(schema) = &table.schema {
            self.write_name(schema)?;
            self.write_plain(".")?;
        }
        self.write_name(&table.name)
    }

    /// Writes a comma separated list of table names.
    ///
    /// # Errors
    ///
    /// Fails when the sink fails.
    pub fn write_table_names(&mut self, tables: &[TableName]) -> RestoreResult {
        for (i, table) in tables.iter().enumerate() {
            if i > 0 {
                self.write_plain(", ")?;
            }
            self.write_table_name(table)?;
        }
        Ok(())
    }

    /// Restores `items` separated by `sep`.
    ///
    /// # Errors
    ///
    /// Fails when any item fails.
    pub fn write_list<T: Restore>(&mut self, items: &[T], sep: &str) -> RestoreResult {
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.write_plain(sep)?;
            }
            item.restore(self)?;
        }
        Ok(())
    }

    pub(crate) fn push_cte_scope(&mut self, names: Vec<String>) {
        self.cte_names.push(names);
    }

    pub(crate) fn pop_cte_scope(&mut self) {
        self.cte_names.pop();
    }

    fn is_cte_name(&self, name: &str) -> bool {
        self.cte_names
            .iter()
            .flatten()
            .any(|cte| cte.eq_ignore_ascii_case(name))
    }
}

/// True for `[A-Za-z_][A-Za-z0-9_$]*`.
fn is_plain_word(word: &str) -> bool {
    let mut chars = word.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Restores `node` into a new string.
///
/// # Errors
///
/// Fails when the node is malformed.
pub fn restore<T: Restore + ?Sized>(node: &T, flags: RestoreFlags) -> Result<String, RestoreError> {
    let mut out = String::new();
    node.restore(&mut RestoreCtx::new(flags, &mut out))?;
    trace!(bytes = out.len(), "restored SQL");
    Ok(out)
}

/// Restores `node`, qualifying unqualified table names with `default_db`.
///
/// # Errors
///
/// Fails when the node is malformed.
pub fn restore_with_default_db<T: Restore + ?Sized>(
    node: &T,
    flags: RestoreFlags,
    default_db: &str,
) -> Result<String, RestoreError> {
    let mut out = String::new();
    node.restore(&mut RestoreCtx::new(flags, &mut out).with_default_db(default_db))?;
    Ok(out)
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.restore(&mut RestoreCtx::new(RestoreFlags::DEFAULT, f))
            .map_err(|_| fmt::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_ctx(flags: RestoreFlags, f: impl FnOnce(&mut RestoreCtx<'_>) -> RestoreResult) -> String {
        let mut out = String::new();
        f(&mut RestoreCtx::new(flags, &mut out)).unwrap();
        out
    }

    #[test]
    fn test_name_quoting() {
        assert_eq!(
            with_ctx(RestoreFlags::DEFAULT, |ctx| ctx.write_name("a`b")),
            "`a``b`"
        );
        assert_eq!(
            with_ctx(RestoreFlags::NAME_DOUBLE_QUOTES, |ctx| ctx.write_name("a")),
            "\"a\""
        );
        assert_eq!(
            with_ctx(RestoreFlags::NAME_UPPERCASE, |ctx| ctx.write_name("abc")),
            "ABC"
        );
    }

    #[test]
    fn test_keyword_case() {
        let lower = RestoreFlags::KEYWORD_LOWERCASE;
        assert_eq!(with_ctx(lower, |ctx| ctx.write_keyword("SELECT")), "select");
        assert_eq!(
            with_ctx(RestoreFlags::empty(), |ctx| ctx.write_keyword("Select")),
            "Select"
        );
    }

    #[test]
    fn test_string_escapes() {
        assert_eq!(
            with_ctx(RestoreFlags::DEFAULT, |ctx| ctx.write_string("it's\n\\")),
            r"'it''s\n\\'"
        );
        assert_eq!(
            with_ctx(RestoreFlags::empty(), |ctx| ctx.write_string("a\"b")),
            "\"a\"\"b\""
        );
        let verbatim = RestoreFlags::DEFAULT | RestoreFlags::STRING_NO_BACKSLASH_ESCAPES;
        assert_eq!(
            with_ctx(verbatim, |ctx| ctx.write_string("it's\\")),
            r"'it''s\'"
        );
    }

    #[test]
    fn test_literal_string_introducer() {
        let flags = RestoreFlags::DEFAULT;
        assert_eq!(
            with_ctx(flags, |ctx| ctx.write_literal_string(b"x", "utf8mb4")),
            "_UTF8MB4'x'"
        );
        let flags = RestoreFlags::DEFAULT | RestoreFlags::STRING_WITHOUT_DEFAULT_CHARSET;
        assert_eq!(
            with_ctx(flags, |ctx| ctx.write_literal_string(b"x", "utf8mb4")),
            "'x'"
        );
        assert_eq!(
            with_ctx(flags, |ctx| ctx.write_literal_string(b"x", "latin1")),
            "_LATIN1'x'"
        );
        assert_eq!(
            with_ctx(flags, |ctx| ctx.write_literal_string(&[0xff], "binary")),
            "_BINARY X'FF'"
        );
    }

    #[test]
    fn test_word() {
        assert_eq!(with_ctx(RestoreFlags::DEFAULT, |ctx| ctx.write_word("concat")), "CONCAT");
        assert_eq!(with_ctx(RestoreFlags::DEFAULT, |ctx| ctx.write_word("select")), "`select`");
        assert_eq!(with_ctx(RestoreFlags::DEFAULT, |ctx| ctx.write_word("a b")), "`a b`");
    }

    #[test]
    fn test_default_db_skips_cte_names() {
        let mut out = String::new();
        let mut ctx = RestoreCtx::new(RestoreFlags::DEFAULT, &mut out).with_default_db("db");
        ctx.push_cte_scope(vec!["cte".to_string()]);
        ctx.write_table_name(&TableName::new("cte")).unwrap();
        ctx.write_plain(" ").unwrap();
        ctx.write_table_name(&TableName::new("t")).unwrap();
        ctx.pop_cte_scope();
        assert_eq!(out, "`cte` `db`.`t`");
    }
}
