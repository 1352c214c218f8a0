//! MySQL tokenizer implementation.

use tracing::debug;

use super::charset::is_known_charset;
use super::token::LexError;
use super::{Keyword, Span, Token, TokenKind};
use crate::config::DEFAULT_EXECUTABLE_COMMENT_VERSION;
use crate::parser::{ErrorCode, Warning};
use crate::SqlMode;

/// Longest `/*+ ... */` body that is still treated as a hint block.
const MAX_HINT_LEN: usize = 1 << 16;

/// Returns true for bytes allowed inside an unquoted identifier.
const fn is_ident_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'$' || b >= 0x80
}

const fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

/// A lexer that tokenizes MySQL input.
///
/// Executable comments (`/*! ... */`) are tokenized inline, and the first
/// `/*+ ... */` block directly after `SELECT`, `INSERT`, `REPLACE`, `UPDATE`
/// or `DELETE` is returned as a [`TokenKind::Hint`]. Any other hint block is
/// dropped with a warning.
pub struct Lexer<'a> {
    /// The input source code.
    input: &'a str,
    /// The input as bytes.
    bytes: &'a [u8],
    /// The current byte position.
    pos: usize,
    /// The byte position of the start of the current token.
    start: usize,
    sql_mode: SqlMode,
    /// Versioned executable comments above this are skipped.
    version: u32,
    in_exec_comment: bool,
    /// Set right after a token that may be followed by a hint block.
    hint_allowed: bool,
    warnings: Vec<Warning>,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            bytes: input.as_bytes(),
            pos: 0,
            start: 0,
            sql_mode: SqlMode::empty(),
            version: DEFAULT_EXECUTABLE_COMMENT_VERSION,
            in_exec_comment: false,
            hint_allowed: false,
            warnings: Vec::new(),
        }
    }

    /// Sets the SQL mode that controls quoting and escapes.
    #[must_use]
    pub const fn with_sql_mode(mut self, sql_mode: SqlMode) -> Self {
        self.sql_mode = sql_mode;
        self
    }

    /// Sets the version `/*!NNNNN ... */` tags are compared against.
    #[must_use]
    pub const fn with_executable_comment_version(mut self, version: u32) -> Self {
        self.version = version;
        self
    }

    /// Returns and clears the warnings produced so far.
    pub fn take_warnings(&mut self) -> Vec<Warning> {
        std::mem::take(&mut self.warnings)
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<u8> {
        self.bytes.get(self.pos + offset).copied()
    }

    /// Creates a span from start to current position.
    const fn make_span(&self) -> Span {
        Span::new(self.start, self.pos)
    }

    /// Creates a token with the current span.
    const fn make_token(&self, kind: TokenKind) -> Token {
        Token::new(kind, self.make_span())
    }

    fn single(&mut self, kind: TokenKind) -> Token {
        self.pos += 1;
        self.make_token(kind)
    }

    fn double(&mut self, kind: TokenKind) -> Token {
        self.pos += 2;
        self.make_token(kind)
    }

    fn skip_line(&mut self) {
        while self.peek().is_some_and(|b| b != b'\n') {
            self.pos += 1;
        }
    }

    /// Skips whitespace and comments.
    ///
    /// Returns a token when a comment itself produces one: a hint block or
    /// an unterminated comment.
    fn skip_trivia(&mut self) -> Option<Token> {
        loop {
            match self.peek() {
                Some(b) if is_space(b) => self.pos += 1,
                Some(b'#') => self.skip_line(),
                Some(b'-')
                    if self.peek_at(1) == Some(b'-')
                        && matches!(self.peek_at(2), None | Some(b' ' | b'\t' | b'\n' | b'\r')) =>
                {
                    self.skip_line();
                }
                Some(b'/') if self.peek_at(1) == Some(b'*') => {
                    if let Some(token) = self.scan_comment() {
                        return Some(token);
                    }
                }
                Some(b'*') if self.in_exec_comment && self.peek_at(1) == Some(b'/') => {
                    self.pos += 2;
                    self.in_exec_comment = false;
                }
                _ => return None,
            }
        }
    }

    fn scan_comment(&mut self) -> Option<Token> {
        self.start = self.pos;
        let marker = self.peek_at(2);
        self.pos += 2;
        match marker {
            Some(b'!') if !self.in_exec_comment => {
                self.pos += 1;
                let digits = self.bytes[self.pos..]
                    .iter()
                    .take_while(|b| b.is_ascii_digit())
                    .count();
                if (5..=6).contains(&digits) {
                    let tag = self.input[self.pos..self.pos + digits]
                        .parse::<u32>()
                        .unwrap_or(u32::MAX);
                    self.pos += digits;
                    if tag > self.version {
                        return self.skip_block_comment();
                    }
                }
                debug!(offset = self.start, "entering executable comment");
                self.in_exec_comment = true;
                None
            }
            Some(b'+') if self.hint_allowed => self.scan_hint(),
            Some(b'+') => {
                let (line, column) = self.make_span().line_col(self.input);
                self.warnings.push(Warning::new(
                    ErrorCode::HintSyntax,
                    format!(
                        "Optimizer hint syntax error at line {line} column {column}: hints are \
                         only allowed directly after SELECT, INSERT, REPLACE, UPDATE or DELETE, \
                         the block is ignored"
                    ),
                ));
                self.skip_block_comment()
            }
            _ => self.skip_block_comment(),
        }
    }

    fn skip_block_comment(&mut self) -> Option<Token> {
        if let Some(offset) = find(&self.bytes[self.pos..], b"*/") {
            self.pos += offset + 2;
            None
        } else {
            self.pos = self.bytes.len();
            Some(self.make_token(TokenKind::Error(LexError::UnterminatedComment)))
        }
    }

    fn scan_hint(&mut self) -> Option<Token> {
        self.pos += 1;
        let body_start = self.pos;
        let Some(len) = find(&self.bytes[body_start..], b"*/") else {
            self.pos = self.bytes.len();
            return Some(self.make_token(TokenKind::Error(LexError::UnterminatedComment)));
        };
        self.pos = body_start + len + 2;
        if len > MAX_HINT_LEN {
            self.warnings.push(Warning::new(
                ErrorCode::HintSyntax,
                "Optimizer hint block is too long and is ignored",
            ));
            return None;
        }
        debug!(offset = self.start, len, "captured hint block");
        let body = self.input[body_start..body_start + len].to_string();
        Some(self.make_token(TokenKind::Hint(body)))
    }

    /// Scans the next token.
    #[must_use]
    pub fn next_token(&mut self) -> Token {
        if let Some(token) = self.skip_trivia() {
            self.hint_allowed = false;
            return token;
        }
        self.start = self.pos;

        let Some(b) = self.peek() else {
            return self.make_token(TokenKind::Eof);
        };
        let token = self.scan(b);
        self.hint_allowed = matches!(
            token.kind,
            TokenKind::Keyword(
                Keyword::Select
                    | Keyword::Insert
                    | Keyword::Replace
                    | Keyword::Update
                    | Keyword::Delete
            )
        );
        token
    }

    fn scan(&mut self, b: u8) -> Token {
        let next = self.peek_at(1);
        match b {
            b'(' => self.single(TokenKind::LeftParen),
            b')' => self.single(TokenKind::RightParen),
            b'{' => self.single(TokenKind::LeftBrace),
            b'}' => self.single(TokenKind::RightBrace),
            b'[' => self.single(TokenKind::LeftBracket),
            b']' => self.single(TokenKind::RightBracket),
            b',' => self.single(TokenKind::Comma),
            b';' => self.single(TokenKind::Semicolon),
            b'+' => self.single(TokenKind::Plus),
            b'*' => self.single(TokenKind::Star),
            b'/' => self.single(TokenKind::Slash),
            b'%' => self.single(TokenKind::Percent),
            b'^' => self.single(TokenKind::BitXor),
            b'~' => self.single(TokenKind::BitNot),
            b'?' => self.single(TokenKind::Question),
            b'=' => self.single(TokenKind::Eq),
            b'-' => match (next, self.peek_at(2)) {
                (Some(b'>'), Some(b'>')) => {
                    self.pos += 3;
                    self.make_token(TokenKind::JsonUnquoteExtract)
                }
                (Some(b'>'), _) => self.double(TokenKind::JsonExtract),
                _ => self.single(TokenKind::Minus),
            },
            b'<' => match (next, self.peek_at(2)) {
                (Some(b'='), Some(b'>')) => {
                    self.pos += 3;
                    self.make_token(TokenKind::NullSafeEq)
                }
                (Some(b'='), _) => self.double(TokenKind::LtEq),
                (Some(b'>'), _) => self.double(TokenKind::NotEq),
                (Some(b'<'), _) => self.double(TokenKind::LeftShift),
                _ => self.single(TokenKind::Lt),
            },
            b'>' => match next {
                Some(b'=') => self.double(TokenKind::GtEq),
                Some(b'>') => self.double(TokenKind::RightShift),
                _ => self.single(TokenKind::Gt),
            },
            b'!' => match next {
                Some(b'=') => self.double(TokenKind::NotEq),
                _ => self.single(TokenKind::Bang),
            },
            b'|' => match next {
                Some(b'|') => self.double(TokenKind::LogicOr),
                _ => self.single(TokenKind::BitOr),
            },
            b'&' => match next {
                Some(b'&') => self.double(TokenKind::LogicAnd),
                _ => self.single(TokenKind::BitAnd),
            },
            b':' => match next {
                Some(b'=') => self.double(TokenKind::Assign),
                _ => self.single(TokenKind::Error(LexError::UnexpectedChar(':'))),
            },
            b'.' => {
                let after_name = self.start > 0
                    && (is_ident_char(self.bytes[self.start - 1]) || self.bytes[self.start - 1] == b'`');
                if next.is_some_and(|c| c.is_ascii_digit()) && !after_name {
                    self.scan_number()
                } else {
                    self.single(TokenKind::Dot)
                }
            }
            b'@' => self.scan_variable(),
            b'\'' => {
                let kind = match self.scan_string(b'\'') {
                    Ok(value) => TokenKind::String(value),
                    Err(err) => TokenKind::Error(err),
                };
                self.make_token(kind)
            }
            b'"' if self.sql_mode.contains(SqlMode::ANSI_QUOTES) => self.scan_quoted_identifier(b'"'),
            b'"' => {
                let kind = match self.scan_string(b'"') {
                    Ok(value) => TokenKind::String(value),
                    Err(err) => TokenKind::Error(err),
                };
                self.make_token(kind)
            }
            b'`' => self.scan_quoted_identifier(b'`'),
            b'0'..=b'9' => self.scan_number(),
            b'x' | b'X' if next == Some(b'\'') => self.scan_quoted_bits(16),
            b'b' | b'B' if next == Some(b'\'') => self.scan_quoted_bits(2),
            b'n' | b'N' if next == Some(b'\'') => {
                self.pos += 1;
                let kind = match self.scan_string(b'\'') {
                    Ok(value) => TokenKind::NationalString(value),
                    Err(err) => TokenKind::Error(err),
                };
                self.make_token(kind)
            }
            c if is_ident_char(c) => self.scan_word(),
            _ => {
                let c = self.input[self.pos..].chars().next().unwrap_or('\u{fffd}');
                self.pos += c.len_utf8();
                self.make_token(TokenKind::Error(LexError::UnexpectedChar(c)))
            }
        }
    }

    /// Scans a quoted string body starting at the opening quote.
    fn scan_string(&mut self, quote: u8) -> Result<Vec<u8>, LexError> {
        self.pos += 1;
        let escapes = !self.sql_mode.contains(SqlMode::NO_BACKSLASH_ESCAPES);
        let mut value = Vec::new();
        loop {
            match self.peek() {
                None => return Err(LexError::UnterminatedString),
                Some(c) if c == quote => {
                    if self.peek_at(1) == Some(quote) {
                        value.push(quote);
                        self.pos += 2;
                    } else {
                        self.pos += 1;
                        return Ok(value);
                    }
                }
                Some(b'\\') if escapes => {
                    let Some(escaped) = self.peek_at(1) else {
                        self.pos = self.bytes.len();
                        return Err(LexError::UnterminatedString);
                    };
                    match escaped {
                        b'0' => value.push(0),
                        b'b' => value.push(8),
                        b'n' => value.push(b'\n'),
                        b'r' => value.push(b'\r'),
                        b't' => value.push(b'\t'),
                        b'Z' => value.push(26),
                        b'%' | b'_' => value.extend_from_slice(&[b'\\', escaped]),
                        other => value.push(other),
                    }
                    self.pos += 2;
                }
                Some(c) => {
                    value.push(c);
                    self.pos += 1;
                }
            }
        }
    }

    /// Scans a quoted identifier (e.g., `column name` or "column name").
    fn scan_quoted_identifier(&mut self, quote: u8) -> Token {
        let kind = match self.scan_quoted_name(quote) {
            Ok(name) => TokenKind::QuotedIdentifier(name),
            Err(err) => TokenKind::Error(err),
        };
        self.make_token(kind)
    }

    fn scan_quoted_name(&mut self, quote: u8) -> Result<String, LexError> {
        self.pos += 1;
        let mut name = Vec::new();
        loop {
            match self.peek() {
                None => return Err(LexError::UnterminatedIdentifier),
                Some(c) if c == quote => {
                    if self.peek_at(1) == Some(quote) {
                        name.push(quote);
                        self.pos += 2;
                    } else {
                        self.pos += 1;
                        return Ok(String::from_utf8_lossy(&name).into_owned());
                    }
                }
                Some(c) => {
                    name.push(c);
                    self.pos += 1;
                }
            }
        }
    }

    /// Scans `X'..'` (radix 16) or `B'..'` (radix 2).
    fn scan_quoted_bits(&mut self, radix: u32) -> Token {
        self.pos += 2;
        let body_start = self.pos;
        while self.peek().is_some_and(|b| b != b'\'') {
            self.pos += 1;
        }
        if self.peek().is_none() {
            return self.make_token(TokenKind::Error(LexError::UnterminatedString));
        }
        let digits = &self.input[body_start..self.pos];
        self.pos += 1;
        let kind = if radix == 16 {
            if digits.len() % 2 == 0 {
                decode_hex(digits).map_or(TokenKind::Error(LexError::InvalidHex), TokenKind::HexString)
            } else {
                TokenKind::Error(LexError::InvalidHex)
            }
        } else {
            decode_bits(digits).map_or(TokenKind::Error(LexError::InvalidBit), TokenKind::BitString)
        };
        self.make_token(kind)
    }

    /// Scans `0x..` or `0b..`; returns None when the run is not a well-formed
    /// literal, in which case the text is an identifier.
    fn scan_prefixed(&mut self, radix: u32) -> Option<Token> {
        let body_start = self.pos + 2;
        let len = self.bytes[body_start..]
            .iter()
            .take_while(|b| char::from(**b).is_digit(radix))
            .count();
        let end = body_start + len;
        if len == 0 || self.bytes.get(end).is_some_and(|b| is_ident_char(*b)) {
            return None;
        }
        let digits = &self.input[body_start..end];
        let kind = if radix == 16 {
            if digits.len() % 2 == 1 {
                decode_hex(&format!("0{digits}")).map(TokenKind::HexString)?
            } else {
                decode_hex(digits).map(TokenKind::HexString)?
            }
        } else {
            decode_bits(digits).map(TokenKind::BitString)?
        };
        self.pos = end;
        Some(self.make_token(kind))
    }

    fn eat_digits(&mut self) {
        while self.peek().is_some_and(|b| b.is_ascii_digit()) {
            self.pos += 1;
        }
    }

    /// Scans a number (integer, decimal or float).
    ///
    /// A digit run followed by identifier characters is an identifier
    /// (`1a`, `99e` in `99e+r10`).
    fn scan_number(&mut self) -> Token {
        if self.peek() == Some(b'0') {
            let radix = match self.peek_at(1) {
                Some(b'x') => Some(16),
                Some(b'b') => Some(2),
                _ => None,
            };
            if let Some(token) = radix.and_then(|radix| self.scan_prefixed(radix)) {
                return token;
            }
        }

        let mut is_decimal = false;
        let mut is_float = false;
        self.eat_digits();
        if self.peek() == Some(b'.') {
            self.pos += 1;
            self.eat_digits();
            is_decimal = true;
        }
        if matches!(self.peek(), Some(b'e' | b'E')) {
            let exponent_start = self.pos;
            self.pos += 1;
            if matches!(self.peek(), Some(b'+' | b'-')) {
                self.pos += 1;
            }
            if self.peek().is_some_and(|b| b.is_ascii_digit()) {
                self.eat_digits();
                is_float = true;
            } else {
                self.pos = exponent_start;
            }
        }
        if !is_decimal && !is_float && self.peek().is_some_and(is_ident_char) {
            return self.scan_word();
        }

        let text = &self.input[self.start..self.pos];
        let kind = if is_float {
            // Overflow to infinity has no SQL spelling.
            text.parse::<f64>()
                .ok()
                .filter(|value| value.is_finite())
                .map_or(TokenKind::Error(LexError::InvalidNumber), TokenKind::Float)
        } else if is_decimal {
            TokenKind::Decimal(normalize_decimal(text))
        } else {
            text.parse::<u64>()
                .map_or_else(|_| TokenKind::Decimal(normalize_decimal(text)), TokenKind::Integer)
        };
        self.make_token(kind)
    }

    /// Scans an identifier, keyword or charset introducer.
    ///
    /// A word directly before or after `.` is always an identifier, so
    /// reserved words can be used as qualified names.
    fn scan_word(&mut self) -> Token {
        while self.peek().is_some_and(is_ident_char) {
            self.pos += 1;
        }
        let text = &self.input[self.start..self.pos];

        if let Some(charset) = text.strip_prefix('_') {
            if is_known_charset(charset) {
                return self.make_token(TokenKind::Introducer(charset.to_ascii_lowercase()));
            }
        }

        let qualified = self.peek() == Some(b'.')
            || (self.start > 0 && self.bytes[self.start - 1] == b'.');
        if !qualified {
            if let Some(keyword) = Keyword::from_str(text) {
                return self.make_token(TokenKind::Keyword(keyword));
            }
        }
        self.make_token(TokenKind::Identifier(text.to_string()))
    }

    /// Scans `@name`, `@'name'`, `` @`name` `` or `@@[scope.]name`.
    fn scan_variable(&mut self) -> Token {
        self.pos += 1;
        if self.peek() == Some(b'@') {
            self.pos += 1;
            let mut name = String::new();
            loop {
                if self.peek() == Some(b'`') {
                    match self.scan_quoted_name(b'`') {
                        Ok(part) => name.push_str(&part),
                        Err(err) => return self.make_token(TokenKind::Error(err)),
                    }
                } else {
                    let part_start = self.pos;
                    while self.peek().is_some_and(is_ident_char) {
                        self.pos += 1;
                    }
                    name.push_str(&self.input[part_start..self.pos]);
                }
                if self.peek() == Some(b'.') && !name.is_empty() {
                    self.pos += 1;
                    name.push('.');
                } else {
                    break;
                }
            }
            return self.make_token(TokenKind::SystemVariable(name.to_lowercase()));
        }

        let kind = match self.peek() {
            Some(quote @ (b'\'' | b'"')) => match self.scan_string(quote) {
                Ok(name) => TokenKind::UserVariable(String::from_utf8_lossy(&name).into_owned()),
                Err(err) => TokenKind::Error(err),
            },
            Some(b'`') => match self.scan_quoted_name(b'`') {
                Ok(name) => TokenKind::UserVariable(name),
                Err(err) => TokenKind::Error(err),
            },
            _ => {
                let name_start = self.pos;
                while self.peek().is_some_and(|b| is_ident_char(b) || b == b'.') {
                    self.pos += 1;
                }
                TokenKind::UserVariable(self.input[name_start..self.pos].to_string())
            }
        };
        self.make_token(kind)
    }

    /// Tokenizes the entire input and returns all tokens, ending with `Eof`.
    #[must_use]
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let is_eof = token.is_eof();
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        tokens
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        if token.is_eof() {
            None
        } else {
            Some(token)
        }
    }
}

fn decode_hex(digits: &str) -> Option<Vec<u8>> {
    digits
        .as_bytes()
        .chunks(2)
        .map(|pair| {
            let text = std::str::from_utf8(pair).ok()?;
            u8::from_str_radix(text, 16).ok()
        })
        .collect()
}

/// Decodes a run of 0/1 digits, left-padding to whole bytes.
fn decode_bits(digits: &str) -> Option<Vec<u8>> {
    if !digits.bytes().all(|b| b == b'0' || b == b'1') {
        return None;
    }
    let pad = (8 - digits.len() % 8) % 8;
    let padded = format!("{}{digits}", "0".repeat(pad));
    padded
        .as_bytes()
        .chunks(8)
        .map(|chunk| {
            let text = std::str::from_utf8(chunk).ok()?;
            u8::from_str_radix(text, 2).ok()
        })
        .collect()
}

/// Strips redundant leading zeros from the integer part.
fn normalize_decimal(text: &str) -> String {
    let (int_part, frac_part) = match text.split_once('.') {
        Some((int_part, frac)) => (int_part, Some(frac)),
        None => (text, None),
    };
    let trimmed = int_part.trim_start_matches('0');
    let int_part = if trimmed.is_empty() { "0" } else { trimmed };
    match frac_part {
        Some(frac) => format!("{int_part}.{frac}"),
        None => int_part.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(sql: &str) -> Vec<TokenKind> {
        Lexer::new(sql).tokenize().into_iter().map(|t| t.kind).collect()
    }

    fn kinds_in(sql: &str, mode: SqlMode) -> Vec<TokenKind> {
        Lexer::new(sql)
            .with_sql_mode(mode)
            .tokenize()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn test_simple_select() {
        assert_eq!(
            kinds("SELECT a FROM t"),
            vec![
                TokenKind::Keyword(Keyword::Select),
                TokenKind::Identifier("a".into()),
                TokenKind::Keyword(Keyword::From),
                TokenKind::Identifier("t".into()),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_integer_boundaries() {
        assert_eq!(kinds("01000001783")[0], TokenKind::Integer(1_000_001_783));
        assert_eq!(
            kinds("18446744073709551615")[0],
            TokenKind::Integer(u64::MAX)
        );
        assert_eq!(
            kinds("18446744073709551616")[0],
            TokenKind::Decimal("18446744073709551616".into())
        );
    }

    #[test]
    fn test_decimal_and_float() {
        assert_eq!(kinds("0.78")[0], TokenKind::Decimal("0.78".into()));
        assert_eq!(kinds(".5")[0], TokenKind::Decimal("0.5".into()));
        assert_eq!(kinds("1e10")[0], TokenKind::Float(1e10));
        assert_eq!(kinds("2.5E-3")[0], TokenKind::Float(2.5e-3));
        assert_eq!(kinds("1e308")[0], TokenKind::Float(1e308));
        assert_eq!(kinds("1e309")[0], TokenKind::Error(LexError::InvalidNumber));
    }

    #[test]
    fn test_digit_led_identifiers() {
        assert_eq!(
            kinds("99e+r10"),
            vec![
                TokenKind::Identifier("99e".into()),
                TokenKind::Plus,
                TokenKind::Identifier("r10".into()),
                TokenKind::Eof,
            ]
        );
        assert_eq!(kinds("1a")[0], TokenKind::Identifier("1a".into()));
    }

    #[test]
    fn test_hex_and_bit_literals() {
        assert_eq!(kinds("X'6B6B'")[0], TokenKind::HexString(b"kk".to_vec()));
        assert_eq!(kinds("0x0D")[0], TokenKind::HexString(vec![0x0d]));
        assert_eq!(kinds("0xF")[0], TokenKind::HexString(vec![0x0f]));
        assert_eq!(kinds("b'101'")[0], TokenKind::BitString(vec![5]));
        assert_eq!(kinds("0b1")[0], TokenKind::BitString(vec![1]));
        assert_eq!(kinds("0xg")[0], TokenKind::Identifier("0xg".into()));
        assert_eq!(kinds("X'6B6'")[0], TokenKind::Error(LexError::InvalidHex));
    }

    #[test]
    fn test_string_escapes() {
        assert_eq!(
            kinds(r"'a\nb''c\%'")[0],
            TokenKind::String(b"a\nb'c\\%".to_vec())
        );
        assert_eq!(
            kinds_in(r"'\'", SqlMode::NO_BACKSLASH_ESCAPES)[0],
            TokenKind::String(b"\\".to_vec())
        );
        assert_eq!(kinds(r"'\'")[0], TokenKind::Error(LexError::UnterminatedString));
    }

    #[test]
    fn test_ansi_quotes() {
        assert_eq!(kinds(r#""dot""#)[0], TokenKind::String(b"dot".to_vec()));
        assert_eq!(
            kinds_in(r#""dot""#, SqlMode::ANSI_QUOTES)[0],
            TokenKind::QuotedIdentifier("dot".into())
        );
        assert_eq!(kinds("`a``b`")[0], TokenKind::QuotedIdentifier("a`b".into()));
    }

    #[test]
    fn test_qualified_keywords_are_identifiers() {
        assert_eq!(
            kinds("db.select"),
            vec![
                TokenKind::Identifier("db".into()),
                TokenKind::Dot,
                TokenKind::Identifier("select".into()),
                TokenKind::Eof,
            ]
        );
        assert_eq!(kinds("desc.t")[0], TokenKind::Identifier("desc".into()));
    }

    #[test]
    fn test_introducer() {
        assert_eq!(
            kinds("_UTF8MB4'x'"),
            vec![
                TokenKind::Introducer("utf8mb4".into()),
                TokenKind::String(b"x".to_vec()),
                TokenKind::Eof,
            ]
        );
        assert_eq!(kinds("_foo")[0], TokenKind::Identifier("_foo".into()));
        assert_eq!(kinds("n'x'")[0], TokenKind::NationalString(b"x".to_vec()));
    }

    #[test]
    fn test_variables() {
        assert_eq!(
            kinds("@a @'b c' @`d` @ @@GLOBAL.sql_mode"),
            vec![
                TokenKind::UserVariable("a".into()),
                TokenKind::UserVariable("b c".into()),
                TokenKind::UserVariable("d".into()),
                TokenKind::UserVariable(String::new()),
                TokenKind::SystemVariable("global.sql_mode".into()),
                TokenKind::Eof,
            ]
        );
        assert_eq!(
            kinds("@@SESSION.`tx_isolation`")[0],
            TokenKind::SystemVariable("session.tx_isolation".into())
        );
    }

    #[test]
    fn test_operators() {
        assert_eq!(
            kinds("<=> <> != := -> ->> && || << >>"),
            vec![
                TokenKind::NullSafeEq,
                TokenKind::NotEq,
                TokenKind::NotEq,
                TokenKind::Assign,
                TokenKind::JsonExtract,
                TokenKind::JsonUnquoteExtract,
                TokenKind::LogicAnd,
                TokenKind::LogicOr,
                TokenKind::LeftShift,
                TokenKind::RightShift,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_comments() {
        assert_eq!(
            kinds("SELECT -- c\n 1 # d\n /* e */ --"),
            vec![
                TokenKind::Keyword(Keyword::Select),
                TokenKind::Integer(1),
                TokenKind::Eof,
            ]
        );
        assert_eq!(
            kinds("1--2"),
            vec![
                TokenKind::Integer(1),
                TokenKind::Minus,
                TokenKind::Minus,
                TokenKind::Integer(2),
                TokenKind::Eof,
            ]
        );
        assert_eq!(kinds("/* open")[0], TokenKind::Error(LexError::UnterminatedComment));
    }

    #[test]
    fn test_executable_comments() {
        assert_eq!(
            kinds("/*!40101 SELECT */ 1"),
            vec![
                TokenKind::Keyword(Keyword::Select),
                TokenKind::Integer(1),
                TokenKind::Eof,
            ]
        );
        assert_eq!(kinds("/*!99999 SELECT */ 1")[0], TokenKind::Integer(1));
        assert_eq!(
            kinds_in(r"/*! '\' */", SqlMode::NO_BACKSLASH_ESCAPES)[0],
            TokenKind::String(b"\\".to_vec())
        );
    }

    #[test]
    fn test_hint_only_after_leading_keyword() {
        let mut lexer = Lexer::new("SELECT /*+ A(t) */ /*+ B(t) */ 1");
        let tokens: Vec<TokenKind> = lexer.tokenize().into_iter().map(|t| t.kind).collect();
        assert_eq!(
            tokens,
            vec![
                TokenKind::Keyword(Keyword::Select),
                TokenKind::Hint(" A(t) ".into()),
                TokenKind::Integer(1),
                TokenKind::Eof,
            ]
        );
        let warnings = lexer.take_warnings();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].code, ErrorCode::HintSyntax);
    }

    #[test]
    fn test_spans() {
        let tokens = Lexer::new("SELECT  abc").tokenize();
        assert_eq!(tokens[0].span, Span::new(0, 6));
        assert_eq!(tokens[1].span, Span::new(8, 11));
        assert_eq!(tokens[2].span, Span::new(11, 11));
    }
}
