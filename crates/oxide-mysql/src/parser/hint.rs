//! Optimizer hint sub-parser.
//!
//! The body of a `/*+ ... */` block is tokenized on its own and parsed into
//! [`Hint`] values. Unknown hints and malformed blocks never fail the
//! statement: they are reported as warnings and dropped.

use tracing::debug;

use super::error::{ErrorCode, Warning};
use super::parser::Grammar;
use crate::ast::{Hint, HintArgs, HintTable};
use crate::lexer::{Keyword, Lexer, Span, Token, TokenKind};
use crate::SqlMode;

/// Argument shape of a recognized hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ArgKind {
    None,
    Tables,
    Indexes,
    Integer,
    MemoryQuota,
    Bool,
    Storage,
    Ident,
    SetVar,
}

fn arg_kind(name: &str) -> Option<ArgKind> {
    let kind = match name {
        "tidb_inlj" | "inl_join" | "inl_hash_join" | "inl_merge_join" | "index_join"
        | "index_hash_join" | "index_merge_join" | "tidb_hj" | "hash_join" | "hash_join_build"
        | "hash_join_probe" | "tidb_smj" | "merge_join" | "broadcast_join" | "shuffle_join"
        | "leading" | "no_hash_join" | "no_merge_join" | "no_index_join"
        | "no_index_hash_join" | "no_index_merge_join" => ArgKind::Tables,
        "use_index" | "ignore_index" | "force_index" | "use_index_merge" | "order_index"
        | "no_order_index" | "index_lookup_pushdown" | "hypo_index" => ArgKind::Indexes,
        "max_execution_time" | "nth_plan" | "tidb_kv_read_timeout" => ArgKind::Integer,
        "memory_quota" => ArgKind::MemoryQuota,
        "use_toja" | "use_cascades" => ArgKind::Bool,
        "read_from_storage" => ArgKind::Storage,
        "qb_name" | "resource_group" | "query_type" => ArgKind::Ident,
        "set_var" => ArgKind::SetVar,
        "hash_agg" | "stream_agg" | "agg_to_cop" | "limit_to_cop" | "mpp_1phase_agg"
        | "mpp_2phase_agg" | "ignore_plan_cache" | "straight_join" | "semi_join_rewrite"
        | "no_decorrelate" | "read_consistent_replica" | "no_index_merge" | "merge" => {
            ArgKind::None
        }
        _ => return None,
    };
    Some(kind)
}

const MB: u64 = 1 << 20;
const GB: u64 = 1 << 30;

impl Grammar<'_> {
    /// Consumes a hint block at the cursor, if any.
    pub(super) fn parse_hints(&mut self) -> Vec<Hint> {
        let TokenKind::Hint(body) = &self.current().kind else {
            return Vec::new();
        };
        let body = body.clone();
        // `/*+` precedes the body
        let offset = self.current().span.start + 3;
        self.advance();
        debug!(len = body.len(), "parsing optimizer hints");

        let mut parser = HintParser::new(&body, self.sql_mode());
        match parser.parse_list() {
            Ok(hints) => {
                for warning in parser.warnings {
                    self.push_warning(warning);
                }
                hints
            }
            Err(span) => {
                let at = Span::new(offset + span.start, offset + span.end);
                let (line, column) = at.line_col(self.source);
                let near: String = at.slice(self.source).chars().take(40).collect();
                self.push_warning(Warning::new(
                    ErrorCode::HintSyntax,
                    format!(
                        "Optimizer hint syntax error at line {line} column {column} near \"{near}\""
                    ),
                ));
                Vec::new()
            }
        }
    }
}

/// Cursor over the tokens of one hint block. Errors carry the span of the
/// offending token relative to the block body.
struct HintParser<'h> {
    body: &'h str,
    tokens: Vec<Token>,
    pos: usize,
    warnings: Vec<Warning>,
}

type HintResult<T> = Result<T, Span>;

impl<'h> HintParser<'h> {
    fn new(body: &'h str, mode: SqlMode) -> Self {
        let tokens = Lexer::new(body).with_sql_mode(mode).tokenize();
        Self {
            body,
            tokens,
            pos: 0,
            warnings: Vec::new(),
        }
    }

    fn current(&self) -> &Token {
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    fn advance(&mut self) {
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
    }

    fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.current().kind == *kind {
            self.advance();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: &TokenKind) -> HintResult<()> {
        if self.eat(kind) {
            Ok(())
        } else {
            Err(self.current().span)
        }
    }

    fn expect_word(&mut self) -> HintResult<String> {
        let word = match &self.current().kind {
            TokenKind::Identifier(name) | TokenKind::QuotedIdentifier(name) => name.clone(),
            TokenKind::Keyword(kw) => kw.as_str().to_ascii_lowercase(),
            _ => return Err(self.current().span),
        };
        self.advance();
        Ok(word)
    }

    fn parse_list(&mut self) -> HintResult<Vec<Hint>> {
        let mut hints = Vec::new();
        while !self.current().is_eof() {
            if let Some(hint) = self.parse_hint()? {
                hints.push(hint);
            }
            self.eat(&TokenKind::Comma);
        }
        Ok(hints)
    }

    fn parse_hint(&mut self) -> HintResult<Option<Hint>> {
        let name = self.expect_word()?.to_ascii_lowercase();
        let Some(kind) = arg_kind(&name) else {
            self.warnings.push(Warning::new(
                ErrorCode::UnsupportedHint,
                format!(
                    "Optimizer hint {} is not supported and is ignored",
                    name.to_ascii_uppercase()
                ),
            ));
            self.skip_arguments()?;
            return Ok(None);
        };

        self.expect(&TokenKind::LeftParen)?;
        let query_block = self.eat_query_block();
        let args = match kind {
            ArgKind::None => HintArgs::None,
            ArgKind::Tables => {
                let mut tables = Vec::new();
                if self.current().kind != TokenKind::RightParen {
                    tables = self.parse_tables()?;
                }
                HintArgs::Tables(tables)
            }
            ArgKind::Indexes => {
                let table = self.parse_table()?;
                let mut indexes = Vec::new();
                while self.eat(&TokenKind::Comma) {
                    indexes.push(self.expect_word()?);
                }
                HintArgs::Indexes { table, indexes }
            }
            ArgKind::Integer => HintArgs::Integer(self.expect_integer()?),
            ArgKind::MemoryQuota => {
                let amount = self.expect_integer()?;
                let unit_span = self.current().span;
                let unit = match self.expect_word()?.to_ascii_lowercase().as_str() {
                    "mb" => MB,
                    "gb" => GB,
                    _ => return Err(unit_span),
                };
                HintArgs::MemoryQuota(amount.wrapping_mul(unit))
            }
            ArgKind::Bool => {
                let value = match self.current().kind {
                    TokenKind::Keyword(Keyword::True) => true,
                    TokenKind::Keyword(Keyword::False) => false,
                    _ => return Err(self.current().span),
                };
                self.advance();
                HintArgs::Bool(value)
            }
            ArgKind::Storage => {
                let mut engines = Vec::new();
                loop {
                    let engine = self.expect_word()?.to_ascii_lowercase();
                    self.expect(&TokenKind::LeftBracket)?;
                    let tables = self.parse_tables()?;
                    self.expect(&TokenKind::RightBracket)?;
                    engines.push((engine, tables));
                    if !self.eat(&TokenKind::Comma) {
                        break;
                    }
                }
                HintArgs::Storage(engines)
            }
            ArgKind::Ident => HintArgs::Ident(self.expect_word()?),
            ArgKind::SetVar => {
                let name = self.expect_word()?;
                self.expect(&TokenKind::Eq)?;
                let start = self.current().span.start;
                let mut end = start;
                while !matches!(self.current().kind, TokenKind::RightParen | TokenKind::Eof) {
                    end = self.current().span.end;
                    self.advance();
                }
                if end == start {
                    return Err(self.current().span);
                }
                HintArgs::SetVar {
                    name,
                    value: self.body[start..end].to_string(),
                }
            }
        };
        self.expect(&TokenKind::RightParen)?;
        Ok(Some(Hint {
            name,
            query_block,
            args,
        }))
    }

    fn expect_integer(&mut self) -> HintResult<u64> {
        if let TokenKind::Integer(value) = self.current().kind {
            self.advance();
            Ok(value)
        } else {
            Err(self.current().span)
        }
    }

    fn eat_query_block(&mut self) -> Option<String> {
        if let TokenKind::UserVariable(name) = &self.current().kind {
            let name = name.to_ascii_lowercase();
            self.advance();
            Some(name)
        } else {
            None
        }
    }

    fn parse_tables(&mut self) -> HintResult<Vec<HintTable>> {
        let mut tables = vec![self.parse_table()?];
        while self.eat(&TokenKind::Comma) {
            tables.push(self.parse_table()?);
        }
        Ok(tables)
    }

    /// `[db.]table[@qb] [PARTITION (p, ...)]`, lower-cased.
    fn parse_table(&mut self) -> HintResult<HintTable> {
        let mut table = HintTable::new(self.expect_word()?.to_ascii_lowercase());
        if self.eat(&TokenKind::Dot) {
            let name = self.expect_word()?.to_ascii_lowercase();
            table.schema = Some(std::mem::replace(&mut table.table, name));
        }
        table.query_block = self.eat_query_block();
        if self.eat(&TokenKind::Keyword(Keyword::Partition)) {
            self.expect(&TokenKind::LeftParen)?;
            loop {
                table.partitions.push(self.expect_word()?);
                if !self.eat(&TokenKind::Comma) {
                    break;
                }
            }
            self.expect(&TokenKind::RightParen)?;
        }
        Ok(table)
    }

    /// Skips the balanced argument list of an unknown hint.
    fn skip_arguments(&mut self) -> HintResult<()> {
        if !self.eat(&TokenKind::LeftParen) {
            return Ok(());
        }
        let mut depth = 1;
        while depth > 0 {
            match self.current().kind {
                TokenKind::LeftParen => depth += 1,
                TokenKind::RightParen => depth -= 1,
                TokenKind::Eof => return Err(self.current().span),
                _ => {}
            }
            self.advance();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> HintResult<(Vec<Hint>, Vec<Warning>)> {
        let mut parser = HintParser::new(body, SqlMode::empty());
        let hints = parser.parse_list()?;
        Ok((hints, parser.warnings))
    }

    #[test]
    fn test_table_hints() {
        let (hints, warnings) = parse(" TIDB_INLJ(t1, T2), tidb_inlj(t3, t4) ").unwrap();
        assert!(warnings.is_empty());
        assert_eq!(hints.len(), 2);
        assert_eq!(hints[0].name, "tidb_inlj");
        assert_eq!(
            hints[0].args,
            HintArgs::Tables(vec![HintTable::new("t1"), HintTable::new("t2")])
        );
    }

    #[test]
    fn test_query_blocks_and_partitions() {
        let (hints, _) = parse("HASH_JOIN(@sel_1 db.t1@sel_2 PARTITION(p0, p1))").unwrap();
        assert_eq!(hints[0].query_block.as_deref(), Some("sel_1"));
        let HintArgs::Tables(tables) = &hints[0].args else {
            panic!("expected tables");
        };
        assert_eq!(tables[0].schema.as_deref(), Some("db"));
        assert_eq!(tables[0].query_block.as_deref(), Some("sel_2"));
        assert_eq!(tables[0].partitions, ["p0", "p1"]);
    }

    #[test]
    fn test_typed_arguments() {
        let (hints, _) = parse(
            "USE_INDEX(t, a, b) MAX_EXECUTION_TIME(1000) USE_TOJA(TRUE) \
             READ_FROM_STORAGE(TIFLASH[t1, t2], TIKV[t3]) RESOURCE_GROUP(rg1) \
             SET_VAR(sql_mode = 'ANSI')",
        )
        .unwrap();
        assert!(matches!(&hints[0].args, HintArgs::Indexes { indexes, .. } if indexes.len() == 2));
        assert_eq!(hints[1].args, HintArgs::Integer(1000));
        assert_eq!(hints[2].args, HintArgs::Bool(true));
        assert!(matches!(&hints[3].args, HintArgs::Storage(engines) if engines[0].0 == "tiflash"));
        assert_eq!(hints[4].args, HintArgs::Ident("rg1".into()));
        assert_eq!(
            hints[5].args,
            HintArgs::SetVar {
                name: "sql_mode".into(),
                value: "'ANSI'".into(),
            }
        );
    }

    #[test]
    fn test_memory_quota_wraps() {
        let (hints, _) = parse("MEMORY_QUOTA(1 GB)").unwrap();
        assert_eq!(hints[0].args, HintArgs::MemoryQuota(1 << 30));
        let (hints, _) = parse("MEMORY_QUOTA(18446744073709551615 MB)").unwrap();
        assert_eq!(
            hints[0].args,
            HintArgs::MemoryQuota(u64::MAX.wrapping_mul(1 << 20))
        );
    }

    #[test]
    fn test_unknown_hint_warns_once() {
        let (hints, warnings) = parse("NO_SUCH_HINT(a, (b)), HASH_AGG()").unwrap();
        assert_eq!(hints.len(), 1);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].code, ErrorCode::UnsupportedHint);
        assert!(warnings[0].message.contains("NO_SUCH_HINT"));
    }

    #[test]
    fn test_malformed_block() {
        assert!(parse("USE_INDEX(").is_err());
        assert!(parse("😅").is_err());
    }
}
