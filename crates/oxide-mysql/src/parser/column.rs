//! Column definitions, table constraints, index parts and table options.

use super::error::{ErrorCode, ParseError};
use super::parser::Grammar;
use super::pratt::NO_INFIX_BP;
use crate::ast::{
    ColumnDef, ColumnFormat, ColumnOption, ColumnPosition, ColumnStorage, Constraint,
    ConstraintKind, DataType, Expr, ExprKind, IndexKey, IndexOptions, IndexPart, IndexType,
    ReferenceAction, ReferenceDef, ReferenceMatch, RowFormat, TableOption, TypeKind,
};
use crate::lexer::{Keyword, TokenKind};

/// Functions accepted by `ON UPDATE` and as bare temporal defaults.
const NOW_FUNCTIONS: &[&str] = &["current_timestamp", "localtime", "localtimestamp", "now"];

impl Grammar<'_> {
    /// Returns true if the cursor starts a table constraint or index
    /// rather than a column definition.
    pub(super) fn is_constraint_start(&self) -> bool {
        match self.current().as_keyword() {
            Some(
                Keyword::Constraint
                | Keyword::Primary
                | Keyword::Unique
                | Keyword::Key
                | Keyword::Index
                | Keyword::Fulltext
                | Keyword::Spatial
                | Keyword::Foreign
                | Keyword::Check,
            ) => true,
            _ => {
                (self.check_word("vector") || self.check_word("columnar"))
                    && (self.check_keyword_at(1, Keyword::Index)
                        || self.check_keyword_at(1, Keyword::Key))
            }
        }
    }

    /// Parses `name type [options]`.
    pub(super) fn parse_column_def(&mut self) -> Result<ColumnDef, ParseError> {
        let name = self.expect_identifier()?;
        let mut options = Vec::new();
        let data_type = if self.check_keyword(Keyword::Serial) {
            self.advance();
            options.extend([
                ColumnOption::NotNull,
                ColumnOption::AutoIncrement,
                ColumnOption::UniqueKey,
            ]);
            DataType::new(TypeKind::BigInt).unsigned()
        } else {
            self.parse_data_type()?
        };
        self.parse_column_options(&mut options)?;
        Ok(ColumnDef {
            name,
            data_type,
            options,
        })
    }

    fn parse_column_options(&mut self, options: &mut Vec<ColumnOption>) -> Result<(), ParseError> {
        loop {
            let option = match self.current().as_keyword() {
                Some(Keyword::Not) if self.check_keyword_at(1, Keyword::Null) => {
                    self.advance();
                    self.advance();
                    ColumnOption::NotNull
                }
                Some(Keyword::Null) => {
                    self.advance();
                    ColumnOption::Null
                }
                Some(Keyword::Primary) => {
                    self.advance();
                    self.expect_keyword(Keyword::Key)?;
                    ColumnOption::PrimaryKey(self.parse_opt_clustered())
                }
                Some(Keyword::Key) => {
                    self.advance();
                    ColumnOption::PrimaryKey(self.parse_opt_clustered())
                }
                Some(Keyword::Unique) => {
                    self.advance();
                    self.eat_keyword(Keyword::Key);
                    ColumnOption::UniqueKey
                }
                Some(Keyword::AutoIncrement) => {
                    self.advance();
                    ColumnOption::AutoIncrement
                }
                Some(Keyword::Default) => {
                    self.advance();
                    ColumnOption::Default(self.parse_default_value()?)
                }
                Some(Keyword::On) if self.check_keyword_at(1, Keyword::Update) => {
                    self.advance();
                    self.advance();
                    let span = self.current().span;
                    let expr = self.parse_expression(NO_INFIX_BP)?;
                    if !is_now_call(&expr) {
                        return Err(self.error_at(
                            ErrorCode::InvalidOnUpdate,
                            "Invalid ON UPDATE clause",
                            span,
                        ));
                    }
                    ColumnOption::OnUpdate(expr)
                }
                Some(Keyword::Comment) => {
                    self.advance();
                    ColumnOption::Comment(self.expect_string()?)
                }
                Some(Keyword::Collate) => {
                    self.advance();
                    ColumnOption::Collate(self.parse_collation_name()?)
                }
                Some(Keyword::Generated | Keyword::As) => {
                    if self.eat_keyword(Keyword::Generated) {
                        self.expect_keyword(Keyword::Always)?;
                    }
                    self.expect_keyword(Keyword::As)?;
                    self.expect(&TokenKind::LeftParen)?;
                    let expr = self.parse_expr()?;
                    self.expect(&TokenKind::RightParen)?;
                    let stored = if self.eat_keyword(Keyword::Stored) {
                        true
                    } else {
                        self.eat_keyword(Keyword::Virtual);
                        false
                    };
                    ColumnOption::Generated { expr, stored }
                }
                Some(Keyword::Constraint | Keyword::Check) => {
                    if self.eat_keyword(Keyword::Constraint) && !self.check_keyword(Keyword::Check)
                    {
                        self.expect_identifier()?;
                    }
                    self.expect_keyword(Keyword::Check)?;
                    let expr = self.parse_paren_condition()?;
                    let enforced = self.parse_enforced();
                    ColumnOption::Check { expr, enforced }
                }
                Some(Keyword::References) => ColumnOption::References(self.parse_reference_def()?),
                Some(Keyword::ColumnFormat) => {
                    self.advance();
                    let format = if self.eat_keyword(Keyword::Fixed) {
                        ColumnFormat::Fixed
                    } else if self.eat_keyword(Keyword::Dynamic) {
                        ColumnFormat::Dynamic
                    } else {
                        self.expect_keyword(Keyword::Default)?;
                        ColumnFormat::Default
                    };
                    ColumnOption::ColumnFormat(format)
                }
                Some(Keyword::Storage) => {
                    self.advance();
                    let storage = if self.eat_word("disk") {
                        ColumnStorage::Disk
                    } else if self.eat_keyword(Keyword::Memory) {
                        ColumnStorage::Memory
                    } else {
                        self.expect_keyword(Keyword::Default)?;
                        ColumnStorage::Default
                    };
                    ColumnOption::Storage(storage)
                }
                Some(Keyword::AutoRandom) => {
                    self.advance();
                    let (shard_bits, range_bits) = if self.eat(&TokenKind::LeftParen) {
                        let shard = self.expect_u64()?;
                        let range = if self.eat(&TokenKind::Comma) {
                            Some(self.expect_u64()?)
                        } else {
                            None
                        };
                        self.expect(&TokenKind::RightParen)?;
                        (Some(shard), range)
                    } else {
                        (None, None)
                    };
                    ColumnOption::AutoRandom {
                        shard_bits,
                        range_bits,
                    }
                }
                Some(Keyword::Serial) => {
                    self.advance();
                    self.expect_keyword(Keyword::Default)?;
                    self.expect_keyword(Keyword::Value)?;
                    options.extend([ColumnOption::NotNull, ColumnOption::AutoIncrement]);
                    ColumnOption::UniqueKey
                }
                _ if self.check_word("secondary_engine_attribute") => {
                    self.advance();
                    self.eat_eq();
                    ColumnOption::SecondaryEngineAttribute(self.expect_string()?)
                }
                _ => return Ok(()),
            };
            options.push(option);
        }
    }

    /// `CLUSTERED` (true), `NONCLUSTERED` (false) or nothing.
    fn parse_opt_clustered(&mut self) -> Option<bool> {
        if self.eat_word("clustered") {
            Some(true)
        } else if self.eat_word("nonclustered") {
            Some(false)
        } else {
            None
        }
    }

    /// `[NOT] ENFORCED`, enforced when absent.
    pub(super) fn parse_enforced(&mut self) -> bool {
        if self.check_keyword(Keyword::Not) && self.check_keyword_at(1, Keyword::Enforced) {
            self.advance();
            self.advance();
            return false;
        }
        self.eat_keyword(Keyword::Enforced);
        true
    }

    fn parse_paren_condition(&mut self) -> Result<Expr, ParseError> {
        self.expect(&TokenKind::LeftParen)?;
        let expr = self.parse_expr()?;
        self.expect(&TokenKind::RightParen)?;
        Ok(expr)
    }

    /// A column default: a literal, a signed number, a call, `NEXT VALUE
    /// FOR s` or a parenthesized expression.
    pub(super) fn parse_default_value(&mut self) -> Result<Expr, ParseError> {
        self.parse_expression(NO_INFIX_BP)
    }

    /// `REFERENCES t [(parts)] [MATCH ..] [ON DELETE ..] [ON UPDATE ..]`
    pub(super) fn parse_reference_def(&mut self) -> Result<ReferenceDef, ParseError> {
        self.expect_keyword(Keyword::References)?;
        let table = self.parse_table_name()?;
        let parts = if self.check(&TokenKind::LeftParen) {
            self.parse_index_parts()?
        } else {
            Vec::new()
        };
        let mut reference = ReferenceDef {
            table,
            parts,
            match_type: None,
            on_delete: None,
            on_update: None,
        };
        loop {
            if self.eat_keyword(Keyword::Match) {
                reference.match_type = Some(if self.eat_keyword(Keyword::Full) {
                    ReferenceMatch::Full
                } else if self.eat_keyword(Keyword::Partial) {
                    ReferenceMatch::Partial
                } else {
                    self.expect_keyword(Keyword::Simple)?;
                    ReferenceMatch::Simple
                });
            } else if self.check_keyword(Keyword::On) && self.check_keyword_at(1, Keyword::Delete) {
                self.advance();
                self.advance();
                reference.on_delete = Some(self.parse_reference_action()?);
            } else if self.check_keyword(Keyword::On) && self.check_keyword_at(1, Keyword::Update) {
                self.advance();
                self.advance();
                reference.on_update = Some(self.parse_reference_action()?);
            } else {
                return Ok(reference);
            }
        }
    }

    fn parse_reference_action(&mut self) -> Result<ReferenceAction, ParseError> {
        if self.eat_keyword(Keyword::Restrict) {
            return Ok(ReferenceAction::Restrict);
        }
        if self.eat_keyword(Keyword::Cascade) {
            return Ok(ReferenceAction::Cascade);
        }
        if self.eat_keyword(Keyword::Set) {
            if self.eat_keyword(Keyword::Null) {
                return Ok(ReferenceAction::SetNull);
            }
            self.expect_keyword(Keyword::Default)?;
            return Ok(ReferenceAction::SetDefault);
        }
        self.expect_keyword(Keyword::No)?;
        self.expect_keyword(Keyword::Action)?;
        Ok(ReferenceAction::NoAction)
    }

    /// Parses `(part, ...)` where a part is `col[(len)]` or `(expr)`,
    /// either followed by `ASC` or `DESC`.
    pub(super) fn parse_index_parts(&mut self) -> Result<Vec<IndexPart>, ParseError> {
        self.expect(&TokenKind::LeftParen)?;
        let mut parts = Vec::new();
        loop {
            let key = if self.check(&TokenKind::LeftParen) {
                IndexKey::Expr(self.parse_paren_condition()?)
            } else {
                let name = self.parse_column_name()?;
                let length = self.parse_opt_field_len()?;
                IndexKey::Column { name, length }
            };
            let desc = if self.eat_keyword(Keyword::Desc) {
                true
            } else {
                self.eat_keyword(Keyword::Asc);
                false
            };
            parts.push(IndexPart { key, desc });
            if !self.eat(&TokenKind::Comma) {
                break;
            }
        }
        self.expect(&TokenKind::RightParen)?;
        Ok(parts)
    }

    /// `USING type` or `TYPE type`.
    fn parse_index_type(&mut self) -> Result<IndexType, ParseError> {
        let span = self.current().span;
        let word = match &self.current().kind {
            TokenKind::Keyword(kw) => kw.as_str().to_string(),
            TokenKind::Identifier(name) => name.clone(),
            _ => return Err(self.error()),
        };
        let index_type = IndexType::from_name(&word).ok_or_else(|| {
            self.error_at(
                ErrorCode::ParseError,
                format!("Unknown index type '{word}'"),
                span,
            )
        })?;
        self.advance();
        Ok(index_type)
    }

    fn check_index_type_keyword(&self) -> bool {
        self.check_keyword(Keyword::Using)
            || (self.check_keyword(Keyword::Type) && self.peek_kind(1) != &TokenKind::LeftParen)
    }

    /// Index options in any order.
    pub(super) fn parse_index_options(
        &mut self,
        options: &mut IndexOptions,
    ) -> Result<(), ParseError> {
        loop {
            if self.eat_keyword(Keyword::KeyBlockSize) {
                self.eat_eq();
                options.key_block_size = Some(self.expect_u64()?);
            } else if self.check_index_type_keyword() {
                self.advance();
                options.using = Some(self.parse_index_type()?);
            } else if self.check_keyword(Keyword::With) && self.check_keyword_at(1, Keyword::Parser) {
                self.advance();
                self.advance();
                options.parser = Some(self.expect_identifier()?);
            } else if self.eat_keyword(Keyword::Comment) {
                options.comment = Some(self.expect_string()?);
            } else if self.eat_keyword(Keyword::Visible) {
                options.visible = Some(true);
            } else if self.eat_keyword(Keyword::Invisible) {
                options.visible = Some(false);
            } else if let Some(clustered) = self.parse_opt_clustered() {
                options.clustered = Some(clustered);
            } else if self.eat_keyword(Keyword::Global) {
                options.global = Some(true);
            } else if self.eat_keyword(Keyword::Local) {
                options.global = Some(false);
            } else if self.eat_word("add_columnar_replica_on_demand") {
                options.add_columnar_replica_on_demand = true;
            } else if self.eat_word("secondary_engine_attribute") {
                self.eat_eq();
                options.secondary_engine_attribute = Some(self.expect_string()?);
            } else {
                return Ok(());
            }
        }
    }

    /// Parses an optional index name before the key list.
    fn parse_opt_index_name(&mut self) -> Result<Option<String>, ParseError> {
        if self.check_index_type_keyword() || !self.is_identifier_at(0) {
            return Ok(None);
        }
        self.expect_identifier().map(Some)
    }

    /// Parses a table-level constraint or index definition.
    pub(super) fn parse_constraint(&mut self) -> Result<Constraint, ParseError> {
        let symbol = if self.eat_keyword(Keyword::Constraint) {
            if self.is_identifier_at(0) {
                Some(self.expect_identifier()?)
            } else {
                None
            }
        } else {
            None
        };
        let mut options = IndexOptions::default();
        let mut if_not_exists = false;
        let (kind, name) = match self.current().as_keyword() {
            Some(Keyword::Primary) => {
                self.advance();
                self.expect_keyword(Keyword::Key)?;
                (ConstraintKind::PrimaryKey, None)
            }
            Some(Keyword::Unique) => {
                self.advance();
                if !self.eat_keyword(Keyword::Key) {
                    self.eat_keyword(Keyword::Index);
                }
                (ConstraintKind::Unique, self.parse_opt_index_name()?)
            }
            Some(Keyword::Key | Keyword::Index) => {
                self.advance();
                if_not_exists = self.parse_if_not_exists()?;
                (ConstraintKind::Index, self.parse_opt_index_name()?)
            }
            Some(Keyword::Fulltext | Keyword::Spatial) => {
                let kind = if self.eat_keyword(Keyword::Fulltext) {
                    ConstraintKind::Fulltext
                } else {
                    self.advance();
                    ConstraintKind::Spatial
                };
                if !self.eat_keyword(Keyword::Key) {
                    self.eat_keyword(Keyword::Index);
                }
                (kind, self.parse_opt_index_name()?)
            }
            Some(Keyword::Foreign) => {
                self.advance();
                self.expect_keyword(Keyword::Key)?;
                if_not_exists = self.parse_if_not_exists()?;
                let name = self.parse_opt_index_name()?;
                let parts = self.parse_index_parts()?;
                let reference = self.parse_reference_def()?;
                return Ok(Constraint {
                    kind: ConstraintKind::ForeignKey(reference),
                    name: name.or(symbol),
                    if_not_exists,
                    parts,
                    options,
                });
            }
            Some(Keyword::Check) => {
                self.advance();
                let expr = self.parse_paren_condition()?;
                let enforced = self.parse_enforced();
                return Ok(Constraint {
                    kind: ConstraintKind::Check { expr, enforced },
                    name: symbol,
                    if_not_exists,
                    parts: Vec::new(),
                    options,
                });
            }
            _ if self.check_word("vector") || self.check_word("columnar") => {
                let kind = if self.eat_word("vector") {
                    ConstraintKind::Vector
                } else {
                    self.advance();
                    ConstraintKind::Columnar
                };
                if !self.eat_keyword(Keyword::Key) {
                    self.expect_keyword(Keyword::Index)?;
                }
                if_not_exists = self.parse_if_not_exists()?;
                (kind, self.parse_opt_index_name()?)
            }
            _ => return Err(self.error()),
        };
        if self.check_index_type_keyword() {
            self.advance();
            options.using = Some(self.parse_index_type()?);
        }
        let parts = self.parse_index_parts()?;
        self.parse_index_options(&mut options)?;
        Ok(Constraint {
            kind,
            name: name.or(symbol),
            if_not_exists,
            parts,
            options,
        })
    }

    /// `FIRST`, `AFTER col` or nothing.
    pub(super) fn parse_column_position(&mut self) -> Result<ColumnPosition, ParseError> {
        if self.eat_keyword(Keyword::First) {
            return Ok(ColumnPosition::First);
        }
        if self.eat_keyword(Keyword::After) {
            return Ok(ColumnPosition::After(self.parse_column_name()?));
        }
        Ok(ColumnPosition::None)
    }

    /// Parses table options. CREATE TABLE separates them by optional commas;
    /// ALTER TABLE uses commas between specs instead.
    pub(super) fn parse_table_options(
        &mut self,
        allow_commas: bool,
    ) -> Result<Vec<TableOption>, ParseError> {
        let mut options = Vec::new();
        loop {
            if allow_commas && !options.is_empty() && self.check(&TokenKind::Comma) {
                self.advance();
                match self.parse_table_option()? {
                    Some(option) => options.push(option),
                    None => return Err(self.error()),
                }
                continue;
            }
            match self.parse_table_option()? {
                Some(option) => options.push(option),
                None => return Ok(options),
            }
        }
    }

    /// Parses `DEFAULT` or an unsigned number.
    fn parse_opt_default_u64(&mut self) -> Result<Option<u64>, ParseError> {
        if self.eat_keyword(Keyword::Default) {
            Ok(None)
        } else {
            self.expect_u64().map(Some)
        }
    }

    /// Parses `DEFAULT` or a string.
    fn parse_opt_default_string(&mut self) -> Result<Option<String>, ParseError> {
        if self.eat_keyword(Keyword::Default) {
            Ok(None)
        } else {
            self.expect_string().map(Some)
        }
    }

    /// Source text of the current token.
    fn take_token_text(&mut self) -> Result<String, ParseError> {
        if matches!(self.current().kind, TokenKind::Eof | TokenKind::Semicolon) {
            return Err(self.error());
        }
        let text = self.current().span.slice(self.source).to_string();
        self.advance();
        Ok(text)
    }

    #[allow(clippy::too_many_lines)]
    fn parse_table_option(&mut self) -> Result<Option<TableOption>, ParseError> {
        if self.check_keyword(Keyword::Default)
            && (matches!(
                self.peek_token(1).as_keyword(),
                Some(Keyword::Charset | Keyword::Character | Keyword::Char | Keyword::Collate)
            ) || self.check_keyword_at(1, Keyword::Placement))
        {
            self.advance();
        }
        if self.eat_charset_keyword() {
            self.eat_eq();
            if self.eat_keyword(Keyword::Default) {
                return Ok(Some(TableOption::Charset("default".to_string())));
            }
            return Ok(Some(TableOption::Charset(self.parse_charset_name()?)));
        }
        let Some(kw) = self.current().as_keyword() else {
            return self.parse_table_option_word();
        };
        let option = match kw {
            Keyword::Engine => {
                self.advance();
                self.eat_eq();
                TableOption::Engine(self.expect_name_or_string()?)
            }
            Keyword::Collate => {
                self.advance();
                self.eat_eq();
                TableOption::Collate(self.parse_collation_name()?)
            }
            Keyword::AutoIncrement => {
                self.advance();
                self.eat_eq();
                TableOption::AutoIncrement(self.expect_u64()?)
            }
            Keyword::AutoIdCache => {
                self.advance();
                self.eat_eq();
                TableOption::AutoIdCache(self.expect_u64()?)
            }
            Keyword::AutoRandomBase => {
                self.advance();
                self.eat_eq();
                TableOption::AutoRandomBase(self.expect_u64()?)
            }
            Keyword::AvgRowLength => {
                self.advance();
                self.eat_eq();
                TableOption::AvgRowLength(self.expect_u64()?)
            }
            Keyword::Checksum => {
                self.advance();
                self.eat_eq();
                TableOption::Checksum(self.expect_u64()?)
            }
            Keyword::Comment => {
                self.advance();
                self.eat_eq();
                TableOption::Comment(self.expect_string()?)
            }
            Keyword::Compression => {
                self.advance();
                self.eat_eq();
                TableOption::Compression(self.expect_string()?)
            }
            Keyword::Connection => {
                self.advance();
                self.eat_eq();
                TableOption::Connection(self.expect_string()?)
            }
            Keyword::Password => {
                self.advance();
                self.eat_eq();
                TableOption::Password(self.expect_string()?)
            }
            Keyword::KeyBlockSize => {
                self.advance();
                self.eat_eq();
                TableOption::KeyBlockSize(self.expect_u64()?)
            }
            Keyword::MaxRows => {
                self.advance();
                self.eat_eq();
                TableOption::MaxRows(self.expect_u64()?)
            }
            Keyword::MinRows => {
                self.advance();
                self.eat_eq();
                TableOption::MinRows(self.expect_u64()?)
            }
            Keyword::DelayKeyWrite => {
                self.advance();
                self.eat_eq();
                TableOption::DelayKeyWrite(self.expect_u64()?)
            }
            Keyword::RowFormat => {
                self.advance();
                self.eat_eq();
                let span = self.current().span;
                let word = self.take_token_text()?;
                let format = RowFormat::from_name(&word).ok_or_else(|| {
                    self.error_at(
                        ErrorCode::ParseError,
                        format!("Unknown row format '{word}'"),
                        span,
                    )
                })?;
                TableOption::RowFormat(format)
            }
            Keyword::StatsPersistent => {
                self.advance();
                self.eat_eq();
                TableOption::StatsPersistent(self.parse_opt_default_u64()?)
            }
            Keyword::StatsAutoRecalc => {
                self.advance();
                self.eat_eq();
                TableOption::StatsAutoRecalc(self.parse_opt_default_u64()?)
            }
            Keyword::StatsSamplePages => {
                self.advance();
                self.eat_eq();
                TableOption::StatsSamplePages(self.parse_opt_default_u64()?)
            }
            Keyword::PackKeys => {
                self.advance();
                self.eat_eq();
                TableOption::PackKeys(self.parse_opt_default_u64()?)
            }
            Keyword::ShardRowIdBits => {
                self.advance();
                self.eat_eq();
                TableOption::ShardRowIdBits(self.expect_u64()?)
            }
            Keyword::Tablespace => {
                self.advance();
                self.eat_eq();
                TableOption::Tablespace(self.expect_name_or_string()?)
            }
            Keyword::Nodegroup => {
                self.advance();
                self.eat_eq();
                TableOption::Nodegroup(self.expect_u64()?)
            }
            Keyword::Data | Keyword::Index if self.check_keyword_at(1, Keyword::Directory) => {
                let data = self.check_keyword(Keyword::Data);
                self.advance();
                self.advance();
                self.eat_eq();
                let dir = self.expect_string()?;
                if data {
                    TableOption::DataDirectory(dir)
                } else {
                    TableOption::IndexDirectory(dir)
                }
            }
            Keyword::InsertMethod => {
                self.advance();
                self.eat_eq();
                TableOption::InsertMethod(self.take_token_text()?.to_ascii_uppercase())
            }
            Keyword::Encryption => {
                self.advance();
                self.eat_eq();
                TableOption::Encryption(self.expect_string()?)
            }
            Keyword::Union => {
                self.advance();
                self.eat_eq();
                self.expect(&TokenKind::LeftParen)?;
                let tables = if self.check(&TokenKind::RightParen) {
                    Vec::new()
                } else {
                    self.parse_table_name_list()?
                };
                self.expect(&TokenKind::RightParen)?;
                TableOption::Union(tables)
            }
            Keyword::Placement => {
                self.advance();
                self.expect_keyword(Keyword::Policy)?;
                self.eat_eq();
                if self.eat_keyword(Keyword::Default) {
                    TableOption::PlacementPolicy(None)
                } else {
                    TableOption::PlacementPolicy(Some(self.expect_name_or_string()?))
                }
            }
            Keyword::Ttl => {
                self.advance();
                self.eat_eq();
                let column = self.parse_column_name()?;
                self.expect(&TokenKind::Plus)?;
                self.expect_keyword(Keyword::Interval)?;
                let interval = self.parse_expression(NO_INFIX_BP)?;
                let unit = self.parse_time_unit()?;
                TableOption::Ttl {
                    column,
                    interval,
                    unit,
                }
            }
            Keyword::TtlEnable => {
                self.advance();
                self.eat_eq();
                let span = self.current().span;
                let value = self.expect_string()?;
                let enabled = match value.to_ascii_uppercase().as_str() {
                    "ON" => true,
                    "OFF" => false,
                    _ => {
                        return Err(self.error_at(
                            ErrorCode::ParseError,
                            "TTL_ENABLE should be 'ON' or 'OFF'",
                            span,
                        ))
                    }
                };
                TableOption::TtlEnable(enabled)
            }
            Keyword::TtlJobInterval => {
                self.advance();
                self.eat_eq();
                TableOption::TtlJobInterval(self.expect_string()?)
            }
            _ => return self.parse_table_option_word(),
        };
        Ok(Some(option))
    }

    /// Table options spelled with words the lexer does not reserve.
    fn parse_table_option_word(&mut self) -> Result<Option<TableOption>, ParseError> {
        let Some(word) = self.identifier_at(0).map(|w| w.to_ascii_lowercase()) else {
            return Ok(None);
        };
        if !matches!(
            self.current().kind,
            TokenKind::Identifier(_) | TokenKind::Keyword(_)
        ) {
            return Ok(None);
        }
        let option = match word.as_str() {
            "table_checksum" => {
                self.advance();
                self.eat_eq();
                TableOption::TableChecksum(self.expect_u64()?)
            }
            "pre_split_regions" => {
                self.advance();
                self.eat_eq();
                TableOption::PreSplitRegions(self.expect_u64()?)
            }
            "storage_media" => {
                self.advance();
                self.eat_eq();
                TableOption::StorageMedia(self.expect_name_or_string()?)
            }
            "secondary_engine" => {
                self.advance();
                self.eat_eq();
                if self.eat_keyword(Keyword::Null) {
                    TableOption::SecondaryEngine(None)
                } else {
                    TableOption::SecondaryEngine(Some(self.expect_name_or_string()?))
                }
            }
            "secondary_engine_attribute" => {
                self.advance();
                self.eat_eq();
                TableOption::SecondaryEngineAttribute(self.expect_string()?)
            }
            "engine_attribute" => {
                self.advance();
                self.eat_eq();
                TableOption::EngineAttribute(self.expect_string()?)
            }
            "stats_buckets" => {
                self.advance();
                self.eat_eq();
                TableOption::StatsBuckets(self.parse_opt_default_u64()?)
            }
            "stats_topn" => {
                self.advance();
                self.eat_eq();
                TableOption::StatsTopN(self.parse_opt_default_u64()?)
            }
            "stats_col_choice" => {
                self.advance();
                self.eat_eq();
                TableOption::StatsColsChoice(self.parse_opt_default_string()?)
            }
            "stats_col_list" => {
                self.advance();
                self.eat_eq();
                TableOption::StatsColList(self.parse_opt_default_string()?)
            }
            "stats_sample_rate" => {
                self.advance();
                self.eat_eq();
                if self.eat_keyword(Keyword::Default) {
                    TableOption::StatsSampleRate(None)
                } else {
                    TableOption::StatsSampleRate(Some(self.take_token_text()?))
                }
            }
            "autoextend_size" => {
                self.advance();
                self.eat_eq();
                TableOption::AutoextendSize(self.take_token_text()?)
            }
            _ => return Ok(None),
        };
        Ok(Some(option))
    }
}

/// Returns true for `CURRENT_TIMESTAMP`, `NOW()` and their synonyms.
fn is_now_call(expr: &Expr) -> bool {
    matches!(&expr.kind, ExprKind::Func(call) if NOW_FUNCTIONS.contains(&call.name.as_str()))
}

#[cfg(test)]
mod tests {
    use crate::ast::{
        ColumnOption, ConstraintKind, IndexKey, IndexType, ReferenceAction, Statement,
        TableOption, TypeKind,
    };
    use crate::{ErrorCode, Parser};

    fn create(sql: &str) -> crate::ast::CreateTable {
        match Parser::new().parse_one_stmt(sql, "", "").unwrap().stmt {
            Statement::CreateTable(create) => *create,
            other => panic!("expected CREATE TABLE, got {other:?}"),
        }
    }

    #[test]
    fn test_column_options() {
        let table = create(
            "CREATE TABLE t (a INT NOT NULL DEFAULT -1 COMMENT 'x', \
             b TIMESTAMP DEFAULT CURRENT_TIMESTAMP ON UPDATE CURRENT_TIMESTAMP, \
             c INT AS (a + 1) STORED)",
        );
        let a = &table.columns[0];
        assert_eq!(a.options[0], ColumnOption::NotNull);
        assert!(matches!(a.options[1], ColumnOption::Default(_)));
        assert_eq!(a.options[2], ColumnOption::Comment("x".into()));
        assert!(matches!(table.columns[1].options[1], ColumnOption::OnUpdate(_)));
        assert!(matches!(
            table.columns[2].options[0],
            ColumnOption::Generated { stored: true, .. }
        ));
    }

    #[test]
    fn test_serial_expands() {
        let table = create("CREATE TABLE t (id SERIAL)");
        let id = &table.columns[0];
        assert_eq!(id.data_type.kind, TypeKind::BigInt);
        assert!(id.data_type.unsigned);
        assert_eq!(
            id.options,
            vec![
                ColumnOption::NotNull,
                ColumnOption::AutoIncrement,
                ColumnOption::UniqueKey
            ]
        );
    }

    #[test]
    fn test_auto_random_arguments() {
        let table = create("CREATE TABLE t (a BIGINT AUTO_RANDOM(5, 53) PRIMARY KEY, b INT AUTO_RANDOM(3))");
        assert_eq!(
            table.columns[0].options[0],
            ColumnOption::AutoRandom {
                shard_bits: Some(5),
                range_bits: Some(53)
            }
        );
        assert_eq!(
            table.columns[1].options[0],
            ColumnOption::AutoRandom {
                shard_bits: Some(3),
                range_bits: None
            }
        );
    }

    #[test]
    fn test_invalid_on_update() {
        let err = Parser::new()
            .parse_one_stmt("CREATE TABLE t (a TIMESTAMP ON UPDATE 1)", "", "")
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidOnUpdate);
    }

    #[test]
    fn test_constraints() {
        let table = create(
            "CREATE TABLE t (a INT, b INT, PRIMARY KEY (a) CLUSTERED, \
             CONSTRAINT fk FOREIGN KEY (b) REFERENCES p (id) ON DELETE CASCADE, \
             UNIQUE KEY ub USING HASH (b(10) DESC), INDEX ((a + b)), CHECK (a > 0) NOT ENFORCED)",
        );
        assert_eq!(table.constraints.len(), 5);
        assert_eq!(table.constraints[0].kind, ConstraintKind::PrimaryKey);
        assert_eq!(table.constraints[0].options.clustered, Some(true));
        let ConstraintKind::ForeignKey(reference) = &table.constraints[1].kind else {
            panic!("expected a foreign key");
        };
        assert_eq!(table.constraints[1].name.as_deref(), Some("fk"));
        assert_eq!(reference.on_delete, Some(ReferenceAction::Cascade));
        assert_eq!(table.constraints[2].name.as_deref(), Some("ub"));
        assert_eq!(table.constraints[2].options.using, Some(IndexType::Hash));
        assert!(table.constraints[2].parts[0].desc);
        assert!(matches!(table.constraints[3].parts[0].key, IndexKey::Expr(_)));
        assert!(matches!(
            table.constraints[4].kind,
            ConstraintKind::Check { enforced: false, .. }
        ));
    }

    #[test]
    fn test_vector_index() {
        let table = create(
            "CREATE TABLE t (v VECTOR(3), VECTOR INDEX idx ((VEC_COSINE_DISTANCE(v))) USING HNSW)",
        );
        assert_eq!(table.constraints[0].kind, ConstraintKind::Vector);
        assert_eq!(table.constraints[0].options.using, Some(IndexType::Hnsw));
    }

    #[test]
    fn test_table_options() {
        let table = create(
            "CREATE TABLE t (a INT, d DATETIME) ENGINE = InnoDB, DEFAULT CHARSET = utf8mb4 \
             AUTO_INCREMENT 10 SHARD_ROW_ID_BITS = 4 PRE_SPLIT_REGIONS = 2 \
             TTL = d + INTERVAL 1 DAY TTL_ENABLE = 'OFF' STATS_SAMPLE_RATE = 0.5",
        );
        assert_eq!(table.options[0], TableOption::Engine("InnoDB".into()));
        assert_eq!(table.options[1], TableOption::Charset("utf8mb4".into()));
        assert_eq!(table.options[2], TableOption::AutoIncrement(10));
        assert_eq!(table.options[3], TableOption::ShardRowIdBits(4));
        assert_eq!(table.options[4], TableOption::PreSplitRegions(2));
        assert!(matches!(table.options[5], TableOption::Ttl { .. }));
        assert_eq!(table.options[6], TableOption::TtlEnable(false));
        assert_eq!(table.options[7], TableOption::StatsSampleRate(Some("0.5".into())));
    }
}
