//! Column types, cast targets, charset and collation names.

use super::error::{ErrorCode, ParseError};
use super::parser::Grammar;
use crate::ast::{CastType, DataType, TypeKind};
use crate::lexer::{Keyword, Span, TokenKind};
use crate::SqlMode;

const MAX_DISPLAY_WIDTH: u64 = 255;
const MAX_BIT_WIDTH: u64 = 64;
const MAX_DECIMAL_PRECISION: u64 = 65;
const MAX_FLOAT_PRECISION: u64 = 53;
const MAX_SINGLE_PRECISION: u64 = 24;
const MAX_FSP: u64 = 6;

impl Grammar<'_> {
    /// Consumes `CHARACTER SET`, `CHAR SET` or `CHARSET`.
    pub(super) fn eat_charset_keyword(&mut self) -> bool {
        if self.eat_keyword(Keyword::Charset) {
            return true;
        }
        if matches!(
            self.current().as_keyword(),
            Some(Keyword::Character | Keyword::Char)
        ) && self.check_keyword_at(1, Keyword::Set)
        {
            self.advance();
            self.advance();
            return true;
        }
        false
    }

    fn expect_charset_word(&mut self) -> Result<(String, Span), ParseError> {
        let span = self.current().span;
        let name = if self.eat_keyword(Keyword::Binary) {
            "binary".to_string()
        } else {
            self.expect_name_or_string()?
        };
        Ok((name, span))
    }

    /// Parses a charset name and resolves it against the registry.
    pub(super) fn parse_charset_name(&mut self) -> Result<String, ParseError> {
        let (name, span) = self.expect_charset_word()?;
        self.charsets
            .charset(&name)
            .map(|cs| cs.name.clone())
            .ok_or_else(|| {
                self.error_at(
                    ErrorCode::UnknownCharacterSet,
                    format!("Unknown character set: '{name}'"),
                    span,
                )
            })
    }

    /// Parses a collation name and checks it against the registry.
    pub(super) fn parse_collation_name(&mut self) -> Result<String, ParseError> {
        let (name, span) = self.expect_charset_word()?;
        if self.charsets.is_supported_collation(&name) {
            Ok(name.to_ascii_lowercase())
        } else {
            Err(self.error_at(
                ErrorCode::UnknownCollation,
                format!("Unknown collation: '{name}'"),
                span,
            ))
        }
    }

    /// Parses an optional `(n)`.
    pub(super) fn parse_opt_field_len(&mut self) -> Result<Option<u64>, ParseError> {
        if !self.eat(&TokenKind::LeftParen) {
            return Ok(None);
        }
        let len = self.expect_u64()?;
        self.expect(&TokenKind::RightParen)?;
        Ok(Some(len))
    }

    /// Parses an optional `(m)` or `(m, d)`.
    fn parse_opt_precision(&mut self) -> Result<(Option<u64>, Option<u64>), ParseError> {
        if !self.eat(&TokenKind::LeftParen) {
            return Ok((None, None));
        }
        let length = self.expect_u64()?;
        let decimals = if self.eat(&TokenKind::Comma) {
            Some(self.expect_u64()?)
        } else {
            None
        };
        self.expect(&TokenKind::RightParen)?;
        Ok((Some(length), decimals))
    }

    /// Lower-cased name of the type word under the cursor.
    fn expect_type_word(&mut self) -> Result<String, ParseError> {
        let word = match &self.current().kind {
            TokenKind::Keyword(kw) => kw.as_str().to_ascii_lowercase(),
            TokenKind::Identifier(name) => name.to_ascii_lowercase(),
            _ => return Err(self.error()),
        };
        self.advance();
        Ok(word)
    }

    /// Parses a column type with its attributes.
    pub(super) fn parse_data_type(&mut self) -> Result<DataType, ParseError> {
        let start = self.current().span;
        let word = self.expect_type_word()?;
        let mut ty = match word.as_str() {
            "tinyint" | "int1" => self.parse_integer_type(TypeKind::TinyInt)?,
            "smallint" | "int2" => self.parse_integer_type(TypeKind::SmallInt)?,
            "mediumint" | "middleint" | "int3" => self.parse_integer_type(TypeKind::MediumInt)?,
            "int" | "integer" | "int4" => self.parse_integer_type(TypeKind::Int)?,
            "bigint" | "int8" => self.parse_integer_type(TypeKind::BigInt)?,
            "bool" | "boolean" => DataType::new(TypeKind::TinyInt).with_length(1),
            "bit" => {
                let mut ty = DataType::new(TypeKind::Bit);
                ty.length = self.parse_opt_field_len()?;
                if ty.length.is_some_and(|len| len > MAX_BIT_WIDTH) {
                    return Err(self.display_width_error(start));
                }
                ty
            }
            "decimal" | "dec" | "numeric" | "fixed" => {
                let (length, decimals) = self.parse_opt_precision()?;
                if length.is_some_and(|len| len > MAX_DECIMAL_PRECISION) {
                    return Err(self.precision_error(start, MAX_DECIMAL_PRECISION));
                }
                DataType {
                    length,
                    decimals,
                    ..DataType::new(TypeKind::Decimal)
                }
            }
            "float" | "float4" => self.parse_float_type(start)?,
            "float8" => self.parse_double_type(start)?,
            "double" => {
                self.eat_keyword(Keyword::Precision);
                self.parse_double_type(start)?
            }
            "real" => {
                if self.sql_mode().contains(SqlMode::REAL_AS_FLOAT) {
                    self.parse_float_type(start)?
                } else {
                    self.parse_double_type(start)?
                }
            }
            "date" => DataType::new(TypeKind::Date),
            "datetime" => self.parse_fsp_type(TypeKind::Datetime, start)?,
            "timestamp" => self.parse_fsp_type(TypeKind::Timestamp, start)?,
            "time" => self.parse_fsp_type(TypeKind::Time, start)?,
            "year" => {
                let mut ty = DataType::new(TypeKind::Year);
                ty.length = self.parse_opt_field_len()?;
                if ty.length.is_some_and(|len| len != 4) {
                    return Err(self.error_at(
                        ErrorCode::InvalidYearColumnLength,
                        "Supports only YEAR or YEAR(4) column",
                        self.span_from(start.start),
                    ));
                }
                ty
            }
            "char" | "character" => {
                if self.eat_keyword(Keyword::Varying) {
                    self.parse_varchar(None)?
                } else {
                    self.parse_char(None)?
                }
            }
            "nchar" => {
                if self.eat_keyword(Keyword::Varchar)
                    || self.eat_keyword(Keyword::Varcharacter)
                    || self.eat_keyword(Keyword::Varying)
                {
                    self.parse_varchar(Some("utf8"))?
                } else {
                    self.parse_char(Some("utf8"))?
                }
            }
            "national" => {
                if self.eat_keyword(Keyword::Varchar) || self.eat_keyword(Keyword::Varcharacter) {
                    self.parse_varchar(Some("utf8"))?
                } else {
                    if !self.eat_keyword(Keyword::Char) {
                        self.expect_keyword(Keyword::Character)?;
                    }
                    if self.eat_keyword(Keyword::Varying) {
                        self.parse_varchar(Some("utf8"))?
                    } else {
                        self.parse_char(Some("utf8"))?
                    }
                }
            }
            "varchar" | "varcharacter" => self.parse_varchar(None)?,
            "nvarchar" => self.parse_varchar(Some("utf8"))?,
            "binary" => {
                let mut ty = DataType::new(TypeKind::Binary);
                ty.length = self.parse_opt_field_len()?;
                ty
            }
            "varbinary" => {
                let len = self.parse_opt_field_len()?.ok_or_else(|| self.error())?;
                DataType::new(TypeKind::Varbinary).with_length(len)
            }
            "long" => {
                if self.eat_keyword(Keyword::Varbinary) {
                    DataType::new(TypeKind::MediumBlob)
                } else {
                    let _ = self.eat_keyword(Keyword::Varchar)
                        || self.eat_keyword(Keyword::Varcharacter);
                    DataType::new(TypeKind::MediumText)
                }
            }
            "tinyblob" => DataType::new(TypeKind::TinyBlob),
            "blob" => {
                let mut ty = DataType::new(TypeKind::Blob);
                ty.length = self.parse_opt_field_len()?;
                ty
            }
            "mediumblob" => DataType::new(TypeKind::MediumBlob),
            "longblob" => DataType::new(TypeKind::LongBlob),
            "tinytext" => DataType::new(TypeKind::TinyText),
            "text" => {
                let mut ty = DataType::new(TypeKind::Text);
                ty.length = self.parse_opt_field_len()?;
                ty
            }
            "mediumtext" => DataType::new(TypeKind::MediumText),
            "longtext" => DataType::new(TypeKind::LongText),
            "enum" => self.parse_enum_type(TypeKind::Enum)?,
            "set" => self.parse_enum_type(TypeKind::Set)?,
            "json" => DataType::new(TypeKind::Json),
            "geometry" => DataType::new(TypeKind::Geometry),
            "point" => DataType::new(TypeKind::Point),
            "linestring" => DataType::new(TypeKind::LineString),
            "polygon" => DataType::new(TypeKind::Polygon),
            "vector" => {
                let mut ty = DataType::new(TypeKind::Vector);
                ty.length = self.parse_opt_field_len()?;
                ty
            }
            _ => return Err(ParseError::syntax(self.source, start)),
        };

        if ty.kind.is_numeric() {
            loop {
                if self.eat_keyword(Keyword::Unsigned) {
                    ty.unsigned = true;
                } else if self.eat_keyword(Keyword::Zerofill) {
                    ty.zerofill = true;
                    ty.unsigned = true;
                } else if !self.eat_keyword(Keyword::Signed) {
                    break;
                }
            }
        }
        if ty.kind.is_text() {
            self.parse_string_attributes(&mut ty)?;
        }
        Ok(ty)
    }

    fn parse_integer_type(&mut self, kind: TypeKind) -> Result<DataType, ParseError> {
        let start = self.previous_span();
        let mut ty = DataType::new(kind);
        ty.length = self.parse_opt_field_len()?;
        if ty.length.is_some_and(|len| len > MAX_DISPLAY_WIDTH) {
            return Err(self.display_width_error(start));
        }
        Ok(ty)
    }

    fn parse_float_type(&mut self, start: Span) -> Result<DataType, ParseError> {
        let (length, decimals) = self.parse_opt_precision()?;
        match (length, decimals) {
            (Some(p), None) if p > MAX_FLOAT_PRECISION => {
                Err(self.precision_error(start, MAX_FLOAT_PRECISION))
            }
            // FLOAT(p) picks the storage size; p itself is not kept
            (Some(p), None) if p > MAX_SINGLE_PRECISION => Ok(DataType::new(TypeKind::Double)),
            (Some(_), None) => Ok(DataType::new(TypeKind::Float)),
            _ => Ok(DataType {
                length,
                decimals,
                ..DataType::new(TypeKind::Float)
            }),
        }
    }

    fn parse_double_type(&mut self, start: Span) -> Result<DataType, ParseError> {
        let (length, decimals) = self.parse_opt_precision()?;
        if length.is_some() && decimals.is_none() && self.config.strict_double_type_check {
            return Err(ParseError::syntax(self.source, self.span_from(start.start)));
        }
        Ok(DataType {
            length,
            decimals,
            ..DataType::new(TypeKind::Double)
        })
    }

    fn parse_fsp_type(&mut self, kind: TypeKind, start: Span) -> Result<DataType, ParseError> {
        let mut ty = DataType::new(kind);
        ty.length = self.parse_opt_field_len()?;
        if ty.length.is_some_and(|fsp| fsp > MAX_FSP) {
            return Err(self.precision_error(start, MAX_FSP));
        }
        Ok(ty)
    }

    fn parse_char(&mut self, charset: Option<&str>) -> Result<DataType, ParseError> {
        let mut ty = DataType::new(TypeKind::Char);
        ty.length = self.parse_opt_field_len()?;
        ty.charset = charset.map(str::to_string);
        Ok(ty)
    }

    fn parse_varchar(&mut self, charset: Option<&str>) -> Result<DataType, ParseError> {
        let len = self.parse_opt_field_len()?.ok_or_else(|| self.error())?;
        let mut ty = DataType::new(TypeKind::Varchar).with_length(len);
        ty.charset = charset.map(str::to_string);
        Ok(ty)
    }

    fn parse_enum_type(&mut self, kind: TypeKind) -> Result<DataType, ParseError> {
        self.expect(&TokenKind::LeftParen)?;
        let mut ty = DataType::new(kind);
        loop {
            ty.elems.push(self.expect_string()?);
            if !self.eat(&TokenKind::Comma) {
                break;
            }
        }
        self.expect(&TokenKind::RightParen)?;
        Ok(ty)
    }

    /// `BINARY`, `ASCII`, `CHARACTER SET x` and `COLLATE y` after a text type.
    fn parse_string_attributes(&mut self, ty: &mut DataType) -> Result<(), ParseError> {
        loop {
            if self.eat_keyword(Keyword::Binary) {
                ty.binary = true;
            } else if self.eat_keyword(Keyword::Ascii) {
                ty.charset = Some("latin1".to_string());
            } else if self.eat_charset_keyword() {
                ty.charset = Some(self.parse_charset_name()?);
            } else if self.eat_keyword(Keyword::Collate) {
                ty.collate = Some(self.parse_collation_name()?);
            } else {
                return Ok(());
            }
        }
    }

    /// Parses the target of `CAST(... AS target)` or `CONVERT(..., target)`.
    pub(super) fn parse_cast_type(&mut self) -> Result<CastType, ParseError> {
        let start = self.current().span;
        let word = self.expect_type_word()?;
        let target = match word.as_str() {
            "binary" => CastType::Binary(self.parse_opt_field_len()?),
            "char" | "character" | "nchar" => {
                let length = self.parse_opt_field_len()?;
                let charset = if word == "nchar" {
                    Some("utf8".to_string())
                } else if self.eat_charset_keyword() {
                    Some(self.parse_charset_name()?)
                } else if self.eat_keyword(Keyword::Ascii) {
                    Some("latin1".to_string())
                } else {
                    None
                };
                CastType::Char { length, charset }
            }
            "date" => CastType::Date,
            "datetime" => CastType::Datetime(self.parse_cast_fsp(start)?),
            "time" => CastType::Time(self.parse_cast_fsp(start)?),
            "decimal" | "dec" => {
                let (length, decimals) = self.parse_opt_precision()?;
                if length.is_some_and(|len| len > MAX_DECIMAL_PRECISION) {
                    return Err(self.precision_error(start, MAX_DECIMAL_PRECISION));
                }
                CastType::Decimal(length, decimals)
            }
            "signed" => {
                let _ = self.eat_keyword(Keyword::Int) || self.eat_keyword(Keyword::Integer);
                CastType::Signed
            }
            "unsigned" => {
                let _ = self.eat_keyword(Keyword::Int) || self.eat_keyword(Keyword::Integer);
                CastType::Unsigned
            }
            "json" => CastType::Json,
            "double" => {
                self.eat_keyword(Keyword::Precision);
                CastType::Double
            }
            "float" => {
                let precision = self.parse_opt_field_len()?;
                if precision.is_some_and(|p| p > MAX_FLOAT_PRECISION) {
                    return Err(self.precision_error(start, MAX_FLOAT_PRECISION));
                }
                CastType::Float(precision)
            }
            "real" => CastType::Real,
            "year" => CastType::Year,
            "vector" => CastType::Vector(self.parse_opt_field_len()?),
            _ => return Err(ParseError::syntax(self.source, start)),
        };
        Ok(target)
    }

    fn parse_cast_fsp(&mut self, start: Span) -> Result<Option<u64>, ParseError> {
        let fsp = self.parse_opt_field_len()?;
        if fsp.is_some_and(|fsp| fsp > MAX_FSP) {
            return Err(self.precision_error(start, MAX_FSP));
        }
        Ok(fsp)
    }

    fn precision_error(&self, start: Span, max: u64) -> ParseError {
        let span = self.span_from(start.start);
        self.error_at(
            ErrorCode::TooBigPrecision,
            format!(
                "Too big precision specified for '{}'. Maximum is {max}.",
                span.slice(self.source)
            ),
            span,
        )
    }

    fn display_width_error(&self, start: Span) -> ParseError {
        let span = self.span_from(start.start);
        self.error_at(
            ErrorCode::TooBigDisplaywidth,
            format!(
                "Display width out of range for column '{}'",
                span.slice(self.source)
            ),
            span,
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::{CastType, DataType, ExprKind, Statement, TypeKind};
    use crate::{ErrorCode, ParseError, Parser, SqlMode};

    fn column_type_with(parser: &Parser, ty: &str) -> Result<DataType, ParseError> {
        let sql = format!("CREATE TABLE t (c {ty})");
        let stmt = parser.parse_one_stmt(&sql, "", "")?.stmt;
        let Statement::CreateTable(create) = stmt else {
            panic!("expected CREATE TABLE");
        };
        Ok(create.columns.into_iter().next().unwrap().data_type)
    }

    fn column_type(ty: &str) -> DataType {
        column_type_with(&Parser::new(), ty).unwrap()
    }

    fn column_type_err(ty: &str) -> ErrorCode {
        column_type_with(&Parser::new(), ty).unwrap_err().code
    }

    #[test]
    fn test_integer_aliases() {
        assert_eq!(column_type("INT8").kind, TypeKind::BigInt);
        assert_eq!(column_type("MIDDLEINT").kind, TypeKind::MediumInt);
        assert_eq!(column_type("BOOL"), DataType::new(TypeKind::TinyInt).with_length(1));
        let ty = column_type("INT(11) ZEROFILL");
        assert!(ty.unsigned && ty.zerofill);
        assert_eq!(ty.length, Some(11));
    }

    #[test]
    fn test_width_and_precision_limits() {
        assert_eq!(column_type_err("INT(256)"), ErrorCode::TooBigDisplaywidth);
        assert_eq!(column_type_err("BIT(65)"), ErrorCode::TooBigDisplaywidth);
        assert_eq!(column_type_err("DECIMAL(66, 2)"), ErrorCode::TooBigPrecision);
        assert_eq!(column_type_err("DATETIME(7)"), ErrorCode::TooBigPrecision);
        assert_eq!(column_type_err("FLOAT(54)"), ErrorCode::TooBigPrecision);
        assert_eq!(column_type_err("YEAR(2)"), ErrorCode::InvalidYearColumnLength);
    }

    #[test]
    fn test_float_precision_selects_storage() {
        assert_eq!(column_type("FLOAT(10)"), DataType::new(TypeKind::Float));
        assert_eq!(column_type("FLOAT(30)"), DataType::new(TypeKind::Double));
        assert_eq!(column_type("FLOAT(7, 3)").decimals, Some(3));
    }

    #[test]
    fn test_strict_double_check() {
        assert_eq!(column_type_err("DOUBLE(10)"), ErrorCode::ParseError);
        let mut parser = Parser::new();
        parser.set_strict_double_type_check(false);
        assert_eq!(column_type_with(&parser, "DOUBLE(10)").unwrap().length, Some(10));
        assert!(column_type_with(&Parser::new(), "DOUBLE(10, 2)").is_ok());
    }

    #[test]
    fn test_real_as_float() {
        assert_eq!(column_type("REAL").kind, TypeKind::Double);
        let mut parser = Parser::new();
        parser.set_sql_mode(SqlMode::REAL_AS_FLOAT);
        assert_eq!(column_type_with(&parser, "REAL").unwrap().kind, TypeKind::Float);
    }

    #[test]
    fn test_string_attributes() {
        let ty = column_type("VARCHAR(10) BINARY CHARACTER SET utf8mb3 COLLATE UTF8_BIN");
        assert!(ty.binary);
        assert_eq!(ty.charset.as_deref(), Some("utf8"));
        assert_eq!(ty.collate.as_deref(), Some("utf8_bin"));
        assert_eq!(column_type("NATIONAL VARCHAR(5)").charset.as_deref(), Some("utf8"));
        assert_eq!(column_type("LONG").kind, TypeKind::MediumText);
        assert_eq!(column_type_err("VARCHAR"), ErrorCode::ParseError);
        assert_eq!(column_type_err("TEXT CHARSET klingon"), ErrorCode::UnknownCharacterSet);
        assert_eq!(column_type_err("TEXT COLLATE klingon_ci"), ErrorCode::UnknownCollation);
    }

    #[test]
    fn test_enum_members() {
        assert_eq!(column_type("ENUM('a', 'b''c')").elems, ["a", "b'c"]);
    }

    #[test]
    fn test_cast_targets() {
        let target = |sql: &str| match Parser::new().parse_expr(sql).unwrap().kind {
            ExprKind::Cast { target, .. } => target,
            other => panic!("unexpected {other:?}"),
        };
        assert_eq!(target("CAST(a AS SIGNED INTEGER)"), CastType::Signed);
        assert_eq!(target("CAST(a AS DECIMAL(10, 2))"), CastType::Decimal(Some(10), Some(2)));
        assert_eq!(
            target("CONVERT(a, CHAR(3) CHARSET latin1)"),
            CastType::Char {
                length: Some(3),
                charset: Some("latin1".into()),
            }
        );
        assert_eq!(target("CAST(a AS DATETIME(3))"), CastType::Datetime(Some(3)));
    }
}
