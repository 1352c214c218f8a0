//! Column data type definitions.

/// MySQL column types after alias resolution.
///
/// `INTEGER` is stored as [`TypeKind::Int`], `BOOL` as `TINYINT(1)`,
/// `NUMERIC` as [`TypeKind::Decimal`] and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Bit,
    TinyInt,
    SmallInt,
    MediumInt,
    Int,
    BigInt,
    Decimal,
    Float,
    Double,
    Date,
    Datetime,
    Timestamp,
    Time,
    Year,
    Char,
    Varchar,
    Binary,
    Varbinary,
    TinyBlob,
    Blob,
    MediumBlob,
    LongBlob,
    TinyText,
    Text,
    MediumText,
    LongText,
    Enum,
    Set,
    Json,
    Geometry,
    Point,
    LineString,
    Polygon,
    Vector,
}

impl TypeKind {
    /// Returns the canonical type name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bit => "BIT",
            Self::TinyInt => "TINYINT",
            Self::SmallInt => "SMALLINT",
            Self::MediumInt => "MEDIUMINT",
            Self::Int => "INT",
            Self::BigInt => "BIGINT",
            Self::Decimal => "DECIMAL",
            Self::Float => "FLOAT",
            Self::Double => "DOUBLE",
            Self::Date => "DATE",
            Self::Datetime => "DATETIME",
            Self::Timestamp => "TIMESTAMP",
            Self::Time => "TIME",
            Self::Year => "YEAR",
            Self::Char => "CHAR",
            Self::Varchar => "VARCHAR",
            Self::Binary => "BINARY",
            Self::Varbinary => "VARBINARY",
            Self::TinyBlob => "TINYBLOB",
            Self::Blob => "BLOB",
            Self::MediumBlob => "MEDIUMBLOB",
            Self::LongBlob => "LONGBLOB",
            Self::TinyText => "TINYTEXT",
            Self::Text => "TEXT",
            Self::MediumText => "MEDIUMTEXT",
            Self::LongText => "LONGTEXT",
            Self::Enum => "ENUM",
            Self::Set => "SET",
            Self::Json => "JSON",
            Self::Geometry => "GEOMETRY",
            Self::Point => "POINT",
            Self::LineString => "LINESTRING",
            Self::Polygon => "POLYGON",
            Self::Vector => "VECTOR",
        }
    }

    /// Integer types accept `UNSIGNED`/`ZEROFILL` and a display width.
    #[must_use]
    pub const fn is_integer(self) -> bool {
        matches!(
            self,
            Self::TinyInt | Self::SmallInt | Self::MediumInt | Self::Int | Self::BigInt
        )
    }

    /// Numeric types accept `UNSIGNED`/`ZEROFILL`.
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        self.is_integer() || matches!(self, Self::Decimal | Self::Float | Self::Double)
    }

    /// Types with a fractional-seconds precision.
    #[must_use]
    pub const fn has_fsp(self) -> bool {
        matches!(self, Self::Datetime | Self::Timestamp | Self::Time)
    }

    /// Types that take `CHARACTER SET`/`COLLATE`.
    #[must_use]
    pub const fn is_text(self) -> bool {
        matches!(
            self,
            Self::Char
                | Self::Varchar
                | Self::TinyText
                | Self::Text
                | Self::MediumText
                | Self::LongText
                | Self::Enum
                | Self::Set
        )
    }
}

/// A column type with its attributes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DataType {
    /// Base type.
    pub kind: TypeKind,
    /// Display width, length or precision.
    pub length: Option<u64>,
    /// Scale.
    pub decimals: Option<u64>,
    /// `UNSIGNED`
    pub unsigned: bool,
    /// `ZEROFILL`
    pub zerofill: bool,
    /// `BINARY` attribute on a text type.
    pub binary: bool,
    /// Lower-case `CHARACTER SET`.
    pub charset: Option<String>,
    /// Lower-case `COLLATE`.
    pub collate: Option<String>,
    /// `ENUM`/`SET` members.
    pub elems: Vec<String>,
}

impl DataType {
    /// Creates a type without attributes.
    #[must_use]
    pub const fn new(kind: TypeKind) -> Self {
        Self {
            kind,
            length: None,
            decimals: None,
            unsigned: false,
            zerofill: false,
            binary: false,
            charset: None,
            collate: None,
            elems: Vec::new(),
        }
    }

    /// Sets the length.
    #[must_use]
    pub const fn with_length(mut self, length: u64) -> Self {
        self.length = Some(length);
        self
    }

    /// Marks the type unsigned.
    #[must_use]
    pub const fn unsigned(mut self) -> Self {
        self.unsigned = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_classes() {
        assert!(TypeKind::BigInt.is_integer());
        assert!(TypeKind::Double.is_numeric());
        assert!(!TypeKind::Double.is_integer());
        assert!(TypeKind::Time.has_fsp());
        assert!(TypeKind::Enum.is_text());
    }

    #[test]
    fn test_builders() {
        let ty = DataType::new(TypeKind::SmallInt).unsigned();
        assert!(ty.unsigned);
        assert_eq!(DataType::new(TypeKind::Varchar).with_length(255).length, Some(255));
    }
}
