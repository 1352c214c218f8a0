//! SQL mode flags.

use std::fmt;
use std::str::FromStr;

bitflags::bitflags! {
    /// Per-connection switches borrowed from MySQL's `sql_mode`.
    ///
    /// Only `ANSI_QUOTES`, `NO_BACKSLASH_ESCAPES`, `REAL_AS_FLOAT`,
    /// `IGNORE_SPACE`, `HIGH_NOT_PRECEDENCE` and `PIPES_AS_CONCAT` change how
    /// SQL is parsed; the rest are carried so that mode strings round-trip.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct SqlMode: u32 {
        const REAL_AS_FLOAT = 1;
        const PIPES_AS_CONCAT = 1 << 1;
        const ANSI_QUOTES = 1 << 2;
        const IGNORE_SPACE = 1 << 3;
        const NOT_USED = 1 << 4;
        const ONLY_FULL_GROUP_BY = 1 << 5;
        const NO_UNSIGNED_SUBTRACTION = 1 << 6;
        const NO_DIR_IN_CREATE = 1 << 7;
        const NO_KEY_OPTIONS = 1 << 8;
        const NO_TABLE_OPTIONS = 1 << 9;
        const NO_FIELD_OPTIONS = 1 << 10;
        const NO_AUTO_VALUE_ON_ZERO = 1 << 11;
        const NO_BACKSLASH_ESCAPES = 1 << 12;
        const STRICT_TRANS_TABLES = 1 << 13;
        const STRICT_ALL_TABLES = 1 << 14;
        const NO_ZERO_IN_DATE = 1 << 15;
        const NO_ZERO_DATE = 1 << 16;
        const ALLOW_INVALID_DATES = 1 << 17;
        const ERROR_FOR_DIVISION_BY_ZERO = 1 << 18;
        const HIGH_NOT_PRECEDENCE = 1 << 19;
        const NO_ENGINE_SUBSTITUTION = 1 << 20;
        const PAD_CHAR_TO_FULL_LENGTH = 1 << 21;

        const ANSI = Self::REAL_AS_FLOAT.bits()
            | Self::PIPES_AS_CONCAT.bits()
            | Self::ANSI_QUOTES.bits()
            | Self::IGNORE_SPACE.bits()
            | Self::ONLY_FULL_GROUP_BY.bits();
        const TRADITIONAL = Self::STRICT_TRANS_TABLES.bits()
            | Self::STRICT_ALL_TABLES.bits()
            | Self::NO_ZERO_IN_DATE.bits()
            | Self::NO_ZERO_DATE.bits()
            | Self::ERROR_FOR_DIVISION_BY_ZERO.bits()
            | Self::NO_ENGINE_SUBSTITUTION.bits();
    }
}

/// Combination names that expand to several flags.
const COMBINATIONS: &[&str] = &["ANSI", "TRADITIONAL"];

/// Error returned when a mode string names an unknown flag.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sql mode '{0}'")]
pub struct UnknownSqlMode(pub String);

impl FromStr for SqlMode {
    type Err = UnknownSqlMode;

    /// Parses a comma-separated list such as `"ANSI_QUOTES,IGNORE_SPACE"`.
    ///
    /// Names are case-insensitive; blank entries are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut mode = Self::empty();
        for part in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let upper = part.to_ascii_uppercase();
            let flag =
                Self::from_name(&upper).ok_or_else(|| UnknownSqlMode(part.to_string()))?;
            mode |= flag;
        }
        Ok(mode)
    }
}

impl fmt::Display for SqlMode {
    /// Writes the individual flag names, comma-separated, never the
    /// combination names.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (name, _) in self
            .iter_names()
            .filter(|(name, _)| !COMBINATIONS.contains(name))
        {
            if !first {
                f.write_str(",")?;
            }
            f.write_str(name)?;
            first = false;
        }
        Ok(())
    }
}

impl serde::Serialize for SqlMode {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for SqlMode {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mode_list() {
        let mode: SqlMode = "ansi_quotes, HIGH_NOT_PRECEDENCE".parse().unwrap();
        assert!(mode.contains(SqlMode::ANSI_QUOTES));
        assert!(mode.contains(SqlMode::HIGH_NOT_PRECEDENCE));
        assert!(!mode.contains(SqlMode::IGNORE_SPACE));
    }

    #[test]
    fn test_parse_combination() {
        let mode: SqlMode = "ANSI".parse().unwrap();
        assert!(mode.contains(SqlMode::PIPES_AS_CONCAT | SqlMode::ANSI_QUOTES));
    }

    #[test]
    fn test_unknown_mode() {
        let err = "ANSI_QUOTES,NOPE".parse::<SqlMode>().unwrap_err();
        assert_eq!(err, UnknownSqlMode("NOPE".to_string()));
    }

    #[test]
    fn test_display() {
        let mode = SqlMode::ANSI_QUOTES | SqlMode::IGNORE_SPACE;
        assert_eq!(mode.to_string(), "ANSI_QUOTES,IGNORE_SPACE");
        assert_eq!(SqlMode::empty().to_string(), "");
        assert_eq!(SqlMode::ANSI.to_string().parse::<SqlMode>().unwrap(), SqlMode::ANSI);
    }
}
