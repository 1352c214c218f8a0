//! Parser configuration.

use serde::{Deserialize, Serialize};

use crate::SqlMode;

/// Server version compared against `/*!NNNNN ... */` version tags.
pub const DEFAULT_EXECUTABLE_COMMENT_VERSION: u32 = 80011;

/// Settings that shape how a [`Parser`](crate::Parser) reads SQL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Active SQL mode, written as a comma-separated list of flag names.
    pub sql_mode: SqlMode,
    /// Whether window-function keywords are reserved and `OVER` is parsed.
    pub enable_window_func: bool,
    /// Rejects `DOUBLE(n)` without a scale.
    pub strict_double_type_check: bool,
    /// Executable comments tagged with a higher version are skipped.
    pub executable_comment_version: u32,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            sql_mode: SqlMode::empty(),
            enable_window_func: false,
            strict_double_type_check: true,
            executable_comment_version: DEFAULT_EXECUTABLE_COMMENT_VERSION,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ParserConfig::default();
        assert!(config.sql_mode.is_empty());
        assert!(!config.enable_window_func);
        assert!(config.strict_double_type_check);
        assert_eq!(config.executable_comment_version, 80011);
    }

    #[test]
    fn test_deserialize_partial() {
        let config: ParserConfig =
            serde_json::from_str(r#"{"sql_mode": "ANSI_QUOTES", "enable_window_func": true}"#)
                .unwrap();
        assert_eq!(config.sql_mode, SqlMode::ANSI_QUOTES);
        assert!(config.enable_window_func);
        assert!(config.strict_double_type_check);
    }

    #[test]
    fn test_deserialize_rejects_unknown_mode() {
        let result = serde_json::from_str::<ParserConfig>(r#"{"sql_mode": "BOGUS"}"#);
        assert!(result.is_err());
    }
}
