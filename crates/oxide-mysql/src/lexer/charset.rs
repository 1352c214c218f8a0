//! Character sets and collations recognized by the parser.
//!
//! The lexer only needs to know whether `_name` *could* be an introducer;
//! whether the charset is usable is decided by the [`CharsetRegistry`] owned by
//! the parser instance.

use std::collections::BTreeMap;

/// Every charset name MySQL accepts in an introducer position.
const KNOWN_CHARSETS: &[&str] = &[
    "armscii8", "ascii", "big5", "binary", "cp1250", "cp1251", "cp1256", "cp1257", "cp850",
    "cp852", "cp866", "cp932", "dec8", "eucjpms", "euckr", "gb18030", "gb2312", "gbk",
    "geostd8", "greek", "hebrew", "hp8", "keybcs2", "koi8r", "koi8u", "latin1", "latin2",
    "latin5", "latin7", "macce", "macroman", "sjis", "swe7", "tis620", "ucs2", "ujis", "utf16",
    "utf16le", "utf32", "utf8", "utf8mb3", "utf8mb4",
];

/// Returns true if `name` (any case) is a charset MySQL knows about.
#[must_use]
pub fn is_known_charset(name: &str) -> bool {
    KNOWN_CHARSETS
        .iter()
        .any(|cs| cs.eq_ignore_ascii_case(name))
}

/// A charset supported by the parser together with its collations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Charset {
    /// Lower-case charset name.
    pub name: String,
    /// Collation used when none is given.
    pub default_collation: String,
    /// All collations of this charset.
    pub collations: Vec<String>,
}

/// Registry of the charsets and collations a parser instance accepts.
///
/// Lookups are case-insensitive. The registry is read-only during a parse;
/// callers mutate it between parses (e.g. to disable `gbk`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharsetRegistry {
    charsets: BTreeMap<String, Charset>,
}

impl Default for CharsetRegistry {
    fn default() -> Self {
        let mut registry = Self {
            charsets: BTreeMap::new(),
        };
        registry.add("utf8mb4", "utf8mb4_bin", &[
            "utf8mb4_bin",
            "utf8mb4_general_ci",
            "utf8mb4_unicode_ci",
            "utf8mb4_0900_ai_ci",
            "utf8mb4_0900_bin",
        ]);
        registry.add("utf8", "utf8_bin", &[
            "utf8_bin",
            "utf8_general_ci",
            "utf8_unicode_ci",
        ]);
        registry.add("ascii", "ascii_bin", &["ascii_bin", "ascii_general_ci"]);
        registry.add("latin1", "latin1_bin", &[
            "latin1_bin",
            "latin1_swedish_ci",
        ]);
        registry.add("binary", "binary", &["binary"]);
        registry.add("gbk", "gbk_chinese_ci", &["gbk_bin", "gbk_chinese_ci"]);
        registry.add("gb18030", "gb18030_chinese_ci", &[
            "gb18030_bin",
            "gb18030_chinese_ci",
        ]);
        registry
    }
}

impl CharsetRegistry {
    /// Registers (or replaces) a charset.
    pub fn add(&mut self, name: &str, default_collation: &str, collations: &[&str]) {
        let name = name.to_ascii_lowercase();
        self.charsets.insert(
            name.clone(),
            Charset {
                name,
                default_collation: default_collation.to_ascii_lowercase(),
                collations: collations.iter().map(|c| c.to_ascii_lowercase()).collect(),
            },
        );
    }

    /// Removes a charset; its introducer and name then fail to resolve.
    pub fn remove_charset(&mut self, name: &str) -> Option<Charset> {
        self.charsets.remove(&name.to_ascii_lowercase())
    }

    /// Resolves a charset name, treating `utf8mb3` as `utf8`.
    #[must_use]
    pub fn charset(&self, name: &str) -> Option<&Charset> {
        let lower = name.to_ascii_lowercase();
        let lookup = if lower == "utf8mb3" { "utf8" } else { &lower };
        self.charsets.get(lookup)
    }

    /// Returns true if the charset is supported.
    #[must_use]
    pub fn is_supported(&self, name: &str) -> bool {
        self.charset(name).is_some()
    }

    /// Finds the charset owning a collation.
    #[must_use]
    pub fn collation_charset(&self, collation: &str) -> Option<&Charset> {
        let lower = collation.to_ascii_lowercase();
        self.charsets
            .values()
            .find(|cs| cs.collations.iter().any(|c| *c == lower))
    }

    /// Returns true if the collation is supported.
    #[must_use]
    pub fn is_supported_collation(&self, collation: &str) -> bool {
        self.collation_charset(collation).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_charsets() {
        assert!(is_known_charset("UTF8MB4"));
        assert!(is_known_charset("latin2"));
        assert!(!is_known_charset("klingon"));
    }

    #[test]
    fn test_registry_lookup() {
        let registry = CharsetRegistry::default();
        assert_eq!(
            registry.charset("UTF8MB4").map(|c| c.default_collation.as_str()),
            Some("utf8mb4_bin")
        );
        assert!(registry.is_supported("utf8mb3"));
        assert!(!registry.is_supported("latin2"));
        assert_eq!(
            registry.collation_charset("GBK_BIN").map(|c| c.name.as_str()),
            Some("gbk")
        );
    }

    #[test]
    fn test_remove_charset() {
        let mut registry = CharsetRegistry::default();
        assert!(registry.remove_charset("gbk").is_some());
        assert!(!registry.is_supported("gbk"));
        assert!(!registry.is_supported_collation("gbk_chinese_ci"));
    }
}
