//! Define the reserved words that tooling writes back into mtail program text.
//!
//! This module is the single source of truth for those words: a stable identifier ([`KeywordId`]) plus a const
//! table ([`KEYWORDS`]) recording canonical spellings and categories.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//! - Metric-kind keywords are also reachable through [`crate::lang::metrics::MetricKind::keyword`].
//!
//! ## Examples
//! ```rust
//! use mtail_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("next"), Some(KeywordId::Next));
//! assert_eq!(keywords::as_str(KeywordId::Def), "def");
//! ```

/// Stable identifier for every reserved word the renderer emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    // Declarations
    Counter,
    Gauge,
    Timer,
    By,

    // Definitions
    Def,

    // Control
    Next,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    Declaration,
    Definition,
    Control,
}

#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub category: KeywordCategory,
}

pub const KEYWORDS: &[KeywordInfo] = &[
    info(KeywordId::Counter, "counter", KeywordCategory::Declaration),
    info(KeywordId::Gauge, "gauge", KeywordCategory::Declaration),
    info(KeywordId::Timer, "timer", KeywordCategory::Declaration),
    info(KeywordId::By, "by", KeywordCategory::Declaration),
    info(KeywordId::Def, "def", KeywordCategory::Definition),
    info(KeywordId::Next, "next", KeywordCategory::Control),
];

/// Return the full metadata entry for a keyword.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    KEYWORDS.iter().find(|k| k.id == id).expect("keyword info missing")
}

/// Return the canonical spelling for a keyword.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Resolve a spelling to its keyword identifier, if reserved.
pub fn from_str(spelling: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.canonical == spelling).map(|k| k.id)
}

// --- helpers -----------------------------------------------------------------

const fn info(id: KeywordId, canonical: &'static str, category: KeywordCategory) -> KeywordInfo {
    KeywordInfo { id, canonical, category }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_keyword_round_trips_through_its_spelling() {
        for k in KEYWORDS {
            assert_eq!(from_str(k.canonical), Some(k.id));
            assert_eq!(as_str(k.id), k.canonical);
        }
    }

    #[test]
    fn test_from_str_is_case_sensitive() {
        assert_eq!(from_str("Next"), None);
        assert_eq!(from_str("DEF"), None);
    }

    #[test]
    fn test_declaration_keywords_are_categorised() {
        assert_eq!(info_for(KeywordId::Counter).category, KeywordCategory::Declaration);
        assert_eq!(info_for(KeywordId::Next).category, KeywordCategory::Control);
    }
}
