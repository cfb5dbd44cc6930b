//! Metric kinds a declaration can name.
//!
//! The kind taxonomy is owned by the metrics runtime; tooling only needs the ids and, for the kinds that have a
//! declaration keyword, their spelling.
//!
//! ## Notes
//! - Only `counter`, `gauge` and `timer` have a declaration keyword. [`MetricKind::keyword`] returns `None` for every
//!   other kind and callers are expected to skip the keyword rather than fail.
//!
//! ## Examples
//! ```rust
//! use mtail_core::lang::metrics::MetricKind;
//!
//! assert_eq!(MetricKind::Gauge.keyword(), Some("gauge"));
//! assert_eq!(MetricKind::Histogram.keyword(), None);
//! ```

use serde::{Deserialize, Serialize};

use super::keywords::{self, KeywordId};

/// Kind of an exported metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricKind {
    Counter,
    Gauge,
    Timer,
    Text,
    Histogram,
}

/// Every kind, in declaration order.
pub const METRIC_KINDS: &[MetricKind] = &[
    MetricKind::Counter,
    MetricKind::Gauge,
    MetricKind::Timer,
    MetricKind::Text,
    MetricKind::Histogram,
];

impl MetricKind {
    /// Lowercase name of the kind, defined for every kind.
    pub fn as_str(self) -> &'static str {
        match self {
            MetricKind::Counter => "counter",
            MetricKind::Gauge => "gauge",
            MetricKind::Timer => "timer",
            MetricKind::Text => "text",
            MetricKind::Histogram => "histogram",
        }
    }

    /// Declaration keyword for this kind, if the language has one.
    pub fn keyword(self) -> Option<&'static str> {
        self.keyword_id().map(keywords::as_str)
    }

    fn keyword_id(self) -> Option<KeywordId> {
        match self {
            MetricKind::Counter => Some(KeywordId::Counter),
            MetricKind::Gauge => Some(KeywordId::Gauge),
            MetricKind::Timer => Some(KeywordId::Timer),
            MetricKind::Text | MetricKind::Histogram => None,
        }
    }
}

impl std::fmt::Display for MetricKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
