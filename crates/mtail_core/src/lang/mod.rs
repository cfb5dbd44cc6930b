//! mtail language vocabulary registries.
//!
//! Callers work with **stable IDs** (`MetricKind`, `BinaryOp`, `UnaryOp`, `KeywordId`) and look up spellings via
//! registry tables, instead of comparing strings at each use site.
//!
//! ## Notes
//! - Registries are **pure**: no AST types, no IO, no side effects.
//!
//! ## Examples
//! ```rust
//! use mtail_core::lang::operators::{self, BinaryOp};
//!
//! assert_eq!(operators::from_str("<<"), Some(BinaryOp::Shl));
//! assert_eq!(BinaryOp::Shl.token(), " << ");
//! ```

pub mod keywords;
pub mod metrics;
pub mod operators;
