//! Provide the canonical language vocabulary shared by mtail program tooling.
//!
//! This crate is intentionally small and dependency-light: it knows the spellings of metric kinds, operators and
//! the handful of reserved words that tooling writes back out, and nothing about trees or IO.
//!
//! ## Notes
//!
//! - This is a “vocabulary” crate: **no IO**, no global state, and no AST types.
//! - Serialization derives exist so syntax trees carrying these ids can be dumped and reloaded as JSON.

pub mod lang;
