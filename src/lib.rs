#![forbid(unsafe_code)]
//! mtail program unparser
//!
//! Renders the syntax tree of an mtail program back into canonical program text, so a developer can see what the
//! front-end actually parsed. This crate provides the unparser, loading of JSON tree dumps, and a small CLI.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **True invariants**: If a panic represents an unparser bug (logic error), use `.expect("INVARIANT: reason")`
//!   with a clear explanation.
//!
//! ## Examples
//! ```rust
//! use mtail_unparse::ast::Node;
//! use mtail_unparse::lang::metrics::MetricKind;
//! use mtail_unparse::unparse;
//!
//! let tree = Node::cond(Some(Node::regex("foo")), vec![Node::decl(MetricKind::Counter, "bar", Vec::<String>::new())]);
//! assert_eq!(unparse(&tree), "/foo/ {\n  counter bar\n}");
//! ```

pub mod cli;
pub mod dump;
pub mod unparse;

pub use mtail_core::lang;
pub use mtail_syntax::ast;

pub use dump::{DumpError, parse_tree_json, read_tree, tree_to_json};
pub use unparse::{MAX_INDENT_WIDTH, UnparseConfig, Unparsed, Unparser, unparse, unparse_with_config};
