//! Tree dumps: program trees exchanged as JSON.
//!
//! The front-end can write the tree it built to a file; debugging tools load it back here. The format is the
//! externally tagged serde form of [`Node`], e.g. `{"Identifier": {"name": "line"}}`.
//!
//! ## Notes
//! - Anything that does not decode to a [`Node`] (an unknown variant, an unknown operator or metric kind, a missing
//!   field) is reported as [`DumpError::MalformedTree`] with the position serde stopped at.

use std::fs;
use std::path::Path;

use miette::Diagnostic;
use thiserror::Error;

use mtail_syntax::ast::Node;

/// Errors from loading or writing a tree dump
#[derive(Debug, Error, Diagnostic)]
pub enum DumpError {
    #[error("malformed tree at line {line}, column {column}: {message}")]
    #[diagnostic(
        code(mtail_unparse::malformed_tree),
        help("each node is an object keyed by its variant name, e.g. `Identifier`; `Next` is the bare string \"Next\"")
    )]
    MalformedTree { message: String, line: usize, column: usize },

    #[error("failed to encode tree: {0}")]
    #[diagnostic(code(mtail_unparse::encode))]
    Encode(String),

    #[error("failed to read tree dump: {0}")]
    #[diagnostic(code(mtail_unparse::io))]
    Io(#[from] std::io::Error),
}

/// Decode a tree from JSON text
pub fn parse_tree_json(source: &str) -> Result<Node, DumpError> {
    serde_json::from_str(source).map_err(|e| DumpError::MalformedTree {
        message: e.to_string(),
        line: e.line(),
        column: e.column(),
    })
}

/// Read and decode a tree dump from a file
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn read_tree(path: &Path) -> Result<Node, DumpError> {
    let source = fs::read_to_string(path)?;
    tracing::debug!(bytes = source.len(), "read tree dump");
    parse_tree_json(&source)
}

/// Encode a tree as pretty-printed JSON
pub fn tree_to_json(node: &Node) -> Result<String, DumpError> {
    serde_json::to_string_pretty(node).map_err(|e| DumpError::Encode(e.to_string()))
}
