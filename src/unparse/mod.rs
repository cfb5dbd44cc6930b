//! mtail Unparser
//!
//! Turns a program tree back into program text, for debugging and introspection of what the front-end parsed.
//! The layout is canonical rather than faithful to the original source:
//! - 2-space indentation
//! - Single spaces around binary operators
//! - Double quotes for strings, slashes for regexes
//!
//! Re-parsing the output is not guaranteed to give back an identical tree.

mod config;
mod unparser;
mod writer;

use std::fmt;

use mtail_syntax::ast::Node;

pub use config::{MAX_INDENT_WIDTH, UnparseConfig};
pub use unparser::Unparser;

/// Unparse a tree with default settings
pub fn unparse(node: &Node) -> String {
    Unparser::new().unparse(node)
}

/// Unparse a tree with custom configuration
pub fn unparse_with_config(node: &Node, config: UnparseConfig) -> String {
    Unparser::with_config(config).unparse(node)
}

/// Display adapter: `format!("{}", Unparsed(&tree))` writes the program text.
pub struct Unparsed<'a>(pub &'a Node);

impl fmt::Display for Unparsed<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&unparse(self.0))
    }
}
