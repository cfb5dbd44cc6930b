//! Syntax tree for mtail programs.
//!
//! The tree is produced by an upstream front-end (lexer, parser, checker) and consumed read-only by tooling such as
//! the unparser. This crate only defines the shape of the tree; it does no parsing and no checking.
//!
//! ## Notes
//! - The node set is closed: [`ast::Node`] is an ordinary enum, so every consumer can match it exhaustively.
//! - Vocabulary identity (operators, metric kinds) comes from `mtail_core::lang` registries.
//!
//! ## Examples
//! ```rust
//! use mtail_syntax::ast::Node;
//! use mtail_core::lang::operators::BinaryOp;
//!
//! let sum = Node::binary(Node::id("a"), BinaryOp::Plus, Node::num(3));
//! assert_eq!(sum.kind_name(), "BinaryExpr");
//! assert_eq!(sum.node_count(), 3);
//! ```

pub mod ast;
