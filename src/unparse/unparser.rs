//! Core unparsing logic
//!
//! Walks a program tree depth-first and writes it back out as program text.

use mtail_core::lang::keywords::{self, KeywordId};
use mtail_core::lang::operators::UnaryOp;
use mtail_syntax::ast::*;

use super::config::UnparseConfig;
use super::writer::LineWriter;

/// Unparser that turns a tree back into program text.
///
/// One instance renders one tree: [`Unparser::unparse`] consumes it.
pub struct Unparser {
    writer: LineWriter,
}

impl Default for Unparser {
    fn default() -> Self {
        Self::new()
    }
}

impl Unparser {
    pub fn new() -> Self {
        Self::with_config(UnparseConfig::default())
    }

    pub fn with_config(config: UnparseConfig) -> Self {
        Self {
            writer: LineWriter::new(config),
        }
    }

    /// Unparse a tree and return the program text
    #[tracing::instrument(skip_all, fields(root = node.kind_name(), nodes = node.node_count()))]
    pub fn unparse(mut self, node: &Node) -> String {
        self.unparse_node(node);
        let text = self.writer.finish();
        tracing::trace!(bytes = text.len(), "unparsed tree");
        text
    }

    fn unparse_node(&mut self, node: &Node) {
        match node {
            Node::StatementList(children) => {
                for child in children {
                    self.unparse_node(child);
                    self.writer.newline();
                }
            }
            Node::ExpressionList(list) => self.unparse_expr_list(list),
            Node::Conditional(cond) => {
                if let Some(guard) = &cond.guard {
                    self.unparse_node(guard);
                }
                self.writer.emit(" {");
                self.unparse_block_body(&cond.body);
            }
            Node::Regex { pattern } => {
                self.writer.emit("/");
                self.writer.emit(&pattern.replace('/', "\\/"));
                self.writer.emit("/");
            }
            Node::BinaryExpr(expr) => {
                self.unparse_node(&expr.lhs);
                self.writer.emit(expr.op.token());
                self.unparse_node(&expr.rhs);
            }
            Node::UnaryExpr(expr) => match expr.op {
                UnaryOp::Increment => {
                    self.unparse_node(&expr.operand);
                    self.writer.emit(UnaryOp::Increment.spelling());
                }
                UnaryOp::BitNot => {
                    self.writer.emit(" ");
                    self.writer.emit(UnaryOp::BitNot.spelling());
                    self.unparse_node(&expr.operand);
                }
            },
            // No escaping: embedded quotes and backslashes are written as-is.
            Node::StringLiteral { text } => {
                self.writer.emit("\"");
                self.writer.emit(text);
                self.writer.emit("\"");
            }
            Node::Identifier { name } => self.writer.emit(name),
            Node::CaptureRef { name } => {
                self.writer.emit("$");
                self.writer.emit(name);
            }
            Node::Builtin(call) => {
                self.writer.emit(&call.name);
                self.writer.emit("(");
                if let Some(args) = &call.args {
                    self.unparse_expr_list(args);
                }
                self.writer.emit(")");
            }
            Node::IndexedExpr(expr) => {
                self.unparse_node(&expr.base);
                self.writer.emit("[");
                self.unparse_node(&expr.index);
                self.writer.emit("]");
            }
            Node::Declaration(decl) => self.unparse_declaration(decl),
            Node::NumericExpr { value } => self.writer.emit(&value.to_string()),
            Node::FunctionDef(def) => {
                self.writer.emit(keywords::as_str(KeywordId::Def));
                self.writer.emit(" ");
                self.writer.emit(&def.name);
                self.writer.emit(" {");
                self.unparse_block_body(&def.body);
            }
            Node::Decorator(deco) => {
                self.writer.emit("@");
                self.writer.emit(&deco.name);
                self.writer.emit(" {");
                self.unparse_block_body(&deco.body);
            }
            Node::Next => self.writer.emit(keywords::as_str(KeywordId::Next)),
        }
    }

    fn unparse_expr_list(&mut self, list: &ExprList) {
        for (i, child) in list.children.iter().enumerate() {
            if i > 0 {
                self.writer.emit(", ");
            }
            self.unparse_node(child);
        }
    }

    /// Kind keyword (when the kind has one), name, then the optional `by` clause.
    fn unparse_declaration(&mut self, decl: &Declaration) {
        if let Some(kw) = decl.kind.keyword() {
            self.writer.emit(kw);
            self.writer.emit(" ");
        }
        self.writer.emit(&decl.name);
        if !decl.keys.is_empty() {
            self.writer.emit(" ");
            self.writer.emit(keywords::as_str(KeywordId::By));
            self.writer.emit(" ");
            self.writer.emit(&decl.keys.join(", "));
        }
    }

    /// Everything after a block's opening `{`: the body one level deeper, then `}` left pending.
    ///
    /// Each body child ends up on its own line(s); a child that already terminated its lines (a statement list)
    /// leaves nothing pending, so no blank line is added.
    fn unparse_block_body(&mut self, body: &[Node]) {
        self.writer.newline();
        self.writer.indent();
        for child in body {
            self.unparse_node(child);
            self.writer.flush_pending();
        }
        self.writer.outdent();
        self.writer.emit("}");
    }
}
