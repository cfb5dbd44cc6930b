//! Abstract Syntax Tree definitions for mtail programs
//!
//! Trees are plain owned data. They serialize to an externally tagged JSON form, e.g.
//! `{"Identifier": {"name": "line"}}`, which is what debugging tools exchange as a tree dump.

use mtail_core::lang::metrics::MetricKind;
use mtail_core::lang::operators::{BinaryOp, UnaryOp};
use serde::{Deserialize, Serialize};

/// Identifier text as written in the program
pub type Ident = String;

/// One node of a program tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    /// Statements, one per line
    StatementList(Vec<Node>),
    ExpressionList(ExprList),
    Conditional(Conditional),
    Regex { pattern: String },
    BinaryExpr(BinaryExpr),
    UnaryExpr(UnaryExpr),
    /// Raw string content, without the surrounding quotes
    StringLiteral { text: String },
    Identifier { name: Ident },
    /// `$name` reference to a regex capture group
    CaptureRef { name: Ident },
    Builtin(Builtin),
    IndexedExpr(IndexedExpr),
    Declaration(Declaration),
    NumericExpr { value: i64 },
    FunctionDef(FunctionDef),
    Decorator(Decorator),
    Next,
}

/// Comma separated expressions (call arguments)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExprList {
    pub children: Vec<Node>,
}

/// `guard { body }`; a missing guard is an unconditional block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conditional {
    #[serde(default)]
    pub guard: Option<Box<Node>>,
    pub body: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinaryExpr {
    pub lhs: Box<Node>,
    pub op: BinaryOp,
    pub rhs: Box<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnaryExpr {
    pub op: UnaryOp,
    pub operand: Box<Node>,
}

/// Builtin function call; `args` is absent for a call written without arguments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Builtin {
    pub name: Ident,
    #[serde(default)]
    pub args: Option<ExprList>,
}

/// `base[index]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexedExpr {
    pub base: Box<Node>,
    pub index: Box<Node>,
}

/// Metric declaration, e.g. `counter requests by code, method`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Declaration {
    pub kind: MetricKind,
    pub name: Ident,
    /// Grouping keys of the `by` clause, in order
    #[serde(default)]
    pub keys: Vec<Ident>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDef {
    pub name: Ident,
    pub body: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decorator {
    pub name: Ident,
    pub body: Vec<Node>,
}

impl Node {
    // ---- constructors -------------------------------------------------------

    pub fn stmts(children: Vec<Node>) -> Self {
        Node::StatementList(children)
    }

    pub fn exprs(children: Vec<Node>) -> Self {
        Node::ExpressionList(ExprList { children })
    }

    pub fn cond(guard: Option<Node>, body: Vec<Node>) -> Self {
        Node::Conditional(Conditional {
            guard: guard.map(Box::new),
            body,
        })
    }

    pub fn regex(pattern: impl Into<String>) -> Self {
        Node::Regex {
            pattern: pattern.into(),
        }
    }

    pub fn binary(lhs: Node, op: BinaryOp, rhs: Node) -> Self {
        Node::BinaryExpr(BinaryExpr {
            lhs: Box::new(lhs),
            op,
            rhs: Box::new(rhs),
        })
    }

    pub fn unary(op: UnaryOp, operand: Node) -> Self {
        Node::UnaryExpr(UnaryExpr {
            op,
            operand: Box::new(operand),
        })
    }

    pub fn string(text: impl Into<String>) -> Self {
        Node::StringLiteral { text: text.into() }
    }

    pub fn id(name: impl Into<Ident>) -> Self {
        Node::Identifier { name: name.into() }
    }

    pub fn capref(name: impl Into<Ident>) -> Self {
        Node::CaptureRef { name: name.into() }
    }

    pub fn builtin(name: impl Into<Ident>, args: Option<Vec<Node>>) -> Self {
        Node::Builtin(Builtin {
            name: name.into(),
            args: args.map(|children| ExprList { children }),
        })
    }

    pub fn index(base: Node, index: Node) -> Self {
        Node::IndexedExpr(IndexedExpr {
            base: Box::new(base),
            index: Box::new(index),
        })
    }

    pub fn decl<I, S>(kind: MetricKind, name: impl Into<Ident>, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Ident>,
    {
        Node::Declaration(Declaration {
            kind,
            name: name.into(),
            keys: keys.into_iter().map(Into::into).collect(),
        })
    }

    pub fn num(value: i64) -> Self {
        Node::NumericExpr { value }
    }

    pub fn def(name: impl Into<Ident>, body: Vec<Node>) -> Self {
        Node::FunctionDef(FunctionDef {
            name: name.into(),
            body,
        })
    }

    pub fn deco(name: impl Into<Ident>, body: Vec<Node>) -> Self {
        Node::Decorator(Decorator {
            name: name.into(),
            body,
        })
    }

    // ---- queries ------------------------------------------------------------

    /// Name of the variant, for diagnostics and trace fields
    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::StatementList(_) => "StatementList",
            Node::ExpressionList(_) => "ExpressionList",
            Node::Conditional(_) => "Conditional",
            Node::Regex { .. } => "Regex",
            Node::BinaryExpr(_) => "BinaryExpr",
            Node::UnaryExpr(_) => "UnaryExpr",
            Node::StringLiteral { .. } => "StringLiteral",
            Node::Identifier { .. } => "Identifier",
            Node::CaptureRef { .. } => "CaptureRef",
            Node::Builtin(_) => "Builtin",
            Node::IndexedExpr(_) => "IndexedExpr",
            Node::Declaration(_) => "Declaration",
            Node::NumericExpr { .. } => "NumericExpr",
            Node::FunctionDef(_) => "FunctionDef",
            Node::Decorator(_) => "Decorator",
            Node::Next => "Next",
        }
    }

    /// Number of nodes in this subtree, including `self`.
    ///
    /// A builtin's argument list counts as one node, matching how it renders.
    pub fn node_count(&self) -> usize {
        fn sum(nodes: &[Node]) -> usize {
            nodes.iter().map(Node::node_count).sum()
        }

        1 + match self {
            Node::StatementList(children) => sum(children),
            Node::ExpressionList(list) => sum(&list.children),
            Node::Conditional(c) => c.guard.as_deref().map_or(0, Node::node_count) + sum(&c.body),
            Node::BinaryExpr(b) => b.lhs.node_count() + b.rhs.node_count(),
            Node::UnaryExpr(u) => u.operand.node_count(),
            Node::Builtin(b) => b.args.as_ref().map_or(0, |args| 1 + sum(&args.children)),
            Node::IndexedExpr(i) => i.base.node_count() + i.index.node_count(),
            Node::FunctionDef(f) => sum(&f.body),
            Node::Decorator(d) => sum(&d.body),
            Node::Regex { .. }
            | Node::StringLiteral { .. }
            | Node::Identifier { .. }
            | Node::CaptureRef { .. }
            | Node::Declaration(_)
            | Node::NumericExpr { .. }
            | Node::Next => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_name_per_variant() {
        assert_eq!(Node::Next.kind_name(), "Next");
        assert_eq!(Node::num(1).kind_name(), "NumericExpr");
        assert_eq!(Node::cond(None, vec![]).kind_name(), "Conditional");
        assert_eq!(Node::deco("d", vec![]).kind_name(), "Decorator");
    }

    #[test]
    fn test_node_count_leaf() {
        assert_eq!(Node::id("x").node_count(), 1);
        assert_eq!(Node::decl(MetricKind::Counter, "c", ["a", "b"]).node_count(), 1);
    }

    #[test]
    fn test_node_count_nested() {
        let tree = Node::stmts(vec![Node::cond(
            Some(Node::regex("foo")),
            vec![Node::unary(UnaryOp::Increment, Node::id("c"))],
        )]);
        // stmts + cond + regex + unary + id
        assert_eq!(tree.node_count(), 5);
    }

    #[test]
    fn test_node_count_builtin_args() {
        assert_eq!(Node::builtin("timestamp", None).node_count(), 1);
        assert_eq!(Node::builtin("len", Some(vec![Node::id("s")])).node_count(), 3);
    }

    #[test]
    fn test_decl_constructor_collects_keys() {
        let Node::Declaration(d) = Node::decl(MetricKind::Gauge, "g", vec!["host".to_string()]) else {
            panic!("expected declaration");
        };
        assert_eq!(d.kind, MetricKind::Gauge);
        assert_eq!(d.keys, vec!["host"]);
    }

    #[test]
    fn test_json_shape_is_externally_tagged() {
        let json = serde_json::to_value(Node::binary(Node::id("a"), BinaryOp::Plus, Node::num(3))).unwrap();
        assert_eq!(json["BinaryExpr"]["op"], "+");
        assert_eq!(json["BinaryExpr"]["lhs"]["Identifier"]["name"], "a");
        assert_eq!(json["BinaryExpr"]["rhs"]["NumericExpr"]["value"], 3);
    }

    #[test]
    fn test_json_unit_variant_and_defaults() {
        let next: Node = serde_json::from_str(r#""Next""#).unwrap();
        assert_eq!(next, Node::Next);

        let decl: Node = serde_json::from_str(r#"{"Declaration": {"kind": "timer", "name": "t"}}"#).unwrap();
        assert_eq!(decl, Node::decl(MetricKind::Timer, "t", Vec::<String>::new()));

        let call: Node = serde_json::from_str(r#"{"Builtin": {"name": "timestamp"}}"#).unwrap();
        assert_eq!(call, Node::builtin("timestamp", None));
    }

    #[test]
    fn test_json_rejects_unknown_variant() {
        let err = serde_json::from_str::<Node>(r#"{"WhileLoop": {}}"#);
        assert!(err.is_err());
    }
}
