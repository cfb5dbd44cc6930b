//! End-to-end checks of the public unparsing API against the documented renderings.

use mtail_unparse::ast::Node;
use mtail_unparse::lang::metrics::MetricKind;
use mtail_unparse::lang::operators::{BinaryOp, UnaryOp};
use mtail_unparse::{UnparseConfig, Unparsed, Unparser, parse_tree_json, tree_to_json, unparse, unparse_with_config};

// ============================================================================
// Documented renderings
// ============================================================================

#[test]
fn numeric_renders_decimal() {
    assert_eq!(unparse(&Node::num(3)), "3");
}

#[test]
fn binary_plus_renders_with_spaces() {
    let tree = Node::binary(Node::id("a"), BinaryOp::Plus, Node::num(3));
    assert_eq!(unparse(&tree), "a + 3");
}

#[test]
fn conditional_renders_indented_block() {
    let tree = Node::cond(
        Some(Node::regex("foo")),
        vec![Node::decl(MetricKind::Counter, "bar", Vec::<String>::new())],
    );
    assert_eq!(unparse(&tree), "/foo/ {\n  counter bar\n}");
}

#[test]
fn expression_list_is_comma_separated() {
    let tree = Node::exprs(vec![Node::id("x"), Node::id("y"), Node::id("z")]);
    assert_eq!(unparse(&tree), "x, y, z");
}

#[test]
fn builtin_renders_call() {
    let tree = Node::builtin("len", Some(vec![Node::id("s")]));
    assert_eq!(unparse(&tree), "len(s)");
}

#[test]
fn declaration_renders_by_clause() {
    let tree = Node::decl(MetricKind::Counter, "req", ["code", "method"]);
    assert_eq!(unparse(&tree), "counter req by code, method");
}

// ============================================================================
// Whole programs
// ============================================================================

#[test]
fn closing_brace_lines_up_with_opener() {
    let tree = Node::stmts(vec![Node::deco(
        "syslog",
        vec![Node::cond(
            Some(Node::regex("x")),
            vec![Node::stmts(vec![Node::unary(UnaryOp::Increment, Node::id("n"))])],
        )],
    )]);
    let text = unparse(&tree);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines, vec!["@syslog {", "  /x/ {", "    n++", "  }", "}"]);
    assert!(text.ends_with("}\n"));
}

#[test]
fn rendering_is_independent_of_siblings() {
    let decl = Node::decl(MetricKind::Gauge, "temp", ["room"]);
    let alone = unparse(&Node::stmts(vec![decl.clone()]));
    let with_siblings = unparse(&Node::stmts(vec![Node::Next, decl, Node::Next]));
    assert_eq!(with_siblings, format!("next\n{alone}next\n"));
}

#[test]
fn unparser_and_free_function_agree() {
    let tree = Node::def("f", vec![Node::binary(Node::id("x"), BinaryOp::Shl, Node::num(2))]);
    assert_eq!(Unparser::new().unparse(&tree), unparse(&tree));
    assert_eq!(Unparsed(&tree).to_string(), unparse(&tree));
    assert_eq!(
        Unparser::with_config(UnparseConfig::new().with_indent_width(6)).unparse(&tree),
        unparse_with_config(&tree, UnparseConfig::new().with_indent_width(6))
    );
}

// ============================================================================
// Tree dumps
// ============================================================================

#[test]
fn dump_renders_same_as_tree() {
    let tree = Node::stmts(vec![
        Node::decl(MetricKind::Timer, "latency", ["path"]),
        Node::cond(
            Some(Node::regex("took (?P<ms>\\d+)ms")),
            vec![Node::binary(
                Node::index(Node::id("latency"), Node::capref("path")),
                BinaryOp::Assign,
                Node::capref("ms"),
            )],
        ),
    ]);
    let json = tree_to_json(&tree).expect("encode");
    let loaded = parse_tree_json(&json).expect("decode");
    assert_eq!(unparse(&loaded), unparse(&tree));
}

#[test]
fn dump_with_unknown_node_is_rejected() {
    let err = parse_tree_json(r#"{"StatementList": [{"Lambda": {"body": []}}]}"#).unwrap_err();
    assert!(err.to_string().contains("malformed tree"), "got: {err}");
}
