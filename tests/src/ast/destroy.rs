use quill_ast::builder::{ParamList, append_statement};
use quill_ast::destroy::destroy;
use quill_ast::nodes::Node;
use quill_ast::tokens;

#[test]
fn test_destroy_absent_root_is_a_noop() {
    destroy(None);
}

#[test]
fn test_destroy_full_pipeline_tree() {
    let op = tokens::operator("+").unwrap();
    let params = vec![Node::identifier("a"), Node::identifier("b")];
    let body = append_statement(
        None,
        Node::binary(op, Node::identifier("a"), Node::identifier("b")),
    );
    let func = Node::function("add", params, Node::type_node("int"), body);
    let root = append_statement(Some(Node::use_node("std", "io")), func);
    destroy(Some(root));
}

#[test]
fn test_destroy_partial_tree() {
    let partial = Node::if_node(
        Node::bool_literal(true),
        Node::var_decl("x", None),
        None,
    );
    destroy(Some(partial));
}

#[test]
fn test_detached_param_list_owes_nothing() {
    let mut params = ParamList::new();
    params.push(Node::identifier("a"));
    params.push(Node::var_decl("b", Some(Node::int_literal(2))));
    // Never attached to a function; dropping it is the whole cleanup.
    drop(params);
}

#[test]
fn test_destroy_deep_chain_without_stack_overflow() {
    let mut node = Node::int_literal(0);
    for _ in 0..50_000 {
        node = Node::mod_node("m", node);
    }
    destroy(Some(node));
}

#[test]
fn test_destroy_wide_block() {
    let mut current = None;
    for i in 0..10_000 {
        current = Some(append_statement(
            current,
            Node::var_decl(format!("v{i}"), Some(Node::int_literal(i))),
        ));
    }
    destroy(current);
}
