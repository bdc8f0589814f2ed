use quill_ast::builder::{ParamList, append_statement};
use quill_ast::nodes::{Block, Node};

fn as_block(node: &Node) -> &Block {
    match node {
        Node::Block(block) => block,
        other => panic!("expected a block, got {other:?}"),
    }
}

#[test]
fn test_append_to_absent_creates_singleton_block() {
    let result = append_statement(None, Node::identifier("s"));
    let block = as_block(&result);
    assert_eq!(block.statements, vec![Node::identifier("s")]);
}

#[test]
fn test_append_to_block_extends_it() {
    let first = append_statement(None, Node::int_literal(1));
    let second = append_statement(Some(first), Node::int_literal(2));
    let block = as_block(&second);
    assert_eq!(
        block.statements,
        vec![Node::int_literal(1), Node::int_literal(2)]
    );
}

#[test]
fn test_append_coerces_lone_statement_into_block() {
    let lone = Node::var_decl("x", Some(Node::int_literal(1)));
    let result = append_statement(Some(lone.clone()), Node::identifier("y"));
    let block = as_block(&result);
    assert_eq!(block.statements.len(), 2);
    assert_eq!(block.statements[0], lone);
    assert_eq!(block.statements[1], Node::identifier("y"));
}

#[test]
fn test_append_count_survives_capacity_growth() {
    let count = Block::INITIAL_CAPACITY * 8 + 3;
    let mut current = None;
    for i in 0..count {
        current = Some(append_statement(current, Node::int_literal(i as i64)));
    }
    let current = current.unwrap();
    let block = as_block(&current);
    assert_eq!(block.len(), count);
    for (i, stmt) in block.statements.iter().enumerate() {
        assert_eq!(stmt, &Node::int_literal(i as i64));
    }
}

#[test]
fn test_fresh_block_capacity() {
    let block = Block::new();
    assert!(block.is_empty());
    assert_eq!(block.statements.capacity(), Block::INITIAL_CAPACITY);
}

#[test]
fn test_param_list_preserves_declaration_order() {
    let mut params = ParamList::new();
    assert!(params.is_empty());
    for name in ["a", "b", "c", "d", "e"] {
        params.push(Node::identifier(name));
    }
    assert_eq!(params.len(), 5);
    assert_eq!(
        params.into_vec(),
        vec![
            Node::identifier("a"),
            Node::identifier("b"),
            Node::identifier("c"),
            Node::identifier("d"),
            Node::identifier("e"),
        ]
    );
}

#[test]
fn test_param_list_feeds_function_node() {
    let mut params = ParamList::new();
    params.push(Node::identifier("a"));
    params.push(Node::identifier("b"));
    let func = Node::function("f", params.into_vec(), Node::type_node("int"), Node::block());
    match func {
        Node::Function(def) => assert_eq!(def.params.len(), 2),
        other => panic!("expected a function, got {other:?}"),
    }
}
