//! Constructors and accessors for the node model.
//!
//! One factory per variant, O(1) each: allocate, set the discriminant, wire
//! the fields. No validation beyond argument shape and no recursion happen
//! here; the external parser calls these bottom-up as it reduces
//! productions. Text arguments are always copied into node-owned storage,
//! never aliased. Allocation failure aborts the process (the global
//! allocator's policy); there is deliberately no fallible variant of the
//! construction API.

use crate::nodes::{
    BinaryExpression, Block, FunctionDefinition, IfStatement, ModDefinition, Node, TypeCall,
    TypeNode, UseDirective, VarDecl,
};

impl Block {
    /// Statement capacity a fresh block starts with.
    pub const INITIAL_CAPACITY: usize = 4;

    #[must_use]
    pub fn new() -> Self {
        Block {
            statements: Vec::with_capacity(Self::INITIAL_CAPACITY),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

impl Default for Block {
    fn default() -> Self {
        Block::new()
    }
}

impl BinaryExpression {
    #[must_use]
    pub fn new(op: &'static str, left: Node, right: Node) -> Self {
        BinaryExpression { op, left, right }
    }
}

impl VarDecl {
    #[must_use]
    pub fn new(name: impl Into<String>, value: Option<Node>) -> Self {
        VarDecl {
            name: name.into(),
            value,
        }
    }
}

impl TypeCall {
    #[must_use]
    pub fn new(type_name: &'static str, args: Vec<Node>) -> Self {
        TypeCall { type_name, args }
    }
}

impl FunctionDefinition {
    #[must_use]
    pub fn new(name: impl Into<String>, params: Vec<Node>, return_type: Node, body: Node) -> Self {
        FunctionDefinition {
            name: name.into(),
            params,
            return_type,
            body,
        }
    }
}

impl TypeNode {
    #[must_use]
    pub fn new(type_name: impl Into<String>) -> Self {
        TypeNode {
            type_name: type_name.into(),
        }
    }
}

impl IfStatement {
    #[must_use]
    pub fn new(condition: Node, then_branch: Node, else_branch: Option<Node>) -> Self {
        IfStatement {
            condition,
            then_branch,
            else_branch,
        }
    }
}

impl ModDefinition {
    #[must_use]
    pub fn new(name: impl Into<String>, body: Node) -> Self {
        ModDefinition {
            name: name.into(),
            body,
        }
    }
}

impl UseDirective {
    #[must_use]
    pub fn new(module: impl Into<String>, name: impl Into<String>) -> Self {
        UseDirective {
            module: module.into(),
            name: name.into(),
        }
    }
}

impl Node {
    #[must_use]
    pub fn int_literal(value: i64) -> Self {
        Node::IntLiteral(value)
    }

    #[must_use]
    pub fn float_literal(value: f64) -> Self {
        Node::FloatLiteral(value)
    }

    #[must_use]
    pub fn char_literal(value: char) -> Self {
        Node::CharLiteral(value)
    }

    #[must_use]
    pub fn string_literal(value: impl Into<String>) -> Self {
        Node::StringLiteral(value.into())
    }

    #[must_use]
    pub fn bool_literal(value: bool) -> Self {
        Node::BoolLiteral(value)
    }

    #[must_use]
    pub fn identifier(name: impl Into<String>) -> Self {
        Node::Identifier(name.into())
    }

    /// A fresh, empty block with capacity [`Block::INITIAL_CAPACITY`].
    #[must_use]
    pub fn block() -> Self {
        Node::Block(Box::new(Block::new()))
    }

    /// `op` must be an interned spelling from [`crate::tokens`].
    #[must_use]
    pub fn binary(op: &'static str, left: Node, right: Node) -> Self {
        Node::Binary(Box::new(BinaryExpression::new(op, left, right)))
    }

    #[must_use]
    pub fn var_decl(name: impl Into<String>, value: Option<Node>) -> Self {
        Node::VarDecl(Box::new(VarDecl::new(name, value)))
    }

    /// `type_name` must be an interned token from [`crate::tokens`].
    #[must_use]
    pub fn type_call(type_name: &'static str, args: Vec<Node>) -> Self {
        Node::TypeCall(Box::new(TypeCall::new(type_name, args)))
    }

    #[must_use]
    pub fn function(
        name: impl Into<String>,
        params: Vec<Node>,
        return_type: Node,
        body: Node,
    ) -> Self {
        Node::Function(Box::new(FunctionDefinition::new(
            name,
            params,
            return_type,
            body,
        )))
    }

    #[must_use]
    pub fn type_node(type_name: impl Into<String>) -> Self {
        Node::Type(Box::new(TypeNode::new(type_name)))
    }

    #[must_use]
    pub fn if_node(condition: Node, then_branch: Node, else_branch: Option<Node>) -> Self {
        Node::If(Box::new(IfStatement::new(
            condition,
            then_branch,
            else_branch,
        )))
    }

    #[must_use]
    pub fn mod_node(name: impl Into<String>, body: Node) -> Self {
        Node::Mod(Box::new(ModDefinition::new(name, body)))
    }

    #[must_use]
    pub fn use_node(module: impl Into<String>, name: impl Into<String>) -> Self {
        Node::Use(Box::new(UseDirective::new(module, name)))
    }

    /// Owned children in attachment order. The printer and the deallocator
    /// visit children in exactly this order.
    #[must_use]
    pub fn children(&self) -> Vec<&Node> {
        match self {
            Node::IntLiteral(_)
            | Node::FloatLiteral(_)
            | Node::CharLiteral(_)
            | Node::StringLiteral(_)
            | Node::BoolLiteral(_)
            | Node::Identifier(_)
            | Node::Type(_)
            | Node::Use(_) => Vec::new(),
            Node::Block(block) => block.statements.iter().collect(),
            Node::Binary(binary) => vec![&binary.left, &binary.right],
            Node::VarDecl(decl) => decl.value.iter().collect(),
            Node::TypeCall(call) => call.args.iter().collect(),
            Node::Function(func) => {
                let mut children: Vec<&Node> = func.params.iter().collect();
                children.push(&func.return_type);
                children.push(&func.body);
                children
            }
            Node::If(if_stmt) => {
                let mut children = vec![&if_stmt.condition, &if_stmt.then_branch];
                children.extend(if_stmt.else_branch.iter());
                children
            }
            Node::Mod(module) => vec![&module.body],
        }
    }
}
