//! Tree teardown.
//!
//! Releases every allocation reachable from the root through owned edges
//! exactly once. The walk mirrors the ownership structure of the node
//! model: owned text and backing storage drop with each node shell, owned
//! children are detached onto a worklist and released in turn. Interned
//! operator and type-name tokens are borrowed and are never released.
//!
//! The worklist keeps native stack use constant, so teardown is safe on
//! trees far deeper than a recursive free could survive. An absent root is
//! a no-op, and a partially built tree (optional children missing) tears
//! down the same way a complete one does.

use crate::nodes::Node;

/// Releases the tree rooted at `root`. Total over absent and partial trees,
/// so drivers should call it on parse-failure paths as well as on success.
pub fn destroy(root: Option<Node>) {
    let mut pending: Vec<Node> = Vec::new();
    pending.extend(root);

    while let Some(node) = pending.pop() {
        match node {
            Node::IntLiteral(_)
            | Node::FloatLiteral(_)
            | Node::CharLiteral(_)
            | Node::BoolLiteral(_)
            | Node::StringLiteral(_)
            | Node::Identifier(_)
            | Node::Type(_)
            | Node::Use(_) => {}
            Node::Block(block) => pending.extend(block.statements),
            Node::Binary(binary) => {
                pending.push(binary.left);
                pending.push(binary.right);
            }
            Node::VarDecl(decl) => pending.extend(decl.value),
            Node::TypeCall(call) => pending.extend(call.args),
            Node::Function(func) => {
                pending.extend(func.params);
                pending.push(func.return_type);
                pending.push(func.body);
            }
            Node::If(if_stmt) => {
                pending.push(if_stmt.condition);
                pending.push(if_stmt.then_branch);
                pending.extend(if_stmt.else_branch);
            }
            Node::Mod(module) => pending.push(module.body),
        }
    }
}
