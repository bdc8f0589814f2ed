//! Incremental tree construction driven by the external parser.
//!
//! Two mutation operations exist, both used only while a tree is still being
//! built: statement append with block-flattening coercion, and
//! parameter/argument staging through [`ParamList`]. Once the parser hands
//! the root to the driver the tree is read-only until [`crate::destroy`]
//! consumes it.

use crate::nodes::{Block, Node};

/// Appends `stmt` to a statement position and returns the resulting block.
///
/// The statement position is coerced to a [`Block`] on the way:
///
/// - absent position: a fresh empty block is created first;
/// - a block: `stmt` becomes its newest element;
/// - any other node: it is wrapped into a new one-element block, keeping it
///   first, and `stmt` is appended after it (block-flattening coercion).
///
/// Capacity starts at [`Block::INITIAL_CAPACITY`] and grows geometrically,
/// so `k` appends always yield a block of exactly `k` statements in call
/// order regardless of reallocation.
#[must_use]
pub fn append_statement(current: Option<Node>, stmt: Node) -> Node {
    let mut block = match current {
        None => Box::new(Block::new()),
        Some(Node::Block(block)) => block,
        Some(first) => {
            let mut block = Box::new(Block::new());
            block.statements.push(first);
            block
        }
    };
    block.statements.push(stmt);
    Node::Block(block)
}

/// Staging area for a function's parameters or a type call's arguments.
///
/// The parser pushes one child per reduced production; order of appends is
/// the declared order and is preserved through [`ParamList::into_vec`].
/// Growth is geometric, the same policy blocks use. The finished list is
/// consumed by [`Node::function`] or [`Node::type_call`]; a list that is
/// never attached is simply dropped and owes nothing to [`crate::destroy`].
#[derive(Clone, PartialEq, Debug, Default)]
pub struct ParamList {
    params: Vec<Node>,
}

impl ParamList {
    #[must_use]
    pub fn new() -> Self {
        ParamList { params: Vec::new() }
    }

    /// Appends exactly one parameter/argument, keeping declaration order.
    pub fn push(&mut self, param: Node) {
        self.params.push(param);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.params.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<Node> {
        self.params
    }
}

impl From<Vec<Node>> for ParamList {
    fn from(params: Vec<Node>) -> Self {
        ParamList { params }
    }
}

impl Extend<Node> for ParamList {
    fn extend<T: IntoIterator<Item = Node>>(&mut self, iter: T) {
        self.params.extend(iter);
    }
}
