//! Node model for the Quill AST.
//!
//! A node is a sum type: one `Node` arm per syntactic construct, with
//! composite payloads split into named structs. The `node_variants!` table
//! below is the single source of truth for the variant set; it stamps out
//! both `Node` and the field-less `NodeKind` discriminant so the two can
//! never drift apart.
//!
//! Ownership is exclusive along tree edges. Owned text is `String`
//! (defensively copied at construction), owned children are `Box<Node>` or
//! `Vec<Node>`, and the two borrowed fields (the binary operator symbol and
//! the type-call type name) are `&'static str` tokens drawn from the
//! interned table in [`crate::tokens`]. Nothing in the tree can alias
//! another node, so teardown releases every owned allocation exactly once
//! and can never touch a borrowed token.

macro_rules! node_variants {
    (
        $(
            $(#[$arm_attr:meta])*
            $arm:ident ( $payload:ty ) ,
        )+
    ) => {
        /// One value in the discriminated tree.
        #[derive(Clone, PartialEq, Debug, serde::Serialize)]
        pub enum Node {
            $(
                $(#[$arm_attr])*
                $arm($payload),
            )+
        }

        /// Field-less discriminant for [`Node`].
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize)]
        pub enum NodeKind {
            $(
                $arm,
            )+
        }

        impl Node {
            #[must_use]
            pub fn kind(&self) -> NodeKind {
                match self {
                    $(
                        Node::$arm(..) => NodeKind::$arm,
                    )+
                }
            }
        }
    };
}

node_variants! {

    IntLiteral(i64),
    FloatLiteral(f64),
    CharLiteral(char),
    StringLiteral(String),
    BoolLiteral(bool),
    Identifier(String),
    Block(Box<Block>),
    Binary(Box<BinaryExpression>),
    VarDecl(Box<VarDecl>),
    TypeCall(Box<TypeCall>),
    Function(Box<FunctionDefinition>),
    Type(Box<TypeNode>),
    If(Box<IfStatement>),
    Mod(Box<ModDefinition>),
    Use(Box<UseDirective>),
}

/// Ordered statement sequence. Capacity starts at
/// [`Block::INITIAL_CAPACITY`] and grows geometrically.
#[derive(Clone, PartialEq, Debug, serde::Serialize)]
pub struct Block {
    pub statements: Vec<Node>,
}

#[derive(Clone, PartialEq, Debug, serde::Serialize)]
pub struct BinaryExpression {
    /// Interned operator spelling; never owned, never freed.
    pub op: &'static str,
    pub left: Node,
    pub right: Node,
}

#[derive(Clone, PartialEq, Debug, serde::Serialize)]
pub struct VarDecl {
    pub name: String,
    pub value: Option<Node>,
}

#[derive(Clone, PartialEq, Debug, serde::Serialize)]
pub struct TypeCall {
    /// Interned type-name token; never owned, never freed.
    pub type_name: &'static str,
    pub args: Vec<Node>,
}

#[derive(Clone, PartialEq, Debug, serde::Serialize)]
pub struct FunctionDefinition {
    pub name: String,
    pub params: Vec<Node>,
    pub return_type: Node,
    pub body: Node,
}

#[derive(Clone, PartialEq, Debug, serde::Serialize)]
pub struct TypeNode {
    pub type_name: String,
}

#[derive(Clone, PartialEq, Debug, serde::Serialize)]
pub struct IfStatement {
    pub condition: Node,
    pub then_branch: Node,
    pub else_branch: Option<Node>,
}

#[derive(Clone, PartialEq, Debug, serde::Serialize)]
pub struct ModDefinition {
    pub name: String,
    pub body: Node,
}

#[derive(Clone, PartialEq, Debug, serde::Serialize)]
pub struct UseDirective {
    pub module: String,
    pub name: String,
}
