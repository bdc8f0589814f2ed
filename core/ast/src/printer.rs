//! Human-readable tree dump.
//!
//! Pre-order traversal, one node per line, two spaces of indentation per
//! depth level. An absent node prints the `NULL` sentinel at the requested
//! indent; absent optional children (a declaration without an initializer,
//! an `if` without an `else`) are skipped entirely. Sequence children are
//! always printed, even when the sequence is empty, so an empty block still
//! shows its `Block:` header and nothing below it.

use std::fmt::{self, Write};

use crate::nodes::Node;

/// Sentinel line for an absent tree position.
pub const NULL_SENTINEL: &str = "NULL";

const INDENT: &str = "  ";

fn pad<W: Write>(out: &mut W, indent: usize) -> fmt::Result {
    for _ in 0..indent {
        out.write_str(INDENT)?;
    }
    Ok(())
}

/// Writes the tree rooted at `node` to `out`, starting at `indent` levels.
///
/// Every line is terminated with `\n`, including the last.
///
/// # Errors
///
/// Propagates any error from the underlying writer.
pub fn write_tree<W: Write>(out: &mut W, node: Option<&Node>, indent: usize) -> fmt::Result {
    let Some(node) = node else {
        pad(out, indent)?;
        out.write_str(NULL_SENTINEL)?;
        return out.write_char('\n');
    };

    pad(out, indent)?;
    match node {
        Node::IntLiteral(value) => writeln!(out, "IntLiteral: {value}")?,
        Node::FloatLiteral(value) => writeln!(out, "FloatLiteral: {value:.6}")?,
        Node::CharLiteral(value) => writeln!(out, "CharLiteral: {value}")?,
        Node::StringLiteral(value) => writeln!(out, "StringLiteral: {value}")?,
        Node::BoolLiteral(value) => writeln!(out, "BoolLiteral: {}", i32::from(*value))?,
        Node::Identifier(name) => writeln!(out, "Identifier: {name}")?,
        Node::Block(block) => {
            out.write_str("Block:\n")?;
            for stmt in &block.statements {
                write_tree(out, Some(stmt), indent + 1)?;
            }
        }
        Node::Binary(binary) => {
            writeln!(out, "BinaryOp: '{}'", binary.op)?;
            write_tree(out, Some(&binary.left), indent + 1)?;
            write_tree(out, Some(&binary.right), indent + 1)?;
        }
        Node::VarDecl(decl) => {
            writeln!(out, "VarDecl: {}", decl.name)?;
            if let Some(value) = &decl.value {
                write_tree(out, Some(value), indent + 1)?;
            }
        }
        Node::TypeCall(call) => {
            writeln!(out, "TypeCall: {}", call.type_name)?;
            for arg in &call.args {
                write_tree(out, Some(arg), indent + 1)?;
            }
        }
        Node::Function(func) => {
            writeln!(out, "Function: {}", func.name)?;
            pad(out, indent + 1)?;
            out.write_str("Params:\n")?;
            for param in &func.params {
                write_tree(out, Some(param), indent + 2)?;
            }
            pad(out, indent + 1)?;
            out.write_str("Return Type:\n")?;
            write_tree(out, Some(&func.return_type), indent + 2)?;
            pad(out, indent + 1)?;
            out.write_str("Body:\n")?;
            write_tree(out, Some(&func.body), indent + 2)?;
        }
        Node::Type(ty) => writeln!(out, "Type: {}", ty.type_name)?,
        Node::If(if_stmt) => {
            out.write_str("If:\n")?;
            pad(out, indent + 1)?;
            out.write_str("Condition:\n")?;
            write_tree(out, Some(&if_stmt.condition), indent + 2)?;
            pad(out, indent + 1)?;
            out.write_str("Then:\n")?;
            write_tree(out, Some(&if_stmt.then_branch), indent + 2)?;
            if let Some(else_branch) = &if_stmt.else_branch {
                pad(out, indent + 1)?;
                out.write_str("Else:\n")?;
                write_tree(out, Some(else_branch), indent + 2)?;
            }
        }
        Node::Mod(module) => {
            writeln!(out, "Mod: {}", module.name)?;
            write_tree(out, Some(&module.body), indent + 1)?;
        }
        Node::Use(use_dir) => {
            writeln!(out, "Use: {}", use_dir.module)?;
            pad(out, indent + 1)?;
            writeln!(out, "Name: {}", use_dir.name)?;
        }
    }
    Ok(())
}

/// Renders the tree rooted at `node` to a fresh string, indent 0.
#[must_use]
pub fn render(node: Option<&Node>) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = write_tree(&mut out, node, 0);
    out
}
