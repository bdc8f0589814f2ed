//! End-to-end tests for the Quill AST layer.

#[cfg(test)]
mod ast;
