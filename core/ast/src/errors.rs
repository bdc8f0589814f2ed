//! Error types for the AST crate.

use thiserror::Error;

/// Errors raised by the interned token table lookups.
///
/// Construction, mutation, printing, and teardown are infallible by design;
/// the only structured failure in this crate is a parser action passing a
/// spelling the static tables do not carry.
#[derive(Debug, Error)]
#[must_use = "errors must not be silently ignored"]
pub enum AstError {
    /// The operator spelling is not in the interned operator table.
    #[error("unknown operator symbol '{symbol}'")]
    UnknownOperator { symbol: String },

    /// The type name is not in the interned type-name table.
    #[error("unknown type name '{symbol}'")]
    UnknownTypeName { symbol: String },
}
