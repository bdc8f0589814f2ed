//! Process-wide interned token tables.
//!
//! Binary operator symbols and built-in type-name tokens are borrowed
//! references: a node holding one does not own it and teardown must never
//! release it. Everything not in these tables is owned `String` data.

use std::sync::OnceLock;

use rustc_hash::FxHashMap;

use crate::errors::AstError;

/// Operator spellings the grammar emits for binary expressions.
pub static OPERATORS: &[&str] = &[
    "+", "-", "*", "/", "%", "==", "!=", "<", "<=", ">", ">=", "&&", "||",
];

/// Built-in type-name tokens usable as type-call heads.
pub static TYPE_NAMES: &[&str] = &[
    "int", "float", "char", "str", "bool", "list", "option", "result",
];

fn operator_table() -> &'static FxHashMap<&'static str, &'static str> {
    static TABLE: OnceLock<FxHashMap<&'static str, &'static str>> = OnceLock::new();
    TABLE.get_or_init(|| OPERATORS.iter().map(|op| (*op, *op)).collect())
}

fn type_name_table() -> &'static FxHashMap<&'static str, &'static str> {
    static TABLE: OnceLock<FxHashMap<&'static str, &'static str>> = OnceLock::new();
    TABLE.get_or_init(|| TYPE_NAMES.iter().map(|name| (*name, *name)).collect())
}

/// Resolves an operator spelling to its interned token.
///
/// # Errors
///
/// Returns [`AstError::UnknownOperator`] if `symbol` is not a spelling from
/// [`OPERATORS`].
pub fn operator(symbol: &str) -> Result<&'static str, AstError> {
    operator_table()
        .get(symbol)
        .copied()
        .ok_or_else(|| AstError::UnknownOperator {
            symbol: symbol.to_string(),
        })
}

/// Resolves a built-in type name to its interned token.
///
/// # Errors
///
/// Returns [`AstError::UnknownTypeName`] if `symbol` is not a token from
/// [`TYPE_NAMES`].
pub fn type_name(symbol: &str) -> Result<&'static str, AstError> {
    type_name_table()
        .get(symbol)
        .copied()
        .ok_or_else(|| AstError::UnknownTypeName {
            symbol: symbol.to_string(),
        })
}
