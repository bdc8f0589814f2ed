#![warn(clippy::pedantic)]
pub mod builder;
pub mod destroy;
pub mod errors;
pub mod nodes;
pub(crate) mod nodes_impl;
pub mod printer;
pub mod tokens;
