// Common utilities shared by the function-like and derive macros
//
// This module contains:
// - bool_expr: Boolean expression parsing and code generation
// - parse_utils: Common parsing helpers

mod bool_expr;
mod parse_utils;

pub use bool_expr::*;
pub use parse_utils::*;
