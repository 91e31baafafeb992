// Common utilities shared between the user-facing macros
//
// This module contains:
// - bool_expr: Boolean expression parsing and evaluation
// - parse_utils: `Type: Expr` check lists

mod bool_expr;
mod parse_utils;

pub use bool_expr::*;
pub use parse_utils::*;
