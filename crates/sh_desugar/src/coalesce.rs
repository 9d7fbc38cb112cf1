//! Desugaring for first-non-null (`??`).
//!
//! `a ?? b` → `first_not_null(a, b)`

use sh_ast::host::FALLBACK_HELPER;

/// Build `first_not_null(<left>, <right>)` from untrimmed operand text.
pub fn coalesce(left: &str, right: &str) -> String {
    format!("{FALLBACK_HELPER}({}, {})", left.trim(), right.trim())
}
