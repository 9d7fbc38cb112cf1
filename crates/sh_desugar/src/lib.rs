//! Desugaring of sharpen constructs into standard C++ text.
//!
//! Transforms:
//! - `x => e`           → `[&](auto x){ return e; }`
//! - `(a, b) => { .. }` → `[&](auto a, auto b){ .. }`
//! - `f(args) => e`     → `f(args) { return e; }`
//! - `a ?? b`           → `first_not_null(a, b)`
//! - `p ?-> m`          → `p != nullptr ? p->m : nullptr`
//!
//! Generators are pure string builders. Bodies that may themselves contain
//! sugar are handed back to the caller's rewrite function.

pub mod coalesce;
pub mod lambda;
pub mod null_safe;

pub use coalesce::coalesce;
pub use lambda::{closing_text, lambda, opening_text};
pub use null_safe::guarded_access;

/// Definition of the fallback helper that desugared `??` calls.
pub fn prelude() -> &'static str {
    sh_ast::host::PRELUDE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prelude_defines_fallback_helper() {
        let helper = sh_ast::host::FALLBACK_HELPER;
        assert!(prelude().starts_with(&format!("auto {helper}(")));
        assert!(!prelude().contains('\n'));
    }
}
