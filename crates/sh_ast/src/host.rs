//! Host-language (C++) spellings emitted by the desugaring.

/// Lambda capture list opening every generated anonymous function.
pub const CAPTURE_BY_REFERENCE: &str = "[&]";

/// Placeholder type for generated lambda parameters.
pub const GENERIC_TYPE: &str = "auto";

pub const NULL_SENTINEL: &str = "nullptr";

/// Function called by desugared `a ?? b`.
pub const FALLBACK_HELPER: &str = "first_not_null";

/// Definition of [`FALLBACK_HELPER`]; callers prepend it to rewritten output.
pub const PRELUDE: &str =
    "auto first_not_null(auto&& a, auto&& b) { auto&& x = a; return x ? x : b; }";
