//! Desugaring for arrow functions (`=>`).
//!
//! The head of an arrow (identifier, parameter list or signature) becomes
//! the opening text, the body becomes the closing text:
//!
//! - `x => e`        → `[&](auto x)` + `{ return e; }`
//! - `(a, b) => {s}` → `[&](auto a, auto b)` + `{s}`
//! - `f(int a) => e` → `f(int a) ` + `{ return e; }`

use sh_ast::host::{CAPTURE_BY_REFERENCE, GENERIC_TYPE};
use sh_ast::{Unit, UnitKind};

/// Opening text for an arrow whose head is `head`.
pub fn opening_text(src: &str, head: &Unit) -> String {
    match head.kind {
        UnitKind::Signature => head.text(src).to_string(),
        UnitKind::ParameterList { .. } => {
            let params = head
                .inner_text(src)
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(|name| format!("{GENERIC_TYPE} {name}"))
                .collect::<Vec<_>>()
                .join(", ");
            format!("{CAPTURE_BY_REFERENCE}({params})")
        }
        _ => format!("{CAPTURE_BY_REFERENCE}({GENERIC_TYPE} {})", head.text(src)),
    }
}

/// Closing text for an arrow whose body is `body`.
///
/// `rewrite` desugars the body text: the interior of a brace block, or the
/// whole unit for expression bodies.
pub fn closing_text(src: &str, body: &Unit, rewrite: impl FnOnce(&str) -> String) -> String {
    match body.kind {
        UnitKind::BraceBlock { .. } => format!("{{{}}}", rewrite(body.inner_text(src))),
        _ => format!("{{ return {}; }}", rewrite(body.text(src))),
    }
}

/// The complete replacement for `head => body`.
pub fn lambda(
    src: &str,
    head: &Unit,
    body: &Unit,
    rewrite: impl FnOnce(&str) -> String,
) -> String {
    let mut out = opening_text(src, head);
    out.push_str(&closing_text(src, body, rewrite));
    out
}
