//! Lookahead-driven classifier for sharpen.
//!
//! Segments raw C++ text into typed [`Unit`]s without ever rejecting input:
//! anything no scanner claims becomes a one-character `Unrecognized` (or
//! `Whitespace`) unit. Comments and quoted literals are claimed before any
//! sugar marker, so `=>`, `??` and `?->` inside them are never seen as
//! markers.
//!
//! Priority order at a position:
//!
//! 1. Signature (if the policy allows)
//! 2. Instruction (if the policy allows)
//! 3. Comment, quoted literal, numeric literal
//! 4. Parameter list, identifier
//! 5. `=>`, `??`, `?->`
//! 6. Brace block
//! 7. Single character

use sh_ast::{Policy, Unit};

mod composite;
mod cursor;
mod scan;

pub use cursor::Cursor;

/// Classify the unit starting at byte offset `pos` of `src`.
///
/// Returns [`Unit::EMPTY`] at or past the end of the buffer.
pub fn classify(src: &str, pos: usize, policy: Policy) -> Unit {
    if pos >= src.len() {
        return Unit::EMPTY;
    }

    // A signature is itself a valid instruction prefix, so it goes first.
    if policy.signature {
        if let Some(unit) = composite::signature(src, pos) {
            return unit;
        }
    }
    if policy.instruction {
        if let Some(unit) = composite::instruction(src, pos) {
            return unit;
        }
    }

    scan::comment(src, pos)
        .or_else(|| scan::quoted(src, pos))
        .or_else(|| scan::numeric(src, pos))
        .or_else(|| composite::parameter_list(src, pos))
        .or_else(|| scan::identifier(src, pos))
        .or_else(|| scan::arrow(src, pos))
        .or_else(|| scan::first_non_null(src, pos))
        .or_else(|| scan::null_safe_access(src, pos))
        .or_else(|| composite::brace_block(src, pos))
        .unwrap_or_else(|| scan::single_char(src, pos))
}

/// Walk `src` as a flat sequence of units classified under `policy`.
pub fn units(src: &str, policy: Policy) -> impl Iterator<Item = Unit> + '_ {
    let mut cursor = Cursor::new(src);
    std::iter::from_fn(move || {
        if cursor.is_eof() {
            return None;
        }
        let unit = cursor.classify(policy);
        cursor.consume(&unit);
        Some(unit)
    })
}
