//! Composite scanners: units recognised by walking a run of inner units.
//!
//! Interiors are always classified with [`Policy::BARE`], so a composite
//! scan never recurses into another greedy instruction or signature scan.
//! Nested delimiters come for free: an inner `{` or `(` is classified as a
//! whole block or list and consumed as one unit.

use sh_ast::{Policy, Span, Unit, UnitKind};

use crate::cursor::Cursor;
use crate::scan;

/// `(a, b, c)` or `()`: bare identifiers separated by commas.
///
/// Anything else inside the parentheses (literals, calls, operators, a
/// trailing comma) means this is not a parameter list.
pub(crate) fn parameter_list(src: &str, start: usize) -> Option<Unit> {
    if src.as_bytes().get(start) != Some(&b'(') {
        return None;
    }

    let mut cursor = Cursor::at(src, start + 1);
    let mut expect_comma = false;
    let mut empty = true;

    while !cursor.is_eof() {
        let unit = cursor.classify(Policy::BARE);
        match unit.kind {
            UnitKind::Whitespace => {}
            UnitKind::Identifier if !expect_comma => {
                expect_comma = true;
                empty = false;
            }
            UnitKind::Unrecognized if unit.is_unrecognized(src, ')') && (expect_comma || empty) => {
                return Some(Unit::parameter_list(start, unit.start()));
            }
            UnitKind::Unrecognized if unit.is_unrecognized(src, ',') && expect_comma => {
                expect_comma = false;
            }
            _ => return None,
        }
        cursor.consume(&unit);
    }

    None
}

/// `{ ... }` up to the first `}` not claimed by an inner unit.
pub(crate) fn brace_block(src: &str, start: usize) -> Option<Unit> {
    if src.as_bytes().get(start) != Some(&b'{') {
        return None;
    }

    let mut cursor = Cursor::at(src, start + 1);
    while !cursor.is_eof() {
        let unit = cursor.classify(Policy::BARE);
        if unit.is_unrecognized(src, '}') {
            return Some(Unit::brace_block(start, unit.start()));
        }
        cursor.consume(&unit);
    }

    None
}

/// A declaration head: an identifier followed by more units that include a
/// parameter list or a balanced parenthesised group, e.g. `auto get()` or
/// `auto set(int x, int y)`.
///
/// Stops before `;`, an unmatched `}`, a top-level block or `=>`. A `(` or
/// `)` before a second identifier means this is a call or a parenthesised
/// expression, not a declaration. A `??` or `?->` in the run rejects the
/// whole signature: it is the left operand of that marker instead.
pub(crate) fn signature(src: &str, start: usize) -> Option<Unit> {
    let head = scan::identifier(src, start)?;
    let mut cursor = Cursor::at(src, start);
    cursor.consume(&head);

    let mut depth: i32 = 0;
    let mut identifiers = 1;
    let mut complete = false;

    while !cursor.is_eof() {
        let unit = cursor.classify(Policy::BARE);
        match unit.kind {
            UnitKind::FirstNonNullMarker | UnitKind::NullSafeAccessMarker => return None,
            UnitKind::ArrowMarker => break,
            UnitKind::BraceBlock { .. } if depth == 0 => break,
            UnitKind::ParameterList { .. } => complete = true,
            UnitKind::Identifier => identifiers += 1,
            UnitKind::Unrecognized => match unit.text(src) {
                ";" | "}" => break,
                "(" | ")" if identifiers <= 1 => break,
                "(" => depth += 1,
                ")" => {
                    depth -= 1;
                    complete = depth == 0;
                }
                _ => {}
            },
            _ => {}
        }
        cursor.consume(&unit);
    }

    (complete && depth == 0)
        .then(|| Unit::new(UnitKind::Signature, Span::new(start, cursor.pos())))
}

/// A statement prefix: an identifier (optionally preceded by `!`, `-` or
/// `(`) followed by more units, up to a top-level `;`, an unmatched `)`, or
/// a `??`/`?->` marker, which is left for the rewrite engine. A top-level
/// brace block is taken as the last unit, so `int{42}` is one instruction
/// but `f() { a; } b` stops after the block.
///
/// Only runs of at least two units with no unclosed `(` qualify.
pub(crate) fn instruction(src: &str, start: usize) -> Option<Unit> {
    let mut cursor = Cursor::at(src, start);
    let mut depth: i32 = 0;
    let mut count = 0usize;

    while !cursor.is_eof() {
        let unit = cursor.classify(Policy::BARE);
        match unit.kind {
            UnitKind::FirstNonNullMarker | UnitKind::NullSafeAccessMarker => break,
            UnitKind::Identifier => {}
            UnitKind::Unrecognized => match unit.text(src) {
                "(" => depth += 1,
                ")" => depth -= 1,
                "!" | "-" if count == 0 => {}
                ";" => break,
                _ if count == 0 => break,
                _ => {}
            },
            _ if count == 0 => break,
            _ => {}
        }
        if depth < 0 {
            break;
        }
        count += 1;
        cursor.consume(&unit);
        if depth == 0 && matches!(unit.kind, UnitKind::BraceBlock { .. }) {
            break;
        }
    }

    (count > 1 && depth <= 0)
        .then(|| Unit::new(UnitKind::Instruction, Span::new(start, cursor.pos())))
}
