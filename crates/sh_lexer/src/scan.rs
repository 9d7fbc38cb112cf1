//! Leaf scanners: units recognisable without looking at inner units.
//!
//! Each scanner answers "does a unit of my kind start at `pos`?" and returns
//! the longest such unit. All delimiters are ASCII, so scanning walks bytes
//! and every returned boundary falls on a char boundary.

use sh_ast::{Span, Unit, UnitKind};

fn is_identifier_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

fn is_identifier_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Letters, digits and `_`, never starting with a digit.
pub(crate) fn identifier(src: &str, pos: usize) -> Option<Unit> {
    let bytes = src.as_bytes();
    if !bytes.get(pos).is_some_and(|&b| is_identifier_start(b)) {
        return None;
    }
    let len = bytes[pos..]
        .iter()
        .take_while(|&&b| is_identifier_continue(b))
        .count();
    Some(Unit::at(UnitKind::Identifier, pos, len))
}

/// A run of decimal digits.
pub(crate) fn numeric(src: &str, pos: usize) -> Option<Unit> {
    let len = src.as_bytes()[pos..]
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count();
    (len > 0).then(|| Unit::at(UnitKind::NumericLiteral, pos, len))
}

/// `'...'` or `"..."` with backslash escapes. Unterminated literals run to
/// the end of the buffer.
pub(crate) fn quoted(src: &str, pos: usize) -> Option<Unit> {
    let bytes = src.as_bytes();
    let quote = *bytes.get(pos)?;
    if quote != b'"' && quote != b'\'' {
        return None;
    }

    let mut j = pos + 1;
    while j < bytes.len() && bytes[j] != quote {
        if bytes[j] == b'\\' {
            j += 1;
        }
        j += 1;
    }
    let end = if j < bytes.len() { j + 1 } else { bytes.len() };
    Some(Unit::new(UnitKind::QuotedLiteral, Span::new(pos, end)))
}

/// `// ...\n` (newline included) or `/* ... */`. Unterminated comments run
/// to the end of the buffer.
pub(crate) fn comment(src: &str, pos: usize) -> Option<Unit> {
    let rest = &src[pos..];
    let len = if rest.starts_with("//") {
        rest.find('\n').map_or(rest.len(), |i| i + 1)
    } else if rest.starts_with("/*") {
        rest[2..].find("*/").map_or(rest.len(), |i| i + 4)
    } else {
        return None;
    };
    Some(Unit::at(UnitKind::Comment, pos, len))
}

fn token(src: &str, pos: usize, text: &str, kind: UnitKind) -> Option<Unit> {
    src[pos..]
        .starts_with(text)
        .then(|| Unit::at(kind, pos, text.len()))
}

pub(crate) fn arrow(src: &str, pos: usize) -> Option<Unit> {
    token(src, pos, "=>", UnitKind::ArrowMarker)
}

pub(crate) fn first_non_null(src: &str, pos: usize) -> Option<Unit> {
    token(src, pos, "??", UnitKind::FirstNonNullMarker)
}

pub(crate) fn null_safe_access(src: &str, pos: usize) -> Option<Unit> {
    token(src, pos, "?->", UnitKind::NullSafeAccessMarker)
}

/// Fallback: one character, whitespace if it is a space or a tab.
pub(crate) fn single_char(src: &str, pos: usize) -> Unit {
    let len = src[pos..].chars().next().map_or(1, char::len_utf8);
    let kind = match src.as_bytes()[pos] {
        b' ' | b'\t' => UnitKind::Whitespace,
        _ => UnitKind::Unrecognized,
    };
    Unit::at(kind, pos, len)
}
