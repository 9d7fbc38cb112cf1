//! Lexical unit data model for sharpen.
//!
//! Every stage of the rewriter talks in terms of [`Unit`]s: typed spans of
//! the source buffer produced by the classifier in `sh_lexer`. Units never
//! own text; they carry byte offsets and are resolved against the buffer
//! they were classified from.
//!
//! Sugar recognised on top of plain C++:
//! - Arrow functions (`x => x * 2`, `(a, b) => { .. }`, `name(args) => expr`)
//! - First-non-null (`a ?? b`)
//! - Null-safe member access (`p ?-> member()`)

use serde::{Deserialize, Serialize};

pub mod host;

/// A half-open byte range `[start, end)` into a source buffer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub const fn len(self) -> usize {
        self.end - self.start
    }

    pub const fn is_empty(self) -> bool {
        self.start == self.end
    }

    /// The text this span covers in `src`.
    pub fn slice(self, src: &str) -> &str {
        &src[self.start..self.end]
    }
}

/// The closed set of lexical unit kinds.
///
/// Delimited kinds carry the span strictly inside their delimiters; every
/// other kind is fully described by the owning unit's span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitKind {
    /// End-of-buffer sentinel.
    Empty,
    /// A single space or tab.
    Whitespace,
    Identifier,
    /// A greedy run of units forming a statement prefix (`foo(a).b`).
    Instruction,
    QuotedLiteral,
    /// `(a, b)`: bare identifiers separated by commas.
    ParameterList { inner: Span },
    /// `{ ... }` with balanced nesting.
    BraceBlock { inner: Span },
    Comment,
    NumericLiteral,
    /// `=>`
    ArrowMarker,
    /// `??`
    FirstNonNullMarker,
    /// `?->`
    NullSafeAccessMarker,
    /// A declaration head ending in a parameter list (`auto get(int x)`).
    Signature,
    /// Any single character no other kind claims.
    Unrecognized,
}

impl std::fmt::Display for UnitKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            UnitKind::Empty => "empty",
            UnitKind::Whitespace => "whitespace",
            UnitKind::Identifier => "identifier",
            UnitKind::Instruction => "instruction",
            UnitKind::QuotedLiteral => "quoted",
            UnitKind::ParameterList { .. } => "params",
            UnitKind::BraceBlock { .. } => "block",
            UnitKind::Comment => "comment",
            UnitKind::NumericLiteral => "number",
            UnitKind::ArrowMarker => "=>",
            UnitKind::FirstNonNullMarker => "??",
            UnitKind::NullSafeAccessMarker => "?->",
            UnitKind::Signature => "signature",
            UnitKind::Unrecognized => "unrecognized",
        };
        f.write_str(name)
    }
}

/// One classified span of source text.
///
/// Units are plain values: classification never mutates the buffer, and a
/// unit stays meaningful only for the buffer it was classified from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Unit {
    pub kind: UnitKind,
    pub span: Span,
}

impl Unit {
    /// The end-of-buffer sentinel. Equal only to itself.
    pub const EMPTY: Unit = Unit {
        kind: UnitKind::Empty,
        span: Span::new(0, 0),
    };

    pub const fn new(kind: UnitKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// A unit of `kind` covering `len` bytes from `start`.
    pub const fn at(kind: UnitKind, start: usize, len: usize) -> Self {
        Self::new(kind, Span::new(start, start + len))
    }

    /// `(` + inner + `)`, spanning `start..=close`.
    pub const fn parameter_list(start: usize, close: usize) -> Self {
        Self::new(
            UnitKind::ParameterList {
                inner: Span::new(start + 1, close),
            },
            Span::new(start, close + 1),
        )
    }

    /// `{` + inner + `}`, spanning `start..=close`.
    pub const fn brace_block(start: usize, close: usize) -> Self {
        Self::new(
            UnitKind::BraceBlock {
                inner: Span::new(start + 1, close),
            },
            Span::new(start, close + 1),
        )
    }

    pub const fn is_empty(&self) -> bool {
        matches!(self.kind, UnitKind::Empty)
    }

    pub const fn start(&self) -> usize {
        self.span.start
    }

    pub const fn end(&self) -> usize {
        self.span.end
    }

    pub const fn len(&self) -> usize {
        self.span.len()
    }

    /// Span strictly inside the delimiters for delimited kinds, the whole
    /// span otherwise.
    pub const fn inner_span(&self) -> Span {
        match self.kind {
            UnitKind::ParameterList { inner } | UnitKind::BraceBlock { inner } => inner,
            _ => self.span,
        }
    }

    pub fn text<'s>(&self, src: &'s str) -> &'s str {
        if self.is_empty() {
            return "";
        }
        self.span.slice(src)
    }

    pub fn inner_text<'s>(&self, src: &'s str) -> &'s str {
        if self.is_empty() {
            return "";
        }
        self.inner_span().slice(src)
    }

    /// Whether this is the single unrecognized character `ch`.
    pub fn is_unrecognized(&self, src: &str, ch: char) -> bool {
        matches!(self.kind, UnitKind::Unrecognized) && src[self.span.start..].starts_with(ch)
    }

    pub const fn is_marker(&self) -> bool {
        matches!(
            self.kind,
            UnitKind::ArrowMarker | UnitKind::FirstNonNullMarker | UnitKind::NullSafeAccessMarker
        )
    }
}

/// Which greedy composite kinds the classifier may produce at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Policy {
    pub instruction: bool,
    pub signature: bool,
}

impl Policy {
    pub const FULL: Policy = Policy {
        instruction: true,
        signature: true,
    };
    pub const SIGNATURE: Policy = Policy {
        instruction: false,
        signature: true,
    };
    /// Instructions only; used for the right-hand unit of a pattern.
    pub const INSTRUCTION: Policy = Policy {
        instruction: true,
        signature: false,
    };
    pub const BARE: Policy = Policy {
        instruction: false,
        signature: false,
    };

    /// Attempt order for the unit under the engine's cursor, most greedy first.
    pub const CASCADE: [Policy; 3] = [Policy::FULL, Policy::SIGNATURE, Policy::BARE];
}

impl Default for Policy {
    fn default() -> Self {
        Policy::FULL
    }
}
