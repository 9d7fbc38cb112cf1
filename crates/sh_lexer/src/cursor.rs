//! Read-only position marker over a shared buffer.

use sh_ast::{Policy, Unit};

use crate::classify;

/// Characters `Cursor::next` skips between significant units.
fn is_insignificant(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n')
}

/// A position in a borrowed buffer.
///
/// Cursors are `Copy`: looking ahead means deriving a new cursor with
/// [`Cursor::next`], while [`Cursor::consume`] commits to a unit classified
/// at the cursor's own position. Composite scanners walk their interior
/// with a derived cursor and never touch the caller's.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor<'s> {
    src: &'s str,
    pos: usize,
}

impl<'s> Cursor<'s> {
    pub fn new(src: &'s str) -> Self {
        Self::at(src, 0)
    }

    pub fn at(src: &'s str, pos: usize) -> Self {
        Self {
            src,
            pos: pos.min(src.len()),
        }
    }

    pub fn src(&self) -> &'s str {
        self.src
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn is_eof(&self) -> bool {
        self.pos >= self.src.len()
    }

    /// Classify the unit starting here.
    pub fn classify(&self, policy: Policy) -> Unit {
        classify(self.src, self.pos, policy)
    }

    /// Advance past `unit`, which must have been classified at this position.
    pub fn consume(&mut self, unit: &Unit) {
        self.pos = (self.pos + unit.len()).min(self.src.len());
    }

    /// A cursor at the first significant character after `unit` (classified
    /// at this position), or at end of buffer.
    pub fn next(&self, unit: &Unit) -> Cursor<'s> {
        let from = (self.pos + unit.len()).min(self.src.len());
        let skipped = self.src.as_bytes()[from..]
            .iter()
            .take_while(|&&b| is_insignificant(b))
            .count();
        Cursor::at(self.src, from + skipped)
    }
}
