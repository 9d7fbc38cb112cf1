//! Fixed-point rewrite engine.
//!
//! At each scan position the engine classifies up to three consecutive
//! significant units (head, marker, body) and matches them against the
//! sugar patterns. On a match the replacement is spliced into the buffer
//! and scanning resumes at the start of the edit, so the replacement is
//! itself eligible for further rewrites. Otherwise the head unit is copied
//! to the output and the scan moves past it.

use log::{debug, trace, warn};
use sh_ast::{Policy, Span, Unit, UnitKind};
use sh_lexer::{classify, Cursor};

/// The sugar a matched unit triple desugars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// `a ?? b`
    Coalesce,
    /// `head => body`
    Lambda,
    /// `p ?-> m`
    NullSafe,
}

impl Pattern {
    /// Pattern precedence: `??` first, then `=>`, then `?->`.
    fn detect(head: &Unit, marker: &Unit) -> Option<Pattern> {
        match marker.kind {
            UnitKind::FirstNonNullMarker => Some(Pattern::Coalesce),
            UnitKind::ArrowMarker
                if matches!(
                    head.kind,
                    UnitKind::Signature | UnitKind::Identifier | UnitKind::ParameterList { .. }
                ) =>
            {
                Some(Pattern::Lambda)
            }
            UnitKind::NullSafeAccessMarker => Some(Pattern::NullSafe),
            _ => None,
        }
    }
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Pattern::Coalesce => write!(f, "??"),
            Pattern::Lambda => write!(f, "=>"),
            Pattern::NullSafe => write!(f, "?->"),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Match {
    pattern: Pattern,
    head: Unit,
    body: Unit,
    /// From the head's start through the end of the body.
    span: Span,
}

/// Output of a [`Rewriter`] run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewritten {
    pub output: String,
    /// Splices performed on this buffer (nested bodies not counted).
    pub rewrites: usize,
}

/// The engine state for one buffer: the buffer under rewrite, the scan
/// position, and the output emitted so far.
#[derive(Debug)]
pub struct Rewriter {
    buffer: String,
    pos: usize,
    output: String,
    rewrites: usize,
    budget: usize,
}

impl Rewriter {
    pub fn new(source: &str) -> Self {
        // A splice can leave fresh marker text behind (`?->` with no receiver).
        Self::with_budget(source, source.len() + 1)
    }

    /// A rewriter that performs at most `budget` splices before copying the
    /// rest of the buffer through unchanged.
    pub fn with_budget(source: &str, budget: usize) -> Self {
        Self {
            buffer: source.to_string(),
            pos: 0,
            output: String::with_capacity(source.len()),
            rewrites: 0,
            budget,
        }
    }

    pub fn run(mut self) -> Rewritten {
        while self.pos < self.buffer.len() {
            if let Some(found) = self.find_match() {
                if self.rewrites >= self.budget {
                    warn!(
                        "rewrite budget of {} exhausted at byte {}; copying the remainder unchanged",
                        self.budget, self.pos
                    );
                    self.output.push_str(&self.buffer[self.pos..]);
                    break;
                }
                self.splice(found);
                continue;
            }
            self.emit_unit();
        }

        Rewritten {
            output: self.output,
            rewrites: self.rewrites,
        }
    }

    /// Try each policy of the cascade at the current position.
    ///
    /// Narrower policies are tried only when a greedier head does not start
    /// a pattern: an instruction may swallow the `=>` a signature or
    /// identifier head needs.
    fn find_match(&self) -> Option<Match> {
        let cursor = Cursor::at(&self.buffer, self.pos);

        Policy::CASCADE.into_iter().find_map(|policy| {
            let head = cursor.classify(policy);
            let marker_at = cursor.next(&head);
            let marker = marker_at.classify(Policy::SIGNATURE);
            let body_at = marker_at.next(&marker);
            let body = body_at.classify(Policy::INSTRUCTION);

            trace!(
                "{}: {} {:?} | {} | {}",
                self.pos,
                head.kind,
                head.text(&self.buffer),
                marker.kind,
                body.kind
            );

            let pattern = Pattern::detect(&head, &marker)?;
            Some(Match {
                pattern,
                head,
                body,
                span: Span::new(self.pos, body_at.pos() + body.len()),
            })
        })
    }

    fn splice(&mut self, found: Match) {
        let src = self.buffer.as_str();
        let replacement = match found.pattern {
            Pattern::Coalesce => sh_desugar::coalesce(found.head.text(src), found.body.text(src)),
            Pattern::Lambda => sh_desugar::lambda(src, &found.head, &found.body, transform),
            Pattern::NullSafe => {
                sh_desugar::guarded_access(found.head.text(src), found.body.text(src))
            }
        };

        debug!(
            "{} at {}..{}: {:?} -> {:?}",
            found.pattern,
            found.span.start,
            found.span.end,
            found.span.slice(src),
            replacement
        );

        self.buffer
            .replace_range(found.span.start..found.span.end, &replacement);
        self.rewrites += 1;
    }

    /// Copy the unit at the cursor to the output, desugaring block interiors.
    fn emit_unit(&mut self) {
        let unit = classify(&self.buffer, self.pos, Policy::BARE);
        match unit.kind {
            UnitKind::BraceBlock { .. } => {
                self.output.push('{');
                self.output
                    .push_str(&transform(unit.inner_text(&self.buffer)));
                self.output.push('}');
            }
            _ => self.output.push_str(unit.text(&self.buffer)),
        }
        self.pos = unit.end();
    }
}

/// Desugar every sharpen construct in `source`.
///
/// Text without sugar comes back unchanged. Malformed input is never
/// rejected; it is copied through unit by unit.
pub fn transform(source: &str) -> String {
    Rewriter::new(source).run().output
}
