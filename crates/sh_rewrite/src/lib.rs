//! Source-to-source rewriter adding sharpen syntax to C++.
//!
//! Rewrites at the text level, leaving everything that is not sugar
//! byte-for-byte intact:
//!
//! - Arrow functions (`x => x * 2`, `(a, b) => { .. }`, `f(int a) => a;`)
//! - First-non-null (`a ?? b`)
//! - Null-safe member access (`p ?-> m()`)
//!
//! [`transform`] is the core pass; [`emit`] additionally prepends the
//! helper prelude that desugared `??` relies on.

pub mod emit;
pub mod engine;
pub mod selfcheck;

pub use emit::{emit, EmitOptions};
pub use engine::{transform, Pattern, Rewriter, Rewritten};
