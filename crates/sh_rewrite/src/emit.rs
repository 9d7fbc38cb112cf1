use log::debug;
use serde::{Deserialize, Serialize};

use crate::engine::Rewriter;

/// Options for turning a sharpen source file into compilable C++.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmitOptions {
    /// Prepend the `first_not_null` helper definition.
    pub prelude: bool,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self { prelude: true }
    }
}

/// Rewrite a complete source file and prepend the helper prelude.
///
/// 1. Transform: desugar `=>`, `??` and `?->` at the text level.
/// 2. Prelude: put the fallback helper on its own first line, so the
///    rewritten `first_not_null(..)` calls resolve.
pub fn emit(source: &str, options: &EmitOptions) -> String {
    let rewritten = Rewriter::new(source).run();
    debug!(
        "rewrote {} top-level construct(s) in {} bytes",
        rewritten.rewrites,
        source.len()
    );

    if !options.prelude {
        return rewritten.output;
    }

    let prelude = sh_desugar::prelude();
    let mut out = String::with_capacity(prelude.len() + 1 + rewritten.output.len());
    out.push_str(prelude);
    out.push('\n');
    out.push_str(&rewritten.output);
    out
}
