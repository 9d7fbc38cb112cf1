//! Golden-file test harness for sharpen.
//!
//! Discovers `.input.cpp` files under `tests/fixtures/`, runs the rewrite
//! pass and compares output against the corresponding `.expected.cpp` file.
//! Expected files are also checked to be sugar-free and to be fixed points
//! of the rewrite.
//!
//! Set `SH_UPDATE_FIXTURES=1` to overwrite expected files with actual output.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use sh_ast::Policy;
use sh_rewrite::{transform, Rewriter};

fn fixtures_dir() -> PathBuf {
    // CARGO_MANIFEST_DIR is crates/sh_test/; fixtures live at the workspace root.
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../tests/fixtures")
}

fn collect_files(dir: &Path, suffix: &str) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = walkdir(dir)
        .into_iter()
        .filter(|path| {
            path.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.ends_with(suffix))
        })
        .collect();
    files.sort();
    files
}

fn walkdir(dir: &Path) -> Vec<PathBuf> {
    let mut result = Vec::new();
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                result.extend(walkdir(&path));
            } else {
                result.push(path);
            }
        }
    }
    result
}

fn test_name(fixtures: &Path, path: &Path) -> String {
    path.strip_prefix(fixtures)
        .unwrap_or(path)
        .display()
        .to_string()
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

/// Markers the lexer still sees in `text` outside comments and literals.
fn leftover_markers(text: &str) -> Vec<String> {
    sh_lexer::units(text, Policy::BARE)
        .filter(|unit| unit.is_marker())
        .map(|unit| format!("`{}` at byte {}", unit.text(text), unit.start()))
        .collect()
}

fn fail(kind: &str, failures: Vec<String>) {
    if !failures.is_empty() {
        panic!(
            "\n{} {kind} test(s) failed:\n\n{}",
            failures.len(),
            failures.join("\n\n")
        );
    }
}

#[test]
fn golden_file_tests() {
    let fixtures = fixtures_dir();
    let input_files = collect_files(&fixtures, ".input.cpp");

    assert!(
        !input_files.is_empty(),
        "No test fixtures found in {}",
        fixtures.display()
    );

    let update_mode = std::env::var("SH_UPDATE_FIXTURES").is_ok();
    let mut failures = Vec::new();

    for input_path in &input_files {
        let name = test_name(&fixtures, input_path);
        let expected_path = input_path.with_file_name(
            input_path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or_default()
                .replace(".input.cpp", ".expected.cpp"),
        );

        let source = match read(input_path) {
            Ok(s) => s,
            Err(e) => {
                failures.push(format!("{name}: {e:#}"));
                continue;
            }
        };

        let rewritten = Rewriter::new(&source).run();
        if rewritten.rewrites == 0 && !leftover_markers(&source).is_empty() {
            failures.push(format!("{name}: sugar present but nothing was rewritten"));
        }
        let actual = rewritten.output;

        if update_mode {
            if let Err(e) = std::fs::write(&expected_path, &actual) {
                failures.push(format!("{name}: failed to write expected: {e}"));
            }
            continue;
        }

        if !expected_path.exists() {
            failures.push(format!(
                "{name}: missing expected file: {}",
                expected_path.display()
            ));
            continue;
        }

        let expected = match read(&expected_path) {
            Ok(s) => s,
            Err(e) => {
                failures.push(format!("{name}: {e:#}"));
                continue;
            }
        };
        if actual.trim() != expected.trim() {
            failures.push(format!(
                "{name}: output mismatch\n--- expected ---\n{}\n--- actual ---\n{}",
                expected.trim(),
                actual.trim()
            ));
        }
    }

    fail("golden", failures);
}

#[test]
fn expected_output_is_plain_cpp() {
    let fixtures = fixtures_dir();
    let mut failures = Vec::new();

    for path in collect_files(&fixtures, ".expected.cpp") {
        let name = test_name(&fixtures, &path);
        let expected = match read(&path) {
            Ok(s) => s,
            Err(e) => {
                failures.push(format!("{name}: {e:#}"));
                continue;
            }
        };

        let markers = leftover_markers(&expected);
        if !markers.is_empty() {
            failures.push(format!("{name}: sugar left in output: {}", markers.join(", ")));
        }

        let again = transform(&expected);
        if again != expected {
            failures.push(format!(
                "{name}: rewriting the output changed it\n--- once ---\n{}\n--- twice ---\n{}",
                expected.trim(),
                again.trim()
            ));
        }
    }

    fail("fixed-point", failures);
}

// Generated inputs: every short sequence over a small alphabet of C++
// fragments, with and without sugar markers.

const FRAGMENTS: &[&str] = &[
    "x", "f", "(", ")", ",", " ", "{", "}", ";", "=>", "??", "?->", "\n", "1", "\"s\"", "*",
];

fn generated(max_len: usize) -> Vec<String> {
    let mut all = vec![String::new()];
    let mut frontier = vec![String::new()];
    for _ in 0..max_len {
        frontier = frontier
            .iter()
            .flat_map(|prefix| FRAGMENTS.iter().map(move |f| format!("{prefix}{f}")))
            .collect();
        all.extend(frontier.iter().cloned());
    }
    all
}

fn has_marker_text(text: &str) -> bool {
    ["=>", "??", "?->"].iter().any(|m| text.contains(m))
}

#[test]
fn generated_inputs_terminate_within_budget() {
    let mut failures = Vec::new();
    for input in generated(3) {
        let markers = ["=>", "??", "?->"]
            .iter()
            .map(|m| input.matches(m).count())
            .sum::<usize>();
        // A null-safe access with no receiver can leave a fresh `?->` behind,
        // so the bound is looser than one rewrite per marker.
        let rewritten = Rewriter::new(&input).run();
        if rewritten.rewrites > 2 * markers {
            failures.push(format!(
                "{input:?}: {} rewrites for {markers} markers",
                rewritten.rewrites
            ));
        }
    }
    fail("termination", failures);
}

#[test]
fn generated_inputs_without_sugar_are_unchanged() {
    let mut failures = Vec::new();
    for input in generated(3).into_iter().filter(|s| !has_marker_text(s)) {
        let output = transform(&input);
        if output != input {
            failures.push(format!("{input:?} became {output:?}"));
        }
    }
    fail("passthrough", failures);
}

#[test]
fn generated_sugar_inside_comments_and_literals_is_unchanged() {
    let mut failures = Vec::new();
    for body in generated(3) {
        let mut wrapped = Vec::new();
        if !body.contains('\n') {
            wrapped.push(format!("// {body}\n"));
        }
        if !body.contains("*/") {
            wrapped.push(format!("/* {body} */"));
        }
        if !body.contains('"') {
            wrapped.push(format!("y = \"{body}\";"));
        }
        for input in wrapped {
            let output = transform(&input);
            if output != input {
                failures.push(format!("{input:?} became {output:?}"));
            }
        }
    }
    fail("literal", failures);
}
