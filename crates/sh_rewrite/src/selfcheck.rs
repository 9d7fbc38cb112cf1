//! Built-in literal input/output pairs checked before rewriting.
//!
//! A mismatch means the engine itself is broken, so callers abort instead
//! of emitting output.

use anyhow::{bail, Result};

use crate::engine::transform;

/// `(input, expected)` pairs.
pub const CASES: &[(&str, &str)] = &[
    ("b?->foo()", "b != nullptr ? b->foo() : nullptr"),
    ("auto foo() => int{42}", "auto foo() { return int{42}; }"),
    ("auto foo() => int{bar()}", "auto foo() { return int{bar()}; }"),
    ("hello", "hello"),
    ("x => x * 2", "[&](auto x){ return x * 2; }"),
    ("(x, y) => x+y", "[&](auto x, auto y){ return x+y; }"),
    ("(x, y) => (x+y) * 2", "[&](auto x, auto y){ return (x+y) * 2; }"),
    ("() => foobar()", "[&](){ return foobar(); }"),
    (
        "(x, y) => { foobar(x); foobar(y); }",
        "[&](auto x, auto y){ foobar(x); foobar(y); }",
    ),
    ("(x => x * x)(2)", "([&](auto x){ return x * x; })(2)"),
    ("x => \n x * x", "[&](auto x){ return x * x; }"),
    ("/* x => x * x */", "/* x => x * x */"),
    ("x /* => */ {42}", "x /* => */ {42}"),
    ("//x => \n x * x", "//x => \n x * x"),
    (
        "(x,y) => { auto i = x * y; /* test } */ return i; }",
        "[&](auto x, auto y){ auto i = x * y; /* test } */ return i; }",
    ),
    ("int get() => this->x;", "int get() { return this->x; };"),
    (
        "auto set(int x, int y) => v = x * y;",
        "auto set(int x, int y) { return v = x * y; };",
    ),
    (
        "std::cout << (x => x * x)(5) << std::endl;",
        "std::cout << ([&](auto x){ return x * x; })(5) << std::endl;",
    ),
    (
        "std::cout << (() => '!')() << std::endl;",
        "std::cout << ([&](){ return '!'; })() << std::endl;",
    ),
    (
        "auto test(auto x = foo(), auto y = {42}) => x * y;",
        "auto test(auto x = foo(), auto y = {42}) { return x * y; };",
    ),
    ("a ?? b", "first_not_null(a, b)"),
    ("foo(a ?? b)", "foo(first_not_null(a, b))"),
    ("foo(x() ?? y(1, 2))", "foo(first_not_null(x(), y(1, 2)))"),
    ("std::cout << (a ?? b)", "std::cout << (first_not_null(a, b))"),
    ("x => !(x % 5)", "[&](auto x){ return !(x % 5); }"),
];

/// Transform every case and fail with all mismatches listed.
///
/// Returns the number of cases checked.
pub fn run() -> Result<usize> {
    let failures: Vec<String> = CASES
        .iter()
        .filter_map(|&(input, expected)| {
            let actual = transform(input);
            (actual != expected).then(|| {
                format!("input:    {input:?}\nexpected: {expected:?}\nactual:   {actual:?}")
            })
        })
        .collect();

    if !failures.is_empty() {
        bail!(
            "{} self-check case(s) failed:\n\n{}",
            failures.len(),
            failures.join("\n\n")
        );
    }

    Ok(CASES.len())
}
