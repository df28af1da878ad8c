//! Hygiene checks over the production source tree.
//!
//! A panic inside the WASM module takes every island on the page down with
//! it, so the patterns below have a budget of zero outside `_test.rs` files.
//! Discarded `Result<(), JsValue>` values from DOM calls are allowed.

use std::fs;
use std::path::{Path, PathBuf};

/// (pattern, budget) pairs checked line by line.
const BUDGETS: &[(&str, usize)] = &[
    (".unwrap()", 0),
    (".expect(", 0),
    ("panic!(", 0),
    ("unreachable!(", 0),
    ("todo!(", 0),
    ("unimplemented!(", 0),
    ("#[allow(dead_code)]", 0),
    ("dbg!(", 0),
];

fn production_files(dir: &Path, out: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for path in entries.flatten().map(|e| e.path()) {
        if path.is_dir() {
            production_files(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") && !path.to_string_lossy().ends_with("_test.rs") {
            out.push(path);
        }
    }
}

fn hits(pattern: &str) -> Vec<String> {
    let mut files = Vec::new();
    production_files(Path::new("src"), &mut files);
    files
        .iter()
        .filter_map(|path| {
            let content = fs::read_to_string(path).ok()?;
            let count = content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| format!("  {}: {count}", path.display()))
        })
        .collect()
}

#[test]
fn source_tree_is_found() {
    let mut files = Vec::new();
    production_files(Path::new("src"), &mut files);
    assert!(files.iter().any(|p| p.ends_with("lib.rs")), "run from the crate root");
}

#[test]
fn panicking_patterns_stay_within_budget() {
    let mut failures = Vec::new();
    for (pattern, budget) in BUDGETS {
        let found = hits(pattern);
        if found.len() > *budget {
            failures.push(format!("`{pattern}` (budget {budget}):\n{}", found.join("\n")));
        }
    }
    assert!(failures.is_empty(), "hygiene budgets exceeded:\n{}", failures.join("\n"));
}
