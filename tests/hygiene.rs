//! Source hygiene checks for `src/`.
//!
//! Production code runs inside event handlers where a panic silently kills
//! the rest of the page's behavior, and discarded errors never reach the
//! console. Every pattern below has a budget of zero; `*_test.rs` files are
//! exempt.

use std::fs;
use std::path::Path;

struct SourceFile {
    path: String,
    content: String,
}

/// `(pattern, reason)` pairs that must not appear in production sources.
const FORBIDDEN: &[(&str, &str)] = &[
    (".unwrap()", "panics on failure"),
    (".expect(", "panics on failure"),
    ("panic!(", "aborts the wasm instance"),
    ("unreachable!(", "aborts the wasm instance"),
    ("todo!(", "unfinished code"),
    ("unimplemented!(", "unfinished code"),
    ("let _ =", "discards a result without logging"),
    (".ok()", "discards an error without logging"),
    ("#[allow(dead_code)]", "hides unused code"),
];

fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if !path_str.ends_with(".rs") || path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: path_str, content });
        }
    }
}

fn hits(files: &[SourceFile], pattern: &str) -> Vec<String> {
    files
        .iter()
        .flat_map(|file| {
            file.content
                .lines()
                .enumerate()
                .filter(|(_, line)| line.contains(pattern))
                .map(|(n, line)| format!("  {}:{}: {}", file.path, n + 1, line.trim()))
                .collect::<Vec<_>>()
        })
        .collect()
}

#[test]
fn source_tree_is_found() {
    let files = source_files();
    assert!(files.iter().any(|f| f.path.ends_with("lib.rs")), "run from the crate root");
}

#[test]
fn forbidden_patterns_are_absent() {
    let files = source_files();
    let mut report = Vec::new();
    for (pattern, reason) in FORBIDDEN {
        let found = hits(&files, pattern);
        if !found.is_empty() {
            report.push(format!("`{pattern}` ({reason}):\n{}", found.join("\n")));
        }
    }
    assert!(report.is_empty(), "hygiene violations:\n{}", report.join("\n"));
}

#[test]
fn every_test_module_has_a_sibling_file() {
    let files = source_files();
    for file in &files {
        for line in file.content.lines() {
            let Some(rest) = line.trim().strip_prefix("#[path = \"") else {
                continue;
            };
            let Some(name) = rest.strip_suffix("\"]") else {
                continue;
            };
            let sibling = Path::new(&file.path).with_file_name(name);
            assert!(sibling.exists(), "{} points at missing {}", file.path, sibling.display());
        }
    }
}
