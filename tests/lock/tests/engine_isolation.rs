//! Build-graph isolation for the engine crate.
//!
//! `wayfind-search` stays a pure library: no I/O, no threads, no knowledge
//! of reports or hashing. Those belong to the harness.

use std::fs;
use std::path::{Path, PathBuf};

/// Forbidden patterns in non-comment engine source lines.
const FORBIDDEN_SOURCE: &[&str] = &[
    "std::fs",
    "std::io",
    "std::thread",
    "std::sync",
    "std::env",
    "wayfind_harness",
    "serde_json",
];

/// Dependencies the engine manifest may declare.
const ALLOWED_DEPENDENCIES: &[&str] = &["thiserror", "tracing"];

fn search_crate() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../search")
}

fn walk(dir: &Path, files: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            walk(&path, files);
        } else if path.extension().is_some_and(|e| e == "rs") {
            files.push(path);
        }
    }
}

#[test]
fn engine_source_has_no_io_or_threads() {
    let mut files = Vec::new();
    walk(&search_crate().join("src"), &mut files);
    assert!(!files.is_empty(), "engine sources not found");

    let mut violations = Vec::new();
    for path in files {
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };
        for (line_no, line) in content.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.starts_with("//") {
                continue;
            }
            for pattern in FORBIDDEN_SOURCE {
                if trimmed.contains(pattern) {
                    violations.push(format!("  {}:{}: {trimmed}", path.display(), line_no + 1));
                }
            }
        }
    }

    assert!(
        violations.is_empty(),
        "engine source reaches outside its boundary:\n{}",
        violations.join("\n")
    );
}

#[test]
fn engine_manifest_declares_only_allowed_dependencies() {
    let manifest = fs::read_to_string(search_crate().join("Cargo.toml")).unwrap();
    let mut in_dependencies = false;
    for line in manifest.lines().map(str::trim) {
        if line.starts_with('[') {
            in_dependencies = line == "[dependencies]";
            continue;
        }
        if !in_dependencies || line.is_empty() || line.starts_with('#') {
            continue;
        }
        let name = line.split('=').next().unwrap_or("").trim();
        assert!(
            ALLOWED_DEPENDENCIES.contains(&name),
            "unexpected engine dependency: {name}"
        );
    }
}
