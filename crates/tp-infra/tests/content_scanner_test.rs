use std::fs;
use std::path::Path;

use tempfile::TempDir;
use tp_core::{load_theme, ThemeConfig, TokenCategory};
use tp_infra::ContentScanner;

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn project() -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(root, "index.html", r#"<body class="bg-dark font-sans"><div id="app"></div></body>"#);
    write(
        root,
        "src/App.vue",
        r#"<template><main class="text-primary hover:bg-primary-light/80"></main></template>"#,
    );
    write(
        root,
        "src/components/TripCard.tsx",
        r#"export const Card = () => <div className="shadow-premium border-secondary" />;"#,
    );
    write(root, "src/notes.md", "bg-accent is not scanned here");
    write(root, "node_modules/lib/index.js", r#"el.className = "bg-accent";"#);
    dir
}

#[test]
fn default_globs_select_index_and_source_files() {
    let dir = project();
    let scanner = ContentScanner::from_theme_config(&ThemeConfig::default()).unwrap();

    let files = scanner.matching_files(dir.path()).unwrap();
    let mut relative: Vec<String> = files
        .iter()
        .map(|p| {
            p.strip_prefix(dir.path())
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect();
    relative.sort();

    assert_eq!(
        relative,
        vec!["index.html", "src/App.vue", "src/components/TripCard.tsx"]
    );
}

#[test]
fn scan_counts_used_tokens_and_reports_unused() {
    let dir = project();
    let theme = load_theme();
    let scanner = ContentScanner::from_theme_config(&ThemeConfig::default()).unwrap();

    let usage = scanner.scan(dir.path(), &theme).unwrap();

    assert_eq!(usage.files_scanned, 3);
    assert_eq!(usage.count(TokenCategory::Color, "dark"), 1);
    assert_eq!(usage.count(TokenCategory::Color, "primary"), 1);
    assert_eq!(usage.count(TokenCategory::Color, "primary-light"), 1);
    assert_eq!(usage.count(TokenCategory::Color, "secondary"), 1);
    assert_eq!(usage.count(TokenCategory::Shadow, "premium"), 1);
    assert_eq!(usage.count(TokenCategory::Font, "sans"), 1);
    assert_eq!(usage.count(TokenCategory::Color, "accent"), 0);

    let unused: Vec<String> = usage.unused(&theme).into_iter().map(|t| t.name).collect();
    assert!(unused.contains(&"accent".to_string()));
    assert!(unused.contains(&"premium-sm".to_string()));
    assert!(!unused.contains(&"primary".to_string()));
}

#[test]
fn non_utf8_source_is_scanned_lossily() {
    let dir = TempDir::new().unwrap();
    let mut bytes = b"<div class=\"bg-accent \xff\xfe text-dark\"></div>".to_vec();
    bytes.extend_from_slice(&[0xc3, 0x28]);
    fs::write(dir.path().join("index.html"), bytes).unwrap();
    let scanner = ContentScanner::new(&["./index.html".to_string()]).unwrap();

    let usage = scanner.scan(dir.path(), &load_theme()).unwrap();

    assert_eq!(usage.files_scanned, 1);
    assert_eq!(usage.count(TokenCategory::Color, "accent"), 1);
    assert_eq!(usage.count(TokenCategory::Color, "dark"), 1);
}
