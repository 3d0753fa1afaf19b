use std::fs;

use tempfile::TempDir;
use tp_core::TokenCategory;
use tp_shell::run_scan;

#[tokio::test]
async fn scan_counts_configured_content_and_theme_overrides() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    fs::write(
        root.join("index.html"),
        r#"<body class="bg-sunset text-primary md:bg-primary"></body>"#,
    )
    .unwrap();
    fs::create_dir_all(root.join("src")).unwrap();
    fs::write(root.join("src/ignored.vue"), r#"<p class="bg-dark"></p>"#).unwrap();

    let theme_path = root.join("theme.toml");
    fs::write(&theme_path, "[colors]\nsunset = \"#f97316\"\n").unwrap();
    let config_path = root.join("travel-planner.toml");
    fs::write(
        &config_path,
        format!(
            "[theme]\nfile = {:?}\ncontent = [\"./index.html\"]\n",
            theme_path.display().to_string()
        ),
    )
    .unwrap();

    let summary = run_scan(Some(config_path), root).await.unwrap();

    assert_eq!(summary.usage.files_scanned, 1);
    assert_eq!(summary.usage.count(TokenCategory::Color, "sunset"), 1);
    assert_eq!(summary.usage.count(TokenCategory::Color, "primary"), 2);
    assert_eq!(summary.usage.count(TokenCategory::Color, "dark"), 0);
    assert!(summary
        .unused
        .iter()
        .any(|token| token.category == TokenCategory::Color && token.name == "dark"));
    assert!(!summary.unused.iter().any(|token| token.name == "sunset"));
}

#[tokio::test]
async fn scan_without_config_uses_default_globs() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("index.html"), r#"<div class="shadow-premium"></div>"#).unwrap();

    let summary = run_scan(None, dir.path()).await.unwrap();

    assert_eq!(summary.usage.files_scanned, 1);
    assert_eq!(summary.usage.count(TokenCategory::Shadow, "premium"), 1);
}
