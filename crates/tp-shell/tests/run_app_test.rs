//! End-to-end bootstrap through `run_app`.
//!
//! The service client factory and the marker defaults are process-wide, so
//! this binary runs exactly one bootstrap.

use std::fs;

use mockito::{Matcher, Server};
use tempfile::TempDir;
use tp_core::{BootstrapPhase, ServiceStatus};
use tp_platform::MarkerIconDefaults;
use tp_shell::{run_app, RunOptions};

#[tokio::test]
async fn run_app_mounts_shell_and_reaches_document_store() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/v1/projects/x/databases/(default)/documents")
        .match_query(Matcher::UrlEncoded("key".into(), "test-key".into()))
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("travel-planner.toml");
    fs::write(
        &config_path,
        format!(
            r##"
            [service]
            apiKey = "test-key"
            authDomain = "x.example.com"
            projectId = "x"
            endpoint = "{}/v1"

            [ui]
            mount_target = "#app"

            [assets]
            stylesheets = ["/src/style.css"]
            icon_fonts = ["@phosphor-icons/web/regular"]
            "##,
            server.url()
        ),
    )
    .unwrap();
    let output_dir = temp_dir.path().join("dist");

    let report = run_app(RunOptions {
        config_path: Some(config_path),
        headless: false,
        output_dir: Some(output_dir.clone()),
        wait_for_service: true,
    })
    .await
    .unwrap();

    assert_eq!(report.phase, BootstrapPhase::Mounted);
    assert_eq!(report.project_id, "x");
    assert_eq!(report.mount_target.selector(), "#app");
    assert_eq!(report.assets.stylesheets, 2);
    assert_eq!(report.assets.icon_fonts, 1);
    assert_eq!(report.service.status(), ServiceStatus::Ready);
    mock.assert_async().await;

    let html = fs::read_to_string(output_dir.join("index.html")).unwrap();
    assert!(html.contains(r#"data-project="x""#));
    assert!(html.contains(r#"href="/src/style.css""#));
    assert!(html.contains("@phosphor-icons/web/src/regular/style.css"));
    assert!(!html.contains("test-key"));

    assert_eq!(
        MarkerIconDefaults::global()
            .effective_icon_url()
            .unwrap()
            .as_deref(),
        Some("/assets/leaflet/images/marker-icon.png")
    );
}
