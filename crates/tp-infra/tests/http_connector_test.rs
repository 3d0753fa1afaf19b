use std::time::Duration;

use mockito::{Matcher, Server};
use tp_core::ports::ServiceConnectorPort;
use tp_core::ServiceConfig;
use tp_infra::HttpServiceConnector;

const DOCUMENTS_PATH: &str = "/v1/projects/x/databases/(default)/documents";

fn config_for(server: &Server) -> ServiceConfig {
    ServiceConfig::builder()
        .api_key("test-key")
        .auth_domain("x.example.com")
        .project_id("x")
        .endpoint(format!("{}/v1", server.url()))
        .build()
}

fn connector() -> HttpServiceConnector {
    HttpServiceConnector::new(Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn reachable_store_connects_with_api_key() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", DOCUMENTS_PATH)
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("key".into(), "test-key".into()),
            Matcher::UrlEncoded("pageSize".into(), "1".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("{}")
        .create_async()
        .await;

    connector().connect(&config_for(&server)).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn empty_database_counts_as_reachable() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", DOCUMENTS_PATH)
        .match_query(Matcher::Any)
        .with_status(404)
        .create_async()
        .await;

    assert!(connector().connect(&config_for(&server)).await.is_ok());
}

#[tokio::test]
async fn rejected_credentials_are_unavailable() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", DOCUMENTS_PATH)
        .match_query(Matcher::Any)
        .with_status(403)
        .create_async()
        .await;

    let err = connector().connect(&config_for(&server)).await.unwrap_err();

    assert_eq!(err.project, "x");
    assert!(err.reason.contains("credentials rejected"));
}

#[tokio::test]
async fn server_error_is_unavailable() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", DOCUMENTS_PATH)
        .match_query(Matcher::Any)
        .with_status(503)
        .create_async()
        .await;

    let err = connector().connect(&config_for(&server)).await.unwrap_err();

    assert!(err.reason.contains("503"));
}

#[tokio::test]
async fn unreachable_host_is_unavailable() {
    let config = ServiceConfig::builder()
        .api_key("test-key")
        .auth_domain("x.example.com")
        .project_id("x")
        .endpoint("http://127.0.0.1:9/v1")
        .build();

    let err = HttpServiceConnector::new(Duration::from_millis(500))
        .unwrap()
        .connect(&config)
        .await
        .unwrap_err();

    assert!(err.reason.starts_with("request failed"));
}
