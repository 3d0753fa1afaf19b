use sentry::Level;
use tp_shell::bootstrap::tracing::init_tracing_subscriber;

#[test]
fn test_sentry_tracing_integration() {
    std::env::set_var("SENTRY_DSN", "https://public@example.com/1");
    std::env::set_var("RUST_LOG", "info");

    init_tracing_subscriber().expect("Failed to init tracing");

    let events = sentry::test::with_captured_events(|| {
        tracing::error!(phase = "services_ready", "Bootstrap step failed");
    });

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].level, Level::Error);
    assert_eq!(events[0].message.as_deref(), Some("Bootstrap step failed"));

    let events = sentry::test::with_captured_events(|| {
        tracing::warn!("Document store unreachable");
        tracing::error!("Mount failed");
    });

    assert_eq!(events.len(), 1);
    let breadcrumbs: Vec<_> = events[0]
        .breadcrumbs
        .iter()
        .filter(|b| b.message.as_deref() == Some("Document store unreachable"))
        .collect();

    assert_eq!(breadcrumbs.len(), 1);
    assert_eq!(breadcrumbs[0].level, Level::Warning);
}
