//! End-to-end tests for the hostdash snapshot.
//!
//! Each test stands up a fake host-management API with `wiremock`, points the
//! real configuration, reqwest adapter and dashboard service at it, and checks
//! the rendered page.

use hostdash::config::Config;
use hostdash::render::PageText;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> Config {
    let mut config = Config::default();
    config.api.base_url = server.uri();
    config.api.timeout_seconds = 5;
    config
}

async fn respond(server: &MockServer, at: &str, status: u16, body: &str) {
    Mock::given(method("GET"))
        .and(path(at))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(server)
        .await;
}

// ---------------------------------------------------------------------------
// Host views
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_mount_one_view_per_alive_host_in_order() {
    let server = MockServer::start().await;
    respond(
        &server,
        "/api/host/alive",
        200,
        r#"[{"_links":{"self":{"href":"/api/host/h1"}}},{"_links":{"self":{"href":"/api/host/h2"}}}]"#,
    )
    .await;
    respond(
        &server,
        "/api/host/h1",
        200,
        r#"{"name":"a","status":"up","paths":{"/":"/root"}}"#,
    )
    .await;
    respond(
        &server,
        "/api/host/h2",
        200,
        r#"{"name":"b","status":"down","paths":{}}"#,
    )
    .await;
    respond(&server, "/api/logs", 200, "[]").await;

    let page = hostdash::snapshot(&config_for(&server)).await.unwrap();

    let urls: Vec<&str> = page.hosts().iter().map(|view| view.url()).collect();
    assert_eq!(urls, vec!["/api/host/h1", "/api/host/h2"]);

    let first = &page.hosts()[0];
    assert_eq!(first.name(), Some("a"));
    assert_eq!(first.status(), "up");
    assert_eq!(first.regions().paths, r#"{"/":"/root"}"#);
    assert_eq!(page.hosts()[1].status(), "down");
}

#[tokio::test]
async fn should_leave_rejected_host_undetermined() {
    let server = MockServer::start().await;
    respond(
        &server,
        "/api/host/alive",
        200,
        r#"[{"_links":{"self":{"href":"/api/host/gone"}}}]"#,
    )
    .await;
    respond(&server, "/api/host/gone", 404, r#""Host not found""#).await;
    respond(&server, "/api/logs", 200, "[]").await;

    let page = hostdash::snapshot(&config_for(&server)).await.unwrap();

    let view = &page.hosts()[0];
    assert_eq!(view.status(), "undetermined");
    assert_eq!(view.name(), None);
    assert_eq!(view.error(), None);
}

#[tokio::test]
async fn should_show_host_list_error_when_api_is_down() {
    let mut config = Config::default();
    config.api.base_url = "http://127.0.0.1:1".to_string();
    config.api.timeout_seconds = 5;

    let page = hostdash::snapshot(&config).await.unwrap();

    assert!(page.hosts().is_empty());
    assert!(page.hosts_error().is_some());
    assert!(page.logs().text().is_some());
}

// ---------------------------------------------------------------------------
// Logs
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_render_log_items() {
    let server = MockServer::start().await;
    respond(&server, "/api/host/alive", 200, "[]").await;
    respond(
        &server,
        "/api/logs",
        200,
        r#"[{"time":"t1","content":"m1"},{"time":"t2","content":"Starting\nnginx"}]"#,
    )
    .await;

    let page = hostdash::snapshot(&config_for(&server)).await.unwrap();
    let text = PageText(&page).to_string();

    assert_eq!(page.logs().items().len(), 2);
    assert!(text.contains("  [t1] m1\n"));
    assert!(text.contains("  [t2] Starting<br/>nginx\n"));
}

#[tokio::test]
async fn should_show_rejected_log_body_as_text() {
    let server = MockServer::start().await;
    respond(&server, "/api/host/alive", 200, "[]").await;
    respond(&server, "/api/logs", 500, r#""log store unavailable""#).await;

    let page = hostdash::snapshot(&config_for(&server)).await.unwrap();

    assert_eq!(page.logs().text(), Some("log store unavailable"));
    assert!(page.logs().items().is_empty());
}
