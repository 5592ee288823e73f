use std::collections::HashMap;

use parking_lot::Mutex;
use repo_widget::dom::ElementId;
use repo_widget::github::{ApiRequest, ApiResponse};
use repo_widget::styles::STYLE_ELEMENT_ID;
use repo_widget::{
    create, Container, Document, Error, GithubClient, MemoryDocument, Theme, Transport,
    WidgetOptions, DEFAULT_API_URL,
};

/// Records every request and answers from a path table.
///
/// When `observe` is set, the content of that element is captured on each
/// request so tests can see what the page showed while the fetch was open.
#[derive(Default)]
struct RecordingTransport {
    routes: HashMap<String, (u16, String)>,
    requests: Mutex<Vec<ApiRequest>>,
    observe: Option<(MemoryDocument, ElementId)>,
    observed: Mutex<Vec<String>>,
}

impl RecordingTransport {
    fn route(mut self, path: &str, status: u16, body: &str) -> Self {
        self.routes.insert(path.to_string(), (status, body.to_string()));
        self
    }

    fn observing(mut self, doc: &MemoryDocument, element: ElementId) -> Self {
        self.observe = Some((doc.clone(), element));
        self
    }

    fn paths(&self) -> Vec<String> {
        self.requests
            .lock()
            .iter()
            .map(|r| r.url.trim_start_matches(DEFAULT_API_URL).to_string())
            .collect()
    }
}

impl Transport for RecordingTransport {
    async fn get(&self, request: ApiRequest) -> repo_widget::Result<ApiResponse> {
        if let Some((doc, element)) = &self.observe {
            self.observed
                .lock()
                .push(doc.inner_html(*element).unwrap_or_default());
        }
        let path = request.url.trim_start_matches(DEFAULT_API_URL).to_string();
        self.requests.lock().push(request);
        match self.routes.get(&path) {
            Some((status, body)) => Ok(ApiResponse {
                status: *status,
                body: body.clone(),
            }),
            None => Err(Error::Http(format!("no route for {}", path))),
        }
    }
}

const ACME_WIDGET: &str = r#"{
    "name": "widget",
    "stargazers_count": 1234,
    "forks_count": 56,
    "open_issues_count": 0,
    "description": null,
    "owner": {"login": "acme", "avatar_url": "https://avatars.example/u/1"}
}"#;

fn acme() -> RecordingTransport {
    RecordingTransport::default()
        .route("/repos/acme/widget", 200, ACME_WIDGET)
        .route("/repos/acme/widget/languages", 200, "{}")
}

#[tokio::test]
async fn renders_minimal_repository() {
    let doc = MemoryDocument::new();
    let mount = doc.append_element("widget");
    let client = GithubClient::with_transport(acme());

    create(&doc, &client, &WidgetOptions::new("#widget", "acme", "widget"))
        .await
        .unwrap();

    let html = doc.inner_html(mount).unwrap();
    assert!(html.contains(r#"<span class="gh-widget-stat-value">1.2k</span> stars"#));
    assert!(html.contains(r#"<span class="gh-widget-stat-value">56</span> forks"#));
    assert!(!html.contains("issues"));
    assert!(html.contains(r#"<div class="gh-widget-description"></div>"#));
    assert!(!html.contains("gh-widget-languages"));
    assert!(!html.contains("gh-widget-traffic"));
    assert!(!html.contains("gh-widget-loading"));
}

#[tokio::test]
async fn missing_repository_shows_error_state() {
    let doc = MemoryDocument::new();
    let mount = doc.append_element("widget");
    let client = GithubClient::with_transport(
        RecordingTransport::default().route("/repos/acme/widget", 404, r#"{"message":"Not Found"}"#),
    );

    create(&doc, &client, &WidgetOptions::new(mount, "acme", "widget").with_theme(Theme::Dark))
        .await
        .unwrap();

    let html = doc.inner_html(mount).unwrap();
    assert_eq!(
        html,
        r#"<div class="gh-widget dark"><div class="gh-widget-error">Repository not found: acme/widget</div></div>"#
    );
}

#[tokio::test]
async fn transport_failure_shows_error_state() {
    let doc = MemoryDocument::new();
    let mount = doc.append_element("widget");
    let client = GithubClient::with_transport(RecordingTransport::default());

    create(&doc, &client, &WidgetOptions::new(mount, "acme", "widget"))
        .await
        .unwrap();

    let html = doc.inner_html(mount).unwrap();
    assert!(html.contains("gh-widget-error"));
    assert!(!html.contains("gh-widget-loading"));
}

#[tokio::test]
async fn missing_container_fails_before_any_request() {
    let doc = MemoryDocument::new();
    doc.append_element("other");
    let client = GithubClient::with_transport(acme());

    let err = create(&doc, &client, &WidgetOptions::new("#widget", "acme", "widget"))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::ContainerNotFound));
    assert_eq!(err.to_string(), "Container element not found");
    assert!(client.transport().paths().is_empty());
}

#[tokio::test]
async fn blank_owner_fails_before_any_request() {
    let doc = MemoryDocument::new();
    doc.append_element("widget");
    let client = GithubClient::with_transport(acme());

    let err = create(&doc, &client, &WidgetOptions::new("#widget", "", "widget"))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::InvalidOptions(_)));
    assert!(client.transport().paths().is_empty());
}

#[tokio::test]
async fn loading_placeholder_shown_during_fetch() {
    let doc = MemoryDocument::new();
    let mount = doc.append_element("widget");
    let client = GithubClient::with_transport(acme().observing(&doc, mount));

    create(&doc, &client, &WidgetOptions::new(mount, "acme", "widget"))
        .await
        .unwrap();

    let observed = client.transport().observed.lock();
    assert!(!observed.is_empty());
    assert!(observed[0].contains("Loading repository..."));
    assert!(!doc.inner_html(mount).unwrap().contains("Loading"));
}

#[tokio::test]
async fn styles_injected_once_across_widgets() {
    let doc = MemoryDocument::new();
    let first = doc.append_element("one");
    let second = doc.append_element("two");
    let client = GithubClient::with_transport(acme());

    for mount in [first, second] {
        create(&doc, &client, &WidgetOptions::new(Container::Element(mount), "acme", "widget"))
            .await
            .unwrap();
    }

    assert!(doc.contains_id(STYLE_ELEMENT_ID));
    assert_eq!(doc.style_count(), 1);
}

#[tokio::test]
async fn styles_injected_even_when_container_missing() {
    let doc = MemoryDocument::new();
    let client = GithubClient::with_transport(acme());

    let _ = create(&doc, &client, &WidgetOptions::new("#nope", "acme", "widget")).await;

    assert_eq!(doc.style_count(), 1);
}

#[tokio::test]
async fn token_enables_traffic_block() {
    let doc = MemoryDocument::new();
    let mount = doc.append_element("widget");
    let client = GithubClient::with_transport(
        acme()
            .route("/repos/acme/widget/traffic/views", 200, r#"{"count": 4200, "uniques": 97}"#)
            .route("/repos/acme/widget/traffic/clones", 200, r#"{"count": 31, "uniques": 12}"#),
    );

    create(
        &doc,
        &client,
        &WidgetOptions::new(mount, "acme", "widget").with_token("secret"),
    )
    .await
    .unwrap();

    let html = doc.inner_html(mount).unwrap();
    assert!(html.contains("Traffic (last 14 days)"));
    assert!(html.contains(r#"<span class="gh-widget-traffic-value">4.2k</span>"#));
    assert!(html.contains("Views (97 unique)"));
    assert!(html.contains("Clones (12 unique)"));

    let requests = client.transport().requests.lock();
    assert_eq!(requests.len(), 4);
    assert!(requests
        .iter()
        .all(|r| r.header("Authorization") == Some("Bearer secret")));
}

#[tokio::test]
async fn partial_traffic_failure_hides_block() {
    let doc = MemoryDocument::new();
    let mount = doc.append_element("widget");
    let client = GithubClient::with_transport(
        acme().route("/repos/acme/widget/traffic/views", 200, r#"{"count": 4200, "uniques": 97}"#),
    );

    create(
        &doc,
        &client,
        &WidgetOptions::new(mount, "acme", "widget").with_token("secret"),
    )
    .await
    .unwrap();

    let html = doc.inner_html(mount).unwrap();
    assert!(!html.contains("gh-widget-traffic"));
    assert!(html.contains("1.2k"));
}

#[tokio::test]
async fn recreate_replaces_content() {
    let doc = MemoryDocument::new();
    let mount = doc.append_element("widget");

    let failing = GithubClient::with_transport(RecordingTransport::default());
    create(&doc, &failing, &WidgetOptions::new(mount, "acme", "widget"))
        .await
        .unwrap();
    assert!(doc.inner_html(mount).unwrap().contains("gh-widget-error"));

    let working = GithubClient::with_transport(acme());
    create(&doc, &working, &WidgetOptions::new(mount, "acme", "widget"))
        .await
        .unwrap();
    let html = doc.inner_html(mount).unwrap();
    assert!(!html.contains("gh-widget-error"));
    assert!(html.contains("1.2k"));
}

#[tokio::test]
async fn page_serializes_mounted_widget() {
    let doc = MemoryDocument::new();
    doc.append_element("widget");
    let client = GithubClient::with_transport(acme());

    create(&doc, &client, &WidgetOptions::new("#widget", "acme", "widget"))
        .await
        .unwrap();

    let page = doc.to_html_page("acme/widget");
    assert!(page.contains(r#"<style id="gh-widget-styles">"#));
    assert!(page.contains(r#"<div id="widget"><div class="gh-widget">"#));
}
