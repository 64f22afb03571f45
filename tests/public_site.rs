use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use rivulet_docs::application::catalog::TopicService;
use rivulet_docs::application::chrome::ChromeService;
use rivulet_docs::config::SiteSettings;
use rivulet_docs::infra::http::{HttpState, build_router};

fn test_router() -> Router {
    let state = HttpState {
        topics: Arc::new(TopicService::new()),
        chrome: Arc::new(ChromeService::new(SiteSettings::default())),
    };
    build_router(state)
}

async fn get(router: Router, uri: &str) -> (StatusCode, String) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8_lossy(&bytes).into_owned())
}

#[tokio::test]
async fn index_renders_landing_page() {
    let (status, body) = get(test_router(), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Rivulet API Micro Framework"));
    assert!(body.contains("Get Started"));
    assert!(body.contains("Explore our comprehensive documentation"));
}

#[tokio::test]
async fn every_topic_page_renders() {
    let service = TopicService::new();
    for slug in service.topic_slugs() {
        let (status, body) = get(test_router(), &format!("/{slug}")).await;
        assert_eq!(status, StatusCode::OK, "topic `{slug}` did not render");
        assert!(
            body.contains("doc-topic"),
            "topic `{slug}` missing article markup"
        );
    }
}

#[tokio::test]
async fn topic_page_contains_highlighted_code() {
    let (status, body) = get(test_router(), "/routing").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Routing System"));
    assert!(body.contains("code-block-label"));
    assert!(body.contains("syntax-lang-php"));
    assert!(body.contains("styles/code.css"));
}

#[tokio::test]
async fn sidebar_lists_every_menu_entry() {
    let (_, body) = get(test_router(), "/").await;
    for label in [
        "Getting Started",
        "Installation",
        "Database Connection",
        "Creating Models",
        "Routing",
        "Luna CLI",
    ] {
        assert!(body.contains(label), "sidebar missing `{label}`");
    }
}

#[tokio::test]
async fn menu_entries_without_pages_render_styled_not_found() {
    for slug in ["authentication", "debugging", "queues", "testing", "listeners"] {
        let (status, body) = get(test_router(), &format!("/{slug}")).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "`{slug}` should 404");
        assert!(body.contains("Page Not Found"));
        assert!(body.contains("Back to the docs"));
    }
}

#[tokio::test]
async fn arbitrary_junk_renders_styled_not_found() {
    let (status, body) = get(test_router(), "/no-such-page").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Page Not Found"));
}

#[tokio::test]
async fn static_assets_are_served_with_cache_headers() {
    let response = test_router()
        .oneshot(
            Request::builder()
                .uri("/static/public/styles/site.css")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/css"));
    let cache_control = response
        .headers()
        .get(header::CACHE_CONTROL)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(cache_control.contains("immutable"));
}

#[tokio::test]
async fn code_stylesheet_includes_generated_theme() {
    let (status, body) = get(test_router(), "/static/public/styles/code.css").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Syntect theme"));
}

#[tokio::test]
async fn asset_traversal_is_rejected() {
    let (status, _) = get(test_router(), "/static/public/../secret").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn health_and_robots_endpoints_respond() {
    let (status, _) = get(test_router(), "/_health").await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = get(test_router(), "/robots.txt").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("User-agent: *"));
}

#[tokio::test]
async fn session_cookies_is_reachable_but_not_in_sidebar() {
    let (status, body) = get(test_router(), "/session-cookies").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Session &amp; Cookie Management") || body.contains("Session & Cookie"));

    let (_, home) = get(test_router(), "/").await;
    assert!(!home.contains("href=\"/session-cookies\""));
}
