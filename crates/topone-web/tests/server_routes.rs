//! Integration tests for the Axum router

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use std::sync::Arc;
use topone_core::{NavTree, ThemePreference};
use topone_web::{create_router, SiteState, NAV_DATA_ID};
use tower::ServiceExt;

async fn get(router: axum::Router, uri: &str) -> (StatusCode, String) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

fn site(theme: ThemePreference) -> SiteState {
    SiteState::new(Arc::new(NavTree::site()), theme)
}

#[tokio::test]
async fn test_health_endpoint() {
    let router = create_router(site(ThemePreference::System));
    let (status, body) = get(router, "/api/health").await;

    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["nav_items"], 4);
    assert_eq!(json["frontend_built"], false);
    assert_eq!(json["routes"].as_array().map(Vec::len), Some(10));
    assert_eq!(json["theme"], "system");
}

#[tokio::test]
async fn test_nav_endpoint_returns_tree() {
    let router = create_router(site(ThemePreference::System));
    let (status, body) = get(router, "/api/nav").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(NavTree::from_json(&body).unwrap(), NavTree::site());
}

#[tokio::test]
async fn test_page_routes_serve_placeholder_shell() {
    for uri in ["/", "/product/seaweed", "/contact"] {
        let router = create_router(site(ThemePreference::Dark));
        let (status, body) = get(router, uri).await;

        assert_eq!(status, StatusCode::OK, "{uri}");
        assert!(body.contains("Top One Plus | Organic Fertilizer"));
        assert!(body.contains(r#"<html class="dark""#));
        assert!(body.contains(NAV_DATA_ID));
    }
}

#[tokio::test]
async fn test_system_theme_renders_light_first_paint() {
    let router = create_router(site(ThemePreference::System));
    let (_, body) = get(router, "/").await;
    assert!(body.contains(r#"<html class="light""#));
}

#[tokio::test]
async fn test_dist_dir_assets_and_shell() {
    let dist = tempfile::tempdir().unwrap();
    std::fs::write(
        dist.path().join("index.html"),
        "<!DOCTYPE html><html lang=\"en\"><head><title>built</title></head><body></body></html>",
    )
    .unwrap();
    std::fs::write(dist.path().join("app.css"), "body { margin: 0; }").unwrap();

    let state = site(ThemePreference::Light).with_dist_dir(dist.path());
    assert!(state.dist_dir.is_some());

    let (status, css) = get(create_router(state.clone()), "/app.css").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(css, "body { margin: 0; }");

    let (status, page) = get(create_router(state.clone()), "/application/cereals").await;
    assert_eq!(status, StatusCode::OK);
    assert!(page.contains("<title>built</title>"));
    assert!(page.contains(NAV_DATA_ID));

    let (_, health) = get(create_router(state), "/api/health").await;
    assert!(health.contains(r#""frontend_built":true"#));
}

#[tokio::test]
async fn test_missing_index_falls_back_to_placeholder() {
    let empty = tempfile::tempdir().unwrap();
    let state = site(ThemePreference::Light).with_dist_dir(empty.path());
    assert!(state.dist_dir.is_none());

    let (status, body) = get(create_router(state), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Build Required"));
}
