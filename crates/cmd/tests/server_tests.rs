// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use cmd::common::load_site;
use cmd::server::build_router;
use sitegen::{Site, SiteConfig};

fn app() -> Router {
    build_router(Arc::new(load_site(None).expect("built-in site")))
}

async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let resp = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn test_home_lists_everything() {
    let (status, body) = get(app(), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("data-mode=\"server\""));
    assert!(body.contains("Showing 57 results"));
    assert_eq!(body.matches("class=\"card\"").count(), 57);
}

#[tokio::test]
async fn test_home_filters_by_query() {
    let (status, body) = get(app(), "/?type=Cathedral&country=France").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("/architecture/notre-dame-cathedral"));
    assert!(!body.contains("href=\"/architecture/st-peters-basilica\""));
    assert!(body.contains("Type: Cathedral"));
    assert!(body.contains("Country: France"));
}

#[tokio::test]
async fn test_home_no_results() {
    let (status, body) = get(app(), "/?country=Atlantis").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("No architecture matches your current filter."));
    assert_eq!(body.matches("class=\"card\"").count(), 0);
}

#[tokio::test]
async fn test_detail_page() {
    let (status, body) = get(app(), "/architecture/notre-dame-cathedral").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<h1>Notre-Dame Cathedral</h1>"));
    assert!(body.contains("Historical Context"));
    assert!(body.contains("More Sacred Architecture"));
}

#[tokio::test]
async fn test_unknown_landmark_is_404() {
    let (status, body) = get(app(), "/architecture/atlantis-temple").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Architecture not found"));
    assert!(body.contains("Return to Home"));
}

#[tokio::test]
async fn test_content_pages() {
    for (uri, heading) in [
        ("/about", "About Sacred Architecture"),
        ("/theory", "Architectural Theory"),
        ("/contact", "Contact Us"),
    ] {
        let (status, body) = get(app(), uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert!(body.contains(heading), "{uri}");
    }
}

#[tokio::test]
async fn test_unknown_path_is_404() {
    let (status, body) = get(app(), "/blog").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Architecture not found"));

    let (status, _) = get(app(), "/no/such/page").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_assets() {
    let resp = app()
        .oneshot(Request::builder().uri("/style.css").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(header::CONTENT_TYPE).unwrap(),
        "text/css; charset=utf-8"
    );

    let (status, body) = get(app(), "/filter.js").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("data-facet"));
}

#[tokio::test]
async fn test_catalog_json() {
    let (status, body) = get(app(), "/catalog.json").await;
    assert_eq!(status, StatusCode::OK);
    let records: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(records.as_array().unwrap().len(), 57);
    assert_eq!(records[0]["id"], "st-peters-basilica");
}

#[tokio::test]
async fn test_health() {
    let (status, body) = get(app(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");
}

#[tokio::test]
async fn test_mounted_under_base_url() {
    let mut config = SiteConfig::embedded().unwrap();
    config.site.base_url = "/sacred/".to_string();
    let app = build_router(Arc::new(Site::load(config).unwrap()));

    let (status, body) = get(app.clone(), "/sacred/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("href=\"/sacred/architecture/st-peters-basilica\""));

    let (status, _) = get(app.clone(), "/sacred/architecture/hagia-sophia").await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = get(app, "/architecture/hagia-sophia").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
