#![cfg(feature = "web")]

mod common;

use course_search::pipeline::Aggregator;
use course_search::web::{AppState, router};
use tokio::net::TcpListener;
use wiremock::MockServer;

use common::{card, config_for, listing, mount_page};

/// Start the UI against a mock catalog site and return its base URL.
async fn start_ui(site: &MockServer) -> String {
    let mut config = config_for(site);
    config.site.max_pages = 1;

    let aggregator = Aggregator::from_config(&config).expect("aggregator");
    let state = AppState::new(aggregator, config.site.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        axum::serve(listener, router(state)).await.expect("serve");
    });
    format!("http://{addr}")
}

async fn get_json(url: &str) -> serde_json::Value {
    let body = reqwest::get(url)
        .await
        .expect("request")
        .text()
        .await
        .expect("body");
    serde_json::from_str(&body).expect("json")
}

async fn mount_catalog(site: &MockServer, times: u64) {
    mount_page(
        site,
        1,
        listing(&[
            card("Python for Beginners", Some("Free"), 4),
            card("Advanced SQL", Some("₹4,999"), 5),
        ]),
        times,
    )
    .await;
}

#[tokio::test]
async fn index_renders_filtered_cards() {
    let site = MockServer::start().await;
    mount_catalog(&site, 1).await;
    let base = start_ui(&site).await;

    let html = reqwest::get(format!("{base}/?category=paid"))
        .await
        .expect("request")
        .text()
        .await
        .expect("body");

    assert!(html.contains("<h3>Advanced SQL</h3>"));
    assert!(!html.contains("<h3>Python for Beginners</h3>"));
    assert!(html.contains("Showing all courses."));
    assert!(html.contains(&format!("href=\"{}/courses/advanced-sql\"", site.uri())));
}

#[tokio::test]
async fn index_shows_suggestions_and_no_results_message() {
    let site = MockServer::start().await;
    mount_catalog(&site, 1).await;
    let base = start_ui(&site).await;

    let html = reqwest::get(format!("{base}/?q=Pythn"))
        .await
        .expect("request")
        .text()
        .await
        .expect("body");

    assert!(html.contains("Did you mean:"));
    assert!(html.contains("<li>Python for Beginners</li>"));
    assert!(html.contains("No courses found matching your search query."));
}

#[tokio::test]
async fn api_returns_json_and_reuses_cached_catalog() {
    let site = MockServer::start().await;
    // Two requests below, one scrape.
    mount_catalog(&site, 1).await;
    let base = start_ui(&site).await;

    let first = get_json(&format!("{base}/api/courses?category=free")).await;
    let second = get_json(&format!("{base}/api/courses?q=sql")).await;

    assert_eq!(first["courses"][0]["title"], "Python for Beginners");
    assert_eq!(first["category"], "free");
    assert_eq!(second["courses"][0]["title"], "Advanced SQL");
}

#[tokio::test]
async fn refresh_scrapes_again() {
    let site = MockServer::start().await;
    mount_catalog(&site, 2).await;
    let base = start_ui(&site).await;

    let client = reqwest::Client::new();
    client.get(format!("{base}/")).send().await.expect("request");
    let response = client
        .post(format!("{base}/refresh"))
        .send()
        .await
        .expect("request");

    // The redirect is followed back to the index.
    assert!(response.status().is_success());
}

#[tokio::test]
async fn unknown_category_is_rejected() {
    let site = MockServer::start().await;
    mount_catalog(&site, 0).await;
    let base = start_ui(&site).await;

    let response = reqwest::get(format!("{base}/?category=cheap"))
        .await
        .expect("request");
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
}
