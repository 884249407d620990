#![allow(dead_code)]

use course_search::models::Config;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Config pointing at the mock server, with instant retries.
pub fn config_for(server: &MockServer) -> Config {
    let mut config = Config::default();
    config.site.origin = server.uri();
    config.site.listing_url = format!("{}/collections?page={{page}}", server.uri());
    config.crawler.retry_attempts = 1;
    config.crawler.retry_backoff_ms = 0;
    config.crawler.timeout_secs = 5;
    config
}

/// Markup of one published course card.
pub fn card(title: &str, price: Option<&str>, stars: usize) -> String {
    let slug = title.to_lowercase().replace(' ', "-");
    let price = price
        .map(|p| format!(r#"<span class="course-card__price"> {p} </span>"#))
        .unwrap_or_default();
    format!(
        r#"<a class="course-card course-card__public published" href="/courses/{slug}">
            <img class="course-card__img" src="https://cdn.example.com/{slug}.png">
            <h4>Data Science</h4>
            <h3>{title}</h3>
            {stars}
            <span class="course-card__lesson-count">10 Lessons</span>
            {price}
        </a>"#,
        stars = r#"<i class="fa fa-star"></i>"#.repeat(stars),
    )
}

pub fn listing(cards: &[String]) -> String {
    format!(
        "<html><body><div class=\"collections\">{}</div></body></html>",
        cards.concat()
    )
}

/// Serve `body` for `?page=n`, expecting exactly `times` requests.
pub async fn mount_page(server: &MockServer, page: u32, body: String, times: u64) {
    Mock::given(method("GET"))
        .and(path("/collections"))
        .and(query_param("page", page.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "text/html; charset=utf-8"))
        .expect(times)
        .mount(server)
        .await;
}

/// Answer `?page=n` with `status`.
pub async fn mount_status(server: &MockServer, page: u32, status: u16, times: u64) {
    Mock::given(method("GET"))
        .and(path("/collections"))
        .and(query_param("page", page.to_string()))
        .respond_with(ResponseTemplate::new(status))
        .expect(times)
        .mount(server)
        .await;
}
