//! Shared fixtures for tests that talk to mocked upstream services

use crate::config::Settings;
use serde_json::{json, Value};
use std::time::Duration;
use wiremock::matchers::{header, method, path, path_regex, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const PIXABAY_PATH: &str = "/pixabay/api/";
pub const UNSPLASH_PATH: &str = "/unsplash/search/photos";

pub const KOREAN_EXAMPLE_KEYWORDS: &str =
    r#"["yellow umbrella", "child", "rainy day", "illustration"]"#;

/// Settings pointing every upstream at the mock server
pub fn settings_for(uri: &str) -> Settings {
    let mut settings = Settings::default();
    settings.outgoing.request_timeout = 5.0;
    settings.keywords.api_key = "g-key".to_string();
    settings.keywords.base_url = uri.to_string();
    settings.engines.pixabay.api_key = "p-key".to_string();
    settings.engines.pixabay.base_url = Some(format!("{}{}", uri, PIXABAY_PATH));
    settings.engines.unsplash.api_key = "u-key".to_string();
    settings.engines.unsplash.base_url = Some(format!("{}{}", uri, UNSPLASH_PATH));
    settings
}

pub fn gemini_body(text: &str) -> Value {
    json!({
        "candidates": [{
            "content": { "parts": [{ "text": text }], "role": "model" },
            "finishReason": "STOP"
        }]
    })
}

pub fn pixabay_body(count: u64) -> Value {
    let hits: Vec<Value> = (1..=count)
        .map(|id| {
            json!({
                "id": id,
                "pageURL": format!("https://pixabay.com/photos/{}/", id),
                "type": "photo",
                "tags": "umbrella, rain, child",
                "previewURL": format!("https://cdn.pixabay.com/{}_150.jpg", id),
                "webformatURL": format!("https://pixabay.com/get/{}_640.jpg", id),
                "largeImageURL": format!("https://pixabay.com/get/{}_1280.jpg", id),
                "user": "pixabay-user"
            })
        })
        .collect();
    json!({ "total": count, "totalHits": count, "hits": hits })
}

pub fn unsplash_body(count: u64) -> Value {
    let results: Vec<Value> = (1..=count)
        .map(|id| {
            json!({
                "id": format!("u{}", id),
                "urls": {
                    "thumb": format!("https://images.unsplash.com/u{}?w=200", id),
                    "regular": format!("https://images.unsplash.com/u{}?w=1080", id),
                    "full": format!("https://images.unsplash.com/u{}", id)
                },
                "tags": [{ "title": "umbrella" }, { "title": "rain" }],
                "user": { "name": "Unsplash User" }
            })
        })
        .collect();
    json!({ "total": count, "total_pages": 1, "results": results })
}

pub async fn mount_gemini(server: &MockServer, body: Value) {
    Mock::given(method("POST"))
        .and(path_regex(r":generateContent$"))
        .and(header("x-goog-api-key", "g-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

pub async fn mount_pixabay(server: &MockServer, status: u16, body: Value) {
    Mock::given(method("GET"))
        .and(path(PIXABAY_PATH))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(server)
        .await;
}

pub async fn mount_pixabay_expecting_query(server: &MockServer, query: &str) {
    Mock::given(method("GET"))
        .and(path(PIXABAY_PATH))
        .and(query_param("q", query))
        .and(query_param("key", "p-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(pixabay_body(1)))
        .expect(1)
        .mount(server)
        .await;
}

pub async fn mount_unsplash(server: &MockServer, status: u16, body: Value) {
    Mock::given(method("GET"))
        .and(path(UNSPLASH_PATH))
        .and(header("authorization", "Client-ID u-key"))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(server)
        .await;
}

pub async fn mount_unsplash_delayed(server: &MockServer, body: Value, delay: Duration) {
    Mock::given(method("GET"))
        .and(path(UNSPLASH_PATH))
        .and(header("authorization", "Client-ID u-key"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(body)
                .set_delay(delay),
        )
        .mount(server)
        .await;
}
