//! Unsplash photo search engine implementation

use super::traits::*;
use crate::config::EngineConfig;
use crate::error::ProviderError;
use crate::results::{EngineSource, ImageId, ImageRecord};
use anyhow::Result as AnyhowResult;
use serde::Deserialize;

const DEFAULT_URL: &str = "https://api.unsplash.com/search/photos";
const DEFAULT_PER_PAGE: u32 = 30;

/// Unsplash curated photo search
pub struct Unsplash {
    api_url: String,
    access_key: String,
    per_page: u32,
    timeout: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    results: Vec<Photo>,
}

#[derive(Debug, Deserialize)]
struct Photo {
    id: String,
    urls: Urls,
    #[serde(default)]
    tags: Option<Vec<Tag>>,
    user: User,
}

#[derive(Debug, Deserialize)]
struct Urls {
    thumb: String,
    regular: String,
    full: String,
}

#[derive(Debug, Deserialize)]
struct Tag {
    #[serde(default)]
    title: String,
}

#[derive(Debug, Deserialize)]
struct User {
    name: String,
}

impl From<Photo> for ImageRecord {
    fn from(photo: Photo) -> Self {
        let tags = photo
            .tags
            .map(|tags| {
                tags.into_iter()
                    .map(|t| t.title)
                    .collect::<Vec<_>>()
                    .join(", ")
            })
            .unwrap_or_default();

        ImageRecord {
            id: ImageId::Text(photo.id),
            preview_url: photo.urls.thumb,
            webformat_url: photo.urls.regular,
            large_image_url: photo.urls.full,
            tags,
            user: photo.user.name,
            source: EngineSource::Unsplash,
            extra: serde_json::Map::new(),
        }
    }
}

impl Unsplash {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            api_url: config
                .base_url
                .clone()
                .unwrap_or_else(|| DEFAULT_URL.to_string()),
            access_key: config.api_key.clone(),
            per_page: config.per_page.unwrap_or(DEFAULT_PER_PAGE),
            timeout: config.timeout,
        }
    }
}

impl ImageEngine for Unsplash {
    fn source(&self) -> EngineSource {
        EngineSource::Unsplash
    }

    fn about(&self) -> EngineAbout {
        EngineAbout::new()
            .website("https://unsplash.com")
            .api_key_required(true)
    }

    fn timeout(&self) -> Option<f64> {
        self.timeout
    }

    fn request(&self, query: &str) -> EngineRequest {
        EngineRequest::get(&self.api_url)
            .param("query", query)
            .param("per_page", self.per_page.to_string())
            .header("Authorization", format!("Client-ID {}", self.access_key))
            .header("Accept-Version", "v1")
    }

    fn response(&self, response: EngineResponse) -> Result<Vec<ImageRecord>, ProviderError> {
        response.error_for_status()?;

        let body: SearchResponse = response.json().map_err(ProviderError::Malformed)?;
        Ok(body.results.into_iter().map(ImageRecord::from).collect())
    }

    fn validate(&self, _config: &EngineConfig) -> AnyhowResult<()> {
        url::Url::parse(&self.api_url)
            .map_err(|e| anyhow::anyhow!("Invalid Unsplash URL {}: {}", self.api_url, e))?;
        if !(1..=30).contains(&self.per_page) {
            anyhow::bail!("Unsplash per_page must be 1-30, got {}", self.per_page);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn engine() -> Unsplash {
        Unsplash::new(&EngineConfig {
            api_key: "u-key".to_string(),
            ..Default::default()
        })
    }

    fn ok(body: serde_json::Value) -> EngineResponse {
        EngineResponse {
            status: 200,
            text: body.to_string(),
            url: DEFAULT_URL.to_string(),
        }
    }

    fn photo(id: &str, tags: serde_json::Value) -> serde_json::Value {
        json!({
            "id": id,
            "urls": {
                "raw": "https://images.unsplash.com/raw",
                "full": "https://images.unsplash.com/full",
                "regular": "https://images.unsplash.com/regular",
                "small": "https://images.unsplash.com/small",
                "thumb": "https://images.unsplash.com/thumb"
            },
            "tags": tags,
            "user": { "name": "Jane Doe", "username": "jdoe" }
        })
    }

    #[test]
    fn test_unsplash_request() {
        let request = engine().request("yellow umbrella");

        assert!(request.url.contains("api.unsplash.com"));
        assert_eq!(request.params["query"], "yellow umbrella");
        assert_eq!(request.params["per_page"], "30");
        assert_eq!(request.headers["Authorization"], "Client-ID u-key");
        assert!(!request.params.contains_key("client_id"));
    }

    #[test]
    fn test_unsplash_response_maps_nested_fields() {
        let records = engine()
            .response(ok(json!({
                "total": 2,
                "results": [photo("eOLpJytrbsQ", json!([{ "title": "rain" }, { "title": "umbrella" }]))]
            })))
            .unwrap();

        let record = &records[0];
        assert_eq!(record.id, ImageId::Text("eOLpJytrbsQ".to_string()));
        assert_eq!(record.preview_url, "https://images.unsplash.com/thumb");
        assert_eq!(record.webformat_url, "https://images.unsplash.com/regular");
        assert_eq!(record.large_image_url, "https://images.unsplash.com/full");
        assert_eq!(record.tags, "rain, umbrella");
        assert_eq!(record.user, "Jane Doe");
        assert_eq!(record.source, EngineSource::Unsplash);
    }

    #[test]
    fn test_unsplash_missing_tags_become_empty() {
        let mut without_tags = photo("b", json!(null));
        without_tags.as_object_mut().unwrap().remove("tags");

        let records = engine()
            .response(ok(json!({
                "results": [photo("a", json!(null)), without_tags]
            })))
            .unwrap();

        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.tags.is_empty()));
    }

    #[test]
    fn test_unsplash_malformed_response() {
        let result = engine().response(ok(json!({
            "results": [{ "id": "x", "urls": {}, "user": { "name": "n" } }]
        })));
        assert!(matches!(result, Err(ProviderError::Malformed(_))));
    }

    #[test]
    fn test_unsplash_http_error() {
        let response = EngineResponse {
            status: 401,
            text: r#"{"errors":["OAuth error: The access token is invalid"]}"#.to_string(),
            url: DEFAULT_URL.to_string(),
        };
        assert!(matches!(
            engine().response(response),
            Err(ProviderError::Status { status: 401, .. })
        ));
    }
}
