//! Pixabay image search engine implementation
//!
//! Uses Pixabay's official API. Hits are passed through as-is, with the
//! `source` label added.

use super::traits::*;
use crate::config::EngineConfig;
use crate::error::ProviderError;
use crate::results::{EngineSource, ImageId, ImageRecord};
use anyhow::Result as AnyhowResult;
use serde::Deserialize;

const DEFAULT_URL: &str = "https://pixabay.com/api/";
const DEFAULT_PER_PAGE: u32 = 100;

/// Pixabay license-free stock photo search
pub struct Pixabay {
    api_url: String,
    api_key: String,
    per_page: u32,
    timeout: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    hits: Vec<Hit>,
}

#[derive(Debug, Deserialize)]
struct Hit {
    id: u64,
    #[serde(rename = "previewURL")]
    preview_url: String,
    #[serde(rename = "webformatURL")]
    webformat_url: String,
    #[serde(rename = "largeImageURL")]
    large_image_url: String,
    #[serde(default)]
    tags: String,
    #[serde(default)]
    user: String,
    #[serde(flatten)]
    extra: serde_json::Map<String, serde_json::Value>,
}

impl From<Hit> for ImageRecord {
    fn from(hit: Hit) -> Self {
        ImageRecord {
            id: ImageId::Number(hit.id),
            preview_url: hit.preview_url,
            webformat_url: hit.webformat_url,
            large_image_url: hit.large_image_url,
            tags: hit.tags,
            user: hit.user,
            source: EngineSource::Pixabay,
            extra: hit.extra,
        }
    }
}

impl Pixabay {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            api_url: config
                .base_url
                .clone()
                .unwrap_or_else(|| DEFAULT_URL.to_string()),
            api_key: config.api_key.clone(),
            per_page: config.per_page.unwrap_or(DEFAULT_PER_PAGE),
            timeout: config.timeout,
        }
    }
}

impl ImageEngine for Pixabay {
    fn source(&self) -> EngineSource {
        EngineSource::Pixabay
    }

    fn about(&self) -> EngineAbout {
        EngineAbout::new()
            .website("https://pixabay.com")
            .api_key_required(true)
    }

    fn timeout(&self) -> Option<f64> {
        self.timeout
    }

    fn request(&self, query: &str) -> EngineRequest {
        EngineRequest::get(&self.api_url)
            .param("key", &self.api_key)
            .param("q", query)
            .param("image_type", "photo")
            .param("license", "cc0")
            .param("safesearch", "true")
            .param("per_page", self.per_page.to_string())
    }

    fn response(&self, response: EngineResponse) -> Result<Vec<ImageRecord>, ProviderError> {
        response.error_for_status()?;

        let body: SearchResponse = response.json().map_err(ProviderError::Malformed)?;
        Ok(body.hits.into_iter().map(ImageRecord::from).collect())
    }

    fn validate(&self, _config: &EngineConfig) -> AnyhowResult<()> {
        url::Url::parse(&self.api_url)
            .map_err(|e| anyhow::anyhow!("Invalid Pixabay URL {}: {}", self.api_url, e))?;
        // Pixabay rejects per_page outside 3..=200
        if !(3..=200).contains(&self.per_page) {
            anyhow::bail!("Pixabay per_page must be 3-200, got {}", self.per_page);
        }
        Ok(())
    }
}
