//! Result type definitions

use crate::error::ProviderError;
use crate::keywords::KeywordList;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The provider an image came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EngineSource {
    Pixabay,
    Unsplash,
}

impl EngineSource {
    /// Label used on the wire and in logs
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pixabay => "Pixabay",
            Self::Unsplash => "Unsplash",
        }
    }
}

impl fmt::Display for EngineSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Provider-scoped image id. Pixabay uses numbers, Unsplash uses slugs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ImageId {
    Number(u64),
    Text(String),
}

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// A single image, normalized across providers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRecord {
    pub id: ImageId,
    #[serde(rename = "previewURL")]
    pub preview_url: String,
    #[serde(rename = "webformatURL")]
    pub webformat_url: String,
    #[serde(rename = "largeImageURL")]
    pub large_image_url: String,
    /// Comma-separated tags
    pub tags: String,
    /// Attribution name
    pub user: String,
    pub source: EngineSource,
    /// Native provider fields passed through untouched
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ImageRecord {
    /// Identity across providers, since ids only are unique per source
    pub fn key(&self) -> String {
        format!("{}-{}", self.source, self.id)
    }
}

/// Keywords plus the merged, shuffled images for one request
#[derive(Debug, Clone, Serialize)]
pub struct SearchResult {
    pub keywords: KeywordList,
    pub images: Vec<ImageRecord>,
}

/// An engine whose search failed during this request
#[derive(Debug)]
pub struct UnresponsiveEngine {
    pub engine: EngineSource,
    pub error: ProviderError,
}
