//! Engine traits and types

use crate::config::EngineConfig;
use crate::error::{error_body, ProviderError};
use crate::results::{EngineSource, ImageRecord};
use std::collections::HashMap;

/// HTTP request to be made on behalf of an engine or the keyword extractor
#[derive(Debug, Clone)]
pub struct EngineRequest {
    /// URL to request
    pub url: String,
    /// HTTP method
    pub method: HttpMethod,
    /// Request headers
    pub headers: HashMap<String, String>,
    /// Query parameters
    pub params: HashMap<String, String>,
    /// Request body
    pub data: Option<RequestBody>,
}

impl EngineRequest {
    /// Create a GET request
    pub fn get(url: impl Into<String>) -> Self {
        Self::with_method(url, HttpMethod::Get)
    }

    /// Create a POST request
    pub fn post(url: impl Into<String>) -> Self {
        Self::with_method(url, HttpMethod::Post)
    }

    fn with_method(url: impl Into<String>, method: HttpMethod) -> Self {
        Self {
            url: url.into(),
            method,
            headers: HashMap::new(),
            params: HashMap::new(),
            data: None,
        }
    }

    /// Add a header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Add a query parameter
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Add JSON body
    pub fn json(mut self, data: serde_json::Value) -> Self {
        self.data = Some(RequestBody::Json(data));
        self
    }
}

/// HTTP method
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// Request body types
#[derive(Debug, Clone)]
pub enum RequestBody {
    Json(serde_json::Value),
}

/// HTTP response from an outbound request
#[derive(Debug)]
pub struct EngineResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body as text
    pub text: String,
    /// Response URL (after redirects)
    pub url: String,
}

impl EngineResponse {
    /// Parse response as JSON
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.text)
    }

    /// Check if response is successful (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Turn a non-2xx response into a provider error
    pub fn error_for_status(&self) -> Result<(), ProviderError> {
        if self.is_success() {
            Ok(())
        } else {
            Err(ProviderError::Status {
                status: self.status,
                body: error_body(&self.text),
            })
        }
    }
}

/// Trait implemented by every image search provider
pub trait ImageEngine: Send + Sync {
    /// Provider label stamped on every record
    fn source(&self) -> EngineSource;

    /// Engine name
    fn name(&self) -> &'static str {
        self.source().label()
    }

    /// Short description of the engine
    fn about(&self) -> EngineAbout {
        EngineAbout::default()
    }

    /// Default timeout in seconds
    fn timeout(&self) -> Option<f64> {
        None
    }

    /// Build the HTTP request for a joined keyword query
    fn request(&self, query: &str) -> EngineRequest;

    /// Parse the HTTP response into normalized records
    fn response(&self, response: EngineResponse) -> Result<Vec<ImageRecord>, ProviderError>;

    /// Optional validation of configuration
    fn validate(&self, _config: &EngineConfig) -> anyhow::Result<()> {
        Ok(())
    }
}

/// Engine metadata
#[derive(Debug, Clone, Default)]
pub struct EngineAbout {
    /// Website URL
    pub website: Option<String>,
    /// Whether an API key is required
    pub require_api_key: bool,
}

impl EngineAbout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn website(mut self, url: impl Into<String>) -> Self {
        self.website = Some(url.into());
        self
    }

    pub fn api_key_required(mut self, required: bool) -> Self {
        self.require_api_key = required;
        self
    }
}
