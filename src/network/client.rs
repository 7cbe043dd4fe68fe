//! HTTP client for making requests to the language model and image providers

use crate::config::OutgoingSettings;
use crate::engines::{EngineRequest, EngineResponse, HttpMethod, RequestBody};
use anyhow::Result;
use reqwest::{Client, Response};
use std::time::Duration;

/// HTTP client wrapper shared by every outbound call
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    default_timeout: Duration,
    user_agent: String,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Result<Self> {
        Self::with_settings(&OutgoingSettings::default())
    }

    /// Create a new HTTP client with custom settings
    pub fn with_settings(settings: &OutgoingSettings) -> Result<Self> {
        let default_timeout = Duration::try_from_secs_f64(settings.request_timeout).map_err(|e| {
            anyhow::anyhow!("Invalid request timeout {}: {}", settings.request_timeout, e)
        })?;

        let mut builder = Client::builder()
            .timeout(default_timeout)
            .pool_max_idle_per_host(settings.pool_maxsize)
            .gzip(true)
            .brotli(true);

        // SSL verification
        if !settings.verify_ssl {
            builder = builder.danger_accept_invalid_certs(true);
        }

        // Proxy settings
        if let Some(ref proxy_url) = settings.proxies.all {
            builder = builder.proxy(reqwest::Proxy::all(proxy_url)?);
        } else {
            if let Some(ref http) = settings.proxies.http {
                builder = builder.proxy(reqwest::Proxy::http(http)?);
            }
            if let Some(ref https) = settings.proxies.https {
                builder = builder.proxy(reqwest::Proxy::https(https)?);
            }
        }

        let client = builder.build()?;

        Ok(Self {
            client,
            default_timeout,
            user_agent: format!("image-searchmate/{}", crate::VERSION),
        })
    }

    /// Transport timeout applied to every request
    pub fn default_timeout(&self) -> Duration {
        self.default_timeout
    }

    /// Execute a request
    pub async fn execute(&self, request: EngineRequest) -> reqwest::Result<EngineResponse> {
        self.execute_with_timeout(request, self.default_timeout).await
    }

    /// Execute a request with custom timeout
    pub async fn execute_with_timeout(
        &self,
        request: EngineRequest,
        timeout: Duration,
    ) -> reqwest::Result<EngineResponse> {
        let mut req_builder = match request.method {
            HttpMethod::Get => self.client.get(&request.url),
            HttpMethod::Post => self.client.post(&request.url),
        };

        req_builder = req_builder
            .timeout(timeout)
            .header("User-Agent", &self.user_agent)
            .header("Accept", "application/json");

        // Add custom headers
        for (key, value) in &request.headers {
            req_builder = req_builder.header(key, value);
        }

        // Add query parameters
        if !request.params.is_empty() {
            req_builder = req_builder.query(&request.params);
        }

        // Add body
        if let Some(body) = request.data {
            req_builder = match body {
                RequestBody::Json(json) => req_builder.json(&json),
            };
        }

        let response = req_builder.send().await?;

        Self::parse_response(response).await
    }

    /// Parse response into EngineResponse
    async fn parse_response(response: Response) -> reqwest::Result<EngineResponse> {
        let status = response.status().as_u16();
        let url = response.url().to_string();
        let text = response.text().await?;

        Ok(EngineResponse { status, text, url })
    }
}
