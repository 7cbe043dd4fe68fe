//! Settings structures for Image SearchMate configuration

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;
use url::Url;

/// Main settings structure, loaded once at startup and injected everywhere
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub outgoing: OutgoingSettings,
    pub keywords: KeywordSettings,
    pub engines: EnginesSettings,
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_yaml::from_str(&content)?;
        Ok(settings)
    }

    /// Merge credentials and port from the process environment
    pub fn merge_env(&mut self) {
        self.merge_vars(|key| std::env::var(key).ok());
    }

    /// Merge values from an arbitrary variable lookup
    pub fn merge_vars<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("GEMINI_API_KEY") {
            self.keywords.api_key = val;
        }
        if let Some(val) = lookup("PIXABAY_API_KEY") {
            self.engines.pixabay.api_key = val;
        }
        if let Some(val) = lookup("UNSPLASH_ACCESS_KEY") {
            self.engines.unsplash.api_key = val;
        }
        if let Some(val) = lookup("PORT") {
            match val.parse() {
                Ok(port) => self.server.port = port,
                Err(_) => warn!("Ignoring invalid PORT value: {}", val),
            }
        }
    }

    /// Check that the settings describe a runnable service
    pub fn validate(&self) -> Result<()> {
        if self.keywords.api_key.trim().is_empty() {
            bail!("GEMINI_API_KEY is not set");
        }
        Url::parse(&self.keywords.base_url)
            .map_err(|e| anyhow::anyhow!("Invalid keywords.base_url: {}", e))?;
        if !is_valid_timeout(self.outgoing.request_timeout) {
            bail!(
                "outgoing.request_timeout must be a positive number of seconds, got {}",
                self.outgoing.request_timeout
            );
        }
        for (name, engine) in [
            ("pixabay", &self.engines.pixabay),
            ("unsplash", &self.engines.unsplash),
        ] {
            if let Some(timeout) = engine.timeout.filter(|t| !is_valid_timeout(*t)) {
                bail!(
                    "engines.{}.timeout must be a positive number of seconds, got {}",
                    name,
                    timeout
                );
            }
        }
        Ok(())
    }
}

fn is_valid_timeout(seconds: f64) -> bool {
    seconds.is_finite() && seconds > 0.0
}

/// Server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Server port
    pub port: u16,
    /// Bind address
    pub bind_address: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: 3000,
            bind_address: "0.0.0.0".to_string(),
        }
    }
}

/// Outgoing request settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutgoingSettings {
    /// Transport timeout for every outbound call, in seconds
    pub request_timeout: f64,
    /// Max idle connections kept per upstream host
    pub pool_maxsize: usize,
    /// Verify SSL certificates
    pub verify_ssl: bool,
    /// Proxy settings
    pub proxies: ProxySettings,
}

impl Default for OutgoingSettings {
    fn default() -> Self {
        Self {
            request_timeout: 10.0,
            pool_maxsize: 20,
            verify_ssl: true,
            proxies: ProxySettings::default(),
        }
    }
}

/// Proxy settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProxySettings {
    pub http: Option<String>,
    pub https: Option<String>,
    pub all: Option<String>,
}

/// Generative-language service used for keyword extraction
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordSettings {
    /// Gemini API key
    pub api_key: String,
    /// API root, without the `/v1/models/...` path
    pub base_url: String,
    /// Model identifier
    pub model: String,
}

impl Default for KeywordSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            model: "gemini-1.5-pro-002".to_string(),
        }
    }
}

/// Per-provider settings, in fan-out order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EnginesSettings {
    pub pixabay: EngineConfig,
    pub unsplash: EngineConfig,
}

/// Individual engine configuration
///
/// Unset fields fall back to the engine's own defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Whether engine is disabled
    pub disabled: bool,
    /// API key / access key
    pub api_key: String,
    /// Search endpoint URL
    pub base_url: Option<String>,
    /// Results requested in the single page fetched
    pub per_page: Option<u32>,
    /// Custom timeout for this engine, in seconds
    pub timeout: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.server.port, 3000);
        assert!(settings.engines.pixabay.base_url.is_none());
        assert_eq!(settings.keywords.model, "gemini-1.5-pro-002");
    }

    #[test]
    fn test_merge_vars() {
        let mut settings = Settings::default();
        settings.merge_vars(lookup(&[
            ("GEMINI_API_KEY", "g-key"),
            ("PIXABAY_API_KEY", "p-key"),
            ("UNSPLASH_ACCESS_KEY", "u-key"),
            ("PORT", "8080"),
        ]));

        assert_eq!(settings.keywords.api_key, "g-key");
        assert_eq!(settings.engines.pixabay.api_key, "p-key");
        assert_eq!(settings.engines.unsplash.api_key, "u-key");
        assert_eq!(settings.server.port, 8080);
    }

    #[test]
    fn test_invalid_port_is_ignored() {
        let mut settings = Settings::default();
        settings.merge_vars(lookup(&[("PORT", "not-a-port")]));
        assert_eq!(settings.server.port, 3000);
    }

    #[test]
    fn test_validate() {
        let mut settings = Settings::default();
        assert!(settings.validate().is_err());

        settings.keywords.api_key = "g-key".to_string();
        assert!(settings.validate().is_ok());

        settings.keywords.base_url = "not a url".to_string();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_non_finite_timeouts() {
        let yaml = r#"
keywords:
  api_key: g-key
outgoing:
  request_timeout: .inf
"#;
        let settings: Settings = serde_yaml::from_str(yaml).unwrap();
        assert!(settings.outgoing.request_timeout.is_infinite());
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.keywords.api_key = "g-key".to_string();
        settings.outgoing.request_timeout = f64::NAN;
        assert!(settings.validate().is_err());

        settings.outgoing.request_timeout = 10.0;
        settings.engines.unsplash.timeout = Some(f64::INFINITY);
        assert!(settings.validate().is_err());

        settings.engines.unsplash.timeout = Some(0.0);
        assert!(settings.validate().is_err());

        settings.engines.unsplash.timeout = Some(2.5);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_yaml_overrides_defaults() {
        let yaml = r#"
server:
  port: 9000
engines:
  unsplash:
    disabled: true
    per_page: 10
"#;
        let settings: Settings = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(settings.server.port, 9000);
        assert_eq!(settings.server.bind_address, "0.0.0.0");
        assert!(settings.engines.unsplash.disabled);
        assert_eq!(settings.engines.unsplash.per_page, Some(10));
        assert!(!settings.engines.pixabay.disabled);
    }
}
