//! Engine loader for initializing engines from configuration

use super::registry::EngineRegistry;
use super::traits::ImageEngine;
use super::{pixabay, unsplash};
use crate::config::{EngineConfig, Settings};
use std::sync::Arc;
use tracing::{info, warn};

/// Loader for initializing engines from configuration
pub struct EngineLoader;

impl EngineLoader {
    /// Load all enabled engines from settings, Pixabay first
    pub fn load(settings: &Settings) -> EngineRegistry {
        let mut registry = EngineRegistry::new();

        let configured: [(&str, &EngineConfig); 2] = [
            ("pixabay", &settings.engines.pixabay),
            ("unsplash", &settings.engines.unsplash),
        ];

        for (engine_type, config) in configured {
            if config.disabled {
                info!("Skipping disabled engine: {}", engine_type);
                continue;
            }

            match Self::create_engine(engine_type, config) {
                Ok(engine) => {
                    let about = engine.about();
                    if about.require_api_key && config.api_key.trim().is_empty() {
                        warn!("No API key configured for {}; its searches will fail", engine.name());
                    }
                    info!(
                        "Loaded engine: {} ({})",
                        engine.name(),
                        about.website.as_deref().unwrap_or("no website")
                    );
                    registry.register(engine);
                }
                Err(e) => {
                    warn!("Failed to load engine {}: {}", engine_type, e);
                }
            }
        }

        info!("Loaded {} engines", registry.len());
        registry
    }

    /// Create an engine instance by type
    fn create_engine(engine_type: &str, config: &EngineConfig) -> anyhow::Result<Arc<dyn ImageEngine>> {
        let engine: Box<dyn ImageEngine> = match engine_type {
            "pixabay" => Box::new(pixabay::Pixabay::new(config)),
            "unsplash" => Box::new(unsplash::Unsplash::new(config)),
            _ => {
                return Err(anyhow::anyhow!("Unknown engine type: {}", engine_type));
            }
        };

        // Validate configuration
        engine.validate(config)?;

        Ok(Arc::from(engine))
    }
}
