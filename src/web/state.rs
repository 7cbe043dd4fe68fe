//! Application state shared across handlers

use crate::config::Settings;
use crate::engines::EngineRegistry;
use crate::keywords::KeywordExtractor;
use crate::network::HttpClient;
use crate::search::Search;
use std::sync::Arc;

/// Shared application state. Everything in here is read-only.
#[derive(Clone)]
pub struct AppState {
    /// Engine registry
    pub registry: Arc<EngineRegistry>,
    /// Search executor
    pub search: Arc<Search>,
}

impl AppState {
    /// Create new application state
    pub fn new(settings: &Settings, registry: EngineRegistry, client: HttpClient) -> Self {
        let registry = Arc::new(registry);
        let extractor = KeywordExtractor::new(client.clone(), &settings.keywords);
        let search = Arc::new(Search::new(client, registry.clone(), extractor));

        Self {
            registry,
            search,
        }
    }
}
