//! Engine registry for the enabled image providers

use super::traits::ImageEngine;
use crate::results::EngineSource;
use std::sync::Arc;

/// Ordered registry of image engines.
///
/// Registration order is the order batches are concatenated in before
/// shuffling.
#[derive(Default)]
pub struct EngineRegistry {
    engines: Vec<Arc<dyn ImageEngine>>,
}

impl EngineRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an engine, replacing any engine with the same source
    pub fn register(&mut self, engine: Arc<dyn ImageEngine>) {
        let source = engine.source();
        match self.engines.iter_mut().find(|e| e.source() == source) {
            Some(slot) => *slot = engine,
            None => self.engines.push(engine),
        }
    }

    /// Get an engine by source
    pub fn get(&self, source: EngineSource) -> Option<&Arc<dyn ImageEngine>> {
        self.engines.iter().find(|e| e.source() == source)
    }

    /// All engines, in registration order
    pub fn engines(&self) -> &[Arc<dyn ImageEngine>] {
        &self.engines
    }

    /// Get all engine names
    pub fn names(&self) -> Vec<&'static str> {
        self.engines.iter().map(|e| e.name()).collect()
    }

    /// Get number of registered engines
    pub fn len(&self) -> usize {
        self.engines.len()
    }

    /// Check if registry is empty
    pub fn is_empty(&self) -> bool {
        self.engines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::engines::{Pixabay, Unsplash};

    #[test]
    fn test_registry_keeps_order() {
        let mut registry = EngineRegistry::new();
        registry.register(Arc::new(Pixabay::new(&EngineConfig::default())));
        registry.register(Arc::new(Unsplash::new(&EngineConfig::default())));

        assert_eq!(registry.names(), vec!["Pixabay", "Unsplash"]);
        assert!(registry.get(EngineSource::Unsplash).is_some());
    }

    #[test]
    fn test_register_replaces_same_source() {
        let mut registry = EngineRegistry::new();
        registry.register(Arc::new(Pixabay::new(&EngineConfig::default())));
        registry.register(Arc::new(Pixabay::new(&EngineConfig {
            per_page: Some(50),
            ..Default::default()
        })));

        assert_eq!(registry.len(), 1);
        let engine = registry.get(EngineSource::Pixabay).unwrap();
        assert_eq!(engine.request("cat").params["per_page"], "50");
    }
}
