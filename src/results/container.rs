//! Result container for merging image batches from multiple engines

use super::types::*;
use crate::error::ProviderError;
use rand::seq::SliceRandom;
use rand::Rng;

/// Container for one request's engine outcomes.
///
/// Batches are kept in the order they were added, which is engine
/// registration order, so the pre-shuffle concatenation is deterministic.
#[derive(Debug, Default)]
pub struct ResultContainer {
    /// Successful batches, in engine order
    batches: Vec<(EngineSource, Vec<ImageRecord>)>,
    /// Engines that failed
    unresponsive_engines: Vec<UnresponsiveEngine>,
}

impl ResultContainer {
    /// Create a new empty result container
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one engine's records
    pub fn add_results(&mut self, engine: EngineSource, records: Vec<ImageRecord>) {
        self.batches.push((engine, records));
    }

    /// Record an unresponsive engine
    pub fn add_unresponsive(&mut self, engine: EngineSource, error: ProviderError) {
        self.unresponsive_engines
            .push(UnresponsiveEngine { engine, error });
    }

    /// Get unresponsive engines
    pub fn unresponsive(&self) -> &[UnresponsiveEngine] {
        &self.unresponsive_engines
    }

    /// Total number of records across all batches
    pub fn result_count(&self) -> usize {
        self.batches.iter().map(|(_, records)| records.len()).sum()
    }

    /// Concatenate batches in engine order
    pub fn into_merged(self) -> Vec<ImageRecord> {
        let mut merged = Vec::with_capacity(self.result_count());
        for (_, records) in self.batches {
            merged.extend(records);
        }
        merged
    }

    /// Concatenate batches and apply a uniform random permutation
    pub fn into_shuffled<R: Rng + ?Sized>(self, rng: &mut R) -> Vec<ImageRecord> {
        let mut merged = self.into_merged();
        merged.shuffle(rng);
        merged
    }
}
