//! Search execution and orchestration

use super::models::SearchRequest;
use crate::engines::{EngineRegistry, ImageEngine};
use crate::error::{ExtractionError, ProviderError};
use crate::keywords::{KeywordExtractor, KeywordList};
use crate::network::HttpClient;
use crate::results::{ImageRecord, ResultContainer, SearchResult};
use futures::future::join_all;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Outcome of one engine's search, with how long it took
struct EngineOutcome {
    engine: Arc<dyn ImageEngine>,
    elapsed: Duration,
    result: Result<Vec<ImageRecord>, ProviderError>,
}

/// Search executor: keyword extraction followed by provider fan-out
pub struct Search {
    /// HTTP client for making requests
    client: HttpClient,
    /// Engine registry
    registry: Arc<EngineRegistry>,
    /// Keyword extractor
    extractor: KeywordExtractor,
}

impl Search {
    /// Create a new search executor
    pub fn new(client: HttpClient, registry: Arc<EngineRegistry>, extractor: KeywordExtractor) -> Self {
        Self {
            client,
            registry,
            extractor,
        }
    }

    /// Extract keywords, then aggregate. Only extraction can fail.
    pub async fn execute(&self, request: &SearchRequest) -> Result<SearchResult, ExtractionError> {
        let keywords = self.extractor.extract(&request.input).await?;
        Ok(self.aggregate(keywords).await)
    }

    /// Run every engine on the joined keywords and merge the survivors.
    ///
    /// Each engine future resolves to its own outcome, so one engine failing
    /// never cancels or hides another.
    pub async fn aggregate(&self, keywords: KeywordList) -> SearchResult {
        let query = keywords.query();

        info!(
            "Executing search '{}' on {} engines",
            query,
            self.registry.len()
        );

        let outcomes = join_all(
            self.registry
                .engines()
                .iter()
                .map(|engine| self.search_engine(engine.clone(), &query)),
        )
        .await;

        let mut container = ResultContainer::new();
        for outcome in outcomes {
            let source = outcome.engine.source();
            match outcome.result {
                Ok(records) => {
                    debug!(
                        "Engine {} returned {} results in {:?}",
                        source,
                        records.len(),
                        outcome.elapsed
                    );
                    container.add_results(source, records);
                }
                Err(e) => {
                    debug!("Engine {} failed after {:?}", source, outcome.elapsed);
                    container.add_unresponsive(source, e);
                }
            }
        }

        if !container.unresponsive().is_empty() {
            let failures: Vec<String> = container
                .unresponsive()
                .iter()
                .map(|u| format!("{} ({})", u.engine, u.error))
                .collect();
            warn!(
                "{} of {} engines unresponsive: {}",
                failures.len(),
                self.registry.len(),
                failures.join(", ")
            );
        }

        let images = container.into_shuffled(&mut rand::thread_rng());
        SearchResult { keywords, images }
    }

    /// Search a single engine
    async fn search_engine(&self, engine: Arc<dyn ImageEngine>, query: &str) -> EngineOutcome {
        let start = Instant::now();

        let engine_timeout = engine
            .timeout()
            .and_then(|secs| Duration::try_from_secs_f64(secs).ok())
            .unwrap_or_else(|| self.client.default_timeout());

        debug!(
            "Searching engine {} with timeout {:?}",
            engine.name(),
            engine_timeout
        );

        let result = match self
            .client
            .execute_with_timeout(engine.request(query), engine_timeout)
            .await
        {
            Ok(response) => engine.response(response),
            Err(e) if e.is_timeout() => Err(ProviderError::Timeout(engine_timeout.as_secs_f64())),
            // The URL can carry a provider key
            Err(e) => Err(ProviderError::Request(e.without_url())),
        };

        EngineOutcome {
            engine,
            elapsed: start.elapsed(),
            result,
        }
    }
}
