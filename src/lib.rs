//! Image SearchMate: keyword-driven image search
//!
//! Free text goes to Gemini for visual keywords; the keywords go to Pixabay
//! and Unsplash concurrently; the surviving results come back shuffled.

pub mod config;
pub mod engines;
pub mod error;
pub mod keywords;
pub mod network;
pub mod results;
pub mod search;
pub mod web;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::Settings;
pub use engines::ImageEngine;
pub use error::{ExtractionError, ProviderError};
pub use keywords::{KeywordExtractor, KeywordList};
pub use results::{ImageRecord, SearchResult};
pub use search::{Search, SearchRequest};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
