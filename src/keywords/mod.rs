//! Keyword extraction module
//!
//! Asks a generative-language model for image search keywords and validates
//! its free-text answer into a `KeywordList`.

mod extractor;
mod gemini;
mod list;

pub use extractor::KeywordExtractor;
pub use list::KeywordList;
