//! Error types for the search pipeline.
//!
//! Keyword extraction failures abort the request. Provider failures are
//! absorbed by the aggregator and only show up in the logs.

use thiserror::Error;

/// Failure to turn the user's text into a keyword list.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// The language-model call never produced a response
    #[error("Keyword request failed: {0}")]
    Request(#[source] reqwest::Error),

    /// The language model answered with a non-success status
    #[error("Keyword service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body was not a generateContent envelope
    #[error("Unexpected keyword service response: {0}")]
    Envelope(#[source] serde_json::Error),

    /// The envelope held no candidate text
    #[error("Keyword service response contained no text")]
    MissingText,

    /// The candidate text was not a JSON array of strings
    #[error("Model output is not a JSON array of strings: {text:?}")]
    InvalidKeywords {
        text: String,
        #[source]
        source: serde_json::Error,
    },

    /// The array parsed but held no usable keyword
    #[error("Model returned no keywords")]
    NoKeywords,
}

/// Failure of a single image provider.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("Request timed out after {0:.1}s")]
    Timeout(f64),

    #[error("HTTP error {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Malformed response: {0}")]
    Malformed(#[source] serde_json::Error),
}

/// Longest slice of an upstream error body kept in error messages
pub(crate) const MAX_ERROR_BODY: usize = 512;

/// Truncate an upstream body for inclusion in an error message
pub(crate) fn error_body(text: &str) -> String {
    if text.len() <= MAX_ERROR_BODY {
        return text.to_string();
    }
    let mut end = MAX_ERROR_BODY;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &text[..end])
}
