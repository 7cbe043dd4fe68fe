//! Validated keyword list

use crate::error::ExtractionError;
use serde::Serialize;

/// Ordered, immutable list of search keywords
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct KeywordList(Vec<String>);

impl KeywordList {
    /// Validate untrusted model output into a keyword list.
    ///
    /// The text must be a JSON array of strings. Entries are trimmed and
    /// blank entries dropped; nothing left is an error.
    pub fn from_model_output(text: &str) -> Result<Self, ExtractionError> {
        let text = text.trim();
        let raw: Vec<String> =
            serde_json::from_str(text).map_err(|source| ExtractionError::InvalidKeywords {
                text: text.to_string(),
                source,
            })?;

        Self::new(raw)
    }

    /// Build a list from already-separated keywords
    pub fn new<I, S>(keywords: I) -> Result<Self, ExtractionError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keywords: Vec<String> = keywords
            .into_iter()
            .map(|k| k.as_ref().trim().to_string())
            .filter(|k| !k.is_empty())
            .collect();

        if keywords.is_empty() {
            return Err(ExtractionError::NoKeywords);
        }
        Ok(Self(keywords))
    }

    /// Provider query: keywords joined by single spaces, in order
    pub fn query(&self) -> String {
        self.0.join(" ")
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
