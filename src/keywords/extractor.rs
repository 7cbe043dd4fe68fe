//! Keyword extraction through Gemini

use super::gemini::GenerateContentResponse;
use super::list::KeywordList;
use crate::config::KeywordSettings;
use crate::engines::{EngineRequest, EngineResponse};
use crate::error::{error_body, ExtractionError};
use crate::network::HttpClient;
use serde_json::json;
use tracing::debug;

/// Turns free text into a list of visually concrete search keywords
pub struct KeywordExtractor {
    client: HttpClient,
    api_url: String,
    api_key: String,
}

impl KeywordExtractor {
    pub fn new(client: HttpClient, settings: &KeywordSettings) -> Self {
        let api_url = format!(
            "{}/v1/models/{}:generateContent",
            settings.base_url.trim_end_matches('/'),
            settings.model
        );

        Self {
            client,
            api_url,
            api_key: settings.api_key.clone(),
        }
    }

    /// Instruction prompt embedding the user's raw text
    pub fn prompt(input: &str) -> String {
        format!(
            r#"Convert the following sentence into an array of English keywords for searching images on Pixabay or Unsplash. Focus on visual keywords.
Sentence: {input}
Rules:
1. Include only visually concrete concepts (e.g. yellow umbrella, child, rainy day).
2. Also include keywords that suggest a style (e.g. illustration, drawing, vector).
3. Leave out words that are too abstract.
4. Include about 4 to 6 keywords, in English.
5. Output ONLY a JSON array of strings. Say nothing else.
6. Output the result only, without examples. e.g. ["yellow umbrella", "child", "rain", "illustration"]
"#
        )
    }

    /// Build the generateContent request. The key goes in a header so it
    /// never appears in a URL.
    pub fn request(&self, input: &str) -> EngineRequest {
        let body = json!({ "contents": [{ "parts": [{ "text": Self::prompt(input) }] }] });

        EngineRequest::post(&self.api_url)
            .header("x-goog-api-key", &self.api_key)
            .json(body)
    }

    /// Validate the service response into keywords
    pub fn response(&self, response: EngineResponse) -> Result<KeywordList, ExtractionError> {
        if !response.is_success() {
            return Err(ExtractionError::Status {
                status: response.status,
                body: error_body(&response.text),
            });
        }

        let envelope: GenerateContentResponse =
            response.json().map_err(ExtractionError::Envelope)?;
        let text = envelope.first_text().ok_or(ExtractionError::MissingText)?;

        KeywordList::from_model_output(text)
    }

    /// Run one extraction round trip
    pub async fn extract(&self, input: &str) -> Result<KeywordList, ExtractionError> {
        let response = self
            .client
            .execute(self.request(input))
            .await
            .map_err(|e| ExtractionError::Request(e.without_url()))?;

        let keywords = self.response(response)?;
        debug!("Extracted keywords: {:?}", keywords.as_slice());
        Ok(keywords)
    }
}
