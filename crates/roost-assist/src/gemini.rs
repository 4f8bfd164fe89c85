//! Gemini-backed intent classifier.
//!
//! One-shot `generateContent` call per message with JSON output forced via
//! `responseMimeType`. The response text is handed to
//! [`parse_classification`](crate::classifier::parse_classification); this
//! module only owns the transport.

use async_trait::async_trait;
use chrono::{DateTime, Local};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use crate::classifier::{build_prompt, parse_classification, IntentClassifier};
use crate::error::ClassifyError;
use crate::types::Intent;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Intent classifier backed by the Gemini `generateContent` endpoint.
pub struct GeminiClassifier {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

// =============================================================================
// Wire types
// =============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

// =============================================================================
// Classifier
// =============================================================================

impl GeminiClassifier {
    /// Create a classifier for the given API key and model.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            model: model.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Override the API base URL (for self-hosted proxies and tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        )
    }

    fn make_request(prompt: String) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
            },
        }
    }

    fn extract_text(response: GenerateContentResponse) -> Result<String, ClassifyError> {
        response
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content.parts.into_iter().next())
            .map(|part| part.text)
            .ok_or_else(|| {
                ClassifyError::UnparsableOutput("Response contained no candidates".to_string())
            })
    }
}

#[async_trait]
impl IntentClassifier for GeminiClassifier {
    async fn classify(
        &self,
        message: &str,
        now: DateTime<Local>,
    ) -> Result<Intent, ClassifyError> {
        let request = Self::make_request(build_prompt(message, now));

        let response = self
            .client
            .post(self.endpoint())
            .json(&request)
            .send()
            .await
            .map_err(|e| ClassifyError::Upstream(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ClassifyError::Upstream(format!(
                "Model server returned {}",
                response.status()
            )));
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ClassifyError::Upstream(e.to_string()))?;

        let text = Self::extract_text(body)?;
        debug!(raw = %text, "Classifier raw output");
        parse_classification(&text)
    }
}
