//! Google Gemini client for plan generation.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, error};
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{parse_plan, prompt::build_prompt, schema::cooking_plan_schema, PlanGenerator};
use crate::{
    error::{GenerationResultExt, KitchenError, Result},
    models::{CookingPlan, Recipe},
};

/// Default Gemini REST endpoint.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "gemini-3-pro-preview";

/// Connection settings for [`GeminiClient`].
#[derive(Debug)]
pub struct GeminiConfig {
    /// API key
    pub api_key: SecretString,
    /// Model name
    pub model: String,
    /// REST endpoint, overridable for tests
    pub base_url: String,
    /// Per-request timeout; `None` waits indefinitely
    pub timeout: Option<Duration>,
}

impl GeminiConfig {
    /// Settings for an API key with every other field at its default.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::from(api_key.into()),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Vec<RequestContent>,
    generation_config: RequestGenerationConfig,
}

#[derive(Debug, Serialize)]
struct RequestContent {
    role: &'static str,
    parts: Vec<RequestPart>,
}

#[derive(Debug, Serialize)]
struct RequestPart {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RequestGenerationConfig {
    response_mime_type: &'static str,
    response_schema: Value,
}

#[derive(Debug, Default, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Default, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateResponse {
    /// Concatenated text parts of the first candidate.
    fn into_text(self) -> Option<String> {
        let candidate = self.candidates.into_iter().next()?;
        if let Some(reason) = &candidate.finish_reason {
            debug!("Gemini finish reason: {reason}");
        }
        let text: String = candidate
            .content?
            .parts
            .into_iter()
            .filter_map(|p| p.text)
            .collect();
        (!text.is_empty()).then_some(text)
    }
}

/// Gemini-backed [`PlanGenerator`].
pub struct GeminiClient {
    client: Client,
    config: GeminiConfig,
}

impl GeminiClient {
    /// Creates a generation client.
    ///
    /// # Errors
    ///
    /// Returns `KitchenError::Configuration` if the API key is empty or the
    /// HTTP client cannot be built.
    pub fn new(config: GeminiConfig) -> Result<Self> {
        if config.api_key.expose_secret().trim().is_empty() {
            return Err(KitchenError::configuration("Gemini API key is empty"));
        }

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| KitchenError::configuration(format!("Cannot build HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    /// The model requests are sent to.
    pub fn model(&self) -> &str {
        &self.config.model
    }

    fn build_request(&self, recipes: &[Recipe]) -> Result<GenerateRequest> {
        Ok(GenerateRequest {
            contents: vec![RequestContent {
                role: "user",
                parts: vec![RequestPart {
                    text: build_prompt(recipes)?,
                }],
            }],
            generation_config: RequestGenerationConfig {
                response_mime_type: "application/json",
                response_schema: cooking_plan_schema(),
            },
        })
    }
}

#[async_trait]
impl PlanGenerator for GeminiClient {
    async fn generate(&self, recipes: &[Recipe]) -> Result<CookingPlan> {
        let request = self.build_request(recipes)?;
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model,
        );
        debug!(
            "Requesting plan for {} recipes from {}",
            recipes.len(),
            self.config.model
        );

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", self.config.api_key.expose_secret())
            .json(&request)
            .send()
            .await
            .generation_context("Gemini request failed")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Gemini returned {status}: {body}");
            return Err(KitchenError::generation(format!(
                "Gemini returned {status}"
            )));
        }

        let reply: GenerateResponse = response
            .json()
            .await
            .generation_context("Gemini reply is not valid JSON")?;

        let text = reply
            .into_text()
            .ok_or_else(|| KitchenError::generation("Gemini reply contained no text"))?;

        parse_plan(&text)
    }
}
