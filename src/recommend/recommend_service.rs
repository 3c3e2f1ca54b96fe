use std::time::Duration;

use async_trait::async_trait;
use log::warn;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use super::recommend_constants::{DEFAULT_SUGGESTION, DEGRADED_MESSAGE, MISSING_KEY_MESSAGE};
use super::recommend_errors::RecommendError;
use super::recommend_model::Recommendation;
use super::recommend_traits::Recommender;
use crate::catalog::MenuItem;

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-2.5-flash";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

/// Environment variable holding the Gemini API key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Recommendation collaborator backed by the Gemini generateContent API.
///
/// Without an API key every call returns the fixed missing-key fallback with
/// one default suggestion. Transport or parse failures return the fixed
/// degraded message with no suggestions. Neither path errors.
pub struct GeminiRecommender {
    client: Client,
    api_key: Option<String>,
    base_url: String,
    model: String,
}

// ============================================================================
// Response structures for the generateContent API
// ============================================================================

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    parts: Option<Vec<CandidatePart>>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GeminiRecommender {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            base_url: BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Creates a recommender configured from `GEMINI_API_KEY`.
    pub fn from_env() -> Self {
        Self::new(std::env::var(API_KEY_ENV).ok())
    }

    /// Overrides the provider endpoint (tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn missing_key_fallback() -> Recommendation {
        Recommendation {
            message: MISSING_KEY_MESSAGE.to_string(),
            suggested_item_names: vec![DEFAULT_SUGGESTION.to_string()],
        }
    }

    fn degraded_fallback() -> Recommendation {
        Recommendation {
            message: DEGRADED_MESSAGE.to_string(),
            suggested_item_names: Vec::new(),
        }
    }

    fn build_prompt(mood: &str, menu: &[MenuItem]) -> String {
        let menu_descriptions = menu
            .iter()
            .map(|item| format!("{} ({}): {}", item.name, item.category.as_str(), item.description))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            "You are a friendly barista. The customer says: \"{mood}\".\n\
             Based on the following menu, recommend 1-2 items that match their mood.\n\n\
             Menu:\n{menu_descriptions}\n\n\
             Return a JSON object with a short friendly \"message\" and an array of \
             \"suggestedItemNames\" (exact names from the menu)."
        )
    }

    async fn fetch(
        &self,
        api_key: &str,
        mood: &str,
        menu: &[MenuItem],
    ) -> Result<Recommendation, RecommendError> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, api_key
        );

        let body = json!({
            "contents": [{ "parts": [{ "text": Self::build_prompt(mood, menu) }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": {
                    "type": "OBJECT",
                    "properties": {
                        "message": { "type": "STRING" },
                        "suggestedItemNames": {
                            "type": "ARRAY",
                            "items": { "type": "STRING" }
                        }
                    },
                    "required": ["message"]
                }
            }
        });

        let response = self
            .client
            .post(&url)
            .timeout(REQUEST_TIMEOUT)
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json::<GenerateContentResponse>()
            .await?;

        let text = response
            .candidates
            .and_then(|c| c.into_iter().next())
            .and_then(|c| c.content)
            .and_then(|c| c.parts)
            .and_then(|p| p.into_iter().next())
            .and_then(|p| p.text)
            .ok_or_else(|| {
                RecommendError::MalformedResponse("response carried no text part".to_string())
            })?;

        serde_json::from_str(&text)
            .map_err(|e| RecommendError::MalformedResponse(format!("invalid payload JSON: {e}")))
    }
}

#[async_trait]
impl Recommender for GeminiRecommender {
    async fn recommend(&self, mood: &str, menu: &[MenuItem]) -> Recommendation {
        let Some(api_key) = self.api_key.clone() else {
            return Self::missing_key_fallback();
        };

        match self.fetch(&api_key, mood, menu).await {
            Ok(recommendation) => recommendation,
            Err(e) => {
                warn!("Recommendation provider unavailable, degrading: {e}");
                Self::degraded_fallback()
            }
        }
    }
}

/// Keeps only the suggested names that match a current catalog name
/// exactly. Matching is case-sensitive; non-matching names are silently
/// dropped.
pub fn filter_known_names(names: &[String], menu: &[MenuItem]) -> Vec<String> {
    names
        .iter()
        .filter(|name| menu.iter().any(|item| &item.name == *name))
        .cloned()
        .collect()
}
