// src/extraction/model.rs
//! Model provider clients. Both variants expose the same single operation:
//! send the extraction prompt, get one raw text blob back. No retries; any
//! API failure surfaces to the caller.

use crate::config::AppConfig;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const GEMINI_MODEL: &str = "gemini-2.0-flash-lite";

const OPENAI_CHAT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
const OPENAI_MODEL: &str = "gpt-4";
// Low temperature biases the model toward deterministic extraction.
const OPENAI_TEMPERATURE: f32 = 0.3;

const REQUEST_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelProvider {
    Gemini,
    OpenAi,
}

impl ModelProvider {
    /// Parse a user-supplied provider choice. Anything other than "openai"
    /// falls back to the Gemini default.
    pub fn parse(choice: &str) -> Self {
        match choice.trim().to_lowercase().as_str() {
            "openai" => Self::OpenAi,
            _ => Self::Gemini,
        }
    }
}

#[async_trait::async_trait]
pub trait ModelClient {
    /// Send the prompt and return the model's trimmed raw text output.
    async fn extract(&self, prompt: &str) -> Result<String>;
}

/// Select the provider implementation once, before any network call.
pub fn build_model_client(
    provider: ModelProvider,
    config: &AppConfig,
) -> Result<Box<dyn ModelClient + Send + Sync>> {
    match provider {
        ModelProvider::Gemini => {
            let api_key = config
                .gemini_api_key
                .clone()
                .ok_or_else(|| anyhow::anyhow!("GEMINI_API_KEY environment variable not set"))?;
            Ok(Box::new(GeminiClient::new(api_key)?))
        }
        ModelProvider::OpenAi => {
            let api_key = config
                .openai_api_key
                .clone()
                .ok_or_else(|| anyhow::anyhow!("OPENAI_API_KEY environment variable not set"))?;
            Ok(Box::new(OpenAiClient::new(api_key)?))
        }
    }
}

fn http_client() -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()
        .context("Failed to create HTTP client")
}

// --- Gemini (single-turn generation endpoint) ---

pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
}

impl GeminiClient {
    pub fn new(api_key: String) -> Result<Self> {
        Ok(Self {
            client: http_client()?,
            api_key,
        })
    }
}

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiPart {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: GeminiContent,
}

#[async_trait::async_trait]
impl ModelClient for GeminiClient {
    async fn extract(&self, prompt: &str) -> Result<String> {
        let url = format!("{}/{}:generateContent", GEMINI_API_BASE, GEMINI_MODEL);
        info!("Calling Gemini model: {}", GEMINI_MODEL);

        let payload = GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart {
                    text: prompt.to_string(),
                }],
            }],
        };

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&payload)
            .send()
            .await
            .context("Failed to call Gemini API")?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            anyhow::bail!("Gemini API returned status {}: {}", status, error_text);
        }

        let body: GeminiResponse = response
            .json()
            .await
            .context("Failed to parse Gemini response")?;

        let text = body
            .candidates
            .first()
            .and_then(|candidate| candidate.content.parts.first())
            .map(|part| part.text.trim().to_string())
            .ok_or_else(|| anyhow::anyhow!("Gemini response contained no candidates"))?;

        Ok(text)
    }
}

// --- OpenAI (chat-completion endpoint) ---

pub struct OpenAiClient {
    client: reqwest::Client,
    api_key: String,
}

impl OpenAiClient {
    pub fn new(api_key: String) -> Result<Self> {
        Ok(Self {
            client: http_client()?,
            api_key,
        })
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[async_trait::async_trait]
impl ModelClient for OpenAiClient {
    async fn extract(&self, prompt: &str) -> Result<String> {
        info!("Calling OpenAI model: {}", OPENAI_MODEL);

        let payload = ChatRequest {
            model: OPENAI_MODEL.to_string(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            temperature: OPENAI_TEMPERATURE,
        };

        let response = self
            .client
            .post(OPENAI_CHAT_ENDPOINT)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await
            .context("Failed to call OpenAI API")?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            anyhow::bail!("OpenAI API returned status {}: {}", status, error_text);
        }

        let body: ChatResponse = response
            .json()
            .await
            .context("Failed to parse OpenAI response")?;

        let text = body
            .choices
            .first()
            .map(|choice| choice.message.content.trim().to_string())
            .ok_or_else(|| anyhow::anyhow!("OpenAI response contained no choices"))?;

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_parse_defaults_to_gemini() {
        assert_eq!(ModelProvider::parse(""), ModelProvider::Gemini);
        assert_eq!(ModelProvider::parse("gemini"), ModelProvider::Gemini);
        assert_eq!(ModelProvider::parse("something"), ModelProvider::Gemini);
    }

    #[test]
    fn test_provider_parse_openai() {
        assert_eq!(ModelProvider::parse("openai"), ModelProvider::OpenAi);
        assert_eq!(ModelProvider::parse("  OpenAI "), ModelProvider::OpenAi);
    }
}
