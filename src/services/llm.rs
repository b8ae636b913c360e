use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when calling the language model
#[derive(Debug, Error)]
pub enum ReasoningError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("LLM API returned error: {0}")]
    ApiError(String),

    #[error("Empty completion")]
    EmptyCompletion,
}

/// A system + user message pair sent to the model
#[derive(Debug, Clone, PartialEq)]
pub struct ChatPrompt {
    pub system: String,
    pub user: String,
}

/// Free-text completion source
#[async_trait]
pub trait ReasoningProvider: Send + Sync {
    async fn complete(&self, prompt: &ChatPrompt) -> Result<String, ReasoningError>;
}

/// Sampling options for chat completions
#[derive(Debug, Clone)]
pub struct CompletionOptions {
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// OpenAI-compatible chat completions client (Groq by default)
pub struct ChatCompletionsClient {
    base_url: String,
    api_key: String,
    options: CompletionOptions,
    client: Client,
}

impl ChatCompletionsClient {
    pub fn new(base_url: String, api_key: String, options: CompletionOptions, client: Client) -> Self {
        Self {
            base_url,
            api_key,
            options,
            client,
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[async_trait]
impl ReasoningProvider for ChatCompletionsClient {
    async fn complete(&self, prompt: &ChatPrompt) -> Result<String, ReasoningError> {
        let url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));

        let body = ChatRequest {
            model: &self.options.model,
            messages: [
                ChatMessage { role: "system", content: &prompt.system },
                ChatMessage { role: "user", content: &prompt.user },
            ],
            max_tokens: self.options.max_tokens,
            temperature: self.options.temperature,
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(ReasoningError::ApiError(format!("{}: {}", status, text)));
        }

        let completion: ChatResponse = response.json().await?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|text| !text.trim().is_empty())
            .ok_or(ReasoningError::EmptyCompletion)
    }
}
