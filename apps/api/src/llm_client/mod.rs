/// LLM Client: the single point of entry for all hosted-model calls.
///
/// ARCHITECTURAL RULE: No other module may call the model API directly.
/// Providers build an `LlmRequest` and go through `LlmClient::send`.
///
/// Calls are made exactly once. A failed call is returned to the caller and
/// never retried here.
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub mod prompts;

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
/// Model used for search, refinement, scoring and chat.
pub const MODEL: &str = "claude-sonnet-4-5";
/// Model used for the creative tailoring pass.
pub const TAILORING_MODEL: &str = "claude-opus-4-1";
const MAX_TOKENS: u32 = 8192;
const WEB_SEARCH_MAX_USES: u32 = 8;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM returned empty content")]
    EmptyContent,
}

// ────────────────────────────────────────────────────────────────────────────
// Request model
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentPart {
    Text { text: String },
    Image { source: ImageSource },
}

#[derive(Debug, Clone, Serialize)]
pub struct ImageSource {
    #[serde(rename = "type")]
    pub source_type: &'static str,
    pub media_type: String,
    pub data: String,
}

impl ContentPart {
    pub fn text(text: impl Into<String>) -> Self {
        ContentPart::Text { text: text.into() }
    }

    pub fn base64_image(media_type: impl Into<String>, data: impl Into<String>) -> Self {
        ContentPart::Image {
            source: ImageSource {
                source_type: "base64",
                media_type: media_type.into(),
                data: data.into(),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Message {
    pub role: Role,
    pub content: Vec<ContentPart>,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: vec![ContentPart::text(text)],
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: vec![ContentPart::text(text)],
        }
    }
}

/// One call to the model.
#[derive(Debug, Clone)]
pub struct LlmRequest {
    pub model: &'static str,
    pub system: String,
    pub messages: Vec<Message>,
    pub temperature: Option<f32>,
    /// Lets the model run live web searches before answering.
    pub web_search: bool,
}

impl LlmRequest {
    /// A single user turn against the default model.
    pub fn prompt(system: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: MODEL,
            system: system.into(),
            messages: vec![Message::user(prompt)],
            temperature: None,
            web_search: false,
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_web_search(mut self) -> Self {
        self.web_search = true;
        self
    }
}

#[derive(Debug, Serialize)]
struct AnthropicRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: &'a [Message],
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<AnthropicTool>,
}

#[derive(Debug, Serialize)]
struct AnthropicTool {
    #[serde(rename = "type")]
    tool_type: &'static str,
    name: &'static str,
    max_uses: u32,
}

impl<'a> AnthropicRequest<'a> {
    fn from_request(request: &'a LlmRequest) -> Self {
        let tools = if request.web_search {
            vec![AnthropicTool {
                tool_type: "web_search_20250305",
                name: "web_search",
                max_uses: WEB_SEARCH_MAX_USES,
            }]
        } else {
            Vec::new()
        };

        Self {
            model: request.model,
            max_tokens: MAX_TOKENS,
            system: &request.system,
            messages: &request.messages,
            temperature: request.temperature,
            tools,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Response model
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct LlmResponse {
    pub content: Vec<ContentBlock>,
    #[serde(default)]
    pub usage: Usage,
}

#[derive(Debug, Deserialize)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub block_type: String,
    pub text: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Usage {
    #[serde(default)]
    pub input_tokens: u32,
    #[serde(default)]
    pub output_tokens: u32,
}

impl LlmResponse {
    /// Concatenates every text block. With web search enabled the answer is
    /// split around tool-use blocks, so the first block alone is not enough.
    pub fn text(&self) -> Option<String> {
        let text: String = self
            .content
            .iter()
            .filter(|b| b.block_type == "text")
            .filter_map(|b| b.text.as_deref())
            .collect();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

#[derive(Debug, Deserialize)]
struct AnthropicError {
    error: AnthropicErrorBody,
}

#[derive(Debug, Deserialize)]
struct AnthropicErrorBody {
    message: String,
}

/// The single LLM client used by all providers.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
}

impl LlmClient {
    pub fn new(api_key: String, timeout_secs: u64) -> Result<Self, LlmError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()?;
        Ok(Self { client, api_key })
    }

    /// Sends one request and returns the full response object.
    pub async fn send(&self, request: &LlmRequest) -> Result<LlmResponse, LlmError> {
        let body = AnthropicRequest::from_request(request);

        let response = self
            .client
            .post(ANTHROPIC_API_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<AnthropicError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let llm_response: LlmResponse = response.json().await?;

        debug!(
            "LLM call succeeded: model={}, input_tokens={}, output_tokens={}",
            request.model, llm_response.usage.input_tokens, llm_response.usage.output_tokens
        );

        Ok(llm_response)
    }

    /// Sends one request and returns its text, failing on an empty reply.
    pub async fn send_text(&self, request: &LlmRequest) -> Result<String, LlmError> {
        self.send(request).await?.text().ok_or(LlmError::EmptyContent)
    }
}

/// Cuts the JSON payload out of a free-text model reply: from the first `[`
/// or `{` to the last `]` or `}`. Returns `None` when there is no such span.
///
/// Models wrap JSON in prose or code fences often enough that a strict parse
/// of the whole reply would reject good answers.
pub fn extract_json_span(text: &str) -> Option<&str> {
    let start = text.find(['[', '{'])?;
    let end = text.rfind([']', '}'])?;
    if end < start {
        return None;
    }
    let span = text[start..=end].trim();
    (!span.is_empty()).then_some(span)
}
