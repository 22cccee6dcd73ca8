//! External text-generation providers.
//!
//! Each provider is one HTTP JSON call. Errors carry enough detail for the
//! warn log but are otherwise interchangeable: any failure means "try the
//! next provider".

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::server::service::chat::usable_reply;

const SYSTEM_PROMPT: &str = "You are a friendly reading tutor inside an educational battle game \
for young readers. Keep answers short, encouraging, and age-appropriate. Explain reading and \
spelling concepts simply and never give away battle answers.";

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("request timed out")]
    Timeout,
    #[error("provider unavailable")]
    Unavailable,
    #[error("request failed: {0}")]
    Request(reqwest::Error),
    #[error("unexpected status: {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    MalformedResponse(String),
    #[error("provider returned an empty reply")]
    EmptyReply,
}

impl From<reqwest::Error> for ProviderError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ProviderError::Timeout
        } else if e.is_connect() {
            ProviderError::Unavailable
        } else {
            ProviderError::Request(e)
        }
    }
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct OpenAiRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Deserialize)]
struct OpenAiResponse {
    choices: Vec<OpenAiChoice>,
}

#[derive(Deserialize)]
struct OpenAiChoice {
    message: OpenAiMessage,
}

#[derive(Deserialize)]
struct OpenAiMessage {
    content: String,
}

/// One round-trip against an OpenAI-compatible chat completions endpoint.
pub async fn openai_reply(
    client: &reqwest::Client,
    base_url: &str,
    api_key: Option<&str>,
    model: &str,
    message: &str,
) -> Result<String, ProviderError> {
    let url = format!("{}/v1/chat/completions", base_url.trim_end_matches('/'));

    let body = OpenAiRequest {
        model,
        messages: vec![
            ChatMessage {
                role: "system",
                content: SYSTEM_PROMPT,
            },
            ChatMessage {
                role: "user",
                content: message,
            },
        ],
        temperature: 0.7,
    };

    let mut request = client.post(&url).json(&body);
    if let Some(api_key) = api_key {
        request = request.bearer_auth(api_key);
    }

    let response = request.send().await?;

    if !response.status().is_success() {
        return Err(ProviderError::Status(response.status().as_u16()));
    }

    let parsed: OpenAiResponse = response
        .json()
        .await
        .map_err(|e| ProviderError::MalformedResponse(e.to_string()))?;

    let reply = parsed
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content)
        .ok_or_else(|| ProviderError::MalformedResponse("no choices in response".to_string()))?;

    usable_reply(reply)
}

#[derive(Serialize)]
struct OllamaRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    stream: bool,
}

#[derive(Deserialize)]
struct OllamaResponse {
    message: OllamaMessage,
}

#[derive(Deserialize)]
struct OllamaMessage {
    content: String,
}

/// One round-trip against an Ollama chat endpoint.
pub async fn ollama_reply(
    client: &reqwest::Client,
    base_url: &str,
    model: &str,
    message: &str,
) -> Result<String, ProviderError> {
    let url = format!("{}/api/chat", base_url.trim_end_matches('/'));

    let body = OllamaRequest {
        model,
        messages: vec![
            ChatMessage {
                role: "system",
                content: SYSTEM_PROMPT,
            },
            ChatMessage {
                role: "user",
                content: message,
            },
        ],
        stream: false,
    };

    let response = client.post(&url).json(&body).send().await?;

    if !response.status().is_success() {
        return Err(ProviderError::Status(response.status().as_u16()));
    }

    let parsed: OllamaResponse = response
        .json()
        .await
        .map_err(|e| ProviderError::MalformedResponse(e.to_string()))?;

    usable_reply(parsed.message.content)
}
