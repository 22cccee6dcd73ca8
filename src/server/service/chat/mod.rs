//! The chat tutor.
//!
//! A non-stateful responder resolved in three steps: a substring match over a
//! fixed phrase list, then external text-generation providers tried in order,
//! then a canned fallback. Provider failures never surface to the caller;
//! they fall silently through to the next step.

pub mod provider;

use std::time::Duration;

use dioxus_logger::tracing;
use rand::seq::IndexedRandom;

use crate::{
    model::chat::{ChatReplyDto, ChatSource},
    server::{config::ChatProviderConfig, service::chat::provider::ProviderError},
};

/// Per-provider request timeout.
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Built-in tutor answers, first keyword match wins.
const PHRASE_REPLIES: &[(&[&str], &str)] = &[
    (
        &["hello", "hi ", "hey"],
        "Hi there! I'm your reading tutor. Ask me about battles, ranks, or how to practice your spelling.",
    ),
    (
        &["how do i play", "how to play", "battle"],
        "Head to the Battle page, pick Reading Comprehension or Spelling Bee, and you'll be matched \
with another player. You both get the same questions, so the sharper reader wins!",
    ),
    (
        &["rank", "level up"],
        "Ranks come from experience: Novice Reader, Word Explorer, Page Turner, Story Weaver, \
Word Wizard, and finally Grand Scholar at 4000 EXP. Keep battling to climb!",
    ),
    (
        &["exp", "experience", "points"],
        "You earn experience for every match you finish: a base award, extra for your score \
percentage, and a bonus for winning. Even a lost match moves you forward.",
    ),
    (
        &["spell", "spelling"],
        "For spelling battles, read the definition and example sentence carefully, then type the \
word. Watch out for silent letters, like the h in rhythm!",
    ),
    (
        &["read", "passage", "comprehension"],
        "In a reading battle you first get time with the passage, then answer questions about it. \
Skim for the main idea first, then reread for details.",
    ),
    (
        &["thank"],
        "You're very welcome. Happy reading!",
    ),
    (
        &["bye", "goodbye"],
        "Goodbye! Come back whenever you want to practice.",
    ),
];

/// Canned replies when no phrase matches and every provider failed.
const FALLBACK_REPLIES: &[&str] = &[
    "That's a great question! Try a practice battle and see what you discover.",
    "I'm not sure about that one, but reading a little every day is never wrong.",
    "Hmm, let me think about that. In the meantime, how about a spelling battle?",
    "Good thinking! Keep asking questions, that's how strong readers are made.",
];

/// Chat tutor with its HTTP client and provider configuration.
#[derive(Clone)]
pub struct ChatService {
    client: reqwest::Client,
    config: ChatProviderConfig,
}

impl ChatService {
    /// Creates a new [`ChatService`] with a client enforcing the per-request
    /// timeout.
    pub fn new(config: ChatProviderConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_default();

        Self { client, config }
    }

    /// Produce a reply for a message. Never fails: provider errors degrade to
    /// the canned fallback.
    pub async fn respond(&self, message: &str) -> ChatReplyDto {
        let message = message.trim();

        if let Some(reply) = keyword_reply(message) {
            return ChatReplyDto {
                reply: reply.to_string(),
                source: ChatSource::Tutor,
            };
        }

        match self.provider_reply(message).await {
            Some(reply) => ChatReplyDto {
                reply,
                source: ChatSource::Assistant,
            },
            None => ChatReplyDto {
                reply: canned_reply(),
                source: ChatSource::Fallback,
            },
        }
    }

    /// Try each configured provider in order, returning the first usable
    /// reply.
    async fn provider_reply(&self, message: &str) -> Option<String> {
        if let Some(url) = &self.config.openai_api_url {
            match provider::openai_reply(
                &self.client,
                url,
                self.config.openai_api_key.as_deref(),
                &self.config.openai_model,
                message,
            )
            .await
            {
                Ok(reply) => return Some(reply),
                Err(e) => tracing::warn!("OpenAI-compatible provider failed: {}", e),
            }
        }

        if let Some(url) = &self.config.ollama_url {
            match provider::ollama_reply(&self.client, url, &self.config.ollama_model, message)
                .await
            {
                Ok(reply) => return Some(reply),
                Err(e) => tracing::warn!("Ollama provider failed: {}", e),
            }
        }

        None
    }
}

fn keyword_reply(message: &str) -> Option<&'static str> {
    let lowered = message.to_lowercase();

    PHRASE_REPLIES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|keyword| lowered.contains(keyword)))
        .map(|(_, reply)| *reply)
}

fn canned_reply() -> String {
    FALLBACK_REPLIES
        .choose(&mut rand::rng())
        .copied()
        .unwrap_or(FALLBACK_REPLIES[0])
        .to_string()
}

/// Validate a reply body: providers occasionally answer with whitespace.
fn usable_reply(reply: String) -> Result<String, ProviderError> {
    let trimmed = reply.trim();

    if trimmed.is_empty() {
        return Err(ProviderError::EmptyReply);
    }

    Ok(trimmed.to_string())
}
