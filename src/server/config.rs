use crate::server::error::config::ConfigError;

/// Provider settings for the chat tutor fallback chain. A provider is only
/// attempted when its configuration is present.
#[derive(Clone, Debug, Default)]
pub struct ChatProviderConfig {
    pub openai_api_url: Option<String>,
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    pub ollama_url: Option<String>,
    pub ollama_model: String,
}

pub struct Config {
    pub database_url: String,
    pub valkey_url: String,
    pub chat: ChatProviderConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: require("DATABASE_URL")?,
            valkey_url: require("VALKEY_URL")?,
            chat: ChatProviderConfig {
                openai_api_url: optional("CHAT_OPENAI_API_URL"),
                openai_api_key: optional("CHAT_OPENAI_API_KEY"),
                openai_model: optional("CHAT_OPENAI_MODEL")
                    .unwrap_or_else(|| "gpt-4o-mini".to_string()),
                ollama_url: optional("CHAT_OLLAMA_URL"),
                ollama_model: optional("CHAT_OLLAMA_MODEL")
                    .unwrap_or_else(|| "llama3.2".to_string()),
            },
        })
    }
}

fn require(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingVar(name.to_string()))
}

fn optional(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
