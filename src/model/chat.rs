use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ChatRequestDto {
    pub message: String,
}

/// Where a chat reply came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum ChatSource {
    /// Matched a built-in tutor phrase.
    Tutor,
    /// Generated by an external provider.
    Assistant,
    /// Canned response after every provider failed.
    Fallback,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ChatReplyDto {
    pub reply: String,
    pub source: ChatSource,
}
