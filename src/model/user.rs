use serde::{Deserialize, Serialize};

/// Avatar keys a profile may use. The client renders these as built-in
/// images; the server rejects anything outside this set.
pub const AVATARS: &[&str] = &["fox", "owl", "panda", "koala", "tiger", "whale"];

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub avatar: String,
    pub experience: i32,
    pub rank: RankDto,
}

/// Rank derived from accumulated experience.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct RankDto {
    pub title: String,
    /// Experience where the current rank begins.
    pub floor: i32,
    /// Experience required for the next rank, None at the top rank.
    pub next_at: Option<i32>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct RegisterDto {
    pub username: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct LoginDto {
    pub username: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct UpdateAvatarDto {
    pub avatar: String,
}
