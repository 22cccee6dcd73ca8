use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct LeaderboardEntryDto {
    /// 1-based position in the ordering.
    pub position: i32,
    pub username: String,
    pub avatar: String,
    pub experience: i32,
    pub rank_title: String,
    pub wins: i32,
}
