use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{api::ErrorDto, leaderboard::LeaderboardEntryDto},
    server::{error::Error, model::app::AppState, service::leaderboard::LeaderboardService},
};

pub static LEADERBOARD_TAG: &str = "leaderboard";

#[derive(Deserialize, utoipa::IntoParams)]
pub struct LeaderboardQuery {
    /// Maximum entries to return (default 25, capped at 100).
    pub limit: Option<u64>,
}

/// Top players by experience
#[utoipa::path(
    get,
    path = "/api/leaderboard",
    tag = LEADERBOARD_TAG,
    params(LeaderboardQuery),
    responses(
        (status = 200, description = "Ranked players", body = Vec<LeaderboardEntryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_leaderboard(
    State(state): State<AppState>,
    Query(query): Query<LeaderboardQuery>,
) -> Result<impl IntoResponse, Error> {
    let leaderboard_service = LeaderboardService::new(&state.db);

    let entries = leaderboard_service.top(query.limit).await?;

    Ok((StatusCode::OK, Json(entries)))
}
