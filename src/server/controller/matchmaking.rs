use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        game::{JoinQueueDto, QueueStatusDto},
    },
    server::{
        controller::util::require_profile_id,
        error::Error,
        model::app::AppState,
        service::matchmaking::MatchmakingService,
    },
};

pub static MATCHMAKING_TAG: &str = "matchmaking";

/// Join the matchmaking queue for a game type
#[utoipa::path(
    post,
    path = "/api/matchmaking/join",
    tag = MATCHMAKING_TAG,
    request_body = JoinQueueDto,
    responses(
        (status = 200, description = "Queued or matched immediately", body = QueueStatusDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 409, description = "Already queued", body = ErrorDto),
        (status = 503, description = "No quiz content available", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn join(
    State(state): State<AppState>,
    session: Session,
    Json(body): Json<JoinQueueDto>,
) -> Result<impl IntoResponse, Error> {
    let matchmaking_service = MatchmakingService::new(&state.db);

    let profile_id = require_profile_id(&session).await?;

    let status = matchmaking_service.join(profile_id, body.game_type).await?;

    Ok((StatusCode::OK, Json(status)))
}

/// Poll the caller's matchmaking state
#[utoipa::path(
    get,
    path = "/api/matchmaking/status",
    tag = MATCHMAKING_TAG,
    responses(
        (status = 200, description = "Current queue state", body = QueueStatusDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn status(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let matchmaking_service = MatchmakingService::new(&state.db);

    let profile_id = require_profile_id(&session).await?;

    let status = matchmaking_service.status(profile_id).await?;

    Ok((StatusCode::OK, Json(status)))
}

/// Leave the matchmaking queue
///
/// Removes only the caller's pending entry; leaving while not queued is a
/// no-op.
#[utoipa::path(
    delete,
    path = "/api/matchmaking/leave",
    tag = MATCHMAKING_TAG,
    responses(
        (status = 200, description = "Entry removed (or none existed)"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn leave(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let matchmaking_service = MatchmakingService::new(&state.db);

    let profile_id = require_profile_id(&session).await?;

    matchmaking_service.leave(profile_id).await?;

    Ok(StatusCode::OK)
}
