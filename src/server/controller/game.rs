use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        game::{MatchContentDto, MatchHistoryEntryDto, MatchResultDto, ReportScoreDto},
    },
    server::{
        controller::util::require_profile_id,
        error::Error,
        model::app::AppState,
        service::game::MatchService,
    },
};

pub static MATCH_TAG: &str = "match";

/// The quiz content of a match, for its participants only
#[utoipa::path(
    get,
    path = "/api/match/{match_id}/content",
    tag = MATCH_TAG,
    params(
        ("match_id" = i32, Path, description = "ID of the match")
    ),
    responses(
        (status = 200, description = "Match content", body = MatchContentDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a participant", body = ErrorDto),
        (status = 404, description = "Match not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn content(
    State(state): State<AppState>,
    session: Session,
    Path(match_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let match_service = MatchService::new(&state.db);

    let profile_id = require_profile_id(&session).await?;

    let content = match_service.content(profile_id, match_id).await?;

    Ok((StatusCode::OK, Json(content)))
}

/// Report the caller's finished quiz score
#[utoipa::path(
    post,
    path = "/api/match/{match_id}/report",
    tag = MATCH_TAG,
    params(
        ("match_id" = i32, Path, description = "ID of the match")
    ),
    request_body = ReportScoreDto,
    responses(
        (status = 200, description = "Report accepted", body = MatchResultDto),
        (status = 400, description = "Invalid score report", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a participant", body = ErrorDto),
        (status = 404, description = "Match not found", body = ErrorDto),
        (status = 409, description = "Already reported or match completed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn report(
    State(state): State<AppState>,
    session: Session,
    Path(match_id): Path<i32>,
    Json(body): Json<ReportScoreDto>,
) -> Result<impl IntoResponse, Error> {
    let match_service = MatchService::new(&state.db);

    let profile_id = require_profile_id(&session).await?;

    let result = match_service
        .report(profile_id, match_id, body.score, body.total)
        .await?;

    Ok((StatusCode::OK, Json(result)))
}

/// The state of a match as seen by the caller
#[utoipa::path(
    get,
    path = "/api/match/{match_id}",
    tag = MATCH_TAG,
    params(
        ("match_id" = i32, Path, description = "ID of the match")
    ),
    responses(
        (status = 200, description = "Match state", body = MatchResultDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a participant", body = ErrorDto),
        (status = 404, description = "Match not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn result(
    State(state): State<AppState>,
    session: Session,
    Path(match_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let match_service = MatchService::new(&state.db);

    let profile_id = require_profile_id(&session).await?;

    let result = match_service.result(profile_id, match_id).await?;

    Ok((StatusCode::OK, Json(result)))
}

/// The caller's completed matches, most recent first
#[utoipa::path(
    get,
    path = "/api/match/history",
    tag = MATCH_TAG,
    responses(
        (status = 200, description = "Completed matches", body = Vec<MatchHistoryEntryDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn history(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let match_service = MatchService::new(&state.db);

    let profile_id = require_profile_id(&session).await?;

    let history = match_service.history(profile_id).await?;

    Ok((StatusCode::OK, Json(history)))
}
