use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        chat::{ChatReplyDto, ChatRequestDto},
    },
    server::{controller::util::require_profile_id, error::Error, model::app::AppState},
};

pub static CHAT_TAG: &str = "chat";

/// Ask the chat tutor a question
///
/// Always answers: provider failures degrade to a canned reply rather than an
/// error response.
#[utoipa::path(
    post,
    path = "/api/chat",
    tag = CHAT_TAG,
    request_body = ChatRequestDto,
    responses(
        (status = 200, description = "Tutor reply", body = ChatReplyDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn chat(
    State(state): State<AppState>,
    session: Session,
    Json(body): Json<ChatRequestDto>,
) -> Result<impl IntoResponse, Error> {
    require_profile_id(&session).await?;

    let reply = state.chat.respond(&body.message).await;

    Ok((StatusCode::OK, Json(reply)))
}
