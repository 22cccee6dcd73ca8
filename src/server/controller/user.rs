use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        user::{UpdateAvatarDto, UserDto},
    },
    server::{
        controller::util::require_profile_id,
        error::Error,
        model::app::AppState,
        service::user::UserService,
    },
};

pub static USER_TAG: &str = "user";

/// Switch the logged in user's avatar
#[utoipa::path(
    put,
    path = "/api/user/avatar",
    tag = USER_TAG,
    request_body = UpdateAvatarDto,
    responses(
        (status = 200, description = "Avatar updated", body = UserDto),
        (status = 400, description = "Unknown avatar key", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_avatar(
    State(state): State<AppState>,
    session: Session,
    Json(body): Json<UpdateAvatarDto>,
) -> Result<impl IntoResponse, Error> {
    let user_service = UserService::new(&state.db);

    let profile_id = require_profile_id(&session).await?;

    let user = user_service.update_avatar(profile_id, &body.avatar).await?;

    match user {
        Some(user) => Ok((StatusCode::OK, Json(user)).into_response()),
        None => Ok((
            StatusCode::NOT_FOUND,
            Json(ErrorDto {
                error: "User not found".to_string(),
            }),
        )
            .into_response()),
    }
}
