use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use dioxus_logger::tracing;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        user::{LoginDto, RegisterDto, UserDto},
    },
    server::{
        error::Error,
        model::{app::AppState, session::SessionProfileId},
        service::{auth::AuthService, user::UserService},
    },
};

pub static AUTH_TAG: &str = "auth";

/// Register a new account and log it in
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Account created", body = UserDto),
        (status = 400, description = "Invalid username or password", body = ErrorDto),
        (status = 409, description = "Username already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    Json(body): Json<RegisterDto>,
) -> Result<impl IntoResponse, Error> {
    let auth_service = AuthService::new(&state.db);

    let user = auth_service.register(&body.username, &body.password).await?;

    SessionProfileId::insert(&session, user.id).await?;

    tracing::info!("Registered new profile {} ({})", user.username, user.id);

    Ok((StatusCode::CREATED, Json(user)))
}

/// Log in with username and password
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = UserDto),
        (status = 401, description = "Invalid username or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(body): Json<LoginDto>,
) -> Result<impl IntoResponse, Error> {
    let auth_service = AuthService::new(&state.db);

    let user = auth_service.verify(&body.username, &body.password).await?;

    // New session id on every successful login
    session.cycle_id().await?;
    SessionProfileId::insert(&session, user.id).await?;

    Ok((StatusCode::OK, Json(user)))
}

/// Log out the current user
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged out"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, Error> {
    session.clear().await;

    Ok(StatusCode::OK)
}

/// Get the currently logged in user
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user", body = UserDto),
        (status = 404, description = "No logged in user", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user_service = UserService::new(&state.db);

    let profile_id = SessionProfileId::get(&session).await?;

    let profile_id = if let Some(profile_id) = profile_id {
        profile_id
    } else {
        return Ok((
            StatusCode::NOT_FOUND,
            Json(ErrorDto {
                error: "User not found".to_string(),
            }),
        )
            .into_response());
    };

    let user = if let Some(user) = user_service.get_user(profile_id).await? {
        user
    } else {
        // Clear session for user not found in database
        session.clear().await;

        tracing::warn!(
            "Failed to find profile ID {} in database despite having an active session;
            cleared session for user, they will need to relog to fix",
            profile_id
        );

        return Ok((
            StatusCode::NOT_FOUND,
            Json(ErrorDto {
                error: "User not found".to_string(),
            }),
        )
            .into_response());
    };

    Ok((StatusCode::OK, Json(user)).into_response())
}
