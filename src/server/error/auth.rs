use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;
use crate::server::error::InternalServerError;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Username is already taken")]
    UsernameTaken,
    #[error("Invalid username or password")]
    InvalidCredentials,
    #[error("Invalid username: {0}")]
    InvalidUsername(String),
    #[error("Invalid password: {0}")]
    InvalidPassword(String),
    #[error("Not logged in")]
    NotLoggedIn,
    #[error("Unknown avatar: {0}")]
    InvalidAvatar(String),
    /// Hashing/verification machinery failed, not a bad password.
    #[error("Password hashing error: {0}")]
    PasswordHash(String),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = match &self {
            AuthError::UsernameTaken => StatusCode::CONFLICT,
            AuthError::InvalidCredentials | AuthError::NotLoggedIn => StatusCode::UNAUTHORIZED,
            AuthError::InvalidUsername(_)
            | AuthError::InvalidPassword(_)
            | AuthError::InvalidAvatar(_) => StatusCode::BAD_REQUEST,
            AuthError::PasswordHash(_) => return InternalServerError(self).into_response(),
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
