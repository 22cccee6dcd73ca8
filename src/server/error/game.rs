use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum MatchError {
    #[error("Match not found")]
    MatchNotFound,
    #[error("You are not a participant of this match")]
    NotParticipant,
    #[error("You already have a pending queue entry")]
    AlreadyQueued,
    #[error("Score already reported for this match")]
    AlreadyReported,
    #[error("Match is already completed")]
    MatchCompleted,
    #[error("Invalid score report: {0}")]
    InvalidReport(String),
    /// No seeded content available to build a match from.
    #[error("No quiz content available")]
    ContentUnavailable,
}

impl IntoResponse for MatchError {
    fn into_response(self) -> Response {
        let status = match &self {
            MatchError::MatchNotFound => StatusCode::NOT_FOUND,
            MatchError::NotParticipant => StatusCode::FORBIDDEN,
            MatchError::AlreadyQueued
            | MatchError::AlreadyReported
            | MatchError::MatchCompleted => StatusCode::CONFLICT,
            MatchError::InvalidReport(_) => StatusCode::BAD_REQUEST,
            MatchError::ContentUnavailable => StatusCode::SERVICE_UNAVAILABLE,
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
