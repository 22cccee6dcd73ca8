//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their utoipa specifications,
//! and Swagger UI serves the interactive documentation at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI
/// documentation.
///
/// # Registered Endpoints
/// - `POST /api/auth/register` - Create an account and log it in
/// - `POST /api/auth/login` - Log in with username and password
/// - `GET /api/auth/logout` - Log out the current user
/// - `GET /api/auth/user` - Get current user information
/// - `PUT /api/user/avatar` - Switch the current user's avatar
/// - `POST /api/matchmaking/join` - Join the matchmaking queue
/// - `GET /api/matchmaking/status` - Poll the caller's queue state
/// - `DELETE /api/matchmaking/leave` - Leave the matchmaking queue
/// - `GET /api/match/history` - Completed matches of the caller
/// - `GET /api/match/{match_id}` - Match state for the caller
/// - `GET /api/match/{match_id}/content` - Quiz content of a match
/// - `POST /api/match/{match_id}/report` - Report a finished quiz score
/// - `GET /api/leaderboard` - Top players by experience
/// - `POST /api/chat` - Ask the chat tutor a question
///
/// # Returns
/// An Axum `Router<AppState>` ready to be merged into the main application
/// router.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "ReadClash", description = "ReadClash API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Authentication API routes"),
        (name = controller::user::USER_TAG, description = "Profile API routes"),
        (name = controller::matchmaking::MATCHMAKING_TAG, description = "Matchmaking queue API routes"),
        (name = controller::game::MATCH_TAG, description = "Match and quiz content API routes"),
        (name = controller::leaderboard::LEADERBOARD_TAG, description = "Leaderboard API routes"),
        (name = controller::chat::CHAT_TAG, description = "Chat tutor API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::register))
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::auth::get_user))
        .routes(routes!(controller::user::update_avatar))
        .routes(routes!(controller::matchmaking::join))
        .routes(routes!(controller::matchmaking::status))
        .routes(routes!(controller::matchmaking::leave))
        .routes(routes!(controller::game::history))
        .routes(routes!(controller::game::result))
        .routes(routes!(controller::game::content))
        .routes(routes!(controller::game::report))
        .routes(routes!(controller::leaderboard::get_leaderboard))
        .routes(routes!(controller::chat::chat))
        .split_for_parts();

    let routes = routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api));

    routes
}
