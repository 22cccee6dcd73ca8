//! JSON helpers over the fetch API.
//!
//! Every call includes credentials so the session cookie rides along, and
//! failures decode the server's `ErrorDto` when one is present.

#[cfg(feature = "web")]
use reqwasm::http::{Request, Response};

#[cfg(feature = "web")]
use crate::model::{
    api::ErrorDto,
    chat::{ChatReplyDto, ChatRequestDto},
    game::{
        GameType, JoinQueueDto, MatchContentDto, MatchHistoryEntryDto, MatchResultDto,
        QueueStatusDto, ReportScoreDto,
    },
    leaderboard::LeaderboardEntryDto,
    user::{LoginDto, RegisterDto, UpdateAvatarDto, UserDto},
};

#[cfg(feature = "web")]
async fn error_message(response: Response) -> String {
    let status = response.status();

    if let Ok(error_dto) = response.json::<ErrorDto>().await {
        format!("Request failed with status {}: {}", status, error_dto.error)
    } else {
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        format!("Request failed with status {}: {}", status, error_text)
    }
}

#[cfg(feature = "web")]
async fn get_json<T: serde::de::DeserializeOwned>(path: &str) -> Result<T, String> {
    let response = Request::get(path)
        .credentials(reqwasm::http::RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    match response.status() {
        200 => response
            .json::<T>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e)),
        _ => Err(error_message(response).await),
    }
}

#[cfg(feature = "web")]
async fn send_json<B: serde::Serialize, T: serde::de::DeserializeOwned>(
    method: &str,
    path: &str,
    body: &B,
) -> Result<T, String> {
    let payload =
        serde_json::to_string(body).map_err(|e| format!("Failed to encode request: {}", e))?;

    let request = match method {
        "POST" => Request::post(path),
        "PUT" => Request::put(path),
        _ => Request::post(path),
    };

    let response = request
        .credentials(reqwasm::http::RequestCredentials::Include)
        .header("Content-Type", "application/json")
        .body(payload)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    match response.status() {
        200 | 201 => response
            .json::<T>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e)),
        _ => Err(error_message(response).await),
    }
}

/// Current user, None when the session holds no login (404).
#[cfg(feature = "web")]
pub async fn fetch_current_user() -> Result<Option<UserDto>, String> {
    let response = Request::get("/api/auth/user")
        .credentials(reqwasm::http::RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    match response.status() {
        200 => {
            let user = response
                .json::<UserDto>()
                .await
                .map_err(|e| format!("Failed to parse user data: {}", e))?;
            Ok(Some(user))
        }
        404 => Ok(None),
        _ => Err(error_message(response).await),
    }
}

#[cfg(feature = "web")]
pub async fn register(username: String, password: String) -> Result<UserDto, String> {
    send_json("POST", "/api/auth/register", &RegisterDto { username, password }).await
}

#[cfg(feature = "web")]
pub async fn login(username: String, password: String) -> Result<UserDto, String> {
    send_json("POST", "/api/auth/login", &LoginDto { username, password }).await
}

#[cfg(feature = "web")]
pub async fn logout() -> Result<(), String> {
    let response = Request::get("/api/auth/logout")
        .credentials(reqwasm::http::RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    match response.status() {
        200 => Ok(()),
        _ => Err(error_message(response).await),
    }
}

#[cfg(feature = "web")]
pub async fn update_avatar(avatar: String) -> Result<UserDto, String> {
    send_json("PUT", "/api/user/avatar", &UpdateAvatarDto { avatar }).await
}

#[cfg(feature = "web")]
pub async fn join_queue(game_type: GameType) -> Result<QueueStatusDto, String> {
    send_json("POST", "/api/matchmaking/join", &JoinQueueDto { game_type }).await
}

#[cfg(feature = "web")]
pub async fn queue_status() -> Result<QueueStatusDto, String> {
    get_json("/api/matchmaking/status").await
}

#[cfg(feature = "web")]
pub async fn leave_queue() -> Result<(), String> {
    let response = Request::delete("/api/matchmaking/leave")
        .credentials(reqwasm::http::RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    match response.status() {
        200 => Ok(()),
        _ => Err(error_message(response).await),
    }
}

#[cfg(feature = "web")]
pub async fn match_content(match_id: i32) -> Result<MatchContentDto, String> {
    get_json(&format!("/api/match/{}/content", match_id)).await
}

#[cfg(feature = "web")]
pub async fn report_score(match_id: i32, score: i32, total: i32) -> Result<MatchResultDto, String> {
    send_json(
        "POST",
        &format!("/api/match/{}/report", match_id),
        &ReportScoreDto { score, total },
    )
    .await
}

#[cfg(feature = "web")]
pub async fn match_result(match_id: i32) -> Result<MatchResultDto, String> {
    get_json(&format!("/api/match/{}", match_id)).await
}

#[cfg(feature = "web")]
pub async fn match_history() -> Result<Vec<MatchHistoryEntryDto>, String> {
    get_json("/api/match/history").await
}

#[cfg(feature = "web")]
pub async fn leaderboard() -> Result<Vec<LeaderboardEntryDto>, String> {
    get_json("/api/leaderboard").await
}

#[cfg(feature = "web")]
pub async fn send_chat(message: String) -> Result<ChatReplyDto, String> {
    send_json("POST", "/api/chat", &ChatRequestDto { message }).await
}
