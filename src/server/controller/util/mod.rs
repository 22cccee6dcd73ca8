use tower_sessions::Session;

use crate::server::{
    error::{auth::AuthError, Error},
    model::session::SessionProfileId,
};

/// The logged-in profile ID, or [`AuthError::NotLoggedIn`].
pub async fn require_profile_id(session: &Session) -> Result<i32, Error> {
    SessionProfileId::get(session)
        .await?
        .ok_or_else(|| AuthError::NotLoggedIn.into())
}
