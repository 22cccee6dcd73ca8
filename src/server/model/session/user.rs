use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::server::error::Error;

pub const SESSION_PROFILE_ID_KEY: &str = "readclash:profile:id";

#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionProfileId(pub String);

impl SessionProfileId {
    /// Insert profile ID into session
    pub async fn insert(session: &Session, profile_id: i32) -> Result<(), Error> {
        session
            .insert(SESSION_PROFILE_ID_KEY, SessionProfileId(profile_id.to_string()))
            .await?;

        Ok(())
    }

    /// Get profile ID from session
    pub async fn get(session: &Session) -> Result<Option<i32>, Error> {
        session
            .get::<SessionProfileId>(SESSION_PROFILE_ID_KEY)
            .await?
            .map(|SessionProfileId(id_str)| {
                id_str.parse::<i32>().map_err(|e| {
                    Error::ParseError(format!("Failed to parse session profile id: {}", e))
                })
            })
            .transpose()
    }
}
